//! Adapters that present differently shaped callables through one signature.
//!
//! This crate lets functions, bound methods, callable objects, and closures
//! be stored side by side and called the same way:
//!
//! - [`Callable`] — the capability every adapter presents
//! - [`Adapter`] — a boxed callable of any origin, exposed as `I -> O`
//! - [`Plan`] — an explicit argument mapping for binding a method whose
//!   parameters differ from the call signature
//! - [`Bindings`] — an ordered collection of adapters called in turn
//! - [`Recorder`] and [`Sink`] — where each call's [`CallRecord`] goes

mod adapter;
mod bindings;
mod callable;
mod invoke;
mod plan;
mod record;
mod value;

pub use adapter::{Adapter, Origin};
pub use bindings::Bindings;
pub use callable::Callable;
pub use invoke::{Invoke, Method};
pub use plan::{BindError, Plan, Slot};
pub use record::{CallRecord, Discard, Journal, Recorder, Sink, Stdout, write_line};
pub use value::{ArgList, Kind, Scalar, Value};
