//! Stores a function, two bound methods, a callable object, and a closure
//! behind one signature and calls them in order.

mod foo;

use std::rc::Rc;

use rebind_core::{Adapter, BindError, Bindings, Plan, Recorder, Sink, Slot};

pub use foo::{FooStruct, Target, foo_fn};

/// The arguments every stored callable is called with.
pub const ARGUMENTS: Target = (1, 2.0, 3.0);

/// The line printed before the stored callables run.
#[must_use]
pub fn summary((x, y, z): Target) -> String {
    format!("Test stored functions with arguments: x = {x}, y = {y}, z = {z}")
}

/// Builds one adapter of each kind, all recording to `sink`.
///
/// `FooStruct::foo_fn_4` takes `(x, z, y, xx)`, so it is bound with a plan
/// that swaps the last two arguments and fixes `xx` at zero.
///
/// # Errors
///
/// Returns a [`BindError`] if the plan for `FooStruct::foo_fn_4` does not
/// fit its signature.
pub fn bindings(sink: &Rc<dyn Sink>) -> Result<Bindings<Target, f64>, BindError> {
    let recorder = |origin: &'static str| Recorder::new(origin, Rc::clone(sink));
    let foo = Rc::new(FooStruct);

    let mut bindings = Bindings::new();

    bindings.push(Adapter::function(foo_fn, recorder("foo_fn")));

    bindings.push(Adapter::method(
        Rc::clone(&foo),
        FooStruct::foo_fn,
        recorder("FooStruct::foo_fn"),
    ));

    bindings.push(Adapter::adapted(
        Rc::clone(&foo),
        FooStruct::foo_fn_4,
        Plan::new([
            Slot::arg(0),
            Slot::arg(2),
            Slot::arg(1),
            Slot::fixed(0_i64),
        ]),
        recorder("FooStruct::foo_fn_4"),
    )?);

    bindings.push(Adapter::object(FooStruct, recorder("FooStruct::call")));

    bindings.push(Adapter::closure(
        |x: i32, y: f32, z: f64| f64::from(x) + f64::from(y) + z,
        recorder("closure"),
    ));

    Ok(bindings)
}

/// Builds the adapters and calls each with [`ARGUMENTS`].
///
/// # Errors
///
/// Returns a [`BindError`] if an adapter cannot be bound.
pub fn run(sink: &Rc<dyn Sink>) -> Result<(), BindError> {
    let bindings = bindings(sink)?;
    tracing::info!(adapters = bindings.len(), "calling stored functions");
    bindings.invoke_all(ARGUMENTS);
    Ok(())
}
