mod function;
mod method;
mod object;
mod rebound;

use std::{fmt, rc::Rc};

use crate::{ArgList, BindError, Callable, Invoke, Method, Plan, Recorder, Scalar};

/// The kind of callable an [`Adapter`] was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Origin {
    Function,
    BoundMethod,
    AdaptedMethod,
    CallableObject,
    Closure,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Origin::Function => "function",
            Origin::BoundMethod => "bound method",
            Origin::AdaptedMethod => "adapted method",
            Origin::CallableObject => "callable object",
            Origin::Closure => "closure",
        };
        f.write_str(name)
    }
}

/// A callable of any concrete type, presented as `I -> O`.
///
/// An `Adapter` hides how a call is dispatched. Whether it wraps a function,
/// a bound method with reordered arguments, an object, or a closure, it is
/// invoked through [`Callable::call`] with an `I` tuple and returns an `O`.
///
/// ## Constructing adapters
///
/// - [`Adapter::function`] – A function item whose signature is `I -> O`.
/// - [`Adapter::method`] – A method on a shared receiver taking `I`.
/// - [`Adapter::adapted`] – A method whose parameters differ from `I`,
///   bound through a [`Plan`].
/// - [`Adapter::object`] – A value that implements [`Callable`] itself.
/// - [`Adapter::closure`] – An inline closure taking `I`.
///
/// All binding is resolved at construction. A mismatch between an exact
/// signature and `I -> O` is a compile error, and a [`Plan`] that does not
/// fit is rejected by [`Adapter::adapted`] before the adapter exists.
///
/// ## Recording calls
///
/// Every call emits one [`CallRecord`](crate::CallRecord) through the
/// adapter's [`Recorder`], listing the arguments in the wrapped callable's
/// native order along with the result.
///
/// # Example
///
/// ```rust
/// use std::rc::Rc;
///
/// use rebind_core::{Adapter, Callable, Journal, Plan, Recorder, Slot};
///
/// struct Scale {
///     factor: f64,
/// }
///
/// impl Scale {
///     fn apply(&self, offset: i64, value: f64) -> f64 {
///         value * self.factor + offset as f64
///     }
/// }
///
/// let journal = Journal::new();
/// let scale = Rc::new(Scale { factor: 2.0 });
///
/// let adapter: Adapter<(f32,), f64> = Adapter::adapted(
///     scale,
///     Scale::apply,
///     Plan::new([Slot::fixed(1_i64), Slot::arg(0)]),
///     Recorder::new("scale", Rc::new(journal.clone())),
/// )
/// .unwrap();
///
/// assert_eq!(adapter.call((4.0,)), 9.0);
/// assert_eq!(
///     journal.lines(),
///     ["scale called with arguments: 1, 4 result is : 9"]
/// );
/// ```
pub struct Adapter<I, O> {
    origin: Origin,
    inner: Box<dyn Callable<Input = I, Output = O>>,
}

impl<I, O> Adapter<I, O>
where
    I: ArgList + 'static,
    O: Scalar + 'static,
{
    /// Wraps a function whose signature is exactly `I -> O`.
    pub fn function<F>(function: F, recorder: Recorder) -> Self
    where
        F: Invoke<I, Output = O> + 'static,
    {
        Self::new(Origin::Function, function::Function::new(function, recorder))
    }

    /// Binds a method taking exactly `I` to a shared receiver.
    ///
    /// The receiver is shared, not copied. Adapters bound to the same
    /// receiver observe any interior mutation of it.
    pub fn method<R, M>(receiver: Rc<R>, method: M, recorder: Recorder) -> Self
    where
        R: ?Sized + 'static,
        M: Method<R, I, Output = O> + 'static,
    {
        Self::new(
            Origin::BoundMethod,
            method::BoundMethod::new(receiver, method, recorder),
        )
    }

    /// Binds a method with a different native signature to a shared receiver.
    ///
    /// The `plan` names, for each native parameter in order, which call-time
    /// argument feeds it or which fixed value it receives. Values are
    /// converted to the native kinds on every call.
    ///
    /// # Errors
    ///
    /// Returns a [`BindError`] if the plan's slot count differs from the
    /// method's arity, forwards an argument `I` does not have, or feeds a
    /// parameter with a value that cannot be converted to its kind.
    pub fn adapted<R, M, N>(
        receiver: Rc<R>,
        method: M,
        plan: Plan,
        recorder: Recorder,
    ) -> Result<Self, BindError>
    where
        R: ?Sized + 'static,
        M: Method<R, N, Output = O> + 'static,
        N: ArgList + 'static,
    {
        let rebound = rebound::Rebound::<R, M, I, N>::new(receiver, method, plan, recorder)?;
        Ok(Self::new(Origin::AdaptedMethod, rebound))
    }

    /// Wraps a value that is itself callable with `I`.
    pub fn object<C>(object: C, recorder: Recorder) -> Self
    where
        C: Callable<Input = I, Output = O> + 'static,
    {
        Self::new(Origin::CallableObject, object::Object::new(object, recorder))
    }

    /// Wraps a closure taking exactly `I`.
    pub fn closure<F>(closure: F, recorder: Recorder) -> Self
    where
        F: Invoke<I, Output = O> + 'static,
    {
        Self::new(Origin::Closure, function::Function::new(closure, recorder))
    }

    fn new<C>(origin: Origin, callable: C) -> Self
    where
        C: Callable<Input = I, Output = O> + 'static,
    {
        tracing::debug!(%origin, "adapter created");
        Self {
            origin,
            inner: Box::new(callable),
        }
    }
}

impl<I, O> Adapter<I, O> {
    #[must_use]
    pub fn origin(&self) -> Origin {
        self.origin
    }
}

impl<I, O> Callable for Adapter<I, O> {
    type Input = I;
    type Output = O;

    fn call(&self, input: I) -> O {
        tracing::trace!(origin = %self.origin, "adapter called");
        self.inner.call(input)
    }
}

impl<I, O> fmt::Debug for Adapter<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Adapter")
            .field("origin", &self.origin)
            .finish_non_exhaustive()
    }
}
