use std::{marker::PhantomData, rc::Rc};

use crate::{ArgList, BindError, Callable, Method, Plan, Recorder, Scalar};

/// A method bound to a shared receiver through a [`Plan`].
///
/// The call signature `I` and the native signature `N` may differ in
/// arity, order, and kinds. The plan is checked once in [`Rebound::new`],
/// so a constructed `Rebound` cannot fail when called.
pub(crate) struct Rebound<R: ?Sized, M, I, N> {
    receiver: Rc<R>,
    method: M,
    plan: Plan,
    recorder: Recorder,
    _marker: PhantomData<(I, N)>,
}

impl<R, M, I, N> Rebound<R, M, I, N>
where
    R: ?Sized,
    M: Method<R, N>,
    I: ArgList,
    N: ArgList,
{
    /// Binds `method` to `receiver`, rejecting a plan that does not fit.
    pub(crate) fn new(
        receiver: Rc<R>,
        method: M,
        plan: Plan,
        recorder: Recorder,
    ) -> Result<Self, BindError> {
        if let Err(error) = plan.check(I::KINDS, N::KINDS) {
            tracing::debug!(origin = recorder.origin(), %error, "plan rejected");
            return Err(error);
        }

        tracing::debug!(
            origin = recorder.origin(),
            slots = ?plan.slots(),
            "plan accepted"
        );

        Ok(Self {
            receiver,
            method,
            plan,
            recorder,
            _marker: PhantomData,
        })
    }
}

impl<R, M, I, N> Callable for Rebound<R, M, I, N>
where
    R: ?Sized,
    M: Method<R, N>,
    I: ArgList,
    N: ArgList,
    M::Output: Scalar,
{
    type Input = I;
    type Output = M::Output;

    fn call(&self, input: I) -> Self::Output {
        let arranged = self.plan.arrange(&input.into_values());
        let native = N::from_values(&arranged);
        let output = self.method.call_on(&*self.receiver, native);
        self.recorder.emit(native.into_values(), output.into_value());
        output
    }
}
