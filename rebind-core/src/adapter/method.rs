use std::{marker::PhantomData, rc::Rc};

use crate::{ArgList, Callable, Method, Recorder, Scalar};

/// A method bound to a shared receiver, called with arguments in the order
/// they arrive.
pub(crate) struct BoundMethod<R: ?Sized, M, A> {
    receiver: Rc<R>,
    method: M,
    recorder: Recorder,
    _marker: PhantomData<A>,
}

impl<R: ?Sized, M, A> BoundMethod<R, M, A> {
    pub(crate) fn new(receiver: Rc<R>, method: M, recorder: Recorder) -> Self {
        Self {
            receiver,
            method,
            recorder,
            _marker: PhantomData,
        }
    }
}

impl<R, M, A> Callable for BoundMethod<R, M, A>
where
    R: ?Sized,
    M: Method<R, A>,
    A: ArgList,
    M::Output: Scalar,
{
    type Input = A;
    type Output = M::Output;

    fn call(&self, input: A) -> Self::Output {
        let output = self.method.call_on(&*self.receiver, input);
        self.recorder.emit(input.into_values(), output.into_value());
        output
    }
}
