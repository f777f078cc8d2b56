use std::marker::PhantomData;

use crate::{ArgList, Callable, Invoke, Recorder, Scalar};

/// A wrapper that allows using function items and closures as adapters.
///
/// The function's native signature is the call signature, so arguments are
/// forwarded unchanged and recorded as received.
pub(crate) struct Function<F, A> {
    function: F,
    recorder: Recorder,
    _marker: PhantomData<A>,
}

impl<F, A> Function<F, A> {
    pub(crate) const fn new(function: F, recorder: Recorder) -> Self {
        Self {
            function,
            recorder,
            _marker: PhantomData,
        }
    }
}

impl<F, A> Callable for Function<F, A>
where
    F: Invoke<A>,
    A: ArgList,
    F::Output: Scalar,
{
    type Input = A;
    type Output = F::Output;

    fn call(&self, input: A) -> Self::Output {
        let output = self.function.invoke(input);
        self.recorder.emit(input.into_values(), output.into_value());
        output
    }
}
