use crate::{ArgList, Callable, Recorder, Scalar};

/// A wrapper that records calls to a directly invocable object.
pub(crate) struct Object<C> {
    object: C,
    recorder: Recorder,
}

impl<C> Object<C> {
    pub(crate) const fn new(object: C, recorder: Recorder) -> Self {
        Self { object, recorder }
    }
}

impl<C> Callable for Object<C>
where
    C: Callable,
    C::Input: ArgList,
    C::Output: Scalar,
{
    type Input = C::Input;
    type Output = C::Output;

    fn call(&self, input: Self::Input) -> Self::Output {
        let output = self.object.call(input);
        self.recorder.emit(input.into_values(), output.into_value());
        output
    }
}
