/// A trait representing a value that can be invoked like a function.
///
/// `Callable` is the capability every adapter presents. A type whose
/// instances are directly invocable implements it once, and can then be
/// wrapped with [`Adapter::object`](crate::Adapter::object) without naming a
/// separate method.
///
/// Arguments are passed as a single tuple so one trait covers any arity.
/// Implementations should be deterministic unless they read shared state
/// that is mutated on purpose between calls.
///
/// # Example
///
/// ```rust
/// use rebind_core::Callable;
///
/// struct Offset {
///     by: f64,
/// }
///
/// impl Callable for Offset {
///     type Input = (i32, f32);
///     type Output = f64;
///
///     fn call(&self, (x, y): (i32, f32)) -> f64 {
///         f64::from(x) + f64::from(y) + self.by
///     }
/// }
///
/// let offset = Offset { by: 0.5 };
/// assert_eq!(offset.call((1, 2.0)), 3.5);
/// ```
pub trait Callable {
    type Input;
    type Output;

    fn call(&self, input: Self::Input) -> Self::Output;
}

impl<C> Callable for &C
where
    C: Callable + ?Sized,
{
    type Input = C::Input;
    type Output = C::Output;

    fn call(&self, input: Self::Input) -> Self::Output {
        (**self).call(input)
    }
}

impl<C> Callable for Box<C>
where
    C: Callable + ?Sized,
{
    type Input = C::Input;
    type Output = C::Output;

    fn call(&self, input: Self::Input) -> Self::Output {
        (**self).call(input)
    }
}

impl<C> Callable for std::rc::Rc<C>
where
    C: Callable + ?Sized,
{
    type Input = C::Input;
    type Output = C::Output;

    fn call(&self, input: Self::Input) -> Self::Output {
        (**self).call(input)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;

    struct AddOne;

    impl Callable for AddOne {
        type Input = (i32,);
        type Output = i32;

        fn call(&self, (input,): (i32,)) -> i32 {
            input + 1
        }
    }

    #[test]
    fn forwards_through_pointers() {
        assert_eq!(AddOne.call((1,)), 2);
        assert_eq!((&AddOne).call((2,)), 3);
        assert_eq!(Box::new(AddOne).call((3,)), 4);
        assert_eq!(Rc::new(AddOne).call((4,)), 5);

        let boxed: Box<dyn Callable<Input = (i32,), Output = i32>> = Box::new(AddOne);
        assert_eq!(boxed.call((5,)), 6);
    }
}
