/// A function that can be called with its arguments packed into a tuple.
///
/// Implemented for every `Fn` taking up to six arguments, which covers both
/// function items and closures.
pub trait Invoke<Args> {
    type Output;

    fn invoke(&self, args: Args) -> Self::Output;
}

/// A method that can be called on a receiver with its remaining arguments
/// packed into a tuple.
///
/// Implemented for every `Fn(&R, ...)` taking up to six further arguments,
/// so a path such as `Point::offset` can be used directly.
pub trait Method<R: ?Sized, Args> {
    type Output;

    fn call_on(&self, receiver: &R, args: Args) -> Self::Output;
}

macro_rules! invoke_tuple {
    ($($T:ident),*) => {
        impl<Func, Out, $($T),*> Invoke<($($T,)*)> for Func
        where
            Func: Fn($($T),*) -> Out,
        {
            type Output = Out;

            #[allow(non_snake_case)]
            fn invoke(&self, args: ($($T,)*)) -> Out {
                let ($($T,)*) = args;
                (self)($($T),*)
            }
        }

        impl<Func, Recv, Out, $($T),*> Method<Recv, ($($T,)*)> for Func
        where
            Recv: ?Sized,
            Func: Fn(&Recv, $($T),*) -> Out,
        {
            type Output = Out;

            #[allow(non_snake_case)]
            fn call_on(&self, receiver: &Recv, args: ($($T,)*)) -> Out {
                let ($($T,)*) = args;
                (self)(receiver, $($T),*)
            }
        }
    };
}

invoke_tuple!();
invoke_tuple!(A);
invoke_tuple!(A, B);
invoke_tuple!(A, B, C);
invoke_tuple!(A, B, C, D);
invoke_tuple!(A, B, C, D, E);
invoke_tuple!(A, B, C, D, E, F);
