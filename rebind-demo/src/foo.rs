//! The callables the demo stores, one per way of wrapping.

use rebind_core::Callable;

/// The signature every stored callable is presented as.
pub type Target = (i32, f32, f64);

/// A free function with exactly the target signature.
pub fn foo_fn(x: i32, y: f32, z: f64) -> f64 {
    f64::from(x) + f64::from(y) + z
}

/// A receiver with two methods and a call operator of its own.
#[derive(Debug, Default)]
pub struct FooStruct;

impl FooStruct {
    /// Same parameters as the target signature.
    pub fn foo_fn(&self, x: i32, y: f32, z: f64) -> f64 {
        f64::from(x) + f64::from(y) + z
    }

    /// One more parameter than the target, with `y` and `z` swapped.
    #[allow(clippy::cast_precision_loss)]
    pub fn foo_fn_4(&self, x: i32, z: f64, y: f32, xx: i64) -> f64 {
        f64::from(x) + f64::from(y) + z + xx as f64
    }
}

impl Callable for FooStruct {
    type Input = Target;
    type Output = f64;

    fn call(&self, (x, y, z): Target) -> f64 {
        f64::from(x) + f64::from(y) + z
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn all_sum_their_arguments() {
        let foo = FooStruct;
        assert_relative_eq!(foo_fn(1, 2.0, 3.0), 6.0);
        assert_relative_eq!(foo.foo_fn(1, 2.0, 3.0), 6.0);
        assert_relative_eq!(foo.foo_fn_4(1, 3.0, 2.0, 0), 6.0);
        assert_relative_eq!(foo.foo_fn_4(1, 3.0, 2.0, 4), 10.0);
        assert_relative_eq!(foo.call((1, 2.0, 3.0)), 6.0);
    }
}
