use std::fmt;

/// The kind of scalar that can appear in a callable's signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Kind {
    Bool,
    Int,
    Long,
    Float,
    Double,
}

impl Kind {
    /// Returns `true` for the integer and floating point kinds.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        !matches!(self, Kind::Bool)
    }

    /// Returns `true` if a value of this kind silently converts into `target`.
    ///
    /// Numeric kinds convert into each other the way an `as` cast does.
    /// `Bool` only converts into `Bool`.
    #[must_use]
    pub const fn converts_to(self, target: Kind) -> bool {
        self.is_numeric() == target.is_numeric()
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Bool => "bool",
            Kind::Int => "i32",
            Kind::Long => "i64",
            Kind::Float => "f32",
            Kind::Double => "f64",
        };
        f.write_str(name)
    }
}

/// A single scalar argument or result, tagged with its kind.
///
/// `Display` prints the underlying value, so `Value::Double(6.0)` prints as
/// `6` and `Value::Float(2.5)` as `2.5`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Value {
    Bool(bool),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
}

impl Value {
    #[must_use]
    pub const fn kind(self) -> Kind {
        match self {
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::Long(_) => Kind::Long,
            Value::Float(_) => Kind::Float,
            Value::Double(_) => Kind::Double,
        }
    }

    /// Converts this value into a scalar of type `T`.
    #[must_use]
    pub fn get<T: Scalar>(self) -> T {
        T::from_value(self)
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Int(0)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => v.fmt(f),
            Value::Int(v) => v.fmt(f),
            Value::Long(v) => v.fmt(f),
            Value::Float(v) => v.fmt(f),
            Value::Double(v) => v.fmt(f),
        }
    }
}

/// A type that can be passed to, or returned from, an adapted callable.
///
/// Conversion out of a [`Value`] is total. Numeric values are cast the way
/// `as` casts them. Mixing `bool` and numeric kinds is rejected when a
/// [`Plan`](crate::Plan) is bound, so those arms only exist to keep the
/// conversion infallible.
pub trait Scalar: Copy {
    const KIND: Kind;

    fn into_value(self) -> Value;

    fn from_value(value: Value) -> Self;
}

impl Scalar for bool {
    const KIND: Kind = Kind::Bool;

    fn into_value(self) -> Value {
        Value::Bool(self)
    }

    fn from_value(value: Value) -> Self {
        match value {
            Value::Bool(v) => v,
            Value::Int(v) => v != 0,
            Value::Long(v) => v != 0,
            Value::Float(v) => v != 0.0,
            Value::Double(v) => v != 0.0,
        }
    }
}

impl Scalar for i32 {
    const KIND: Kind = Kind::Int;

    fn into_value(self) -> Value {
        Value::Int(self)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn from_value(value: Value) -> Self {
        match value {
            Value::Bool(v) => i32::from(v),
            Value::Int(v) => v,
            Value::Long(v) => v as i32,
            Value::Float(v) => v as i32,
            Value::Double(v) => v as i32,
        }
    }
}

impl Scalar for i64 {
    const KIND: Kind = Kind::Long;

    fn into_value(self) -> Value {
        Value::Long(self)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn from_value(value: Value) -> Self {
        match value {
            Value::Bool(v) => i64::from(v),
            Value::Int(v) => i64::from(v),
            Value::Long(v) => v,
            Value::Float(v) => v as i64,
            Value::Double(v) => v as i64,
        }
    }
}

impl Scalar for f32 {
    const KIND: Kind = Kind::Float;

    fn into_value(self) -> Value {
        Value::Float(self)
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn from_value(value: Value) -> Self {
        match value {
            Value::Bool(v) => f32::from(u8::from(v)),
            Value::Int(v) => v as f32,
            Value::Long(v) => v as f32,
            Value::Float(v) => v,
            Value::Double(v) => v as f32,
        }
    }
}

impl Scalar for f64 {
    const KIND: Kind = Kind::Double;

    fn into_value(self) -> Value {
        Value::Double(self)
    }

    #[allow(clippy::cast_precision_loss)]
    fn from_value(value: Value) -> Self {
        match value {
            Value::Bool(v) => f64::from(u8::from(v)),
            Value::Int(v) => f64::from(v),
            Value::Long(v) => v as f64,
            Value::Float(v) => f64::from(v),
            Value::Double(v) => v,
        }
    }
}

macro_rules! value_from {
    ($($T:ty),*) => {
        $(
            impl From<$T> for Value {
                fn from(value: $T) -> Self {
                    value.into_value()
                }
            }
        )*
    };
}

value_from!(bool, i32, i64, f32, f64);

/// A tuple of [`Scalar`]s used as a callable's argument list.
///
/// Implemented for tuples of up to six elements.
pub trait ArgList: Copy {
    /// The kind of each position, in order.
    const KINDS: &'static [Kind];

    fn into_values(self) -> Vec<Value>;

    /// Builds the tuple from `values`, converting each position as needed.
    ///
    /// Missing trailing values fall back to [`Value::default`], which is
    /// `Value::Int(0)` converted to the position's kind. Extra values are
    /// ignored.
    fn from_values(values: &[Value]) -> Self;
}

macro_rules! arg_list {
    ($($T:ident),*) => {
        impl<$($T: Scalar),*> ArgList for ($($T,)*) {
            const KINDS: &'static [Kind] = &[$($T::KIND),*];

            #[allow(non_snake_case)]
            fn into_values(self) -> Vec<Value> {
                let ($($T,)*) = self;
                vec![$($T.into_value()),*]
            }

            #[allow(unused_variables, unused_mut, clippy::unused_unit)]
            fn from_values(values: &[Value]) -> Self {
                let mut values = values.iter().copied();
                ($($T::from_value(values.next().unwrap_or_default()),)*)
            }
        }
    };
}

arg_list!();
arg_list!(A);
arg_list!(A, B);
arg_list!(A, B, C);
arg_list!(A, B, C, D);
arg_list!(A, B, C, D, E);
arg_list!(A, B, C, D, E, F);

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn numeric_kinds_convert_into_each_other() {
        let numeric = [Kind::Int, Kind::Long, Kind::Float, Kind::Double];
        for from in numeric {
            for to in numeric {
                assert!(from.converts_to(to), "{from} -> {to}");
            }
            assert!(!from.converts_to(Kind::Bool));
            assert!(!Kind::Bool.converts_to(from));
        }
        assert!(Kind::Bool.converts_to(Kind::Bool));
    }

    #[test]
    fn casts_follow_as_semantics() {
        assert_eq!(Value::Double(2.9).get::<i32>(), 2);
        assert_eq!(Value::Float(-1.5).get::<i64>(), -1);
        assert_relative_eq!(Value::Int(3).get::<f32>(), 3.0);
        assert_relative_eq!(Value::Float(2.0).get::<f64>(), 2.0);
        assert_relative_eq!(Value::Long(7).get::<f64>(), 7.0);
    }

    #[test]
    fn display_uses_shortest_form() {
        assert_eq!(Value::Double(6.0).to_string(), "6");
        assert_eq!(Value::Float(2.0).to_string(), "2");
        assert_eq!(Value::Float(2.5).to_string(), "2.5");
        assert_eq!(Value::Long(0).to_string(), "0");
        assert_eq!(Value::Bool(true).to_string(), "true");
    }

    #[test]
    fn arg_list_kinds_follow_tuple_order() {
        assert_eq!(
            <(i32, f32, f64)>::KINDS,
            &[Kind::Int, Kind::Float, Kind::Double]
        );
        assert!(<()>::KINDS.is_empty());
    }

    #[test]
    fn arg_list_values() {
        let values = (1_i32, 2.0_f32, 3.0_f64).into_values();
        assert_eq!(
            values,
            vec![Value::Int(1), Value::Float(2.0), Value::Double(3.0)]
        );

        let (x, z, y, xx) = <(i32, f64, f32, i64)>::from_values(&[
            Value::Int(1),
            Value::Double(3.0),
            Value::Float(2.0),
            Value::Long(0),
        ]);
        assert_eq!(x, 1);
        assert_relative_eq!(z, 3.0);
        assert_relative_eq!(y, 2.0);
        assert_eq!(xx, 0);
    }

    #[test]
    fn from_values_fills_missing_positions_with_zero() {
        let (a, b, c) = <(i32, f64, bool)>::from_values(&[Value::Int(5)]);
        assert_eq!(a, 5);
        assert_relative_eq!(b, 0.0);
        assert!(!c);
    }

    #[test]
    fn from_values_converts_each_position() {
        let (a, b) = <(f64, i64)>::from_values(&[Value::Int(4), Value::Double(9.7)]);
        assert_relative_eq!(a, 4.0);
        assert_eq!(b, 9);
    }
}
