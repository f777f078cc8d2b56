use thiserror::Error;

use crate::{Kind, Value};

/// Where one native parameter of a bound method gets its value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Slot {
    /// Forwards the call-time argument at this index.
    Arg(usize),
    /// Supplies the same literal on every call.
    Fixed(Value),
}

impl Slot {
    #[must_use]
    pub const fn arg(index: usize) -> Self {
        Slot::Arg(index)
    }

    pub fn fixed(value: impl Into<Value>) -> Self {
        Slot::Fixed(value.into())
    }
}

/// Errors that can occur when checking a [`Plan`] against two signatures.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BindError {
    #[error("plan has {found} slots but the method takes {expected} arguments")]
    Arity { expected: usize, found: usize },

    #[error("slot {slot} forwards argument {index} but the call signature has {arity}")]
    ArgumentOutOfRange {
        slot: usize,
        index: usize,
        arity: usize,
    },

    #[error("slot {slot} cannot convert {from} into {to}")]
    Unconvertible { slot: usize, from: Kind, to: Kind },
}

/// An explicit mapping from a call signature to a method's native parameters.
///
/// A plan has one [`Slot`] per native parameter, in native order. Each slot
/// either forwards a call-time argument by index or supplies a fixed value.
/// Call-time arguments may be forwarded more than once or not at all.
///
/// # Example
///
/// Presenting `(x, y, z)` to a method declared as `(x, z, y, xx)` with
/// `xx` fixed at zero:
///
/// ```rust
/// use rebind_core::{Kind, Plan, Slot};
///
/// let plan = Plan::new([
///     Slot::arg(0),
///     Slot::arg(2),
///     Slot::arg(1),
///     Slot::fixed(0_i64),
/// ]);
///
/// let target = [Kind::Int, Kind::Float, Kind::Double];
/// let native = [Kind::Int, Kind::Double, Kind::Float, Kind::Long];
/// assert!(plan.check(&target, &native).is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Plan {
    slots: Vec<Slot>,
}

impl Plan {
    pub fn new(slots: impl IntoIterator<Item = Slot>) -> Self {
        Self {
            slots: slots.into_iter().collect(),
        }
    }

    /// A plan that forwards each of `arity` arguments to the same position.
    #[must_use]
    pub fn identity(arity: usize) -> Self {
        Self::new((0..arity).map(Slot::Arg))
    }

    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Checks that this plan can feed a method with `native` parameters from
    /// a call with `target` arguments.
    ///
    /// # Errors
    ///
    /// Returns the first problem found, checking arity before the slots.
    pub fn check(&self, target: &[Kind], native: &[Kind]) -> Result<(), BindError> {
        if self.slots.len() != native.len() {
            return Err(BindError::Arity {
                expected: native.len(),
                found: self.slots.len(),
            });
        }

        for (slot, (source, &to)) in self.slots.iter().zip(native).enumerate() {
            let from = match *source {
                Slot::Arg(index) => {
                    *target.get(index).ok_or(BindError::ArgumentOutOfRange {
                        slot,
                        index,
                        arity: target.len(),
                    })?
                }
                Slot::Fixed(value) => value.kind(),
            };

            if !from.converts_to(to) {
                return Err(BindError::Unconvertible { slot, from, to });
            }
        }

        Ok(())
    }

    /// Lays out call-time `args` in native order.
    ///
    /// Values keep their call-time kind; conversion to the native kinds
    /// happens when the native tuple is built. Only called on a plan that
    /// passed [`Plan::check`], so every forwarded index is in range.
    #[must_use]
    pub(crate) fn arrange(&self, args: &[Value]) -> Vec<Value> {
        self.slots
            .iter()
            .map(|slot| match *slot {
                Slot::Arg(index) => args.get(index).copied().unwrap_or_default(),
                Slot::Fixed(value) => value,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TARGET: [Kind; 3] = [Kind::Int, Kind::Float, Kind::Double];

    fn reorder_plan() -> Plan {
        Plan::new([
            Slot::arg(0),
            Slot::arg(2),
            Slot::arg(1),
            Slot::fixed(0_i64),
        ])
    }

    #[test]
    fn arranges_arguments_in_native_order() {
        let args = [Value::Int(1), Value::Float(2.0), Value::Double(3.0)];

        assert_eq!(
            reorder_plan().arrange(&args),
            vec![
                Value::Int(1),
                Value::Double(3.0),
                Value::Float(2.0),
                Value::Long(0),
            ]
        );
    }

    #[test]
    fn accepts_conversions_between_numeric_kinds() {
        let native = [Kind::Int, Kind::Double, Kind::Float, Kind::Long];
        assert_eq!(reorder_plan().check(&TARGET, &native), Ok(()));

        // Every forwarded argument lands on a different kind.
        let crossed = [Kind::Double, Kind::Int, Kind::Long, Kind::Float];
        assert_eq!(reorder_plan().check(&TARGET, &crossed), Ok(()));
    }

    #[test]
    fn rejects_missing_slots() {
        let plan = Plan::identity(3);
        let native = [Kind::Int; 5];

        assert_eq!(
            plan.check(&TARGET, &native),
            Err(BindError::Arity {
                expected: 5,
                found: 3
            })
        );
    }

    #[test]
    fn rejects_extra_slots() {
        let plan = Plan::identity(3);

        assert_eq!(
            plan.check(&TARGET, &[Kind::Int, Kind::Float]),
            Err(BindError::Arity {
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn rejects_unknown_argument_index() {
        let plan = Plan::new([Slot::arg(0), Slot::arg(3)]);

        assert_eq!(
            plan.check(&TARGET, &[Kind::Int, Kind::Int]),
            Err(BindError::ArgumentOutOfRange {
                slot: 1,
                index: 3,
                arity: 3
            })
        );
    }

    #[test]
    fn rejects_bool_for_numeric_parameter() {
        let plan = Plan::new([Slot::arg(0), Slot::fixed(true)]);

        assert_eq!(
            plan.check(&TARGET, &[Kind::Int, Kind::Double]),
            Err(BindError::Unconvertible {
                slot: 1,
                from: Kind::Bool,
                to: Kind::Double
            })
        );
    }

    #[test]
    fn forwarding_past_the_call_arity_never_reaches_arrange() {
        let plan = Plan::new([Slot::arg(7)]);

        assert_eq!(
            plan.check(&[Kind::Int], &[Kind::Int]),
            Err(BindError::ArgumentOutOfRange {
                slot: 0,
                index: 7,
                arity: 1
            })
        );
    }

    #[test]
    fn error_messages() {
        let error = BindError::Arity {
            expected: 5,
            found: 3,
        };
        assert_eq!(
            error.to_string(),
            "plan has 3 slots but the method takes 5 arguments"
        );

        let error = BindError::Unconvertible {
            slot: 2,
            from: Kind::Bool,
            to: Kind::Float,
        };
        assert_eq!(error.to_string(), "slot 2 cannot convert bool into f32");
    }

    #[test]
    fn unused_and_repeated_arguments_are_allowed() {
        let plan = Plan::new([Slot::arg(2), Slot::arg(2)]);
        let args = [Value::Int(1), Value::Float(2.0), Value::Double(3.0)];

        assert_eq!(plan.check(&TARGET, &[Kind::Double, Kind::Int]), Ok(()));
        assert_eq!(
            plan.arrange(&args),
            vec![Value::Double(3.0), Value::Double(3.0)]
        );
    }
}
