//! Casting values between kinds.
//!
//! Operand promotion only ever casts upward in the `ValueKind` order, but
//! `cast` also serves hosts that convert values explicitly (e.g. printing a
//! list or reading a list as a number).
//!
//! | from \ to    | Int       | Float     | String    | DivertTarget | List     |
//! |--------------|-----------|-----------|-----------|--------------|----------|
//! | Int          | identity  | widen     | decimal   | -            | -        |
//! | Float        | truncate  | identity  | decimal   | -            | -        |
//! | String       | -         | -         | identity  | -            | -        |
//! | DivertTarget | -         | -         | -         | identity     | -        |
//! | List         | max value | max value | names     | -            | identity |

use crate::kind::ValueKind;
use crate::value::Value;

/// A cast the value model does not define.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CastError {
    #[error("cannot cast {from} to {to}")]
    Unsupported { from: ValueKind, to: ValueKind },
    #[error("cannot cast a void value to {to}")]
    Void { to: ValueKind },
}

impl Value {
    /// Convert this value to `target`.
    ///
    /// Casting to the value's own kind returns a clone that shares the
    /// original heap payload.
    pub fn cast(&self, target: ValueKind) -> Result<Value, CastError> {
        let Some(from) = self.kind() else {
            return Err(CastError::Void { to: target });
        };
        if from == target {
            return Ok(self.clone());
        }

        match (self, target) {
            (Value::Int(n), ValueKind::Float) => Ok(Value::Float(int_to_float(*n))),
            (Value::Int(n), ValueKind::String) => Ok(Value::string(n.to_string())),

            (Value::Float(x), ValueKind::Int) => Ok(Value::Int(float_to_int(*x))),
            (Value::Float(x), ValueKind::String) => Ok(Value::string(x.to_string())),

            (Value::List(list), ValueKind::Int) => {
                Ok(Value::Int(list.max_item().map_or(0, |item| item.value())))
            }
            (Value::List(list), ValueKind::Float) => Ok(Value::Float(
                list.max_item().map_or(0.0, |item| int_to_float(item.value())),
            )),
            (Value::List(list), ValueKind::String) => Ok(Value::string(list.to_string())),

            _ => Err(CastError::Unsupported { from, to: target }),
        }
    }
}

/// Widen an integer. Magnitudes above 2^53 round to the nearest float.
#[inline]
#[allow(clippy::cast_precision_loss, reason = "story integers widen to float by definition")]
pub fn int_to_float(n: i64) -> f64 {
    n as f64
}

/// Truncate toward zero. Out-of-range values saturate and NaN becomes 0.
#[inline]
#[allow(clippy::cast_possible_truncation, reason = "truncation is the cast's meaning")]
pub fn float_to_int(x: f64) -> i64 {
    x as i64
}

#[cfg(test)]
mod tests;
