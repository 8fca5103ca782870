//! Integer implementations.
//!
//! Arithmetic wraps on overflow (including `i64::MIN / -1`), so the only
//! failures are zero divisors. Truth results are `Int` 0 / 1.

use ink_value::{int_to_float, Value};

use crate::errors::{division_by_zero, modulo_by_zero, OpResult};

pub(super) fn add(x: i64, y: i64) -> OpResult {
    Ok(Value::int(x.wrapping_add(y)))
}

pub(super) fn subtract(x: i64, y: i64) -> OpResult {
    Ok(Value::int(x.wrapping_sub(y)))
}

pub(super) fn multiply(x: i64, y: i64) -> OpResult {
    Ok(Value::int(x.wrapping_mul(y)))
}

/// Truncating division.
pub(super) fn divide(x: i64, y: i64) -> OpResult {
    if y == 0 {
        return Err(division_by_zero());
    }
    Ok(Value::int(x.wrapping_div(y)))
}

/// Remainder with the sign of the dividend.
pub(super) fn modulo(x: i64, y: i64) -> OpResult {
    if y == 0 {
        return Err(modulo_by_zero());
    }
    Ok(Value::int(x.wrapping_rem(y)))
}

pub(super) fn negate(x: i64) -> OpResult {
    Ok(Value::int(x.wrapping_neg()))
}

pub(super) fn equal(x: i64, y: i64) -> OpResult {
    Ok(Value::from_bool(x == y))
}

pub(super) fn not_equals(x: i64, y: i64) -> OpResult {
    Ok(Value::from_bool(x != y))
}

pub(super) fn greater(x: i64, y: i64) -> OpResult {
    Ok(Value::from_bool(x > y))
}

pub(super) fn less(x: i64, y: i64) -> OpResult {
    Ok(Value::from_bool(x < y))
}

pub(super) fn greater_or_equal(x: i64, y: i64) -> OpResult {
    Ok(Value::from_bool(x >= y))
}

pub(super) fn less_or_equal(x: i64, y: i64) -> OpResult {
    Ok(Value::from_bool(x <= y))
}

pub(super) fn not(x: i64) -> OpResult {
    Ok(Value::from_bool(x == 0))
}

pub(super) fn and(x: i64, y: i64) -> OpResult {
    Ok(Value::from_bool(x != 0 && y != 0))
}

pub(super) fn or(x: i64, y: i64) -> OpResult {
    Ok(Value::from_bool(x != 0 || y != 0))
}

pub(super) fn min(x: i64, y: i64) -> OpResult {
    Ok(Value::int(x.min(y)))
}

pub(super) fn max(x: i64, y: i64) -> OpResult {
    Ok(Value::int(x.max(y)))
}

/// Computed in floating point so negative exponents work: `POW(2, -1)` is 0.5.
pub(super) fn pow(x: i64, y: i64) -> OpResult {
    Ok(Value::float(int_to_float(x).powf(int_to_float(y))))
}

/// `FLOOR`, `CEILING` and `INT` leave integers alone.
pub(super) fn identity(x: i64) -> OpResult {
    Ok(Value::int(x))
}

pub(super) fn to_float(x: i64) -> OpResult {
    Ok(Value::float(int_to_float(x)))
}
