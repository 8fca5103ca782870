//! Float implementations.
//!
//! IEEE-754 throughout: division by zero gives an infinity or NaN rather
//! than an error, and `%` is the C `fmod` remainder (sign of the dividend).

use ink_value::{float_to_int, Value};

use crate::errors::OpResult;

pub(super) fn add(x: f64, y: f64) -> OpResult {
    Ok(Value::float(x + y))
}

pub(super) fn subtract(x: f64, y: f64) -> OpResult {
    Ok(Value::float(x - y))
}

pub(super) fn multiply(x: f64, y: f64) -> OpResult {
    Ok(Value::float(x * y))
}

pub(super) fn divide(x: f64, y: f64) -> OpResult {
    Ok(Value::float(x / y))
}

pub(super) fn modulo(x: f64, y: f64) -> OpResult {
    Ok(Value::float(x % y))
}

pub(super) fn negate(x: f64) -> OpResult {
    Ok(Value::float(-x))
}

pub(super) fn equal(x: f64, y: f64) -> OpResult {
    Ok(Value::from_bool(x == y))
}

pub(super) fn not_equals(x: f64, y: f64) -> OpResult {
    Ok(Value::from_bool(x != y))
}

pub(super) fn greater(x: f64, y: f64) -> OpResult {
    Ok(Value::from_bool(x > y))
}

pub(super) fn less(x: f64, y: f64) -> OpResult {
    Ok(Value::from_bool(x < y))
}

pub(super) fn greater_or_equal(x: f64, y: f64) -> OpResult {
    Ok(Value::from_bool(x >= y))
}

pub(super) fn less_or_equal(x: f64, y: f64) -> OpResult {
    Ok(Value::from_bool(x <= y))
}

pub(super) fn not(x: f64) -> OpResult {
    Ok(Value::from_bool(x == 0.0))
}

pub(super) fn and(x: f64, y: f64) -> OpResult {
    Ok(Value::from_bool(x != 0.0 && y != 0.0))
}

pub(super) fn or(x: f64, y: f64) -> OpResult {
    Ok(Value::from_bool(x != 0.0 || y != 0.0))
}

/// NaN in either operand yields NaN, unlike `f64::min`.
pub(super) fn min(x: f64, y: f64) -> OpResult {
    if x.is_nan() || y.is_nan() {
        return Ok(Value::float(f64::NAN));
    }
    Ok(Value::float(x.min(y)))
}

/// NaN in either operand yields NaN, unlike `f64::max`.
pub(super) fn max(x: f64, y: f64) -> OpResult {
    if x.is_nan() || y.is_nan() {
        return Ok(Value::float(f64::NAN));
    }
    Ok(Value::float(x.max(y)))
}

pub(super) fn pow(x: f64, y: f64) -> OpResult {
    Ok(Value::float(x.powf(y)))
}

pub(super) fn floor(x: f64) -> OpResult {
    Ok(Value::float(x.floor()))
}

pub(super) fn ceiling(x: f64) -> OpResult {
    Ok(Value::float(x.ceil()))
}

/// Truncates toward zero.
pub(super) fn to_int(x: f64) -> OpResult {
    Ok(Value::int(float_to_int(x)))
}

pub(super) fn identity(x: f64) -> OpResult {
    Ok(Value::float(x))
}
