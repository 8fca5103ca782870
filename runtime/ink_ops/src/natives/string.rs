//! String implementations.

use ink_value::Value;

use crate::errors::OpResult;

pub(super) fn concat(x: &str, y: &str) -> OpResult {
    Ok(Value::string(format!("{x}{y}")))
}

pub(super) fn equal(x: &str, y: &str) -> OpResult {
    Ok(Value::from_bool(x == y))
}

pub(super) fn not_equals(x: &str, y: &str) -> OpResult {
    Ok(Value::from_bool(x != y))
}

/// Substring test.
pub(super) fn has(x: &str, y: &str) -> OpResult {
    Ok(Value::from_bool(x.contains(y)))
}

pub(super) fn hasnt(x: &str, y: &str) -> OpResult {
    Ok(Value::from_bool(!x.contains(y)))
}
