//! Divert targets only support identity comparison.

use ink_value::{Path, Value};

use crate::errors::OpResult;

pub(super) fn equal(x: &Path, y: &Path) -> OpResult {
    Ok(Value::from_bool(x == y))
}

pub(super) fn not_equals(x: &Path, y: &Path) -> OpResult {
    Ok(Value::from_bool(x != y))
}
