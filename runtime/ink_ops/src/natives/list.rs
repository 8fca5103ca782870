//! Story list implementations: set algebra, containment and value-bound
//! comparisons. See `ListValue` for the exact comparison rules.

use ink_value::{ListValue, Value};

use crate::errors::OpResult;

pub(super) fn union(x: &ListValue, y: &ListValue) -> OpResult {
    Ok(Value::list(x.union(y)))
}

pub(super) fn difference(x: &ListValue, y: &ListValue) -> OpResult {
    Ok(Value::list(x.difference(y)))
}

pub(super) fn intersect(x: &ListValue, y: &ListValue) -> OpResult {
    Ok(Value::list(x.intersection(y)))
}

pub(super) fn equal(x: &ListValue, y: &ListValue) -> OpResult {
    Ok(Value::from_bool(x == y))
}

pub(super) fn not_equals(x: &ListValue, y: &ListValue) -> OpResult {
    Ok(Value::from_bool(x != y))
}

pub(super) fn has(x: &ListValue, y: &ListValue) -> OpResult {
    Ok(Value::from_bool(x.contains(y)))
}

pub(super) fn hasnt(x: &ListValue, y: &ListValue) -> OpResult {
    Ok(Value::from_bool(!x.contains(y)))
}

pub(super) fn greater(x: &ListValue, y: &ListValue) -> OpResult {
    Ok(Value::from_bool(x.greater_than(y)))
}

pub(super) fn less(x: &ListValue, y: &ListValue) -> OpResult {
    Ok(Value::from_bool(x.less_than(y)))
}

pub(super) fn greater_or_equal(x: &ListValue, y: &ListValue) -> OpResult {
    Ok(Value::from_bool(x.greater_than_or_equals(y)))
}

pub(super) fn less_or_equal(x: &ListValue, y: &ListValue) -> OpResult {
    Ok(Value::from_bool(x.less_than_or_equals(y)))
}

/// An empty list is falsy.
pub(super) fn not(x: &ListValue) -> OpResult {
    Ok(Value::from_bool(x.is_empty()))
}
