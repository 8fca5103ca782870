#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::list::{ListItem, ListValue};
use crate::path::Path;
use pretty_assertions::assert_eq;

#[test]
fn test_identity_cast_shares_payload() {
    let s = Value::string("story");
    let cast = s.cast(ValueKind::String).unwrap();
    match (&s, &cast) {
        (Value::Str(a), Value::Str(b)) => assert!(crate::Heap::ptr_eq(a, b)),
        _ => panic!("expected strings"),
    }
}

#[test]
fn test_int_casts() {
    assert_eq!(Value::int(3).cast(ValueKind::Float).unwrap(), Value::float(3.0));
    assert_eq!(Value::int(-12).cast(ValueKind::String).unwrap(), Value::string("-12"));
    assert_eq!(
        Value::int(1).cast(ValueKind::DivertTarget),
        Err(CastError::Unsupported {
            from: ValueKind::Int,
            to: ValueKind::DivertTarget
        })
    );
    assert!(Value::int(1).cast(ValueKind::List).is_err());
}

#[test]
fn test_float_casts() {
    assert_eq!(Value::float(2.9).cast(ValueKind::Int).unwrap(), Value::int(2));
    assert_eq!(Value::float(-2.9).cast(ValueKind::Int).unwrap(), Value::int(-2));
    assert_eq!(Value::float(f64::NAN).cast(ValueKind::Int).unwrap(), Value::int(0));
    assert_eq!(
        Value::float(f64::INFINITY).cast(ValueKind::Int).unwrap(),
        Value::int(i64::MAX)
    );
    assert_eq!(Value::float(1.5).cast(ValueKind::String).unwrap(), Value::string("1.5"));
}

#[test]
fn test_string_only_casts_to_itself() {
    let s = Value::string("12");
    assert!(s.cast(ValueKind::Int).is_err());
    assert!(s.cast(ValueKind::Float).is_err());
    assert!(s.cast(ValueKind::DivertTarget).is_err());
}

#[test]
fn test_divert_target_never_casts() {
    let target = Value::divert_target(Path::parse("knot"));
    for kind in [ValueKind::Int, ValueKind::Float, ValueKind::String, ValueKind::List] {
        assert_eq!(
            target.cast(kind),
            Err(CastError::Unsupported {
                from: ValueKind::DivertTarget,
                to: kind
            })
        );
    }
}

#[test]
fn test_list_casts() {
    let list: ListValue = [ListItem::new("n", "two", 2), ListItem::new("n", "five", 5)]
        .into_iter()
        .collect();
    let value = Value::list(list);
    assert_eq!(value.cast(ValueKind::Int).unwrap(), Value::int(5));
    assert_eq!(value.cast(ValueKind::Float).unwrap(), Value::float(5.0));
    assert_eq!(value.cast(ValueKind::String).unwrap(), Value::string("two, five"));
    assert_eq!(
        Value::list(ListValue::new()).cast(ValueKind::Int).unwrap(),
        Value::int(0)
    );
}

#[test]
fn test_void_cannot_cast() {
    assert_eq!(
        Value::Void.cast(ValueKind::Int),
        Err(CastError::Void { to: ValueKind::Int })
    );
}

#[test]
fn test_error_messages() {
    let err = CastError::Unsupported {
        from: ValueKind::DivertTarget,
        to: ValueKind::Int,
    };
    assert_eq!(err.to_string(), "cannot cast DivertTarget to Int");
    assert_eq!(
        CastError::Void { to: ValueKind::Float }.to_string(),
        "cannot cast a void value to Float"
    );
}
