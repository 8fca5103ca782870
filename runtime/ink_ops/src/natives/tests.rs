#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::errors::OpErrorKind;
use ink_value::{ListItem, Value};
use pretty_assertions::assert_eq;

fn items(values: &[i64]) -> ListValue {
    values
        .iter()
        .map(|v| ListItem::new("n", format!("i{v}"), *v))
        .collect()
}

#[test]
fn test_int_arithmetic() {
    assert_eq!(int::add(2, 3).unwrap(), Value::int(5));
    assert_eq!(int::subtract(3, 10).unwrap(), Value::int(-7));
    assert_eq!(int::multiply(-2, 5).unwrap(), Value::int(-10));
    assert_eq!(int::divide(7, 2).unwrap(), Value::int(3));
    assert_eq!(int::divide(-7, 2).unwrap(), Value::int(-3));
    assert_eq!(int::modulo(7, 3).unwrap(), Value::int(1));
    assert_eq!(int::modulo(-7, 3).unwrap(), Value::int(-1));
    assert_eq!(int::negate(4).unwrap(), Value::int(-4));
}

#[test]
fn test_int_zero_divisors() {
    assert_eq!(int::divide(1, 0).unwrap_err().into_kind(), OpErrorKind::DivisionByZero);
    assert_eq!(int::modulo(1, 0).unwrap_err().into_kind(), OpErrorKind::ModuloByZero);
}

#[test]
fn test_int_wrapping_overflow() {
    assert_eq!(int::add(i64::MAX, 1).unwrap(), Value::int(i64::MIN));
    assert_eq!(int::multiply(i64::MAX, 2).unwrap(), Value::int(-2));
    assert_eq!(int::divide(i64::MIN, -1).unwrap(), Value::int(i64::MIN));
    assert_eq!(int::modulo(i64::MIN, -1).unwrap(), Value::int(0));
    assert_eq!(int::negate(i64::MIN).unwrap(), Value::int(i64::MIN));
}

#[test]
fn test_int_truth_values() {
    assert_eq!(int::equal(2, 2).unwrap(), Value::int(1));
    assert_eq!(int::not_equals(2, 2).unwrap(), Value::int(0));
    assert_eq!(int::greater_or_equal(2, 3).unwrap(), Value::int(0));
    assert_eq!(int::less_or_equal(2, 2).unwrap(), Value::int(1));
    assert_eq!(int::not(0).unwrap(), Value::int(1));
    assert_eq!(int::not(5).unwrap(), Value::int(0));
    assert_eq!(int::and(3, 0).unwrap(), Value::int(0));
    assert_eq!(int::or(0, -1).unwrap(), Value::int(1));
}

#[test]
fn test_int_numeric_helpers() {
    assert_eq!(int::min(3, -3).unwrap(), Value::int(-3));
    assert_eq!(int::max(3, -3).unwrap(), Value::int(3));
    assert_eq!(int::pow(2, 10).unwrap(), Value::float(1024.0));
    assert_eq!(int::pow(2, -1).unwrap(), Value::float(0.5));
    assert_eq!(int::identity(9).unwrap(), Value::int(9));
    assert_eq!(int::to_float(9).unwrap(), Value::float(9.0));
}

#[test]
fn test_float_ieee_semantics() {
    let inf = float::divide(1.0, 0.0).unwrap().as_float().unwrap();
    assert!(inf.is_infinite() && inf.is_sign_positive());
    assert!(float::divide(0.0, 0.0).unwrap().as_float().unwrap().is_nan());
    assert!(float::modulo(1.0, 0.0).unwrap().as_float().unwrap().is_nan());
    assert_eq!(float::equal(f64::NAN, f64::NAN).unwrap(), Value::int(0));
    assert_eq!(float::not_equals(f64::NAN, f64::NAN).unwrap(), Value::int(1));
}

#[test]
fn test_float_modulo_takes_dividend_sign() {
    assert_eq!(float::modulo(5.5, 2.0).unwrap(), Value::float(1.5));
    assert_eq!(float::modulo(-5.5, 2.0).unwrap(), Value::float(-1.5));
    assert_eq!(float::modulo(5.5, -2.0).unwrap(), Value::float(1.5));
}

#[test]
fn test_float_rounding_helpers() {
    assert_eq!(float::floor(-1.5).unwrap(), Value::float(-2.0));
    assert_eq!(float::ceiling(-1.5).unwrap(), Value::float(-1.0));
    assert_eq!(float::to_int(-1.9).unwrap(), Value::int(-1));
    assert_eq!(float::identity(0.5).unwrap(), Value::float(0.5));
    assert_eq!(float::pow(2.0, 3.0).unwrap(), Value::float(8.0));
}

#[test]
fn test_float_min_max_propagate_nan() {
    let is_nan = |result: OpResult| result.unwrap().as_float().unwrap().is_nan();
    assert!(is_nan(float::min(f64::NAN, 1.0)));
    assert!(is_nan(float::min(1.0, f64::NAN)));
    assert!(is_nan(float::max(f64::NAN, 1.0)));
    assert!(is_nan(float::max(1.0, f64::NAN)));
    assert_eq!(float::min(-1.0, 1.0).unwrap(), Value::float(-1.0));
    assert_eq!(float::max(-1.0, 1.0).unwrap(), Value::float(1.0));
}

#[test]
fn test_float_truth_values() {
    assert_eq!(float::not(0.0).unwrap(), Value::int(1));
    assert_eq!(float::not(-0.0).unwrap(), Value::int(1));
    assert_eq!(float::and(0.5, 2.0).unwrap(), Value::int(1));
    assert_eq!(float::or(0.0, 0.0).unwrap(), Value::int(0));
    assert_eq!(float::greater(1.5, 1.0).unwrap(), Value::int(1));
}

#[test]
fn test_string_operations() {
    assert_eq!(string::concat("a", "b").unwrap(), Value::string("ab"));
    assert_eq!(string::equal("a", "a").unwrap(), Value::int(1));
    assert_eq!(string::not_equals("a", "a").unwrap(), Value::int(0));
    assert_eq!(string::has("hello world", "lo w").unwrap(), Value::int(1));
    assert_eq!(string::hasnt("hello", "z").unwrap(), Value::int(1));
    assert_eq!(string::has("abc", "").unwrap(), Value::int(1));
}

#[test]
fn test_divert_comparison() {
    let a = Path::parse("knot.stitch");
    let b = Path::parse("knot.stitch");
    let c = Path::parse("other");
    assert_eq!(divert::equal(&a, &b).unwrap(), Value::int(1));
    assert_eq!(divert::not_equals(&a, &c).unwrap(), Value::int(1));
}

#[test]
fn test_list_operations() {
    let a = items(&[1, 2]);
    let b = items(&[2, 3]);
    assert_eq!(list::union(&a, &b).unwrap(), Value::list(items(&[1, 2, 3])));
    assert_eq!(list::difference(&a, &b).unwrap(), Value::list(items(&[1])));
    assert_eq!(list::intersect(&a, &b).unwrap(), Value::list(items(&[2])));
    assert_eq!(list::has(&a, &items(&[1])).unwrap(), Value::int(1));
    assert_eq!(list::hasnt(&a, &items(&[3])).unwrap(), Value::int(1));
    assert_eq!(list::greater(&items(&[3]), &a).unwrap(), Value::int(1));
    assert_eq!(list::less(&a, &items(&[3])).unwrap(), Value::int(1));
    assert_eq!(list::not(&ListValue::new()).unwrap(), Value::int(1));
    assert_eq!(list::not(&a).unwrap(), Value::int(0));
}

#[test]
fn test_standard_registrations_cover_every_operator() {
    for op in Operator::ALL {
        assert!(
            STANDARD_REGISTRATIONS.iter().any(|r| r.operator == op),
            "no implementation registered for {op}"
        );
    }
}

#[test]
fn test_standard_registrations_have_one_arity_per_operator() {
    for op in Operator::ALL {
        let mut arities = STANDARD_REGISTRATIONS
            .iter()
            .filter(|r| r.operator == op)
            .map(|r| r.implementation.arity());
        let first = arities.next();
        assert!(arities.all(|arity| Some(arity) == first), "{op} mixes arities");
    }
}
