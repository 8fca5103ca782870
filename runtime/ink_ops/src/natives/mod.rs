//! The standard native operator set.
//!
//! Registrations are declarative: each entry attaches one implementation to
//! one operator. The table builder creates an operator's descriptor on its
//! first entry, so the order below carries no meaning.
//!
//! There are no boolean operations. Comparisons and logic produce `Int` 0 / 1,
//! and anything truthy has already been promoted to a number by the time it
//! reaches `&&`, `||` or `!`.

#![allow(
    clippy::unnecessary_wraps,
    reason = "every implementation shares the fallible OpResult signature"
)]

mod divert;
mod float;
mod int;
mod list;
mod string;

use ink_value::{ListValue, Path};

use crate::errors::OpResult;
use crate::implementation::{BinaryImpl, Implementation, UnaryImpl};
use crate::operator::Operator;
use crate::table::Registration;

use Operator::{
    Add, And, Ceiling, Divide, Equal, Float, Floor, Greater, GreaterThanOrEquals, Has, Hasnt,
    Int, Intersect, Less, LessThanOrEquals, Max, Min, Mod, Multiply, Negate, Not, NotEquals, Or,
    Pow, Subtract,
};

const fn int_unary(operator: Operator, f: fn(i64) -> OpResult) -> Registration {
    Registration::new(operator, Implementation::Unary(UnaryImpl::Int(f)))
}

const fn int_binary(operator: Operator, f: fn(i64, i64) -> OpResult) -> Registration {
    Registration::new(operator, Implementation::Binary(BinaryImpl::Int(f)))
}

const fn float_unary(operator: Operator, f: fn(f64) -> OpResult) -> Registration {
    Registration::new(operator, Implementation::Unary(UnaryImpl::Float(f)))
}

const fn float_binary(operator: Operator, f: fn(f64, f64) -> OpResult) -> Registration {
    Registration::new(operator, Implementation::Binary(BinaryImpl::Float(f)))
}

const fn string_binary(operator: Operator, f: fn(&str, &str) -> OpResult) -> Registration {
    Registration::new(operator, Implementation::Binary(BinaryImpl::Str(f)))
}

const fn divert_binary(operator: Operator, f: fn(&Path, &Path) -> OpResult) -> Registration {
    Registration::new(operator, Implementation::Binary(BinaryImpl::DivertTarget(f)))
}

const fn list_unary(operator: Operator, f: fn(&ListValue) -> OpResult) -> Registration {
    Registration::new(operator, Implementation::Unary(UnaryImpl::List(f)))
}

const fn list_binary(
    operator: Operator,
    f: fn(&ListValue, &ListValue) -> OpResult,
) -> Registration {
    Registration::new(operator, Implementation::Binary(BinaryImpl::List(f)))
}

/// Every built-in (operator, kind) implementation.
pub(crate) static STANDARD_REGISTRATIONS: &[Registration] = &[
    // Int
    int_binary(Add, int::add),
    int_binary(Subtract, int::subtract),
    int_binary(Multiply, int::multiply),
    int_binary(Divide, int::divide),
    int_binary(Mod, int::modulo),
    int_unary(Negate, int::negate),
    int_binary(Equal, int::equal),
    int_binary(Greater, int::greater),
    int_binary(Less, int::less),
    int_binary(GreaterThanOrEquals, int::greater_or_equal),
    int_binary(LessThanOrEquals, int::less_or_equal),
    int_binary(NotEquals, int::not_equals),
    int_unary(Not, int::not),
    int_binary(And, int::and),
    int_binary(Or, int::or),
    int_binary(Max, int::max),
    int_binary(Min, int::min),
    int_binary(Pow, int::pow),
    int_unary(Floor, int::identity),
    int_unary(Ceiling, int::identity),
    int_unary(Int, int::identity),
    int_unary(Float, int::to_float),
    // Float
    float_binary(Add, float::add),
    float_binary(Subtract, float::subtract),
    float_binary(Multiply, float::multiply),
    float_binary(Divide, float::divide),
    float_binary(Mod, float::modulo),
    float_unary(Negate, float::negate),
    float_binary(Equal, float::equal),
    float_binary(Greater, float::greater),
    float_binary(Less, float::less),
    float_binary(GreaterThanOrEquals, float::greater_or_equal),
    float_binary(LessThanOrEquals, float::less_or_equal),
    float_binary(NotEquals, float::not_equals),
    float_unary(Not, float::not),
    float_binary(And, float::and),
    float_binary(Or, float::or),
    float_binary(Max, float::max),
    float_binary(Min, float::min),
    float_binary(Pow, float::pow),
    float_unary(Floor, float::floor),
    float_unary(Ceiling, float::ceiling),
    float_unary(Int, float::to_int),
    float_unary(Float, float::identity),
    // String
    string_binary(Add, string::concat),
    string_binary(Equal, string::equal),
    string_binary(NotEquals, string::not_equals),
    string_binary(Has, string::has),
    string_binary(Hasnt, string::hasnt),
    // Divert target: identity comparison only
    divert_binary(Equal, divert::equal),
    divert_binary(NotEquals, divert::not_equals),
    // List
    list_binary(Add, list::union),
    list_binary(Subtract, list::difference),
    list_binary(Intersect, list::intersect),
    list_binary(Equal, list::equal),
    list_binary(NotEquals, list::not_equals),
    list_binary(Has, list::has),
    list_binary(Hasnt, list::hasnt),
    list_binary(Greater, list::greater),
    list_binary(Less, list::less),
    list_binary(GreaterThanOrEquals, list::greater_or_equal),
    list_binary(LessThanOrEquals, list::less_or_equal),
    list_unary(Not, list::not),
];

#[cfg(test)]
mod tests;
