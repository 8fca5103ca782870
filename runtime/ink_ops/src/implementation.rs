//! Per-kind implementation functions.
//!
//! Every native operator is implemented once per value kind it supports.
//! An implementation is a plain function over the raw payload of that kind
//! and returns a fully tagged `Value`, so operators whose result kind differs
//! from the operand kind (comparisons, `INT`, `POW` on integers) say so
//! themselves.

use std::fmt;

use ink_value::{ListValue, Path, Value, ValueKind};

use crate::descriptor::Arity;
use crate::errors::{arity_mismatch, operand_mismatch, OpResult};
use crate::operator::Operator;

/// Unary implementation for a single kind.
#[derive(Copy, Clone)]
pub enum UnaryImpl {
    Int(fn(i64) -> OpResult),
    Float(fn(f64) -> OpResult),
    Str(fn(&str) -> OpResult),
    DivertTarget(fn(&Path) -> OpResult),
    List(fn(&ListValue) -> OpResult),
}

/// Binary implementation for a single kind. Both operands share that kind.
#[derive(Copy, Clone)]
pub enum BinaryImpl {
    Int(fn(i64, i64) -> OpResult),
    Float(fn(f64, f64) -> OpResult),
    Str(fn(&str, &str) -> OpResult),
    DivertTarget(fn(&Path, &Path) -> OpResult),
    List(fn(&ListValue, &ListValue) -> OpResult),
}

/// An implementation of one operator for one kind.
#[derive(Copy, Clone)]
pub enum Implementation {
    Unary(UnaryImpl),
    Binary(BinaryImpl),
}

impl UnaryImpl {
    pub fn kind(self) -> ValueKind {
        match self {
            UnaryImpl::Int(_) => ValueKind::Int,
            UnaryImpl::Float(_) => ValueKind::Float,
            UnaryImpl::Str(_) => ValueKind::String,
            UnaryImpl::DivertTarget(_) => ValueKind::DivertTarget,
            UnaryImpl::List(_) => ValueKind::List,
        }
    }

    fn call(self, operator: Operator, operand: &Value) -> OpResult {
        match (self, operand) {
            (UnaryImpl::Int(f), Value::Int(n)) => f(*n),
            (UnaryImpl::Float(f), Value::Float(x)) => f(*x),
            (UnaryImpl::Str(f), Value::Str(s)) => f(s.as_str()),
            (UnaryImpl::DivertTarget(f), Value::DivertTarget(path)) => f(path),
            (UnaryImpl::List(f), Value::List(list)) => f(list),
            _ => Err(operand_mismatch(operator, operand)),
        }
    }
}

impl BinaryImpl {
    pub fn kind(self) -> ValueKind {
        match self {
            BinaryImpl::Int(_) => ValueKind::Int,
            BinaryImpl::Float(_) => ValueKind::Float,
            BinaryImpl::Str(_) => ValueKind::String,
            BinaryImpl::DivertTarget(_) => ValueKind::DivertTarget,
            BinaryImpl::List(_) => ValueKind::List,
        }
    }

    fn call(self, operator: Operator, left: &Value, right: &Value) -> OpResult {
        match (self, left, right) {
            (BinaryImpl::Int(f), Value::Int(a), Value::Int(b)) => f(*a, *b),
            (BinaryImpl::Float(f), Value::Float(a), Value::Float(b)) => f(*a, *b),
            (BinaryImpl::Str(f), Value::Str(a), Value::Str(b)) => f(a.as_str(), b.as_str()),
            (BinaryImpl::DivertTarget(f), Value::DivertTarget(a), Value::DivertTarget(b)) => {
                f(a, b)
            }
            (BinaryImpl::List(f), Value::List(a), Value::List(b)) => f(a, b),
            _ if left.kind() == Some(self.kind()) => Err(operand_mismatch(operator, right)),
            _ => Err(operand_mismatch(operator, left)),
        }
    }
}

impl Implementation {
    /// Kind of operand this implementation accepts.
    pub fn kind(self) -> ValueKind {
        match self {
            Implementation::Unary(imp) => imp.kind(),
            Implementation::Binary(imp) => imp.kind(),
        }
    }

    pub fn arity(self) -> Arity {
        match self {
            Implementation::Unary(_) => Arity::Unary,
            Implementation::Binary(_) => Arity::Binary,
        }
    }

    /// Apply to operands already coerced to `self.kind()`.
    pub fn call(self, operator: Operator, operands: &[Value]) -> OpResult {
        match (self, operands) {
            (Implementation::Unary(imp), [operand]) => imp.call(operator, operand),
            (Implementation::Binary(imp), [left, right]) => imp.call(operator, left, right),
            _ => Err(arity_mismatch(operator, self.arity(), operands.len())),
        }
    }
}

impl fmt::Debug for Implementation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arity = match self {
            Implementation::Unary(_) => "Unary",
            Implementation::Binary(_) => "Binary",
        };
        write!(f, "{arity}({})", self.kind())
    }
}
