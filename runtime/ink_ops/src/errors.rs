//! Error types for native operator evaluation.
//!
//! Factory functions (e.g. `division_by_zero()`) are the public way to build
//! errors; they keep message wording in one place. Errors are only ever
//! returned, never logged or recovered here: turning them into story runtime
//! errors with source locations is the evaluator's job.

use std::fmt;

use ink_value::{CastError, Value, ValueKind};

use crate::descriptor::Arity;
use crate::operator::Operator;

/// Result of a native operator call.
pub type OpResult = Result<Value, OpError>;

/// Typed category of a native operator failure.
///
/// Callers match on the kind rather than parsing messages. The `Display`
/// impl renders the message stored alongside it in `OpError`.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum OpErrorKind {
    /// Operand count differs from the operator's arity.
    #[error("operator '{operator}' expects {expected} {}, got {got}", operand_word(.expected))]
    ArityMismatch {
        operator: Operator,
        expected: usize,
        got: usize,
    },

    /// An operand is the empty-return marker of a function call.
    #[error(
        "Attempting to perform operation '{operator}' on a void value. \
         Did you forget to 'return' a value from a function you called here?"
    )]
    VoidOperand { operator: Operator },

    /// The operator has no implementation for the promoted operand kind.
    #[error("Cannot perform operation '{operator}' on {kind}")]
    UnsupportedOperation { operator: Operator, kind: ValueKind },

    /// Promotion required a cast the value model does not define.
    #[error(transparent)]
    Cast(CastError),

    /// Integer division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Integer remainder by zero.
    #[error("modulo by zero")]
    ModuloByZero,

    /// No descriptor is registered for the symbol.
    #[error("unknown native operator '{symbol}'")]
    UnknownOperator { symbol: String },
}

/// Failure of a single native operator invocation.
#[derive(Clone, Debug, PartialEq)]
pub struct OpError {
    /// Structured error category.
    kind: OpErrorKind,
    /// Human-readable message; always `kind.to_string()`.
    message: String,
}

impl OpError {
    /// Build an error from its kind. The message is rendered once, here.
    fn from_kind(kind: OpErrorKind) -> Self {
        let message = kind.to_string();
        OpError { kind, message }
    }

    pub fn kind(&self) -> &OpErrorKind {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_kind(self) -> OpErrorKind {
        self.kind
    }

    /// Whether this is a zero divisor in `/` or `%`.
    pub fn is_division_by_zero(&self) -> bool {
        matches!(
            self.kind,
            OpErrorKind::DivisionByZero | OpErrorKind::ModuloByZero
        )
    }
}

impl fmt::Display for OpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for OpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            OpErrorKind::Cast(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CastError> for OpError {
    fn from(err: CastError) -> Self {
        OpError::from_kind(OpErrorKind::Cast(err))
    }
}

fn operand_word(count: &usize) -> &'static str {
    if *count == 1 {
        "operand"
    } else {
        "operands"
    }
}

// Factory functions

/// Operand count mismatch.
#[cold]
pub fn arity_mismatch(operator: Operator, expected: Arity, got: usize) -> OpError {
    OpError::from_kind(OpErrorKind::ArityMismatch {
        operator,
        expected: expected.count(),
        got,
    })
}

/// Void operand passed to an operator.
#[cold]
pub fn void_operand(operator: Operator) -> OpError {
    OpError::from_kind(OpErrorKind::VoidOperand { operator })
}

/// Operator not defined for a kind.
#[cold]
pub fn unsupported_operation(operator: Operator, kind: ValueKind) -> OpError {
    OpError::from_kind(OpErrorKind::UnsupportedOperation { operator, kind })
}

/// Integer division by zero.
#[cold]
pub fn division_by_zero() -> OpError {
    OpError::from_kind(OpErrorKind::DivisionByZero)
}

/// Integer modulo by zero.
#[cold]
pub fn modulo_by_zero() -> OpError {
    OpError::from_kind(OpErrorKind::ModuloByZero)
}

/// Symbol with no registered descriptor.
#[cold]
pub fn unknown_operator(symbol: &str) -> OpError {
    OpError::from_kind(OpErrorKind::UnknownOperator {
        symbol: symbol.to_string(),
    })
}

/// Error for an operand that does not match the implementation it reached.
///
/// Void operands report as `VoidOperand`; anything else as unsupported.
#[cold]
pub(crate) fn operand_mismatch(operator: Operator, operand: &Value) -> OpError {
    match operand.kind() {
        Some(kind) => unsupported_operation(operator, kind),
        None => void_operand(operator),
    }
}

#[cfg(test)]
mod tests;
