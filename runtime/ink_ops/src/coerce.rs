//! Operand promotion.
//!
//! "Higher" kinds infect the other operands: a binary operation on an int
//! and a float runs in the float implementation with the int cast up. Each
//! implementation therefore only ever sees operands of its own kind.

use ink_value::{Value, ValueKind};
use smallvec::SmallVec;

use crate::errors::OpError;

/// Operands after coercion. Operators take at most two, so this never spills.
pub type Operands = SmallVec<[Value; 2]>;

/// Greatest kind among `operands`, starting from `Int`.
///
/// Void operands have no kind and do not take part.
pub fn join_kind(operands: &[Value]) -> ValueKind {
    operands
        .iter()
        .filter_map(Value::kind)
        .fold(ValueKind::Int, ValueKind::max)
}

/// Cast every operand to the join kind.
///
/// Order and length are preserved. Operands already of the join kind are
/// passed through unchanged. A cast the value model does not define (or a
/// void operand) is returned as `OpErrorKind::Cast`.
pub fn coerce(operands: &[Value]) -> Result<(Operands, ValueKind), OpError> {
    let kind = join_kind(operands);
    let coerced = operands
        .iter()
        .map(|operand| operand.cast(kind))
        .collect::<Result<Operands, _>>()?;
    Ok((coerced, kind))
}
