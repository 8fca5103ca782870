//! Native operator dispatch.
//!
//! `invoke` is the single entry point the story evaluator uses for every
//! native operator call. It validates the operands against the operator's
//! descriptor, promotes them to a common kind, and hands them to that kind's
//! implementation.

use ink_value::Value;

use crate::coerce::coerce;
use crate::errors::{
    arity_mismatch, unknown_operator, unsupported_operation, void_operand, OpResult,
};
use crate::operator::Operator;
use crate::table::OperatorTable;

/// Evaluate `operator` over `operands` using `table`.
///
/// Checks run in a fixed order: the operator must be registered, the operand
/// count must match its arity, and no operand may be void. Only then are the
/// operands coerced and the implementation for the promoted kind selected.
#[tracing::instrument(level = "trace", skip_all, fields(op = %operator))]
pub fn invoke(table: &OperatorTable, operator: Operator, operands: &[Value]) -> OpResult {
    let Some(descriptor) = table.lookup(operator) else {
        return Err(unknown_operator(operator.as_symbol()));
    };

    let arity = descriptor.arity();
    if operands.len() != arity.count() {
        return Err(arity_mismatch(operator, arity, operands.len()));
    }

    if operands.iter().any(Value::is_void) {
        return Err(void_operand(operator));
    }

    let (coerced, kind) = coerce(operands)?;

    let Some(implementation) = descriptor.implementation(kind) else {
        return Err(unsupported_operation(operator, kind));
    };

    implementation.call(operator, &coerced)
}

/// Evaluate the operator spelled `symbol` against the global table.
pub fn invoke_symbol(symbol: &str, operands: &[Value]) -> OpResult {
    let operator = Operator::from_symbol(symbol).ok_or_else(|| unknown_operator(symbol))?;
    invoke(OperatorTable::global(), operator, operands)
}
