//! Named references to native operators.
//!
//! A story's compiled container holds one handle per native call site. The
//! handle only remembers which operator it names; every call resolves the
//! descriptor from a table again, so handles stay valid across tables and
//! cost nothing to copy.

use std::fmt;

use ink_value::Value;

use crate::descriptor::Arity;
use crate::dispatch::invoke;
use crate::errors::{unknown_operator, OpError, OpResult};
use crate::operator::Operator;
use crate::table::OperatorTable;

/// A resolved reference to a registered native operator.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OperationHandle {
    operator: Operator,
}

impl OperationHandle {
    /// Resolve `symbol` against the global table.
    pub fn new(symbol: &str) -> Result<Self, OpError> {
        Self::for_table(OperatorTable::global(), symbol)
    }

    /// Resolve `symbol` against `table`.
    pub fn for_table(table: &OperatorTable, symbol: &str) -> Result<Self, OpError> {
        match table.lookup_symbol(symbol) {
            Some(descriptor) => Ok(OperationHandle {
                operator: descriptor.operator(),
            }),
            None => Err(unknown_operator(symbol)),
        }
    }

    pub fn operator(self) -> Operator {
        self.operator
    }

    pub fn symbol(self) -> &'static str {
        self.operator.as_symbol()
    }

    /// Operand count in `table`, or `None` if `table` lacks the operator.
    pub fn arity(self, table: &OperatorTable) -> Option<Arity> {
        table.lookup(self.operator).map(|descriptor| descriptor.arity())
    }

    /// Invoke against the global table.
    pub fn call(self, operands: &[Value]) -> OpResult {
        self.call_with(OperatorTable::global(), operands)
    }

    pub fn call_with(self, table: &OperatorTable, operands: &[Value]) -> OpResult {
        invoke(table, self.operator, operands)
    }
}

impl fmt::Display for OperationHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Native '{}'", self.symbol())
    }
}
