//! Ink Ops - Native operators for the Ink story runtime.
//!
//! This crate provides the arithmetic, comparison, logical and collection
//! operators a compiled story calls by symbol (`+`, `==`, `MIN`, `?`, ...).
//!
//! # Architecture
//!
//! - `Operator`: the closed set of operator symbols
//! - `coerce`: promotes operands to the highest kind among them
//! - `OperationDescriptor`: per-operator arity plus one implementation per kind
//! - `OperatorTable`: registry of descriptors; the standard one is built once
//! - `invoke`: validates, coerces and dispatches a single call
//! - `OperationHandle`: a copyable reference to a registered operator
//!
//! # Re-exports
//!
//! Value types come from `ink_value` and are re-exported for convenience:
//! `Value`, `ValueKind`, `ListValue`, `ListItem`, `Path`, `CastError`.

mod coerce;
mod descriptor;
mod dispatch;
pub mod errors;
mod handle;
mod implementation;
mod natives;
mod operator;
mod table;

pub use ink_value::{CastError, ListItem, ListValue, Path, Value, ValueKind};

pub use coerce::{coerce, join_kind, Operands};
pub use descriptor::{Arity, OperationDescriptor};
pub use dispatch::{invoke, invoke_symbol};
pub use errors::{OpError, OpErrorKind, OpResult};
pub use handle::OperationHandle;
pub use implementation::{BinaryImpl, Implementation, UnaryImpl};
pub use operator::Operator;
pub use table::{OperatorTable, Registration, RegistrationError, TableBuilder};

#[cfg(test)]
mod test_helpers;
#[cfg(test)]
mod tests;
