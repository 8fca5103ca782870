//! Operator table: the registry of canonical descriptors.
//!
//! A table is built once through `TableBuilder` and is read-only afterwards.
//! The process-wide standard table lives in a `OnceLock`, so the first caller
//! from any thread builds it and every other caller waits for and then shares
//! the finished table. Hosts that want their own operator set build a table
//! themselves and hold it (e.g. in an `Arc`).

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use crate::descriptor::{Arity, OperationDescriptor};
use crate::implementation::Implementation;
use crate::natives::STANDARD_REGISTRATIONS;
use crate::operator::Operator;

/// One declarative entry: attach `implementation` to `operator`.
#[derive(Copy, Clone, Debug)]
pub struct Registration {
    pub operator: Operator,
    pub implementation: Implementation,
}

impl Registration {
    pub const fn new(operator: Operator, implementation: Implementation) -> Self {
        Registration {
            operator,
            implementation,
        }
    }
}

/// Table construction failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    /// An implementation's arity disagrees with the operator's descriptor.
    #[error(
        "operator '{operator}' is registered with {} operand(s); cannot add an implementation taking {}",
        .registered.count(),
        .attempted.count()
    )]
    ArityConflict {
        operator: Operator,
        registered: Arity,
        attempted: Arity,
    },
}

/// Builder for an `OperatorTable`.
#[derive(Default)]
pub struct TableBuilder {
    descriptors: FxHashMap<Operator, OperationDescriptor>,
}

impl TableBuilder {
    pub fn new() -> Self {
        TableBuilder::default()
    }

    /// Builder preloaded with the standard operator set.
    pub fn standard() -> Self {
        let mut builder = TableBuilder::new();
        if let Err(err) = builder.register_all(STANDARD_REGISTRATIONS) {
            // Arity consistency of the built-in list is covered by tests.
            unreachable!("built-in native operators are inconsistent: {err}");
        }
        builder
    }

    /// Attach `implementation` to `operator`.
    ///
    /// The first registration for an operator creates its descriptor and fixes
    /// its arity. Registering a second implementation for the same kind
    /// replaces the first.
    pub fn register(
        &mut self,
        operator: Operator,
        implementation: Implementation,
    ) -> Result<&mut Self, RegistrationError> {
        let descriptor = self
            .descriptors
            .entry(operator)
            .or_insert_with(|| OperationDescriptor::new(operator, implementation.arity()));

        if descriptor.arity() != implementation.arity() {
            return Err(RegistrationError::ArityConflict {
                operator,
                registered: descriptor.arity(),
                attempted: implementation.arity(),
            });
        }
        descriptor.insert(implementation);
        Ok(self)
    }

    pub fn register_all(
        &mut self,
        registrations: &[Registration],
    ) -> Result<&mut Self, RegistrationError> {
        for registration in registrations {
            self.register(registration.operator, registration.implementation)?;
        }
        Ok(self)
    }

    pub fn build(self) -> OperatorTable {
        let table = OperatorTable {
            descriptors: self.descriptors,
        };
        tracing::debug!(
            operators = table.len(),
            implementations = table.implementation_count(),
            "built native operator table"
        );
        table
    }
}

/// Read-only registry mapping operators to their canonical descriptors.
#[derive(Debug)]
pub struct OperatorTable {
    descriptors: FxHashMap<Operator, OperationDescriptor>,
}

static GLOBAL_TABLE: OnceLock<OperatorTable> = OnceLock::new();

impl OperatorTable {
    pub fn builder() -> TableBuilder {
        TableBuilder::new()
    }

    /// A fresh table holding the standard operator set.
    pub fn standard() -> Self {
        TableBuilder::standard().build()
    }

    /// The process-wide standard table (lazily initialized).
    pub fn global() -> &'static OperatorTable {
        GLOBAL_TABLE.get_or_init(OperatorTable::standard)
    }

    #[inline]
    pub fn lookup(&self, operator: Operator) -> Option<&OperationDescriptor> {
        self.descriptors.get(&operator)
    }

    /// Look up a descriptor by its story-format symbol.
    pub fn lookup_symbol(&self, symbol: &str) -> Option<&OperationDescriptor> {
        Operator::from_symbol(symbol).and_then(|operator| self.lookup(operator))
    }

    /// Whether `symbol` names an operator registered in this table.
    pub fn exists(&self, symbol: &str) -> bool {
        self.lookup_symbol(symbol).is_some()
    }

    /// Registered operators in declaration order.
    pub fn operators(&self) -> Vec<Operator> {
        let mut operators: Vec<Operator> = self.descriptors.keys().copied().collect();
        operators.sort_unstable();
        operators
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Total (operator, kind) implementations across all descriptors.
    pub fn implementation_count(&self) -> usize {
        self.descriptors
            .values()
            .map(|descriptor| descriptor.kinds().count())
            .sum()
    }
}

impl Default for OperatorTable {
    fn default() -> Self {
        Self::standard()
    }
}
