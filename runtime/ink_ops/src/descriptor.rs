//! Canonical operation descriptors.
//!
//! One descriptor exists per operator in a table. It fixes the operator's
//! arity and holds at most one implementation per value kind. Lookup by kind
//! is a `match` over `ValueKind`, so adding a kind forces this file to grow a
//! slot for it.

use ink_value::ValueKind;

use crate::implementation::Implementation;
use crate::operator::Operator;

/// Number of operands an operator takes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Arity {
    Unary,
    Binary,
}

impl Arity {
    pub const fn count(self) -> usize {
        match self {
            Arity::Unary => 1,
            Arity::Binary => 2,
        }
    }
}

/// Implementation slots, one per `ValueKind`.
#[derive(Clone, Debug, Default)]
struct KindSlots {
    int: Option<Implementation>,
    float: Option<Implementation>,
    string: Option<Implementation>,
    divert_target: Option<Implementation>,
    list: Option<Implementation>,
}

impl KindSlots {
    fn get(&self, kind: ValueKind) -> Option<Implementation> {
        match kind {
            ValueKind::Int => self.int,
            ValueKind::Float => self.float,
            ValueKind::String => self.string,
            ValueKind::DivertTarget => self.divert_target,
            ValueKind::List => self.list,
        }
    }

    fn slot_mut(&mut self, kind: ValueKind) -> &mut Option<Implementation> {
        match kind {
            ValueKind::Int => &mut self.int,
            ValueKind::Float => &mut self.float,
            ValueKind::String => &mut self.string,
            ValueKind::DivertTarget => &mut self.divert_target,
            ValueKind::List => &mut self.list,
        }
    }
}

/// Canonical record for one operator: its arity and per-kind implementations.
#[derive(Clone, Debug)]
pub struct OperationDescriptor {
    operator: Operator,
    arity: Arity,
    slots: KindSlots,
}

impl OperationDescriptor {
    pub(crate) fn new(operator: Operator, arity: Arity) -> Self {
        OperationDescriptor {
            operator,
            arity,
            slots: KindSlots::default(),
        }
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn arity(&self) -> Arity {
        self.arity
    }

    /// Implementation for operands of `kind`, if the operator supports it.
    pub fn implementation(&self, kind: ValueKind) -> Option<Implementation> {
        self.slots.get(kind)
    }

    pub fn supports(&self, kind: ValueKind) -> bool {
        self.slots.get(kind).is_some()
    }

    /// Supported kinds in promotion order.
    pub fn kinds(&self) -> impl Iterator<Item = ValueKind> + '_ {
        ValueKind::ALL
            .into_iter()
            .filter(move |kind| self.supports(*kind))
    }

    /// Store `implementation` in its kind's slot, returning the one it replaced.
    ///
    /// The caller has checked that the implementation's arity matches.
    pub(crate) fn insert(&mut self, implementation: Implementation) -> Option<Implementation> {
        debug_assert_eq!(implementation.arity(), self.arity);
        self.slots
            .slot_mut(implementation.kind())
            .replace(implementation)
    }
}
