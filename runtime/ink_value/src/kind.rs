//! Value kinds and their promotion order.

use std::fmt;

/// Kind of a runtime value.
///
/// The declaration order is the promotion order: when an operator receives
/// operands of different kinds, every operand is cast to the greatest kind
/// present. The discriminants are part of the contract, so new kinds are
/// appended and existing ones never move.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ValueKind {
    Int = 0,
    Float = 1,
    String = 2,
    DivertTarget = 3,
    List = 4,
}

impl ValueKind {
    /// Every kind, in promotion order.
    pub const ALL: [ValueKind; 5] = [
        ValueKind::Int,
        ValueKind::Float,
        ValueKind::String,
        ValueKind::DivertTarget,
        ValueKind::List,
    ];

    /// Position of this kind in the promotion order.
    #[inline]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            ValueKind::Int => "Int",
            ValueKind::Float => "Float",
            ValueKind::String => "String",
            ValueKind::DivertTarget => "DivertTarget",
            ValueKind::List => "List",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_promotion_order() {
        assert!(ValueKind::Int < ValueKind::Float);
        assert!(ValueKind::Float < ValueKind::String);
        assert!(ValueKind::String < ValueKind::DivertTarget);
        assert!(ValueKind::DivertTarget < ValueKind::List);
    }

    #[test]
    fn test_ordinals_are_stable() {
        let ordinals: Vec<u8> = ValueKind::ALL.iter().map(|k| k.ordinal()).collect();
        assert_eq!(ordinals, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_all_is_sorted() {
        assert!(ValueKind::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_display() {
        assert_eq!(ValueKind::Float.to_string(), "Float");
        assert_eq!(ValueKind::DivertTarget.to_string(), "DivertTarget");
    }
}
