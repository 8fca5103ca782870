//! Native operator symbols.
//!
//! The symbol set is closed: the story compiler emits exactly these strings
//! and the runtime resolves each to one canonical descriptor.

use std::fmt;

/// A native operator, identified by its story-format symbol.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operator {
    // Arithmetic
    Add,
    Subtract,
    Multiply,
    Divide,
    Mod,
    /// Unary minus. Spelled `_` to keep it apart from subtraction.
    Negate,

    // Comparison
    Equal,
    Greater,
    Less,
    GreaterThanOrEquals,
    LessThanOrEquals,
    NotEquals,
    Not,

    // Logical
    And,
    Or,

    // Numeric helpers
    Min,
    Max,
    Pow,
    Floor,
    Ceiling,
    Int,
    Float,

    // Containment
    Has,
    Hasnt,
    Intersect,
}

impl Operator {
    /// Every operator, in declaration order.
    pub const ALL: [Operator; 25] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
        Operator::Mod,
        Operator::Negate,
        Operator::Equal,
        Operator::Greater,
        Operator::Less,
        Operator::GreaterThanOrEquals,
        Operator::LessThanOrEquals,
        Operator::NotEquals,
        Operator::Not,
        Operator::And,
        Operator::Or,
        Operator::Min,
        Operator::Max,
        Operator::Pow,
        Operator::Floor,
        Operator::Ceiling,
        Operator::Int,
        Operator::Float,
        Operator::Has,
        Operator::Hasnt,
        Operator::Intersect,
    ];

    /// Returns the story-format symbol for this operator.
    ///
    /// Used in error messages to show the exact operator that failed.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            // Arithmetic
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Mod => "%",
            Self::Negate => "_",
            // Comparison
            Self::Equal => "==",
            Self::Greater => ">",
            Self::Less => "<",
            Self::GreaterThanOrEquals => ">=",
            Self::LessThanOrEquals => "<=",
            Self::NotEquals => "!=",
            Self::Not => "!",
            // Logical
            Self::And => "&&",
            Self::Or => "||",
            // Numeric helpers
            Self::Min => "MIN",
            Self::Max => "MAX",
            Self::Pow => "POW",
            Self::Floor => "FLOOR",
            Self::Ceiling => "CEILING",
            Self::Int => "INT",
            Self::Float => "FLOAT",
            // Containment
            Self::Has => "?",
            Self::Hasnt => "!?",
            Self::Intersect => "^",
        }
    }

    /// Resolve a story-format symbol. Symbols are case-sensitive.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let op = match symbol {
            "+" => Self::Add,
            "-" => Self::Subtract,
            "*" => Self::Multiply,
            "/" => Self::Divide,
            "%" => Self::Mod,
            "_" => Self::Negate,
            "==" => Self::Equal,
            ">" => Self::Greater,
            "<" => Self::Less,
            ">=" => Self::GreaterThanOrEquals,
            "<=" => Self::LessThanOrEquals,
            "!=" => Self::NotEquals,
            "!" => Self::Not,
            "&&" => Self::And,
            "||" => Self::Or,
            "MIN" => Self::Min,
            "MAX" => Self::Max,
            "POW" => Self::Pow,
            "FLOOR" => Self::Floor,
            "CEILING" => Self::Ceiling,
            "INT" => Self::Int,
            "FLOAT" => Self::Float,
            "?" => Self::Has,
            "!?" => Self::Hasnt,
            "^" => Self::Intersect,
            _ => return None,
        };
        Some(op)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}
