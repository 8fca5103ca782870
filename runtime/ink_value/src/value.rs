//! Runtime values.
//!
//! # Heap Payloads
//!
//! Strings, divert targets and lists live behind `Heap<T>`, so cloning a
//! `Value` never copies text or items. Use the factory methods:
//!
//! ```text
//! let s = Value::string("hello");
//! let d = Value::divert_target(Path::parse("knot.stitch"));
//! let yes = Value::from_bool(true); // Int(1)
//! ```
//!
//! There is no boolean kind. Truth values are the integers 0 and 1.

use std::fmt;

use crate::heap::Heap;
use crate::kind::ValueKind;
use crate::list::ListValue;
use crate::path::Path;

/// Runtime value handed to and returned from native operators.
#[derive(Clone, PartialEq)]
pub enum Value {
    /// Integer value; also carries truth values as 0 / 1.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// String value.
    Str(Heap<String>),
    /// Divert target (a story location).
    DivertTarget(Heap<Path>),
    /// Story list.
    List(Heap<ListValue>),
    /// Marker left by a function call that returned nothing.
    Void,
}

// Factory Methods (ONLY way to construct heap values)

impl Value {
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    #[inline]
    pub fn float(x: f64) -> Self {
        Value::Float(x)
    }

    /// Truth value as an integer: `Int(1)` or `Int(0)`.
    #[inline]
    pub fn from_bool(b: bool) -> Self {
        Value::Int(i64::from(b))
    }

    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    #[inline]
    pub fn divert_target(path: Path) -> Self {
        Value::DivertTarget(Heap::new(path))
    }

    #[inline]
    pub fn list(list: ListValue) -> Self {
        Value::List(Heap::new(list))
    }
}

// Inspection

impl Value {
    /// Kind of this value, or `None` for `Void`.
    pub fn kind(&self) -> Option<ValueKind> {
        match self {
            Value::Int(_) => Some(ValueKind::Int),
            Value::Float(_) => Some(ValueKind::Float),
            Value::Str(_) => Some(ValueKind::String),
            Value::DivertTarget(_) => Some(ValueKind::DivertTarget),
            Value::List(_) => Some(ValueKind::List),
            Value::Void => None,
        }
    }

    pub fn is_void(&self) -> bool {
        matches!(self, Value::Void)
    }

    /// Name of this value's kind for diagnostics.
    pub fn type_name(&self) -> &'static str {
        self.kind().map_or("Void", ValueKind::name)
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_divert_target(&self) -> Option<&Path> {
        match self {
            Value::DivertTarget(path) => Some(&**path),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&ListValue> {
        match self {
            Value::List(list) => Some(&**list),
            _ => None,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Float(x) => write!(f, "Float({x:?})"),
            Value::Str(s) => write!(f, "Str({:?})", s.as_str()),
            Value::DivertTarget(path) => write!(f, "DivertTarget({})", &**path),
            Value::List(list) => write!(f, "List({:?})", &**list),
            Value::Void => write!(f, "Void"),
        }
    }
}

/// Story output form: strings unquoted, divert targets prefixed with `->`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => f.write_str(s.as_str()),
            Value::DivertTarget(path) => write!(f, "-> {}", &**path),
            Value::List(list) => write!(f, "{}", &**list),
            Value::Void => Ok(()),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::from_bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<Path> for Value {
    fn from(path: Path) -> Self {
        Value::divert_target(path)
    }
}

impl From<ListValue> for Value {
    fn from(list: ListValue) -> Self {
        Value::list(list)
    }
}
