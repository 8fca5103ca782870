//! Ink Value - Runtime values for the Ink story runtime.
//!
//! This crate provides:
//! - `ValueKind`: the ordered set of value kinds used for operand promotion
//! - `Value`: immutable runtime values with `Arc`-shared payloads
//! - `Path`: divert target identity
//! - `ListValue` / `ListItem`: set-valued story lists
//! - Casting between kinds (`Value::cast`, `CastError`)
//!
//! # Heap Enforcement
//!
//! Heap payloads go through `Value::` factory methods. The `Heap<T>` wrapper
//! has a crate-private constructor, so values cannot be assembled around a
//! foreign `Arc` and every clone shares the original allocation.

mod cast;
mod heap;
mod kind;
mod list;
mod path;
mod value;

pub use cast::{float_to_int, int_to_float, CastError};
pub use heap::Heap;
pub use kind::ValueKind;
pub use list::{ListItem, ListValue};
pub use path::{Path, PathComponent};
pub use value::Value;
