//! Story lists.
//!
//! A story list is a set of items drawn from one or more list definitions.
//! Each item remembers the definition it came from (`origin`) and carries an
//! integer value that orders it. Lists are immutable: every set operation
//! returns a new list.

use std::collections::BTreeSet;
use std::fmt;

/// One entry of a list definition, e.g. `colours.red` with value 1.
///
/// Field order matters: the derived ordering sorts by value first, which is
/// the order story lists are printed and compared in.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListItem {
    value: i64,
    origin: String,
    name: String,
}

impl ListItem {
    pub fn new(origin: impl Into<String>, name: impl Into<String>, value: i64) -> Self {
        ListItem {
            value,
            origin: origin.into(),
            name: name.into(),
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    /// `origin.name`, the fully qualified item name.
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.origin, self.name)
    }
}

impl fmt::Display for ListItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.origin, self.name)
    }
}

/// Ordered set of `ListItem`s.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListValue {
    items: BTreeSet<ListItem>,
}

impl ListValue {
    pub fn new() -> Self {
        ListValue::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in ascending value order.
    pub fn iter(&self) -> impl Iterator<Item = &ListItem> {
        self.items.iter()
    }

    pub fn contains_item(&self, item: &ListItem) -> bool {
        self.items.contains(item)
    }

    /// Item with the lowest value.
    pub fn min_item(&self) -> Option<&ListItem> {
        self.items.first()
    }

    /// Item with the highest value.
    pub fn max_item(&self) -> Option<&ListItem> {
        self.items.last()
    }

    pub fn union(&self, other: &ListValue) -> ListValue {
        self.items.union(&other.items).cloned().collect()
    }

    /// Items of `self` that are not in `other`.
    pub fn difference(&self, other: &ListValue) -> ListValue {
        self.items.difference(&other.items).cloned().collect()
    }

    pub fn intersection(&self, other: &ListValue) -> ListValue {
        self.items.intersection(&other.items).cloned().collect()
    }

    /// Whether every item of `other` is in `self`.
    ///
    /// An empty list neither contains nor is contained by anything.
    pub fn contains(&self, other: &ListValue) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        other.items.is_subset(&self.items)
    }

    /// Every item of `self` is above every item of `other`.
    pub fn greater_than(&self, other: &ListValue) -> bool {
        match (self.min_item(), other.max_item()) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(min), Some(other_max)) => min.value > other_max.value,
        }
    }

    /// Every item of `self` is below every item of `other`.
    pub fn less_than(&self, other: &ListValue) -> bool {
        match (self.max_item(), other.min_item()) {
            (_, None) => false,
            (None, Some(_)) => true,
            (Some(max), Some(other_min)) => max.value < other_min.value,
        }
    }

    /// Both bounds of `self` are at or above the matching bounds of `other`.
    pub fn greater_than_or_equals(&self, other: &ListValue) -> bool {
        match (self.bounds(), other.bounds()) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some((min, max)), Some((other_min, other_max))) => {
                min >= other_min && max >= other_max
            }
        }
    }

    /// Both bounds of `self` are at or below the matching bounds of `other`.
    pub fn less_than_or_equals(&self, other: &ListValue) -> bool {
        match (self.bounds(), other.bounds()) {
            (_, None) => false,
            (None, Some(_)) => true,
            (Some((min, max)), Some((other_min, other_max))) => {
                max <= other_max && min <= other_min
            }
        }
    }

    fn bounds(&self) -> Option<(i64, i64)> {
        Some((self.min_item()?.value, self.max_item()?.value))
    }
}

impl FromIterator<ListItem> for ListValue {
    fn from_iter<I: IntoIterator<Item = ListItem>>(iter: I) -> Self {
        ListValue {
            items: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for ListValue {
    /// Item names in value order, separated by `", "`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(&item.name)?;
        }
        Ok(())
    }
}
