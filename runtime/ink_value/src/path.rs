//! Divert target paths.
//!
//! A path names a location in the story: a knot, a stitch inside it, or a
//! numbered element of a container. The operator core only ever compares
//! paths for equality; everything else here exists so hosts can build and
//! print them.

use std::fmt;

/// One step of a `Path`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathComponent {
    /// Positional element of a container.
    Index(usize),
    /// Named child (knot, stitch, label, or `^` for the parent).
    Name(String),
}

impl PathComponent {
    /// Parse one dotted segment. All-digit segments are indices.
    pub fn parse(segment: &str) -> Self {
        match segment.parse::<usize>() {
            Ok(index) => PathComponent::Index(index),
            Err(_) => PathComponent::Name(segment.to_string()),
        }
    }

    /// Whether this component refers to the parent container.
    pub fn is_parent(&self) -> bool {
        matches!(self, PathComponent::Name(name) if name == "^")
    }
}

impl fmt::Display for PathComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathComponent::Index(index) => write!(f, "{index}"),
            PathComponent::Name(name) => f.write_str(name),
        }
    }
}

/// Identity of a divert target.
///
/// Two paths are equal when they have the same components and the same
/// relativity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    components: Vec<PathComponent>,
    is_relative: bool,
}

impl Path {
    pub fn new(components: Vec<PathComponent>, is_relative: bool) -> Self {
        Path {
            components,
            is_relative,
        }
    }

    /// Parse the dotted form, e.g. `knot.stitch.0`.
    ///
    /// A leading `.` marks a relative path. The empty string is the empty
    /// absolute path.
    pub fn parse(text: &str) -> Self {
        let (is_relative, rest) = match text.strip_prefix('.') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        let components = if rest.is_empty() {
            Vec::new()
        } else {
            rest.split('.').map(PathComponent::parse).collect()
        };
        Path {
            components,
            is_relative,
        }
    }

    pub fn components(&self) -> &[PathComponent] {
        &self.components
    }

    pub fn is_relative(&self) -> bool {
        self.is_relative
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn last_component(&self) -> Option<&PathComponent> {
        self.components.last()
    }
}

impl From<&str> for Path {
    fn from(text: &str) -> Self {
        Path::parse(text)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_relative {
            f.write_str(".")?;
        }
        for (i, component) in self.components.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{component}")?;
        }
        Ok(())
    }
}
