// crates/shared-kernel/src/value_objects/doc_path.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordered path segments identifying one document: directory names plus the
/// final document name with its extension stripped. Segment order mirrors
/// filesystem nesting order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocPath(Vec<String>);

impl DocPath {
    pub fn new(segments: Vec<String>) -> Self {
        Self(segments)
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Final segment, i.e. the document name.
    pub fn name(&self) -> &str {
        self.0.last().map(String::as_str).unwrap_or_default()
    }

    /// URL form with a leading slash: `/nature/ocean`.
    pub fn route(&self) -> String {
        format!("/{}", self.0.join("/"))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for DocPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("/"))
    }
}

impl<S: Into<String>> FromIterator<S> for DocPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
