//! Newtype wrappers for node handles and anchor identifiers
//!
//! These keep document node indices and anchor strings from being mixed up
//! with arbitrary integers and strings.

use serde::{Serialize, Serializer};
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

/// A handle to a node of one parsed document.
///
/// A `NodeId` is only meaningful for the document that produced it.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(usize);

impl NodeId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the node in its document's arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An identifier for a document anchor (an element `id` and the matching `#fragment`)
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct AnchorId(Arc<str>);

impl AnchorId {
    /// Creates a new AnchorId from a string
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Returns the string representation of this anchor ID
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The hyperlink reference pointing at this anchor, e.g. `#Intro`.
    pub fn href(&self) -> String {
        format!("#{}", self.0)
    }
}

impl From<String> for AnchorId {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for AnchorId {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for AnchorId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnchorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for AnchorId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
