use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identifier of a tracked render-layer element (a DOM id, an egui widget
/// key, a TUI region name — the host decides what it resolves to).
///
/// Backed by `Arc<str>` so cloning it into every per-tick `StyleCommand` is a
/// pointer copy, not a heap allocation. A scene references the same handful
/// of ids thousands of times over a scroll session.
#[derive(Debug, Clone, Eq, PartialOrd, Ord)]
pub struct TargetId(Arc<str>);

impl TargetId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for TargetId {
    fn eq(&self, other: &Self) -> bool {
        // Same Arc pointer is the common case after clones.
        Arc::ptr_eq(&self.0, &other.0) || *self.0 == *other.0
    }
}

impl PartialEq<str> for TargetId {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for TargetId {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl std::hash::Hash for TargetId {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        (*self.0).hash(state);
    }
}

impl std::borrow::Borrow<str> for TargetId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TargetId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TargetId {
    fn from(s: &str) -> Self {
        TargetId(Arc::from(s))
    }
}

impl From<String> for TargetId {
    fn from(s: String) -> Self {
        TargetId(Arc::from(s.as_str()))
    }
}

impl std::fmt::Display for TargetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

// Hand-rolled serde: a TargetId is just a string on the wire, and this avoids
// pulling in serde's `rc` feature.

impl Serialize for TargetId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TargetId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(TargetId(Arc::from(s.as_str())))
    }
}
