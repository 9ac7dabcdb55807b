//! Service registry - maps API service roots to coarse service labels.

use std::collections::HashMap;

/// Exact-match table from the path segment after `/api` to the label of the
/// backend service that owns it.
///
/// Lookups never synthesize a label: an unknown root yields `None`, which
/// the classifier renders as the empty string. There is no wildcard or
/// prefix matching.
#[derive(Debug, Clone, Default)]
pub struct ServiceRegistry {
    labels: HashMap<String, String>,
}

impl ServiceRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from `(root_segment, label)` pairs.
    ///
    /// A root segment carries at most one label; later entries replace
    /// earlier ones.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut registry = Self::new();
        for (root, label) in entries {
            registry.insert(root, label);
        }
        registry
    }

    /// Register or replace the label for a service root.
    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, root: K, label: V) {
        self.labels.insert(root.into(), label.into());
    }

    /// Look up the label for a service root segment.
    #[inline]
    #[must_use]
    pub fn label(&self, root_segment: &str) -> Option<&str> {
        self.labels.get(root_segment).map(String::as_str)
    }

    /// Number of registered service roots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the registry has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
