//! Embedded snippet store and resource-key derivation.
//!
//! Snippets are addressed by slash-separated paths; the store keys them by
//! a deterministic resource key: the store's namespace identifier plus the
//! path with separators replaced by `.`. Read-only after construction.

use std::borrow::Cow;
use std::collections::HashMap;

/// Key/value store mapping derived resource keys to raw snippet text
#[derive(Debug, Clone, Default)]
pub struct SnippetStore {
    namespace: String,
    entries: HashMap<String, Cow<'static, str>>,
}

impl SnippetStore {
    /// Create an empty store with the given namespace identifier
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            entries: HashMap::new(),
        }
    }

    /// Add a snippet under the key derived from `path`
    #[must_use]
    pub fn with_snippet(mut self, path: &str, content: impl Into<Cow<'static, str>>) -> Self {
        let key = self.resource_key(path);
        self.entries.insert(key, content.into());
        self
    }

    /// Derive the resource key for a snippet path
    ///
    /// Path separators become `.`, prefixed by the store's namespace
    /// (e.g., "Types/EquatableArray.cs" → "Ns.Types.EquatableArray.cs").
    pub fn resource_key(&self, path: &str) -> String {
        format!("{}.{}", self.namespace, path.replace('/', "."))
    }

    /// Look up a snippet's raw text by its path; absence is not an error
    pub fn get(&self, path: &str) -> Option<&str> {
        self.entries.get(&self.resource_key(path)).map(Cow::as_ref)
    }

    /// The store's namespace identifier
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Number of stored snippets
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no snippets
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
