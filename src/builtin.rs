//! Built-in feature table and embedded snippet store.
//!
//! The crate ships one feature, `EquatableArray`, whose snippet files are
//! embedded at compile time from `resources/`. Hosts with their own
//! snippets construct their own registry and store instead.

use crate::domain::FeatureRegistry;
use crate::emitter::SnippetStore;
use crate::error::Result;

/// Namespace identifier prefixing built-in resource keys
pub const BUILTIN_NAMESPACE: &str = "Snipgen.Resources";

/// Name of the built-in equatable-array feature
pub const EQUATABLE_ARRAY: &str = "EquatableArray";

/// The built-in feature table
///
/// # Errors
///
/// Never fails for the shipped table; the `Result` mirrors
/// [`FeatureRegistry::new`].
pub fn registry() -> Result<FeatureRegistry> {
    FeatureRegistry::builder()
        .feature(
            EQUATABLE_ARRAY,
            ["Types/EquatableArray.cs", "Types/EquatableArrayExtensions.cs"],
        )
        .build()
}

/// The embedded store backing the built-in feature table
pub fn store() -> SnippetStore {
    SnippetStore::new(BUILTIN_NAMESPACE)
        .with_snippet(
            "Types/EquatableArray.cs",
            include_str!("../resources/Types/EquatableArray.cs"),
        )
        .with_snippet(
            "Types/EquatableArrayExtensions.cs",
            include_str!("../resources/Types/EquatableArrayExtensions.cs"),
        )
}
