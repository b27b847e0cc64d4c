//! Shared fixtures for integration tests.

#![allow(dead_code)]

use snipgen::{FeatureRegistry, SnippetStore};

/// Registry with two single-snippet features, A and B
pub fn registry_ab() -> FeatureRegistry {
    FeatureRegistry::builder()
        .feature("A", ["Types/A.cs"])
        .feature("B", ["Types/B.cs"])
        .build()
        .expect("fixture registry is valid")
}

/// Store backing [`registry_ab`]
pub fn store_ab() -> SnippetStore {
    SnippetStore::new("Tests.Resources")
        .with_snippet("Types/A.cs", "public class A {}\n")
        .with_snippet("Types/B.cs", "public class B {}\n")
}
