//! Domain models for snipgen
//!
//! This module contains pure domain objects representing the entities of a
//! generation pass: features and their registry, emitted artifacts, and
//! host-tagged input files.

pub mod artifact;
pub mod feature;

pub use artifact::{
    ArtifactSink, GENERATED_CODE_HEADER, GENERATED_FILE_SUFFIX, GeneratedArtifact, TaggedInputFile,
};
pub use feature::{Feature, FeatureRegistry, FeatureRegistryBuilder};
