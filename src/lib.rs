//! snipgen — snippet-emission toolkit for source-generator pipelines
//!
//! Turns a declarative include/exclude configuration into an ordered list
//! of embedded source snippets, optionally rewrites their visibility
//! modifiers, and emits them — plus host-tagged ad-hoc files — as
//! generated artifacts. Also ships a small stage combinator for filtering
//! absent elements out of an incrementally recomputed sequence.
//!
//! Emitted text is opaque: nothing is compiled or validated beyond the
//! line-scoped visibility rewrite and the generated-code header prefix.
//!
//! Module map:
//! - [`domain`]: features, registry, artifacts, tagged files, sink trait
//! - [`options`]: host key/value configuration parsing
//! - [`resolver`]: Include/Exclude resolution to snippet paths
//! - [`rewriter`]: lexical `public` → `internal` line rewrite
//! - [`emitter`]: snippet store plus the two emission pipelines
//! - [`generator`]: one-call end-to-end pass
//! - [`pipeline`]: host-graph stage abstraction and absent-element filter
//! - [`builtin`]: the crate's own feature table and embedded snippets
//! - [`cancel`], [`error`]: cooperative cancellation and diagnostics

pub mod builtin;
pub mod cancel;
pub mod domain;
pub mod emitter;
pub mod error;
pub mod generator;
pub mod options;
pub mod pipeline;
pub mod resolver;
pub mod rewriter;

pub use cancel::CancelToken;
pub use domain::{
    ArtifactSink, Feature, FeatureRegistry, GENERATED_CODE_HEADER, GENERATED_FILE_SUFFIX,
    GeneratedArtifact, TaggedInputFile,
};
pub use emitter::SnippetStore;
pub use error::{Result, SnipgenError};
pub use generator::Generator;
pub use options::CompilationOptions;
pub use pipeline::{Stage, StageOutput, filter_absent};
