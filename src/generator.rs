//! End-to-end generation pass.
//!
//! Orchestrates one host invocation: feature resolution, snippet emission,
//! then ad-hoc file emission, in that order. Repeated runs with identical
//! inputs emit identical artifacts in identical order.

use crate::cancel::CancelToken;
use crate::domain::{ArtifactSink, FeatureRegistry, TaggedInputFile};
use crate::emitter::{SnippetStore, emit_adhoc_files, emit_snippets};
use crate::error::Result;
use crate::options::CompilationOptions;
use crate::resolver;

/// A configured generation pipeline over a registry and snippet store
#[derive(Debug, Clone)]
pub struct Generator<'a> {
    registry: &'a FeatureRegistry,
    store: &'a SnippetStore,
}

impl<'a> Generator<'a> {
    /// Create a generator over the given registry and store
    pub fn new(registry: &'a FeatureRegistry, store: &'a SnippetStore) -> Self {
        Self { registry, store }
    }

    /// Run one generation pass
    ///
    /// # Errors
    ///
    /// Returns an error when a selected ad-hoc file cannot be read or the
    /// pass is cancelled; resolution misses never error.
    pub fn run(
        &self,
        options: &CompilationOptions,
        files: &[TaggedInputFile],
        cancel: &CancelToken,
        sink: &mut dyn ArtifactSink,
    ) -> Result<()> {
        let paths = resolver::resolve_snippet_paths(options, self.registry);
        emit_snippets(
            &paths,
            options.use_public_modifier,
            self.store,
            cancel,
            sink,
        )?;
        emit_adhoc_files(files, cancel, sink)
    }
}
