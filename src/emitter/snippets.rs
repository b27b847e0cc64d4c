//! Snippet emission: resolved paths to generated artifacts.

use crate::cancel::CancelToken;
use crate::domain::{
    ArtifactSink, GENERATED_CODE_HEADER, GENERATED_FILE_SUFFIX, GeneratedArtifact,
};
use crate::emitter::store::SnippetStore;
use crate::error::Result;
use crate::rewriter;

/// Emit the resolved snippet paths, in order, to the sink
///
/// Paths with no store entry are skipped silently; names are not checked
/// for collisions (the sink owns that concern). Cancellation is polled
/// per path and aborts before the in-flight artifact is emitted.
///
/// # Errors
///
/// Returns [`crate::error::SnipgenError::Cancelled`] when the token fires.
pub fn emit_snippets(
    paths: &[String],
    use_public_modifier: bool,
    store: &SnippetStore,
    cancel: &CancelToken,
    sink: &mut dyn ArtifactSink,
) -> Result<()> {
    for path in paths {
        cancel.check()?;
        let Some(raw) = store.get(path) else {
            continue;
        };
        let text = rewriter::apply(raw, use_public_modifier);
        sink.accept(GeneratedArtifact {
            name: artifact_name(path),
            content: format!("{GENERATED_CODE_HEADER}{text}"),
        });
    }
    Ok(())
}

/// Derive an artifact name from a snippet path
///
/// Basename of the path, extension stripped, generated suffix appended
/// (e.g., "Types/EquatableArray.cs" → "EquatableArray.g.cs").
pub(crate) fn artifact_name(path: &str) -> String {
    let file_name = path.rsplit('/').next().unwrap_or(path);
    let stem = file_name
        .rsplit_once('.')
        .map_or(file_name, |(stem, _)| stem);
    format!("{stem}{GENERATED_FILE_SUFFIX}")
}
