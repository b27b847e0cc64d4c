//! Ad-hoc file generation: host-tagged input files to artifacts.
//!
//! Independent of the feature pipeline. Header-prefixing is the only
//! transformation; no visibility rewriting is applied.

use crate::cancel::CancelToken;
use crate::domain::{
    ArtifactSink, GENERATED_CODE_HEADER, GENERATED_FILE_SUFFIX, GeneratedArtifact, TaggedInputFile,
};
use crate::error::{Result, file_read_failed};

/// Emit every selected tagged file to the sink
///
/// Untagged files and files whose derived output name ends up empty or
/// whitespace-only are dropped silently. Cancellation is polled per file.
///
/// # Errors
///
/// Returns an error when a selected file cannot be read, or when the
/// cancellation token fires.
pub fn emit_adhoc_files(
    files: &[TaggedInputFile],
    cancel: &CancelToken,
    sink: &mut dyn ArtifactSink,
) -> Result<()> {
    for file in files {
        cancel.check()?;
        if !file.is_selected() {
            continue;
        }
        let Some(name) = output_name(file) else {
            continue;
        };
        let content = std::fs::read_to_string(&file.path)
            .map_err(|e| file_read_failed(file.path.display().to_string(), e.to_string()))?;
        sink.accept(GeneratedArtifact {
            name,
            content: format!("{GENERATED_CODE_HEADER}{content}"),
        });
    }
    Ok(())
}

/// Resolve the output name for a selected file
///
/// The explicit override wins when non-empty; otherwise the input's
/// basename with its extension replaced by the generated suffix. A final
/// name that is empty or whitespace-only yields `None`.
fn output_name(file: &TaggedInputFile) -> Option<String> {
    let name = match file.output_path.as_deref() {
        Some(over) if !over.is_empty() => over.to_string(),
        _ => {
            let file_name = file.path.file_name()?.to_string_lossy();
            let stem = file_name
                .rsplit_once('.')
                .map_or(file_name.as_ref(), |(stem, _)| stem);
            format!("{stem}{GENERATED_FILE_SUFFIX}")
        }
    };
    if name.trim().is_empty() {
        return None;
    }
    Some(name)
}
