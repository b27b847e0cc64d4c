//! Artifact and input-file domain types.

use std::path::PathBuf;

/// Header prefixed verbatim to every emitted artifact's content
pub const GENERATED_CODE_HEADER: &str = "// <auto-generated/>\n";

/// Extension replacing the source extension in derived artifact names
pub const GENERATED_FILE_SUFFIX: &str = ".g.cs";

/// Literal value the generation flag must equal for a tagged file to be selected
pub const GENERATE_FLAG_TRUE: &str = "true";

/// An emitted (name, content) pair handed to the host's output sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    /// Artifact name (e.g., "EquatableArray.g.cs")
    pub name: String,

    /// Artifact text, always starting with [`GENERATED_CODE_HEADER`]
    pub content: String,
}

/// An externally supplied file the host may tag for generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedInputFile {
    /// Path to the input file on disk
    pub path: PathBuf,

    /// Generation flag metadata; the file is selected only when this
    /// equals [`GENERATE_FLAG_TRUE`] literally
    pub generate: Option<String>,

    /// Optional output-name override, used verbatim when non-empty
    pub output_path: Option<String>,
}

impl TaggedInputFile {
    /// Create an untagged input file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            generate: None,
            output_path: None,
        }
    }

    /// Set the generation flag metadata
    #[must_use]
    pub fn with_generate(mut self, flag: impl Into<String>) -> Self {
        self.generate = Some(flag.into());
        self
    }

    /// Set the output-name override metadata
    #[must_use]
    pub fn with_output_path(mut self, output_path: impl Into<String>) -> Self {
        self.output_path = Some(output_path.into());
        self
    }

    /// Whether the host tagged this file for generation
    pub fn is_selected(&self) -> bool {
        self.generate.as_deref() == Some(GENERATE_FLAG_TRUE)
    }
}

/// Consumer of emitted artifacts
///
/// Duplicate names across a pass are the sink's responsibility to reject
/// or merge; the emitters perform no collision detection.
pub trait ArtifactSink {
    /// Accept one emitted artifact
    fn accept(&mut self, artifact: GeneratedArtifact);
}

impl ArtifactSink for Vec<GeneratedArtifact> {
    fn accept(&mut self, artifact: GeneratedArtifact) {
        self.push(artifact);
    }
}
