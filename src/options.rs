//! Host-provided compilation options.
//!
//! The host supplies options as string key/value pairs. Missing keys take
//! their defaults; a present but malformed `UsePublicModifier` is a hard
//! error, since a broken flag cannot be safely defaulted.

use std::collections::HashMap;

use crate::error::{Result, invalid_flag};

/// Option key selecting the features to emit (`;`-delimited names)
pub const INCLUDE_KEY: &str = "Include";

/// Option key removing features from the full set (`;`-delimited names)
pub const EXCLUDE_KEY: &str = "Exclude";

/// Option key keeping `public` modifiers in emitted snippets
pub const USE_PUBLIC_MODIFIER_KEY: &str = "UsePublicModifier";

/// Options for a single generation pass
///
/// `include` and `exclude` are kept as the raw `;`-delimited strings the
/// host supplied; splitting and precedence live in [`crate::resolver`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompilationOptions {
    /// Feature names to emit; when non-empty this is the exclusive source of truth
    pub include: Option<String>,

    /// Feature names to subtract from the full set; consulted only when
    /// `include` is absent or empty
    pub exclude: Option<String>,

    /// Keep `public` modifiers instead of rewriting them to `internal`
    pub use_public_modifier: bool,
}

impl CompilationOptions {
    /// Create options directly, bypassing key/value parsing
    pub fn new(
        include: Option<String>,
        exclude: Option<String>,
        use_public_modifier: bool,
    ) -> Self {
        Self {
            include,
            exclude,
            use_public_modifier,
        }
    }

    /// Build options from host-provided key/value configuration
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::SnipgenError::InvalidFlag`] when
    /// `UsePublicModifier` is present but not `"true"` or `"false"`.
    pub fn from_key_values(options: &HashMap<String, String>) -> Result<Self> {
        let use_public_modifier = match options.get(USE_PUBLIC_MODIFIER_KEY) {
            None => false,
            Some(value) => parse_flag(USE_PUBLIC_MODIFIER_KEY, value)?,
        };

        Ok(Self {
            include: options.get(INCLUDE_KEY).cloned(),
            exclude: options.get(EXCLUDE_KEY).cloned(),
            use_public_modifier,
        })
    }
}

/// Parse a strict boolean option value
fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(invalid_flag(key, other)),
    }
}
