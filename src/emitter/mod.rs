//! Artifact emission pipelines
//!
//! This module handles:
//! - Embedded snippet lookup by derived resource key ([`store`])
//! - Emission of resolved snippet paths ([`snippets`])
//! - Emission of host-tagged ad-hoc files ([`adhoc`])

pub mod adhoc;
pub mod snippets;
pub mod store;

pub use adhoc::emit_adhoc_files;
pub use snippets::emit_snippets;
pub use store::SnippetStore;
