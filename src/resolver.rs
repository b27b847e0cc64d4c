//! Feature resolution: Include/Exclude configuration to snippet paths.
//!
//! `Include` always dominates when non-empty; `Exclude` is consulted only
//! when `Include` is absent or empty; with neither, every registered
//! feature is active. Unknown names are skipped silently at lookup time,
//! so registry membership gates what actually gets emitted.

use crate::domain::FeatureRegistry;
use crate::options::CompilationOptions;

/// Resolve the active feature names for the given options, in stable order
///
/// For an `Include` resolution the order is first-occurrence order of the
/// configured list (unknown names included; they drop out at lookup). For
/// an `Exclude` or default resolution the order is registration order.
pub fn resolve_features(options: &CompilationOptions, registry: &FeatureRegistry) -> Vec<String> {
    let include = split_names(options.include.as_deref());
    if !include.is_empty() {
        return dedup_stable(include);
    }

    let exclude = split_names(options.exclude.as_deref());
    let all: Vec<String> = registry.feature_names().map(str::to_string).collect();
    if exclude.is_empty() {
        return all;
    }
    all.into_iter().filter(|name| !exclude.contains(name)).collect()
}

/// Resolve the final ordered, de-duplicated snippet-path list to emit
pub fn resolve_snippet_paths(
    options: &CompilationOptions,
    registry: &FeatureRegistry,
) -> Vec<String> {
    let mut paths: Vec<String> = Vec::new();
    for name in resolve_features(options, registry) {
        // Names with no registered feature contribute nothing
        let Some(feature) = registry.get(&name) else {
            continue;
        };
        for path in &feature.snippet_paths {
            if !paths.contains(path) {
                paths.push(path.clone());
            }
        }
    }
    paths
}

/// Split a `;`-delimited name list, dropping empty segments
fn split_names(list: Option<&str>) -> Vec<String> {
    list.unwrap_or_default()
        .split(';')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// De-duplicate preserving first-occurrence order
fn dedup_stable(names: Vec<String>) -> Vec<String> {
    let mut result: Vec<String> = Vec::with_capacity(names.len());
    for name in names {
        if !result.contains(&name) {
            result.push(name);
        }
    }
    result
}
