//! Tests for ad-hoc file generation through the end-to-end pass
//!
//! Coverage:
//! - **Selection**: only files whose flag equals the literal "true"
//! - **Naming**: override verbatim, else basename with `.g.cs`
//! - **Ordering**: ad-hoc artifacts follow snippet artifacts, in input order
//! - **No rewrite**: ad-hoc content is header-prefixed only

use std::path::Path;

use snipgen::{
    CancelToken, CompilationOptions, GeneratedArtifact, Generator, TaggedInputFile,
};

mod common;

fn write_input(dir: &Path, name: &str, content: &str) -> TaggedInputFile {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("fixture write succeeds");
    TaggedInputFile::new(path)
}

fn run_pass(files: &[TaggedInputFile]) -> Vec<GeneratedArtifact> {
    let registry = common::registry_ab();
    let store = common::store_ab();
    let mut sink: Vec<GeneratedArtifact> = Vec::new();
    Generator::new(&registry, &store)
        .run(
            &CompilationOptions::new(Some("A".to_string()), None, false),
            files,
            &CancelToken::new(),
            &mut sink,
        )
        .expect("pass succeeds");
    sink
}

#[test]
fn test_only_literally_tagged_files_selected() {
    let temp = tempfile::TempDir::new().expect("temp dir");
    let files = vec![
        write_input(temp.path(), "One.cs", "class One {}").with_generate("true"),
        write_input(temp.path(), "Two.cs", "class Two {}").with_generate("True"),
        write_input(temp.path(), "Three.cs", "class Three {}"),
    ];

    let artifacts = run_pass(&files);
    let names: Vec<&str> = artifacts.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["A.g.cs", "One.g.cs"]);
}

#[test]
fn test_override_wins_over_derived_name() {
    let temp = tempfile::TempDir::new().expect("temp dir");
    let files = vec![
        write_input(temp.path(), "Helpers.cs", "class C {}")
            .with_generate("true")
            .with_output_path("Custom.g.cs"),
    ];

    let artifacts = run_pass(&files);
    assert_eq!(artifacts[1].name, "Custom.g.cs");
}

#[test]
fn test_adhoc_content_not_visibility_rewritten() {
    let temp = tempfile::TempDir::new().expect("temp dir");
    let files =
        vec![write_input(temp.path(), "Api.cs", "public class Api {}").with_generate("true")];

    let artifacts = run_pass(&files);
    assert_eq!(
        artifacts[1].content,
        "// <auto-generated/>\npublic class Api {}"
    );
}

#[test]
fn test_adhoc_artifacts_follow_snippets_in_input_order() {
    let temp = tempfile::TempDir::new().expect("temp dir");
    let files = vec![
        write_input(temp.path(), "Zeta.cs", "class Z {}").with_generate("true"),
        write_input(temp.path(), "Alpha.cs", "class A {}").with_generate("true"),
    ];

    let names: Vec<String> = run_pass(&files).into_iter().map(|a| a.name).collect();
    assert_eq!(names, vec!["A.g.cs", "Zeta.g.cs", "Alpha.g.cs"]);
}

#[test]
fn test_whitespace_override_drops_file_silently() {
    let temp = tempfile::TempDir::new().expect("temp dir");
    let files = vec![
        write_input(temp.path(), "Kept.cs", "class K {}").with_generate("true"),
        write_input(temp.path(), "Dropped.cs", "class D {}")
            .with_generate("true")
            .with_output_path("  "),
    ];

    let names: Vec<String> = run_pass(&files).into_iter().map(|a| a.name).collect();
    assert_eq!(names, vec!["A.g.cs", "Kept.g.cs"]);
}

#[test]
fn test_missing_selected_file_fails_the_pass() {
    let temp = tempfile::TempDir::new().expect("temp dir");
    let files = vec![TaggedInputFile::new(temp.path().join("gone.cs")).with_generate("true")];

    let registry = common::registry_ab();
    let store = common::store_ab();
    let mut sink: Vec<GeneratedArtifact> = Vec::new();
    let result = Generator::new(&registry, &store).run(
        &CompilationOptions::default(),
        &files,
        &CancelToken::new(),
        &mut sink,
    );
    assert!(result.is_err());
}
