//! Tests for the absent-element filter and the stage abstraction
//!
//! Coverage:
//! - **Order**: k present of k+m elements survive, relative order intact
//! - **Element kinds**: identical behavior for value and heap element types
//! - **Memoization transparency**: the filter adds no caching policy of
//!   its own; change flags still follow output equality
//! - **Restartability**: same upstream state, same sequence

use snipgen::{Stage, filter_absent};

#[test]
fn test_mixed_sequence_keeps_present_elements_in_order() {
    assert_eq!(
        filter_absent([Some(1), None, Some(2), None, Some(3)]),
        vec![1, 2, 3]
    );
}

#[test]
fn test_all_absent_yields_empty() {
    let filtered: Vec<String> = filter_absent([None, None, None]);
    assert!(filtered.is_empty());
}

#[test]
fn test_all_present_yields_original_sequence() {
    let filtered = filter_absent(["a", "b", "c", "d", "e"].map(Some));
    assert_eq!(filtered, vec!["a", "b", "c", "d", "e"]);
}

#[test]
fn test_value_and_heap_kinds_behave_identically() {
    let values = filter_absent([Some(1), None, Some(2)]);
    let heaps = filter_absent([Some("1".to_string()), None, Some("2".to_string())]);
    assert_eq!(values.len(), heaps.len());
    assert_eq!(
        heaps,
        values.iter().map(ToString::to_string).collect::<Vec<_>>()
    );
}

#[test]
fn test_filtered_stage_memoizes_like_unfiltered() {
    let mut stage = Stage::new(|input: &Vec<Option<u32>>| input.clone()).filter_absent();

    let input = vec![Some(1), None, Some(2)];
    let first = stage.run(&input);
    assert_eq!(first.value, vec![1, 2]);
    assert!(first.changed);

    let second = stage.run(&input);
    assert_eq!(second.value, vec![1, 2]);
    assert!(!second.changed, "equal input must hit the cache");
}

#[test]
fn test_filtered_stage_unchanged_when_absent_slots_move() {
    // A different input producing the same present elements is recomputed
    // but reports no change.
    let mut stage = Stage::new(|input: &Vec<Option<u32>>| input.clone()).filter_absent();

    stage.run(&vec![Some(1), None, Some(2)]);
    let output = stage.run(&vec![None, Some(1), Some(2)]);
    assert_eq!(output.value, vec![1, 2]);
    assert!(!output.changed);
}

#[test]
fn test_filtered_stage_reports_change_on_new_elements() {
    let mut stage = Stage::new(|input: &Vec<Option<u32>>| input.clone()).filter_absent();

    stage.run(&vec![Some(1)]);
    let output = stage.run(&vec![Some(1), Some(2)]);
    assert_eq!(output.value, vec![1, 2]);
    assert!(output.changed);
}
