//! # Snapshot Round-Trip Tests
//!
//! End-to-end coverage of the save/load/compare pipeline over real files:
//!
//! - The fixed sample scenario (keys 10, 7, 4, 1, 5, 9, 17, 15, 20, 30)
//! - The 100k sequential-key scale scenario, which produces a maximally
//!   unbalanced linear-chain tree and exercises the iterative traversal,
//!   insertion, and teardown design
//! - Malformed-snapshot detection (truncated files must error, not
//!   silently yield a shorter tree)

use std::fs;

use tempfile::tempdir;
use treesnap::snapshot::{load_records, load_tree, save_tree, verify_round_trip};
use treesnap::{trees_equal, Record, Tree};

fn sample_tree() -> Tree {
    let keys = [10, 7, 4, 1, 5, 9, 17, 15, 20, 30];
    Tree::from_records(keys.iter().map(|&k| Record::new(k, k.to_string())))
}

#[test]
fn sample_tree_round_trips_through_a_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sample.snap");

    let tree = sample_tree();
    assert!(verify_round_trip(&tree, &path).unwrap());
}

#[test]
fn snapshot_file_holds_the_preorder_sequence() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sample.snap");

    let tree = sample_tree();
    save_tree(&tree, &path).unwrap();

    let keys: Vec<i64> = load_records(&path).unwrap().iter().map(|r| r.key).collect();
    assert_eq!(keys, vec![10, 7, 4, 1, 5, 9, 17, 15, 20, 30]);
}

#[test]
fn empty_tree_round_trips_as_an_empty_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.snap");

    let tree = Tree::new();
    save_tree(&tree, &path).unwrap();

    assert_eq!(fs::metadata(&path).unwrap().len(), 0);

    let restored = load_tree(&path).unwrap();
    assert!(restored.is_empty());
    assert!(trees_equal(&tree, &restored).unwrap());
}

#[test]
fn restored_tree_differs_from_a_modified_tree() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sample.snap");

    let tree = sample_tree();
    save_tree(&tree, &path).unwrap();
    let restored = load_tree(&path).unwrap();

    let mut modified = sample_tree();
    modified.insert(Record::new(31, "31"));

    assert!(trees_equal(&tree, &restored).unwrap());
    assert!(!trees_equal(&modified, &restored).unwrap());
}

#[test]
fn hundred_thousand_sequential_keys_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("chain.snap");

    // Sequentially increasing keys degenerate into a linear chain; nothing
    // in build, save, load, compare, or drop may recurse over the height.
    let count: i64 = 100_000;
    let tree = Tree::from_records((0..count).map(|k| Record::new(k, k.to_string())));

    save_tree(&tree, &path).unwrap();
    let restored = load_tree(&path).unwrap();

    assert!(trees_equal(&tree, &restored).unwrap());

    drop(restored);
    drop(tree);
}

#[test]
fn truncated_snapshot_is_reported_not_silently_loaded() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("truncated.snap");

    save_tree(&sample_tree(), &path).unwrap();

    let bytes = fs::read(&path).unwrap();
    fs::write(&path, &bytes[..bytes.len() - 3]).unwrap();

    let err = load_records(&path).unwrap_err();
    assert!(err.to_string().contains("failed to decode snapshot file"));
}

#[test]
fn garbage_between_frames_is_reported() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("garbage.snap");

    save_tree(&sample_tree(), &path).unwrap();

    let mut bytes = fs::read(&path).unwrap();
    bytes.extend_from_slice(&[0xDE, 0xAD]);
    fs::write(&path, &bytes).unwrap();

    assert!(load_records(&path).is_err());
}
