use std::sync::Arc;
use std::thread;

use pretty_assertions::assert_eq;
use rpsi_ir::FileId;

use super::{FileState, IndexError, StubIndex};
use crate::stub::StubTree;

const A: FileId = FileId::new(1);
const B: FileId = FileId::new(2);

fn names(hits: &[super::StubRef]) -> Vec<(FileId, &str)> {
    hits.iter().map(|hit| (hit.file, hit.name())).collect()
}

#[test]
fn test_state_machine() {
    let index = StubIndex::new();
    assert_eq!(index.state(A), None);
    index.register(A);
    assert_eq!(index.state(A), Some(FileState::Unindexed));
    assert_eq!(index.drain_queue(), [A]);

    index.index_source(A, "f <- 1").unwrap();
    assert_eq!(index.state(A), Some(FileState::Indexed));
    assert!(index.drain_queue().is_empty());

    index.invalidate(A).unwrap();
    assert_eq!(index.state(A), Some(FileState::Unindexed));
    assert_eq!(index.next_queued(), Some(A));
    assert_eq!(index.next_queued(), None);
}

#[test]
fn test_invalidated_file_keeps_committed_stubs() {
    let index = StubIndex::new();
    index.index_source(A, "f <- 1").unwrap();
    index.invalidate(A).unwrap();
    assert_eq!(names(&index.find_assignments("f")), [(A, "f")]);
}

#[test]
fn test_queries() {
    let index = StubIndex::new();
    index
        .index_source(A, "f <- function(x, y) x\nlocal({ g <- 1 })")
        .unwrap();
    index.index_source(B, "f = 2\nh <- function(x) x").unwrap();

    assert_eq!(names(&index.find_assignments("f")), [(A, "f"), (B, "f")]);
    assert_eq!(names(&index.find_parameters("x")), [(A, "x"), (B, "x")]);
    assert!(index.find_parameters("f").is_empty());
    assert!(index.find_assignments("missing").is_empty());

    assert_eq!(
        names(&index.top_level_assignments()),
        [(A, "f"), (B, "f"), (B, "h")]
    );
    assert_eq!(names(&index.find_assignments("g")), [(A, "g")]);

    assert_eq!(index.file_stubs(B).unwrap().len(), 3);
    assert!(index.file_stubs(FileId::new(9)).is_none());
}

#[test]
fn test_reindex_touches_only_that_file() {
    let index = StubIndex::new();
    index.index_source(A, "shared <- 1\nold <- 2").unwrap();
    index.index_source(B, "shared <- 3").unwrap();
    let b_before = index.file_stubs(B).unwrap();

    index.invalidate(A).unwrap();
    index.index_source(A, "shared <- 1\nnew <- 2").unwrap();

    assert!(index.find_assignments("old").is_empty());
    assert_eq!(names(&index.find_assignments("new")), [(A, "new")]);
    assert_eq!(names(&index.find_assignments("shared")), [(A, "shared"), (B, "shared")]);
    assert!(Arc::ptr_eq(&b_before, &index.file_stubs(B).unwrap()));
}

#[test]
fn test_remove_drops_names() {
    let index = StubIndex::new();
    index.index_source(A, "only_here <- 1").unwrap();
    index.remove(A);
    assert!(index.find_assignments("only_here").is_empty());
    assert_eq!(index.state(A), None);
    assert!(matches!(index.invalidate(A), Err(IndexError::UnknownFile(f)) if f == A));
}

#[test]
fn test_run_on_removed_slot_links_nothing() {
    let index = StubIndex::new();
    index.index_source(A, "gone <- 1").unwrap();
    let stale = index.slot(A).unwrap();
    index.remove(A);

    let late = index.run_on(A, &stale, || Ok((*index_tree("gone <- 2")).clone()));
    assert!(matches!(late, Err(IndexError::UnknownFile(f)) if f == A));
    assert!(!index.names.contains_key("gone"));

    index.register(A);
    let replaced = index.run_on(A, &stale, || Ok(StubTree::default()));
    assert!(matches!(replaced, Err(IndexError::UnknownFile(f)) if f == A));
}

#[test]
fn test_remove_racing_with_indexing_leaves_no_orphans() {
    for _ in 0..50 {
        let index = StubIndex::new();
        index.index_source(A, "orphan <- 1").unwrap();
        thread::scope(|scope| {
            scope.spawn(|| {
                let _ = index.index_source(A, "orphan <- 2");
            });
            scope.spawn(|| index.remove(A));
        });
        if index.state(A).is_none() {
            assert!(!index.names.contains_key("orphan"));
        }
    }
}

fn index_tree(source: &str) -> Arc<StubTree> {
    StubIndex::new().index_source(B, source).unwrap()
}

#[test]
fn test_commit_prebuilt_stubs() {
    let index = StubIndex::new();
    let stubs = index.index_source(A, "k <- 1").unwrap();
    let tree: StubTree = (*stubs).clone();
    index.commit(B, tree).unwrap();
    assert_eq!(names(&index.find_assignments("k")), [(A, "k"), (B, "k")]);
    assert_eq!(index.files(), [A, B]);
}

#[test]
fn test_indexing_is_not_reentrant() {
    let index = StubIndex::new();
    index.register(A);
    let slot = index.slot(A).unwrap();
    let held = slot.writer.lock();
    assert!(matches!(
        index.index_source(A, "x <- 1"),
        Err(IndexError::AlreadyIndexing(f)) if f == A
    ));
    drop(held);
    index.index_source(A, "x <- 1").unwrap();
}

#[test]
fn test_invalidate_during_indexing_requeues() {
    let index = StubIndex::new();
    index.register(A);
    index.drain_queue();
    index
        .run(A, || {
            index.invalidate(A).unwrap();
            Ok(StubTree::default())
        })
        .unwrap();
    assert_eq!(index.state(A), Some(FileState::Unindexed));
    assert_eq!(index.drain_queue(), [A]);
}

#[test]
fn test_failed_build_leaves_file_unindexed() {
    let index = StubIndex::new();
    index.register(A);
    let err = index.run(A, || Err(IndexError::UnknownFile(A)));
    assert!(err.is_err());
    assert_eq!(index.state(A), Some(FileState::Unindexed));
}

#[test]
fn test_concurrent_readers_and_writers() {
    let index = StubIndex::new();
    let files: Vec<FileId> = (0..8).map(FileId::new).collect();
    thread::scope(|scope| {
        for &file in &files {
            let index = &index;
            scope.spawn(move || {
                for round in 0..20 {
                    let source = format!("common <- {round}\nf{} <- function(a) a", file.raw());
                    index.index_source(file, &source).unwrap();
                    let _ = index.invalidate(file);
                }
                index.index_source(file, "common <- 0").unwrap();
            });
            scope.spawn(move || {
                for _ in 0..50 {
                    for hit in index.find_assignments("common") {
                        assert_eq!(hit.name(), "common");
                    }
                }
            });
        }
    });
    assert_eq!(index.find_assignments("common").len(), files.len());
    assert!(index.find_parameters("a").is_empty());
}
