use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;

use super::{IndexConfig, IndexStore, Loaded};
use crate::hash::content_hash;

fn store() -> (tempfile::TempDir, IndexStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = IndexStore::open(dir.path().join("stubs")).unwrap();
    (dir, store)
}

#[test]
fn test_miss_then_hit() {
    let (_dir, store) = store();
    let path = Path::new("R/utils.R");
    let source = "helper <- function(x) x";

    let (built, loaded) = store.load_or_build(path, source).unwrap();
    assert_eq!(loaded, Loaded::Miss);
    assert!(store.entry_path(path).exists());

    let (cached, loaded) = store.load_or_build(path, source).unwrap();
    assert_eq!(loaded, Loaded::Hit);
    assert_eq!(cached, built);
}

#[test]
fn test_changed_source_is_a_miss() {
    let (_dir, store) = store();
    let path = Path::new("a.R");
    store.load_or_build(path, "a <- 1").unwrap();
    assert!(store.load(path, content_hash("a <- 2")).unwrap().is_none());
    let (stubs, loaded) = store.load_or_build(path, "b <- 2").unwrap();
    assert_eq!(loaded, Loaded::Miss);
    assert_eq!(stubs.assignments().next().unwrap().1.name, "b");
}

#[test]
fn test_corrupt_entry_is_rebuilt_in_isolation() {
    let (_dir, store) = store();
    let good = Path::new("good.R");
    let bad = Path::new("bad.R");
    store.load_or_build(good, "g <- 1").unwrap();
    store.load_or_build(bad, "b <- 1").unwrap();
    let good_bytes = fs::read(store.entry_path(good)).unwrap();

    let mut bytes = fs::read(store.entry_path(bad)).unwrap();
    let last = bytes.len() - 1;
    bytes[last] ^= 0x55;
    fs::write(store.entry_path(bad), &bytes).unwrap();

    let (stubs, loaded) = store.load_or_build(bad, "b <- 1").unwrap();
    assert_eq!(loaded, Loaded::Repaired);
    assert_eq!(stubs.assignments().next().unwrap().1.name, "b");
    assert_eq!(store.load_or_build(bad, "b <- 1").unwrap().1, Loaded::Hit);

    assert_eq!(fs::read(store.entry_path(good)).unwrap(), good_bytes);
    assert_eq!(store.load_or_build(good, "g <- 1").unwrap().1, Loaded::Hit);
}

#[test]
fn test_garbage_entry_is_repaired() {
    let (_dir, store) = store();
    let path = Path::new("x.R");
    fs::write(store.entry_path(path), b"not a store entry").unwrap();
    assert_eq!(store.load_or_build(path, "x <- 1").unwrap().1, Loaded::Repaired);
}

#[test]
fn test_remove() {
    let (_dir, store) = store();
    let path = Path::new("gone.R");
    store.load_or_build(path, "z <- 1").unwrap();
    store.remove(path).unwrap();
    assert!(!store.entry_path(path).exists());
    store.remove(path).unwrap();
}

#[test]
fn test_config() {
    let config = IndexConfig::default();
    assert!(config.is_source(Path::new("pkg/R/file.R")));
    assert!(config.is_source(Path::new("script.r")));
    assert!(!config.is_source(Path::new("README.md")));
    assert!(IndexStore::from_config(&config).unwrap().is_none());

    let dir = tempfile::tempdir().unwrap();
    let config = IndexConfig {
        cache_dir: Some(dir.path().to_path_buf()),
        ..IndexConfig::default()
    };
    let store = IndexStore::from_config(&config).unwrap().unwrap();
    assert_eq!(store.dir(), dir.path());
}
