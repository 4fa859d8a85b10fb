//! Processed-cache persistence across process restarts.

use std::fs;

use cider_core::config::defaults::DEFAULT_CACHE_FILENAME;
use cider_core::config::CacheConfig;
use cider_listener::ProcessedCache;

fn config_for(dir: &tempfile::TempDir) -> CacheConfig {
    CacheConfig {
        dir: dir.path().display().to_string(),
        disabled: false,
        clear_on_start: false,
    }
}

#[test]
fn persists_ids_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir);

    let mut cache = ProcessedCache::open(&config).unwrap();
    cache.record(101).unwrap();
    cache.record(202).unwrap();
    drop(cache);

    let cache = ProcessedCache::open(&config).unwrap();
    assert!(cache.contains(101));
    assert!(cache.contains(202));
    assert!(!cache.contains(303));
    assert_eq!(cache.len(), 2);
}

#[test]
fn unparseable_lines_are_ignored_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir);
    let file = dir.path().join(DEFAULT_CACHE_FILENAME);
    fs::write(&file, "101\nnot-a-number\n\n  202  \ngarbage 303\n").unwrap();

    let cache = ProcessedCache::open(&config).unwrap();
    assert!(cache.contains(101));
    assert!(cache.contains(202));
    assert_eq!(cache.len(), 2);
}

#[test]
fn clear_on_start_truncates_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir);

    let mut cache = ProcessedCache::open(&config).unwrap();
    cache.record(7).unwrap();
    drop(cache);

    let cleared = CacheConfig {
        clear_on_start: true,
        ..config
    };
    let cache = ProcessedCache::open(&cleared).unwrap();
    assert!(cache.is_empty());

    let file = dir.path().join(DEFAULT_CACHE_FILENAME);
    assert_eq!(fs::read_to_string(&file).unwrap(), "");
}

#[test]
fn disabled_cache_never_touches_disk() {
    let dir = tempfile::tempdir().unwrap();
    let disabled = CacheConfig {
        dir: dir.path().display().to_string(),
        disabled: true,
        clear_on_start: false,
    };

    let mut cache = ProcessedCache::open(&disabled).unwrap();
    cache.record(42).unwrap();
    assert!(cache.contains(42));
    assert!(!dir.path().join(DEFAULT_CACHE_FILENAME).exists());

    // Re-enabling persistence starts from an empty file.
    let cache = ProcessedCache::open(&config_for(&dir)).unwrap();
    assert!(!cache.contains(42));
}

#[test]
fn recording_twice_appends_one_line() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir);

    let mut cache = ProcessedCache::open(&config).unwrap();
    cache.record(9).unwrap();
    cache.record(9).unwrap();

    let file = dir.path().join(DEFAULT_CACHE_FILENAME);
    assert_eq!(fs::read_to_string(&file).unwrap(), "9\n");
}

#[test]
fn appends_preserve_entries_from_earlier_runs() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir);

    let mut cache = ProcessedCache::open(&config).unwrap();
    cache.record(1).unwrap();
    drop(cache);

    let mut cache = ProcessedCache::open(&config).unwrap();
    cache.record(2).unwrap();
    drop(cache);

    let cache = ProcessedCache::open(&config).unwrap();
    assert!(cache.contains(1));
    assert!(cache.contains(2));
    assert_eq!(cache.len(), 2);
}
