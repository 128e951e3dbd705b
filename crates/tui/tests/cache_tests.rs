//! Recent-repository cache tests against real repositories on disk.
//!
//! ## Invariants
//! - Entries come back most recent first.
//! - Paths that no longer exist or are no longer repositories are pruned
//!   once the listing is consumed.
//! - The database file survives reopening.

mod helpers;

use helpers::*;
use tempfile::TempDir;
use thalia_tui::cache::RecentRepoCache;
use thalia_tui::git::Git2Backend;

#[test]
fn test_recent_order_is_most_recent_first() {
    let dir = TempDir::new().unwrap();
    let a = init_repo_with_commit(&dir.path().join("a"));
    let b = init_repo_with_commit(&dir.path().join("b"));
    let c = init_repo_with_commit(&dir.path().join("c"));

    let cache = RecentRepoCache::open_in_memory().unwrap();
    cache.record_opened_at(&a, 30).unwrap();
    cache.record_opened_at(&b, 10).unwrap();
    cache.record_opened_at(&c, 20).unwrap();
    // Reopening moves an entry to the front
    cache.record_opened_at(&b, 40).unwrap();

    let backend = Git2Backend::new();
    let recent: Vec<_> = cache.list_recent(&backend).collect();
    assert_eq!(recent, vec![b.clone(), a, c]);
    assert_eq!(cache.last_accessed(&b).unwrap(), Some(40));
    assert_eq!(cache.len().unwrap(), 3);
}

#[test]
fn test_stale_entries_are_pruned() {
    let dir = TempDir::new().unwrap();
    let repo = init_repo_with_commit(&dir.path().join("repo"));
    let plain = dir.path().join("plain");
    std::fs::create_dir(&plain).unwrap();
    let gone = dir.path().join("gone");

    let cache = RecentRepoCache::open_in_memory().unwrap();
    cache.record_opened_at(&gone, 3).unwrap();
    cache.record_opened_at(&plain, 2).unwrap();
    cache.record_opened_at(&repo, 1).unwrap();

    let backend = Git2Backend::new();
    let recent: Vec<_> = cache.list_recent(&backend).collect();
    assert_eq!(recent, vec![repo.clone()]);

    assert!(cache.contains(&repo).unwrap());
    assert!(!cache.contains(&plain).unwrap());
    assert!(!cache.contains(&gone).unwrap());
}

#[test]
fn test_partially_consumed_listing_prunes_what_it_saw() {
    let dir = TempDir::new().unwrap();
    let repo = init_repo_with_commit(&dir.path().join("repo"));
    let gone = dir.path().join("gone");
    let later_gone = dir.path().join("later-gone");

    let cache = RecentRepoCache::open_in_memory().unwrap();
    cache.record_opened_at(&gone, 3).unwrap();
    cache.record_opened_at(&repo, 2).unwrap();
    cache.record_opened_at(&later_gone, 1).unwrap();

    let backend = Git2Backend::new();
    {
        let mut recent = cache.list_recent(&backend);
        assert_eq!(recent.next(), Some(repo.clone()));
    }

    assert!(!cache.contains(&gone).unwrap());
    // Never inspected, so still present
    assert!(cache.contains(&later_gone).unwrap());
}

#[test]
fn test_cache_persists_across_reopen() {
    let dir = TempDir::new().unwrap();
    let cache_dir = dir.path().join("cache");
    let repo = init_repo_with_commit(&dir.path().join("repo"));

    {
        let cache = RecentRepoCache::open(&cache_dir).unwrap();
        cache.record_opened(&repo).unwrap();
    }
    assert!(cache_dir.join("cache.db").is_file());

    let cache = RecentRepoCache::open(&cache_dir).unwrap();
    let backend = Git2Backend::new();
    let recent: Vec<_> = cache.list_recent(&backend).collect();
    assert_eq!(recent, vec![repo]);
}
