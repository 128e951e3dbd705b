//! Recently opened repositories, persisted in SQLite.
//!
//! Responsibilities:
//! - Own the single cache database handle (`<cache_dir>/cache.db`).
//! - Record repository opens with a last-access timestamp.
//! - List recent repositories, newest first, pruning stale entries.
//!
//! Does NOT handle:
//! - Deciding what counts as a repository (see `git::RepoValidator`).
//! - Rendering the recent list (see `ui::screens::dashboard`).
//!
//! Invariants:
//! - Each mutation is its own statement or transaction.
//! - Paths that stop being directories or repositories are deleted the
//!   next time the list is walked.

use std::path::{Path, PathBuf};

use rusqlite::{Connection, OptionalExtension, params};
use thiserror::Error;

use thalia_config::constants::CACHE_DB_FILE_NAME;

use crate::git::RepoValidator;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS Repositories (
    Path TEXT PRIMARY KEY,
    last_accessed INTEGER
);";

/// Errors from the recent-repository cache.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Failed to create cache directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cache database error: {0}")]
    Database(#[from] rusqlite::Error),
}

/// Handle to the recent-repository table.
pub struct RecentRepoCache {
    conn: Connection,
}

impl std::fmt::Debug for RecentRepoCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecentRepoCache")
            .field("path", &self.conn.path())
            .finish()
    }
}

impl RecentRepoCache {
    /// Open (creating if needed) the cache database under `cache_dir`.
    pub fn open(cache_dir: &Path) -> Result<Self, CacheError> {
        std::fs::create_dir_all(cache_dir).map_err(|source| CacheError::CreateDir {
            path: cache_dir.to_path_buf(),
            source,
        })?;
        let conn = Connection::open(cache_dir.join(CACHE_DB_FILE_NAME))?;
        Self::with_connection(conn)
    }

    /// A cache that lives only as long as the handle.
    pub fn open_in_memory() -> Result<Self, CacheError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, CacheError> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    /// Mark `path` as opened now.
    pub fn record_opened(&self, path: &Path) -> Result<(), CacheError> {
        self.record_opened_at(path, chrono::Utc::now().timestamp())
    }

    /// Mark `path` as opened at `timestamp` (seconds since the Unix epoch).
    pub fn record_opened_at(&self, path: &Path, timestamp: i64) -> Result<(), CacheError> {
        self.conn.execute(
            "INSERT INTO Repositories (Path, last_accessed) VALUES (?1, ?2)
             ON CONFLICT(Path) DO UPDATE SET last_accessed = excluded.last_accessed",
            params![path_key(path), timestamp],
        )?;
        tracing::debug!(path = %path.display(), timestamp, "Recorded repository access");
        Ok(())
    }

    pub fn contains(&self, path: &Path) -> Result<bool, CacheError> {
        Ok(self.last_accessed(path)?.is_some())
    }

    pub fn last_accessed(&self, path: &Path) -> Result<Option<i64>, CacheError> {
        let ts = self
            .conn
            .query_row(
                "SELECT last_accessed FROM Repositories WHERE Path = ?1",
                params![path_key(path)],
                |row| row.get(0),
            )
            .optional()?;
        Ok(ts)
    }

    /// Number of stored entries, valid or not.
    pub fn len(&self) -> Result<usize, CacheError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM Repositories", [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or(0))
    }

    pub fn is_empty(&self) -> Result<bool, CacheError> {
        Ok(self.len()? == 0)
    }

    /// Walk stored repositories, most recently accessed first.
    ///
    /// Entries are checked lazily as the iterator advances. Entries that are
    /// missing, not directories, or not repositories are skipped and deleted
    /// in one transaction once the iterator is exhausted or dropped. A read
    /// failure yields an empty iterator.
    pub fn list_recent<'a>(&'a self, validator: &'a dyn RepoValidator) -> RecentRepos<'a> {
        let pending = match self.query_paths() {
            Ok(paths) => paths,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read recent repositories");
                Vec::new()
            }
        };
        RecentRepos {
            cache: self,
            validator,
            pending: pending.into_iter(),
            stale: Vec::new(),
        }
    }

    fn query_paths(&self) -> Result<Vec<PathBuf>, CacheError> {
        let mut stmt = self
            .conn
            .prepare("SELECT Path FROM Repositories ORDER BY last_accessed DESC")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        let mut paths = Vec::new();
        for row in rows {
            paths.push(PathBuf::from(row?));
        }
        Ok(paths)
    }

    fn delete_paths(&self, paths: &[PathBuf]) -> Result<(), CacheError> {
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare("DELETE FROM Repositories WHERE Path = ?1")?;
            for path in paths {
                stmt.execute(params![path_key(path)])?;
            }
        }
        tx.commit()?;
        Ok(())
    }
}

/// Stored form of a path. Trailing separators are dropped so `/x/repo/`
/// and `/x/repo` share one row.
fn path_key(path: &Path) -> String {
    path.components()
        .collect::<PathBuf>()
        .to_string_lossy()
        .into_owned()
}

/// Lazy walk over recent repositories. See [`RecentRepoCache::list_recent`].
pub struct RecentRepos<'a> {
    cache: &'a RecentRepoCache,
    validator: &'a dyn RepoValidator,
    pending: std::vec::IntoIter<PathBuf>,
    stale: Vec<PathBuf>,
}

impl RecentRepos<'_> {
    fn prune(&mut self) {
        if self.stale.is_empty() {
            return;
        }
        let stale = std::mem::take(&mut self.stale);
        match self.cache.delete_paths(&stale) {
            Ok(()) => tracing::info!(count = stale.len(), "Pruned stale recent repositories"),
            Err(e) => tracing::warn!(error = %e, "Failed to prune recent repositories"),
        }
    }
}

impl Iterator for RecentRepos<'_> {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        for path in self.pending.by_ref() {
            if path.is_dir() && self.validator.is_repository(&path) {
                return Some(path);
            }
            tracing::debug!(path = %path.display(), "Skipping stale recent repository");
            self.stale.push(path);
        }
        self.prune();
        None
    }
}

impl Drop for RecentRepos<'_> {
    fn drop(&mut self) {
        self.prune();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AcceptAll;

    impl RepoValidator for AcceptAll {
        fn is_repository(&self, _path: &Path) -> bool {
            true
        }
    }

    #[test]
    fn test_upsert_updates_timestamp() {
        let cache = RecentRepoCache::open_in_memory().unwrap();
        let path = Path::new("/work/repo");
        cache.record_opened_at(path, 10).unwrap();
        cache.record_opened_at(path, 20).unwrap();
        assert_eq!(cache.len().unwrap(), 1);
        assert_eq!(cache.last_accessed(path).unwrap(), Some(20));
    }

    #[test]
    fn test_trailing_separator_shares_entry() {
        let cache = RecentRepoCache::open_in_memory().unwrap();
        cache.record_opened_at(Path::new("/work/repo/"), 10).unwrap();
        cache.record_opened_at(Path::new("/work/repo"), 20).unwrap();
        assert_eq!(cache.len().unwrap(), 1);
        assert_eq!(
            cache.last_accessed(Path::new("/work/repo/")).unwrap(),
            Some(20)
        );
    }

    #[test]
    fn test_missing_entry() {
        let cache = RecentRepoCache::open_in_memory().unwrap();
        assert!(cache.is_empty().unwrap());
        assert!(!cache.contains(Path::new("/nope")).unwrap());
        assert_eq!(cache.last_accessed(Path::new("/nope")).unwrap(), None);
    }

    #[test]
    fn test_nonexistent_paths_are_pruned() {
        let cache = RecentRepoCache::open_in_memory().unwrap();
        let gone = Path::new("/definitely/not/here/thalia");
        cache.record_opened_at(gone, 1).unwrap();
        let listed: Vec<_> = cache.list_recent(&AcceptAll).collect();
        assert!(listed.is_empty());
        assert!(!cache.contains(gone).unwrap());
    }
}
