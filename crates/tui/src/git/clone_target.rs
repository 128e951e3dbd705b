//! Clone target directory resolution.

use std::path::{Path, PathBuf};

/// Repository name derived from a clone URL.
///
/// Uses the last `/`-separated segment with a trailing `.git` removed.
/// Returns `None` when nothing usable remains.
pub fn repo_name_from_url(url: &str) -> Option<String> {
    let trimmed = url.trim().trim_end_matches('/');
    let last = trimmed.rsplit(['/', ':']).next().unwrap_or(trimmed);
    let name = last.strip_suffix(".git").unwrap_or(last);
    if name.is_empty() || name == "." || name == ".." {
        None
    } else {
        Some(name.to_string())
    }
}

/// A directory can receive a clone if it does not exist or is empty.
pub fn is_valid_clone_target(path: &Path) -> bool {
    if !path.exists() {
        return true;
    }
    path.is_dir()
        && std::fs::read_dir(path)
            .map(|mut entries| entries.next().is_none())
            .unwrap_or(false)
}

/// Pick the clone target for a directory chosen in the picker.
///
/// A non-empty `picked` directory gets the repository name appended. When
/// that path already exists, `default` is used instead and a warning is
/// returned for the user.
pub fn resolve_clone_target(
    picked: &Path,
    url: &str,
    default: &Path,
) -> (PathBuf, Option<String>) {
    if is_valid_clone_target(picked) {
        return (picked.to_path_buf(), None);
    }

    let Some(name) = repo_name_from_url(url) else {
        return (default.to_path_buf(), None);
    };

    let candidate = picked.join(name);
    if candidate.exists() {
        let warning = format!(
            "The directory {} already exists and is not empty. Please choose a different directory.",
            candidate.display()
        );
        return (default.to_path_buf(), Some(warning));
    }
    (candidate, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_repo_name_from_url() {
        assert_eq!(
            repo_name_from_url("https://github.com/owner/thalia.git").as_deref(),
            Some("thalia")
        );
        assert_eq!(
            repo_name_from_url("https://github.com/owner/thalia/").as_deref(),
            Some("thalia")
        );
        assert_eq!(
            repo_name_from_url("git@github.com:owner.git").as_deref(),
            Some("owner")
        );
        assert_eq!(repo_name_from_url("/srv/git/project").as_deref(), Some("project"));
        assert_eq!(repo_name_from_url(""), None);
        assert_eq!(repo_name_from_url(".git"), None);
    }

    #[test]
    fn test_missing_and_empty_dirs_are_valid() {
        let dir = TempDir::new().unwrap();
        assert!(is_valid_clone_target(dir.path()));
        assert!(is_valid_clone_target(&dir.path().join("missing")));

        std::fs::write(dir.path().join("file"), "x").unwrap();
        assert!(!is_valid_clone_target(dir.path()));
        assert!(!is_valid_clone_target(&dir.path().join("file")));
    }

    #[test]
    fn test_empty_pick_is_used_directly() {
        let dir = TempDir::new().unwrap();
        let (target, warning) =
            resolve_clone_target(dir.path(), "https://x/y/repo.git", Path::new("/default"));
        assert_eq!(target, dir.path());
        assert!(warning.is_none());
    }

    #[test]
    fn test_non_empty_pick_appends_repo_name() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("README"), "x").unwrap();
        let (target, warning) =
            resolve_clone_target(dir.path(), "https://x/y/repo.git", Path::new("/default"));
        assert_eq!(target, dir.path().join("repo"));
        assert!(warning.is_none());
    }

    #[test]
    fn test_existing_candidate_falls_back_to_default() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("repo")).unwrap();
        let (target, warning) =
            resolve_clone_target(dir.path(), "https://x/y/repo", Path::new("/default"));
        assert_eq!(target, Path::new("/default"));
        let warning = warning.unwrap();
        assert!(warning.contains("already exists and is not empty"));
    }

    #[test]
    fn test_non_empty_pick_without_url_uses_default() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("README"), "x").unwrap();
        let (target, warning) = resolve_clone_target(dir.path(), "", Path::new("/default"));
        assert_eq!(target, Path::new("/default"));
        assert!(warning.is_none());
    }
}
