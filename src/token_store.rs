//! Persisted bearer credential
//!
//! A single opaque token string stored at a fixed location on disk, read at
//! call time and cleared on logout. This is the only client-side persistence;
//! everything else is fetched fresh from the backend.

use crate::config::ClientConfig;
use std::path::PathBuf;
use tracing::debug;

const TOKEN_FILE: &str = "token";

#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Store at the default location under the app config directory.
    pub fn new() -> Self {
        Self {
            path: ClientConfig::config_dir().join(TOKEN_FILE),
        }
    }

    /// Store at an explicit path. Used by tests to avoid touching the real
    /// credential.
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the stored token, if any. Empty or unreadable files count as
    /// absent.
    pub fn load(&self) -> Option<String> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        let token = raw.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }

    /// Persist a new token, replacing any previous one.
    pub fn save(&self, token: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, token)
    }

    /// Remove the stored token. Missing file is not an error.
    pub fn clear(&self) {
        if let Err(err) = std::fs::remove_file(&self.path) {
            if err.kind() != std::io::ErrorKind::NotFound {
                debug!("failed to remove token file: {err}");
            }
        }
    }
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, TokenStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::at(dir.path().join("token"));
        (dir, store)
    }

    #[test]
    fn test_round_trip() {
        let (_dir, store) = temp_store();
        assert_eq!(store.load(), None);

        store.save("eyJhbGciOiJIUzI1NiJ9.test").unwrap();
        assert_eq!(store.load().as_deref(), Some("eyJhbGciOiJIUzI1NiJ9.test"));

        store.clear();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_clear_missing_is_noop() {
        let (_dir, store) = temp_store();
        store.clear();
        store.clear();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_whitespace_only_counts_as_absent() {
        let (_dir, store) = temp_store();
        store.save("  \n").unwrap();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::at(dir.path().join("nested").join("token"));
        store.save("abc").unwrap();
        assert_eq!(store.load().as_deref(), Some("abc"));
    }
}
