//! Session persistence
//!
//! One JSON file in the work dir holds the current session so a restart
//! keeps the operator logged in. A file that fails to parse is deleted
//! and treated as logged out.

use parking_lot::RwLock;
use shared::error::{AppError, AppResult};
use shared::models::StoredSession;
use std::path::PathBuf;

pub struct SessionStore {
    path: PathBuf,
    current: RwLock<Option<StoredSession>>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Load the persisted session (if any) from `path`
    pub fn load(path: PathBuf) -> Self {
        let current = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<StoredSession>(&raw) {
                Ok(session) => Some(session),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e,
                        "discarding corrupted session file");
                    let _ = std::fs::remove_file(&path);
                    None
                }
            },
            Err(_) => None,
        };
        Self {
            path,
            current: RwLock::new(current),
        }
    }

    /// Current session, None when logged out
    pub fn current(&self) -> Option<StoredSession> {
        self.current.read().clone()
    }

    /// Persist and activate a session
    pub fn save(&self, session: StoredSession) -> AppResult<()> {
        let raw = serde_json::to_string_pretty(&session)?;
        std::fs::write(&self.path, raw)
            .map_err(|e| AppError::internal(format!("failed to write session file: {e}")))?;
        *self.current.write() = Some(session);
        Ok(())
    }

    /// Clear the session and remove the file
    pub fn clear(&self) {
        *self.current.write() = None;
        let _ = std::fs::remove_file(&self.path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{Role, SessionUser};

    fn session() -> StoredSession {
        StoredSession {
            role: Role::Admin,
            user: SessionUser {
                name: "Admin".into(),
                position: None,
            },
        }
    }

    #[test]
    fn test_save_load_clear() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = SessionStore::load(path.clone());
        assert!(store.current().is_none());

        store.save(session()).unwrap();
        assert!(store.current().is_some());

        // Survives a reload
        let reloaded = SessionStore::load(path.clone());
        assert_eq!(reloaded.current(), Some(session()));

        store.clear();
        assert!(store.current().is_none());
        assert!(!path.exists());
    }

    #[test]
    fn test_corrupted_file_cleared() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json {").unwrap();

        let store = SessionStore::load(path.clone());
        assert!(store.current().is_none());
        assert!(!path.exists());
    }
}
