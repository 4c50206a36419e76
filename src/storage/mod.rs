use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::error::Result;
use crate::models::User;

/// How many searched movie ids the history keeps.
pub const SEARCH_HISTORY_LIMIT: usize = 10;

/// File-backed local store: the browser localStorage analog.
///
/// Holds the auth token, the serialized user, and the bounded movie-search
/// history. Access is synchronous; the single UI thread serializes all
/// reads and writes, so last-write-wins is acceptable here. There is no
/// schema versioning; an unreadable file hydrates to an empty store.
#[derive(Debug)]
pub struct LocalStore {
    path: PathBuf,
    state: StoreState,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
struct StoreState {
    token: Option<String>,
    user: Option<User>,
    #[serde(default)]
    search_history: Vec<i64>,
}

impl LocalStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let state = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("local store at {:?} is corrupt ({}), starting empty", path, e);
                StoreState::default()
            }),
            Err(_) => StoreState::default(),
        };
        Ok(LocalStore { path, state })
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string_pretty(&self.state)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }

    pub fn token(&self) -> Option<&str> {
        self.state.token.as_deref()
    }

    pub fn user(&self) -> Option<&User> {
        self.state.user.as_ref()
    }

    pub fn set_session(&mut self, token: String, user: User) -> Result<()> {
        self.state.token = Some(token);
        self.state.user = Some(user);
        self.persist()
    }

    pub fn clear_session(&mut self) -> Result<()> {
        self.state.token = None;
        self.state.user = None;
        self.persist()
    }

    pub fn search_history(&self) -> &[i64] {
        &self.state.search_history
    }

    /// Record a searched movie id: most-recent-first, deduplicated,
    /// bounded to the last [`SEARCH_HISTORY_LIMIT`] entries.
    pub fn push_search(&mut self, movie_id: i64) -> Result<()> {
        self.state.search_history.retain(|id| *id != movie_id);
        self.state.search_history.insert(0, movie_id);
        self.state.search_history.truncate(SEARCH_HISTORY_LIMIT);
        self.persist()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn user() -> User {
        User {
            id: 1,
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            role: Role::User,
        }
    }

    #[test]
    fn session_round_trips_through_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut store = LocalStore::open(&path).unwrap();
        store.set_session("tok-123".to_string(), user()).unwrap();
        drop(store);

        let store = LocalStore::open(&path).unwrap();
        assert_eq!(store.token(), Some("tok-123"));
        assert_eq!(store.user().map(|u| u.id), Some(1));
    }

    #[test]
    fn clear_session_removes_token_and_user() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = LocalStore::open(dir.path().join("store.json")).unwrap();
        store.set_session("tok".to_string(), user()).unwrap();
        store.clear_session().unwrap();
        assert!(store.token().is_none());
        assert!(store.user().is_none());
    }

    #[test]
    fn search_history_is_bounded_and_deduplicated() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = LocalStore::open(dir.path().join("store.json")).unwrap();

        for id in 1..=12 {
            store.push_search(id).unwrap();
        }
        assert_eq!(store.search_history().len(), SEARCH_HISTORY_LIMIT);
        assert_eq!(store.search_history()[0], 12);
        // Oldest two fell off.
        assert!(!store.search_history().contains(&1));
        assert!(!store.search_history().contains(&2));

        // Re-searching an id moves it to the front without growing the list.
        store.push_search(5).unwrap();
        assert_eq!(store.search_history()[0], 5);
        assert_eq!(store.search_history().len(), SEARCH_HISTORY_LIMIT);
    }

    #[test]
    fn corrupt_file_hydrates_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "{broken").unwrap();

        let store = LocalStore::open(&path).unwrap();
        assert!(store.token().is_none());
        assert!(store.search_history().is_empty());
    }
}
