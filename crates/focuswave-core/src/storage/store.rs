//! JSON-file record store.
//!
//! Persists user profiles in `users.json` and session records in
//! `sessions.json`, each as one flat JSON array read and written whole.
//! Semantics are last-write-wins with no transactional guarantees; callers
//! needing mutual exclusion across processes must serialize externally.
//!
//! The [`RecordStore`] trait keeps the store swappable -- an append-only or
//! database-backed variant is a drop-in replacement.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::StoreError;
use crate::profile::{FocusProfile, LifestyleInput};
use crate::session::SessionRecord;

/// One stored user: latest input, latest profile, write timestamps.
///
/// One record per user id. Re-analysis overwrites input and profile but
/// `created_at` keeps the first-write timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub user_id: String,
    pub input: LifestyleInput,
    pub profile: FocusProfile,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Persistence contract for user and session records.
pub trait RecordStore {
    fn find_user(&self, user_id: &str) -> Result<Option<UserRecord>, StoreError>;

    /// Overwrite-or-insert by user id, preserving the stored `created_at`.
    fn upsert_user(&self, user: UserRecord) -> Result<(), StoreError>;

    fn find_session(&self, session_id: &str) -> Result<Option<SessionRecord>, StoreError>;

    fn append_session(&self, session: SessionRecord) -> Result<(), StoreError>;

    /// Overwrite by session id (last write wins).
    fn update_session(&self, session: SessionRecord) -> Result<(), StoreError>;

    /// Sessions for `user_id`, ordered by start time descending.
    fn list_sessions(
        &self,
        user_id: &str,
        completed_only: bool,
    ) -> Result<Vec<SessionRecord>, StoreError>;
}

/// Flat-file JSON store rooted at a data directory.
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    /// Open the store at `~/.config/focuswave/`.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be created.
    pub fn open() -> Result<Self, StoreError> {
        let dir = data_dir().map_err(|e| StoreError::OpenFailed(e.to_string()))?;
        Ok(Self { dir })
    }

    /// Open the store at an explicit directory (for tests).
    pub fn open_at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn users_path(&self) -> PathBuf {
        self.dir.join("users.json")
    }

    fn sessions_path(&self) -> PathBuf {
        self.dir.join("sessions.json")
    }

    /// Read a whole collection; a missing file is an empty collection.
    fn read_collection<T: DeserializeOwned>(&self, path: &Path) -> Result<Vec<T>, StoreError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(StoreError::ReadFailed {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
        };
        serde_json::from_str(&content).map_err(|e| StoreError::Corrupt {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    fn write_collection<T: Serialize>(&self, path: &Path, records: &[T]) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(records).map_err(|e| StoreError::Corrupt {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, content).map_err(|e| StoreError::WriteFailed {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

impl RecordStore for JsonStore {
    fn find_user(&self, user_id: &str) -> Result<Option<UserRecord>, StoreError> {
        let users: Vec<UserRecord> = self.read_collection(&self.users_path())?;
        Ok(users.into_iter().find(|u| u.user_id == user_id))
    }

    fn upsert_user(&self, mut user: UserRecord) -> Result<(), StoreError> {
        let path = self.users_path();
        let mut users: Vec<UserRecord> = self.read_collection(&path)?;
        match users.iter_mut().find(|u| u.user_id == user.user_id) {
            Some(existing) => {
                user.created_at = existing.created_at;
                *existing = user;
            }
            None => users.push(user),
        }
        self.write_collection(&path, &users)
    }

    fn find_session(&self, session_id: &str) -> Result<Option<SessionRecord>, StoreError> {
        let sessions: Vec<SessionRecord> = self.read_collection(&self.sessions_path())?;
        Ok(sessions.into_iter().find(|s| s.session_id == session_id))
    }

    fn append_session(&self, session: SessionRecord) -> Result<(), StoreError> {
        let path = self.sessions_path();
        let mut sessions: Vec<SessionRecord> = self.read_collection(&path)?;
        sessions.push(session);
        self.write_collection(&path, &sessions)
    }

    fn update_session(&self, session: SessionRecord) -> Result<(), StoreError> {
        let path = self.sessions_path();
        let mut sessions: Vec<SessionRecord> = self.read_collection(&path)?;
        match sessions
            .iter_mut()
            .find(|s| s.session_id == session.session_id)
        {
            Some(existing) => *existing = session,
            None => sessions.push(session),
        }
        self.write_collection(&path, &sessions)
    }

    fn list_sessions(
        &self,
        user_id: &str,
        completed_only: bool,
    ) -> Result<Vec<SessionRecord>, StoreError> {
        let sessions: Vec<SessionRecord> = self.read_collection(&self.sessions_path())?;
        let mut matching: Vec<SessionRecord> = sessions
            .into_iter()
            .filter(|s| s.user_id == user_id && (!completed_only || s.completed))
            .collect();
        matching.sort_by(|a, b| b.start_time.cmp(&a.start_time));
        Ok(matching)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{calculate_profile, CaffeineIntake, ExerciseFrequency};
    use chrono::Duration;
    use tempfile::TempDir;

    fn test_user(user_id: &str) -> UserRecord {
        let input = LifestyleInput {
            age: 30,
            sleep_hours: 7.5,
            stress_level: 4,
            exercise: ExerciseFrequency::Weekly,
            caffeine: CaffeineIntake::Low,
            screen_time_hours: 6.0,
            work_type: None,
        };
        let profile = calculate_profile(&input);
        let now = Utc::now();
        UserRecord {
            user_id: user_id.to_string(),
            input,
            profile,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn missing_files_read_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::open_at(dir.path());
        assert!(store.find_user("nobody").unwrap().is_none());
        assert!(store.list_sessions("nobody", false).unwrap().is_empty());
    }

    #[test]
    fn upsert_then_find_user() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::open_at(dir.path());
        store.upsert_user(test_user("alice")).unwrap();
        let found = store.find_user("alice").unwrap().unwrap();
        assert_eq!(found.user_id, "alice");
    }

    #[test]
    fn upsert_preserves_created_at() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::open_at(dir.path());

        let original = test_user("alice");
        let first_created = original.created_at;
        store.upsert_user(original).unwrap();

        let mut rewritten = test_user("alice");
        rewritten.created_at = first_created + Duration::hours(5);
        rewritten.input.stress_level = 9;
        store.upsert_user(rewritten).unwrap();

        let found = store.find_user("alice").unwrap().unwrap();
        assert_eq!(found.created_at, first_created);
        assert_eq!(found.input.stress_level, 9);
    }

    #[test]
    fn append_and_update_session() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::open_at(dir.path());

        let mut session = SessionRecord::new("alice", 10);
        let id = session.session_id.clone();
        store.append_session(session.clone()).unwrap();

        session.concentration_breaks = 3;
        store.update_session(session).unwrap();

        let found = store.find_session(&id).unwrap().unwrap();
        assert_eq!(found.concentration_breaks, 3);
        // Update replaced in place, no duplicate row.
        assert_eq!(store.list_sessions("alice", false).unwrap().len(), 1);
    }

    #[test]
    fn list_sessions_filters_and_sorts_descending() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::open_at(dir.path());
        let now = Utc::now();

        for (offset_min, completed) in [(30i64, true), (10, false), (20, true)] {
            let mut session = SessionRecord::new("alice", 10);
            session.start_time = Some(now - Duration::minutes(offset_min));
            session.completed = completed;
            store.append_session(session).unwrap();
        }
        let mut other = SessionRecord::new("bob", 10);
        other.completed = true;
        store.append_session(other).unwrap();

        let all = store.list_sessions("alice", false).unwrap();
        assert_eq!(all.len(), 3);
        assert!(all[0].start_time > all[1].start_time);

        let completed = store.list_sessions("alice", true).unwrap();
        assert_eq!(completed.len(), 2);
        assert!(completed.iter().all(|s| s.completed));
    }

    #[test]
    fn corrupt_collection_surfaces_as_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("users.json"), "not json").unwrap();
        let store = JsonStore::open_at(dir.path());
        assert!(matches!(
            store.find_user("alice"),
            Err(StoreError::Corrupt { .. })
        ));
    }
}
