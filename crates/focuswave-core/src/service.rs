//! Store-backed orchestration of analysis and session tracking.
//!
//! [`FocusService`] owns a [`RecordStore`] and a [`ToneCue`] and wires the
//! pure scoring functions and the session state machine into the persisted
//! flow: analyze -> start -> lapse/refocus -> end -> stats. Each session
//! command loads the record, rebuilds the state machine, transitions, maps
//! the resulting event onto the tone cue, and writes the record back.
//! Illegal transitions persist nothing.

use serde::Serialize;
use uuid::Uuid;

use crate::audio::{NullTone, ToneCue};
use crate::error::{CoreError, RecordKind, Result};
use crate::events::Event;
use crate::profile::{calculate_profile, FocusProfile, LifestyleInput};
use crate::recommend::{generate_recommendations, Recommendation};
use crate::session::{FocusSession, SessionRecord, DEFAULT_ALPHA_FREQUENCY_HZ};
use crate::stats::{aggregate, SessionStats};
use crate::storage::{RecordStore, UserRecord};

/// Result of one analysis request.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisOutcome {
    pub user_id: String,
    pub profile: FocusProfile,
    pub recommendations: Vec<Recommendation>,
}

/// Orchestrates the record store, the scoring engine and the tone cue.
pub struct FocusService<S: RecordStore> {
    store: S,
    tone: Box<dyn ToneCue>,
    recent_limit: usize,
}

impl<S: RecordStore> FocusService<S> {
    /// Create a service with a silent tone cue and the default listing cap.
    pub fn new(store: S) -> Self {
        Self {
            store,
            tone: Box::new(NullTone),
            recent_limit: 10,
        }
    }

    /// Replace the tone cue collaborator.
    pub fn with_tone(mut self, tone: Box<dyn ToneCue>) -> Self {
        self.tone = tone;
        self
    }

    /// Cap applied by [`FocusService::list_recent_sessions`].
    pub fn with_recent_limit(mut self, limit: usize) -> Self {
        self.recent_limit = limit;
        self
    }

    /// Validate lifestyle input, derive the profile and recommendations,
    /// and upsert the user record.
    ///
    /// A fresh user id is generated when none is given. Re-analysis
    /// overwrites the stored input and profile; the store preserves the
    /// original `created_at`.
    pub fn analyze(
        &mut self,
        user_id: Option<String>,
        input: LifestyleInput,
    ) -> Result<AnalysisOutcome> {
        input.validate()?;

        let profile = calculate_profile(&input);
        let recommendations = generate_recommendations(&input, &profile);
        let user_id = user_id.unwrap_or_else(|| Uuid::new_v4().to_string());

        let now = chrono::Utc::now();
        self.store.upsert_user(UserRecord {
            user_id: user_id.clone(),
            input,
            profile,
            created_at: now,
            updated_at: now,
        })?;

        Ok(AnalysisOutcome {
            user_id,
            profile,
            recommendations,
        })
    }

    /// Fetch a stored user record.
    pub fn get_user(&self, user_id: &str) -> Result<UserRecord> {
        self.store
            .find_user(user_id)?
            .ok_or_else(|| CoreError::NotFound {
                kind: RecordKind::User,
                id: user_id.to_string(),
            })
    }

    /// Start a new session for `user_id`.
    ///
    /// User existence is not enforced; without a stored profile the tone
    /// falls back to the default frequency. Concurrent starts for the same
    /// user are not serialized here -- the store's last write wins.
    pub fn start_session(&mut self, user_id: &str) -> Result<SessionRecord> {
        let alpha_frequency_hz = self
            .store
            .find_user(user_id)?
            .map(|u| u.profile.alpha_frequency_hz)
            .unwrap_or(DEFAULT_ALPHA_FREQUENCY_HZ);

        let mut session = FocusSession::new(user_id, alpha_frequency_hz);
        session.start()?;

        let record = session.into_record();
        self.store.append_session(record.clone())?;
        Ok(record)
    }

    /// Record a concentration lapse and start the alpha cue.
    pub fn record_lapse(&mut self, session_id: &str) -> Result<SessionRecord> {
        let mut session = self.load_session(session_id)?;
        let event = session.record_lapse()?;
        if let Event::LapseRecorded {
            alpha_frequency_hz, ..
        } = event
        {
            self.tone.play_tone(alpha_frequency_hz);
        }
        let record = session.into_record();
        self.store.update_session(record.clone())?;
        Ok(record)
    }

    /// Record a refocus and stop the alpha cue.
    pub fn record_refocus(&mut self, session_id: &str) -> Result<SessionRecord> {
        let mut session = self.load_session(session_id)?;
        session.record_refocus()?;
        self.tone.stop_tone();
        let record = session.into_record();
        self.store.update_session(record.clone())?;
        Ok(record)
    }

    /// End a session, finalizing duration and efficiency.
    pub fn end_session(&mut self, session_id: &str) -> Result<SessionRecord> {
        let mut session = self.load_session(session_id)?;
        session.end()?;
        // Stopping a silent cue is a no-op, so always stop.
        self.tone.stop_tone();
        let record = session.into_record();
        self.store.update_session(record.clone())?;
        Ok(record)
    }

    /// A user's most recent sessions, newest first, capped to the
    /// configured limit.
    pub fn list_recent_sessions(
        &self,
        user_id: &str,
        completed_only: bool,
    ) -> Result<Vec<SessionRecord>> {
        let mut sessions = self.store.list_sessions(user_id, completed_only)?;
        sessions.truncate(self.recent_limit);
        Ok(sessions)
    }

    /// Summary statistics over the user's completed sessions, or `None`
    /// when there are none.
    pub fn stats(&self, user_id: &str) -> Result<Option<SessionStats>> {
        let sessions = self.store.list_sessions(user_id, true)?;
        Ok(aggregate(&sessions))
    }

    fn load_session(&self, session_id: &str) -> Result<FocusSession> {
        let record = self
            .store
            .find_session(session_id)?
            .ok_or_else(|| CoreError::NotFound {
                kind: RecordKind::Session,
                id: session_id.to_string(),
            })?;
        Ok(FocusSession::from_record(record))
    }
}
