//! Persistent shape of one focus session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tone frequency used when a session starts without a stored profile.
/// Matches the mid-band alpha cue of the default profile.
pub const DEFAULT_ALPHA_FREQUENCY_HZ: u32 = 10;

/// Lifecycle state of a focus session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    NotStarted,
    Active,
    Paused,
    Ended,
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SessionState::NotStarted => "not started",
            SessionState::Active => "active",
            SessionState::Paused => "paused",
            SessionState::Ended => "ended",
        };
        write!(f, "{s}")
    }
}

/// One focus session as stored in the record store.
///
/// `total_duration_secs` and `efficiency` are set exactly once, at end;
/// they are `Some` if and only if `completed` is true. `end_time`, once
/// set, is never revised.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub session_id: String,
    /// Owning user. A foreign reference by convention only -- existence is
    /// not enforced at session start.
    pub user_id: String,
    pub state: SessionState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    /// Monotonically increasing lapse counter.
    pub concentration_breaks: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_duration_secs: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub efficiency: Option<u8>,
    pub completed: bool,
    /// Alpha cue frequency snapshotted from the owner's profile at creation.
    pub alpha_frequency_hz: u32,
}

impl SessionRecord {
    /// Create a fresh, not-yet-started session for `user_id`.
    pub fn new(user_id: impl Into<String>, alpha_frequency_hz: u32) -> Self {
        Self {
            session_id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            state: SessionState::NotStarted,
            start_time: None,
            end_time: None,
            concentration_breaks: 0,
            total_duration_secs: None,
            efficiency: None,
            completed: false,
            alpha_frequency_hz,
        }
    }
}
