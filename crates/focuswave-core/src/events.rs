use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Every session transition produces an Event.
/// Callers map events onto side effects (tone cue, persistence, display).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    SessionStarted {
        session_id: String,
        at: DateTime<Utc>,
    },
    /// A concentration lapse was recorded; the alpha cue should start.
    LapseRecorded {
        session_id: String,
        lapse_count: u32,
        alpha_frequency_hz: u32,
        at: DateTime<Utc>,
    },
    /// The user refocused; the alpha cue should stop.
    Refocused {
        session_id: String,
        at: DateTime<Utc>,
    },
    SessionEnded {
        session_id: String,
        total_duration_secs: u64,
        efficiency: u8,
        at: DateTime<Utc>,
    },
}
