//! Session lifecycle state machine.
//!
//! ## State transitions
//!
//! ```text
//! NotStarted -> Active <-> Paused
//!                  \         /
//!                   -> Ended (terminal)
//! ```
//!
//! Every command returns the [`Event`] it produced or
//! [`CoreError::InvalidState`]; on error nothing is mutated. The engine has
//! no internal thread -- a caller wanting a live elapsed display drives
//! [`FocusSession::advance`] from its own clock.

use chrono::Utc;

use super::efficiency::score_efficiency;
use super::record::{SessionRecord, SessionState};
use crate::error::{CoreError, Result};
use crate::events::Event;

/// State machine wrapping one [`SessionRecord`].
#[derive(Debug, Clone)]
pub struct FocusSession {
    record: SessionRecord,
    /// Client-visible elapsed seconds. Accumulates only while Active and is
    /// never persisted; the authoritative duration is stamped at end.
    elapsed_secs: u64,
}

impl FocusSession {
    /// Create a new, not-yet-started session for `user_id`.
    pub fn new(user_id: impl Into<String>, alpha_frequency_hz: u32) -> Self {
        Self {
            record: SessionRecord::new(user_id, alpha_frequency_hz),
            elapsed_secs: 0,
        }
    }

    /// Rebuild the machine from a stored record.
    ///
    /// Completed records always rebuild as `Ended` regardless of the stored
    /// state field.
    pub fn from_record(mut record: SessionRecord) -> Self {
        if record.completed {
            record.state = SessionState::Ended;
        }
        Self {
            record,
            elapsed_secs: 0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> SessionState {
        self.record.state
    }

    pub fn record(&self) -> &SessionRecord {
        &self.record
    }

    pub fn into_record(self) -> SessionRecord {
        self.record
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// NotStarted -> Active. Stamps the start time and zeroes the counters.
    pub fn start(&mut self) -> Result<Event> {
        if self.record.state != SessionState::NotStarted {
            return Err(self.invalid("start"));
        }
        let now = Utc::now();
        self.record.start_time = Some(now);
        self.record.concentration_breaks = 0;
        self.record.completed = false;
        self.record.state = SessionState::Active;
        Ok(Event::SessionStarted {
            session_id: self.record.session_id.clone(),
            at: now,
        })
    }

    /// Active -> Paused. Counts the lapse; the returned event carries the
    /// tone frequency so the caller can start the alpha cue.
    pub fn record_lapse(&mut self) -> Result<Event> {
        if self.record.state != SessionState::Active {
            return Err(self.invalid("record a lapse for"));
        }
        self.record.concentration_breaks += 1;
        self.record.state = SessionState::Paused;
        Ok(Event::LapseRecorded {
            session_id: self.record.session_id.clone(),
            lapse_count: self.record.concentration_breaks,
            alpha_frequency_hz: self.record.alpha_frequency_hz,
            at: Utc::now(),
        })
    }

    /// Paused -> Active. The caller stops the alpha cue on this event.
    pub fn record_refocus(&mut self) -> Result<Event> {
        if self.record.state != SessionState::Paused {
            return Err(self.invalid("refocus"));
        }
        self.record.state = SessionState::Active;
        Ok(Event::Refocused {
            session_id: self.record.session_id.clone(),
            at: Utc::now(),
        })
    }

    /// {Active, Paused} -> Ended. Stamps the end time, computes the rounded
    /// duration in seconds and the efficiency score, and marks the record
    /// completed.
    pub fn end(&mut self) -> Result<Event> {
        if !matches!(
            self.record.state,
            SessionState::Active | SessionState::Paused
        ) {
            return Err(self.invalid("end"));
        }
        let Some(start) = self.record.start_time else {
            // An Active/Paused record without a start stamp is corrupt;
            // refuse to finalize it rather than invent a duration.
            return Err(self.invalid("end"));
        };

        let now = Utc::now();
        let total_duration_secs =
            ((now - start).num_milliseconds().max(0) as f64 / 1000.0).round() as u64;
        let efficiency = score_efficiency(total_duration_secs, self.record.concentration_breaks);

        self.record.end_time = Some(now);
        self.record.total_duration_secs = Some(total_duration_secs);
        self.record.efficiency = Some(efficiency);
        self.record.completed = true;
        self.record.state = SessionState::Ended;

        Ok(Event::SessionEnded {
            session_id: self.record.session_id.clone(),
            total_duration_secs,
            efficiency,
            at: now,
        })
    }

    /// Advance the elapsed display by `delta_secs`.
    ///
    /// Only counts while Active; ticks delivered while Paused or after the
    /// session ended are dropped, so a suspended display never drifts.
    pub fn advance(&mut self, delta_secs: u64) {
        if self.record.state == SessionState::Active {
            self.elapsed_secs += delta_secs;
        }
    }

    fn invalid(&self, action: &'static str) -> CoreError {
        CoreError::InvalidState {
            action,
            state: self.record.state,
        }
    }
}
