//! Cross-session statistics.
//!
//! Reduces a user's completed sessions into summary numbers for display.
//! All means are plain arithmetic over the completed set; incomplete
//! sessions never contribute.

use serde::{Deserialize, Serialize};

use crate::session::SessionRecord;

/// Summary statistics over a user's completed sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    pub total_sessions: u64,
    /// Mean session length, rounded to whole minutes.
    pub average_duration_min: u64,
    /// Mean lapse count, rounded to one decimal.
    pub average_breaks: f64,
    /// Mean efficiency score, rounded to a whole number.
    pub average_efficiency: u64,
    /// Total completed focus time, rounded to whole minutes.
    pub total_focus_time_min: u64,
}

/// Aggregate completed sessions into a [`SessionStats`].
///
/// Incomplete records are filtered out first. Returns `None` when no
/// completed session remains -- an empty history is not an error.
pub fn aggregate(sessions: &[SessionRecord]) -> Option<SessionStats> {
    let completed: Vec<&SessionRecord> = sessions.iter().filter(|s| s.completed).collect();
    if completed.is_empty() {
        return None;
    }

    let count = completed.len() as f64;
    let total_secs: u64 = completed
        .iter()
        .map(|s| s.total_duration_secs.unwrap_or(0))
        .sum();
    let total_breaks: u64 = completed
        .iter()
        .map(|s| s.concentration_breaks as u64)
        .sum();
    let total_efficiency: u64 = completed
        .iter()
        .map(|s| s.efficiency.unwrap_or(0) as u64)
        .sum();

    Some(SessionStats {
        total_sessions: completed.len() as u64,
        average_duration_min: (total_secs as f64 / count / 60.0).round() as u64,
        average_breaks: (total_breaks as f64 / count * 10.0).round() / 10.0,
        average_efficiency: (total_efficiency as f64 / count).round() as u64,
        total_focus_time_min: (total_secs as f64 / 60.0).round() as u64,
    })
}
