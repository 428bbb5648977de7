//! Post-hoc session efficiency scoring.

/// One concentration break is expected per 30 minutes of focus.
const SECS_PER_EXPECTED_BREAK: u64 = 30 * 60;
/// Penalty per lapse beyond the expected count.
const POINTS_PER_EXCESS_BREAK: i64 = 10;

/// Score a completed session on a 0-100 scale.
///
/// Lapses up to the expected count (one per half hour) cost nothing; each
/// excess lapse costs 10 points. A lapse deficit is capped at 100 rather
/// than rewarded beyond it.
pub fn score_efficiency(total_duration_secs: u64, concentration_breaks: u32) -> u8 {
    let expected_breaks = (total_duration_secs / SECS_PER_EXPECTED_BREAK) as i64;
    let excess = concentration_breaks as i64 - expected_breaks;
    (100 - excess * POINTS_PER_EXCESS_BREAK).clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expected_break_count_scores_full_marks() {
        // 30 minutes, 1 break: expected 1, diff 0
        assert_eq!(score_efficiency(1800, 1), 100);
    }

    #[test]
    fn excess_breaks_penalize_ten_points_each() {
        // 30 minutes, 3 breaks: expected 1, diff 2
        assert_eq!(score_efficiency(1800, 3), 80);
    }

    #[test]
    fn short_session_with_many_lapses() {
        // 1 minute, 5 breaks: expected 0, diff 5
        assert_eq!(score_efficiency(60, 5), 50);
    }

    #[test]
    fn zero_lapses_is_perfect() {
        assert_eq!(score_efficiency(60, 0), 100);
        assert_eq!(score_efficiency(0, 0), 100);
    }

    #[test]
    fn fewer_than_expected_breaks_caps_at_hundred() {
        // 2 hours, 0 breaks: expected 4, diff -4; capped, not rewarded
        assert_eq!(score_efficiency(7200, 0), 100);
    }

    #[test]
    fn floor_is_zero() {
        assert_eq!(score_efficiency(60, 50), 0);
    }

    #[test]
    fn expected_breaks_use_floor_division() {
        // 29m59s still expects zero breaks
        assert_eq!(score_efficiency(1799, 1), 90);
        assert_eq!(score_efficiency(1800, 1), 100);
    }
}
