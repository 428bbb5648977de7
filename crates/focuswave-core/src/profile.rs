//! Focus-capacity profiling.
//!
//! `calculate_profile` maps a validated [`LifestyleInput`] to a
//! [`FocusProfile`]: the longest block of sustained concentration the user
//! can realistically hold, the break lengths derived from it, and the alpha
//! tone frequency used as a refocusing cue. The calculation is pure and
//! deterministic -- identical input always yields an identical profile.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;

/// How often the user exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseFrequency {
    Daily,
    Weekly,
    Occasionally,
    Rarely,
}

/// Daily caffeine intake band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaffeineIntake {
    None,
    Low,
    Moderate,
    High,
}

/// Kind of work the user does. Advisory only -- never used in scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkType {
    Creative,
    Analytical,
    Physical,
    Mixed,
}

impl FromStr for ExerciseFrequency {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "occasionally" => Ok(Self::Occasionally),
            "rarely" => Ok(Self::Rarely),
            other => Err(ValidationError::UnknownVariant {
                field: "exercise_frequency",
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for CaffeineIntake {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "low" => Ok(Self::Low),
            "moderate" => Ok(Self::Moderate),
            "high" => Ok(Self::High),
            other => Err(ValidationError::UnknownVariant {
                field: "caffeine",
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for WorkType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "creative" => Ok(Self::Creative),
            "analytical" => Ok(Self::Analytical),
            "physical" => Ok(Self::Physical),
            "mixed" => Ok(Self::Mixed),
            other => Err(ValidationError::UnknownVariant {
                field: "work_type",
                value: other.to_string(),
            }),
        }
    }
}

/// Lifestyle questionnaire answers for one analysis.
///
/// Immutable once submitted; re-analysis replaces the whole input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifestyleInput {
    /// Age in years.
    pub age: u32,
    /// Average hours of sleep per night.
    pub sleep_hours: f64,
    /// Self-reported stress, 1 (calm) to 10 (overwhelmed).
    pub stress_level: u8,
    pub exercise: ExerciseFrequency,
    pub caffeine: CaffeineIntake,
    /// Daily screen time in hours.
    pub screen_time_hours: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_type: Option<WorkType>,
}

impl LifestyleInput {
    /// Range-check the numeric fields.
    ///
    /// Scoring assumes validated input; callers must run this before
    /// [`calculate_profile`].
    ///
    /// # Errors
    /// Returns the first out-of-range field found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        range_check("age", self.age as f64, 1.0, 120.0)?;
        range_check("sleep_hours", self.sleep_hours, 0.0, 24.0)?;
        range_check("stress_level", self.stress_level as f64, 1.0, 10.0)?;
        range_check("screen_time_hours", self.screen_time_hours, 0.0, 24.0)?;
        Ok(())
    }
}

fn range_check(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value < min || value > max {
        return Err(ValidationError::OutOfRange {
            field,
            min,
            max,
            value,
        });
    }
    Ok(())
}

/// Derived focus-capacity profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusProfile {
    /// Longest sustainable concentration block, minutes. Always in 15..=90.
    pub max_concentration_min: u32,
    /// Recreation-break length, minutes (30% of the concentration block).
    pub recommended_break_min: u32,
    /// Interval between breaks, minutes (60% of the concentration block).
    pub break_interval_min: u32,
    /// Alpha tone frequency for the refocusing cue. One of 8, 10, 12 Hz.
    pub alpha_frequency_hz: u32,
}

/// Floor and ceiling for the concentration block.
pub const MIN_CONCENTRATION_MIN: i32 = 15;
pub const MAX_CONCENTRATION_MIN: i32 = 90;

/// Compute a focus profile from lifestyle inputs.
///
/// Adjustments are additive to a base of 45 minutes and applied in a fixed
/// order so interacting thresholds stay reproducible:
/// age, sleep, stress, exercise, caffeine, screen time, then clamp.
pub fn calculate_profile(input: &LifestyleInput) -> FocusProfile {
    let mut concentration: i32 = 45;

    if input.age < 25 {
        concentration += 10;
    } else if input.age > 50 {
        concentration -= 10;
    }

    if input.sleep_hours >= 7.0 && input.sleep_hours <= 9.0 {
        concentration += 15;
    } else if input.sleep_hours < 6.0 {
        concentration -= 20;
    }

    concentration -= 3 * input.stress_level as i32;

    concentration += match input.exercise {
        ExerciseFrequency::Daily => 15,
        ExerciseFrequency::Weekly => 10,
        ExerciseFrequency::Occasionally => 5,
        ExerciseFrequency::Rarely => -5,
    };

    concentration += match input.caffeine {
        CaffeineIntake::None => 0,
        CaffeineIntake::Low => 5,
        CaffeineIntake::Moderate => 5,
        CaffeineIntake::High => -10,
    };

    if input.screen_time_hours > 8.0 {
        concentration -= 15;
    } else if input.screen_time_hours < 4.0 {
        concentration += 10;
    }

    let max_concentration = concentration.clamp(MIN_CONCENTRATION_MIN, MAX_CONCENTRATION_MIN);

    FocusProfile {
        max_concentration_min: max_concentration as u32,
        recommended_break_min: (max_concentration as f64 * 0.3).round() as u32,
        break_interval_min: (max_concentration as f64 * 0.6).round() as u32,
        alpha_frequency_hz: alpha_frequency_for_stress(input.stress_level),
    }
}

/// Higher stress maps to a lower (more calming) alpha frequency.
fn alpha_frequency_for_stress(stress_level: u8) -> u32 {
    if stress_level > 7 {
        8
    } else if stress_level > 4 {
        10
    } else {
        12
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn input(
        age: u32,
        sleep: f64,
        stress: u8,
        exercise: ExerciseFrequency,
        caffeine: CaffeineIntake,
        screen: f64,
    ) -> LifestyleInput {
        LifestyleInput {
            age,
            sleep_hours: sleep,
            stress_level: stress,
            exercise,
            caffeine,
            screen_time_hours: screen,
            work_type: None,
        }
    }

    #[test]
    fn young_rested_active_profile() {
        // 45 +10 (age) +15 (sleep) -9 (stress) +15 (daily) +5 (low) +10 (screen) = 81
        let profile = calculate_profile(&input(
            22,
            8.0,
            3,
            ExerciseFrequency::Daily,
            CaffeineIntake::Low,
            3.0,
        ));
        assert_eq!(profile.max_concentration_min, 81);
        assert_eq!(profile.recommended_break_min, 24);
        assert_eq!(profile.break_interval_min, 49);
        assert_eq!(profile.alpha_frequency_hz, 12);
    }

    #[test]
    fn worst_case_clamps_to_floor() {
        let profile = calculate_profile(&input(
            60,
            4.0,
            10,
            ExerciseFrequency::Rarely,
            CaffeineIntake::High,
            12.0,
        ));
        assert_eq!(profile.max_concentration_min, 15);
    }

    #[test]
    fn alpha_frequency_tracks_stress_bands() {
        let base = input(30, 7.5, 3, ExerciseFrequency::Weekly, CaffeineIntake::None, 5.0);
        let low = calculate_profile(&LifestyleInput { stress_level: 4, ..base.clone() });
        let mid = calculate_profile(&LifestyleInput { stress_level: 5, ..base.clone() });
        let high = calculate_profile(&LifestyleInput { stress_level: 8, ..base });
        assert_eq!(low.alpha_frequency_hz, 12);
        assert_eq!(mid.alpha_frequency_hz, 10);
        assert_eq!(high.alpha_frequency_hz, 8);
    }

    #[test]
    fn identical_input_yields_identical_profile() {
        let i = input(40, 6.5, 6, ExerciseFrequency::Occasionally, CaffeineIntake::Moderate, 7.0);
        assert_eq!(calculate_profile(&i), calculate_profile(&i));
    }

    #[test]
    fn validate_rejects_out_of_range_fields() {
        let mut i = input(30, 7.0, 5, ExerciseFrequency::Weekly, CaffeineIntake::Low, 6.0);
        assert!(i.validate().is_ok());

        i.sleep_hours = 25.0;
        assert!(i.validate().is_err());
        i.sleep_hours = 7.0;

        i.stress_level = 0;
        assert!(i.validate().is_err());
        i.stress_level = 11;
        assert!(i.validate().is_err());
        i.stress_level = 5;

        i.age = 0;
        assert!(i.validate().is_err());
    }

    #[test]
    fn enum_parsing_round_trips() {
        assert_eq!("daily".parse::<ExerciseFrequency>().unwrap(), ExerciseFrequency::Daily);
        assert_eq!("high".parse::<CaffeineIntake>().unwrap(), CaffeineIntake::High);
        assert_eq!("mixed".parse::<WorkType>().unwrap(), WorkType::Mixed);
        assert!("sometimes".parse::<ExerciseFrequency>().is_err());
    }

    fn arb_exercise() -> impl Strategy<Value = ExerciseFrequency> {
        prop_oneof![
            Just(ExerciseFrequency::Daily),
            Just(ExerciseFrequency::Weekly),
            Just(ExerciseFrequency::Occasionally),
            Just(ExerciseFrequency::Rarely),
        ]
    }

    fn arb_caffeine() -> impl Strategy<Value = CaffeineIntake> {
        prop_oneof![
            Just(CaffeineIntake::None),
            Just(CaffeineIntake::Low),
            Just(CaffeineIntake::Moderate),
            Just(CaffeineIntake::High),
        ]
    }

    proptest! {
        #[test]
        fn concentration_always_within_bounds(
            age in 1u32..=120,
            sleep in 0.0f64..=24.0,
            stress in 1u8..=10,
            exercise in arb_exercise(),
            caffeine in arb_caffeine(),
            screen in 0.0f64..=24.0,
        ) {
            let profile = calculate_profile(&input(age, sleep, stress, exercise, caffeine, screen));
            prop_assert!((15..=90).contains(&profile.max_concentration_min));
            prop_assert_eq!(
                profile.recommended_break_min,
                (profile.max_concentration_min as f64 * 0.3).round() as u32
            );
            prop_assert_eq!(
                profile.break_interval_min,
                (profile.max_concentration_min as f64 * 0.6).round() as u32
            );
            prop_assert!(matches!(profile.alpha_frequency_hz, 8 | 10 | 12));
        }
    }
}
