//! Lifestyle recommendations derived from an analysis.
//!
//! Rules are evaluated independently and appended in a fixed order so the
//! output list is deterministic. The Work Pattern entry is always present
//! and always last; Sleep and Stress entries only fire when their
//! thresholds are crossed.

use serde::{Deserialize, Serialize};

use crate::profile::{FocusProfile, LifestyleInput};

/// Recommendation category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Sleep,
    Stress,
    #[serde(rename = "Work Pattern")]
    WorkPattern,
}

/// Recommendation urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// One advisory message shown alongside the focus profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub category: Category,
    pub priority: Priority,
    pub message: String,
}

/// Build the ordered advisory list for an analysis.
///
/// Returns between one and three entries.
pub fn generate_recommendations(
    input: &LifestyleInput,
    profile: &FocusProfile,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if input.sleep_hours < 7.0 {
        recommendations.push(Recommendation {
            category: Category::Sleep,
            priority: Priority::High,
            message: "Increase sleep to 7-9 hours to improve focus by up to 25%".to_string(),
        });
    }

    if input.stress_level > 7 {
        recommendations.push(Recommendation {
            category: Category::Stress,
            priority: Priority::High,
            message: "Practice meditation. Use alpha wave therapy regularly.".to_string(),
        });
    }

    recommendations.push(Recommendation {
        category: Category::WorkPattern,
        priority: Priority::High,
        message: format!(
            "Work in {} min blocks with {} min breaks",
            profile.max_concentration_min, profile.recommended_break_min
        ),
    });

    recommendations
}
