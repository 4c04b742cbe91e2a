//! Weekly plan composition: resolve the client's training days and compose
//! one daily workout per active day.

use crate::core::keywords;
use crate::core::recommender::Recommender;
use crate::models::{ClientProfile, Exercise, WeeklyPlan};

/// Fallback schedule when no preferred day resolves: Monday/Wednesday/Friday
const DEFAULT_TRAINING_DAYS: [u8; 3] = [1, 3, 5];

impl Recommender {
    /// Compose a full week of workouts, one per active training day
    ///
    /// Preferred day names are matched case-insensitively against the fixed
    /// weekday table; names that match nothing are dropped from the plan.
    /// Callers relying on day count should check the returned map rather
    /// than the profile.
    pub fn weekly_plan(&self, exercises: &[Exercise], profile: &ClientProfile) -> WeeklyPlan {
        let days = resolve_training_days(profile);

        tracing::debug!(
            "Composing weekly plan for client {} across days {:?}",
            profile.client_id,
            days
        );

        let mut plan = WeeklyPlan::default();
        for day in days {
            plan.days
                .insert(day, self.daily_workout(exercises, profile, day));
        }
        plan
    }
}

/// Resolve the profile's active weekday indices (0 = Sunday .. 6 = Saturday)
///
/// Order follows the profile's preferred-day list; a training-frequency cap
/// truncates that list without redistributing days.
pub fn resolve_training_days(profile: &ClientProfile) -> Vec<u8> {
    let mut days: Vec<u8> = Vec::new();
    for name in &profile.preferred_days {
        match keywords::parse_weekday(name) {
            Some(day) => days.push(day),
            None => tracing::warn!(
                "Dropping unrecognized training day {:?} for client {}",
                name,
                profile.client_id
            ),
        }
    }

    if days.is_empty() {
        days = DEFAULT_TRAINING_DAYS.to_vec();
    }

    if let Some(cap) = profile.training_frequency {
        days.truncate(usize::from(cap));
    }

    days
}
