//! Daily workout composition: partition the suitable pool into workout
//! roles, rank each pool, and pick a day-varying subset from the top band.

use chrono::Datelike;

use crate::core::keywords;
use crate::core::recommender::{passes_all_filters, Recommender};
use crate::models::{ClientProfile, DailyWorkout, Exercise, FitnessLevel, Recommendation, WorkoutRole};

/// Top band holds this many times the desired count per role
const TOP_BAND_FACTOR: usize = 3;

/// Day-offset stride for the rotation window
const DAY_STRIDE: usize = 3;

fn desired_count(role: WorkoutRole) -> usize {
    match role {
        WorkoutRole::Warmup => 2,
        WorkoutRole::Main => 4,
        WorkoutRole::Finisher => 1,
        WorkoutRole::Cooldown => 2,
    }
}

impl Recommender {
    /// Compose a structured workout for one weekday (0 = Sunday .. 6 = Saturday)
    ///
    /// Fully deterministic: the same inputs and day index always produce the
    /// same workout. Different day indices rotate through the top band so an
    /// unchanged exercise pool still varies across the week. A role with an
    /// empty pool yields an empty section.
    pub fn daily_workout(
        &self,
        exercises: &[Exercise],
        profile: &ClientProfile,
        day_of_week: u8,
    ) -> DailyWorkout {
        let day = usize::from(day_of_week % 7);
        let suitable: Vec<&Exercise> = exercises
            .iter()
            .filter(|exercise| passes_all_filters(exercise, profile))
            .collect();

        tracing::debug!(
            "Composing day-{} workout from {} suitable exercises for client {}",
            day,
            suitable.len(),
            profile.client_id
        );

        let mut workout = DailyWorkout::default();
        for role in WorkoutRole::ALL {
            let pool: Vec<&Exercise> = suitable
                .iter()
                .copied()
                .filter(|exercise| in_role_pool(exercise, role))
                .collect();
            *workout.role_mut(role) = self.select_for_role(&pool, profile, role, day);
        }

        workout
    }

    /// Compose a workout for the current local weekday
    pub fn daily_workout_today(
        &self,
        exercises: &[Exercise],
        profile: &ClientProfile,
    ) -> DailyWorkout {
        let today = chrono::Local::now().weekday().num_days_from_sunday() as u8;
        self.daily_workout(exercises, profile, today)
    }

    /// Rank a role pool, keep the top band, and rotate into it by day index
    fn select_for_role(
        &self,
        pool: &[&Exercise],
        profile: &ClientProfile,
        role: WorkoutRole,
        day: usize,
    ) -> Vec<Recommendation> {
        if pool.is_empty() {
            return Vec::new();
        }

        let desired = desired_count(role);
        let mut band: Vec<Recommendation> = pool
            .iter()
            .map(|exercise| self.build_recommendation(exercise, profile))
            .collect();
        band.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        band.truncate(TOP_BAND_FACTOR * desired);

        let mut picks: Vec<Recommendation> = Vec::with_capacity(desired.min(band.len()));
        for i in 0..desired.min(band.len()) {
            let index = (i + day * DAY_STRIDE) % band.len();
            picks.push(band[index].clone());
        }

        apply_role_tags(&mut picks, role, profile);
        picks
    }
}

/// Role pool membership by canonical category; pools may overlap, so one
/// exercise can serve both warm-up and cool-down.
fn in_role_pool(exercise: &Exercise, role: WorkoutRole) -> bool {
    let category = exercise.category_key();
    match role {
        WorkoutRole::Warmup => {
            category == "flexibility"
                || category == "mobility"
                || (category == "cardio"
                    && keywords::parse_difficulty(&exercise.difficulty)
                        == Some(FitnessLevel::Beginner))
        }
        WorkoutRole::Main => {
            matches!(category.as_str(), "strength" | "hypertrophy" | "functional")
        }
        WorkoutRole::Finisher => {
            matches!(category.as_str(), "cardio" | "hiit" | "plyometric")
        }
        WorkoutRole::Cooldown => {
            matches!(category.as_str(), "flexibility" | "mobility")
        }
    }
}

fn apply_role_tags(picks: &mut [Recommendation], role: WorkoutRole, profile: &ClientProfile) {
    for (i, pick) in picks.iter_mut().enumerate() {
        pick.tags.push(role.label().to_string());
        if role == WorkoutRole::Main {
            if i == 0 {
                pick.tags.push("Start with this".to_string());
            }
            if profile.wants_strength() {
                pick.tags.push("Strength focus".to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise(id: &str, category: &str, difficulty: &str) -> Exercise {
        Exercise {
            id: id.to_string(),
            name: format!("Exercise {}", id),
            category: category.to_string(),
            primary_muscle: "full body".to_string(),
            secondary_muscles: vec![],
            equipment: "None".to_string(),
            difficulty: difficulty.to_string(),
            instructions: None,
        }
    }

    fn profile() -> ClientProfile {
        ClientProfile {
            client_id: "c1".to_string(),
            age: None,
            height_cm: None,
            weight_kg: None,
            fitness_level: None,
            goals: vec![],
            health_conditions: vec![],
            preferred_days: vec![],
            preferred_types: vec![],
            equipment_access: vec![],
            location: None,
            training_frequency: None,
        }
    }

    fn pool() -> Vec<Exercise> {
        let mut exercises = Vec::new();
        for i in 0..12 {
            exercises.push(exercise(&format!("strength-{}", i), "strength", "Beginner"));
        }
        for i in 0..6 {
            exercises.push(exercise(&format!("stretch-{}", i), "flexibility", "Beginner"));
        }
        for i in 0..6 {
            exercises.push(exercise(&format!("cardio-{}", i), "cardio", "Beginner"));
        }
        exercises
    }

    #[test]
    fn test_role_pool_membership() {
        assert!(in_role_pool(&exercise("a", "Flexibility", "Hard"), WorkoutRole::Warmup));
        assert!(in_role_pool(&exercise("b", "cardio", "Beginner"), WorkoutRole::Warmup));
        assert!(!in_role_pool(&exercise("c", "cardio", "Hard"), WorkoutRole::Warmup));
        assert!(in_role_pool(&exercise("d", "strength", "Hard"), WorkoutRole::Main));
        assert!(in_role_pool(&exercise("e", "hiit", "Hard"), WorkoutRole::Finisher));
        assert!(in_role_pool(&exercise("f", "mobility", "Hard"), WorkoutRole::Cooldown));
        assert!(!in_role_pool(&exercise("g", "strength", "Hard"), WorkoutRole::Cooldown));
    }

    #[test]
    fn test_warmup_and_cooldown_pools_overlap() {
        let stretch = exercise("a", "flexibility", "Beginner");
        assert!(in_role_pool(&stretch, WorkoutRole::Warmup));
        assert!(in_role_pool(&stretch, WorkoutRole::Cooldown));
    }

    #[test]
    fn test_daily_workout_section_sizes() {
        let recommender = Recommender::with_default_weights();
        let workout = recommender.daily_workout(&pool(), &profile(), 1);

        assert_eq!(workout.warmup.len(), 2);
        assert_eq!(workout.main.len(), 4);
        assert_eq!(workout.finisher.len(), 1);
        assert_eq!(workout.cooldown.len(), 2);
    }

    #[test]
    fn test_daily_workout_deterministic() {
        let recommender = Recommender::with_default_weights();
        let exercises = pool();

        let first = recommender.daily_workout(&exercises, &profile(), 3);
        let second = recommender.daily_workout(&exercises, &profile(), 3);

        let ids = |workout: &DailyWorkout| -> Vec<String> {
            WorkoutRole::ALL
                .iter()
                .flat_map(|role| workout.role(*role).iter())
                .map(|r| r.exercise.id.clone())
                .collect()
        };
        assert_eq!(ids(&first), ids(&second));
    }

    #[test]
    fn test_day_rotation_varies_selection() {
        let recommender = Recommender::with_default_weights();
        let exercises = pool();

        let monday = recommender.daily_workout(&exercises, &profile(), 1);
        let tuesday = recommender.daily_workout(&exercises, &profile(), 2);

        let main_ids = |workout: &DailyWorkout| -> Vec<String> {
            workout.main.iter().map(|r| r.exercise.id.clone()).collect()
        };
        assert_ne!(
            main_ids(&monday),
            main_ids(&tuesday),
            "different days must rotate to different main items"
        );
    }

    #[test]
    fn test_day_index_wraps_past_week() {
        let recommender = Recommender::with_default_weights();
        let exercises = pool();

        let sunday = recommender.daily_workout(&exercises, &profile(), 0);
        let wrapped = recommender.daily_workout(&exercises, &profile(), 7);

        assert_eq!(
            sunday.main.first().map(|r| r.exercise.id.clone()),
            wrapped.main.first().map(|r| r.exercise.id.clone())
        );
    }

    #[test]
    fn test_role_tags_applied() {
        let recommender = Recommender::with_default_weights();
        let mut p = profile();
        p.goals = vec!["strength".to_string()];

        let workout = recommender.daily_workout(&pool(), &p, 1);

        assert!(workout.warmup[0].tags.contains(&"Warm-up".to_string()));
        assert!(workout.main[0].tags.contains(&"Main workout".to_string()));
        assert!(workout.main[0].tags.contains(&"Start with this".to_string()));
        assert!(!workout.main[1].tags.contains(&"Start with this".to_string()));
        assert!(workout.main[1].tags.contains(&"Strength focus".to_string()));
        assert!(workout.cooldown[0].tags.contains(&"Cool-down".to_string()));
    }

    #[test]
    fn test_empty_role_pool_yields_empty_section() {
        let recommender = Recommender::with_default_weights();
        let exercises = vec![exercise("only", "strength", "Beginner")];

        let workout = recommender.daily_workout(&exercises, &profile(), 2);

        assert!(workout.warmup.is_empty());
        assert_eq!(workout.main.len(), 1);
        assert!(workout.finisher.is_empty());
        assert!(workout.cooldown.is_empty());
    }

    #[test]
    fn test_empty_pool_yields_empty_workout() {
        let recommender = Recommender::with_default_weights();
        let workout = recommender.daily_workout(&[], &profile(), 4);
        assert!(workout.is_empty());
    }
}
