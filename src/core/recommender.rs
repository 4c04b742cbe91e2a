use crate::core::keywords;
use crate::core::rules::RULES;
use crate::models::{ClientProfile, Exercise, Recommendation, RuleWeights};

/// Result count used when the caller expresses no preference
pub const DEFAULT_RECOMMENDATION_COUNT: usize = 8;

/// Recommendation pipeline orchestrator
///
/// # Pipeline Stages
/// 1. Filter: retain exercises passing every rule's exclusion predicate
/// 2. Score: sum positive rule contributions, collecting match reasons
/// 3. Tag: derive presentational tags from the profile/exercise comparison
/// 4. Rank: stable sort descending by score, truncate to the requested count
#[derive(Debug, Clone)]
pub struct Recommender {
    weights: RuleWeights,
}

impl Recommender {
    pub fn new(weights: RuleWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: RuleWeights::default(),
        }
    }

    pub fn weights(&self) -> &RuleWeights {
        &self.weights
    }

    /// Rank the exercises that suit a client's profile
    ///
    /// Score ties retain the input order (stable sort, no secondary key);
    /// this mirrors the store's iteration order and is an artifact, not a
    /// contract callers should depend on. An empty result is the normal
    /// outcome for an over-constrained profile, never an error.
    pub fn recommend(
        &self,
        exercises: &[Exercise],
        profile: &ClientProfile,
        limit: usize,
    ) -> Vec<Recommendation> {
        let mut ranked: Vec<Recommendation> = exercises
            .iter()
            .filter(|exercise| passes_all_filters(exercise, profile))
            .map(|exercise| self.build_recommendation(exercise, profile))
            .collect();

        ranked.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked.truncate(limit);

        tracing::debug!(
            "Ranked {} of {} candidate exercises for client {}",
            ranked.len(),
            exercises.len(),
            profile.client_id
        );

        ranked
    }

    /// Score one eligible exercise and collect its reasons and tags
    pub(crate) fn build_recommendation(
        &self,
        exercise: &Exercise,
        profile: &ClientProfile,
    ) -> Recommendation {
        let mut score = 0.0;
        let mut reasons: Vec<String> = Vec::new();

        for rule in &RULES {
            let contribution = (rule.score)(exercise, profile, &self.weights);
            if contribution > 0.0 {
                score += contribution;
                if !reasons.iter().any(|reason| reason == rule.description) {
                    reasons.push(rule.description.to_string());
                }
            }
        }

        Recommendation {
            exercise: exercise.clone(),
            score,
            reasons,
            tags: derive_tags(exercise, profile),
        }
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Whether every rule's filter accepts the exercise for this profile
#[inline]
pub fn passes_all_filters(exercise: &Exercise, profile: &ClientProfile) -> bool {
    RULES.iter().all(|rule| (rule.filter)(exercise, profile))
}

/// Presentational tags shown as chips next to a recommendation
///
/// Derived from the profile/exercise comparison alone; rule scores play no
/// part here.
pub fn derive_tags(exercise: &Exercise, profile: &ClientProfile) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();

    if let (Some(level), Some(difficulty)) = (
        profile.fitness_level,
        keywords::parse_difficulty(&exercise.difficulty),
    ) {
        if level == difficulty {
            tags.push(format!("{} friendly", level.label()));
        }
    }

    if keywords::is_bodyweight(&exercise.equipment) {
        tags.push("No equipment needed".to_string());
    } else {
        let equipment = exercise.equipment.to_lowercase();
        if profile
            .equipment_access
            .iter()
            .any(|tag| equipment.contains(&tag.trim().to_lowercase()))
        {
            tags.push("Uses your available equipment".to_string());
        }
    }

    let category = exercise.category_key();
    if profile.has_goal("weight_loss") {
        if let Some(categories) = keywords::goal_categories("weight_loss") {
            if categories.iter().any(|keyword| category.contains(keyword)) {
                tags.push("Great for weight loss".to_string());
            }
        }
    }
    if profile.wants_strength() {
        if let Some(categories) = keywords::goal_categories("muscle_building") {
            if categories.iter().any(|keyword| category.contains(keyword)) {
                tags.push("Great for building muscle".to_string());
            }
        }
    }

    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FitnessLevel;

    fn exercise(id: &str, category: &str, equipment: &str, difficulty: &str) -> Exercise {
        Exercise {
            id: id.to_string(),
            name: format!("Exercise {}", id),
            category: category.to_string(),
            primary_muscle: "chest".to_string(),
            secondary_muscles: vec![],
            equipment: equipment.to_string(),
            difficulty: difficulty.to_string(),
            instructions: None,
        }
    }

    fn profile() -> ClientProfile {
        ClientProfile {
            client_id: "c1".to_string(),
            age: Some(30),
            height_cm: None,
            weight_kg: None,
            fitness_level: Some(FitnessLevel::Beginner),
            goals: vec!["weight_loss".to_string()],
            health_conditions: vec![],
            preferred_days: vec![],
            preferred_types: vec![],
            equipment_access: vec!["dumbbells".to_string()],
            location: None,
            training_frequency: None,
        }
    }

    #[test]
    fn test_recommend_filters_and_ranks() {
        let recommender = Recommender::with_default_weights();
        let exercises = vec![
            exercise("row", "cardio", "None", "Easy"),
            exercise("press", "strength", "Dumbbells", "Beginner"),
            exercise("snatch", "strength", "Barbell", "Expert"),
        ];

        let results = recommender.recommend(&exercises, &profile(), 10);

        let ids: Vec<&str> = results.iter().map(|r| r.exercise.id.as_str()).collect();
        assert!(!ids.contains(&"snatch"), "too-hard exercise must be filtered");
        assert_eq!(results.len(), 2);
        for pair in results.windows(2) {
            assert!(pair[0].score >= pair[1].score, "results not sorted by score");
        }
    }

    #[test]
    fn test_recommend_respects_limit() {
        let recommender = Recommender::with_default_weights();
        let exercises: Vec<Exercise> = (0..20)
            .map(|i| exercise(&i.to_string(), "cardio", "None", "Easy"))
            .collect();

        let results = recommender.recommend(&exercises, &profile(), 5);
        assert_eq!(results.len(), 5);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let recommender = Recommender::with_default_weights();
        let exercises: Vec<Exercise> = (0..4)
            .map(|i| exercise(&format!("e{}", i), "cardio", "None", "Easy"))
            .collect();

        let results = recommender.recommend(&exercises, &profile(), 10);

        let ids: Vec<&str> = results.iter().map(|r| r.exercise.id.as_str()).collect();
        assert_eq!(ids, vec!["e0", "e1", "e2", "e3"]);
    }

    #[test]
    fn test_reasons_come_from_positive_rules_only() {
        let recommender = Recommender::with_default_weights();
        let exercises = vec![exercise("press", "strength", "Dumbbells", "Beginner")];

        let results = recommender.recommend(&exercises, &profile(), 10);

        let reasons = &results[0].reasons;
        assert!(reasons.iter().any(|r| r == "Matches your fitness level"));
        assert!(reasons.iter().any(|r| r == "Works with your available equipment"));
        // goal rule contributes nothing for a strength exercise under weight_loss
        assert!(!reasons.iter().any(|r| r == "Supports your training goals"));
        // filter-only rule never contributes a reason
        assert!(!reasons.iter().any(|r| r == "Safe for your health conditions"));
    }

    #[test]
    fn test_tags_derived_from_profile_comparison() {
        let recommender = Recommender::with_default_weights();
        let exercises = vec![
            exercise("jumping-jacks", "cardio", "None", "Beginner"),
            exercise("press", "strength", "Dumbbells", "Beginner"),
        ];

        let results = recommender.recommend(&exercises, &profile(), 10);

        let jacks = results
            .iter()
            .find(|r| r.exercise.id == "jumping-jacks")
            .unwrap();
        assert!(jacks.tags.contains(&"Beginner friendly".to_string()));
        assert!(jacks.tags.contains(&"No equipment needed".to_string()));
        assert!(jacks.tags.contains(&"Great for weight loss".to_string()));

        let press = results.iter().find(|r| r.exercise.id == "press").unwrap();
        assert!(press.tags.contains(&"Uses your available equipment".to_string()));
    }

    #[test]
    fn test_empty_pool_yields_empty_result() {
        let recommender = Recommender::with_default_weights();
        let results = recommender.recommend(&[], &profile(), 10);
        assert!(results.is_empty());
    }
}
