//! The fixed rule set behind every recommendation: six named heuristics,
//! each a hard exclusion predicate plus an additive score contribution.

use crate::core::keywords;
use crate::models::{ClientProfile, Exercise, FitnessLevel, RuleWeights, TrainingLocation};

/// A single recommendation heuristic
///
/// Rules are pure and stateless; evaluation order does not affect the result
/// beyond accumulation order. A candidate is eligible only if every rule's
/// filter passes, and its aggregate score is the sum of all contributions
/// greater than zero.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub description: &'static str,
    pub filter: fn(&Exercise, &ClientProfile) -> bool,
    pub score: fn(&Exercise, &ClientProfile, &RuleWeights) -> f64,
}

/// The complete rule set, applied uniformly to every exercise/profile pair
pub const RULES: [Rule; 6] = [
    Rule {
        name: "fitness_level",
        description: "Matches your fitness level",
        filter: fitness_level_filter,
        score: fitness_level_score,
    },
    Rule {
        name: "equipment",
        description: "Works with your available equipment",
        filter: equipment_filter,
        score: equipment_score,
    },
    Rule {
        name: "goal",
        description: "Supports your training goals",
        filter: pass_filter,
        score: goal_score,
    },
    Rule {
        name: "location",
        description: "Fits your training location",
        filter: location_filter,
        score: location_score,
    },
    Rule {
        name: "health_condition",
        description: "Safe for your health conditions",
        filter: health_condition_filter,
        score: zero_score,
    },
    Rule {
        name: "preferred_type",
        description: "Matches your preferred exercise types",
        filter: pass_filter,
        score: preferred_type_score,
    },
];

fn pass_filter(_exercise: &Exercise, _profile: &ClientProfile) -> bool {
    true
}

fn zero_score(_exercise: &Exercise, _profile: &ClientProfile, _weights: &RuleWeights) -> f64 {
    0.0
}

/// Exercises harder than the client's level are excluded. Unrecognized
/// difficulty labels rank as advanced, so only advanced clients accept them.
#[inline]
fn fitness_level_filter(exercise: &Exercise, profile: &ClientProfile) -> bool {
    match profile.fitness_level {
        None => true,
        Some(level) => {
            let difficulty =
                keywords::parse_difficulty(&exercise.difficulty).unwrap_or(FitnessLevel::Advanced);
            difficulty <= level
        }
    }
}

#[inline]
fn fitness_level_score(exercise: &Exercise, profile: &ClientProfile, weights: &RuleWeights) -> f64 {
    let Some(level) = profile.fitness_level else {
        return 0.0;
    };
    let Some(difficulty) = keywords::parse_difficulty(&exercise.difficulty) else {
        return 0.0;
    };

    match i16::from(level.rank()) - i16::from(difficulty.rank()) {
        0 => weights.level_exact,
        1 => weights.level_one_below,
        2 => weights.level_two_below,
        _ => 0.0,
    }
}

/// Bodyweight exercises always pass; clients with no equipment tags are
/// unconstrained; otherwise the equipment text must mention a client tag.
#[inline]
fn equipment_filter(exercise: &Exercise, profile: &ClientProfile) -> bool {
    if keywords::is_bodyweight(&exercise.equipment) {
        return true;
    }
    if profile.equipment_access.is_empty() {
        return true;
    }

    let equipment = exercise.equipment.to_lowercase();
    profile
        .equipment_access
        .iter()
        .any(|tag| equipment.contains(&tag.trim().to_lowercase()))
}

#[inline]
fn equipment_score(exercise: &Exercise, profile: &ClientProfile, weights: &RuleWeights) -> f64 {
    if keywords::is_bodyweight(&exercise.equipment) {
        return weights.equipment_bodyweight;
    }
    if profile.equipment_access.is_empty() {
        return 0.0;
    }

    let equipment = exercise.equipment.trim().to_lowercase();
    if profile
        .equipment_access
        .iter()
        .any(|tag| equipment == tag.trim().to_lowercase())
    {
        weights.equipment_exact
    } else if profile
        .equipment_access
        .iter()
        .any(|tag| equipment.contains(&tag.trim().to_lowercase()))
    {
        weights.equipment_partial
    } else {
        0.0
    }
}

/// Score-only rule: reward categories aligned with the client's goals,
/// with synergy bonuses, capped per the weight table.
#[inline]
fn goal_score(exercise: &Exercise, profile: &ClientProfile, weights: &RuleWeights) -> f64 {
    let category = exercise.category_key();
    let mut total = 0.0;

    for goal in &profile.goals {
        let goal_key = goal.trim().to_lowercase();
        let Some(categories) = keywords::goal_categories(&goal_key) else {
            continue;
        };

        for keyword in categories {
            if category.contains(keyword) {
                total += weights.goal_category;
                if goal_key == "muscle_building" || goal_key == "strength" {
                    total += weights.goal_strength_bonus;
                }
                if goal_key == "weight_loss" && *keyword == "cardio" {
                    total += weights.goal_cardio_bonus;
                }
            }
        }
    }

    total.min(weights.goal_cap)
}

/// Home restricts to bodyweight/dumbbell/band/kettlebell equipment,
/// outdoors to bodyweight; gym and unconstrained profiles pass everything.
#[inline]
fn location_filter(exercise: &Exercise, profile: &ClientProfile) -> bool {
    match profile.location {
        None | Some(TrainingLocation::Gym) => true,
        Some(TrainingLocation::Home) => {
            keywords::is_bodyweight(&exercise.equipment)
                || keywords::is_home_equipment(&exercise.equipment)
        }
        Some(TrainingLocation::Outdoors) => keywords::is_bodyweight(&exercise.equipment),
    }
}

#[inline]
fn location_score(exercise: &Exercise, profile: &ClientProfile, weights: &RuleWeights) -> f64 {
    match profile.location {
        None => 0.0,
        Some(TrainingLocation::Gym) => weights.location_perfect,
        Some(TrainingLocation::Outdoors) => {
            if keywords::is_bodyweight(&exercise.equipment) {
                weights.location_perfect
            } else {
                0.0
            }
        }
        Some(TrainingLocation::Home) => {
            if keywords::is_bodyweight(&exercise.equipment) {
                weights.location_perfect
            } else if keywords::is_home_equipment(&exercise.equipment) {
                weights.location_partial
            } else {
                0.0
            }
        }
    }
}

/// Filter-only rule: hardcoded exclusion keyword sets per health condition.
/// Conditions the table does not recognize are ignored.
#[inline]
fn health_condition_filter(exercise: &Exercise, profile: &ClientProfile) -> bool {
    !profile
        .health_conditions
        .iter()
        .any(|condition| condition_excludes(condition, exercise))
}

fn condition_excludes(condition: &str, exercise: &Exercise) -> bool {
    let name = exercise.name.to_lowercase();
    let category = exercise.category_key();
    let primary = exercise.primary_muscle.to_lowercase();

    match condition.trim().to_lowercase().as_str() {
        "back_pain" => {
            let targets_lower_back = primary.contains("lower back")
                || primary.contains("lower_back")
                || exercise.secondary_muscles.iter().any(|muscle| {
                    let muscle = muscle.to_lowercase();
                    muscle.contains("lower back") || muscle.contains("lower_back")
                });
            targets_lower_back
                || ["deadlift", "good morning", "back extension"]
                    .iter()
                    .any(|keyword| name.contains(keyword))
        }
        "knee_pain" => {
            ["jump", "lunge", "squat"]
                .iter()
                .any(|keyword| name.contains(keyword))
                || category.contains("plyometric")
        }
        "shoulder_pain" => {
            let overhead_instructions = exercise
                .instructions
                .as_deref()
                .map(|text| text.to_lowercase().contains("overhead"))
                .unwrap_or(false);
            ["overhead", "military", "shoulder press"]
                .iter()
                .any(|keyword| name.contains(keyword))
                || (primary.contains("shoulder") && overhead_instructions)
        }
        _ => false,
    }
}

/// Score-only rule: reward categories aligned with preferred exercise types
#[inline]
fn preferred_type_score(
    exercise: &Exercise,
    profile: &ClientProfile,
    weights: &RuleWeights,
) -> f64 {
    let category = exercise.category_key();
    let mut total = 0.0;

    for preferred in &profile.preferred_types {
        let Some(categories) = keywords::type_categories(preferred) else {
            continue;
        };
        if categories.iter().any(|keyword| category.contains(keyword)) {
            total += weights.type_match;
        }
    }

    total.min(weights.type_cap)
}
