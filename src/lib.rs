//! FitCoach Algo - exercise recommendation engine for the FitCoach coaching platform
//!
//! This library provides the rule-based recommendation pipeline used by the
//! FitCoach coaching app: a fixed set of filter/score rules ranks a client's
//! exercise pool, composes a single day's structured workout, and lays out a
//! full training week with deterministic day-to-day variety.

pub mod config;
pub mod core;
pub mod logging;
pub mod models;

// Re-export commonly used types
pub use crate::core::{
    derive_tags, passes_all_filters, resolve_training_days, Recommender, Rule,
    DEFAULT_RECOMMENDATION_COUNT, RULES,
};
pub use crate::models::{
    ClientProfile, DailyWorkout, Exercise, FeedbackEvent, FeedbackKind, FitnessLevel,
    Recommendation, RuleWeights, TrainingLocation, WeeklyPlan, WorkoutRole,
};
