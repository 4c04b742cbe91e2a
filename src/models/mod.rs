// Model exports
pub mod domain;

pub use domain::{
    ClientProfile, DailyWorkout, Exercise, FeedbackEvent, FeedbackKind, FitnessLevel,
    ParseEnumError, Recommendation, RuleWeights, TrainingLocation, WeeklyPlan, WorkoutRole,
};
