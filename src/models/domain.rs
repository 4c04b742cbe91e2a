use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error for free-text values that must map onto a profile enum
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseEnumError {
    #[error("unknown fitness level: {0}")]
    FitnessLevel(String),

    #[error("unknown training location: {0}")]
    TrainingLocation(String),
}

/// Exercise record supplied by the host application's store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(rename = "primaryMuscle")]
    pub primary_muscle: String,
    #[serde(rename = "secondaryMuscles", default)]
    pub secondary_muscles: Vec<String>,
    #[serde(default)]
    pub equipment: String,
    pub difficulty: String,
    #[serde(default)]
    pub instructions: Option<String>,
}

impl Exercise {
    /// Canonical lower-cased category used for all keyword matching
    pub fn category_key(&self) -> String {
        self.category.trim().to_lowercase()
    }
}

/// Client fitness level, ordered easiest to hardest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitnessLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl FitnessLevel {
    pub fn rank(self) -> u8 {
        match self {
            FitnessLevel::Beginner => 0,
            FitnessLevel::Intermediate => 1,
            FitnessLevel::Advanced => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FitnessLevel::Beginner => "Beginner",
            FitnessLevel::Intermediate => "Intermediate",
            FitnessLevel::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for FitnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for FitnessLevel {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(FitnessLevel::Beginner),
            "intermediate" => Ok(FitnessLevel::Intermediate),
            "advanced" => Ok(FitnessLevel::Advanced),
            _ => Err(ParseEnumError::FitnessLevel(s.to_string())),
        }
    }
}

/// Where the client trains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainingLocation {
    Home,
    Gym,
    Outdoors,
}

impl TrainingLocation {
    pub fn label(self) -> &'static str {
        match self {
            TrainingLocation::Home => "Home",
            TrainingLocation::Gym => "Gym",
            TrainingLocation::Outdoors => "Outdoors",
        }
    }
}

impl fmt::Display for TrainingLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for TrainingLocation {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "home" => Ok(TrainingLocation::Home),
            "gym" => Ok(TrainingLocation::Gym),
            "outdoors" => Ok(TrainingLocation::Outdoors),
            _ => Err(ParseEnumError::TrainingLocation(s.to_string())),
        }
    }
}

/// Client profile; every constraint field is optional and absence means
/// "no restriction"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientProfile {
    #[serde(rename = "clientId")]
    pub client_id: String,
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(rename = "heightCm", default)]
    pub height_cm: Option<u16>,
    #[serde(rename = "weightKg", default)]
    pub weight_kg: Option<f32>,
    #[serde(rename = "fitnessLevel", default)]
    pub fitness_level: Option<FitnessLevel>,
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(rename = "healthConditions", default)]
    pub health_conditions: Vec<String>,
    #[serde(rename = "preferredDays", default)]
    pub preferred_days: Vec<String>,
    #[serde(rename = "preferredTypes", default)]
    pub preferred_types: Vec<String>,
    #[serde(rename = "equipmentAccess", default)]
    pub equipment_access: Vec<String>,
    #[serde(default)]
    pub location: Option<TrainingLocation>,
    #[serde(rename = "trainingFrequency", default)]
    pub training_frequency: Option<u8>,
}

impl ClientProfile {
    /// Case-insensitive goal lookup
    pub fn has_goal(&self, goal: &str) -> bool {
        self.goals.iter().any(|g| g.trim().eq_ignore_ascii_case(goal))
    }

    /// Whether any goal asks for strength or muscle work
    pub fn wants_strength(&self) -> bool {
        self.has_goal("strength") || self.has_goal("muscle_building")
    }
}

/// Per-rule score contributions used by the recommendation pipeline
#[derive(Debug, Clone, Copy)]
pub struct RuleWeights {
    pub level_exact: f64,
    pub level_one_below: f64,
    pub level_two_below: f64,
    pub equipment_bodyweight: f64,
    pub equipment_exact: f64,
    pub equipment_partial: f64,
    pub goal_category: f64,
    pub goal_strength_bonus: f64,
    pub goal_cardio_bonus: f64,
    pub goal_cap: f64,
    pub location_perfect: f64,
    pub location_partial: f64,
    pub type_match: f64,
    pub type_cap: f64,
}

impl Default for RuleWeights {
    fn default() -> Self {
        Self {
            level_exact: 10.0,
            level_one_below: 5.0,
            level_two_below: 2.0,
            equipment_bodyweight: 8.0,
            equipment_exact: 10.0,
            equipment_partial: 7.0,
            goal_category: 8.0,
            goal_strength_bonus: 2.0,
            goal_cardio_bonus: 3.0,
            goal_cap: 15.0,
            location_perfect: 10.0,
            location_partial: 8.0,
            type_match: 8.0,
            type_cap: 10.0,
        }
    }
}

/// Scored recommendation result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub exercise: Exercise,
    pub score: f64,
    #[serde(rename = "matchReasons")]
    pub reasons: Vec<String>,
    pub tags: Vec<String>,
}

/// Slot an exercise fills inside a composed workout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutRole {
    Warmup,
    Main,
    Finisher,
    Cooldown,
}

impl WorkoutRole {
    pub const ALL: [WorkoutRole; 4] = [
        WorkoutRole::Warmup,
        WorkoutRole::Main,
        WorkoutRole::Finisher,
        WorkoutRole::Cooldown,
    ];

    pub fn label(self) -> &'static str {
        match self {
            WorkoutRole::Warmup => "Warm-up",
            WorkoutRole::Main => "Main workout",
            WorkoutRole::Finisher => "Finisher",
            WorkoutRole::Cooldown => "Cool-down",
        }
    }
}

impl fmt::Display for WorkoutRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One day's structured workout, ordered warm-up through cool-down
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DailyWorkout {
    pub warmup: Vec<Recommendation>,
    pub main: Vec<Recommendation>,
    pub finisher: Vec<Recommendation>,
    pub cooldown: Vec<Recommendation>,
}

impl DailyWorkout {
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn len(&self) -> usize {
        self.warmup.len() + self.main.len() + self.finisher.len() + self.cooldown.len()
    }

    pub fn role(&self, role: WorkoutRole) -> &[Recommendation] {
        match role {
            WorkoutRole::Warmup => &self.warmup,
            WorkoutRole::Main => &self.main,
            WorkoutRole::Finisher => &self.finisher,
            WorkoutRole::Cooldown => &self.cooldown,
        }
    }

    pub fn role_mut(&mut self, role: WorkoutRole) -> &mut Vec<Recommendation> {
        match role {
            WorkoutRole::Warmup => &mut self.warmup,
            WorkoutRole::Main => &mut self.main,
            WorkoutRole::Finisher => &mut self.finisher,
            WorkoutRole::Cooldown => &mut self.cooldown,
        }
    }
}

/// Week of workouts keyed by weekday index (0 = Sunday .. 6 = Saturday),
/// one entry per active training day
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeeklyPlan {
    pub days: BTreeMap<u8, DailyWorkout>,
}

impl WeeklyPlan {
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn active_days(&self) -> Vec<u8> {
        self.days.keys().copied().collect()
    }
}

/// Client feedback on a recommended exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    Viewed,
    Liked,
    Disliked,
    Completed,
}

/// Feedback event for tracking client reactions
///
/// Events are logged for analytics only; nothing is persisted and feedback
/// never feeds back into scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackEvent {
    #[serde(rename = "clientId")]
    pub client_id: String,
    #[serde(rename = "exerciseId")]
    pub exercise_id: String,
    pub kind: FeedbackKind,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl FeedbackEvent {
    pub fn new(
        client_id: impl Into<String>,
        exercise_id: impl Into<String>,
        kind: FeedbackKind,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            exercise_id: exercise_id.into(),
            kind,
            created_at: chrono::Utc::now(),
        }
    }

    /// Emit the event to the log stream and return its assigned id
    pub fn record(&self) -> String {
        let event_id = uuid::Uuid::new_v4().to_string();
        tracing::info!(
            "Recorded {:?} feedback from client {} on exercise {} (event {})",
            self.kind,
            self.client_id,
            self.exercise_id,
            event_id
        );
        event_id
    }
}
