//! Fixed keyword tables for category, equipment, difficulty and weekday
//! matching. All lookups are case-insensitive over trimmed input.

use crate::models::FitnessLevel;

/// Difficulty label synonyms per fitness level
const BEGINNER_LABELS: [&str; 3] = ["beginner", "easy", "novice"];
const INTERMEDIATE_LABELS: [&str; 2] = ["intermediate", "moderate"];
const ADVANCED_LABELS: [&str; 3] = ["advanced", "hard", "expert"];

/// Equipment descriptors that mean "no equipment needed"
const BODYWEIGHT_MARKERS: [&str; 4] = ["bodyweight", "body weight", "none", "no equipment"];

/// Equipment keywords that work in a home setting (besides bodyweight)
const HOME_EQUIPMENT: [&str; 4] = ["dumbbell", "resistance band", "band", "kettlebell"];

/// Goal tag -> exercise category keywords
const GOAL_CATEGORIES: [(&str, &[&str]); 6] = [
    ("weight_loss", &["cardio", "hiit", "functional", "plyometric"]),
    ("muscle_building", &["strength", "hypertrophy"]),
    ("strength", &["strength", "powerlifting"]),
    ("endurance", &["cardio", "functional"]),
    ("flexibility", &["flexibility", "mobility", "yoga"]),
    ("general_fitness", &["functional", "cardio", "strength"]),
];

/// Preferred-type tag -> exercise category keywords
const TYPE_CATEGORIES: [(&str, &[&str]); 5] = [
    ("cardio", &["cardio", "hiit"]),
    ("strength", &["strength", "hypertrophy"]),
    ("flexibility", &["flexibility", "mobility"]),
    ("hiit", &["hiit", "plyometric"]),
    ("functional", &["functional"]),
];

/// Weekday names to day indices (0 = Sunday .. 6 = Saturday)
const WEEKDAY_NAMES: [(&str, u8); 7] = [
    ("sunday", 0),
    ("monday", 1),
    ("tuesday", 2),
    ("wednesday", 3),
    ("thursday", 4),
    ("friday", 5),
    ("saturday", 6),
];

/// Map a free-form difficulty label onto a fitness level
#[inline]
pub fn parse_difficulty(label: &str) -> Option<FitnessLevel> {
    let key = label.trim().to_lowercase();
    if BEGINNER_LABELS.contains(&key.as_str()) {
        Some(FitnessLevel::Beginner)
    } else if INTERMEDIATE_LABELS.contains(&key.as_str()) {
        Some(FitnessLevel::Intermediate)
    } else if ADVANCED_LABELS.contains(&key.as_str()) {
        Some(FitnessLevel::Advanced)
    } else {
        None
    }
}

/// Whether an equipment descriptor means the exercise needs no equipment
#[inline]
pub fn is_bodyweight(equipment: &str) -> bool {
    let key = equipment.trim().to_lowercase();
    key.is_empty() || BODYWEIGHT_MARKERS.iter().any(|marker| key.contains(marker))
}

/// Whether an equipment descriptor names home-compatible equipment
#[inline]
pub fn is_home_equipment(equipment: &str) -> bool {
    let key = equipment.trim().to_lowercase();
    HOME_EQUIPMENT.iter().any(|keyword| key.contains(keyword))
}

/// Category keywords a goal tag rewards, if the tag is recognized
#[inline]
pub fn goal_categories(goal: &str) -> Option<&'static [&'static str]> {
    let key = goal.trim().to_lowercase();
    GOAL_CATEGORIES
        .iter()
        .find(|(tag, _)| *tag == key)
        .map(|(_, categories)| *categories)
}

/// Category keywords a preferred-type tag rewards, if the tag is recognized
#[inline]
pub fn type_categories(preferred_type: &str) -> Option<&'static [&'static str]> {
    let key = preferred_type.trim().to_lowercase();
    TYPE_CATEGORIES
        .iter()
        .find(|(tag, _)| *tag == key)
        .map(|(_, categories)| *categories)
}

/// Map a weekday name to its day index; unrecognized names yield None
#[inline]
pub fn parse_weekday(name: &str) -> Option<u8> {
    let key = name.trim().to_lowercase();
    WEEKDAY_NAMES
        .iter()
        .find(|(weekday, _)| *weekday == key)
        .map(|(_, index)| *index)
}
