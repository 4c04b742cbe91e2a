// Core algorithm exports
pub mod daily;
pub mod keywords;
pub mod recommender;
pub mod rules;
pub mod weekly;

pub use recommender::{derive_tags, passes_all_filters, Recommender, DEFAULT_RECOMMENDATION_COUNT};
pub use rules::{Rule, RULES};
pub use weekly::resolve_training_days;
