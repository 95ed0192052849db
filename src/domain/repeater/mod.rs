//! Sentence repetition core

pub mod entity;
pub mod generator;
pub mod validation;

pub use entity::Repetition;
pub use generator::generate;
pub use validation::{validate_count, validate_sentence, MAX_REPEAT_COUNT, MIN_REPEAT_COUNT};
