//! Domain layer - Core business logic and entities

pub mod error;
pub mod examples;
pub mod repeater;

pub use error::DomainError;
pub use examples::{ExampleSentence, EXAMPLE_SENTENCES, USAGE_TIPS};
pub use repeater::{
    generate, validate_count, validate_sentence, Repetition, MAX_REPEAT_COUNT, MIN_REPEAT_COUNT,
};
