//! Static example catalog
//!
//! Display-only suggestions a presentation layer can offer for copy-paste.
//! Nothing here feeds back into the generator.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A ready-made sentence a user can try
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleSentence {
    pub sentence: String,
}

/// Example sentences offered to the user
pub static EXAMPLE_SENTENCES: Lazy<Vec<ExampleSentence>> = Lazy::new(|| {
    [
        "Hello, World!",
        "Practice makes perfect.",
        "The quick brown fox jumps over the lazy dog.",
        "Rust is awesome!",
        "Learning is fun.",
    ]
    .into_iter()
    .map(|sentence| ExampleSentence {
        sentence: sentence.to_string(),
    })
    .collect()
});

/// Usage tips shown alongside the examples
pub const USAGE_TIPS: &[&str] = &[
    "Keep sentences reasonable in length",
    "Maximum 100 repetitions allowed",
    "Output can be copied directly",
    "Use punctuation for better readability",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repeater::generate;

    #[test]
    fn test_catalog_is_not_empty() {
        assert!(!EXAMPLE_SENTENCES.is_empty());
        assert!(!USAGE_TIPS.is_empty());
    }

    #[test]
    fn test_every_example_passes_validation() {
        for example in EXAMPLE_SENTENCES.iter() {
            assert!(generate(&example.sentence, 1).is_ok(), "{}", example.sentence);
        }
    }
}
