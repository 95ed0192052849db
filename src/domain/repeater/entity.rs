//! Repetition result entity

use serde::{Deserialize, Serialize};

/// Result of a successful repetition
///
/// `output_text` holds the numbered lines joined with a single `\n` and no
/// trailing newline. `char_count` counts Unicode scalar values of
/// `output_text`, newline separators included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repetition {
    pub output_text: String,
    pub line_count: u32,
    pub char_count: u64,
}

impl Repetition {
    /// Iterate over the numbered lines of the output.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.output_text.split('\n')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_iteration() {
        let repetition = Repetition {
            output_text: "1. hi\n2. hi".to_string(),
            line_count: 2,
            char_count: 11,
        };

        let lines: Vec<&str> = repetition.lines().collect();
        assert_eq!(lines, vec!["1. hi", "2. hi"]);
    }

    #[test]
    fn test_serialization() {
        let repetition = Repetition {
            output_text: "1. hi".to_string(),
            line_count: 1,
            char_count: 5,
        };

        let json = serde_json::to_string(&repetition).unwrap();
        assert!(json.contains("\"output_text\":\"1. hi\""));
        assert!(json.contains("\"line_count\":1"));
        assert!(json.contains("\"char_count\":5"));
    }
}
