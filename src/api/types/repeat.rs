//! Request/response types for the repetition endpoint

use serde::{Deserialize, Serialize};

use crate::domain::{ExampleSentence, Repetition};

/// POST /v1/repetitions request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepeatRequest {
    pub sentence: String,
    pub count: i64,
}

/// Successful repetition response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepeatResponse {
    pub output_text: String,
    pub line_count: u32,
    pub char_count: u64,
}

impl From<Repetition> for RepeatResponse {
    fn from(repetition: Repetition) -> Self {
        Self {
            output_text: repetition.output_text,
            line_count: repetition.line_count,
            char_count: repetition.char_count,
        }
    }
}

/// GET /v1/examples response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamplesResponse {
    pub examples: Vec<ExampleSentence>,
    pub tips: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserialization() {
        let request: RepeatRequest =
            serde_json::from_str(r#"{"sentence":"hi","count":3}"#).unwrap();
        assert_eq!(request.sentence, "hi");
        assert_eq!(request.count, 3);
    }

    #[test]
    fn test_request_accepts_negative_count() {
        // Out-of-range values must reach domain validation, not fail parsing
        let request: RepeatRequest =
            serde_json::from_str(r#"{"sentence":"hi","count":-5}"#).unwrap();
        assert_eq!(request.count, -5);
    }

    #[test]
    fn test_response_from_repetition() {
        let response = RepeatResponse::from(Repetition {
            output_text: "1. hi".to_string(),
            line_count: 1,
            char_count: 5,
        });

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"output_text\":\"1. hi\""));
        assert!(json.contains("\"line_count\":1"));
        assert!(json.contains("\"char_count\":5"));
    }
}
