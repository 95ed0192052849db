//! Repeater service wrapping the pure generation routine

use std::fmt::Debug;

use async_trait::async_trait;
use tracing::{debug, instrument, warn};

use crate::domain::error::DomainError;
use crate::domain::repeater::{self, Repetition};

/// Trait for the repeater service (for dynamic dispatch in AppState)
#[async_trait]
pub trait RepeaterServiceTrait: Send + Sync + Debug {
    /// Generate `count` numbered copies of `sentence`
    async fn generate(&self, sentence: &str, count: i64) -> Result<Repetition, DomainError>;
}

/// Repeater service implementation
///
/// The core is synchronous and stateless; the async trait only exists so
/// handlers can share it behind `Arc<dyn _>` like every other service.
#[derive(Debug, Clone, Default)]
pub struct RepeaterService;

impl RepeaterService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RepeaterServiceTrait for RepeaterService {
    #[instrument(skip(self, sentence))]
    async fn generate(&self, sentence: &str, count: i64) -> Result<Repetition, DomainError> {
        match repeater::generate(sentence, count) {
            Ok(repetition) => {
                debug!(
                    line_count = repetition.line_count,
                    char_count = repetition.char_count,
                    "Generated repetition"
                );
                Ok(repetition)
            }
            Err(e) => {
                warn!(error = %e, "Rejected repetition request");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_generate_success() {
        let service = RepeaterService::new();
        let result = service.generate("Hello, World!", 3).await.unwrap();

        assert_eq!(result.line_count, 3);
        assert_eq!(result.char_count, 50);
    }

    #[tokio::test]
    async fn test_generate_propagates_validation_errors() {
        let service = RepeaterService::new();

        assert_eq!(
            service.generate("  ", 3).await,
            Err(DomainError::EmptySentence)
        );
        assert_eq!(
            service.generate("hi", 0).await,
            Err(DomainError::CountTooLow)
        );
        assert_eq!(
            service.generate("hi", 101).await,
            Err(DomainError::CountTooHigh)
        );
    }
}
