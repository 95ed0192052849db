//! Input validation for the repeater

use crate::domain::DomainError;

/// Minimum accepted repeat count
pub const MIN_REPEAT_COUNT: i64 = 1;

/// Maximum accepted repeat count
pub const MAX_REPEAT_COUNT: i64 = 100;

/// Validate a sentence and return it trimmed.
///
/// A sentence is rejected when it is empty after removing leading and
/// trailing whitespace.
pub fn validate_sentence(sentence: &str) -> Result<&str, DomainError> {
    let trimmed = sentence.trim();

    if trimmed.is_empty() {
        return Err(DomainError::EmptySentence);
    }

    Ok(trimmed)
}

/// Validate a repeat count against `[MIN_REPEAT_COUNT, MAX_REPEAT_COUNT]`.
///
/// Takes the caller-supplied integer as-is so out-of-range and negative
/// values reach the range checks instead of failing earlier conversion.
pub fn validate_count(count: i64) -> Result<u32, DomainError> {
    if count < MIN_REPEAT_COUNT {
        return Err(DomainError::CountTooLow);
    }

    if count > MAX_REPEAT_COUNT {
        return Err(DomainError::CountTooHigh);
    }

    Ok(count as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_sentences() {
        assert_eq!(validate_sentence("hello").unwrap(), "hello");
        assert_eq!(validate_sentence("  hello  ").unwrap(), "hello");
        assert_eq!(validate_sentence("\tHello, World!\n").unwrap(), "Hello, World!");
    }

    #[test]
    fn test_empty_sentences() {
        assert_eq!(validate_sentence(""), Err(DomainError::EmptySentence));
        assert_eq!(validate_sentence("   "), Err(DomainError::EmptySentence));
        assert_eq!(validate_sentence("\t\n"), Err(DomainError::EmptySentence));
    }

    #[test]
    fn test_inner_whitespace_preserved() {
        assert_eq!(validate_sentence("  a  b  ").unwrap(), "a  b");
    }

    #[test]
    fn test_valid_counts() {
        assert_eq!(validate_count(1).unwrap(), 1);
        assert_eq!(validate_count(50).unwrap(), 50);
        assert_eq!(validate_count(100).unwrap(), 100);
    }

    #[test]
    fn test_count_too_low() {
        assert_eq!(validate_count(0), Err(DomainError::CountTooLow));
        assert_eq!(validate_count(-5), Err(DomainError::CountTooLow));
        assert_eq!(validate_count(i64::MIN), Err(DomainError::CountTooLow));
    }

    #[test]
    fn test_count_too_high() {
        assert_eq!(validate_count(101), Err(DomainError::CountTooHigh));
        assert_eq!(validate_count(i64::MAX), Err(DomainError::CountTooHigh));
    }
}
