//! The core generation routine: validate, then build numbered lines

use crate::domain::repeater::entity::Repetition;
use crate::domain::repeater::validation::{validate_count, validate_sentence};
use crate::domain::DomainError;

/// Generate `count` numbered copies of `sentence`.
///
/// Validation short-circuits in a fixed order: empty sentence first, then
/// the lower count bound, then the upper one. On success, line `i`
/// (1-based) is `"<i>. <trimmed sentence>"` and lines are joined with a
/// single newline, no trailing newline.
///
/// Pure and deterministic: no I/O, no shared state, identical inputs give
/// identical output.
pub fn generate(sentence: &str, count: i64) -> Result<Repetition, DomainError> {
    let trimmed = validate_sentence(sentence)?;
    let count = validate_count(count)?;

    let output_text = build_lines(trimmed, count);
    let char_count = output_text.chars().count() as u64;

    Ok(Repetition {
        output_text,
        line_count: count,
        char_count,
    })
}

fn build_lines(sentence: &str, count: u32) -> String {
    let mut lines = Vec::with_capacity(count as usize);

    for i in 1..=count {
        lines.push(format!("{}. {}", i, sentence));
    }

    lines.join("\n")
}
