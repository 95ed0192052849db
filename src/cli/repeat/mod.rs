//! Repeat command - one-shot generation printed to stdout

use anyhow::bail;
use clap::Args;

use crate::domain::repeater;

#[derive(Args)]
pub struct RepeatArgs {
    /// Sentence to repeat
    #[arg(short, long)]
    pub sentence: String,

    /// Number of repetitions (1-100)
    #[arg(short = 'n', long, default_value_t = 3)]
    pub count: i64,
}

/// Run a single generation and print it
///
/// The output text goes to stdout so it can be piped; the stats line goes
/// to stderr. Validation failures exit non-zero with the user-facing
/// message.
pub async fn run(args: RepeatArgs) -> anyhow::Result<()> {
    match repeater::generate(&args.sentence, args.count) {
        Ok(repetition) => {
            println!("{}", repetition.output_text);
            eprintln!(
                "Total characters: {} | Total lines: {}",
                repetition.char_count, repetition.line_count
            );
            Ok(())
        }
        Err(e) if e.is_validation() => bail!("{}", e),
        Err(e) => bail!("unexpected failure: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_run_succeeds_for_valid_input() {
        let args = RepeatArgs {
            sentence: "hi".to_string(),
            count: 2,
        };
        assert!(run(args).await.is_ok());
    }

    #[tokio::test]
    async fn test_run_fails_with_validation_message() {
        let args = RepeatArgs {
            sentence: "  ".to_string(),
            count: 2,
        };

        let err = run(args).await.unwrap_err();
        assert_eq!(err.to_string(), "Please enter a sentence to repeat!");
    }
}
