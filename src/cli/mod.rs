//! CLI module for the sentence repeater
//!
//! Provides subcommands for the different front doors:
//! - `serve`: HTTP API server
//! - `repeat`: one-shot generation on the command line
//! - `examples`: print the example catalog

pub mod examples;
pub mod repeat;
pub mod serve;

use clap::{Parser, Subcommand};

/// Sentence Repeater - numbered sentence repetition
#[derive(Parser)]
#[command(name = "sentence-repeater")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,

    /// Repeat a sentence once and print the result
    Repeat(repeat::RepeatArgs),

    /// Print example sentences and usage tips
    Examples,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_repeat_command() {
        let cli = Cli::try_parse_from(["sentence-repeater", "repeat", "--sentence", "hi"]).unwrap();
        assert!(matches!(cli.command, Command::Repeat(_)));
    }

    #[test]
    fn test_cli_parses_serve_command() {
        let cli = Cli::try_parse_from(["sentence-repeater", "serve"]).unwrap();
        assert!(matches!(cli.command, Command::Serve));
    }
}
