//! Sentence Repeater
//!
//! Repeats a sentence a requested number of times as numbered lines, with
//! character and line statistics. The core is a pure validation-and-
//! generation routine; an axum HTTP API and a clap CLI sit on top of it.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
