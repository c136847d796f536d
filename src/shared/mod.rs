//! Shared utilities
//!
//! Small building blocks used by both the library and the CLI.

pub mod distinct_log;

pub use distinct_log::{DistinctLogger, LogLevel};
