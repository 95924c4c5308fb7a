//! Input/output operations, configuration and error handling

/// CSV earthquake catalog loading
pub mod catalog;
/// Command-line argument parsing and batch processing
pub mod cli;
/// Defaults and named constants
pub mod configuration;
/// Error types
pub mod error;
/// Tracing subscriber setup
pub mod logging;
/// Batch progress display
pub mod progress;
/// Scale tables and result export
pub mod report;
