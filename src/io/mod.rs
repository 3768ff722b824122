//! Input/output: command-line interface, design files, configuration and errors

/// Command-line interface and subcommand dispatch
pub mod cli;
/// Tunable constants and defaults
pub mod configuration;
/// Design file model and JSON persistence
pub mod design;
/// Error types for pattern operations
pub mod error;
/// Progress display for batch analysis
pub mod progress;
