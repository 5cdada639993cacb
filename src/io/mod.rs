//! Input/output operations, configuration and error handling

/// Command-line interface and subcommand handlers
pub mod cli;
/// Packing constants and runtime defaults
pub mod configuration;
/// Error types and path context helpers
pub mod error;
/// Log subscriber setup
pub mod logging;
/// Editor map files
pub mod map;
/// Batch progress display
pub mod progress;
/// Atomic ruleset document persistence
pub mod storage;
