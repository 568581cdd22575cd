//! # bwlat - bandwidth and latency analysis for recorded sensor logs
//!
//! bwlat reads two CSV logs written during a recording, one for odometry
//! messages and one for image messages, each with a `stamp`, a message
//! `size` in bytes and a `latency` in seconds. From them it derives
//! per-message bandwidth, puts both series on a shared time grid and
//! either prints summary statistics or charts bandwidth and latency over
//! time.
//!
//! ## Module Organization
//!
//! - **`core`**: Fundamental types, constants, and error handling
//! - **`analysis`**: Loading, bandwidth derivation, normalization, resampling and statistics
//! - **`config`**: Configuration management and TOML parsing
//! - **`ui`**: CLI, output formatting, charts and shell completions
//! - **`reporting`**: Structured logging

// Core modules
pub mod core;

// Feature modules
pub mod analysis;
pub mod config;
pub mod reporting;
pub mod ui;

// Re-export core types for convenience
pub use crate::core::{BwlatError, Record, Result, Series, SeriesKind};

pub use analysis::{Dataset, Summary};
pub use config::Config;
