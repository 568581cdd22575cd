use std::fmt;

use crate::core::types::SeriesKind;

/// Error types for bwlat operations
#[derive(Debug)]
pub enum BwlatError {
    /// IO error (file operations, etc.)
    Io(std::io::Error),

    /// CSV writer error
    Csv(csv::Error),

    /// Input log is missing a required column or holds a non-numeric value
    MalformedInput {
        source_name: String,
        message: String,
    },

    /// A series has too few records for the requested operation
    InsufficientData {
        series: SeriesKind,
        needed: usize,
        found: usize,
    },

    /// Configuration error
    Config(String),

    /// Config file is not valid TOML or does not match the expected keys
    TomlParsing {
        path: String,
        source: toml::de::Error,
    },

    /// JSON serialization error
    Json(serde_json::Error),

    /// Chart window error
    Plot(String),
}

impl fmt::Display for BwlatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BwlatError::Io(err) => write!(f, "IO error: {err}"),
            BwlatError::Csv(err) => write!(f, "CSV error: {err}"),
            BwlatError::MalformedInput {
                source_name,
                message,
            } => write!(f, "Malformed input in '{source_name}': {message}"),
            BwlatError::InsufficientData {
                series,
                needed,
                found,
            } => write!(
                f,
                "Insufficient data: {series} series needs at least {needed} record(s), found {found}"
            ),
            BwlatError::Config(msg) => write!(f, "Configuration error: {msg}"),
            BwlatError::TomlParsing { path, source } => {
                write!(f, "Invalid TOML in config file '{path}': {source}")
            }
            BwlatError::Json(err) => write!(f, "JSON error: {err}"),
            BwlatError::Plot(msg) => write!(f, "Plot error: {msg}"),
        }
    }
}

impl std::error::Error for BwlatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BwlatError::Io(err) => Some(err),
            BwlatError::Csv(err) => Some(err),
            BwlatError::TomlParsing { source, .. } => Some(source),
            BwlatError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BwlatError {
    fn from(err: std::io::Error) -> Self {
        BwlatError::Io(err)
    }
}

impl From<csv::Error> for BwlatError {
    fn from(err: csv::Error) -> Self {
        BwlatError::Csv(err)
    }
}

impl From<serde_json::Error> for BwlatError {
    fn from(err: serde_json::Error) -> Self {
        BwlatError::Json(err)
    }
}

/// Type alias for Results using BwlatError
pub type Result<T> = std::result::Result<T, BwlatError>;
