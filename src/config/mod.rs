//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::constants::{defaults, inputs, output_formats};
use crate::core::error::{BwlatError, Result};
use crate::core::types::SeriesKind;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path of the odometry log
    pub odometry_path: Option<String>,

    /// Path of the images log
    pub images_path: Option<String>,

    /// Output format (text, json, minimal)
    pub output_format: Option<String>,

    /// Decimal places in printed statistics
    pub precision: Option<usize>,

    /// Upper bound of the bandwidth chart in Mbps
    pub bandwidth_y_max: Option<f64>,

    /// Index of the images record used as time zero in charts
    pub reference_index: Option<usize>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            odometry_path: Some(inputs::DEFAULT_ODOMETRY_PATH.to_string()),
            images_path: Some(inputs::DEFAULT_IMAGES_PATH.to_string()),
            output_format: Some(output_formats::DEFAULT.to_string()),
            precision: Some(defaults::PRECISION),
            bandwidth_y_max: Some(defaults::BANDWIDTH_Y_MAX),
            reference_index: Some(defaults::REFERENCE_INDEX),
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            BwlatError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| BwlatError::TomlParsing {
                path: path.display().to_string(),
                source,
            })?;

        // Validate the loaded configuration
        config.validate()?;
        Ok(config)
    }

    /// Find and load `.bwlat.toml` in the current directory or up to three
    /// parents, falling back to defaults when none exists.
    ///
    /// A config file that exists but is invalid is an error.
    pub fn load_from_standard_locations() -> Result<Self> {
        for path in Self::standard_locations() {
            if path.is_file() {
                return Self::load_from_file(path);
            }
        }

        // Fall back to defaults
        Ok(Self::default())
    }

    fn standard_locations() -> Vec<PathBuf> {
        (0..=inputs::CONFIG_SEARCH_DEPTH)
            .map(|depth| PathBuf::from(format!("{}{}", "../".repeat(depth), inputs::CONFIG_FILE)))
            .collect()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        // Inputs: a stats directory sets both paths, explicit paths win
        if let Some(ref dir) = cli_config.stats_dir {
            self.odometry_path = Some(stats_dir_path(dir, SeriesKind::Odometry));
            self.images_path = Some(stats_dir_path(dir, SeriesKind::Images));
        }
        if let Some(ref path) = cli_config.odometry_path {
            self.odometry_path = Some(path.clone());
        }
        if let Some(ref path) = cli_config.images_path {
            self.images_path = Some(path.clone());
        }

        // Output & format
        if let Some(ref output_format) = cli_config.output_format {
            self.output_format = Some(output_format.clone());
        }
        if let Some(precision) = cli_config.precision {
            self.precision = Some(precision);
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }

        // Chart
        if let Some(y_max) = cli_config.bandwidth_y_max {
            self.bandwidth_y_max = Some(y_max);
        }
    }

    pub fn odometry_path(&self) -> &str {
        self.odometry_path
            .as_deref()
            .unwrap_or(inputs::DEFAULT_ODOMETRY_PATH)
    }

    pub fn images_path(&self) -> &str {
        self.images_path
            .as_deref()
            .unwrap_or(inputs::DEFAULT_IMAGES_PATH)
    }

    pub fn output_format(&self) -> &str {
        self.output_format
            .as_deref()
            .unwrap_or(output_formats::DEFAULT)
    }

    pub fn precision(&self) -> usize {
        self.precision.unwrap_or(defaults::PRECISION)
    }

    pub fn bandwidth_y_max(&self) -> f64 {
        self.bandwidth_y_max.unwrap_or(defaults::BANDWIDTH_Y_MAX)
    }

    pub fn reference_index(&self) -> usize {
        self.reference_index.unwrap_or(defaults::REFERENCE_INDEX)
    }

    pub fn verbose(&self) -> bool {
        self.verbose.unwrap_or(false)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Validate input paths
        for (name, path) in [
            ("odometry_path", &self.odometry_path),
            ("images_path", &self.images_path),
        ] {
            if let Some(path) = path
                && path.trim().is_empty()
            {
                return Err(BwlatError::Config(format!(
                    "{name} cannot be empty. Expected a path to a CSV file."
                )));
            }
        }

        // Validate output format
        if let Some(ref format) = self.output_format
            && !output_formats::ALL.contains(&format.as_str())
        {
            return Err(BwlatError::Config(format!(
                "Invalid output format '{format}'. Expected one of: {}.",
                output_formats::ALL.join(", ")
            )));
        }

        // Validate precision
        if let Some(precision) = self.precision
            && precision > defaults::MAX_PRECISION
        {
            return Err(BwlatError::Config(format!(
                "Precision of {precision} digits is too large. Expected at most {}.",
                defaults::MAX_PRECISION
            )));
        }

        // Validate chart bound
        if let Some(y_max) = self.bandwidth_y_max
            && !(y_max.is_finite() && y_max > 0.0)
        {
            return Err(BwlatError::Config(format!(
                "Bandwidth y-axis maximum {y_max} is invalid. Expected a positive number of Mbps."
            )));
        }

        Ok(())
    }
}

fn stats_dir_path(dir: &str, kind: SeriesKind) -> String {
    Path::new(dir).join(kind.file_name()).display().to_string()
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    // Inputs
    pub odometry_path: Option<String>, // --odometry
    pub images_path: Option<String>,   // --images
    pub stats_dir: Option<String>,     // --stats-dir

    // Output & format
    pub quiet: bool,                   // --quiet
    pub verbose: bool,                 // --verbose
    pub output_format: Option<String>, // --format
    pub precision: Option<usize>,      // --precision

    // Chart
    pub bandwidth_y_max: Option<f64>, // --y-max

    // Configuration
    pub config_file: Option<String>, // --config
    pub no_config: bool,             // --no-config
}
