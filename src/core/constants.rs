/// Application-wide constants to avoid magic values throughout the codebase.
///
/// This module centralizes all magic strings, numbers, and other literal values
/// used across the application, making them easier to maintain and modify.
/// Output format constants
pub mod output_formats {
    /// Text output format - one labelled line per metric
    pub const TEXT: &str = "text";
    /// JSON output format - structured output for automation
    pub const JSON: &str = "json";
    /// Minimal output format - `name mean stdev` without colors
    pub const MINIMAL: &str = "minimal";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 3] = [TEXT, JSON, MINIMAL];
}

/// Input file locations
pub mod inputs {
    /// Directory holding both logs when nothing else is configured
    pub const DEFAULT_STATS_DIR: &str = "stats";
    /// File name of the odometry log inside the stats directory
    pub const ODOMETRY_FILE: &str = "odometry.csv";
    /// File name of the images log inside the stats directory
    pub const IMAGES_FILE: &str = "images.csv";
    /// Default odometry log path
    pub const DEFAULT_ODOMETRY_PATH: &str = "stats/odometry.csv";
    /// Default images log path
    pub const DEFAULT_IMAGES_PATH: &str = "stats/images.csv";
    /// Config file name searched in the working directory and its parents
    pub const CONFIG_FILE: &str = ".bwlat.toml";
    /// How many parent directories are searched for the config file
    pub const CONFIG_SEARCH_DEPTH: usize = 3;
}

/// CSV column names
pub mod columns {
    pub const STAMP: &str = "stamp";
    pub const SIZE: &str = "size";
    pub const LATENCY: &str = "latency";

    /// Columns every log must carry
    pub const REQUIRED: [&str; 3] = [STAMP, SIZE, LATENCY];
}

/// Unit conversion factors
pub mod units {
    pub const BITS_PER_BYTE: f64 = 8.0;
    pub const BITS_PER_MEGABIT: f64 = 1e6;
    pub const MS_PER_SECOND: f64 = 1000.0;
}

/// Default configuration values
pub mod defaults {
    /// Decimal places in printed statistics
    pub const PRECISION: usize = 4;
    /// Largest accepted precision
    pub const MAX_PRECISION: usize = 12;
    /// Fixed upper bound of the bandwidth chart in Mbps
    pub const BANDWIDTH_Y_MAX: f64 = 2.5;
    /// Index into the images series of the reference timestamp
    pub const REFERENCE_INDEX: usize = 1;
}

/// Display and formatting constants
pub mod display {
    /// Emoji for warnings
    pub const WARNING_EMOJI: &str = "⚠️";
    /// Emoji for written files
    pub const FILE_EMOJI: &str = "📁";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_formats_constants() {
        assert_eq!(output_formats::TEXT, "text");
        assert_eq!(output_formats::JSON, "json");
        assert_eq!(output_formats::MINIMAL, "minimal");
        assert_eq!(output_formats::DEFAULT, "text");
        assert_eq!(output_formats::ALL.len(), 3);
    }

    #[test]
    fn test_default_paths_match_stats_dir() {
        assert_eq!(
            inputs::DEFAULT_ODOMETRY_PATH,
            format!("{}/{}", inputs::DEFAULT_STATS_DIR, inputs::ODOMETRY_FILE)
        );
        assert_eq!(
            inputs::DEFAULT_IMAGES_PATH,
            format!("{}/{}", inputs::DEFAULT_STATS_DIR, inputs::IMAGES_FILE)
        );
    }

    #[test]
    fn test_required_columns() {
        assert_eq!(columns::REQUIRED, ["stamp", "size", "latency"]);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(defaults::PRECISION, 4);
        assert_eq!(defaults::BANDWIDTH_Y_MAX, 2.5);
        assert_eq!(defaults::REFERENCE_INDEX, 1);
    }
}
