use crate::config::Config;
use crate::core::types::SeriesKind;
use log::{debug, info, warn};
use std::path::Path;

/// How many anomaly indices are spelled out before truncating
const MAX_LISTED_ANOMALIES: usize = 5;

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn // Data anomalies must surface even without -v
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log the effective configuration
pub fn log_config_info(config: &Config) {
    info!(
        "Inputs: odometry={}, images={}",
        config.odometry_path(),
        config.images_path()
    );
    info!(
        "Output: format={}, precision={}",
        config.output_format(),
        config.precision()
    );
    info!(
        "Chart: reference_index={}, bandwidth_y_max={}",
        config.reference_index(),
        config.bandwidth_y_max()
    );
}

/// Log a loaded series
pub fn log_series_loaded(kind: SeriesKind, records: usize, path: &Path) {
    info!("Loaded {records} {kind} record(s) from {}", path.display());
}

/// Log the reference timestamp used for normalization
pub fn log_reference(reference: f64, index: usize) {
    info!("Reference timestamp: {reference} (images record #{index})");
}

/// Log the size of the unified grid
pub fn log_grid(points: usize) {
    debug!("Unified grid has {points} point(s)");
}

/// Log zero or negative time gaps in a series
pub fn log_anomalies(kind: SeriesKind, indices: &[usize]) {
    let listed: Vec<String> = indices
        .iter()
        .take(MAX_LISTED_ANOMALIES)
        .map(ToString::to_string)
        .collect();
    let more = indices.len().saturating_sub(MAX_LISTED_ANOMALIES);
    let suffix = if more > 0 {
        format!(" and {more} more")
    } else {
        String::new()
    };

    warn!(
        "{} non-positive time gap(s) in {kind} series at record(s) {}{suffix}; bandwidth there is infinite or undefined",
        indices.len(),
        listed.join(", ")
    );
}

/// Log warning information
pub fn log_warning(message: &str) {
    warn!("{message}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_initialization_verbose() {
        // Logger can only be initialized once per process
        std::panic::catch_unwind(|| init_logger(true, false)).ok();
    }

    #[test]
    fn test_logger_initialization_quiet() {
        std::panic::catch_unwind(|| init_logger(false, true)).ok();
    }

    #[test]
    fn test_logger_initialization_conflicting() {
        // quiet takes precedence
        std::panic::catch_unwind(|| init_logger(true, true)).ok();
    }

    #[test]
    fn test_log_config_info() {
        log_config_info(&Config::default());

        let config = Config {
            odometry_path: Some("a.csv".to_string()),
            precision: Some(2),
            ..Default::default()
        };
        log_config_info(&config);
    }

    #[test]
    fn test_log_series_and_grid() {
        log_series_loaded(SeriesKind::Odometry, 0, Path::new("stats/odometry.csv"));
        log_series_loaded(SeriesKind::Images, 1_000_000, Path::new("images.csv"));
        log_reference(1733900000.5, 1);
        log_grid(0);
    }

    #[test]
    fn test_log_anomalies() {
        log_anomalies(SeriesKind::Images, &[1]);
        log_anomalies(SeriesKind::Odometry, &[1, 2, 3, 4, 5, 6, 7]);
        log_anomalies(SeriesKind::Odometry, &[]);
    }

    #[test]
    fn test_log_warning() {
        log_warning("Something odd");
    }
}
