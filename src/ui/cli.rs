// Command-line interface definitions and parsing for bwlat

use crate::config::CliConfig;
use crate::core::constants::output_formats;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    // Input
    /// Odometry log (default: stats/odometry.csv)
    #[arg(long, value_name = "FILE", global = true, help_heading = "Input")]
    pub odometry: Option<String>,

    /// Images log (default: stats/images.csv)
    #[arg(long, value_name = "FILE", global = true, help_heading = "Input")]
    pub images: Option<String>,

    /// Directory holding odometry.csv and images.csv
    #[arg(long, value_name = "DIR", global = true, help_heading = "Input")]
    pub stats_dir: Option<String>,

    // Output & Verbosity
    /// Suppress warnings and informational output
    #[arg(short = 'q', long, global = true, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, global = true, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Output format (default: text)
    #[arg(long, value_name = "FORMAT", value_parser = output_formats::ALL, global = true, help_heading = "Output & Verbosity")]
    pub format: Option<String>,

    /// Decimal places in statistics (default: 4)
    #[arg(long, value_name = "DIGITS", global = true, help_heading = "Output & Verbosity")]
    pub precision: Option<usize>,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", global = true, help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, global = true, help_heading = "Configuration")]
    pub no_config: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print mean and standard deviation of bandwidth and latency (default)
    Summary,
    /// Chart odometry, images and total bandwidth over time
    Bandwidth {
        /// Write the chart data to a CSV file instead of opening a window
        #[arg(long, value_name = "FILE")]
        export: Option<String>,

        /// Upper bound of the y-axis in Mbps (default: 2.5)
        #[arg(long, value_name = "MBPS")]
        y_max: Option<f64>,
    },
    /// Chart odometry and images latency over time
    Latency {
        /// Write the chart data to a CSV file instead of opening a window
        #[arg(long, value_name = "FILE")]
        export: Option<String>,
    },
    /// Generate shell completions
    #[command(name = "completion-generate", arg_required_else_help = true)]
    CompletionGenerate {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// What a run produces, resolved from the subcommand
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Summary,
    Bandwidth { export: Option<String> },
    Latency { export: Option<String> },
}

impl Cli {
    /// Reporting mode of this invocation, `None` for completion generation
    pub fn mode(&self) -> Option<Mode> {
        match self.command {
            None | Some(Commands::Summary) => Some(Mode::Summary),
            Some(Commands::Bandwidth { ref export, .. }) => Some(Mode::Bandwidth {
                export: export.clone(),
            }),
            Some(Commands::Latency { ref export }) => Some(Mode::Latency {
                export: export.clone(),
            }),
            Some(Commands::CompletionGenerate { .. }) => None,
        }
    }
}

/// Convert derive-based CLI arguments directly to CliConfig structure
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    let mut cli_config = CliConfig {
        odometry_path: cli.odometry.clone(),
        images_path: cli.images.clone(),
        stats_dir: cli.stats_dir.clone(),
        ..Default::default()
    };

    // Output & format
    cli_config.quiet = cli.quiet;
    cli_config.verbose = cli.verbose;
    cli_config.output_format = cli.format.clone();
    cli_config.precision = cli.precision;

    // Chart
    if let Some(Commands::Bandwidth { y_max, .. }) = cli.command {
        cli_config.bandwidth_y_max = y_max;
    }

    // Configuration
    cli_config.config_file = cli.config.clone();
    cli_config.no_config = cli.no_config;

    cli_config
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("bwlat").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_is_summary() {
        let cli = parse(&[]);
        assert_eq!(cli.mode(), Some(Mode::Summary));

        let config = cli_to_config(&cli);
        assert_eq!(config.odometry_path, None);
        assert_eq!(config.images_path, None);
        assert_eq!(config.stats_dir, None);
        assert_eq!(config.output_format, None);
        assert_eq!(config.precision, None);
        assert_eq!(config.bandwidth_y_max, None);
        assert!(!config.quiet);
        assert!(!config.verbose);
        assert!(!config.no_config);
    }

    #[test]
    fn test_cli_to_config_all_options() {
        let cli = parse(&[
            "--odometry",
            "o.csv",
            "--images",
            "i.csv",
            "--stats-dir",
            "runs",
            "--format",
            "json",
            "--precision",
            "2",
            "-v",
            "--config",
            "custom.toml",
        ]);

        let config = cli_to_config(&cli);
        assert_eq!(config.odometry_path.as_deref(), Some("o.csv"));
        assert_eq!(config.images_path.as_deref(), Some("i.csv"));
        assert_eq!(config.stats_dir.as_deref(), Some("runs"));
        assert_eq!(config.output_format.as_deref(), Some("json"));
        assert_eq!(config.precision, Some(2));
        assert!(config.verbose);
        assert_eq!(config.config_file.as_deref(), Some("custom.toml"));
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = parse(&["bandwidth", "--stats-dir", "runs", "--y-max", "5", "-q"]);

        assert_eq!(cli.mode(), Some(Mode::Bandwidth { export: None }));
        let config = cli_to_config(&cli);
        assert_eq!(config.stats_dir.as_deref(), Some("runs"));
        assert_eq!(config.bandwidth_y_max, Some(5.0));
        assert!(config.quiet);
    }

    #[test]
    fn test_latency_export() {
        let cli = parse(&["latency", "--export", "out.csv"]);
        assert_eq!(
            cli.mode(),
            Some(Mode::Latency {
                export: Some("out.csv".to_string())
            })
        );
    }

    #[test]
    fn test_completion_has_no_mode() {
        let cli = parse(&["completion-generate", "bash"]);
        assert_eq!(cli.mode(), None);
    }

    #[test]
    fn test_invalid_format_is_rejected() {
        assert!(Cli::try_parse_from(["bwlat", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_y_max_only_on_bandwidth() {
        assert!(Cli::try_parse_from(["bwlat", "latency", "--y-max", "3"]).is_err());
    }
}
