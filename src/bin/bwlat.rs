use bwlat::analysis::{self, Dataset};
use bwlat::config::{CliConfig, Config};
use bwlat::reporting::logging;
use bwlat::ui::color::{Colors, colorize};
use bwlat::ui::export::{create_export_file, export_bandwidth, export_latency};
use bwlat::ui::output;
use bwlat::ui::{ChartSpec, Cli, Commands, Mode, cli_to_config, print_completions, show_chart};
use clap::{CommandFactory, Parser};

use std::io::BufWriter;
use std::path::Path;

fn main() {
    let cli = Cli::parse();

    // Handle completion commands first
    if let Some(exit_code) = handle_completion_commands(&cli) {
        std::process::exit(exit_code);
    }

    match run_bwlat_logic(&cli) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("{} {e}", colorize("Error:", Colors::RED));
            std::process::exit(1);
        }
    }
}

/// Handle completion commands and return exit code if a completion command was processed
pub fn handle_completion_commands(cli: &Cli) -> Option<i32> {
    match cli.command {
        Some(Commands::CompletionGenerate { shell }) => {
            let mut app = Cli::command();
            print_completions(shell, &mut app);
            Some(0)
        }
        _ => None,
    }
}

/// Main analysis logic extracted from main() for testing
pub fn run_bwlat_logic(cli: &Cli) -> bwlat::Result<()> {
    let Some(mode) = cli.mode() else {
        return Ok(());
    };

    // Parse CLI arguments into CliConfig using the derive-based CLI
    let cli_config = cli_to_config(cli);

    // Load and merge configuration; failures are reported by main
    let config = load_and_merge_config(&cli_config)?;

    logging::init_logger(config.verbose(), cli_config.quiet);
    logging::log_config_info(&config);

    let dataset = Dataset::load(
        Path::new(config.odometry_path()),
        Path::new(config.images_path()),
    )?;

    match mode {
        Mode::Summary => {
            let summary = analysis::summarize(&dataset)?;
            output::display_summary(&summary, config.output_format(), config.precision())?;
            output::display_anomaly_warning(&summary.anomalies, cli_config.quiet);
        }
        Mode::Bandwidth { export } => {
            let result = analysis::analyze_bandwidth(&dataset, config.reference_index())?;
            output::display_anomaly_warning(&result.anomalies, cli_config.quiet);
            match export {
                Some(path) => {
                    let file = BufWriter::new(create_export_file(&path)?);
                    let rows = export_bandwidth(file, &result.resampled)?;
                    output::display_export_info(&path, rows, cli_config.quiet);
                }
                None => open_chart(ChartSpec::bandwidth(&result, config.bandwidth_y_max()))?,
            }
        }
        Mode::Latency { export } => {
            let result = analysis::analyze_latency(&dataset, config.reference_index())?;
            match export {
                Some(path) => {
                    let file = BufWriter::new(create_export_file(&path)?);
                    let rows = export_latency(file, &result)?;
                    output::display_export_info(&path, rows, cli_config.quiet);
                }
                None => open_chart(ChartSpec::latency(&result))?,
            }
        }
    }

    Ok(())
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(cli_config: &CliConfig) -> bwlat::Result<Config> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file)?
    } else {
        Config::load_from_standard_locations()?
    };

    // Merge CLI arguments with configuration (CLI takes precedence)
    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}

fn open_chart(chart: ChartSpec) -> bwlat::Result<()> {
    if !chart.bounds.is_valid() {
        logging::log_warning(&format!(
            "'{}' has degenerate axis bounds; the view starts unscaled",
            chart.title
        ));
    }
    show_chart(chart)
}
