//! Output formatting and display logic for bwlat

use crate::analysis::{AnomalyCounts, Stats, Summary};
use crate::core::constants::{display, output_formats};
use crate::core::error::Result;
use crate::core::types::SeriesKind;
use crate::ui::color::{Colors, colorize};

/// One printed statistic
struct Metric<'a> {
    key: &'static str,
    label: &'static str,
    unit: &'static str,
    stats: &'a Stats,
}

fn metrics(summary: &Summary) -> [Metric<'_>; 3] {
    [
        Metric {
            key: "total_bandwidth_mbps",
            label: "Total bandwidth",
            unit: "Mbps",
            stats: &summary.total_bandwidth_mbps,
        },
        Metric {
            key: "odometry_latency_ms",
            label: "Odometry latency",
            unit: "ms",
            stats: &summary.odometry_latency_ms,
        },
        Metric {
            key: "images_latency_ms",
            label: "Images latency",
            unit: "ms",
            stats: &summary.images_latency_ms,
        },
    ]
}

/// Display summary statistics based on output format
pub fn display_summary(summary: &Summary, output_format: &str, precision: usize) -> Result<()> {
    let lines = match output_format {
        output_formats::MINIMAL => format_minimal(summary, precision),
        output_formats::JSON => vec![format_json(summary)?],
        _ => format_text(summary, precision),
    };
    for line in lines {
        println!("{line}");
    }
    Ok(())
}

/// `<label> (<unit>) - mean: <value>, stdev: <value>` per metric
pub fn format_text(summary: &Summary, precision: usize) -> Vec<String> {
    metrics(summary)
        .iter()
        .map(|m| {
            format!(
                "{} ({}) - mean: {:.prec$}, stdev: {:.prec$}",
                m.label,
                m.unit,
                m.stats.mean,
                m.stats.stdev,
                prec = precision
            )
        })
        .collect()
}

/// `<key> <mean> <stdev>` per metric
pub fn format_minimal(summary: &Summary, precision: usize) -> Vec<String> {
    metrics(summary)
        .iter()
        .map(|m| {
            format!(
                "{} {:.prec$} {:.prec$}",
                m.key,
                m.stats.mean,
                m.stats.stdev,
                prec = precision
            )
        })
        .collect()
}

/// Pretty JSON document; non-finite numbers become `null`
pub fn format_json(summary: &Summary) -> Result<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}

/// Warn on stderr about zero or negative time gaps
pub fn display_anomaly_warning(anomalies: &AnomalyCounts, quiet: bool) {
    if quiet || anomalies.total() == 0 {
        return;
    }
    for kind in SeriesKind::ALL {
        let count = anomalies.get(kind);
        if count > 0 {
            eprintln!("{}", anomaly_message(kind, count));
        }
    }
}

fn anomaly_message(kind: SeriesKind, count: usize) -> String {
    colorize(
        &format!(
            "{} {count} non-positive time gap(s) in the {kind} log; affected bandwidth values are infinite or undefined",
            display::WARNING_EMOJI
        ),
        Colors::BRIGHT_YELLOW,
    )
}

/// Report a written export file on stderr
pub fn display_export_info(path: &str, rows: usize, quiet: bool) {
    if quiet {
        return;
    }
    eprintln!(
        "{} {}: {path} ({rows} row(s))",
        display::FILE_EMOJI,
        colorize(
            &format!("{}{}{}", Colors::BOLD, "Exported chart data", Colors::RESET),
            Colors::BRIGHT_CYAN
        ),
    );
}
