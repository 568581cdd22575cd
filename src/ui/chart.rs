//! Renderer-independent chart descriptions
//!
//! A [`ChartSpec`] carries everything needed to draw one chart: labels,
//! fixed axis bounds and styled lines. The window in `ui::window` and the
//! CSV export both consume it, so the chart contents are testable without
//! a display.

use crate::analysis::{BandwidthAnalysis, LatencyAnalysis};
use crate::core::types::Series;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub mod palette {
    use super::Rgb;

    pub const BLUE: Rgb = Rgb(0, 0, 255);
    pub const ORANGE: Rgb = Rgb(255, 165, 0);
    pub const GREEN: Rgb = Rgb(0, 128, 0);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartLine {
    pub name: String,
    pub points: Vec<[f64; 2]>,
    pub color: Rgb,
    pub style: LineStyle,
    pub width: f32,
}

impl ChartLine {
    fn new(name: &str, xs: &[f64], ys: &[f64], color: Rgb) -> Self {
        Self {
            name: name.to_string(),
            points: xs.iter().zip(ys).map(|(&x, &y)| [x, y]).collect(),
            color,
            style: LineStyle::Dashed,
            width: 1.5,
        }
    }

    fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    fn solid(mut self) -> Self {
        self.style = LineStyle::Solid;
        self
    }
}

/// Fixed visible area of a chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: [f64; 2],
    pub max: [f64; 2],
}

impl Bounds {
    /// Whether the bounds describe a non-empty finite area
    pub fn is_valid(&self) -> bool {
        (0..2).all(|axis| {
            self.min[axis].is_finite()
                && self.max[axis].is_finite()
                && self.min[axis] < self.max[axis]
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bounds: Bounds,
    pub lines: Vec<ChartLine>,
}

impl ChartSpec {
    /// Per-series and total bandwidth over the normalized grid.
    ///
    /// The y-axis is fixed to `[0, y_max]` so that runs stay comparable.
    pub fn bandwidth(analysis: &BandwidthAnalysis, y_max: f64) -> Self {
        let resampled = &analysis.resampled;
        let grid = &resampled.grid;
        Self {
            title: "Bandwidth".to_string(),
            x_label: "Time [s]".to_string(),
            y_label: "Bandwidth [Mbps]".to_string(),
            bounds: Bounds {
                min: [0.0, 0.0],
                max: [resampled.max_stamp().unwrap_or(0.0), y_max],
            },
            lines: vec![
                ChartLine::new(
                    "Odometry Bandwidth (Mbps)",
                    grid,
                    &resampled.odometry,
                    palette::BLUE,
                ),
                ChartLine::new(
                    "Images Bandwidth (Mbps)",
                    grid,
                    &resampled.images,
                    palette::ORANGE,
                ),
                ChartLine::new(
                    "Total Bandwidth (Mbps)",
                    grid,
                    &resampled.total,
                    palette::GREEN,
                )
                .solid()
                .width(2.0),
            ],
        }
    }

    /// Per-series latency in milliseconds over normalized stamps
    pub fn latency(analysis: &LatencyAnalysis) -> Self {
        Self {
            title: "Latency (relative to the reference image timestamp)".to_string(),
            x_label: "Time [s]".to_string(),
            y_label: "Latency [ms]".to_string(),
            bounds: Bounds {
                min: [0.0, 0.0],
                max: [
                    analysis.max_stamp().unwrap_or(0.0),
                    analysis.max_latency_ms().unwrap_or(0.0),
                ],
            },
            lines: vec![
                latency_line("Odometry Latency (ms)", &analysis.odometry, palette::BLUE),
                latency_line("Images Latency (ms)", &analysis.images, palette::ORANGE),
            ],
        }
    }
}

fn latency_line(name: &str, series: &Series, color: Rgb) -> ChartLine {
    ChartLine::new(name, &series.stamps(), &series.latencies_ms(), color).width(2.0)
}
