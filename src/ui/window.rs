//! Interactive chart window
//!
//! Build (window enabled by default):
//! ```bash
//! cargo run -- bandwidth
//! ```
//! Without the `gui` feature only `--export` is available for charts.

#[cfg(feature = "gui")]
mod gui_enabled {
    use eframe::egui::{self, Color32};
    use egui_plot::{Legend, Line, Plot, PlotBounds, PlotPoints};
    use log::debug;

    use crate::core::error::{BwlatError, Result};
    use crate::ui::chart::{ChartLine, ChartSpec, LineStyle, Rgb};

    /// Open a native window showing `chart` and block until it is closed.
    pub fn show_chart(chart: ChartSpec) -> Result<()> {
        let native_options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1000.0, 600.0])
                .with_min_inner_size([480.0, 320.0]),
            ..Default::default()
        };

        let title = chart.title.clone();
        debug!("Opening chart window '{title}'");
        eframe::run_native(
            &title,
            native_options,
            Box::new(move |_cc| Ok(Box::new(ChartWindow::new(chart)))),
        )
        .map_err(|e| BwlatError::Plot(e.to_string()))
    }

    struct ChartWindow {
        chart: ChartSpec,
        bounds_applied: bool,
    }

    impl ChartWindow {
        fn new(chart: ChartSpec) -> Self {
            Self {
                chart,
                bounds_applied: false,
            }
        }
    }

    impl eframe::App for ChartWindow {
        fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
            // Fixed bounds on the first frame only, so the plot can still be panned
            let apply_bounds = !self.bounds_applied && self.chart.bounds.is_valid();
            self.bounds_applied = true;
            let chart = &self.chart;

            egui::CentralPanel::default().show(ctx, |ui| {
                ui.heading(&chart.title);
                Plot::new("chart")
                    .legend(Legend::default())
                    .x_axis_label(chart.x_label.clone())
                    .y_axis_label(chart.y_label.clone())
                    .show(ui, |plot_ui| {
                        if apply_bounds {
                            plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                                chart.bounds.min,
                                chart.bounds.max,
                            ));
                        }
                        for line in &chart.lines {
                            plot_ui.line(to_plot_line(line));
                        }
                    });
            });
        }
    }

    fn to_plot_line(line: &ChartLine) -> Line {
        let style = match line.style {
            LineStyle::Solid => egui_plot::LineStyle::Solid,
            LineStyle::Dashed => egui_plot::LineStyle::dashed_loose(),
        };
        Line::new(PlotPoints::from(line.points.clone()))
            .name(&line.name)
            .color(to_color32(line.color))
            .width(line.width)
            .style(style)
    }

    fn to_color32(Rgb(r, g, b): Rgb) -> Color32 {
        Color32::from_rgb(r, g, b)
    }

}

#[cfg(not(feature = "gui"))]
mod gui_disabled {
    use crate::core::error::{BwlatError, Result};
    use crate::ui::chart::ChartSpec;

    pub fn show_chart(_chart: ChartSpec) -> Result<()> {
        Err(BwlatError::Plot(
            "bwlat was built without the `gui` feature; use --export to write the chart data"
                .to_string(),
        ))
    }

}

#[cfg(feature = "gui")]
pub use gui_enabled::show_chart;

#[cfg(not(feature = "gui"))]
pub use gui_disabled::show_chart;
