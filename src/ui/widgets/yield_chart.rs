use crate::config::ChartConfig;
use crate::types::{CurveSeries, Tenor};
use crate::ui::services::ConfigBridge;
use egui::Color32;
use egui_plot::{uniform_grid_spacer, GridMark, Legend, Line, Plot, PlotPoints, Points};
use std::ops::RangeInclusive;

const SERIES_COLORS: [Color32; 2] = [
    Color32::from_rgb(66, 133, 244),
    Color32::from_rgb(234, 67, 53),
];

pub struct YieldChart;

impl YieldChart {
    pub fn show(ui: &mut egui::Ui, series: &[CurveSeries], config: &ChartConfig) {
        let y_max = ConfigBridge::to_y_axis_max(config, series);
        let last_tenor = (Tenor::COUNT - 1) as f64;

        Plot::new("yield_curve_plot")
            .legend(Legend::default())
            .x_axis_label("Maturity")
            .y_axis_label("Yield (%)")
            .x_grid_spacer(uniform_grid_spacer(|_| [1.0, 3.0, 12.0]))
            .x_axis_formatter(tenor_axis_label)
            .include_x(-0.5)
            .include_x(last_tenor + 0.5)
            .include_y(0.0)
            .include_y(y_max)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                for (idx, curve) in series.iter().enumerate() {
                    let color = SERIES_COLORS[idx % SERIES_COLORS.len()];
                    let coords: Vec<[f64; 2]> =
                        curve.points.iter().map(|p| p.as_plot_point()).collect();

                    plot_ui.line(
                        Line::new(curve.name(), PlotPoints::from(coords.clone()))
                            .color(color)
                            .width(2.0),
                    );
                    if config.show_points {
                        plot_ui.points(
                            Points::new(curve.name(), PlotPoints::from(coords))
                                .color(color)
                                .radius(3.5),
                        );
                    }
                }
            });
    }
}

/// Tenor label for grid marks sitting on a tenor position, blank elsewhere.
fn tenor_axis_label(mark: GridMark, _range: &RangeInclusive<f64>) -> String {
    let value = mark.value;
    if value < 0.0 || value.fract() != 0.0 {
        return String::new();
    }
    Tenor::from_index(value as usize)
        .map(|t| t.label().to_string())
        .unwrap_or_default()
}
