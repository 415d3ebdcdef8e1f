use crate::config::ChartConfig;
use crate::ui::state::AppState;
use crate::ui::widgets::YieldChart;

pub struct MainPanel;

impl MainPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &AppState, chart: &ChartConfig) {
        ui.heading("Treasury Par Yield Curve");
        ui.separator();

        if state.series.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label("No curve yet. Pick a date and click 'Fetch Yield Data'.");
            });
            return;
        }

        if let Some(description) = state.curve_description() {
            ui.label(egui::RichText::new(description).strong());
        }

        YieldChart::show(ui, &state.series, chart);
    }
}
