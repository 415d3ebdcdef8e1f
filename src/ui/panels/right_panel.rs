use crate::ui::state::AppState;
use crate::ui::widgets::CurveTable;
use crate::utils::format_date;

pub struct RightPanel;

impl RightPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &AppState) {
        ui.heading("Curve Details");
        ui.separator();

        if state.series.is_empty() {
            ui.label("Nothing loaded");
            return;
        }

        for (slot, series) in state.series.iter().enumerate() {
            ui.group(|ui| {
                ui.strong(series.name());
                if series.is_substituted() {
                    ui.weak(format!(
                        "No data on {}, showing latest earlier record",
                        format_date(series.requested)
                    ));
                }

                let classification = &series.classification;
                ui.horizontal(|ui| {
                    ui.label("Shape:");
                    ui.label(classification.shape.label());
                });
                ui.horizontal(|ui| {
                    ui.label("Short-term avg:");
                    ui.label(format_mean(classification.short_mean));
                });
                ui.horizontal(|ui| {
                    ui.label("Long-term avg:");
                    ui.label(format_mean(classification.long_mean));
                });

                egui::CollapsingHeader::new("Tenors")
                    .id_salt(("tenors", slot))
                    .show(ui, |ui| {
                        CurveTable::show(ui, slot, series);
                    });
            });

            ui.add_space(5.0);
        }
    }
}

fn format_mean(mean: Option<f64>) -> String {
    mean.map(|m| format!("{:.3}%", m))
        .unwrap_or_else(|| "n/a".to_string())
}
