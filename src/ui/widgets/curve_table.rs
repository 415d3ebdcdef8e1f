use crate::types::CurveSeries;

pub struct CurveTable;

impl CurveTable {
    /// Every tenor of the series' record, absent ones as "n/a". `slot` is the
    /// series position and keeps grid ids unique.
    pub fn show(ui: &mut egui::Ui, slot: usize, series: &CurveSeries) {
        egui::Grid::new(("curve_table", slot))
            .striped(true)
            .num_columns(2)
            .show(ui, |ui| {
                ui.strong("Maturity");
                ui.strong("Yield");
                ui.end_row();

                for (tenor, value) in series.record.entries() {
                    ui.label(tenor.label());
                    match value {
                        Some(y) => ui.label(format!("{:.2}%", y)),
                        None => ui.weak("n/a"),
                    };
                    ui.end_row();
                }
            });
    }
}
