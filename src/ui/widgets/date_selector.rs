use chrono::NaiveDate;
use egui_extras::DatePickerButton;

pub struct DateSelector;

impl DateSelector {
    /// Labelled date picker. Returns the new date when the user picked one.
    pub fn show(ui: &mut egui::Ui, label: &str, id_salt: &str, current: NaiveDate) -> Option<NaiveDate> {
        let mut date = current;

        ui.vertical(|ui| {
            ui.small(label);
            ui.add(DatePickerButton::new(&mut date).id_salt(id_salt));
        });

        (date != current).then_some(date)
    }
}
