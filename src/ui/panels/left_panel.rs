use crate::ui::state::{AppState, Message, ViewMode};
use crate::ui::widgets::DateSelector;

pub struct LeftPanel;

impl LeftPanel {
    pub fn new() -> Self {
        Self
    }

    /// Draw the controls and collect what the user asked for. Nothing here
    /// mutates state directly.
    pub fn show(&mut self, ui: &mut egui::Ui, state: &AppState) -> Vec<Message> {
        let mut messages = Vec::new();

        ui.heading("Curve Selection");
        ui.separator();

        // 1. Mode
        ui.label("Mode:");
        ui.horizontal(|ui| {
            if ui.radio(state.mode == ViewMode::Single, "Single date").clicked() {
                messages.push(Message::ModeChanged(ViewMode::Single));
            }
            if ui.radio(state.mode == ViewMode::Compare, "Compare two dates").clicked() {
                messages.push(Message::ModeChanged(ViewMode::Compare));
            }
        });

        ui.separator();

        // 2. Dates
        ui.horizontal(|ui| {
            if let Some(date) = DateSelector::show(ui, "Date", "primary_date", state.primary_date) {
                messages.push(Message::PrimaryDateChanged(date));
            }
            if state.mode == ViewMode::Compare {
                if let Some(date) =
                    DateSelector::show(ui, "Compare with", "comparison_date", state.comparison_date)
                {
                    messages.push(Message::ComparisonDateChanged(date));
                }
            }
        });

        ui.separator();

        // 3. Fetch
        ui.vertical_centered_justified(|ui| {
            if ui.button("Fetch Yield Data").clicked() {
                messages.push(Message::FetchRequested);
            }
        });

        if state.is_loading {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading...");
            });
        }

        if let Some(error) = &state.error_message {
            ui.colored_label(egui::Color32::RED, error);
        }

        for notice in &state.notices {
            ui.colored_label(egui::Color32::YELLOW, notice);
        }

        ui.separator();
        ui.small(&state.status_message);

        messages
    }
}
