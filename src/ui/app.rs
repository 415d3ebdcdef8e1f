use super::panels::{LeftPanel, MainPanel, RightPanel};
use super::services::FetchRunner;
use super::state::{AppState, FetchRequest, Message};
use crate::config::ConfigManager;
use crate::utils::today;

pub struct YieldCurveApp {
    state: AppState,
    config: ConfigManager,
    runner: Option<FetchRunner>,
    left_panel: LeftPanel,
    main_panel: MainPanel,
    right_panel: RightPanel,
}

impl YieldCurveApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: ConfigManager) -> Self {
        let mut state = AppState::new(today(), config.get());

        let runner = match FetchRunner::new(&config.get().api) {
            Ok(runner) => Some(runner),
            Err(e) => {
                log::error!("Fetching disabled: {}", e);
                state.error_message = Some(e.to_string());
                None
            }
        };

        if config.get().api.api_key.is_empty() {
            log::warn!("No API key configured, the provider will likely reject requests");
        }

        Self {
            state,
            config,
            runner,
            left_panel: LeftPanel::new(),
            main_panel: MainPanel::new(),
            right_panel: RightPanel::new(),
        }
    }

    fn dispatch(&mut self, message: Message, ctx: &egui::Context) {
        if let Some(request) = self.state.apply(message) {
            self.start_fetch(request, ctx);
        }
    }

    fn start_fetch(&mut self, request: FetchRequest, ctx: &egui::Context) {
        match &self.runner {
            Some(runner) => {
                log::debug!("Starting fetch cycle {} for {:?}", request.generation, request.target);
                runner.start(request, Some(ctx.clone()));
            }
            None => {
                self.state.is_loading = false;
                self.state.error_message = Some("Fetching is unavailable".to_string());
            }
        }
    }

    fn drain_outcomes(&mut self, ctx: &egui::Context) {
        let outcomes: Vec<_> = match &self.runner {
            Some(runner) => std::iter::from_fn(|| runner.poll()).collect(),
            None => return,
        };

        for outcome in outcomes {
            self.dispatch(Message::FetchCompleted(outcome), ctx);
        }
    }
}

impl eframe::App for YieldCurveApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_outcomes(ctx);

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Yield Curve Analyser");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Save Config").clicked() {
                        self.state.status_message = match self.config.save() {
                            Ok(()) => format!("Saved {}", self.config.path().display()),
                            Err(e) => e.to_string(),
                        };
                    }
                    ui.weak(format!("Config: {}", self.config.path().display()));
                });
            });
        });

        let mut messages = Vec::new();

        // Left Panel - Date selection and fetch controls
        egui::SidePanel::left("left_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    messages = self.left_panel.show(ui, &self.state);
                });
            });

        // Right Panel - Per-date details
        egui::SidePanel::right("right_panel")
            .default_width(300.0)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.right_panel.show(ui, &self.state);
                });
            });

        // Central Panel - Chart
        egui::CentralPanel::default().show(ctx, |ui| {
            self.main_panel.show(ui, &self.state, &self.config.get().chart);
        });

        for message in messages {
            self.dispatch(message, ctx);
        }
    }
}
