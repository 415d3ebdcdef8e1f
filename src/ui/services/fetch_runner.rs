use crate::config::ApiConfig;
use crate::data::TreasuryClient;
use crate::error::Result;
use crate::ui::state::{DateOutcome, FetchOutcome, FetchRequest, FetchTarget};
use chrono::NaiveDate;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use tokio::runtime::{Builder, Runtime};

/// Runs fetch cycles on a background runtime and hands outcomes back to the
/// UI thread through a channel.
pub struct FetchRunner {
    runtime: Runtime,
    client: Arc<TreasuryClient>,
    outcome_tx: Sender<FetchOutcome>,
    outcome_rx: Receiver<FetchOutcome>,
}

impl FetchRunner {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("yield-fetch")
            .enable_all()
            .build()?;
        let client = Arc::new(TreasuryClient::new(config)?);
        let (outcome_tx, outcome_rx) = channel();

        Ok(Self {
            runtime,
            client,
            outcome_tx,
            outcome_rx,
        })
    }

    /// Start a cycle in the background. `repaint` is poked once the outcome
    /// has been queued so the UI wakes up to collect it.
    pub fn start(&self, request: FetchRequest, repaint: Option<egui::Context>) {
        let client = Arc::clone(&self.client);
        let outcome_tx = self.outcome_tx.clone();

        self.runtime.spawn(async move {
            let outcome = Self::execute(&client, request).await;
            if outcome_tx.send(outcome).is_err() {
                log::debug!("UI gone, dropping outcome for generation {}", request.generation);
                return;
            }
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        });
    }

    /// Poll for a finished cycle (non-blocking)
    pub fn poll(&self) -> Option<FetchOutcome> {
        self.outcome_rx.try_recv().ok()
    }

    /// Fetch every date in `request`. Compare mode runs both fetches
    /// concurrently and waits for both.
    pub async fn execute(client: &TreasuryClient, request: FetchRequest) -> FetchOutcome {
        let results = match request.target {
            FetchTarget::Single(date) => vec![Self::fetch_date(client, date).await],
            FetchTarget::Compare(first, second) => {
                let (a, b) = tokio::join!(
                    Self::fetch_date(client, first),
                    Self::fetch_date(client, second)
                );
                vec![a, b]
            }
        };

        FetchOutcome {
            generation: request.generation,
            results,
        }
    }

    async fn fetch_date(client: &TreasuryClient, requested: NaiveDate) -> DateOutcome {
        DateOutcome {
            requested,
            result: client.fetch_curve(requested).await,
        }
    }
}
