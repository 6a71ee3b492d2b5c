use crate::client::StatusClient;
use crate::errors::LoadError;
use crate::models::StatusResponse;
use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};
use tokio::{sync::Mutex, task::AbortHandle};
use tracing::{debug, info, warn};

/// Content of the results container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ResultsState {
    #[default]
    Loading,
    Loaded(StatusResponse),
    Failed(String),
}

impl ResultsState {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Loaded(_) => "loaded",
            Self::Failed(_) => "error",
        }
    }
}

/// Fetches status data into the shared results container. Every load gets a
/// generation token; only the most recently issued one may commit.
#[derive(Clone)]
pub struct Loader {
    client: StatusClient,
    results: Arc<Mutex<ResultsState>>,
    generation: Arc<AtomicU64>,
    in_flight: Arc<Mutex<Option<AbortHandle>>>,
}

impl Loader {
    pub fn new(client: StatusClient) -> Self {
        Self {
            client,
            results: Arc::new(Mutex::new(ResultsState::default())),
            generation: Arc::new(AtomicU64::new(0)),
            in_flight: Arc::new(Mutex::new(None)),
        }
    }

    pub async fn snapshot(&self) -> ResultsState {
        self.results.lock().await.clone()
    }

    pub async fn begin(&self) -> u64 {
        let mut results = self.results.lock().await;
        let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        *results = ResultsState::Loading;
        token
    }

    /// Stores the outcome of load `token`. Returns false when a newer load
    /// has been issued since, in which case the outcome is dropped.
    pub async fn commit(&self, token: u64, outcome: Result<StatusResponse, LoadError>) -> bool {
        let mut results = self.results.lock().await;
        let latest = self.generation.load(Ordering::SeqCst);
        if token != latest {
            debug!(token, latest, "discarding stale status response");
            return false;
        }

        *results = match outcome {
            Ok(status) => {
                info!(
                    token,
                    stores = status.stores.len(),
                    cached = status.cached,
                    "status loaded"
                );
                ResultsState::Loaded(status)
            }
            Err(err) => {
                warn!(token, "status load failed: {err}");
                ResultsState::Failed(err.to_string())
            }
        };
        true
    }

    pub async fn reload(&self, user: &str) -> ResultsState {
        let token = self.begin().await;
        info!(token, user, "loading status");
        let outcome = self.client.fetch(user).await;
        self.commit(token, outcome).await;
        self.snapshot().await
    }

    /// Starts a load on a background task, aborting any previous one still
    /// in flight. The container shows `Loading` by the time this returns.
    pub async fn spawn(&self, user: String) {
        let mut in_flight = self.in_flight.lock().await;
        if let Some(previous) = in_flight.take() {
            if !previous.is_finished() {
                debug!("aborting in-flight status load");
            }
            previous.abort();
        }

        let token = self.begin().await;
        info!(token, user = %user, "loading status in background");
        let loader = self.clone();
        let handle = tokio::spawn(async move {
            let outcome = loader.client.fetch(&user).await;
            loader.commit(token, outcome).await;
        });
        *in_flight = Some(handle.abort_handle());
    }
}
