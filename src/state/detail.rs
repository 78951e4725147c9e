//! Per-animal detail loading.

use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::catalog::CatalogClient;
use crate::error::AppError;
use crate::models::AnimalDetail;
use crate::navigation::Navigator;

/// Loading lifecycle for one animal record.
///
/// Exactly one variant is active per loader; `Loaded` and `Failed` are
/// terminal for a given id.
#[derive(Debug)]
pub enum LoadState {
    Loading,
    Loaded(AnimalDetail),
    Failed(Arc<AppError>),
}

/// Variant of [`LoadState`] currently active, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseKind {
    /// No load issued yet
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// One published lifecycle transition.
///
/// The generation ties a transition to the `load` call that caused it;
/// observers use it to tell a restarted load from a stale one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phase {
    pub generation: u64,
    pub kind: PhaseKind,
}

/// Loads a single animal's full record by id.
///
/// `load` may be re-entered with a new id, which resets the state to
/// `Loading` under a new generation; the previous fetch is aborted and
/// its completion, if any, is discarded by the generation guard. The
/// same guard makes teardown safe while a fetch is in flight.
pub struct DetailLoader {
    client: Arc<dyn CatalogClient>,
    navigator: Arc<dyn Navigator>,
    inner: Arc<Mutex<DetailInner>>,
    phase_tx: watch::Sender<Phase>,
    task: Option<JoinHandle<()>>,
}

struct DetailInner {
    generation: u64,
    state: LoadState,
    confirming: bool,
}

impl DetailLoader {
    pub fn new(client: Arc<dyn CatalogClient>, navigator: Arc<dyn Navigator>) -> Self {
        let (phase_tx, _) = watch::channel(Phase {
            generation: 0,
            kind: PhaseKind::Idle,
        });
        Self {
            client,
            navigator,
            inner: Arc::new(Mutex::new(DetailInner {
                generation: 0,
                state: LoadState::Loading,
                confirming: false,
            })),
            phase_tx,
            task: None,
        }
    }

    /// Initiate a fetch of the full record for `id`.
    pub fn load(&mut self, id: u64) {
        let generation = {
            let mut inner = self.lock();
            inner.generation += 1;
            inner.state = LoadState::Loading;
            inner.confirming = false;
            inner.generation
        };
        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.phase_tx.send_replace(Phase {
            generation,
            kind: PhaseKind::Loading,
        });

        let client = Arc::clone(&self.client);
        let shared = Arc::clone(&self.inner);
        let phase_tx = self.phase_tx.clone();
        self.task = Some(tokio::spawn(async move {
            let result = client.get_animal(id).await;
            let kind = {
                let mut inner = shared.lock().expect("detail state lock poisoned");
                if inner.generation != generation {
                    // superseded by a newer load
                    return;
                }
                match result {
                    Ok(detail) => {
                        inner.state = LoadState::Loaded(detail);
                        PhaseKind::Loaded
                    }
                    Err(e) => {
                        log::warn!("detail load failed for animal {id}: {e}");
                        inner.state = LoadState::Failed(Arc::new(e));
                        PhaseKind::Failed
                    }
                }
            };
            phase_tx.send_replace(Phase { generation, kind });
        }));
    }

    /// Ask for adoption confirmation.
    pub fn request_adopt(&self) {
        self.lock().confirming = true;
    }

    /// Dismiss the confirmation.
    pub fn cancel_adopt(&self) {
        self.lock().confirming = false;
    }

    /// Confirm adoption: navigate to the animal's adoption page.
    ///
    /// A no-op unless the record is loaded.
    pub fn confirm_adopt(&self) {
        let url = {
            let mut inner = self.lock();
            let url = match &inner.state {
                LoadState::Loaded(detail) => detail.adoption_url.clone(),
                _ => return,
            };
            inner.confirming = false;
            url
        };
        self.navigator.navigate(&url);
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        *self.phase_tx.borrow()
    }

    /// Subscribe to lifecycle transitions.
    pub fn subscribe(&self) -> watch::Receiver<Phase> {
        self.phase_tx.subscribe()
    }

    /// Loaded record, if any.
    pub fn detail(&self) -> Option<AnimalDetail> {
        match &self.lock().state {
            LoadState::Loaded(detail) => Some(detail.clone()),
            _ => None,
        }
    }

    /// Error the load failed with, if any.
    pub fn error(&self) -> Option<Arc<AppError>> {
        match &self.lock().state {
            LoadState::Failed(e) => Some(Arc::clone(e)),
            _ => None,
        }
    }

    /// Whether the adoption confirmation is showing.
    pub fn is_confirming(&self) -> bool {
        self.lock().confirming
    }

    /// Tear down, canceling an in-flight fetch.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    /// Wait for the in-flight fetch to finish.
    #[cfg(test)]
    pub(crate) async fn await_settled(&mut self) {
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }

    fn lock(&self) -> MutexGuard<'_, DetailInner> {
        self.inner.lock().expect("detail state lock poisoned")
    }
}

impl Drop for DetailLoader {
    fn drop(&mut self) {
        self.stop();
    }
}
