//! Automatic fallback navigation for failed detail loads.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::models::RecoveryConfig;
use crate::navigation::Navigator;
use crate::state::detail::{DetailLoader, Phase, PhaseKind};

/// Watches a [`DetailLoader`] and, once it enters `Failed`, navigates to
/// the fallback route after a fixed countdown.
///
/// At most one countdown runs per instance. A new load entering `Failed`
/// restarts the countdown; leaving `Failed` before expiry cancels it, as
/// does `stop()`.
pub struct FailureRecovery {
    task: Option<JoinHandle<()>>,
}

impl FailureRecovery {
    /// Start watching `loader`'s lifecycle transitions.
    pub fn attach(
        loader: &DetailLoader,
        navigator: Arc<dyn Navigator>,
        config: &RecoveryConfig,
    ) -> Self {
        let mut phases = loader.subscribe();
        let delay = config.delay();
        let target = config.redirect_target.clone();

        let task = tokio::spawn(async move {
            loop {
                let phase: Phase = *phases.borrow_and_update();
                if phase.kind != PhaseKind::Failed {
                    if phases.changed().await.is_err() {
                        break;
                    }
                    continue;
                }

                tokio::select! {
                    _ = tokio::time::sleep(delay) => {
                        // Unchanged means the same load is still failed.
                        let current = *phases.borrow();
                        if current == phase {
                            log::info!(
                                "detail load {} still failed after {delay:?}, redirecting to {target}",
                                phase.generation
                            );
                            navigator.navigate(&target);
                        }
                        if phases.changed().await.is_err() {
                            break;
                        }
                    }
                    changed = phases.changed() => {
                        if changed.is_err() {
                            break;
                        }
                    }
                }
            }
        });

        Self { task: Some(task) }
    }

    /// Tear down, canceling a running countdown.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for FailureRecovery {
    fn drop(&mut self) {
        self.stop();
    }
}
