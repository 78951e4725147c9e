//! Render error boundary.
//!
//! One detail view failing to render must not take down its siblings or
//! the process: the boundary contains the panic, shows a recovery
//! message, and schedules the same navigate-home fallback as
//! `FailureRecovery`.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::models::RecoveryConfig;
use crate::navigation::Navigator;
use crate::view::detail;

/// Contains panics raised while rendering a view.
pub struct RenderBoundary {
    navigator: Arc<dyn Navigator>,
    config: RecoveryConfig,
    redirect: Option<JoinHandle<()>>,
}

impl RenderBoundary {
    pub fn new(navigator: Arc<dyn Navigator>, config: &RecoveryConfig) -> Self {
        Self {
            navigator,
            config: config.clone(),
            redirect: None,
        }
    }

    /// Run `render`, substituting the recovery message if it panics.
    ///
    /// A panic also schedules the delayed navigate-home side effect; a
    /// subsequent panic restarts that countdown rather than stacking a
    /// second one. Must be called within a tokio runtime.
    pub fn render<F>(&mut self, render: F) -> String
    where
        F: FnOnce() -> String,
    {
        match panic::catch_unwind(AssertUnwindSafe(render)) {
            Ok(html) => html,
            Err(payload) => {
                log::error!(
                    "render boundary caught a panic: {}",
                    panic_message(&payload)
                );
                self.schedule_redirect();
                detail::render_recovery_message()
            }
        }
    }

    /// Tear down, canceling a scheduled redirect.
    pub fn stop(&mut self) {
        if let Some(task) = self.redirect.take() {
            task.abort();
        }
    }

    fn schedule_redirect(&mut self) {
        if let Some(task) = self.redirect.take() {
            task.abort();
        }
        let navigator = Arc::clone(&self.navigator);
        let delay = self.config.delay();
        let target = self.config.redirect_target.clone();
        self.redirect = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            navigator.navigate(&target);
        }));
    }
}

impl Drop for RenderBoundary {
    fn drop(&mut self) {
        self.stop();
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "non-string panic payload"
    }
}
