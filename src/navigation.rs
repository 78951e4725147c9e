// src/navigation.rs

//! Navigation collaborator.
//!
//! Route changes are fire-and-forget side effects; components hold the
//! navigator behind a trait object so tests can record calls instead.

/// Performs a client-side route change.
pub trait Navigator: Send + Sync {
    fn navigate(&self, url: &str);
}

/// Navigator for headless use: logs the transition and nothing else.
pub struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn navigate(&self, url: &str) {
        log::info!("navigating to {url}");
    }
}
