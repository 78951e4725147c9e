//! Stateful session components.
//!
//! This module contains the asynchronous resource-loading lifecycle:
//! - Search filters and results (`SearchState`)
//! - Per-animal detail loading (`DetailLoader`)
//! - Automatic fallback navigation on failure (`FailureRecovery`)
//!
//! All components run on the cooperative tokio event loop; spawned tasks
//! are the interleaved continuations of in-flight fetches. Teardown via
//! `stop()` aborts outstanding tasks and timers, and epoch/generation
//! counters discard completions that no longer match the current input.

mod detail;
mod recovery;
mod search;

pub use detail::{DetailLoader, LoadState, Phase, PhaseKind};
pub use recovery::FailureRecovery;
pub use search::SearchState;

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;

    use crate::catalog::CatalogClient;
    use crate::error::{AppError, Result};
    use crate::models::{AnimalDetail, AnimalSummary, SearchQuery, Species};

    /// Catalog stub with per-entry artificial latency, driven by tokio
    /// virtual time in `start_paused` tests.
    #[derive(Default)]
    pub struct StubCatalog {
        breeds: HashMap<Species, (Duration, Vec<String>)>,
        animals: Vec<AnimalSummary>,
        fail_search: AtomicBool,
        details: HashMap<u64, (Duration, AnimalDetail)>,
    }

    impl StubCatalog {
        pub fn with_breeds(mut self, species: Species, delay_ms: u64, names: &[&str]) -> Self {
            self.breeds.insert(
                species,
                (
                    Duration::from_millis(delay_ms),
                    names.iter().map(|n| n.to_string()).collect(),
                ),
            );
            self
        }

        pub fn with_animals(mut self, animals: Vec<AnimalSummary>) -> Self {
            self.animals = animals;
            self
        }

        pub fn with_detail(mut self, delay_ms: u64, detail: AnimalDetail) -> Self {
            self.details
                .insert(detail.id, (Duration::from_millis(delay_ms), detail));
            self
        }

        pub fn fail_searches(&self, fail: bool) {
            self.fail_search.store(fail, Ordering::SeqCst);
        }
    }

    #[async_trait]
    impl CatalogClient for StubCatalog {
        async fn list_breeds(&self, species: Species) -> Result<Vec<String>> {
            match self.breeds.get(&species) {
                Some((delay, names)) => {
                    tokio::time::sleep(*delay).await;
                    Ok(names.clone())
                }
                None => Ok(Vec::new()),
            }
        }

        async fn list_animals(&self, _query: &SearchQuery) -> Result<Vec<AnimalSummary>> {
            if self.fail_search.load(Ordering::SeqCst) {
                return Err(AppError::validation("search unavailable"));
            }
            Ok(self.animals.clone())
        }

        async fn get_animal(&self, id: u64) -> Result<AnimalDetail> {
            match self.details.get(&id) {
                Some((delay, detail)) => {
                    tokio::time::sleep(*delay).await;
                    Ok(detail.clone())
                }
                None => Err(AppError::not_found(format!("animal {id}"))),
            }
        }
    }

    pub fn summary(id: u64, name: &str) -> AnimalSummary {
        AnimalSummary {
            id,
            name: name.to_string(),
            species: Species::Dog,
            breed_primary: "Havanese".into(),
            photos: vec![],
            city: "Seattle".into(),
            state: "WA".into(),
        }
    }

    pub fn detail(id: u64, name: &str) -> AnimalDetail {
        AnimalDetail {
            id,
            name: name.to_string(),
            species: Species::Dog,
            breed_primary: "Havanese".into(),
            photos: vec![],
            city: "Seattle".into(),
            state: "WA".into(),
            description: "A very good boy.".into(),
            adoption_url: format!("https://example.com/adopt/{id}"),
            published_at: None,
        }
    }

    /// Let spawned tasks run to their next await point.
    pub async fn settle() {
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }
}
