//! Search state: filter inputs, breed options, and the result list.

use std::sync::{Arc, Mutex, MutexGuard};

use tokio::task::JoinSet;

use crate::catalog::CatalogClient;
use crate::error::Result;
use crate::models::{AnimalSummary, SearchQuery, Species};

/// Holds the current search filters, the breed list derived from the
/// selected species, and the last fetched result list.
///
/// Changing species clears the breed selection and list synchronously,
/// then repopulates the list asynchronously. Each change bumps an epoch
/// counter captured by the in-flight fetch; a completion whose epoch no
/// longer matches is discarded, so a late response for a species that is
/// no longer selected can never overwrite a newer selection.
pub struct SearchState {
    client: Arc<dyn CatalogClient>,
    inner: Arc<Mutex<SearchInner>>,
    fetches: JoinSet<()>,
}

#[derive(Default)]
struct SearchInner {
    query: SearchQuery,
    breeds: Vec<String>,
    breed_epoch: u64,
    /// `None` until the first search; `Some(vec![])` is the distinct
    /// "no results" state.
    results: Option<Vec<AnimalSummary>>,
}

impl SearchState {
    pub fn new(client: Arc<dyn CatalogClient>) -> Self {
        Self {
            client,
            inner: Arc::new(Mutex::new(SearchInner::default())),
            fetches: JoinSet::new(),
        }
    }

    /// Set the free-text location filter.
    pub fn set_location(&mut self, text: impl Into<String>) {
        self.lock().query.location = text.into();
    }

    /// Select a species.
    ///
    /// Clears the breed selection and breed list, then requests the new
    /// species' breed list from the catalog. `Any` has no breed list, so
    /// no request is issued.
    pub fn set_species(&mut self, species: Species) {
        let epoch = {
            let mut inner = self.lock();
            if inner.query.species == species {
                return;
            }
            inner.query.species = species;
            inner.query.breed.clear();
            inner.breeds.clear();
            inner.breed_epoch += 1;
            inner.breed_epoch
        };

        if species == Species::Any {
            return;
        }

        let client = Arc::clone(&self.client);
        let shared = Arc::clone(&self.inner);
        self.fetches.spawn(async move {
            match client.list_breeds(species).await {
                Ok(breeds) => {
                    let mut inner = shared.lock().expect("search state lock poisoned");
                    if inner.breed_epoch == epoch {
                        inner.breeds = breeds;
                    } else {
                        log::debug!("discarding stale breed list for {species}");
                    }
                }
                // Leave the list empty; the dropdown renders disabled.
                Err(e) => log::warn!("breed list fetch failed for {species}: {e}"),
            }
        });
    }

    /// Select a breed. Returns whether the selection was accepted.
    ///
    /// A breed outside the current species' breed list violates the
    /// query invariant and clears the selection instead.
    pub fn set_breed(&mut self, breed: &str) -> bool {
        let mut inner = self.lock();
        if breed.is_empty() || inner.breeds.iter().any(|b| b == breed) {
            inner.query.breed = breed.to_string();
            true
        } else {
            log::debug!("ignoring breed '{breed}' not in the current breed list");
            inner.query.breed.clear();
            false
        }
    }

    /// Run a search with the current filters.
    ///
    /// On success the result list is replaced wholesale; on failure the
    /// previous list is left untouched and the error is returned.
    pub async fn submit(&mut self) -> Result<()> {
        let query = self.lock().query.clone();
        let animals = self.client.list_animals(&query).await?;
        log::info!("search returned {} animals", animals.len());
        self.lock().results = Some(animals);
        Ok(())
    }

    /// Current filters.
    pub fn query(&self) -> SearchQuery {
        self.lock().query.clone()
    }

    /// Breed options for the selected species.
    pub fn breeds(&self) -> Vec<String> {
        self.lock().breeds.clone()
    }

    /// Last fetched result list; `None` before the first search.
    pub fn results(&self) -> Option<Vec<AnimalSummary>> {
        self.lock().results.clone()
    }

    /// Wait for in-flight breed fetches to finish.
    pub async fn await_pending(&mut self) {
        while self.fetches.join_next().await.is_some() {}
    }

    /// Tear down, canceling in-flight breed fetches.
    pub fn stop(&mut self) {
        self.fetches.abort_all();
    }

    fn lock(&self) -> MutexGuard<'_, SearchInner> {
        self.inner.lock().expect("search state lock poisoned")
    }
}

impl Drop for SearchState {
    fn drop(&mut self) {
        self.stop();
    }
}
