//! HTTP catalog client.
//!
//! Fetches breed lists, search results, and single-animal records from
//! the pet-listing API. Wire-format structs are kept separate from the
//! domain models; conversion is where malformed payloads are rejected.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use url::Url;

use crate::catalog::CatalogClient;
use crate::error::{AppError, Result};
use crate::models::{AnimalDetail, AnimalSummary, CatalogConfig, Photo, SearchQuery, Species};

/// Catalog client backed by the remote HTTP API.
pub struct HttpCatalogClient {
    client: Client,
    base: Url,
}

impl HttpCatalogClient {
    /// Create a configured client.
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        let base = Url::parse(&config.api_url)?;
        Ok(Self { client, base })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        let joined = format!("{}/{}", self.base.as_str().trim_end_matches('/'), path);
        Ok(Url::parse(&joined)?)
    }

    async fn fetch<T: for<'de> Deserialize<'de>>(
        &self,
        url: Url,
        params: &[(&str, String)],
        not_found: &str,
    ) -> Result<T> {
        let response = self.client.get(url).query(params).send().await?;
        let response = Self::check_status(response, not_found)?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    fn check_status(response: Response, not_found: &str) -> Result<Response> {
        if response.status() == StatusCode::NOT_FOUND {
            return Err(AppError::not_found(not_found));
        }
        Ok(response.error_for_status()?)
    }
}

#[async_trait]
impl CatalogClient for HttpCatalogClient {
    async fn list_breeds(&self, species: Species) -> Result<Vec<String>> {
        let url = self.endpoint("breeds")?;
        let params = [("species", species.as_str().to_string())];
        let payload: BreedsResponse = self.fetch(url, &params, "breed list").await?;
        Ok(payload.breeds.into_iter().map(|b| b.name).collect())
    }

    async fn list_animals(&self, query: &SearchQuery) -> Result<Vec<AnimalSummary>> {
        let url = self.endpoint("animals")?;
        let payload: AnimalsResponse = self.fetch(url, &query.params(), "animal search").await?;
        payload
            .animals
            .into_iter()
            .map(AnimalRecord::into_summary)
            .collect()
    }

    async fn get_animal(&self, id: u64) -> Result<AnimalDetail> {
        let url = self.endpoint(&format!("animals/{id}"))?;
        let payload: AnimalResponse = self.fetch(url, &[], &format!("animal {id}")).await?;
        payload.animal.into_detail()
    }
}

// --- Wire format ---

#[derive(Debug, Deserialize)]
struct BreedsResponse {
    breeds: Vec<BreedRecord>,
}

#[derive(Debug, Deserialize)]
struct BreedRecord {
    name: String,
}

#[derive(Debug, Deserialize)]
struct AnimalsResponse {
    animals: Vec<AnimalRecord>,
}

#[derive(Debug, Deserialize)]
struct AnimalResponse {
    animal: AnimalRecord,
}

#[derive(Debug, Deserialize)]
struct AnimalRecord {
    id: u64,
    name: String,
    #[serde(rename = "type")]
    species: String,
    breeds: BreedFields,
    #[serde(default)]
    photos: Vec<Photo>,
    contact: Option<ContactRecord>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct BreedFields {
    primary: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ContactRecord {
    address: Option<AddressRecord>,
}

#[derive(Debug, Deserialize)]
struct AddressRecord {
    city: Option<String>,
    state: Option<String>,
}

impl AnimalRecord {
    /// Validate required fields and convert to a summary.
    fn into_summary(self) -> Result<AnimalSummary> {
        let (summary, _, _, _) = self.into_parts()?;
        Ok(summary)
    }

    /// Validate required fields and convert to a full detail record.
    fn into_detail(self) -> Result<AnimalDetail> {
        let (summary, description, url, published_at) = self.into_parts()?;
        let adoption_url = url.ok_or_else(|| AppError::malformed("animal.url"))?;
        Ok(AnimalDetail {
            id: summary.id,
            name: summary.name,
            species: summary.species,
            breed_primary: summary.breed_primary,
            photos: summary.photos,
            city: summary.city,
            state: summary.state,
            description: description.unwrap_or_default(),
            adoption_url,
            published_at,
        })
    }

    fn into_parts(
        self,
    ) -> Result<(
        AnimalSummary,
        Option<String>,
        Option<String>,
        Option<DateTime<Utc>>,
    )> {
        let species: Species = self
            .species
            .parse()
            .map_err(|_| AppError::malformed("animal.type"))?;
        let breed_primary = self
            .breeds
            .primary
            .ok_or_else(|| AppError::malformed("animal.breeds.primary"))?;
        let address = self
            .contact
            .and_then(|c| c.address)
            .ok_or_else(|| AppError::malformed("animal.contact.address"))?;
        let city = address
            .city
            .ok_or_else(|| AppError::malformed("animal.contact.address.city"))?;
        let state = address
            .state
            .ok_or_else(|| AppError::malformed("animal.contact.address.state"))?;

        let summary = AnimalSummary {
            id: self.id,
            name: self.name,
            species,
            breed_primary,
            photos: self.photos,
            city,
            state,
        };
        Ok((summary, self.description, self.url, self.published_at))
    }
}
