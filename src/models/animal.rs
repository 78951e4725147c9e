//! Animal data structures.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Kind of animal a search can be scoped to.
///
/// `Any` is the unscoped state and renders as the empty dropdown option.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Species {
    Dog,
    Cat,
    Bird,
    #[default]
    Any,
}

impl Species {
    /// The selectable kinds, in dropdown order.
    pub const ALL: [Species; 3] = [Species::Dog, Species::Cat, Species::Bird];

    /// Wire representation; `Any` is the empty string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Dog => "dog",
            Species::Cat => "cat",
            Species::Bird => "bird",
            Species::Any => "",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Species {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dog" => Ok(Species::Dog),
            "cat" => Ok(Species::Cat),
            "bird" => Ok(Species::Bird),
            "" | "any" => Ok(Species::Any),
            other => Err(AppError::validation(format!("unknown species '{other}'"))),
        }
    }
}

/// One photo of an animal in the sizes the catalog provides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub medium: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
    #[serde(default)]
    pub full: Option<String>,
}

impl Photo {
    /// Smallest available rendition, for card and hero display.
    pub fn hero(&self) -> Option<&str> {
        self.small
            .as_deref()
            .or(self.medium.as_deref())
            .or(self.large.as_deref())
            .or(self.full.as_deref())
    }
}

/// A single search result, as shown on a summary card.
///
/// Immutable once received; the result list is replaced wholesale on each
/// new search.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimalSummary {
    pub id: u64,
    pub name: String,
    pub species: Species,
    pub breed_primary: String,
    pub photos: Vec<Photo>,
    pub city: String,
    pub state: String,
}

impl AnimalSummary {
    /// Display location, e.g. "Seattle, WA".
    pub fn location(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }
}

/// Full record for one animal, owned by a single detail view.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimalDetail {
    pub id: u64,
    pub name: String,
    pub species: Species,
    pub breed_primary: String,
    pub photos: Vec<Photo>,
    pub city: String,
    pub state: String,
    pub description: String,
    pub adoption_url: String,
    pub published_at: Option<DateTime<Utc>>,
}

impl AnimalDetail {
    /// Display location, e.g. "Seattle, WA".
    pub fn location(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }
}
