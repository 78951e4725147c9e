//! Search query model.

use crate::models::Species;

/// Current search filter inputs.
///
/// The breed invariant (breed must belong to the selected species' breed
/// list) is enforced by `SearchState`, which owns the breed list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchQuery {
    /// Free-text location, e.g. "Seattle, WA"
    pub location: String,

    /// Selected species; `Any` searches all kinds
    pub species: Species,

    /// Selected breed; empty string searches all breeds
    pub breed: String,
}

impl SearchQuery {
    /// Query-string pairs for the catalog search endpoint.
    ///
    /// Empty filters are omitted rather than sent as empty parameters.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if !self.location.is_empty() {
            params.push(("location", self.location.clone()));
        }
        if self.species != Species::Any {
            params.push(("species", self.species.as_str().to_string()));
        }
        if !self.breed.is_empty() {
            params.push(("breed", self.breed.clone()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_skip_empty_filters() {
        let query = SearchQuery::default();
        assert!(query.params().is_empty());

        let query = SearchQuery {
            location: "Seattle, WA".into(),
            species: Species::Dog,
            breed: String::new(),
        };
        assert_eq!(
            query.params(),
            vec![
                ("location", "Seattle, WA".to_string()),
                ("species", "dog".to_string()),
            ]
        );
    }
}
