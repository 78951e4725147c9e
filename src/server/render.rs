//! Route-to-markup rendering for the shim.
//!
//! The server renders the same initial state the client would: the
//! search page with no results yet, or a detail page still loading.
//! Client-side code takes over from there.

use crate::models::SearchQuery;
use crate::view::{detail, search};

/// Routes the shim can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Search,
    Details(u64),
}

impl Route {
    /// Parse a request path. Unrecognized paths fall back to the search
    /// page, which is also where the client router sends them.
    pub fn parse(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or(path);
        let mut segments = path.split('/').filter(|s| !s.is_empty());
        match (segments.next(), segments.next(), segments.next()) {
            (Some("details"), Some(id), None) => match id.parse() {
                Ok(id) => Route::Details(id),
                Err(_) => Route::Search,
            },
            _ => Route::Search,
        }
    }
}

/// Render the markup for a request path in one piece.
pub fn render_route(path: &str) -> String {
    render_chunks(path).concat()
}

/// Render the markup for a request path as streamable chunks.
pub fn render_chunks(path: &str) -> Vec<String> {
    match Route::parse(path) {
        Route::Search => vec![
            search::render_page(&SearchQuery::default(), &[], &[]),
        ],
        Route::Details(_) => vec![
            "<div><h1>Adopt Me!</h1>".to_string(),
            detail::render_loading(),
            "</div>".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(Route::parse("/"), Route::Search);
        assert_eq!(Route::parse("/details/42"), Route::Details(42));
        assert_eq!(Route::parse("/details/42?utm=x"), Route::Details(42));
        assert_eq!(Route::parse("/details/nope"), Route::Search);
        assert_eq!(Route::parse("/details/1/extra"), Route::Search);
        assert_eq!(Route::parse("/anything/else"), Route::Search);
    }

    #[test]
    fn test_search_markup_has_initial_state() {
        let html = render_route("/");
        assert!(html.contains("<h1>Adopt Me!</h1>"));
        assert!(html.contains("No Pets Found"));
    }

    #[test]
    fn test_detail_markup_is_loading_shell() {
        let html = render_route("/details/42");
        assert!(html.contains("<h1>Loading...</h1>"));
    }

    #[test]
    fn test_chunked_render_matches_full_render() {
        for path in ["/", "/details/42"] {
            assert_eq!(render_chunks(path).concat(), render_route(path));
        }
    }
}
