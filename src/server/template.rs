//! HTML template handling.
//!
//! The template is the bundler's `index.html`: a full document with a
//! single placeholder marker where server-rendered markup is spliced in.
//! Marker problems are fatal at startup, before any page is served.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{AppError, Result};

/// A parsed template, split at the placeholder marker.
#[derive(Debug)]
pub struct Template {
    prefix: String,
    suffix: String,
}

impl Template {
    /// Load and parse a template file.
    pub fn load(path: impl AsRef<Path>, marker: &str) -> Result<Self> {
        let html = fs::read_to_string(path)?;
        Self::parse(&html, marker)
    }

    /// Parse template text containing `marker` exactly once.
    pub fn parse(html: &str, marker: &str) -> Result<Self> {
        let html = rewrite_asset_paths(html);
        let occurrences = html.matches(marker).count();
        match html.split_once(marker) {
            Some((prefix, suffix)) if occurrences == 1 => Ok(Self {
                prefix: prefix.to_string(),
                suffix: suffix.to_string(),
            }),
            _ => Err(AppError::template(occurrences)),
        }
    }

    /// Document part before the marker.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Document part after the marker.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Synchronous strategy: splice markup into the full document.
    pub fn render(&self, markup: &str) -> String {
        format!("{}{}{}", self.prefix, markup, self.suffix)
    }

    /// Streaming strategy: the response parts in send order.
    ///
    /// Concatenated, the parts are byte-identical to [`Template::render`]
    /// of the same chunks.
    pub fn render_parts(&self, chunks: Vec<String>) -> Vec<String> {
        let mut parts = Vec::with_capacity(chunks.len() + 2);
        parts.push(self.prefix.clone());
        parts.extend(chunks);
        parts.push(self.suffix.clone());
        parts
    }
}

/// Rewrite bundled asset references to be root-absolute.
///
/// A request to `/details/42` would otherwise resolve `"dist/app.js`
/// against the route path and get the shim's HTML back instead of the
/// script.
pub fn rewrite_asset_paths(html: &str) -> String {
    static ASSET_REF: OnceLock<Regex> = OnceLock::new();
    let re = ASSET_REF.get_or_init(|| Regex::new(r#""dist/"#).expect("asset pattern is valid"));
    re.replace_all(html, r#""/dist/"#).into_owned()
}
