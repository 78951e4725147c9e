//! Search page: heading, filter form, and results.

use crate::models::{SearchQuery, Species};
use crate::view::{escape, results};

/// Render the search form for the current filters and breed options.
///
/// The breed dropdown is disabled while its option list is empty, i.e.
/// before a species is picked or while its breed list is in flight.
pub fn render_form(query: &SearchQuery, breeds: &[String]) -> String {
    let mut html = String::from(r#"<form class="search-params">"#);

    html.push_str(&format!(
        concat!(
            r#"<label for="location">Location"#,
            r#"<input id="location" name="location" placeholder="Location" value="{location}">"#,
            "</label>"
        ),
        location = escape(&query.location),
    ));

    html.push_str(&render_dropdown(
        "species",
        query.species.as_str(),
        Species::ALL.iter().map(Species::as_str),
    ));
    html.push_str(&render_dropdown(
        "breed",
        &query.breed,
        breeds.iter().map(String::as_str),
    ));

    html.push_str("<button>Submit</button></form>");
    html
}

/// Full search page markup: app heading, form, and result cards.
pub fn render_page(
    query: &SearchQuery,
    breeds: &[String],
    animals: &[crate::models::AnimalSummary],
) -> String {
    format!(
        "<div><h1>Adopt Me!</h1>{}{}</div>",
        render_form(query, breeds),
        results::render_results(animals),
    )
}

fn render_dropdown<'a>(
    label: &str,
    selected: &str,
    options: impl Iterator<Item = &'a str>,
) -> String {
    let mut html = format!(r#"<label for="{label}">{label}"#);
    let mut count = 0;
    let mut options_html = String::from("<option></option>");
    for option in options {
        count += 1;
        let marker = if option == selected { " selected" } else { "" };
        options_html.push_str(&format!(
            r#"<option value="{0}"{marker}>{0}</option>"#,
            escape(option)
        ));
    }
    let disabled = if count == 0 { " disabled" } else { "" };
    html.push_str(&format!(
        r#"<select id="{label}" name="{label}"{disabled}>{options_html}</select></label>"#
    ));
    html
}
