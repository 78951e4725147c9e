//! Detail page for a single animal.

use crate::models::AnimalDetail;
use crate::view::{PLACEHOLDER_PHOTO, escape};

/// Initial server-rendered state, shown until the record loads.
pub fn render_loading() -> String {
    "<h1>Loading...</h1>".to_string()
}

/// Recovery message shown when a detail view fails to render.
pub fn render_recovery_message() -> String {
    concat!(
        "<h1>There was an error with this listing. ",
        r#"<a href="/">Click here</a> to go back to the home page "#,
        "or wait five seconds.</h1>"
    )
    .to_string()
}

/// Render a loaded record, with the adoption confirmation when showing.
pub fn render_detail(animal: &AnimalDetail, confirming: bool) -> String {
    let hero = animal
        .photos
        .first()
        .and_then(|p| p.hero())
        .unwrap_or(PLACEHOLDER_PHOTO);

    let mut html = format!(
        concat!(
            r#"<div class="details">"#,
            r#"<div class="image-container"><img src="{hero}" alt="{name}"></div>"#,
            "<div><h1>{name}</h1>",
            "<h2>{species} — {breed} — {location}</h2>",
            "<button>Adopt {name}</button>",
            "<p>{description}</p></div>"
        ),
        hero = escape(hero),
        name = escape(&animal.name),
        species = escape(animal.species.as_str()),
        breed = escape(&animal.breed_primary),
        location = escape(&animal.location()),
        description = escape(&animal.description),
    );

    if let Some(published_at) = animal.published_at {
        html.push_str(&format!(
            "<h3>Listed {}</h3>",
            published_at.format("%B %e, %Y")
        ));
    }

    if confirming {
        html.push_str(&format!(
            concat!(
                r#"<div class="modal"><h1>Would you like to adopt {name}?</h1>"#,
                r#"<div class="buttons"><button>Yes</button><button>No</button></div></div>"#
            ),
            name = escape(&animal.name),
        ));
    }

    html.push_str("</div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Species;

    fn charlie() -> AnimalDetail {
        AnimalDetail {
            id: 42,
            name: "Charlie".into(),
            species: Species::Dog,
            breed_primary: "Havanese".into(),
            photos: vec![],
            city: "Seattle".into(),
            state: "WA".into(),
            description: "A very good boy.".into(),
            adoption_url: "https://example.com/adopt/42".into(),
            published_at: None,
        }
    }

    #[test]
    fn test_loading_state() {
        assert_eq!(render_loading(), "<h1>Loading...</h1>");
    }

    #[test]
    fn test_detail_markup() {
        let html = render_detail(&charlie(), false);
        assert!(html.contains("<h1>Charlie</h1>"));
        assert!(html.contains("dog — Havanese — Seattle, WA"));
        assert!(html.contains("Adopt Charlie"));
        assert!(html.contains("A very good boy."));
        assert!(!html.contains("modal"));
    }

    #[test]
    fn test_confirmation_modal() {
        let html = render_detail(&charlie(), true);
        assert!(html.contains("Would you like to adopt Charlie?"));
        assert!(html.contains("<button>Yes</button>"));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut animal = charlie();
        animal.description = "<script>alert(1)</script>".into();
        let html = render_detail(&animal, false);
        assert!(!html.contains("<script>"));
    }
}
