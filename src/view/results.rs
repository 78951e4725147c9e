//! Search result cards.

use crate::models::AnimalSummary;
use crate::view::{PLACEHOLDER_PHOTO, escape};

/// Render the result list.
///
/// An empty list renders the distinct "No Pets Found" state, never a
/// bare empty container.
pub fn render_results(animals: &[AnimalSummary]) -> String {
    if animals.is_empty() {
        return r#"<div class="search"><h1>No Pets Found</h1></div>"#.to_string();
    }

    let mut html = String::from(r#"<div class="search">"#);
    for animal in animals {
        html.push_str(&render_card(animal));
    }
    html.push_str("</div>");
    html
}

fn render_card(animal: &AnimalSummary) -> String {
    let hero = animal
        .photos
        .first()
        .and_then(|p| p.hero())
        .unwrap_or(PLACEHOLDER_PHOTO);

    format!(
        concat!(
            r#"<a href="/details/{id}" class="pet">"#,
            r#"<div class="image-container"><img src="{hero}" alt="{name}"></div>"#,
            r#"<div class="info"><h1>{name}</h1><h2>{species} — {breed} — {location}</h2></div>"#,
            "</a>"
        ),
        id = animal.id,
        hero = escape(hero),
        name = escape(&animal.name),
        species = escape(animal.species.as_str()),
        breed = escape(&animal.breed_primary),
        location = escape(&animal.location()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Photo, Species};

    fn luna() -> AnimalSummary {
        AnimalSummary {
            id: 7,
            name: "Luna".into(),
            species: Species::Dog,
            breed_primary: "Havanese".into(),
            photos: vec![Photo {
                small: Some("luna-small.jpg".into()),
                ..Photo::default()
            }],
            city: "Seattle".into(),
            state: "WA".into(),
        }
    }

    #[test]
    fn test_empty_results_render_no_pets_found() {
        let html = render_results(&[]);
        assert!(html.contains("No Pets Found"));
        assert!(!html.contains("<a"));
    }

    #[test]
    fn test_card_links_to_details() {
        let html = render_results(&[luna()]);
        assert!(html.contains(r#"href="/details/7""#));
        assert!(html.contains("luna-small.jpg"));
        assert!(html.contains("dog — Havanese — Seattle, WA"));
    }

    #[test]
    fn test_card_falls_back_to_placeholder_photo() {
        let mut animal = luna();
        animal.photos.clear();
        let html = render_results(&[animal]);
        assert!(html.contains(PLACEHOLDER_PHOTO));
    }
}
