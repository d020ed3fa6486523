//! Filtering catalog events by text, genre and date.

use chrono::NaiveDate;

use crate::catalog::{Catalog, CatalogEvent};

#[derive(Debug, Clone, Default)]
pub struct EventQuery {
    /// Matched against name, venue and city, ignoring case.
    pub text: Option<String>,
    /// Matched exactly, ignoring case.
    pub genre: Option<String>,
    pub date: Option<NaiveDate>,
}

impl EventQuery {
    pub fn matches(&self, event: &CatalogEvent) -> bool {
        self.matches_text(event) && self.matches_genre(event) && self.matches_date(event)
    }

    fn matches_text(&self, event: &CatalogEvent) -> bool {
        let Some(text) = self.text.as_deref().filter(|t| !t.is_empty()) else {
            return true;
        };
        let needle = text.to_lowercase();

        [&event.name, &event.venue, &event.city]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    fn matches_genre(&self, event: &CatalogEvent) -> bool {
        self.genre
            .as_deref()
            .is_none_or(|genre| genre.to_lowercase() == event.genre.to_lowercase())
    }

    fn matches_date(&self, event: &CatalogEvent) -> bool {
        self.date.is_none_or(|date| date == event.date)
    }
}

impl Catalog {
    /// Events matching `query`, in catalog order.
    pub fn search(&self, query: &EventQuery) -> Vec<&CatalogEvent> {
        self.events().iter().filter(|e| query.matches(e)).collect()
    }

    /// Distinct genres in catalog order.
    pub fn genres(&self) -> Vec<&str> {
        let mut genres: Vec<&str> = Vec::new();
        for event in self.events() {
            if !genres.contains(&event.genre.as_str()) {
                genres.push(&event.genre);
            }
        }
        genres
    }
}
