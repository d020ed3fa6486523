//! Static event catalog: events, seating, prices and sample social data.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{DownToGoError, DownToGoResult};
use crate::event_id::EventId;
use crate::pricing::{PriceTable, SeatingSection, TicketProvider};
use crate::social::{Attendees, FeedPost, UserProfile};

const SAMPLE_CATALOG: &str = include_str!("../data/sample_catalog.toml");

/// An event listed in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEvent {
    pub id: EventId,
    pub name: String,
    pub date: NaiveDate,
    /// Display time, e.g. "8:00 PM"
    pub time: String,
    pub venue: String,
    pub city: String,
    #[serde(default)]
    pub image: Option<String>,
    pub genre: String,
    /// Number of other users Going
    #[serde(default)]
    pub going_count: u32,
    /// Number of other users Down To Go
    #[serde(default)]
    pub down_to_go_count: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    events: Vec<CatalogEvent>,
    #[serde(default)]
    sections: Vec<SeatingSection>,
    #[serde(default)]
    providers: Vec<TicketProvider>,
    #[serde(default)]
    prices: PriceTable,
    #[serde(default)]
    users: Vec<UserProfile>,
    #[serde(default)]
    posts: Vec<FeedPost>,
    #[serde(default)]
    attendees: Attendees,
}

impl Catalog {
    /// The catalog bundled with the crate.
    pub fn sample() -> DownToGoResult<Self> {
        Self::parse(SAMPLE_CATALOG, Path::new("<bundled sample>"))
    }

    pub fn load(path: &Path) -> DownToGoResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| DownToGoError::Catalog {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::parse(&content, path)
    }

    pub fn from_toml_str(content: &str) -> DownToGoResult<Self> {
        Self::parse(content, Path::new("<string>"))
    }

    fn parse(content: &str, path: &Path) -> DownToGoResult<Self> {
        let catalog: Catalog = toml::from_str(content).map_err(|e| DownToGoError::Catalog {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        catalog.validate(path)?;
        Ok(catalog)
    }

    fn validate(&self, path: &Path) -> DownToGoResult<()> {
        let invalid = |message: String| DownToGoError::Catalog {
            path: PathBuf::from(path),
            message,
        };

        let mut seen = HashSet::new();
        for event in &self.events {
            if !seen.insert(event.id.as_str()) {
                return Err(invalid(format!("duplicate event id '{}'", event.id)));
            }
        }

        for (section, by_provider) in self.prices.iter() {
            if self.section(section).is_none() {
                return Err(invalid(format!("prices for unknown section '{section}'")));
            }
            for provider in by_provider.keys() {
                if self.provider(provider).is_none() {
                    return Err(invalid(format!("prices for unknown provider '{provider}'")));
                }
            }
        }

        Ok(())
    }

    pub fn events(&self) -> &[CatalogEvent] {
        &self.events
    }

    pub fn event(&self, id: &str) -> Option<&CatalogEvent> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Like [`Catalog::event`], but a missing id is an error.
    pub fn require_event(&self, id: &str) -> DownToGoResult<&CatalogEvent> {
        self.event(id)
            .ok_or_else(|| DownToGoError::EventNotFound(id.to_string()))
    }

    pub fn sections(&self) -> &[SeatingSection] {
        &self.sections
    }

    pub fn section(&self, id: &str) -> Option<&SeatingSection> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn providers(&self) -> &[TicketProvider] {
        &self.providers
    }

    pub fn provider(&self, id: &str) -> Option<&TicketProvider> {
        self.providers.iter().find(|p| p.id == id)
    }

    pub fn prices(&self) -> &PriceTable {
        &self.prices
    }

    pub fn users(&self) -> &[UserProfile] {
        &self.users
    }

    pub fn user(&self, username: &str) -> Option<&UserProfile> {
        self.users.iter().find(|u| u.username == username)
    }

    pub fn posts(&self) -> &[FeedPost] {
        &self.posts
    }

    pub fn attendees(&self) -> &Attendees {
        &self.attendees
    }
}
