//! Profiles, the social feed and attendance counts.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, CatalogEvent};
use crate::event_id::EventId;
use crate::membership::{Intent, MembershipStore};
use crate::storage::Storage;

/// How many attendee names are listed before the "+N more" tail.
pub const ATTENDEE_PREVIEW_LIMIT: u32 = 10;

/// Sample usernames shown in "Going to" / "Down To Go to" lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attendees {
    #[serde(default)]
    pub going: Vec<String>,
    #[serde(default)]
    pub down_to_go: Vec<String>,
}

/// The first few attendee names plus how many are left unnamed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendeePreview<'a> {
    pub names: Vec<&'a str>,
    pub more: u32,
}

impl Attendees {
    /// Names for an event with `count` people marked `intent`: at most
    /// [`ATTENDEE_PREVIEW_LIMIT`] names, and the rest counted in `more`.
    pub fn preview(&self, intent: Intent, count: u32) -> AttendeePreview<'_> {
        let pool = match intent {
            Intent::Going => &self.going,
            Intent::DownToGo => &self.down_to_go,
        };
        let shown = count.min(ATTENDEE_PREVIEW_LIMIT) as usize;

        AttendeePreview {
            names: pool.iter().take(shown).map(String::as_str).collect(),
            more: count.saturating_sub(ATTENDEE_PREVIEW_LIMIT),
        }
    }
}

/// A sample user with fixed Going / Down To Go lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    pub display_name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub location: String,
    /// e.g. "January 2023"
    #[serde(default)]
    pub joined: String,
    #[serde(default)]
    pub going: Vec<EventId>,
    #[serde(default)]
    pub down_to_go: Vec<EventId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedPost {
    pub id: String,
    pub username: String,
    pub event_id: EventId,
    pub intent: Intent,
    /// Relative display time, e.g. "2 hours ago"
    pub timestamp: String,
    #[serde(default)]
    pub going_count: u32,
    #[serde(default)]
    pub down_to_go_count: u32,
}

impl FeedPost {
    /// "alex is going to Taylor Swift | The Eras Tour"
    pub fn headline(&self, catalog: &Catalog) -> String {
        let event = catalog
            .event(self.event_id.as_str())
            .map(|e| e.name.as_str())
            .unwrap_or(self.event_id.as_str());

        match self.intent {
            Intent::Going => format!("{} is going to {}", self.username, event),
            Intent::DownToGo => format!("{} is Down To Go to {}", self.username, event),
        }
    }
}

/// A user's marked events, resolved against the catalog.
#[derive(Debug, Clone, Default)]
pub struct Profile<'a> {
    pub going: Vec<&'a CatalogEvent>,
    pub down_to_go: Vec<&'a CatalogEvent>,
}

impl<'a> Profile<'a> {
    /// The current user's events. Ids missing from the catalog are skipped.
    pub fn for_store<S: Storage>(catalog: &'a Catalog, store: &MembershipStore<S>) -> Self {
        let state = store.snapshot();

        Profile {
            going: catalog
                .events()
                .iter()
                .filter(|e| state.is_going(e.id.as_str()))
                .collect(),
            down_to_go: catalog
                .events()
                .iter()
                .filter(|e| state.is_down_to_go(e.id.as_str()))
                .collect(),
        }
    }

    pub fn for_user(catalog: &'a Catalog, user: &UserProfile) -> Self {
        let resolve = |ids: &[EventId]| -> Vec<&'a CatalogEvent> {
            ids.iter()
                .filter_map(|id| catalog.event(id.as_str()))
                .collect()
        };

        Profile {
            going: resolve(&user.going),
            down_to_go: resolve(&user.down_to_go),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.going.is_empty() && self.down_to_go.is_empty()
    }
}

/// Attendance counts as shown to the current user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub going: u32,
    pub down_to_go: u32,
}

impl Tally {
    /// Catalog counts plus the current user's own mark, if any.
    pub fn for_event<S: Storage>(event: &CatalogEvent, store: &MembershipStore<S>) -> Self {
        Self::with_intent(event, store.intent(event.id.as_str()))
    }

    pub fn with_intent(event: &CatalogEvent, intent: Option<Intent>) -> Self {
        let mut tally = Tally {
            going: event.going_count,
            down_to_go: event.down_to_go_count,
        };

        match intent {
            Some(Intent::Going) => tally.going = tally.going.saturating_add(1),
            Some(Intent::DownToGo) => tally.down_to_go = tally.down_to_go.saturating_add(1),
            None => {}
        }

        tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::NoopStorage;

    fn catalog() -> Catalog {
        Catalog::from_toml_str(
            r#"
[[events]]
id = "1"
name = "Taylor Swift | The Eras Tour"
date = "2025-06-15"
time = "7:00 PM"
venue = "Gillette Stadium"
city = "Foxborough, MA"
genre = "pop"
going_count = 10
down_to_go_count = 4

[[events]]
id = "2"
name = "Boston Red Sox vs. Yankees"
date = "2025-06-16"
time = "7:10 PM"
venue = "Fenway Park"
city = "Boston, MA"
genre = "baseball"

[[users]]
username = "jazzcat"
display_name = "Jamie"
going = ["2", "missing"]
down_to_go = ["1"]

[[posts]]
id = "p1"
username = "jazzcat"
event_id = "1"
intent = "down-to-go"
timestamp = "2 hours ago"

[[posts]]
id = "p2"
username = "jazzcat"
event_id = "gone"
intent = "going"
timestamp = "yesterday"
"#,
        )
        .unwrap()
    }

    fn names(events: &[&CatalogEvent]) -> Vec<String> {
        events.iter().map(|e| e.id.to_string()).collect()
    }

    #[test]
    fn store_profile_follows_catalog_order_and_skips_unknown_ids() {
        let catalog = catalog();
        let store = MembershipStore::load(NoopStorage);
        store.set_going("2", true);
        store.set_going("1", true);
        store.set_down_to_go("not-in-catalog", true);

        let profile = Profile::for_store(&catalog, &store);
        assert_eq!(names(&profile.going), vec!["1", "2"]);
        assert!(profile.down_to_go.is_empty());
    }

    #[test]
    fn empty_store_gives_empty_profile() {
        let catalog = catalog();
        let store = MembershipStore::load(NoopStorage);

        assert!(Profile::for_store(&catalog, &store).is_empty());
    }

    #[test]
    fn user_profile_resolves_static_lists() {
        let catalog = catalog();
        let user = catalog.user("jazzcat").unwrap();

        let profile = Profile::for_user(&catalog, user);
        assert_eq!(names(&profile.going), vec!["2"]);
        assert_eq!(names(&profile.down_to_go), vec!["1"]);
    }

    #[test]
    fn headlines_use_event_names() {
        let catalog = catalog();
        let posts = catalog.posts();

        assert_eq!(
            posts[0].headline(&catalog),
            "jazzcat is Down To Go to Taylor Swift | The Eras Tour"
        );
        assert_eq!(posts[1].headline(&catalog), "jazzcat is going to gone");
    }

    #[test]
    fn tally_counts_the_current_user_once() {
        let catalog = catalog();
        let event = catalog.event("1").unwrap();
        let store = MembershipStore::load(NoopStorage);

        assert_eq!(Tally::for_event(event, &store), Tally { going: 10, down_to_go: 4 });

        store.set_going("1", true);
        assert_eq!(Tally::for_event(event, &store), Tally { going: 11, down_to_go: 4 });

        store.set_down_to_go("1", true);
        assert_eq!(Tally::for_event(event, &store), Tally { going: 10, down_to_go: 5 });
    }

    #[test]
    fn tally_saturates_at_the_counter_limit() {
        let mut event = catalog().event("1").unwrap().clone();
        event.going_count = u32::MAX;
        event.down_to_go_count = u32::MAX;

        assert_eq!(Tally::with_intent(&event, Some(Intent::Going)).going, u32::MAX);
        assert_eq!(Tally::with_intent(&event, Some(Intent::DownToGo)).down_to_go, u32::MAX);
    }

    fn attendees() -> Attendees {
        Attendees {
            going: (1..=12).map(|n| format!("fan{n}")).collect(),
            down_to_go: vec!["maybe1".to_string(), "maybe2".to_string()],
        }
    }

    #[test]
    fn attendee_preview_caps_names_at_ten() {
        let roster = attendees();
        let preview = roster.preview(Intent::Going, 245);

        assert_eq!(preview.names.len(), 10);
        assert_eq!(preview.names.first(), Some(&"fan1"));
        assert_eq!(preview.names.last(), Some(&"fan10"));
        assert_eq!(preview.more, 235);
    }

    #[test]
    fn attendee_preview_under_the_cap_lists_count_names() {
        let roster = attendees();
        let preview = roster.preview(Intent::Going, 3);

        assert_eq!(preview.names, vec!["fan1", "fan2", "fan3"]);
        assert_eq!(preview.more, 0);
    }

    #[test]
    fn attendee_preview_is_limited_by_known_names() {
        let roster = attendees();
        let preview = roster.preview(Intent::DownToGo, 5);

        assert_eq!(preview.names, vec!["maybe1", "maybe2"]);
        assert_eq!(preview.more, 0);

        let roster = attendees();
        let exactly_ten = roster.preview(Intent::Going, 10);
        assert_eq!(exactly_ten.names.len(), 10);
        assert_eq!(exactly_ten.more, 0);
    }

    #[test]
    fn catalog_attendees_are_parsed() {
        let catalog = Catalog::from_toml_str(
            r#"
[attendees]
going = ["musicfan123", "jazzcat"]
"#,
        )
        .unwrap();

        assert_eq!(catalog.attendees().going, vec!["musicfan123", "jazzcat"]);
        assert!(catalog.attendees().down_to_go.is_empty());
    }
}
