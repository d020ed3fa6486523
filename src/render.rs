//! TUI rendering traits for downtogo types.
//!
//! Extension traits that add colored terminal rendering to downtogo-core
//! types using owo_colors.

use downtogo_core::Intent;
use downtogo_core::catalog::CatalogEvent;
use downtogo_core::pricing::Offer;
use downtogo_core::social::{AttendeePreview, Profile, Tally};
use owo_colors::OwoColorize;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for Intent {
    fn render(&self) -> String {
        match self {
            Intent::Going => format!("🎟️ {}", "Going".green()),
            Intent::DownToGo => format!("⬇️ {}", "Down To Go".yellow()),
        }
    }
}

impl Render for Tally {
    fn render(&self) -> String {
        format!("🎟️ Going: {}  ⬇️ Down To Go: {}", self.going, self.down_to_go)
    }
}

impl Render for Offer<'_> {
    fn render(&self) -> String {
        let breakdown = format!("${} + ${} fees", self.price.price, self.price.fees);
        format!(
            "{} {} via {}  {}",
            format!("${}", self.price.total).bold(),
            breakdown.dimmed(),
            self.provider.name,
            self.price.url.dimmed()
        )
    }
}

/// One-line summary of an event: name, when and where.
pub fn render_event_line(event: &CatalogEvent) -> String {
    let when = format!("{} • {}", event.date.format("%B %-d, %Y"), event.time);
    let place = format!("{} • {}", event.venue, event.city);
    format!("{} {}\n     {}  {}", event.id.dimmed(), event.name.bold(), when, place.dimmed())
}

/// An event card: summary, counts and the user's own mark.
pub fn render_event_card(event: &CatalogEvent, tally: Tally, intent: Option<Intent>) -> String {
    let mut lines = vec![render_event_line(event)];
    let mut status = format!("     {}", tally.render().dimmed());

    if let Some(intent) = intent {
        status.push_str(&format!("  ✓ {}", intent.render()));
    }

    lines.push(status);
    lines.join("\n")
}

/// "Going to <event>:" followed by a few names and a "+N more" tail.
pub fn render_attendees(intent: Intent, event_name: &str, preview: &AttendeePreview) -> String {
    let mut line = preview.names.join(", ");

    if preview.more > 0 {
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(&format!("+{} more", preview.more).dimmed().to_string());
    }

    format!("     {} to {}:\n       {}", intent, event_name, line)
}

/// Both tabs of a profile.
pub fn render_profile(profile: &Profile, owner: &str) -> String {
    let mut lines = Vec::new();

    for (intent, events) in [
        (Intent::DownToGo, &profile.down_to_go),
        (Intent::Going, &profile.going),
    ] {
        lines.push(intent.render());

        if events.is_empty() {
            let empty = format!("   {owner} hasn't marked any events as \"{intent}\" yet.");
            lines.push(empty.dimmed().to_string());
        } else {
            for event in events {
                lines.push(format!("   {}", render_event_line(event)));
            }
        }

        lines.push(String::new());
    }

    lines.pop();
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use downtogo_core::catalog::Catalog;

    #[test]
    fn empty_profile_tabs_say_so() {
        let rendered = render_profile(&Profile::default(), "jazzcat");

        assert!(rendered.contains("jazzcat hasn't marked any events as \"Down To Go\" yet."));
        assert!(rendered.contains("jazzcat hasn't marked any events as \"Going\" yet."));
    }

    #[test]
    fn event_card_shows_counts_and_mark() {
        let catalog = Catalog::sample().unwrap();
        let event = catalog.event("1").unwrap();
        let tally = Tally::with_intent(event, Some(Intent::Going));

        let card = render_event_card(event, tally, Some(Intent::Going));
        assert!(card.contains("Taylor Swift | The Eras Tour"));
        assert!(card.contains("June 15, 2025 • 7:00 PM"));
        assert!(card.contains("Going: 246"));
        assert!(card.contains("✓"));
    }

    #[test]
    fn attendees_list_ten_names_then_the_rest() {
        let catalog = Catalog::sample().unwrap();
        let event = catalog.event("1").unwrap();
        let preview = catalog.attendees().preview(Intent::Going, event.going_count);

        let rendered = render_attendees(Intent::Going, &event.name, &preview);
        assert!(rendered.contains("Going to Taylor Swift | The Eras Tour:"));
        assert!(rendered.contains("musicfan123, jazzcat"));
        assert!(rendered.contains("+235 more"));
        assert!(!rendered.contains("frontrowfreddie"));
    }

    #[test]
    fn short_attendee_lists_have_no_tail() {
        let catalog = Catalog::sample().unwrap();
        let preview = catalog.attendees().preview(Intent::DownToGo, 2);

        let rendered = render_attendees(Intent::DownToGo, "Jazz Night", &preview);
        assert!(rendered.contains("Down To Go to Jazz Night:"));
        assert!(rendered.contains("maybe_mike, jazzcat"));
        assert!(!rendered.contains("more"));
    }
}
