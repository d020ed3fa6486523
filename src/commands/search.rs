use anyhow::{Context, Result};
use chrono::NaiveDate;
use downtogo_core::downtogo::DownToGo;
use downtogo_core::search::EventQuery;
use downtogo_core::social::Tally;
use owo_colors::OwoColorize;

use crate::render::render_event_card;

pub fn run(text: Option<String>, genre: Option<String>, date: Option<NaiveDate>) -> Result<()> {
    let app = DownToGo::load().context("Failed to load downtogo config")?;
    let catalog = app.catalog().context("Failed to load event catalog")?;
    let store = app.store();

    let query = EventQuery { text, genre, date };
    let events = catalog.search(&query);

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        println!(
            "{}",
            format!("Genres: {}", catalog.genres().join(", ")).dimmed()
        );
        return Ok(());
    }

    for (i, event) in events.iter().enumerate() {
        if i > 0 {
            println!();
        }

        let intent = store.intent(event.id.as_str());
        println!(
            "{}",
            render_event_card(event, Tally::with_intent(event, intent), intent)
        );
    }

    Ok(())
}
