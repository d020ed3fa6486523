use anyhow::{Context, Result};
use downtogo_core::Intent;
use downtogo_core::downtogo::DownToGo;
use downtogo_core::social::Tally;
use owo_colors::OwoColorize;

use crate::render::{Render, render_attendees, render_event_card};

pub fn run(id: &str) -> Result<()> {
    let app = DownToGo::load().context("Failed to load downtogo config")?;
    let catalog = app.catalog().context("Failed to load event catalog")?;
    let store = app.store();

    let event = catalog.require_event(id)?;

    let tally = Tally::for_event(event, &store);

    println!("{}", render_event_card(event, tally, store.intent(id)));
    for (intent, count) in [(Intent::Going, tally.going), (Intent::DownToGo, tally.down_to_go)] {
        if count > 0 {
            let preview = catalog.attendees().preview(intent, count);
            println!("{}", render_attendees(intent, &event.name, &preview));
        }
    }
    println!();
    println!("{}", "Cheapest tickets by section:".dimmed());

    for section in catalog.sections() {
        match catalog.cheapest(&section.id) {
            Some(offer) => println!("   {:<12} {}", section.name, offer.render()),
            None => println!("   {:<12} {}", section.name, "no tickets listed".dimmed()),
        }
    }

    println!();
    println!(
        "{}",
        format!("Compare all providers with `downtogo prices {id}`").dimmed()
    );

    Ok(())
}
