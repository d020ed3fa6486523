use anyhow::{Context, Result};
use downtogo_core::downtogo::DownToGo;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(id: &str, section_filter: Option<&str>) -> Result<()> {
    let app = DownToGo::load().context("Failed to load downtogo config")?;
    let catalog = app.catalog().context("Failed to load event catalog")?;
    let event = catalog.require_event(id)?;

    let sections: Vec<_> = match section_filter {
        Some(section_id) => match catalog.section(section_id) {
            Some(section) => vec![section],
            None => {
                let available: Vec<_> = catalog.sections().iter().map(|s| s.id.as_str()).collect();
                anyhow::bail!(
                    "Section '{}' not found. Available: {}",
                    section_id,
                    available.join(", ")
                );
            }
        },
        None => catalog.sections().iter().collect(),
    };

    println!("{}", event.name.bold());

    for section in sections {
        println!();
        println!("{} Tickets", section.name);

        let offers = catalog.offers(&section.id);
        if offers.is_empty() {
            println!("   {}", "No tickets listed".dimmed());
            continue;
        }

        for offer in offers {
            println!("   {}", offer.render());
        }
    }

    Ok(())
}
