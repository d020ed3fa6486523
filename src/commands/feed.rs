use anyhow::{Context, Result};
use downtogo_core::Intent;
use downtogo_core::downtogo::DownToGo;
use downtogo_core::social::Tally;
use owo_colors::OwoColorize;

use crate::render::{Render, render_attendees};

pub fn run() -> Result<()> {
    let app = DownToGo::load().context("Failed to load downtogo config")?;
    let catalog = app.catalog().context("Failed to load event catalog")?;

    if catalog.posts().is_empty() {
        println!("{}", "Nothing in your feed yet".dimmed());
        return Ok(());
    }

    for (i, post) in catalog.posts().iter().enumerate() {
        if i > 0 {
            println!();
        }

        println!("{}", post.headline(&catalog).bold());

        let tally = Tally {
            going: post.going_count,
            down_to_go: post.down_to_go_count,
        };
        println!("   {}  {}", tally.render(), post.timestamp.dimmed());

        let event_name = catalog
            .event(post.event_id.as_str())
            .map_or(post.event_id.as_str(), |e| e.name.as_str());
        for (intent, count) in [(Intent::Going, tally.going), (Intent::DownToGo, tally.down_to_go)] {
            if count > 0 {
                let preview = catalog.attendees().preview(intent, count);
                println!("{}", render_attendees(intent, event_name, &preview));
            }
        }
    }

    Ok(())
}
