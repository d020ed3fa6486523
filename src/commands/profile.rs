use anyhow::{Context, Result};
use downtogo_core::downtogo::DownToGo;
use downtogo_core::social::Profile;
use owo_colors::OwoColorize;

use crate::render::render_profile;

pub fn run() -> Result<()> {
    let app = DownToGo::load().context("Failed to load downtogo config")?;
    let catalog = app.catalog().context("Failed to load event catalog")?;
    let store = app.store();

    let profile = Profile::for_store(&catalog, &store);

    println!("{}", app.username().bold());
    println!("{}", format!("Saved in {}", app.display_path().display()).dimmed());
    println!();
    println!("{}", render_profile(&profile, app.username()));

    Ok(())
}
