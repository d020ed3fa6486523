use anyhow::{Context, Result};
use downtogo_core::DownToGoError;
use downtogo_core::downtogo::DownToGo;
use downtogo_core::social::Profile;
use owo_colors::OwoColorize;

use crate::render::render_profile;

pub fn run(username: &str) -> Result<()> {
    let app = DownToGo::load().context("Failed to load downtogo config")?;
    let catalog = app.catalog().context("Failed to load event catalog")?;

    let user = catalog
        .user(username)
        .ok_or_else(|| DownToGoError::UserNotFound(username.to_string()))?;

    println!("{} {}", user.display_name.bold(), format!("@{}", user.username).dimmed());
    if !user.bio.is_empty() {
        println!("{}", user.bio);
    }
    if !user.location.is_empty() || !user.joined.is_empty() {
        println!(
            "{}",
            format!("{}  Joined {}", user.location, user.joined).dimmed()
        );
    }
    println!();
    println!("{}", render_profile(&Profile::for_user(&catalog, user), &user.username));

    Ok(())
}
