mod commands;
mod render;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use downtogo_core::Intent;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "downtogo")]
#[command(about = "Browse events, compare ticket prices and mark what you're Going or Down To Go to")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show what people are going to
    Feed,
    /// Find events by artist, team, venue or city
    Search {
        query: Option<String>,

        /// Only events of this genre (e.g. "rock", "basketball")
        #[arg(short, long)]
        genre: Option<String>,

        /// Only events on this date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },
    /// Show an event with the cheapest ticket per section
    Event { id: String },
    /// Compare ticket prices across providers
    Prices {
        id: String,

        /// Only show this seating section (e.g. "floor", "s101")
        #[arg(short, long)]
        section: Option<String>,
    },
    /// Mark an event as Going
    Going {
        id: String,

        /// Remove the mark instead
        #[arg(long)]
        off: bool,
    },
    /// Mark an event as Down To Go
    Down {
        id: String,

        /// Remove the mark instead
        #[arg(long)]
        off: bool,
    },
    /// Show your Going and Down To Go events
    Profile,
    /// Show another user's profile
    User { username: String },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    tracing::debug!(command = ?cli.command, "Running command");

    match cli.command {
        Commands::Feed => commands::feed::run(),
        Commands::Search { query, genre, date } => commands::search::run(query, genre, date),
        Commands::Event { id } => commands::event::run(&id),
        Commands::Prices { id, section } => commands::prices::run(&id, section.as_deref()),
        Commands::Going { id, off } => commands::mark::run(&id, Intent::Going, !off),
        Commands::Down { id, off } => commands::mark::run(&id, Intent::DownToGo, !off),
        Commands::Profile => commands::profile::run(),
        Commands::User { username } => commands::user::run(&username),
    }
}
