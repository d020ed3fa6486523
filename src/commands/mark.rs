use std::rc::Rc;

use anyhow::{Context, Result};
use downtogo_core::Intent;
use downtogo_core::downtogo::DownToGo;
use downtogo_core::social::Tally;

use crate::render::render_event_card;

pub fn run(id: &str, intent: Intent, on: bool) -> Result<()> {
    let app = DownToGo::load().context("Failed to load downtogo config")?;
    let catalog = app.catalog().context("Failed to load event catalog")?;

    // The store accepts any id, but marks only make sense for listed events
    let event = catalog.require_event(id)?.clone();
    let store = Rc::new(app.store());

    // Re-render the card on every change, like a mounted view would
    let view = {
        let store = Rc::downgrade(&store);
        move || {
            if let Some(store) = store.upgrade() {
                let intent = store.intent(event.id.as_str());
                let tally = Tally::for_event(&event, &store);
                println!("{}", render_event_card(&event, tally, intent));
            }
        }
    };
    let subscription = store.subscribe(view);

    match intent {
        Intent::Going => store.set_going(id, on),
        Intent::DownToGo => store.set_down_to_go(id, on),
    }

    subscription.unsubscribe();
    Ok(())
}
