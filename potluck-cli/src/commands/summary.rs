use anyhow::Result;
use owo_colors::OwoColorize;
use potluck_core::report::{guest_responses, selection_costs};
use potluck_core::store::EventStore;
use potluck_core::{EventId, GuestType, PotluckError};

use super::Workspace;
use crate::render::Render;

pub async fn run(workspace: &Workspace, event_id: EventId, primary_only: bool) -> Result<()> {
    let store = &workspace.store;
    let event = store
        .find_event(event_id)
        .await?
        .ok_or_else(|| PotluckError::not_found(format!("Event {}", event_id)))?;

    let guest_type = primary_only.then_some(GuestType::Primary);
    let responses = guest_responses(store, event_id, guest_type).await?;
    let costs = selection_costs(store, event_id).await?;

    println!("{}", event.render());
    println!("{}", responses.render());

    match costs.iter().find(|c| c.selected) {
        Some(claimed) => println!("   {}", claimed.render()),
        None => println!("   {}", "no items claimed yet".dimmed()),
    }

    Ok(())
}
