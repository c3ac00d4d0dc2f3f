use anyhow::Result;
use potluck_core::report::lookup_selection;
use potluck_core::selection::select_item;
use potluck_core::{EventId, GuestId, ItemId, SelectionKey};

use super::Workspace;
use crate::render::Render;

fn key(event_id: EventId, guest_id: GuestId, item_id: ItemId) -> SelectionKey {
    SelectionKey {
        event_id,
        guest_id,
        item_id,
    }
}

/// Print FOUND or UNFOUND for the triple.
pub async fn lookup(
    workspace: &Workspace,
    event_id: EventId,
    guest_id: GuestId,
    item_id: ItemId,
) -> Result<()> {
    let found = lookup_selection(&workspace.store, key(event_id, guest_id, item_id)).await?;
    println!("{}", found.render());
    Ok(())
}

pub async fn run(
    workspace: &Workspace,
    event_id: EventId,
    guest_id: GuestId,
    item_id: ItemId,
    selected: bool,
) -> Result<()> {
    let write = select_item(&workspace.store, key(event_id, guest_id, item_id), selected).await?;
    workspace.save()?;

    println!("{}", write.render());
    Ok(())
}
