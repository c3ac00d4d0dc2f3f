use anyhow::Result;
use owo_colors::OwoColorize;
use potluck_core::store::EventStore;
use potluck_core::{ItemId, ItemUpdate, NewItem};

use super::Workspace;
use crate::render::Render;

pub async fn add(workspace: &Workspace, new_item: NewItem) -> Result<()> {
    let item = workspace.store.create_item(new_item).await?;
    workspace.save()?;

    println!("{} {}", "+".green(), item.render());
    Ok(())
}

pub async fn update(workspace: &Workspace, id: ItemId, update: ItemUpdate) -> Result<()> {
    let item = workspace.store.update_item(id, update).await?;
    workspace.save()?;

    println!("{} {}", "~".yellow(), item.render());
    Ok(())
}

pub async fn remove(workspace: &Workspace, id: ItemId) -> Result<()> {
    workspace.store.delete_item(id).await?;
    workspace.save()?;

    println!("{} item {}", "-".red(), id);
    Ok(())
}
