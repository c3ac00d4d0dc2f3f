use anyhow::Result;
use owo_colors::OwoColorize;
use potluck_core::EventId;
use potluck_core::report::claimed_costs;

use super::Workspace;
use crate::render::Render;

pub async fn run(workspace: &Workspace, event_id: EventId) -> Result<()> {
    let costs = claimed_costs(&workspace.store, event_id).await?;

    if costs.items.is_empty() {
        println!("{}", "No items claimed yet".dimmed());
        return Ok(());
    }

    for cost in &costs.items {
        println!("   {}", cost.render());
    }
    println!("   {} {}", "total".bold(), costs.total_cost.to_string().bold());

    Ok(())
}
