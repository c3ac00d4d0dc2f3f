use anyhow::Result;
use chrono::Utc;
use owo_colors::OwoColorize;
use potluck_core::report::event_timeline;

use super::Workspace;
use crate::render::Render;

pub async fn run(workspace: &Workspace) -> Result<()> {
    let user_id = workspace.require_user()?;
    let timeline = event_timeline(&workspace.store, user_id, Utc::now()).await?;

    if timeline.events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    println!("{}", "Upcoming".bold());
    if timeline.next_events.is_empty() {
        println!("   {}", "nothing planned".dimmed());
    }
    for event in &timeline.next_events {
        println!("   {}", event.render());
    }

    if !timeline.past_events.is_empty() {
        println!();
        println!("{}", "Past".bold());
        for event in timeline.past_events.iter().rev() {
            println!("   {}", event.render());
        }
    }

    Ok(())
}
