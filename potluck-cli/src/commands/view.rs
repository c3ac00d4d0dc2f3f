use anyhow::{Result, bail};
use chrono::Utc;
use clap::ValueEnum;
use potluck_core::view::{Page, assemble};
use potluck_core::{EventId, GuestId, ItemId};

use super::Workspace;

/// Pages whose data bundle can be printed.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PageName {
    Home,
    Dashboard,
    /// Event summary with RSVP counts and claimed total (needs event id)
    Event,
    /// Event fields only (needs event id)
    EventDetail,
    /// All guests of an event (needs event id)
    Guests,
    /// One guest with the items they may claim (needs guest id)
    GuestEdit,
    /// Primary guests of an event (needs event id)
    GuestList,
    /// Items of an event (needs event id)
    Items,
    /// Items with per-item claimed totals (needs event id)
    ItemDetail,
    NewEvent,
    /// One item (needs item id)
    ItemEdit,
    /// All events with guests and items
    Events,
}

impl PageName {
    fn into_page(self, id: Option<u64>) -> Result<Page> {
        let need_id = || match id {
            Some(id) => Ok(id),
            None => bail!("The {:?} page needs an id", self),
        };

        Ok(match self {
            PageName::Home => Page::Home,
            PageName::Dashboard => Page::Dashboard,
            PageName::Event => Page::EventSummary(EventId(need_id()?)),
            PageName::EventDetail => Page::EventDetail(EventId(need_id()?)),
            PageName::Guests => Page::GuestDetail(EventId(need_id()?)),
            PageName::GuestEdit => Page::GuestEdit(GuestId(need_id()?)),
            PageName::GuestList => Page::GuestList(EventId(need_id()?)),
            PageName::Items => Page::ItemList(EventId(need_id()?)),
            PageName::ItemDetail => Page::ItemDetail(EventId(need_id()?)),
            PageName::NewEvent => Page::NewEvent,
            PageName::ItemEdit => Page::ItemEdit(ItemId(need_id()?)),
            PageName::Events => Page::Events,
        })
    }
}

pub async fn run(workspace: &Workspace, page: PageName, id: Option<u64>) -> Result<()> {
    let page = page.into_page(id)?;
    let bundle = assemble(&workspace.store, page, workspace.user_id, Utc::now()).await?;

    println!("{}", serde_json::to_string_pretty(&bundle)?);
    Ok(())
}
