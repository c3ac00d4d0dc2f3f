//! Data bundles for each page, composed from the reports.
//!
//! Each loader fetches what its page needs, runs the aggregations once and
//! returns a plain serialisable struct. Rendering is left to the caller.

mod bundle;
mod pages;

pub use bundle::*;
pub use pages::*;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{PotluckError, PotluckResult};
use crate::ids::{EventId, GuestId, ItemId, UserId};
use crate::store::EventStore;

/// A page and the id it is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Dashboard,
    EventSummary(EventId),
    EventDetail(EventId),
    GuestDetail(EventId),
    GuestEdit(GuestId),
    GuestList(EventId),
    ItemList(EventId),
    ItemDetail(EventId),
    NewEvent,
    ItemEdit(ItemId),
    Events,
}

fn to_json<T: Serialize>(bundle: T) -> PotluckResult<serde_json::Value> {
    serde_json::to_value(bundle)
        .map_err(|e| PotluckError::AggregationFailure(format!("could not serialize bundle: {e}")))
}

/// Assemble the bundle for `page` as JSON. `user_id` is `None` for a
/// signed-out visitor, who may only see [`Page::Home`].
pub async fn assemble<S: EventStore>(
    store: &S,
    page: Page,
    user_id: Option<UserId>,
    now: DateTime<Utc>,
) -> PotluckResult<serde_json::Value> {
    let signed_in = || {
        user_id
            .map(|id| ViewContext::new(id, now))
            .ok_or_else(|| PotluckError::InvalidInput(format!("{:?} needs a signed-in user", page)))
    };

    match page {
        Page::Home => to_json(home(store, user_id, now).await?),
        Page::Dashboard => to_json(dashboard(store, &signed_in()?).await?),
        Page::EventSummary(id) => to_json(event_summary(store, &signed_in()?, id).await?),
        Page::EventDetail(id) => to_json(event_detail(store, &signed_in()?, id).await?),
        Page::GuestDetail(id) => to_json(guest_detail(store, &signed_in()?, id).await?),
        Page::GuestEdit(id) => to_json(guest_edit(store, &signed_in()?, id).await?),
        Page::GuestList(id) => to_json(guest_list(store, &signed_in()?, id).await?),
        Page::ItemList(id) => to_json(item_list(store, &signed_in()?, id).await?),
        Page::ItemDetail(id) => to_json(item_detail(store, &signed_in()?, id).await?),
        Page::NewEvent => to_json(new_event(store, &signed_in()?).await?),
        Page::ItemEdit(id) => to_json(item_edit(store, &signed_in()?, id).await?),
        Page::Events => to_json(events_overview(store, &signed_in()?).await?),
    }
}
