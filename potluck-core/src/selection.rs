//! Recording a guest's claim on an item.

use std::fmt;

use serde::Serialize;
use tracing::info;

use crate::error::{PotluckError, PotluckResult};
use crate::guest_item::{GuestItem, SelectionKey};
use crate::report::selection_exists;
use crate::store::EventStore;

/// What [`select_item`] did to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionWrite {
    Inserted,
    Updated,
}

impl fmt::Display for SelectionWrite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionWrite::Inserted => write!(f, "inserted"),
            SelectionWrite::Updated => write!(f, "updated"),
        }
    }
}

/// Set the `selected` flag for a guest and item, inserting the row if the
/// triple has none yet.
pub async fn select_item<S: EventStore>(
    store: &S,
    key: SelectionKey,
    selected: bool,
) -> PotluckResult<SelectionWrite> {
    store
        .find_event(key.event_id)
        .await?
        .ok_or_else(|| PotluckError::not_found(format!("Event {}", key.event_id)))?;
    let guest = store
        .find_guest(key.guest_id)
        .await?
        .ok_or_else(|| PotluckError::not_found(format!("Guest {}", key.guest_id)))?;
    let item = store
        .find_item(key.item_id)
        .await?
        .ok_or_else(|| PotluckError::not_found(format!("Item {}", key.item_id)))?;

    if guest.event_id != key.event_id {
        return Err(PotluckError::InvalidInput(format!(
            "guest {} is not invited to event {}",
            guest.id, key.event_id
        )));
    }
    if item.event_id != key.event_id {
        return Err(PotluckError::InvalidInput(format!(
            "item {} does not belong to event {}",
            item.id, key.event_id
        )));
    }

    let guest_item = GuestItem::new(key, selected);
    let write = if selection_exists(store, key).await? {
        store.update_guest_item(guest_item).await?;
        SelectionWrite::Updated
    } else {
        store.insert_guest_item(guest_item).await?;
        SelectionWrite::Inserted
    };

    info!(
        event_id = %key.event_id,
        guest_id = %key.guest_id,
        item_id = %key.item_id,
        selected,
        %write,
        "recorded item selection"
    );
    Ok(write)
}
