//! Guest claims on items.

use serde::{Deserialize, Serialize};

use crate::flag::deserialize_flag;
use crate::guest::Guest;
use crate::ids::{EventId, GuestId, ItemId};
use crate::item::Item;

/// The (event, guest, item) triple identifying one selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SelectionKey {
    pub event_id: EventId,
    pub guest_id: GuestId,
    pub item_id: ItemId,
}

/// A guest's choice to bring an item to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestItem {
    pub event_id: EventId,
    pub guest_id: GuestId,
    pub item_id: ItemId,
    #[serde(deserialize_with = "deserialize_flag")]
    pub selected: bool,
}

impl GuestItem {
    pub fn new(key: SelectionKey, selected: bool) -> Self {
        GuestItem {
            event_id: key.event_id,
            guest_id: key.guest_id,
            item_id: key.item_id,
            selected,
        }
    }

    pub fn key(&self) -> SelectionKey {
        SelectionKey {
            event_id: self.event_id,
            guest_id: self.guest_id,
            item_id: self.item_id,
        }
    }
}

/// A selection joined with the item and guest it references.
///
/// The store fills `item` and `guest` when the referenced rows exist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuestItemRow {
    #[serde(flatten)]
    pub selection: GuestItem,
    pub item: Option<Item>,
    pub guest: Option<Guest>,
}
