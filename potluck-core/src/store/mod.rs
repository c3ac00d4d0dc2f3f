//! Data-access interface consumed by the reporting and view code.
//!
//! Persistence lives behind [`EventStore`]. Reports never cache what a store
//! returns: every call reflects the store's state at the time it is made.

mod memory;
mod snapshot;

use std::future::Future;

pub use memory::MemoryStore;
pub use snapshot::Snapshot;

use crate::error::PotluckResult;
use crate::event::Event;
use crate::guest::{Guest, GuestType};
use crate::guest_item::{GuestItem, GuestItemRow, SelectionKey};
use crate::ids::{EventId, GuestId, ItemId, UserId};
use crate::item::{Item, ItemUpdate, ItemWithSelections, NewItem};

/// Filter for [`EventStore::list_events`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EventFilter {
    pub owner_id: Option<UserId>,
}

impl EventFilter {
    pub fn owned_by(owner_id: UserId) -> Self {
        EventFilter {
            owner_id: Some(owner_id),
        }
    }

    pub fn matches(&self, event: &Event) -> bool {
        self.owner_id.is_none_or(|owner| event.user_id == owner)
    }
}

/// Filter for [`EventStore::list_guests`].
#[derive(Debug, Clone, Copy)]
pub struct GuestFilter {
    pub event_id: EventId,
    pub guest_type: Option<GuestType>,
}

impl GuestFilter {
    pub fn for_event(event_id: EventId) -> Self {
        GuestFilter {
            event_id,
            guest_type: None,
        }
    }

    pub fn primary(event_id: EventId) -> Self {
        GuestFilter {
            event_id,
            guest_type: Some(GuestType::Primary),
        }
    }

    pub fn matches(&self, guest: &Guest) -> bool {
        guest.event_id == self.event_id && self.guest_type.is_none_or(|t| guest.guest_type == t)
    }
}

/// Filter for [`EventStore::list_guest_item_selections`].
#[derive(Debug, Clone, Copy)]
pub struct SelectionFilter {
    pub event_id: EventId,
    pub selected: Option<bool>,
    pub guest_id: Option<GuestId>,
    pub item_id: Option<ItemId>,
}

impl SelectionFilter {
    pub fn for_event(event_id: EventId) -> Self {
        SelectionFilter {
            event_id,
            selected: None,
            guest_id: None,
            item_id: None,
        }
    }

    /// Only rows a guest has actually claimed.
    pub fn selected(event_id: EventId) -> Self {
        SelectionFilter {
            selected: Some(true),
            ..Self::for_event(event_id)
        }
    }

    pub fn matches(&self, guest_item: &GuestItem) -> bool {
        guest_item.event_id == self.event_id
            && self.selected.is_none_or(|s| guest_item.selected == s)
            && self.guest_id.is_none_or(|g| guest_item.guest_id == g)
            && self.item_id.is_none_or(|i| guest_item.item_id == i)
    }
}

/// Access to events, guests, items and guest-item selections.
///
/// Methods return `Send` futures so callers can await them from any runtime.
pub trait EventStore: Send + Sync {
    fn list_events(
        &self,
        filter: &EventFilter,
    ) -> impl Future<Output = PotluckResult<Vec<Event>>> + Send;

    fn find_event(&self, id: EventId) -> impl Future<Output = PotluckResult<Option<Event>>> + Send;

    fn list_guests(
        &self,
        filter: &GuestFilter,
    ) -> impl Future<Output = PotluckResult<Vec<Guest>>> + Send;

    fn find_guest(&self, id: GuestId) -> impl Future<Output = PotluckResult<Option<Guest>>> + Send;

    fn list_items(&self, event_id: EventId)
    -> impl Future<Output = PotluckResult<Vec<Item>>> + Send;

    /// Items of an event, each with all of its guest-item rows.
    fn list_items_with_selections(
        &self,
        event_id: EventId,
    ) -> impl Future<Output = PotluckResult<Vec<ItemWithSelections>>> + Send;

    fn find_item(&self, id: ItemId) -> impl Future<Output = PotluckResult<Option<Item>>> + Send;

    fn list_guest_item_selections(
        &self,
        filter: &SelectionFilter,
    ) -> impl Future<Output = PotluckResult<Vec<GuestItemRow>>> + Send;

    fn find_guest_item(
        &self,
        key: SelectionKey,
    ) -> impl Future<Output = PotluckResult<Option<GuestItemRow>>> + Send;

    /// Fails with `InvalidInput` if the triple already exists, or if its guest
    /// or item is missing or belongs to another event.
    fn insert_guest_item(
        &self,
        guest_item: GuestItem,
    ) -> impl Future<Output = PotluckResult<()>> + Send;

    /// Fails with `NotFound` if the triple does not exist, and with
    /// `InvalidInput` under the same reference rules as insert.
    fn update_guest_item(
        &self,
        guest_item: GuestItem,
    ) -> impl Future<Output = PotluckResult<()>> + Send;

    fn create_item(&self, item: NewItem) -> impl Future<Output = PotluckResult<Item>> + Send;

    fn update_item(
        &self,
        id: ItemId,
        update: ItemUpdate,
    ) -> impl Future<Output = PotluckResult<Item>> + Send;

    fn delete_item(&self, id: ItemId) -> impl Future<Output = PotluckResult<()>> + Send;
}
