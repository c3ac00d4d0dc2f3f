//! In-memory store backed by a [`Snapshot`].

use std::path::Path;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::info;

use crate::error::{PotluckError, PotluckResult};
use crate::event::Event;
use crate::guest::Guest;
use crate::guest_item::{GuestItem, GuestItemRow, SelectionKey};
use crate::ids::{EventId, GuestId, ItemId};
use crate::item::{Item, ItemUpdate, ItemWithSelections, NewItem};
use crate::store::{EventFilter, EventStore, GuestFilter, SelectionFilter, Snapshot};

pub struct MemoryStore {
    data: RwLock<Snapshot>,
}

impl MemoryStore {
    pub fn new(snapshot: Snapshot) -> Self {
        MemoryStore {
            data: RwLock::new(snapshot),
        }
    }

    pub fn load(path: &Path) -> PotluckResult<Self> {
        Ok(Self::new(Snapshot::load(path)?))
    }

    pub fn save(&self, path: &Path) -> PotluckResult<()> {
        self.read()?.save(path)
    }

    /// Copy of the current contents.
    pub fn snapshot(&self) -> PotluckResult<Snapshot> {
        Ok(self.read()?.clone())
    }

    fn read(&self) -> PotluckResult<RwLockReadGuard<'_, Snapshot>> {
        self.data
            .read()
            .map_err(|_| PotluckError::Store("store lock poisoned".into()))
    }

    fn write(&self) -> PotluckResult<RwLockWriteGuard<'_, Snapshot>> {
        self.data
            .write()
            .map_err(|_| PotluckError::Store("store lock poisoned".into()))
    }
}

fn join_row(data: &Snapshot, selection: &GuestItem) -> GuestItemRow {
    GuestItemRow {
        selection: *selection,
        item: data.items.iter().find(|i| i.id == selection.item_id).cloned(),
        guest: data.guests.iter().find(|g| g.id == selection.guest_id).cloned(),
    }
}

impl EventStore for MemoryStore {
    async fn list_events(&self, filter: &EventFilter) -> PotluckResult<Vec<Event>> {
        let data = self.read()?;
        Ok(data
            .events
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect())
    }

    async fn find_event(&self, id: EventId) -> PotluckResult<Option<Event>> {
        let data = self.read()?;
        Ok(data.events.iter().find(|e| e.id == id).cloned())
    }

    async fn list_guests(&self, filter: &GuestFilter) -> PotluckResult<Vec<Guest>> {
        let data = self.read()?;
        Ok(data
            .guests
            .iter()
            .filter(|g| filter.matches(g))
            .cloned()
            .collect())
    }

    async fn find_guest(&self, id: GuestId) -> PotluckResult<Option<Guest>> {
        let data = self.read()?;
        Ok(data.guests.iter().find(|g| g.id == id).cloned())
    }

    async fn list_items(&self, event_id: EventId) -> PotluckResult<Vec<Item>> {
        let data = self.read()?;
        Ok(data
            .items
            .iter()
            .filter(|i| i.event_id == event_id)
            .cloned()
            .collect())
    }

    async fn list_items_with_selections(
        &self,
        event_id: EventId,
    ) -> PotluckResult<Vec<ItemWithSelections>> {
        let data = self.read()?;
        Ok(data
            .items
            .iter()
            .filter(|i| i.event_id == event_id)
            .map(|item| ItemWithSelections {
                item: item.clone(),
                guest_items: data
                    .guest_items
                    .iter()
                    .filter(|gi| gi.item_id == item.id)
                    .copied()
                    .collect(),
            })
            .collect())
    }

    async fn find_item(&self, id: ItemId) -> PotluckResult<Option<Item>> {
        let data = self.read()?;
        Ok(data.items.iter().find(|i| i.id == id).cloned())
    }

    async fn list_guest_item_selections(
        &self,
        filter: &SelectionFilter,
    ) -> PotluckResult<Vec<GuestItemRow>> {
        let data = self.read()?;
        Ok(data
            .guest_items
            .iter()
            .filter(|gi| filter.matches(gi))
            .map(|gi| join_row(&data, gi))
            .collect())
    }

    async fn find_guest_item(&self, key: SelectionKey) -> PotluckResult<Option<GuestItemRow>> {
        let data = self.read()?;
        Ok(data
            .guest_items
            .iter()
            .find(|gi| gi.key() == key)
            .map(|gi| join_row(&data, gi)))
    }

    async fn insert_guest_item(&self, guest_item: GuestItem) -> PotluckResult<()> {
        let mut data = self.write()?;
        let key = guest_item.key();

        if data.guest_items.iter().any(|gi| gi.key() == key) {
            return Err(PotluckError::InvalidInput(format!(
                "guest item {}/{}/{} already exists",
                key.event_id, key.guest_id, key.item_id
            )));
        }
        data.check_selection(&guest_item)?;

        data.guest_items.push(guest_item);
        Ok(())
    }

    async fn update_guest_item(&self, guest_item: GuestItem) -> PotluckResult<()> {
        let mut data = self.write()?;
        let key = guest_item.key();

        let index = data
            .guest_items
            .iter()
            .position(|gi| gi.key() == key)
            .ok_or_else(|| {
                PotluckError::not_found(format!(
                    "Guest item {}/{}/{}",
                    key.event_id, key.guest_id, key.item_id
                ))
            })?;
        data.check_selection(&guest_item)?;

        data.guest_items[index] = guest_item;
        Ok(())
    }

    async fn create_item(&self, new_item: NewItem) -> PotluckResult<Item> {
        new_item.validate()?;
        let mut data = self.write()?;

        if !data.events.iter().any(|e| e.id == new_item.event_id) {
            return Err(PotluckError::not_found(format!("Event {}", new_item.event_id)));
        }

        let next_id = data
            .items
            .iter()
            .map(|i| i.id.get())
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or_else(|| PotluckError::Store("item ids exhausted".into()))?;
        let item = new_item.into_item(ItemId(next_id));
        data.items.push(item.clone());

        info!(item_id = %item.id, event_id = %item.event_id, "created item");
        Ok(item)
    }

    async fn update_item(&self, id: ItemId, update: ItemUpdate) -> PotluckResult<Item> {
        let mut data = self.write()?;

        let item = data
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| PotluckError::not_found(format!("Item {}", id)))?;

        // Apply to a copy so a rejected update leaves the stored row intact
        let mut updated = item.clone();
        update.apply(&mut updated)?;
        *item = updated.clone();

        info!(item_id = %id, "updated item");
        Ok(updated)
    }

    async fn delete_item(&self, id: ItemId) -> PotluckResult<()> {
        let mut data = self.write()?;

        let before = data.items.len();
        data.items.retain(|i| i.id != id);
        if data.items.len() == before {
            return Err(PotluckError::not_found(format!("Item {}", id)));
        }

        let selections_before = data.guest_items.len();
        data.guest_items.retain(|gi| gi.item_id != id);

        info!(
            item_id = %id,
            selections_removed = selections_before - data.guest_items.len(),
            "deleted item"
        );
        Ok(())
    }
}
