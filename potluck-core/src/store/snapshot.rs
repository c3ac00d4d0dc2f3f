//! TOML snapshot of a store's contents.

use std::collections::HashSet;
use std::hash::Hash;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PotluckError, PotluckResult};
use crate::event::Event;
use crate::guest::Guest;
use crate::guest_item::GuestItem;
use crate::item::Item;

/// All rows of a store, as written to `potluck.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub guests: Vec<Guest>,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub guest_items: Vec<GuestItem>,
}

impl Snapshot {
    /// Load and validate a snapshot. A missing file is an empty snapshot.
    pub fn load(path: &Path) -> PotluckResult<Self> {
        if !path.exists() {
            return Ok(Snapshot::default());
        }

        let content = std::fs::read_to_string(path)?;
        let snapshot = Self::from_toml(&content)
            .map_err(|e| PotluckError::Snapshot(format!("{}: {}", path.display(), e)))?;
        Ok(snapshot)
    }

    pub fn from_toml(content: &str) -> PotluckResult<Self> {
        let snapshot: Snapshot =
            toml::from_str(content).map_err(|e| PotluckError::Snapshot(e.to_string()))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Write the snapshot through a temporary file so readers never see a
    /// partial write.
    pub fn save(&self, path: &Path) -> PotluckResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| PotluckError::Snapshot(e.to_string()))?;

        let temp = path.with_extension("toml.tmp");
        std::fs::write(&temp, content)?;
        std::fs::rename(&temp, path)?;
        Ok(())
    }

    /// Check the uniqueness and reference rules a database would enforce.
    pub fn validate(&self) -> PotluckResult<()> {
        let event_ids = unique("event", self.events.iter().map(|e| e.id))?;
        unique("guest", self.guests.iter().map(|g| g.id))?;
        unique("item", self.items.iter().map(|i| i.id))?;
        unique("guest item", self.guest_items.iter().map(|gi| gi.key()))?;

        for guest in &self.guests {
            if !event_ids.contains(&guest.event_id) {
                return Err(dangling("guest", guest.id, "event", guest.event_id));
            }
        }
        for item in &self.items {
            if !event_ids.contains(&item.event_id) {
                return Err(dangling("item", item.id, "event", item.event_id));
            }
        }
        for gi in &self.guest_items {
            self.check_selection(gi)?;
        }

        Ok(())
    }

    /// A selection must reference an existing event, and a guest and item
    /// of that same event.
    pub fn check_selection(&self, gi: &GuestItem) -> PotluckResult<()> {
        let key = format!("{}/{}/{}", gi.event_id, gi.guest_id, gi.item_id);

        if !self.events.iter().any(|e| e.id == gi.event_id) {
            return Err(dangling("guest item", &key, "event", gi.event_id));
        }

        let guest = self
            .guests
            .iter()
            .find(|g| g.id == gi.guest_id)
            .ok_or_else(|| dangling("guest item", &key, "guest", gi.guest_id))?;
        if guest.event_id != gi.event_id {
            return Err(PotluckError::InvalidInput(format!(
                "guest item {} is for event {} but guest {} belongs to event {}",
                key, gi.event_id, guest.id, guest.event_id
            )));
        }

        let item = self
            .items
            .iter()
            .find(|i| i.id == gi.item_id)
            .ok_or_else(|| dangling("guest item", &key, "item", gi.item_id))?;
        if item.event_id != gi.event_id {
            return Err(PotluckError::InvalidInput(format!(
                "guest item {} is for event {} but item {} belongs to event {}",
                key, gi.event_id, item.id, item.event_id
            )));
        }

        Ok(())
    }
}

fn unique<T, I>(label: &str, ids: I) -> PotluckResult<HashSet<T>>
where
    T: Eq + Hash + std::fmt::Debug,
    I: Iterator<Item = T>,
{
    let mut seen = HashSet::new();
    for id in ids {
        if let Some(dup) = seen.replace(id) {
            return Err(PotluckError::InvalidInput(format!(
                "duplicate {} {:?}",
                label, dup
            )));
        }
    }
    Ok(seen)
}

fn dangling(
    what: &str,
    id: impl std::fmt::Display,
    target: &str,
    target_id: impl std::fmt::Display,
) -> PotluckError {
    PotluckError::InvalidInput(format!(
        "{} {} references missing {} {}",
        what, id, target, target_id
    ))
}
