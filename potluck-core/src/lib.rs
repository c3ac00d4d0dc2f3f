//! Core types and reporting for potluck event planning.
//!
//! This crate provides:
//! - `Event`, `Guest`, `Item` and `GuestItem` records with typed ids
//! - fixed-point `Money` and `Quantity` for cost arithmetic
//! - the `EventStore` data-access trait and an in-memory implementation
//! - `report` aggregations (event timeline, RSVP counts, item costs, lookups)
//! - `view` bundles composing those reports for each page

pub mod error;
pub mod event;
mod flag;
pub mod guest;
pub mod guest_item;
pub mod ids;
pub mod item;
pub mod money;
pub mod potluck_config;
pub mod report;
pub mod selection;
pub mod store;
pub mod view;

#[cfg(test)]
mod fixtures;

pub use error::{PotluckError, PotluckResult};
pub use event::Event;
pub use guest::{Guest, GuestResponse, GuestType};
pub use guest_item::{GuestItem, GuestItemRow, SelectionKey};
pub use ids::{EventId, GuestId, ItemId, UserId};
pub use item::{Item, ItemUpdate, ItemWithSelections, NewItem};
pub use money::{ExtendedCost, Money, Quantity};
