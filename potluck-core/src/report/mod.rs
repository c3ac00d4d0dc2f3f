//! Aggregations over events, guests, items and selections.
//!
//! The pure functions here take rows already fetched for one request. Each
//! has an async companion that fetches from an [`EventStore`](crate::store::EventStore)
//! and then aggregates.

mod costs;
mod lookup;
mod responses;
mod timeline;

pub use costs::{
    ClaimedCosts, ItemCost, SelectionCost, claimed_costs, cost_by_item, cost_by_selection, item_costs,
    selection_costs, total_cost,
};
pub use lookup::{Lookup, lookup_selection, selection_exists};
pub use responses::{ResponseCounts, guest_responses};
pub use timeline::{EventTimeline, event_timeline, partition_by_date, partition_events};
