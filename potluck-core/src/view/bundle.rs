//! Page data bundles.
//!
//! Field names are the ones the page templates read, so several are
//! camelCase or legacy-cased on purpose.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::event::Event;
use crate::guest::{Guest, GuestResponse};
use crate::ids::{EventId, UserId};
use crate::item::{Item, ItemWithSelections};
use crate::report::{EventTimeline, ItemCost, ResponseCounts, SelectionCost};

/// Session flags every signed-in page carries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SessionFields {
    pub logged_in: bool,
    pub user_id: UserId,
}

impl SessionFields {
    pub fn signed_in(user_id: UserId) -> Self {
        SessionFields {
            logged_in: true,
            user_id,
        }
    }
}

/// The event list shown beside most pages.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Sidebar {
    pub events: Vec<Event>,
    #[serde(rename = "nextEvents")]
    pub next_events: Vec<Event>,
}

impl From<EventTimeline> for Sidebar {
    fn from(timeline: EventTimeline) -> Self {
        Sidebar {
            events: timeline.events,
            next_events: timeline.next_events,
        }
    }
}

/// An event with its guests and items.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventDetails {
    #[serde(flatten)]
    pub event: Event,
    pub guests: Vec<Guest>,
    pub items: Vec<Item>,
}

/// An item with the event it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemWithEvent {
    #[serde(flatten)]
    pub item: Item,
    pub event: Event,
}

/// RSVP counts in the shape the event page expects: one entry per state,
/// `null` when no guest is in that state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuestResponseSummary(pub ResponseCounts);

struct ResponseBucket {
    response: GuestResponse,
    count_field: &'static str,
    count: usize,
}

impl Serialize for ResponseBucket {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("response", &self.response)?;
        map.serialize_entry(self.count_field, &self.count)?;
        map.end()
    }
}

impl GuestResponseSummary {
    fn bucket(&self, response: GuestResponse, count_field: &'static str) -> Option<ResponseBucket> {
        let count = self.0.count(response);
        (count > 0).then_some(ResponseBucket {
            response,
            count_field,
            count,
        })
    }
}

impl Serialize for GuestResponseSummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry(
            "guestAccept",
            &self.bucket(GuestResponse::Accepted, "GuestAccepted"),
        )?;
        map.serialize_entry(
            "guestDecline",
            &self.bucket(GuestResponse::Declined, "GuestDecline"),
        )?;
        map.serialize_entry(
            "guestNoResponse",
            &self.bucket(GuestResponse::NoResponse, "GuestNoResp"),
        )?;
        map.end()
    }
}

/// Landing page. Signed-out visitors get only `logged_in: false`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeView {
    pub logged_in: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    #[serde(flatten)]
    pub sidebar: Option<Sidebar>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    #[serde(flatten)]
    pub session: SessionFields,
    #[serde(flatten)]
    pub timeline: EventTimeline,
}

/// Event page: RSVP counts and the total cost of claimed items.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventSummaryView {
    pub event: EventDetails,
    #[serde(flatten)]
    pub session: SessionFields,
    #[serde(rename = "guestResponse")]
    pub guest_response: GuestResponseSummary,
    #[serde(rename = "itemDetails")]
    pub item_details: Vec<SelectionCost>,
    #[serde(flatten)]
    pub sidebar: Sidebar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventDetailView {
    pub event: Event,
    #[serde(flatten)]
    pub session: SessionFields,
    #[serde(flatten)]
    pub sidebar: Sidebar,
}

/// Every guest of an event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuestDetailView {
    pub guests: Vec<Guest>,
    #[serde(flatten)]
    pub session: SessionFields,
    #[serde(rename = "eventId")]
    pub event_id: EventId,
    #[serde(flatten)]
    pub sidebar: Sidebar,
}

/// Editing one guest: the primary guests they may belong to and the items
/// they may claim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuestEditView {
    pub guests: Guest,
    #[serde(flatten)]
    pub session: SessionFields,
    #[serde(rename = "guestList")]
    pub guest_list: Vec<Guest>,
    #[serde(rename = "itemList")]
    pub item_list: Vec<ItemWithSelections>,
    #[serde(flatten)]
    pub sidebar: Sidebar,
}

/// Primary guests of an event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuestListView {
    pub guests: Vec<Guest>,
    #[serde(flatten)]
    pub session: SessionFields,
    #[serde(rename = "eventId")]
    pub event_id: EventId,
    #[serde(flatten)]
    pub sidebar: Sidebar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemListView {
    pub item: Vec<Item>,
    #[serde(flatten)]
    pub session: SessionFields,
    #[serde(rename = "eventId")]
    pub event_id: EventId,
    #[serde(flatten)]
    pub sidebar: Sidebar,
}

/// Items of an event with per-item claimed totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemDetailView {
    pub items: Vec<ItemWithEvent>,
    #[serde(flatten)]
    pub session: SessionFields,
    pub event_id: EventId,
    #[serde(rename = "itemDetails")]
    pub item_details: Vec<ItemCost>,
    #[serde(flatten)]
    pub sidebar: Sidebar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewEventView {
    #[serde(flatten)]
    pub session: SessionFields,
    #[serde(flatten)]
    pub sidebar: Sidebar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemEditView {
    pub items: Item,
    #[serde(flatten)]
    pub session: SessionFields,
    #[serde(flatten)]
    pub sidebar: Sidebar,
}

/// All of a user's events with their guests and items.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventsOverviewView {
    pub events: Vec<EventDetails>,
    pub logged_in: bool,
    #[serde(rename = "nextEvents")]
    pub next_events: Vec<EventDetails>,
}
