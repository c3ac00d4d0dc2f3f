//! Shared test data.

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::event::Event;
use crate::guest::{Guest, GuestResponse, GuestType};
use crate::guest_item::GuestItem;
use crate::ids::{EventId, GuestId, ItemId, UserId};
use crate::item::Item;
use crate::store::{MemoryStore, Snapshot};

pub const OWNER: UserId = UserId(7);
pub const STRANGER: UserId = UserId(8);

pub const PICNIC: EventId = EventId(1);
pub const BRUNCH: EventId = EventId(2);
pub const GALA: EventId = EventId(3);
pub const STRANGER_PARTY: EventId = EventId(4);

pub const SALAD: ItemId = ItemId(1);
pub const CAKE: ItemId = ItemId(2);
pub const NAPKINS: ItemId = ItemId(3);

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap()
}

pub fn event(id: EventId, user_id: UserId, name: &str, event_date: DateTime<Utc>) -> Event {
    Event {
        id,
        user_id,
        name: name.to_string(),
        event_date,
        location: None,
    }
}

pub fn guest(id: u64, event_id: EventId, name: &str, guest_type: GuestType, response: GuestResponse) -> Guest {
    Guest {
        id: GuestId(id),
        event_id,
        name: name.to_string(),
        guest_type,
        response,
    }
}

pub fn item(id: ItemId, event_id: EventId, name: &str, quantity: &str, cost: &str) -> Item {
    Item {
        id,
        event_id,
        category: "Food".to_string(),
        name: name.to_string(),
        quantity: quantity.parse().unwrap(),
        qty_uom: "each".to_string(),
        cost_perunit: cost.parse().unwrap(),
    }
}

pub fn guest_item(event_id: EventId, guest_id: u64, item_id: ItemId, selected: bool) -> GuestItem {
    GuestItem {
        event_id,
        guest_id: GuestId(guest_id),
        item_id,
        selected,
    }
}

/// Picnic (upcoming) with four guests and three items, a past brunch,
/// a gala exactly at `now()`, and one event owned by someone else.
pub fn snapshot() -> Snapshot {
    let now = now();

    Snapshot {
        events: vec![
            event(PICNIC, OWNER, "Summer picnic", now + Duration::days(33)),
            event(BRUNCH, OWNER, "Spring brunch", now - Duration::days(78)),
            event(GALA, OWNER, "Midday gala", now),
            event(STRANGER_PARTY, STRANGER, "Someone else's party", now + Duration::days(3)),
        ],
        guests: vec![
            guest(1, PICNIC, "Ada", GuestType::Primary, GuestResponse::Accepted),
            guest(2, PICNIC, "Grace", GuestType::Primary, GuestResponse::Declined),
            guest(3, PICNIC, "Alan", GuestType::Other, GuestResponse::NoResponse),
            guest(4, PICNIC, "Linus", GuestType::Primary, GuestResponse::Accepted),
            guest(5, BRUNCH, "Barbara", GuestType::Primary, GuestResponse::Accepted),
        ],
        items: vec![
            item(SALAD, PICNIC, "Potato salad", "2", "3.50"),
            item(CAKE, PICNIC, "Cake", "1", "10.00"),
            item(NAPKINS, PICNIC, "Napkins", "1", "0.99"),
        ],
        guest_items: vec![
            guest_item(PICNIC, 1, SALAD, true),
            guest_item(PICNIC, 4, CAKE, true),
            guest_item(PICNIC, 4, SALAD, true),
            guest_item(PICNIC, 2, NAPKINS, false),
        ],
    }
}

pub fn store() -> MemoryStore {
    MemoryStore::new(snapshot())
}
