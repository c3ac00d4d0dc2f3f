//! Fetch-and-compose loaders, one per page.

use chrono::{DateTime, Utc};

use crate::error::{PotluckError, PotluckResult};
use crate::event::Event;
use crate::ids::{EventId, GuestId, ItemId, UserId};
use crate::report::{
    event_timeline, guest_responses, item_costs, partition_by_date, selection_costs,
};
use crate::store::{EventFilter, EventStore, GuestFilter};
use crate::view::bundle::*;

/// Who is looking, and when.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewContext {
    pub user_id: UserId,
    pub now: DateTime<Utc>,
}

impl ViewContext {
    pub fn new(user_id: UserId, now: DateTime<Utc>) -> Self {
        ViewContext { user_id, now }
    }

    fn session(&self) -> SessionFields {
        SessionFields::signed_in(self.user_id)
    }

    async fn sidebar<S: EventStore>(&self, store: &S) -> PotluckResult<Sidebar> {
        Ok(event_timeline(store, self.user_id, self.now).await?.into())
    }
}

async fn require_event<S: EventStore>(store: &S, id: EventId) -> PotluckResult<Event> {
    store
        .find_event(id)
        .await?
        .ok_or_else(|| PotluckError::not_found(format!("Event {}", id)))
}

async fn event_details<S: EventStore>(store: &S, event: Event) -> PotluckResult<EventDetails> {
    let guests = store.list_guests(&GuestFilter::for_event(event.id)).await?;
    let items = store.list_items(event.id).await?;
    Ok(EventDetails {
        event,
        guests,
        items,
    })
}

pub async fn home<S: EventStore>(
    store: &S,
    user_id: Option<UserId>,
    now: DateTime<Utc>,
) -> PotluckResult<HomeView> {
    let Some(user_id) = user_id else {
        return Ok(HomeView {
            logged_in: false,
            user_id: None,
            sidebar: None,
        });
    };

    let sidebar = ViewContext::new(user_id, now).sidebar(store).await?;
    Ok(HomeView {
        logged_in: true,
        user_id: Some(user_id),
        sidebar: Some(sidebar),
    })
}

pub async fn dashboard<S: EventStore>(store: &S, ctx: &ViewContext) -> PotluckResult<DashboardView> {
    Ok(DashboardView {
        session: ctx.session(),
        timeline: event_timeline(store, ctx.user_id, ctx.now).await?,
    })
}

pub async fn event_summary<S: EventStore>(
    store: &S,
    ctx: &ViewContext,
    event_id: EventId,
) -> PotluckResult<EventSummaryView> {
    let event = require_event(store, event_id).await?;
    let details = event_details(store, event).await?;
    let responses = guest_responses(store, event_id, None).await?;
    let item_details = selection_costs(store, event_id).await?;

    Ok(EventSummaryView {
        event: details,
        session: ctx.session(),
        guest_response: GuestResponseSummary(responses),
        item_details,
        sidebar: ctx.sidebar(store).await?,
    })
}

pub async fn event_detail<S: EventStore>(
    store: &S,
    ctx: &ViewContext,
    event_id: EventId,
) -> PotluckResult<EventDetailView> {
    Ok(EventDetailView {
        event: require_event(store, event_id).await?,
        session: ctx.session(),
        sidebar: ctx.sidebar(store).await?,
    })
}

pub async fn guest_detail<S: EventStore>(
    store: &S,
    ctx: &ViewContext,
    event_id: EventId,
) -> PotluckResult<GuestDetailView> {
    require_event(store, event_id).await?;

    Ok(GuestDetailView {
        guests: store.list_guests(&GuestFilter::for_event(event_id)).await?,
        session: ctx.session(),
        event_id,
        sidebar: ctx.sidebar(store).await?,
    })
}

pub async fn guest_edit<S: EventStore>(
    store: &S,
    ctx: &ViewContext,
    guest_id: GuestId,
) -> PotluckResult<GuestEditView> {
    let guest = store
        .find_guest(guest_id)
        .await?
        .ok_or_else(|| PotluckError::not_found(format!("Guest {}", guest_id)))?;

    let guest_list = store.list_guests(&GuestFilter::primary(guest.event_id)).await?;
    let item_list = store.list_items_with_selections(guest.event_id).await?;

    Ok(GuestEditView {
        guests: guest,
        session: ctx.session(),
        guest_list,
        item_list,
        sidebar: ctx.sidebar(store).await?,
    })
}

pub async fn guest_list<S: EventStore>(
    store: &S,
    ctx: &ViewContext,
    event_id: EventId,
) -> PotluckResult<GuestListView> {
    require_event(store, event_id).await?;

    Ok(GuestListView {
        guests: store.list_guests(&GuestFilter::primary(event_id)).await?,
        session: ctx.session(),
        event_id,
        sidebar: ctx.sidebar(store).await?,
    })
}

pub async fn item_list<S: EventStore>(
    store: &S,
    ctx: &ViewContext,
    event_id: EventId,
) -> PotluckResult<ItemListView> {
    require_event(store, event_id).await?;

    Ok(ItemListView {
        item: store.list_items(event_id).await?,
        session: ctx.session(),
        event_id,
        sidebar: ctx.sidebar(store).await?,
    })
}

pub async fn item_detail<S: EventStore>(
    store: &S,
    ctx: &ViewContext,
    event_id: EventId,
) -> PotluckResult<ItemDetailView> {
    let event = require_event(store, event_id).await?;

    let items = store
        .list_items(event_id)
        .await?
        .into_iter()
        .map(|item| ItemWithEvent {
            item,
            event: event.clone(),
        })
        .collect();

    Ok(ItemDetailView {
        items,
        session: ctx.session(),
        event_id,
        item_details: item_costs(store, event_id).await?,
        sidebar: ctx.sidebar(store).await?,
    })
}

pub async fn new_event<S: EventStore>(store: &S, ctx: &ViewContext) -> PotluckResult<NewEventView> {
    Ok(NewEventView {
        session: ctx.session(),
        sidebar: ctx.sidebar(store).await?,
    })
}

pub async fn item_edit<S: EventStore>(
    store: &S,
    ctx: &ViewContext,
    item_id: ItemId,
) -> PotluckResult<ItemEditView> {
    let item = store
        .find_item(item_id)
        .await?
        .ok_or_else(|| PotluckError::not_found(format!("Item {}", item_id)))?;

    Ok(ItemEditView {
        items: item,
        session: ctx.session(),
        sidebar: ctx.sidebar(store).await?,
    })
}

pub async fn events_overview<S: EventStore>(
    store: &S,
    ctx: &ViewContext,
) -> PotluckResult<EventsOverviewView> {
    let events = store.list_events(&EventFilter::owned_by(ctx.user_id)).await?;

    let mut details = Vec::with_capacity(events.len());
    for event in events {
        details.push(event_details(store, event).await?);
    }

    let (events, _, next_events) =
        partition_by_date(details, |d: &EventDetails| d.event.event_date, ctx.now);

    Ok(EventsOverviewView {
        events,
        logged_in: true,
        next_events,
    })
}
