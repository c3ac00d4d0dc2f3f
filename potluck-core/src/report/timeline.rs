use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::error::PotluckResult;
use crate::event::Event;
use crate::ids::UserId;
use crate::store::{EventFilter, EventStore};

/// A user's events in date order, split around a point in time.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTimeline {
    /// Every event, ascending by date.
    pub events: Vec<Event>,
    /// Events strictly before `now`, ascending.
    pub past_events: Vec<Event>,
    /// Events at or after `now`, ascending.
    pub next_events: Vec<Event>,
}

/// Sort `rows` by the date `date_of` reads from them and split them around
/// `now`. Returns `(all, past, next)`, each ascending. Rows on the same
/// instant keep their input order; a row exactly at `now` is in `next`.
pub fn partition_by_date<T, F>(mut rows: Vec<T>, date_of: F, now: DateTime<Utc>) -> (Vec<T>, Vec<T>, Vec<T>)
where
    T: Clone,
    F: Fn(&T) -> DateTime<Utc>,
{
    rows.sort_by_key(|row| date_of(row));
    let (past, next): (Vec<T>, Vec<T>) = rows.iter().cloned().partition(|row| date_of(row) < now);
    (rows, past, next)
}

pub fn partition_events(events: Vec<Event>, now: DateTime<Utc>) -> EventTimeline {
    let (events, past_events, next_events) = partition_by_date(events, |e: &Event| e.event_date, now);

    EventTimeline {
        events,
        past_events,
        next_events,
    }
}

/// Fetch and partition the events owned by `owner`.
pub async fn event_timeline<S: EventStore>(
    store: &S,
    owner: UserId,
    now: DateTime<Utc>,
) -> PotluckResult<EventTimeline> {
    let events = store.list_events(&EventFilter::owned_by(owner)).await?;
    let timeline = partition_events(events, now);

    debug!(
        user_id = %owner,
        past = timeline.past_events.len(),
        next = timeline.next_events.len(),
        "partitioned events"
    );
    Ok(timeline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{self, OWNER};
    use crate::ids::EventId;
    use chrono::Duration;

    fn ids(events: &[Event]) -> Vec<u64> {
        events.iter().map(|e| e.id.get()).collect()
    }

    #[test]
    fn test_now_is_upcoming() {
        let now = fixtures::now();
        let events = vec![
            fixtures::event(EventId(1), OWNER, "tomorrow", now + Duration::days(1)),
            fixtures::event(EventId(2), OWNER, "yesterday", now - Duration::days(1)),
            fixtures::event(EventId(3), OWNER, "now", now),
        ];

        let timeline = partition_events(events, now);

        assert_eq!(ids(&timeline.past_events), vec![2]);
        assert_eq!(ids(&timeline.next_events), vec![3, 1]);
        assert_eq!(ids(&timeline.events), vec![2, 3, 1]);
    }

    #[test]
    fn test_partition_is_complete_and_sorted() {
        let now = fixtures::now();
        let offsets = [5, -3, 0, 12, -40, 1, -1, 0, 7, -3];
        let events: Vec<Event> = offsets
            .iter()
            .enumerate()
            .map(|(i, days)| {
                fixtures::event(EventId(i as u64), OWNER, "e", now + Duration::days(*days))
            })
            .collect();

        let timeline = partition_events(events.clone(), now);

        assert_eq!(
            timeline.past_events.len() + timeline.next_events.len(),
            events.len()
        );
        for event in &events {
            let in_past = timeline.past_events.contains(event);
            let in_next = timeline.next_events.contains(event);
            assert!(in_past ^ in_next, "{} must be in exactly one set", event.id);
        }
        for set in [&timeline.events, &timeline.past_events, &timeline.next_events] {
            assert!(set.windows(2).all(|w| w[0].event_date <= w[1].event_date));
        }
        assert!(timeline.past_events.iter().all(|e| e.event_date < now));
        assert!(timeline.next_events.iter().all(|e| e.event_date >= now));
    }

    #[test]
    fn test_equal_dates_keep_input_order() {
        let when = fixtures::now() + Duration::days(2);
        let events = vec![
            fixtures::event(EventId(9), OWNER, "first", when),
            fixtures::event(EventId(4), OWNER, "second", when),
            fixtures::event(EventId(6), OWNER, "earlier", when - Duration::hours(1)),
            fixtures::event(EventId(1), OWNER, "third", when),
        ];

        let timeline = partition_events(events, fixtures::now());
        assert_eq!(ids(&timeline.next_events), vec![6, 9, 4, 1]);
    }

    #[test]
    fn test_empty_input() {
        let timeline = partition_events(Vec::new(), fixtures::now());
        assert_eq!(timeline, EventTimeline::default());
    }

    #[test]
    fn test_serialized_field_names() {
        let timeline = partition_events(Vec::new(), fixtures::now());
        let json = serde_json::to_value(&timeline).unwrap();

        assert!(json.get("events").is_some());
        assert!(json.get("pastEvents").is_some());
        assert!(json.get("nextEvents").is_some());
    }

    #[tokio::test]
    async fn test_timeline_only_includes_owner_events() {
        let store = fixtures::store();
        let timeline = event_timeline(&store, OWNER, fixtures::now()).await.unwrap();

        assert_eq!(ids(&timeline.past_events), vec![fixtures::BRUNCH.get()]);
        assert_eq!(
            ids(&timeline.next_events),
            vec![fixtures::GALA.get(), fixtures::PICNIC.get()]
        );
    }
}
