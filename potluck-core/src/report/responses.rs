use serde::Serialize;
use tracing::debug;

use crate::error::{PotluckError, PotluckResult};
use crate::guest::{Guest, GuestResponse, GuestType};
use crate::ids::EventId;
use crate::store::{EventStore, GuestFilter};

/// Guests of one event counted by RSVP state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ResponseCounts {
    pub accepted: usize,
    pub declined: usize,
    pub no_response: usize,
}

impl ResponseCounts {
    pub fn tally<'a, I>(guests: I) -> Self
    where
        I: IntoIterator<Item = &'a Guest>,
    {
        let mut counts = ResponseCounts::default();
        for guest in guests {
            counts.record(guest.response);
        }
        counts
    }

    pub fn record(&mut self, response: GuestResponse) {
        match response {
            GuestResponse::Accepted => self.accepted += 1,
            GuestResponse::Declined => self.declined += 1,
            GuestResponse::NoResponse => self.no_response += 1,
        }
    }

    pub fn count(&self, response: GuestResponse) -> usize {
        match response {
            GuestResponse::Accepted => self.accepted,
            GuestResponse::Declined => self.declined,
            GuestResponse::NoResponse => self.no_response,
        }
    }

    pub fn total(&self) -> usize {
        self.accepted + self.declined + self.no_response
    }
}

/// Count the RSVP states of an event's guests, optionally only one guest type.
pub async fn guest_responses<S: EventStore>(
    store: &S,
    event_id: EventId,
    guest_type: Option<GuestType>,
) -> PotluckResult<ResponseCounts> {
    if store.find_event(event_id).await?.is_none() {
        return Err(PotluckError::not_found(format!("Event {}", event_id)));
    }

    let guests = store
        .list_guests(&GuestFilter {
            event_id,
            guest_type,
        })
        .await?;
    let counts = ResponseCounts::tally(&guests);

    debug!(
        event_id = %event_id,
        accepted = counts.accepted,
        declined = counts.declined,
        no_response = counts.no_response,
        "tallied guest responses"
    );
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{self, PICNIC};

    fn guests_with(responses: &[Option<bool>]) -> Vec<Guest> {
        responses
            .iter()
            .enumerate()
            .map(|(i, r)| {
                fixtures::guest(i as u64, PICNIC, "g", GuestType::Primary, GuestResponse::from(*r))
            })
            .collect()
    }

    #[test]
    fn test_tally_mixed_responses() {
        let guests = guests_with(&[Some(true), Some(false), None, Some(true)]);
        let counts = ResponseCounts::tally(&guests);

        assert_eq!(
            counts,
            ResponseCounts {
                accepted: 2,
                declined: 1,
                no_response: 1,
            }
        );
    }

    #[test]
    fn test_counts_sum_to_guest_total() {
        let cases: [&[Option<bool>]; 4] = [
            &[],
            &[None, None, None],
            &[Some(true); 5],
            &[Some(false), None, Some(true), Some(false), None, None, Some(true)],
        ];

        for responses in cases {
            let guests = guests_with(responses);
            let counts = ResponseCounts::tally(&guests);
            assert_eq!(counts.total(), guests.len());
        }
    }

    #[test]
    fn test_count_by_response() {
        let counts = ResponseCounts::tally(&guests_with(&[None, None, Some(false)]));
        assert_eq!(counts.count(GuestResponse::NoResponse), 2);
        assert_eq!(counts.count(GuestResponse::Declined), 1);
        assert_eq!(counts.count(GuestResponse::Accepted), 0);
    }

    #[tokio::test]
    async fn test_guest_responses_for_event() {
        let store = fixtures::store();

        let all = guest_responses(&store, PICNIC, None).await.unwrap();
        assert_eq!((all.accepted, all.declined, all.no_response), (2, 1, 1));

        let primary = guest_responses(&store, PICNIC, Some(GuestType::Primary)).await.unwrap();
        assert_eq!((primary.accepted, primary.declined, primary.no_response), (2, 1, 0));
    }

    #[tokio::test]
    async fn test_event_without_guests_counts_zero() {
        let store = fixtures::store();
        let counts = guest_responses(&store, fixtures::GALA, None).await.unwrap();
        assert_eq!(counts, ResponseCounts::default());
    }

    #[tokio::test]
    async fn test_unknown_event_is_not_found() {
        let store = fixtures::store();
        let err = guest_responses(&store, EventId(404), None).await.unwrap_err();
        assert!(matches!(err, PotluckError::NotFound(_)));
    }
}
