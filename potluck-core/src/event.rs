//! Events owned by a user.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{EventId, UserId};

/// A planned occasion with guests and items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub user_id: UserId,
    pub name: String,
    pub event_date: DateTime<Utc>,
    pub location: Option<String>,
}

impl Event {
    /// Whether the event is strictly before `now`. An event happening exactly
    /// at `now` is upcoming.
    pub fn is_past(&self, now: DateTime<Utc>) -> bool {
        self.event_date < now
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
