use std::fmt;

use serde::Serialize;

use crate::error::PotluckResult;
use crate::guest_item::SelectionKey;
use crate::store::EventStore;

/// Whether a selection row exists for a triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Lookup {
    Found,
    Unfound,
}

impl From<bool> for Lookup {
    fn from(exists: bool) -> Self {
        if exists { Lookup::Found } else { Lookup::Unfound }
    }
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookup::Found => write!(f, "FOUND"),
            Lookup::Unfound => write!(f, "UNFOUND"),
        }
    }
}

/// Ask the store whether the triple has a selection row. Always goes to the
/// store; call it immediately before the write it decides.
pub async fn selection_exists<S: EventStore>(store: &S, key: SelectionKey) -> PotluckResult<bool> {
    Ok(store.find_guest_item(key).await?.is_some())
}

pub async fn lookup_selection<S: EventStore>(store: &S, key: SelectionKey) -> PotluckResult<Lookup> {
    selection_exists(store, key).await.map(Lookup::from)
}
