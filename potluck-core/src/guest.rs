//! Guests and their RSVP state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::PotluckError;
use crate::flag::deserialize_optional_flag;
use crate::ids::{EventId, GuestId};

/// An invitee to an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guest {
    pub id: GuestId,
    pub event_id: EventId,
    pub name: String,
    pub guest_type: GuestType,
    #[serde(default)]
    pub response: GuestResponse,
}

/// Whether a guest was invited directly or came along with one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuestType {
    Primary,
    Other,
}

impl FromStr for GuestType {
    type Err = PotluckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "primary" => Ok(GuestType::Primary),
            "other" => Ok(GuestType::Other),
            _ => Err(PotluckError::InvalidInput(format!(
                "'{}' is not a guest type (expected Primary or Other)",
                s
            ))),
        }
    }
}

/// RSVP reply state.
///
/// Stored and presented as the legacy nullable flag: `true` accepted,
/// `false` declined, `null` (or absent) not yet answered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GuestResponse {
    Accepted,
    Declined,
    #[default]
    NoResponse,
}

impl GuestResponse {
    pub fn as_flag(self) -> Option<bool> {
        match self {
            GuestResponse::Accepted => Some(true),
            GuestResponse::Declined => Some(false),
            GuestResponse::NoResponse => None,
        }
    }
}

impl From<Option<bool>> for GuestResponse {
    fn from(flag: Option<bool>) -> Self {
        match flag {
            Some(true) => GuestResponse::Accepted,
            Some(false) => GuestResponse::Declined,
            None => GuestResponse::NoResponse,
        }
    }
}

impl fmt::Display for GuestResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuestResponse::Accepted => write!(f, "accepted"),
            GuestResponse::Declined => write!(f, "declined"),
            GuestResponse::NoResponse => write!(f, "no response"),
        }
    }
}

impl Serialize for GuestResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_flag().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GuestResponse {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_optional_flag(deserializer).map(GuestResponse::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_wire_format() {
        let accepted: GuestResponse = serde_json::from_str("1").unwrap();
        let declined: GuestResponse = serde_json::from_str("false").unwrap();
        let pending: GuestResponse = serde_json::from_str("null").unwrap();

        assert_eq!(accepted, GuestResponse::Accepted);
        assert_eq!(declined, GuestResponse::Declined);
        assert_eq!(pending, GuestResponse::NoResponse);

        assert_eq!(serde_json::to_string(&accepted).unwrap(), "true");
        assert_eq!(serde_json::to_string(&pending).unwrap(), "null");
        assert!(serde_json::from_str::<GuestResponse>("2").is_err());
    }

    #[test]
    fn test_missing_response_is_no_response() {
        let guest: Guest = serde_json::from_str(
            r#"{"id": 1, "event_id": 2, "name": "Ada", "guest_type": "Primary"}"#,
        )
        .unwrap();
        assert_eq!(guest.response, GuestResponse::NoResponse);
    }

    #[test]
    fn test_parse_guest_type() {
        assert_eq!("primary".parse::<GuestType>().unwrap(), GuestType::Primary);
        assert_eq!("Other".parse::<GuestType>().unwrap(), GuestType::Other);
        assert!("vip".parse::<GuestType>().is_err());
    }
}
