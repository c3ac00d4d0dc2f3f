//! Typed identifiers for users, events, guests and items.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PotluckError;

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            pub fn get(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = PotluckError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<u64>().map($name).map_err(|_| {
                    PotluckError::InvalidInput(format!("'{}' is not a valid {} id", s, $label))
                })
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                $name(id)
            }
        }
    };
}

id_type!(
    /// Owner of events.
    UserId,
    "user"
);
id_type!(EventId, "event");
id_type!(GuestId, "guest");
id_type!(ItemId, "item");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_trims_whitespace() {
        assert_eq!(" 42 ".parse::<EventId>().unwrap(), EventId(42));
    }

    #[test]
    fn test_parse_malformed_id_is_invalid_input() {
        let err = "abc".parse::<GuestId>().unwrap_err();
        assert!(matches!(err, PotluckError::InvalidInput(_)));
        assert!(err.to_string().contains("guest"));

        assert!("-1".parse::<ItemId>().is_err());
    }
}
