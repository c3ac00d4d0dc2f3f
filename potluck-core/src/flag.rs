//! Legacy boolean columns arrive as either `true`/`false` or `1`/`0`.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFlag {
    Bool(bool),
    Int(i64),
}

impl RawFlag {
    fn into_bool<E: serde::de::Error>(self) -> Result<bool, E> {
        match self {
            RawFlag::Bool(b) => Ok(b),
            RawFlag::Int(1) => Ok(true),
            RawFlag::Int(0) => Ok(false),
            RawFlag::Int(n) => Err(E::custom(format!("expected 0 or 1, got {}", n))),
        }
    }
}

pub(crate) fn deserialize_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    RawFlag::deserialize(deserializer)?.into_bool()
}

pub(crate) fn deserialize_optional_flag<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<bool>, D::Error> {
    Option::<RawFlag>::deserialize(deserializer)?
        .map(RawFlag::into_bool)
        .transpose()
}
