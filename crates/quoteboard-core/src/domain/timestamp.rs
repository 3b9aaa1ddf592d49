use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::macros::format_description;
use time::PrimitiveDateTime;

use crate::ValidationError;

/// Quote timestamp as delivered by the upstream feed.
///
/// The raw text is kept verbatim for display. The instant is parsed once at
/// construction; text that does not match `YYYY-MM-DD HH:MM:SS` keeps no
/// instant and is treated as unordered by the comparator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuoteTimestamp {
    raw: String,
    instant: Option<PrimitiveDateTime>,
}

impl QuoteTimestamp {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let instant = parse_instant(&raw).ok();
        Self { raw, instant }
    }

    /// Parse strictly, rejecting malformed text.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let instant = parse_instant(input)?;
        Ok(Self {
            raw: input.to_owned(),
            instant: Some(instant),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub const fn instant(&self) -> Option<PrimitiveDateTime> {
        self.instant
    }

    pub const fn is_well_formed(&self) -> bool {
        self.instant.is_some()
    }
}

fn parse_instant(input: &str) -> Result<PrimitiveDateTime, ValidationError> {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    PrimitiveDateTime::parse(input, format).map_err(|_| {
        ValidationError::InvalidTimestamp {
            value: input.to_owned(),
        }
    })
}

impl Display for QuoteTimestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for QuoteTimestamp {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for QuoteTimestamp {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl Serialize for QuoteTimestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for QuoteTimestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self::new)
    }
}
