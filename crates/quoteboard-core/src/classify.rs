use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Smallest dataset size classified as [`SizeTier::Large`].
pub const LARGE_THRESHOLD: usize = 100;
/// Smallest dataset size classified as [`SizeTier::VeryLarge`].
pub const VERY_LARGE_THRESHOLD: usize = 200;

/// Size classification of a dataset, derived at view time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeTier {
    None,
    Large,
    VeryLarge,
}

impl SizeTier {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Large => "large",
            Self::VeryLarge => "very_large",
        }
    }

    /// Banner shown above the table, if any.
    pub const fn banner(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Large => Some("Large Stock Portfolio"),
            Self::VeryLarge => Some("Very Large Stock Portfolio"),
        }
    }
}

impl Display for SizeTier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a record count to its tier.
pub const fn classify(size: usize) -> SizeTier {
    if size >= VERY_LARGE_THRESHOLD {
        SizeTier::VeryLarge
    } else if size >= LARGE_THRESHOLD {
        SizeTier::Large
    } else {
        SizeTier::None
    }
}
