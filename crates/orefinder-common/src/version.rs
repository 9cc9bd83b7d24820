//! Supported game versions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::FinderError;

/// A supported Java Edition version line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum VersionTag {
    /// 1.18 (Caves & Cliffs part II)
    V1_18,
    /// 1.19
    V1_19,
    /// 1.20
    V1_20,
    /// 1.21
    V1_21,
}

impl VersionTag {
    /// Every supported version, oldest first.
    pub const ALL: [Self; 4] = [Self::V1_18, Self::V1_19, Self::V1_20, Self::V1_21];

    /// The newest supported version.
    pub const LATEST: Self = Self::V1_21;

    /// Version string, e.g. `"1.20"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V1_18 => "1.18",
            Self::V1_19 => "1.19",
            Self::V1_20 => "1.20",
            Self::V1_21 => "1.21",
        }
    }

    /// Minor version number, used as the version salt when seeding.
    #[must_use]
    pub const fn minor(self) -> u32 {
        match self {
            Self::V1_18 => 18,
            Self::V1_19 => 19,
            Self::V1_20 => 20,
            Self::V1_21 => 21,
        }
    }

    /// Vein-count multiplier relative to the base rule table, in percent.
    #[must_use]
    pub const fn vein_multiplier_percent(self) -> u32 {
        match self {
            Self::V1_18 | Self::V1_19 | Self::V1_20 => 100,
            Self::V1_21 => 120,
        }
    }
}

impl std::fmt::Display for VersionTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VersionTag {
    type Err = FinderError;

    /// Accepts an exact tag (`"1.20"`) or a patch release of it (`"1.20.4"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|version| {
                let tag = version.as_str();
                trimmed == tag
                    || trimmed
                        .strip_prefix(tag)
                        .and_then(|rest| rest.strip_prefix('.'))
                        .is_some_and(|patch| {
                            !patch.is_empty() && patch.chars().all(|c| c.is_ascii_digit())
                        })
            })
            .ok_or_else(|| FinderError::UnsupportedVersion(s.to_string()))
    }
}

impl TryFrom<String> for VersionTag {
    type Error = FinderError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<VersionTag> for &'static str {
    fn from(version: VersionTag) -> Self {
        version.as_str()
    }
}
