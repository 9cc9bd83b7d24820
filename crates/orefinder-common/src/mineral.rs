//! Mineral kinds reported by the finder.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::FinderError;

/// A mineral (ore) type.
///
/// Declaration order is the ordering used when deposits are clustered, and it
/// matches the row order of the generation rule tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum MineralKind {
    /// Diamond ore
    Diamond,
    /// Emerald ore
    Emerald,
    /// Gold ore
    Gold,
    /// Iron ore
    Iron,
    /// Coal ore
    Coal,
    /// Redstone ore
    Redstone,
    /// Lapis lazuli ore
    LapisLazuli,
    /// Copper ore
    Copper,
}

impl MineralKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Diamond,
        Self::Emerald,
        Self::Gold,
        Self::Iron,
        Self::Coal,
        Self::Redstone,
        Self::LapisLazuli,
        Self::Copper,
    ];

    /// Human-readable name, e.g. `"Lapis Lazuli"`.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Diamond => "Diamond",
            Self::Emerald => "Emerald",
            Self::Gold => "Gold",
            Self::Iron => "Iron",
            Self::Coal => "Coal",
            Self::Redstone => "Redstone",
            Self::LapisLazuli => "Lapis Lazuli",
            Self::Copper => "Copper",
        }
    }

    /// Snake-case identifier, e.g. `"lapis_lazuli"`.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Diamond => "diamond",
            Self::Emerald => "emerald",
            Self::Gold => "gold",
            Self::Iron => "iron",
            Self::Coal => "coal",
            Self::Redstone => "redstone",
            Self::LapisLazuli => "lapis_lazuli",
            Self::Copper => "copper",
        }
    }

    /// Stable salt for seed mixing: FNV-1a of [`Self::id`].
    #[must_use]
    pub const fn salt(self) -> u64 {
        fnv1a(self.id().as_bytes())
    }
}

const fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u64;
        hash = hash.wrapping_mul(0x0100_0000_01b3);
        i += 1;
    }
    hash
}

impl std::fmt::Display for MineralKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for MineralKind {
    type Err = FinderError;

    /// Case-insensitive; accepts display names, ids, block ids such as
    /// `diamond_ore` or `deepslate_iron_ore`, and the short form `lapis`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '-' => '_',
                c => c.to_ascii_lowercase(),
            })
            .collect();
        let name = normalized.strip_prefix("minecraft:").unwrap_or(&normalized);
        let name = name.strip_prefix("deepslate_").unwrap_or(name);
        let name = name.strip_suffix("_ore").unwrap_or(name);

        if name == "lapis" {
            return Ok(Self::LapisLazuli);
        }
        Self::ALL
            .into_iter()
            .find(|kind| kind.id() == name)
            .ok_or_else(|| FinderError::UnknownMineral(s.to_string()))
    }
}

impl TryFrom<String> for MineralKind {
    type Error = FinderError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MineralKind> for &'static str {
    fn from(kind: MineralKind) -> Self {
        kind.display_name()
    }
}
