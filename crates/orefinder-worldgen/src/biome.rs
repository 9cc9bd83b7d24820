//! Approximate biome tags for placements.
//!
//! This is not biome classification. Each 64×64 block region of a world is
//! assigned one tag by hashing the seed with the region coordinates, which
//! keeps the tag stable for a given `(seed, x, z)` and coherent across
//! neighbouring columns.

use serde::{Deserialize, Serialize};

use crate::rng::{fold_position, mix64};

/// Side length of a biome region, in blocks.
pub const BIOME_REGION_SIZE: i32 = 64;

/// Salt separating biome hashing from ore streams.
const BIOME_SALT: u64 = 0x6269_6f6d_6573; // "biomes"

/// Biome label attached to placements and deposits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiomeTag {
    /// Plains
    Plains,
    /// Forest
    Forest,
    /// Taiga
    Taiga,
    /// Desert
    Desert,
    /// Savanna
    Savanna,
    /// Jungle
    Jungle,
    /// Swamp
    Swamp,
    /// Badlands
    Badlands,
    /// Snowy plains
    SnowyPlains,
    /// Meadow
    Meadow,
    /// Stony peaks
    StonyPeaks,
    /// Dripstone caves
    DripstoneCaves,
    /// Lush caves
    LushCaves,
    /// Deep dark
    DeepDark,
}

impl BiomeTag {
    /// Every tag, in lookup-table order.
    pub const ALL: [Self; 14] = [
        Self::Plains,
        Self::Forest,
        Self::Taiga,
        Self::Desert,
        Self::Savanna,
        Self::Jungle,
        Self::Swamp,
        Self::Badlands,
        Self::SnowyPlains,
        Self::Meadow,
        Self::StonyPeaks,
        Self::DripstoneCaves,
        Self::LushCaves,
        Self::DeepDark,
    ];

    /// Snake-case name, e.g. `"snowy_plains"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Plains => "plains",
            Self::Forest => "forest",
            Self::Taiga => "taiga",
            Self::Desert => "desert",
            Self::Savanna => "savanna",
            Self::Jungle => "jungle",
            Self::Swamp => "swamp",
            Self::Badlands => "badlands",
            Self::SnowyPlains => "snowy_plains",
            Self::Meadow => "meadow",
            Self::StonyPeaks => "stony_peaks",
            Self::DripstoneCaves => "dripstone_caves",
            Self::LushCaves => "lush_caves",
            Self::DeepDark => "deep_dark",
        }
    }
}

impl std::fmt::Display for BiomeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Biome tag for the block column at `(x, z)` in the world of `seed`.
#[must_use]
pub fn biome_at(seed: i64, x: i32, z: i32) -> BiomeTag {
    let region_x = x.div_euclid(BIOME_REGION_SIZE);
    let region_z = z.div_euclid(BIOME_REGION_SIZE);
    let hash = mix64(fold_position(seed, region_x, region_z, BIOME_SALT));
    BiomeTag::ALL[(hash % BiomeTag::ALL.len() as u64) as usize]
}
