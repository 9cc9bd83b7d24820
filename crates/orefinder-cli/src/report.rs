//! JSON search report.

use orefinder_common::{MineralKind, VersionTag};
use orefinder_worldgen::{BiomeTag, QueryResult};
use serde::{Deserialize, Serialize};

/// Planar coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanarCoordinates {
    /// X
    pub x: i32,
    /// Z
    pub z: i32,
}

/// Block coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockCoordinates {
    /// X
    pub x: i32,
    /// Y
    pub y: i32,
    /// Z
    pub z: i32,
}

/// One reported deposit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OreLocation {
    /// Mineral display name
    #[serde(rename = "type")]
    pub kind: MineralKind,
    /// Anchor block
    pub coordinates: BlockCoordinates,
    /// Blocks in the deposit
    pub count: u32,
    /// Biome tag of the anchor
    pub biome: BiomeTag,
}

/// Report printed by `orefinder find`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    /// World seed
    pub seed: i64,
    /// Query point
    pub search_coordinates: PlanarCoordinates,
    /// Version searched
    pub version: VersionTag,
    /// Chunk containing the query point
    pub chunk_coordinates: PlanarCoordinates,
    /// Total ore blocks
    pub total_ores: u64,
    /// Deposits, nearest first
    pub ore_locations: Vec<OreLocation>,
    /// Always true for a produced report
    pub success: bool,
    /// Human-readable summary
    pub message: String,
}

impl From<&QueryResult> for SearchReport {
    fn from(result: &QueryResult) -> Self {
        Self {
            seed: result.seed,
            search_coordinates: PlanarCoordinates {
                x: result.query_x,
                z: result.query_z,
            },
            version: result.version,
            chunk_coordinates: PlanarCoordinates {
                x: result.chunk_coords.x,
                z: result.chunk_coords.z,
            },
            total_ores: result.total_count,
            ore_locations: result
                .deposits
                .iter()
                .map(|d| OreLocation {
                    kind: d.kind,
                    coordinates: BlockCoordinates {
                        x: d.x,
                        y: d.y,
                        z: d.z,
                    },
                    count: d.count,
                    biome: d.biome,
                })
                .collect(),
            success: true,
            message: format!(
                "Found {} ore blocks in Java {}",
                result.total_count, result.version
            ),
        }
    }
}

impl SearchReport {
    /// Serializes the report, indented when `pretty`.
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}
