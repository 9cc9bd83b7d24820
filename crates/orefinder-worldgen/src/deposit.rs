//! Placement, deposit, and query result records.

use orefinder_common::{BlockPos, ChunkCoord, ColumnPos, MineralKind, VersionTag};
use serde::{Deserialize, Serialize};

use crate::biome::BiomeTag;

/// One generated ore block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    /// Mineral of the block
    pub kind: MineralKind,
    /// X coordinate
    pub x: i32,
    /// Y coordinate
    pub y: i32,
    /// Z coordinate
    pub z: i32,
    /// Approximate biome of the column
    pub biome: BiomeTag,
}

impl Placement {
    /// Block position.
    #[must_use]
    pub const fn pos(&self) -> BlockPos {
        BlockPos::new(self.x, self.y, self.z)
    }

    /// Column position.
    #[must_use]
    pub const fn column(&self) -> ColumnPos {
        ColumnPos::new(self.x, self.z)
    }
}

/// A cluster of adjacent same-kind placements, reported as one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AggregatedDeposit {
    /// Mineral of the cluster
    pub kind: MineralKind,
    /// Anchor (first member) X
    pub x: i32,
    /// Anchor Y
    pub y: i32,
    /// Anchor Z
    pub z: i32,
    /// Number of blocks in the cluster, at least 1
    pub count: u32,
    /// Biome of the anchor
    pub biome: BiomeTag,
}

impl AggregatedDeposit {
    /// Anchor block position.
    #[must_use]
    pub const fn pos(&self) -> BlockPos {
        BlockPos::new(self.x, self.y, self.z)
    }

    /// Anchor column position.
    #[must_use]
    pub const fn column(&self) -> ColumnPos {
        ColumnPos::new(self.x, self.z)
    }
}

/// Answer to one deposit query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult {
    /// World seed
    pub seed: i64,
    /// Query X in blocks
    pub query_x: i32,
    /// Query Z in blocks
    pub query_z: i32,
    /// Version the deposits were generated for
    pub version: VersionTag,
    /// Chunk containing the query point
    pub chunk_coords: ChunkCoord,
    /// Deposits, nearest anchor first
    pub deposits: Vec<AggregatedDeposit>,
    /// Sum of every deposit's `count`
    pub total_count: u64,
}

impl QueryResult {
    /// Builds a result, deriving `chunk_coords` and `total_count`.
    #[must_use]
    pub fn new(
        seed: i64,
        query: ColumnPos,
        version: VersionTag,
        deposits: Vec<AggregatedDeposit>,
    ) -> Self {
        let total_count = deposits.iter().map(|d| u64::from(d.count)).sum();
        Self {
            seed,
            query_x: query.x,
            query_z: query.z,
            version,
            chunk_coords: query.chunk(),
            deposits,
            total_count,
        }
    }

    /// The query point.
    #[must_use]
    pub const fn query(&self) -> ColumnPos {
        ColumnPos::new(self.query_x, self.query_z)
    }

    /// True when no deposit was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deposits.is_empty()
    }

    /// Deposits of one kind, in result order.
    pub fn deposits_of(&self, kind: MineralKind) -> impl Iterator<Item = &AggregatedDeposit> {
        self.deposits.iter().filter(move |d| d.kind == kind)
    }
}
