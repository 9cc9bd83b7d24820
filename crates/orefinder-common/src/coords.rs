//! Coordinate types for block columns, blocks, and chunks.

use serde::{Deserialize, Serialize};

/// Width of a chunk along X and Z, in blocks.
pub const CHUNK_SIZE: i32 = 16;

/// Horizontal world position of a block column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnPos {
    /// X coordinate in blocks
    pub x: i32,
    /// Z coordinate in blocks
    pub z: i32,
}

impl ColumnPos {
    /// Creates a new column position.
    #[must_use]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Chunk containing this column (floor division, so `-1` lands in chunk `-1`).
    #[must_use]
    pub const fn chunk(self) -> ChunkCoord {
        ChunkCoord {
            x: self.x.div_euclid(CHUNK_SIZE),
            z: self.z.div_euclid(CHUNK_SIZE),
        }
    }

    /// Squared planar distance to another column.
    ///
    /// Computed in `i64` so that any pair of `i32` positions is exact.
    #[must_use]
    pub const fn distance_squared(self, other: Self) -> i64 {
        let dx = self.x as i64 - other.x as i64;
        let dz = self.z as i64 - other.z as i64;
        dx * dx + dz * dz
    }

    /// Planar Euclidean distance to another column.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (self.distance_squared(other) as f64).sqrt()
    }
}

/// Position of a single block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockPos {
    /// X coordinate in blocks
    pub x: i32,
    /// Y coordinate (height) in blocks
    pub y: i32,
    /// Z coordinate in blocks
    pub z: i32,
}

impl BlockPos {
    /// Creates a new block position.
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Column this block stands in.
    #[must_use]
    pub const fn column(self) -> ColumnPos {
        ColumnPos::new(self.x, self.z)
    }

    /// True when every axis differs from `other` by at most one block.
    #[must_use]
    pub const fn touches(self, other: Self) -> bool {
        (self.x as i64 - other.x as i64).abs() <= 1
            && (self.y as i64 - other.y as i64).abs() <= 1
            && (self.z as i64 - other.z as i64).abs() <= 1
    }
}

/// Chunk coordinate (identifies a 16×16 column tile).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChunkCoord {
    /// X coordinate in chunk space
    pub x: i32,
    /// Z coordinate in chunk space
    pub z: i32,
}

impl ChunkCoord {
    /// Creates a new chunk coordinate.
    #[must_use]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// North-west corner column of the chunk.
    #[must_use]
    pub const fn origin(self) -> ColumnPos {
        ColumnPos {
            x: self.x.wrapping_mul(CHUNK_SIZE),
            z: self.z.wrapping_mul(CHUNK_SIZE),
        }
    }

    /// Chunk shifted by the given chunk offsets.
    #[must_use]
    pub const fn offset(self, dx: i32, dz: i32) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            z: self.z.wrapping_add(dz),
        }
    }

    /// True when the column lies inside this chunk's footprint.
    #[must_use]
    pub const fn contains(self, column: ColumnPos) -> bool {
        let chunk = column.chunk();
        chunk.x == self.x && chunk.z == self.z
    }
}

impl From<(i32, i32)> for ChunkCoord {
    fn from((x, z): (i32, i32)) -> Self {
        Self::new(x, z)
    }
}

impl std::fmt::Display for ChunkCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}
