//! # orefinder common
//!
//! Shared vocabulary for the orefinder crates:
//! - Coordinate types (column, block, chunk)
//! - Supported version tags
//! - Mineral kinds and their name aliases
//! - The finder error taxonomy
//! - Prelude for convenient imports

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod coords;
pub mod error;
pub mod mineral;
pub mod version;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::coords::*;
    pub use crate::error::*;
    pub use crate::mineral::*;
    pub use crate::version::*;
}

pub use prelude::*;

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_reference_query_chunk() {
        assert_eq!(ColumnPos::new(100, 200).chunk(), ChunkCoord::new(6, 12));
    }

    proptest! {
        #[test]
        fn prop_column_lies_in_its_chunk(x in any::<i32>(), z in any::<i32>()) {
            let column = ColumnPos::new(x, z);
            let chunk = column.chunk();
            let origin = chunk.origin();
            prop_assert!(chunk.contains(column));
            prop_assert!((0..CHUNK_SIZE).contains(&(x.wrapping_sub(origin.x))));
            prop_assert!((0..CHUNK_SIZE).contains(&(z.wrapping_sub(origin.z))));
        }

        #[test]
        fn prop_version_display_parses_back(index in 0usize..VersionTag::ALL.len()) {
            let version = VersionTag::ALL[index];
            prop_assert_eq!(version.to_string().parse::<VersionTag>(), Ok(version));
        }
    }
}
