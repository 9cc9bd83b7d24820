//! # orefinder worldgen
//!
//! Deterministic ore generation and deposit search:
//! - Seeded value streams and per-version mineral rules
//! - Vein placement per chunk and square radius search
//! - Distance ranking, type filtering, and adjacency aggregation
//! - Result caching behind [`DepositFinder`]
//!
//! ```no_run
//! use orefinder_worldgen::prelude::*;
//!
//! let finder = DepositFinder::new(FinderConfig::default())?;
//! let result = finder.find_deposits(123_456_789, 100, 200, VersionTag::V1_20, 1, None)?;
//! println!("{} ore blocks near {}", result.total_count, result.chunk_coords);
//! # Ok::<(), orefinder_common::FinderError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod aggregate;
pub mod biome;
pub mod cache;
pub mod chunk;
pub mod config;
pub mod deposit;
pub mod finder;
pub mod rank;
pub mod rng;
pub mod rules;
pub mod search;
pub mod vein;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::aggregate::{aggregate, order_by_distance};
    pub use crate::biome::{biome_at, BiomeTag};
    pub use crate::cache::{CacheKey, CacheStats, ResultCache};
    pub use crate::chunk::ChunkGenerator;
    pub use crate::config::FinderConfig;
    pub use crate::deposit::{AggregatedDeposit, Placement, QueryResult};
    pub use crate::finder::{DepositFinder, DepositQuery};
    pub use crate::rank::{DistanceRanker, TypeFilter, DEFAULT_MAX_DISTANCE};
    pub use crate::rules::{MineralRule, RuleBook, RuleTable};
    pub use crate::search::{chunk_grid, search_radius};
    pub use crate::vein::generate_veins;
    pub use orefinder_common::prelude::*;
}

pub use prelude::*;
