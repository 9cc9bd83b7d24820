//! Finder configuration.
//!
//! Provides the tunable parameters of a [`DepositFinder`](crate::finder::DepositFinder):
//! distance bound, default search radius, and cache behaviour.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::rank::DEFAULT_MAX_DISTANCE;

/// Largest accepted distance bound, in blocks.
pub const MAX_DISTANCE_LIMIT: u32 = 4096;
/// Largest accepted default radius, in chunks.
pub const MAX_DEFAULT_RADIUS: i32 = 16;

/// Finder configuration parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinderConfig {
    /// Maximum planar distance from the query point, in blocks (inclusive)
    pub max_distance: u32,
    /// Radius in chunks used when a query does not give one
    pub default_radius: i32,
    /// Memoize query results
    pub cache_enabled: bool,
    /// Cache entry limit (None = unbounded)
    pub cache_capacity: Option<usize>,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            max_distance: DEFAULT_MAX_DISTANCE,
            default_radius: 1,
            cache_enabled: true,
            cache_capacity: None,
        }
    }
}

impl FinderConfig {
    /// Validate and clamp configuration values to sensible ranges.
    pub fn validate(&mut self) {
        self.max_distance = self.max_distance.clamp(1, MAX_DISTANCE_LIMIT);
        self.default_radius = self.default_radius.clamp(0, MAX_DEFAULT_RADIUS);
        // A zero capacity would make every insert evict itself.
        if self.cache_capacity == Some(0) {
            self.cache_capacity = None;
        }
    }

    /// Cache capacity as a non-zero bound, `None` when unbounded.
    #[must_use]
    pub fn capacity(&self) -> Option<NonZeroUsize> {
        self.cache_capacity.and_then(NonZeroUsize::new)
    }

    /// Largest radius, in chunks, that can still reach a placement within
    /// `max_distance` of the query point.
    #[must_use]
    pub fn effective_radius(&self, radius: i32) -> i32 {
        let reach = i32::try_from(self.max_distance.div_ceil(16)).unwrap_or(i32::MAX);
        radius.min(reach)
    }
}
