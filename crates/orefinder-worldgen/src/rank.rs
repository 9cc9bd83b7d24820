//! Distance filtering, type filtering, and proximity ranking.

use std::collections::BTreeSet;

use orefinder_common::{ColumnPos, FinderResult, MineralKind};
use serde::{Deserialize, Serialize};

use crate::deposit::Placement;

/// Default maximum planar distance, in blocks, between the query point and
/// a reported placement.
pub const DEFAULT_MAX_DISTANCE: u32 = 64;

/// Set of mineral kinds to keep. Never empty; "no filtering" is spelled
/// `None`, so an empty list is rejected when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "BTreeSet<MineralKind>", into = "BTreeSet<MineralKind>")]
pub struct TypeFilter {
    kinds: BTreeSet<MineralKind>,
}

impl TypeFilter {
    /// Filter keeping exactly `kinds`. Returns `None` for an empty set,
    /// which means "no filtering".
    #[must_use]
    pub fn new(kinds: impl IntoIterator<Item = MineralKind>) -> Option<Self> {
        let kinds: BTreeSet<_> = kinds.into_iter().collect();
        (!kinds.is_empty()).then_some(Self { kinds })
    }

    /// Parses raw names case-insensitively (see [`MineralKind`]'s `FromStr`).
    pub fn parse<S: AsRef<str>>(names: impl IntoIterator<Item = S>) -> FinderResult<Option<Self>> {
        let kinds = names
            .into_iter()
            .map(|name| name.as_ref().parse::<MineralKind>())
            .collect::<FinderResult<Vec<_>>>()?;
        Ok(Self::new(kinds))
    }

    /// True when `kind` passes the filter.
    #[must_use]
    pub fn allows(&self, kind: MineralKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// Kinds in the filter, in [`MineralKind`] order.
    pub fn kinds(&self) -> impl Iterator<Item = MineralKind> + '_ {
        self.kinds.iter().copied()
    }
}

impl TryFrom<BTreeSet<MineralKind>> for TypeFilter {
    type Error = &'static str;

    fn try_from(kinds: BTreeSet<MineralKind>) -> Result<Self, Self::Error> {
        Self::new(kinds).ok_or("type filter must name at least one mineral")
    }
}

impl From<TypeFilter> for BTreeSet<MineralKind> {
    fn from(filter: TypeFilter) -> Self {
        filter.kinds
    }
}

/// Filters and orders raw placements around one query point.
#[derive(Debug, Clone, Copy)]
pub struct DistanceRanker<'a> {
    query: ColumnPos,
    max_distance: u32,
    filter: Option<&'a TypeFilter>,
}

impl<'a> DistanceRanker<'a> {
    /// Ranker around `query` keeping placements within `max_distance` blocks.
    #[must_use]
    pub const fn new(query: ColumnPos, max_distance: u32) -> Self {
        Self {
            query,
            max_distance,
            filter: None,
        }
    }

    /// Also drop placements whose kind is not in `filter`.
    #[must_use]
    pub const fn with_filter(mut self, filter: Option<&'a TypeFilter>) -> Self {
        self.filter = filter;
        self
    }

    /// True when the placement is within range and passes the type filter.
    #[must_use]
    pub fn keeps(&self, placement: &Placement) -> bool {
        let max = i64::from(self.max_distance);
        placement.column().distance_squared(self.query) <= max * max
            && self.filter.map_or(true, |filter| filter.allows(placement.kind))
    }

    /// Drops out-of-range and filtered placements, then stably sorts the
    /// rest by distance; ties keep their input order.
    #[must_use]
    pub fn rank(&self, mut placements: Vec<Placement>) -> Vec<Placement> {
        placements.retain(|p| self.keeps(p));
        placements.sort_by_key(|p| p.column().distance_squared(self.query));
        placements
    }
}
