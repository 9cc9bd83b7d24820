//! The deposit finder: radius search, ranking, aggregation, and caching
//! behind a single entry point.

use orefinder_common::{ColumnPos, FinderError, FinderResult, MineralKind, VersionTag};
use tracing::{debug, info};

use crate::aggregate::{aggregate, order_by_distance};
use crate::cache::{CacheKey, CacheStats, ResultCache};
use crate::chunk::ChunkGenerator;
use crate::config::FinderConfig;
use crate::deposit::{Placement, QueryResult};
use crate::rank::{DistanceRanker, TypeFilter};
use crate::rules::RuleBook;
use crate::search::search_radius;

/// Answers deposit queries for any seed and supported version.
///
/// A finder is `Send + Sync`; share it behind an `Arc` to query from many
/// threads.
#[derive(Debug)]
pub struct DepositFinder {
    book: RuleBook,
    config: FinderConfig,
    cache: Option<ResultCache>,
}

impl DepositFinder {
    /// Finder using the standard rule tables.
    pub fn new(config: FinderConfig) -> FinderResult<Self> {
        Ok(Self::with_rule_book(RuleBook::standard()?, config))
    }

    /// Finder using custom rule tables.
    #[must_use]
    pub fn with_rule_book(book: RuleBook, mut config: FinderConfig) -> Self {
        config.validate();
        let cache = config.cache_enabled.then(|| match config.capacity() {
            Some(capacity) => ResultCache::with_capacity(capacity),
            None => ResultCache::unbounded(),
        });
        info!(
            "Deposit finder ready: versions {:?}, max distance {}, cache {}",
            book.versions(),
            config.max_distance,
            match (&cache, config.cache_capacity) {
                (None, _) => "off".to_string(),
                (Some(_), None) => "unbounded".to_string(),
                (Some(_), Some(capacity)) => format!("{capacity} entries"),
            }
        );
        Self {
            book,
            config,
            cache,
        }
    }

    /// Active configuration, after validation.
    #[must_use]
    pub const fn config(&self) -> &FinderConfig {
        &self.config
    }

    /// Deposits within the configured distance of `(x, z)`, nearest first.
    ///
    /// Chunks within `radius` of the query chunk are searched. An empty or
    /// absent `filter` keeps every kind.
    pub fn find_deposits(
        &self,
        seed: i64,
        x: i32,
        z: i32,
        version: VersionTag,
        radius: i32,
        filter: Option<&TypeFilter>,
    ) -> FinderResult<QueryResult> {
        let radius = self.checked_radius(radius)?;

        let Some(cache) = &self.cache else {
            return self.compute(seed, ColumnPos::new(x, z), version, radius, filter);
        };
        let key = CacheKey {
            seed,
            x,
            z,
            version,
            radius,
            filter: filter.cloned(),
        };
        cache.get_or_compute(&key, || {
            self.compute(seed, ColumnPos::new(x, z), version, radius, filter)
        })
    }

    /// Individual ore blocks behind [`DepositFinder::find_deposits`]: the
    /// same radius handling, distance bound and filter, nearest first and
    /// not aggregated. Never cached.
    pub fn find_placements(
        &self,
        seed: i64,
        x: i32,
        z: i32,
        version: VersionTag,
        radius: i32,
        filter: Option<&TypeFilter>,
    ) -> FinderResult<Vec<Placement>> {
        let radius = self.checked_radius(radius)?;
        self.ranked(seed, ColumnPos::new(x, z), version, radius, filter)
    }

    /// Runs a [`DepositQuery`], resolving its raw type names first.
    pub fn query(&self, query: &DepositQuery) -> FinderResult<QueryResult> {
        let filter = query.filter()?;
        self.find_deposits(
            query.seed,
            query.x,
            query.z,
            query.version,
            query.radius.unwrap_or(self.config.default_radius),
            filter.as_ref(),
        )
    }

    /// Versions this finder has rules for, oldest first.
    #[must_use]
    pub fn supported_versions(&self) -> Vec<VersionTag> {
        self.book.versions()
    }

    /// Every mineral kind a query can report.
    #[must_use]
    pub fn supported_minerals(&self) -> Vec<MineralKind> {
        MineralKind::ALL.to_vec()
    }

    /// Drops every cached result.
    pub fn clear_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.clear();
        }
    }

    /// Cache counters; all zero when caching is disabled.
    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.as_ref().map(ResultCache::stats).unwrap_or_default()
    }

    fn checked_radius(&self, radius: i32) -> FinderResult<i32> {
        if radius < 0 {
            return Err(FinderError::InvalidRadius(radius));
        }
        Ok(self.config.effective_radius(radius))
    }

    fn ranked(
        &self,
        seed: i64,
        query: ColumnPos,
        version: VersionTag,
        radius: i32,
        filter: Option<&TypeFilter>,
    ) -> FinderResult<Vec<Placement>> {
        let table = self.book.rules_for(version)?;
        let generator = ChunkGenerator::new(seed, table);

        let placements = search_radius(&generator, query, radius);
        let raw = placements.len();
        let ranked = DistanceRanker::new(query, self.config.max_distance)
            .with_filter(filter)
            .rank(placements);
        debug!(
            "seed={seed} at ({}, {}) {version} r={radius}: {raw} raw, {} kept",
            query.x,
            query.z,
            ranked.len()
        );
        Ok(ranked)
    }

    fn compute(
        &self,
        seed: i64,
        query: ColumnPos,
        version: VersionTag,
        radius: i32,
        filter: Option<&TypeFilter>,
    ) -> FinderResult<QueryResult> {
        let mut deposits = aggregate(self.ranked(seed, query, version, radius, filter)?);
        order_by_distance(&mut deposits, query);
        debug!("{} deposits", deposits.len());
        Ok(QueryResult::new(seed, query, version, deposits))
    }
}

/// A deposit query with type names still in raw form.
///
/// The single `ore` name and the `ores` list are merged and de-duplicated;
/// when both are empty every kind is reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepositQuery {
    /// World seed
    pub seed: i64,
    /// Query X in blocks
    pub x: i32,
    /// Query Z in blocks
    pub z: i32,
    /// Version tag
    pub version: VersionTag,
    /// Radius in chunks (None = finder default)
    pub radius: Option<i32>,
    /// Single type name
    pub ore: Option<String>,
    /// Additional type names
    pub ores: Vec<String>,
}

impl DepositQuery {
    /// Query at `(x, z)` for the latest version with no type filter.
    #[must_use]
    pub fn new(seed: i64, x: i32, z: i32) -> Self {
        Self {
            seed,
            x,
            z,
            version: VersionTag::LATEST,
            radius: None,
            ore: None,
            ores: Vec::new(),
        }
    }

    /// Sets the version.
    #[must_use]
    pub fn version(mut self, version: VersionTag) -> Self {
        self.version = version;
        self
    }

    /// Sets the search radius.
    #[must_use]
    pub fn radius(mut self, radius: i32) -> Self {
        self.radius = Some(radius);
        self
    }

    /// Sets the single type name.
    #[must_use]
    pub fn ore(mut self, name: impl Into<String>) -> Self {
        self.ore = Some(name.into());
        self
    }

    /// Appends type names.
    #[must_use]
    pub fn ores<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.ores.extend(names.into_iter().map(Into::into));
        self
    }

    /// The merged type filter. Fails on the first unknown name.
    pub fn filter(&self) -> FinderResult<Option<TypeFilter>> {
        TypeFilter::parse(self.ore.iter().chain(&self.ores))
    }
}
