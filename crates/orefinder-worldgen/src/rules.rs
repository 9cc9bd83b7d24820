//! Per-version ore generation rules.
//!
//! The base table is loosely modeled on the post-1.18 overworld ore
//! distribution (height bands, vein counts and sizes). Versions scale the
//! vein counts by [`VersionTag::vein_multiplier_percent`].

use orefinder_common::{FinderError, FinderResult, MineralKind, VersionTag};
use serde::{Deserialize, Serialize};

/// Generation parameters for one mineral kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MineralRule {
    /// Mineral generated by this rule
    pub kind: MineralKind,
    /// Lowest vein-center Y (inclusive)
    pub min_y: i32,
    /// Highest vein-center Y (inclusive)
    pub max_y: i32,
    /// Vein attempts per chunk
    pub veins_per_chunk: u32,
    /// Smallest vein size in blocks (inclusive)
    pub min_size: u32,
    /// Largest vein size in blocks (inclusive)
    pub max_size: u32,
    /// Probability in `[0, 1]` that a vein attempt is dropped
    pub discard_chance: f64,
    /// Drop blocks below [`BURIED_THRESHOLD_Y`]
    pub exposure_required: bool,
}

/// Blocks of exposure-requiring ores are dropped below this Y.
pub const BURIED_THRESHOLD_Y: i32 = 0;

impl MineralRule {
    /// Creates a rule. Call [`MineralRule::validate`] before use.
    #[must_use]
    pub const fn new(
        kind: MineralKind,
        (min_y, max_y): (i32, i32),
        veins_per_chunk: u32,
        (min_size, max_size): (u32, u32),
        discard_chance: f64,
        exposure_required: bool,
    ) -> Self {
        Self {
            kind,
            min_y,
            max_y,
            veins_per_chunk,
            min_size,
            max_size,
            discard_chance,
            exposure_required,
        }
    }

    /// Checks the rule invariants.
    pub fn validate(&self) -> FinderResult<()> {
        let fault = |reason: String| FinderError::InternalGenerationFault {
            kind: self.kind,
            reason,
        };
        if self.min_y > self.max_y {
            return Err(fault(format!("min_y {} > max_y {}", self.min_y, self.max_y)));
        }
        if self.min_size < 1 {
            return Err(fault("vein size minimum must be at least 1".to_string()));
        }
        if self.min_size > self.max_size {
            return Err(fault(format!(
                "vein size {} > {}",
                self.min_size, self.max_size
            )));
        }
        if !(0.0..=1.0).contains(&self.discard_chance) {
            return Err(fault(format!(
                "discard chance {} outside [0, 1]",
                self.discard_chance
            )));
        }
        Ok(())
    }

    /// Copy with `veins_per_chunk` scaled by `percent`, rounded half up.
    #[must_use]
    pub fn scaled(&self, percent: u32) -> Self {
        let scaled = (u64::from(self.veins_per_chunk) * u64::from(percent) + 50) / 100;
        Self {
            veins_per_chunk: u32::try_from(scaled).unwrap_or(u32::MAX),
            ..self.clone()
        }
    }
}

/// The base rule table, in [`MineralKind`] order.
#[must_use]
pub fn base_rules() -> Vec<MineralRule> {
    use MineralKind::{Coal, Copper, Diamond, Emerald, Gold, Iron, LapisLazuli, Redstone};
    vec![
        MineralRule::new(Diamond, (-64, 16), 1, (1, 8), 0.1, false),
        MineralRule::new(Emerald, (-16, 320), 1, (1, 1), 0.5, true),
        MineralRule::new(Gold, (-64, 32), 2, (1, 9), 0.1, false),
        MineralRule::new(Iron, (-64, 72), 10, (1, 13), 0.1, false),
        MineralRule::new(Coal, (0, 192), 20, (1, 17), 0.1, true),
        MineralRule::new(Redstone, (-64, 16), 4, (1, 8), 0.1, false),
        MineralRule::new(LapisLazuli, (-64, 64), 1, (1, 7), 0.1, false),
        MineralRule::new(Copper, (-16, 112), 16, (1, 10), 0.1, false),
    ]
}

/// Validated rules for one version.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleTable {
    version: VersionTag,
    rules: Vec<MineralRule>,
}

impl RuleTable {
    /// Builds a table, validating every row.
    pub fn new(version: VersionTag, rules: Vec<MineralRule>) -> FinderResult<Self> {
        for rule in &rules {
            rule.validate()?;
        }
        Ok(Self { version, rules })
    }

    /// The standard table for a version: the base table with the version's
    /// vein multiplier applied.
    pub fn standard(version: VersionTag) -> FinderResult<Self> {
        let percent = version.vein_multiplier_percent();
        let rules = base_rules().iter().map(|rule| rule.scaled(percent)).collect();
        Self::new(version, rules)
    }

    /// Version this table belongs to.
    #[must_use]
    pub const fn version(&self) -> VersionTag {
        self.version
    }

    /// Rows in generation order.
    #[must_use]
    pub fn rules(&self) -> &[MineralRule] {
        &self.rules
    }

    /// Row for one mineral kind, if present.
    #[must_use]
    pub fn rule(&self, kind: MineralKind) -> Option<&MineralRule> {
        self.rules.iter().find(|rule| rule.kind == kind)
    }
}

/// Rule tables for every version a finder can answer.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleBook {
    tables: Vec<RuleTable>,
}

impl RuleBook {
    /// Standard tables for every [`VersionTag`].
    pub fn standard() -> FinderResult<Self> {
        let tables = VersionTag::ALL
            .into_iter()
            .map(RuleTable::standard)
            .collect::<FinderResult<Vec<_>>>()?;
        Ok(Self { tables })
    }

    /// A book made of custom tables. Later tables replace earlier ones for
    /// the same version.
    #[must_use]
    pub fn from_tables(tables: impl IntoIterator<Item = RuleTable>) -> Self {
        let mut book = Self { tables: Vec::new() };
        for table in tables {
            book.insert(table);
        }
        book
    }

    /// Adds or replaces the table for `table.version()`.
    pub fn insert(&mut self, table: RuleTable) {
        match self.tables.iter_mut().find(|t| t.version == table.version) {
            Some(existing) => *existing = table,
            None => {
                self.tables.push(table);
                self.tables.sort_by_key(|t| t.version);
            },
        }
    }

    /// Table for `version`.
    pub fn rules_for(&self, version: VersionTag) -> FinderResult<&RuleTable> {
        self.tables
            .iter()
            .find(|table| table.version == version)
            .ok_or_else(|| FinderError::UnsupportedVersion(version.to_string()))
    }

    /// Versions this book has tables for, oldest first.
    #[must_use]
    pub fn versions(&self) -> Vec<VersionTag> {
        self.tables.iter().map(RuleTable::version).collect()
    }
}
