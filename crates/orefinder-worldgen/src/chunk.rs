//! Per-chunk ore generation.

use orefinder_common::{ChunkCoord, VersionTag};
use tracing::trace;

use crate::deposit::Placement;
use crate::rules::RuleTable;
use crate::vein::generate_veins;

/// Generates every mineral's placements for chunks of one world and version.
#[derive(Debug, Clone, Copy)]
pub struct ChunkGenerator<'a> {
    seed: i64,
    table: &'a RuleTable,
}

impl<'a> ChunkGenerator<'a> {
    /// Creates a generator for `seed` using `table`.
    #[must_use]
    pub const fn new(seed: i64, table: &'a RuleTable) -> Self {
        Self { seed, table }
    }

    /// World seed.
    #[must_use]
    pub const fn seed(&self) -> i64 {
        self.seed
    }

    /// Version of the rule table in use.
    #[must_use]
    pub const fn version(&self) -> VersionTag {
        self.table.version()
    }

    /// All placements in `chunk`, rule-table order, each rule's output in
    /// draw order.
    #[must_use]
    pub fn generate_chunk(&self, chunk: ChunkCoord) -> Vec<Placement> {
        let mut placements = Vec::new();
        self.generate_into(chunk, &mut placements);
        placements
    }

    /// Appends the placements of `chunk` to `out`.
    pub fn generate_into(&self, chunk: ChunkCoord, out: &mut Vec<Placement>) {
        let before = out.len();
        for rule in self.table.rules() {
            out.extend(generate_veins(self.seed, chunk, rule, self.version()));
        }
        trace!(
            "chunk {chunk}: {} placements (seed={}, version={})",
            out.len() - before,
            self.seed,
            self.version()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::MineralRule;
    use orefinder_common::MineralKind;

    fn table(version: VersionTag) -> RuleTable {
        RuleTable::standard(version).expect("standard table")
    }

    #[test]
    fn test_chunk_is_concatenation_in_table_order() {
        let table = table(VersionTag::V1_20);
        let generator = ChunkGenerator::new(2024, &table);
        let chunk = ChunkCoord::new(3, -8);

        let expected: Vec<Placement> = table
            .rules()
            .iter()
            .flat_map(|rule| generate_veins(2024, chunk, rule, VersionTag::V1_20))
            .collect();
        assert_eq!(generator.generate_chunk(chunk), expected);
    }

    #[test]
    fn test_kinds_appear_grouped_in_table_order() {
        let table = table(VersionTag::V1_19);
        let placements = ChunkGenerator::new(-9, &table).generate_chunk(ChunkCoord::new(0, 0));
        let mut kinds: Vec<MineralKind> = placements.iter().map(|p| p.kind).collect();
        kinds.dedup();
        let mut sorted = kinds.clone();
        sorted.sort();
        assert_eq!(kinds, sorted);
    }

    #[test]
    fn test_generate_into_appends() {
        let table = table(VersionTag::V1_20);
        let generator = ChunkGenerator::new(1, &table);
        let mut out = generator.generate_chunk(ChunkCoord::new(0, 0));
        let first = out.len();
        generator.generate_into(ChunkCoord::new(0, 1), &mut out);
        assert_eq!(out.len(), first + generator.generate_chunk(ChunkCoord::new(0, 1)).len());
    }

    #[test]
    fn test_empty_table_generates_nothing() {
        let empty = RuleTable::new(VersionTag::V1_20, Vec::<MineralRule>::new()).expect("empty");
        assert!(ChunkGenerator::new(1, &empty)
            .generate_chunk(ChunkCoord::new(0, 0))
            .is_empty());
    }

    #[test]
    fn test_version_changes_output() {
        let v20 = table(VersionTag::V1_20);
        let v21 = table(VersionTag::V1_21);
        let chunk = ChunkCoord::new(10, 10);
        assert_ne!(
            ChunkGenerator::new(5, &v20).generate_chunk(chunk),
            ChunkGenerator::new(5, &v21).generate_chunk(chunk)
        );
    }
}
