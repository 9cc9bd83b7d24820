//! Vein placement for a single mineral rule in a single chunk.
//!
//! Draw order per call (every draw comes from one [`ValueStream`]):
//! 1. `veins_per_chunk` survival rolls
//! 2. per surviving vein: center x, center z, center y, vein size
//! 3. per block: offset x, offset y, offset z
//!
//! Blocks that land outside the chunk footprint, or below
//! [`BURIED_THRESHOLD_Y`] for exposure-requiring ores, are dropped and not
//! retried, so a vein can end up smaller than its drawn size.

use orefinder_common::{ChunkCoord, ColumnPos, VersionTag, CHUNK_SIZE};

use crate::biome::biome_at;
use crate::deposit::Placement;
use crate::rng::ValueStream;
use crate::rules::{MineralRule, BURIED_THRESHOLD_Y};

/// Largest horizontal offset of a vein block from its center.
pub const HORIZONTAL_SPREAD: i32 = 2;
/// Largest vertical offset of a vein block from its center.
pub const VERTICAL_SPREAD: i32 = 1;

/// Generates the placements of one rule in one chunk.
///
/// Identical inputs always produce the identical ordered list.
#[must_use]
pub fn generate_veins(
    seed: i64,
    chunk: ChunkCoord,
    rule: &MineralRule,
    version: VersionTag,
) -> Vec<Placement> {
    let mut stream = ValueStream::derive(seed, chunk, rule.kind.salt(), version);
    let veins = surviving_attempts(&mut stream, rule);
    let origin = chunk.origin();
    let mut placements = Vec::new();

    for _ in 0..veins {
        let center_x = origin.x.wrapping_add(stream.range_i32(0, CHUNK_SIZE - 1));
        let center_z = origin.z.wrapping_add(stream.range_i32(0, CHUNK_SIZE - 1));
        let center_y = stream.range_i32(rule.min_y, rule.max_y);
        let size = stream.range_i32(saturate(rule.min_size), saturate(rule.max_size));

        for _ in 0..size {
            let x = center_x.wrapping_add(stream.range_i32(-HORIZONTAL_SPREAD, HORIZONTAL_SPREAD));
            let y = center_y.saturating_add(stream.range_i32(-VERTICAL_SPREAD, VERTICAL_SPREAD));
            let z = center_z.wrapping_add(stream.range_i32(-HORIZONTAL_SPREAD, HORIZONTAL_SPREAD));

            if !chunk.contains(ColumnPos::new(x, z)) {
                continue;
            }
            if rule.exposure_required && y < BURIED_THRESHOLD_Y {
                continue;
            }
            placements.push(Placement {
                kind: rule.kind,
                x,
                y,
                z,
                biome: biome_at(seed, x, z),
            });
        }
    }

    placements
}

/// Rolls every vein attempt and returns how many survive.
pub(crate) fn surviving_attempts(stream: &mut ValueStream, rule: &MineralRule) -> u32 {
    let mut survivors = 0;
    for _ in 0..rule.veins_per_chunk {
        if stream.survives(rule.discard_chance) {
            survivors += 1;
        }
    }
    survivors
}

fn saturate(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::base_rules;
    use orefinder_common::MineralKind;
    use proptest::prelude::*;

    fn rule(kind: MineralKind) -> MineralRule {
        base_rules()
            .into_iter()
            .find(|r| r.kind == kind)
            .expect("rule present")
    }

    #[test]
    fn test_generation_deterministic() {
        let chunk = ChunkCoord::new(6, 12);
        for rule in base_rules() {
            let a = generate_veins(123_456_789, chunk, &rule, VersionTag::V1_20);
            let b = generate_veins(123_456_789, chunk, &rule, VersionTag::V1_20);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let iron = rule(MineralKind::Iron);
        let chunk = ChunkCoord::new(0, 0);
        let a = generate_veins(1, chunk, &iron, VersionTag::V1_20);
        let b = generate_veins(2, chunk, &iron, VersionTag::V1_20);
        assert_ne!(a, b);
    }

    #[test]
    fn test_discard_edges() {
        let mut always = rule(MineralKind::Copper);
        always.discard_chance = 0.0;
        let mut never = always.clone();
        never.discard_chance = 1.0;

        let mut stream = ValueStream::from_state(99);
        assert_eq!(surviving_attempts(&mut stream, &always), always.veins_per_chunk);
        assert_eq!(surviving_attempts(&mut stream, &never), 0);

        for cx in -3..3 {
            let chunk = ChunkCoord::new(cx, 7);
            assert!(generate_veins(5, chunk, &never, VersionTag::V1_18).is_empty());
            assert!(!generate_veins(5, chunk, &always, VersionTag::V1_18).is_empty());
        }
    }

    #[test]
    fn test_exposure_drops_buried_blocks() {
        let mut buried = MineralRule::new(MineralKind::Emerald, (-40, -10), 30, (3, 6), 0.0, true);
        for cx in 0..4 {
            let chunk = ChunkCoord::new(cx, -cx);
            assert!(generate_veins(77, chunk, &buried, VersionTag::V1_20).is_empty());
        }
        buried.exposure_required = false;
        let kept = generate_veins(77, ChunkCoord::new(0, 0), &buried, VersionTag::V1_20);
        assert!(!kept.is_empty());
        assert!(kept.iter().all(|p| p.y < 0));
    }

    #[test]
    fn test_placements_carry_biome_of_their_column() {
        let coal = rule(MineralKind::Coal);
        let chunk = ChunkCoord::new(-4, 9);
        for placement in generate_veins(31_337, chunk, &coal, VersionTag::V1_21) {
            assert_eq!(placement.biome, biome_at(31_337, placement.x, placement.z));
        }
    }

    proptest! {
        #[test]
        fn prop_placements_respect_rule(
            seed in any::<i64>(),
            cx in -100_000i32..100_000,
            cz in -100_000i32..100_000,
            index in 0usize..8,
        ) {
            let rule = base_rules().swap_remove(index);
            let chunk = ChunkCoord::new(cx, cz);
            let placements = generate_veins(seed, chunk, &rule, VersionTag::V1_20);

            prop_assert!(placements.len() as u64
                <= u64::from(rule.veins_per_chunk) * u64::from(rule.max_size));
            for p in &placements {
                prop_assert_eq!(p.kind, rule.kind);
                prop_assert!(chunk.contains(p.column()));
                prop_assert!(p.y >= rule.min_y - VERTICAL_SPREAD);
                prop_assert!(p.y <= rule.max_y + VERTICAL_SPREAD);
                if rule.exposure_required {
                    prop_assert!(p.y >= BURIED_THRESHOLD_Y);
                }
            }
        }
    }
}
