//! Clustering of adjacent same-kind placements into deposits.
//!
//! Ordering is two-phase:
//! 1. [`aggregate`] stably sorts placements by `(kind, x, y, z)` and merges
//!    runs whose members are within one block of the run's *anchor* (its
//!    first member) on every axis. The anchor, not the previous member, is
//!    the reference, so a run never drifts more than one block away.
//! 2. [`order_by_distance`] stably re-sorts the deposits by the anchor's
//!    planar distance to the query point; ties keep clustering order.

use orefinder_common::ColumnPos;

use crate::deposit::{AggregatedDeposit, Placement};

/// Merges adjacent same-kind placements. Output is in `(kind, x, y, z)`
/// order of the anchors.
#[must_use]
pub fn aggregate(mut placements: Vec<Placement>) -> Vec<AggregatedDeposit> {
    placements.sort_by_key(|p| (p.kind, p.x, p.y, p.z));

    let mut deposits = Vec::new();
    let mut current: Option<AggregatedDeposit> = None;

    for placement in placements {
        match current.as_mut() {
            Some(cluster)
                if cluster.kind == placement.kind && cluster.pos().touches(placement.pos()) =>
            {
                cluster.count += 1;
            },
            _ => {
                if let Some(done) = current.take() {
                    deposits.push(done);
                }
                current = Some(AggregatedDeposit {
                    kind: placement.kind,
                    x: placement.x,
                    y: placement.y,
                    z: placement.z,
                    count: 1,
                    biome: placement.biome,
                });
            },
        }
    }
    deposits.extend(current);
    deposits
}

/// Stably sorts deposits by anchor distance to `query`, nearest first.
pub fn order_by_distance(deposits: &mut [AggregatedDeposit], query: ColumnPos) {
    deposits.sort_by_key(|d| d.column().distance_squared(query));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::biome::BiomeTag;
    use orefinder_common::MineralKind;
    use proptest::prelude::*;

    fn block(kind: MineralKind, x: i32, y: i32, z: i32) -> Placement {
        Placement {
            kind,
            x,
            y,
            z,
            biome: BiomeTag::Forest,
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate(Vec::new()).is_empty());
    }

    #[test]
    fn test_single_block_is_a_deposit() {
        let deposits = aggregate(vec![block(MineralKind::Diamond, 1, -50, 2)]);
        assert_eq!(deposits.len(), 1);
        assert_eq!(deposits[0].count, 1);
        assert_eq!(deposits[0].pos(), orefinder_common::BlockPos::new(1, -50, 2));
    }

    #[test]
    fn test_adjacency_measured_from_anchor() {
        // A chain 0 -> 1 -> 2 along x: 2 is adjacent to 1 but not to the anchor 0.
        let deposits = aggregate(vec![
            block(MineralKind::Iron, 2, 0, 0),
            block(MineralKind::Iron, 0, 0, 0),
            block(MineralKind::Iron, 1, 0, 0),
        ]);
        assert_eq!(deposits.len(), 2);
        assert_eq!((deposits[0].x, deposits[0].count), (0, 2));
        assert_eq!((deposits[1].x, deposits[1].count), (2, 1));
    }

    #[test]
    fn test_kinds_never_merge() {
        let deposits = aggregate(vec![
            block(MineralKind::Gold, 0, 0, 0),
            block(MineralKind::Coal, 0, 0, 1),
            block(MineralKind::Gold, 0, 1, 0),
        ]);
        assert_eq!(deposits.len(), 2);
        assert_eq!(deposits[0].kind, MineralKind::Gold);
        assert_eq!(deposits[0].count, 2);
        assert_eq!(deposits[1].kind, MineralKind::Coal);
    }

    #[test]
    fn test_duplicate_positions_count_separately() {
        let deposits = aggregate(vec![
            block(MineralKind::Copper, 5, 5, 5),
            block(MineralKind::Copper, 5, 5, 5),
        ]);
        assert_eq!(deposits.len(), 1);
        assert_eq!(deposits[0].count, 2);
    }

    #[test]
    fn test_anchor_keeps_its_biome() {
        let mut anchor = block(MineralKind::Redstone, 0, 0, 0);
        anchor.biome = BiomeTag::DeepDark;
        let deposits = aggregate(vec![block(MineralKind::Redstone, 1, 0, 0), anchor]);
        assert_eq!(deposits[0].biome, BiomeTag::DeepDark);
    }

    #[test]
    fn test_order_by_distance_is_stable() {
        let mut deposits = aggregate(vec![
            block(MineralKind::Diamond, 10, 0, 0),
            block(MineralKind::Coal, 0, 0, 3),
            block(MineralKind::Iron, 3, 0, 0),
        ]);
        order_by_distance(&mut deposits, ColumnPos::new(0, 0));
        let kinds: Vec<_> = deposits.iter().map(|d| d.kind).collect();
        // Iron and Coal tie at distance 3; clustering order puts Iron first.
        assert_eq!(kinds, vec![MineralKind::Iron, MineralKind::Coal, MineralKind::Diamond]);
    }

    fn arb_block() -> impl Strategy<Value = Placement> {
        (0usize..3, -4i32..4, -4i32..4, -4i32..4)
            .prop_map(|(k, x, y, z)| block(MineralKind::ALL[k], x, y, z))
    }

    proptest! {
        #[test]
        fn prop_counts_are_conserved(blocks in proptest::collection::vec(arb_block(), 0..60)) {
            let total = blocks.len() as u64;
            let deposits = aggregate(blocks);
            prop_assert_eq!(deposits.iter().map(|d| u64::from(d.count)).sum::<u64>(), total);
            prop_assert!(deposits.iter().all(|d| d.count >= 1));
        }

        #[test]
        fn prop_anchors_unique_per_kind(blocks in proptest::collection::vec(arb_block(), 0..60)) {
            let deposits = aggregate(blocks);
            let mut anchors: Vec<_> = deposits.iter().map(|d| (d.kind, d.pos())).collect();
            let len = anchors.len();
            anchors.sort();
            anchors.dedup();
            prop_assert_eq!(anchors.len(), len);
        }

        #[test]
        fn prop_every_member_touches_its_anchor(
            blocks in proptest::collection::vec(arb_block(), 0..60),
        ) {
            let mut sorted = blocks.clone();
            sorted.sort_by_key(|p| (p.kind, p.x, p.y, p.z));
            let deposits = aggregate(blocks);

            let mut members = sorted.iter();
            for deposit in &deposits {
                for _ in 0..deposit.count {
                    let member = members.next().expect("member exists");
                    prop_assert_eq!(member.kind, deposit.kind);
                    prop_assert!(deposit.pos().touches(member.pos()));
                }
            }
            prop_assert!(members.next().is_none());
        }
    }
}
