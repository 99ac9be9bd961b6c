//! Property tests: arbitrary operation sequences never break session
//! invariants.

use devotion_core::affinity::AffinityKind::{self, *};
use devotion_core::{Catalog, ClusterSpec, NodeId, Session};
use proptest::prelude::*;

// ─── helpers ─────────────────────────────────────────────────────────────────

const NODES: usize = 12;

fn catalog() -> Catalog {
    Catalog::builder()
        .cluster(ClusterSpec::new("Crossroads of Chaos", 1).anchor().grants(Chaos, 1).main("Chaos Anchor", 0))
        .cluster(ClusterSpec::new("Crossroads of Order", 1).anchor().grants(Order, 1).main("Order Anchor", 0))
        .cluster(
            ClusterSpec::new("Jackal", 1)
                .requires(Chaos, 1)
                .grants(Chaos, 3)
                .main("Jackal 1", 0)
                .main("Jackal 2", 1)
                .main("Jackal 3", 2),
        )
        .cluster(
            ClusterSpec::new("Fork", 2)
                .requires(Chaos, 3)
                .grants(Order, 2)
                .main("Fork 1", 0)
                .main("Fork 2", 1)
                .branch("Fork 3a", 2, 1)
                .branch("Fork 3b", 2, 2)
                .branch("Fork 4a", 3, 1),
        )
        .cluster(
            ClusterSpec::new("Gate", 2)
                .requires(Order, 3)
                .grants(Chaos, 1)
                .main("Gate 1", 0)
                .main("Gate 2", 1),
        )
        .build()
        .unwrap()
}

#[derive(Clone, Debug)]
enum Op {
    Activate(usize),
    Deactivate(usize),
    FastPath(usize),
    Reset,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0..NODES).prop_map(Op::Activate),
        3 => (0..NODES).prop_map(Op::Deactivate),
        2 => (0..NODES).prop_map(Op::FastPath),
        1 => Just(Op::Reset),
    ]
}

fn floors(s: &Session<'_>) -> [u32; 5] {
    AffinityKind::ALL.map(|k| s.pools().pool(k).floor())
}

fn ordering_holds(s: &Session<'_>) -> bool {
    let c = s.catalog();
    s.unlocked_nodes().into_iter().all(|id| {
        let n = c.node(id);
        let cluster = c.cluster(n.cluster);
        let supporting = cluster
            .members
            .iter()
            .filter(|&&m| m != id && s.is_unlocked(m) && n.counts_sibling(c.node(m)))
            .count();
        s.is_unlocked(cluster.first_member()) && supporting >= usize::from(n.rank)
    })
}

#[test]
fn test_node_count_matches_generator() {
    assert_eq!(catalog().nodes().len(), NODES);
}

// ─── properties ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn test_invariants_hold_under_any_sequence(ops in prop::collection::vec(op(), 0..64)) {
        let c = catalog();
        let mut s = Session::new(&c);
        let start = s.config().starting_currency;

        for op in ops {
            let before = floors(&s);
            let reset = matches!(op, Op::Reset);
            match op {
                Op::Activate(i) => {
                    s.activate(NodeId(i as u16));
                }
                Op::Deactivate(i) => {
                    s.deactivate(NodeId(i as u16));
                }
                Op::FastPath(i) => {
                    s.activate_by_fast_path(NodeId(i as u16));
                }
                Op::Reset => s.reset(),
            }

            prop_assert_eq!(s.pools().currency.amount() + s.unlocked_count() as u32, start);
            for kind in AffinityKind::ALL {
                prop_assert!(s.points(kind) >= s.pools().pool(kind).floor());
            }
            if !reset {
                let after = floors(&s);
                prop_assert!(before.iter().zip(after.iter()).all(|(b, a)| a >= b));
            }
            prop_assert!(ordering_holds(&s));
        }
    }

    #[test]
    fn test_repeated_activation_changes_nothing(
        warmup in prop::collection::vec(0..NODES, 0..24),
        pick in 0..NODES,
    ) {
        let c = catalog();
        let mut s = Session::new(&c);
        for i in warmup {
            s.activate_by_fast_path(NodeId(i as u16));
        }
        let target = NodeId(pick as u16);
        s.activate(target);
        if s.is_unlocked(target) {
            let before = s.report(true);
            prop_assert!(!s.activate(target));
            let after = s.report(true);
            prop_assert_eq!(after.unlocked, before.unlocked);
            prop_assert_eq!(after.pools, before.pools);
        }
    }

    #[test]
    fn test_refused_deactivation_changes_nothing(
        warmup in prop::collection::vec(0..NODES, 0..24),
        pick in 0..NODES,
    ) {
        let c = catalog();
        let mut s = Session::new(&c);
        for i in warmup {
            s.activate_by_fast_path(NodeId(i as u16));
        }
        let target = NodeId(pick as u16);
        let allowed = s.can_deactivate(target);
        let before = s.report(true);
        prop_assert_eq!(s.deactivate(target), allowed);
        if !allowed {
            let after = s.report(true);
            prop_assert_eq!(after.unlocked, before.unlocked);
            prop_assert_eq!(after.pools, before.pools);
        }
    }
}
