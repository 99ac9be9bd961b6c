//! Integration tests for fast-path activation over small hand-built catalogs.
//!
//! Every catalog carries all five anchors so bootstrap and retraction run the
//! same way they do over the reference catalog.

use devotion_core::affinity::AffinityKind::{self, *};
use devotion_core::{
    Catalog, ClusterId, ClusterSpec, NodeId, Outcome, Session, SessionConfig, Tier,
};

// ─── helpers ─────────────────────────────────────────────────────────────────

fn with_anchors() -> Vec<ClusterSpec> {
    AffinityKind::ALL
        .iter()
        .map(|&k| {
            let name = format!("Crossroads of {k}");
            ClusterSpec::new(name.clone(), 1).anchor().grants(k, 1).main(name, 0)
        })
        .collect()
}

fn chain(name: &str, tier: u8, size: u8) -> ClusterSpec {
    let mut spec = ClusterSpec::new(name, tier);
    for rank in 0..size {
        spec = spec.main(format!("{name} {}", rank + 1), rank);
    }
    spec
}

fn build(extra: Vec<ClusterSpec>) -> Catalog {
    let mut builder = Catalog::builder();
    for spec in with_anchors().into_iter().chain(extra) {
        builder.push(spec);
    }
    builder.build().unwrap()
}

/// Jackal-like filler (+3 Chaos, needs Chaos 1) and a Chaos 3 target cluster.
fn chaos_catalog() -> Catalog {
    build(vec![
        chain("Jackal", 1, 3).requires(Chaos, 1).grants(Chaos, 3),
        chain("Hunt", 2, 3).requires(Chaos, 3).grants(Eldritch, 2),
    ])
}

/// Two Order fillers: three members for +6, four members for +3.
fn order_catalog() -> Catalog {
    build(vec![
        chain("Six", 1, 3).requires(Order, 1).grants(Order, 6),
        chain("Three", 1, 4).requires(Order, 1).grants(Order, 3),
        chain("Vault", 2, 2).requires(Order, 6).grants(Ascendant, 2),
    ])
}

/// Two Order fillers granting 6: a cheap one whose third star can never be
/// reached and a four-star chain that can be completed.
fn broken_filler_catalog() -> Catalog {
    build(vec![
        ClusterSpec::new("Broken", 1)
            .grants(Order, 6)
            .main("Broken 1", 0)
            .branch("Broken 2", 1, 1)
            .branch("Broken 3", 2, 2),
        chain("Whole", 1, 4).requires(Order, 1).grants(Order, 6),
        chain("Vault", 2, 2).requires(Order, 6).grants(Ascendant, 2),
    ])
}

fn node(c: &Catalog, name: &str) -> NodeId {
    c.resolve_node(name).unwrap()
}

fn cluster(c: &Catalog, name: &str) -> ClusterId {
    c.resolve_cluster(name).unwrap()
}

fn anchor_nodes_unlocked(s: &Session<'_>) -> usize {
    let c = s.catalog();
    c.anchors()
        .iter()
        .filter(|&&a| s.is_unlocked(c.cluster(a).first_member()))
        .count()
}

// ─── single kind ─────────────────────────────────────────────────────────────

#[test]
fn test_chaos_gap_completes_filler_and_retracts_anchors() {
    let c = chaos_catalog();
    let mut s = Session::new(&c);
    let target = node(&c, "Hunt 2");

    let result = s.activate_by_fast_path(target);
    let Outcome::Plan(plan) = &result.outcome else {
        panic!("expected a plan, got {:?}", result.outcome);
    };
    assert_eq!(plan.clusters, [cluster(&c, "Jackal")]);
    assert_eq!(plan.cost, 2);
    assert_eq!(plan.strategy, "standard");

    assert!(result.report.applied);
    assert!(s.is_complete(cluster(&c, "Jackal")));
    assert!(s.is_unlocked(node(&c, "Hunt 1")));
    assert!(s.is_unlocked(target));
    assert!(!s.is_unlocked(node(&c, "Hunt 3")));

    // Jackal alone now carries the Chaos floor, so every anchor comes back off.
    assert_eq!(anchor_nodes_unlocked(&s), 0);
    assert_eq!(s.points(Chaos), 3);
    assert_eq!(s.pools().pool(Chaos).floor(), 3);
    assert_eq!(s.pools().currency.spent(), 5);
    assert_eq!(result.report.pools.currency, 50);
}

#[test]
fn test_order_gap_picks_fewest_members() {
    let c = order_catalog();
    let mut s = Session::new(&c);
    let target = node(&c, "Vault 1");

    let result = s.activate_by_fast_path(target);
    let Outcome::Plan(plan) = &result.outcome else {
        panic!("expected a plan, got {:?}", result.outcome);
    };
    assert_eq!(plan.clusters, [cluster(&c, "Six")]);
    assert_eq!(plan.cost, 2);

    assert!(s.is_unlocked(target));
    assert!(s.is_complete(cluster(&c, "Six")));
    let three = c.cluster(cluster(&c, "Three"));
    assert!(three.members.iter().all(|&m| !s.is_unlocked(m)));

    // The Order anchor was needed to open Six but not to hold Vault's floor.
    assert_eq!(anchor_nodes_unlocked(&s), 0);
    assert_eq!(s.points(Order), 6);
    assert_eq!(s.pools().currency.amount(), 51);
}

#[test]
fn test_anchor_kept_when_load_bearing() {
    // Filler grants exactly the gap minus one, so the anchor must stay.
    let c = build(vec![
        chain("Small", 1, 2).grants(Order, 2),
        chain("Gate", 2, 2).requires(Order, 3).grants(Chaos, 1),
    ]);
    let mut s = Session::new(&c);
    let result = s.activate_by_fast_path(node(&c, "Gate 1"));

    assert!(matches!(result.outcome, Outcome::Plan(_)));
    let order_anchor = c.resolve_node("Crossroads of Order").unwrap();
    assert!(s.is_unlocked(order_anchor));
    assert_eq!(anchor_nodes_unlocked(&s), 1);
    assert_eq!(s.points(Order), 3);
}

// ─── several kinds ───────────────────────────────────────────────────────────

#[test]
fn test_two_kind_gap_trims_to_single_dual_filler() {
    let c = build(vec![
        chain("Dual", 1, 3).requires(Order, 1).grants(Order, 3).grants(Chaos, 2),
        chain("OrderOnly", 1, 4).grants(Order, 3),
        chain("ChaosOnly", 1, 2).grants(Chaos, 2),
        chain("Keep", 2, 2).requires(Order, 3).requires(Chaos, 2).grants(Primordial, 3),
    ]);
    let mut s = Session::new(&c);
    let target = node(&c, "Keep 1");

    let Outcome::Plan(plan) = s.plan_for(target) else {
        panic!("expected a plan");
    };
    assert_eq!(plan.clusters, [cluster(&c, "Dual")]);
    assert_eq!(plan.cost, 2);

    let result = s.activate_by_fast_path(target);
    assert!(result.report.applied);
    assert!(s.is_unlocked(target));
    assert!(!s.is_complete(cluster(&c, "ChaosOnly")));
    assert_eq!(s.pools().pool(Order).floor(), 3);
    assert_eq!(s.pools().pool(Chaos).floor(), 2);
    for kind in AffinityKind::ALL {
        assert!(s.points(kind) >= s.pools().pool(kind).floor());
    }
}

// ─── direct and unreachable ──────────────────────────────────────────────────

#[test]
fn test_direct_when_entry_already_unlocked() {
    let c = chaos_catalog();
    let mut s = Session::new(&c);
    s.activate_by_fast_path(node(&c, "Hunt 1"));
    let spent = s.pools().currency.spent();

    let result = s.activate_by_fast_path(node(&c, "Hunt 3"));
    assert_eq!(result.outcome, Outcome::Direct);
    assert!(s.is_unlocked(node(&c, "Hunt 3")));
    assert_eq!(s.pools().currency.spent(), spent + 2);
}

#[test]
fn test_already_unlocked_target_is_direct_noop() {
    let c = chaos_catalog();
    let mut s = Session::new(&c);
    s.activate_by_fast_path(node(&c, "Hunt 1"));
    let before = s.report(true);

    let result = s.activate_by_fast_path(node(&c, "Hunt 1"));
    assert_eq!(result.outcome, Outcome::Direct);
    assert_eq!(result.report.unlocked, before.unlocked);
    assert_eq!(result.report.pools, before.pools);
}

#[test]
fn test_gap_too_large_is_unreachable() {
    let c = build(vec![
        chain("Tiny", 1, 2).grants(Eldritch, 2),
        chain("Spire", 3, 2).requires(Eldritch, 20),
    ]);
    let mut s = Session::new(&c);
    let result = s.activate_by_fast_path(node(&c, "Spire 1"));

    assert!(result.outcome.is_unreachable());
    assert!(!result.report.applied);
    assert_eq!(s.unlocked_count(), 0);
    assert_eq!(s.pools().currency.amount(), 55);
}

#[test]
fn test_currency_shortfall_is_unreachable_without_mutation() {
    let c = chaos_catalog();
    let config = SessionConfig { starting_currency: 3, ..SessionConfig::default() };
    let mut s = Session::with_config(&c, config);
    let result = s.activate_by_fast_path(node(&c, "Hunt 1"));

    assert!(result.outcome.is_unreachable());
    assert_eq!(s.unlocked_count(), 0);
    assert_eq!(s.pools().currency.amount(), 3);
    assert!(AffinityKind::ALL.iter().all(|&k| s.points(k) == 0));
}

#[test]
fn test_incompletable_filler_never_planned() {
    let c = broken_filler_catalog();
    assert!(!c.cluster(cluster(&c, "Broken")).completable);
    let mut s = Session::new(&c);
    let target = node(&c, "Vault 1");

    let planned = s.plan_for(target);
    let Outcome::Plan(plan) = &planned else {
        panic!("expected a plan, got {planned:?}");
    };
    assert_eq!(plan.clusters, [cluster(&c, "Whole")]);
    assert_eq!(plan.cost, 3);

    let result = s.activate_by_fast_path(target);
    assert_eq!(result.outcome, planned);
    assert!(result.report.applied);
    assert!(s.is_unlocked(target));
    assert!(s.is_complete(cluster(&c, "Whole")));
    assert!(!s.is_unlocked(node(&c, "Broken 1")));
    assert_eq!(s.points(Order), 6);
}

#[test]
fn test_unreachable_star_refused_by_plan_and_execution() {
    let c = broken_filler_catalog();
    let target = node(&c, "Broken 3");
    assert!(!c.node(target).reachable);
    assert!(c.node(node(&c, "Broken 2")).reachable);

    let mut s = Session::new(&c);
    assert_eq!(s.plan_for(target), Outcome::Unreachable);
    let result = s.activate_by_fast_path(target);
    assert_eq!(result.outcome, Outcome::Unreachable);
    assert!(!result.report.applied);
    assert_eq!(s.unlocked_count(), 0);
    assert_eq!(s.pools().currency.amount(), 55);
}

#[test]
fn test_completed_filler_not_replanned() {
    let c = order_catalog();
    let mut s = Session::new(&c);
    s.activate_by_fast_path(node(&c, "Vault 1"));
    assert!(s.is_complete(cluster(&c, "Six")));

    // Vault's entry is unlocked now, so further Vault nodes go direct.
    let result = s.activate_by_fast_path(node(&c, "Vault 2"));
    assert_eq!(result.outcome, Outcome::Direct);
    assert!(!s.is_complete(cluster(&c, "Three")));
}

#[test]
fn test_fillers_are_tier_one_only() {
    let c = build(vec![
        chain("Heavy", 2, 2).grants(Ascendant, 5),
        chain("Light", 1, 3).grants(Ascendant, 5),
        chain("Crown", 3, 1).requires(Ascendant, 5),
    ]);
    assert_eq!(c.cluster(cluster(&c, "Heavy")).tier, Tier::Two);
    let s = Session::new(&c);
    let Outcome::Plan(plan) = s.plan_for(node(&c, "Crown 1")) else {
        panic!("expected a plan");
    };
    assert_eq!(plan.clusters, [cluster(&c, "Light")]);
}
