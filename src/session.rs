//! The node/cluster unlock state machine.
//!
//! A [`Session`] borrows an immutable [`Catalog`] and owns everything that
//! changes: the unlocked node set, the five affinity pools, the currency pool
//! and the attribute ledger. Independent sessions never share state.
//!
//! # Invariants
//!
//! - **Activation**: a node is unlocked only if currency remains and either it
//!   is its cluster's entry node and every requirement threshold is met, or it
//!   has at least `rank` eligible unlocked siblings.
//! - **Ordering**: a node cannot be locked while a higher-ranked sibling on its
//!   branch is unlocked (main-sequence nodes are held by every higher rank).
//! - **Floor**: completing-cluster bonuses are only reversed when every bonus
//!   kind stays at or above its floor; otherwise nothing changes.
//! - **Completion** is derived from the unlocked set, never stored.
//! - Refused operations are silent no-ops returning `false`.

use alloc::vec::Vec;

use hashbrown::HashSet;

use crate::affinity::{AffinityKind, AffinitySet, PoolSnapshot, Pools, DEFAULT_CURRENCY};
use crate::attributes::AttributeLedger;
use crate::catalog::{Catalog, ClusterId, Node, NodeId};
use crate::partition::MAX_PART;

// ─── Configuration ──────────────────────────────────────────────────────────

/// Session tuning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionConfig {
    /// Currency a fresh or reset session holds.
    pub starting_currency: u32,
    /// Largest single part used when partitioning an affinity gap.
    pub max_part: u8,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            starting_currency: DEFAULT_CURRENCY,
            max_part: MAX_PART,
        }
    }
}

// ─── Reports ────────────────────────────────────────────────────────────────

/// State returned to callers after a boundary operation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActivationReport {
    /// Whether the operation changed anything.
    pub applied: bool,
    /// Every unlocked node, ascending.
    pub unlocked: Vec<NodeId>,
    /// Pools after the operation.
    pub pools: PoolSnapshot,
}

// ─── Session ────────────────────────────────────────────────────────────────

/// Mutable unlock state over one catalog.
#[derive(Clone, Debug)]
pub struct Session<'c> {
    catalog: &'c Catalog,
    config: SessionConfig,
    pools: Pools,
    unlocked: HashSet<NodeId>,
    attributes: AttributeLedger,
}

impl<'c> Session<'c> {
    /// Fresh session with the default configuration.
    pub fn new(catalog: &'c Catalog) -> Self {
        Self::with_config(catalog, SessionConfig::default())
    }

    /// Fresh session with `config`.
    pub fn with_config(catalog: &'c Catalog, config: SessionConfig) -> Self {
        Self {
            catalog,
            config,
            pools: Pools::new(config.starting_currency),
            unlocked: HashSet::new(),
            attributes: AttributeLedger::new(),
        }
    }

    /// Catalog this session runs over.
    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Active configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Affinity and currency pools.
    pub fn pools(&self) -> &Pools {
        &self.pools
    }

    /// Attribute totals of the unlocked nodes.
    pub fn attributes(&self) -> &AttributeLedger {
        &self.attributes
    }

    /// Whether `node` is unlocked.
    pub fn is_unlocked(&self, node: NodeId) -> bool {
        self.unlocked.contains(&node)
    }

    /// Unlocked nodes, ascending.
    pub fn unlocked_nodes(&self) -> Vec<NodeId> {
        let mut out: Vec<_> = self.unlocked.iter().copied().collect();
        out.sort_unstable();
        out
    }

    /// Number of unlocked nodes.
    pub fn unlocked_count(&self) -> usize {
        self.unlocked.len()
    }

    /// Whether every member of `cluster` is unlocked.
    pub fn is_complete(&self, cluster: ClusterId) -> bool {
        self.catalog
            .cluster(cluster)
            .members
            .iter()
            .all(|m| self.unlocked.contains(m))
    }

    /// Threshold amounts of `cluster` not yet covered by current points.
    pub fn describe_requirement(&self, cluster: ClusterId) -> AffinitySet {
        self.pools.outstanding(&self.catalog.cluster(cluster).requirement)
    }

    // ── Activation ────────────────────────────────────────────────────────

    fn unlocked_siblings<'a>(&'a self, node: &'a Node) -> impl Iterator<Item = &'c Node> + 'a {
        let catalog = self.catalog;
        catalog
            .cluster(node.cluster)
            .members
            .iter()
            .filter(move |&&m| m != node.id && self.unlocked.contains(&m))
            .map(move |&m| catalog.node(m))
    }

    /// Dry-run of [`Session::activate`].
    pub fn can_activate(&self, node: NodeId) -> bool {
        if self.is_unlocked(node) || self.pools.currency.is_exhausted() {
            return false;
        }
        let catalog = self.catalog;
        let n = catalog.node(node);
        let cluster = catalog.cluster(n.cluster);
        if cluster.first_member() == node {
            return self.pools.meets(&cluster.requirement);
        }
        let eligible = self
            .unlocked_siblings(n)
            .filter(|s| n.counts_sibling(s))
            .count();
        eligible >= usize::from(n.rank)
    }

    /// Unlock `node`. Returns `false` and changes nothing when refused.
    pub fn activate(&mut self, node: NodeId) -> bool {
        if !self.can_activate(node) || !self.pools.currency.spend() {
            tracing::debug!(node = node.0, "activation refused");
            return false;
        }
        let catalog = self.catalog;
        let n = catalog.node(node);
        let cluster = catalog.cluster(n.cluster);

        self.unlocked.insert(node);
        self.attributes.apply(&n.effects);

        if cluster.first_member() == node {
            for g in cluster.requirement.iter() {
                self.pools.pool_mut(g.kind).raise_floor(u32::from(g.amount));
            }
        }
        if self.is_complete(cluster.id) {
            for g in cluster.bonus.iter() {
                self.pools.pool_mut(g.kind).add(u32::from(g.amount));
            }
            tracing::trace!(cluster = %cluster.name, "cluster completed");
        }
        tracing::trace!(node = %n.name, currency = self.pools.currency.amount(), "node unlocked");
        true
    }

    /// Unlock every member of `cluster` in declaration order, retrying until
    /// no further progress is made. Returns whether the cluster is complete.
    pub fn activate_cluster(&mut self, cluster: ClusterId) -> bool {
        let catalog = self.catalog;
        let members = &catalog.cluster(cluster).members;
        loop {
            let mut progressed = false;
            for &m in members {
                if !self.is_unlocked(m) && self.activate(m) {
                    progressed = true;
                }
            }
            if !progressed {
                break;
            }
        }
        self.is_complete(cluster)
    }

    /// Unlock `target` together with the shortest chain of lower-ranked
    /// siblings leading to it. Returns whether `target` ends up unlocked.
    pub fn walk_to(&mut self, target: NodeId) -> bool {
        let catalog = self.catalog;
        let t = catalog.node(target);
        let mut path: Vec<&Node> = catalog
            .cluster(t.cluster)
            .members
            .iter()
            .map(|&m| catalog.node(m))
            .filter(|n| n.id == target || (n.rank < t.rank && t.counts_sibling(n)))
            .collect();
        path.sort_by_key(|n| (n.rank, n.id == target, n.id));

        for n in path {
            if !self.is_unlocked(n.id) && !self.activate(n.id) {
                break;
            }
        }
        self.is_unlocked(target)
    }

    // ── Deactivation ──────────────────────────────────────────────────────

    /// Dry-run of [`Session::deactivate`].
    pub fn can_deactivate(&self, node: NodeId) -> bool {
        if !self.is_unlocked(node) {
            return false;
        }
        let n = self.catalog.node(node);
        if self.unlocked_siblings(n).any(|s| n.held_by(s)) {
            return false;
        }
        let cluster = self.catalog.cluster(n.cluster);
        !self.is_complete(cluster.id)
            || cluster
                .bonus
                .iter()
                .all(|g| self.pools.pool(g.kind).can_release(u32::from(g.amount)))
    }

    /// Lock `node`, refunding its currency and reversing the completion bonus
    /// of its cluster if it was complete. Returns `false` and changes nothing
    /// when refused.
    pub fn deactivate(&mut self, node: NodeId) -> bool {
        if !self.can_deactivate(node) {
            tracing::debug!(node = node.0, "deactivation refused");
            return false;
        }
        let catalog = self.catalog;
        let n = catalog.node(node);
        let cluster = catalog.cluster(n.cluster);

        if self.is_complete(cluster.id) {
            for g in cluster.bonus.iter() {
                let released = self.pools.pool_mut(g.kind).release(u32::from(g.amount));
                debug_assert!(released, "can_deactivate admitted a release below the floor");
            }
        }
        self.unlocked.remove(&node);
        self.pools.currency.refund();
        self.attributes.strip(&n.effects);
        tracing::trace!(node = %n.name, currency = self.pools.currency.amount(), "node locked");
        true
    }

    /// Clear every unlock, zero every pool and restore the currency.
    pub fn reset(&mut self) {
        self.unlocked.clear();
        self.pools.reset();
        self.attributes.clear();
        tracing::info!("session reset");
    }

    // ── Boundary operations ───────────────────────────────────────────────

    /// Every locked node that [`Session::activate`] would currently accept,
    /// ascending.
    pub fn preview_activatable(&self) -> Vec<NodeId> {
        self.catalog
            .nodes()
            .iter()
            .map(|n| n.id)
            .filter(|&id| self.can_activate(id))
            .collect()
    }

    /// Current unlocked set and pools.
    pub fn report(&self, applied: bool) -> ActivationReport {
        ActivationReport {
            applied,
            unlocked: self.unlocked_nodes(),
            pools: self.pools.snapshot(),
        }
    }

    /// Activate a single node and report the resulting state.
    pub fn activate_direct(&mut self, node: NodeId) -> ActivationReport {
        let applied = self.activate(node);
        self.report(applied)
    }

    /// Deactivate a single node and report the resulting state.
    pub fn deactivate_direct(&mut self, node: NodeId) -> ActivationReport {
        let applied = self.deactivate(node);
        self.report(applied)
    }

    /// Reset and return the fresh pools.
    pub fn reset_all(&mut self) -> PoolSnapshot {
        self.reset();
        self.pools.snapshot()
    }

    /// Points currently held for `kind`.
    pub fn points(&self, kind: AffinityKind) -> u32 {
        self.pools.points(kind)
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AttributeValue, ClusterSpec, NodeSpec};

    // ── Helpers ───────────────────────────────────────────────────────────

    /// Chaos anchor, a 3-node Chaos producer and a forked Chaos consumer.
    fn catalog() -> Catalog {
        Catalog::builder()
            .cluster(
                ClusterSpec::new("Crossroads of Chaos", 1)
                    .grants(AffinityKind::Chaos, 1)
                    .anchor()
                    .member(
                        NodeSpec::main("Crossroads of Chaos", 0)
                            .effect("Health", AttributeValue::Percent(5.0)),
                    ),
            )
            .cluster(
                ClusterSpec::new("Jackal", 1)
                    .requires(AffinityKind::Chaos, 1)
                    .grants(AffinityKind::Chaos, 3)
                    .main("Jackal 1", 0)
                    .main("Jackal 2", 1)
                    .main("Jackal 3", 2),
            )
            .cluster(
                ClusterSpec::new("Fork", 2)
                    .requires(AffinityKind::Chaos, 3)
                    .grants(AffinityKind::Eldritch, 2)
                    .main("Fork 1", 0)
                    .main("Fork 2", 1)
                    .branch("Fork 3a", 2, 1)
                    .branch("Fork 3b", 2, 2)
                    .branch("Fork 4a", 3, 1),
            )
            .build()
            .unwrap()
    }

    fn id(c: &Catalog, name: &str) -> NodeId {
        c.resolve_node(name).unwrap()
    }

    fn cid(c: &Catalog, name: &str) -> ClusterId {
        c.resolve_cluster(name).unwrap()
    }

    // ── Activation ────────────────────────────────────────────────────────

    #[test]
    fn test_anchor_activation_grants_point() {
        let c = catalog();
        let mut s = Session::new(&c);
        assert!(s.activate(id(&c, "Crossroads of Chaos")));
        assert_eq!(s.points(AffinityKind::Chaos), 1);
        assert_eq!(s.pools().currency.amount(), DEFAULT_CURRENCY - 1);
        assert!(s.attributes().get("Health").is_some());
    }

    #[test]
    fn test_entry_node_requires_threshold() {
        let c = catalog();
        let mut s = Session::new(&c);
        assert!(!s.activate(id(&c, "Jackal 1")));
        assert_eq!(s.pools().currency.amount(), DEFAULT_CURRENCY);
        s.activate(id(&c, "Crossroads of Chaos"));
        assert!(s.activate(id(&c, "Jackal 1")));
        assert_eq!(s.pools().pool(AffinityKind::Chaos).floor(), 1);
    }

    #[test]
    fn test_rank_requires_siblings() {
        let c = catalog();
        let mut s = Session::new(&c);
        s.activate(id(&c, "Crossroads of Chaos"));
        s.activate(id(&c, "Jackal 1"));
        assert!(!s.activate(id(&c, "Jackal 3")));
        assert!(s.activate(id(&c, "Jackal 2")));
        assert!(s.activate(id(&c, "Jackal 3")));
        assert!(s.is_complete(cid(&c, "Jackal")));
        assert_eq!(s.points(AffinityKind::Chaos), 4);
    }

    #[test]
    fn test_activation_idempotent() {
        let c = catalog();
        let mut s = Session::new(&c);
        let anchor = id(&c, "Crossroads of Chaos");
        assert!(s.activate(anchor));
        let before = s.report(false);
        assert!(!s.activate(anchor));
        assert_eq!(s.report(false), before);
    }

    #[test]
    fn test_activation_refused_when_currency_exhausted() {
        let c = catalog();
        let config = SessionConfig { starting_currency: 1, ..SessionConfig::default() };
        let mut s = Session::with_config(&c, config);
        assert!(s.activate(id(&c, "Crossroads of Chaos")));
        assert!(!s.activate(id(&c, "Jackal 1")));
        assert!(s.preview_activatable().is_empty());
    }

    #[test]
    fn test_branch_counts_only_own_line() {
        let c = catalog();
        let mut s = Session::new(&c);
        s.activate_cluster(cid(&c, "Crossroads of Chaos"));
        assert!(s.activate_cluster(cid(&c, "Jackal")));
        s.activate(id(&c, "Fork 1"));
        s.activate(id(&c, "Fork 2"));
        s.activate(id(&c, "Fork 3b"));
        // Fork 4a counts main + line 1 only: Fork 1, Fork 2 = 2 < 3.
        assert!(!s.can_activate(id(&c, "Fork 4a")));
        assert!(s.activate(id(&c, "Fork 3a")));
        assert!(s.activate(id(&c, "Fork 4a")));
        assert!(s.is_complete(cid(&c, "Fork")));
        assert_eq!(s.points(AffinityKind::Eldritch), 2);
    }

    #[test]
    fn test_walk_to_skips_other_branches() {
        let c = catalog();
        let mut s = Session::new(&c);
        s.activate_cluster(cid(&c, "Crossroads of Chaos"));
        s.activate_cluster(cid(&c, "Jackal"));
        assert!(s.walk_to(id(&c, "Fork 4a")));
        assert!(s.is_unlocked(id(&c, "Fork 3a")));
        assert!(!s.is_unlocked(id(&c, "Fork 3b")));
    }

    #[test]
    fn test_walk_to_stops_on_refusal() {
        let c = catalog();
        let mut s = Session::new(&c);
        assert!(!s.walk_to(id(&c, "Jackal 3")));
        assert_eq!(s.unlocked_count(), 0);
    }

    // ── Deactivation ──────────────────────────────────────────────────────

    #[test]
    fn test_deactivate_blocked_by_higher_rank() {
        let c = catalog();
        let mut s = Session::new(&c);
        s.activate_cluster(cid(&c, "Crossroads of Chaos"));
        s.activate(id(&c, "Jackal 1"));
        s.activate(id(&c, "Jackal 2"));
        assert!(!s.deactivate(id(&c, "Jackal 1")));
        assert!(s.deactivate(id(&c, "Jackal 2")));
        assert!(s.deactivate(id(&c, "Jackal 1")));
    }

    #[test]
    fn test_branch_node_not_held_by_other_branch() {
        let c = catalog();
        let mut s = Session::new(&c);
        s.activate_cluster(cid(&c, "Crossroads of Chaos"));
        s.activate_cluster(cid(&c, "Jackal"));
        s.walk_to(id(&c, "Fork 4a"));
        s.activate(id(&c, "Fork 3b"));
        assert!(s.deactivate(id(&c, "Fork 3b")));
        assert!(!s.deactivate(id(&c, "Fork 3a")));
        assert!(!s.deactivate(id(&c, "Fork 2")));
    }

    #[test]
    fn test_deactivate_refused_below_floor() {
        let c = catalog();
        let mut s = Session::new(&c);
        s.activate_cluster(cid(&c, "Crossroads of Chaos"));
        s.activate_cluster(cid(&c, "Jackal"));
        s.activate(id(&c, "Fork 1"));
        // Chaos: 4 points, floor 3. Losing Jackal's 3 would leave 1.
        let before = s.report(false);
        assert!(!s.deactivate(id(&c, "Jackal 3")));
        assert_eq!(s.report(false), before);
        // The anchor's single point can go: 4 - 1 = 3 >= 3.
        assert!(s.deactivate(id(&c, "Crossroads of Chaos")));
        assert_eq!(s.points(AffinityKind::Chaos), 3);
        assert!(s.attributes().is_empty());
    }

    #[test]
    fn test_deactivate_incomplete_cluster_keeps_points() {
        let c = catalog();
        let mut s = Session::new(&c);
        s.activate_cluster(cid(&c, "Crossroads of Chaos"));
        s.activate(id(&c, "Jackal 1"));
        assert!(s.deactivate(id(&c, "Jackal 1")));
        assert_eq!(s.points(AffinityKind::Chaos), 1);
    }

    #[test]
    fn test_deactivate_complete_cluster_releases_bonus() {
        let c = catalog();
        let mut s = Session::new(&c);
        s.activate_cluster(cid(&c, "Crossroads of Chaos"));
        s.activate_cluster(cid(&c, "Jackal"));
        assert_eq!(s.points(AffinityKind::Chaos), 4);
        assert!(s.deactivate(id(&c, "Jackal 3")));
        assert_eq!(s.points(AffinityKind::Chaos), 1);
        // No longer complete, so the next removal releases nothing.
        assert!(s.deactivate(id(&c, "Jackal 2")));
        assert_eq!(s.points(AffinityKind::Chaos), 1);
    }

    #[test]
    fn test_currency_conserved_on_round_trip() {
        let c = catalog();
        let mut s = Session::new(&c);
        s.activate_cluster(cid(&c, "Crossroads of Chaos"));
        s.activate_cluster(cid(&c, "Jackal"));
        for name in ["Jackal 3", "Jackal 2", "Jackal 1"] {
            assert!(s.deactivate(id(&c, name)));
        }
        assert_eq!(s.pools().currency.amount(), DEFAULT_CURRENCY - 1);
    }

    // ── Boundary ──────────────────────────────────────────────────────────

    #[test]
    fn test_preview_and_describe() {
        let c = catalog();
        let mut s = Session::new(&c);
        assert_eq!(s.preview_activatable(), [id(&c, "Crossroads of Chaos")]);
        let fork = cid(&c, "Fork");
        assert_eq!(s.describe_requirement(fork).amount(AffinityKind::Chaos), 3);
        s.activate(id(&c, "Crossroads of Chaos"));
        assert_eq!(s.preview_activatable(), [id(&c, "Jackal 1")]);
        assert_eq!(s.describe_requirement(fork).amount(AffinityKind::Chaos), 2);
    }

    #[test]
    fn test_direct_reports_and_reset() {
        let c = catalog();
        let mut s = Session::new(&c);
        let anchor = id(&c, "Crossroads of Chaos");
        let r = s.activate_direct(anchor);
        assert!(r.applied);
        assert_eq!(r.unlocked, [anchor]);
        assert_eq!(r.pools.points_of(AffinityKind::Chaos), 1);

        let r = s.deactivate_direct(id(&c, "Jackal 1"));
        assert!(!r.applied);

        let fresh = s.reset_all();
        assert_eq!(fresh.currency, DEFAULT_CURRENCY);
        assert_eq!(s.unlocked_count(), 0);
        assert!(s.attributes().is_empty());
    }
}
