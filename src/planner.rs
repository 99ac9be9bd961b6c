//! Fast-mode planning: choosing the cheapest set of filler clusters that
//! closes a target cluster's affinity gap, and executing it.
//!
//! # Pipeline
//!
//! ```text
//! target ─► outstanding gap ─► Strategy × 5 ─► trim surplus ─► cost ─► min
//!                                   │                                   │
//!                              Binding (partition → clusters)     Outcome::Plan
//! ```
//!
//! # Invariants
//!
//! - Every strategy sees the same [`SolveContext`]; residual gaps are always
//!   recomputed from the context's outstanding amounts, one value per kind.
//! - Cost is `Σ member count`, minus one when no anchor cluster is selected.
//! - The minimum cost wins; ties go to the strategy registered first.
//! - A target that no strategy can reach yields [`Outcome::Unreachable`] and
//!   leaves the session untouched.
//! - Execution runs on a scratch copy of the session; the copy replaces the
//!   live session only if the target ends up unlocked.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use crate::affinity::{AffinityKind, AffinitySet};
use crate::catalog::{Catalog, ClusterId, NodeId};
use crate::possibility::{Approach, Binding};
use crate::session::{ActivationReport, Session};

/// Cost reported for [`Outcome::Unreachable`].
pub const UNREACHABLE_COST: u32 = u32::MAX;

// ─── Context ────────────────────────────────────────────────────────────────

/// Inputs shared by every strategy of one solve.
#[derive(Clone, Copy, Debug)]
pub struct SolveContext<'a> {
    /// Catalog being planned over.
    pub catalog: &'a Catalog,
    /// Clusters that may be selected as fillers.
    pub eligible: &'a [ClusterId],
    /// Gap per kind, in the target cluster's declaration order. The first
    /// entry is the primary kind.
    pub outstanding: &'a AffinitySet,
    /// Largest single part.
    pub max_part: u8,
}

impl<'a> SolveContext<'a> {
    fn binding(&self) -> Binding<'a> {
        Binding::new(self.catalog, self.eligible, self.outstanding, self.max_part)
    }

    /// Bonus of `kind` supplied by `selected`.
    pub fn supplied(&self, kind: AffinityKind, selected: &[ClusterId]) -> u32 {
        selected
            .iter()
            .map(|&c| u32::from(self.catalog.cluster(c).grants(kind)))
            .sum()
    }

    /// Gap of `kind` left after `selected` is completed.
    pub fn residual(&self, kind: AffinityKind, selected: &[ClusterId]) -> u8 {
        let gap = u32::from(self.outstanding.amount(kind));
        // gap fits in u8, so does anything below it.
        gap.saturating_sub(self.supplied(kind, selected)) as u8
    }

    /// Whether `selected` closes every gap.
    pub fn covers(&self, selected: &[ClusterId]) -> bool {
        self.outstanding.kinds().all(|k| self.residual(k, selected) == 0)
    }

    /// Plan cost of `selected`.
    pub fn cost(&self, selected: &[ClusterId]) -> u32 {
        let members: usize = selected
            .iter()
            .map(|&c| self.catalog.cluster(c).member_count())
            .sum();
        let members = u32::try_from(members).unwrap_or(u32::MAX);
        let has_anchor = selected.iter().any(|&c| self.catalog.cluster(c).anchor);
        if has_anchor {
            members
        } else {
            members.saturating_sub(1)
        }
    }

    /// Close the gap of `kind` from scratch and append the picks.
    fn solve_full(&self, kind: AffinityKind, approach: Approach, selected: &mut Vec<ClusterId>) -> Option<()> {
        let amount = self.outstanding.amount(kind);
        let p = self.binding().cheapest(kind, amount, approach, &[])?;
        merge(selected, &p.selected);
        Some(())
    }

    /// Close whatever `selected` leaves of `kind`'s gap, with standard sizing,
    /// never re-picking a selected cluster.
    fn solve_residual(&self, kind: AffinityKind, selected: &mut Vec<ClusterId>) -> Option<()> {
        let left = self.residual(kind, selected.as_slice());
        if left == 0 {
            return Some(());
        }
        let p = self
            .binding()
            .cheapest(kind, left, Approach::Standard, selected.as_slice())?;
        merge(selected, &p.selected);
        Some(())
    }

    /// Drop the largest cluster whose removal keeps every gap closed, until
    /// no such cluster remains.
    pub fn trim_surplus(&self, selected: &mut Vec<ClusterId>) {
        loop {
            let mut order: Vec<usize> = (0..selected.len()).collect();
            order.sort_by_key(|&i| {
                core::cmp::Reverse(self.catalog.cluster(selected[i]).member_count())
            });
            let removable = order.into_iter().find(|&i| {
                let mut without = selected.clone();
                without.remove(i);
                self.covers(&without)
            });
            match removable {
                Some(i) => {
                    selected.remove(i);
                }
                None => break,
            }
        }
    }
}

fn merge(into: &mut Vec<ClusterId>, picks: &[ClusterId]) {
    for &c in picks {
        if !into.contains(&c) {
            into.push(c);
        }
    }
}

// ─── Strategies ─────────────────────────────────────────────────────────────

/// One way of turning a gap into a filler selection.
pub trait Strategy {
    /// Name reported in [`Plan::strategy`].
    fn name(&self) -> &'static str;

    /// Whether the strategy applies to a gap spanning `kinds` kinds.
    fn applies_to(&self, kinds: usize) -> bool {
        kinds >= 1
    }

    /// Filler selection closing every gap, or `None`.
    fn solve(&self, ctx: &SolveContext<'_>) -> Option<Vec<ClusterId>>;
}

/// Every kind solved on its own with the standard table.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardStrategy;

impl Strategy for StandardStrategy {
    fn name(&self) -> &'static str {
        "standard"
    }

    fn solve(&self, ctx: &SolveContext<'_>) -> Option<Vec<ClusterId>> {
        let mut selected = Vec::new();
        for kind in ctx.outstanding.kinds() {
            ctx.solve_full(kind, Approach::Standard, &mut selected)?;
        }
        Some(selected)
    }
}

/// Every kind solved on its own with the rare table and multi-bonus
/// preference.
#[derive(Clone, Copy, Debug, Default)]
pub struct RareStrategy;

impl Strategy for RareStrategy {
    fn name(&self) -> &'static str {
        "rare"
    }

    fn solve(&self, ctx: &SolveContext<'_>) -> Option<Vec<ClusterId>> {
        let mut selected = Vec::new();
        for kind in ctx.outstanding.kinds() {
            ctx.solve_full(kind, Approach::Rare, &mut selected)?;
        }
        Some(selected)
    }
}

/// Rare primary, residual secondary, standard tertiary.
#[derive(Clone, Copy, Debug, Default)]
pub struct RareResidualStrategy;

impl Strategy for RareResidualStrategy {
    fn name(&self) -> &'static str {
        "rare-residual"
    }

    fn applies_to(&self, kinds: usize) -> bool {
        kinds >= 2
    }

    fn solve(&self, ctx: &SolveContext<'_>) -> Option<Vec<ClusterId>> {
        let mut kinds = ctx.outstanding.kinds();
        let primary = kinds.next()?;
        let secondary = kinds.next()?;
        let mut selected = Vec::new();
        ctx.solve_full(primary, Approach::Rare, &mut selected)?;
        ctx.solve_residual(secondary, &mut selected)?;
        for tertiary in kinds {
            ctx.solve_full(tertiary, Approach::Standard, &mut selected)?;
        }
        Some(selected)
    }
}

/// Rare primary, then every further kind residual-solved against everything
/// selected so far.
#[derive(Clone, Copy, Debug, Default)]
pub struct RareChainStrategy;

impl Strategy for RareChainStrategy {
    fn name(&self) -> &'static str {
        "rare-chain"
    }

    fn applies_to(&self, kinds: usize) -> bool {
        kinds >= 3
    }

    fn solve(&self, ctx: &SolveContext<'_>) -> Option<Vec<ClusterId>> {
        let mut kinds = ctx.outstanding.kinds();
        let primary = kinds.next()?;
        let mut selected = Vec::new();
        ctx.solve_full(primary, Approach::Rare, &mut selected)?;
        for kind in kinds {
            ctx.solve_residual(kind, &mut selected)?;
        }
        Some(selected)
    }
}

/// Standard primary; applicable only when one of its picks also feeds
/// another outstanding kind, which is then residual-solved.
#[derive(Clone, Copy, Debug, Default)]
pub struct MixedStrategy;

impl Strategy for MixedStrategy {
    fn name(&self) -> &'static str {
        "mixed"
    }

    fn applies_to(&self, kinds: usize) -> bool {
        kinds >= 2
    }

    fn solve(&self, ctx: &SolveContext<'_>) -> Option<Vec<ClusterId>> {
        let mut kinds = ctx.outstanding.kinds();
        let primary = kinds.next()?;
        let mut selected = Vec::new();
        ctx.solve_full(primary, Approach::Standard, &mut selected)?;
        let feeds_other = ctx
            .outstanding
            .kinds()
            .filter(|&k| k != primary)
            .any(|k| ctx.supplied(k, &selected) > 0);
        if !feeds_other {
            return None;
        }
        for kind in kinds {
            ctx.solve_residual(kind, &mut selected)?;
        }
        Some(selected)
    }
}

// ─── Outcome ────────────────────────────────────────────────────────────────

/// A costed filler selection.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plan {
    /// Strategy that produced it.
    pub strategy: String,
    /// Filler clusters to complete, in execution order.
    pub clusters: Vec<ClusterId>,
    /// Plan cost.
    pub cost: u32,
}

/// Result of planning for a target node.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Requirement already met; the target chain is unlocked directly.
    Direct,
    /// Fillers needed first.
    Plan(Plan),
    /// No strategy closes the gap.
    Unreachable,
}

impl Outcome {
    /// Plan cost; zero for [`Outcome::Direct`], [`UNREACHABLE_COST`] for
    /// [`Outcome::Unreachable`].
    pub fn cost(&self) -> u32 {
        match self {
            Outcome::Direct => 0,
            Outcome::Plan(p) => p.cost,
            Outcome::Unreachable => UNREACHABLE_COST,
        }
    }

    /// True for [`Outcome::Unreachable`].
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Outcome::Unreachable)
    }
}

// ─── Plan Builder ───────────────────────────────────────────────────────────

/// Runs every applicable strategy and keeps the cheapest plan.
pub struct PlanBuilder {
    strategies: Vec<Box<dyn Strategy>>,
}

impl PlanBuilder {
    /// Builder with no strategies.
    pub fn empty() -> Self {
        Self { strategies: Vec::new() }
    }

    /// Register a strategy. Earlier strategies win cost ties.
    pub fn with(mut self, strategy: impl Strategy + 'static) -> Self {
        self.strategies.push(Box::new(strategy));
        self
    }

    /// Cheapest plan over every applicable strategy.
    pub fn plan(&self, ctx: &SolveContext<'_>) -> Outcome {
        let kinds = ctx.outstanding.len();
        let mut best: Option<Plan> = None;
        for strategy in self.strategies.iter().filter(|s| s.applies_to(kinds)) {
            let Some(mut clusters) = strategy.solve(ctx) else {
                tracing::debug!(strategy = strategy.name(), "no selection");
                continue;
            };
            ctx.trim_surplus(&mut clusters);
            if !ctx.covers(&clusters) {
                continue;
            }
            let cost = ctx.cost(&clusters);
            tracing::debug!(strategy = strategy.name(), cost, fillers = clusters.len(), "strategy costed");
            if best.as_ref().map_or(true, |b| cost < b.cost) {
                best = Some(Plan { strategy: strategy.name().into(), clusters, cost });
            }
        }
        best.map_or(Outcome::Unreachable, Outcome::Plan)
    }
}

impl Default for PlanBuilder {
    fn default() -> Self {
        Self::empty()
            .with(StandardStrategy)
            .with(RareStrategy)
            .with(RareResidualStrategy)
            .with(RareChainStrategy)
            .with(MixedStrategy)
    }
}

// ─── Session integration ────────────────────────────────────────────────────

/// Result of [`Session::activate_by_fast_path`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FastPathReport {
    /// What the planner decided.
    pub outcome: Outcome,
    /// State after execution.
    pub report: ActivationReport,
}

impl<'c> Session<'c> {
    /// Copy of this session with every anchor completed, the completable fillers
    /// that copy could use for `target`, and the gap measured before bootstrapping.
    fn prepare(&self, target: NodeId) -> (Session<'c>, Vec<ClusterId>, AffinitySet) {
        let catalog = self.catalog();
        let target_cluster = catalog.node(target).cluster;
        let outstanding = self.describe_requirement(target_cluster);

        let mut scratch = self.clone();
        for &anchor in catalog.anchors() {
            scratch.activate_cluster(anchor);
        }

        let eligible = catalog
            .clusters()
            .iter()
            .filter(|c| {
                c.is_filler()
                    && c.completable
                    && c.id != target_cluster
                    && !self.is_complete(c.id)
                    && scratch.pools().meets(&c.requirement)
                    && c.bonus.kinds().any(|k| outstanding.contains(k))
            })
            .map(|c| c.id)
            .collect();
        (scratch, eligible, outstanding)
    }

    fn needs_fillers(&self, target: NodeId) -> bool {
        let cluster = self.catalog().cluster_of(target);
        !self.is_unlocked(target)
            && !self.is_unlocked(cluster.first_member())
            && !self.describe_requirement(cluster.id).is_empty()
    }

    /// Plan for `target` without changing anything.
    pub fn plan_for(&self, target: NodeId) -> Outcome {
        self.plan_with(target, &PlanBuilder::default())
    }

    /// Plan for `target` with a custom strategy set.
    pub fn plan_with(&self, target: NodeId, builder: &PlanBuilder) -> Outcome {
        if !self.catalog().node(target).reachable {
            return Outcome::Unreachable;
        }
        if !self.needs_fillers(target) {
            return Outcome::Direct;
        }
        let (_, eligible, outstanding) = self.prepare(target);
        let ctx = SolveContext {
            catalog: self.catalog(),
            eligible: &eligible,
            outstanding: &outstanding,
            max_part: self.config().max_part,
        };
        builder.plan(&ctx)
    }

    /// Unlock `target`, first completing the cheapest set of filler clusters
    /// when its cluster's requirement is not yet met.
    pub fn activate_by_fast_path(&mut self, target: NodeId) -> FastPathReport {
        self.activate_by_fast_path_with(target, &PlanBuilder::default())
    }

    /// [`Session::activate_by_fast_path`] with a custom strategy set.
    pub fn activate_by_fast_path_with(&mut self, target: NodeId, builder: &PlanBuilder) -> FastPathReport {
        let catalog = self.catalog();

        if !catalog.node(target).reachable {
            tracing::warn!(node = %catalog.node(target).name, "target outside sibling ordering");
            return FastPathReport { outcome: Outcome::Unreachable, report: self.report(false) };
        }
        if !self.needs_fillers(target) {
            let mut scratch = self.clone();
            let outcome = if scratch.walk_to(target) {
                *self = scratch;
                Outcome::Direct
            } else {
                Outcome::Unreachable
            };
            let applied = !outcome.is_unreachable();
            return FastPathReport { outcome, report: self.report(applied) };
        }

        let (mut scratch, eligible, outstanding) = self.prepare(target);
        let ctx = SolveContext {
            catalog,
            eligible: &eligible,
            outstanding: &outstanding,
            max_part: self.config().max_part,
        };
        let plan = match builder.plan(&ctx) {
            Outcome::Plan(plan) => plan,
            other => {
                tracing::warn!(node = %catalog.node(target).name, "target unreachable");
                return FastPathReport { outcome: other, report: self.report(false) };
            }
        };

        for &cluster in &plan.clusters {
            if !scratch.activate_cluster(cluster) {
                tracing::warn!(cluster = %catalog.cluster(cluster).name, "filler incomplete");
                return FastPathReport { outcome: Outcome::Unreachable, report: self.report(false) };
            }
        }
        if !scratch.walk_to(target) {
            tracing::warn!(node = %catalog.node(target).name, "plan did not reach target");
            return FastPathReport { outcome: Outcome::Unreachable, report: self.report(false) };
        }
        for &anchor in catalog.anchors() {
            let node = catalog.cluster(anchor).first_member();
            if scratch.is_unlocked(node) {
                scratch.deactivate(node);
            }
        }

        *self = scratch;
        tracing::info!(
            node = %catalog.node(target).name,
            strategy = %plan.strategy,
            cost = plan.cost,
            currency = self.pools().currency.amount(),
            "fast path complete"
        );
        FastPathReport { outcome: Outcome::Plan(plan), report: self.report(true) }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::affinity::AffinityKind::*;
    use crate::catalog::ClusterSpec;

    // ── Helpers ───────────────────────────────────────────────────────────

    fn spec(name: &str, size: usize, req: &[(AffinityKind, u8)], bonus: &[(AffinityKind, u8)]) -> ClusterSpec {
        let mut s = ClusterSpec::new(name, 1);
        for &(k, a) in req {
            s = s.requires(k, a);
        }
        for &(k, a) in bonus {
            s = s.grants(k, a);
        }
        for i in 0..size {
            s = s.main(alloc::format!("{name} {}", i + 1), i as u8);
        }
        s
    }

    fn anchor(kind: AffinityKind) -> ClusterSpec {
        let name = alloc::format!("Crossroads of {kind}");
        ClusterSpec::new(name.clone(), 1).grants(kind, 1).anchor().main(name, 0)
    }

    fn ids(c: &Catalog, names: &[&str]) -> Vec<ClusterId> {
        names.iter().map(|n| c.resolve_cluster(n).unwrap()).collect()
    }

    fn ctx_for<'a>(c: &'a Catalog, eligible: &'a [ClusterId], out: &'a AffinitySet) -> SolveContext<'a> {
        SolveContext { catalog: c, eligible, outstanding: out, max_part: 6 }
    }

    // ── Context ───────────────────────────────────────────────────────────

    #[test]
    fn test_residual_and_cost() {
        let c = Catalog::builder()
            .cluster(anchor(Order))
            .cluster(spec("Dual", 4, &[], &[(Order, 2), (Chaos, 3)]))
            .build()
            .unwrap();
        let out = AffinitySet::from_pairs([(Order, 5), (Chaos, 2)]).unwrap();
        let eligible = ids(&c, &["Crossroads of Order", "Dual"]);
        let ctx = ctx_for(&c, &eligible, &out);
        let dual = ids(&c, &["Dual"]);
        assert_eq!(ctx.residual(Order, &dual), 3);
        assert_eq!(ctx.residual(Chaos, &dual), 0);
        assert!(!ctx.covers(&dual));
        assert_eq!(ctx.cost(&dual), 3);
        assert_eq!(ctx.cost(&eligible), 5);
    }

    #[test]
    fn test_trim_drops_redundant_largest() {
        let c = Catalog::builder()
            .cluster(spec("Six", 3, &[], &[(Order, 6)]))
            .cluster(spec("Three", 4, &[], &[(Order, 3)]))
            .build()
            .unwrap();
        let out = AffinitySet::from_pairs([(Order, 6)]).unwrap();
        let eligible = ids(&c, &["Six", "Three"]);
        let ctx = ctx_for(&c, &eligible, &out);
        let mut sel = eligible.clone();
        ctx.trim_surplus(&mut sel);
        assert_eq!(sel, ids(&c, &["Six"]));
    }

    // ── Strategies ────────────────────────────────────────────────────────

    #[test]
    fn test_mixed_not_applicable_without_cross_bonus() {
        let c = Catalog::builder()
            .cluster(spec("O", 3, &[], &[(Order, 3)]))
            .cluster(spec("C", 3, &[], &[(Chaos, 3)]))
            .build()
            .unwrap();
        let out = AffinitySet::from_pairs([(Order, 3), (Chaos, 3)]).unwrap();
        let eligible = ids(&c, &["O", "C"]);
        let ctx = ctx_for(&c, &eligible, &out);
        assert!(MixedStrategy.solve(&ctx).is_none());
        assert!(StandardStrategy.solve(&ctx).is_some());
    }

    #[test]
    fn test_residual_strategy_uses_incidental_bonus() {
        let c = Catalog::builder()
            .cluster(spec("Dual", 3, &[], &[(Order, 3), (Chaos, 2)]))
            .cluster(spec("Chaos Small", 2, &[], &[(Chaos, 1)]))
            .cluster(spec("Chaos Big", 5, &[], &[(Chaos, 3)]))
            .cluster(spec("Order Filler", 2, &[], &[(Order, 1)]))
            .build()
            .unwrap();
        let out = AffinitySet::from_pairs([(Order, 4), (Chaos, 3)]).unwrap();
        let eligible: Vec<_> = c.clusters().iter().map(|c| c.id).collect();
        let ctx = ctx_for(&c, &eligible, &out);
        let sel = MixedStrategy.solve(&ctx).unwrap();
        assert!(ctx.covers(&sel));
        // Dual already supplies 2 Chaos; only 1 more is needed.
        assert!(sel.contains(&ids(&c, &["Chaos Small"])[0]));
        assert!(!sel.contains(&ids(&c, &["Chaos Big"])[0]));
    }

    #[test]
    fn test_applicability_by_kind_count() {
        assert!(StandardStrategy.applies_to(1));
        assert!(!RareResidualStrategy.applies_to(1));
        assert!(RareResidualStrategy.applies_to(2));
        assert!(!RareChainStrategy.applies_to(2));
        assert!(RareChainStrategy.applies_to(3));
        assert!(!MixedStrategy.applies_to(1));
    }

    // ── Builder ───────────────────────────────────────────────────────────

    #[test]
    fn test_builder_unreachable_when_no_fillers() {
        let c = Catalog::builder()
            .cluster(spec("C", 3, &[], &[(Chaos, 3)]))
            .build()
            .unwrap();
        let out = AffinitySet::from_pairs([(Order, 3)]).unwrap();
        let eligible = ids(&c, &["C"]);
        let outcome = PlanBuilder::default().plan(&ctx_for(&c, &eligible, &out));
        assert!(outcome.is_unreachable());
        assert_eq!(outcome.cost(), UNREACHABLE_COST);
    }

    #[test]
    fn test_builder_ties_go_to_first_strategy() {
        let c = Catalog::builder()
            .cluster(spec("O", 3, &[], &[(Order, 3)]))
            .build()
            .unwrap();
        let out = AffinitySet::from_pairs([(Order, 3)]).unwrap();
        let eligible = ids(&c, &["O"]);
        let Outcome::Plan(plan) = PlanBuilder::default().plan(&ctx_for(&c, &eligible, &out)) else {
            panic!("expected a plan");
        };
        assert_eq!(plan.strategy, "standard");
        assert_eq!(plan.clusters, eligible);
        assert_eq!(plan.cost, 2);
    }

    #[test]
    fn test_custom_strategy_set() {
        let c = Catalog::builder()
            .cluster(spec("O", 3, &[], &[(Order, 3)]))
            .cluster(spec("Spare", 2, &[], &[(Order, 1)]))
            .build()
            .unwrap();
        let out = AffinitySet::from_pairs([(Order, 3)]).unwrap();
        let eligible = ids(&c, &["O", "Spare"]);
        let ctx = ctx_for(&c, &eligible, &out);
        assert!(PlanBuilder::empty().plan(&ctx).is_unreachable());
        // Rare splits 3 into [2, 1]; trimming leaves O alone.
        let Outcome::Plan(plan) = PlanBuilder::empty().with(RareStrategy).plan(&ctx) else {
            panic!("expected a plan");
        };
        assert_eq!(plan.strategy, "rare");
        assert_eq!(plan.clusters, ids(&c, &["O"]));
    }

    // ── Session ───────────────────────────────────────────────────────────

    #[test]
    fn test_plan_for_direct_when_requirement_met() {
        let c = Catalog::builder()
            .cluster(anchor(Order))
            .cluster(spec("Lion", 3, &[(Order, 1)], &[(Order, 3)]))
            .build()
            .unwrap();
        let mut s = Session::new(&c);
        let lion3 = c.resolve_node("Lion 3").unwrap();
        assert!(matches!(s.plan_for(lion3), Outcome::Plan(_)));
        s.activate(c.resolve_node("Crossroads of Order").unwrap());
        assert_eq!(s.plan_for(lion3), Outcome::Direct);
        let r = s.activate_by_fast_path(lion3);
        assert_eq!(r.outcome, Outcome::Direct);
        assert!(r.report.applied);
        assert_eq!(s.unlocked_count(), 4);
    }

    #[test]
    fn test_unreachable_leaves_state_untouched() {
        let c = Catalog::builder()
            .cluster(anchor(Order))
            .cluster(spec("Goal", 2, &[(Primordial, 4)], &[]))
            .build()
            .unwrap();
        let mut s = Session::new(&c);
        let goal = c.resolve_node("Goal 2").unwrap();
        let r = s.activate_by_fast_path(goal);
        assert!(r.outcome.is_unreachable());
        assert!(!r.report.applied);
        assert_eq!(s.unlocked_count(), 0);
        assert_eq!(s.pools().currency.amount(), 55);
    }
}
