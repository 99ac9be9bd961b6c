//! Binding partitions of an affinity gap to concrete filler clusters.
//!
//! A [`Possibility`] is one hypothesis for closing the gap of a single kind:
//! a partition of the outstanding amount plus one selected cluster per part.
//! [`Binding::cheapest`] tries every partition the tuning table allows and
//! keeps the hypothesis with the fewest total member nodes.
//!
//! Selection is greedy within a partition: for each distinct part value,
//! largest first, the cheapest remaining option whose bonus meets the part is
//! taken until the part's multiplicity is covered.

use alloc::vec::Vec;

use crate::affinity::{AffinityKind, AffinitySet};
use crate::catalog::{Catalog, Cluster, ClusterId};
use crate::partition::{enumerate_partitions, rare_part_count, standard_part_count, Partition};

/// Which tuning table sizes the partition, and how options are ranked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Approach {
    /// Single-kind producers, standard part counts.
    Standard,
    /// More, smaller parts; prefers clusters that grant several outstanding
    /// kinds and drops clusters granting kinds that are not needed.
    Rare,
}

impl Approach {
    /// Number of parts to split `amount` of `kind` into.
    pub fn part_count(self, kind: AffinityKind, amount: u8) -> usize {
        match self {
            Approach::Standard => standard_part_count(kind, amount),
            Approach::Rare => rare_part_count(kind, amount),
        }
    }
}

/// One bound partition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Possibility {
    /// Kind this possibility closes.
    pub kind: AffinityKind,
    /// Part sizes, non-increasing.
    pub partition: Partition,
    /// Clusters chosen, one per part, in binding order.
    pub selected: Vec<ClusterId>,
}

impl Possibility {
    /// Total member nodes of the selected clusters.
    pub fn cost(&self, catalog: &Catalog) -> usize {
        self.selected
            .iter()
            .map(|&c| catalog.cluster(c).member_count())
            .sum()
    }
}

/// Candidate pool and context shared by every binding of one solve.
#[derive(Clone, Copy, Debug)]
pub struct Binding<'a> {
    catalog: &'a Catalog,
    eligible: &'a [ClusterId],
    outstanding: &'a AffinitySet,
    max_part: u8,
}

impl<'a> Binding<'a> {
    /// Bind against `eligible` fillers for the gaps in `outstanding`.
    pub fn new(
        catalog: &'a Catalog,
        eligible: &'a [ClusterId],
        outstanding: &'a AffinitySet,
        max_part: u8,
    ) -> Self {
        Self { catalog, eligible, outstanding, max_part }
    }

    /// Number of outstanding kinds `cluster` grants.
    fn coverage(&self, cluster: &Cluster) -> usize {
        cluster.bonus.kinds().filter(|&k| self.outstanding.contains(k)).count()
    }

    /// Eligible clusters granting at least `smallest` of `kind`.
    pub fn options(&self, kind: AffinityKind, smallest: u8, approach: Approach) -> Vec<ClusterId> {
        self.eligible
            .iter()
            .copied()
            .filter(|&id| {
                let c = self.catalog.cluster(id);
                if c.grants(kind) < smallest {
                    return false;
                }
                match approach {
                    Approach::Standard => true,
                    Approach::Rare => {
                        c.bonus.len() == 1 || c.bonus.kinds().all(|k| self.outstanding.contains(k))
                    }
                }
            })
            .collect()
    }

    /// Bind one partition. `None` when any part cannot be covered.
    pub fn bind(
        &self,
        kind: AffinityKind,
        partition: &Partition,
        approach: Approach,
        exclude: &[ClusterId],
    ) -> Option<Possibility> {
        let smallest = *partition.last()?;
        let options = self.options(kind, smallest, approach);
        let mut selected: Vec<ClusterId> = Vec::with_capacity(partition.len());

        // Partition is non-increasing, so runs of equal values are adjacent.
        let mut rest = partition.as_slice();
        while let Some(&value) = rest.first() {
            let count = rest.iter().take_while(|&&p| p == value).count();
            rest = &rest[count..];

            let mut candidates: Vec<&Cluster> = options
                .iter()
                .copied()
                .filter(|id| !selected.contains(id) && !exclude.contains(id))
                .map(|id| self.catalog.cluster(id))
                .filter(|c| c.grants(kind) >= value)
                .collect();
            if candidates.len() < count {
                return None;
            }
            match approach {
                Approach::Standard => candidates.sort_by_key(|c| {
                    (c.member_count(), core::cmp::Reverse(c.grants(kind)), c.id)
                }),
                Approach::Rare => candidates.sort_by_key(|c| {
                    (
                        c.member_count(),
                        core::cmp::Reverse(self.coverage(c)),
                        core::cmp::Reverse(c.grants(kind)),
                        c.id,
                    )
                }),
            }
            selected.extend(candidates.iter().take(count).map(|c| c.id));
        }

        Some(Possibility { kind, partition: partition.clone(), selected })
    }

    /// Cheapest binding over every partition of `amount` sized by `approach`.
    /// The first partition wins cost ties.
    pub fn cheapest(
        &self,
        kind: AffinityKind,
        amount: u8,
        approach: Approach,
        exclude: &[ClusterId],
    ) -> Option<Possibility> {
        let parts = approach.part_count(kind, amount);
        let mut best: Option<(usize, Possibility)> = None;
        for partition in enumerate_partitions(amount, parts, self.max_part) {
            let Some(p) = self.bind(kind, &partition, approach, exclude) else {
                continue;
            };
            let cost = p.cost(self.catalog);
            if best.as_ref().map_or(true, |(b, _)| cost < *b) {
                best = Some((cost, p));
            }
        }
        best.map(|(_, p)| p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::affinity::AffinityKind::*;
    use crate::catalog::ClusterSpec;

    // ── Helpers ───────────────────────────────────────────────────────────

    fn spec(name: &str, size: usize, bonus: &[(AffinityKind, u8)]) -> ClusterSpec {
        let mut s = ClusterSpec::new(name, 1);
        for &(k, a) in bonus {
            s = s.grants(k, a);
        }
        for i in 0..size {
            s = s.main(alloc::format!("{name} {}", i + 1), i as u8);
        }
        s
    }

    fn catalog() -> Catalog {
        Catalog::builder()
            .cluster(spec("Big", 3, &[(Order, 6)]))
            .cluster(spec("Wide", 4, &[(Order, 3)]))
            .cluster(spec("Small", 2, &[(Order, 3)]))
            .cluster(spec("Mixed", 3, &[(Order, 2), (Chaos, 2)]))
            .cluster(spec("Offkind", 2, &[(Order, 2), (Primordial, 2)]))
            .build()
            .unwrap()
    }

    fn all(c: &Catalog) -> Vec<ClusterId> {
        c.clusters().iter().map(|c| c.id).collect()
    }

    fn id(c: &Catalog, name: &str) -> ClusterId {
        c.resolve_cluster(name).unwrap()
    }

    fn part(values: &[u8]) -> Partition {
        Partition::from_slice(values).unwrap()
    }

    // ── Options ───────────────────────────────────────────────────────────

    #[test]
    fn test_options_filter_by_smallest_part() {
        let c = catalog();
        let eligible = all(&c);
        let out = AffinitySet::from_pairs([(Order, 6)]).unwrap();
        let b = Binding::new(&c, &eligible, &out, 6);
        let opts = b.options(Order, 3, Approach::Standard);
        assert_eq!(opts, [id(&c, "Big"), id(&c, "Wide"), id(&c, "Small")]);
    }

    #[test]
    fn test_rare_drops_offkind_multi_bonus() {
        let c = catalog();
        let eligible = all(&c);
        let out = AffinitySet::from_pairs([(Order, 4), (Chaos, 2)]).unwrap();
        let b = Binding::new(&c, &eligible, &out, 6);
        let opts = b.options(Order, 2, Approach::Rare);
        assert!(opts.contains(&id(&c, "Mixed")));
        assert!(!opts.contains(&id(&c, "Offkind")));
        let std_opts = b.options(Order, 2, Approach::Standard);
        assert!(std_opts.contains(&id(&c, "Offkind")));
    }

    // ── Bind ──────────────────────────────────────────────────────────────

    #[test]
    fn test_bind_picks_fewest_members() {
        let c = catalog();
        let eligible = all(&c);
        let out = AffinitySet::from_pairs([(Order, 6)]).unwrap();
        let b = Binding::new(&c, &eligible, &out, 6);
        let p = b.bind(Order, &part(&[3, 3]), Approach::Standard, &[]).unwrap();
        // Small has 2 members, Big 3, Wide 4.
        assert_eq!(p.selected[0], id(&c, "Small"));
        assert_eq!(p.selected.len(), 2);
        assert_eq!(p.selected[1], id(&c, "Big"));
    }

    #[test]
    fn test_bind_fails_when_part_uncoverable() {
        let c = catalog();
        let eligible = all(&c);
        let out = AffinitySet::from_pairs([(Order, 12)]).unwrap();
        let b = Binding::new(&c, &eligible, &out, 6);
        assert!(b.bind(Order, &part(&[6, 6]), Approach::Standard, &[]).is_none());
    }

    #[test]
    fn test_bind_respects_exclude() {
        let c = catalog();
        let eligible = all(&c);
        let out = AffinitySet::from_pairs([(Order, 6)]).unwrap();
        let b = Binding::new(&c, &eligible, &out, 6);
        let big = id(&c, "Big");
        assert!(b.bind(Order, &part(&[6]), Approach::Standard, &[big]).is_none());
        let p = b.bind(Order, &part(&[6]), Approach::Standard, &[]).unwrap();
        assert_eq!(p.selected, [big]);
    }

    #[test]
    fn test_rare_prefers_coverage_on_member_tie() {
        let c = Catalog::builder()
            .cluster(spec("Plain", 3, &[(Order, 2)]))
            .cluster(spec("Double", 3, &[(Order, 2), (Chaos, 2)]))
            .build()
            .unwrap();
        let eligible = all(&c);
        let out = AffinitySet::from_pairs([(Order, 2), (Chaos, 2)]).unwrap();
        let b = Binding::new(&c, &eligible, &out, 6);
        let p = b.bind(Order, &part(&[2]), Approach::Rare, &[]).unwrap();
        assert_eq!(p.selected, [id(&c, "Double")]);
        let p = b.bind(Order, &part(&[2]), Approach::Standard, &[]).unwrap();
        assert_eq!(p.selected, [id(&c, "Plain")]);
    }

    // ── Cheapest ──────────────────────────────────────────────────────────

    #[test]
    fn test_cheapest_order_six_binds_big_and_small() {
        let c = catalog();
        let eligible = all(&c);
        let out = AffinitySet::from_pairs([(Order, 6)]).unwrap();
        let b = Binding::new(&c, &eligible, &out, 6);
        // Order 6 splits into two parts; every partition binds Big + Small.
        let p = b.cheapest(Order, 6, Approach::Standard, &[]).unwrap();
        assert_eq!(p.cost(&c), 5);
        assert_eq!(p.partition.as_slice(), &[3, 3]);
    }

    #[test]
    fn test_cheapest_none_without_options() {
        let c = catalog();
        let out = AffinitySet::from_pairs([(Eldritch, 3)]).unwrap();
        let eligible = all(&c);
        let b = Binding::new(&c, &eligible, &out, 6);
        assert!(b.cheapest(Eldritch, 3, Approach::Standard, &[]).is_none());
    }
}
