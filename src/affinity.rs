//! Affinity kinds, per-kind point pools and the shared unlock currency.
//!
//! # Invariants
//!
//! - **Floor**: after every committed mutation `points >= floor` for every
//!   [`AffinityPool`]. A release that would cross the floor is refused before
//!   anything is changed.
//! - **Monotonic floor**: `floor` only ever rises (`max(floor, requirement)`);
//!   only [`Pools::reset`] lowers it back to zero.
//! - **Currency**: every successful activation spends exactly one unit and every
//!   successful deactivation refunds exactly one.
//! - no_std compatible; [`AffinitySet`] is a fixed-capacity `heapless::Vec`.

use core::fmt;
use core::str::FromStr;

use crate::error::CatalogError;

/// Default unlock currency a fresh session starts with.
pub const DEFAULT_CURRENCY: u32 = 55;

// ─── Affinity Kind ──────────────────────────────────────────────────────────

/// One of the five affinity resources.
///
/// The declaration order is the canonical iteration order everywhere in the
/// crate (pool arrays, snapshots, strategy primaries).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AffinityKind {
    /// Ascendant affinity.
    Ascendant,
    /// Chaos affinity.
    Chaos,
    /// Eldritch affinity.
    Eldritch,
    /// Order affinity.
    Order,
    /// Primordial affinity.
    Primordial,
}

impl AffinityKind {
    /// All kinds in canonical order.
    pub const ALL: [AffinityKind; 5] = [
        AffinityKind::Ascendant,
        AffinityKind::Chaos,
        AffinityKind::Eldritch,
        AffinityKind::Order,
        AffinityKind::Primordial,
    ];

    /// Position of this kind in [`AffinityKind::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            AffinityKind::Ascendant => "Ascendant",
            AffinityKind::Chaos => "Chaos",
            AffinityKind::Eldritch => "Eldritch",
            AffinityKind::Order => "Order",
            AffinityKind::Primordial => "Primordial",
        }
    }
}

impl fmt::Display for AffinityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AffinityKind {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AffinityKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CatalogError::UnknownAffinity(s.into()))
    }
}

// ─── Affinity Set ───────────────────────────────────────────────────────────

/// A single `kind → amount` entry of a requirement, bonus or outstanding map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grant {
    /// Affinity kind.
    pub kind: AffinityKind,
    /// Amount of that kind.
    pub amount: u8,
}

/// Small ordered map from affinity kind to amount.
///
/// Holds at most one entry per kind and preserves insertion order, which is
/// the order a cluster declared its requirement or bonus in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AffinitySet(heapless::Vec<Grant, 5>);

impl AffinitySet {
    /// Empty set.
    pub fn new() -> Self {
        Self(heapless::Vec::new())
    }

    /// Insert a new entry. Fails with the kind when it is already present.
    pub fn insert(&mut self, kind: AffinityKind, amount: u8) -> Result<(), AffinityKind> {
        if self.contains(kind) {
            return Err(kind);
        }
        // Capacity equals the number of kinds, so a fresh kind always fits.
        self.0.push(Grant { kind, amount }).map_err(|g| g.kind)
    }

    /// Build from pairs, rejecting repeated kinds.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, AffinityKind>
    where
        I: IntoIterator<Item = (AffinityKind, u8)>,
    {
        let mut set = Self::new();
        for (kind, amount) in pairs {
            set.insert(kind, amount)?;
        }
        Ok(set)
    }

    /// Entry for `kind`, if any.
    pub fn get(&self, kind: AffinityKind) -> Option<&Grant> {
        self.0.iter().find(|g| g.kind == kind)
    }

    /// Amount for `kind`, zero when absent.
    pub fn amount(&self, kind: AffinityKind) -> u8 {
        self.get(kind).map_or(0, |g| g.amount)
    }

    /// Whether `kind` has an entry.
    pub fn contains(&self, kind: AffinityKind) -> bool {
        self.get(kind).is_some()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Grant> + '_ {
        self.0.iter()
    }

    /// Kinds in insertion order.
    pub fn kinds(&self) -> impl Iterator<Item = AffinityKind> + '_ {
        self.0.iter().map(|g| g.kind)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there are no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ─── Affinity Pool ──────────────────────────────────────────────────────────

/// Point counter for one affinity kind, protected by a monotonic floor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AffinityPool {
    /// Kind this pool accumulates.
    pub kind: AffinityKind,
    points: u32,
    floor: u32,
}

impl AffinityPool {
    /// Empty pool for `kind`.
    pub fn new(kind: AffinityKind) -> Self {
        Self { kind, points: 0, floor: 0 }
    }

    /// Current points.
    pub fn points(&self) -> u32 {
        self.points
    }

    /// Current floor.
    pub fn floor(&self) -> u32 {
        self.floor
    }

    /// Add completion bonus points.
    pub fn add(&mut self, amount: u32) {
        self.points = self.points.saturating_add(amount);
    }

    /// Whether `amount` can be removed without dropping below the floor.
    pub fn can_release(&self, amount: u32) -> bool {
        self.points
            .checked_sub(amount)
            .is_some_and(|left| left >= self.floor)
    }

    /// Remove `amount` points. Refused (returns `false`, no change) when it
    /// would cross the floor.
    pub fn release(&mut self, amount: u32) -> bool {
        if !self.can_release(amount) {
            return false;
        }
        self.points -= amount;
        true
    }

    /// Raise the floor to `level` if it is higher than the current floor.
    pub fn raise_floor(&mut self, level: u32) {
        self.floor = self.floor.max(level);
    }

    /// Zero points and floor.
    pub fn reset(&mut self) {
        self.points = 0;
        self.floor = 0;
    }
}

// ─── Currency ───────────────────────────────────────────────────────────────

/// Shared unlock currency.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurrencyPool {
    amount: u32,
    start: u32,
}

impl CurrencyPool {
    /// Pool holding `start` units.
    pub fn new(start: u32) -> Self {
        Self { amount: start, start }
    }

    /// Units left.
    pub fn amount(&self) -> u32 {
        self.amount
    }

    /// Units spent since the last reset.
    pub fn spent(&self) -> u32 {
        self.start.saturating_sub(self.amount)
    }

    /// True when nothing is left to spend.
    pub fn is_exhausted(&self) -> bool {
        self.amount == 0
    }

    /// Spend one unit. Returns `false` when exhausted.
    pub fn spend(&mut self) -> bool {
        if self.is_exhausted() {
            return false;
        }
        self.amount -= 1;
        true
    }

    /// Return one unit.
    pub fn refund(&mut self) {
        self.amount = self.amount.saturating_add(1);
    }

    /// Restore the starting amount.
    pub fn reset(&mut self) {
        self.amount = self.start;
    }
}

impl Default for CurrencyPool {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY)
    }
}

// ─── Pools ──────────────────────────────────────────────────────────────────

/// The five affinity pools plus the currency pool of one session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pools {
    affinity: [AffinityPool; 5],
    /// Shared unlock currency.
    pub currency: CurrencyPool,
}

impl Pools {
    /// Fresh pools with `currency` units to spend.
    pub fn new(currency: u32) -> Self {
        Self {
            affinity: AffinityKind::ALL.map(AffinityPool::new),
            currency: CurrencyPool::new(currency),
        }
    }

    /// Pool for `kind`.
    pub fn pool(&self, kind: AffinityKind) -> &AffinityPool {
        &self.affinity[kind.index()]
    }

    /// Mutable pool for `kind`.
    pub fn pool_mut(&mut self, kind: AffinityKind) -> &mut AffinityPool {
        &mut self.affinity[kind.index()]
    }

    /// Current points of `kind`.
    pub fn points(&self, kind: AffinityKind) -> u32 {
        self.pool(kind).points()
    }

    /// Whether every threshold in `requirement` is met by current points.
    pub fn meets(&self, requirement: &AffinitySet) -> bool {
        requirement
            .iter()
            .all(|g| self.points(g.kind) >= u32::from(g.amount))
    }

    /// Amounts of `requirement` still missing, in declaration order.
    /// Kinds already satisfied are omitted.
    pub fn outstanding(&self, requirement: &AffinitySet) -> AffinitySet {
        let mut out = AffinitySet::new();
        for g in requirement.iter() {
            let missing = u32::from(g.amount).saturating_sub(self.points(g.kind));
            if missing > 0 {
                let missing = u8::try_from(missing).unwrap_or(u8::MAX);
                // Requirement kinds are unique, so the insert cannot collide.
                out.insert(g.kind, missing).ok();
            }
        }
        out
    }

    /// Copy of points, floors and currency.
    pub fn snapshot(&self) -> PoolSnapshot {
        PoolSnapshot {
            points: self.affinity.map(|p| p.points()),
            floors: self.affinity.map(|p| p.floor()),
            currency: self.currency.amount(),
        }
    }

    /// Zero every pool and restore the currency.
    pub fn reset(&mut self) {
        for pool in &mut self.affinity {
            pool.reset();
        }
        self.currency.reset();
    }
}

impl Default for Pools {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY)
    }
}

/// Point-in-time copy of a session's pools.
///
/// Arrays are indexed by [`AffinityKind::index`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolSnapshot {
    /// Points per kind.
    pub points: [u32; 5],
    /// Floor per kind.
    pub floors: [u32; 5],
    /// Currency left.
    pub currency: u32,
}

impl PoolSnapshot {
    /// Points of `kind`.
    pub fn points_of(&self, kind: AffinityKind) -> u32 {
        self.points[kind.index()]
    }

    /// Floor of `kind`.
    pub fn floor_of(&self, kind: AffinityKind) -> u32 {
        self.floors[kind.index()]
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse_case_insensitive() {
        assert_eq!("chaos".parse::<AffinityKind>(), Ok(AffinityKind::Chaos));
        assert_eq!(" Primordial ".parse::<AffinityKind>(), Ok(AffinityKind::Primordial));
        assert!(matches!(
            "Void".parse::<AffinityKind>(),
            Err(CatalogError::UnknownAffinity(_))
        ));
    }

    #[test]
    fn test_kind_index_matches_all_order() {
        for (i, k) in AffinityKind::ALL.iter().enumerate() {
            assert_eq!(k.index(), i);
        }
    }

    #[test]
    fn test_set_rejects_duplicate_kind() {
        let mut s = AffinitySet::new();
        assert!(s.insert(AffinityKind::Order, 3).is_ok());
        assert_eq!(s.insert(AffinityKind::Order, 1), Err(AffinityKind::Order));
        assert_eq!(s.amount(AffinityKind::Order), 3);
        assert_eq!(s.amount(AffinityKind::Chaos), 0);
    }

    #[test]
    fn test_set_preserves_insertion_order() {
        let s = AffinitySet::from_pairs([
            (AffinityKind::Primordial, 2),
            (AffinityKind::Ascendant, 1),
        ])
        .unwrap();
        let kinds: alloc::vec::Vec<_> = s.kinds().collect();
        assert_eq!(kinds, [AffinityKind::Primordial, AffinityKind::Ascendant]);
    }

    #[test]
    fn test_pool_release_respects_floor() {
        let mut p = AffinityPool::new(AffinityKind::Chaos);
        p.add(4);
        p.raise_floor(3);
        assert!(p.can_release(1));
        assert!(!p.can_release(2));
        assert!(!p.release(2));
        assert_eq!(p.points(), 4);
        assert!(p.release(1));
        assert_eq!(p.points(), 3);
    }

    #[test]
    fn test_pool_release_more_than_held_refused() {
        let mut p = AffinityPool::new(AffinityKind::Order);
        p.add(1);
        assert!(!p.release(2));
        assert_eq!(p.points(), 1);
    }

    #[test]
    fn test_floor_never_lowers() {
        let mut p = AffinityPool::new(AffinityKind::Eldritch);
        p.raise_floor(5);
        p.raise_floor(2);
        assert_eq!(p.floor(), 5);
        p.reset();
        assert_eq!(p.floor(), 0);
    }

    #[test]
    fn test_currency_spend_until_exhausted() {
        let mut c = CurrencyPool::new(2);
        assert!(c.spend());
        assert!(c.spend());
        assert!(!c.spend());
        assert!(c.is_exhausted());
        assert_eq!(c.spent(), 2);
        c.refund();
        assert_eq!(c.amount(), 1);
        c.reset();
        assert_eq!(c.amount(), 2);
    }

    #[test]
    fn test_outstanding_omits_met_kinds() {
        let mut pools = Pools::default();
        pools.pool_mut(AffinityKind::Order).add(4);
        let req = AffinitySet::from_pairs([
            (AffinityKind::Order, 3),
            (AffinityKind::Chaos, 2),
        ])
        .unwrap();
        assert!(!pools.meets(&req));
        let out = pools.outstanding(&req);
        assert_eq!(out.len(), 1);
        assert_eq!(out.amount(AffinityKind::Chaos), 2);
    }

    #[test]
    fn test_outstanding_keeps_largest_amount() {
        let pools = Pools::default();
        let req = AffinitySet::from_pairs([
            (AffinityKind::Eldritch, u8::MAX),
            (AffinityKind::Order, 1),
        ])
        .unwrap();
        let out = pools.outstanding(&req);
        assert_eq!(out, req);
    }

    #[test]
    fn test_snapshot_and_reset() {
        let mut pools = Pools::new(10);
        pools.pool_mut(AffinityKind::Primordial).add(3);
        pools.pool_mut(AffinityKind::Primordial).raise_floor(2);
        assert!(pools.currency.spend());
        let snap = pools.snapshot();
        assert_eq!(snap.points_of(AffinityKind::Primordial), 3);
        assert_eq!(snap.floor_of(AffinityKind::Primordial), 2);
        assert_eq!(snap.currency, 9);
        pools.reset();
        assert_eq!(pools.snapshot(), Pools::new(10).snapshot());
    }
}
