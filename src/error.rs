//! Catalog construction and lookup errors.
//!
//! Runtime session operations never fail with an error: a refused activation or
//! deactivation is a no-op reported as `false`. Only loading a catalog and
//! resolving external names can produce a [`CatalogError`].

use alloc::string::String;

use crate::affinity::AffinityKind;

/// Reasons a catalog can be rejected, or a name cannot be resolved against it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// An affinity name did not match any of the five kinds.
    #[error("unknown affinity `{0}`")]
    UnknownAffinity(String),

    /// The same affinity appears twice in one requirement or bonus map.
    #[error("cluster `{cluster}` lists affinity {kind:?} more than once")]
    DuplicateAffinity {
        /// Offending cluster.
        cluster: String,
        /// Repeated kind.
        kind: AffinityKind,
    },

    /// Completion bonuses must be within `1..=6`.
    #[error("cluster `{cluster}` grants {amount} {kind:?}, outside 1..=6")]
    BonusOutOfRange {
        /// Offending cluster.
        cluster: String,
        /// Bonus kind.
        kind: AffinityKind,
        /// Declared amount.
        amount: u8,
    },

    /// A cluster was declared without any member nodes.
    #[error("cluster `{0}` has no members")]
    EmptyCluster(String),

    /// The first member of a cluster must be rank 0 on the main sequence.
    #[error("first member of cluster `{0}` must be rank 0 on the main sequence")]
    FirstMemberRank(String),

    /// Tier must be 1, 2 or 3.
    #[error("cluster `{cluster}` has tier {tier}, expected 1..=3")]
    InvalidTier {
        /// Offending cluster.
        cluster: String,
        /// Declared tier.
        tier: u8,
    },

    /// Two nodes or two clusters share a name.
    #[error("duplicate name `{0}`")]
    DuplicateName(String),

    /// Anchors are single-node tier-one clusters granting exactly one point
    /// of exactly one kind.
    #[error("anchor cluster `{0}` is malformed")]
    MalformedAnchor(String),

    /// The catalog exceeds the `u16` id space.
    #[error("catalog exceeds {0} entries")]
    TooManyEntries(usize),

    /// No node with this name exists.
    #[error("unknown node `{0}`")]
    UnknownNode(String),

    /// No cluster with this name exists.
    #[error("unknown cluster `{0}`")]
    UnknownCluster(String),
}
