//! Static node/cluster catalog and its typed registry.
//!
//! A [`Catalog`] is built once through [`CatalogBuilder`], validated, and then
//! only ever read. Sessions borrow it; nothing in the crate mutates it.
//!
//! # Invariants
//!
//! - Every [`NodeId`] and [`ClusterId`] handed out indexes directly into the
//!   catalog that produced it.
//! - Each cluster has at least one member; the first member is rank 0 on the
//!   main sequence.
//! - Completion bonuses are within `1..=6` per kind; a kind appears at most
//!   once per requirement and once per bonus.
//! - Anchor clusters have one node, tier one, and a bonus of exactly 1 point
//!   of a single kind.
//! - Node names and cluster names are unique.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::affinity::{AffinityKind, AffinitySet};
use crate::error::CatalogError;

/// Largest completion bonus a cluster may grant for a single kind.
pub const MAX_BONUS: u8 = 6;

// ─── Identifiers ────────────────────────────────────────────────────────────

/// Index of a node in its [`Catalog`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub u16);

impl NodeId {
    /// Position in [`Catalog::nodes`].
    pub fn index(self) -> usize {
        usize::from(self.0)
    }
}

/// Index of a cluster in its [`Catalog`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClusterId(pub u16);

impl ClusterId {
    /// Position in [`Catalog::clusters`].
    pub fn index(self) -> usize {
        usize::from(self.0)
    }
}

/// Cluster tier. Only tier-one clusters are ever used as fillers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tier {
    /// Tier one.
    One,
    /// Tier two.
    Two,
    /// Tier three.
    Three,
}

impl Tier {
    fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Tier::One),
            2 => Some(Tier::Two),
            3 => Some(Tier::Three),
            _ => None,
        }
    }
}

// ─── Attributes ─────────────────────────────────────────────────────────────

/// Magnitude of one attribute contribution.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttributeValue {
    /// Additive amount.
    Flat(f32),
    /// Percentage, e.g. `5.0` for 5%.
    Percent(f32),
}

/// A named attribute contribution carried by a node.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeEffect {
    /// Attribute name, e.g. `"Health"`.
    pub name: String,
    /// Contribution.
    pub value: AttributeValue,
}

// ─── Node / Cluster ─────────────────────────────────────────────────────────

/// One unlockable unit.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    /// Own id.
    pub id: NodeId,
    /// Owning cluster.
    pub cluster: ClusterId,
    /// Unique name.
    pub name: String,
    /// Number of eligible unlocked siblings required before this node may
    /// be activated.
    pub rank: u8,
    /// Branch id. `None` is the main sequence.
    pub line: Option<u8>,
    /// Attribute contributions applied while the node is unlocked.
    pub effects: Vec<AttributeEffect>,
    /// Whether the sibling ordering can ever admit this node.
    pub reachable: bool,
}

impl Node {
    /// True for nodes on the main sequence.
    pub fn is_main(&self) -> bool {
        self.line.is_none()
    }

    /// Whether an unlocked `sibling` counts toward this node's rank.
    ///
    /// Main-sequence nodes count only main-sequence siblings; a branch node
    /// counts main-sequence siblings and siblings on its own branch.
    pub fn counts_sibling(&self, sibling: &Node) -> bool {
        sibling.is_main() || sibling.line == self.line
    }

    /// Whether an unlocked `sibling` prevents this node from being locked.
    ///
    /// A main-sequence node is held by any higher-ranked sibling; a branch
    /// node only by higher-ranked siblings on its own branch.
    pub fn held_by(&self, sibling: &Node) -> bool {
        sibling.rank > self.rank && (self.is_main() || sibling.line == self.line)
    }
}

/// An ordered, possibly forked group of nodes sharing one requirement and
/// one completion bonus.
#[derive(Clone, Debug, PartialEq)]
pub struct Cluster {
    /// Own id.
    pub id: ClusterId,
    /// Unique name.
    pub name: String,
    /// Member nodes in declaration order; the first is the entry node.
    pub members: Vec<NodeId>,
    /// Thresholds that must be met to activate the entry node.
    pub requirement: AffinitySet,
    /// Points granted once every member is unlocked.
    pub bonus: AffinitySet,
    /// Tier.
    pub tier: Tier,
    /// Bootstrap producer flag.
    pub anchor: bool,
    /// Whether every member is reachable, so the bonus can be earned.
    pub completable: bool,
}

impl Cluster {
    /// Number of member nodes; the currency cost of completing the cluster.
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Entry node.
    pub fn first_member(&self) -> NodeId {
        // Validated non-empty at build time.
        self.members[0]
    }

    /// Completion bonus for `kind`, zero when not granted.
    pub fn grants(&self, kind: AffinityKind) -> u8 {
        self.bonus.amount(kind)
    }

    /// Tier-one clusters may be used as fillers.
    pub fn is_filler(&self) -> bool {
        self.tier == Tier::One
    }
}

// ─── Catalog ────────────────────────────────────────────────────────────────

/// Immutable registry of every node and cluster.
#[derive(Clone, Debug)]
pub struct Catalog {
    nodes: Vec<Node>,
    clusters: Vec<Cluster>,
    node_names: HashMap<String, NodeId>,
    cluster_names: HashMap<String, ClusterId>,
    anchors: Vec<ClusterId>,
}

impl Catalog {
    /// Start building a catalog.
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    /// Node by id.
    ///
    /// # Panics
    ///
    /// If `id` was not produced by this catalog.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Cluster by id.
    ///
    /// # Panics
    ///
    /// If `id` was not produced by this catalog.
    pub fn cluster(&self, id: ClusterId) -> &Cluster {
        &self.clusters[id.index()]
    }

    /// Cluster owning `node`.
    pub fn cluster_of(&self, node: NodeId) -> &Cluster {
        self.cluster(self.node(node).cluster)
    }

    /// All nodes in id order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All clusters in id order.
    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    /// Anchor clusters in declaration order.
    pub fn anchors(&self) -> &[ClusterId] {
        &self.anchors
    }

    /// Look up a node by exact name.
    pub fn node_by_name(&self, name: &str) -> Option<NodeId> {
        self.node_names.get(name).copied()
    }

    /// Look up a cluster by exact name.
    pub fn cluster_by_name(&self, name: &str) -> Option<ClusterId> {
        self.cluster_names.get(name).copied()
    }

    /// Resolve an external node name, failing with [`CatalogError::UnknownNode`].
    pub fn resolve_node(&self, name: &str) -> Result<NodeId, CatalogError> {
        self.node_by_name(name)
            .ok_or_else(|| CatalogError::UnknownNode(name.into()))
    }

    /// Resolve an external cluster name, failing with [`CatalogError::UnknownCluster`].
    pub fn resolve_cluster(&self, name: &str) -> Result<ClusterId, CatalogError> {
        self.cluster_by_name(name)
            .ok_or_else(|| CatalogError::UnknownCluster(name.into()))
    }

    /// True when `node` is the entry node of its cluster.
    pub fn is_first_member(&self, node: NodeId) -> bool {
        self.cluster_of(node).first_member() == node
    }
}

// ─── Builder ────────────────────────────────────────────────────────────────

/// Declaration of one member node.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeSpec {
    name: String,
    rank: u8,
    line: Option<u8>,
    effects: Vec<AttributeEffect>,
}

impl NodeSpec {
    /// Main-sequence node.
    pub fn main(name: impl Into<String>, rank: u8) -> Self {
        Self { name: name.into(), rank, line: None, effects: Vec::new() }
    }

    /// Node on branch `line`.
    pub fn branch(name: impl Into<String>, rank: u8, line: u8) -> Self {
        Self { name: name.into(), rank, line: Some(line), effects: Vec::new() }
    }

    /// Attach an attribute contribution.
    pub fn effect(mut self, name: impl Into<String>, value: AttributeValue) -> Self {
        self.effects.push(AttributeEffect { name: name.into(), value });
        self
    }
}

/// Declaration of one cluster, consumed by [`CatalogBuilder`].
///
/// ```rust
/// use devotion_core::affinity::AffinityKind;
/// use devotion_core::catalog::{Catalog, ClusterSpec};
///
/// let catalog = Catalog::builder()
///     .cluster(
///         ClusterSpec::new("Crossroads of Order", 1)
///             .grants(AffinityKind::Order, 1)
///             .anchor()
///             .main("Crossroads of Order", 0),
///     )
///     .cluster(
///         ClusterSpec::new("Lion", 1)
///             .requires(AffinityKind::Order, 1)
///             .grants(AffinityKind::Order, 3)
///             .main("Lion 1", 0)
///             .main("Lion 2", 1)
///             .main("Lion 3", 2),
///     )
///     .build()
///     .unwrap();
/// assert_eq!(catalog.anchors().len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ClusterSpec {
    name: String,
    tier: u8,
    requirement: Vec<(AffinityKind, u8)>,
    bonus: Vec<(AffinityKind, u8)>,
    anchor: bool,
    members: Vec<NodeSpec>,
}

impl ClusterSpec {
    /// New cluster declaration at `tier` (1, 2 or 3).
    pub fn new(name: impl Into<String>, tier: u8) -> Self {
        Self {
            name: name.into(),
            tier,
            requirement: Vec::new(),
            bonus: Vec::new(),
            anchor: false,
            members: Vec::new(),
        }
    }

    /// Add a requirement threshold. A zero threshold is ignored.
    pub fn requires(mut self, kind: AffinityKind, amount: u8) -> Self {
        self.requirement.push((kind, amount));
        self
    }

    /// Add a completion bonus.
    pub fn grants(mut self, kind: AffinityKind, amount: u8) -> Self {
        self.bonus.push((kind, amount));
        self
    }

    /// Mark as a bootstrap anchor.
    pub fn anchor(mut self) -> Self {
        self.anchor = true;
        self
    }

    /// Append a member.
    pub fn member(mut self, node: NodeSpec) -> Self {
        self.members.push(node);
        self
    }

    /// Append a main-sequence member.
    pub fn main(self, name: impl Into<String>, rank: u8) -> Self {
        self.member(NodeSpec::main(name, rank))
    }

    /// Append a member on branch `line`.
    pub fn branch(self, name: impl Into<String>, rank: u8, line: u8) -> Self {
        self.member(NodeSpec::branch(name, rank, line))
    }
}

/// Collects [`ClusterSpec`]s and validates them into a [`Catalog`].
#[derive(Clone, Debug, Default)]
pub struct CatalogBuilder {
    specs: Vec<ClusterSpec>,
}

impl CatalogBuilder {
    /// Empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a cluster.
    pub fn cluster(mut self, spec: ClusterSpec) -> Self {
        self.specs.push(spec);
        self
    }

    /// Add a cluster in place.
    pub fn push(&mut self, spec: ClusterSpec) -> &mut Self {
        self.specs.push(spec);
        self
    }

    /// Validate every declaration and assign ids.
    pub fn build(self) -> Result<Catalog, CatalogError> {
        let total_nodes: usize = self.specs.iter().map(|s| s.members.len()).sum();
        let limit = usize::from(u16::MAX);
        if total_nodes > limit || self.specs.len() > limit {
            return Err(CatalogError::TooManyEntries(limit));
        }

        let mut catalog = Catalog {
            nodes: Vec::with_capacity(total_nodes),
            clusters: Vec::with_capacity(self.specs.len()),
            node_names: HashMap::new(),
            cluster_names: HashMap::new(),
            anchors: Vec::new(),
        };

        for spec in self.specs {
            let cluster_id = ClusterId(catalog.clusters.len() as u16);
            if catalog.cluster_names.contains_key(&spec.name) {
                return Err(CatalogError::DuplicateName(spec.name));
            }
            let tier = Tier::from_level(spec.tier).ok_or_else(|| CatalogError::InvalidTier {
                cluster: spec.name.clone(),
                tier: spec.tier,
            })?;

            let first = spec
                .members
                .first()
                .ok_or_else(|| CatalogError::EmptyCluster(spec.name.clone()))?;
            if first.rank != 0 || first.line.is_some() {
                return Err(CatalogError::FirstMemberRank(spec.name));
            }

            let requirement = AffinitySet::from_pairs(
                spec.requirement.iter().copied().filter(|&(_, amount)| amount > 0),
            )
            .map_err(|kind| CatalogError::DuplicateAffinity {
                cluster: spec.name.clone(),
                kind,
            })?;

            if let Some(&(kind, amount)) = spec
                .bonus
                .iter()
                .find(|&&(_, amount)| amount == 0 || amount > MAX_BONUS)
            {
                return Err(CatalogError::BonusOutOfRange {
                    cluster: spec.name,
                    kind,
                    amount,
                });
            }
            let bonus = AffinitySet::from_pairs(spec.bonus.iter().copied()).map_err(|kind| {
                CatalogError::DuplicateAffinity { cluster: spec.name.clone(), kind }
            })?;

            if spec.anchor {
                let single_point = bonus.len() == 1 && bonus.iter().all(|g| g.amount == 1);
                if spec.members.len() != 1 || tier != Tier::One || !single_point {
                    return Err(CatalogError::MalformedAnchor(spec.name));
                }
                catalog.anchors.push(cluster_id);
            }

            let mut members = Vec::with_capacity(spec.members.len());
            for node in spec.members {
                if catalog.node_names.contains_key(&node.name) {
                    return Err(CatalogError::DuplicateName(node.name));
                }
                let id = NodeId(catalog.nodes.len() as u16);
                catalog.node_names.insert(node.name.clone(), id);
                catalog.nodes.push(Node {
                    id,
                    cluster: cluster_id,
                    name: node.name,
                    rank: node.rank,
                    line: node.line,
                    effects: node.effects,
                    reachable: false,
                });
                members.push(id);
            }

            let completable = mark_reachable(&mut catalog.nodes, &members);
            if !completable {
                tracing::debug!(cluster = %spec.name, "cluster cannot be completed");
            }

            catalog.cluster_names.insert(spec.name.clone(), cluster_id);
            catalog.clusters.push(Cluster {
                id: cluster_id,
                name: spec.name,
                members,
                requirement,
                bonus,
                tier,
                anchor: spec.anchor,
                completable,
            });
        }

        tracing::debug!(
            nodes = catalog.nodes.len(),
            clusters = catalog.clusters.len(),
            anchors = catalog.anchors.len(),
            "catalog built"
        );
        Ok(catalog)
    }
}

/// Mark every member the sibling ordering can ever admit, starting from the
/// entry node. Returns whether that covers the whole cluster.
fn mark_reachable(nodes: &mut [Node], members: &[NodeId]) -> bool {
    let mut reached: Vec<NodeId> = members.iter().copied().take(1).collect();
    loop {
        let before = reached.len();
        for &m in members {
            if reached.contains(&m) {
                continue;
            }
            let node = &nodes[m.index()];
            let support = reached
                .iter()
                .filter(|&&r| node.counts_sibling(&nodes[r.index()]))
                .count();
            if support >= usize::from(node.rank) {
                reached.push(m);
            }
        }
        if reached.len() == before {
            break;
        }
    }
    for &m in &reached {
        nodes[m.index()].reachable = true;
    }
    reached.len() == members.len()
}

// ─── Tests ──────────────────────────────────────────────────────────────────
