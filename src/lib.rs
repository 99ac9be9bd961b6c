//! # devotion-core
//!
//! Affinity-gated skill-tree progression: an unlock state machine over a static
//! catalog of nodes and clusters, and a planner that finds the cheapest set of
//! filler clusters to complete before a locked target becomes reachable.
//!
//! ---
//!
//! ## The model
//!
//! **Nodes in clusters.** Every node belongs to one cluster. A cluster's entry
//! node is gated by affinity thresholds; later nodes are gated by how many of
//! their siblings are already unlocked, optionally restricted to one branch.
//!
//! **Five affinity pools with floors.** Completing a cluster adds its bonus to
//! the pools. Unlocking an entry node raises the floor of every kind it
//! required, so bonuses that other clusters depend on can never be taken back.
//!
//! **One currency.** Every unlock costs one unit; every lock refunds one.
//!
//! **Fast mode.** When a target's cluster is out of reach the planner splits
//! each affinity gap into bounded integer partitions, binds every part to a
//! cheap tier-one cluster, compares five strategies by total cost, and executes
//! the winner: bootstrap anchors, fillers, target chain, then retract whatever
//! anchors are no longer load-bearing.
//!
//! ---
//!
//! ## The pipeline
//!
//! ```text
//! target ─► outstanding gap ─► partitions ─► Possibility ─► Strategy × 5 ─► Plan
//!                                  ↑              ↑                          │
//!                           tuning tables     Binding                     Session
//!                                                                  (scratch, commit)
//! ```
//!
//! ## Module overview
//!
//! | Module | Key types | What it does |
//! |--------|-----------|--------------|
//! | [`affinity`] | [`AffinityKind`], [`AffinityPool`], [`Pools`] | Five pools with monotonic floors, shared currency |
//! | [`catalog`] | [`Catalog`], [`ClusterSpec`], [`NodeId`], [`ClusterId`] | Validated, immutable node/cluster registry |
//! | [`attributes`] | [`AttributeLedger`] | Running attribute totals of the unlocked set |
//! | [`session`] | [`Session`], [`SessionConfig`] | Unlock state machine and boundary operations |
//! | [`partition`] | [`enumerate_partitions`] | Bounded integer partitions and part-count tables |
//! | [`possibility`] | [`Possibility`], [`Binding`] | Greedy partition-to-cluster binding |
//! | [`planner`] | [`PlanBuilder`], [`Strategy`], [`Outcome`] | Strategy comparison and fast-path execution |
//! | [`reference`] | [`reference::catalog`] | Reference 109-cluster constellation catalog |
//! | [`error`] | [`CatalogError`] | Catalog construction and name resolution errors |
//!
//! ## Quick start
//!
//! ```rust
//! use devotion_core::{reference, Session};
//!
//! let catalog = reference::catalog().unwrap();
//! let mut session = Session::new(&catalog);
//! let target = catalog.resolve_node("First Lion Star").unwrap();
//! let result = session.activate_by_fast_path(target);
//! assert!(session.is_unlocked(target));
//! assert!(result.report.applied);
//! ```
//!
//! ## `no_std`
//!
//! This crate is `#![no_std]` by default and needs only `alloc`. Enable `std`
//! for std-backed `tracing` and `thiserror`, `serde` for serialisable reports
//! and snapshots, and `python-ffi` for the PyO3 bindings.
//!
//! ## License
//!
//! Business Source License 1.1. Free for evaluation and non-production use.
//! Change date: 23 February 2032, then Apache License 2.0.
//! Commercial production use requires a license from Flout Labs (cbyrne@floutlabs.com).

#![cfg_attr(not(any(feature = "std", feature = "python-ffi", test)), no_std)]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

#[cfg(any(feature = "std", feature = "python-ffi"))]
extern crate std;

pub mod affinity;
pub mod attributes;
pub mod catalog;
pub mod error;
pub mod partition;
pub mod planner;
pub mod possibility;
pub mod reference;
pub mod session;

#[cfg(feature = "python-ffi")]
pub mod ffi;

// ─── Re-exports ─────────────────────────────────────────────────────────────

pub use affinity::{AffinityKind, AffinityPool, AffinitySet, CurrencyPool, Grant, PoolSnapshot, Pools};
pub use attributes::{AttributeLedger, AttributeTotal};
pub use catalog::{
    AttributeEffect, AttributeValue, Catalog, CatalogBuilder, Cluster, ClusterId, ClusterSpec, Node,
    NodeId, NodeSpec, Tier,
};
pub use error::CatalogError;
pub use partition::{enumerate_partitions, Partition};
pub use planner::{FastPathReport, Outcome, Plan, PlanBuilder, SolveContext, Strategy};
pub use possibility::{Approach, Binding, Possibility};
pub use session::{ActivationReport, Session, SessionConfig};
