//! Python FFI bindings via PyO3.
//!
//! Exposes a session over the [reference catalog](crate::reference) to Python.
//! Nodes and clusters are addressed by name; unknown names raise `ValueError`.
//! For custom catalogs, use the Rust API directly.
//!
//! # Building the Python extension
//!
//! ```bash
//! pip install maturin
//! maturin develop --features python-ffi
//! ```
//!
//! # Usage
//!
//! ```python
//! from devotion_core import Session
//!
//! s = Session()
//! report = s.activate_fast("First Crane Star")
//! print(report.outcome, report.cost)   # "standard", 1
//! print(report.points)                 # {"Ascendant": 0, ..., "Order": 1, ...}
//! print(s.glow())                      # names of every node unlockable right now
//! s.deactivate("First Crane Star")
//! s.reset()
//! ```

#![allow(non_snake_case)]

use std::collections::HashMap;
use std::sync::OnceLock;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::affinity::AffinityKind;
use crate::catalog::{Catalog, NodeId};
use crate::error::CatalogError;
use crate::planner::Outcome;
use crate::reference;
use crate::session::{ActivationReport, Session};

static CATALOG: OnceLock<Result<Catalog, CatalogError>> = OnceLock::new();

fn catalog() -> PyResult<&'static Catalog> {
    CATALOG
        .get_or_init(reference::catalog)
        .as_ref()
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

fn to_py(e: CatalogError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

fn names(catalog: &Catalog, ids: &[NodeId]) -> Vec<String> {
    ids.iter().map(|&id| catalog.node(id).name.clone()).collect()
}

// ── Report ───────────────────────────────────────────────────────────────────

/// Session state after an operation.
#[pyclass(name = "Report")]
#[derive(Clone)]
pub struct PyReport {
    applied: bool,
    unlocked: Vec<String>,
    glow: Vec<String>,
    points: HashMap<String, u32>,
    currency: u32,
    outcome: Option<String>,
    cost: Option<u32>,
}

impl PyReport {
    fn new(session: &Session<'_>, report: &ActivationReport, outcome: Option<&Outcome>) -> Self {
        let catalog = session.catalog();
        let points = AffinityKind::ALL
            .iter()
            .map(|&k| (k.name().to_string(), report.pools.points_of(k)))
            .collect();
        let (outcome, cost) = match outcome {
            None => (None, None),
            Some(Outcome::Direct) => (Some("direct".to_string()), Some(0)),
            Some(Outcome::Plan(plan)) => (Some(plan.strategy.clone()), Some(plan.cost)),
            Some(Outcome::Unreachable) => (Some("unreachable".to_string()), None),
        };
        Self {
            applied: report.applied,
            unlocked: names(catalog, &report.unlocked),
            glow: names(catalog, &session.preview_activatable()),
            points,
            currency: report.pools.currency,
            outcome,
            cost,
        }
    }
}

#[pymethods]
impl PyReport {
    /// True when the operation changed the session.
    #[getter]
    pub fn applied(&self) -> bool {
        self.applied
    }
    /// Names of every unlocked node.
    #[getter]
    pub fn unlocked(&self) -> Vec<String> {
        self.unlocked.clone()
    }
    /// Names of every node that could be unlocked next.
    #[getter]
    pub fn glow(&self) -> Vec<String> {
        self.glow.clone()
    }
    /// Points per affinity name.
    #[getter]
    pub fn points(&self) -> HashMap<String, u32> {
        self.points.clone()
    }
    /// Currency left.
    #[getter]
    pub fn currency(&self) -> u32 {
        self.currency
    }
    /// Strategy name, `"direct"` or `"unreachable"`; `None` outside fast mode.
    #[getter]
    pub fn outcome(&self) -> Option<String> {
        self.outcome.clone()
    }
    /// Plan cost; `None` when unreachable or outside fast mode.
    #[getter]
    pub fn cost(&self) -> Option<u32> {
        self.cost
    }

    fn __repr__(&self) -> String {
        format!(
            "Report(applied={}, unlocked={}, currency={})",
            self.applied,
            self.unlocked.len(),
            self.currency
        )
    }
}

// ── Session ──────────────────────────────────────────────────────────────────

/// Unlock session over the reference catalog.
#[pyclass(name = "Session")]
pub struct PySession {
    catalog: &'static Catalog,
    inner: Session<'static>,
}

#[pymethods]
impl PySession {
    /// Create a fresh session with the default currency.
    #[new]
    pub fn new() -> PyResult<Self> {
        let catalog = catalog()?;
        Ok(Self { catalog, inner: Session::new(catalog) })
    }

    /// Unlock a node, completing filler clusters first when needed.
    pub fn activate_fast(&mut self, name: &str) -> PyResult<PyReport> {
        let id = self.catalog.resolve_node(name).map_err(to_py)?;
        let r = self.inner.activate_by_fast_path(id);
        Ok(PyReport::new(&self.inner, &r.report, Some(&r.outcome)))
    }

    /// Unlock a single node if its preconditions hold.
    pub fn activate(&mut self, name: &str) -> PyResult<PyReport> {
        let id = self.catalog.resolve_node(name).map_err(to_py)?;
        let r = self.inner.activate_direct(id);
        Ok(PyReport::new(&self.inner, &r, None))
    }

    /// Lock a single node if ordering and floors allow it.
    pub fn deactivate(&mut self, name: &str) -> PyResult<PyReport> {
        let id = self.catalog.resolve_node(name).map_err(to_py)?;
        let r = self.inner.deactivate_direct(id);
        Ok(PyReport::new(&self.inner, &r, None))
    }

    /// Lock everything and restore the currency.
    pub fn reset(&mut self) -> PyReport {
        self.inner.reset_all();
        PyReport::new(&self.inner, &self.inner.report(true), None)
    }

    /// Names of every node that could be unlocked right now.
    pub fn glow(&self) -> Vec<String> {
        names(self.catalog, &self.inner.preview_activatable())
    }

    /// Points still missing per affinity for a cluster's entry node.
    pub fn describe(&self, cluster: &str) -> PyResult<HashMap<String, u8>> {
        let id = self.catalog.resolve_cluster(cluster).map_err(to_py)?;
        Ok(self
            .inner
            .describe_requirement(id)
            .iter()
            .map(|g| (g.kind.name().to_string(), g.amount))
            .collect())
    }

    /// Combined attribute totals of the unlocked nodes, sorted by name.
    pub fn attributes(&self) -> Vec<(String, f32)> {
        self.inner
            .attributes()
            .sorted()
            .into_iter()
            .map(|(name, total)| (name.to_string(), total.combined()))
            .collect()
    }

    fn __repr__(&self) -> String {
        format!(
            "Session(unlocked={}, currency={})",
            self.inner.unlocked_count(),
            self.inner.pools().currency.amount()
        )
    }
}

// ── Module ───────────────────────────────────────────────────────────────────

/// Python module definition.
#[pymodule]
pub fn devotion_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySession>()?;
    m.add_class::<PyReport>()?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add("STARTING_CURRENCY", crate::affinity::DEFAULT_CURRENCY)?;
    Ok(())
}
