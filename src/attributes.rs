//! Running attribute totals for the unlocked node set.
//!
//! Each unlocked node contributes its [`AttributeEffect`]s. The ledger keeps
//! flat and percentage sums per attribute name and counts contributing nodes,
//! so an entry disappears once its last contributor is locked again.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::catalog::{AttributeEffect, AttributeValue};

/// Accumulated contribution for one attribute.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeTotal {
    /// Sum of flat contributions.
    pub flat: f32,
    /// Sum of percentage contributions.
    pub percent: f32,
    /// Number of contributing effects.
    pub sources: u32,
}

impl AttributeTotal {
    /// Combined value: `flat + flat × percent / 100` when both parts are
    /// present, otherwise whichever part is present.
    pub fn combined(&self) -> f32 {
        let has_flat = self.flat != 0.0;
        let has_percent = self.percent != 0.0;
        match (has_flat, has_percent) {
            (true, true) => self.flat + self.flat * self.percent / 100.0,
            (true, false) => self.flat,
            _ => self.percent,
        }
    }

    fn push(&mut self, value: AttributeValue) {
        match value {
            AttributeValue::Flat(v) => self.flat += v,
            AttributeValue::Percent(v) => self.percent += v,
        }
        self.sources += 1;
    }

    fn pop(&mut self, value: AttributeValue) {
        match value {
            AttributeValue::Flat(v) => self.flat -= v,
            AttributeValue::Percent(v) => self.percent -= v,
        }
        self.sources = self.sources.saturating_sub(1);
    }
}

/// Attribute name → running total.
#[derive(Clone, Debug, Default)]
pub struct AttributeLedger {
    totals: HashMap<String, AttributeTotal>,
}

impl AttributeLedger {
    /// Empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the contributions of a node that was just unlocked.
    pub fn apply(&mut self, effects: &[AttributeEffect]) {
        for effect in effects {
            self.totals
                .entry(effect.name.clone())
                .or_default()
                .push(effect.value);
        }
    }

    /// Remove the contributions of a node that was just locked.
    pub fn strip(&mut self, effects: &[AttributeEffect]) {
        for effect in effects {
            if let Some(total) = self.totals.get_mut(effect.name.as_str()) {
                total.pop(effect.value);
                if total.sources == 0 {
                    self.totals.remove(effect.name.as_str());
                }
            }
        }
    }

    /// Total for `name`, if any node contributes to it.
    pub fn get(&self, name: &str) -> Option<&AttributeTotal> {
        self.totals.get(name)
    }

    /// Number of attributes with at least one contributor.
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    /// True when nothing contributes.
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Entries sorted by attribute name.
    pub fn sorted(&self) -> Vec<(&str, AttributeTotal)> {
        let mut out: Vec<_> = self
            .totals
            .iter()
            .map(|(name, total)| (name.as_str(), *total))
            .collect();
        out.sort_by(|a, b| a.0.cmp(b.0));
        out
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.totals.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn effect(name: &str, value: AttributeValue) -> AttributeEffect {
        AttributeEffect { name: name.into(), value }
    }

    #[test]
    fn test_combined_flat_and_percent() {
        let t = AttributeTotal { flat: 100.0, percent: 10.0, sources: 2 };
        assert!((t.combined() - 110.0).abs() < 1e-4);
        let flat = AttributeTotal { flat: 18.0, percent: 0.0, sources: 1 };
        assert!((flat.combined() - 18.0).abs() < 1e-4);
        let pct = AttributeTotal { flat: 0.0, percent: 5.0, sources: 1 };
        assert!((pct.combined() - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_apply_then_strip_removes_entry() {
        let mut ledger = AttributeLedger::new();
        let fx = [
            effect("Health", AttributeValue::Percent(5.0)),
            effect("Offensive_Ability", AttributeValue::Flat(18.0)),
        ];
        ledger.apply(&fx);
        ledger.apply(&fx[..1]);
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.get("Health").map(|t| t.sources), Some(2));
        assert!((ledger.get("Health").unwrap().percent - 10.0).abs() < 1e-4);

        ledger.strip(&fx);
        assert_eq!(ledger.len(), 1);
        ledger.strip(&fx[..1]);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_sorted_by_name() {
        let mut ledger = AttributeLedger::new();
        ledger.apply(&[
            effect("b", AttributeValue::Flat(1.0)),
            effect("a", AttributeValue::Flat(2.0)),
        ]);
        let names: Vec<_> = ledger.sorted().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["a", "b"]);
    }
}
