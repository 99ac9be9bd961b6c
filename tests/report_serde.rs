//! Report serialisation integration tests.
//!
//! Verifies that reports and snapshots taken from a live session survive a
//! JSON round trip unchanged, so callers can persist or ship them.

#[cfg(feature = "serde")]
mod tests {
    use devotion_core::affinity::AffinityKind;
    use devotion_core::{
        reference, ActivationReport, Catalog, FastPathReport, Outcome, PoolSnapshot, Session,
        SessionConfig,
    };

    // ── Helpers ──────────────────────────────────────────────────────────────

    fn catalog() -> Catalog {
        reference::catalog().unwrap()
    }

    fn fast(s: &mut Session<'_>, name: &str) -> FastPathReport {
        let id = s.catalog().resolve_node(name).unwrap();
        s.activate_by_fast_path(id)
    }

    // ── Round trips ──────────────────────────────────────────────────────────

    #[test]
    fn test_fast_path_report_round_trip() {
        let c = catalog();
        let mut s = Session::new(&c);
        let report = fast(&mut s, "First Lion Star");

        let json = serde_json::to_string(&report).unwrap();
        let back: FastPathReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
        assert!(matches!(back.outcome, Outcome::Plan(_)));
    }

    #[test]
    fn test_activation_report_round_trip() {
        let c = catalog();
        let mut s = Session::new(&c);
        fast(&mut s, "First Magi Star");
        let report = s.report(true);

        let json = serde_json::to_string(&report).unwrap();
        let back: ActivationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.unlocked, report.unlocked);
        assert_eq!(back.pools, report.pools);
        assert!(back.applied);
    }

    #[test]
    fn test_unreachable_outcome_round_trip() {
        let json = serde_json::to_string(&Outcome::Unreachable).unwrap();
        let back: Outcome = serde_json::from_str(&json).unwrap();
        assert!(back.is_unreachable());
    }

    #[test]
    fn test_snapshot_fields_survive() {
        let c = catalog();
        let mut s = Session::new(&c);
        fast(&mut s, "First Lion Star");
        let snapshot = s.pools().snapshot();

        let value = serde_json::to_value(snapshot).unwrap();
        assert_eq!(value["currency"], 53);
        let back: PoolSnapshot = serde_json::from_value(value).unwrap();
        assert_eq!(back.points_of(AffinityKind::Order), 1);
        assert_eq!(back.floor_of(AffinityKind::Order), 1);
    }

    #[test]
    fn test_config_round_trip() {
        let config = SessionConfig { starting_currency: 40, max_part: 5 };
        let json = serde_json::to_string(&config).unwrap();
        let back: SessionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
        assert_eq!(SessionConfig::default().starting_currency, 55);
    }
}
