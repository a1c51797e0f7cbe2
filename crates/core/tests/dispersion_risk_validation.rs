//! Dispersion risk validation suite.
//!
//! End-to-end validation of the assessment pipeline against its documented
//! properties:
//! 1. Geodesy reference scenarios (haversine, bearing)
//! 2. Physical plausibility of the plume model across stability classes
//! 3. Scorer tier boundaries and short-circuit policies
//! 4. Determinism and serialization of assessments
//!
//! Run with: `cargo test --test dispersion_risk_validation`

use approx::assert_relative_eq;
use plume_risk_core::{
    angular_difference_deg, ground_level_concentration, sigma_y, sigma_z, CalibrationProfile,
    GeoPoint, PlumeQuery, RiskReason, RiskScorer, RiskStatus, StabilityClass, WindState,
};

fn standard_scorer() -> RiskScorer {
    RiskScorer::new(CalibrationProfile::Standard)
}

// ═══════════════════════════════════════════════════════════════════════════
// SECTION 1: GEODESY REFERENCE SCENARIOS
// ═══════════════════════════════════════════════════════════════════════════

/// Amsterdam to Utrecht city centers: haversine on R = 6371 km gives
/// ~34.2 km, and an assessment must report the same distance it computed.
#[test]
fn test_amsterdam_utrecht_reference_distance() {
    let amsterdam = GeoPoint::new(52.3676, 4.9041).unwrap();
    let utrecht = GeoPoint::new(52.0907, 5.1214).unwrap();

    let d_km = amsterdam.distance_m(&utrecht) / 1000.0;
    assert_relative_eq!(d_km, 34.2, max_relative = 0.01);

    let wind = WindState::new(5.0, 270.0).unwrap();
    let assessment = standard_scorer()
        .assess(&PlumeQuery::new(amsterdam, utrecht, wind))
        .unwrap();
    assert_relative_eq!(assessment.distance_km, d_km, max_relative = 1e-12);
}

/// Utrecht lies south-east of Amsterdam; the reported bearing must agree.
#[test]
fn test_amsterdam_utrecht_bearing_quadrant() {
    let amsterdam = GeoPoint::new(52.3676, 4.9041).unwrap();
    let utrecht = GeoPoint::new(52.0907, 5.1214).unwrap();
    let bearing = amsterdam.bearing_deg(&utrecht);
    assert!(
        (90.0..180.0).contains(&bearing),
        "expected south-east bearing, got {bearing}"
    );
}

#[test]
fn test_angular_difference_properties_hold_on_grid() {
    for a in (0..360).step_by(15) {
        for b in (0..360).step_by(15) {
            let (a, b) = (f64::from(a), f64::from(b));
            let d = angular_difference_deg(a, b);
            assert_eq!(d, angular_difference_deg(b, a));
            assert!((0.0..=180.0).contains(&d));
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SECTION 2: PLUME MODEL PHYSICAL PLAUSIBILITY
// ═══════════════════════════════════════════════════════════════════════════

/// Spread coefficients never fall below the 1 m floor, for any class, at
/// any distance including degenerate ones.
#[test]
fn test_sigma_floor_holds_everywhere() {
    for class in StabilityClass::ALL {
        for distance in [-100.0, 0.0, 1.0, 50.0, 999.9, 1000.0, 25_000.0, 100_000.0] {
            assert!(sigma_y(distance, class) >= 1.0);
            assert!(sigma_z(distance, class) >= 1.0);
        }
    }
}

/// Concentration decays monotonically as the receptor moves off the plume
/// centerline, at fixed distance, for every stability class.
#[test]
fn test_crosswind_decay_all_classes() {
    for class in StabilityClass::ALL {
        let on_axis = ground_level_concentration(8000.0, 0.0, 2.0, 20.0, 1.0, 5.0, class);
        let mut previous = on_axis;
        for crosswind in [100.0, 500.0, 2000.0, 8000.0] {
            let c = ground_level_concentration(8000.0, crosswind, 2.0, 20.0, 1.0, 5.0, class);
            assert!(c <= previous, "crosswind decay violated for {class}");
            previous = c;
        }
    }
}

/// At 100 km every class has decayed to a lower concentration than at 5 km,
/// and the scorer reports Safe via the range cutoff.
#[test]
fn test_far_field_decay_and_safe_status() {
    let scorer = standard_scorer();
    for class in StabilityClass::ALL {
        let near = ground_level_concentration(5000.0, 0.0, 2.0, 20.0, 1.0, 5.0, class);
        let far = ground_level_concentration(100_000.0, 0.0, 2.0, 20.0, 1.0, 5.0, class);
        assert!(far < near, "no far-field decay for {class}");

        // ~111 km due east, plume aimed straight at the receptor.
        let wind = WindState::new(5.0, 270.0).unwrap().with_stability(class);
        let query = PlumeQuery::new(
            GeoPoint::new(0.0, 0.0).unwrap(),
            GeoPoint::new(0.0, 1.0).unwrap(),
            wind,
        );
        let assessment = scorer.assess(&query).unwrap();
        assert_eq!(assessment.status, RiskStatus::Safe);
        assert_eq!(assessment.reason, RiskReason::OutOfRange);
    }
}

/// Stable classes confine the plume: on the centerline a class F plume is
/// more concentrated than a class A plume at the same mid-range distance.
#[test]
fn test_stable_class_concentrates_centerline() {
    let unstable = ground_level_concentration(5000.0, 0.0, 2.0, 20.0, 1.0, 5.0, StabilityClass::A);
    let stable = ground_level_concentration(5000.0, 0.0, 2.0, 20.0, 1.0, 5.0, StabilityClass::F);
    assert!(stable > unstable);
}

// ═══════════════════════════════════════════════════════════════════════════
// SECTION 3: SCORER TIERS AND SHORT-CIRCUIT POLICIES
// ═══════════════════════════════════════════════════════════════════════════

/// The canonical scenario: receptor 5 km due east, west wind at 5 m/s,
/// class D. On-axis must be Danger; rotating the wind to northerly moves the
/// receptor 90° off-axis and the result collapses to Safe.
#[test]
fn test_canonical_on_axis_versus_off_axis() {
    let source = GeoPoint::new(0.0, 0.0).unwrap();
    let receptor = GeoPoint::new(0.0, 0.0450).unwrap();

    let west_wind = WindState::new(5.0, 270.0)
        .unwrap()
        .with_stability(StabilityClass::D);
    let on_axis = standard_scorer()
        .assess(&PlumeQuery::new(source, receptor, west_wind))
        .unwrap();
    assert_eq!(on_axis.status, RiskStatus::Danger);
    assert_eq!(on_axis.reason, RiskReason::InPlumePath);

    let north_wind = WindState::new(5.0, 0.0)
        .unwrap()
        .with_stability(StabilityClass::D);
    let off_axis = standard_scorer()
        .assess(&PlumeQuery::new(source, receptor, north_wind))
        .unwrap();
    assert_eq!(off_axis.status, RiskStatus::Safe);
    assert!(on_axis.risk_percentage > off_axis.risk_percentage);
}

/// A mid-band scenario lands in Caution: same plume axis but the receptor is
/// 30 km out, where class D dilution brings the score into the 2-10% band.
#[test]
fn test_mid_range_on_axis_is_caution() {
    let source = GeoPoint::new(0.0, 0.0).unwrap();
    let receptor = GeoPoint::new(0.0, 0.270).unwrap(); // ~30 km east
    let wind = WindState::new(5.0, 270.0)
        .unwrap()
        .with_stability(StabilityClass::D);
    let assessment = standard_scorer()
        .assess(&PlumeQuery::new(source, receptor, wind))
        .unwrap();
    assert_eq!(assessment.status, RiskStatus::Caution);
    assert_eq!(assessment.reason, RiskReason::NearPlumePath);
}

/// 0.3 m/s is below the calm threshold: Caution with the dedicated reason,
/// regardless of distance or stability class.
#[test]
fn test_calm_wind_policy() {
    let source = GeoPoint::new(0.0, 0.0).unwrap();
    for class in StabilityClass::ALL {
        for lon in [0.02, 0.1, 0.4] {
            let wind = WindState::new(0.3, 45.0).unwrap().with_stability(class);
            let query = PlumeQuery::new(source, GeoPoint::new(0.0, lon).unwrap(), wind);
            let assessment = standard_scorer().assess(&query).unwrap();
            assert_eq!(assessment.status, RiskStatus::Caution);
            assert_eq!(assessment.reason, RiskReason::CalmWindIndeterminate);
        }
    }
}

/// Exhaustive bound check over a coarse input grid: the percentage never
/// leaves [0, 100] and every assessment carries a normalized bearing.
#[test]
fn test_bounds_over_input_grid() {
    let scorer = standard_scorer();
    let source = GeoPoint::new(52.0, 5.0).unwrap();
    for class in StabilityClass::ALL {
        for dlat in [-0.2, 0.0, 0.1] {
            for dlon in [-0.3, 0.01, 0.2] {
                for speed in [0.0, 0.5, 3.0, 12.0] {
                    let receptor = GeoPoint::new(52.0 + dlat, 5.0 + dlon).unwrap();
                    let wind = WindState::new(speed, 200.0).unwrap().with_stability(class);
                    let a = scorer
                        .assess(&PlumeQuery::new(source, receptor, wind))
                        .unwrap();
                    assert!((0.0..=100.0).contains(&a.risk_percentage));
                    assert!((0.0..360.0).contains(&a.bearing_deg));
                    assert!(a.distance_km >= 0.0);
                }
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SECTION 4: DETERMINISM AND SERIALIZATION
// ═══════════════════════════════════════════════════════════════════════════

/// Identical queries produce bit-identical assessments, across repeated
/// calls and across scorer instances.
#[test]
fn test_assessment_determinism() {
    let wind = WindState::new(3.7, 312.0).unwrap().with_temperature(9.5);
    let query = PlumeQuery::new(
        GeoPoint::new(51.9244, 4.4777).unwrap(),
        GeoPoint::new(52.0116, 4.3571).unwrap(),
        wind,
    );
    let first = standard_scorer().assess(&query).unwrap();
    for _ in 0..10 {
        assert_eq!(standard_scorer().assess(&query).unwrap(), first);
    }
}

/// Assessments survive a serde round trip unchanged, so collaborators can
/// persist or transport them.
#[test]
fn test_assessment_serde_round_trip() {
    let wind = WindState::new(5.0, 270.0)
        .unwrap()
        .with_stability(StabilityClass::D);
    let query = PlumeQuery::new(
        GeoPoint::new(0.0, 0.0).unwrap(),
        GeoPoint::new(0.0, 0.0450).unwrap(),
        wind,
    );
    let assessment = standard_scorer().assess(&query).unwrap();

    let json = serde_json::to_string(&assessment).unwrap();
    let restored: plume_risk_core::RiskAssessment = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, assessment);
}
