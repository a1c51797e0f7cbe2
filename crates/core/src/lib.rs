//! Atmospheric dispersion risk engine.
//!
//! Given a hazard source location, a receptor (home) location and a wind
//! observation, this crate estimates whether airborne contamination from the
//! source reaches the receptor and scores that risk as a bounded percentage
//! with a three-tier status.
//!
//! The pipeline: a Pasquill–Gifford stability class is resolved from the
//! weather (or supplied directly), spherical geodesy gives the
//! source-to-receptor distance and bearing, stability-dependent spread
//! coefficients feed a Gaussian plume concentration estimate at the
//! receptor's crosswind offset, and a calibrated scorer maps that onto a
//! 0-100% scale with Safe/Caution/Danger tiers and a machine-readable
//! reason code.
//!
//! The engine is a pure, synchronous computation: no I/O, no shared mutable
//! state, deterministic for identical inputs, and safe to call concurrently.
//! Fetching hazard alerts and weather, deciding whether an alert is
//! chemically relevant at all, and rendering results are collaborator
//! concerns.
//!
//! ```
//! use plume_risk_core::{
//!     CalibrationProfile, GeoPoint, PlumeQuery, RiskScorer, StabilityClass, WindState,
//! };
//!
//! let source = GeoPoint::new(52.3676, 4.9041)?;
//! let receptor = GeoPoint::new(52.0907, 5.1214)?;
//! let wind = WindState::new(5.0, 270.0)?.with_stability(StabilityClass::D);
//!
//! let scorer = RiskScorer::new(CalibrationProfile::Standard);
//! let assessment = scorer.assess(&PlumeQuery::new(source, receptor, wind))?;
//! assert!((0.0..=100.0).contains(&assessment.risk_percentage));
//! # Ok::<(), plume_risk_core::RiskError>(())
//! ```

pub mod core_types;
pub mod dispersion;
pub mod error;
pub mod risk;
pub mod stability;

pub use core_types::{
    angular_difference_deg, compass_point_name, normalize_bearing_deg, GeoPoint, WindState,
};
pub use dispersion::{ground_level_concentration, sigma_y, sigma_z, DispersionCoefficients};
pub use error::RiskError;
pub use risk::{
    CalibrationProfile, EmissionParams, PlumeQuery, RiskAssessment, RiskReason, RiskScorer,
    RiskStatus, CALM_WIND_RISK_PCT, CALM_WIND_THRESHOLD_MS,
};
pub use stability::{
    PasquillTable, SkyCondition, StabilityClass, StabilityEstimator, WeatherObservation,
};
