//! Risk scoring: from geometry and weather to a bounded, tiered assessment.
//!
//! The scorer is the only component collaborators call. It resolves the
//! stability class, runs the geodesy and dispersion physics, and maps the
//! resulting concentration onto a calibrated 0-100% risk scale with a
//! three-tier status. Every assessment carries a machine-readable reason
//! code so front-ends can explain the result without parsing text.
//!
//! Two calibration profiles exist. `Standard` is the canonical tuning;
//! `Legacy` preserves the original deployment's constants and is kept as an
//! explicitly flagged alternative rather than being merged into the
//! canonical numbers, which were tuned independently.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core_types::geo::angular_difference_deg;
use crate::core_types::{GeoPoint, WindState};
use crate::dispersion::{ground_level_concentration, DispersionCoefficients};
use crate::error::RiskError;
use crate::stability::{PasquillTable, SkyCondition, StabilityEstimator, WeatherObservation};

/// Below this wind speed the plume direction is indeterminate and the
/// Gaussian model diverges, so the scorer short-circuits to a Caution
/// result instead of evaluating it.
pub const CALM_WIND_THRESHOLD_MS: f64 = 0.5;

/// Fixed percentage reported for calm-wind assessments. Elevated to the top
/// of the Caution band: with no resolvable plume direction, every bearing is
/// potentially downwind.
pub const CALM_WIND_RISK_PCT: f64 = 10.0;

/// Fixed mid-band percentage reported when an internal numeric failure is
/// intercepted at the scorer boundary.
const CALCULATION_ERROR_RISK_PCT: f64 = 5.0;

/// Default effective release height in meters (plume rise included).
pub const DEFAULT_SOURCE_HEIGHT_M: f64 = 20.0;

/// Default receptor (breathing) height in meters.
pub const DEFAULT_RECEPTOR_HEIGHT_M: f64 = 2.0;

/// Default relative emission rate.
pub const DEFAULT_EMISSION_RATE: f64 = 1.0;

/// Emission parameters with documented defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmissionParams {
    /// Effective release height, meters (default 20.0).
    pub source_height_m: f64,
    /// Receptor height above ground, meters (default 2.0).
    pub receptor_height_m: f64,
    /// Relative emission rate (default 1.0).
    pub emission_rate: f64,
}

impl Default for EmissionParams {
    fn default() -> Self {
        Self {
            source_height_m: DEFAULT_SOURCE_HEIGHT_M,
            receptor_height_m: DEFAULT_RECEPTOR_HEIGHT_M,
            emission_rate: DEFAULT_EMISSION_RATE,
        }
    }
}

/// One complete assessment request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlumeQuery {
    /// Hazard source location.
    pub source: GeoPoint,
    /// Receptor (home) location.
    pub receptor: GeoPoint,
    /// Current wind observation.
    pub wind: WindState,
    /// Emission parameter overrides.
    pub emission: EmissionParams,
}

impl PlumeQuery {
    /// Build a query with default emission parameters.
    #[must_use]
    pub fn new(source: GeoPoint, receptor: GeoPoint, wind: WindState) -> Self {
        Self {
            source,
            receptor,
            wind,
            emission: EmissionParams::default(),
        }
    }

    /// Re-validate all numeric fields.
    ///
    /// The value-type constructors already validate, but fields are public,
    /// so the scorer checks again at its boundary rather than trusting that
    /// every query went through them.
    fn validate(&self) -> Result<(), RiskError> {
        GeoPoint::new(self.source.latitude, self.source.longitude)?;
        GeoPoint::new(self.receptor.latitude, self.receptor.longitude)?;
        if !self.wind.speed_ms.is_finite() || self.wind.speed_ms < 0.0 {
            return Err(RiskError::InvalidWindSpeed {
                value: self.wind.speed_ms,
            });
        }
        if !self.wind.direction_deg.is_finite() {
            return Err(RiskError::InvalidCoordinate {
                field: "wind_direction",
                value: self.wind.direction_deg,
            });
        }
        for (field, value) in [
            ("source_height", self.emission.source_height_m),
            ("receptor_height", self.emission.receptor_height_m),
            ("emission_rate", self.emission.emission_rate),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(RiskError::InvalidCoordinate { field, value });
            }
        }
        Ok(())
    }
}

/// Three-tier risk status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskStatus {
    /// Below the caution threshold.
    Safe,
    /// Between the caution and danger thresholds, or indeterminate.
    Caution,
    /// Above the danger threshold.
    Danger,
}

impl fmt::Display for RiskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RiskStatus::Safe => "safe",
            RiskStatus::Caution => "caution",
            RiskStatus::Danger => "danger",
        };
        f.write_str(s)
    }
}

/// Machine-readable explanation for an assessment. Never localized text;
/// rendering is the collaborator's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskReason {
    /// Receptor beyond the profile's maximum significant range.
    OutOfRange,
    /// Wind too calm to resolve a plume direction.
    CalmWindIndeterminate,
    /// Receptor on or near the plume centerline at dangerous concentration.
    InPlumePath,
    /// Receptor close enough to the plume for elevated concentration.
    NearPlumePath,
    /// Receptor effectively outside the plume.
    OutsidePlumePath,
    /// An internal numeric failure was intercepted; treat as indeterminate.
    CalculationError,
}

/// Result of one assessment. Pure value object; identical queries always
/// produce bit-identical assessments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Tier classification.
    pub status: RiskStatus,
    /// Bounded risk score, [0, 100].
    pub risk_percentage: f64,
    /// Great-circle source-to-receptor distance, km.
    pub distance_km: f64,
    /// Bearing from source to receptor, degrees [0, 360).
    pub bearing_deg: f64,
    /// Why the status is what it is.
    pub reason: RiskReason,
}

/// Scoring calibration profile.
///
/// `Standard` is canonical. `Legacy` reproduces the constants of the
/// original deployment (calibration factor 1000 with tight thresholds);
/// its numbers were tuned against a different concentration scale and are
/// retained only for continuity with historical readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CalibrationProfile {
    /// Canonical tuning: 50 km range, 2% / 10% thresholds.
    #[default]
    Standard,
    /// Historical tuning: 10 km range, 1% / 25% thresholds.
    Legacy,
}

impl CalibrationProfile {
    /// Maximum significant range in km; beyond this the result is Safe with
    /// reason [`RiskReason::OutOfRange`].
    #[must_use]
    pub fn max_range_km(self) -> f64 {
        match self {
            CalibrationProfile::Standard => 50.0,
            CalibrationProfile::Legacy => 10.0,
        }
    }

    /// Concentration-to-percentage calibration constant.
    #[must_use]
    pub fn calibration_constant(self) -> f64 {
        match self {
            CalibrationProfile::Standard => 1.0e6,
            CalibrationProfile::Legacy => 1000.0,
        }
    }

    /// Percentage at or above which the status is at least Caution.
    #[must_use]
    pub fn caution_threshold_pct(self) -> f64 {
        match self {
            CalibrationProfile::Standard => 2.0,
            CalibrationProfile::Legacy => 1.0,
        }
    }

    /// Percentage above which the status is Danger.
    #[must_use]
    pub fn danger_threshold_pct(self) -> f64 {
        match self {
            CalibrationProfile::Standard => 10.0,
            CalibrationProfile::Legacy => 25.0,
        }
    }
}

/// The risk engine. Stateless apart from its configuration; safe to share
/// and call concurrently.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskScorer<E = PasquillTable> {
    profile: CalibrationProfile,
    estimator: E,
}

impl RiskScorer {
    /// Scorer with the given profile and the default table classifier.
    #[must_use]
    pub fn new(profile: CalibrationProfile) -> Self {
        Self {
            profile,
            estimator: PasquillTable,
        }
    }
}

impl<E: StabilityEstimator> RiskScorer<E> {
    /// Scorer with a custom stability estimation strategy.
    pub fn with_estimator(profile: CalibrationProfile, estimator: E) -> Self {
        Self { profile, estimator }
    }

    /// The active calibration profile.
    #[must_use]
    pub fn profile(&self) -> CalibrationProfile {
        self.profile
    }

    /// Assess the risk that the plume from `query.source` reaches
    /// `query.receptor` under `query.wind`.
    ///
    /// Deterministic and side-effect free. For well-formed input this never
    /// panics: internal numeric degeneracies are converted into a Caution
    /// assessment with reason [`RiskReason::CalculationError`].
    ///
    /// # Errors
    ///
    /// Returns [`RiskError`] only for malformed input (non-finite or
    /// out-of-range coordinates, negative wind speed).
    pub fn assess(&self, query: &PlumeQuery) -> Result<RiskAssessment, RiskError> {
        query.validate()?;

        // Step 1: resolve the stability class.
        let stability = query.wind.stability.unwrap_or_else(|| {
            self.estimator.estimate(&WeatherObservation {
                temperature_c: query.wind.temperature_c,
                wind_speed_ms: query.wind.speed_ms,
                sky: query.wind.sky.unwrap_or(SkyCondition::Other),
            })
        });

        // Step 2: geometry.
        let distance_m = query.source.distance_m(&query.receptor);
        let distance_km = distance_m / 1000.0;
        let bearing_deg = query.source.bearing_deg(&query.receptor);

        // Step 3: beyond significant range, nothing reaches the receptor.
        if distance_km > self.profile.max_range_km() {
            return Ok(RiskAssessment {
                status: RiskStatus::Safe,
                risk_percentage: 0.0,
                distance_km,
                bearing_deg,
                reason: RiskReason::OutOfRange,
            });
        }

        // Step 4: calm wind, plume direction indeterminate.
        if query.wind.speed_ms < CALM_WIND_THRESHOLD_MS {
            return Ok(RiskAssessment {
                status: RiskStatus::Caution,
                risk_percentage: CALM_WIND_RISK_PCT,
                distance_km,
                bearing_deg,
                reason: RiskReason::CalmWindIndeterminate,
            });
        }

        // Steps 5-6: crosswind offset from the plume axis, then physics.
        let off_axis_deg = angular_difference_deg(bearing_deg, query.wind.plume_axis_deg());
        let crosswind_m = distance_m * off_axis_deg.to_radians().sin();

        let coefficients = DispersionCoefficients::at(distance_m, stability);
        let concentration = ground_level_concentration(
            distance_m,
            crosswind_m,
            query.emission.receptor_height_m,
            query.emission.source_height_m,
            query.emission.emission_rate,
            query.wind.speed_ms,
            stability,
        );

        debug!(
            distance_km,
            bearing_deg,
            off_axis_deg,
            sigma_y_m = coefficients.sigma_y_m,
            sigma_z_m = coefficients.sigma_z_m,
            concentration,
            stability = %stability,
            "plume evaluation"
        );

        if !concentration.is_finite() {
            // Numeric degeneracy in the sigma or plume formulas. Never
            // propagate past this boundary; report indeterminate instead.
            warn!(
                distance_km,
                stability = %stability,
                "non-finite concentration intercepted, reporting indeterminate"
            );
            return Ok(RiskAssessment {
                status: RiskStatus::Caution,
                risk_percentage: CALCULATION_ERROR_RISK_PCT,
                distance_km,
                bearing_deg,
                reason: RiskReason::CalculationError,
            });
        }

        // Steps 7-8: calibrate, clamp, classify.
        let risk_percentage =
            (concentration * self.profile.calibration_constant()).clamp(0.0, 100.0);

        let (status, reason) = if risk_percentage > self.profile.danger_threshold_pct() {
            (RiskStatus::Danger, RiskReason::InPlumePath)
        } else if risk_percentage >= self.profile.caution_threshold_pct() {
            (RiskStatus::Caution, RiskReason::NearPlumePath)
        } else {
            (RiskStatus::Safe, RiskReason::OutsidePlumePath)
        };

        Ok(RiskAssessment {
            status,
            risk_percentage,
            distance_km,
            bearing_deg,
            reason,
        })
    }
}
