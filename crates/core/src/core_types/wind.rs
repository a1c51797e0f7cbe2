//! Wind observation value type.
//!
//! Wind direction uses the meteorological "blowing from" convention: a
//! direction of 270° is a west wind, and the plume it drives travels east.

use serde::{Deserialize, Serialize};

use crate::core_types::geo::normalize_bearing_deg;
use crate::error::RiskError;
use crate::stability::{SkyCondition, StabilityClass};

/// A single wind observation, the meteorological input to an assessment.
///
/// Temperature, sky condition and stability class are optional; when the
/// stability class is absent the scorer derives one from the remaining
/// attributes via its [`StabilityEstimator`](crate::stability::StabilityEstimator).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindState {
    /// Wind speed in m/s, >= 0.
    pub speed_ms: f64,
    /// Compass direction the wind blows *from*, degrees [0, 360).
    pub direction_deg: f64,
    /// Ambient temperature in °C, if observed.
    pub temperature_c: Option<f64>,
    /// Coarse sky condition, if observed.
    pub sky: Option<SkyCondition>,
    /// Explicit stability class override; skips the classifier when set.
    pub stability: Option<StabilityClass>,
}

impl WindState {
    /// Create a validated wind observation.
    ///
    /// The direction is normalized into [0, 360), so callers may pass e.g.
    /// -90.0 for a due-east wind.
    ///
    /// # Errors
    ///
    /// Returns [`RiskError::InvalidWindSpeed`] for a negative or non-finite
    /// speed, and [`RiskError::InvalidCoordinate`] for a non-finite direction.
    pub fn new(speed_ms: f64, direction_deg: f64) -> Result<Self, RiskError> {
        if !speed_ms.is_finite() || speed_ms < 0.0 {
            return Err(RiskError::InvalidWindSpeed { value: speed_ms });
        }
        if !direction_deg.is_finite() {
            return Err(RiskError::InvalidCoordinate {
                field: "wind_direction",
                value: direction_deg,
            });
        }
        Ok(Self {
            speed_ms,
            direction_deg: normalize_bearing_deg(direction_deg),
            temperature_c: None,
            sky: None,
            stability: None,
        })
    }

    /// Attach an ambient temperature observation (°C).
    #[must_use]
    pub fn with_temperature(mut self, temperature_c: f64) -> Self {
        self.temperature_c = Some(temperature_c);
        self
    }

    /// Attach a sky condition observation.
    #[must_use]
    pub fn with_sky(mut self, sky: SkyCondition) -> Self {
        self.sky = Some(sky);
        self
    }

    /// Force a stability class, bypassing the classifier.
    #[must_use]
    pub fn with_stability(mut self, stability: StabilityClass) -> Self {
        self.stability = Some(stability);
        self
    }

    /// Compass direction the plume travels *toward*, degrees [0, 360).
    ///
    /// Opposite of the wind-from direction: a 270° (west) wind gives a 90°
    /// (eastbound) plume axis.
    #[must_use]
    pub fn plume_axis_deg(&self) -> f64 {
        normalize_bearing_deg(self.direction_deg + 180.0)
    }
}
