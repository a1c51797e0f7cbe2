//! Pasquill–Gifford atmospheric stability classification.
//!
//! The stability class captures how vigorously the atmosphere mixes a plume:
//! class A (strong daytime convection) spreads contaminant quickly in all
//! directions, class F (stable night-time inversion) keeps a plume narrow and
//! concentrated for kilometres. Class D is the neutral default used whenever
//! conditions cannot be determined.
//!
//! Classification from surface observations is a coarse heuristic, so it is
//! modelled as a swappable [`StabilityEstimator`] strategy with a decision
//! table as the default. A structured weather API can supply its own
//! estimator, or bypass classification entirely with an explicit class.
//!
//! # References
//!
//! - Pasquill, F. (1961). "The estimation of the dispersion of windborne
//!   material." Meteorological Magazine, 90, 33-49.
//! - Gifford, F.A. (1976). "Turbulent diffusion-typing schemes: a review."
//!   Nuclear Safety, 17(1), 68-86.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Pasquill–Gifford stability class, ordered most unstable (A) to most
/// stable (F).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum StabilityClass {
    /// Extremely unstable (strong insolation, light wind).
    A,
    /// Moderately unstable.
    B,
    /// Slightly unstable.
    C,
    /// Neutral. The default when conditions are unknown.
    #[default]
    D,
    /// Slightly stable.
    E,
    /// Moderately stable (clear night, calm).
    F,
}

impl StabilityClass {
    /// All classes, unstable to stable.
    pub const ALL: [StabilityClass; 6] = [
        StabilityClass::A,
        StabilityClass::B,
        StabilityClass::C,
        StabilityClass::D,
        StabilityClass::E,
        StabilityClass::F,
    ];

    /// Single-letter form ("A".."F").
    #[must_use]
    pub fn as_letter(self) -> &'static str {
        match self {
            StabilityClass::A => "A",
            StabilityClass::B => "B",
            StabilityClass::C => "C",
            StabilityClass::D => "D",
            StabilityClass::E => "E",
            StabilityClass::F => "F",
        }
    }
}

impl fmt::Display for StabilityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_letter())
    }
}

impl FromStr for StabilityClass {
    type Err = ();

    /// Parse a single class letter, case-insensitive. Callers that want the
    /// lenient "unparseable means neutral" policy should
    /// `parse().unwrap_or_default()`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(StabilityClass::A),
            "B" | "b" => Ok(StabilityClass::B),
            "C" | "c" => Ok(StabilityClass::C),
            "D" | "d" => Ok(StabilityClass::D),
            "E" | "e" => Ok(StabilityClass::E),
            "F" | "f" => Ok(StabilityClass::F),
            _ => Err(()),
        }
    }
}

/// Coarse sky-condition signal used by the default classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkyCondition {
    /// Clear or sunny: strong insolation by day, strong cooling by night.
    Clear,
    /// Overcast: insolation and radiative cooling both suppressed.
    Cloudy,
    /// Anything else, including unknown.
    Other,
}

impl SkyCondition {
    /// Map a free-text weather descriptor onto a coarse signal.
    ///
    /// Keyword matching is deliberately loose; any descriptor that matches
    /// neither family is [`SkyCondition::Other`].
    #[must_use]
    pub fn from_description(description: &str) -> Self {
        let lower = description.to_lowercase();
        if lower.contains("clear") || lower.contains("sunny") {
            SkyCondition::Clear
        } else if lower.contains("cloud") || lower.contains("overcast") {
            SkyCondition::Cloudy
        } else {
            SkyCondition::Other
        }
    }
}

/// Surface weather attributes available to an estimator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    /// Ambient temperature in °C, if known.
    pub temperature_c: Option<f64>,
    /// Wind speed in m/s.
    pub wind_speed_ms: f64,
    /// Coarse sky condition.
    pub sky: SkyCondition,
}

/// Strategy for deriving a stability class from surface observations.
///
/// Estimators are infallible: when an observation is ambiguous or degenerate
/// they fall back to the neutral class D rather than erroring.
pub trait StabilityEstimator {
    /// Estimate the stability class for `observation`.
    fn estimate(&self, observation: &WeatherObservation) -> StabilityClass;
}

/// Default table-driven estimator.
///
/// Wind-speed bands crossed with the sky-condition signal:
///
/// ```text
/// band              clear   cloudy   other
/// calm     < 2 m/s    A       F        E
/// light    2-3 m/s    B       E        D
/// moderate 3-5 m/s    C       D        D
/// strong   > 5 m/s    D       D        D
/// ```
///
/// Strong wind mixes mechanically regardless of insolation, hence the
/// all-neutral bottom row. Non-finite wind speed yields D.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PasquillTable;

impl StabilityEstimator for PasquillTable {
    fn estimate(&self, observation: &WeatherObservation) -> StabilityClass {
        let speed = observation.wind_speed_ms;
        if !speed.is_finite() || speed < 0.0 {
            return StabilityClass::D;
        }

        use StabilityClass::{A, B, C, D, E, F};

        match observation.sky {
            SkyCondition::Clear => {
                if speed < 2.0 {
                    A
                } else if speed < 3.0 {
                    B
                } else if speed <= 5.0 {
                    C
                } else {
                    D
                }
            }
            SkyCondition::Cloudy => {
                if speed < 2.0 {
                    F
                } else if speed < 3.0 {
                    E
                } else {
                    D
                }
            }
            SkyCondition::Other => {
                if speed < 2.0 {
                    E
                } else {
                    D
                }
            }
        }
    }
}
