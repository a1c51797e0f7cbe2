//! Plume-spread coefficients σy and σz.
//!
//! The Gaussian plume model needs the standard deviation of the concentration
//! profile in the crosswind (σy) and vertical (σz) directions at a given
//! downwind distance. Both grow with distance and shrink with increasing
//! atmospheric stability.
//!
//! σy uses the Pasquill–Gifford angular form in the near field (< 1 km) and a
//! power law beyond; σz uses the Briggs interpolation formulas for open
//! country. Both are floored at 1.0 m so the plume equation can never divide
//! by a vanishing spread.
//!
//! # References
//!
//! - Turner, D.B. (1970). "Workbook of Atmospheric Dispersion Estimates."
//!   EPA Office of Air Programs, AP-26.
//! - Briggs, G.A. (1973). "Diffusion estimation for small emissions."
//!   ATDL Contribution 79, NOAA.

use serde::{Deserialize, Serialize};

use crate::stability::StabilityClass;

/// Lower bound for both coefficients, in meters.
///
/// Also what non-positive distances evaluate to: a plume that has not
/// travelled anywhere has no meaningful spread, and returning the floor keeps
/// the policy degenerate-input-tolerant instead of panicking.
pub const SIGMA_FLOOR_M: f64 = 1.0;

/// Pasquill–Gifford σy parameters for one stability class.
///
/// `a`, `c`, `d` drive the near-field angular form, `b`, `f` the far-field
/// power law.
#[derive(Debug, Clone, Copy)]
struct SigmaYParams {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    f: f64,
}

/// Per-class σy parameter table (Turner workbook values).
const SIGMA_Y_PARAMS: [SigmaYParams; 6] = [
    // A
    SigmaYParams { a: 213.0, b: 440.8, c: 1.941, d: 9.27, f: 459.7 },
    // B
    SigmaYParams { a: 156.0, b: 106.6, c: 1.149, d: 3.3, f: 108.2 },
    // C
    SigmaYParams { a: 104.0, b: 61.0, c: 0.911, d: 0.0, f: 61.0 },
    // D
    SigmaYParams { a: 68.0, b: 33.2, c: 0.725, d: -1.7, f: 44.5 },
    // E
    SigmaYParams { a: 50.5, b: 22.8, c: 0.678, d: -1.3, f: 37.6 },
    // F
    SigmaYParams { a: 34.0, b: 14.35, c: 0.740, d: -0.35, f: 18.05 },
];

fn params_for(class: StabilityClass) -> SigmaYParams {
    SIGMA_Y_PARAMS[class as usize]
}

/// Horizontal and vertical plume spread at one downwind distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DispersionCoefficients {
    /// Crosswind (horizontal) spread, meters, >= 1.0.
    pub sigma_y_m: f64,
    /// Vertical spread, meters, >= 1.0.
    pub sigma_z_m: f64,
}

impl DispersionCoefficients {
    /// Evaluate both coefficients at `distance_m` downwind for `class`.
    #[must_use]
    pub fn at(distance_m: f64, class: StabilityClass) -> Self {
        Self {
            sigma_y_m: sigma_y(distance_m, class),
            sigma_z_m: sigma_z(distance_m, class),
        }
    }
}

/// Horizontal spread coefficient σy in meters, floored at 1.0.
///
/// Near field (< 1 km) uses the angular form
/// `a · x · tan(0.017453293 · (c − d·ln x))` with x in km; at and beyond
/// 1 km the power law `b · x^(f/1000)` takes over.
#[must_use]
pub fn sigma_y(distance_m: f64, class: StabilityClass) -> f64 {
    if distance_m <= 0.0 || !distance_m.is_finite() {
        return SIGMA_FLOOR_M;
    }
    let p = params_for(class);
    let x_km = distance_m / 1000.0;

    let sigma = if x_km < 1.0 {
        // 0.017453293 converts the tabulated angle coefficients to radians.
        let theta = 0.017453293 * (p.c - p.d * x_km.ln());
        p.a * x_km * theta.tan()
    } else {
        p.b * x_km.powf(p.f / 1000.0)
    };

    sigma.max(SIGMA_FLOOR_M)
}

/// Vertical spread coefficient σz in meters, floored at 1.0.
///
/// Briggs open-country forms with x in meters:
///
/// ```text
/// A: 0.20·x                        D: 0.06·x·(1 + 0.0015·x)^-1/2
/// B: 0.12·x                        E: 0.03·x·(1 + 0.0003·x)^-1
/// C: 0.08·x·(1 + 0.0001·x)^-1/2    F: 0.016·x·(1 + 0.0003·x)^-1
/// ```
///
/// Unstable classes grow roughly linearly; the stable classes are damped by
/// the `(1 + k·x)^p` correction so σz saturates with distance.
#[must_use]
pub fn sigma_z(distance_m: f64, class: StabilityClass) -> f64 {
    if distance_m <= 0.0 || !distance_m.is_finite() {
        return SIGMA_FLOOR_M;
    }
    let x = distance_m;

    let sigma = match class {
        StabilityClass::A => 0.20 * x,
        StabilityClass::B => 0.12 * x,
        StabilityClass::C => 0.08 * x * (1.0 + 0.0001 * x).powf(-0.5),
        StabilityClass::D => 0.06 * x * (1.0 + 0.0015 * x).powf(-0.5),
        StabilityClass::E => 0.03 * x * (1.0 + 0.0003 * x).powi(-1),
        StabilityClass::F => 0.016 * x * (1.0 + 0.0003 * x).powi(-1),
    };

    sigma.max(SIGMA_FLOOR_M)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_non_positive_distance_returns_floor() {
        for class in StabilityClass::ALL {
            assert_eq!(sigma_y(0.0, class), SIGMA_FLOOR_M);
            assert_eq!(sigma_y(-500.0, class), SIGMA_FLOOR_M);
            assert_eq!(sigma_z(0.0, class), SIGMA_FLOOR_M);
            assert_eq!(sigma_z(-500.0, class), SIGMA_FLOOR_M);
        }
    }

    #[test]
    fn test_floor_applies_everywhere() {
        // Sweep a wide distance range; neither coefficient may dip below 1 m.
        for class in StabilityClass::ALL {
            for distance in [0.1, 1.0, 10.0, 100.0, 999.0, 1000.0, 5000.0, 50_000.0] {
                assert!(sigma_y(distance, class) >= SIGMA_FLOOR_M);
                assert!(sigma_z(distance, class) >= SIGMA_FLOOR_M);
            }
        }
    }

    #[test]
    fn test_sigma_z_briggs_reference_values() {
        // Hand-computed from the Briggs forms at 5 km.
        assert_relative_eq!(
            sigma_z(5000.0, StabilityClass::A),
            1000.0,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            sigma_z(5000.0, StabilityClass::D),
            0.06 * 5000.0 / 8.5_f64.sqrt(),
            max_relative = 1e-9
        );
        assert_relative_eq!(
            sigma_z(5000.0, StabilityClass::F),
            0.016 * 5000.0 / 2.5,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_sigma_y_near_field_angular_form() {
        // Class A at 500 m: 213 * 0.5 * tan(0.017453293 * (1.941 - 9.27 * ln 0.5))
        // evaluates to ~15.7 m.
        let sigma = sigma_y(500.0, StabilityClass::A);
        assert!((15.0..16.0).contains(&sigma), "sigma_y = {sigma}");

        // Class D goes sub-floor in the near field; the 1 m floor applies.
        assert_eq!(sigma_y(500.0, StabilityClass::D), SIGMA_FLOOR_M);
    }

    #[test]
    fn test_sigma_y_far_field_power_law() {
        // At exactly 1 km the power law applies: sigma_y = b * 1^(f/1000) = b.
        assert_relative_eq!(sigma_y(1000.0, StabilityClass::A), 440.8);
        assert_relative_eq!(sigma_y(1000.0, StabilityClass::D), 33.2);
        assert_relative_eq!(sigma_y(1000.0, StabilityClass::F), 14.35);
    }

    #[test]
    fn test_sigma_z_monotonic_in_distance() {
        for class in StabilityClass::ALL {
            let mut previous = 0.0;
            for distance in [100.0, 500.0, 1000.0, 5000.0, 20_000.0, 50_000.0] {
                let sigma = sigma_z(distance, class);
                assert!(
                    sigma >= previous,
                    "sigma_z not monotonic for {class} at {distance} m"
                );
                previous = sigma;
            }
        }
    }

    #[test]
    fn test_unstable_spreads_more_than_stable() {
        // At any fixed distance the unstable end of the scale must spread at
        // least as much as the stable end.
        for distance in [500.0, 2000.0, 10_000.0] {
            assert!(
                sigma_y(distance, StabilityClass::A) > sigma_y(distance, StabilityClass::F)
            );
            assert!(
                sigma_z(distance, StabilityClass::A) > sigma_z(distance, StabilityClass::F)
            );
        }
    }

    #[test]
    fn test_coefficient_pair_matches_scalars() {
        let pair = DispersionCoefficients::at(3000.0, StabilityClass::C);
        assert_eq!(pair.sigma_y_m, sigma_y(3000.0, StabilityClass::C));
        assert_eq!(pair.sigma_z_m, sigma_z(3000.0, StabilityClass::C));
    }
}
