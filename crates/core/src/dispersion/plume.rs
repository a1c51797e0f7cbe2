//! Ground-level Gaussian plume concentration.
//!
//! The steady-state Gaussian plume equation for a continuous elevated point
//! source, with the image-source term for ground reflection:
//!
//! ```text
//! C = Q / (2π · u · σy · σz)
//!     · exp(-y² / 2σy²)
//!     · [ exp(-(z - H)² / 2σz²) + exp(-(z + H)² / 2σz²) ]
//! ```
//!
//! where Q is the (relative) emission rate, u the wind speed, y the crosswind
//! offset, z the receptor height and H the effective release height.
//!
//! # References
//!
//! - Sutton, O.G. (1947). "The theoretical distribution of airborne
//!   pollution from factory chimneys." QJRMS, 73, 426-436.
//! - Turner, D.B. (1970). "Workbook of Atmospheric Dispersion Estimates."

use std::f64::consts::PI;

use crate::dispersion::coefficients::DispersionCoefficients;
use crate::stability::StabilityClass;

/// Concentration at a receptor, in the (relative) units of `emission_rate`
/// per cubic meter. Always >= 0.
///
/// `distance_m <= 0` returns 0.0 directly: no plume has formed at the source
/// itself, and upwind receptors see nothing in this model.
///
/// The equation diverges as `wind_speed_ms` approaches zero; this function
/// deliberately does not special-case calm wind, because direction itself is
/// indeterminate there and no concentration value would be meaningful. The
/// risk scorer intercepts calm wind before calling (see
/// [`CALM_WIND_THRESHOLD_MS`](crate::risk::CALM_WIND_THRESHOLD_MS)).
#[must_use]
pub fn ground_level_concentration(
    distance_m: f64,
    crosswind_m: f64,
    receptor_height_m: f64,
    source_height_m: f64,
    emission_rate: f64,
    wind_speed_ms: f64,
    class: StabilityClass,
) -> f64 {
    if distance_m <= 0.0 {
        return 0.0;
    }

    let DispersionCoefficients {
        sigma_y_m: sigma_y,
        sigma_z_m: sigma_z,
    } = DispersionCoefficients::at(distance_m, class);

    let crosswind_term = (-0.5 * (crosswind_m / sigma_y).powi(2)).exp();

    // Direct plume plus its ground-reflected image source.
    let direct = (-0.5 * ((receptor_height_m - source_height_m) / sigma_z).powi(2)).exp();
    let reflected = (-0.5 * ((receptor_height_m + source_height_m) / sigma_z).powi(2)).exp();

    let concentration = emission_rate / (2.0 * PI * wind_speed_ms * sigma_y * sigma_z)
        * crosswind_term
        * (direct + reflected);

    concentration.max(0.0)
}
