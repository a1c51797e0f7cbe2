//! Atmospheric dispersion physics: plume-spread coefficients and the
//! Gaussian plume concentration equation.

mod coefficients;
mod plume;

pub use coefficients::{sigma_y, sigma_z, DispersionCoefficients, SIGMA_FLOOR_M};
pub use plume::ground_level_concentration;
