//! Core value types shared across the engine.

pub mod geo;
pub mod wind;

pub use geo::{angular_difference_deg, compass_point_name, normalize_bearing_deg, GeoPoint};
pub use wind::WindState;
