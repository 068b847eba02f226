//! Reference frames and the transforms between them
//!
//! `inertial` holds the spherical coordinate systems and their closed-form
//! conversions; `light_time` the iterative retarded-position corrector. The
//! rectangular helpers below operate on bare [`Cartesian3`] values and are
//! shared by every theory.

pub mod inertial;
pub mod light_time;

pub use inertial::{
    ecliptic_to_equatorial, equatorial_to_ecliptic, equatorial_to_horizontal,
    horizontal_to_equatorial, rotate_equatorial, Ecliptic, Equatorial, Horizontal, InertialFrame,
};
pub use light_time::{light_time_correction, LightTimeConfig, LightTimeSolution};

use crate::coordinates::cartesian::Cartesian3;
use nalgebra::Matrix3;

/// Spherical coordinates of `body` as seen from `reference`
///
/// Both vectors must share frame and unit. Returns (longitude, latitude,
/// distance) with longitude in [0, 2π); no rotation is applied, so the angles
/// are in the frame of the inputs.
pub fn rectangular_to_spherical(body: &Cartesian3, reference: &Cartesian3) -> (f64, f64, f64) {
    (*body - *reference).to_spherical()
}

pub fn spherical_to_rectangular(lon: f64, lat: f64, radius: f64) -> Cartesian3 {
    Cartesian3::from_spherical(lon, lat, radius)
}

pub fn rotate_rectangular(matrix: &Matrix3<f64>, position: &Cartesian3) -> Cartesian3 {
    position.rotate(matrix)
}

/// Rotation about the x axis taking ecliptic coordinates to equatorial ones
pub fn ecliptic_to_equator_matrix(obliquity: f64) -> Matrix3<f64> {
    let (so, co) = obliquity.sin_cos();
    Matrix3::new(1.0, 0.0, 0.0, 0.0, co, -so, 0.0, so, co)
}
