//! # Rectangular Coordinates
//!
//! `Cartesian3` is the untyped (x, y, z) triple that every theory in this
//! crate produces and every rotation consumes. It deliberately carries no
//! frame, origin or unit: VSOP87 returns heliocentric ecliptic AU, ELP2000-82B
//! geocentric ecliptic kilometres and Pluto95 heliocentric equatorial AU, all
//! in the same type. When a value has to cross an API boundary with its frame
//! attached, wrap it in [`Position`](super::frames::Position).
//!
//! ## Axis convention
//!
//! - **X**: toward the equinox (longitude / right ascension 0)
//! - **Y**: toward longitude / right ascension 90°
//! - **Z**: toward the pole of the reference plane
//!
//! ## Examples
//!
//! ```rust
//! use skyephem::coordinates::cartesian::Cartesian3;
//!
//! let equinox = Cartesian3::new(1.0, 0.0, 0.0);
//! let pole = Cartesian3::new(0.0, 0.0, 1.0);
//! assert_eq!(equinox.dot(&pole), 0.0);
//! ```

use crate::constants::TAU;
use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Three-dimensional rectangular coordinates
///
/// Components are in whatever unit the producing theory uses (AU for the
/// planets and Pluto, kilometres for the Moon). The type is `Copy`, and
/// every operation returns a new value.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Cartesian3 {
    /// X-component (toward the equinox)
    pub x: f64,
    /// Y-component (toward longitude 90°)
    pub y: f64,
    /// Z-component (toward the pole)
    pub z: f64,
}

impl Cartesian3 {
    /// Creates new rectangular coordinates
    ///
    /// # Examples
    ///
    /// ```rust
    /// use skyephem::coordinates::cartesian::Cartesian3;
    ///
    /// let coord = Cartesian3::new(1.0, 2.0, 3.0);
    /// assert_eq!(coord.y, 2.0);
    /// ```
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Cartesian3 { x, y, z }
    }

    /// The origin
    pub fn zero() -> Self {
        Cartesian3::default()
    }

    /// Creates rectangular coordinates from a longitude, latitude and distance
    ///
    /// Works for any spherical pair: right ascension/declination,
    /// ecliptic longitude/latitude. Angles are in radians and the result is
    /// in the unit of `radius`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use skyephem::coordinates::cartesian::Cartesian3;
    /// use std::f64::consts::PI;
    ///
    /// let coord = Cartesian3::from_spherical(PI / 2.0, 0.0, 2.0);
    /// assert!(coord.x.abs() < 1e-15);
    /// assert!((coord.y - 2.0).abs() < 1e-15);
    /// ```
    pub fn from_spherical(lon: f64, lat: f64, radius: f64) -> Self {
        let (sin_lon, cos_lon) = lon.sin_cos();
        let (sin_lat, cos_lat) = lat.sin_cos();

        Cartesian3 {
            x: radius * cos_lon * cos_lat,
            y: radius * sin_lon * cos_lat,
            z: radius * sin_lat,
        }
    }

    /// Converts to (longitude, latitude, radius)
    ///
    /// Longitude is reduced to [0, 2π) and latitude lies in [-π/2, π/2].
    /// The origin maps to (0, 0, 0).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use skyephem::coordinates::cartesian::Cartesian3;
    /// use std::f64::consts::PI;
    ///
    /// let (lon, lat, r) = Cartesian3::new(0.0, -1.0, 0.0).to_spherical();
    /// assert!((lon - 1.5 * PI).abs() < 1e-15);
    /// assert_eq!(lat, 0.0);
    /// assert_eq!(r, 1.0);
    /// ```
    pub fn to_spherical(&self) -> (f64, f64, f64) {
        let rho = self.x.hypot(self.y);
        let lon = self.y.atan2(self.x).rem_euclid(TAU);
        let lat = self.z.atan2(rho);
        (lon, lat, self.magnitude())
    }

    /// Euclidean length of the vector
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Unit vector in the same direction, `None` for the zero vector
    pub fn normalize(&self) -> Option<Cartesian3> {
        let mag = self.magnitude();
        if mag == 0.0 {
            None
        } else {
            Some(*self / mag)
        }
    }

    pub fn dot(&self, other: &Cartesian3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: &Cartesian3) -> Cartesian3 {
        Cartesian3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Angle between two vectors in radians, in [0, π]
    ///
    /// Uses atan2 of the cross and dot products, which stays accurate for
    /// nearly parallel and nearly opposite vectors.
    pub fn angle_between(&self, other: &Cartesian3) -> f64 {
        let cross = self.cross(other).magnitude();
        let dot = self.dot(other);
        if cross == 0.0 && dot == 0.0 {
            return 0.0;
        }
        cross.atan2(dot).clamp(0.0, PI)
    }

    /// Applies a 3×3 rotation (or any linear map) to the vector
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nalgebra::Matrix3;
    /// use skyephem::coordinates::cartesian::Cartesian3;
    ///
    /// let swap = Matrix3::new(0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0);
    /// let v = Cartesian3::new(1.0, 2.0, 3.0).rotate(&swap);
    /// assert_eq!(v, Cartesian3::new(2.0, 1.0, 3.0));
    /// ```
    pub fn rotate(&self, matrix: &Matrix3<f64>) -> Cartesian3 {
        Cartesian3::from_vector3(matrix * self.to_vector3())
    }

    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    pub fn from_vector3(vec: Vector3<f64>) -> Self {
        Cartesian3 {
            x: vec.x,
            y: vec.y,
            z: vec.z,
        }
    }
}

impl std::ops::Add for Cartesian3 {
    type Output = Cartesian3;

    fn add(self, other: Cartesian3) -> Cartesian3 {
        Cartesian3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl std::ops::Sub for Cartesian3 {
    type Output = Cartesian3;

    fn sub(self, other: Cartesian3) -> Cartesian3 {
        Cartesian3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl std::ops::Mul<f64> for Cartesian3 {
    type Output = Cartesian3;

    fn mul(self, scalar: f64) -> Cartesian3 {
        Cartesian3 {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl std::ops::Div<f64> for Cartesian3 {
    type Output = Cartesian3;

    fn div(self, scalar: f64) -> Cartesian3 {
        Cartesian3 {
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z / scalar,
        }
    }
}

impl std::ops::Neg for Cartesian3 {
    type Output = Cartesian3;

    fn neg(self) -> Cartesian3 {
        Cartesian3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_spherical_round_trip() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let v = Cartesian3::new(
                rng.gen_range(-50.0..50.0),
                rng.gen_range(-50.0..50.0),
                rng.gen_range(-50.0..50.0),
            );
            let (lon, lat, r) = v.to_spherical();
            assert!((0.0..TAU).contains(&lon), "lon out of range: {lon}");
            assert!(lat.abs() <= PI / 2.0);

            let back = Cartesian3::from_spherical(lon, lat, r);
            assert_relative_eq!(back.x, v.x, epsilon = 1e-12, max_relative = 1e-12);
            assert_relative_eq!(back.y, v.y, epsilon = 1e-12, max_relative = 1e-12);
            assert_relative_eq!(back.z, v.z, epsilon = 1e-12, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_axes() {
        let (lon, lat, r) = Cartesian3::new(0.0, 0.0, 3.0).to_spherical();
        assert_eq!(lon, 0.0);
        assert_relative_eq!(lat, PI / 2.0);
        assert_eq!(r, 3.0);

        assert_eq!(Cartesian3::zero().to_spherical(), (0.0, 0.0, 0.0));
        assert!(Cartesian3::zero().normalize().is_none());
    }

    #[test]
    fn test_vector_algebra() {
        let x = Cartesian3::new(1.0, 0.0, 0.0);
        let y = Cartesian3::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(&y), Cartesian3::new(0.0, 0.0, 1.0));
        assert_relative_eq!(x.angle_between(&y), PI / 2.0);
        assert_relative_eq!(x.angle_between(&-x), PI);
        assert_eq!(x.angle_between(&(x * 5.0)), 0.0);

        let v = Cartesian3::new(3.0, 4.0, 12.0);
        assert_eq!(v.magnitude(), 13.0);
        assert_relative_eq!(v.normalize().unwrap().magnitude(), 1.0);
        assert_eq!((v + x) - x, v);
        assert_eq!(v * 2.0 / 2.0, v);
    }

    #[test]
    fn test_rotate_about_z() {
        let angle = 0.3_f64;
        let (s, c) = angle.sin_cos();
        let rz = Matrix3::new(c, -s, 0.0, s, c, 0.0, 0.0, 0.0, 1.0);
        let v = Cartesian3::from_spherical(1.0, 0.2, 4.0).rotate(&rz);
        let (lon, lat, r) = v.to_spherical();
        assert_relative_eq!(lon, 1.3, epsilon = 1e-14);
        assert_relative_eq!(lat, 0.2, epsilon = 1e-14);
        assert_relative_eq!(r, 4.0, epsilon = 1e-14);
    }
}
