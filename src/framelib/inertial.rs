use crate::constants::{RAD2DEG, TAU};
use crate::coordinates::cartesian::Cartesian3;
use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

// Shared behaviour of the spherical systems: unit-sphere promotion and separation
pub trait InertialFrame: Sized {
    fn to_cartesian(&self) -> Cartesian3;
    fn from_cartesian(cart: Cartesian3) -> Self;

    /// Great-circle separation in radians
    fn angle_between(&self, other: &Self) -> f64 {
        self.to_cartesian().angle_between(&other.to_cartesian())
    }

    /// Rotate on the unit sphere by a 3×3 matrix (precession, nutation, ...)
    fn rotate(&self, matrix: &Matrix3<f64>) -> Self {
        Self::from_cartesian(self.to_cartesian().rotate(matrix))
    }
}

// Equatorial coordinates (RA/Dec)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Equatorial {
    pub ra: f64,  // Right ascension in radians
    pub dec: f64, // Declination in radians
}

impl Equatorial {
    pub fn new(ra: f64, dec: f64) -> Self {
        Equatorial {
            ra: ra.rem_euclid(TAU),
            dec,
        }
    }

    /// Create a new Equatorial coordinate with values in degrees
    pub fn from_degrees(ra_deg: f64, dec_deg: f64) -> Self {
        Self::new(ra_deg.to_radians(), dec_deg.to_radians())
    }

    pub fn ra_hours(&self) -> f64 {
        self.ra * RAD2DEG / 15.0
    }

    pub fn ra_degrees(&self) -> f64 {
        self.ra * RAD2DEG
    }

    pub fn dec_degrees(&self) -> f64 {
        self.dec * RAD2DEG
    }

    /// Ecliptic coordinates for the given obliquity
    pub fn to_ecliptic(&self, obliquity: f64) -> Ecliptic {
        equatorial_to_ecliptic(self, obliquity)
    }
}

// Ecliptic coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ecliptic {
    pub lon: f64, // Ecliptic longitude in radians
    pub lat: f64, // Ecliptic latitude in radians
}

impl Ecliptic {
    pub fn new(lon: f64, lat: f64) -> Self {
        Ecliptic {
            lon: lon.rem_euclid(TAU),
            lat,
        }
    }

    pub fn from_degrees(lon_deg: f64, lat_deg: f64) -> Self {
        Self::new(lon_deg.to_radians(), lat_deg.to_radians())
    }

    /// Equatorial coordinates for the given obliquity
    pub fn to_equatorial(&self, obliquity: f64) -> Equatorial {
        ecliptic_to_equatorial(self, obliquity)
    }
}

/// Horizontal coordinates
///
/// Azimuth is measured westward from the south point, the convention the
/// spherical-trigonometry formulas below produce directly. Add π for a
/// north-based azimuth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Horizontal {
    pub az: f64,  // Azimuth in radians
    pub alt: f64, // Altitude in radians
}

impl Horizontal {
    pub fn new(az: f64, alt: f64) -> Self {
        Horizontal {
            az: az.rem_euclid(TAU),
            alt,
        }
    }
}

impl InertialFrame for Equatorial {
    fn to_cartesian(&self) -> Cartesian3 {
        Cartesian3::from_spherical(self.ra, self.dec, 1.0)
    }

    fn from_cartesian(cart: Cartesian3) -> Self {
        let (ra, dec, _) = cart.to_spherical();
        Equatorial { ra, dec }
    }
}

impl InertialFrame for Ecliptic {
    fn to_cartesian(&self) -> Cartesian3 {
        Cartesian3::from_spherical(self.lon, self.lat, 1.0)
    }

    fn from_cartesian(cart: Cartesian3) -> Self {
        let (lon, lat, _) = cart.to_spherical();
        Ecliptic { lon, lat }
    }
}

/// Geocentric equatorial to ecliptic coordinates
///
/// Undefined (NaN) only where the arguments themselves are; the poles are
/// not special-cased.
pub fn equatorial_to_ecliptic(equ: &Equatorial, obliquity: f64) -> Ecliptic {
    let (sd, cd) = equ.dec.sin_cos();
    let (sr, cr) = equ.ra.sin_cos();
    let (so, co) = obliquity.sin_cos();

    Ecliptic {
        lon: (sr * cd * co + sd * so).atan2(cr * cd).rem_euclid(TAU),
        lat: (sd * co - sr * cd * so).asin(),
    }
}

/// Geocentric ecliptic to equatorial coordinates
pub fn ecliptic_to_equatorial(ecl: &Ecliptic, obliquity: f64) -> Equatorial {
    let (sg, cg) = ecl.lon.sin_cos();
    let (st, ct) = ecl.lat.sin_cos();
    let (so, co) = obliquity.sin_cos();

    Equatorial {
        ra: (sg * ct * co - st * so).atan2(cg * ct).rem_euclid(TAU),
        dec: (st * co + sg * ct * so).asin(),
    }
}

/// Horizontal coordinates from local hour angle and declination
pub fn equatorial_to_horizontal(hour_angle: f64, dec: f64, latitude: f64) -> Horizontal {
    let (sd, cd) = dec.sin_cos();
    let (sh, ch) = hour_angle.sin_cos();
    let (st, ct) = latitude.sin_cos();

    Horizontal {
        az: (cd * sh).atan2(cd * st * ch - sd * ct).rem_euclid(TAU),
        alt: (sd * st + cd * ct * ch).asin(),
    }
}

/// Local hour angle and declination from horizontal coordinates
pub fn horizontal_to_equatorial(hor: &Horizontal, latitude: f64) -> (f64, f64) {
    let (sa, ca) = hor.alt.sin_cos();
    let (sz, cz) = hor.az.sin_cos();
    let (st, ct) = latitude.sin_cos();

    let hour_angle = (sz * ca).atan2(cz * ca * st + sa * ct).rem_euclid(TAU);
    let dec = (sa * st - cz * ca * ct).asin();
    (hour_angle, dec)
}

/// Rotate equatorial coordinates by a precession or nutation matrix
pub fn rotate_equatorial(matrix: &Matrix3<f64>, equ: &Equatorial) -> Equatorial {
    let rec = Cartesian3::from_spherical(equ.ra, equ.dec, 1.0).rotate(matrix);
    Equatorial {
        ra: rec.y.atan2(rec.x).rem_euclid(TAU),
        dec: rec.z.clamp(-1.0, 1.0).asin(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEG2RAD;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::f64::consts::PI;

    const OBLIQUITY: f64 = 23.4392911 * DEG2RAD;

    #[test]
    fn test_equatorial_to_cartesian_roundtrip() {
        let mut rng = StdRng::seed_from_u64(424242);
        for _ in 0..100 {
            let original = Equatorial::new(
                rng.gen::<f64>() * 2.0 * PI,
                (rng.gen::<f64>() * PI - PI / 2.0) * 0.99,
            );
            let roundtrip = Equatorial::from_cartesian(original.to_cartesian());
            assert_relative_eq!(roundtrip.ra, original.ra, epsilon = 1e-12);
            assert_relative_eq!(roundtrip.dec, original.dec, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_ecliptic_equatorial_roundtrip() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let obl = rng.gen_range(0.01..0.8);
            let equ = Equatorial::new(
                rng.gen_range(0.0..TAU),
                rng.gen_range(-0.7..0.7),
            );
            let back = equatorial_to_ecliptic(&equ, obl).to_equatorial(obl);
            let dra = (back.ra - equ.ra + PI).rem_euclid(TAU) - PI;
            assert!(dra.abs() < 1e-12, "ra mismatch {dra}");
            assert_relative_eq!(back.dec, equ.dec, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_pollux_ecliptic() {
        // Meeus, Astronomical Algorithms, example 13.a
        let pollux = Equatorial::from_degrees(116.328942, 28.026183);
        let ecl = pollux.to_ecliptic(OBLIQUITY);
        assert_relative_eq!(ecl.lon * RAD2DEG, 113.215630, epsilon = 1e-5);
        assert_relative_eq!(ecl.lat * RAD2DEG, 6.684170, epsilon = 1e-5);
    }

    #[test]
    fn test_venus_horizontal() {
        // Meeus example 13.b: Venus from Washington, hour angle 64.352133°
        let hor = equatorial_to_horizontal(
            64.352133 * DEG2RAD,
            -6.719892 * DEG2RAD,
            38.921389 * DEG2RAD,
        );
        assert_relative_eq!(hor.az * RAD2DEG, 68.0337, epsilon = 1e-3);
        assert_relative_eq!(hor.alt * RAD2DEG, 15.1249, epsilon = 1e-3);

        let (ha, dec) = horizontal_to_equatorial(&hor, 38.921389 * DEG2RAD);
        assert_relative_eq!(ha * RAD2DEG, 64.352133, epsilon = 1e-9);
        assert_relative_eq!(dec * RAD2DEG, -6.719892, epsilon = 1e-9);
    }

    #[test]
    fn test_rotate_equatorial_identity_and_z() {
        let equ = Equatorial::new(1.2, -0.4);
        let same = rotate_equatorial(&Matrix3::identity(), &equ);
        assert_relative_eq!(same.ra, equ.ra, epsilon = 1e-15);
        assert_relative_eq!(same.dec, equ.dec, epsilon = 1e-15);

        let (s, c) = 0.5_f64.sin_cos();
        let rz = Matrix3::new(c, -s, 0.0, s, c, 0.0, 0.0, 0.0, 1.0);
        let turned = equ.rotate(&rz);
        assert_relative_eq!(turned.ra, 1.7, epsilon = 1e-14);
        assert_relative_eq!(turned.dec, -0.4, epsilon = 1e-14);
    }

    #[test]
    fn test_angular_distance() {
        // Meeus example 17.a: Arcturus to Spica
        let arcturus = Equatorial::from_degrees(213.9154, 19.1825);
        let spica = Equatorial::from_degrees(201.2983, -11.1614);
        let d = arcturus.angle_between(&spica) * RAD2DEG;
        assert_relative_eq!(d, 32.7930, epsilon = 1e-3);
    }
}
