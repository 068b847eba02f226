pub mod angle;
pub mod cartesian;
pub mod frames;

pub use angle::{degrees_to_dms, Angle, Sexagesimal};
pub use cartesian::Cartesian3;
pub use frames::{
    GeocentricEquatorial, HeliocentricEcliptic, HeliocentricEquatorial, LunarEcliptic, Position,
};

// Re-export the spherical coordinate systems from framelib
pub use crate::framelib::inertial::{Ecliptic, Equatorial, Horizontal};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEG2RAD, RAD2DEG};
    use crate::framelib::inertial::InertialFrame;

    #[test]
    fn test_equatorial_from_angles() {
        let ra = Angle::from_hms(2, 31, 48.704);
        let dec = Angle::from_dms(89, 15, 50.72);
        let coord = Equatorial::new(ra.to_radians(), dec.to_radians());

        assert!((coord.ra * RAD2DEG / 15.0 - ra.to_hours()).abs() < 1e-12);
        assert!((coord.dec - 89.264_088_888_888_89 * DEG2RAD).abs() < 1e-12);
    }

    #[test]
    fn test_angular_distance() {
        let p1 = Equatorial::new(1.0, 0.5);
        assert!(p1.angle_between(&p1).abs() < 1e-10);

        let polaris = Equatorial::new(37.95 * DEG2RAD, 89.26 * DEG2RAD);
        let vega = Equatorial::new(279.23 * DEG2RAD, 38.78 * DEG2RAD);
        let dist_deg = polaris.angle_between(&vega) * RAD2DEG;
        assert!((dist_deg - 51.0).abs() < 1.0);
    }
}
