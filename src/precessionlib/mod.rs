//! Precession matrix computation
//!
//! IAU 2006 (Capitaine et al. 2003) four-angle formulation,
//! P = R3(χA) · R1(-ωA) · R3(-ψA) · R1(ε0), relating the mean equator and
//! equinox of J2000 to those of another epoch.

use crate::constants::{ASEC2RAD, OBLIQUITY_J2000_ASEC};
use crate::time::JulianDate;
use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

/// Which way a precession matrix rotates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrecessionDirection {
    /// Mean J2000 coordinates to mean coordinates of the epoch
    FromJ2000,
    /// Mean coordinates of the epoch back to J2000
    ToJ2000,
}

/// Precession angles (ψA, ωA, χA) in radians
pub fn precession_angles(tdb: JulianDate) -> (f64, f64, f64) {
    let t = tdb.centuries();

    let psi_a = (5038.481507
        + (-1.0790069 + (-0.00114045 + (0.000132851 - 0.0000000951 * t) * t) * t) * t)
        * t;
    let omega_a = OBLIQUITY_J2000_ASEC
        + (-0.025754 + (0.0512623 + (-0.00772503 + (-0.000000467 + 0.0000003337 * t) * t) * t) * t)
            * t;
    let chi_a = (10.556403
        + (-2.3814292 + (-0.00121197 + (0.000170663 - 0.0000000560 * t) * t) * t) * t)
        * t;

    (psi_a * ASEC2RAD, omega_a * ASEC2RAD, chi_a * ASEC2RAD)
}

/// Compute the precession rotation matrix for a TDB epoch
///
/// `FromJ2000` takes mean J2000 coordinates to the mean equator and equinox
/// of `tdb`; `ToJ2000` returns the transpose, which is the inverse rotation.
pub fn precession_matrix(tdb: JulianDate, direction: PrecessionDirection) -> Matrix3<f64> {
    let (psi_a, omega_a, chi_a) = precession_angles(tdb);

    let (s1, c1) = (OBLIQUITY_J2000_ASEC * ASEC2RAD).sin_cos();
    let (s2, c2) = (-psi_a).sin_cos();
    let (s3, c3) = (-omega_a).sin_cos();
    let (s4, c4) = chi_a.sin_cos();

    #[rustfmt::skip]
    let m = Matrix3::new(
        c4 * c2 - s2 * s4 * c3,
        c4 * s2 * c1 + s4 * c3 * c2 * c1 - s1 * s4 * s3,
        c4 * s2 * s1 + s4 * c3 * c2 * s1 + c1 * s4 * s3,

        -s4 * c2 - s2 * c4 * c3,
        -s4 * s2 * c1 + c4 * c3 * c2 * c1 - s1 * c4 * s3,
        -s4 * s2 * s1 + c4 * c3 * c2 * s1 + c1 * c4 * s3,

        s2 * s3,
        -s3 * c2 * c1 - s1 * c3,
        -s3 * c2 * s1 + c3 * c1,
    );

    match direction {
        PrecessionDirection::FromJ2000 => m,
        PrecessionDirection::ToJ2000 => m.transpose(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{JULIAN_CENTURY, J2000, RAD2DEG};
    use crate::framelib::{rotate_equatorial, Equatorial};
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    #[test]
    fn test_precession_at_j2000_is_identity() {
        let p = precession_matrix(JulianDate::j2000(), PrecessionDirection::FromJ2000);
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_abs_diff_eq!(p[(i, j)], expected, epsilon = 1e-12);
            }
        }
    }

    #[rstest]
    #[case(2_415_020.5)]
    #[case(2_455_200.5)]
    #[case(2_488_070.0)]
    fn test_directions_compose_to_identity(#[case] jd: f64) {
        let t = JulianDate::from_jd(jd);
        let forward = precession_matrix(t, PrecessionDirection::FromJ2000);
        let back = precession_matrix(t, PrecessionDirection::ToJ2000);
        let product = back * forward;
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_abs_diff_eq!(product[(i, j)], expected, epsilon = 1e-10);
            }
        }
        assert_abs_diff_eq!(forward.determinant(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_equinox_precesses_one_century() {
        // The J2000 equinox seen from the mean equator of 2100
        let t = JulianDate::from_jd(J2000 + JULIAN_CENTURY);
        let p = precession_matrix(t, PrecessionDirection::FromJ2000);
        let moved = rotate_equatorial(&p, &Equatorial::new(0.0, 0.0));
        assert_abs_diff_eq!(moved.ra * RAD2DEG, 1.281, epsilon = 2e-3);
        assert_abs_diff_eq!(moved.dec * RAD2DEG, 0.5567, epsilon = 1e-3);
    }

    #[test]
    fn test_meeus_example_21b() {
        // Theta Persei from J2000 to 2028 November 13.19 TD
        let star = Equatorial::from_degrees(41.054_063, 49.227_750);
        let p = precession_matrix(
            JulianDate::from_jd(2_462_088.69),
            PrecessionDirection::FromJ2000,
        );
        let moved = rotate_equatorial(&p, &star);
        assert_abs_diff_eq!(moved.ra * RAD2DEG, 41.547_214, epsilon = 2e-4);
        assert_abs_diff_eq!(moved.dec * RAD2DEG, 49.348_483, epsilon = 2e-4);
    }
}
