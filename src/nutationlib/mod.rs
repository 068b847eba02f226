//! Nutation computations based on the IAU 2000 model
//!
//! Implements nutation in longitude (delta-psi) and obliquity (delta-epsilon),
//! the mean obliquity of the ecliptic and the nutation rotation matrix.
//!
//! The lunisolar series carries the 77 largest terms of IAU 2000A (the
//! IAU 2000B selection); the planetary series reduces to the constant offset
//! that stands in for the long-period planetary terms. Agreement with the
//! full model is about 1 mas between 1995 and 2050.

mod data;

use crate::constants::ASEC2RAD;
use crate::fundamentals::{delaunay_arguments, planetary_arguments};
use crate::time::JulianDate;
use nalgebra::Matrix3;

/// Conversion factor from 0.1 microarcsecond to radians
const TENTH_USEC_2_RAD: f64 = ASEC2RAD / 1e7;

/// Lunisolar term: multipliers of l, l', F, D, Ω; ψ [sin, sin·t, cos];
/// ε [cos, cos·t, sin]
#[derive(Debug, Clone, Copy)]
pub(crate) struct LunisolarTerm {
    pub args: [i8; 5],
    pub psi: [f64; 3],
    pub eps: [f64; 3],
}

/// Planetary term: multipliers of the fourteen planetary arguments;
/// ψ [sin, cos]; ε [cos, sin]
#[derive(Debug, Clone, Copy)]
pub(crate) struct PlanetaryTerm {
    pub args: [i8; 14],
    pub psi: [f64; 2],
    pub eps: [f64; 2],
}

fn phase(multipliers: &[i8], arguments: &[f64]) -> f64 {
    multipliers
        .iter()
        .zip(arguments.iter())
        .map(|(&k, &a)| f64::from(k) * a)
        .sum()
}

/// Mean obliquity of the ecliptic in radians (IAU 2006)
///
/// # Arguments
/// * `tdb` - TDB, or TT for all but the most exacting work
pub fn mean_obliquity(tdb: JulianDate) -> f64 {
    let t = tdb.centuries();
    (84381.406
        + (-46.836769
            + (-0.0001831 + (0.00200340 + (-0.000000576 - 0.0000000434 * t) * t) * t) * t)
            * t)
        * ASEC2RAD
}

/// Lunisolar part of the nutation, (Δψ, Δε) in 0.1 µas
fn lunisolar_nutation(t: f64) -> (f64, f64) {
    let fa = delaunay_arguments(t);
    let mut d_psi = 0.0;
    let mut d_eps = 0.0;

    // Smallest terms first
    for term in data::LUNISOLAR.iter().rev() {
        let (sn, cs) = phase(&term.args, &fa).sin_cos();
        d_psi += (term.psi[0] + term.psi[1] * t) * sn + term.psi[2] * cs;
        d_eps += (term.eps[0] + term.eps[1] * t) * cs + term.eps[2] * sn;
    }
    (d_psi, d_eps)
}

/// Planetary part of the nutation, (Δψ, Δε) in 0.1 µas
fn planetary_nutation(t: f64) -> (f64, f64) {
    let fa = planetary_arguments(t);
    let mut d_psi = 0.0;
    let mut d_eps = 0.0;

    for term in data::PLANETARY.iter().rev() {
        let (sn, cs) = phase(&term.args, &fa).sin_cos();
        d_psi += term.psi[0] * sn + term.psi[1] * cs;
        d_eps += term.eps[0] * cs + term.eps[1] * sn;
    }
    (d_psi, d_eps)
}

/// Compute nutation angles (delta-psi, delta-epsilon) in radians
///
/// The lunisolar and planetary series are summed independently and only
/// their total is scaled to radians.
pub fn nutation(tdb: JulianDate) -> (f64, f64) {
    let t = tdb.centuries();
    let (psi_lun, eps_lun) = lunisolar_nutation(t);
    let (psi_pla, eps_pla) = planetary_nutation(t);

    (
        (psi_lun + psi_pla) * TENTH_USEC_2_RAD,
        (eps_lun + eps_pla) * TENTH_USEC_2_RAD,
    )
}

/// Build the nutation rotation matrix from its three angles
///
/// Rotates mean equatorial coordinates of date into true coordinates of
/// date: R1(-(ε + Δε)) · R3(-Δψ) · R1(ε).
pub fn build_nutation_matrix(mean_obliquity: f64, d_psi: f64, d_eps: f64) -> Matrix3<f64> {
    let (s1, c1) = mean_obliquity.sin_cos();
    let (s2, c2) = d_psi.sin_cos();
    let s2 = -s2;
    let (s3, c3) = (mean_obliquity + d_eps).sin_cos();
    let s3 = -s3;

    Matrix3::new(
        c2,
        s2 * c1,
        s2 * s1,
        -s2 * c3,
        c3 * c2 * c1 - s1 * s3,
        c3 * c2 * s1 + c1 * s3,
        s2 * s3,
        -s3 * c2 * c1 - s1 * c3,
        -s3 * c2 * s1 + c3 * c1,
    )
}

/// Nutation matrix at `tdb`
pub fn nutation_matrix(tdb: JulianDate) -> Matrix3<f64> {
    let (d_psi, d_eps) = nutation(tdb);
    build_nutation_matrix(mean_obliquity(tdb), d_psi, d_eps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEG2RAD, RAD2ASEC};
    use crate::coordinates::Cartesian3;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_mean_obliquity_j2000() {
        assert_abs_diff_eq!(mean_obliquity(JulianDate::j2000()), 0.409_092_8, epsilon = 1e-7);
        assert_abs_diff_eq!(
            mean_obliquity(JulianDate::j2000()),
            84381.406 * ASEC2RAD,
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_mean_obliquity_meeus_22a() {
        // 1987 April 10: epsilon0 = 23°26'27.407"
        let eps = mean_obliquity(JulianDate::from_jd(2_446_895.5));
        assert_abs_diff_eq!(eps / DEG2RAD, 23.440_946, epsilon = 2e-5);
    }

    #[test]
    fn test_nutation_meeus_22a() {
        let (d_psi, d_eps) = nutation(JulianDate::from_jd(2_446_895.5));
        assert_abs_diff_eq!(d_psi * RAD2ASEC, -3.788, epsilon = 0.01);
        assert_abs_diff_eq!(d_eps * RAD2ASEC, 9.443, epsilon = 0.01);
    }

    #[test]
    fn test_nutation_is_bounded() {
        for i in 0..200 {
            let t = JulianDate::from_jd(2_440_000.5 + 97.3 * i as f64);
            let (d_psi, d_eps) = nutation(t);
            assert!(d_psi.abs() * RAD2ASEC < 19.5);
            assert!(d_eps.abs() * RAD2ASEC < 10.5);
        }
    }

    #[test]
    fn test_nutation_is_deterministic() {
        let t = JulianDate::new(2_451_545.0, 0.123_456_789);
        assert_eq!(nutation(t), nutation(t));
    }

    #[test]
    fn test_nutation_matrix_is_orthogonal() {
        let m = nutation_matrix(JulianDate::from_jd(2_455_200.5));
        let product = m * m.transpose();
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_abs_diff_eq!(product[(i, j)], expected, epsilon = 1e-14);
            }
        }
    }

    #[test]
    fn test_zero_nutation_is_identity() {
        let m = build_nutation_matrix(0.409, 0.0, 0.0);
        assert_relative_eq!(m, Matrix3::identity(), epsilon = 1e-15);
    }

    #[test]
    fn test_nutation_shifts_equinox_by_d_psi() {
        // A point on the mean equinox moves along the ecliptic by Δψ
        let eps = 0.409;
        let d_psi = 1e-4;
        let m = build_nutation_matrix(eps, d_psi, 0.0);
        let v = Cartesian3::new(1.0, 0.0, 0.0).rotate(&m);
        let (ra, _, _) = v.to_spherical();
        assert_abs_diff_eq!(ra, d_psi * eps.cos(), epsilon = 1e-8);
    }
}
