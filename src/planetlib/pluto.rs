//! Pluto95 analytical ephemeris
//!
//! Chapront & Francou's fit to DE403: a cubic secular polynomial plus 106
//! periodic terms, the last 24 of which are Poisson terms multiplied by the
//! first (from index 82) or second (from index 101) power of the normalised
//! time. The fit is only valid between 1700-01-01 and 2100-01-24; outside
//! that span the series diverge quickly and no value is returned.

use super::pluto_data::{AX, AY, AZ, CX, CY, CZ, FQ, SX, SY, SZ};
use crate::coordinates::{Cartesian3, HeliocentricEquatorial};
use crate::errors::{EphemerisError, Result};
use crate::time::JulianDate;

/// First valid date, 1700-01-01 0h TDB
pub const PLUTO_MIN_JD: f64 = 2_341_972.5;
/// Last valid date, 2100-01-24 0h TDB
pub const PLUTO_MAX_JD: f64 = 2_488_092.5;

/// Half-width of the validity interval in days
const HALF_SPAN: f64 = 73_060.0;
/// First term multiplied by x, then by x²
const FIRST_POISSON: usize = 82;
const SECOND_POISSON: usize = 101;

/// Heliocentric equatorial J2000 position of Pluto in AU
///
/// Returns `DateOutOfRange` when `tdb` lies outside
/// [`PLUTO_MIN_JD`, `PLUTO_MAX_JD`].
pub fn pluto_position(tdb: JulianDate) -> Result<HeliocentricEquatorial> {
    let t = tdb.jd();
    if !(PLUTO_MIN_JD..=PLUTO_MAX_JD).contains(&t) {
        return Err(EphemerisError::DateOutOfRange {
            theory: "Pluto95",
            jd: t,
            start_jd: PLUTO_MIN_JD,
            end_jd: PLUTO_MAX_JD,
        });
    }

    let x1 = (t - PLUTO_MIN_JD) / HALF_SPAN - 1.0;
    let powers = [1.0, x1, x1 * x1, x1 * x1 * x1];
    let fx = t - PLUTO_MIN_JD - HALF_SPAN;

    let mut secular = [0.0; 3];
    for (i, x) in powers.iter().enumerate() {
        secular[0] += AX[i] * x;
        secular[1] += AY[i] * x;
        secular[2] += AZ[i] * x;
    }

    let mut periodic = [0.0; 3];
    for i in 0..FQ.len() {
        let x = match i {
            _ if i >= SECOND_POISSON => powers[2],
            _ if i >= FIRST_POISSON => powers[1],
            _ => powers[0],
        };
        let (sn, cs) = (FQ[i] * fx).sin_cos();

        periodic[0] += (CX[i] * cs + SX[i] * sn) * x;
        periodic[1] += (CY[i] * cs + SY[i] * sn) * x;
        periodic[2] += (CZ[i] * cs + SZ[i] * sn) * x;
    }

    Ok(HeliocentricEquatorial::new(Cartesian3::new(
        (periodic[0] + secular[0]) / 1e10,
        (periodic[1] + secular[1]) / 1e10,
        (periodic[2] + secular[2]) / 1e10,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEG2RAD, RAD2DEG};
    use crate::framelib::{equatorial_to_ecliptic, Equatorial};
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    #[test]
    fn test_meeus_example_37a() {
        // 1992 October 13.0 TD
        let pos = pluto_position(JulianDate::from_jd(2_448_908.5)).unwrap();
        let (ra, dec, r) = pos.to_spherical();
        let ecl = equatorial_to_ecliptic(&Equatorial::new(ra, dec), 23.439_291_1 * DEG2RAD);

        assert_abs_diff_eq!(r, 29.711_111, epsilon = 1e-4);
        assert_abs_diff_eq!(ecl.lon * RAD2DEG, 232.740_09, epsilon = 5e-3);
        assert_abs_diff_eq!(ecl.lat * RAD2DEG, 14.587_82, epsilon = 5e-3);
    }

    #[test]
    fn test_pluto_position_is_repeatable() {
        let t = JulianDate::new(2_455_200.5, 0.75);
        let first = pluto_position(t).unwrap().xyz();
        let second = pluto_position(t).unwrap().xyz();
        assert_eq!(first.x.to_bits(), second.x.to_bits());
        assert_eq!(first.y.to_bits(), second.y.to_bits());
        assert_eq!(first.z.to_bits(), second.z.to_bits());
    }

    #[rstest]
    #[case(PLUTO_MIN_JD)]
    #[case(PLUTO_MAX_JD)]
    #[case(2_451_545.0)]
    fn test_valid_range_is_inclusive(#[case] jd: f64) {
        let pos = pluto_position(JulianDate::from_jd(jd)).unwrap();
        let r = pos.distance();
        assert!((29.0..50.5).contains(&r), "r = {r} at JD {jd}");
    }

    #[rstest]
    #[case(PLUTO_MIN_JD - 0.5)]
    #[case(PLUTO_MAX_JD + 1e-6)]
    #[case(2_200_000.0)]
    fn test_out_of_range_rejected(#[case] jd: f64) {
        let err = pluto_position(JulianDate::from_jd(jd)).unwrap_err();
        assert!(err.is_invalid_date());
        assert!(matches!(err, EphemerisError::DateOutOfRange { theory: "Pluto95", .. }));
    }
}
