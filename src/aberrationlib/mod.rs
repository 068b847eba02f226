//! Annual aberration
//!
//! Ron & Vondrák (1986) trigonometric expansion of the Earth's barycentric
//! velocity, and the first-order aberration in right ascension and
//! declination that follows from it.

mod data;

use crate::constants::C_VONDRAK;
use crate::coordinates::Cartesian3;
use crate::framelib::Equatorial;
use crate::fundamentals::{delaunay_arguments, fundamental_argument, planetary_longitudes, Argument};
use crate::time::JulianDate;

/// EMB term in multiples of the Earth's mean longitude
///
/// Each axis: [sin, sin·t, sin·t², cos, cos·t, cos·t²]
#[derive(Debug, Clone, Copy)]
pub(crate) struct EmbSecularTerm {
    pub l_ea: i8,
    pub x: [f64; 6],
    pub y: [f64; 6],
    pub z: [f64; 6],
}

/// Term in six planetary longitudes, each axis [sin, cos]
#[derive(Debug, Clone, Copy)]
pub(crate) struct PlanetaryVelocityTerm {
    pub args: [i8; 6],
    pub x: [f64; 2],
    pub y: [f64; 2],
    pub z: [f64; 2],
}

/// Term in w, D, l', l, F
#[derive(Debug, Clone, Copy)]
pub(crate) struct LunarVelocityTerm {
    pub args: [i8; 5],
    pub x_sin: f64,
    pub y_cos: f64,
    pub z_cos: f64,
}

fn phase(multipliers: &[i8], arguments: &[f64]) -> f64 {
    multipliers
        .iter()
        .zip(arguments.iter())
        .map(|(&k, &a)| f64::from(k) * a)
        .sum()
}

/// Evaluate [sin, sin·t, sin·t², cos, cos·t, cos·t²] coefficients
fn secular_axis(c: &[f64; 6], t: f64, sn: f64, cs: f64) -> f64 {
    (c[0] + (c[1] + c[2] * t) * t) * sn + (c[3] + (c[4] + c[5] * t) * t) * cs
}

fn sum_planetary(table: &[PlanetaryVelocityTerm], args: &[f64; 6], v: &mut Cartesian3) {
    for term in table.iter().rev() {
        let (sn, cs) = phase(&term.args, args).sin_cos();
        v.x += term.x[0] * sn + term.x[1] * cs;
        v.y += term.y[0] * sn + term.y[1] * cs;
        v.z += term.z[0] * sn + term.z[1] * cs;
    }
}

/// Barycentric velocity of the Earth in 1e-8 AU/day
///
/// Components are on the equator and equinox of J2000. Each of the three
/// motions (Earth-Moon barycentre about the Sun, Sun about the barycentre,
/// Earth about the Earth-Moon barycentre) is summed smallest terms first
/// before the three are added.
pub fn earth_velocity(tdb: JulianDate) -> Cartesian3 {
    let t = tdb.centuries();
    let [me, ve, ea, ma, ju, sa, ur, ne] = planetary_longitudes(t);
    let [l, lp, f, d, _] = delaunay_arguments(t);
    let w = fundamental_argument(Argument::LongitudeMoon, t);

    let mut emb = Cartesian3::zero();
    sum_planetary(&data::EMB_PLANETARY, &[me, ve, ea, ma, ju, sa], &mut emb);
    for term in data::EMB_SECULAR.iter().rev() {
        let (sn, cs) = (f64::from(term.l_ea) * ea).sin_cos();
        emb.x += secular_axis(&term.x, t, sn, cs);
        emb.y += secular_axis(&term.y, t, sn, cs);
        emb.z += secular_axis(&term.z, t, sn, cs);
    }

    let mut sun = Cartesian3::zero();
    sum_planetary(&data::SUN_BARYCENTRIC, &[ve, ea, ju, sa, ur, ne], &mut sun);

    let mut moon = Cartesian3::zero();
    let lunar = [w, d, lp, l, f];
    for term in data::EARTH_EMB.iter().rev() {
        let (sn, cs) = phase(&term.args, &lunar).sin_cos();
        moon.x += term.x_sin * sn;
        moon.y += term.y_cos * cs;
        moon.z += term.z_cos * cs;
    }

    emb + sun + moon
}

/// Annual aberration (Δα, Δδ) in radians for a body at `coords`
///
/// First-order, non-relativistic: good to the precision of the velocity
/// series, about 1 mas.
pub fn annual_aberration(tdb: JulianDate, coords: &Equatorial) -> (f64, f64) {
    let v = earth_velocity(tdb);
    let (sra, cra) = coords.ra.sin_cos();
    let (sdec, cdec) = coords.dec.sin_cos();

    let d_ra = (v.y * cra - v.x * sra) / (C_VONDRAK * cdec);
    let d_dec = (v.z * cdec - (v.x * cra + v.y * sra) * sdec) / C_VONDRAK;
    (d_ra, d_dec)
}

/// Coordinates displaced by the annual aberration
pub fn apply_aberration(tdb: JulianDate, coords: &Equatorial) -> Equatorial {
    let (d_ra, d_dec) = annual_aberration(tdb, coords);
    Equatorial::new(coords.ra + d_ra, coords.dec + d_dec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{C_AUDAY, RAD2ASEC};
    use crate::planetlib::{vsop87_ecliptic_to_equator, vsop87_position, Planet};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_theta_persei() {
        // Meeus example 23.a: 2028 November 13.19 TD
        let star = Equatorial::from_degrees(41.054_063, 49.227_750);
        let (d_ra, d_dec) = annual_aberration(JulianDate::from_jd(2_462_088.69), &star);
        assert_abs_diff_eq!(d_ra * RAD2ASEC, 30.045, epsilon = 0.3);
        assert_abs_diff_eq!(d_dec * RAD2ASEC, 6.697, epsilon = 0.3);
    }

    #[test]
    fn test_speed_matches_orbital_velocity() {
        // About 29.8 km/s, or 0.0172 AU/day; the ratio to c is the
        // constant of aberration, 20.5"
        for i in 0..24 {
            let v = earth_velocity(JulianDate::from_jd(2_451_545.0 + 15.2 * i as f64));
            let speed = v.magnitude() * 1e-8;
            assert!((0.0166..0.0178).contains(&speed), "speed {speed}");
            assert_abs_diff_eq!(speed / C_AUDAY * RAD2ASEC, 20.5, epsilon = 0.6);
        }
    }

    #[test]
    fn test_velocity_agrees_with_vsop_difference() {
        let t = JulianDate::from_jd(2_455_200.5);
        let h = 0.01;
        let before = vsop87_ecliptic_to_equator(&vsop87_position(Planet::Earth, t.add_days(-h)));
        let after = vsop87_ecliptic_to_equator(&vsop87_position(Planet::Earth, t.add_days(h)));
        let numeric = (after.xyz() - before.xyz()) / (2.0 * h);

        // Heliocentric and barycentric velocities differ by the Sun's
        // reflex motion, up to about 1.3e-5 AU/day
        let series = earth_velocity(t) * 1e-8;
        assert_abs_diff_eq!(series.x, numeric.x, epsilon = 1.5e-5);
        assert_abs_diff_eq!(series.y, numeric.y, epsilon = 1.5e-5);
        assert_abs_diff_eq!(series.z, numeric.z, epsilon = 1.5e-5);
    }

    #[test]
    fn test_aberration_vanishes_at_apex() {
        // A body in the direction of motion shows no displacement
        let t = JulianDate::from_jd(2_451_545.0);
        let (ra, dec, _) = earth_velocity(t).to_spherical();
        let (d_ra, d_dec) = annual_aberration(t, &Equatorial::new(ra, dec));
        assert!(d_ra.abs() * RAD2ASEC < 1e-6);
        assert!(d_dec.abs() * RAD2ASEC < 1e-6);
    }
}
