//! Earth rotation and figure
//!
//! Earth rotation angle, mean and apparent sidereal time (USNO Circular 179)
//! and the equation of the equinoxes with its complementary terms (IERS
//! Conventions 2003, table 5.2e). The figure of the Earth gives an
//! observer's geocentric latitude and radius, which the geocentric parallax
//! correction needs.

use crate::constants::{
    ASEC2RAD, EARTH_FLATTENING, EARTH_POLAR_RADIUS, EARTH_RADIUS, J2000, TAU, UAS2RAD,
};
use crate::fundamentals::planetary_arguments;
use crate::nutationlib::{mean_obliquity, nutation};
use crate::time::JulianDate;
use serde::{Deserialize, Serialize};

/// Equatorial horizontal parallax of a body at 1 AU, arcseconds
const SOLAR_PARALLAX_ASEC: f64 = 8.794;

/// Complementary term: multipliers of l, l', F, D, Ω, Ve, Ea, pA
/// and sine, cosine amplitudes in microarcseconds
#[derive(Debug, Clone, Copy)]
struct EquinoxTerm {
    args: [i8; 8],
    sin: f64,
    cos: f64,
}

const fn eq(args: [i8; 8], sin: f64, cos: f64) -> EquinoxTerm {
    EquinoxTerm { args, sin, cos }
}

#[rustfmt::skip]
const COMPLEMENTARY_TERMS: [EquinoxTerm; 33] = [
    eq([0, 0, 0, 0, 1, 0, 0, 0], 2640.96, -0.39),
    eq([0, 0, 0, 0, 2, 0, 0, 0], 63.52, -0.02),
    eq([0, 0, 2, -2, 3, 0, 0, 0], 11.75, 0.01),
    eq([0, 0, 2, -2, 1, 0, 0, 0], 11.21, 0.01),
    eq([0, 0, 2, -2, 2, 0, 0, 0], -4.55, 0.00),
    eq([0, 0, 2, 0, 3, 0, 0, 0], 2.02, 0.00),
    eq([0, 0, 2, 0, 1, 0, 0, 0], 1.98, 0.00),
    eq([0, 0, 0, 0, 3, 0, 0, 0], -1.72, 0.00),
    eq([0, 1, 0, 0, 1, 0, 0, 0], -1.41, -0.01),
    eq([0, 1, 0, 0, -1, 0, 0, 0], -1.26, -0.01),
    eq([1, 0, 0, 0, -1, 0, 0, 0], -0.63, 0.00),
    eq([1, 0, 0, 0, 1, 0, 0, 0], -0.63, 0.00),
    eq([0, 1, 2, -2, 3, 0, 0, 0], 0.46, 0.00),
    eq([0, 1, 2, -2, 1, 0, 0, 0], 0.45, 0.00),
    eq([0, 0, 4, -4, 4, 0, 0, 0], 0.36, 0.00),
    eq([0, 0, 1, -1, 1, -8, 12, 0], -0.24, -0.12),
    eq([0, 0, 2, 0, 0, 0, 0, 0], 0.32, 0.00),
    eq([0, 0, 2, 0, 2, 0, 0, 0], 0.28, 0.00),
    eq([1, 0, 2, 0, 3, 0, 0, 0], 0.27, 0.00),
    eq([1, 0, 2, 0, 1, 0, 0, 0], 0.26, 0.00),
    eq([0, 0, 2, -2, 0, 0, 0, 0], -0.21, 0.00),
    eq([0, 1, -2, 2, -3, 0, 0, 0], 0.19, 0.00),
    eq([0, 1, -2, 2, -1, 0, 0, 0], 0.18, 0.00),
    eq([0, 0, 0, 0, 0, 8, -13, -1], -0.10, 0.05),
    eq([0, 0, 0, 2, 0, 0, 0, 0], 0.15, 0.00),
    eq([2, 0, -2, 0, -1, 0, 0, 0], -0.14, 0.00),
    eq([1, 0, 0, -2, 1, 0, 0, 0], 0.14, 0.00),
    eq([0, 1, 2, -2, 2, 0, 0, 0], -0.14, 0.00),
    eq([1, 0, 0, -2, -1, 0, 0, 0], 0.14, 0.00),
    eq([0, 0, 4, -2, 4, 0, 0, 0], 0.13, 0.00),
    eq([0, 0, 2, -2, 4, 0, 0, 0], -0.11, 0.00),
    eq([1, 0, -2, 0, -3, 0, 0, 0], 0.11, 0.00),
    eq([1, 0, -2, 0, -1, 0, 0, 0], 0.11, 0.00),
];

/// Secular complementary term, µas per century, multiplying sin Ω
const COMPLEMENTARY_SECULAR: f64 = -0.87;

/// Earth rotation angle in radians, [0, 2π)
pub fn earth_rotation_angle(ut1: JulianDate) -> f64 {
    let dut = (ut1.date1 - J2000) + ut1.date2;
    let turns = 0.779_057_273_264_0
        + 0.002_737_811_911_354_48 * dut
        + ut1.date1.rem_euclid(1.0)
        + ut1.date2.rem_euclid(1.0);
    (turns * TAU).rem_euclid(TAU)
}

/// Local mean sidereal time in radians, [0, 2π)
///
/// # Arguments
/// * `ut1` - UT1, drives the Earth rotation angle
/// * `tdb` - TDB (or TT) for the precession polynomial
/// * `longitude` - observer longitude, radians, positive east
pub fn mean_sidereal_time(ut1: JulianDate, tdb: JulianDate, longitude: f64) -> f64 {
    let t = tdb.centuries();
    let gmst = earth_rotation_angle(ut1)
        + (0.014506
            + (4612.156534
                + (1.3915817 + (-0.00000044 + (-0.000029956 - 0.0000000368 * t) * t) * t) * t)
                * t)
            * ASEC2RAD;
    (gmst + longitude).rem_euclid(TAU)
}

/// Local apparent sidereal time in radians, [0, 2π)
pub fn apparent_sidereal_time(ut1: JulianDate, tdb: JulianDate, longitude: f64) -> f64 {
    (mean_sidereal_time(ut1, tdb, longitude) + equation_of_the_equinoxes(tdb)).rem_euclid(TAU)
}

/// Complementary terms of the equation of the equinoxes, radians
pub fn equation_of_the_equinoxes_complementary_terms(tdb: JulianDate) -> f64 {
    let t = tdb.centuries();
    let fa = planetary_arguments(t);
    // l, l', F, D, Ω, Venus, Earth, general precession
    let args = [fa[0], fa[1], fa[2], fa[3], fa[4], fa[6], fa[7], fa[13]];

    let periodic: f64 = COMPLEMENTARY_TERMS
        .iter()
        .rev()
        .map(|term| {
            let phi: f64 = term
                .args
                .iter()
                .zip(args.iter())
                .map(|(&k, &a)| f64::from(k) * a)
                .sum();
            term.sin * phi.sin() + term.cos * phi.cos()
        })
        .sum();

    (periodic + COMPLEMENTARY_SECULAR * t * fa[4].sin()) * UAS2RAD
}

/// Equation of the equinoxes in radians: Δψ cos ε plus the complementary terms
pub fn equation_of_the_equinoxes(tdb: JulianDate) -> f64 {
    let (d_psi, _) = nutation(tdb);
    d_psi * mean_obliquity(tdb).cos() + equation_of_the_equinoxes_complementary_terms(tdb)
}

/// An observer's place relative to the Earth's centre
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EarthFigure {
    /// Geocentric latitude, radians
    pub geocentric_latitude: f64,
    /// Distance from the Earth's centre in equatorial radii
    pub radius: f64,
}

impl EarthFigure {
    /// ρ sin φ'
    pub fn rho_sin_phi(&self) -> f64 {
        self.radius * self.geocentric_latitude.sin()
    }

    /// ρ cos φ'
    pub fn rho_cos_phi(&self) -> f64 {
        self.radius * self.geocentric_latitude.cos()
    }
}

/// Geocentric latitude and radius for a geographic latitude (radians) and a
/// height above sea level (metres)
pub fn earth_figure_values(geographic_latitude: f64, height_m: f64) -> EarthFigure {
    let (sg, cg) = geographic_latitude.sin_cos();
    let u = (EARTH_POLAR_RADIUS * sg).atan2(EARTH_RADIUS * cg);
    let (su, cu) = u.sin_cos();
    let h = height_m / EARTH_RADIUS;

    let c = cu + h * cg;
    let s = (1.0 - EARTH_FLATTENING) * su + h * sg;

    EarthFigure {
        geocentric_latitude: s.atan2(c),
        radius: c.hypot(s),
    }
}

/// Parallax in right ascension and declination, (Δα, Δδ) in radians
///
/// # Arguments
/// * `hour_angle` - geocentric local hour angle of the body, radians
/// * `dec` - geocentric declination, radians
/// * `distance` - distance from the Earth's centre, AU
/// * `geographic_latitude` - observer latitude, radians
/// * `height_m` - observer height above sea level, metres
pub fn geocentric_parallax(
    hour_angle: f64,
    dec: f64,
    distance: f64,
    geographic_latitude: f64,
    height_m: f64,
) -> (f64, f64) {
    let figure = earth_figure_values(geographic_latitude, height_m);
    let hpx = (SOLAR_PARALLAX_ASEC * ASEC2RAD).sin() / distance;

    let (sh, ch) = hour_angle.sin_cos();
    let (sd, cd) = dec.sin_cos();
    let rho_cos = figure.rho_cos_phi();
    let rho_sin = figure.rho_sin_phi();

    let denom = cd - rho_cos * hpx * ch;
    let d_ra = (-rho_cos * hpx * sh).atan2(denom);
    let d_dec = ((sd - rho_sin * hpx) * d_ra.cos()).atan2(denom) - dec;
    (d_ra, d_dec)
}
