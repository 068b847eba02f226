//! Fundamental arguments of the planetary, lunar, precession and nutation models
//!
//! IERS Conventions (2003) / USNO Circular 179 expressions. Every function
//! takes `t`, TDB Julian centuries since J2000.0 (TT is adequate for all but
//! the most exacting work), and returns radians. Nothing is reduced to
//! [0, 2π): the series consumers take sines and cosines directly.

use crate::constants::ASEC2RAD;

/// Identifiers for the individual fundamental arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Argument {
    LongitudeMercury,
    LongitudeVenus,
    LongitudeEarth,
    LongitudeMars,
    LongitudeJupiter,
    LongitudeSaturn,
    LongitudeUranus,
    LongitudeNeptune,
    /// General accumulated precession in longitude
    Precession,
    /// l, mean anomaly of the Moon
    AnomalyMoon,
    /// l', mean anomaly of the Sun
    AnomalySun,
    /// F, mean argument of latitude of the Moon
    LatitudeMoon,
    /// D, mean elongation of the Moon from the Sun
    ElongationMoon,
    /// Ω, mean longitude of the Moon's ascending node
    LongitudeNode,
    /// w, mean longitude of the Moon
    LongitudeMoon,
}

/// Planetary mean longitudes [constant, rate], radians
#[rustfmt::skip]
const PLANET_LONGITUDES: [[f64; 2]; 8] = [
    [4.402608842, 2608.7903141574],  // Mercury
    [3.176146697, 1021.3285546211],  // Venus
    [1.753470314,  628.3075849991],  // Earth
    [6.203480913,  334.0612426700],  // Mars
    [0.599546497,   52.9690962641],  // Jupiter
    [0.874016757,   21.3299104960],  // Saturn
    [5.481293872,    7.4781598567],  // Uranus
    [5.311886287,    3.8133035638],  // Neptune
];

/// Lunar and solar polynomials, [constant, t, t², t³, t⁴] in arcseconds
#[rustfmt::skip]
const LUNAR_COEFFS: [[f64; 5]; 6] = [
    // l
    [485868.249036, 1717915923.2178, 31.8792, 0.051635, -0.00024470],
    // l'
    [1287104.79305, 129596581.0481, -0.5532, 0.000136, -0.00001149],
    // F
    [335779.526232, 1739527262.8478, -12.7512, -0.001037, 0.00000417],
    // D
    [1072260.70369, 1602961601.2090, -6.3706, 0.006593, -0.00003169],
    // Omega
    [450160.398036, -6962890.5431, 7.4722, 0.007702, -0.00005939],
    // w
    [785939.95571, 1732559343.73604, -5.8883, 0.006604, -0.00003169],
];

fn lunar_polynomial(coeffs: &[f64; 5], t: f64) -> f64 {
    (coeffs[0] + (coeffs[1] + (coeffs[2] + (coeffs[3] + coeffs[4] * t) * t) * t) * t) * ASEC2RAD
}

/// Value of a single fundamental argument in radians
pub fn fundamental_argument(arg: Argument, t: f64) -> f64 {
    use Argument::*;
    match arg {
        LongitudeMercury | LongitudeVenus | LongitudeEarth | LongitudeMars
        | LongitudeJupiter | LongitudeSaturn | LongitudeUranus | LongitudeNeptune => {
            let [c0, c1] = PLANET_LONGITUDES[arg as usize];
            c0 + c1 * t
        }
        Precession => (0.024381750 + 0.00000538691 * t) * t,
        AnomalyMoon => lunar_polynomial(&LUNAR_COEFFS[0], t),
        AnomalySun => lunar_polynomial(&LUNAR_COEFFS[1], t),
        LatitudeMoon => lunar_polynomial(&LUNAR_COEFFS[2], t),
        ElongationMoon => lunar_polynomial(&LUNAR_COEFFS[3], t),
        LongitudeNode => lunar_polynomial(&LUNAR_COEFFS[4], t),
        LongitudeMoon => lunar_polynomial(&LUNAR_COEFFS[5], t),
    }
}

/// The Delaunay arguments `[l, l', F, D, Ω]`
pub fn delaunay_arguments(t: f64) -> [f64; 5] {
    let mut fa = [0.0; 5];
    for (value, coeffs) in fa.iter_mut().zip(LUNAR_COEFFS.iter()) {
        *value = lunar_polynomial(coeffs, t);
    }
    fa
}

/// Mean longitudes of Mercury through Neptune
pub fn planetary_longitudes(t: f64) -> [f64; 8] {
    let mut lon = [0.0; 8];
    for (value, [c0, c1]) in lon.iter_mut().zip(PLANET_LONGITUDES.iter()) {
        *value = c0 + c1 * t;
    }
    lon
}

/// The fourteen arguments of the planetary nutation and equinox series
///
/// Order: l, l', F, D, Ω, Mercury..Neptune, general precession.
pub fn planetary_arguments(t: f64) -> [f64; 14] {
    let mut fa = [0.0; 14];
    fa[..5].copy_from_slice(&delaunay_arguments(t));
    fa[5..13].copy_from_slice(&planetary_longitudes(t));
    fa[13] = fundamental_argument(Argument::Precession, t);
    fa
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEG2RAD, J2000, JULIAN_CENTURY, TAU};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_values_at_j2000() {
        assert_eq!(fundamental_argument(Argument::LongitudeEarth, 0.0), 1.753470314);
        assert_eq!(fundamental_argument(Argument::Precession, 0.0), 0.0);
        assert_abs_diff_eq!(
            fundamental_argument(Argument::LongitudeNode, 0.0),
            450160.398036 * ASEC2RAD,
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_meeus_nutation_epoch() {
        // Meeus example 22.a, 1987 April 10 0h TD
        let t = (2_446_895.5 - J2000) / JULIAN_CENTURY;
        let [l, lp, f, d, om] = delaunay_arguments(t);
        assert_abs_diff_eq!(d.rem_euclid(TAU), 136.9623 * DEG2RAD, epsilon = 1e-4);
        assert_abs_diff_eq!(lp.rem_euclid(TAU), 94.9792 * DEG2RAD, epsilon = 1e-4);
        assert_abs_diff_eq!(l.rem_euclid(TAU), 229.2784 * DEG2RAD, epsilon = 1e-4);
        assert_abs_diff_eq!(f.rem_euclid(TAU), 143.4079 * DEG2RAD, epsilon = 1e-4);
        assert_abs_diff_eq!(om.rem_euclid(TAU), 11.2531 * DEG2RAD, epsilon = 1e-4);
    }

    #[test]
    fn test_argument_sets_agree() {
        let t = 0.37;
        let all = planetary_arguments(t);
        assert_eq!(all[2], fundamental_argument(Argument::LatitudeMoon, t));
        assert_eq!(all[6], fundamental_argument(Argument::LongitudeVenus, t));
        assert_eq!(all[12], fundamental_argument(Argument::LongitudeNeptune, t));
        assert_eq!(all[13], fundamental_argument(Argument::Precession, t));
    }
}
