//! Apparent magnitudes of minor planets and comets
//!
//! Minor planets follow Bowell's two-parameter (H, G) phase law as adopted
//! for HIPPARCOS photometry (Bowell et al. 1989); comets the usual total
//! magnitude law with a heliocentric slope.

use crate::coordinates::frames::{Au, Frame, Heliocentric, Position};
use serde::{Deserialize, Serialize};

/// Absolute magnitude and slope parameter of a minor body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MagnitudeParameters {
    /// Absolute magnitude H
    pub absolute: f64,
    /// Slope parameter G (minor planets) or K/2.5 (comets)
    pub slope: f64,
}

impl MagnitudeParameters {
    pub fn new(absolute: f64, slope: f64) -> Self {
        MagnitudeParameters { absolute, slope }
    }
}

/// Sun-body-Earth angle in radians
///
/// Both positions are heliocentric and share a frame.
pub fn phase_angle<F: Frame>(
    body: &Position<F, Heliocentric, Au>,
    earth: &Position<F, Heliocentric, Au>,
) -> f64 {
    let to_sun = -body.xyz();
    let to_earth = earth.xyz() - body.xyz();
    to_sun.angle_between(&to_earth)
}

/// Sun and Earth distances of a body, (r, Δ) in AU
fn distances<F: Frame>(
    body: &Position<F, Heliocentric, Au>,
    earth: &Position<F, Heliocentric, Au>,
) -> (f64, f64) {
    (body.distance(), body.geocentric(earth).distance())
}

/// Apparent magnitude of a minor planet
pub fn minor_planet_magnitude<F: Frame>(
    body: &Position<F, Heliocentric, Au>,
    earth: &Position<F, Heliocentric, Au>,
    params: &MagnitudeParameters,
) -> f64 {
    let (r, delta) = distances(body, earth);
    let half_tan = (phase_angle(body, earth) / 2.0).tan();

    let phi1 = (-3.33 * half_tan.powf(0.63)).exp();
    let phi2 = (-1.87 * half_tan.powf(1.22)).exp();

    params.absolute + 5.0 * (r * delta).log10()
        - 2.5 * (phi1 + (phi2 - phi1) * params.slope).log10()
}

/// Apparent total magnitude of a comet
pub fn comet_magnitude<F: Frame>(
    body: &Position<F, Heliocentric, Au>,
    earth: &Position<F, Heliocentric, Au>,
    params: &MagnitudeParameters,
) -> f64 {
    let (r, delta) = distances(body, earth);
    params.absolute + 5.0 * delta.log10() + 2.5 * params.slope * r.log10()
}
