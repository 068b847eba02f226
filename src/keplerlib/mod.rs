//! Osculating orbital elements and Kepler's equation
//!
//! Minor planets and comets have no perturbation theory of their own; their
//! positions come from a two-body propagation of the element set published
//! for a nearby epoch. This module solves the three flavours of Kepler's
//! equation (elliptic, parabolic via Barker's equation, hyperbolic) and turns
//! the resulting anomaly into a heliocentric ecliptic J2000 position.
//!
//! The elliptic and hyperbolic solvers use Conway's adaptation of Laguerre's
//! root finder (order N = 6), which converges from the usual starting guesses
//! for every eccentricity. Barker's equation is a cubic and is solved in
//! closed form.
//!
//! # Example
//!
//! ```rust
//! use skyephem::keplerlib::{solve_kepler, KeplerConfig};
//!
//! // Meeus, Astronomical Algorithms, example 30.a
//! let e = solve_kepler(5f64.to_radians(), 0.1, &KeplerConfig::default()).unwrap();
//! assert!((e.to_degrees() - 5.554589).abs() < 1e-6);
//! ```

use crate::constants::{DEG2RAD, GAUSS_K, TAU};
use crate::coordinates::{Cartesian3, HeliocentricEcliptic};
use crate::errors::{EphemerisError, Result};
use crate::time::JulianDate;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Order of the Laguerre-Conway iteration
const LAGUERRE_ORDER: f64 = 6.0;

/// Solver tunables, passed explicitly to every call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeplerConfig {
    /// Iteration cap for the elliptic and hyperbolic solvers
    pub max_iters: u16,
    /// Convergence threshold on the anomaly correction, radians
    pub precision: f64,
    /// Eccentricities within this distance of 1 are treated as parabolic
    pub parabolic_band: f64,
}

impl Default for KeplerConfig {
    fn default() -> Self {
        KeplerConfig {
            max_iters: 10,
            precision: 1e-14,
            parabolic_band: 1e-10,
        }
    }
}

/// Conic section of an orbit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Conic {
    Circular,
    Elliptic,
    Parabolic,
    Hyperbolic,
}

impl Conic {
    /// Classify an eccentricity, treating `|e - 1| <= parabolic_band` as parabolic
    pub fn classify(eccentricity: f64, parabolic_band: f64) -> Result<Conic> {
        if eccentricity.is_nan() || eccentricity < 0.0 {
            return Err(EphemerisError::InvalidEccentricity(eccentricity));
        }
        Ok(if eccentricity == 0.0 {
            Conic::Circular
        } else if (eccentricity - 1.0).abs() <= parabolic_band {
            Conic::Parabolic
        } else if eccentricity < 1.0 {
            Conic::Elliptic
        } else {
            Conic::Hyperbolic
        })
    }
}

/// Osculating heliocentric elements, angles in radians, referred to the
/// ecliptic and equinox of J2000
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElements {
    /// Epoch of osculation (time of perihelion passage for parabolic orbits)
    pub epoch: JulianDate,
    /// Mean anomaly at the epoch
    pub mean_anomaly: f64,
    /// Mean daily motion, radians/day
    pub daily_motion: f64,
    /// Perihelion distance, AU
    pub perihelion: f64,
    pub eccentricity: f64,
    /// Argument of perihelion
    pub arg_perihelion: f64,
    /// Longitude of the ascending node
    pub lon_asc_node: f64,
    pub inclination: f64,
}

impl OrbitalElements {
    /// Elements from the degree-based values catalogs publish
    ///
    /// The daily motion is taken in degrees/day. When it is not published
    /// (parabolic and hyperbolic comets) pass 0.0 and it is derived from
    /// the perihelion distance and eccentricity.
    #[allow(clippy::too_many_arguments)]
    pub fn from_degrees(
        epoch: JulianDate,
        mean_anomaly_deg: f64,
        daily_motion_deg: f64,
        perihelion: f64,
        eccentricity: f64,
        arg_perihelion_deg: f64,
        lon_asc_node_deg: f64,
        inclination_deg: f64,
    ) -> Self {
        let mut elements = OrbitalElements {
            epoch,
            mean_anomaly: mean_anomaly_deg * DEG2RAD,
            daily_motion: daily_motion_deg * DEG2RAD,
            perihelion,
            eccentricity,
            arg_perihelion: arg_perihelion_deg * DEG2RAD,
            lon_asc_node: lon_asc_node_deg * DEG2RAD,
            inclination: inclination_deg * DEG2RAD,
        };
        if daily_motion_deg == 0.0 {
            elements.daily_motion = elements.derived_daily_motion();
        }
        elements
    }

    /// Mean motion implied by Kepler's third law, radians/day
    ///
    /// Uses |a| = q / |1 - e|; zero for parabolic orbits, where no mean
    /// motion exists.
    pub fn derived_daily_motion(&self) -> f64 {
        let denom = (1.0 - self.eccentricity).abs();
        if denom == 0.0 {
            return 0.0;
        }
        let a = self.perihelion / denom;
        GAUSS_K / (a * a * a).sqrt()
    }

    /// Semi-major axis in AU (negative for hyperbolic orbits)
    pub fn semi_major_axis(&self) -> Option<f64> {
        let denom = 1.0 - self.eccentricity;
        if denom == 0.0 {
            None
        } else {
            Some(self.perihelion / denom)
        }
    }

    pub fn conic(&self, config: &KeplerConfig) -> Result<Conic> {
        Conic::classify(self.eccentricity, config.parabolic_band)
    }

    fn check_finite(&self) -> Result<()> {
        let values = [
            self.mean_anomaly,
            self.daily_motion,
            self.perihelion,
            self.eccentricity,
            self.arg_perihelion,
            self.lon_asc_node,
            self.inclination,
            self.epoch.jd(),
        ];
        if values.iter().all(|v| v.is_finite()) {
            Ok(())
        } else {
            Err(EphemerisError::InvalidData(format!(
                "non-finite orbital element in {self:?}"
            )))
        }
    }
}

fn convergence_failure(solver: &'static str, config: &KeplerConfig) -> EphemerisError {
    warn!(
        "{} failed to reach {:e} within {} iterations",
        solver, config.precision, config.max_iters
    );
    EphemerisError::Convergence {
        solver,
        iterations: config.max_iters,
    }
}

/// Eccentric anomaly E solving `M = E - e sin E` for `0 <= e < 1`
pub fn solve_kepler(mean_anomaly: f64, eccentricity: f64, config: &KeplerConfig) -> Result<f64> {
    if !(0.0..1.0).contains(&eccentricity) {
        return Err(EphemerisError::InvalidEccentricity(eccentricity));
    }

    let n = LAGUERRE_ORDER;
    let mut ea = mean_anomaly + eccentricity * mean_anomaly.sin();

    for iteration in 1..=config.max_iters {
        let (s_ea, c_ea) = ea.sin_cos();

        let mut dea = n * (mean_anomaly - ea + eccentricity * s_ea);
        let x = 1.0 - eccentricity * c_ea;
        let y = ((n - 1.0) * ((n - 1.0) * x * x + eccentricity * s_ea * dea))
            .abs()
            .sqrt();

        // larger-magnitude denominator
        dea /= if (x + y).abs() > (x - y).abs() { x + y } else { x - y };

        ea += dea;
        if dea.abs() < config.precision {
            debug!("Kepler equation converged in {} iterations", iteration);
            return Ok(ea);
        }
    }

    Err(convergence_failure("Kepler equation", config))
}

/// Hyperbolic anomaly H solving `M = e sinh H - H` for `e > 1`
pub fn solve_hyperbolic(mean_anomaly: f64, eccentricity: f64, config: &KeplerConfig) -> Result<f64> {
    if eccentricity.is_nan() || eccentricity <= 1.0 {
        return Err(EphemerisError::InvalidEccentricity(eccentricity));
    }

    let n = LAGUERRE_ORDER;
    let mut ha = mean_anomaly;

    for iteration in 1..=config.max_iters {
        let (sh, ch) = (ha.sinh(), ha.cosh());

        let mut dha = n * (mean_anomaly + ha - eccentricity * sh);
        let x = eccentricity * ch - 1.0;
        let y = ((n - 1.0) * ((n - 1.0) * x * x + dha * eccentricity * sh))
            .abs()
            .sqrt();

        dha /= if (x + y).abs() > (x - y).abs() { x + y } else { x - y };

        ha += dha;
        if dha.abs() < config.precision {
            debug!("hyperbolic Kepler equation converged in {} iterations", iteration);
            return Ok(ha);
        }
    }

    Err(convergence_failure("hyperbolic Kepler equation", config))
}

/// Solve Barker's equation for a parabolic orbit
///
/// `days_from_perihelion` is t - T in days and `perihelion` is q in AU.
/// Returns s = tan(ν/2), from which r = q(1 + s²) and ν = 2 atan(s).
pub fn solve_barker(days_from_perihelion: f64, perihelion: f64) -> f64 {
    let w = 1.5 * GAUSS_K * days_from_perihelion / (2.0 * perihelion.powi(3)).sqrt();
    let y = (w + (w * w + 1.0).sqrt()).cbrt();
    y - 1.0 / y
}

/// Heliocentric ecliptic J2000 position (AU) of a body at `tt`
///
/// Fails with `InvalidEccentricity` for a negative eccentricity before any
/// computation, and with `Convergence` when the anomaly cannot be solved to
/// `config.precision`.
pub fn elements_to_position(
    tt: JulianDate,
    elements: &OrbitalElements,
    config: &KeplerConfig,
) -> Result<HeliocentricEcliptic> {
    let conic = elements.conic(config)?;
    elements.check_finite()?;

    let t = (tt.date1 - elements.epoch.date1) + (tt.date2 - elements.epoch.date2);
    let e = elements.eccentricity;
    let q = elements.perihelion;

    let (r, ta) = match conic {
        Conic::Circular => (q, elements.mean_anomaly + elements.daily_motion * t),
        Conic::Elliptic => {
            let ma = (elements.mean_anomaly + elements.daily_motion * t).rem_euclid(TAU);
            let ea = solve_kepler(ma, e, config)?;
            let (x, y) = (ea / 2.0).sin_cos();

            let r = q * (1.0 - e * (y * y - x * x)) / (1.0 - e);
            let ta = 2.0 * (((1.0 + e) / (1.0 - e)).sqrt() * x).atan2(y);
            (r, ta)
        }
        Conic::Parabolic => {
            let s = solve_barker(t, q);
            (q * (s * s + 1.0), 2.0 * s.atan())
        }
        Conic::Hyperbolic => {
            // unbounded, so no reduction
            let ma = elements.mean_anomaly + elements.daily_motion * t;
            let ha = solve_hyperbolic(ma, e, config)?;
            let (sh, ch) = (ha.sinh(), ha.cosh());

            let r = q * (e * ch - 1.0) / (e - 1.0);
            let ta = ((e * e - 1.0).sqrt() * sh).atan2(e - ch);
            (r, ta)
        }
    };

    let (a, b) = (ta + elements.arg_perihelion).sin_cos();
    let (c, d) = elements.lon_asc_node.sin_cos();
    let (x, y) = elements.inclination.sin_cos();

    Ok(HeliocentricEcliptic::new(Cartesian3::new(
        r * (d * b - c * a * y),
        r * (c * b + d * a * y),
        r * a * x,
    )))
}
