//! Light-time correction
//!
//! A body is seen where it was when the light now arriving left it. The
//! corrector re-evaluates the body's theory at `epoch - τ`, recomputes the
//! geocentric distance and τ = distance / c, and repeats until the distance
//! stops changing.

use crate::constants::C_AUDAY;
use crate::coordinates::cartesian::Cartesian3;
use crate::errors::{EphemerisError, Result};
use crate::time::JulianDate;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Iteration policy for [`light_time_correction`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightTimeConfig {
    pub max_iters: u16,
    /// Convergence threshold on the change in geocentric distance, AU
    pub tolerance_au: f64,
}

impl Default for LightTimeConfig {
    fn default() -> Self {
        LightTimeConfig {
            max_iters: 10,
            tolerance_au: 1e-8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightTimeSolution {
    /// Heliocentric position of the body at the retarded epoch
    pub position: Cartesian3,
    /// Geocentric distance at convergence, AU
    pub distance: f64,
    /// Light travel time in days
    pub light_time: f64,
    pub iterations: u16,
}

impl LightTimeSolution {
    pub fn retarded_epoch(&self, epoch: JulianDate) -> JulianDate {
        epoch.add_days(-self.light_time)
    }
}

/// Retarded position of a body as seen from `earth`
///
/// `position_at` evaluates the body's heliocentric position (AU, same frame
/// as `earth`) at a given epoch; it is called once per iteration and any
/// error it raises, such as Pluto95 leaving its validity range, is passed
/// through untouched.
pub fn light_time_correction<F>(
    epoch: JulianDate,
    earth: &Cartesian3,
    mut position_at: F,
    config: &LightTimeConfig,
) -> Result<LightTimeSolution>
where
    F: FnMut(JulianDate) -> Result<Cartesian3>,
{
    let mut position = position_at(epoch)?;
    let mut distance = (position - *earth).magnitude();

    for iteration in 1..=config.max_iters {
        let light_time = distance / C_AUDAY;
        position = position_at(epoch.add_days(-light_time))?;
        let new_distance = (position - *earth).magnitude();

        if (new_distance - distance).abs() < config.tolerance_au {
            debug!(
                "light-time converged after {} iterations (tau = {:.8} d)",
                iteration, light_time
            );
            return Ok(LightTimeSolution {
                position,
                distance: new_distance,
                light_time: new_distance / C_AUDAY,
                iterations: iteration,
            });
        }
        distance = new_distance;
    }

    warn!(
        "light-time correction failed to converge within {} iterations",
        config.max_iters
    );
    Err(EphemerisError::Convergence {
        solver: "light-time correction",
        iterations: config.max_iters,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_stationary_body() {
        let earth = Cartesian3::new(1.0, 0.0, 0.0);
        let body = Cartesian3::new(6.0, 0.0, 0.0);
        let solution = light_time_correction(
            JulianDate::j2000(),
            &earth,
            |_| Ok(body),
            &LightTimeConfig::default(),
        )
        .unwrap();
        assert_eq!(solution.iterations, 1);
        assert_relative_eq!(solution.light_time, 5.0 / C_AUDAY);
        assert_eq!(solution.position, body);
    }

    #[test]
    fn test_moving_body_converges_to_fixed_point() {
        // Body receding along x at 0.01 AU/day
        let earth = Cartesian3::zero();
        let epoch = JulianDate::j2000();
        let solution = light_time_correction(
            epoch,
            &earth,
            |t| Ok(Cartesian3::new(5.0 + 0.01 * (t - epoch), 0.0, 0.0)),
            &LightTimeConfig::default(),
        )
        .unwrap();

        // x = 5 - 0.01 * x / c  =>  x = 5 / (1 + 0.01 / c)
        let expected = 5.0 / (1.0 + 0.01 / C_AUDAY);
        assert_relative_eq!(solution.distance, expected, epsilon = 1e-9);
        assert!(solution.retarded_epoch(epoch).jd() < epoch.jd());
    }

    #[test]
    fn test_non_convergence_reported() {
        let config = LightTimeConfig {
            max_iters: 3,
            tolerance_au: 0.0,
        };
        let epoch = JulianDate::j2000();
        let err = light_time_correction(
            epoch,
            &Cartesian3::zero(),
            |t| Ok(Cartesian3::new(5.0 + 0.01 * (t - epoch), 0.0, 0.0)),
            &config,
        )
        .unwrap_err();
        assert_eq!(
            err,
            EphemerisError::Convergence {
                solver: "light-time correction",
                iterations: 3
            }
        );
    }

    #[test]
    fn test_theory_error_passes_through() {
        let err = light_time_correction(
            JulianDate::j2000(),
            &Cartesian3::zero(),
            |_| Err(EphemerisError::InvalidPlanet("Vulcan".into())),
            &LightTimeConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err, EphemerisError::InvalidPlanet("Vulcan".into()));
    }
}
