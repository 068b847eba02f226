//! Rising, transit and setting
//!
//! Meeus' method (Astronomical Algorithms, ch. 15) generalised to any number
//! of RA/Dec samples: positions between the samples come from N-point
//! Lagrange interpolation rather than the three-point formula, which keeps
//! fast movers such as the Moon and Mercury accurate.

use crate::constants::{DAY_S, DEG2RAD, EARTH_RADIUS, TAU};
use crate::earthlib::apparent_sidereal_time;
use crate::errors::{EphemerisError, Result};
use crate::framelib::LightTimeConfig;
use crate::planetlib::{Body, EarthCache};
use crate::positions::apparent_position;
use crate::time::JulianDate;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Altitude of a star or planet's centre at rising, radians
pub const STAR_ALTITUDE: f64 = -0.5667 * DEG2RAD;
/// Altitude of the Sun's centre at rising (refraction plus semidiameter)
pub const SUN_ALTITUDE: f64 = -0.8333 * DEG2RAD;
/// Rate of the Earth's rotation in sidereal time, radians per solar day
const SIDEREAL_RATE: f64 = 360.985_647 * DEG2RAD;

/// Altitude of the Moon's centre at rising for a given distance, radians
///
/// 0.7275 times the horizontal parallax, less the refraction at the horizon.
pub fn moon_altitude(distance_km: f64) -> f64 {
    let parallax = (EARTH_RADIUS / 1000.0 / distance_km).asin();
    0.7275 * parallax + STAR_ALTITUDE
}

/// Standard altitude for a body at rising and setting
///
/// `distance_km` is only consulted for the Moon.
pub fn standard_altitude(body: Body, distance_km: f64) -> f64 {
    match body {
        Body::Sun => SUN_ALTITUDE,
        Body::Moon => moon_altitude(distance_km),
        _ => STAR_ALTITUDE,
    }
}

/// Iteration policy for [`rise_transit_set`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiseSetConfig {
    pub max_iters: u16,
    /// Convergence threshold on the correction, fraction of a day
    pub tolerance: f64,
}

impl Default for RiseSetConfig {
    fn default() -> Self {
        RiseSetConfig {
            max_iters: 10,
            tolerance: 1e-5,
        }
    }
}

/// Position of a body at one instant of the day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquatorialSample {
    /// Time of the sample in days from 0h of the day of interest (TT)
    pub day_fraction: f64,
    pub ra: f64,
    pub dec: f64,
}

/// Times of the day's events as fractions of a day from 0h UT
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RiseTransitSet {
    pub rise: Option<f64>,
    pub transit: Option<f64>,
    pub set: Option<f64>,
}

impl RiseTransitSet {
    /// Circumpolar: always above the standard altitude
    pub fn is_circumpolar(&self) -> bool {
        self.rise.is_none() && self.set.is_none() && self.transit.is_some()
    }

    /// (rise, transit, set) with -1 standing for an event that does not occur
    pub fn as_sentinel_tuple(&self) -> (f64, f64, f64) {
        (
            self.rise.unwrap_or(-1.0),
            self.transit.unwrap_or(-1.0),
            self.set.unwrap_or(-1.0),
        )
    }
}

/// Lagrange polynomial through (`x`, `y`) evaluated at `xint`
pub fn lagrange_interpolate(x: &[f64], y: &[f64], xint: f64) -> Result<f64> {
    if x.is_empty() || x.len() != y.len() {
        return Err(EphemerisError::InvalidData(format!(
            "interpolation needs matching non-empty abscissae and ordinates, got {} and {}",
            x.len(),
            y.len()
        )));
    }

    let mut total = 0.0;
    for (i, (&xi, &yi)) in x.iter().zip(y.iter()).enumerate() {
        let mut weight = 1.0;
        for (j, &xj) in x.iter().enumerate() {
            if i != j {
                if xi == xj {
                    return Err(EphemerisError::InvalidData(format!(
                        "repeated interpolation abscissa {xi}"
                    )));
                }
                weight *= (xint - xj) / (xi - xj);
            }
        }
        total += weight * yi;
    }
    Ok(total)
}

/// Hour angle folded into (-π, π]
fn signed_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    if a > PI {
        a - TAU
    } else {
        a
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Event {
    Rise,
    Transit,
    Set,
}

impl Event {
    fn name(self) -> &'static str {
        match self {
            Event::Rise => "rise",
            Event::Transit => "transit",
            Event::Set => "set",
        }
    }
}

struct Track {
    times: Vec<f64>,
    ra: Vec<f64>,
    dec: Vec<f64>,
}

impl Track {
    fn new(samples: &[EquatorialSample]) -> Result<Self> {
        if samples.is_empty() {
            return Err(EphemerisError::InvalidData("no position samples".into()));
        }
        if samples
            .iter()
            .any(|s| !(s.day_fraction.is_finite() && s.ra.is_finite() && s.dec.is_finite()))
        {
            return Err(EphemerisError::InvalidData("non-finite position sample".into()));
        }

        // Unwrap right ascension across 0h so the interpolant stays smooth
        let mut ra: Vec<f64> = Vec::with_capacity(samples.len());
        for sample in samples {
            let value = match ra.last() {
                Some(&prev) => prev + signed_angle(sample.ra - prev),
                None => sample.ra,
            };
            ra.push(value);
        }

        Ok(Track {
            times: samples.iter().map(|s| s.day_fraction).collect(),
            ra,
            dec: samples.iter().map(|s| s.dec).collect(),
        })
    }

    fn at(&self, n: f64) -> Result<(f64, f64)> {
        Ok((
            lagrange_interpolate(&self.times, &self.ra, n)?,
            lagrange_interpolate(&self.times, &self.dec, n)?,
        ))
    }
}

/// Rise, transit and set of a body over one day
///
/// # Arguments
/// * `samples` - positions bracketing the day, times in days from 0h
/// * `gast` - Greenwich apparent sidereal time at 0h UT, radians
/// * `longitude` - observer longitude, radians, positive east
/// * `latitude` - observer latitude, radians
/// * `delta_t` - TT - UT in seconds
/// * `h0` - standard altitude, see [`standard_altitude`]
///
/// A body that never reaches `h0` has no events; one that never drops below
/// it keeps its transit but has no rise or set. Otherwise an iteration that
/// does not settle within `config.max_iters` is an error.
///
/// Whether the body rises at all is judged from its place interpolated at
/// 0h, not from `samples[0]`, so tracks may start on the previous day.
pub fn rise_transit_set(
    samples: &[EquatorialSample],
    gast: f64,
    longitude: f64,
    latitude: f64,
    delta_t: f64,
    h0: f64,
    config: &RiseSetConfig,
) -> Result<RiseTransitSet> {
    let track = Track::new(samples)?;
    let (ra0, dec0) = track.at(0.0)?;

    let (sin_lat, cos_lat) = latitude.sin_cos();
    let cos_h0 = (h0.sin() - sin_lat * dec0.sin()) / (cos_lat * dec0.cos());
    if cos_h0 > 1.0 {
        debug!("body stays below {:.4} rad all day", h0);
        return Ok(RiseTransitSet::default());
    }

    let transit_guess = (ra0 - longitude - gast) / TAU;
    let refine = |event: Event, start: f64| -> Result<f64> {
        let mut m = start.rem_euclid(1.0);
        for iteration in 1..=config.max_iters {
            let n = m + delta_t / DAY_S;
            let (ra, dec) = track.at(n)?;

            let theta = gast + SIDEREAL_RATE * m;
            let hour_angle = signed_angle(theta + longitude - ra);

            let dm = match event {
                Event::Transit => -hour_angle / TAU,
                Event::Rise | Event::Set => {
                    let (sin_dec, cos_dec) = dec.sin_cos();
                    let altitude =
                        (sin_lat * sin_dec + cos_lat * cos_dec * hour_angle.cos()).asin();
                    (altitude - h0) / (TAU * cos_dec * cos_lat * hour_angle.sin())
                }
            };

            m += dm;
            if dm.abs() <= config.tolerance {
                debug!("{} converged in {} iterations", event.name(), iteration);
                return Ok(m.rem_euclid(1.0));
            }
        }
        warn!(
            "{} did not converge within {} iterations",
            event.name(),
            config.max_iters
        );
        Err(EphemerisError::Convergence {
            solver: "rise/transit/set",
            iterations: config.max_iters,
        })
    };

    let transit = Some(refine(Event::Transit, transit_guess)?);
    if cos_h0 < -1.0 {
        debug!("body stays above {:.4} rad all day", h0);
        return Ok(RiseTransitSet {
            rise: None,
            transit,
            set: None,
        });
    }

    let semi_arc = cos_h0.acos() / TAU;
    Ok(RiseTransitSet {
        rise: Some(refine(Event::Rise, transit_guess - semi_arc)?),
        transit,
        set: Some(refine(Event::Set, transit_guess + semi_arc)?),
    })
}

/// Rise, transit and set of a solar system body for an observer
///
/// `date` is 0h UT of the day of interest. Apparent places are sampled every
/// half day from 0h TT of the day before to 0h TT two days later and handed
/// to [`rise_transit_set`] with the body's standard altitude.
pub fn body_rise_transit_set(
    body: Body,
    date: JulianDate,
    longitude: f64,
    latitude: f64,
    delta_t: f64,
    config: &RiseSetConfig,
) -> Result<RiseTransitSet> {
    let tt = date.add_days(delta_t / DAY_S);
    let gast = apparent_sidereal_time(date, tt, 0.0);

    let mut cache = EarthCache::new();
    let light_time = LightTimeConfig::default();
    let mut samples = Vec::with_capacity(7);
    let mut distance = 0.0;
    for step in -2..=4 {
        let offset = f64::from(step) * 0.5;
        let place = apparent_position(body, date.add_days(offset), &mut cache, &light_time)?;
        if step == 0 {
            distance = place.distance_km();
        }
        samples.push(EquatorialSample {
            day_fraction: offset,
            ra: place.ra,
            dec: place.dec,
        });
    }

    let h0 = standard_altitude(body, distance);
    rise_transit_set(&samples, gast, longitude, latitude, delta_t, h0, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::RAD2DEG;
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    fn venus_samples() -> Vec<EquatorialSample> {
        // Meeus example 15.a, 1988 March 19-21 at 0h TD
        [
            (-1.0, 40.680_21, 18.047_61),
            (0.0, 41.731_29, 18.440_92),
            (1.0, 42.782_04, 18.827_42),
        ]
        .iter()
        .map(|&(t, ra, dec)| EquatorialSample {
            day_fraction: t,
            ra: ra * DEG2RAD,
            dec: dec * DEG2RAD,
        })
        .collect()
    }

    #[test]
    fn test_lagrange_reproduces_polynomial() {
        let x = [0.0, 0.5, 1.0, 2.0];
        let y: Vec<f64> = x.iter().map(|v| 1.0 - 2.0 * v + 0.5 * v * v * v).collect();
        let value = lagrange_interpolate(&x, &y, 1.5).unwrap();
        assert_abs_diff_eq!(value, 1.0 - 3.0 + 0.5 * 3.375, epsilon = 1e-12);
        assert_abs_diff_eq!(lagrange_interpolate(&x, &y, 0.5).unwrap(), y[1], epsilon = 1e-15);
    }

    #[rstest]
    #[case(&[], &[])]
    #[case(&[0.0, 1.0], &[1.0])]
    #[case(&[1.0, 1.0], &[2.0, 3.0])]
    fn test_lagrange_rejects_bad_input(#[case] x: &[f64], #[case] y: &[f64]) {
        assert!(matches!(
            lagrange_interpolate(x, y, 0.5),
            Err(EphemerisError::InvalidData(_))
        ));
    }

    #[test]
    fn test_venus_at_boston() {
        let rts = rise_transit_set(
            &venus_samples(),
            177.742_08 * DEG2RAD,
            -71.0833 * DEG2RAD,
            42.3333 * DEG2RAD,
            56.0,
            STAR_ALTITUDE,
            &RiseSetConfig::default(),
        )
        .unwrap();

        assert_abs_diff_eq!(rts.rise.unwrap(), 0.517_66, epsilon = 5e-4);
        assert_abs_diff_eq!(rts.transit.unwrap(), 0.819_80, epsilon = 5e-4);
        assert_abs_diff_eq!(rts.set.unwrap(), 0.121_30, epsilon = 5e-4);
    }

    #[test]
    fn test_never_rising_body_has_no_events() {
        // The Sun near the December solstice seen from 80° N
        let samples: Vec<EquatorialSample> = (-1..=1)
            .map(|t| EquatorialSample {
                day_fraction: f64::from(t),
                ra: (270.0 + f64::from(t)) * DEG2RAD,
                dec: -23.44 * DEG2RAD,
            })
            .collect();
        let rts = rise_transit_set(
            &samples,
            1.5,
            0.0,
            80.0 * DEG2RAD,
            69.0,
            SUN_ALTITUDE,
            &RiseSetConfig::default(),
        )
        .unwrap();
        assert_eq!(rts, RiseTransitSet::default());
        assert_eq!(rts.as_sentinel_tuple(), (-1.0, -1.0, -1.0));
    }

    #[test]
    fn test_circumpolar_body_keeps_its_transit() {
        // The Sun near the June solstice seen from 80° N
        let samples: Vec<EquatorialSample> = (-1..=1)
            .map(|t| EquatorialSample {
                day_fraction: f64::from(t),
                ra: (90.0 + f64::from(t)) * DEG2RAD,
                dec: 23.44 * DEG2RAD,
            })
            .collect();
        let rts = rise_transit_set(
            &samples,
            4.6,
            0.0,
            80.0 * DEG2RAD,
            69.0,
            SUN_ALTITUDE,
            &RiseSetConfig::default(),
        )
        .unwrap();
        assert!(rts.is_circumpolar());
        let (rise, transit, set) = rts.as_sentinel_tuple();
        assert_eq!((rise, set), (-1.0, -1.0));
        assert!((0.0..1.0).contains(&transit));
    }

    #[test]
    fn test_feasibility_is_judged_at_midnight() {
        // At 60° N a declination of -33° never clears the horizon but -28°
        // does; the track only starts at -33° on the previous day
        let samples: Vec<EquatorialSample> = [(-1.0, -33.0), (0.0, -28.0), (1.0, -23.0)]
            .iter()
            .map(|&(t, dec): &(f64, f64)| EquatorialSample {
                day_fraction: t,
                ra: 0.0,
                dec: dec * DEG2RAD,
            })
            .collect();
        let rts = rise_transit_set(
            &samples,
            0.0,
            0.0,
            60.0 * DEG2RAD,
            0.0,
            STAR_ALTITUDE,
            &RiseSetConfig::default(),
        )
        .unwrap();
        assert!(rts.rise.is_some() && rts.set.is_some());
        assert_abs_diff_eq!(rts.transit.unwrap(), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_right_ascension_wrapping_through_zero() {
        // RA runs 359°, 0°, 1° over the three days; transit falls where
        // 180° + 360.985647° m = m° (mod 360°)
        let samples: Vec<EquatorialSample> = [(-1.0, 359.0), (0.0, 0.0), (1.0, 1.0)]
            .iter()
            .map(|&(t, ra): &(f64, f64)| EquatorialSample {
                day_fraction: t,
                ra: ra * DEG2RAD,
                dec: 0.0,
            })
            .collect();
        let rts = rise_transit_set(
            &samples,
            PI,
            0.0,
            0.0,
            0.0,
            STAR_ALTITUDE,
            &RiseSetConfig::default(),
        )
        .unwrap();
        assert_abs_diff_eq!(rts.transit.unwrap(), 180.0 / 359.985_647, epsilon = 2e-5);
        assert!(rts.rise.is_some() && rts.set.is_some());
    }

    #[test]
    fn test_too_few_iterations_is_an_error() {
        let config = RiseSetConfig {
            max_iters: 1,
            tolerance: 1e-12,
        };
        let err = rise_transit_set(
            &venus_samples(),
            177.742_08 * DEG2RAD,
            -71.0833 * DEG2RAD,
            42.3333 * DEG2RAD,
            56.0,
            STAR_ALTITUDE,
            &config,
        )
        .unwrap_err();
        assert!(matches!(err, EphemerisError::Convergence { iterations: 1, .. }));
    }

    #[test]
    fn test_standard_altitudes() {
        assert!(SUN_ALTITUDE < STAR_ALTITUDE);
        // Mean distance gives the familiar +0.125 deg
        assert_abs_diff_eq!(moon_altitude(385_000.0) * RAD2DEG, 0.125, epsilon = 0.01);
        assert_eq!(standard_altitude(Body::Jupiter, 0.0), STAR_ALTITUDE);
    }

    #[test]
    fn test_sun_at_greenwich_equinox() {
        // 2010 March 20, roughly twelve hours of daylight around 12h UT
        let date = JulianDate::from_jd(2_455_275.5);
        let rts = body_rise_transit_set(Body::Sun, date, 0.0, 51.48 * DEG2RAD, 66.0, &RiseSetConfig::default())
            .unwrap();
        let (rise, transit, set) = rts.as_sentinel_tuple();
        assert_abs_diff_eq!(transit, 0.5052, epsilon = 0.003);
        assert_abs_diff_eq!(rise, 0.252, epsilon = 0.01);
        assert_abs_diff_eq!(set, 0.760, epsilon = 0.01);
    }
}
