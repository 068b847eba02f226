//! Geocentric places of solar system bodies
//!
//! Geometric places are the instantaneous J2000 direction and distance from
//! the Earth's centre. Apparent places of date add, in order, the light-time
//! correction, annual aberration, precession and nutation.
//!
//! # Example
//!
//! ```rust
//! use skyephem::planetlib::{Body, EarthCache};
//! use skyephem::positions::geometric_position;
//! use skyephem::time::JulianDate;
//!
//! let mut cache = EarthCache::new();
//! let jupiter = geometric_position(Body::Jupiter, JulianDate::from_jd(2_455_200.5), &mut cache).unwrap();
//! assert!(jupiter.distance > 4.0 && jupiter.distance < 6.5);
//! ```

use crate::aberrationlib::apply_aberration;
use crate::constants::AU_KM;
use crate::coordinates::frames::Au;
use crate::coordinates::{Cartesian3, GeocentricEquatorial, HeliocentricEquatorial};
use crate::errors::{EphemerisError, Result};
use crate::framelib::{light_time_correction, rotate_equatorial, Equatorial, LightTimeConfig};
use crate::moonlib::{elp_ecliptic_to_equator, moon_rectangular};
use crate::nutationlib::nutation_matrix;
use crate::planetlib::{pluto_position, vsop87_ecliptic_to_equator, vsop87_position, Body, EarthCache};
use crate::precessionlib::{precession_matrix, PrecessionDirection};
use crate::time::JulianDate;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a place is referred to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaceKind {
    /// Mean equator and equinox of J2000, no light-time
    Geometric,
    /// True equator and equinox of date
    Apparent,
}

/// Geocentric right ascension, declination and distance of a body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkyPosition {
    pub body: Body,
    pub kind: PlaceKind,
    /// Right ascension in radians, [0, 2π)
    pub ra: f64,
    /// Declination in radians
    pub dec: f64,
    /// Distance from the Earth's centre, AU
    pub distance: f64,
}

impl SkyPosition {
    pub fn equatorial(&self) -> Equatorial {
        Equatorial::new(self.ra, self.dec)
    }

    pub fn ra_hours(&self) -> f64 {
        self.equatorial().ra_hours()
    }

    pub fn dec_degrees(&self) -> f64 {
        self.equatorial().dec_degrees()
    }

    pub fn distance_km(&self) -> f64 {
        self.distance * AU_KM
    }
}

impl fmt::Display for SkyPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<8} RA {:>12.8} h  Dec {:>+13.8} deg  r {:>13.9} AU",
            self.body.name(),
            self.ra_hours(),
            self.dec_degrees(),
            self.distance
        )
    }
}

/// Heliocentric equatorial J2000 position of a body that orbits the Sun
///
/// The Moon has no heliocentric theory and yields `InvalidPlanet`; the Sun
/// sits at the origin.
pub fn heliocentric_position(body: Body, tdb: JulianDate) -> Result<HeliocentricEquatorial> {
    match body {
        Body::Sun => Ok(HeliocentricEquatorial::new(Cartesian3::zero())),
        Body::Moon => Err(EphemerisError::InvalidPlanet(
            "the Moon has no heliocentric theory".into(),
        )),
        Body::Pluto => pluto_position(tdb),
        other => match other.planet() {
            Some(planet) => Ok(vsop87_ecliptic_to_equator(&vsop87_position(planet, tdb))),
            None => Err(EphemerisError::InvalidPlanet(other.name().into())),
        },
    }
}

/// Geocentric equatorial J2000 position of the Moon, AU
pub fn moon_geocentric(tdb: JulianDate) -> GeocentricEquatorial {
    elp_ecliptic_to_equator(&moon_rectangular(tdb)).convert::<Au>()
}

fn earth_equatorial(tdb: JulianDate, cache: &mut EarthCache) -> HeliocentricEquatorial {
    vsop87_ecliptic_to_equator(&cache.earth(tdb))
}

fn observer_is_earth(body: Body) -> Result<()> {
    if body == Body::Earth {
        return Err(EphemerisError::InvalidPlanet(
            "the Earth cannot be observed from its own centre".into(),
        ));
    }
    Ok(())
}

/// Geocentric J2000 position vector of a body, AU
pub fn geocentric_vector(
    body: Body,
    tdb: JulianDate,
    cache: &mut EarthCache,
) -> Result<GeocentricEquatorial> {
    observer_is_earth(body)?;
    if body == Body::Moon {
        return Ok(moon_geocentric(tdb));
    }
    let target = heliocentric_position(body, tdb)?;
    Ok(target.geocentric(&earth_equatorial(tdb, cache)))
}

/// Geometric geocentric place on the mean equator and equinox of J2000
pub fn geometric_position(body: Body, tdb: JulianDate, cache: &mut EarthCache) -> Result<SkyPosition> {
    let (ra, dec, distance) = geocentric_vector(body, tdb, cache)?.to_spherical();
    Ok(SkyPosition {
        body,
        kind: PlaceKind::Geometric,
        ra,
        dec,
        distance,
    })
}

/// Geometric places of every observable body at one epoch
///
/// The Earth is evaluated once and shared. A body whose theory rejects the
/// date (Pluto outside 1700–2100) fails the whole table.
pub fn geometric_table(tdb: JulianDate, cache: &mut EarthCache) -> Result<Vec<SkyPosition>> {
    Body::OBSERVABLE
        .iter()
        .map(|&body| geometric_position(body, tdb, cache))
        .collect()
}

/// Geocentric J2000 vector corrected for light-time, with the correction in days
fn retarded_vector(
    body: Body,
    tdb: JulianDate,
    cache: &mut EarthCache,
    config: &LightTimeConfig,
) -> Result<(Cartesian3, f64)> {
    observer_is_earth(body)?;
    let earth = earth_equatorial(tdb, cache).xyz();

    let solution = if body == Body::Moon {
        // The Moon is carried along with the Earth, so it is retarded as a
        // heliocentric body like any other
        light_time_correction(
            tdb,
            &earth,
            |t| Ok(earth_equatorial(t, cache).xyz() + moon_geocentric(t).xyz()),
            config,
        )?
    } else {
        light_time_correction(
            tdb,
            &earth,
            |t| heliocentric_position(body, t).map(|p| p.xyz()),
            config,
        )?
    };
    Ok((solution.position - earth, solution.light_time))
}

/// Apparent geocentric place on the true equator and equinox of date
///
/// Light-time, then annual aberration, then precession from J2000 to the
/// epoch, then nutation. Parallax and refraction are left to the caller.
pub fn apparent_position(
    body: Body,
    tdb: JulianDate,
    cache: &mut EarthCache,
    config: &LightTimeConfig,
) -> Result<SkyPosition> {
    let (vector, light_time) = retarded_vector(body, tdb, cache, config)?;
    let (ra, dec, distance) = vector.to_spherical();

    let astrometric = Equatorial::new(ra, dec);
    let aberrated = apply_aberration(tdb, &astrometric);
    let mean = rotate_equatorial(&precession_matrix(tdb, PrecessionDirection::FromJ2000), &aberrated);
    let apparent = rotate_equatorial(&nutation_matrix(tdb), &mean);

    debug!(
        "apparent place of {} at JD {:.6}: light-time {:.3e} d",
        body,
        tdb.jd(),
        light_time
    );
    Ok(SkyPosition {
        body,
        kind: PlaceKind::Apparent,
        ra: apparent.ra,
        dec: apparent.dec,
        distance,
    })
}

/// Distance of the Moon from the Earth's centre in km
pub fn moon_distance_km(tdb: JulianDate) -> f64 {
    moon_rectangular(tdb).distance()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEG2RAD, RAD2ASEC};
    use approx::assert_abs_diff_eq;

    fn epoch() -> JulianDate {
        JulianDate::from_jd(2_455_200.5)
    }

    #[test]
    fn test_jupiter_reference_place() {
        let mut cache = EarthCache::new();
        let jupiter = geometric_position(Body::Jupiter, epoch(), &mut cache).unwrap();
        assert_abs_diff_eq!(jupiter.ra_hours(), 21.958_641_3, epsilon = 1e-6);
        assert_abs_diff_eq!(jupiter.dec_degrees(), -13.444_214_4, epsilon = 1e-6);
        assert_abs_diff_eq!(jupiter.distance, 5.670_271_80, epsilon = 1e-7);
    }

    #[test]
    fn test_sun_reference_place() {
        let mut cache = EarthCache::new();
        let sun = geometric_position(Body::Sun, epoch(), &mut cache).unwrap();
        assert_abs_diff_eq!(sun.ra_hours(), 18.968_112_4, epsilon = 1e-6);
        assert_abs_diff_eq!(sun.dec_degrees(), -22.766_760_6, epsilon = 1e-6);
        assert_abs_diff_eq!(sun.distance, 0.983_292_81, epsilon = 1e-7);
    }

    #[test]
    fn test_earth_is_not_observable() {
        let mut cache = EarthCache::new();
        let err = geometric_position(Body::Earth, epoch(), &mut cache).unwrap_err();
        assert!(matches!(err, EphemerisError::InvalidPlanet(_)));
    }

    #[test]
    fn test_moon_has_no_heliocentric_theory() {
        assert!(heliocentric_position(Body::Moon, epoch()).is_err());
    }

    #[test]
    fn test_table_shares_the_earth() {
        let mut cache = EarthCache::new();
        let table = geometric_table(epoch(), &mut cache).unwrap();
        assert_eq!(table.len(), Body::OBSERVABLE.len());
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.hits(), Body::OBSERVABLE.len() - 2);
    }

    #[test]
    fn test_table_fails_outside_pluto_range() {
        let mut cache = EarthCache::new();
        let err = geometric_table(JulianDate::from_jd(2_500_000.5), &mut cache).unwrap_err();
        assert!(err.is_invalid_date());
    }

    #[test]
    fn test_moon_place_in_au() {
        let mut cache = EarthCache::new();
        let moon = geometric_position(Body::Moon, epoch(), &mut cache).unwrap();
        assert!((356_000.0..407_000.0).contains(&moon.distance_km()));
        assert_abs_diff_eq!(moon.distance_km(), moon_distance_km(epoch()), epsilon = 1e-6);
    }

    #[test]
    fn test_apparent_sun_differs_by_aberration_and_precession() {
        let mut cache = EarthCache::new();
        let config = LightTimeConfig::default();
        let geometric = geometric_position(Body::Sun, epoch(), &mut cache).unwrap();
        let apparent = apparent_position(Body::Sun, epoch(), &mut cache, &config).unwrap();

        // Ten years of precession move the Sun by about 500" along the ecliptic
        let shift = geometric
            .equatorial()
            .to_ecliptic(23.44 * DEG2RAD)
            .lon
            - apparent.equatorial().to_ecliptic(23.44 * DEG2RAD).lon;
        let shift = -shift * RAD2ASEC;
        assert!((450.0..560.0).contains(&shift), "shift {shift}");
        assert_eq!(apparent.kind, PlaceKind::Apparent);
    }

    #[test]
    fn test_apparent_moon_meeus_47a() {
        // 1992 April 12, 0h TD: apparent RA 134.688470, Dec 13.768368
        let mut cache = EarthCache::new();
        let moon = apparent_position(
            Body::Moon,
            JulianDate::from_jd(2_448_724.5),
            &mut cache,
            &LightTimeConfig::default(),
        )
        .unwrap();
        assert_abs_diff_eq!(moon.ra / DEG2RAD, 134.688_47, epsilon = 0.03);
        assert_abs_diff_eq!(moon.dec / DEG2RAD, 13.768_368, epsilon = 0.02);
    }

    #[test]
    fn test_apparent_place_is_deterministic() {
        let config = LightTimeConfig::default();
        let mut first = EarthCache::new();
        let mut second = EarthCache::new();
        let a = apparent_position(Body::Mars, epoch(), &mut first, &config).unwrap();
        let b = apparent_position(Body::Mars, epoch(), &mut second, &config).unwrap();
        assert_eq!(a, b);
    }
}
