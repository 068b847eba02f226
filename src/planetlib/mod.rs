//! Planetary ephemeris calculations module
//!
//! Heliocentric positions of the eight major planets from VSOP87 (version A,
//! rectangular, ecliptic and equinox of J2000) and of Pluto from Pluto95.
//! The VSOP87 series are evaluated by the `vsop87` crate; this module adds
//! planet identification, frame tagging, the VSOP87 ecliptic→equator
//! rotation and a per-context cache of the Earth's position.

mod pluto;
mod pluto_data;

pub use pluto::{pluto_position, PLUTO_MAX_JD, PLUTO_MIN_JD};

use crate::coordinates::frames::{EclipticJ2000, EquatorialJ2000, Origin, Position, Unit};
use crate::coordinates::{Cartesian3, HeliocentricEcliptic};
use crate::errors::{EphemerisError, Result};
use crate::time::JulianDate;
use lazy_static::lazy_static;
use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use vsop87::vsop87a;

lazy_static! {
    /// Rotation from the dynamical ecliptic of J2000 to the equator of
    /// J2000/FK5, as published with VSOP87
    pub static ref VSOP87_TO_EQUATORIAL: Matrix3<f64> = Matrix3::new(
        1.000000000000, 0.000000440360, -0.000000190919,
        -0.000000479966, 0.917482137087, -0.397776982902,
        0.000000000000, 0.397776982902, 0.917482137087,
    );
}

/// The eight major planets, indexed Mercury = 0 .. Neptune = 7
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Planet {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Planet {
    pub const ALL: [Planet; 8] = [
        Planet::Mercury,
        Planet::Venus,
        Planet::Earth,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
    ];

    /// Planet from its index (Mercury = 0)
    pub fn from_index(index: usize) -> Result<Planet> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or_else(|| EphemerisError::InvalidPlanet(format!("index {index}")))
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn name(&self) -> &'static str {
        match self {
            Planet::Mercury => "Mercury",
            Planet::Venus => "Venus",
            Planet::Earth => "Earth",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
            Planet::Uranus => "Uranus",
            Planet::Neptune => "Neptune",
        }
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Planet {
    type Err = EphemerisError;

    fn from_str(s: &str) -> Result<Self> {
        Planet::ALL
            .iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| EphemerisError::InvalidPlanet(s.to_string()))
    }
}

/// Enum representing the solar system bodies with an analytical theory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl Body {
    /// Every body seen from the Earth, in table order
    pub const OBSERVABLE: [Body; 10] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
    ];

    /// Get the body's name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Pluto => "Pluto",
            other => other.planet().map(|p| p.name()).unwrap_or("?"),
        }
    }

    /// The VSOP87 planet behind this body, if any
    pub fn planet(&self) -> Option<Planet> {
        match self {
            Body::Mercury => Some(Planet::Mercury),
            Body::Venus => Some(Planet::Venus),
            Body::Earth => Some(Planet::Earth),
            Body::Mars => Some(Planet::Mars),
            Body::Jupiter => Some(Planet::Jupiter),
            Body::Saturn => Some(Planet::Saturn),
            Body::Uranus => Some(Planet::Uranus),
            Body::Neptune => Some(Planet::Neptune),
            Body::Sun | Body::Moon | Body::Pluto => None,
        }
    }
}

impl From<Planet> for Body {
    fn from(planet: Planet) -> Self {
        match planet {
            Planet::Mercury => Body::Mercury,
            Planet::Venus => Body::Venus,
            Planet::Earth => Body::Earth,
            Planet::Mars => Body::Mars,
            Planet::Jupiter => Body::Jupiter,
            Planet::Saturn => Body::Saturn,
            Planet::Uranus => Body::Uranus,
            Planet::Neptune => Body::Neptune,
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Body {
    type Err = EphemerisError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sun" => Ok(Body::Sun),
            "moon" => Ok(Body::Moon),
            "pluto" => Ok(Body::Pluto),
            _ => Planet::from_str(s).map(Body::from),
        }
    }
}

/// Heliocentric ecliptic J2000 position of a planet from VSOP87A, in AU
///
/// `tdb` is barycentric dynamical time; TT may be used instead for all but
/// the most exacting work.
pub fn vsop87_position(planet: Planet, tdb: JulianDate) -> HeliocentricEcliptic {
    let jde = tdb.jd();
    let rect = match planet {
        Planet::Mercury => vsop87a::mercury(jde),
        Planet::Venus => vsop87a::venus(jde),
        Planet::Earth => vsop87a::earth(jde),
        Planet::Mars => vsop87a::mars(jde),
        Planet::Jupiter => vsop87a::jupiter(jde),
        Planet::Saturn => vsop87a::saturn(jde),
        Planet::Uranus => vsop87a::uranus(jde),
        Planet::Neptune => vsop87a::neptune(jde),
    };
    HeliocentricEcliptic::new(Cartesian3::new(rect.x, rect.y, rect.z))
}

/// VSOP87 position of the planet with the given index (Mercury = 0)
pub fn planet_position(planet_id: usize, tdb: JulianDate) -> Result<HeliocentricEcliptic> {
    Ok(vsop87_position(Planet::from_index(planet_id)?, tdb))
}

/// Rotate a VSOP87 vector from the dynamical ecliptic to the FK5 equator
///
/// Only valid for VSOP87 output: the matrix encodes VSOP87's own frame tie
/// and is not a plain obliquity rotation.
pub fn vsop87_ecliptic_to_equator<O: Origin, U: Unit>(
    position: &Position<EclipticJ2000, O, U>,
) -> Position<EquatorialJ2000, O, U> {
    position.rotate_into(&VSOP87_TO_EQUATORIAL)
}

/// Earth positions keyed by epoch
///
/// Apparent places of several bodies at one epoch, and the light-time
/// iterations for each of them, all need the Earth at the same instant. The
/// cache is owned by the caller and lives only as long as the computation
/// that shares it.
#[derive(Debug, Default)]
pub struct EarthCache {
    entries: HashMap<(u64, u64), HeliocentricEcliptic>,
    hits: usize,
}

impl EarthCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Heliocentric ecliptic J2000 Earth at `tdb`, computed at most once per epoch
    pub fn earth(&mut self, tdb: JulianDate) -> HeliocentricEcliptic {
        let key = (tdb.date1.to_bits(), tdb.date2.to_bits());
        if let Some(pos) = self.entries.get(&key) {
            self.hits += 1;
            return *pos;
        }
        let pos = vsop87_position(Planet::Earth, tdb);
        self.entries.insert(key, pos);
        pos
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of lookups served without re-evaluating VSOP87
    pub fn hits(&self) -> usize {
        self.hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_planet_indices() {
        for (i, planet) in Planet::ALL.iter().enumerate() {
            assert_eq!(Planet::from_index(i).unwrap(), *planet);
            assert_eq!(planet.index(), i);
        }
        assert_eq!(
            Planet::from_index(8).unwrap_err(),
            EphemerisError::InvalidPlanet("index 8".into())
        );
        assert!(planet_position(9, JulianDate::j2000()).is_err());
    }

    #[rstest]
    #[case("mars", Body::Mars)]
    #[case(" Sun ", Body::Sun)]
    #[case("PLUTO", Body::Pluto)]
    #[case("Neptune", Body::Neptune)]
    fn test_body_parsing(#[case] text: &str, #[case] expected: Body) {
        assert_eq!(text.parse::<Body>().unwrap(), expected);
    }

    #[test]
    fn test_unknown_body() {
        assert!(matches!(
            "Vulcan".parse::<Body>(),
            Err(EphemerisError::InvalidPlanet(_))
        ));
    }

    #[test]
    fn test_earth_distance_at_j2000() {
        let earth = vsop87_position(Planet::Earth, JulianDate::j2000());
        assert_relative_eq!(earth.distance(), 0.98329, epsilon = 1e-4);
        // Near perihelion in early January the Earth sits at ecliptic longitude ~100°
        let (lon, lat, _) = earth.to_spherical();
        assert!((lon.to_degrees() - 100.4).abs() < 0.2, "lon = {}", lon.to_degrees());
        assert!(lat.abs() < 1e-5);
    }

    #[test]
    fn test_vsop87_position_is_repeatable() {
        let t = JulianDate::new(2_455_200.5, 0.25);
        for planet in Planet::ALL {
            let first = vsop87_position(planet, t).xyz();
            let second = vsop87_position(planet, t).xyz();
            assert_eq!(first.x.to_bits(), second.x.to_bits(), "{planet:?}");
            assert_eq!(first.y.to_bits(), second.y.to_bits(), "{planet:?}");
            assert_eq!(first.z.to_bits(), second.z.to_bits(), "{planet:?}");
        }
    }

    #[test]
    fn test_vsop_matrix_is_rotation() {
        let m = *VSOP87_TO_EQUATORIAL;
        let product = m * m.transpose();
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(product[(i, j)], expected, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_earth_cache_reuses_values() {
        let mut cache = EarthCache::new();
        let t = JulianDate::from_jd(2_455_200.5);
        let first = cache.earth(t);
        let second = cache.earth(t);
        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.hits(), 1);

        cache.earth(t.add_days(1.0));
        assert_eq!(cache.len(), 2);
    }
}
