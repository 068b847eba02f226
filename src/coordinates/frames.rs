//! Frame-tagged position vectors
//!
//! The analytical theories all hand back bare (x, y, z) triples, and mixing a
//! heliocentric ecliptic vector with a geocentric equatorial one silently
//! produces a wrong ephemeris. `Position<F, O, U>` carries the reference
//! frame, origin and length unit as zero-sized type parameters so that such
//! mixes fail to compile. Only the conversions that are physically meaningful
//! exist as methods.

use super::cartesian::Cartesian3;
use crate::constants::AU_KM;
use nalgebra::Matrix3;
use std::fmt;
use std::marker::PhantomData;

/// Reference plane and equinox of a position
pub trait Frame: Copy + fmt::Debug {
    const NAME: &'static str;
}

/// Where the vector starts
pub trait Origin: Copy + fmt::Debug {
    const NAME: &'static str;
}

/// Length unit of the components
pub trait Unit: Copy + fmt::Debug {
    const NAME: &'static str;
    /// Kilometres per unit
    const KM: f64;
}

/// Dynamical ecliptic and equinox of J2000 as realised by VSOP87
#[derive(Debug, Clone, Copy)]
pub struct EclipticJ2000;

/// Mean ecliptic and equinox of J2000 as realised by the lunar theory
///
/// Differs from [`EclipticJ2000`] by VSOP87's small frame tie, so the two
/// need their own rotations onto the equator.
#[derive(Debug, Clone, Copy)]
pub struct LunarEclipticJ2000;

/// Mean equator and equinox of J2000
#[derive(Debug, Clone, Copy)]
pub struct EquatorialJ2000;

/// True equator and equinox of the epoch of observation
#[derive(Debug, Clone, Copy)]
pub struct EquatorialOfDate;

#[derive(Debug, Clone, Copy)]
pub struct Heliocentric;

#[derive(Debug, Clone, Copy)]
pub struct Geocentric;

#[derive(Debug, Clone, Copy)]
pub struct Au;

#[derive(Debug, Clone, Copy)]
pub struct Km;

impl Frame for EclipticJ2000 {
    const NAME: &'static str = "ecliptic J2000";
}
impl Frame for LunarEclipticJ2000 {
    const NAME: &'static str = "lunar ecliptic J2000";
}
impl Frame for EquatorialJ2000 {
    const NAME: &'static str = "equatorial J2000";
}
impl Frame for EquatorialOfDate {
    const NAME: &'static str = "equatorial of date";
}
impl Origin for Heliocentric {
    const NAME: &'static str = "heliocentric";
}
impl Origin for Geocentric {
    const NAME: &'static str = "geocentric";
}
impl Unit for Au {
    const NAME: &'static str = "AU";
    const KM: f64 = AU_KM;
}
impl Unit for Km {
    const NAME: &'static str = "km";
    const KM: f64 = 1.0;
}

/// A position vector with its frame, origin and unit in the type
pub struct Position<F: Frame, O: Origin, U: Unit = Au> {
    xyz: Cartesian3,
    _tag: PhantomData<(F, O, U)>,
}

/// Heliocentric ecliptic J2000 position in AU (VSOP87, Keplerian orbits)
pub type HeliocentricEcliptic = Position<EclipticJ2000, Heliocentric, Au>;
/// Heliocentric equatorial J2000 position in AU (Pluto95, rotated VSOP87)
pub type HeliocentricEquatorial = Position<EquatorialJ2000, Heliocentric, Au>;
/// Geocentric equatorial J2000 position in AU
pub type GeocentricEquatorial = Position<EquatorialJ2000, Geocentric, Au>;
/// Geocentric ecliptic J2000 position in kilometres (ELP2000-82B)
pub type LunarEcliptic = Position<LunarEclipticJ2000, Geocentric, Km>;

impl<F: Frame, O: Origin, U: Unit> Position<F, O, U> {
    pub fn new(xyz: Cartesian3) -> Self {
        Self {
            xyz,
            _tag: PhantomData,
        }
    }

    /// The untagged components
    pub fn xyz(&self) -> Cartesian3 {
        self.xyz
    }

    pub fn distance(&self) -> f64 {
        self.xyz.magnitude()
    }

    /// (longitude or right ascension, latitude or declination, distance)
    pub fn to_spherical(&self) -> (f64, f64, f64) {
        self.xyz.to_spherical()
    }

    /// Rotate into another frame with an explicit matrix
    ///
    /// The caller vouches that `matrix` maps `F` onto `G`; the dedicated
    /// conversions in `planetlib`, `moonlib` and `positions` are the usual
    /// way to obtain one.
    pub fn rotate_into<G: Frame>(&self, matrix: &Matrix3<f64>) -> Position<G, O, U> {
        Position::new(self.xyz.rotate(matrix))
    }

    /// Same position expressed in a different length unit
    pub fn convert<V: Unit>(&self) -> Position<F, O, V> {
        Position::new(self.xyz * (U::KM / V::KM))
    }
}

impl<F: Frame, U: Unit> Position<F, Heliocentric, U> {
    /// Vector from the Earth to this body, given the Earth in the same frame
    pub fn geocentric(&self, earth: &Position<F, Heliocentric, U>) -> Position<F, Geocentric, U> {
        Position::new(self.xyz - earth.xyz)
    }
}

impl<F: Frame, U: Unit> Position<F, Geocentric, U> {
    /// The Sun as seen from the Earth is the negated heliocentric Earth
    pub fn sun_from(earth: &Position<F, Heliocentric, U>) -> Self {
        Position::new(-earth.xyz)
    }
}

impl<F: Frame, O: Origin, U: Unit> Clone for Position<F, O, U> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: Frame, O: Origin, U: Unit> Copy for Position<F, O, U> {}

impl<F: Frame, O: Origin, U: Unit> PartialEq for Position<F, O, U> {
    fn eq(&self, other: &Self) -> bool {
        self.xyz == other.xyz
    }
}

impl<F: Frame, O: Origin, U: Unit> fmt::Debug for Position<F, O, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Position<{}, {}, {}>({:.10}, {:.10}, {:.10})",
            F::NAME,
            O::NAME,
            U::NAME,
            self.xyz.x,
            self.xyz.y,
            self.xyz.z
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_geocentric_subtraction() {
        let mars = HeliocentricEcliptic::new(Cartesian3::new(1.2, 0.9, 0.01));
        let earth = HeliocentricEcliptic::new(Cartesian3::new(-0.2, 0.98, 0.0));
        let geo = mars.geocentric(&earth);
        assert_relative_eq!(geo.xyz().x, 1.4);
        assert_relative_eq!(geo.xyz().y, -0.08, epsilon = 1e-15);

        let sun = Position::<EclipticJ2000, Geocentric, Au>::sun_from(&earth);
        assert_relative_eq!(sun.distance(), earth.distance());
    }

    #[test]
    fn test_unit_conversion() {
        let moon = LunarEcliptic::new(Cartesian3::new(AU_KM / 400.0, 0.0, 0.0));
        let in_au: Position<LunarEclipticJ2000, Geocentric, Au> = moon.convert();
        assert_relative_eq!(in_au.distance(), 1.0 / 400.0, max_relative = 1e-15);
        let back: LunarEcliptic = in_au.convert();
        assert_relative_eq!(back.distance(), moon.distance(), max_relative = 1e-15);
    }

    #[test]
    fn test_debug_names_frame() {
        let p = HeliocentricEquatorial::new(Cartesian3::new(1.0, 0.0, 0.0));
        let text = format!("{p:?}");
        assert!(text.contains("equatorial J2000"));
        assert!(text.contains("heliocentric"));

        let moon = LunarEcliptic::new(Cartesian3::new(1.0, 0.0, 0.0));
        assert!(format!("{moon:?}").contains("lunar ecliptic J2000"));
    }
}
