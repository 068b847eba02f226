//! Skyephem: analytical solar system ephemerides
//!
//! Positions of the Sun, Moon and planets from series theories (VSOP87,
//! ELP2000-82B, Pluto95) and of minor bodies from osculating elements,
//! reduced to apparent places with IAU 2006 precession, IAU 2000 nutation and
//! Ron-Vondrák aberration. Sidereal time, parallax, magnitudes and
//! rise/transit/set times complete the toolkit.
//!
//! Every computation is a pure function of its inputs. Solver settings are
//! passed as small configuration values and the only cache, [`EarthCache`],
//! belongs to the caller.
//!
//! ```rust
//! use skyephem::{Body, EarthCache, JulianDate};
//! use skyephem::positions::geometric_position;
//!
//! let mut cache = EarthCache::new();
//! let sun = geometric_position(Body::Sun, JulianDate::from_jd(2_455_200.5), &mut cache).unwrap();
//! assert!((sun.distance - 0.9833).abs() < 1e-3);
//! ```

pub mod aberrationlib;
pub mod almanac;
pub mod constants;
pub mod coordinates;
pub mod earthlib;
pub mod errors;
pub mod framelib;
pub mod fundamentals;
pub mod keplerlib;
pub mod magnitudes;
pub mod moonlib;
pub mod nutationlib;
pub mod planetlib;
pub mod positions;
pub mod precessionlib;
pub mod time;

// Re-export commonly used types
pub use coordinates::{Angle, Cartesian3, Position};
pub use errors::{EphemerisError, Result};
pub use framelib::{Ecliptic, Equatorial, Horizontal};
pub use planetlib::{Body, EarthCache, Planet};
pub use positions::SkyPosition;
pub use time::JulianDate;
