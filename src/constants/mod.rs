//! Constants module for astronomical calculations

use std::f64::consts::PI;

// Astronomical distances
/// Astronomical Unit in kilometers (IAU 1976 value used by the analytical theories)
pub const AU_KM: f64 = 149_597_870.691;
/// Gaussian gravitational constant (AU^3/2 day^-1 solar mass^-1/2)
pub const GAUSS_K: f64 = 0.017_202_098_95;

// Time constants
/// Seconds in a day
pub const DAY_S: f64 = 86_400.0;
/// J2000.0 epoch as Julian date
pub const J2000: f64 = 2_451_545.0;
/// Modified Julian date epoch
pub const MJD_EPOCH: f64 = 2_400_000.5;
/// Days in a Julian century
pub const JULIAN_CENTURY: f64 = 36_525.0;
/// Days in a Julian millennium
pub const JULIAN_MILLENNIUM: f64 = 365_250.0;

// Angles
/// Arcseconds in a complete circle
pub const ASEC360: f64 = 1_296_000.0;
/// Arcseconds to radians conversion factor
pub const ASEC2RAD: f64 = 4.848_136_811_095_36e-6;
/// Milliarcseconds to radians
pub const MAS2RAD: f64 = ASEC2RAD / 1e3;
/// Microarcseconds to radians
pub const UAS2RAD: f64 = ASEC2RAD / 1e6;
/// Radians to arcseconds
pub const RAD2ASEC: f64 = 206_264.806_247_096;
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;
/// Hours to radians
pub const HOUR2RAD: f64 = PI / 12.0;
/// Radians to hours
pub const RAD2HOUR: f64 = 12.0 / PI;
/// Tau (2*PI) for full circle
pub const TAU: f64 = 2.0 * PI;

// Physics
/// Speed of light in AU/day, as used by the light-time corrector
pub const C_AUDAY: f64 = 173.14;
/// Speed of light in units of 1e-8 AU/day (Ron-Vondrak velocity units)
pub const C_VONDRAK: f64 = 17_314_463_348.4;

// Earth constants
/// Earth's equatorial radius in meters
pub const EARTH_RADIUS: f64 = 6_378_136.6;
/// IERS 2003 Earth flattening
pub const EARTH_FLATTENING: f64 = 1.0 / 298.256_42;
/// Earth's polar radius in meters
pub const EARTH_POLAR_RADIUS: f64 = EARTH_RADIUS * (1.0 - EARTH_FLATTENING);
/// Mean obliquity of the ecliptic at J2000.0 (IAU 2006) in arcseconds
pub const OBLIQUITY_J2000_ASEC: f64 = 84_381.406;
