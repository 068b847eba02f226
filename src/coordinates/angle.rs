//! # Angle Representation Module
//!
//! Angles enter an ephemeris library in three conventional units: degrees
//! (declinations, observer latitudes), hours (right ascensions, sidereal
//! times) and radians (everything computed internally). `Angle` keeps the
//! value exactly as supplied and converts only on request, so a right
//! ascension typed in as `2h31m48.704s` round-trips without drift.
//!
//! ## Examples
//!
//! ```rust
//! use skyephem::coordinates::angle::Angle;
//!
//! let ra = Angle::from_hms(2, 31, 48.704);
//! assert!((ra.to_hours() - 2.530195555555556).abs() < 1e-12);
//!
//! let dms = Angle::from_degrees(-12.5).to_dms();
//! assert_eq!((dms.degrees, dms.minutes), (-12, -30));
//! ```

use crate::constants::{DEG2RAD, HOUR2RAD, RAD2DEG, RAD2HOUR};
use std::fmt;

/// Internal representation format for angle values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AngleFormat {
    /// Angle stored in degrees
    Degrees(f64),
    /// Angle stored in hours (15° per hour)
    Hours(f64),
    /// Angle stored in radians
    Radians(f64),
}

/// Sexagesimal split of an angle
///
/// For negative angles every component carries the sign, matching the way
/// the split is usually consumed (each part added back independently).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sexagesimal {
    pub degrees: i32,
    pub minutes: i32,
    pub seconds: f64,
}

impl Sexagesimal {
    /// Splits a decimal value into whole units, minutes and seconds
    pub fn from_decimal(value: f64) -> Self {
        let magnitude = value.abs();
        let whole = magnitude.floor();
        let rest = (magnitude - whole) * 60.0;
        let minutes = rest.floor();
        let seconds = (rest - minutes) * 60.0;

        let sign = if value < 0.0 { -1 } else { 1 };
        Sexagesimal {
            degrees: sign * whole as i32,
            minutes: sign * minutes as i32,
            seconds: sign as f64 * seconds,
        }
    }

    pub fn to_decimal(&self) -> f64 {
        self.degrees as f64 + self.minutes as f64 / 60.0 + self.seconds / 3600.0
    }
}

/// Degrees (or hours) to whole units, minutes and seconds, sign on every part
pub fn degrees_to_dms(degrees: f64) -> Sexagesimal {
    Sexagesimal::from_decimal(degrees)
}

/// An angular measurement that remembers the unit it was created in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angle {
    angle: AngleFormat,
}

impl Angle {
    pub fn from_degrees(degrees: f64) -> Self {
        Angle {
            angle: AngleFormat::Degrees(degrees),
        }
    }

    pub fn from_hours(hours: f64) -> Self {
        Angle {
            angle: AngleFormat::Hours(hours),
        }
    }

    pub fn from_radians(radians: f64) -> Self {
        Angle {
            angle: AngleFormat::Radians(radians),
        }
    }

    /// Angle from degrees, arcminutes and arcseconds
    ///
    /// All three parts are added, so a negative angle needs every non-zero
    /// part negated (`-0° 30' 0"` is `from_dms(0, -30, 0.0)`).
    pub fn from_dms(degrees: i32, minutes: i32, seconds: f64) -> Self {
        Self::from_degrees(degrees as f64 + minutes as f64 / 60.0 + seconds / 3600.0)
    }

    /// Angle from hours, minutes and seconds of time
    pub fn from_hms(hours: i32, minutes: i32, seconds: f64) -> Self {
        Self::from_hours(hours as f64 + minutes as f64 / 60.0 + seconds / 3600.0)
    }

    pub fn to_degrees(&self) -> f64 {
        match self.angle {
            AngleFormat::Degrees(deg) => deg,
            AngleFormat::Hours(h) => h * 15.0,
            AngleFormat::Radians(rad) => rad * RAD2DEG,
        }
    }

    pub fn to_hours(&self) -> f64 {
        match self.angle {
            AngleFormat::Degrees(deg) => deg / 15.0,
            AngleFormat::Hours(h) => h,
            AngleFormat::Radians(rad) => rad * RAD2HOUR,
        }
    }

    pub fn to_radians(&self) -> f64 {
        match self.angle {
            AngleFormat::Degrees(deg) => deg * DEG2RAD,
            AngleFormat::Hours(h) => h * HOUR2RAD,
            AngleFormat::Radians(rad) => rad,
        }
    }

    /// Degrees, arcminutes, arcseconds
    pub fn to_dms(&self) -> Sexagesimal {
        Sexagesimal::from_decimal(self.to_degrees())
    }

    /// Hours, minutes, seconds of time
    pub fn to_hms(&self) -> Sexagesimal {
        Sexagesimal::from_decimal(self.to_hours())
    }

    pub fn format(&self) -> AngleFormat {
        self.angle
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.angle {
            AngleFormat::Hours(_) => {
                let hms = self.to_hms();
                write!(
                    f,
                    "{:>3}h {:02}m {:06.3}s",
                    hms.degrees,
                    hms.minutes.abs(),
                    hms.seconds.abs()
                )
            }
            _ => {
                let dms = self.to_dms();
                let sign = if self.to_degrees() < 0.0 { "-" } else { "+" };
                write!(
                    f,
                    "{}{:02}° {:02}' {:05.2}\"",
                    sign,
                    dms.degrees.abs(),
                    dms.minutes.abs(),
                    dms.seconds.abs()
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_exact_storage() {
        let angle = Angle::from_degrees(123.456789012345);
        assert_eq!(angle.to_degrees(), 123.456789012345);
        assert!(matches!(angle.format(), AngleFormat::Degrees(_)));

        let angle = Angle::from_hours(5.25);
        assert_eq!(angle.to_hours(), 5.25);
        assert_eq!(angle.to_degrees(), 78.75);
    }

    #[test]
    fn test_unit_conversions() {
        assert_abs_diff_eq!(Angle::from_degrees(180.0).to_radians(), PI, epsilon = 1e-15);
        assert_abs_diff_eq!(Angle::from_hours(6.0).to_radians(), PI / 2.0, epsilon = 1e-15);
        assert_abs_diff_eq!(Angle::from_radians(PI).to_hours(), 12.0, epsilon = 1e-14);
    }

    #[test]
    fn test_sexagesimal_split() {
        let dms = Angle::from_dms(89, 15, 50.72).to_dms();
        assert_eq!(dms.degrees, 89);
        assert_eq!(dms.minutes, 15);
        assert_abs_diff_eq!(dms.seconds, 50.72, epsilon = 1e-9);

        let neg = Sexagesimal::from_decimal(-71.061_666_666_666_67);
        assert_eq!(neg.degrees, -71);
        assert_eq!(neg.minutes, -3);
        assert_abs_diff_eq!(neg.seconds, -42.0, epsilon = 1e-9);
        assert_abs_diff_eq!(neg.to_decimal(), -71.061_666_666_666_67, epsilon = 1e-12);
        assert_eq!(degrees_to_dms(-0.5).minutes, -30);
    }

    #[test]
    fn test_display() {
        assert_eq!(Angle::from_hms(2, 31, 48.704).to_string(), "  2h 31m 48.704s");
        assert_eq!(Angle::from_degrees(-23.5).to_string(), "-23° 30' 00.00\"");
    }
}
