//! Time module for astronomical time calculations
//!
//! Epochs are carried as two-part Julian dates. The split between the two
//! parts is arbitrary: only their sum is meaningful, and every consumer uses
//! `date1 + date2` (or the J2000-relative forms below) rather than either part
//! alone. Keeping a large constant in one part and a small offset in the other
//! preserves precision when adding short time spans.

use crate::constants::{DAY_S, J2000, JULIAN_CENTURY, JULIAN_MILLENNIUM, MJD_EPOCH};
use crate::errors::{EphemerisError, Result};
use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Two-part Julian date
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JulianDate {
    pub date1: f64,
    pub date2: f64,
}

/// Calendar date in the proleptic Gregorian calendar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// Fraction of the day since midnight (0.5 = noon)
    pub day_fraction: f64,
}

impl JulianDate {
    pub fn new(date1: f64, date2: f64) -> Self {
        Self { date1, date2 }
    }

    /// Single-part Julian date
    pub fn from_jd(jd: f64) -> Self {
        Self {
            date1: jd,
            date2: 0.0,
        }
    }

    /// The J2000.0 epoch (2000-01-01 12:00 TT)
    pub fn j2000() -> Self {
        Self::from_jd(J2000)
    }

    /// Full Julian day number
    pub fn jd(&self) -> f64 {
        self.date1 + self.date2
    }

    /// Days elapsed since J2000.0, computed without forming the full sum first
    pub fn days_since_j2000(&self) -> f64 {
        (self.date1 - J2000) + self.date2
    }

    /// Julian centuries since J2000.0
    pub fn centuries(&self) -> f64 {
        self.days_since_j2000() / JULIAN_CENTURY
    }

    /// Julian millennia since J2000.0
    pub fn millennia(&self) -> f64 {
        self.days_since_j2000() / JULIAN_MILLENNIUM
    }

    /// Shift the epoch by a number of days, keeping `date1` untouched
    pub fn add_days(&self, days: f64) -> Self {
        Self {
            date1: self.date1,
            date2: self.date2 + days,
        }
    }

    /// Julian day number of 0h on a date in the proleptic Gregorian calendar
    ///
    /// The calendar reform is ignored and years before 4800 BC are rejected.
    /// The result is split as MJD epoch + modified Julian date.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use skyephem::time::JulianDate;
    ///
    /// let jd = JulianDate::from_calendar(2000, 1, 1).unwrap();
    /// assert_eq!(jd.jd(), 2_451_544.5);
    /// ```
    pub fn from_calendar(year: i32, month: u32, day: u32) -> Result<Self> {
        if year < -4799 || !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(EphemerisError::InvalidDate(format!(
                "{year:04}-{month:02}-{day:02} is not a supported calendar date"
            )));
        }

        let (year, month, day) = (year as i64, month as i64, day as i64);
        let mm = (month - 14) / 12;
        let mjd = day + (1461 * (year + 4800 + mm)) / 4 + (367 * (month - 2 - mm * 12)) / 12
            - (3 * ((year + 4900 + mm) / 100)) / 4
            - 2_432_076;

        Ok(Self {
            date1: MJD_EPOCH,
            date2: mjd as f64,
        })
    }

    /// Convert back to a proleptic Gregorian calendar date
    pub fn to_calendar(&self) -> Result<CalendarDate> {
        let jd = self.jd();
        if jd < -32_044.5 {
            return Err(EphemerisError::InvalidDate(format!(
                "JD {jd} precedes the supported calendar range"
            )));
        }

        let j = (jd + 32_044.5).floor() as i64;
        let g = j / 146_097;
        let dg = j % 146_097;
        let c = ((dg / 36_524 + 1) * 3) / 4;
        let dc = dg - c * 36_524;
        let b = dc / 1461;
        let db = dc % 1461;
        let a = ((db / 365 + 1) * 3) / 4;
        let da = db - a * 365;
        let y = g * 400 + c * 100 + b * 4 + a;
        let m = (da * 5 + 308) / 153 - 2;
        let d = da - ((m + 4) * 153) / 5 + 122;

        Ok(CalendarDate {
            year: (y - 4800 + (m + 2) / 12) as i32,
            month: ((m + 2) % 12 + 1) as u32,
            day: (d + 1) as u32,
            day_fraction: (self.date1 + self.date2 + 0.5).rem_euclid(1.0),
        })
    }

    /// Julian date of a calendar instant
    pub fn from_datetime(dt: &NaiveDateTime) -> Result<Self> {
        let midnight = Self::from_calendar(dt.year(), dt.month(), dt.day())?;
        let seconds = dt.num_seconds_from_midnight() as f64 + dt.nanosecond() as f64 * 1e-9;
        Ok(midnight.add_days(seconds / DAY_S))
    }

    /// Calendar instant of this Julian date, to the nearest millisecond
    pub fn to_datetime(&self) -> Result<NaiveDateTime> {
        let cal = self.to_calendar()?;
        let millis = (cal.day_fraction * DAY_S * 1e3).round() as i64;
        NaiveDate::from_ymd_opt(cal.year, cal.month, cal.day)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|midnight| midnight + chrono::Duration::milliseconds(millis))
            .ok_or_else(|| {
                EphemerisError::InvalidDate(format!("JD {} has no chrono representation", self.jd()))
            })
    }
}

impl fmt::Display for JulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {:.6}", self.jd())
    }
}

impl Add<f64> for JulianDate {
    type Output = JulianDate;

    fn add(self, days: f64) -> Self::Output {
        self.add_days(days)
    }
}

impl Sub<f64> for JulianDate {
    type Output = JulianDate;

    fn sub(self, days: f64) -> Self::Output {
        self.add_days(-days)
    }
}

impl Sub<JulianDate> for JulianDate {
    type Output = f64;

    /// Difference in days
    fn sub(self, other: JulianDate) -> Self::Output {
        (self.date1 - other.date1) + (self.date2 - other.date2)
    }
}

impl From<f64> for JulianDate {
    fn from(jd: f64) -> Self {
        JulianDate::from_jd(jd)
    }
}

/// Approximate Delta-T (TT - UT1)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeltaT {
    /// Delta-T in seconds
    pub seconds: f64,
    /// Extra seconds to add outside 1955..=2005 when working with the
    /// "Five Millennium Canon of Solar Eclipses" lunar acceleration
    pub correction: f64,
}

/// NASA polynomial expressions for Delta-T, valid for years -1999..=3000
pub fn delta_t(year: i32, month: u32) -> Result<DeltaT> {
    if !(-1999..=3000).contains(&year) || !(1..=12).contains(&month) {
        return Err(EphemerisError::InvalidDate(format!(
            "Delta-T is only tabulated for years -1999..=3000 (got {year}-{month:02})"
        )));
    }

    let y = year as f64 + (month as f64 - 0.5) / 12.0;
    let long_term = |y: f64| {
        let u = (y - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u
    };

    let seconds = match year {
        i32::MIN..=-501 => long_term(y),
        -500..=499 => {
            let u = y / 100.0;
            10583.6
                + (-1014.41
                    + (33.78311
                        + (-5.952053 + (-0.1798452 + (0.022174192 + 0.0090316521 * u) * u) * u)
                            * u)
                        * u)
                    * u
        }
        500..=1599 => {
            let u = (y - 1000.0) / 100.0;
            1574.2
                + (-556.01
                    + (71.23472
                        + (0.319781 + (-0.8503463 + (-0.005050998 + 0.0083572073 * u) * u) * u)
                            * u)
                        * u)
                    * u
        }
        1600..=1699 => {
            let u = y - 1600.0;
            120.0 + (-0.9808 + (-0.01532 + u / 7129.0) * u) * u
        }
        1700..=1799 => {
            let u = y - 1700.0;
            8.83 + (0.1603 + (-0.0059285 + (0.00013336 - u / 1_174_000.0) * u) * u) * u
        }
        1800..=1859 => {
            let u = y - 1800.0;
            13.72
                + (-0.332447
                    + (0.0068612
                        + (0.0041116
                            + (-0.00037436
                                + (0.0000121272 + (-0.0000001699 + 0.000000000875 * u) * u)
                                    * u)
                                * u)
                            * u)
                        * u)
                    * u
        }
        1860..=1899 => {
            let u = y - 1860.0;
            7.62 + (0.5737
                + (-0.251754 + (0.01680668 + (-0.0004473624 + u / 233_174.0) * u) * u) * u)
                * u
        }
        1900..=1919 => {
            let u = y - 1900.0;
            -2.79 + (1.494119 + (-0.0598939 + (0.0061966 - 0.000197 * u) * u) * u) * u
        }
        1920..=1940 => {
            let u = y - 1920.0;
            21.20 + (0.84493 + (-0.076100 + 0.0020936 * u) * u) * u
        }
        1941..=1960 => {
            let u = y - 1950.0;
            29.07 + (0.407 + (-1.0 / 233.0 + u / 2547.0) * u) * u
        }
        1961..=1985 => {
            let u = y - 1975.0;
            45.45 + (1.067 + (-1.0 / 260.0 - u / 718.0) * u) * u
        }
        1986..=2004 => {
            let u = y - 2000.0;
            63.86
                + (0.3345
                    + (-0.060374 + (0.0017275 + (0.000651814 + 0.00002373599 * u) * u) * u) * u)
                    * u
        }
        2005..=2049 => {
            let u = y - 2000.0;
            62.92 + (0.32217 + 0.005589 * u) * u
        }
        2050..=2149 => long_term(y) - 0.5628 * (2150.0 - y),
        _ => long_term(y),
    };

    let correction = if (1955..=2005).contains(&year) {
        0.0
    } else {
        -0.000012932 * (y - 1955.0) * (y - 1955.0)
    };

    Ok(DeltaT {
        seconds,
        correction,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    #[test]
    fn test_j2000_calendar() {
        let jd = JulianDate::from_calendar(2000, 1, 1).unwrap();
        assert_eq!(jd.jd(), 2_451_544.5);

        let cal = JulianDate::j2000().to_calendar().unwrap();
        assert_eq!((cal.year, cal.month, cal.day), (2000, 1, 1));
        assert_abs_diff_eq!(cal.day_fraction, 0.5, epsilon = 1e-12);
    }

    #[rstest]
    #[case(1957, 10, 4, 2_436_115.5)]
    #[case(1987, 6, 19, 2_446_965.5)]
    #[case(2000, 2, 29, 2_451_603.5)]
    #[case(2100, 1, 24, 2_488_092.5)]
    fn test_calendar_round_trip(
        #[case] year: i32,
        #[case] month: u32,
        #[case] day: u32,
        #[case] expected: f64,
    ) {
        let jd = JulianDate::from_calendar(year, month, day).unwrap();
        assert_eq!(jd.jd(), expected);

        let cal = jd.to_calendar().unwrap();
        assert_eq!((cal.year, cal.month, cal.day), (year, month, day));
        assert_abs_diff_eq!(cal.day_fraction, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_invalid_calendar_dates() {
        assert!(JulianDate::from_calendar(2000, 13, 1).is_err());
        assert!(JulianDate::from_calendar(2000, 0, 1).is_err());
        assert!(JulianDate::from_calendar(2000, 1, 32).is_err());
        assert!(JulianDate::from_calendar(-4800, 1, 1)
            .unwrap_err()
            .is_invalid_date());
        assert!(JulianDate::from_jd(-40_000.0).to_calendar().is_err());
    }

    #[test]
    fn test_two_part_arithmetic() {
        let jd = JulianDate::new(2_451_545.0, 0.25);
        assert_abs_diff_eq!(jd.days_since_j2000(), 0.25, epsilon = 1e-15);
        assert_abs_diff_eq!(jd.centuries(), 0.25 / 36_525.0, epsilon = 1e-18);

        let later = jd + 1.5;
        assert_eq!(later.date1, jd.date1);
        assert_abs_diff_eq!(later - jd, 1.5, epsilon = 1e-15);
        assert_abs_diff_eq!((later - 1.5).jd(), jd.jd(), epsilon = 1e-9);
    }

    #[test]
    fn test_chrono_round_trip() {
        let dt = NaiveDate::from_ymd_opt(2010, 2, 18)
            .unwrap()
            .and_hms_opt(20, 20, 0)
            .unwrap();
        let jd = JulianDate::from_datetime(&dt).unwrap();
        assert_abs_diff_eq!(jd.jd(), 2_455_246.347_222_2, epsilon = 1e-6);
        assert_eq!(jd.to_datetime().unwrap(), dt);
    }

    #[test]
    fn test_delta_t() {
        let dt = delta_t(2000, 1).unwrap();
        assert_abs_diff_eq!(dt.seconds, 63.87, epsilon = 0.01);
        assert_eq!(dt.correction, 0.0);

        let dt = delta_t(1900, 1).unwrap();
        assert_abs_diff_eq!(dt.seconds, -2.72, epsilon = 0.1);
        assert!(dt.correction < 0.0);

        assert!(delta_t(3001, 1).is_err());
        assert!(delta_t(2000, 13).is_err());
    }
}
