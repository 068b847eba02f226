//! Lunar ephemeris
//!
//! Geocentric position of the Moon from a truncated series laid out like
//! ELP 2000-82B. The main problem carries the terms of Meeus chapter 47 in
//! the Delaunay arguments, good to about 10" in longitude. Earth-figure
//! perturbations in the precessing mean longitude ζ and planetary
//! perturbations in the planets' mean longitudes follow. Longitude is
//! counted from the mean lunar longitude `w`, which is referred to the fixed
//! equinox of J2000, so the result lies on the ecliptic and equinox of J2000.
//!
//! Also provides the illuminated fraction of the disk and the dates of the
//! principal phases (Meeus, chapters 48 and 49).

mod elp_data;

use crate::constants::{ASEC2RAD, DEG2RAD, J2000, OBLIQUITY_J2000_ASEC, TAU};
use crate::coordinates::frames::{EquatorialJ2000, Geocentric, Km, Position};
use crate::coordinates::{Cartesian3, LunarEcliptic};
use crate::framelib::{ecliptic_to_equator_matrix, Ecliptic};
use crate::fundamentals::{delaunay_arguments, fundamental_argument, planetary_longitudes, Argument};
use crate::time::JulianDate;
use elp_data::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Mean Earth-Moon distance of the main problem, km
const MEAN_DISTANCE_KM: f64 = 385_000.56;

/// Main-problem term: multipliers of D, l', l, F and an amplitude
#[derive(Debug, Clone, Copy)]
pub(crate) struct MainTerm {
    pub args: [i8; 4],
    pub amp: f64,
}

/// Perturbation term in ζ, D, l', l, F with a phase, amplitude in arcseconds
#[derive(Debug, Clone, Copy)]
pub(crate) struct PerturbationTerm {
    pub args: [i8; 5],
    pub phi: f64,
    pub amp: f64,
}

/// Planetary term in Me, Ve, T, Ma, Ju, Sa, Ur, Ne, D, l', l, F
#[derive(Debug, Clone, Copy)]
pub(crate) struct PlanetaryTerm {
    pub args: [i8; 12],
    pub phi: f64,
    pub amp: f64,
}

/// Arguments shared by every series at one epoch
struct LunarArguments {
    t: f64,
    /// D, l', l, F
    delaunay: [f64; 4],
    zeta: f64,
    w: f64,
    /// Me, Ve, T, Ma, Ju, Sa, Ur, Ne, D, l', l, F
    planetary: [f64; 12],
    /// Decrease of the Earth's orbital eccentricity
    e: f64,
}

impl LunarArguments {
    fn at(t: f64) -> Self {
        let [l, lp, f, d, _] = delaunay_arguments(t);
        let lon = planetary_longitudes(t);

        // Mean longitude of the Earth in the lunar theory; not the IERS
        // expression used by the nutation series
        let earth = (361_679.220_59
            + (129_597_742.275_8 + (-0.020_2 + (0.000_009 + 0.000_000_15 * t) * t) * t) * t)
            * ASEC2RAD;
        // Mean longitude of the Moon referred to the equinox of date
        let zeta = (785_939.955_71 + 1_732_564_372.832_64 * t) * ASEC2RAD;

        LunarArguments {
            t,
            delaunay: [d, lp, l, f],
            zeta,
            w: fundamental_argument(Argument::LongitudeMoon, t),
            planetary: [
                lon[0], lon[1], earth, lon[3], lon[4], lon[5], lon[6], lon[7], d, lp, l, f,
            ],
            e: 1.0 - (0.002_516 + 0.000_007_4 * t) * t,
        }
    }

    fn main_phase(&self, term: &MainTerm) -> f64 {
        term.args
            .iter()
            .zip(self.delaunay.iter())
            .map(|(&k, &arg)| f64::from(k) * arg)
            .sum()
    }

    /// Amplitude scale for terms involving the solar anomaly
    fn eccentricity_factor(&self, term: &MainTerm) -> f64 {
        match term.args[1].abs() {
            0 => 1.0,
            1 => self.e,
            _ => self.e * self.e,
        }
    }
}

fn sum_main_sine(args: &LunarArguments, table: &[MainTerm]) -> f64 {
    table.iter().rev().fold(0.0, |acc, term| {
        acc + term.amp * args.eccentricity_factor(term) * args.main_phase(term).sin()
    })
}

fn sum_main_cosine(args: &LunarArguments, table: &[MainTerm]) -> f64 {
    table.iter().rev().fold(0.0, |acc, term| {
        acc + term.amp * args.eccentricity_factor(term) * args.main_phase(term).cos()
    })
}

fn sum_perturbations(args: &LunarArguments, table: &[PerturbationTerm]) -> f64 {
    let values = [
        args.zeta,
        args.delaunay[0],
        args.delaunay[1],
        args.delaunay[2],
        args.delaunay[3],
    ];
    table.iter().rev().fold(0.0, |acc, term| {
        let x: f64 = term
            .args
            .iter()
            .zip(values.iter())
            .map(|(&k, &v)| f64::from(k) * v)
            .sum();
        acc + term.amp * (x + term.phi).sin()
    })
}

fn sum_planetary(args: &LunarArguments, table: &[PlanetaryTerm]) -> f64 {
    table.iter().rev().fold(0.0, |acc, term| {
        let x: f64 = term
            .args
            .iter()
            .zip(args.planetary.iter())
            .map(|(&k, &v)| f64::from(k) * v)
            .sum();
        acc + term.amp * (x + term.phi).sin()
    })
}

/// Geocentric ecliptic coordinates of the Moon and its distance in km
///
/// The frame is the ecliptic and equinox of J2000. `tdb` may be TT.
pub fn moon_position(tdb: JulianDate) -> (Ecliptic, f64) {
    let args = LunarArguments::at(tdb.centuries());

    // Main problem in 1e-6 degree and metres, perturbations in arcseconds;
    // each group is scaled to radians only once it is complete
    let main_lon = sum_main_sine(&args, &MAIN_LONGITUDE);
    let main_lat = sum_main_sine(&args, &MAIN_LATITUDE);
    let main_dist = sum_main_cosine(&args, &MAIN_DISTANCE);

    let pert_lon = sum_perturbations(&args, &FIGURE_LONGITUDE)
        + sum_planetary(&args, &PLANETARY_LONGITUDE);
    let pert_lat = sum_perturbations(&args, &FIGURE_LATITUDE)
        + sum_planetary(&args, &PLANETARY_LATITUDE);

    let lon = args.w + main_lon * 1e-6 * DEG2RAD + pert_lon * ASEC2RAD;
    let lat = main_lat * 1e-6 * DEG2RAD + pert_lat * ASEC2RAD;
    let distance = MEAN_DISTANCE_KM + main_dist / 1000.0;

    log::trace!("moon at T = {:.10}: lon {:.8} lat {:.8} r {:.3}", args.t, lon, lat, distance);
    (Ecliptic::new(lon.rem_euclid(TAU), lat), distance)
}

/// Geocentric rectangular ecliptic J2000 position of the Moon, km
pub fn moon_rectangular(tdb: JulianDate) -> LunarEcliptic {
    let (ecl, distance) = moon_position(tdb);
    LunarEcliptic::new(Cartesian3::from_spherical(ecl.lon, ecl.lat, distance))
}

/// Rotate a lunar position onto the equator of J2000
///
/// The lunar theory is referred to the mean ecliptic of J2000, so the
/// rotation is a plain one through the J2000 mean obliquity. VSOP87 output
/// must use `planetlib::vsop87_ecliptic_to_equator` instead.
pub fn elp_ecliptic_to_equator(position: &LunarEcliptic) -> Position<EquatorialJ2000, Geocentric, Km> {
    position.rotate_into(&ecliptic_to_equator_matrix(OBLIQUITY_J2000_ASEC * ASEC2RAD))
}

/// Fraction of the Moon's disk that is illuminated, in [0, 1]
///
/// Uses the phase angle from the low-precision expressions of Meeus (48.4),
/// which is good to about 0.01.
pub fn illuminated_fraction(tdb: JulianDate) -> f64 {
    let t = tdb.centuries();
    let d = 297.850_192_1
        + (445_267.111_403_4 + (-0.001_881_9 + (1.0 / 545_868.0 - t / 113_065_000.0) * t) * t) * t;
    let m = 357.529_109_2 + (35_999.050_290_9 + (-0.000_153_6 + t / 24_490_000.0) * t) * t;
    let n = 134.963_396_4
        + (477_198.867_505_5 + (0.008_741_4 + (1.0 / 69_699.0 - t / 14_712_000.0) * t) * t) * t;

    let sin_deg = |x: f64| (x * DEG2RAD).sin();
    let i = 180.0 - d - 6.289 * sin_deg(n) + 2.100 * sin_deg(m)
        - 1.274 * sin_deg(2.0 * d - n)
        - 0.658 * sin_deg(2.0 * d)
        - 0.214 * sin_deg(2.0 * n)
        - 0.110 * sin_deg(d);
    (1.0 + (i * DEG2RAD).cos()) / 2.0
}

/// The four principal phases of the Moon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoonPhase {
    NewMoon,
    FirstQuarter,
    FullMoon,
    LastQuarter,
}

impl MoonPhase {
    /// Offset of the phase within a lunation, as a fraction of k
    fn offset(&self) -> f64 {
        match self {
            MoonPhase::NewMoon => 0.0,
            MoonPhase::FirstQuarter => 0.25,
            MoonPhase::FullMoon => 0.5,
            MoonPhase::LastQuarter => 0.75,
        }
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MoonPhase::NewMoon => "New Moon",
            MoonPhase::FirstQuarter => "First Quarter",
            MoonPhase::FullMoon => "Full Moon",
            MoonPhase::LastQuarter => "Last Quarter",
        };
        f.write_str(name)
    }
}

/// Periodic terms of the fourteen additional corrections (Meeus 49)
const PHASE_A0: [f64; 14] = [
    299.77, 251.88, 251.83, 349.42, 84.66, 141.74, 207.14, 154.84, 34.52, 207.19, 291.34, 161.72,
    239.56, 331.55,
];
const PHASE_A1: [f64; 14] = [
    0.107_408, 0.016_321, 26.651_886, 36.412_478, 18.206_239, 53.303_771, 2.453_732, 7.306_860,
    27.261_239, 0.121_824, 1.844_379, 24.198_154, 25.513_099, 3.592_518,
];
const PHASE_AC: [f64; 14] = [
    325.0, 165.0, 164.0, 126.0, 110.0, 62.0, 60.0, 56.0, 47.0, 42.0, 40.0, 37.0, 35.0, 23.0,
];

/// JDE of the given phase for lunation number `k` (k = 0 at the New Moon of
/// 2000 January 6, quarter phases at k + 0.25 etc.)
pub fn phase_for_lunation(k: f64, phase: MoonPhase) -> f64 {
    let t = k / 1236.85;
    let jde = 2_451_550.097_66
        + 29.530_588_861 * k
        + (0.000_154_37 + (-0.000_000_150 + 0.000_000_000_73 * t) * t) * t * t;
    let e = 1.0 - (0.002_516 + 0.000_007_4 * t) * t;

    let m = (2.5534 + 29.105_356_70 * k - (0.000_001_4 + 0.000_000_11 * t) * t * t) * DEG2RAD;
    let n = (201.5643
        + 385.816_935_28 * k
        + (0.010_758_2 + (0.000_012_38 - 0.000_000_058 * t) * t) * t * t)
        * DEG2RAD;
    let f = (160.7108
        + 390.670_502_84 * k
        + (-0.001_611_8 + (-0.000_002_27 + 0.000_000_011 * t) * t) * t * t)
        * DEG2RAD;
    let o = (124.7746 - 1.563_755_88 * k + (0.002_067_2 + 0.000_002_15 * t) * t * t) * DEG2RAD;

    let mut c1;
    let mut c2 = 0.0;
    match phase {
        MoonPhase::NewMoon | MoonPhase::FullMoon => {
            c1 = if phase == MoonPhase::NewMoon {
                -0.40720 * n.sin() + 0.17241 * e * m.sin() + 0.01608 * (2.0 * n).sin()
                    + 0.01039 * (2.0 * f).sin()
                    + 0.00739 * e * (n - m).sin()
                    - 0.00514 * e * (n + m).sin()
                    + 0.00208 * e * e * (2.0 * m).sin()
            } else {
                -0.40614 * n.sin() + 0.17302 * e * m.sin() + 0.01614 * (2.0 * n).sin()
                    + 0.01043 * (2.0 * f).sin()
                    + 0.00734 * e * (n - m).sin()
                    - 0.00515 * e * (n + m).sin()
                    + 0.00209 * e * e * (2.0 * m).sin()
            };
            c1 += -0.00111 * (n - 2.0 * f).sin() - 0.00057 * (n + 2.0 * f).sin()
                + 0.00056 * e * (2.0 * n + m).sin()
                - 0.00042 * (3.0 * n).sin()
                + (0.00042 * (m + 2.0 * f).sin() + 0.00038 * (m - 2.0 * f).sin()
                    - 0.00024 * (2.0 * n - m).sin())
                    * e
                - 0.00017 * o.sin()
                - 0.00007 * (n + 2.0 * m).sin()
                + 0.00004 * ((2.0 * n - 2.0 * f).sin() + (3.0 * m).sin())
                + 0.00003
                    * ((n + m - 2.0 * f).sin() + (2.0 * n + 2.0 * f).sin()
                        - (n + m + 2.0 * f).sin()
                        + (n - m + 2.0 * f).sin())
                - 0.00002 * ((n - m - 2.0 * f).sin() + (3.0 * n + m).sin() - (4.0 * n).sin());
        }
        MoonPhase::FirstQuarter | MoonPhase::LastQuarter => {
            c1 = -0.62801 * n.sin() + (0.17172 * m.sin() - 0.01183 * (n + m).sin()) * e
                + 0.00862 * (2.0 * n).sin()
                + 0.00804 * (2.0 * f).sin()
                + (0.00454 * (n - m).sin() + 0.00204 * e * (2.0 * m).sin()) * e
                - 0.0018 * (n - 2.0 * f).sin()
                - 0.0007 * (n + 2.0 * f).sin()
                - 0.0004 * (3.0 * n).sin()
                + (-0.00034 * (2.0 * n - m).sin() + 0.00032 * (m + 2.0 * f).sin()
                    + 0.00032 * (m - 2.0 * f).sin()
                    - 0.00028 * e * (n + 2.0 * m).sin()
                    + 0.00027 * (2.0 * n + m).sin())
                    * e
                - 0.00017 * o.sin()
                - 0.00005 * (n - m - 2.0 * f).sin()
                + 0.00004 * ((2.0 * n + 2.0 * f).sin() - (n + m + 2.0 * f).sin() + (n - 2.0 * m).sin())
                + 0.00003 * ((n + m - 2.0 * f).sin() + (3.0 * m).sin())
                + 0.00002
                    * ((2.0 * n - 2.0 * f).sin() + (n - m + 2.0 * f).sin() - (3.0 * n + m).sin());

            c2 = 0.00306 - 0.00038 * e * m.cos() + 0.00026 * n.cos()
                - 0.00002 * ((n - m).cos() - (n + m).cos() - (2.0 * f).cos());
            if phase == MoonPhase::LastQuarter {
                c2 = -c2;
            }
        }
    }

    let mut c3 = 0.0;
    for i in 0..PHASE_A0.len() {
        let a0 = if i == 0 {
            PHASE_A0[0] - 0.009_173 * t * t
        } else {
            PHASE_A0[i]
        };
        c3 += ((a0 + PHASE_A1[i] * k) * DEG2RAD).sin() * PHASE_AC[i];
    }

    jde + c1 + c2 + c3 / 1e6
}

/// Dynamical time of the first `phase` on or after `tdb`
pub fn next_phase(tdb: JulianDate, phase: MoonPhase) -> JulianDate {
    let start = tdb.jd();
    let mut k = ((start - J2000) * 12.3685 / 365.25).floor() + phase.offset();
    let mut jde = phase_for_lunation(k, phase);
    // The mean-phase estimate of k can land one lunation early
    while jde < start {
        k += 1.0;
        jde = phase_for_lunation(k, phase);
    }
    JulianDate::from_jd(jde)
}
