//! Coefficient tables for the lunar series
//!
//! Main-problem rows are ordered by decreasing amplitude; the evaluator walks
//! them backwards. Longitude and latitude amplitudes are in 1e-6 degree,
//! distance amplitudes in metres.

use super::{MainTerm, PerturbationTerm, PlanetaryTerm};

const fn m(d: i8, lp: i8, l: i8, f: i8, amp: f64) -> MainTerm {
    MainTerm {
        args: [d, lp, l, f],
        amp,
    }
}

/// Longitude (sine series), multipliers of D, l', l, F
#[rustfmt::skip]
pub(super) const MAIN_LONGITUDE: [MainTerm; 59] = [
    m(0, 0, 1, 0, 6288774.0), m(2, 0, -1, 0, 1274027.0), m(2, 0, 0, 0, 658314.0),
    m(0, 0, 2, 0, 213618.0), m(0, 1, 0, 0, -185116.0), m(0, 0, 0, 2, -114332.0),
    m(2, 0, -2, 0, 58793.0), m(2, -1, -1, 0, 57066.0), m(2, 0, 1, 0, 53322.0),
    m(2, -1, 0, 0, 45758.0), m(0, 1, -1, 0, -40923.0), m(1, 0, 0, 0, -34720.0),
    m(0, 1, 1, 0, -30383.0), m(2, 0, 0, -2, 15327.0), m(0, 0, 1, 2, -12528.0),
    m(0, 0, 1, -2, 10980.0), m(4, 0, -1, 0, 10675.0), m(0, 0, 3, 0, 10034.0),
    m(4, 0, -2, 0, 8548.0), m(2, 1, -1, 0, -7888.0), m(2, 1, 0, 0, -6766.0),
    m(1, 0, -1, 0, -5163.0), m(1, 1, 0, 0, 4987.0), m(2, -1, 1, 0, 4036.0),
    m(2, 0, 2, 0, 3994.0), m(4, 0, 0, 0, 3861.0), m(2, 0, -3, 0, 3665.0),
    m(0, 1, -2, 0, -2689.0), m(2, 0, -1, 2, -2602.0), m(2, -1, -2, 0, 2390.0),
    m(1, 0, 1, 0, -2348.0), m(2, -2, 0, 0, 2236.0), m(0, 1, 2, 0, -2120.0),
    m(0, 2, 0, 0, -2069.0), m(2, -2, -1, 0, 2048.0), m(2, 0, 1, -2, -1773.0),
    m(2, 0, 0, 2, -1595.0), m(4, -1, -1, 0, 1215.0), m(0, 0, 2, 2, -1110.0),
    m(3, 0, -1, 0, -892.0), m(2, 1, 1, 0, -810.0), m(4, -1, -2, 0, 759.0),
    m(0, 2, -1, 0, -713.0), m(2, 2, -1, 0, -700.0), m(2, 1, -2, 0, 691.0),
    m(2, -1, 0, -2, 596.0), m(4, 0, 1, 0, 549.0), m(0, 0, 4, 0, 537.0),
    m(4, -1, 0, 0, 520.0), m(1, 0, -2, 0, -487.0), m(2, 1, 0, -2, -399.0),
    m(0, 0, 2, -2, -381.0), m(1, 1, 1, 0, 351.0), m(3, 0, -2, 0, -340.0),
    m(4, 0, -3, 0, 330.0), m(2, -1, 2, 0, 327.0), m(0, 2, 1, 0, -323.0),
    m(1, 1, -1, 0, 299.0), m(2, 0, 3, 0, 294.0),
];

/// Distance (cosine series), same arguments
#[rustfmt::skip]
pub(super) const MAIN_DISTANCE: [MainTerm; 46] = [
    m(0, 0, 1, 0, -20905355.0), m(2, 0, -1, 0, -3699111.0), m(2, 0, 0, 0, -2955968.0),
    m(0, 0, 2, 0, -569925.0), m(0, 1, 0, 0, 48888.0), m(0, 0, 0, 2, -3149.0),
    m(2, 0, -2, 0, 246158.0), m(2, -1, -1, 0, -152138.0), m(2, 0, 1, 0, -170733.0),
    m(2, -1, 0, 0, -204586.0), m(0, 1, -1, 0, -129620.0), m(1, 0, 0, 0, 108743.0),
    m(0, 1, 1, 0, 104755.0), m(2, 0, 0, -2, 10321.0), m(0, 0, 1, -2, 79661.0),
    m(4, 0, -1, 0, -34782.0), m(0, 0, 3, 0, -23210.0), m(4, 0, -2, 0, -21636.0),
    m(2, 1, -1, 0, 24208.0), m(2, 1, 0, 0, 30824.0), m(1, 0, -1, 0, -8379.0),
    m(1, 1, 0, 0, -16675.0), m(2, -1, 1, 0, -12831.0), m(2, 0, 2, 0, -10445.0),
    m(4, 0, 0, 0, -11650.0), m(2, 0, -3, 0, 14403.0), m(0, 1, -2, 0, -7003.0),
    m(2, -1, -2, 0, 10056.0), m(1, 0, 1, 0, 6322.0), m(2, -2, 0, 0, -9884.0),
    m(0, 1, 2, 0, 5751.0), m(2, -2, -1, 0, -4950.0), m(2, 0, 1, -2, 4130.0),
    m(4, -1, -1, 0, -3958.0), m(3, 0, -1, 0, 3258.0), m(2, 1, 1, 0, 2616.0),
    m(4, -1, -2, 0, -1897.0), m(0, 2, -1, 0, -2117.0), m(2, 2, -1, 0, 2354.0),
    m(4, 0, 1, 0, -1423.0), m(0, 0, 4, 0, -1117.0), m(4, -1, 0, 0, -1571.0),
    m(1, 0, -2, 0, -1739.0), m(0, 0, 2, -2, -4421.0), m(0, 2, 1, 0, 1165.0),
    m(2, 0, -1, -2, 8752.0),
];

/// Latitude (sine series)
#[rustfmt::skip]
pub(super) const MAIN_LATITUDE: [MainTerm; 60] = [
    m(0, 0, 0, 1, 5128122.0), m(0, 0, 1, 1, 280602.0), m(0, 0, 1, -1, 277693.0),
    m(2, 0, 0, -1, 173237.0), m(2, 0, -1, 1, 55413.0), m(2, 0, -1, -1, 46271.0),
    m(2, 0, 0, 1, 32573.0), m(0, 0, 2, 1, 17198.0), m(2, 0, 1, -1, 9266.0),
    m(0, 0, 2, -1, 8822.0), m(2, -1, 0, -1, 8216.0), m(2, 0, -2, -1, 4324.0),
    m(2, 0, 1, 1, 4200.0), m(2, 1, 0, -1, -3359.0), m(2, -1, -1, 1, 2463.0),
    m(2, -1, 0, 1, 2211.0), m(2, -1, -1, -1, 2065.0), m(0, 1, -1, -1, -1870.0),
    m(4, 0, -1, -1, 1828.0), m(0, 1, 0, 1, -1794.0), m(0, 0, 0, 3, -1749.0),
    m(0, 1, -1, 1, -1565.0), m(1, 0, 0, 1, -1491.0), m(0, 1, 1, 1, -1475.0),
    m(0, 1, 1, -1, -1410.0), m(0, 1, 0, -1, -1344.0), m(1, 0, 0, -1, -1335.0),
    m(0, 0, 3, 1, 1107.0), m(4, 0, 0, -1, 1021.0), m(4, 0, -1, 1, 833.0),
    m(0, 0, 1, -3, 777.0), m(4, 0, -2, 1, 671.0), m(2, 0, 0, -3, 607.0),
    m(2, 0, 2, -1, 596.0), m(2, -1, 1, -1, 491.0), m(2, 0, -2, 1, -451.0),
    m(0, 0, 3, -1, 439.0), m(2, 0, 2, 1, 422.0), m(2, 0, -3, -1, 421.0),
    m(2, 1, -1, 1, -366.0), m(2, 1, 0, 1, -351.0), m(4, 0, 0, 1, 331.0),
    m(2, -1, 1, 1, 315.0), m(2, -2, 0, -1, 302.0), m(0, 0, 1, 3, -283.0),
    m(2, 1, 1, -1, -229.0), m(1, 1, 0, -1, 223.0), m(1, 1, 0, 1, 223.0),
    m(0, 1, -2, -1, -220.0), m(2, 1, -1, -1, -220.0), m(1, 0, 1, 1, -185.0),
    m(2, -1, -2, -1, 181.0), m(0, 1, 2, 1, -177.0), m(4, 0, -2, -1, 176.0),
    m(4, -1, -1, -1, 166.0), m(1, 0, 1, -1, -164.0), m(4, 0, 1, -1, 132.0),
    m(1, 0, -1, -1, -119.0), m(4, -1, 0, -1, 115.0), m(2, -2, 0, 1, 107.0),
];

/// Earth-figure perturbations of longitude, arguments zeta, D, l', l, F
pub(super) const FIGURE_LONGITUDE: [PerturbationTerm; 1] = [PerturbationTerm {
    args: [1, 0, 0, 0, -1],
    phi: 0.0,
    amp: 7.0632,
}];

/// Earth-figure perturbations of latitude
pub(super) const FIGURE_LATITUDE: [PerturbationTerm; 4] = [
    PerturbationTerm {
        args: [1, 0, 0, 0, 0],
        phi: 0.0,
        amp: -8.046,
    },
    PerturbationTerm {
        args: [1, 0, 0, 0, 0],
        phi: 1.660_39,
        amp: 1.3752,
    },
    PerturbationTerm {
        args: [1, 0, 0, -1, 0],
        phi: 0.0,
        amp: 0.4572,
    },
    PerturbationTerm {
        args: [1, 0, 0, 1, 0],
        phi: 0.0,
        amp: -0.414,
    },
];

/// Planetary perturbations of longitude, arguments
/// Me, Ve, T, Ma, Ju, Sa, Ur, Ne, D, l', l, F
#[rustfmt::skip]
pub(super) const PLANETARY_LONGITUDE: [PlanetaryTerm; 2] = [
    PlanetaryTerm { args: [0, 18, -16, 0, 0, 0, 0, 0, 0, 0, -1, 0], phi: 0.463_21, amp: 14.2488 },
    PlanetaryTerm { args: [0, 0, 2, 0, -2, 0, 0, 0, 2, 0, -1, 0], phi: 3.143_74, amp: 1.1448 },
];

/// Planetary perturbations of latitude
#[rustfmt::skip]
pub(super) const PLANETARY_LATITUDE: [PlanetaryTerm; 2] = [
    PlanetaryTerm { args: [0, 18, -16, 0, 0, 0, 0, 0, 0, 0, -1, -1], phi: 0.463_21, amp: 0.63 },
    PlanetaryTerm { args: [0, 18, -16, 0, 0, 0, 0, 0, 0, 0, -1, 1], phi: 0.463_21, amp: 0.63 },
];
