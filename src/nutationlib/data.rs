//! Nutation series coefficients
//!
//! Amplitudes are in units of 0.1 microarcsecond. Rows are ordered by
//! decreasing amplitude; the evaluator sums them in reverse.

use super::{LunisolarTerm, PlanetaryTerm};

/// Lunisolar terms: multipliers of l, l', F, D, Ω, then
/// ψ sin, ψ sin·t, ψ cos, ε cos, ε cos·t, ε sin
#[rustfmt::skip]
pub(super) const LUNISOLAR: [LunisolarTerm; 77] = [
    LunisolarTerm { args: [ 0,  0,  0,  0,  1], psi: [-172064161.0, -174666.0, 33386.0], eps: [92052331.0, 9086.0, 15377.0] },
    LunisolarTerm { args: [ 0,  0,  2, -2,  2], psi: [-13170906.0, -1675.0, -13696.0], eps: [5730336.0, -3015.0, -4587.0] },
    LunisolarTerm { args: [ 0,  0,  2,  0,  2], psi: [-2276413.0, -234.0, 2796.0], eps: [978459.0, -485.0, 1374.0] },
    LunisolarTerm { args: [ 0,  0,  0,  0,  2], psi: [2074554.0, 207.0, -698.0], eps: [-897492.0, 470.0, -291.0] },
    LunisolarTerm { args: [ 0,  1,  0,  0,  0], psi: [1475877.0, -3633.0, 11817.0], eps: [73871.0, -184.0, -1924.0] },
    LunisolarTerm { args: [ 0,  1,  2, -2,  2], psi: [-516821.0, 1226.0, -524.0], eps: [224386.0, -677.0, -174.0] },
    LunisolarTerm { args: [ 1,  0,  0,  0,  0], psi: [711159.0, 73.0, -872.0], eps: [-6750.0, 0.0, 358.0] },
    LunisolarTerm { args: [ 0,  0,  2,  0,  1], psi: [-387298.0, -367.0, 380.0], eps: [200728.0, 18.0, 318.0] },
    LunisolarTerm { args: [ 1,  0,  2,  0,  2], psi: [-301461.0, -36.0, 816.0], eps: [129025.0, -63.0, 367.0] },
    LunisolarTerm { args: [ 0, -1,  2, -2,  2], psi: [215829.0, -494.0, 111.0], eps: [-95929.0, 299.0, 132.0] },
    LunisolarTerm { args: [ 0,  0,  2, -2,  1], psi: [128227.0, 137.0, 181.0], eps: [-68982.0, -9.0, 39.0] },
    LunisolarTerm { args: [-1,  0,  2,  0,  2], psi: [123457.0, 11.0, 19.0], eps: [-53311.0, 32.0, -4.0] },
    LunisolarTerm { args: [-1,  0,  0,  2,  0], psi: [156994.0, 10.0, -168.0], eps: [-1235.0, 0.0, 82.0] },
    LunisolarTerm { args: [ 1,  0,  0,  0,  1], psi: [63110.0, 63.0, 27.0], eps: [-33228.0, 0.0, -9.0] },
    LunisolarTerm { args: [-1,  0,  0,  0,  1], psi: [-57976.0, -63.0, -189.0], eps: [31429.0, 0.0, -75.0] },
    LunisolarTerm { args: [-1,  0,  2,  2,  2], psi: [-59641.0, -11.0, 149.0], eps: [25543.0, -11.0, 66.0] },
    LunisolarTerm { args: [ 1,  0,  2,  0,  1], psi: [-51613.0, -42.0, 129.0], eps: [26366.0, 0.0, 78.0] },
    LunisolarTerm { args: [-2,  0,  2,  0,  1], psi: [45893.0, 50.0, 31.0], eps: [-24236.0, -10.0, 20.0] },
    LunisolarTerm { args: [ 0,  0,  0,  2,  0], psi: [63384.0, 11.0, -150.0], eps: [-1220.0, 0.0, 29.0] },
    LunisolarTerm { args: [ 0,  0,  2,  2,  2], psi: [-38571.0, -1.0, 158.0], eps: [16452.0, -11.0, 68.0] },
    LunisolarTerm { args: [ 0, -2,  2, -2,  2], psi: [32481.0, 0.0, 0.0], eps: [-13870.0, 0.0, 0.0] },
    LunisolarTerm { args: [-2,  0,  0,  2,  0], psi: [-47722.0, 0.0, -18.0], eps: [477.0, 0.0, -25.0] },
    LunisolarTerm { args: [ 2,  0,  2,  0,  2], psi: [-31046.0, -1.0, 131.0], eps: [13238.0, -11.0, 59.0] },
    LunisolarTerm { args: [ 1,  0,  2, -2,  2], psi: [28593.0, 0.0, -1.0], eps: [-12338.0, 10.0, -3.0] },
    LunisolarTerm { args: [-1,  0,  2,  0,  1], psi: [20441.0, 21.0, 10.0], eps: [-10758.0, 0.0, -3.0] },
    LunisolarTerm { args: [ 2,  0,  0,  0,  0], psi: [29243.0, 0.0, -74.0], eps: [-609.0, 0.0, 13.0] },
    LunisolarTerm { args: [ 0,  0,  2,  0,  0], psi: [25887.0, 0.0, -66.0], eps: [-550.0, 0.0, 11.0] },
    LunisolarTerm { args: [ 0,  1,  0,  0,  1], psi: [-14053.0, -25.0, 79.0], eps: [8551.0, -2.0, -45.0] },
    LunisolarTerm { args: [-1,  0,  0,  2,  1], psi: [15164.0, 10.0, 11.0], eps: [-8001.0, 0.0, -1.0] },
    LunisolarTerm { args: [ 0,  2,  2, -2,  2], psi: [-15794.0, 72.0, -16.0], eps: [6850.0, -42.0, -5.0] },
    LunisolarTerm { args: [ 0,  0, -2,  2,  0], psi: [21783.0, 0.0, 13.0], eps: [-167.0, 0.0, 13.0] },
    LunisolarTerm { args: [ 1,  0,  0, -2,  1], psi: [-12873.0, -10.0, -37.0], eps: [6953.0, 0.0, -14.0] },
    LunisolarTerm { args: [ 0, -1,  0,  0,  1], psi: [-12654.0, 11.0, 63.0], eps: [6415.0, 0.0, 26.0] },
    LunisolarTerm { args: [-1,  0,  2,  2,  1], psi: [-10204.0, 0.0, 25.0], eps: [5222.0, 0.0, 15.0] },
    LunisolarTerm { args: [ 0,  2,  0,  0,  0], psi: [16707.0, -85.0, -10.0], eps: [168.0, -1.0, 10.0] },
    LunisolarTerm { args: [ 1,  0,  2,  2,  2], psi: [-7691.0, 0.0, 44.0], eps: [3268.0, 0.0, 19.0] },
    LunisolarTerm { args: [-2,  0,  2,  0,  0], psi: [-11024.0, 0.0, -14.0], eps: [104.0, 0.0, 2.0] },
    LunisolarTerm { args: [ 0,  1,  2,  0,  2], psi: [7566.0, -21.0, -11.0], eps: [-3250.0, 0.0, -5.0] },
    LunisolarTerm { args: [ 0,  0,  2,  2,  1], psi: [-6637.0, -11.0, 25.0], eps: [3353.0, 0.0, 14.0] },
    LunisolarTerm { args: [ 0, -1,  2,  0,  2], psi: [-7141.0, 21.0, 8.0], eps: [3070.0, 0.0, 4.0] },
    LunisolarTerm { args: [ 0,  0,  0,  2,  1], psi: [-6302.0, -11.0, 2.0], eps: [3272.0, 0.0, 4.0] },
    LunisolarTerm { args: [ 1,  0,  2, -2,  1], psi: [5800.0, 10.0, 2.0], eps: [-3045.0, 0.0, -1.0] },
    LunisolarTerm { args: [ 2,  0,  2, -2,  2], psi: [6443.0, 0.0, -7.0], eps: [-2768.0, 0.0, -4.0] },
    LunisolarTerm { args: [-2,  0,  0,  2,  1], psi: [-5774.0, -11.0, -15.0], eps: [3041.0, 0.0, -5.0] },
    LunisolarTerm { args: [ 2,  0,  2,  0,  1], psi: [-5350.0, 0.0, 21.0], eps: [2695.0, 0.0, 12.0] },
    LunisolarTerm { args: [ 0, -1,  2, -2,  1], psi: [-4752.0, -11.0, -3.0], eps: [2719.0, 0.0, -3.0] },
    LunisolarTerm { args: [ 0,  0,  0, -2,  1], psi: [-4940.0, -11.0, -21.0], eps: [2720.0, 0.0, -9.0] },
    LunisolarTerm { args: [-1, -1,  0,  2,  0], psi: [7350.0, 0.0, -8.0], eps: [-51.0, 0.0, 4.0] },
    LunisolarTerm { args: [ 2,  0,  0, -2,  1], psi: [4065.0, 0.0, 6.0], eps: [-2206.0, 0.0, 1.0] },
    LunisolarTerm { args: [ 1,  0,  0,  2,  0], psi: [6579.0, 0.0, -24.0], eps: [-199.0, 0.0, 2.0] },
    LunisolarTerm { args: [ 0,  1,  2, -2,  1], psi: [3579.0, 0.0, 5.0], eps: [-1900.0, 0.0, 1.0] },
    LunisolarTerm { args: [ 1, -1,  0,  0,  0], psi: [4725.0, 0.0, -6.0], eps: [-41.0, 0.0, 3.0] },
    LunisolarTerm { args: [-2,  0,  2,  0,  2], psi: [-3075.0, 0.0, -2.0], eps: [1313.0, 0.0, -1.0] },
    LunisolarTerm { args: [ 3,  0,  2,  0,  2], psi: [-2904.0, 0.0, 15.0], eps: [1233.0, 0.0, 7.0] },
    LunisolarTerm { args: [ 0, -1,  0,  2,  0], psi: [4348.0, 0.0, -10.0], eps: [-81.0, 0.0, 2.0] },
    LunisolarTerm { args: [ 1, -1,  2,  0,  2], psi: [-2878.0, 0.0, 8.0], eps: [1232.0, 0.0, 4.0] },
    LunisolarTerm { args: [ 0,  0,  0,  1,  0], psi: [-4230.0, 0.0, 5.0], eps: [-20.0, 0.0, -2.0] },
    LunisolarTerm { args: [-1, -1,  2,  2,  2], psi: [-2819.0, 0.0, 7.0], eps: [1207.0, 0.0, 3.0] },
    LunisolarTerm { args: [-1,  0,  2,  0,  0], psi: [-4056.0, 0.0, 5.0], eps: [40.0, 0.0, -2.0] },
    LunisolarTerm { args: [ 0, -1,  2,  2,  2], psi: [-2647.0, 0.0, 11.0], eps: [1129.0, 0.0, 5.0] },
    LunisolarTerm { args: [-2,  0,  0,  0,  1], psi: [-2294.0, 0.0, -10.0], eps: [1266.0, 0.0, -4.0] },
    LunisolarTerm { args: [ 1,  1,  2,  0,  2], psi: [2481.0, 0.0, -7.0], eps: [-1062.0, 0.0, -3.0] },
    LunisolarTerm { args: [ 2,  0,  0,  0,  1], psi: [2179.0, 0.0, -2.0], eps: [-1129.0, 0.0, -2.0] },
    LunisolarTerm { args: [-1,  1,  0,  1,  0], psi: [3276.0, 0.0, 1.0], eps: [-9.0, 0.0, 0.0] },
    LunisolarTerm { args: [ 1,  1,  0,  0,  0], psi: [-3389.0, 0.0, 5.0], eps: [35.0, 0.0, -2.0] },
    LunisolarTerm { args: [ 1,  0,  2,  0,  0], psi: [3339.0, 0.0, -13.0], eps: [-107.0, 0.0, 1.0] },
    LunisolarTerm { args: [-1,  0,  2, -2,  1], psi: [-1987.0, 0.0, -6.0], eps: [1073.0, 0.0, -2.0] },
    LunisolarTerm { args: [ 1,  0,  0,  0,  2], psi: [-1981.0, 0.0, 0.0], eps: [854.0, 0.0, 0.0] },
    LunisolarTerm { args: [-1,  0,  0,  1,  0], psi: [4026.0, 0.0, -353.0], eps: [-553.0, 0.0, -139.0] },
    LunisolarTerm { args: [ 0,  0,  2,  1,  2], psi: [1660.0, 0.0, -5.0], eps: [-710.0, 0.0, -2.0] },
    LunisolarTerm { args: [-1,  0,  2,  4,  2], psi: [-1521.0, 0.0, 9.0], eps: [647.0, 0.0, 4.0] },
    LunisolarTerm { args: [-1,  1,  0,  1,  1], psi: [1314.0, 0.0, 0.0], eps: [-700.0, 0.0, 0.0] },
    LunisolarTerm { args: [ 0, -2,  2, -2,  1], psi: [-1283.0, 0.0, 0.0], eps: [672.0, 0.0, 0.0] },
    LunisolarTerm { args: [ 1,  0,  2,  2,  1], psi: [-1331.0, 0.0, 8.0], eps: [663.0, 0.0, 4.0] },
    LunisolarTerm { args: [-2,  0,  2,  2,  2], psi: [1383.0, 0.0, -2.0], eps: [-594.0, 0.0, -2.0] },
    LunisolarTerm { args: [-1,  0,  0,  0,  2], psi: [1405.0, 0.0, 4.0], eps: [-610.0, 0.0, 2.0] },
    LunisolarTerm { args: [ 1,  1,  2, -2,  2], psi: [1290.0, 0.0, 0.0], eps: [-556.0, 0.0, 0.0] },
];

/// Planetary terms: multipliers of l, l', F, D, Ω, Mercury..Neptune and the
/// general precession, then ψ sin, ψ cos, ε cos, ε sin
///
/// The long-period planetary effects over 1995-2050 are represented by one
/// constant offset row.
#[rustfmt::skip]
pub(super) const PLANETARY: [PlanetaryTerm; 1] = [
    PlanetaryTerm { args: [0; 14], psi: [0.0, -1350.0], eps: [3880.0, 0.0] },
];
