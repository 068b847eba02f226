//! Ron-Vondrák velocity series
//!
//! Amplitudes in 1e-8 AU/day, referred to the equator and equinox of
//! J2000. Rows are ordered by decreasing amplitude.

use super::{EmbSecularTerm, LunarVelocityTerm, PlanetaryVelocityTerm};

/// Heliocentric motion of the Earth-Moon barycentre, terms in the Earth's
/// mean longitude with secular amplitudes. Each axis holds
/// [sin, sin·t, sin·t², cos, cos·t, cos·t²].
#[rustfmt::skip]
pub(super) const EMB_SECULAR: [EmbSecularTerm; 3] = [
    EmbSecularTerm {
        l_ea: 1,
        x: [-1719919.0, -2.0, 0.0, -25.0, 0.0, 0.0],
        y: [25.0, -13.0, -1.0, 1578094.0, 156.0, 0.0],
        z: [10.0, 32.0, 1.0, 684187.0, -358.0, 0.0],
    },
    EmbSecularTerm {
        l_ea: 2,
        x: [6434.0, 141.0, 0.0, 28007.0, -107.0, -1.0],
        y: [25697.0, -95.0, -1.0, -5904.0, -130.0, 0.0],
        z: [11141.0, -48.0, 0.0, -2559.0, -55.0, 0.0],
    },
    EmbSecularTerm {
        l_ea: 3,
        x: [486.0, -5.0, 0.0, -236.0, -4.0, 0.0],
        y: [-216.0, -4.0, 0.0, -446.0, 5.0, 0.0],
        z: [-94.0, -2.0, 0.0, -193.0, 2.0, 0.0],
    },
];

/// Heliocentric motion of the Earth-Moon barycentre, planetary terms.
/// Multipliers of Me, Ve, Ea, Ma, Ju, Sa; each axis [sin, cos].
#[rustfmt::skip]
pub(super) const EMB_PLANETARY: [PlanetaryVelocityTerm; 77] = [
    PlanetaryVelocityTerm { args: [0, 0, 2, 0, -1, 0], x: [31.0, 1.0], y: [1.0, -28.0], z: [0.0, -12.0] },
    PlanetaryVelocityTerm { args: [0, 0, 3, -8, 3, 0], x: [8.0, -28.0], y: [25.0, 8.0], z: [11.0, 3.0] },
    PlanetaryVelocityTerm { args: [0, 0, 5, -8, 3, 0], x: [8.0, -28.0], y: [-25.0, -8.0], z: [-11.0, -3.0] },
    PlanetaryVelocityTerm { args: [0, 1, 0, 0, 0, 0], x: [-25.0, 0.0], y: [0.0, 23.0], z: [0.0, 10.0] },
    PlanetaryVelocityTerm { args: [0, 2, -1, 0, 0, 0], x: [21.0, 0.0], y: [0.0, -19.0], z: [0.0, -8.0] },
    PlanetaryVelocityTerm { args: [0, 0, 1, 0, -2, 0], x: [16.0, 0.0], y: [0.0, 15.0], z: [1.0, 7.0] },
    PlanetaryVelocityTerm { args: [0, 0, 1, 0, 1, 0], x: [11.0, -1.0], y: [-1.0, -10.0], z: [-1.0, -5.0] },
    PlanetaryVelocityTerm { args: [0, 2, -2, 0, 0, 0], x: [0.0, -11.0], y: [-10.0, 0.0], z: [-4.0, 0.0] },
    PlanetaryVelocityTerm { args: [0, 0, 1, 0, -1, 0], x: [-11.0, -2.0], y: [-2.0, 9.0], z: [-1.0, 4.0] },
    PlanetaryVelocityTerm { args: [0, 0, 4, 0, 0, 0], x: [-7.0, -8.0], y: [-8.0, 6.0], z: [-3.0, 3.0] },
    PlanetaryVelocityTerm { args: [0, 0, 3, 0, -2, 0], x: [-10.0, 0.0], y: [0.0, 9.0], z: [0.0, 4.0] },
    PlanetaryVelocityTerm { args: [0, 1, -2, 0, 0, 0], x: [-9.0, 0.0], y: [0.0, -9.0], z: [0.0, -4.0] },
    PlanetaryVelocityTerm { args: [0, 2, -3, 0, 0, 0], x: [-9.0, 0.0], y: [0.0, -8.0], z: [0.0, -4.0] },
    PlanetaryVelocityTerm { args: [0, 2, -3, 0, 0, 0], x: [0.0, -9.0], y: [8.0, 0.0], z: [3.0, 0.0] },
    PlanetaryVelocityTerm { args: [0, 0, 3, -2, 0, 0], x: [8.0, 0.0], y: [0.0, -8.0], z: [0.0, -3.0] },
    PlanetaryVelocityTerm { args: [0, 8, -12, 0, 0, 0], x: [-4.0, -7.0], y: [-6.0, 4.0], z: [-3.0, 2.0] },
    PlanetaryVelocityTerm { args: [0, 8, -14, 0, 0, 0], x: [-4.0, -7.0], y: [6.0, -4.0], z: [3.0, -2.0] },
    PlanetaryVelocityTerm { args: [0, 0, 0, 2, 0, 0], x: [-6.0, -5.0], y: [-4.0, 5.0], z: [-2.0, 2.0] },
    PlanetaryVelocityTerm { args: [0, 3, -4, 0, 0, 0], x: [-1.0, -1.0], y: [-2.0, -7.0], z: [1.0, -4.0] },
    PlanetaryVelocityTerm { args: [0, 0, 2, 0, -2, 0], x: [4.0, -6.0], y: [-5.0, -4.0], z: [-2.0, -2.0] },
    PlanetaryVelocityTerm { args: [0, 3, -3, 0, 0, 0], x: [0.0, -7.0], y: [-6.0, 0.0], z: [-3.0, 0.0] },
    PlanetaryVelocityTerm { args: [0, 0, 2, -2, 0, 0], x: [5.0, -5.0], y: [-4.0, -5.0], z: [-2.0, -2.0] },
    PlanetaryVelocityTerm { args: [0, 3, -6, 0, 0, 0], x: [4.0, -1.0], y: [1.0, 4.0], z: [0.0, 2.0] },
    PlanetaryVelocityTerm { args: [0, 0, 0, 0, 1, 0], x: [-4.0, 0.0], y: [0.0, 3.0], z: [0.0, 1.0] },
    PlanetaryVelocityTerm { args: [0, 0, 9, -16, 4, 5], x: [-1.0, -3.0], y: [-3.0, 1.0], z: [-1.0, 0.0] },
    PlanetaryVelocityTerm { args: [0, 0, 7, -16, 4, 5], x: [-1.0, -3.0], y: [3.0, -1.0], z: [1.0, 0.0] },
    PlanetaryVelocityTerm { args: [0, 0, 1, 0, -3, 0], x: [3.0, 1.0], y: [0.0, 3.0], z: [0.0, 1.0] },
    PlanetaryVelocityTerm { args: [0, 0, 2, 0, -3, 0], x: [3.0, -1.0], y: [-1.0, 1.0], z: [0.0, 1.0] },
    PlanetaryVelocityTerm { args: [0, 4, -5, 0, 0, 0], x: [-2.0, 0.0], y: [0.0, -3.0], z: [0.0, -1.0] },
    PlanetaryVelocityTerm { args: [0, 0, 1, -4, 0, 0], x: [1.0, -2.0], y: [2.0, 1.0], z: [1.0, 1.0] },
    PlanetaryVelocityTerm { args: [0, 0, 3, 0, -3, 0], x: [-2.0, -1.0], y: [0.0, 2.0], z: [0.0, 1.0] },
    PlanetaryVelocityTerm { args: [0, 0, 3, -4, 0, 0], x: [1.0, -2.0], y: [-2.0, -1.0], z: [-1.0, 0.0] },
    PlanetaryVelocityTerm { args: [0, 3, -2, 0, 0, 0], x: [2.0, 0.0], y: [0.0, -2.0], z: [0.0, -1.0] },
    PlanetaryVelocityTerm { args: [0, 0, 4, -4, 0, 0], x: [2.0, -1.0], y: [-1.0, -2.0], z: [0.0, -1.0] },
    PlanetaryVelocityTerm { args: [0, 0, 2, 0, 0, -1], x: [2.0, 0.0], y: [0.0, -2.0], z: [0.0, -1.0] },
    PlanetaryVelocityTerm { args: [0, 0, 3, -3, 0, 0], x: [2.0, -1.0], y: [-1.0, -1.0], z: [0.0, -1.0] },
    PlanetaryVelocityTerm { args: [0, 0, 3, 0, -1, 0], x: [0.0, -2.0], y: [-1.0, 0.0], z: [-1.0, 0.0] },
    PlanetaryVelocityTerm { args: [0, 0, 1, 0, 0, 1], x: [0.0, -1.0], y: [-1.0, 0.0], z: [-1.0, 0.0] },
    PlanetaryVelocityTerm { args: [0, 0, 0, 0, 2, 0], x: [-1.0, -1.0], y: [-1.0, 1.0], z: [-1.0, 0.0] },
    PlanetaryVelocityTerm { args: [0, 0, 2, -1, 0, 0], x: [1.0, 0.0], y: [0.0, -1.0], z: [0.0, -1.0] },
    PlanetaryVelocityTerm { args: [0, 0, 1, 0, 0, -1], x: [0.0, -1.0], y: [-1.0, 0.0], z: [-1.0, 0.0] },
    PlanetaryVelocityTerm { args: [0, 5, -6, 0, 0, 0], x: [-2.0, 0.0], y: [0.0, -1.0], z: [0.0, 0.0] },
    PlanetaryVelocityTerm { args: [0, 0, 1, -3, 0, 0], x: [1.0, -1.0], y: [1.0, 1.0], z: [0.0, 0.0] },
    PlanetaryVelocityTerm { args: [0, 3, -6, 4, 0, 0], x: [-1.0, 1.0], y: [1.0, 1.0], z: [0.0, 0.0] },
    PlanetaryVelocityTerm { args: [0, 3, -8, 4, 0, 0], x: [-1.0, 1.0], y: [-1.0, -1.0], z: [0.0, 0.0] },
    PlanetaryVelocityTerm { args: [0, 0, 4, -5, 0, 0], x: [1.0, -1.0], y: [-1.0, 0.0], z: [0.0, 0.0] },
    PlanetaryVelocityTerm { args: [0, 1, 1, 0, 0, 0], x: [0.0, 1.0], y: [1.0, 0.0], z: [0.0, 0.0] },
    PlanetaryVelocityTerm { args: [0, 3, -5, 0, 0, 0], x: [0.0, -1.0], y: [1.0, 0.0], z: [0.0, 0.0] },
    PlanetaryVelocityTerm { args: [0, 6, -7, 0, 0, 0], x: [-1.0, 0.0], y: [0.0, -1.0], z: [0.0, 0.0] },
    PlanetaryVelocityTerm { args: [0, 10, -9, 0, 0, 0], x: [1.0, 0.0], y: [0.0, -1.0], z: [0.0, 0.0] },
    PlanetaryVelocityTerm { args: [0, 0, 2, -8, 3, 0], x: [1.0, 0.0], y: [0.0, 1.0], z: [0.0, 0.0] },
    PlanetaryVelocityTerm { args: [0, 0, 6, -8, 3, 0], x: [-1.0, 0.0], y: [0.0, 1.0], z: [0.0, 0.0] },
    PlanetaryVelocityTerm { args: [0, 0, 1, -2, 0, 0], x: [1.0, 0.0], y: [0.0, 1.0], z: [0.0, 0.0] },
    PlanetaryVelocityTerm { args: [0, 0, 9, -15, 0, 0], x: [-1.0, 0.0], y: [0.0, 1.0], z: [0.0, 0.0] },
    PlanetaryVelocityTerm { args: [0, 0, 1, 0, -2, 5], x: [1.0, 0.0], y: [0.0, -1.0], z: [0.0, 0.0] },
    PlanetaryVelocityTerm { args: [0, 0, 1, 0, 2, -5], x: [-1.0, 0.0], y: [0.0, 1.0], z: [0.0, 0.0] },
    PlanetaryVelocityTerm { args: [0, 0, 1, 0, 0, -2], x: [1.0, 0.0], y: [0.0, 1.0], z: [0.0, 0.0] },
    PlanetaryVelocityTerm { args: [0, 0, 0, 1, 0, 0], x: [-1.0, 0.0], y: [0.0, 1.0], z: [0.0, 0.0] },
    PlanetaryVelocityTerm { args: [0, 0, 7, -15, 0, 0], x: [-1.0, 0.0], y: [0.0, -1.0], z: [0.0, 0.0] },
    PlanetaryVelocityTerm { args: [0, 2, 0, 0, 0, 0], x: [0.0, -1.0], y: [-1.0, 0.0], z: [0.0, 0.0] },
    PlanetaryVelocityTerm { args: [0, 0, 2, 0, 2, -5], x: [0.0, 1.0], y: [1.0, 0.0], z: [0.0, 0.0] },
    PlanetaryVelocityTerm { args: [2, 0, -2, 0, 0, 0], x: [0.0, 1.0], y: [-1.0, 0.0], z: [0.0, 0.0] },
    PlanetaryVelocityTerm { args: [0, 0, 9, -19, 0, 3], x: [0.0, 1.0], y: [-1.0, 0.0], z: [0.0, 0.0] },
    PlanetaryVelocityTerm { args: [0, 0, 11, -19, 0, 3], x: [0.0, 1.0], y: [1.0, 0.0], z: [0.0, 0.0] },
    PlanetaryVelocityTerm { args: [0, 0, 2, -5, 0, 0], x: [0.0, -1.0], y: [1.0, 0.0], z: [0.0, 0.0] },
    PlanetaryVelocityTerm { args: [0, 5, -9, 0, 0, 0], x: [0.0, 1.0], y: [-1.0, 0.0], z: [0.0, 0.0] },
    PlanetaryVelocityTerm { args: [0, 11, -10, 0, 0, 0], x: [1.0, 0.0], y: [0.0, 0.0], z: [0.0, 0.0] },
    PlanetaryVelocityTerm { args: [0, 4, -4, 0, 0, 0], x: [0.0, 1.0], y: [0.0, 0.0], z: [0.0, 0.0] },
    PlanetaryVelocityTerm { args: [0, 0, 2, 0, -4, 0], x: [1.0, 0.0], y: [0.0, 0.0], z: [0.0, 0.0] },
    PlanetaryVelocityTerm { args: [0, 0, 5, -6, 0, 0], x: [0.0, -1.0], y: [0.0, 0.0], z: [0.0, 0.0] },
    PlanetaryVelocityTerm { args: [0, 5, -5, 0, 0, 0], x: [0.0, 1.0], y: [0.0, 0.0], z: [0.0, 0.0] },
    PlanetaryVelocityTerm { args: [0, 0, 4, 0, -3, 0], x: [-1.0, 0.0], y: [0.0, 0.0], z: [0.0, 0.0] },
    PlanetaryVelocityTerm { args: [0, 4, -6, 0, 0, 0], x: [0.0, -1.0], y: [0.0, 0.0], z: [0.0, 0.0] },
    PlanetaryVelocityTerm { args: [0, 5, -7, 0, 0, 0], x: [0.0, 0.0], y: [1.0, 0.0], z: [0.0, 0.0] },
    PlanetaryVelocityTerm { args: [0, 0, 4, 0, -2, 0], x: [0.0, 0.0], y: [1.0, 0.0], z: [0.0, 0.0] },
    PlanetaryVelocityTerm { args: [0, 0, 3, 0, -4, 0], x: [0.0, 0.0], y: [0.0, 1.0], z: [0.0, 0.0] },
    PlanetaryVelocityTerm { args: [0, 7, -8, 0, 0, 0], x: [0.0, 0.0], y: [0.0, -1.0], z: [0.0, 0.0] },
];

/// Motion of the Sun about the barycentre. Multipliers of Ve, Ea, Ju, Sa,
/// Ur, Ne; each axis [sin, cos].
#[rustfmt::skip]
pub(super) const SUN_BARYCENTRIC: [PlanetaryVelocityTerm; 17] = [
    PlanetaryVelocityTerm { args: [0, 0, 1, 0, 0, 0], x: [719.0, 0.0], y: [6.0, -660.0], z: [-15.0, -283.0] },
    PlanetaryVelocityTerm { args: [0, 0, 0, 1, 0, 0], x: [159.0, 0.0], y: [2.0, -147.0], z: [-6.0, -61.0] },
    PlanetaryVelocityTerm { args: [0, 0, 2, 0, 0, 0], x: [34.0, -9.0], y: [-8.0, -31.0], z: [-4.0, -13.0] },
    PlanetaryVelocityTerm { args: [0, 0, 0, 0, 1, 0], x: [17.0, 0.0], y: [0.0, -16.0], z: [0.0, -7.0] },
    PlanetaryVelocityTerm { args: [0, 0, 0, 0, 0, 1], x: [16.0, 0.0], y: [1.0, -15.0], z: [-3.0, -6.0] },
    PlanetaryVelocityTerm { args: [0, 0, 0, 2, 0, 0], x: [0.0, -9.0], y: [-8.0, 0.0], z: [-3.0, 1.0] },
    PlanetaryVelocityTerm { args: [1, 0, 0, 0, 0, 0], x: [6.0, 0.0], y: [0.0, -6.0], z: [0.0, -2.0] },
    PlanetaryVelocityTerm { args: [0, 1, 0, 0, 0, 0], x: [5.0, 0.0], y: [0.0, -5.0], z: [0.0, -2.0] },
    PlanetaryVelocityTerm { args: [0, 0, 3, 0, 0, 0], x: [2.0, -1.0], y: [-1.0, -2.0], z: [0.0, -1.0] },
    PlanetaryVelocityTerm { args: [0, 0, 1, -5, 0, 0], x: [-2.0, 0.0], y: [0.0, -2.0], z: [0.0, -1.0] },
    PlanetaryVelocityTerm { args: [0, 0, 3, -5, 0, 0], x: [-2.0, 0.0], y: [0.0, 2.0], z: [0.0, 1.0] },
    PlanetaryVelocityTerm { args: [1, 0, 0, 0, 0, -2], x: [-1.0, 0.0], y: [0.0, -1.0], z: [0.0, 0.0] },
    PlanetaryVelocityTerm { args: [0, 0, 0, 3, 0, 0], x: [-1.0, 0.0], y: [0.0, 1.0], z: [0.0, 0.0] },
    PlanetaryVelocityTerm { args: [0, 0, 2, -6, 0, 0], x: [1.0, 0.0], y: [0.0, 1.0], z: [0.0, 0.0] },
    PlanetaryVelocityTerm { args: [0, 0, 2, -4, 0, 0], x: [1.0, 0.0], y: [0.0, -1.0], z: [0.0, 0.0] },
    PlanetaryVelocityTerm { args: [0, 0, 0, 0, 2, 0], x: [-1.0, 0.0], y: [0.0, 1.0], z: [0.0, 0.0] },
    PlanetaryVelocityTerm { args: [0, 0, 1, 0, 0, -2], x: [1.0, 0.0], y: [0.0, 0.0], z: [0.0, 0.0] },
];

/// Motion of the Earth about the Earth-Moon barycentre. Multipliers of w,
/// D, l', l, F; x sin, y cos, z cos.
#[rustfmt::skip]
pub(super) const EARTH_EMB: [LunarVelocityTerm; 17] = [
    LunarVelocityTerm { args: [1, 0, 0, 0, 0], x_sin: 715.0, y_cos: -656.0, z_cos: -285.0 },
    LunarVelocityTerm { args: [0, 0, 0, 0, 1], x_sin: 0.0, y_cos: 26.0, z_cos: -59.0 },
    LunarVelocityTerm { args: [1, 0, 0, 1, 0], x_sin: 39.0, y_cos: -36.0, z_cos: -16.0 },
    LunarVelocityTerm { args: [1, 2, 0, -1, 0], x_sin: 8.0, y_cos: -7.0, z_cos: -3.0 },
    LunarVelocityTerm { args: [1, -2, 0, 0, 0], x_sin: 5.0, y_cos: -5.0, z_cos: -2.0 },
    LunarVelocityTerm { args: [1, 2, 0, 0, 0], x_sin: 4.0, y_cos: -4.0, z_cos: -2.0 },
    LunarVelocityTerm { args: [0, 0, 0, 1, 1], x_sin: 0.0, y_cos: 1.0, z_cos: -3.0 },
    LunarVelocityTerm { args: [1, -2, 0, 1, 0], x_sin: -2.0, y_cos: 2.0, z_cos: 1.0 },
    LunarVelocityTerm { args: [1, 0, 0, 2, 0], x_sin: 2.0, y_cos: -2.0, z_cos: -1.0 },
    LunarVelocityTerm { args: [0, 2, 0, 0, -1], x_sin: 0.0, y_cos: 1.0, z_cos: -2.0 },
    LunarVelocityTerm { args: [1, 0, 0, 0, -2], x_sin: -1.0, y_cos: 1.0, z_cos: 1.0 },
    LunarVelocityTerm { args: [1, 0, 1, 0, 0], x_sin: -1.0, y_cos: 1.0, z_cos: 0.0 },
    LunarVelocityTerm { args: [1, 0, -1, 0, 0], x_sin: 1.0, y_cos: -1.0, z_cos: 0.0 },
    LunarVelocityTerm { args: [1, 4, 0, -2, 0], x_sin: 1.0, y_cos: -1.0, z_cos: 0.0 },
    LunarVelocityTerm { args: [1, -2, 0, 2, 0], x_sin: -1.0, y_cos: 1.0, z_cos: 0.0 },
    LunarVelocityTerm { args: [1, 2, 0, 1, 0], x_sin: 1.0, y_cos: 0.0, z_cos: 0.0 },
    LunarVelocityTerm { args: [0, 2, 0, -1, 1], x_sin: 0.0, y_cos: 0.0, z_cos: -1.0 },
];
