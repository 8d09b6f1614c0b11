//! Scalar helpers shared by generation, AI, and physics.

use std::f64::consts::{PI, TAU};

use rand::Rng;

/// Uniform draw from `[min, max)`. Returns `min` for an empty or inverted range
/// instead of panicking.
pub fn rand_range<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    if max > min {
        rng.gen_range(min..max)
    } else {
        min
    }
}

/// Clamp `v` into `[lo, hi]`. If the range is inverted, `lo` wins.
pub fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    v.min(hi).max(lo)
}

/// Wrap an angle into `(-PI, PI]`.
pub fn normalize_angle(a: f64) -> f64 {
    let wrapped = (a + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

/// Absolute smallest difference between two angles, in `[0, PI]`.
pub fn angle_between(a: f64, b: f64) -> f64 {
    normalize_angle(a - b).abs()
}
