//! Pure easing functions
//!
//! Every easing function takes a normalized progress `x` in `[0, 1]` and
//! returns a zero-argument closure producing the blend weight, so the weight
//! can be evaluated lazily by [`calc`]. [`linear2`] and [`calc`] evaluate
//! directly.
//!
//! All curves satisfy `f(0) = 0` and `f(1) = 1` except [`triangle`] and
//! [`parabola`], which peak at `x = 0.5` and return to zero (used for
//! breathing and idle cycles).

use std::f64::consts::PI;

const BOUNCE_N1: f64 = 7.5625;
const BOUNCE_D1: f64 = 2.75;

/// Blend from `a` to `b` by the weight produced by `weight`
pub fn calc(a: f64, b: f64, weight: impl Fn() -> f64) -> f64 {
    a + (b - a) * weight()
}

/// Direct linear interpolation between `min` and `max`
pub fn linear2(min: f64, max: f64, val: f64) -> f64 {
    min + (max - min) * val
}

pub fn linear(x: f64) -> impl Fn() -> f64 {
    move || x
}

pub fn squared(x: f64) -> impl Fn() -> f64 {
    move || x * x
}

pub fn sqrt(x: f64) -> impl Fn() -> f64 {
    move || x.sqrt()
}

pub fn quadratic_ease_out(x: f64) -> impl Fn() -> f64 {
    move || 1.0 - (1.0 - x) * (1.0 - x)
}

/// `(4x(1-x))^k`; `k` controls how sharp the peak is (2 is the usual choice)
pub fn parabola(x: f64, k: f64) -> impl Fn() -> f64 {
    move || (4.0 * x * (1.0 - x)).powf(k)
}

/// 0 at both ends, 1 at the midpoint
pub fn triangle(x: f64) -> impl Fn() -> f64 {
    move || 1.0 - 2.0 * (x - 0.5).abs()
}

pub fn elastic_out(x: f64) -> impl Fn() -> f64 {
    move || (-13.0 * (x + 1.0) * (PI * 0.5)).sin() * 2.0f64.powf(-10.0 * x) + 1.0
}

/// Four-segment piecewise bounce
pub fn bounce_out(x: f64) -> impl Fn() -> f64 {
    move || {
        if 1.0 / BOUNCE_D1 > x {
            BOUNCE_N1 * x * x
        } else if 2.0 / BOUNCE_D1 > x {
            let x = x - 1.5 / BOUNCE_D1;
            BOUNCE_N1 * x * x + 0.75
        } else if 2.5 / BOUNCE_D1 > x {
            let x = x - 2.25 / BOUNCE_D1;
            BOUNCE_N1 * x * x + 0.9375
        } else {
            let x = x - 2.625 / BOUNCE_D1;
            BOUNCE_N1 * x * x + 0.984375
        }
    }
}

/// Blend of `squared` into `sqrt`, weighted linearly by `x`
pub fn smoothe_step(x: f64) -> impl Fn() -> f64 {
    move || calc(squared(x)(), sqrt(x)(), linear(x))
}

/// Blend of `squared` into `quadratic_ease_out`, weighted linearly by `x`
pub fn smoothe_step2(x: f64) -> impl Fn() -> f64 {
    move || calc(squared(x)(), quadratic_ease_out(x)(), linear(x))
}
