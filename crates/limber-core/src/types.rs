//! Spatial and common types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Tolerance used by the approximate comparisons on `Vec2`
pub const EPSILON: f64 = 1e-8;

/// A 2D point or displacement
///
/// Arithmetic operators return new values. The in-place methods
/// (`translate`, `subtract`, `scale`, `normalise`, `limit`) mutate and return
/// `&mut Self` so calls can be chained.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    pub const UP: Self = Self { x: 0.0, y: 1.0 };
    pub const RIGHT: Self = Self { x: 1.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Build a vector from an angle (radians) and a magnitude
    pub fn from_polar(angle: f64, magnitude: f64) -> Self {
        Self::new(angle.cos() * magnitude, angle.sin() * magnitude)
    }

    /// Overwrite this vector with `(cos(angle), sin(angle)) * magnitude`
    pub fn set_polar(&mut self, angle: f64, magnitude: f64) -> &mut Self {
        self.x = angle.cos();
        self.y = angle.sin();
        self.scale(magnitude)
    }

    pub fn copy_from(&mut self, other: &Vec2) {
        self.x = other.x;
        self.y = other.y;
    }

    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Angle of the vector in radians, `atan2(y, x)`
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    pub fn distance(&self, other: &Self) -> f64 {
        (*other - *self).magnitude()
    }

    /// In-place add
    pub fn translate(&mut self, other: Vec2) -> &mut Self {
        self.x += other.x;
        self.y += other.y;
        self
    }

    /// In-place subtract
    pub fn subtract(&mut self, other: Vec2) -> &mut Self {
        self.x -= other.x;
        self.y -= other.y;
        self
    }

    /// In-place scale
    pub fn scale(&mut self, value: f64) -> &mut Self {
        self.x *= value;
        self.y *= value;
        self
    }

    /// In-place normalisation. A zero vector is left untouched.
    pub fn normalise(&mut self) -> &mut Self {
        if self.x == 0.0 && self.y == 0.0 {
            return self;
        }
        let inv = 1.0 / self.magnitude();
        self.scale(inv)
    }

    /// Clamp the magnitude to `max`, keeping the direction
    pub fn limit(&mut self, max: f64) -> &mut Self {
        if max * max < self.x * self.x + self.y * self.y {
            self.normalise().scale(max);
        }
        self
    }

    pub fn normalised(&self) -> Self {
        let mut v = *self;
        v.normalise();
        v
    }

    pub fn scaled(&self, value: f64) -> Self {
        Self::new(self.x * value, self.y * value)
    }

    /// Scalar comparison within `EPSILON`
    pub fn is_approximate(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    /// True when both vectors point the same way.
    ///
    /// Only the directions are compared (the dot product of the normalised
    /// vectors is within `EPSILON` of one); magnitudes are ignored, so
    /// `(1, 0)` and `(5, 0)` compare equal. Use `==` for exact equality.
    pub fn same_direction(a: &Vec2, b: &Vec2) -> bool {
        Self::is_approximate(a.normalised().dot(&b.normalised()), 1.0)
    }

    /// Shortest displacement from `v1` to `v2` on a `w` x `h` torus.
    ///
    /// Falls back to the plain difference whenever that is already the
    /// shorter of the two candidates.
    pub fn shortest_torus_delta(v1: &Vec2, v2: &Vec2, w: f64, h: f64) -> Vec2 {
        let cvx = v2.x - v1.x;
        let cvy = v2.y - v1.y;
        let tvx = ((v2.x + w * 0.5) % w) - ((v1.x + w * 0.5) % w);
        let tvy = ((v2.y + h * 0.5) % h) - ((v1.y + h * 0.5) % h);

        if cvx * cvx + cvy * cvy > tvx * tvx + tvy * tvy {
            return Vec2::new(tvx, tvy);
        }

        Vec2::new(cvx, cvy)
    }

    /// Distance between two points on a `w` x `h` torus
    pub fn wrapped_distance(v1: &Vec2, v2: &Vec2, w: f64, h: f64) -> f64 {
        let dx = (v1.x - v2.x).abs();
        let dy = (v1.y - v2.y).abs();
        let lh = dx.min(w - dx);
        let lv = dy.min(h - dy);
        lh.hypot(lv)
    }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;
    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
    }
}

impl MulAssign<f64> for Vec2 {
    fn mul_assign(&mut self, scalar: f64) {
        self.x *= scalar;
        self.y *= scalar;
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

/// RGBA color
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const RED: Self = Self::new(1.0, 0.0, 0.0, 1.0);
    pub const ORANGE: Self = Self::new(1.0, 0.647, 0.0, 1.0);
    pub const YELLOW: Self = Self::new(1.0, 1.0, 0.0, 1.0);
    pub const LIME_GREEN: Self = Self::new(0.196, 0.804, 0.196, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Convert HSL (hue in degrees, saturation and lightness in [0, 1]) to RGB
    pub fn from_hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        let h = hue.rem_euclid(360.0) / 60.0;
        let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let m = lightness - c * 0.5;

        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Self::new(r + m, g + m, b + m, 1.0)
    }

    /// `#rrggbb` hex string (alpha dropped)
    pub fn to_hex_string(&self) -> String {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.r),
            channel(self.g),
            channel(self.b)
        )
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn from_polar_points_along_angle() {
        let v = Vec2::from_polar(FRAC_PI_2, 3.0);
        assert!(v.x.abs() < 1e-12);
        assert!((v.y - 3.0).abs() < 1e-12);
    }

    #[test]
    fn set_polar_overwrites_target() {
        let mut v = Vec2::new(10.0, -4.0);
        v.set_polar(PI, 2.0);
        assert!((v.x + 2.0).abs() < 1e-12);
        assert!(v.y.abs() < 1e-12);
    }

    #[test]
    fn in_place_methods_chain() {
        let mut vector = Vec2::new(1.0, 2.0);
        vector
            .translate(Vec2::new(2.0, 2.0))
            .subtract(Vec2::new(0.0, 1.0))
            .scale(2.0);
        assert_eq!(vector, Vec2::new(6.0, 6.0));
    }

    #[test]
    fn normalise_zero_is_noop() {
        let mut v = Vec2::ZERO;
        v.normalise();
        assert_eq!(v, Vec2::ZERO);
    }

    #[test]
    fn normalise_gives_unit_length() {
        let mut v = Vec2::new(3.0, 4.0);
        v.normalise();
        assert!((v.magnitude() - 1.0).abs() < 1e-12);
        assert!((v.x - 0.6).abs() < 1e-12);
    }

    #[test]
    fn limit_only_shrinks() {
        let mut long = Vec2::new(30.0, 40.0);
        long.limit(5.0);
        assert!((long.magnitude() - 5.0).abs() < 1e-9);

        let mut short = Vec2::new(1.0, 1.0);
        short.limit(5.0);
        assert_eq!(short, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn angle_uses_atan2() {
        assert!((Vec2::new(0.0, -1.0).angle() + FRAC_PI_2).abs() < 1e-12);
        assert!((Vec2::new(-1.0, 0.0).angle() - PI).abs() < 1e-12);
    }

    #[test]
    fn same_direction_ignores_magnitude() {
        let right = Vec2::new(1.0, 0.0);
        assert!(Vec2::same_direction(&right, &Vec2::new(5.0, 0.0)));
        assert!(!Vec2::same_direction(&right, &Vec2::new(0.0, 1.0)));
        assert!(!Vec2::same_direction(&right, &Vec2::new(-1.0, 0.0)));
    }

    #[test]
    fn torus_delta_prefers_wrap_when_shorter() {
        let a = Vec2::new(1.0, 50.0);
        let b = Vec2::new(99.0, 50.0);
        let d = Vec2::shortest_torus_delta(&a, &b, 100.0, 100.0);
        assert!((d.x + 2.0).abs() < 1e-9);
        assert!(d.y.abs() < 1e-9);

        let c = Vec2::new(4.0, 50.0);
        let near = Vec2::shortest_torus_delta(&a, &c, 100.0, 100.0);
        assert!((near.x - 3.0).abs() < 1e-9);
    }

    #[test]
    fn wrapped_distance_takes_short_way_round() {
        let a = Vec2::new(1.0, 1.0);
        let b = Vec2::new(99.0, 98.0);
        let d = Vec2::wrapped_distance(&a, &b, 100.0, 100.0);
        assert!((d - (4.0f64 + 9.0).sqrt()).abs() < 1e-9);
    }

    #[test]
    fn hsl_primary_hues() {
        let red = Color::from_hsl(0.0, 1.0, 0.5);
        assert!((red.r - 1.0).abs() < 1e-6);
        assert!(red.g.abs() < 1e-6 && red.b.abs() < 1e-6);
        let green = Color::from_hsl(120.0, 1.0, 0.5);
        assert!((green.g - 1.0).abs() < 1e-6 && green.r.abs() < 1e-6);
        let blue = Color::from_hsl(240.0, 1.0, 0.5);
        assert!((blue.b - 1.0).abs() < 1e-6 && blue.g.abs() < 1e-6);
    }

    #[test]
    fn hex_string_round_trips_from_hex() {
        assert_eq!(Color::from_hex(0x11aa22).to_hex_string(), "#11aa22");
    }
}
