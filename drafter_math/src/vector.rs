// Copyright 2025 the Drafter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `sqrt`

/// A 2D point or displacement.
///
/// Points and vectors share one type; which one a value means is decided by
/// the operation it flows into.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector2 {
    /// Horizontal component.
    pub x: f32,
    /// Vertical component.
    pub y: f32,
}

impl Vector2 {
    /// The origin / zero displacement.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a vector from its components.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean length.
    #[inline]
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Returns `true` if both components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Converts to a `kurbo` point.
    #[inline]
    pub fn to_point(self) -> kurbo::Point {
        kurbo::Point::new(f64::from(self.x), f64::from(self.y))
    }

    /// Converts to a `kurbo` vector.
    #[inline]
    pub fn to_vec2(self) -> kurbo::Vec2 {
        kurbo::Vec2::new(f64::from(self.x), f64::from(self.y))
    }
}

impl Add for Vector2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector2 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vector2 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vector2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Vector2 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<f32> for Vector2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl From<(f32, f32)> for Vector2 {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "kurbo works in f64; narrowing to the rasterizer's f32 is intended"
)]
impl From<kurbo::Point> for Vector2 {
    #[inline]
    fn from(p: kurbo::Point) -> Self {
        Self::new(p.x as f32, p.y as f32)
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "kurbo works in f64; narrowing to the rasterizer's f32 is intended"
)]
impl From<kurbo::Vec2> for Vector2 {
    #[inline]
    fn from(v: kurbo::Vec2) -> Self {
        Self::new(v.x as f32, v.y as f32)
    }
}

impl From<Vector2> for kurbo::Point {
    #[inline]
    fn from(v: Vector2) -> Self {
        v.to_point()
    }
}

impl From<Vector2> for kurbo::Vec2 {
    #[inline]
    fn from(v: Vector2) -> Self {
        v.to_vec2()
    }
}

#[cfg(test)]
mod tests {
    use super::Vector2;

    #[test]
    fn arithmetic() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(3.0, -4.0);
        assert_eq!(a + b, Vector2::new(4.0, -2.0));
        assert_eq!(a - b, Vector2::new(-2.0, 6.0));
        assert_eq!(-a, Vector2::new(-1.0, -2.0));
        assert_eq!(b * 0.5, Vector2::new(1.5, -2.0));
        assert_eq!(Vector2::new(3.0, 4.0).length(), 5.0);
    }

    #[test]
    fn kurbo_roundtrip() {
        let v = Vector2::new(1.5, -2.25);
        let p: kurbo::Point = v.into();
        assert_eq!(p, kurbo::Point::new(1.5, -2.25));
        assert_eq!(Vector2::from(p), v);
        assert_eq!(Vector2::from(v.to_vec2()), v);
    }
}
