// Copyright 2025 the Drafter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `sqrt`

use crate::{Matrix3, Vector2};

/// A named affine transform from one 2D space into another.
///
/// Primitive sizes (widths, radii) are specified in world units and turned
/// into pixels with [`Transform::scale_factor`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Transform {
    matrix: Matrix3,
}

impl Transform {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        matrix: Matrix3::IDENTITY,
    };

    /// The identity transform.
    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Wraps a matrix.
    #[inline]
    pub const fn from_matrix(matrix: Matrix3) -> Self {
        Self { matrix }
    }

    /// A translation by `(x, y)`.
    #[inline]
    pub const fn translation(x: f32, y: f32) -> Self {
        Self::from_matrix(Matrix3::translation(x, y))
    }

    /// A counter‑clockwise rotation by `angle` radians.
    #[inline]
    pub fn rotation(angle: f32) -> Self {
        Self::from_matrix(Matrix3::rotation(angle))
    }

    /// A uniform scale by `s`.
    #[inline]
    pub const fn scale(s: f32) -> Self {
        Self::from_matrix(Matrix3::scale(s, s))
    }

    /// The underlying matrix.
    #[inline]
    pub const fn matrix(&self) -> Matrix3 {
        self.matrix
    }

    /// Maps a point through this transform.
    #[inline]
    pub fn apply(&self, p: Vector2) -> Vector2 {
        self.matrix.apply(p)
    }

    /// Uniform scale factor of the linear part: `sqrt(|det|)`.
    ///
    /// Exact for rotation combined with a uniform scale; for a non‑uniform
    /// scale this is the geometric mean of the two axis factors.
    #[inline]
    pub fn scale_factor(&self) -> f32 {
        self.matrix.determinant().abs().sqrt()
    }

    /// Returns a transform that applies `self` first, then `next`.
    #[inline]
    #[must_use]
    pub fn then(self, next: Self) -> Self {
        Self::from_matrix(next.matrix * self.matrix)
    }

    /// Inverse transform. Singular transforms produce non‑finite entries.
    #[inline]
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self::from_matrix(self.matrix.inverse())
    }
}

impl From<Matrix3> for Transform {
    fn from(matrix: Matrix3) -> Self {
        Self::from_matrix(matrix)
    }
}

impl From<kurbo::Affine> for Transform {
    fn from(affine: kurbo::Affine) -> Self {
        Self::from_matrix(Matrix3::from_affine(affine))
    }
}

#[cfg(test)]
mod tests {
    use super::Transform;
    use crate::{Matrix3, Vector2};

    #[test]
    fn scale_factor_of_similarity() {
        assert_eq!(Transform::identity().scale_factor(), 1.0);
        assert_eq!(Transform::translation(5.0, 9.0).scale_factor(), 1.0);
        assert_eq!(Transform::scale(3.0).scale_factor(), 3.0);
        let t = Transform::scale(2.0).then(Transform::rotation(0.8));
        assert!((t.scale_factor() - 2.0).abs() < 1e-5);
        // Mirroring does not flip the sign.
        let m = Transform::from_matrix(Matrix3::scale(-2.0, 2.0));
        assert_eq!(m.scale_factor(), 2.0);
    }

    #[test]
    fn then_applies_self_first() {
        let t = Transform::scale(2.0).then(Transform::translation(1.0, 0.0));
        assert_eq!(t.apply(Vector2::new(1.0, 1.0)), Vector2::new(3.0, 2.0));
    }

    #[test]
    fn inverse_roundtrip() {
        let t = Transform::translation(10.0, -4.0).then(Transform::scale(0.25));
        let p = Vector2::new(3.0, 8.0);
        let back = t.inverse().apply(t.apply(p));
        assert!((back - p).length() < 1e-5);
    }
}
