// Copyright 2025 the Drafter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::{Mul, MulAssign};

use kurbo::Affine;

use crate::Vector2;

/// A 3×3 homogeneous matrix stored in row‑major order.
///
/// Read as
///
/// ```text
/// | a  b  tx |
/// | c  d  ty |
/// | *  *  *  |
/// ```
///
/// a point maps as `x' = a·x + b·y + tx`, `y' = c·x + d·y + ty`. The bottom
/// row does not take part in point application; it is kept so that general
/// 3×3 products stay well defined.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix3 {
    data: [f32; 9],
}

impl Matrix3 {
    /// The all‑zero matrix.
    pub const ZERO: Self = Self { data: [0.0; 9] };

    /// The identity matrix.
    pub const IDENTITY: Self = Self {
        data: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
    };

    /// Creates a matrix from its 9 entries in row‑major order.
    #[inline]
    pub const fn from_row_major(data: [f32; 9]) -> Self {
        Self { data }
    }

    /// Creates a matrix from three rows.
    #[inline]
    pub const fn from_rows(r0: [f32; 3], r1: [f32; 3], r2: [f32; 3]) -> Self {
        Self {
            data: [r0[0], r0[1], r0[2], r1[0], r1[1], r1[2], r2[0], r2[1], r2[2]],
        }
    }

    /// The 9 entries in row‑major order.
    #[inline]
    pub const fn data(&self) -> &[f32; 9] {
        &self.data
    }

    /// The three rows.
    #[inline]
    pub const fn rows(&self) -> [[f32; 3]; 3] {
        let d = &self.data;
        [[d[0], d[1], d[2]], [d[3], d[4], d[5]], [d[6], d[7], d[8]]]
    }

    /// The entry at `row`, `col`. Both indices must be below 3.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row * 3 + col]
    }

    /// The identity matrix.
    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// A translation by `(x, y)`.
    #[inline]
    pub const fn translation(x: f32, y: f32) -> Self {
        Self {
            data: [1.0, 0.0, x, 0.0, 1.0, y, 0.0, 0.0, 1.0],
        }
    }

    /// A counter‑clockwise rotation by `angle` radians.
    ///
    /// Sine and cosine are evaluated through `kurbo`, so they follow its
    /// `std`/`libm` selection.
    #[inline]
    pub fn rotation(angle: f32) -> Self {
        Self::from_affine(Affine::rotate(f64::from(angle)))
    }

    /// A non‑uniform scale by `(x, y)` about the origin.
    #[inline]
    pub const fn scale(x: f32, y: f32) -> Self {
        Self {
            data: [x, 0.0, 0.0, 0.0, y, 0.0, 0.0, 0.0, 1.0],
        }
    }

    /// Determinant of the linear 2×2 part.
    #[inline]
    pub fn determinant(&self) -> f32 {
        let [a, b, _, c, d, ..] = self.data;
        a * d - b * c
    }

    /// Inverse of the affine part, with bottom row `[0, 0, 1]`.
    ///
    /// A singular matrix produces non‑finite entries rather than an error.
    pub fn inverse(&self) -> Self {
        let [a, b, tx, c, d, ty, ..] = self.data;
        let inv_det = 1.0 / self.determinant();
        let ia = d * inv_det;
        let ib = -b * inv_det;
        let ic = -c * inv_det;
        let id = a * inv_det;
        Self::from_rows(
            [ia, ib, -(ia * tx + ib * ty)],
            [ic, id, -(ic * tx + id * ty)],
            [0.0, 0.0, 1.0],
        )
    }

    /// Returns `true` if every entry is finite.
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }

    /// Applies the affine part to a point.
    #[inline]
    pub fn apply(&self, p: Vector2) -> Vector2 {
        Vector2::new(
            self.data[0] * p.x + self.data[1] * p.y + self.data[2],
            self.data[3] * p.x + self.data[4] * p.y + self.data[5],
        )
    }

    /// Converts to a `kurbo` affine, dropping the bottom row.
    pub fn to_affine(&self) -> Affine {
        let [a, b, tx, c, d, ty, ..] = self.data;
        Affine::new([
            f64::from(a),
            f64::from(c),
            f64::from(b),
            f64::from(d),
            f64::from(tx),
            f64::from(ty),
        ])
    }

    /// Builds a matrix from a `kurbo` affine.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "kurbo works in f64; narrowing to the rasterizer's f32 is intended"
    )]
    pub fn from_affine(affine: Affine) -> Self {
        let [a, b, c, d, e, f] = affine.as_coeffs();
        Self::from_rows(
            [a as f32, c as f32, e as f32],
            [b as f32, d as f32, f as f32],
            [0.0, 0.0, 1.0],
        )
    }
}

impl Default for Matrix3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Matrix3 {
    type Output = Self;

    /// Row·column product: `(self * rhs)` applies `rhs` first.
    fn mul(self, rhs: Self) -> Self {
        let mut out = Self::ZERO;
        for i in 0..9 {
            let (row, col) = (i / 3, i % 3);
            out.data[i] = (0..3)
                .map(|j| self.data[row * 3 + j] * rhs.data[j * 3 + col])
                .sum();
        }
        out
    }
}

impl MulAssign for Matrix3 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Mul<Vector2> for Matrix3 {
    type Output = Vector2;

    #[inline]
    fn mul(self, rhs: Vector2) -> Vector2 {
        self.apply(rhs)
    }
}

impl From<Affine> for Matrix3 {
    fn from(affine: Affine) -> Self {
        Self::from_affine(affine)
    }
}

impl From<Matrix3> for Affine {
    fn from(m: Matrix3) -> Self {
        m.to_affine()
    }
}
