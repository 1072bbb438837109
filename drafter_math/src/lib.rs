// Copyright 2025 the Drafter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drafter Math: the small 2D linear algebra kit behind the Drafter rasterizer.
//!
//! This crate provides:
//! - [`Vector2`]: a 2D point / displacement in `f32`.
//! - [`Matrix3`]: a row‑major 3×3 homogeneous matrix with named affine
//!   builders (identity, translation, rotation, scale).
//! - [`Transform`]: a thin wrapper over [`Matrix3`] that also answers "how
//!   many pixels is one world unit" through [`Transform::scale_factor`].
//!
//! Composition follows standard matrix convention: applying `a * b` to a
//! point applies `b` first, then `a`.
//!
//! ## Minimal example
//!
//! ```rust
//! use drafter_math::{Matrix3, Transform, Vector2};
//!
//! // Scale by 2, then move right by 10.
//! let m = Matrix3::translation(10.0, 0.0) * Matrix3::scale(2.0, 2.0);
//! let p = m * Vector2::new(1.0, 1.0);
//! assert_eq!(p, Vector2::new(12.0, 2.0));
//!
//! let t = Transform::from_matrix(m);
//! assert_eq!(t.scale_factor(), 2.0);
//! ```
//!
//! Every matrix built by a named constructor keeps its bottom row equal to
//! `[0, 0, 1]`, and products of such matrices keep it too. Nothing here
//! traps degenerate input: NaN and infinities propagate through the math.
//!
//! Conversions to and from [`kurbo::Point`], [`kurbo::Vec2`] and
//! [`kurbo::Affine`] are provided for interop with the wider ecosystem.
//!
//! This crate is `no_std`.

#![no_std]

mod matrix;
mod transform;
mod vector;

pub use matrix::Matrix3;
pub use transform::Transform;
pub use vector::Vector2;
