// Copyright 2025 the Drafter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=drafter_raster --heading-base-level=0

//! Drafter Raster: integer rasterization of lines, rectangles, circles and
//! images into a pixel buffer.
//!
//! The crate is built from three pieces:
//! - [`Pixel`]: an 8‑bit RGBA value, convertible from [`peniko::Color`].
//! - [`Image`] and the [`Surface`] trait: the pixel store and the minimal
//!   contract the rasterizer writes through.
//! - [`Graphics`]: the rasterizer. It owns (or borrows) a surface, keeps a
//!   LIFO stack of [`Transform`](drafter_math::Transform)s and exposes the
//!   drawing primitives.
//!
//! ## Minimal example
//!
//! ```rust
//! use drafter_math::Transform;
//! use drafter_raster::{Graphics, Image, Pixel};
//!
//! let mut g = Graphics::new(Image::new(64, 64));
//! g.clear(Pixel::WHITE);
//!
//! // One logical layer: everything inside is scaled by 2 and moved by (8, 8).
//! g.push_transform(Transform::scale(2.0).then(Transform::translation(8.0, 8.0)));
//! g.draw_line(Pixel::BLACK, 0.0, 0.0, 10.0, 5.0);
//! g.draw_rect(Pixel::BLACK, 2.0, 2.0, 6.0, 4.0);
//! g.fill_circle(Pixel::BLACK, 12.0, 12.0, 3.0);
//! g.pop_transform();
//!
//! assert_eq!(g.surface().pixel(8, 8), Some(Pixel::BLACK));
//! ```
//!
//! ## Behavior notes
//!
//! - Every operation is total. Off‑surface pixels are dropped, degenerate
//!   sizes draw what their loops produce (often nothing), and an empty
//!   transform stack behaves as the identity.
//! - Device coordinates derived from floats are truncated toward zero.
//! - Rectangles honor translation and uniform scale only; they are never
//!   rotated.
//! - [`Graphics::draw_image`] writes at device coordinates and ignores the
//!   transform stack.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod graphics;
mod image;
mod pixel;

pub use graphics::Graphics;
pub use image::{Image, ImageError, Surface};
pub use pixel::Pixel;
