// Copyright 2025 the Drafter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::Pixel;

/// A pixel sink that [`Graphics`](crate::Graphics) rasterizes into.
///
/// Implementations must be total: writes outside `0..width` × `0..height`
/// (negative coordinates included) are ignored, never a panic.
pub trait Surface {
    /// Width in pixels.
    fn width(&self) -> u32;
    /// Height in pixels.
    fn height(&self) -> u32;
    /// Overwrites every pixel with `color`.
    fn clear(&mut self, color: Pixel);
    /// Overwrites the pixel at `(x, y)`; out‑of‑bounds writes are ignored.
    fn set_pixel(&mut self, x: i32, y: i32, color: Pixel);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn clear(&mut self, color: Pixel) {
        (**self).clear(color);
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Pixel) {
        (**self).set_pixel(x, y, color);
    }
}

/// Error returned when building an [`Image`] from caller‑supplied pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageError {
    /// The pixel vector length does not equal `width * height`.
    SizeMismatch {
        /// `width * height`.
        expected: usize,
        /// Length of the supplied pixel vector.
        actual: usize,
    },
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => write!(
                f,
                "image needs {expected} pixels but {actual} were supplied"
            ),
        }
    }
}

impl core::error::Error for ImageError {}

/// An owned, row‑major grid of [`Pixel`]s.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl Image {
    /// Creates a transparent image.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Pixel::TRANSPARENT)
    }

    /// Creates an image with every pixel set to `color`.
    pub fn filled(width: u32, height: u32, color: Pixel) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; area(width, height)],
        }
    }

    /// Wraps row‑major pixel data.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Pixel>) -> Result<Self, ImageError> {
        let expected = area(width, height);
        if pixels.len() != expected {
            return Err(ImageError::SizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row‑major pixel data.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Reads one pixel, or `None` when out of bounds.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Pixel> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Overwrites every pixel with `color`.
    pub fn clear(&mut self, color: Pixel) {
        self.pixels.fill(color);
    }

    /// Overwrites one pixel; out‑of‑bounds writes are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Pixel) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Nearest‑neighbor sample at normalized coordinates.
    ///
    /// `u` and `v` are clamped into `[0, 1]`; `1.0` maps to the last
    /// column/row. An empty image samples as [`Pixel::TRANSPARENT`].
    #[allow(
        clippy::cast_possible_truncation,
        reason = "coordinates are clamped to [0, 1] and scaled by the image size"
    )]
    pub fn sample_pixel(&self, u: f32, v: f32) -> Pixel {
        if self.width == 0 || self.height == 0 {
            return Pixel::TRANSPARENT;
        }
        let x = ((u.clamp(0.0, 1.0) * self.width as f32) as u32).min(self.width - 1);
        let y = ((v.clamp(0.0, 1.0) * self.height as f32) as u32).min(self.height - 1);
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = u32::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = u32::try_from(y).ok().filter(|&y| y < self.height)?;
        Some(y as usize * self.width as usize + x as usize)
    }
}

impl Surface for Image {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self, color: Pixel) {
        Self::clear(self, color);
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Pixel) {
        Self::set_pixel(self, x, y, color);
    }
}

fn area(width: u32, height: u32) -> usize {
    (width as usize).saturating_mul(height as usize)
}
