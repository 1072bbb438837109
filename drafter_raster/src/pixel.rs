// Copyright 2025 the Drafter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;
use peniko::color::Rgba8;

/// An 8‑bit RGBA color value stored in an [`Image`](crate::Image).
///
/// The rasterizer never blends: writing a pixel replaces whatever was there.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pixel {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Pixel {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Creates a pixel from its four channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque pixel.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
}

impl From<Rgba8> for Pixel {
    fn from(c: Rgba8) -> Self {
        Self::new(c.r, c.g, c.b, c.a)
    }
}

impl From<Color> for Pixel {
    /// Quantizes a peniko color to 8 bits per channel in sRGB.
    fn from(color: Color) -> Self {
        color.to_rgba8().into()
    }
}

impl From<Pixel> for Color {
    fn from(p: Pixel) -> Self {
        Self::from_rgba8(p.r, p.g, p.b, p.a)
    }
}

#[cfg(test)]
mod tests {
    use peniko::Color;

    use super::Pixel;

    #[test]
    fn peniko_colors_quantize() {
        assert_eq!(Pixel::from(Color::WHITE), Pixel::WHITE);
        assert_eq!(Pixel::from(Color::BLACK), Pixel::BLACK);
        let c = Color::from_rgba8(12, 34, 56, 78);
        assert_eq!(Pixel::from(c), Pixel::new(12, 34, 56, 78));
        assert_eq!(Color::from(Pixel::new(12, 34, 56, 78)), c);
    }

    #[test]
    fn default_is_transparent() {
        assert_eq!(Pixel::default(), Pixel::TRANSPARENT);
    }
}
