// Copyright 2025 the Drafter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cursor reticles: small fixed glyphs drawn at a device‑space point.

use drafter_math::Vector2;
use drafter_raster::{Graphics, Pixel, Surface};

use crate::controller::Controller;

/// Half the side of every glyph's bounding box, in pixels.
const ARM: i32 = 3;

/// Which reticle to draw under the cursor.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ReticleType {
    /// Snapped to a grid intersection.
    #[default]
    Grid,
    /// Snapped to the midpoint of a segment.
    Midpoint,
    /// Snapped to the endpoint of a segment.
    Endpoint,
    /// Snapped to the intersection of two segments.
    Intersection,
    /// No reticle.
    None,
}

/// A stateless glyph renderer, one variant per [`ReticleType`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Reticle {
    /// 7×7 plus.
    Grid,
    /// Upward triangle inscribed in a 7×7 box.
    Midpoint,
    /// 7×7 square outline.
    Endpoint,
    /// 7×7 diagonal cross.
    Intersection,
    /// Draws nothing.
    None,
}

impl Reticle {
    /// Color every glyph is drawn in.
    pub const COLOR: Pixel = Pixel::WHITE;

    /// Returns the reticle for `ty`. Every type has exactly one reticle.
    pub const fn from_type(ty: ReticleType) -> Self {
        match ty {
            ReticleType::Grid => Self::Grid,
            ReticleType::Midpoint => Self::Midpoint,
            ReticleType::Endpoint => Self::Endpoint,
            ReticleType::Intersection => Self::Intersection,
            ReticleType::None => Self::None,
        }
    }

    /// The type this reticle was built from.
    pub const fn reticle_type(self) -> ReticleType {
        match self {
            Self::Grid => ReticleType::Grid,
            Self::Midpoint => ReticleType::Midpoint,
            Self::Endpoint => ReticleType::Endpoint,
            Self::Intersection => ReticleType::Intersection,
            Self::None => ReticleType::None,
        }
    }

    /// Draws the glyph centered on `screen_point` (device space).
    ///
    /// Pixels go straight to the surface; the transform stack is neither
    /// consulted nor changed.
    pub fn draw<C: Controller + ?Sized>(&self, controller: &mut C, screen_point: Vector2) {
        let g = controller.graphics_mut();
        let (x, y) = device_point(screen_point);
        let (l, r) = (x.saturating_sub(ARM), x.saturating_add(ARM));
        let (t, b) = (y.saturating_sub(ARM), y.saturating_add(ARM));
        match self {
            Self::Grid => {
                g.draw_device_line(Self::COLOR, l, y, r, y);
                g.draw_device_line(Self::COLOR, x, t, x, b);
            }
            Self::Midpoint => {
                g.draw_device_line(Self::COLOR, x, t, l, b);
                g.draw_device_line(Self::COLOR, l, b, r, b);
                g.draw_device_line(Self::COLOR, r, b, x, t);
            }
            Self::Endpoint => outline(g, l, t, r, b),
            Self::Intersection => {
                g.draw_device_line(Self::COLOR, l, t, r, b);
                g.draw_device_line(Self::COLOR, l, b, r, t);
            }
            Self::None => {}
        }
    }
}

impl From<ReticleType> for Reticle {
    fn from(ty: ReticleType) -> Self {
        Self::from_type(ty)
    }
}

fn outline<S: Surface>(g: &mut Graphics<S>, l: i32, t: i32, r: i32, b: i32) {
    g.draw_device_line(Reticle::COLOR, l, t, r, t);
    g.draw_device_line(Reticle::COLOR, r, t, r, b);
    g.draw_device_line(Reticle::COLOR, r, b, l, b);
    g.draw_device_line(Reticle::COLOR, l, b, l, t);
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "device coordinates truncate toward zero like every other primitive"
)]
fn device_point(p: Vector2) -> (i32, i32) {
    (p.x as i32, p.y as i32)
}
