// Copyright 2025 the Drafter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::ops::Range;

use drafter_math::{Transform, Vector2};
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `ceil` and `floor`

use crate::{Image, Pixel, Surface};

/// Rasterizer over a [`Surface`] with a LIFO stack of [`Transform`]s.
///
/// Primitive coordinates are in world space and go through the top of the
/// transform stack (identity when the stack is empty) before being
/// rasterized. Three entry points skip the stack and take device pixels
/// directly: [`Graphics::set_pixel`], [`Graphics::draw_device_line`] and
/// [`Graphics::draw_image`].
///
/// Float device coordinates are **truncated** toward zero, not rounded.
///
/// Rectangles only honor the translation and uniform scale of the current
/// transform: edges are walked axis‑aligned even when the transform rotates.
///
/// No operation fails. Pixels landing outside the surface are dropped by the
/// surface.
#[derive(Debug)]
pub struct Graphics<S = Image> {
    surface: S,
    transforms: Vec<Transform>,
}

impl<S: Surface> Graphics<S> {
    /// Creates a rasterizer drawing into `surface`, with an empty transform stack.
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            transforms: Vec::new(),
        }
    }

    /// The surface being drawn into.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface being drawn into.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Consumes the rasterizer and returns its surface.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Overwrites every pixel with `color`.
    pub fn clear(&mut self, color: Pixel) {
        self.surface.clear(color);
    }

    /// Writes one pixel at device coordinates, ignoring the transform stack.
    pub fn set_pixel(&mut self, color: Pixel, x: i32, y: i32) {
        self.surface.set_pixel(x, y, color);
    }

    /// Strokes a one‑pixel line between two world‑space points.
    ///
    /// Both endpoints are transformed and truncated to device pixels, then
    /// rasterized with [`Graphics::draw_device_line`].
    pub fn draw_line(&mut self, color: Pixel, x0: f32, y0: f32, x1: f32, y1: f32) {
        let transform = self.transform();
        let p0 = transform.apply(Vector2::new(x0, y0));
        let p1 = transform.apply(Vector2::new(x1, y1));
        self.draw_device_line(
            color,
            truncate(p0.x),
            truncate(p0.y),
            truncate(p1.x),
            truncate(p1.y),
        );
    }

    /// Strokes a one‑pixel line between two device pixels using Bresenham's
    /// algorithm, ignoring the transform stack.
    ///
    /// Every slope is handled by the same error recurrence. Both endpoints
    /// are always written; a zero‑length line writes exactly one pixel.
    ///
    /// Only the steps whose major coordinate falls on the surface are
    /// walked: the recurrence state at the first such step is computed in
    /// closed form, so the pixels written are exactly those of the full walk
    /// and the cost is bounded by the surface size.
    pub fn draw_device_line(&mut self, color: Pixel, x0: i32, y0: i32, x1: i32, y1: i32) {
        // i64 so that the error terms cannot overflow for any pair of i32 endpoints.
        let (x0, y0) = (i64::from(x0), i64::from(y0));
        let (x1, y1) = (i64::from(x1), i64::from(y1));
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };

        // The major axis advances on every step; the minor one by the count below.
        let x_major = dx >= -dy;
        let (major, minor) = if x_major { (dx, -dy) } else { (-dy, dx) };
        let (start, step, limit) = if x_major {
            (x0, sx, self.width())
        } else {
            (y0, sy, self.height())
        };
        let Some((first, last)) = visible_steps(start, step, major, i64::from(limit)) else {
            return;
        };

        // Closed-form state after `first` steps, in i128 since the products
        // can exceed i64 for endpoints near the ends of the i32 range.
        let (k, major, minor) = (i128::from(first), i128::from(major), i128::from(minor));
        let n = if major == 0 {
            0
        } else {
            (2 * k * minor + major) / (2 * major)
        };
        let residual = (n + 1) * major - (k + 1) * minor;
        // Both fit: n <= first, and the residual is bounded by the deltas.
        let minor_steps = i64::try_from(n).unwrap_or(first);
        let residual = i64::try_from(residual).unwrap_or(0);
        let (mut x, mut y) = if x_major {
            (x0 + sx * first, y0 + sy * minor_steps)
        } else {
            (x0 + sx * minor_steps, y0 + sy * first)
        };
        // x-major: err = (n + 1) * dx + (k + 1) * dy; y-major swaps the roles.
        let mut err = if x_major { residual } else { -residual };

        for _ in first..last {
            self.plot(color, x, y);
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
        self.plot(color, x, y);
    }

    /// Strokes the one‑pixel outline of a `width` × `height` rectangle whose
    /// top‑left corner is `(x, y)` in world space.
    ///
    /// The corner is transformed and the size multiplied by the transform's
    /// [`scale_factor`](Transform::scale_factor); rotation is not applied to
    /// the edges.
    pub fn draw_rect(&mut self, color: Pixel, x: f32, y: f32, width: f32, height: f32) {
        let transform = self.transform();
        let origin = transform.apply(Vector2::new(x, y));
        let width = width * transform.scale_factor();
        let height = height * transform.scale_factor();

        for i in visible_span(origin.x, span(width), self.width()) {
            let fx = origin.x + i as f32;
            self.plot_f(color, fx, origin.y);
            self.plot_f(color, fx, origin.y + height - 1.0);
        }
        for i in visible_span(origin.y, span(height), self.height()) {
            let fy = origin.y + i as f32;
            self.plot_f(color, origin.x, fy);
            self.plot_f(color, origin.x + width - 1.0, fy);
        }
    }

    /// Fills a `width` × `height` rectangle whose top‑left corner is `(x, y)`
    /// in world space.
    ///
    /// Same placement rules as [`Graphics::draw_rect`]; the scaled box is
    /// filled axis‑aligned.
    pub fn fill_rect(&mut self, color: Pixel, x: f32, y: f32, width: f32, height: f32) {
        let transform = self.transform();
        let origin = transform.apply(Vector2::new(x, y));
        let width = width * transform.scale_factor();
        let height = height * transform.scale_factor();

        let rows = visible_span(origin.y, span(height), self.height());
        for i in visible_span(origin.x, span(width), self.width()) {
            for j in rows.clone() {
                self.plot_f(color, origin.x + i as f32, origin.y + j as f32);
            }
        }
    }

    /// Strokes a circle of `radius` world units centered on `(x, y)`.
    ///
    /// Uses the integer midpoint recurrence over one octant and mirrors each
    /// step into all eight. A zero radius writes only the center pixel; a
    /// negative radius writes nothing.
    pub fn draw_circle(&mut self, color: Pixel, x: f32, y: f32, radius: f32) {
        let (center, radius) = self.circle_in_device(x, y, radius);
        let (cx, cy) = (center.x, center.y);
        for (ox, oy) in Octant::new(radius) {
            let (ox, oy) = (ox as f32, oy as f32);
            self.plot_f(color, cx + ox, cy + oy);
            self.plot_f(color, cx + oy, cy + ox);
            self.plot_f(color, cx - oy, cy + ox);
            self.plot_f(color, cx - ox, cy + oy);
            self.plot_f(color, cx - ox, cy - oy);
            self.plot_f(color, cx - oy, cy - ox);
            self.plot_f(color, cx + oy, cy - ox);
            self.plot_f(color, cx + ox, cy - oy);
        }
    }

    /// Fills a circle of `radius` world units centered on `(x, y)`.
    ///
    /// Walks the same recurrence as [`Graphics::draw_circle`] and fills
    /// horizontal chords between mirrored offsets. Chords are already in
    /// device space and are not transformed again.
    pub fn fill_circle(&mut self, color: Pixel, x: f32, y: f32, radius: f32) {
        let (center, radius) = self.circle_in_device(x, y, radius);
        let (cx, cy) = (center.x, center.y);
        for (ox, oy) in Octant::new(radius) {
            let (ox, oy) = (ox as f32, oy as f32);
            self.chord(color, cx - ox, cx + ox, cy + oy);
            self.chord(color, cx - oy, cx + oy, cy + ox);
            self.chord(color, cx - ox, cx + ox, cy - oy);
            self.chord(color, cx - oy, cx + oy, cy - ox);
        }
    }

    /// Copies `image` into the `width` × `height` device‑space block at
    /// `(x, y)` with nearest sampling.
    ///
    /// Unlike the other primitives this does not consult the transform stack.
    pub fn draw_image(&mut self, image: &Image, x: i32, y: i32, width: u32, height: u32) {
        for i in 0..width {
            for j in 0..height {
                let u = i as f32 / width as f32;
                let v = j as f32 / height as f32;
                let color = image.sample_pixel(u, v);
                self.plot(color, i64::from(x) + i64::from(i), i64::from(y) + i64::from(j));
            }
        }
    }

    /// Surface width in pixels.
    pub fn width(&self) -> u32 {
        self.surface.width()
    }

    /// Surface height in pixels.
    pub fn height(&self) -> u32 {
        self.surface.height()
    }

    /// Center of the surface in device space.
    pub fn center(&self) -> Vector2 {
        Vector2::new(self.width() as f32 / 2.0, self.height() as f32 / 2.0)
    }

    /// Surface size in device space.
    pub fn dimensions(&self) -> Vector2 {
        Vector2::new(self.width() as f32, self.height() as f32)
    }

    /// Pushes a transform; it becomes the current one.
    pub fn push_transform(&mut self, transform: Transform) {
        self.transforms.push(transform);
    }

    /// Pops and returns the current transform.
    ///
    /// Popping an empty stack returns the identity and leaves the stack empty.
    pub fn pop_transform(&mut self) -> Transform {
        self.transforms.pop().unwrap_or_else(|| {
            tracing::trace!("pop_transform on an empty stack; returning identity");
            Transform::IDENTITY
        })
    }

    /// The current transform: the top of the stack, or the identity.
    pub fn transform(&self) -> Transform {
        self.transforms.last().copied().unwrap_or(Transform::IDENTITY)
    }

    /// Number of transforms on the stack.
    pub fn transform_depth(&self) -> usize {
        self.transforms.len()
    }

    fn circle_in_device(&self, x: f32, y: f32, radius: f32) -> (Vector2, i64) {
        let transform = self.transform();
        let center = transform.apply(Vector2::new(x, y));
        let radius = i64::from(truncate(radius * transform.scale_factor()));
        (center, radius)
    }

    fn chord(&mut self, color: Pixel, x0: f32, x1: f32, y: f32) {
        let y = truncate(y);
        self.draw_device_line(color, truncate(x0), y, truncate(x1), y);
    }

    fn plot_f(&mut self, color: Pixel, x: f32, y: f32) {
        self.surface.set_pixel(truncate(x), truncate(y), color);
    }

    fn plot(&mut self, color: Pixel, x: i64, y: i64) {
        if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
            self.surface.set_pixel(x, y, color);
        }
    }
}

/// Truncates a device coordinate toward zero.
///
/// Saturates at the `i32` range; NaN maps to 0.
#[allow(
    clippy::cast_possible_truncation,
    reason = "truncating float device coordinates is the documented behavior"
)]
fn truncate(v: f32) -> i32 {
    v as i32
}

/// Number of whole pixels `i` with `0 <= i < len`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "saturating cast of a positive, already rounded-up length"
)]
fn span(len: f32) -> u32 {
    if len > 0.0 { len.ceil() as u32 } else { 0 }
}

/// Step range `first..=last` within `0..=steps` whose coordinate
/// `start + step * k` lies in `-1..=limit`, or `None` when there is none.
fn visible_steps(start: i64, step: i64, steps: i64, limit: i64) -> Option<(i64, i64)> {
    let (lo, hi) = if step > 0 {
        (-1 - start, limit - start)
    } else {
        (start - limit, start + 1)
    };
    let (first, last) = (lo.max(0), hi.min(steps));
    (first <= last).then_some((first, last))
}

/// Offsets `i` in `0..len` for which `origin + i` can truncate onto
/// `0..limit`, widened by a pixel on each side.
#[allow(
    clippy::cast_possible_truncation,
    reason = "saturating casts of bounds that are clamped to `0..=len` afterwards"
)]
fn visible_span(origin: f32, len: u32, limit: u32) -> Range<u32> {
    let origin = f64::from(origin);
    let lo = ((-1.0 - origin).floor() - 1.0).max(0.0) as u32;
    let hi = ((f64::from(limit) - origin).ceil() + 1.0).max(0.0) as u32;
    lo.min(len)..hi.min(len)
}

/// Offsets `(x, y)` of the first octant of a midpoint circle, `x >= y >= 0`.
#[derive(Debug)]
struct Octant {
    x: i64,
    y: i64,
    err: i64,
}

impl Octant {
    fn new(radius: i64) -> Self {
        Self {
            x: radius,
            y: 0,
            err: 0,
        }
    }
}

impl Iterator for Octant {
    type Item = (i64, i64);

    fn next(&mut self) -> Option<(i64, i64)> {
        if self.x < self.y {
            return None;
        }
        let step = (self.x, self.y);
        self.y += 1;
        self.err += 1 + 2 * self.y;
        if 2 * (self.err - self.x) + 1 > 0 {
            self.x -= 1;
            self.err += 1 - 2 * self.x;
        }
        Some(step)
    }
}
