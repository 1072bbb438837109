// Copyright 2025 the Drafter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use drafter_math::{Matrix3, Transform, Vector2};
use kurbo::Rect;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `powi` and `round`

use crate::config::ViewfinderConfig;
use crate::controller::ViewContext;
use crate::drag::DragState;

/// Maps user pan/zoom interaction onto the view transform.
///
/// The view transform takes world coordinates to device pixels;
/// [`Viewfinder::cursor`] maps the pointer back the other way and must
/// invert exactly what [`Viewfinder::view_transform`] composes.
///
/// The trait is dyn‑compatible: any [`Controller`](crate::Controller) is
/// passed as a `&dyn ViewContext`, so a host can hold
/// `Box<dyn Viewfinder>` and query optional capabilities at run time.
pub trait Viewfinder {
    /// Pans by a device‑space delta, independent of the current scale.
    fn pan(&mut self, dx: f32, dy: f32);

    /// Zooms in (`delta > 0`) or out (`delta < 0`) by whole notches.
    ///
    /// The scale always stays strictly positive.
    fn zoom(&mut self, delta: i32);

    /// Re‑centers the view on the controller's viewport.
    fn zero(&mut self, ctx: &dyn ViewContext);

    /// World‑space position under the controller's pointer.
    fn cursor(&self, ctx: &dyn ViewContext) -> Vector2;

    /// Per‑frame hook: folds the controller's input into pan and zoom.
    fn update(&mut self, ctx: &dyn ViewContext);

    /// The world → device transform for the current state.
    fn view_transform(&self) -> Transform;

    /// Grid snapping, if this viewfinder supports it.
    fn as_snap(&self) -> Option<&dyn SnapCapable> {
        None
    }

    /// Mutable grid snapping, if this viewfinder supports it.
    fn as_snap_mut(&mut self) -> Option<&mut dyn SnapCapable> {
        None
    }
}

/// Optional capability of viewfinders that quantize the cursor to a grid.
pub trait SnapCapable {
    /// Sets the grid size in world units. Non‑positive or non‑finite sizes
    /// disable snapping.
    fn snap(&mut self, size: f32);

    /// Current grid size in world units.
    fn grid_size(&self) -> f32;
}

/// A viewfinder with accumulated pan, clamped zoom, and a snapping grid.
///
/// The view transform is `Translation(pan) * Scale(scale)`: world points are
/// scaled about the origin and then shifted by the pan offset.
#[derive(Clone, Debug)]
pub struct SnapViewfinder {
    pan: Vector2,
    scale: f32,
    grid_size: f32,
    config: ViewfinderConfig,
    drag: DragState,
}

impl SnapViewfinder {
    /// Creates a viewfinder with the default configuration: scale `1.0`,
    /// zero pan and a `0.5` grid.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ViewfinderConfig::default())
    }

    /// Creates a viewfinder from `config`, normalized first.
    #[must_use]
    pub fn with_config(config: ViewfinderConfig) -> Self {
        let config = config.normalized();
        let mut vf = Self {
            pan: Vector2::ZERO,
            scale: 1.0,
            grid_size: config.grid_size,
            config,
            drag: DragState::default(),
        };
        vf.set_scale(1.0);
        vf
    }

    /// Accumulated pan offset in device space.
    pub fn pan_offset(&self) -> Vector2 {
        self.pan
    }

    /// Current zoom factor (device pixels per world unit).
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// The normalized configuration in effect.
    pub fn config(&self) -> ViewfinderConfig {
        self.config
    }

    /// Sets the minimum and maximum scale.
    ///
    /// The pair is normalized like [`ViewfinderConfig::normalized`] and the
    /// current scale is clamped into the new range.
    pub fn set_zoom_limits(&mut self, min_scale: f32, max_scale: f32) {
        self.config = ViewfinderConfig {
            min_scale,
            max_scale,
            ..self.config
        }
        .normalized();
        self.set_scale(self.scale);
    }

    /// Sets the scale directly, clamped into the zoom limits.
    pub fn set_scale(&mut self, scale: f32) {
        let (min, max) = (self.config.min_scale, self.config.max_scale);
        let clamped = if scale.is_nan() {
            self.scale.clamp(min, max)
        } else {
            scale.clamp(min, max)
        };
        if clamped != scale {
            tracing::debug!(requested = scale, clamped, "scale clamped to zoom limits");
        }
        self.scale = clamped;
    }

    /// Zooms by `delta` notches while keeping the world point under `anchor`
    /// (device space) fixed on screen.
    pub fn zoom_about(&mut self, anchor: Vector2, delta: i32) {
        let world = self.screen_to_world(anchor);
        self.zoom(delta);
        self.pan = anchor - world * self.scale;
    }

    /// Maps a device‑space point to world space: `(p - pan) / scale`.
    pub fn screen_to_world(&self, p: Vector2) -> Vector2 {
        let d = p - self.pan;
        Vector2::new(d.x / self.scale, d.y / self.scale)
    }

    /// Maps a world‑space point to device space: `pan + p * scale`.
    pub fn world_to_screen(&self, p: Vector2) -> Vector2 {
        self.pan + p * self.scale
    }

    /// Quantizes a world point to the nearest grid intersection.
    ///
    /// Returns `p` unchanged while snapping is disabled.
    pub fn snap_point(&self, p: Vector2) -> Vector2 {
        let g = self.grid_size;
        if !(g.is_finite() && g > 0.0) {
            return p;
        }
        Vector2::new((p.x / g).round() * g, (p.y / g).round() * g)
    }

    /// World‑space rectangle visible through a viewport of `view_size` pixels
    /// anchored at the device origin.
    pub fn visible_world_rect(&self, view_size: Vector2) -> Rect {
        let p0 = self.screen_to_world(Vector2::ZERO);
        let p1 = self.screen_to_world(view_size);
        Rect::from_points(p0.to_point(), p1.to_point())
    }

    /// Snapshot of the current state for debugging and inspection.
    pub fn debug_info(&self) -> ViewfinderDebugInfo {
        ViewfinderDebugInfo {
            pan: self.pan,
            scale: self.scale,
            grid_size: self.grid_size,
            min_scale: self.config.min_scale,
            max_scale: self.config.max_scale,
            dragging: self.drag.is_dragging(),
        }
    }
}

impl Default for SnapViewfinder {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewfinder for SnapViewfinder {
    fn pan(&mut self, dx: f32, dy: f32) {
        self.pan += Vector2::new(dx, dy);
    }

    fn zoom(&mut self, delta: i32) {
        if delta == 0 {
            return;
        }
        self.set_scale(self.scale * self.config.zoom_step.powi(delta));
    }

    fn zero(&mut self, ctx: &dyn ViewContext) {
        self.pan = ctx.viewport_center();
        tracing::debug!(pan_x = self.pan.x, pan_y = self.pan.y, "viewfinder zeroed");
    }

    fn cursor(&self, ctx: &dyn ViewContext) -> Vector2 {
        let pointer = ctx.pointer_input().pointer_position();
        self.snap_point(self.screen_to_world(pointer))
    }

    fn update(&mut self, ctx: &dyn ViewContext) {
        let input = ctx.pointer_input();
        let pointer = input.pointer_position();

        if input.pan_active() {
            if self.drag.is_dragging() {
                if let Some(delta) = self.drag.update(pointer) {
                    self.pan(delta.x, delta.y);
                }
            } else {
                self.drag.start(pointer);
            }
        } else if self.drag.is_dragging() {
            self.drag.end();
        }

        let steps = input.scroll_steps();
        if steps != 0 {
            self.zoom_about(pointer, steps);
        }

        if input.zero_requested() {
            self.zero(ctx);
        }
    }

    fn view_transform(&self) -> Transform {
        Transform::from_matrix(
            Matrix3::translation(self.pan.x, self.pan.y) * Matrix3::scale(self.scale, self.scale),
        )
    }

    fn as_snap(&self) -> Option<&dyn SnapCapable> {
        Some(self)
    }

    fn as_snap_mut(&mut self) -> Option<&mut dyn SnapCapable> {
        Some(self)
    }
}

impl SnapCapable for SnapViewfinder {
    fn snap(&mut self, size: f32) {
        self.grid_size = size;
        tracing::debug!(grid_size = size, "grid size changed");
    }

    fn grid_size(&self) -> f32 {
        self.grid_size
    }
}

/// Debug snapshot of a [`SnapViewfinder`] state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewfinderDebugInfo {
    /// Accumulated pan offset in device space.
    pub pan: Vector2,
    /// Current zoom factor.
    pub scale: f32,
    /// Current grid size in world units.
    pub grid_size: f32,
    /// Minimum zoom factor.
    pub min_scale: f32,
    /// Maximum zoom factor.
    pub max_scale: f32,
    /// Whether a pan drag is in progress.
    pub dragging: bool,
}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use alloc::boxed::Box;
    use alloc::vec;
    use alloc::vec::Vec;

    use drafter_math::Vector2;

    use super::{SnapCapable, SnapViewfinder, Viewfinder};
    use crate::config::ViewfinderConfig;
    use crate::controller::{HeadlessController, ViewContext};

    fn close(a: Vector2, b: Vector2) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn defaults() {
        let vf = SnapViewfinder::new();
        assert_eq!(vf.scale(), 1.0);
        assert_eq!(vf.pan_offset(), Vector2::ZERO);
        assert_eq!(vf.grid_size(), 0.5);
        assert_eq!(vf.view_transform(), drafter_math::Transform::IDENTITY);
    }

    #[test]
    fn pan_accumulates_in_screen_space() {
        let mut vf = SnapViewfinder::new();
        vf.zoom(5);
        vf.pan(3.0, -2.0);
        vf.pan(1.0, 1.0);
        assert_eq!(vf.pan_offset(), Vector2::new(4.0, -1.0));
    }

    #[test]
    fn zoom_is_monotonic() {
        let mut vf = SnapViewfinder::new();
        vf.zoom(1);
        let zoomed_in = vf.scale();
        assert!(zoomed_in > 1.0);
        vf.zoom(-2);
        assert!(vf.scale() < 1.0);
        vf.zoom(0);
        assert!(vf.scale() < 1.0);
    }

    #[test]
    fn zoom_never_reaches_zero() {
        let mut vf = SnapViewfinder::new();
        for _ in 0..1000 {
            vf.zoom(-1);
        }
        assert!(vf.scale() > 0.0);
        assert_eq!(vf.scale(), vf.config().min_scale);

        vf.zoom(i32::MIN);
        assert!(vf.scale() > 0.0);
        vf.zoom(i32::MAX);
        assert_eq!(vf.scale(), vf.config().max_scale);
    }

    #[test]
    fn zoom_limits_reclamp_current_scale() {
        let mut vf = SnapViewfinder::new();
        vf.set_scale(50.0);
        vf.set_zoom_limits(10.0, 2.0);
        assert_eq!(vf.scale(), 10.0);
        assert_eq!(vf.debug_info().min_scale, 2.0);
        vf.set_zoom_limits(-1.0, 0.0);
        assert!(vf.scale() > 0.0);
    }

    #[test]
    fn nan_scale_request_keeps_previous() {
        let mut vf = SnapViewfinder::new();
        vf.set_scale(4.0);
        vf.set_scale(f32::NAN);
        assert_eq!(vf.scale(), 4.0);
    }

    #[test]
    fn screen_and_world_are_inverse() {
        let mut vf = SnapViewfinder::new();
        vf.pan(37.0, -12.5);
        vf.zoom(7);
        let t = vf.view_transform();
        for s in [
            Vector2::new(0.0, 0.0),
            Vector2::new(640.0, 480.0),
            Vector2::new(-13.25, 99.5),
        ] {
            let w = vf.screen_to_world(s);
            assert!(close(t.apply(w), s), "{s:?}");
            assert!(close(vf.world_to_screen(w), s), "{s:?}");
        }
    }

    #[test]
    fn zoom_about_keeps_anchor_fixed() {
        let mut vf = SnapViewfinder::new();
        vf.pan(100.0, 50.0);
        let anchor = Vector2::new(320.0, 240.0);
        let before = vf.screen_to_world(anchor);
        vf.zoom_about(anchor, 3);
        let after = vf.screen_to_world(anchor);
        assert!(close(before, after), "{before:?} vs {after:?}");
        assert!(vf.scale() > 1.0);
    }

    #[test]
    fn snapping_rounds_to_grid() {
        let mut vf = SnapViewfinder::new();
        assert_eq!(vf.snap_point(Vector2::new(0.3, 0.7)), Vector2::new(0.5, 0.5));
        assert_eq!(vf.snap_point(Vector2::new(-0.3, 1.2)), Vector2::new(-0.5, 1.0));
        vf.snap(2.0);
        assert_eq!(vf.snap_point(Vector2::new(2.9, -3.1)), Vector2::new(2.0, -4.0));
        vf.snap(0.0);
        assert_eq!(vf.snap_point(Vector2::new(2.9, -3.1)), Vector2::new(2.9, -3.1));
        vf.snap(f32::NAN);
        assert_eq!(vf.snap_point(Vector2::new(1.1, 1.1)), Vector2::new(1.1, 1.1));
    }

    /// A viewfinder without snapping: fixed scale, pan only.
    #[derive(Default)]
    struct PanOnly {
        pan: Vector2,
    }

    impl Viewfinder for PanOnly {
        fn pan(&mut self, dx: f32, dy: f32) {
            self.pan += Vector2::new(dx, dy);
        }

        fn zoom(&mut self, _delta: i32) {}

        fn zero(&mut self, ctx: &dyn ViewContext) {
            self.pan = ctx.viewport_center();
        }

        fn cursor(&self, ctx: &dyn ViewContext) -> Vector2 {
            ctx.pointer_input().pointer_position() - self.pan
        }

        fn update(&mut self, _ctx: &dyn ViewContext) {}

        fn view_transform(&self) -> drafter_math::Transform {
            drafter_math::Transform::translation(self.pan.x, self.pan.y)
        }
    }

    #[test]
    fn capability_query_selects_between_trait_objects() {
        let controller = HeadlessController::new(40, 20);
        let mut views: Vec<Box<dyn Viewfinder>> = vec![
            Box::new(PanOnly::default()) as Box<dyn Viewfinder>,
            Box::new(SnapViewfinder::new()) as Box<dyn Viewfinder>,
        ];

        let mut snapped = 0;
        for view in &mut views {
            view.zero(&controller);
            if let Some(snap) = view.as_snap_mut() {
                snap.snap(4.0);
                snapped += 1;
            }
        }
        assert_eq!(snapped, 1);
        assert!(views[0].as_snap().is_none());
        assert_eq!(views[1].as_snap().map(|s| s.grid_size()), Some(4.0));
        for view in &views {
            assert_eq!(view.view_transform().apply(Vector2::ZERO), Vector2::new(20.0, 10.0));
        }
    }

    #[test]
    fn fractional_zoom_step_still_zooms_in() {
        let mut vf = SnapViewfinder::with_config(ViewfinderConfig {
            zoom_step: 0.5,
            ..ViewfinderConfig::default()
        });
        vf.zoom(1);
        assert!(vf.scale() > 1.0, "scale {} after zooming in", vf.scale());
        vf.zoom(-2);
        assert!(vf.scale() < 1.0, "scale {} after zooming out", vf.scale());
    }

    #[test]
    fn snap_is_a_queried_capability() {
        let mut vf = SnapViewfinder::new();
        let snap = vf.as_snap_mut().expect("snap viewfinder snaps");
        snap.snap(0.25);
        assert_eq!(vf.as_snap().map(|s| s.grid_size()), Some(0.25));
    }

    #[test]
    fn zero_centers_on_viewport_and_keeps_scale() {
        let controller = HeadlessController::new(200, 100);
        let mut vf = SnapViewfinder::new();
        vf.zoom(2);
        let scale = vf.scale();
        vf.pan(-40.0, 7.0);
        vf.zero(&controller);
        assert_eq!(vf.pan_offset(), Vector2::new(100.0, 50.0));
        assert_eq!(vf.scale(), scale);
        assert!(close(vf.world_to_screen(Vector2::ZERO), Vector2::new(100.0, 50.0)));
    }

    #[test]
    fn cursor_inverts_view_and_snaps() {
        let mut controller = HeadlessController::new(100, 100);
        let mut vf = SnapViewfinder::new();
        vf.pan(10.0, 20.0);
        vf.snap(1.0);
        vf.set_scale(2.0);
        controller.input_mut().position = Vector2::new(15.2, 27.0);
        // (15.2 - 10) / 2 = 2.6 -> 3; (27 - 20) / 2 = 3.5 -> 4
        assert_eq!(vf.cursor(&controller), Vector2::new(3.0, 4.0));
    }

    #[test]
    fn update_drags_zooms_and_zeroes() {
        let mut controller = HeadlessController::new(64, 32);
        let mut vf = SnapViewfinder::new();

        // Press: starts the drag, no movement yet.
        controller.input_mut().pan_active = true;
        controller.input_mut().position = Vector2::new(10.0, 10.0);
        vf.update(&controller);
        assert!(vf.debug_info().dragging);
        assert_eq!(vf.pan_offset(), Vector2::ZERO);

        // Move while held: pan follows the pointer.
        controller.input_mut().position = Vector2::new(14.0, 7.0);
        vf.update(&controller);
        assert_eq!(vf.pan_offset(), Vector2::new(4.0, -3.0));

        // Release: later motion no longer pans.
        controller.input_mut().pan_active = false;
        vf.update(&controller);
        controller.input_mut().position = Vector2::new(30.0, 30.0);
        vf.update(&controller);
        assert!(!vf.debug_info().dragging);
        assert_eq!(vf.pan_offset(), Vector2::new(4.0, -3.0));

        // Scroll zooms about the pointer.
        let anchor_world = vf.screen_to_world(Vector2::new(30.0, 30.0));
        controller.input_mut().scroll_steps = 2;
        vf.update(&controller);
        controller.input_mut().end_frame();
        assert!(vf.scale() > 1.0);
        assert!(close(vf.world_to_screen(anchor_world), Vector2::new(30.0, 30.0)));

        // Zero request re-centers.
        controller.input_mut().zero_requested = true;
        vf.update(&controller);
        assert_eq!(vf.pan_offset(), Vector2::new(32.0, 16.0));
    }

    #[test]
    fn visible_rect_tracks_pan_and_scale() {
        let mut vf = SnapViewfinder::with_config(ViewfinderConfig {
            zoom_step: 2.0,
            ..ViewfinderConfig::default()
        });
        vf.zoom(1);
        vf.pan(-20.0, -10.0);
        let r = vf.visible_world_rect(Vector2::new(100.0, 50.0));
        assert_eq!(r, kurbo::Rect::new(10.0, 5.0, 60.0, 30.0));
    }
}
