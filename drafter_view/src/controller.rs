// Copyright 2025 the Drafter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The narrow view of the host application that viewfinders and reticles use.
//!
//! A full application controller also owns output, timing, fonts and styles;
//! none of those are needed here, so the contract only exposes the
//! rasterizer and the pointer input.

use drafter_math::Vector2;
use drafter_raster::{Graphics, Image, Surface};

/// Per‑frame pointer input as seen by a viewfinder.
pub trait Input {
    /// Current pointer position in device space.
    fn pointer_position(&self) -> Vector2;
    /// Whether the pan gesture (for example a held middle button) is active.
    fn pan_active(&self) -> bool;
    /// Scroll notches since the previous frame; positive zooms in.
    fn scroll_steps(&self) -> i32;
    /// Whether the user asked to re‑zero the view this frame.
    fn zero_requested(&self) -> bool;
}

/// Plain [`Input`] record that a host event loop fills in each frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    /// Pointer position in device space.
    pub position: Vector2,
    /// Pan gesture held.
    pub pan_active: bool,
    /// Scroll notches accumulated this frame.
    pub scroll_steps: i32,
    /// Re‑zero requested this frame.
    pub zero_requested: bool,
}

impl PointerState {
    /// Clears the per‑frame fields (scroll and zero request), keeping the
    /// pointer position and the pan button state.
    pub fn end_frame(&mut self) {
        self.scroll_steps = 0;
        self.zero_requested = false;
    }
}

impl Input for PointerState {
    fn pointer_position(&self) -> Vector2 {
        self.position
    }

    fn pan_active(&self) -> bool {
        self.pan_active
    }

    fn scroll_steps(&self) -> i32 {
        self.scroll_steps
    }

    fn zero_requested(&self) -> bool {
        self.zero_requested
    }
}

/// Access to the rasterizer and the pointer input of the running application.
pub trait Controller {
    /// Surface type the rasterizer draws into.
    type Surface: Surface;
    /// Input source.
    type Input: Input;

    /// The rasterizer.
    fn graphics(&self) -> &Graphics<Self::Surface>;
    /// Mutable access to the rasterizer.
    fn graphics_mut(&mut self) -> &mut Graphics<Self::Surface>;
    /// The pointer input for the current frame.
    fn input(&self) -> &Self::Input;
}

/// The part of a [`Controller`] a viewfinder reads, as a dyn‑compatible
/// trait. Every controller implements it.
pub trait ViewContext {
    /// The pointer input for the current frame.
    fn pointer_input(&self) -> &dyn Input;
    /// Center of the drawing surface in device space.
    fn viewport_center(&self) -> Vector2;
}

impl<C: Controller + ?Sized> ViewContext for C {
    fn pointer_input(&self) -> &dyn Input {
        self.input()
    }

    fn viewport_center(&self) -> Vector2 {
        self.graphics().center()
    }
}

/// A self‑contained [`Controller`] over an owned [`Image`] and a
/// [`PointerState`], for headless rendering and tests.
#[derive(Debug)]
pub struct HeadlessController {
    graphics: Graphics<Image>,
    input: PointerState,
}

impl HeadlessController {
    /// Creates a controller with a transparent `width` × `height` image.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            graphics: Graphics::new(Image::new(width, height)),
            input: PointerState::default(),
        }
    }

    /// Mutable access to the input record.
    pub fn input_mut(&mut self) -> &mut PointerState {
        &mut self.input
    }

    /// The rendered image.
    pub fn image(&self) -> &Image {
        self.graphics.surface()
    }

    /// Consumes the controller and returns the rendered image.
    pub fn into_image(self) -> Image {
        self.graphics.into_surface()
    }
}

impl Controller for HeadlessController {
    type Surface = Image;
    type Input = PointerState;

    fn graphics(&self) -> &Graphics<Image> {
        &self.graphics
    }

    fn graphics_mut(&mut self) -> &mut Graphics<Image> {
        &mut self.graphics
    }

    fn input(&self) -> &PointerState {
        &self.input
    }
}
