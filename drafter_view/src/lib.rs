// Copyright 2025 the Drafter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=drafter_view --heading-base-level=0

//! Drafter View: pan, zoom and grid snapping on top of the Drafter rasterizer.
//!
//! A [`Viewfinder`] turns pointer input into the world → device
//! [`Transform`](drafter_math::Transform) that a frame pushes onto its
//! [`Graphics`](drafter_raster::Graphics) before drawing, and maps the
//! pointer back into world space for the cursor. The two directions are
//! exact inverses of each other.
//!
//! - [`Controller`] and [`Input`]: the narrow view of the host application.
//!   [`HeadlessController`] implements it over an owned image.
//! - [`SnapViewfinder`]: accumulated pan, clamped zoom and a snapping grid.
//!   Snapping is an optional capability ([`SnapCapable`]) queried through
//!   [`Viewfinder::as_snap_mut`].
//! - [`Reticle`]: small cursor glyphs drawn in device space.
//!
//! ## Minimal example
//!
//! ```rust
//! use drafter_math::Vector2;
//! use drafter_raster::Pixel;
//! use drafter_view::{Controller, HeadlessController, Reticle, ReticleType, SnapViewfinder, Viewfinder};
//!
//! let mut controller = HeadlessController::new(64, 48);
//! let mut view = SnapViewfinder::new();
//! view.zero(&controller);
//!
//! // One frame: fold input into the view, then draw through it.
//! controller.input_mut().position = Vector2::new(40.0, 30.0);
//! controller.input_mut().scroll_steps = 3;
//! view.update(&controller);
//! controller.input_mut().end_frame();
//!
//! let g = controller.graphics_mut();
//! g.clear(Pixel::BLACK);
//! g.push_transform(view.view_transform());
//! g.draw_circle(Pixel::WHITE, 0.0, 0.0, 5.0);
//! g.pop_transform();
//!
//! let cursor = view.cursor(&controller);
//! let on_screen = view.world_to_screen(cursor);
//! Reticle::from_type(ReticleType::Grid).draw(&mut controller, on_screen);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod controller;
mod drag;
mod reticle;
mod viewfinder;

pub use config::ViewfinderConfig;
pub use controller::{Controller, HeadlessController, Input, PointerState, ViewContext};
pub use drag::DragState;
pub use reticle::{Reticle, ReticleType};
pub use viewfinder::{SnapCapable, SnapViewfinder, Viewfinder, ViewfinderDebugInfo};
