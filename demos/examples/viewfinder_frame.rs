// Copyright 2025 the Drafter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders one viewfinder frame headlessly and writes it to stdout as PPM.
//!
//! The frame simulates a short interaction: a pan drag, two scroll notches
//! about the pointer, then draws a world grid, every primitive and every
//! reticle.
//!
//! Example:
//!   `cargo run -p drafter_demos --example viewfinder_frame > frame.ppm`
//!
//! Set `RUST_LOG=debug` to see the viewfinder's events on stderr.

use std::io;

use drafter_math::{Transform, Vector2};
use drafter_raster::{Image, Pixel};
use drafter_view::{
    Controller, HeadlessController, Reticle, ReticleType, SnapCapable, SnapViewfinder, Viewfinder,
};
use peniko::color::palette;
use tracing_subscriber::EnvFilter;

const WIDTH: u32 = 320;
const HEIGHT: u32 = 240;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut controller = HeadlessController::new(WIDTH, HEIGHT);
    let mut view = SnapViewfinder::new();
    view.zero(&controller);
    if let Some(snap) = view.as_snap_mut() {
        snap.snap(1.0);
    }
    view.set_scale(10.0);

    simulate_input(&mut controller, &mut view);
    tracing::info!(info = ?view.debug_info(), "viewfinder after input");

    let checker = checkerboard(8, 8);
    let g = controller.graphics_mut();
    g.clear(Pixel::from(palette::css::MIDNIGHT_BLUE));

    g.push_transform(view.view_transform());
    for i in -20..=20_i16 {
        let v = f32::from(i);
        g.draw_line(Pixel::from(palette::css::DARK_SLATE_GRAY), v, -20.0, v, 20.0);
        g.draw_line(Pixel::from(palette::css::DARK_SLATE_GRAY), -20.0, v, 20.0, v);
    }
    g.draw_line(Pixel::from(palette::css::ORANGE), -5.0, -3.0, 6.0, 4.0);
    g.draw_rect(Pixel::from(palette::css::LIME), -8.0, -6.0, 5.0, 4.0);
    g.fill_rect(Pixel::from(palette::css::TEAL), 2.0, -7.0, 4.0, 3.0);
    g.draw_circle(Pixel::from(palette::css::YELLOW), 0.0, 0.0, 4.0);
    g.fill_circle(Pixel::from(palette::css::CRIMSON), -4.0, 5.0, 2.0);

    // Nested layer: rotated a quarter turn about the world origin.
    g.push_transform(Transform::rotation(core::f32::consts::FRAC_PI_4).then(view.view_transform()));
    g.draw_line(Pixel::WHITE, 0.0, 0.0, 8.0, 0.0);
    g.pop_transform();
    g.pop_transform();

    // Images are placed in device space.
    g.draw_image(&checker, 8, 8, 32, 32);

    let cursor = view.cursor(&controller);
    let anchor = view.world_to_screen(cursor);
    for (i, ty) in [
        ReticleType::Grid,
        ReticleType::Midpoint,
        ReticleType::Endpoint,
        ReticleType::Intersection,
        ReticleType::None,
    ]
    .into_iter()
    .enumerate()
    {
        let offset = Vector2::new(12.0 * i as f32, 0.0);
        Reticle::from_type(ty).draw(&mut controller, anchor + offset);
    }

    drafter_demos::write_ppm(controller.image(), io::stdout().lock())
}

fn simulate_input(controller: &mut HeadlessController, view: &mut SnapViewfinder) {
    let frames = [
        (Vector2::new(100.0, 100.0), true, 0),
        (Vector2::new(120.0, 110.0), true, 0),
        (Vector2::new(140.0, 105.0), false, 0),
        (Vector2::new(140.0, 105.0), false, 2),
    ];
    for (position, pan_active, scroll_steps) in frames {
        let input = controller.input_mut();
        input.position = position;
        input.pan_active = pan_active;
        input.scroll_steps = scroll_steps;
        view.update(&*controller);
        controller.input_mut().end_frame();
    }
}

fn checkerboard(w: u32, h: u32) -> Image {
    let mut image = Image::new(w, h);
    for y in 0..h {
        for x in 0..w {
            let c = if (x + y) % 2 == 0 { Pixel::WHITE } else { Pixel::BLACK };
            image.set_pixel(x as i32, y as i32, c);
        }
    }
    image
}
