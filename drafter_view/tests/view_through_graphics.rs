// Copyright 2025 the Drafter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The viewfinder's transform, pushed onto a `Graphics`, agrees with its
//! own screen/world mapping.

use drafter_math::Vector2;
use drafter_raster::Pixel;
use drafter_view::{Controller, HeadlessController, SnapCapable, SnapViewfinder, Viewfinder};

fn lit(controller: &HeadlessController) -> Vec<(i32, i32)> {
    let image = controller.image();
    let (w, h) = (image.width() as i32, image.height() as i32);
    let mut out = Vec::new();
    for y in 0..h {
        for x in 0..w {
            if image.pixel(x, y) == Some(Pixel::WHITE) {
                out.push((x, y));
            }
        }
    }
    out
}

#[test]
fn world_point_lands_where_world_to_screen_says() {
    let mut c = HeadlessController::new(100, 80);
    let mut view = SnapViewfinder::new();
    view.zero(&c);
    view.set_scale(4.0);
    view.pan(-6.0, 2.0);

    let world = Vector2::new(3.0, -2.0);
    let screen = view.world_to_screen(world);

    let g = c.graphics_mut();
    g.push_transform(view.view_transform());
    g.draw_line(Pixel::WHITE, world.x, world.y, world.x, world.y);
    g.pop_transform();

    assert_eq!(lit(&c), vec![(screen.x as i32, screen.y as i32)]);
}

#[test]
fn cursor_round_trips_through_the_view() {
    let mut c = HeadlessController::new(200, 200);
    let mut view = SnapViewfinder::new();
    view.zero(&c);
    view.zoom(6);
    if let Some(snap) = view.as_snap_mut() {
        snap.snap(0.0);
    }

    for p in [
        Vector2::new(0.0, 0.0),
        Vector2::new(17.5, 133.25),
        Vector2::new(199.0, 1.0),
    ] {
        c.input_mut().position = p;
        let world = view.cursor(&c);
        let back = view.view_transform().apply(world);
        assert!((back - p).length() < 1e-3, "{p:?} -> {world:?} -> {back:?}");
    }
}

#[test]
fn snapped_cursor_sits_on_a_grid_intersection() {
    let mut c = HeadlessController::new(64, 64);
    let mut view = SnapViewfinder::new();
    view.zero(&c);
    view.set_scale(8.0);
    c.input_mut().position = Vector2::new(45.0, 21.0);

    // (45 - 32) / 8 = 1.625 -> 1.5; (21 - 32) / 8 = -1.375 -> -1.5
    assert_eq!(view.grid_size(), 0.5);
    assert_eq!(view.cursor(&c), Vector2::new(1.5, -1.5));
}

#[test]
fn a_drag_moves_drawn_content_with_the_pointer() {
    let mut c = HeadlessController::new(64, 64);
    let mut view = SnapViewfinder::new();
    view.set_scale(2.0);

    let frames = [(10.0, 10.0, true), (25.0, 14.0, true), (25.0, 14.0, false)];
    for (x, y, held) in frames {
        c.input_mut().position = Vector2::new(x, y);
        c.input_mut().pan_active = held;
        view.update(&c);
    }
    assert_eq!(view.pan_offset(), Vector2::new(15.0, 4.0));

    let g = c.graphics_mut();
    g.push_transform(view.view_transform());
    g.set_pixel(Pixel::BLACK, 0, 0);
    g.draw_line(Pixel::WHITE, 1.0, 1.0, 1.0, 1.0);
    g.pop_transform();
    assert_eq!(lit(&c), vec![(17, 6)]);
}

#[test]
fn visible_rect_matches_the_viewport_corners() {
    let c = HeadlessController::new(120, 90);
    let mut view = SnapViewfinder::new();
    view.zero(&c);
    view.set_scale(3.0);

    let rect = view.visible_world_rect(c.graphics().dimensions());
    assert_eq!(rect.x0, -20.0);
    assert_eq!(rect.y0, -15.0);
    assert_eq!(rect.x1, 20.0);
    assert_eq!(rect.y1, 15.0);
}
