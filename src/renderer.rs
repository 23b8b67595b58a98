/*
 * Renderer Module
 *
 * This module draws the flock. The arena uses canvas coordinates (origin
 * top-left, y down) while nannou's window is centered with y up, so every
 * point goes through arena_to_window. The arena is scaled uniformly to fit
 * the window when it is resized.
 *
 * Each agent is a filled circle with a short line towards its facing point.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::ui;
use crate::vector::Vector2;
use crate::AGENT_RADIUS;

// Uniform scale that fits the arena inside the window
fn fit_scale(arena_width: f64, arena_height: f64, window_rect: Rect) -> f32 {
    let sx = window_rect.w() / arena_width as f32;
    let sy = window_rect.h() / arena_height as f32;
    sx.min(sy)
}

// Convert an arena point to window coordinates
pub fn arena_to_window(point: Vector2, arena_width: f64, arena_height: f64, window_rect: Rect) -> Point2 {
    let scale = fit_scale(arena_width, arena_height, window_rect);
    let x = (point.x - arena_width / 2.0) as f32 * scale;
    let y = (arena_height / 2.0 - point.y) as f32 * scale;
    pt2(x, y) + window_rect.xy()
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(BLACK);

    let window_rect = app.window_rect();
    let width = model.flock.width();
    let height = model.flock.height();
    let scale = fit_scale(width, height, window_rect);

    // Arena boundary; agents outside it are respawned on the next tick
    draw.rect()
        .xy(window_rect.xy())
        .w_h(width as f32 * scale, height as f32 * scale)
        .no_fill()
        .stroke_weight(1.0)
        .stroke(rgba(0.3, 0.3, 0.3, 1.0));

    for agent in model.flock.agents() {
        let body = arena_to_window(agent.world_position(), width, height, window_rect);
        let nose = arena_to_window(agent.facing_point(), width, height, window_rect);

        draw.ellipse()
            .xy(body)
            .radius(AGENT_RADIUS * scale)
            .color(rgb(0.6, 0.4, 1.0));

        draw.line()
            .start(body)
            .end(nose)
            .weight(1.5)
            .color(rgb(0.98, 0.0, 0.0));
    }

    if model.controls.show_debug {
        // Sight radius of the first agent
        if let Some(first) = model.flock.agents().first() {
            let center = arena_to_window(first.world_position(), width, height, window_rect);
            draw.ellipse()
                .xy(center)
                .radius(first.sight_radius() as f32 * scale)
                .no_fill()
                .stroke(GREEN)
                .stroke_weight(1.0);
        }

        ui::draw_debug_info(&draw, &model.debug_info, window_rect, model.flock.len());
    }

    draw.to_frame(app, &frame).unwrap();

    model.egui.draw_to_frame(&frame).unwrap();
}
