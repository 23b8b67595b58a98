/*
 * Input Module
 *
 * This module handles user input events for the viewer.
 *
 * Keys:
 * - Space: pause or resume
 * - N: run a single tick while paused
 * - R: respawn every agent
 * - D: toggle the debug overlay
 */

use nannou::prelude::*;

use crate::app::Model;

// Key pressed event handler
pub fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    // Keys typed into the control panel belong to egui
    if model.egui.ctx().wants_keyboard_input() {
        return;
    }

    match key {
        Key::Space => model.controls.paused = !model.controls.paused,
        Key::N => model.controls.step_requested = true,
        Key::R => model.controls.reset_requested = true,
        Key::D => model.controls.show_debug = !model.controls.show_debug,
        _ => {}
    }
}

// Pass raw window events through to egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
