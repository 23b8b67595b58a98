/*
 * UI Module
 *
 * This module contains functions for creating and updating the user interface
 * using nannou_egui. It provides controls for pausing, stepping and
 * resetting the flock and shows the running statistics.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::FlockParams;

// Viewer state toggled from the panel or the keyboard
#[derive(Debug, Clone, Default)]
pub struct Controls {
    pub paused: bool,
    pub show_debug: bool,
    pub step_requested: bool,
    pub reset_requested: bool,
}

// Buttons clicked during this frame
#[derive(Debug, Clone, Copy, Default)]
pub struct UiActions {
    pub reset: bool,
    pub step: bool,
}

pub fn update_ui(
    egui: &mut Egui,
    params: &mut FlockParams,
    controls: &mut Controls,
    debug_info: &DebugInfo,
) -> UiActions {
    let mut actions = UiActions::default();

    let ctx = egui.begin_frame();

    egui::Window::new("Simulation Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Flock", |ui| {
                ui.add(
                    egui::Slider::new(&mut params.count, FlockParams::get_count_range())
                        .text("Number of Agents"),
                );
                ui.add(
                    egui::Slider::new(
                        &mut params.ticks_per_frame,
                        FlockParams::get_ticks_per_frame_range(),
                    )
                    .text("Ticks per Frame"),
                );

                ui.horizontal(|ui| {
                    if ui.button("Reset").clicked() {
                        actions.reset = true;
                    }
                    if ui.button("Step").clicked() {
                        actions.step = true;
                    }
                });
            });

            ui.collapsing("Statistics", |ui| {
                ui.label(format!("FPS: {:.1}", debug_info.fps));
                ui.label(format!(
                    "Frame time: {:.2} ms",
                    debug_info.frame_time.as_secs_f64() * 1000.0
                ));
                ui.label(format!("Ticks: {}", debug_info.ticks));
                ui.label(format!("Respawns: {}", debug_info.respawns));
                ui.label(format!("Mean speed: {:.2}", debug_info.mean_speed));
            });

            ui.checkbox(&mut controls.show_debug, "Show Debug Info");
            ui.checkbox(&mut controls.paused, "Pause Simulation");
        });

    actions
}

// Draw debug information on the screen
pub fn draw_debug_info(
    draw: &nannou::Draw,
    debug_info: &DebugInfo,
    window_rect: nannou::geom::Rect,
    agent_count: usize,
) {
    let margin = 20.0;
    let line_height = 20.0;

    let text_x = window_rect.left() + margin;
    let text_y = window_rect.top() - margin;

    let debug_texts = [
        format!("FPS: {:.1}", debug_info.fps),
        format!("Agents: {}", agent_count),
        format!("Ticks: {} (+{} this frame)", debug_info.ticks, debug_info.ticks_last_frame),
        format!("Respawns: {}", debug_info.respawns),
        format!("Mean speed: {:.2}", debug_info.mean_speed),
    ];

    for (i, text) in debug_texts.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        draw.text(text)
            .x_y(text_x + 70.0, y)
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
