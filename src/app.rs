/*
 * Application Module
 *
 * This module defines the viewer's model and its per-frame update. The
 * viewer is a thin collaborator of the flock: it owns one Flock, runs a
 * configurable number of ticks per rendered frame, and hands the result to
 * the renderer. Launch parameters come from the command line and are
 * passed to nannou's model function through a process-wide cell.
 */

use std::sync::OnceLock;

use log::{info, warn};
use nannou::prelude::*;
use nannou_egui::Egui;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::debug::DebugInfo;
use crate::flock::Flock;
use crate::input;
use crate::params::FlockParams;
use crate::renderer;
use crate::ui::{self, Controls};

static LAUNCH_PARAMS: OnceLock<FlockParams> = OnceLock::new();

// Main model for the application
pub struct Model {
    pub flock: Flock<StdRng>,
    pub params: FlockParams,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub controls: Controls,
}

// Open the viewer window and block until it is closed
pub fn run(params: FlockParams) {
    if LAUNCH_PARAMS.set(params).is_err() {
        warn!("viewer launch parameters were already set, keeping the first ones");
    }
    nannou::app(model).update(update).run();
}

fn seeded_rng(params: &FlockParams) -> StdRng {
    match params.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let params = LAUNCH_PARAMS.get().cloned().unwrap_or_default();

    // The window starts at the arena size
    let window_id = app
        .new_window()
        .title("Frame Boids")
        .size(params.width as u32, params.height as u32)
        .view(renderer::view)
        .key_pressed(input::key_pressed)
        .raw_event(input::raw_window_event)
        .build()
        .unwrap();

    let window = app.window(window_id).unwrap();
    let egui = Egui::from_window(&window);

    let flock = Flock::from_params(&params, seeded_rng(&params))
        .expect("launch parameters are validated before the window opens");

    info!(
        "viewer started: {} agents, seed {:?}, {} ticks per frame",
        params.count, params.seed, params.ticks_per_frame
    );

    Model {
        flock,
        params,
        egui,
        debug_info: DebugInfo::default(),
        controls: Controls::default(),
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    let previous_count = model.params.count;
    let actions = ui::update_ui(
        &mut model.egui,
        &mut model.params,
        &mut model.controls,
        &model.debug_info,
    );

    let reset = actions.reset || std::mem::take(&mut model.controls.reset_requested);
    if model.params.count != previous_count {
        rebuild_flock(model);
    } else if reset {
        model.flock.reset();
        model.debug_info.clear_counters();
    }

    let single_step = actions.step || std::mem::take(&mut model.controls.step_requested);
    let ticks = if !model.controls.paused {
        model.params.ticks_per_frame as usize
    } else if single_step {
        1
    } else {
        0
    };

    model.debug_info.ticks_last_frame = 0;
    for _ in 0..ticks {
        let report = model.flock.tick();
        model.debug_info.record(&report);
    }
    model.debug_info.mean_speed = model.flock.mean_speed();
}

// Replace the flock after the population slider moved
fn rebuild_flock(model: &mut Model) {
    match Flock::from_params(&model.params, seeded_rng(&model.params)) {
        Ok(flock) => {
            model.flock = flock;
            model.debug_info.clear_counters();
        }
        Err(err) => warn!("keeping the current flock: {}", err),
    }
}
