/*
 * Debug Information Module
 *
 * This module defines what a tick reports back to its caller and the
 * running metrics the viewer displays:
 * - FPS (frames per second) and frame time
 * - Ticks run and agents respawned so far
 * - Mean agent speed after the last tick
 */

use std::time::Duration;

use crate::agent::AgentId;

// Outcome of a single Flock::tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    pub tick: u64,
    pub stepped: usize,
    pub respawned: Vec<AgentId>,
}

// Debug information to display
#[derive(Debug, Clone)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub ticks: u64,
    pub respawns: u64,
    pub ticks_last_frame: usize,
    pub mean_speed: f64,
}

impl Default for DebugInfo {
    fn default() -> Self {
        Self {
            fps: 0.0,
            frame_time: Duration::ZERO,
            ticks: 0,
            respawns: 0,
            ticks_last_frame: 0,
            mean_speed: 0.0,
        }
    }
}

impl DebugInfo {
    pub fn record(&mut self, report: &TickReport) {
        self.ticks = report.tick;
        self.respawns += report.respawned.len() as u64;
        self.ticks_last_frame += 1;
    }

    // Forget counters after the flock is reset
    pub fn clear_counters(&mut self) {
        self.ticks = 0;
        self.respawns = 0;
        self.ticks_last_frame = 0;
        self.mean_speed = 0.0;
    }
}
