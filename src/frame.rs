/*
 * Frame Module
 *
 * This module defines the oriented coordinate frame each agent carries.
 * A frame is a position plus a heading in degrees and is the only place
 * where angle math happens:
 * 1. Forward motion along the current heading
 * 2. In-place rotation (the heading is an unbounded accumulator)
 * 3. Conversion of points between the local frame and world space
 */

use serde::{Deserialize, Serialize};

use crate::vector::Vector2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    position: Vector2,
    heading: f64,
}

impl Frame {
    pub fn new(position: Vector2, heading: f64) -> Self {
        Self { position, heading }
    }

    pub fn position(&self) -> Vector2 {
        self.position
    }

    // Raw heading in degrees, may lie far outside [0, 360) after many ticks
    pub fn heading(&self) -> f64 {
        self.heading
    }

    // Heading wrapped into [0, 360) for display; the stored value is untouched
    pub fn normalized_heading(&self) -> f64 {
        self.heading.rem_euclid(360.0)
    }

    fn radians(&self) -> f64 {
        self.heading * std::f64::consts::PI / 180.0
    }

    pub fn move_forward(&mut self, distance: f64) {
        let angle = self.radians();
        self.position = self.position + Vector2::new(angle.cos(), angle.sin()) * distance;
    }

    pub fn rotate(&mut self, delta_degrees: f64) {
        self.heading += delta_degrees;
    }

    /// Rotates `local` by the heading and translates it by the position.
    pub fn to_world(&self, local: Vector2) -> Vector2 {
        let (sin, cos) = self.radians().sin_cos();
        Vector2::new(
            local.x * cos - local.y * sin + self.position.x,
            local.x * sin + local.y * cos + self.position.y,
        )
    }

    /// Maps a world point into the steering frame.
    ///
    /// This applies the same heading rotation and position translation as
    /// [`Frame::to_world`], so it does not invert it. Steering decisions in
    /// the default configuration depend on exactly this mapping; use
    /// [`Frame::to_local_inverse`] for the geometric inverse.
    pub fn to_local(&self, world: Vector2) -> Vector2 {
        let (sin, cos) = self.radians().sin_cos();
        Vector2::new(
            world.x * cos - world.y * sin + self.position.x,
            world.x * sin + world.y * cos + self.position.y,
        )
    }

    /// True inverse of [`Frame::to_world`].
    pub fn to_local_inverse(&self, world: Vector2) -> Vector2 {
        let (sin, cos) = self.radians().sin_cos();
        let offset = world - self.position;
        Vector2::new(
            offset.x * cos + offset.y * sin,
            -offset.x * sin + offset.y * cos,
        )
    }
}
