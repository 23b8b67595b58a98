/*
 * Agent Module
 *
 * This module defines the Agent struct, the simulated bird. Each agent owns
 * a Frame and a per-tick speed and steers by rotating that frame.
 * Every tick it moves forward first and then applies three rules, always in
 * this order because each rotation changes the local frame the next rule
 * reads:
 * 1. Cohesion: turn towards the centroid of neighbors in sight, speed up
 * 2. Separation: turn away from that same centroid, slow down
 * 3. Alignment: turn towards the average heading vector of neighbors
 */

use log::trace;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::frame::Frame;
use crate::params::{LocalTransform, SteeringRules};
use crate::spawn;
use crate::vector::Vector2;
use crate::{DEFAULT_SPEED, SIGHT_RADIUS};

pub type AgentId = usize;

// Renderer-facing record of one agent after a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgentSnapshot {
    pub id: AgentId,
    pub x: f64,
    pub y: f64,
    pub heading: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    id: AgentId,
    frame: Frame,
    speed: f64,
    sight_radius: f64,
    rules: SteeringRules,
}

impl Agent {
    // Spawn an agent at (x, y) facing a uniformly random heading
    pub fn new<R: Rng + ?Sized>(id: AgentId, x: f64, y: f64, rng: &mut R) -> Self {
        let heading = spawn::random_heading(rng);
        Self::with_heading(id, x, y, heading)
    }

    pub fn with_heading(id: AgentId, x: f64, y: f64, heading: f64) -> Self {
        Self {
            id,
            frame: Frame::new(Vector2::new(x, y), heading),
            speed: DEFAULT_SPEED,
            sight_radius: SIGHT_RADIUS,
            rules: SteeringRules::default(),
        }
    }

    pub fn with_rules(mut self, rules: SteeringRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_sight_radius(mut self, sight_radius: f64) -> Self {
        self.sight_radius = sight_radius;
        self
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    pub fn id(&self) -> AgentId {
        self.id
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn sight_radius(&self) -> f64 {
        self.sight_radius
    }

    pub fn rules(&self) -> &SteeringRules {
        &self.rules
    }

    pub fn world_position(&self) -> Vector2 {
        self.frame.to_world(Vector2::zero())
    }

    // Point a fixed distance ahead along the heading
    pub fn facing_point(&self) -> Vector2 {
        self.frame
            .to_world(Vector2::new(self.rules.facing_distance, 0.0))
    }

    pub fn heading_vector(&self) -> Vector2 {
        self.facing_point() - self.world_position()
    }

    pub fn snapshot(&self) -> AgentSnapshot {
        let position = self.world_position();
        AgentSnapshot {
            id: self.id,
            x: position.x,
            y: position.y,
            heading: self.frame.heading(),
        }
    }

    /// Advances the agent by one tick.
    ///
    /// `neighbor_positions` and `neighbor_directions` describe every other
    /// agent as it was before anyone moved this tick. Directions are heading
    /// vectors relative to their owner, and they are filtered by their own
    /// distance to this agent, not shifted back onto the owner's position.
    pub fn step(&mut self, neighbor_positions: &[Vector2], neighbor_directions: &[Vector2]) {
        self.frame.move_forward(self.speed);

        self.cohesion(neighbor_positions);
        self.separation(neighbor_positions);
        self.alignment(neighbor_directions);

        if let Some(limit) = self.rules.speed_limit {
            self.speed = self.speed.clamp(-limit, limit);
        }
    }

    // Release the rendering resource tied to this agent
    pub fn destroy(self) {
        trace!("agent {} destroyed at {:?}", self.id, self.world_position());
    }

    // Neighbors strictly inside the sight radius of the current position
    fn in_sight(&self, points: &[Vector2]) -> Vec<Vector2> {
        let position = self.world_position();
        points
            .iter()
            .copied()
            .filter(|point| point.distance(position) < self.sight_radius)
            .collect()
    }

    fn to_local(&self, point: Vector2) -> Vector2 {
        match self.rules.local_transform {
            LocalTransform::Forward => self.frame.to_local(point),
            LocalTransform::Inverse => self.frame.to_local_inverse(point),
        }
    }

    // Turn by `turn` degrees when the target lies on the positive-y side, else by -turn
    fn turn_towards(&mut self, target: Vector2, turn: f64) {
        let local = self.to_local(target);
        if local.y > 0.0 {
            self.frame.rotate(turn);
        } else {
            self.frame.rotate(-turn);
        }
    }

    fn cohesion(&mut self, neighbor_positions: &[Vector2]) {
        let Some(centroid) = Vector2::centroid(&self.in_sight(neighbor_positions)) else {
            return;
        };
        self.speed += self.rules.cohesion_speed_delta;
        self.turn_towards(centroid, self.rules.cohesion_turn);
    }

    fn separation(&mut self, neighbor_positions: &[Vector2]) {
        let Some(centroid) = Vector2::centroid(&self.in_sight(neighbor_positions)) else {
            return;
        };
        self.speed -= self.rules.separation_speed_delta;
        self.turn_towards(centroid, -self.rules.separation_turn);
    }

    fn alignment(&mut self, neighbor_directions: &[Vector2]) {
        let Some(average) = Vector2::centroid(&self.in_sight(neighbor_directions)) else {
            return;
        };
        self.turn_towards(average, self.rules.alignment_turn);
    }
}
