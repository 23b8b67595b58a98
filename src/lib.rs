/*
 * Heading-Frame Boid Simulation - Module Definitions
 *
 * This file defines the module structure for the simulation. The core
 * (vector, frame, agent, spawn, flock) is headless; the viewer modules
 * draw it with nannou and are only built with the `viewer` feature.
 */

// Re-export key components for easier access
pub use agent::{Agent, AgentId, AgentSnapshot};
pub use debug::{DebugInfo, TickReport};
pub use error::FlockError;
pub use flock::Flock;
pub use frame::Frame;
pub use params::{FlockParams, LocalTransform, SteeringRules};
pub use vector::Vector2;

// Define modules
pub mod agent;
pub mod debug;
pub mod error;
pub mod flock;
pub mod frame;
pub mod params;
pub mod spawn;
pub mod vector;

#[cfg(feature = "viewer")]
pub mod app;
#[cfg(feature = "viewer")]
pub mod input;
#[cfg(feature = "viewer")]
pub mod renderer;
#[cfg(feature = "viewer")]
pub mod ui;

// Constants
pub const ARENA_WIDTH: f64 = 800.0;
pub const ARENA_HEIGHT: f64 = 600.0;
pub const DEFAULT_POPULATION: usize = 20;
pub const SIGHT_RADIUS: f64 = 60.0;
pub const DEFAULT_SPEED: f64 = 3.0;
// Distance from an agent to its facing point
pub const FACING_DISTANCE: f64 = 20.0;
// Steering steps, in degrees per rule application
pub const COHESION_TURN: f64 = 3.0;
pub const SEPARATION_TURN: f64 = 10.0;
pub const ALIGNMENT_TURN: f64 = 3.0;
pub const COHESION_SPEED_DELTA: f64 = 1.0;
pub const SEPARATION_SPEED_DELTA: f64 = 1.0;
// Radius of the circle drawn for each agent
pub const AGENT_RADIUS: f32 = 5.0;
