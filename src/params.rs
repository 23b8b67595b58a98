/*
 * Simulation Parameters Module
 *
 * This module defines FlockParams and SteeringRules, the configurable side
 * of the simulation. Every default is one of the named constants from the
 * crate root, so a default-constructed flock behaves exactly like the fixed
 * rule set. Parameters can be loaded from a TOML file and are validated
 * before a flock is built from them.
 */

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FlockError, Result};
use crate::{
    ALIGNMENT_TURN, ARENA_HEIGHT, ARENA_WIDTH, COHESION_SPEED_DELTA, COHESION_TURN,
    DEFAULT_POPULATION, DEFAULT_SPEED, FACING_DISTANCE, SEPARATION_SPEED_DELTA,
    SEPARATION_TURN, SIGHT_RADIUS,
};

// How an agent maps a world point into its steering frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocalTransform {
    /// `Frame::to_local`: same rotation and translation as `to_world`
    #[default]
    Forward,
    /// `Frame::to_local_inverse`: the geometric inverse of `to_world`
    Inverse,
}

// Rule constants carried by every agent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SteeringRules {
    pub cohesion_turn: f64,
    pub separation_turn: f64,
    pub alignment_turn: f64,
    pub cohesion_speed_delta: f64,
    pub separation_speed_delta: f64,
    pub facing_distance: f64,
    // Absolute speed cap; None leaves speed unbounded
    pub speed_limit: Option<f64>,
    pub local_transform: LocalTransform,
}

impl Default for SteeringRules {
    fn default() -> Self {
        Self {
            cohesion_turn: COHESION_TURN,
            separation_turn: SEPARATION_TURN,
            alignment_turn: ALIGNMENT_TURN,
            cohesion_speed_delta: COHESION_SPEED_DELTA,
            separation_speed_delta: SEPARATION_SPEED_DELTA,
            facing_distance: FACING_DISTANCE,
            speed_limit: None,
            local_transform: LocalTransform::Forward,
        }
    }
}

// Parameters for building and driving a flock
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlockParams {
    pub count: usize,
    pub width: f64,
    pub height: f64,
    pub sight_radius: f64,
    pub speed: f64,
    pub seed: Option<u64>,
    // Ticks run per rendered frame in the viewer
    pub ticks_per_frame: u32,
    pub rules: SteeringRules,
}

impl Default for FlockParams {
    fn default() -> Self {
        Self {
            count: DEFAULT_POPULATION,
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
            sight_radius: SIGHT_RADIUS,
            speed: DEFAULT_SPEED,
            seed: None,
            ticks_per_frame: 1,
            rules: SteeringRules::default(),
        }
    }
}

impl FlockParams {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let params: FlockParams = toml::from_str(text)?;
        params.validate()?;
        Ok(params)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    // Reject parameters that cannot describe an arena or a rule set
    pub fn validate(&self) -> Result<()> {
        validate_arena(self.width, self.height)?;
        if !(self.sight_radius.is_finite() && self.sight_radius >= 0.0) {
            return Err(FlockError::InvalidConfig(format!(
                "sight radius must be non-negative, got {}",
                self.sight_radius
            )));
        }
        if !self.speed.is_finite() {
            return Err(FlockError::InvalidConfig(format!(
                "initial speed must be finite, got {}",
                self.speed
            )));
        }
        if self.ticks_per_frame == 0 {
            return Err(FlockError::InvalidConfig(
                "ticks per frame must be at least 1".to_string(),
            ));
        }
        if let Some(limit) = self.rules.speed_limit {
            if !(limit.is_finite() && limit > 0.0) {
                return Err(FlockError::InvalidConfig(format!(
                    "speed limit must be positive, got {}",
                    limit
                )));
            }
        }
        Ok(())
    }

    // Validation plus the ranges the viewer's sliders can represent
    pub fn validate_for_viewer(&self) -> Result<()> {
        self.validate()?;
        let counts = Self::get_count_range();
        if !counts.contains(&self.count) {
            return Err(FlockError::InvalidConfig(format!(
                "agent count must be within {}..={}, got {}",
                counts.start(),
                counts.end(),
                self.count
            )));
        }
        let ticks = Self::get_ticks_per_frame_range();
        if !ticks.contains(&self.ticks_per_frame) {
            return Err(FlockError::InvalidConfig(format!(
                "ticks per frame must be within {}..={}, got {}",
                ticks.start(),
                ticks.end(),
                self.ticks_per_frame
            )));
        }
        Ok(())
    }

    // Get parameter ranges for UI sliders
    pub fn get_count_range() -> std::ops::RangeInclusive<usize> {
        1..=500
    }

    pub fn get_ticks_per_frame_range() -> std::ops::RangeInclusive<u32> {
        1..=20
    }
}

// Arena sides must be finite and positive
pub fn validate_arena(width: f64, height: f64) -> Result<()> {
    if !(width.is_finite() && width > 0.0) {
        return Err(FlockError::InvalidConfig(format!(
            "arena width must be positive, got {}",
            width
        )));
    }
    if !(height.is_finite() && height > 0.0) {
        return Err(FlockError::InvalidConfig(format!(
            "arena height must be positive, got {}",
            height
        )));
    }
    Ok(())
}
