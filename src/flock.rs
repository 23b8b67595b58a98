/*
 * Flock Module
 *
 * This module defines the Flock, the simulation driver. It owns every agent
 * and advances the population one tick at a time:
 * 1. Snapshot each agent's position and heading vector before anyone moves
 * 2. Walk the agents in insertion order, handing each the snapshot of all
 *    other agents
 * 3. An agent whose pre-tick position lies outside the arena is destroyed
 *    and replaced in its slot by a fresh agent with the same id; the
 *    replacement does not step until the next tick
 */

use std::collections::HashSet;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::Rng;

use crate::agent::{Agent, AgentId, AgentSnapshot};
use crate::debug::TickReport;
use crate::error::{FlockError, Result};
use crate::params::{validate_arena, FlockParams, SteeringRules};
use crate::spawn;
use crate::vector::Vector2;
use crate::{DEFAULT_SPEED, SIGHT_RADIUS};

pub struct Flock<R: Rng = StdRng> {
    agents: Vec<Agent>,
    width: f64,
    height: f64,
    sight_radius: f64,
    speed: f64,
    rules: SteeringRules,
    rng: R,
    ticks: u64,
}

impl<R: Rng> Flock<R> {
    // Spawn `count` agents with ids 0..count at random edge points.
    // Width and height must be finite and positive; use from_params to
    // get an error instead.
    pub fn new(count: usize, width: f64, height: f64, rng: R) -> Self {
        debug_assert!(
            validate_arena(width, height).is_ok(),
            "invalid arena {}x{}",
            width,
            height
        );
        let params = FlockParams {
            count,
            width,
            height,
            ..FlockParams::default()
        };
        Self::build(&params, rng)
    }

    pub fn from_params(params: &FlockParams, rng: R) -> Result<Self> {
        params.validate()?;
        Ok(Self::build(params, rng))
    }

    /// Adopts hand-placed agents, keeping their order and ids.
    ///
    /// The agents keep their own sight radius and rules until they leave
    /// the arena. Replacements are spawned with the flock's defaults, which
    /// [`Flock::with_rules`], [`Flock::with_sight_radius`] and
    /// [`Flock::with_speed`] override.
    pub fn from_agents(agents: Vec<Agent>, width: f64, height: f64, rng: R) -> Result<Self> {
        validate_arena(width, height)?;

        let mut ids = HashSet::with_capacity(agents.len());
        for agent in &agents {
            if !ids.insert(agent.id()) {
                return Err(FlockError::DuplicateAgentId(agent.id()));
            }
        }

        Ok(Self {
            agents,
            width,
            height,
            sight_radius: SIGHT_RADIUS,
            speed: DEFAULT_SPEED,
            rules: SteeringRules::default(),
            rng,
            ticks: 0,
        })
    }

    // Rules given to agents spawned from now on
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

    fn build(params: &FlockParams, rng: R) -> Self {
        let mut flock = Self {
            agents: Vec::with_capacity(params.count),
            width: params.width,
            height: params.height,
            sight_radius: params.sight_radius,
            speed: params.speed,
            rules: params.rules,
            rng,
            ticks: 0,
        };

        for id in 0..params.count {
            let agent = flock.spawn(id);
            flock.agents.push(agent);
        }

        info!(
            "flock of {} agents in a {}x{} arena",
            flock.agents.len(),
            flock.width,
            flock.height
        );
        flock
    }

    // Create an agent at a random edge point with a random heading
    fn spawn(&mut self, id: AgentId) -> Agent {
        let point = spawn::edge_point(&mut self.rng, self.width, self.height);
        Agent::new(id, point.x, point.y, &mut self.rng)
            .with_speed(self.speed)
            .with_sight_radius(self.sight_radius)
            .with_rules(self.rules)
    }

    fn respawn(&mut self, slot: usize) {
        let id = self.agents[slot].id();
        let replacement = self.spawn(id);
        let position = replacement.world_position();
        let old = std::mem::replace(&mut self.agents[slot], replacement);
        debug!(
            "agent {} left the arena at {:?}, respawned at {:?}",
            id,
            old.world_position(),
            position
        );
        old.destroy();
    }

    /// Advances every agent by one tick.
    ///
    /// All agents perceive the same pre-tick world: the neighbor lists are
    /// built from one snapshot taken before the first agent moves.
    pub fn tick(&mut self) -> TickReport {
        let snapshot: Vec<(AgentId, Vector2, Vector2)> = self
            .agents
            .iter()
            .map(|agent| (agent.id(), agent.world_position(), agent.heading_vector()))
            .collect();

        let mut report = TickReport::default();
        let mut positions = Vec::with_capacity(snapshot.len());
        let mut directions = Vec::with_capacity(snapshot.len());

        for (slot, &(id, position, _)) in snapshot.iter().enumerate() {
            if !self.contains(position) {
                self.respawn(slot);
                report.respawned.push(id);
                continue;
            }

            positions.clear();
            directions.clear();
            for &(other, other_position, other_direction) in &snapshot {
                if other != id {
                    positions.push(other_position);
                    directions.push(other_direction);
                }
            }

            self.agents[slot].step(&positions, &directions);
            report.stepped += 1;
        }

        self.ticks += 1;
        report.tick = self.ticks;
        report
    }

    // Respawn every agent at a fresh edge point, keeping ids
    pub fn reset(&mut self) {
        for slot in 0..self.agents.len() {
            let id = self.agents[slot].id();
            let replacement = self.spawn(id);
            std::mem::replace(&mut self.agents[slot], replacement).destroy();
        }
        self.ticks = 0;
        info!("flock of {} agents reset", self.agents.len());
    }

    // Inclusive arena bounds [0, width] x [0, height]
    pub fn contains(&self, point: Vector2) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        self.agents.iter().find(|agent| agent.id() == id)
    }

    pub fn snapshot(&self) -> Vec<AgentSnapshot> {
        self.agents.iter().map(Agent::snapshot).collect()
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn mean_speed(&self) -> f64 {
        if self.agents.is_empty() {
            return 0.0;
        }
        self.agents.iter().map(Agent::speed).sum::<f64>() / self.agents.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spawn::tests::ScriptedRng;
    use rand::SeedableRng;

    #[test]
    fn new_spawns_agents_on_the_edges() {
        let flock = Flock::new(20, 800.0, 600.0, StdRng::seed_from_u64(1));
        assert_eq!(flock.len(), 20);
        for (slot, agent) in flock.agents().iter().enumerate() {
            assert_eq!(agent.id(), slot);
            assert!(spawn::edge_of(agent.world_position(), 800.0, 600.0).is_some());
            assert_eq!(agent.speed(), 3.0);
        }
    }

    #[test]
    fn spawn_draws_edge_then_heading() {
        // selector 0.5 -> top edge, coordinate 0.25 -> x = 200, heading 0.75 -> 270
        let flock = Flock::new(1, 800.0, 600.0, ScriptedRng::new(&[0.5, 0.25, 0.75]));
        let agent = &flock.agents()[0];
        assert_eq!(agent.world_position(), Vector2::new(200.0, 0.0));
        assert_eq!(agent.frame().heading(), 270.0);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let agents = vec![
            Agent::with_heading(3, 10.0, 10.0, 0.0),
            Agent::with_heading(3, 20.0, 10.0, 0.0),
        ];
        let err = Flock::from_agents(agents, 800.0, 600.0, StdRng::seed_from_u64(0))
            .err()
            .unwrap();
        assert!(matches!(err, FlockError::DuplicateAgentId(3)));
    }

    #[test]
    fn invalid_arena_is_rejected_for_adopted_agents() {
        let agent = Agent::with_heading(0, 10.0, 10.0, 0.0);
        let err = Flock::from_agents(vec![agent], f64::NAN, -5.0, StdRng::seed_from_u64(0))
            .err()
            .unwrap();
        assert!(matches!(err, FlockError::InvalidConfig(_)));

        let agent = Agent::with_heading(0, 10.0, 10.0, 0.0);
        assert!(Flock::from_agents(vec![agent], 800.0, 0.0, StdRng::seed_from_u64(0)).is_err());
    }

    #[test]
    fn respawn_uses_flock_defaults_unless_overridden() {
        let rules = SteeringRules {
            separation_turn: 4.0,
            ..SteeringRules::default()
        };

        let stray = Agent::with_heading(0, 900.0, 10.0, 0.0)
            .with_sight_radius(10.0)
            .with_rules(rules);
        let mut flock = Flock::from_agents(vec![stray], 800.0, 600.0, StdRng::seed_from_u64(1)).unwrap();
        flock.tick();
        assert_eq!(flock.agents()[0].sight_radius(), 60.0);
        assert_eq!(flock.agents()[0].rules(), &SteeringRules::default());

        let stray = Agent::with_heading(0, 900.0, 10.0, 0.0)
            .with_sight_radius(10.0)
            .with_rules(rules);
        let mut flock = Flock::from_agents(vec![stray], 800.0, 600.0, StdRng::seed_from_u64(1))
            .unwrap()
            .with_sight_radius(10.0)
            .with_rules(rules)
            .with_speed(2.0);
        let report = flock.tick();
        assert_eq!(report.respawned, vec![0]);
        let agent = &flock.agents()[0];
        assert_eq!(agent.sight_radius(), 10.0);
        assert_eq!(agent.rules(), &rules);
        assert_eq!(agent.speed(), 2.0);
    }

    #[test]
    fn from_params_validates() {
        let params = FlockParams {
            height: -1.0,
            ..FlockParams::default()
        };
        assert!(Flock::from_params(&params, StdRng::seed_from_u64(0)).is_err());
    }

    #[test]
    fn from_params_carries_rules_into_agents() {
        let params = FlockParams {
            count: 4,
            sight_radius: 25.0,
            speed: 1.5,
            ..FlockParams::default()
        };
        let flock = Flock::from_params(&params, StdRng::seed_from_u64(9)).unwrap();
        for agent in flock.agents() {
            assert_eq!(agent.sight_radius(), 25.0);
            assert_eq!(agent.speed(), 1.5);
            assert_eq!(agent.rules(), &params.rules);
        }
    }

    #[test]
    fn bounds_are_inclusive() {
        let flock = Flock::new(0, 800.0, 600.0, StdRng::seed_from_u64(0));
        assert!(flock.contains(Vector2::new(0.0, 0.0)));
        assert!(flock.contains(Vector2::new(800.0, 600.0)));
        assert!(!flock.contains(Vector2::new(800.1, 300.0)));
        assert!(!flock.contains(Vector2::new(400.0, -0.1)));
        assert!(flock.is_empty());
    }

    #[test]
    fn neighbor_lists_exclude_self_and_use_the_pre_tick_snapshot() {
        // a moves first; b must still see a at its pre-tick position
        let a = Agent::with_heading(0, 100.0, 100.0, 0.0);
        let b = Agent::with_heading(1, 150.0, 100.0, 180.0);
        let mut flock = Flock::from_agents(vec![a, b], 800.0, 600.0, StdRng::seed_from_u64(0)).unwrap();

        let mut expected_a = Agent::with_heading(0, 100.0, 100.0, 0.0);
        let mut expected_b = Agent::with_heading(1, 150.0, 100.0, 180.0);
        let a_pos = expected_a.world_position();
        let a_dir = expected_a.heading_vector();
        let b_pos = expected_b.world_position();
        let b_dir = expected_b.heading_vector();
        expected_a.step(&[b_pos], &[b_dir]);
        expected_b.step(&[a_pos], &[a_dir]);

        let report = flock.tick();
        assert_eq!(report.stepped, 2);
        assert!(report.respawned.is_empty());
        assert_eq!(flock.get(0), Some(&expected_a));
        assert_eq!(flock.get(1), Some(&expected_b));
    }

    #[test]
    fn reset_keeps_ids_and_count() {
        let mut flock = Flock::new(6, 800.0, 600.0, StdRng::seed_from_u64(5));
        for _ in 0..10 {
            flock.tick();
        }
        flock.reset();
        assert_eq!(flock.ticks(), 0);
        let ids: Vec<_> = flock.agents().iter().map(Agent::id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4, 5]);
        for agent in flock.agents() {
            assert!(spawn::edge_of(agent.world_position(), 800.0, 600.0).is_some());
        }
    }
}
