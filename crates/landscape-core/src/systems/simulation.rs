//! Simulation Driver
//!
//! Hosts a run inside a bevy ECS world and steps it. Each step runs the
//! update schedule and then the observe schedule.
//!
//! Both schedules start empty. No rule for exchanging or adopting ideas across
//! network edges is defined here; callers supply one as ordinary systems that
//! read `Network`, `UtilityLandscape` and `SimRng` and mutate agent
//! components such as `Holdings`.

use bevy_ecs::prelude::*;
use rand::rngs::SmallRng;

use crate::components::agent::{AgentIndex, AgentState, Heterogeneity, Holdings, NetworkNode};
use crate::components::landscape::ProblemSpace;
use crate::components::network::Network;
use crate::setup::run::RunSetup;
use crate::systems::utility::UtilityLandscape;

/// Seeded random number generator resource
#[derive(Resource)]
pub struct SimRng(pub SmallRng);

/// Seed the run was built from
#[derive(Resource, Debug, Clone, Copy)]
pub struct RunSeed(pub u64);

/// Number of completed steps
#[derive(Resource, Debug, Default)]
pub struct StepCounter {
    pub current: u64,
}

/// A run ready to be stepped
pub struct LandscapeSimulation {
    world: World,
    update: Schedule,
    observe: Schedule,
}

impl LandscapeSimulation {
    /// Move the setup artifacts into a fresh world, one entity per agent.
    pub fn new(setup: RunSetup) -> Self {
        let mut world = World::new();
        world.insert_resource(RunSeed(setup.seed));
        world.insert_resource(setup.problem_space);
        world.insert_resource(setup.network);
        world.insert_resource(setup.landscape);
        world.insert_resource(SimRng(setup.rng));
        world.insert_resource(StepCounter::default());

        for agent in setup.agents {
            world.spawn(agent.into_bundle());
        }

        Self {
            world,
            update: Schedule::default(),
            observe: Schedule::default(),
        }
    }

    /// Register systems that change agent state each step.
    pub fn add_update_systems<M>(&mut self, systems: impl IntoSystemConfigs<M>) -> &mut Self {
        self.update.add_systems(systems);
        self
    }

    /// Register systems that record state after each update.
    pub fn add_observe_systems<M>(&mut self, systems: impl IntoSystemConfigs<M>) -> &mut Self {
        self.observe.add_systems(systems);
        self
    }

    /// Advance one step: bump the counter, run update, then observe.
    pub fn step(&mut self) {
        self.world.resource_mut::<StepCounter>().current += 1;
        self.update.run(&mut self.world);
        self.observe.run(&mut self.world);
    }

    pub fn run(&mut self, steps: u64) {
        for _ in 0..steps {
            self.step();
        }
        tracing::debug!(steps, current = self.current_step(), "simulation steps complete");
    }

    pub fn current_step(&self) -> u64 {
        self.world.resource::<StepCounter>().current
    }

    pub fn seed(&self) -> u64 {
        self.world.resource::<RunSeed>().0
    }

    pub fn problem_space(&self) -> &ProblemSpace {
        self.world.resource::<ProblemSpace>()
    }

    pub fn network(&self) -> &Network {
        self.world.resource::<Network>()
    }

    pub fn landscape(&self) -> &UtilityLandscape {
        self.world.resource::<UtilityLandscape>()
    }

    /// Current agent state, in agent order
    pub fn agent_states(&mut self) -> Vec<AgentState> {
        let mut query = self
            .world
            .query::<(&AgentIndex, &Holdings, &Heterogeneity, &NetworkNode)>();
        let mut states: Vec<AgentState> = query
            .iter(&self.world)
            .map(|(index, holdings, xi, node)| AgentState {
                index: index.0,
                holdings: holdings.0.clone(),
                heterogeneity: xi.0,
                node: node.0,
            })
            .collect();
        states.sort_by_key(|s| s.index);
        states
    }

    /// Run `f` with read access to the world and the run's random stream.
    pub fn with_rng<U>(&mut self, f: impl FnOnce(&World, &mut SmallRng) -> U) -> U {
        self.world
            .resource_scope(|world, mut rng: Mut<SimRng>| f(world, &mut rng.0))
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
