//! Run Setup
//!
//! Builds every artifact of a run from one configuration value, in a fixed
//! order so a seed always reproduces the same run:
//!
//! 1. problem space (no randomness)
//! 2. network (its own stream, seeded with the run seed)
//! 3. representative set (main stream)
//! 4. agents (main stream)

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::components::agent::AgentState;
use crate::components::landscape::ProblemSpace;
use crate::components::network::Network;
use crate::config::Config;
use crate::error::Result;
use crate::setup::agents::init_agents;
use crate::setup::network::build_network;
use crate::setup::problem_space::build_problem_space;
use crate::setup::representatives::sample_representative_ideas;
use crate::systems::utility::UtilityLandscape;

/// Everything a run starts from
#[derive(Debug, Clone)]
pub struct RunSetup {
    pub seed: u64,
    pub problem_space: ProblemSpace,
    pub network: Network,
    pub landscape: UtilityLandscape,
    pub agents: Vec<AgentState>,
    /// Main stream, positioned after the setup draws
    pub rng: SmallRng,
}

/// Build a complete run from `config`.
///
/// Every parameter is checked before the first build step.
pub fn setup_run(config: &Config) -> Result<RunSetup> {
    let seed = config.simulation.seed;
    config.check_params()?;

    let problem_space = build_problem_space(config.problem.dimension)?;
    let network = build_network(
        config.network.agents,
        config.network.neighbors,
        config.network.rewire_prob,
        seed,
    )?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let representatives =
        sample_representative_ideas(&problem_space, config.problem.representatives, &mut rng)?;
    let landscape = UtilityLandscape::new(representatives, config.bias.beta)?;

    let agents = init_agents(
        config.network.agents,
        config.agents.ideas_per_agent,
        config.agents.heterogeneity_scale,
        &problem_space,
        &network,
        &mut rng,
    )?;

    tracing::info!(
        seed,
        ideas = problem_space.len(),
        representatives = landscape.representatives().len(),
        agents = agents.len(),
        edges = network.edge_count(),
        "run setup complete"
    );

    Ok(RunSetup {
        seed,
        problem_space,
        network,
        landscape,
        agents,
        rng,
    })
}
