//! Idea Utility Landscape
//!
//! Networked agents judging ideas from a shared binary idea space. Only a few
//! representative ideas have known value; everything else is interpolated,
//! then seen through a shared group bias and each agent's own bias.
//!
//! # Modules
//!
//! - [`components`]: ideas, problem space, representative set, network, agents
//! - [`setup`]: enumeration, topology, sampling, agent initialization
//! - [`systems`]: utility layers and the step driver
//! - [`output`]: snapshots for analysis
//! - [`config`]: TOML configuration

pub mod components;
pub mod config;
pub mod error;
pub mod output;
pub mod setup;
pub mod systems;

pub use components::*;
pub use config::{Config, ConfigError};
pub use error::{LandscapeError, Result};

pub use setup::{
    build_network, build_problem_space, init_agents, sample_representative_ideas, setup_run,
    RunSetup, MAX_DIMENSION,
};
pub use systems::{
    agent_utility, master_utility, perceive, true_utility, true_utility_table, LandscapeSimulation,
    SimRng, StepCounter, UtilityLandscape,
};
