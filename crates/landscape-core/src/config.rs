//! Configuration System
//!
//! Loads model parameters from landscape.toml so runs can be adjusted without
//! recompiling. Every section falls back to its defaults when omitted.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::components::landscape::space_size;
use crate::error::LandscapeError;
use crate::setup::network::validate_topology;
use crate::setup::problem_space::validate_dimension;
use crate::setup::representatives::validate_sample_size;
use crate::systems::utility::{validate_bias, validate_heterogeneity};

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "landscape.toml";

/// Top-level configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub simulation: SimulationConfig,
    pub network: NetworkConfig,
    pub problem: ProblemConfig,
    pub agents: AgentConfig,
    pub bias: BiasConfig,
}

/// Run parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Seed for every random draw of the run
    pub seed: u64,
    /// Number of update/observe steps
    pub steps: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self { seed: 315, steps: 30 }
    }
}

/// Small-world topology
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Number of agents, one per node
    pub agents: usize,
    /// Lattice degree before rewiring
    pub neighbors: usize,
    pub rewire_prob: f64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            agents: 5,
            neighbors: 3,
            rewire_prob: 0.2,
        }
    }
}

/// Idea space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProblemConfig {
    /// Digits per idea
    pub dimension: usize,
    /// Size of the representative set
    pub representatives: usize,
}

impl Default for ProblemConfig {
    fn default() -> Self {
        Self {
            dimension: 4,
            representatives: 5,
        }
    }
}

/// Agent initialization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    pub ideas_per_agent: usize,
    pub heterogeneity_scale: f64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            ideas_per_agent: 3,
            heterogeneity_scale: 0.1,
        }
    }
}

/// Shared distortion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BiasConfig {
    /// 0 = shared understanding, 1 = maximal shared distortion
    pub beta: f64,
}

impl Default for BiasConfig {
    fn default() -> Self {
        Self { beta: 0.25 }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from the default path, or use defaults if not found
    pub fn load_or_default() -> Self {
        Self::load(DEFAULT_CONFIG_PATH).unwrap_or_else(|e| {
            tracing::warn!("Could not load {}: {}. Using defaults.", DEFAULT_CONFIG_PATH, e);
            Self::default()
        })
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check every model parameter with the same rules the builders apply.
    pub fn check_params(&self) -> Result<(), LandscapeError> {
        validate_dimension(self.problem.dimension)?;
        validate_sample_size(self.problem.representatives, space_size(self.problem.dimension))?;
        validate_topology(
            self.network.agents,
            self.network.neighbors,
            self.network.rewire_prob,
        )?;
        validate_bias(self.bias.beta)?;
        validate_heterogeneity(self.agents.heterogeneity_scale)
    }

    /// Check parameter ranges without building anything.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Ok(self.check_params()?)
    }
}

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error(transparent)]
    Model(#[from] LandscapeError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.simulation.seed, 315);
        assert_eq!(config.simulation.steps, 30);
        assert_eq!(config.network.agents, 5);
        assert_eq!(config.problem.dimension, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config = Config::from_str(
            r#"
            [bias]
            beta = 0.8

            [network]
            agents = 12
            "#,
        )
        .unwrap();

        assert_eq!(config.bias.beta, 0.8);
        assert_eq!(config.network.agents, 12);
        assert_eq!(config.network.neighbors, 3);
        assert_eq!(config.problem, ProblemConfig::default());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = Config::default();
        let text = config.to_toml().unwrap();
        assert!(text.contains("[problem]"));
        assert_eq!(Config::from_str(&text).unwrap(), config);
    }

    #[test]
    fn test_load_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[simulation]\nseed = 7\nsteps = 3").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.simulation.seed, 7);
        assert_eq!(config.simulation.steps, 3);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_parse_error() {
        let err = Config::from_str("[problem]\ndimension = \"four\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validation_failures() {
        let mut config = Config::default();
        config.problem.representatives = 17;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Model(LandscapeError::InvalidSampleSize { requested: 17, available: 16 }))
        ));

        let mut config = Config::default();
        config.network.neighbors = 5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Model(LandscapeError::InvalidTopologyParams(_)))
        ));

        let mut config = Config::default();
        config.bias.beta = 2.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Model(LandscapeError::InvalidBias(_)))
        ));

        let mut config = Config::default();
        config.agents.heterogeneity_scale = f64::INFINITY;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Model(LandscapeError::InvalidHeterogeneity(_)))
        ));

        let mut config = Config::default();
        config.problem.dimension = 0;
        assert_eq!(
            config.check_params(),
            Err(LandscapeError::InvalidDimension { requested: 0, max: 20 })
        );
    }

    #[test]
    fn test_check_params_matches_builders() {
        use crate::setup::network::build_network;
        use crate::setup::problem_space::build_problem_space;

        let mut config = Config::default();
        config.problem.dimension = 21;
        assert_eq!(
            config.check_params().unwrap_err(),
            build_problem_space(21).unwrap_err()
        );

        let mut config = Config::default();
        config.network.rewire_prob = 1.5;
        assert_eq!(
            config.check_params().unwrap_err(),
            build_network(5, 3, 1.5, 315).unwrap_err()
        );
    }
}
