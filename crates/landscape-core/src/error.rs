//! Model Errors
//!
//! Setup-time validation failures. All of them are raised before any random
//! draw is made, so a failed call leaves the random stream untouched.

use thiserror::Error;

/// Errors raised while building or querying the landscape
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LandscapeError {
    /// Two ideas of different length were compared
    #[error("length mismatch: cannot compare ideas of length {left} and {right}")]
    LengthMismatch { left: usize, right: usize },

    /// Representative sample size outside 2..=|problem space|
    #[error("invalid sample size {requested}: must be between 2 and {available}")]
    InvalidSampleSize { requested: usize, available: usize },

    /// Small-world parameters out of range
    #[error("invalid topology parameters: {0}")]
    InvalidTopologyParams(String),

    /// Idea dimension outside the enumerable range
    #[error("invalid dimension {requested}: must be between 1 and {max}")]
    InvalidDimension { requested: usize, max: usize },

    /// Network node count differs from the requested agent count
    #[error("network has {nodes} nodes but {agents} agents were requested")]
    NetworkSizeMismatch { agents: usize, nodes: usize },

    /// Bias parameter outside [0, 1]
    #[error("invalid bias parameter {0}: must lie in [0, 1]")]
    InvalidBias(f64),

    /// Heterogeneity scale or coefficient that is not a finite number
    #[error("invalid heterogeneity {0}: must be finite")]
    InvalidHeterogeneity(f64),

    /// Representative utility outside [0, 1]
    #[error("invalid utility {utility} for idea {idea}: must lie in [0, 1]")]
    InvalidUtility { idea: String, utility: f64 },

    /// The same idea was given twice as a representative
    #[error("duplicate representative idea {0}")]
    DuplicateIdea(String),
}

/// Convenience result alias for model operations
pub type Result<T> = std::result::Result<T, LandscapeError>;
