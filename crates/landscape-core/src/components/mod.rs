//! ECS Components and Resources
//!
//! Data types for ideas, the problem space, the network and agents.

pub mod agent;
pub mod idea;
pub mod landscape;
pub mod network;

pub use agent::*;
pub use idea::*;
pub use landscape::*;
pub use network::*;
