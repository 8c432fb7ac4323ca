//! Model Setup
//!
//! Problem space enumeration, network generation, representative sampling
//! and agent initialization.

pub mod agents;
pub mod network;
pub mod problem_space;
pub mod representatives;
pub mod run;

pub use agents::*;
pub use network::*;
pub use problem_space::*;
pub use representatives::*;
pub use run::*;
