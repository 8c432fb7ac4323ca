//! Model Systems
//!
//! Utility layers and the step driver.

pub mod simulation;
pub mod utility;

pub use simulation::*;
pub use utility::*;
