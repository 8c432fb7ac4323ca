//! Problem Space Setup
//!
//! Enumerates every binary idea of a given dimension.

use crate::components::idea::Idea;
use crate::components::landscape::ProblemSpace;
use crate::error::{LandscapeError, Result};

/// Largest dimension we are willing to enumerate (2^20 ideas)
pub const MAX_DIMENSION: usize = 20;

/// Reject dimensions outside 1..=MAX_DIMENSION.
pub fn validate_dimension(dimension: usize) -> Result<()> {
    if dimension == 0 || dimension > MAX_DIMENSION {
        return Err(LandscapeError::InvalidDimension {
            requested: dimension,
            max: MAX_DIMENSION,
        });
    }
    Ok(())
}

/// Build the full problem space for `dimension`-digit ideas.
///
/// Enumeration is in lexicographic digit order: index `i` holds the idea whose
/// digits spell `i` in binary. The order is stable across calls, which keeps
/// downstream sampling reproducible.
pub fn build_problem_space(dimension: usize) -> Result<ProblemSpace> {
    validate_dimension(dimension)?;

    let size = 1u64 << dimension;
    let ideas: Vec<Idea> = (0..size).map(|bits| Idea::from_bits(bits, dimension)).collect();

    tracing::debug!(dimension, size = ideas.len(), "enumerated problem space");
    Ok(ProblemSpace::new(dimension, ideas))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_dimension_four_has_sixteen_ideas() {
        let space = build_problem_space(4).unwrap();
        assert_eq!(space.len(), 16);
        assert_eq!(space.dimension(), 4);

        let distinct: HashSet<_> = space.iter().collect();
        assert_eq!(distinct.len(), 16);
        assert!(space.iter().all(|v| v.len() == 4));
    }

    #[test]
    fn test_enumeration_order() {
        let space = build_problem_space(3).unwrap();
        let text: Vec<String> = space.iter().map(|v| v.to_string()).collect();
        assert_eq!(
            text,
            vec!["000", "001", "010", "011", "100", "101", "110", "111"]
        );
    }

    #[test]
    fn test_enumeration_is_stable() {
        assert_eq!(build_problem_space(6).unwrap(), build_problem_space(6).unwrap());
    }

    #[test]
    fn test_invalid_dimension() {
        assert!(matches!(
            build_problem_space(0),
            Err(LandscapeError::InvalidDimension { requested: 0, .. })
        ));
        assert!(matches!(
            build_problem_space(MAX_DIMENSION + 1),
            Err(LandscapeError::InvalidDimension { .. })
        ));
    }
}
