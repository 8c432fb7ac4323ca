//! Representative Idea Sampling
//!
//! Picks the anchor ideas whose true utility is known and calibrates them so
//! the landscape spans exactly [0, 1].

use rand::seq::index;
use rand::Rng;

use crate::components::landscape::{ProblemSpace, RepresentativeIdea, RepresentativeIdeaSet};
use crate::error::{LandscapeError, Result};

/// Reject sample sizes outside 2..=available.
pub fn validate_sample_size(n: usize, available: usize) -> Result<()> {
    if n < 2 || n > available {
        return Err(LandscapeError::InvalidSampleSize {
            requested: n,
            available,
        });
    }
    Ok(())
}

/// Sample `n` distinct representative ideas from the problem space.
///
/// Draw order: the `n` ideas (without replacement), then the two positions
/// that become the 0.0 and 1.0 anchors, then one uniform value per remaining
/// entry in sampling order. The size check happens before any draw.
pub fn sample_representative_ideas<R: Rng + ?Sized>(
    problem_space: &ProblemSpace,
    n: usize,
    rng: &mut R,
) -> Result<RepresentativeIdeaSet> {
    let available = problem_space.len();
    validate_sample_size(n, available)?;

    let picks = index::sample(rng, available, n);
    let anchors = index::sample(rng, n, 2);
    let (low, high) = (anchors.index(0), anchors.index(1));

    let ideas = problem_space.ideas();
    let mut entries = Vec::with_capacity(n);
    for (position, idea_index) in picks.iter().enumerate() {
        let utility = if position == low {
            0.0
        } else if position == high {
            1.0
        } else {
            rng.gen::<f64>()
        };
        entries.push(RepresentativeIdea {
            idea: ideas[idea_index],
            utility,
        });
    }

    tracing::debug!(n, low, high, "sampled representative ideas");
    Ok(RepresentativeIdeaSet::from_sampled(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::problem_space::build_problem_space;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_calibrated_anchors() {
        let space = build_problem_space(4).unwrap();
        let mut rng = SmallRng::seed_from_u64(315);
        let set = sample_representative_ideas(&space, 5, &mut rng).unwrap();

        assert_eq!(set.len(), 5);
        let distinct: HashSet<_> = set.iter().map(|e| e.idea).collect();
        assert_eq!(distinct.len(), 5);

        assert_eq!(set.iter().filter(|e| e.utility == 0.0).count(), 1);
        assert_eq!(set.iter().filter(|e| e.utility == 1.0).count(), 1);
        assert!(set.iter().all(|e| (0.0..=1.0).contains(&e.utility)));
        assert!(set.iter().all(|e| space.contains(&e.idea)));
    }

    #[test]
    fn test_reproducible_with_seed() {
        let space = build_problem_space(4).unwrap();
        let a = sample_representative_ideas(&space, 5, &mut SmallRng::seed_from_u64(9)).unwrap();
        let b = sample_representative_ideas(&space, 5, &mut SmallRng::seed_from_u64(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_whole_space_and_minimum() {
        let space = build_problem_space(3).unwrap();
        let mut rng = SmallRng::seed_from_u64(1);

        let all = sample_representative_ideas(&space, 8, &mut rng).unwrap();
        assert_eq!(all.len(), 8);
        assert!(space.iter().all(|v| all.contains(v)));

        let pair = sample_representative_ideas(&space, 2, &mut rng).unwrap();
        let mut values: Vec<f64> = pair.iter().map(|e| e.utility).collect();
        values.sort_by(|a, b| a.total_cmp(b));
        assert_eq!(values, vec![0.0, 1.0]);
    }

    #[test]
    fn test_invalid_sample_size_leaves_rng_untouched() {
        let space = build_problem_space(4).unwrap();
        let mut rng = SmallRng::seed_from_u64(5);
        let mut reference = rng.clone();

        for n in [0, 1, 17] {
            let err = sample_representative_ideas(&space, n, &mut rng).unwrap_err();
            assert_eq!(
                err,
                LandscapeError::InvalidSampleSize {
                    requested: n,
                    available: 16
                }
            );
        }

        assert_eq!(rng.gen::<u64>(), reference.gen::<u64>());
    }
}
