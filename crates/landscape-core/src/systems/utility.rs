//! Utility System
//!
//! Three layers of value for any idea:
//!
//! - true utility (Ut): exact at representative ideas, inverse-squared
//!   Hamming interpolation elsewhere
//! - master utility (Um): Ut of a randomly perturbed idea plus uniform noise,
//!   both scaled by the shared bias parameter
//! - agent utility (Uj): Um shifted by the agent's heterogeneity and clamped
//!   to [0, 1]

use bevy_ecs::prelude::*;
use rand::Rng;

use crate::components::idea::{hamming_distance, Idea};
use crate::components::landscape::{ProblemSpace, RepresentativeIdeaSet};
use crate::error::{LandscapeError, Result};

/// Per-digit flip probability at beta = 1
pub const MAX_FLIP_RATE: f64 = 0.25;

/// Reject bias parameters outside [0, 1] (NaN included).
pub fn validate_bias(beta: f64) -> Result<()> {
    if (0.0..=1.0).contains(&beta) {
        Ok(())
    } else {
        Err(LandscapeError::InvalidBias(beta))
    }
}

/// Reject heterogeneity values that are not finite.
pub fn validate_heterogeneity(xi: f64) -> Result<()> {
    if xi.is_finite() {
        Ok(())
    } else {
        Err(LandscapeError::InvalidHeterogeneity(xi))
    }
}

fn check_length(idea: &Idea, set: &RepresentativeIdeaSet) -> Result<()> {
    if idea.len() != set.dimension() {
        return Err(LandscapeError::LengthMismatch {
            left: idea.len(),
            right: set.dimension(),
        });
    }
    Ok(())
}

/// True utility Ut(v, S).
///
/// Returns the stored value for an anchor. Otherwise every anchor is weighted
/// by d(v, s)^-2 and the weighted mean of anchor values is returned, so the
/// result always lies between the smallest and largest anchor value.
pub fn true_utility(idea: &Idea, set: &RepresentativeIdeaSet) -> Result<f64> {
    if let Some(utility) = set.get(idea) {
        return Ok(utility);
    }

    let mut weighted = 0.0;
    let mut total = 0.0;
    for anchor in set.iter() {
        // not an anchor, so d >= 1
        let d = f64::from(hamming_distance(idea, &anchor.idea)?);
        let weight = d.powi(-2);
        weighted += weight * anchor.utility;
        total += weight;
    }
    Ok(weighted / total)
}

/// Ut for every idea of the space, in enumeration order.
pub fn true_utility_table(problem_space: &ProblemSpace, set: &RepresentativeIdeaSet) -> Result<Vec<f64>> {
    problem_space.iter().map(|v| true_utility(v, set)).collect()
}

/// Flip each digit independently with probability `MAX_FLIP_RATE * beta`.
///
/// One Bernoulli draw per digit, position 0 first.
pub(crate) fn perturb_idea<R: Rng + ?Sized>(idea: &Idea, beta: f64, rng: &mut R) -> Idea {
    let p = MAX_FLIP_RATE * beta;
    let mut perturbed = *idea;
    for position in 0..idea.len() {
        if rng.gen_bool(p) {
            perturbed = perturbed.flipped(position);
        }
    }
    perturbed
}

/// Uniform noise on [-beta, beta]
pub(crate) fn bias_noise<R: Rng + ?Sized>(beta: f64, rng: &mut R) -> f64 {
    rng.gen_range(-beta..=beta)
}

/// Master utility Um(v, S, beta). Not clamped.
pub fn master_utility<R: Rng + ?Sized>(
    idea: &Idea,
    set: &RepresentativeIdeaSet,
    beta: f64,
    rng: &mut R,
) -> Result<f64> {
    validate_bias(beta)?;
    check_length(idea, set)?;

    let perturbed = perturb_idea(idea, beta, rng);
    let base = true_utility(&perturbed, set)?;
    Ok(base + bias_noise(beta, rng))
}

/// Shift a master utility by `xi` and clamp into [0, 1].
pub fn perceive(master: f64, xi: f64) -> f64 {
    (master + xi).clamp(0.0, 1.0)
}

/// Agent utility Uj(v, S, beta, xi) = clamp(Um + xi, 0, 1)
pub fn agent_utility<R: Rng + ?Sized>(
    idea: &Idea,
    set: &RepresentativeIdeaSet,
    beta: f64,
    xi: f64,
    rng: &mut R,
) -> Result<f64> {
    validate_heterogeneity(xi)?;
    let master = master_utility(idea, set, beta, rng)?;
    Ok(perceive(master, xi))
}

/// Representative set bundled with the shared bias parameter
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct UtilityLandscape {
    representatives: RepresentativeIdeaSet,
    beta: f64,
}

impl UtilityLandscape {
    pub fn new(representatives: RepresentativeIdeaSet, beta: f64) -> Result<Self> {
        validate_bias(beta)?;
        Ok(Self {
            representatives,
            beta,
        })
    }

    pub fn representatives(&self) -> &RepresentativeIdeaSet {
        &self.representatives
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    pub fn true_utility(&self, idea: &Idea) -> Result<f64> {
        true_utility(idea, &self.representatives)
    }

    pub fn master_utility<R: Rng + ?Sized>(&self, idea: &Idea, rng: &mut R) -> Result<f64> {
        master_utility(idea, &self.representatives, self.beta, rng)
    }

    pub fn agent_utility<R: Rng + ?Sized>(&self, idea: &Idea, xi: f64, rng: &mut R) -> Result<f64> {
        agent_utility(idea, &self.representatives, self.beta, xi, rng)
    }
}
