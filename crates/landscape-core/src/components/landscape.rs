//! Landscape Components
//!
//! The enumerated problem space and the calibrated representative set.

use bevy_ecs::prelude::*;
use serde::Serialize;
use std::collections::HashMap;

use crate::components::idea::Idea;
use crate::error::{LandscapeError, Result};

/// Every idea of a given dimension, in enumeration order
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct ProblemSpace {
    dimension: usize,
    ideas: Vec<Idea>,
}

impl ProblemSpace {
    pub(crate) fn new(dimension: usize, ideas: Vec<Idea>) -> Self {
        Self { dimension, ideas }
    }

    /// Length of every idea in the space
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn len(&self) -> usize {
        self.ideas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ideas.is_empty()
    }

    pub fn ideas(&self) -> &[Idea] {
        &self.ideas
    }

    pub fn get(&self, index: usize) -> Option<&Idea> {
        self.ideas.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Idea> {
        self.ideas.iter()
    }

    /// Ideas are enumerated by their packed value, so membership is a length check.
    pub fn contains(&self, idea: &Idea) -> bool {
        idea.len() == self.dimension
    }
}

/// One anchor of the ground-truth landscape
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RepresentativeIdea {
    pub idea: Idea,
    pub utility: f64,
}

/// Ordered set of representative ideas with known true utility.
///
/// Entries keep their sampling order; lookups go through a separate key index.
#[derive(Debug, Clone, PartialEq)]
pub struct RepresentativeIdeaSet {
    entries: Vec<RepresentativeIdea>,
    index: HashMap<Idea, usize>,
}

/// Number of distinct ideas of `dimension` digits, saturating at `usize::MAX`
pub fn space_size(dimension: usize) -> usize {
    u32::try_from(dimension)
        .ok()
        .and_then(|d| 1usize.checked_shl(d))
        .unwrap_or(usize::MAX)
}

impl RepresentativeIdeaSet {
    pub(crate) fn from_sampled(entries: Vec<RepresentativeIdea>) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.idea, i))
            .collect();
        Self { entries, index }
    }

    /// Builds a set from hand-picked anchors.
    ///
    /// All ideas must share one length, be distinct, and carry a utility in
    /// [0, 1]. At least two anchors are required.
    pub fn from_entries(entries: impl IntoIterator<Item = (Idea, f64)>) -> Result<Self> {
        let mut set = Self {
            entries: Vec::new(),
            index: HashMap::new(),
        };
        for (idea, utility) in entries {
            if let Some(first) = set.entries.first() {
                if first.idea.len() != idea.len() {
                    return Err(LandscapeError::LengthMismatch {
                        left: first.idea.len(),
                        right: idea.len(),
                    });
                }
            }
            if !(0.0..=1.0).contains(&utility) {
                return Err(LandscapeError::InvalidUtility {
                    idea: idea.to_string(),
                    utility,
                });
            }
            if set.index.contains_key(&idea) {
                return Err(LandscapeError::DuplicateIdea(idea.to_string()));
            }
            set.index.insert(idea, set.entries.len());
            set.entries.push(RepresentativeIdea { idea, utility });
        }
        if set.entries.len() < 2 {
            let dimension = set.entries.first().map(|e| e.idea.len()).unwrap_or(0);
            return Err(LandscapeError::InvalidSampleSize {
                requested: set.entries.len(),
                available: space_size(dimension),
            });
        }
        Ok(set)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Length shared by every anchor
    pub fn dimension(&self) -> usize {
        self.entries.first().map(|e| e.idea.len()).unwrap_or(0)
    }

    /// Stored utility of an anchor
    pub fn get(&self, idea: &Idea) -> Option<f64> {
        self.index.get(idea).map(|&i| self.entries[i].utility)
    }

    pub fn contains(&self, idea: &Idea) -> bool {
        self.index.contains_key(idea)
    }

    /// Anchors in sampling order
    pub fn entries(&self) -> &[RepresentativeIdea] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &RepresentativeIdea> {
        self.entries.iter()
    }

    pub fn min_utility(&self) -> f64 {
        self.entries.iter().map(|e| e.utility).fold(f64::INFINITY, f64::min)
    }

    pub fn max_utility(&self) -> f64 {
        self.entries.iter().map(|e| e.utility).fold(f64::NEG_INFINITY, f64::max)
    }
}
