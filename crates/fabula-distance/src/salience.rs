//! The salience metric: corpus-wide feature dictionaries plus a
//! decay-weighted vector distance.
//!
//! Character, place, and time dictionaries come straight from the problem
//! definition. The action and goal dictionaries require one full scan of
//! the story space (`initialize`) before any vector or distance is valid;
//! they are frozen afterwards.

use std::collections::HashSet;

use indexmap::IndexSet;
use tracing::debug;

use fabula_core::constants::{DECAY_CONSTANT, DEFAULT_DIMENSION_WEIGHT};
use fabula_core::{
    Character, CharacterGoal, DistanceError, DistanceResult, Entity, Problem, Signature,
};
use fabula_story::{StoryPlan, StorySpace};

use crate::metric::DistanceMetric;
use crate::vector::SalienceVector;

/// Per-dimension weights for the salience distance. They need not sum to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionWeights {
    pub characters: f64,
    pub places: f64,
    pub times: f64,
    pub actions: f64,
    pub goals: f64,
}

impl Default for DimensionWeights {
    fn default() -> Self {
        Self {
            characters: DEFAULT_DIMENSION_WEIGHT,
            places: DEFAULT_DIMENSION_WEIGHT,
            times: DEFAULT_DIMENSION_WEIGHT,
            actions: DEFAULT_DIMENSION_WEIGHT,
            goals: DEFAULT_DIMENSION_WEIGHT,
        }
    }
}

/// Corpus-dependent dictionaries: distinct action signatures and distinct
/// character goals observed anywhere in the space, in first-seen order.
#[derive(Debug, Clone)]
struct Dictionaries {
    actions: Vec<Signature>,
    goals: Vec<CharacterGoal>,
}

/// Weighted vector distance over decay-weighted salience features.
#[derive(Debug, Clone)]
pub struct SalienceMetric {
    decay: f64,
    characters: Vec<Character>,
    places: Vec<Entity>,
    times: Vec<Entity>,
    dictionaries: Option<Dictionaries>,
}

impl SalienceMetric {
    /// A metric for the given problem with the default decay constant.
    /// `initialize` must run before any distance query.
    pub fn new(problem: &Problem) -> Self {
        Self::with_decay(problem, DECAY_CONSTANT)
    }

    /// A metric with an explicit per-step decay constant.
    pub fn with_decay(problem: &Problem, decay: f64) -> Self {
        Self {
            decay,
            characters: problem.characters.clone(),
            places: problem.places().cloned().collect(),
            times: problem.times().cloned().collect(),
            dictionaries: None,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.dictionaries.is_some()
    }

    fn dictionaries(&self) -> DistanceResult<&Dictionaries> {
        self.dictionaries
            .as_ref()
            .ok_or_else(|| DistanceError::NotInitialized {
                metric: self.name().to_string(),
            })
    }

    /// Build the salience vector for one plan against the frozen
    /// dictionaries.
    ///
    /// Every index of every dimension is visited at every step: an index
    /// the current action exhibits is set to 1.0, every other index is
    /// multiplied by the decay constant. Decay therefore compounds for
    /// indices untouched over many steps: set at step t and never reset,
    /// an index holds `decay^k` at step t+k.
    pub fn vector(&self, plan: &StoryPlan) -> DistanceResult<SalienceVector> {
        let dict = self.dictionaries()?;
        let mut vector = SalienceVector::zeroed(
            self.characters.len(),
            self.places.len(),
            self.times.len(),
            dict.actions.len(),
            dict.goals.len(),
        );
        for action in plan {
            // This step's signature together with its causal ancestors'.
            let mut lineage: HashSet<&Signature> = action
                .ancestors()
                .iter()
                .map(|&prior| plan.actions()[prior].signature())
                .collect();
            lineage.insert(action.signature());

            update(&mut vector.characters, &self.characters, self.decay, |c| {
                action.involves_character(c)
            });
            update(&mut vector.places, &self.places, self.decay, |e| {
                action.involves_entity(e)
            });
            update(&mut vector.times, &self.times, self.decay, |e| {
                action.involves_entity(e)
            });
            update(&mut vector.actions, &dict.actions, self.decay, |s| {
                lineage.contains(s)
            });
            update(&mut vector.goals, &dict.goals, self.decay, |g| {
                action.explained_by(g)
            });
        }
        Ok(vector)
    }

    /// Salience distance under explicit dimension weights.
    pub fn distance_weighted(
        &self,
        a: &StoryPlan,
        b: &StoryPlan,
        weights: &DimensionWeights,
    ) -> DistanceResult<f64> {
        let va = self.vector(a)?;
        let vb = self.vector(b)?;
        Ok(
            weights.characters * sub_distance("characters", &va.characters, &vb.characters)?
                + weights.places * sub_distance("places", &va.places, &vb.places)?
                + weights.times * sub_distance("times", &va.times, &vb.times)?
                + weights.actions * sub_distance("actions", &va.actions, &vb.actions)?
                + weights.goals * sub_distance("goals", &va.goals, &vb.goals)?,
        )
    }

    /// CSV of every plan's final salience vector: a `Story ID` column plus
    /// one column per dictionary entry across all five dimensions. Commas
    /// inside entry labels become spaces so the column count stays fixed.
    pub fn to_csv(&self, space: &StorySpace) -> DistanceResult<String> {
        let dict = self.dictionaries()?;
        let mut out = String::from("Story ID");
        let labels = self
            .characters
            .iter()
            .map(ToString::to_string)
            .chain(self.places.iter().map(ToString::to_string))
            .chain(self.times.iter().map(ToString::to_string))
            .chain(dict.actions.iter().map(ToString::to_string))
            .chain(dict.goals.iter().map(ToString::to_string));
        for label in labels {
            out.push(',');
            out.push_str(&label.replace(',', " "));
        }
        out.push('\n');
        for (index, plan) in space.iter().enumerate() {
            let vector = self.vector(plan)?;
            out.push_str(&index.to_string());
            for value in vector.flatten() {
                out.push(',');
                out.push_str(&value.to_string());
            }
            out.push('\n');
        }
        Ok(out)
    }
}

impl DistanceMetric for SalienceMetric {
    fn name(&self) -> &str {
        "salience"
    }

    /// Scan the whole space once for the action and goal dictionaries,
    /// then freeze them. Insertion order fixes the vector index of each
    /// entry; duplicates (by signature / semantic goal equality) collapse.
    fn initialize(&mut self, space: &StorySpace) {
        let mut actions: IndexSet<Signature> = IndexSet::new();
        let mut goals: IndexSet<CharacterGoal> = IndexSet::new();
        for plan in space {
            for action in plan {
                actions.insert(action.signature().clone());
                for goal in action.goals() {
                    goals.insert(goal.clone());
                }
            }
        }
        debug!(
            actions = actions.len(),
            goals = goals.len(),
            "built salience dictionaries"
        );
        self.dictionaries = Some(Dictionaries {
            actions: actions.into_iter().collect(),
            goals: goals.into_iter().collect(),
        });
    }

    fn distance(&self, a: &StoryPlan, b: &StoryPlan) -> DistanceResult<f64> {
        self.distance_weighted(a, b, &DimensionWeights::default())
    }
}

/// Visit every index of one dimension for one step.
fn update<T>(values: &mut [f64], entries: &[T], decay: f64, mut exhibited: impl FnMut(&T) -> bool) {
    for (value, entry) in values.iter_mut().zip(entries) {
        if exhibited(entry) {
            *value = 1.0;
        } else {
            *value *= decay;
        }
    }
}

/// Half-magnitude Euclidean distance between two equal-length sub-vectors.
/// A length mismatch means the vectors were built against different
/// dictionaries, which is a fatal configuration error.
fn sub_distance(dimension: &'static str, a: &[f64], b: &[f64]) -> DistanceResult<f64> {
    if a.len() != b.len() {
        return Err(DistanceError::DimensionMismatch {
            dimension,
            left: a.len(),
            right: b.len(),
        });
    }
    let sum: f64 = a.iter().zip(b).map(|(x, y)| (x - y).powi(2)).sum();
    Ok(0.5 * sum.sqrt())
}
