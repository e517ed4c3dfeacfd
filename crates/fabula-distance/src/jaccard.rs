//! Set-overlap distance between plans.

use std::collections::HashSet;

use fabula_core::{DistanceResult, Signature};
use fabula_story::{StoryAction, StoryPlan};

use crate::metric::DistanceMetric;

/// 1 minus the Jaccard index of the two plans' sets of distinct action
/// signatures. Repeats within a plan collapse. Needs no initialization.
///
/// Range [0, 1]; two plans with no actions at all are identical by policy
/// (distance 0 rather than a division error).
#[derive(Debug, Clone, Copy, Default)]
pub struct ActionJaccard;

impl ActionJaccard {
    pub fn new() -> Self {
        Self
    }
}

fn signatures(plan: &StoryPlan) -> HashSet<&Signature> {
    plan.iter().map(StoryAction::signature).collect()
}

impl DistanceMetric for ActionJaccard {
    fn name(&self) -> &str {
        "jaccard"
    }

    fn distance(&self, a: &StoryPlan, b: &StoryPlan) -> DistanceResult<f64> {
        let set_a = signatures(a);
        let set_b = signatures(b);
        let union = set_a.union(&set_b).count();
        if union == 0 {
            return Ok(0.0);
        }
        let intersection = set_a.intersection(&set_b).count();
        Ok(1.0 - intersection as f64 / union as f64)
    }
}
