//! The story space: every alternative narrative found for one problem.

use fabula_core::Problem;

use crate::plan::StoryPlan;

/// An ordered collection of story plans solving the same problem.
/// Plans are appended as the planner produces them; the space is frozen
/// (by convention, not by type) before distance matrices are computed.
#[derive(Debug, Clone)]
pub struct StorySpace {
    problem: Problem,
    plans: Vec<StoryPlan>,
}

impl StorySpace {
    pub fn new(problem: Problem) -> Self {
        Self {
            problem,
            plans: Vec::new(),
        }
    }

    /// The problem every plan in this space solves.
    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    /// Append a plan to the space.
    pub fn add(&mut self, plan: StoryPlan) {
        self.plans.push(plan);
    }

    /// Number of plans in the space.
    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    /// The plan at the given index, if in range.
    pub fn get(&self, index: usize) -> Option<&StoryPlan> {
        self.plans.get(index)
    }

    /// All plans, in insertion order.
    pub fn plans(&self) -> &[StoryPlan] {
        &self.plans
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StoryPlan> {
        self.plans.iter()
    }
}

impl<'a> IntoIterator for &'a StorySpace {
    type Item = &'a StoryPlan;
    type IntoIter = std::slice::Iter<'a, StoryPlan>;

    fn into_iter(self) -> Self::IntoIter {
        self.plans.iter()
    }
}
