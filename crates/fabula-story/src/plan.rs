//! Story plans: ordered, immutable-after-construction action sequences.

use tracing::debug;

use fabula_core::{CharacterGoal, Event, Solution, StoryError, StoryResult};

use crate::action::StoryAction;
use crate::causality;

/// An ordered sequence of story actions with causal ancestry baked in.
///
/// Construction attaches one [`CharacterGoal`] per consenting character
/// (in agent-list order, from the solution's explanations) and computes
/// every action's causal-ancestor set exactly once. The plan never changes
/// afterwards.
#[derive(Debug, Clone)]
pub struct StoryPlan {
    actions: Vec<StoryAction>,
}

impl StoryPlan {
    /// Build an annotated plan from a planner solution.
    ///
    /// A consenting character without a goal explanation is a violation of
    /// the solution contract and fails the whole construction.
    pub fn from_solution(solution: &dyn Solution) -> StoryResult<Self> {
        let mut actions = Vec::with_capacity(solution.len());
        for step in 0..solution.len() {
            let event = solution.event(step).clone();
            let mut goals = Vec::with_capacity(event.consenting.len());
            for character in &event.consenting {
                let goal = solution.explanation(step, character).ok_or_else(|| {
                    StoryError::MissingExplanation {
                        step,
                        character: character.name().to_string(),
                    }
                })?;
                goals.push(CharacterGoal::new(character.clone(), goal.clone()));
            }
            actions.push(StoryAction::new(event, goals));
        }

        let events: Vec<&Event> = actions.iter().map(StoryAction::event).collect();
        let table = causality::causal_ancestors(&events);
        let ancestor_sets: Vec<Vec<usize>> =
            (0..actions.len()).map(|i| table.ancestors_of(i)).collect();
        let links: usize = ancestor_sets.iter().map(Vec::len).sum();
        for (action, ancestors) in actions.iter_mut().zip(ancestor_sets) {
            action.set_ancestors(ancestors);
        }
        debug!(steps = actions.len(), links, "built story plan");

        Ok(Self { actions })
    }

    /// Number of actions in the plan.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// The action at the given index, if in range.
    pub fn get(&self, index: usize) -> Option<&StoryAction> {
        self.actions.get(index)
    }

    /// All actions in execution order.
    pub fn actions(&self) -> &[StoryAction] {
        &self.actions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StoryAction> {
        self.actions.iter()
    }

    /// Whether the action at `prior` causally enables the action at
    /// `current`. False whenever `prior >= current` or out of range.
    pub fn is_causal_ancestor(&self, prior: usize, current: usize) -> bool {
        prior < current
            && self
                .actions
                .get(current)
                .is_some_and(|action| action.ancestors().binary_search(&prior).is_ok())
    }
}

impl<'a> IntoIterator for &'a StoryPlan {
    type Item = &'a StoryAction;
    type IntoIter = std::slice::Iter<'a, StoryAction>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.iter()
    }
}
