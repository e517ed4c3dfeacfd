//! A story action: one event in the context of a specific story.

use fabula_core::{Character, CharacterGoal, Entity, Event, Signature};

/// An event annotated with the goals that explain its consenting
/// characters and the indices of its causal ancestors within the plan.
/// Built once by [`StoryPlan::from_solution`](crate::StoryPlan::from_solution)
/// and read-only afterwards.
#[derive(Debug, Clone)]
pub struct StoryAction {
    event: Event,
    goals: Vec<CharacterGoal>,
    /// Ascending indices of causal ancestors; every entry is strictly less
    /// than this action's own index.
    ancestors: Vec<usize>,
}

impl StoryAction {
    pub(crate) fn new(event: Event, goals: Vec<CharacterGoal>) -> Self {
        Self {
            event,
            goals,
            ancestors: Vec::new(),
        }
    }

    pub(crate) fn set_ancestors(&mut self, ancestors: Vec<usize>) {
        self.ancestors = ancestors;
    }

    pub fn event(&self) -> &Event {
        &self.event
    }

    pub fn signature(&self) -> &Signature {
        &self.event.signature
    }

    pub fn consenting(&self) -> &[Character] {
        &self.event.consenting
    }

    /// The goals explaining this action, one per consenting character in
    /// agent-list order.
    pub fn goals(&self) -> &[CharacterGoal] {
        &self.goals
    }

    /// Plan indices of this action's causal ancestors, ascending.
    pub fn ancestors(&self) -> &[usize] {
        &self.ancestors
    }

    /// Whether the character consents to this action.
    pub fn involves_character(&self, character: &Character) -> bool {
        self.event.consenting.contains(character)
    }

    /// Whether the entity is a parameter of this action.
    pub fn involves_entity(&self, entity: &Entity) -> bool {
        self.event.parameters.contains(entity)
    }

    /// Whether the given goal explains this action (semantic equality).
    pub fn explained_by(&self, goal: &CharacterGoal) -> bool {
        self.goals.contains(goal)
    }
}
