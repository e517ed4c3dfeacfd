//! Read-only interface to one solution produced by the planning engine.

use crate::event::{Character, Event};
use crate::goal::GoalExpr;

/// An ordered sequence of events solving a problem, with per-agent goal
/// explanations. The planning engine owns precondition/effect semantics
/// and goal recognition; this trait only exposes the results.
pub trait Solution {
    /// Number of steps in the solution.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The event at the given step (0-based, execution order).
    fn event(&self, index: usize) -> &Event;

    /// The goal expression explaining the given character's consent to the
    /// event at the given step, if the planner produced one.
    fn explanation(&self, index: usize, character: &Character) -> Option<&GoalExpr>;
}
