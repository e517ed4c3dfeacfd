//! # fabula-core
//!
//! Foundation crate for the fabula story-space analyzer.
//! Defines the logic model, events, goals, problems, the planner solution
//! interface, errors, and constants. Every other crate in the workspace
//! depends on this.

pub mod constants;
pub mod errors;
pub mod event;
pub mod goal;
pub mod logic;
pub mod problem;
pub mod solution;

// Re-export the most commonly used types at the crate root.
pub use errors::{DistanceError, DistanceResult, StoryError, StoryResult};
pub use event::{Character, Entity, Event, Signature};
pub use goal::{CanonicalGoal, CharacterGoal, GoalExpr};
pub use logic::{Clause, Comparison, Effect, Fluent, Literal, Precondition, Value};
pub use problem::Problem;
pub use solution::Solution;
