//! # fabula-story
//!
//! The story model: plans annotated with character goals and causal
//! ancestry, and the story space that collects them. The causal analyzer
//! lives here because ancestry is computed once, at plan construction.

pub mod action;
pub mod causality;
pub mod plan;
pub mod space;

pub use action::StoryAction;
pub use causality::AncestorTable;
pub use plan::StoryPlan;
pub use space::StorySpace;
