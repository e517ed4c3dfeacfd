//! Error types shared across the workspace.

mod distance_error;
mod story_error;

pub use distance_error::DistanceError;
pub use story_error::StoryError;

pub type StoryResult<T> = Result<T, StoryError>;
pub type DistanceResult<T> = Result<T, DistanceError>;
