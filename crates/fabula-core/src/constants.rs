//! Workspace-wide constants.

/// Entity kind that populates the places salience dimension.
pub const PLACE_KIND: &str = "place";

/// Entity kind that populates the times salience dimension.
pub const TIME_KIND: &str = "time";

/// Per-step multiplicative falloff applied to inactive salience indices.
pub const DECAY_CONSTANT: f64 = 0.5;

/// Default weight applied to each of the five salience dimensions.
pub const DEFAULT_DIMENSION_WEIGHT: f64 = 0.2;
