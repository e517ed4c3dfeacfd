//! # fabula-distance
//!
//! Quantifies how different two story plans are. Provides the pluggable
//! [`DistanceMetric`] abstraction, the set-overlap [`ActionJaccard`] metric,
//! the decay-weighted [`SalienceMetric`], and all-pairs [`DistanceMatrix`]
//! computation with CSV export.

pub mod jaccard;
pub mod matrix;
pub mod metric;
pub mod salience;
pub mod vector;

pub use jaccard::ActionJaccard;
pub use matrix::DistanceMatrix;
pub use metric::DistanceMetric;
pub use salience::{DimensionWeights, SalienceMetric};
pub use vector::SalienceVector;
