//! The pluggable distance abstraction.

use fabula_core::DistanceResult;
use fabula_story::{StoryPlan, StorySpace};

use crate::matrix::DistanceMatrix;

/// A scalar distance between two story plans.
///
/// A metric must be symmetric and satisfy `distance(p, p) == 0`; this is
/// required of implementations, never verified by callers. Metrics that
/// need corpus-wide state implement [`DistanceMetric::initialize`]; a
/// distance query before a required initialize is a violated contract and
/// surfaces as `DistanceError::NotInitialized`.
pub trait DistanceMetric {
    /// Short name used in reports and exports.
    fn name(&self) -> &str;

    /// One-time corpus scan for metrics with corpus-dependent state.
    /// The default does nothing.
    fn initialize(&mut self, _space: &StorySpace) {}

    /// Non-negative distance between two plans.
    fn distance(&self, a: &StoryPlan, b: &StoryPlan) -> DistanceResult<f64>;

    /// All-pairs distance matrix over a frozen space under this metric.
    fn matrix(&self, space: &StorySpace) -> DistanceResult<DistanceMatrix>
    where
        Self: Sized + Sync,
    {
        DistanceMatrix::compute(space, self)
    }
}
