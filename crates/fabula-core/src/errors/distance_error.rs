/// Distance subsystem errors. These indicate a violated contract between
/// components, not recoverable user input.
#[derive(Debug, thiserror::Error)]
pub enum DistanceError {
    #[error("{metric} metric queried before initialize()")]
    NotInitialized { metric: String },

    #[error("{dimension} sub-vectors have mismatched lengths: {left} vs {right}")]
    DimensionMismatch {
        dimension: &'static str,
        left: usize,
        right: usize,
    },
}
