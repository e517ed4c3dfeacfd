//! All-pairs distance matrices.

use rayon::prelude::*;
use tracing::debug;

use fabula_core::DistanceResult;
use fabula_story::StorySpace;

use crate::metric::DistanceMetric;

/// Symmetric N×N distance table over a story space under one metric.
/// Only the upper triangle is computed; it is mirrored into the lower
/// triangle and the diagonal stays 0 by the metric contract d(x, x) = 0.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    size: usize,
    /// Row-major values.
    values: Vec<f64>,
}

impl DistanceMatrix {
    /// Compute the matrix for a frozen space and an already-initialized
    /// metric.
    ///
    /// Upper-triangle cells are independent under those conditions, so
    /// they are filled in parallel. Any cell error aborts the whole
    /// computation; there is no partial matrix.
    pub fn compute<M>(space: &StorySpace, metric: &M) -> DistanceResult<Self>
    where
        M: DistanceMetric + Sync,
    {
        let n = space.len();
        let plans = space.plans();
        let pairs: Vec<(usize, usize)> = (0..n)
            .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
            .collect();
        let cells = pairs
            .par_iter()
            .map(|&(i, j)| metric.distance(&plans[i], &plans[j]).map(|d| (i, j, d)))
            .collect::<DistanceResult<Vec<_>>>()?;

        let mut values = vec![0.0; n * n];
        for (i, j, distance) in cells {
            values[i * n + j] = distance;
            values[j * n + i] = distance;
        }
        debug!(size = n, metric = metric.name(), "computed distance matrix");
        Ok(Self { size: n, values })
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// The distance at the given cell. Panics if out of range.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.size && col < self.size, "cell out of range");
        self.values[row * self.size + col]
    }

    /// Comma-separated tabular text: a blank cell followed by the column
    /// indices, then one row per plan prefixed with its row index.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for col in 0..self.size {
            out.push(',');
            out.push_str(&col.to_string());
        }
        out.push('\n');
        for row in 0..self.size {
            out.push_str(&row.to_string());
            for col in 0..self.size {
                out.push(',');
                out.push_str(&self.get(row, col).to_string());
            }
            out.push('\n');
        }
        out
    }
}
