//! Decay-weighted salience vectors.

use std::fmt;

/// Five numeric arrays describing which characters, places, times, actions,
/// and goals are salient at the end of a story. Per-dimension lengths are
/// fixed by the metric's dictionaries; vectors built against different
/// dictionaries must never be compared.
#[derive(Debug, Clone, PartialEq)]
pub struct SalienceVector {
    pub characters: Vec<f64>,
    pub places: Vec<f64>,
    pub times: Vec<f64>,
    pub actions: Vec<f64>,
    pub goals: Vec<f64>,
}

impl SalienceVector {
    /// All-zero vector with the given per-dimension lengths.
    pub fn zeroed(characters: usize, places: usize, times: usize, actions: usize, goals: usize) -> Self {
        Self {
            characters: vec![0.0; characters],
            places: vec![0.0; places],
            times: vec![0.0; times],
            actions: vec![0.0; actions],
            goals: vec![0.0; goals],
        }
    }

    /// All values across the five dimensions, in dictionary order.
    pub fn flatten(&self) -> impl Iterator<Item = f64> + '_ {
        self.characters
            .iter()
            .chain(&self.places)
            .chain(&self.times)
            .chain(&self.actions)
            .chain(&self.goals)
            .copied()
    }

    /// Total number of indices across all five dimensions.
    pub fn len(&self) -> usize {
        self.characters.len()
            + self.places.len()
            + self.times.len()
            + self.actions.len()
            + self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Comma-separated rendering of all five arrays, in dictionary order.
impl fmt::Display for SalienceVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.flatten().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}
