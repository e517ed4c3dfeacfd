//! Causal-ancestry inference over an ordered event sequence.
//!
//! An earlier event is a causal ancestor of a later one if its effects
//! achieve a precondition of the later event (directly, or through a chain
//! of intermediate events). The relation is a strict partial order
//! consistent with sequence order and is computed once per plan.

use fabula_core::{Event, Literal};

/// Precomputed causal-ancestor relation for one plan.
#[derive(Debug, Clone)]
pub struct AncestorTable {
    len: usize,
    /// Row-major `[current][prior]` booleans; only cells with
    /// `prior < current` are ever set.
    cells: Vec<bool>,
}

impl AncestorTable {
    /// Number of events the table was computed over.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the event at `prior` causally enables the event at `current`.
    /// False whenever `prior >= current` or either index is out of range.
    pub fn is_ancestor(&self, prior: usize, current: usize) -> bool {
        prior < current && current < self.len && self.cells[current * self.len + prior]
    }

    /// Indices of all causal ancestors of `current`, ascending.
    pub fn ancestors_of(&self, current: usize) -> Vec<usize> {
        (0..current.min(self.len))
            .filter(|&prior| self.cells[current * self.len + prior])
            .collect()
    }
}

/// Compute the causal-ancestor relation for an ordered event sequence.
///
/// The original definition is recursive; this is the equivalent dynamic
/// program over index pairs, filled in ascending order of the later event
/// so transitive lookups always hit already-computed cells. No recursion,
/// so plan length never threatens the stack.
pub fn causal_ancestors(events: &[&Event]) -> AncestorTable {
    let n = events.len();
    let mut cells = vec![false; n * n];
    for current in 1..n {
        for prior in 0..current {
            let linked = directly_supports(events, prior, current)
                || transitively_supports(&cells, events, prior, current);
            cells[current * n + prior] = linked;
        }
    }
    AncestorTable { len: n, cells }
}

/// Direct support: some effect of `prior` achieves some precondition
/// literal of `current` (literal-level matching, across all clauses), and
/// no event strictly between them negates that literal.
fn directly_supports(events: &[&Event], prior: usize, current: usize) -> bool {
    events[prior].effects.iter().any(|effect| {
        events[current]
            .precondition
            .literals()
            .any(|literal| effect.achieves(literal) && !negated_between(events, prior, current, literal))
    })
}

/// Whether any event strictly between `prior` and `current` overwrites the
/// literal's fluent to a value that breaks the support.
fn negated_between(events: &[&Event], prior: usize, current: usize, literal: &Literal) -> bool {
    events[prior + 1..current]
        .iter()
        .any(|event| event.effects.iter().any(|effect| effect.negates(literal)))
}

/// Transitive support: some event strictly between the two achieves a
/// precondition literal of `current` and `prior` is already an ancestor of
/// it. No negation check on this branch; see the causality tests for the
/// consequences.
fn transitively_supports(cells: &[bool], events: &[&Event], prior: usize, current: usize) -> bool {
    let n = events.len();
    (prior + 1..current)
        .any(|mid| cells[mid * n + prior] && achieves_any(events[mid], events[current]))
}

/// Whether any effect of `earlier` achieves any precondition literal of
/// `later`, ignoring intervening events.
fn achieves_any(earlier: &Event, later: &Event) -> bool {
    earlier
        .effects
        .iter()
        .any(|effect| later.precondition.literals().any(|l| effect.achieves(l)))
}
