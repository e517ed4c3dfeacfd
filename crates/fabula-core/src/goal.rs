//! Goal expressions and character goals.
//!
//! `CharacterGoal` equality is semantic: two goals are the same if they
//! simplify to the same canonical form, not if they are written the same
//! way. The canonical key is computed once at construction and cached.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::event::Character;
use crate::logic::Literal;

/// A goal expression as reported by the planner's explanation structures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalExpr {
    /// A single comparison over a fluent.
    Compare(Literal),
    /// Conjunction.
    And(Vec<GoalExpr>),
    /// Disjunction.
    Or(Vec<GoalExpr>),
}

impl GoalExpr {
    /// Canonical form of this expression, suitable as a semantic
    /// equality / hash key.
    pub fn canonical(&self) -> CanonicalGoal {
        CanonicalGoal(self.simplify())
    }

    /// Flatten nested connectives, sort and deduplicate their children,
    /// and unwrap single-child connectives.
    fn simplify(&self) -> GoalExpr {
        match self {
            GoalExpr::Compare(_) => self.clone(),
            GoalExpr::And(children) => normalize(children, true),
            GoalExpr::Or(children) => normalize(children, false),
        }
    }
}

fn normalize(children: &[GoalExpr], conjunction: bool) -> GoalExpr {
    let mut flat = Vec::new();
    for child in children {
        match child.simplify() {
            // Same-connective children collapse into the parent.
            GoalExpr::And(grandchildren) if conjunction => flat.extend(grandchildren),
            GoalExpr::Or(grandchildren) if !conjunction => flat.extend(grandchildren),
            other => flat.push(other),
        }
    }
    flat.sort();
    flat.dedup();
    if flat.len() == 1 {
        flat.swap_remove(0)
    } else if conjunction {
        GoalExpr::And(flat)
    } else {
        GoalExpr::Or(flat)
    }
}

impl fmt::Display for GoalExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoalExpr::Compare(literal) => write!(f, "{literal}"),
            GoalExpr::And(children) => write_connective(f, children, " & "),
            GoalExpr::Or(children) => write_connective(f, children, " | "),
        }
    }
}

fn write_connective(f: &mut fmt::Formatter<'_>, children: &[GoalExpr], sep: &str) -> fmt::Result {
    f.write_str("(")?;
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{child}")?;
    }
    f.write_str(")")
}

/// Canonical form of a goal expression. Constructed via
/// [`GoalExpr::canonical`]; equal canonical goals are semantically equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalGoal(GoalExpr);

impl CanonicalGoal {
    pub fn expr(&self) -> &GoalExpr {
        &self.0
    }
}

/// A character paired with the goal expression that explains one of its
/// actions. Equality and hashing use the character identity and the cached
/// canonical goal, so syntactic variants of the same goal compare equal.
#[derive(Debug, Clone)]
pub struct CharacterGoal {
    character: Character,
    goal: GoalExpr,
    canonical: CanonicalGoal,
}

impl CharacterGoal {
    pub fn new(character: Character, goal: GoalExpr) -> Self {
        let canonical = goal.canonical();
        Self {
            character,
            goal,
            canonical,
        }
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn goal(&self) -> &GoalExpr {
        &self.goal
    }

    pub fn canonical(&self) -> &CanonicalGoal {
        &self.canonical
    }
}

impl PartialEq for CharacterGoal {
    fn eq(&self, other: &Self) -> bool {
        self.character == other.character && self.canonical == other.canonical
    }
}

impl Eq for CharacterGoal {}

impl Hash for CharacterGoal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.character.hash(state);
        self.canonical.hash(state);
    }
}

impl fmt::Display for CharacterGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.character, self.goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::{Comparison, Fluent, Value};

    fn lit(fluent: &str, value: &str) -> GoalExpr {
        GoalExpr::Compare(Literal::new(
            Fluent::new(fluent),
            Comparison::Eq,
            Value::Symbol(value.to_string()),
        ))
    }

    #[test]
    fn reordered_conjunctions_are_semantically_equal() {
        let a = GoalExpr::And(vec![lit("x", "1"), lit("y", "2")]);
        let b = GoalExpr::And(vec![lit("y", "2"), lit("x", "1")]);
        assert_ne!(a, b);
        assert_eq!(a.canonical(), b.canonical());
    }

    #[test]
    fn nested_and_duplicated_connectives_flatten() {
        let nested = GoalExpr::And(vec![
            lit("x", "1"),
            GoalExpr::And(vec![lit("x", "1"), lit("y", "2")]),
        ]);
        let flat = GoalExpr::And(vec![lit("x", "1"), lit("y", "2")]);
        assert_eq!(nested.canonical(), flat.canonical());
    }

    #[test]
    fn single_child_connective_unwraps() {
        let wrapped = GoalExpr::Or(vec![lit("x", "1")]);
        assert_eq!(wrapped.canonical(), lit("x", "1").canonical());
    }

    #[test]
    fn character_goals_compare_semantically() {
        let tom = Character::new("tom");
        let a = CharacterGoal::new(
            tom.clone(),
            GoalExpr::And(vec![lit("x", "1"), lit("y", "2")]),
        );
        let b = CharacterGoal::new(
            tom.clone(),
            GoalExpr::And(vec![lit("y", "2"), lit("x", "1")]),
        );
        let c = CharacterGoal::new(Character::new("mercy"), a.goal().clone());
        assert_eq!(a, b);
        assert_ne!(a, c);

        let mut set = std::collections::HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }
}
