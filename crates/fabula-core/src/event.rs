//! Events as consumed from the planning engine: signatures, characters,
//! entities, and the annotated event structure itself.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::logic::{Effect, Precondition};

/// An agent whose willful participation an event requires.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Character(String);

impl Character {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A typed entity from the problem universe (e.g. a place or a time frame).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,
    pub kind: String,
}

impl Entity {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Identity of a ground event: action name plus argument constants.
/// Two occurrences of the same signature are the same event identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Signature {
    pub name: String,
    pub arguments: Vec<String>,
}

impl Signature {
    pub fn new(name: impl Into<String>, arguments: Vec<String>) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.arguments.join(", "))
    }
}

/// One atomic step as produced by the planner. Immutable, externally owned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Identity of the event.
    pub signature: Signature,
    /// Agents whose consent the event requires, in the planner's order.
    pub consenting: Vec<Character>,
    /// Disjunction of conjunctive clauses that must hold for the event.
    pub precondition: Precondition,
    /// Unconditional assignments the event performs.
    pub effects: Vec<Effect>,
    /// Parameter entities, in the planner's order.
    pub parameters: Vec<Entity>,
}
