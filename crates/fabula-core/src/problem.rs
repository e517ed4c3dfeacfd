//! The static problem definition consumed from the planning engine.

use serde::{Deserialize, Serialize};

use crate::constants::{PLACE_KIND, TIME_KIND};
use crate::event::{Character, Entity};

/// The parts of a planning problem the analyzer needs: the characters and
/// the typed entity universe. Ordering follows the problem definition and
/// fixes the character/place/time dictionary ordering for salience vectors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub name: String,
    pub characters: Vec<Character>,
    pub entities: Vec<Entity>,
}

impl Problem {
    pub fn new(name: impl Into<String>, characters: Vec<Character>, entities: Vec<Entity>) -> Self {
        Self {
            name: name.into(),
            characters,
            entities,
        }
    }

    /// Entities of the given kind, in definition order.
    pub fn entities_of_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a Entity> {
        self.entities.iter().filter(move |e| e.kind == kind)
    }

    /// Entities typed "place".
    pub fn places(&self) -> impl Iterator<Item = &Entity> {
        self.entities_of_kind(PLACE_KIND)
    }

    /// Entities typed "time".
    pub fn times(&self) -> impl Iterator<Item = &Entity> {
        self.entities_of_kind(TIME_KIND)
    }
}
