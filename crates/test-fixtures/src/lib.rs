//! Shared builders for events, solutions, and problems used by tests
//! across the workspace.

use std::collections::HashMap;

use fabula_core::{
    Character, Clause, Comparison, Effect, Entity, Event, Fluent, GoalExpr, Literal, Precondition,
    Problem, Signature, Solution, Value,
};

/// Shorthand for a symbolic value.
pub fn sym(name: &str) -> Value {
    Value::Symbol(name.to_string())
}

/// Shorthand for a numeric value.
pub fn num(n: i64) -> Value {
    Value::Number(n)
}

/// Shorthand for a fluent.
pub fn fluent(name: &str) -> Fluent {
    Fluent::new(name)
}

/// Shorthand for an equality goal over a fluent.
pub fn wants(fluent_name: &str, value: Value) -> GoalExpr {
    GoalExpr::Compare(Literal::new(fluent(fluent_name), Comparison::Eq, value))
}

/// Chainable builder for test events.
pub struct EventBuilder {
    name: String,
    arguments: Vec<String>,
    consenting: Vec<Character>,
    clauses: Vec<Clause>,
    effects: Vec<Effect>,
    parameters: Vec<Entity>,
}

impl EventBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            arguments: Vec::new(),
            consenting: Vec::new(),
            clauses: Vec::new(),
            effects: Vec::new(),
            parameters: Vec::new(),
        }
    }

    pub fn argument(mut self, arg: &str) -> Self {
        self.arguments.push(arg.to_string());
        self
    }

    pub fn consenting(mut self, name: &str) -> Self {
        self.consenting.push(Character::new(name));
        self
    }

    /// Add a literal to the first clause, creating it if needed.
    pub fn requires(mut self, fluent_name: &str, comparison: Comparison, value: Value) -> Self {
        if self.clauses.is_empty() {
            self.clauses.push(Vec::new());
        }
        self.clauses[0].push(Literal::new(fluent(fluent_name), comparison, value));
        self
    }

    /// Add a whole disjunct clause.
    pub fn requires_clause(mut self, clause: Clause) -> Self {
        self.clauses.push(clause);
        self
    }

    pub fn effect(mut self, fluent_name: &str, value: Value) -> Self {
        self.effects.push(Effect::new(fluent(fluent_name), value));
        self
    }

    pub fn parameter(mut self, name: &str, kind: &str) -> Self {
        self.parameters.push(Entity::new(name, kind));
        self
    }

    pub fn build(self) -> Event {
        Event {
            signature: Signature::new(self.name, self.arguments),
            consenting: self.consenting,
            precondition: Precondition::new(self.clauses),
            effects: self.effects,
            parameters: self.parameters,
        }
    }
}

/// A scripted planner solution: ordered events plus per-step goal
/// explanations, for driving the story model in tests.
#[derive(Default)]
pub struct ScriptedSolution {
    events: Vec<Event>,
    explanations: Vec<HashMap<Character, GoalExpr>>,
}

impl ScriptedSolution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step; every consenting character gets a default goal of the
    /// form `goal_<name> == true`.
    pub fn step(self, event: Event) -> Self {
        let goals: Vec<(Character, GoalExpr)> = event
            .consenting
            .iter()
            .map(|c| {
                (
                    c.clone(),
                    wants(&format!("goal_{}", c.name()), Value::Bool(true)),
                )
            })
            .collect();
        self.step_explained(event, goals)
    }

    /// Append a step with explicit goal explanations.
    pub fn step_explained(mut self, event: Event, goals: Vec<(Character, GoalExpr)>) -> Self {
        self.events.push(event);
        self.explanations.push(goals.into_iter().collect());
        self
    }
}

impl Solution for ScriptedSolution {
    fn len(&self) -> usize {
        self.events.len()
    }

    fn event(&self, index: usize) -> &Event {
        &self.events[index]
    }

    fn explanation(&self, index: usize, character: &Character) -> Option<&GoalExpr> {
        self.explanations[index].get(character)
    }
}

/// A small two-character problem with places, a time, and an untyped item.
pub fn small_problem() -> Problem {
    Problem::new(
        "errand",
        vec![Character::new("tom"), Character::new("mercy")],
        vec![
            Entity::new("market", "place"),
            Entity::new("home", "place"),
            Entity::new("monday", "time"),
            Entity::new("coin", "item"),
        ],
    )
}
