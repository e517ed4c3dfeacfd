//! Logic model consumed from the planning engine: fluents, values,
//! comparisons, precondition literals, and effects.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named state variable whose value preconditions test and effects assign.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fluent(String);

impl Fluent {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fluent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A ground planner value: boolean, integer, or symbolic constant.
///
/// Values are totally ordered so goal expressions can be canonicalized and
/// used as set/map keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Number(i64),
    Symbol(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Symbol(s) => f.write_str(s),
        }
    }
}

/// Comparison operator in a precondition literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl Comparison {
    /// Test `lhs <op> rhs`. Ordering comparisons on non-numeric values
    /// never hold.
    pub fn test(self, lhs: &Value, rhs: &Value) -> bool {
        match (self, lhs, rhs) {
            (Comparison::Eq, _, _) => lhs == rhs,
            (Comparison::Ne, _, _) => lhs != rhs,
            (Comparison::Lt, Value::Number(a), Value::Number(b)) => a < b,
            (Comparison::Le, Value::Number(a), Value::Number(b)) => a <= b,
            (Comparison::Gt, Value::Number(a), Value::Number(b)) => a > b,
            (Comparison::Ge, Value::Number(a), Value::Number(b)) => a >= b,
            _ => false,
        }
    }

    /// The complementary operator: `negate(op).test(a, b) == !op.test(a, b)`
    /// for numeric operands.
    pub fn negate(self) -> Self {
        match self {
            Comparison::Eq => Comparison::Ne,
            Comparison::Ne => Comparison::Eq,
            Comparison::Lt => Comparison::Ge,
            Comparison::Le => Comparison::Gt,
            Comparison::Gt => Comparison::Le,
            Comparison::Ge => Comparison::Lt,
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Comparison::Eq => "==",
            Comparison::Ne => "!=",
            Comparison::Lt => "<",
            Comparison::Le => "<=",
            Comparison::Gt => ">",
            Comparison::Ge => ">=",
        };
        f.write_str(symbol)
    }
}

/// One precondition literal: `fluent <op> value`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Literal {
    pub fluent: Fluent,
    pub comparison: Comparison,
    pub value: Value,
}

impl Literal {
    pub fn new(fluent: Fluent, comparison: Comparison, value: Value) -> Self {
        Self {
            fluent,
            comparison,
            value,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.fluent, self.comparison, self.value)
    }
}

/// A conjunctive clause of literals.
pub type Clause = Vec<Literal>;

/// A precondition: disjunction of conjunctive clauses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Precondition {
    clauses: Vec<Clause>,
}

impl Precondition {
    pub fn new(clauses: Vec<Clause>) -> Self {
        Self { clauses }
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// All literals across all clauses, in order.
    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.clauses.iter().flatten()
    }
}

/// An unconditional assignment of a value to a fluent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Effect {
    pub fluent: Fluent,
    pub value: Value,
}

impl Effect {
    pub fn new(fluent: Fluent, value: Value) -> Self {
        Self { fluent, value }
    }

    /// Whether this assignment sets a value that makes `literal` hold.
    pub fn achieves(&self, literal: &Literal) -> bool {
        self.fluent == literal.fluent && literal.comparison.test(&self.value, &literal.value)
    }

    /// Whether this assignment overwrites the fluent to a value that makes
    /// the negated form of `literal` hold, breaking any earlier support.
    pub fn negates(&self, literal: &Literal) -> bool {
        self.fluent == literal.fluent
            && literal.comparison.negate().test(&self.value, &literal.value)
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.fluent, self.value)
    }
}
