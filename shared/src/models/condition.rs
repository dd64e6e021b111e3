//! Condition Grammar
//!
//! Rules describe when they apply as a tree of conditions. A leaf compares
//! one booking attribute against a literal; a group combines its children
//! with AND / OR / XOR. The JSON shape is:
//!
//! ```json
//! {
//!   "logic": "OR",
//!   "conditions": [
//!     { "type": "duration", "operator": "gte", "value": 7 },
//!     { "logic": "AND", "conditions": [ { "type": "route", "value": "interstate" } ] }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Booking attributes a rule is evaluated against (customerType, duration,
/// addOns, isWeekend, ...). Built fresh for every calculation.
pub type BookingContext = HashMap<String, Value>;

/// Comparison operator of a single condition
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operator {
    #[default]
    Eq,
    Gt,
    Lt,
    Gte,
    Lte,
    Contains,
    StartsWith,
    EndsWith,
    /// Any operator name this build does not know; evaluated as `Eq`
    #[serde(other)]
    Unrecognized,
}

/// Group combinator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Logic {
    /// All children true (empty group is true)
    And,
    /// At least one child true (empty group is false)
    Or,
    /// Exactly one child true
    Xor,
}

/// Single predicate: `context[key] <operator> value`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Context key to look up
    #[serde(rename = "type")]
    pub key: String,
    #[serde(default)]
    pub operator: Operator,
    #[serde(default)]
    pub value: Value,
}

impl Condition {
    pub fn new(key: impl Into<String>, operator: Operator, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            operator,
            value: value.into(),
        }
    }

    /// Equality condition (the default operator)
    pub fn eq(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(key, Operator::Eq, value)
    }
}

/// Logical group of conditions and nested groups
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionGroup {
    pub logic: Logic,
    #[serde(default)]
    pub conditions: Vec<ConditionNode>,
}

impl ConditionGroup {
    pub fn new(logic: Logic, conditions: Vec<ConditionNode>) -> Self {
        Self { logic, conditions }
    }

    pub fn all(conditions: Vec<ConditionNode>) -> Self {
        Self::new(Logic::And, conditions)
    }

    pub fn any(conditions: Vec<ConditionNode>) -> Self {
        Self::new(Logic::Or, conditions)
    }

    pub fn exactly_one(conditions: Vec<ConditionNode>) -> Self {
        Self::new(Logic::Xor, conditions)
    }
}

/// A child of a group: either a nested group or a leaf condition.
///
/// Serialized untagged so stored rules keep the plain tree shape; a node with
/// a `logic` field is a group, anything else is a leaf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConditionNode {
    Group(ConditionGroup),
    Leaf(Condition),
}

impl From<Condition> for ConditionNode {
    fn from(condition: Condition) -> Self {
        Self::Leaf(condition)
    }
}

impl From<ConditionGroup> for ConditionNode {
    fn from(group: ConditionGroup) -> Self {
        Self::Group(group)
    }
}
