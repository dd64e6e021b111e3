//! Condition Evaluator
//!
//! Decides whether a condition tree holds for a booking context. Pure
//! functions over borrowed data; evaluation never fails. Conditions whose
//! key is absent from the context are false for every operator.

use serde_json::Value;
use shared::models::{BookingContext, Condition, ConditionGroup, ConditionNode, Logic, Operator};
use std::cmp::Ordering;

/// Evaluate a single condition: `context[key] <operator> value`
pub fn evaluate_condition(condition: &Condition, context: &BookingContext) -> bool {
    let Some(actual) = context.get(&condition.key) else {
        return false;
    };
    let expected = &condition.value;

    match condition.operator {
        Operator::Eq | Operator::Unrecognized => values_equal(actual, expected),
        Operator::Gt => compare(actual, expected) == Some(Ordering::Greater),
        Operator::Lt => compare(actual, expected) == Some(Ordering::Less),
        Operator::Gte => matches!(
            compare(actual, expected),
            Some(Ordering::Greater | Ordering::Equal)
        ),
        Operator::Lte => matches!(
            compare(actual, expected),
            Some(Ordering::Less | Ordering::Equal)
        ),
        Operator::Contains => match actual {
            Value::Array(items) => items.iter().any(|item| values_equal(item, expected)),
            _ => to_text(actual).contains(to_text(expected).as_str()),
        },
        Operator::StartsWith => to_text(actual).starts_with(to_text(expected).as_str()),
        Operator::EndsWith => to_text(actual).ends_with(to_text(expected).as_str()),
    }
}

/// Evaluate a group by combining its children with the group's logic
///
/// - `AND`: every child true (empty group is true)
/// - `OR`: at least one child true (empty group is false)
/// - `XOR`: exactly one child true
pub fn evaluate_condition_group(group: &ConditionGroup, context: &BookingContext) -> bool {
    let mut results = group
        .conditions
        .iter()
        .map(|node| evaluate_node(node, context));

    match group.logic {
        Logic::And => results.all(|hit| hit),
        Logic::Or => results.any(|hit| hit),
        Logic::Xor => results.filter(|hit| *hit).take(2).count() == 1,
    }
}

/// Evaluate one child of a group
pub fn evaluate_node(node: &ConditionNode, context: &BookingContext) -> bool {
    match node {
        ConditionNode::Group(group) => evaluate_condition_group(group, context),
        ConditionNode::Leaf(condition) => evaluate_condition(condition, context),
    }
}

/// Equality with numbers compared by value (`7 == 7.0`)
fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => x == y,
        },
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| values_equal(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(key, x)| ys.get(key).is_some_and(|y| values_equal(x, y)))
        }
        _ => a == b,
    }
}

/// Ordering between comparable values; `None` when the pair has no order
fn compare(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64()?.partial_cmp(&y.as_f64()?),
        (Value::String(x), Value::String(y)) => Some(x.cmp(y)),
        (Value::Bool(x), Value::Bool(y)) => Some(x.cmp(y)),
        _ => None,
    }
}

/// Text form of a context value for the textual operators
fn to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        // f64 Display drops a zero fraction ("7", not "7.0")
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => f.to_string(),
            _ => n.to_string(),
        },
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(items) => items.iter().map(to_text).collect::<Vec<_>>().join(","),
        Value::Object(_) => value.to_string(),
    }
}
