//! Price Rule Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::condition::ConditionGroup;

/// Priority assigned to rules that do not carry one (applied last)
pub const DEFAULT_PRIORITY: i32 = 999;

/// How a rule's `value` turns into an amount
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleType {
    /// `value` percent of the base price
    Percentage,
    /// `value` as an absolute amount
    Fixed,
    /// Quantity discount; priced like `Percentage`, gated by conditions
    Bulk,
    /// Stored type this build does not know; the rule has no effect
    #[default]
    #[serde(other)]
    Unknown,
}

/// Classification shown in the admin lists; not used when pricing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleLevel {
    Global,
    Customer,
    Product,
    Item,
    Service,
}

/// Price rule entity
///
/// A positive `value` is a discount, a negative `value` is a surcharge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRule {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default)]
    pub rule_type: RuleType,
    /// Adjustment value (percentage: 15 = 15%, fixed: 25 = 25.00).
    /// `None` when the stored value is missing or not a finite number.
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub value: Option<f64>,
    #[serde(default)]
    pub active: bool,
    /// Lower number = applied first
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<RuleLevel>,
    #[serde(default)]
    pub stackable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition_logic: Option<ConditionGroup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_quantity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_quantity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_ids: Option<Vec<String>>,
}

impl PriceRule {
    /// Create an active, non-stackable, unconditional rule
    pub fn new(id: impl Into<String>, name: impl Into<String>, rule_type: RuleType, value: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            rule_type,
            value: Some(value).filter(|v| v.is_finite()),
            active: true,
            priority: None,
            level: None,
            stackable: false,
            condition_logic: None,
            start_date: None,
            end_date: None,
            min_quantity: None,
            max_quantity: None,
            product_ids: None,
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_stackable(mut self, stackable: bool) -> Self {
        self.stackable = stackable;
        self
    }

    pub fn with_level(mut self, level: RuleLevel) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_conditions(mut self, group: ConditionGroup) -> Self {
        self.condition_logic = Some(group);
        self
    }

    /// Priority used for ordering, with the missing-priority sentinel applied
    pub fn effective_priority(&self) -> i32 {
        self.priority.unwrap_or(DEFAULT_PRIORITY)
    }

    /// Whether `at` falls inside the optional start/end window (inclusive)
    pub fn is_within_window(&self, at: DateTime<Utc>) -> bool {
        if let Some(start) = self.start_date
            && at < start
        {
            return false;
        }
        if let Some(end) = self.end_date
            && at > end
        {
            return false;
        }
        true
    }
}

/// Accept any JSON value; only finite numbers become an amount
fn deserialize_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(serde_json::Value::as_f64)
        .filter(|v| v.is_finite()))
}
