use chrono::NaiveDate;
use pricing_server::{
    JsonFileRuleProvider, PriceRuleProvider, QuoteOptions, RentalCatalog, calculate_price,
    evaluate_condition_group, quote_rental,
};
use serde_json::json;
use shared::models::{
    BookingContext, Condition, ConditionGroup, Operator, PriceRule, RuleType,
};
use shared::pricing::RentalQuoteRequest;

const SEED_RULES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/price_rules.json");

fn context(pairs: &[(&str, serde_json::Value)]) -> BookingContext {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_weekly_discount_with_interstate_fee() {
    let weekly = PriceRule::new("weekly", "Weekly", RuleType::Percentage, 15.0)
        .with_priority(1)
        .with_stackable(true)
        .with_conditions(ConditionGroup::all(vec![
            Condition::new("duration", Operator::Gte, 7).into(),
        ]));
    let interstate = PriceRule::new("interstate", "Interstate", RuleType::Percentage, -10.0)
        .with_priority(2)
        .with_stackable(true)
        .with_conditions(ConditionGroup::all(vec![
            Condition::eq("route", "interstate").into(),
        ]));

    let ctx = context(&[("duration", json!(7)), ("route", json!("interstate"))]);
    let result = calculate_price(&[weekly, interstate], &ctx, 100.0, 7.0).unwrap();

    assert_eq!(result.original_price, 700.0);
    assert_eq!(result.final_price, 665.0);
    assert_eq!(result.savings, 35.0);
    assert_eq!(result.savings_percentage, 5.0);
    assert_eq!(result.applied_rules.len(), 2);
    assert_eq!(result.breakdown[0].discount, 105.0);
    assert_eq!(result.breakdown[1].discount, -70.0);
}

#[test]
fn test_nested_groups_against_context() {
    let group: ConditionGroup = serde_json::from_value(json!({
        "logic": "AND",
        "conditions": [
            { "type": "customerType", "value": "business" },
            {
                "logic": "OR",
                "conditions": [
                    { "type": "addOns", "operator": "contains", "value": "wifi" },
                    { "type": "route", "value": "interstate" }
                ]
            }
        ]
    }))
    .unwrap();

    let hit = context(&[
        ("customerType", json!("business")),
        ("addOns", json!(["gps", "wifi"])),
    ]);
    let miss = context(&[("customerType", json!("business")), ("addOns", json!([]))]);

    assert!(evaluate_condition_group(&group, &hit));
    assert!(!evaluate_condition_group(&group, &miss));
}

#[tokio::test]
async fn test_seed_rules_load() {
    let provider = JsonFileRuleProvider::open(SEED_RULES).await.unwrap();
    let rules = provider.load_rules().await.unwrap();

    assert_eq!(rules.len(), 15);
    assert!(rules.iter().all(|rule| rule.value.is_some()));
    assert!(rules.iter().all(|rule| rule.rule_type != RuleType::Unknown));
}

#[tokio::test]
async fn test_seed_rules_family_week() {
    let provider = JsonFileRuleProvider::open(SEED_RULES).await.unwrap();
    let rules = provider.load_rules().await.unwrap();

    // SUV with child seat for a week, booked on a Wednesday in March
    let mut request = RentalQuoteRequest::new("suv", 2020, 7);
    request.add_ons = vec!["childSeat".to_string()];
    request.booking_date = Some(date(2024, 3, 13));

    let quote = quote_rental(
        &request,
        &rules,
        &RentalCatalog::default(),
        date(2024, 1, 1),
        QuoteOptions::default(),
    )
    .unwrap();

    let applied: Vec<&str> = quote.per_car.applied_rules.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(applied, vec!["1", "12"]);
    assert_eq!(quote.unit_price, 73.0);
    assert_eq!(quote.original_price, 511.0);
    assert_eq!(quote.final_price, 357.7);
    assert_eq!(quote.savings_percentage, 30.0);
}

#[tokio::test]
async fn test_seed_rules_summer_promotion_wins() {
    let provider = JsonFileRuleProvider::open(SEED_RULES).await.unwrap();
    let rules = provider.load_rules().await.unwrap();

    let mut request = RentalQuoteRequest::new("economy", 2020, 14);
    request.booking_date = Some(date(2024, 7, 10));

    let quote = quote_rental(
        &request,
        &rules,
        &RentalCatalog::default(),
        date(2024, 1, 1),
        QuoteOptions::default(),
    )
    .unwrap();

    // Seasonal promotion is the only non-stackable match and goes first
    let applied: Vec<&str> = quote.per_car.applied_rules.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(applied, vec!["14", "1"]);
    assert_eq!(quote.original_price, 420.0);
    assert_eq!(quote.final_price, 252.0);
    assert_eq!(quote.savings, 168.0);
}
