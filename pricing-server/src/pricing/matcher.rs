//! Price Rule Matcher
//!
//! Applicability, priority ordering and stackable selection. Each step is a
//! separate function so the ordering rules can be checked on their own.

use shared::models::{BookingContext, PriceRule, RuleType};

use super::condition::evaluate_condition_group;

/// Whether a rule applies to a booking
///
/// Active rules without condition logic always apply; otherwise the
/// condition tree must hold for the context.
pub fn is_applicable(rule: &PriceRule, context: &BookingContext) -> bool {
    rule.active
        && rule
            .condition_logic
            .as_ref()
            .is_none_or(|group| evaluate_condition_group(group, context))
}

/// Whether a rule can produce an amount at all (known type, finite value)
pub fn is_well_formed(rule: &PriceRule) -> bool {
    rule.rule_type != RuleType::Unknown && rule.value.is_some_and(f64::is_finite)
}

/// Rules that may take part in a calculation, in input order
///
/// Malformed rules are dropped here so that a broken rule can never block
/// a valid non-stackable rule from winning.
pub fn candidate_rules<'a>(rules: &'a [PriceRule], context: &BookingContext) -> Vec<&'a PriceRule> {
    rules
        .iter()
        .filter(|rule| is_applicable(rule, context))
        .filter(|rule| {
            let ok = is_well_formed(rule);
            if !ok {
                tracing::warn!(
                    rule_id = %rule.id,
                    rule_name = %rule.name,
                    rule_type = ?rule.rule_type,
                    value = ?rule.value,
                    "Skipping malformed price rule"
                );
            }
            ok
        })
        .collect()
}

/// Sort by priority ascending (missing priority sorts as 999); stable, so
/// equal priorities keep input order
pub fn sort_by_priority(rules: &mut [&PriceRule]) {
    rules.sort_by_key(|rule| rule.effective_priority());
}

/// Split sorted rules into `(non_stackable, stackable)`, keeping order
pub fn partition_by_stackable<'a>(
    rules: Vec<&'a PriceRule>,
) -> (Vec<&'a PriceRule>, Vec<&'a PriceRule>) {
    rules.into_iter().partition(|rule| !rule.stackable)
}

/// The single non-stackable rule that gets applied: the first in priority order
pub fn select_non_stackable_winner<'a>(non_stackable: &[&'a PriceRule]) -> Option<&'a PriceRule> {
    non_stackable.first().copied()
}

/// Rules to apply, in application order: the non-stackable winner (if any)
/// followed by every stackable rule in priority order
pub fn select_rules<'a>(rules: &'a [PriceRule], context: &BookingContext) -> Vec<&'a PriceRule> {
    let mut candidates = candidate_rules(rules, context);
    sort_by_priority(&mut candidates);

    let (non_stackable, stackable) = partition_by_stackable(candidates);
    select_non_stackable_winner(&non_stackable)
        .into_iter()
        .chain(stackable)
        .collect()
}
