//! Inference rules for spider diagram reasoning
//!
//! # Available Rules
//!
//! - **Idempotency** - Reduces `D ∧ D`, `D ∨ D` to `D` and `D ⇒ D`, `D ⇔ D` to `⊤`
//!
//! Rules are stateless values registered under their stable name. Clients
//! look them up with [`rule_by_name`] and pair them with arguments in a
//! [`RuleApplication`](crate::reasoning::RuleApplication).

mod idempotency;

pub use idempotency::{Idempotency, NOT_APPLICABLE_KEY as IDEMPOTENCY_NOT_APPLICABLE};

use crate::reasoning::rule::InferenceRule;
use indexmap::IndexMap;
use std::sync::OnceLock;

pub static IDEMPOTENCY: Idempotency = Idempotency;

fn registry() -> &'static IndexMap<&'static str, &'static dyn InferenceRule> {
    static REGISTRY: OnceLock<IndexMap<&'static str, &'static dyn InferenceRule>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let rules: [&'static dyn InferenceRule; 1] = [&IDEMPOTENCY];
        rules.into_iter().map(|rule| (rule.name(), rule)).collect()
    })
}

/// Look up a rule by its stable name
pub fn rule_by_name(name: &str) -> Option<&'static dyn InferenceRule> {
    registry().get(name).copied()
}

/// All known rules, in registration order
pub fn all_rules() -> impl Iterator<Item = &'static dyn InferenceRule> {
    registry().values().copied()
}

/// Names of all known rules, in registration order
pub fn rule_names() -> impl Iterator<Item = &'static str> {
    registry().keys().copied()
}
