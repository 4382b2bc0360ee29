//! Rule-based field extractors for insurance policies.

pub mod health;
pub mod money;
pub mod motor;
pub mod names;
pub mod patterns;

pub use health::HealthRules;
pub use money::{extract_money, money_or_next, nonzero_money, parse_money};
pub use motor::MotorRules;
pub use names::title_case;
pub use patterns::*;

use crate::models::policy::{Financials, InsuranceType};

/// Trait for per-line financial rules.
pub trait FinancialRules {
    /// Apply every rule to `line`, with `next_line` available for fallback.
    fn apply(&self, line: &str, next_line: &str, acc: &mut FinancialAccumulator);
}

/// Financial rule set, selected once per document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleSet {
    Motor(MotorRules),
    Health(HealthRules),
    /// Unclassified documents extract nothing.
    NoRules,
}

impl RuleSet {
    /// Select the rules for a document type.
    pub fn for_type(insurance_type: InsuranceType) -> Self {
        match insurance_type {
            InsuranceType::Motor => RuleSet::Motor(MotorRules),
            InsuranceType::Health => RuleSet::Health(HealthRules),
            InsuranceType::Unknown => RuleSet::NoRules,
        }
    }
}

impl FinancialRules for RuleSet {
    fn apply(&self, line: &str, next_line: &str, acc: &mut FinancialAccumulator) {
        match self {
            RuleSet::Motor(rules) => rules.apply(line, next_line, acc),
            RuleSet::Health(rules) => rules.apply(line, next_line, acc),
            RuleSet::NoRules => {}
        }
    }
}

/// Running state for one document's financial pass.
#[derive(Debug, Clone, Default)]
pub struct FinancialAccumulator {
    /// Fields set directly by the rules.
    pub financials: Financials,
    gst_total: u64,
    sum_insured_candidates: Vec<u64>,
}

impl FinancialAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one GST component.
    pub fn add_tax(&mut self, value: u64) {
        self.gst_total = self.gst_total.saturating_add(value);
    }

    /// Record one quoted sum insured.
    pub fn add_sum_insured(&mut self, value: u64) {
        self.sum_insured_candidates.push(value);
    }

    pub fn gst_total(&self) -> u64 {
        self.gst_total
    }

    pub fn sum_insured_candidates(&self) -> &[u64] {
        &self.sum_insured_candidates
    }

    /// Resolve the aggregated fields and return the final financials.
    ///
    /// Tax is published only when non-zero. Sum insured is the largest
    /// candidate, for health documents only.
    pub fn finish(self, insurance_type: InsuranceType) -> Financials {
        let mut financials = self.financials;

        if self.gst_total > 0 {
            financials.tax = Some(self.gst_total);
        }

        if insurance_type == InsuranceType::Health {
            if let Some(max) = self.sum_insured_candidates.iter().max() {
                financials.sum_insured = Some(*max);
            }
        }

        financials
    }
}
