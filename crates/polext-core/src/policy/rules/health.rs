//! Financial rules for health policies.

use tracing::debug;

use super::money::{money_or_next, nonzero_money};
use super::{FinancialAccumulator, FinancialRules};

/// Health policy rules: sum insured candidates, premiums, taxes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HealthRules;

impl FinancialRules for HealthRules {
    fn apply(&self, line: &str, next_line: &str, acc: &mut FinancialAccumulator) {
        if line.contains("SUM INSURED") {
            if let Some(val) = money_or_next(line, next_line) {
                debug!(sum_insured = val, "health rule matched");
                acc.add_sum_insured(val);
            }
        }

        if line.contains("BASIC PREMIUM") {
            if let Some(val) = nonzero_money(line) {
                debug!(base_premium = val, "health rule matched");
                acc.financials.base_premium = Some(val);
            }
        }

        if line.contains("GST") || line.contains("SERVICE TAX") {
            if let Some(val) = nonzero_money(line) {
                debug!(tax = val, "health rule matched");
                acc.add_tax(val);
            }
        }

        if line.contains("TOTAL PREMIUM") || line.contains("NET PAYABLE") {
            if let Some(val) = nonzero_money(line) {
                debug!(total_premium = val, "health rule matched");
                acc.financials.total_premium = Some(val);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(lines: &[&str]) -> FinancialAccumulator {
        let mut acc = FinancialAccumulator::new();
        for (i, line) in lines.iter().enumerate() {
            let next = lines.get(i + 1).copied().unwrap_or("");
            HealthRules.apply(line, next, &mut acc);
        }
        acc
    }

    #[test]
    fn test_sum_insured_collects_all_candidates() {
        let acc = run(&["SUM INSURED 500000", "SUM INSURED", "300000", "BASE SUM INSURED 200000"]);
        assert_eq!(acc.sum_insured_candidates(), &[500000, 300000, 200000]);
    }

    #[test]
    fn test_premiums_are_line_only() {
        let acc = run(&["BASIC PREMIUM", "8000", "TOTAL PREMIUM", "9440"]);
        assert_eq!(acc.financials.base_premium, None);
        assert_eq!(acc.financials.total_premium, None);
    }

    #[test]
    fn test_one_line_can_feed_several_rules() {
        let acc = run(&["TOTAL PREMIUM INCL GST 9440"]);
        assert_eq!(acc.financials.total_premium, Some(9440));
        assert_eq!(acc.gst_total(), 9440);
    }

    #[test]
    fn test_service_tax_accumulates() {
        let acc = run(&["SERVICE TAX 1200", "CGST 720", "SGST 720"]);
        assert_eq!(acc.gst_total(), 2640);
    }
}
