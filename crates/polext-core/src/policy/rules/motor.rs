//! Financial rules for motor policies.

use tracing::debug;

use super::money::{money_or_next, nonzero_money};
use super::{FinancialAccumulator, FinancialRules};

/// Motor policy rules: IDV, premiums, GST components, deductible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MotorRules;

impl FinancialRules for MotorRules {
    fn apply(&self, line: &str, next_line: &str, acc: &mut FinancialAccumulator) {
        if line.contains("VEHICLE IDV") {
            if let Some(val) = money_or_next(line, next_line) {
                debug!(vehicle_idv = val, "motor rule matched");
                acc.financials.vehicle_idv = Some(val);
            }
        }

        if line.contains("BASIC") && line.contains("PREMIUM") {
            if let Some(val) = money_or_next(line, next_line) {
                debug!(base_premium = val, "motor rule matched");
                acc.financials.base_premium = Some(val);
            }
        }

        if line.contains("CGST") || line.contains("SGST") || line.starts_with("GST") {
            if let Some(val) = nonzero_money(line) {
                debug!(gst = val, "motor rule matched");
                acc.add_tax(val);
            }
        }

        if line.contains("FINAL PREMIUM") || line.contains("NET PAYABLE") || line.contains("TOTAL PREMIUM") {
            if let Some(val) = money_or_next(line, next_line) {
                debug!(total_premium = val, "motor rule matched");
                acc.financials.total_premium = Some(val);
            }
        }

        if line.contains("COMPULSORY EXCESS") || line.contains("DEDUCTIBLE") {
            if let Some(val) = money_or_next(line, next_line) {
                debug!(deductible = val, "motor rule matched");
                acc.financials.deductible = Some(val);
            }
        }
    }
}
