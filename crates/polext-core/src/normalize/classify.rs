//! Raw-document classification used by the normalizer.

use crate::models::policy::InsuranceType;

/// Classify a raw document by its first classifying line.
///
/// Lines are scanned in order and the scan stops at the first line that
/// mentions `HEALTH` (checked first) or `MOTOR` / `TWO WHEELER`.
pub fn classify_first_match<S: AsRef<str>>(raw_lines: &[S]) -> InsuranceType {
    for line in raw_lines {
        let upper = line.as_ref().to_uppercase();
        if upper.contains("HEALTH") {
            return InsuranceType::Health;
        }
        if upper.contains("MOTOR") || upper.contains("TWO WHEELER") {
            return InsuranceType::Motor;
        }
    }
    InsuranceType::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_keyword_wins() {
        let lines = ["Private Car Motor Package Policy", "Health cover not included"];
        assert_eq!(classify_first_match(&lines), InsuranceType::Motor);

        let lines = ["Family Health Optima", "motor add-on: none"];
        assert_eq!(classify_first_match(&lines), InsuranceType::Health);
    }

    #[test]
    fn test_health_checked_first_within_a_line() {
        assert_eq!(classify_first_match(&["motor and health"]), InsuranceType::Health);
    }

    #[test]
    fn test_two_wheeler_without_hyphen_only() {
        assert_eq!(classify_first_match(&["Two Wheeler Package"]), InsuranceType::Motor);
        assert_eq!(classify_first_match(&["TWO-WHEELER PACKAGE"]), InsuranceType::Unknown);
    }

    #[test]
    fn test_unknown_without_keywords() {
        assert_eq!(classify_first_match::<&str>(&[]), InsuranceType::Unknown);
        assert_eq!(classify_first_match(&["Travel Policy"]), InsuranceType::Unknown);
    }
}
