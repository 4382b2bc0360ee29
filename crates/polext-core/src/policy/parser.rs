//! Rule-based policy parser: metadata pass, financial pass, post-processing.

use std::path::Path;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::models::policy::{ExtractionResult, Financials, InsuranceType, PolicyMetadata};
use crate::text::{read_text, split_lines};

use super::rules::{
    names::{inline_insured_name, insurer_name, is_name_label},
    title_case, FinancialAccumulator, FinancialRules, RuleSet,
};
use super::PolicyParser;

/// Extraction result plus diagnostics.
#[derive(Debug, Clone)]
pub struct ParseReport {
    /// Extracted policy data.
    pub result: ExtractionResult,
    /// Extraction warnings.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Prepare cleaned text for extraction: trim, upper-case, drop blank lines.
pub fn prepare_lines(text: &str) -> Vec<String> {
    split_lines(text)
        .into_iter()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_uppercase)
        .collect()
}

/// Classification carried by a single line, if any. Motor keywords are
/// checked after `HEALTH` and take precedence on the same line.
fn classify_line(line: &str) -> Option<InsuranceType> {
    let mut found = None;
    if line.contains("HEALTH") {
        found = Some(InsuranceType::Health);
    }
    if line.contains("TWO WHEELER") || line.contains("TWO-WHEELER") || line.contains("MOTOR") {
        found = Some(InsuranceType::Motor);
    }
    found
}

/// Classify cleaned lines by their last classifying line.
pub fn classify_last_match<S: AsRef<str>>(lines: &[S]) -> InsuranceType {
    lines
        .iter()
        .filter_map(|l| classify_line(l.as_ref()))
        .last()
        .unwrap_or_default()
}

/// Rule-based parser for cleaned policy text.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedParser;

impl RuleBasedParser {
    pub fn new() -> Self {
        Self
    }

    /// Run all three stages over a prepared line sequence.
    pub fn extract<S: AsRef<str>>(&self, lines: &[S]) -> ExtractionResult {
        let metadata = self.scan_metadata(lines);
        let insurance_type = metadata.insurance_type.unwrap_or_default();
        let financials = self.scan_financials(lines, insurance_type);

        ExtractionResult {
            metadata,
            financials,
            ..ExtractionResult::new()
        }
    }

    fn scan_metadata<S: AsRef<str>>(&self, lines: &[S]) -> PolicyMetadata {
        let mut metadata = PolicyMetadata::default();

        for (i, line) in lines.iter().enumerate() {
            let line = line.as_ref();

            if let Some(insurance_type) = classify_line(line) {
                metadata.insurance_type = Some(insurance_type);
            }

            if metadata.insurer_name.is_none() {
                metadata.insurer_name = insurer_name(line);
            }

            if is_name_label(line) {
                if let Some(next) = lines.get(i + 1) {
                    metadata.insured_name = Some(title_case(next.as_ref()));
                }
            }

            if let Some(name) = inline_insured_name(line) {
                metadata.insured_name = Some(name);
            }
        }

        metadata
    }

    fn scan_financials<S: AsRef<str>>(&self, lines: &[S], insurance_type: InsuranceType) -> Financials {
        let rules = RuleSet::for_type(insurance_type);
        let mut acc = FinancialAccumulator::new();

        for (i, line) in lines.iter().enumerate() {
            let next_line = lines.get(i + 1).map(|l| l.as_ref()).unwrap_or("");
            rules.apply(line.as_ref(), next_line, &mut acc);
        }

        debug!(
            gst_total = acc.gst_total(),
            sum_insured_candidates = acc.sum_insured_candidates().len(),
            "Financial pass complete"
        );

        acc.finish(insurance_type)
    }

    fn collect_warnings(&self, result: &ExtractionResult) -> Vec<String> {
        let mut warnings = Vec::new();

        match result.metadata.insurance_type {
            None => warnings.push("Could not detect insurance type".to_string()),
            Some(_) if result.financials.is_empty() => {
                warnings.push("No financial fields extracted".to_string())
            }
            Some(InsuranceType::Health) if result.financials.sum_insured.is_none() => {
                warnings.push("Could not extract sum insured".to_string())
            }
            Some(_) => {}
        }

        warnings
    }
}

impl PolicyParser for RuleBasedParser {
    fn parse(&self, text: &str) -> ParseReport {
        let start = Instant::now();
        let lines = prepare_lines(text);

        info!("Parsing policy from {} non-blank lines", lines.len());

        let result = self.extract(&lines);
        let warnings = self.collect_warnings(&result);
        for warning in &warnings {
            warn!("{}", warning);
        }

        debug!(
            "Extracted {} policy in {:?}",
            result.metadata.insurance_type.unwrap_or_default(),
            start.elapsed()
        );

        ParseReport {
            result,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

/// Parse a cleaned line sequence file.
pub fn parse_file(path: &Path) -> Result<ParseReport> {
    let text = read_text(path)?;
    Ok(RuleBasedParser::new().parse(&text))
}

/// Write the result as JSON.
pub fn write_result(result: &ExtractionResult, path: &Path, pretty: bool) -> Result<()> {
    let json = if pretty {
        result.to_pretty_json()?
    } else {
        serde_json::to_string(result)?
    };
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(text: &str) -> ExtractionResult {
        RuleBasedParser::new().parse(text).result
    }

    #[test]
    fn test_motor_policy() {
        let text = "\
TWO WHEELER PACKAGE POLICY - MOTOR
VEHICLE IDV 150000
BASIC PREMIUM 5000
CGST 450
SGST 450
TOTAL PREMIUM 5900
COMPULSORY EXCESS 1000";

        let result = parse(text);

        assert_eq!(result.metadata.insurance_type, Some(InsuranceType::Motor));
        assert_eq!(
            result.financials,
            Financials {
                vehicle_idv: Some(150000),
                base_premium: Some(5000),
                total_premium: Some(5900),
                deductible: Some(1000),
                tax: Some(900),
                sum_insured: None,
            }
        );
        assert_eq!(result.policy.policy_term, "1 year");
    }

    #[test]
    fn test_health_policy() {
        let text = "\
HEALTH
SUM INSURED 500000
SUM INSURED 300000
BASIC PREMIUM 8000
GST 1440
TOTAL PREMIUM 9440";

        let result = parse(text);

        assert_eq!(result.metadata.insurance_type, Some(InsuranceType::Health));
        assert_eq!(
            result.financials,
            Financials {
                base_premium: Some(8000),
                total_premium: Some(9440),
                tax: Some(1440),
                sum_insured: Some(500000),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_unknown_document_has_no_financials() {
        let report = RuleBasedParser::new().parse("TRAVEL POLICY\nTOTAL PREMIUM 5900\nGST 900");

        assert_eq!(report.result, ExtractionResult::new());
        assert_eq!(report.warnings, vec!["Could not detect insurance type".to_string()]);
    }

    #[test]
    fn test_no_gst_means_no_tax_key() {
        let result = parse("MOTOR\nTOTAL PREMIUM 5900");

        assert_eq!(result.financials.tax, None);
        let json = serde_json::to_value(&result).unwrap();
        assert!(json["financials"].get("tax").is_none());
    }

    #[test]
    fn test_last_classifying_line_wins() {
        let lines = ["MOTOR ADD-ON", "HEALTH RIDER", "VEHICLE IDV 150000"];
        assert_eq!(classify_last_match(&lines), InsuranceType::Health);

        // Health rules now apply, so IDV is not extracted
        let result = RuleBasedParser::new().extract(&lines);
        assert_eq!(result.metadata.insurance_type, Some(InsuranceType::Health));
        assert_eq!(result.financials.vehicle_idv, None);
    }

    #[test]
    fn test_motor_keyword_beats_health_on_same_line() {
        assert_eq!(classify_last_match(&["HEALTH AND MOTOR"]), InsuranceType::Motor);
        assert_eq!(classify_last_match(&["TWO-WHEELER"]), InsuranceType::Motor);
        assert_eq!(classify_last_match::<&str>(&[]), InsuranceType::Unknown);
    }

    #[test]
    fn test_insured_name_inline() {
        let result = RuleBasedParser::new().extract(&["NAME :John Doe"]);
        assert_eq!(result.metadata.insured_name, Some("John Doe".to_string()));
    }

    #[test]
    fn test_insured_name_on_next_line() {
        let result = parse("NAME\nJANE SMITH");
        assert_eq!(result.metadata.insured_name, Some("Jane Smith".to_string()));

        // Blank lines are dropped before the rule looks ahead
        let result = parse("NAME\n\n   \nRAVI KUMAR");
        assert_eq!(result.metadata.insured_name, Some("Ravi Kumar".to_string()));

        assert_eq!(parse("NAME").metadata.insured_name, None);
    }

    #[test]
    fn test_later_insured_name_wins() {
        let result = parse("NAME :JOHN DOE\nNAME\nJANE SMITH");
        assert_eq!(result.metadata.insured_name, Some("Jane Smith".to_string()));
    }

    #[test]
    fn test_first_insurer_name_wins() {
        let result = parse(
            "STAR HEALTH AND ALLIED INSURANCE COMPANY LIMITED\n\
             REINSURED BY GIC INSURANCE COMPANY LIMITED",
        );
        assert_eq!(
            result.metadata.insurer_name,
            Some("Star Health And Allied Insurance Company Limited".to_string())
        );
    }

    #[test]
    fn test_prepare_lines() {
        assert_eq!(
            prepare_lines("  motor policy \n\n\tCGST 450\r\n"),
            vec!["MOTOR POLICY".to_string(), "CGST 450".to_string()]
        );
    }

    #[test]
    fn test_health_without_sum_insured_warns() {
        let report = RuleBasedParser::new().parse("HEALTH\nTOTAL PREMIUM 9440");
        assert_eq!(report.warnings, vec!["Could not extract sum insured".to_string()]);
    }

    #[test]
    fn test_write_result() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");

        let result = parse("MOTOR\nGST 900");
        write_result(&result, &path, true).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, result.to_pretty_json().unwrap());

        let written: ExtractionResult = serde_json::from_str(&text).unwrap();
        assert_eq!(written, result);
    }
}
