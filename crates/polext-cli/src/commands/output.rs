//! Output formatting for extraction results.

use console::style;

use polext_core::models::policy::{ExtractionResult, Financials};
use polext_core::ParseReport;

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    /// Label used in sample-run headings.
    pub fn label(self) -> &'static str {
        match self {
            OutputFormat::Json => "JSON",
            OutputFormat::Csv => "CSV",
            OutputFormat::Text => "TEXT",
        }
    }
}

pub fn format_result(
    result: &ExtractionResult,
    format: OutputFormat,
    pretty: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json if pretty => Ok(result.to_pretty_json()?),
        OutputFormat::Json => Ok(serde_json::to_string(result)?),
        OutputFormat::Csv => format_csv(result),
        OutputFormat::Text => Ok(format_text(result)),
    }
}

fn format_csv(result: &ExtractionResult) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    let mut header = vec!["insurance_type", "insurer_name", "insured_name"];
    header.extend(Financials::FIELDS);
    header.push("policy_term");
    wtr.write_record(&header)?;

    let metadata = &result.metadata;
    let mut record = vec![
        metadata
            .insurance_type
            .map(|t| t.as_str().to_string())
            .unwrap_or_default(),
        metadata.insurer_name.clone().unwrap_or_default(),
        metadata.insured_name.clone().unwrap_or_default(),
    ];
    record.extend(
        result
            .financials
            .entries()
            .iter()
            .map(|(_, v)| v.map(|v| v.to_string()).unwrap_or_default()),
    );
    record.push(result.policy.policy_term.clone());
    wtr.write_record(&record)?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(result: &ExtractionResult) -> String {
    let mut output = String::new();
    let metadata = &result.metadata;

    match metadata.insurance_type {
        Some(t) => output.push_str(&format!("Insurance type: {}\n", t)),
        None => output.push_str("Insurance type: (not detected)\n"),
    }
    if let Some(insurer) = &metadata.insurer_name {
        output.push_str(&format!("Insurer: {}\n", insurer));
    }
    if let Some(insured) = &metadata.insured_name {
        output.push_str(&format!("Insured: {}\n", insured));
    }
    output.push('\n');

    output.push_str("Financials:\n");
    if result.financials.is_empty() {
        output.push_str("  (none)\n");
    }
    for (name, value) in result.financials.entries() {
        if let Some(value) = value {
            output.push_str(&format!("  {}: {}\n", name, value));
        }
    }
    output.push('\n');

    output.push_str(&format!("Policy term: {}\n", result.policy.policy_term));
    output
}

/// Print extraction warnings to stderr.
pub fn print_warnings(report: &ParseReport) {
    if report.warnings.is_empty() {
        return;
    }
    eprintln!("{}", style("Extraction warnings:").yellow());
    for warning in &report.warnings {
        eprintln!("  - {}", warning);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polext_core::InsuranceType;

    fn sample() -> ExtractionResult {
        let mut result = ExtractionResult::new();
        result.metadata.insurance_type = Some(InsuranceType::Motor);
        result.metadata.insured_name = Some("Ravi Kumar".to_string());
        result.financials.total_premium = Some(5900);
        result.financials.tax = Some(900);
        result
    }

    #[test]
    fn test_format_csv() {
        let csv = format_result(&sample(), OutputFormat::Csv, true).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(
            lines[0],
            "insurance_type,insurer_name,insured_name,vehicle_idv,base_premium,total_premium,deductible,tax,sum_insured,policy_term"
        );
        assert_eq!(lines[1], "MOTOR,,Ravi Kumar,,,5900,,900,,1 year");
    }

    #[test]
    fn test_format_text() {
        let text = format_result(&sample(), OutputFormat::Text, true).unwrap();

        assert!(text.starts_with("Insurance type: MOTOR\nInsured: Ravi Kumar\n"));
        assert!(text.contains("  total_premium: 5900\n  tax: 900\n"));
        assert!(text.ends_with("Policy term: 1 year\n"));
    }

    #[test]
    fn test_format_compact_json() {
        let json = format_result(&ExtractionResult::new(), OutputFormat::Json, false).unwrap();
        assert_eq!(json, r#"{"metadata":{},"financials":{},"policy":{"policy_term":"1 year"}}"#);
    }
}
