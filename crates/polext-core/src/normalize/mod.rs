//! Line normalization: raw policy text to a cleaned line sequence.

mod classify;
mod cleaner;

pub use classify::classify_first_match;
pub use cleaner::{canonicalize_motor_line, clean_line, motor_labels, LabelPattern};

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use tracing::{debug, info};

use crate::error::Result;
use crate::models::policy::InsuranceType;
use crate::text::{read_text, split_lines, write_lines};

/// Cleaned line sequence for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedDocument {
    /// Classification used to decide motor canonicalization.
    pub insurance_type: InsuranceType,
    /// One cleaned line per raw line; blank lines stay empty.
    pub lines: Vec<String>,
}

impl NormalizedDocument {
    /// Lines joined by `\n`.
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Normalize raw policy text.
pub fn normalize(raw_text: &str) -> NormalizedDocument {
    let raw_lines = split_lines(raw_text);
    let insurance_type = classify_first_match(&raw_lines);

    info!(
        "Normalizing {} lines, detected type {}",
        raw_lines.len(),
        insurance_type
    );

    let lines = raw_lines
        .iter()
        .map(|raw| normalize_line(raw, insurance_type))
        .collect();

    NormalizedDocument { insurance_type, lines }
}

/// Normalize one raw line under a known classification.
pub fn normalize_line(raw: &str, insurance_type: InsuranceType) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }

    let cleaned = clean_line(raw);
    if insurance_type != InsuranceType::Motor {
        return cleaned;
    }

    let canonical = canonicalize_motor_line(&cleaned);
    if canonical != cleaned {
        debug!("Canonicalized {:?} -> {:?}", cleaned, canonical);
    }
    canonical
}

/// Normalize the document at `raw_path` and write the cleaned lines to
/// `clean_path`.
pub fn preprocess(raw_path: &Path, clean_path: &Path) -> Result<NormalizedDocument> {
    let raw_text = read_text(raw_path)?;
    let document = normalize(&raw_text);

    let mut sink = BufWriter::new(File::create(clean_path)?);
    write_lines(&mut sink, &document.lines)?;

    info!(
        "Wrote {} cleaned lines to {}",
        document.lines.len(),
        clean_path.display()
    );

    Ok(document)
}
