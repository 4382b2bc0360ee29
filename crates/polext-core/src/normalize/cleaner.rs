//! Generic line cleaning and motor label canonicalization.

use regex::Regex;

use crate::policy::rules::patterns::{
    BASIC_PREMIUM_LABEL, COMPULSORY_EXCESS_LABEL, DECORATIVE_RUN, GST_LABEL, GST_WITH_RATE,
    TOTAL_PREMIUM_LABEL, VEHICLE_IDV_LABEL, WHITESPACE_RUN,
};

/// Currency markers removed from every line, in removal order.
const CURRENCY_MARKERS: [&str; 3] = ["\u{20b9}", "RS.", "RS"];

/// Upper-case a line, drop currency markers and decoration, collapse
/// whitespace and reduce `GST @ 18%` to `GST`.
pub fn clean_line(line: &str) -> String {
    let mut line = line.to_uppercase();
    for marker in CURRENCY_MARKERS {
        line = line.replace(marker, "");
    }

    let line = DECORATIVE_RUN.replace_all(&line, " ");
    let line = WHITESPACE_RUN.replace_all(&line, " ");
    let line = GST_WITH_RATE.replace_all(&line, "GST");

    line.trim().to_string()
}

/// One canonical motor label and the pattern that finds it.
///
/// The pattern's second capture group is the value.
#[derive(Debug, Clone, Copy)]
pub struct LabelPattern {
    pub label: &'static str,
    pub pattern: &'static Regex,
}

/// Motor label table, in priority order.
pub fn motor_labels() -> [LabelPattern; 5] {
    [
        LabelPattern { label: "VEHICLE IDV", pattern: &VEHICLE_IDV_LABEL },
        LabelPattern { label: "BASIC PREMIUM", pattern: &BASIC_PREMIUM_LABEL },
        LabelPattern { label: "GST", pattern: &GST_LABEL },
        LabelPattern { label: "TOTAL PREMIUM", pattern: &TOTAL_PREMIUM_LABEL },
        LabelPattern { label: "COMPULSORY EXCESS", pattern: &COMPULSORY_EXCESS_LABEL },
    ]
}

/// Rewrite a cleaned motor line to `LABEL VALUE` if a label matches.
///
/// Only the first matching label applies and the whole line is replaced.
pub fn canonicalize_motor_line(line: &str) -> String {
    for entry in motor_labels() {
        if let Some(caps) = entry.pattern.captures(line) {
            return format!("{} {}", entry.label, &caps[2]);
        }
    }
    line.to_string()
}
