//! Common regex patterns for insurance policy text.

use lazy_static::lazy_static;
use regex::Regex;

/// Money number: 3+ leading digits, optional 3-digit comma groups, optional
/// decimal part.
pub const MONEY_NUMBER: &str = r"\d{3,}(?:,\d{3})*(?:\.\d+)?";

lazy_static! {
    // Money token bounded by word boundaries
    pub static ref MONEY_PATTERN: Regex = Regex::new(
        &format!(r"\b({MONEY_NUMBER})\b")
    ).unwrap();

    // Line cleaning
    pub static ref DECORATIVE_RUN: Regex = Regex::new(r"[|=_]{2,}").unwrap();

    pub static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();

    pub static ref GST_WITH_RATE: Regex = Regex::new(r"GST\s*@\s*\d+%").unwrap();

    // Motor label canonicalization (label group, then value group)
    pub static ref VEHICLE_IDV_LABEL: Regex = Regex::new(
        &format!(r"(VEHICLE\s+IDV).*?({MONEY_NUMBER})")
    ).unwrap();

    pub static ref BASIC_PREMIUM_LABEL: Regex = Regex::new(
        &format!(r"(BASIC\s+PREMIUM).*?({MONEY_NUMBER})")
    ).unwrap();

    pub static ref GST_LABEL: Regex = Regex::new(
        &format!(r"\b(GST)\b.*?({MONEY_NUMBER})")
    ).unwrap();

    pub static ref TOTAL_PREMIUM_LABEL: Regex = Regex::new(
        &format!(r"(NET\s+PAYABLE|TOTAL\s+PREMIUM).*?({MONEY_NUMBER})")
    ).unwrap();

    pub static ref COMPULSORY_EXCESS_LABEL: Regex = Regex::new(
        r"(COMPULSORY\s+EXCESS).*?(\d{2,})"
    ).unwrap();
}
