//! Extraction result models for insurance policy documents.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Policy term reported for every document.
pub const DEFAULT_POLICY_TERM: &str = "1 year";

/// Kind of insurance a policy document describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InsuranceType {
    /// Motor / two-wheeler policy.
    Motor,
    /// Health policy.
    Health,
    /// No classification keyword was found.
    #[default]
    Unknown,
}

impl InsuranceType {
    /// Upper-case label used in documents and output.
    pub fn as_str(&self) -> &'static str {
        match self {
            InsuranceType::Motor => "MOTOR",
            InsuranceType::Health => "HEALTH",
            InsuranceType::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for InsuranceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured fields extracted from one policy document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Document-level metadata.
    pub metadata: PolicyMetadata,

    /// Monetary amounts in whole currency units.
    pub financials: Financials,

    /// Policy terms.
    pub policy: PolicyTerms,
}

/// Insurer and insured details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance_type: Option<InsuranceType>,

    /// Insurer name, title-cased.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurer_name: Option<String>,

    /// Insured person's name, title-cased.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insured_name: Option<String>,
}

/// Monetary fields. Every key is present only when discovered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Financials {
    /// Insured Declared Value of the vehicle (motor).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_idv: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_premium: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_premium: Option<u64>,

    /// Compulsory excess (motor).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deductible: Option<u64>,

    /// Sum of all GST components.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax: Option<u64>,

    /// Largest quoted sum insured (health).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_insured: Option<u64>,
}

impl Financials {
    /// Field names in output order.
    pub const FIELDS: [&'static str; 6] = [
        "vehicle_idv",
        "base_premium",
        "total_premium",
        "deductible",
        "tax",
        "sum_insured",
    ];

    /// All fields paired with their names, in output order.
    pub fn entries(&self) -> [(&'static str, Option<u64>); 6] {
        [
            ("vehicle_idv", self.vehicle_idv),
            ("base_premium", self.base_premium),
            ("total_premium", self.total_premium),
            ("deductible", self.deductible),
            ("tax", self.tax),
            ("sum_insured", self.sum_insured),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.entries().iter().all(|(_, v)| v.is_none())
    }
}

/// Policy terms. Not derived from the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyTerms {
    pub policy_term: String,
}

impl Default for PolicyTerms {
    fn default() -> Self {
        Self {
            policy_term: DEFAULT_POLICY_TERM.to_string(),
        }
    }
}

impl ExtractionResult {
    /// Create an empty result carrying only the constant policy term.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize with 2-space indentation.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
