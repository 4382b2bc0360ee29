//! Core library for insurance policy text extraction.
//!
//! This crate provides:
//! - Line normalization of raw policy text (currency markers, decoration,
//!   motor label canonicalization)
//! - Money value extraction
//! - Rule-based field extraction for MOTOR and HEALTH policies
//! - Result and configuration models

pub mod error;
pub mod models;
pub mod normalize;
pub mod policy;
pub mod text;

pub use error::{PolextError, Result};
pub use models::config::PolextConfig;
pub use models::policy::{ExtractionResult, Financials, InsuranceType, PolicyMetadata, PolicyTerms};
pub use normalize::{normalize, preprocess, NormalizedDocument};
pub use policy::rules::extract_money;
pub use policy::{parse_file, write_result, ParseReport, PolicyParser, RuleBasedParser};
