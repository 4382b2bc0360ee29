//! Policy field extraction module.

mod parser;
pub mod rules;

pub use parser::{
    classify_last_match, parse_file, prepare_lines, write_result, ParseReport, RuleBasedParser,
};

/// Trait for policy parsers.
pub trait PolicyParser {
    /// Parse a cleaned line sequence given as text.
    fn parse(&self, text: &str) -> ParseReport;
}
