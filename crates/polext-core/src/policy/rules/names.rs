//! Insurer and insured name rules.

/// Marker for the insurer's legal name line.
pub const INSURER_MARKER: &str = "INSURANCE COMPANY LIMITED";

/// A line holding only this label is followed by the insured's name.
pub const NAME_LABEL: &str = "NAME";

/// Inline insured-name label.
pub const NAME_PREFIX: &str = "NAME :";

/// Title-case a string.
///
/// Every maximal run of cased letters gets an upper-case first letter and
/// lower-case remainder. Any other character ends the run.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;

    for c in s.chars() {
        let cased = c.is_uppercase() || c.is_lowercase();
        if cased && in_word {
            out.extend(c.to_lowercase());
        } else if cased {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        in_word = cased;
    }

    out
}

/// Title-cased insurer name if `line` names the insurer.
pub fn insurer_name(line: &str) -> Option<String> {
    line.contains(INSURER_MARKER).then(|| title_case(line))
}

/// Insured name from an inline `NAME :<name>` line.
pub fn inline_insured_name(line: &str) -> Option<String> {
    line.strip_prefix(NAME_PREFIX)
        .map(|rest| title_case(rest.trim()))
}

/// Whether `line` is the bare `NAME` label.
pub fn is_name_label(line: &str) -> bool {
    line == NAME_LABEL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("JANE SMITH"), "Jane Smith");
        assert_eq!(title_case("john doe"), "John Doe");
        assert_eq!(title_case("O'NEIL"), "O'Neil");
        assert_eq!(title_case("2ND FLOOR"), "2Nd Floor");
        assert_eq!(title_case("ICICI-LOMBARD"), "Icici-Lombard");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_insurer_name() {
        assert_eq!(
            insurer_name("BAJAJ ALLIANZ GENERAL INSURANCE COMPANY LIMITED"),
            Some("Bajaj Allianz General Insurance Company Limited".to_string())
        );
        assert_eq!(insurer_name("INSURANCE COMPANY"), None);
    }

    #[test]
    fn test_inline_insured_name() {
        assert_eq!(inline_insured_name("NAME :John Doe"), Some("John Doe".to_string()));
        assert_eq!(inline_insured_name("NAME : RAVI KUMAR "), Some("Ravi Kumar".to_string()));
        assert_eq!(inline_insured_name("NAME: RAVI"), None);
        assert_eq!(inline_insured_name("NOMINEE NAME :RAVI"), None);

        // Only the leading prefix is removed
        assert_eq!(inline_insured_name("NAME :A NAME :B"), Some("A Name :B".to_string()));
    }
}
