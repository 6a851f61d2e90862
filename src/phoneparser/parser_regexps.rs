use regex::Regex;

/// Helper struct holding the parser's precompiled regular expressions.
///
/// Every pattern is fixed, so they are all compiled once when the parser is
/// created and shared for the parser's lifetime.
pub(super) struct ParserRegExps {
    /// Matches every character the cleaning step throws away: anything that
    /// is not an ASCII digit, `+`, or the extension letter in either case.
    pub cleaning_pattern: Regex,

    /// Matches every non-digit character; used to reduce a cleaned substring
    /// to its digits.
    pub non_digit_pattern: Regex,

    /// Full match for a well-formed extension: 1 to 5 ASCII digits.
    pub extension_pattern: Regex,

    /// Anchored match for digit strings whose country code is a single
    /// digit long.
    pub single_digit_country_code_pattern: Regex,
}

impl ParserRegExps {
    pub fn new() -> Self {
        // These are constant patterns, so compilation cannot fail at runtime.
        Self {
            cleaning_pattern: Regex::new("[^0-9+xX]").unwrap(),
            non_digit_pattern: Regex::new("[^0-9]").unwrap(),
            extension_pattern: Regex::new("[0-9]{1,5}").unwrap(),
            single_digit_country_code_pattern: Regex::new("[1789]").unwrap(),
        }
    }
}
