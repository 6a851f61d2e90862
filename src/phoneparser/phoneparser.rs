use std::{borrow::Cow, fmt};

use log::trace;

use super::{
    errors::{ParseError, Result},
    helper_constants::{
        AREA_CODE_LENGTH, EXCHANGE_CODE_LENGTH, EXTENSION_SEPARATOR, MAX_CLEANED_LENGTH,
        MAX_INTERNATIONAL_DIGITS, MAX_MAIN_NUMBER_DIGITS, MIN_CLEANED_LENGTH,
        MIN_INTERNATIONAL_DIGITS, MIN_MAIN_NUMBER_DIGITS, MIN_NATIONAL_NUMBER_LENGTH,
        NANPA_COUNTRY_CODE, PLUS_SIGN, US_NUMBER_LENGTH,
    },
    helper_functions::{append_extension, format_international_number, format_us_number},
    parser_regexps::ParserRegExps,
};
use crate::regex_util::{RegexConsume, RegexFullMatch};

/// A phone number accepted by the parser, normalized into its components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPhoneNumber {
    country_code: String,
    national_number: String,
    extension: Option<String>,
    formatted: String,
}

impl ParsedPhoneNumber {
    /// The dialing prefix including the leading `+`, e.g. `"+1"` or `"+44"`.
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// The number without country code or extension, digits only.
    pub fn national_number(&self) -> &str {
        &self.national_number
    }

    /// 1-5 digits, present only when the input spelled out an extension.
    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    /// The canonical human-readable rendering.
    pub fn formatted(&self) -> &str {
        &self.formatted
    }
}

impl fmt::Display for ParsedPhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted)
    }
}

pub struct PhoneParser {
    /// Helper struct holding the parser's precompiled regular expressions.
    reg_exps: ParserRegExps,
}

impl PhoneParser {
    pub(super) fn new() -> Self {
        Self {
            reg_exps: ParserRegExps::new(),
        }
    }

    /// Reduces raw input to ASCII digits, `+` and the extension letter,
    /// lowercased so `X` and `x` route identically.
    fn clean(&self, raw_input: &str) -> String {
        let mut cleaned = match self.reg_exps.cleaning_pattern.replace_all(raw_input, "") {
            Cow::Borrowed(_) => raw_input.to_owned(),
            Cow::Owned(changed) => changed,
        };
        cleaned.make_ascii_lowercase();
        cleaned
    }

    fn extract_digits(&self, s: &str) -> String {
        match self.reg_exps.non_digit_pattern.replace_all(s, "") {
            Cow::Borrowed(_) => s.to_owned(),
            Cow::Owned(digits) => digits,
        }
    }

    /// The sole entry point: cleans the input, bounds-checks it, and routes
    /// it to the matching shape-specific parser.
    ///
    /// Parsing is pure; the same input always yields the same result, and
    /// failures are returned as values rather than panics.
    pub fn parse(&self, input: &str) -> Result<ParsedPhoneNumber> {
        let cleaned = self.clean(input);
        // The length bounds apply to the cleaned string as a whole; `+` and
        // `x` still count toward it here. Digit-only bounds come later, per
        // shape.
        if cleaned.len() < MIN_CLEANED_LENGTH {
            return Err(ParseError::TooShort);
        }
        if cleaned.len() > MAX_CLEANED_LENGTH {
            return Err(ParseError::TooLong);
        }

        trace!("routing cleaned input: {}", cleaned);
        if cleaned.starts_with(PLUS_SIGN) {
            return self.parse_international_number(&cleaned);
        }
        if cleaned.contains(EXTENSION_SEPARATOR) {
            return self.parse_number_with_extension(&cleaned);
        }
        if cleaned.len() == US_NUMBER_LENGTH {
            return self.parse_us_number(&cleaned);
        }
        if cleaned.len() == US_NUMBER_LENGTH + 1 {
            if let Some(national_part) = cleaned.strip_prefix('1') {
                return self.parse_us_number(national_part);
            }
        }
        Err(ParseError::UnrecognizedFormat)
    }

    /// Returns true if `input` parses as a supported phone number.
    pub fn is_valid(&self, input: &str) -> bool {
        self.parse(input).is_ok()
    }

    /// Runs the full parse, discarding the error detail.
    pub fn extract(&self, input: &str) -> Option<ParsedPhoneNumber> {
        self.parse(input).ok()
    }

    fn parse_international_number(&self, cleaned: &str) -> Result<ParsedPhoneNumber> {
        let digits = self.extract_digits(cleaned);
        if digits.len() < MIN_INTERNATIONAL_DIGITS || digits.len() > MAX_INTERNATIONAL_DIGITS {
            return Err(ParseError::InvalidInternationalLength);
        }

        // A deliberately simplified heuristic, not a numbering-plan lookup:
        // a leading 1, 7, 8 or 9 is taken as a one-digit country code,
        // everything else as two digits.
        let country_code_length = if self
            .reg_exps
            .single_digit_country_code_pattern
            .matches_start(&digits)
        {
            1
        } else {
            2
        };
        let (country_code_digits, national_number) = digits.split_at(country_code_length);
        if national_number.len() < MIN_NATIONAL_NUMBER_LENGTH {
            return Err(ParseError::NationalNumberTooShort);
        }

        let formatted = format_international_number(country_code_digits, national_number);
        Ok(ParsedPhoneNumber {
            country_code: fast_cat::concat_str!(PLUS_SIGN, country_code_digits),
            national_number: national_number.to_owned(),
            extension: None,
            formatted,
        })
    }

    fn parse_number_with_extension(&self, cleaned: &str) -> Result<ParsedPhoneNumber> {
        // Split on the first extension letter only; anything after a second
        // one is dropped with the other non-digits below.
        let Some((number_part, extension_part)) = cleaned.split_once(EXTENSION_SEPARATOR) else {
            return Err(ParseError::InvalidExtensionFormat);
        };
        if number_part.is_empty() || extension_part.is_empty() {
            return Err(ParseError::InvalidExtensionFormat);
        }

        let main_digits = self.extract_digits(number_part);
        let extension = self.extract_digits(extension_part);
        if main_digits.len() < MIN_MAIN_NUMBER_DIGITS || main_digits.len() > MAX_MAIN_NUMBER_DIGITS
        {
            return Err(ParseError::InvalidMainNumberLength);
        }
        if !self.reg_exps.extension_pattern.full_match(&extension) {
            return Err(ParseError::InvalidExtensionLength);
        }

        // Re-enter the full parse on the pre-`x` substring so the two paths
        // can never drift in accepted formats. A malformed main number
        // propagates its own error, not an extension-specific one.
        let mut main_number = self.parse(number_part)?;
        main_number.formatted = append_extension(&main_number.formatted, &extension);
        main_number.extension = Some(extension);
        Ok(main_number)
    }

    fn parse_us_number(&self, cleaned: &str) -> Result<ParsedPhoneNumber> {
        let digits = self.extract_digits(cleaned);
        if digits.len() != US_NUMBER_LENGTH {
            return Err(ParseError::InvalidUsNumberLength);
        }

        let (area_code, rest) = digits.split_at(AREA_CODE_LENGTH);
        let (exchange_code, subscriber_number) = rest.split_at(EXCHANGE_CODE_LENGTH);
        // NANPA forbids 0 and 1 in the leading position of both codes.
        if area_code.starts_with(['0', '1']) {
            return Err(ParseError::InvalidAreaCode);
        }
        if exchange_code.starts_with(['0', '1']) {
            return Err(ParseError::InvalidExchangeCode);
        }

        let formatted = format_us_number(area_code, exchange_code, subscriber_number);
        Ok(ParsedPhoneNumber {
            country_code: NANPA_COUNTRY_CODE.to_owned(),
            national_number: digits,
            extension: None,
            formatted,
        })
    }
}
