use crate::string_util::join_digit_groups;

use super::helper_constants::{
    DEFAULT_EXTN_PREFIX, INTERNATIONAL_GROUP_LENGTH, MAX_UNGROUPED_NATIONAL_LENGTH, PLUS_SIGN,
};

/// Renders a US/Canada number as `(AAA) EEE-SSSS`.
pub(super) fn format_us_number(
    area_code: &str,
    exchange_code: &str,
    subscriber_number: &str,
) -> String {
    fast_cat::concat_str!("(", area_code, ") ", exchange_code, "-", subscriber_number)
}

/// Renders an international number as `+CC NATIONAL`. National numbers
/// longer than ten digits are split into space-separated groups of four,
/// left to right, with a possibly shorter last group.
pub(super) fn format_international_number(
    country_code_digits: &str,
    national_number: &str,
) -> String {
    if national_number.len() <= MAX_UNGROUPED_NATIONAL_LENGTH {
        return fast_cat::concat_str!(PLUS_SIGN, country_code_digits, " ", national_number);
    }

    let grouped = join_digit_groups(national_number, INTERNATIONAL_GROUP_LENGTH);
    fast_cat::concat_str!(PLUS_SIGN, country_code_digits, " ", &grouped)
}

/// Appends the extension component after an already formatted main number.
pub(super) fn append_extension(formatted_number: &str, extension: &str) -> String {
    fast_cat::concat_str!(formatted_number, DEFAULT_EXTN_PREFIX, extension)
}
