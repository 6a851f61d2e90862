// Bounds applied to the cleaned string as a whole, before digit extraction.
// Note `+` and `x` still count toward this length at that stage.
pub const MIN_CLEANED_LENGTH: usize = 7;
pub const MAX_CLEANED_LENGTH: usize = 15;

// The ITU says 15 is the maximum total length; we keep the minimum at 8 so a
// one-digit country code still leaves a 7-digit national number.
pub const MIN_INTERNATIONAL_DIGITS: usize = 8;
pub const MAX_INTERNATIONAL_DIGITS: usize = 15;

/// The minimum length of a national number once the country code is removed.
pub const MIN_NATIONAL_NUMBER_LENGTH: usize = 7;

// National numbers longer than this are rendered in space-separated groups.
pub const MAX_UNGROUPED_NATIONAL_LENGTH: usize = 10;
pub const INTERNATIONAL_GROUP_LENGTH: usize = 4;

pub const US_NUMBER_LENGTH: usize = 10;
pub const AREA_CODE_LENGTH: usize = 3;
pub const EXCHANGE_CODE_LENGTH: usize = 3;

pub const MIN_MAIN_NUMBER_DIGITS: usize = 7;
pub const MAX_MAIN_NUMBER_DIGITS: usize = 15;

pub const PLUS_SIGN: &'static str = "+";

// The letter 'x' is the placeholder for an extension; cleaning lowercases the
// input so only the lowercase form survives to routing.
pub const EXTENSION_SEPARATOR: char = 'x';

// Default extension prefix to use when formatting. This will be put in front
// of any extension component of the number, after the main number is
// formatted.
pub const DEFAULT_EXTN_PREFIX: &'static str = " ext. ";

pub const NANPA_COUNTRY_CODE: &'static str = "+1";
