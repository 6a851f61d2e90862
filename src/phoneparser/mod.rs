mod helper_constants;
mod helper_functions;
pub mod errors;
pub mod phoneparser;
mod parser_regexps;

use std::sync::LazyLock;

pub use errors::{ParseError, Result};
pub use phoneparser::{ParsedPhoneNumber, PhoneParser};

pub static PHONE_PARSER: LazyLock<PhoneParser> = LazyLock::new(|| {
    PhoneParser::new()
});
