mod phoneparser;
pub(crate) mod regex_util;
pub(crate) mod string_util;


pub use phoneparser::{ParseError, ParsedPhoneNumber, PhoneParser, Result, PHONE_PARSER};
