// Copyright (C) 2025 Kashin Vladislav
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use thiserror::Error;

/// Helper type for Result
pub type Result<T> = std::result::Result<T, ParseError>;

/// Every way a parse can fail. The display strings are user-facing and
/// consumed verbatim by callers, so they must stay stable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Phone number must be at least 7 digits long")]
    TooShort,
    #[error("Phone number cannot exceed 15 digits")]
    TooLong,
    /// The cleaned input matched none of the supported shapes.
    #[error("Unable to parse phone number format")]
    UnrecognizedFormat,
    #[error("International phone number must be 8-15 digits")]
    InvalidInternationalLength,
    #[error("National number too short after country code")]
    NationalNumberTooShort,
    /// Empty main-number or extension side around the `x` separator.
    #[error("Invalid extension format")]
    InvalidExtensionFormat,
    #[error("Phone number must be 7-15 digits")]
    InvalidMainNumberLength,
    #[error("Extension must be 1-5 digits")]
    InvalidExtensionLength,
    #[error("US/Canada phone number must be exactly 10 digits")]
    InvalidUsNumberLength,
    #[error("Invalid area code")]
    InvalidAreaCode,
    #[error("Invalid exchange code")]
    InvalidExchangeCode,
}
