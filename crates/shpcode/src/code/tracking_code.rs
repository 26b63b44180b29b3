//! Validated tracking code value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{is_valid_code, Category, CODE_PREFIX, SERIAL_DIGITS};
use crate::error::CodeError;

/// A well-formed tracking code. Construction goes through the generator or
/// [`TrackingCode::parse`], so the inner string always matches the format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TrackingCode(String);

impl TrackingCode {
    /// Validates `input` as-is. Callers normalize operator input first.
    pub fn parse(input: &str) -> Result<Self, CodeError> {
        if is_valid_code(input) {
            Ok(Self(input.to_string()))
        } else {
            Err(CodeError::Malformed {
                input: input.to_string(),
            })
        }
    }

    pub(crate) fn from_parts(serial: u64, category: Category) -> Self {
        Self(format!(
            "{}{:0width$}{}",
            CODE_PREFIX,
            serial,
            category.as_char(),
            width = SERIAL_DIGITS
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn category(&self) -> Category {
        // Last byte is one of F/T/M by construction.
        match self.0.as_bytes()[self.0.len() - 1] {
            b'T' => Category::T,
            b'M' => Category::M,
            _ => Category::F,
        }
    }

    pub fn serial(&self) -> u64 {
        self.0.as_bytes()[CODE_PREFIX.len()..CODE_PREFIX.len() + SERIAL_DIGITS]
            .iter()
            .fold(0u64, |acc, b| acc * 10 + u64::from(b - b'0'))
    }
}

impl fmt::Display for TrackingCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TrackingCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for TrackingCode {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TrackingCode {
    type Error = CodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if is_valid_code(&value) {
            Ok(Self(value))
        } else {
            Err(CodeError::Malformed { input: value })
        }
    }
}

impl From<TrackingCode> for String {
    fn from(code: TrackingCode) -> Self {
        code.0
    }
}
