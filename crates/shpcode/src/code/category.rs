//! Category suffix attached to every tracking code.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CodeError;

/// One of the three opaque category tags. The letters carry no business
/// meaning inside this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    F,
    T,
    M,
}

impl Category {
    /// All categories, in the order the generation form lists them.
    pub const ALL: [Category; 3] = [Category::F, Category::T, Category::M];

    pub fn as_char(self) -> char {
        match self {
            Category::F => 'F',
            Category::T => 'T',
            Category::M => 'M',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'F' => Some(Category::F),
            'T' => Some(Category::T),
            'M' => Some(Category::M),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Category {
    type Err = CodeError;

    /// Accepts a single letter, case-insensitively, surrounded by optional
    /// whitespace. Operator input is forgiving; codes themselves are not.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Category::from_char(c.to_ascii_uppercase()),
            _ => None,
        }
        .ok_or_else(|| CodeError::UnknownCategory(trimmed.to_string()))
    }
}
