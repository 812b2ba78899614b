//! Measurement categories
//!
//! A category is the domain a unit measures. Units convert only within
//! their own category; mixing categories is a validation error.

use std::fmt;
use serde::{Deserialize, Serialize};

/// A measurement domain shared across systems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "VOLUME")]
    Volume,
    #[serde(rename = "LENGTH")]
    Length,
    #[serde(rename = "MASS")]
    Mass,
}

impl Category {
    /// All categories, in declaration order
    pub const ALL: [Category; 3] = [Category::Volume, Category::Length, Category::Mass];

    /// Resolve a category from its code. Unknown codes yield `None`.
    pub fn from_code(code: &str) -> Option<Category> {
        Category::ALL.iter().copied().find(|c| c.code() == code)
    }

    /// Stable identifier used for lookups and wire formats
    pub fn code(&self) -> &'static str {
        match self {
            Category::Volume => "VOLUME",
            Category::Length => "LENGTH",
            Category::Mass => "MASS",
        }
    }

    /// Human-readable name
    pub fn label(&self) -> &'static str {
        match self {
            Category::Volume => "Volume",
            Category::Length => "Length",
            Category::Mass => "Mass",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
