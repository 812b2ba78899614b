//! Unit representation with conversion coefficients

use std::fmt;

use serde::{Deserialize, Serialize};

use misura_core::{Category, System};

/// A concrete unit of measure belonging to one category and one system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitType {
    /// The unit code (e.g., "g", "kg", "oz"), unique within its system
    pub code: String,
    /// The unit name (e.g., "gram", "kilogram", "ounce")
    pub label: String,
    /// The measurement domain this unit belongs to
    pub category: Category,
    /// The measurement system this unit belongs to
    pub system: System,
    /// How this unit relates to the base unit of its (category, system)
    /// pair: a value rescales between two units of one system as
    /// `value * (origin.value_from_base / destination.value_from_base)`.
    /// The base unit itself carries 1.0. Always > 0.
    pub value_from_base: f64,
    /// True for the single pivot unit of each (category, system) pair
    pub base_unit: bool,
}

impl UnitType {
    /// Create a non-base unit
    pub fn new(
        code: &str,
        label: &str,
        category: Category,
        system: System,
        value_from_base: f64,
    ) -> Self {
        UnitType {
            code: code.to_string(),
            label: label.to_string(),
            category,
            system,
            value_from_base,
            base_unit: false,
        }
    }

    /// Create the base (pivot) unit of a (category, system) pair
    pub fn base(code: &str, label: &str, category: Category, system: System) -> Self {
        UnitType {
            code: code.to_string(),
            label: label.to_string(),
            category,
            system,
            value_from_base: 1.0,
            base_unit: true,
        }
    }

    /// Whether this unit is the pivot of its (category, system) pair
    pub fn is_base_unit(&self) -> bool {
        self.base_unit
    }

    /// Whether another unit measures the same category (and so can be
    /// converted into)
    pub fn is_compatible(&self, other: &UnitType) -> bool {
        self.category == other.category
    }
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}
