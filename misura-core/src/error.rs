//! Error taxonomy for the conversion engine
//!
//! Errors are values raised synchronously to the immediate caller. The
//! computation is deterministic, so nothing is retried, and nothing is
//! swallowed. Presentation is a caller concern; the engine does not log.

use serde::Serialize;
use thiserror::Error;

use crate::{Category, System};

/// The request itself is malformed
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
pub enum ValidationError {
    /// One of the five conversion inputs is absent or blank
    #[error("missing parameter: {name}")]
    MissingParameter { name: &'static str },

    /// A system code matched no known system
    #[error("unresolved system code: {code:?}")]
    UnresolvedSystem { code: String },

    /// A unit code matched no unit registered under the given system
    #[error("unresolved unit code {code:?} in system {system}")]
    UnresolvedUnit { code: String, system: System },

    /// Origin and destination units measure different categories
    #[error("category mismatch: cannot convert {origin} to {destination}")]
    CategoryMismatch {
        origin: Category,
        destination: Category,
    },
}

/// Registry lookups that only fail on a misconfigured registry
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
pub enum LookupError {
    /// No base unit is registered for a (category, system) pair
    #[error("no base unit registered for {category}/{system}")]
    BasicUnitNotFound { category: Category, system: System },
}

/// The registry holds no arithmetic path between the requested systems
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
pub enum ConversionError {
    /// The factor table defines no bridge between the two systems
    #[error("no cross-system factor from {origin} to {destination} for {category}")]
    MissingCrossSystemFactor {
        category: Category,
        origin: System,
        destination: System,
    },
}

/// Any failure the conversion engine can produce
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
pub enum MisuraError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Conversion(#[from] ConversionError),
}
