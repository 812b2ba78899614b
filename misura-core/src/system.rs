//! Measurement systems
//!
//! Each system (international, imperial, US customary) carries its own
//! unit set. Conversions across systems pivot through base units and a
//! cross-system factor table.

use std::fmt;
use serde::{Deserialize, Serialize};

/// A measurement system containing its own set of units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum System {
    #[serde(rename = "IS")]
    International,
    #[serde(rename = "BIS")]
    BritishImperial,
    #[serde(rename = "USC")]
    UsCustomary,
}

impl System {
    /// All systems, in declaration order
    pub const ALL: [System; 3] = [
        System::International,
        System::BritishImperial,
        System::UsCustomary,
    ];

    /// Resolve a system from its code. Unknown codes yield `None`.
    pub fn from_code(code: &str) -> Option<System> {
        System::ALL.iter().copied().find(|s| s.code() == code)
    }

    /// Stable identifier used for lookups and wire formats
    pub fn code(&self) -> &'static str {
        match self {
            System::International => "IS",
            System::BritishImperial => "BIS",
            System::UsCustomary => "USC",
        }
    }

    /// Human-readable name
    pub fn label(&self) -> &'static str {
        match self {
            System::International => "International System",
            System::BritishImperial => "British Imperial System",
            System::UsCustomary => "United States Customary",
        }
    }
}

impl fmt::Display for System {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
