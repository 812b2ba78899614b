//! Misura Core - Fundamental types
//!
//! This crate provides the core types used throughout Misura:
//! - `Category`: measurement domains (volume, length, mass)
//! - `System`: measurement systems (IS, BIS, USC)
//! - `MisuraError`: the error taxonomy of the conversion engine

mod category;
mod error;
mod system;

pub use category::Category;
pub use error::{ConversionError, LookupError, MisuraError, ValidationError};
pub use system::System;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Category, ConversionError, LookupError, MisuraError, System, ValidationError};
}
