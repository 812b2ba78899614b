//! Misura Units - Unit Registry and Conversion
//!
//! Converts values between units of measure, within one measurement
//! system or across systems. Same-system conversions rescale through
//! the shared base unit; cross-system conversions pivot through the
//! base units of both systems and a cross-system factor table.
//!
//! Builtin units by category:
//! - Length: mm, cm, m, km (IS); in, ft, yd, mi (BIS)
//! - Mass: g, kg, t (IS); oz, lb, st (BIS)
//! - Volume: ml, l (IS); fl oz, pt, qt, gal, bbl (BIS)
//!
//! The US Customary system (USC) is recognized but ships with no units;
//! factors bridging into it exist in the table, units for it do not.
//!
//! The registry is a plain value: build it once with
//! [`UnitRegistry::builtin`] (or assemble a custom one), then pass it by
//! reference to [`convert`]. There is no global state.

mod convert;
mod registry;
mod unit;

pub use convert::{convert, convert_between, ConversionRequest};
pub use registry::UnitRegistry;
pub use unit::UnitType;
