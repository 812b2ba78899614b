//! The conversion engine
//!
//! A pure function over an immutable registry: resolve codes, validate,
//! then either rescale within one system or pivot through the base
//! units of both systems and the cross-system factor table. No state is
//! retained between calls and no I/O happens here.

use serde::{Deserialize, Serialize};

use misura_core::{ConversionError, MisuraError, System, ValidationError};

use crate::{UnitRegistry, UnitType};

/// Raw conversion inputs as a caller supplies them.
///
/// Every field is optional so that an absent parameter is reportable as
/// `MissingParameter` instead of surfacing as a caller-side panic; a
/// JSON caller's missing or null fields land here as `None`. Blank
/// codes count as absent too.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub value: Option<f64>,
    pub origin_unit: Option<String>,
    pub origin_system: Option<String>,
    pub destination_unit: Option<String>,
    pub destination_system: Option<String>,
}

impl ConversionRequest {
    /// Convenience constructor for a fully specified request
    pub fn new(
        value: f64,
        origin_unit: &str,
        origin_system: &str,
        destination_unit: &str,
        destination_system: &str,
    ) -> Self {
        ConversionRequest {
            value: Some(value),
            origin_unit: Some(origin_unit.to_string()),
            origin_system: Some(origin_system.to_string()),
            destination_unit: Some(destination_unit.to_string()),
            destination_system: Some(destination_system.to_string()),
        }
    }
}

/// Convert `request.value` from the origin unit/system into the
/// destination unit/system.
///
/// Validation order: parameter presence, system resolution, unit
/// resolution, category compatibility. Arithmetic starts only after
/// every code has resolved to a registry entry.
pub fn convert(registry: &UnitRegistry, request: &ConversionRequest) -> Result<f64, MisuraError> {
    let value = request
        .value
        .ok_or(ValidationError::MissingParameter { name: "value" })?;
    let origin_unit_code = required(&request.origin_unit, "origin_unit")?;
    let origin_system_code = required(&request.origin_system, "origin_system")?;
    let destination_unit_code = required(&request.destination_unit, "destination_unit")?;
    let destination_system_code = required(&request.destination_system, "destination_system")?;

    let origin_system = resolve_system(origin_system_code)?;
    let destination_system = resolve_system(destination_system_code)?;
    let origin = resolve_unit(registry, origin_unit_code, origin_system)?;
    let destination = resolve_unit(registry, destination_unit_code, destination_system)?;

    convert_between(registry, value, origin, destination)
}

/// The typed core of the engine, for callers that already hold resolved
/// units.
///
/// Same-system conversions are a single rescale through the shared base
/// unit. Cross-system conversions pivot: rescale to the origin base
/// unit, multiply by the cross-system factor, rescale from the
/// destination base unit.
pub fn convert_between(
    registry: &UnitRegistry,
    value: f64,
    origin: &UnitType,
    destination: &UnitType,
) -> Result<f64, MisuraError> {
    if !origin.is_compatible(destination) {
        return Err(ValidationError::CategoryMismatch {
            origin: origin.category,
            destination: destination.category,
        }
        .into());
    }

    if origin.system == destination.system {
        return Ok(value * (origin.value_from_base / destination.value_from_base));
    }

    // Rescale into the origin system's base-unit terms
    let origin_base = registry.basic_unit(origin.category, origin.system)?;
    let value_at_origin_base = value * (origin.value_from_base / origin_base.value_from_base);

    // Bridge into the destination system's base-unit terms
    let factor = registry
        .cross_system_factor(origin_base, destination.system)
        .ok_or(ConversionError::MissingCrossSystemFactor {
            category: origin.category,
            origin: origin.system,
            destination: destination.system,
        })?;
    let value_at_destination_base = value_at_origin_base * factor;

    // Rescale from the destination base unit down to the requested unit
    let destination_base = registry.basic_unit(destination.category, destination.system)?;
    Ok(value_at_destination_base * (destination_base.value_from_base / destination.value_from_base))
}

fn required<'a>(
    field: &'a Option<String>,
    name: &'static str,
) -> Result<&'a str, ValidationError> {
    match field.as_deref() {
        Some(code) if !code.trim().is_empty() => Ok(code),
        _ => Err(ValidationError::MissingParameter { name }),
    }
}

fn resolve_system(code: &str) -> Result<System, ValidationError> {
    System::from_code(code).ok_or_else(|| ValidationError::UnresolvedSystem {
        code: code.to_string(),
    })
}

fn resolve_unit<'a>(
    registry: &'a UnitRegistry,
    code: &str,
    system: System,
) -> Result<&'a UnitType, ValidationError> {
    registry
        .resolve(code, system)
        .ok_or_else(|| ValidationError::UnresolvedUnit {
            code: code.to_string(),
            system,
        })
}
