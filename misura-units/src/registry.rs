//! Unit registry and cross-system factor table
//!
//! The registry is an explicitly constructed value: build it once (the
//! builtin table or a custom one via `with_unit`/`with_factor`), then
//! share it by reference. Nothing mutates it afterwards, so it is safe
//! to read from any number of threads.

use std::collections::HashMap;

use misura_core::{Category, LookupError, System};

use crate::UnitType;

/// Registry of known units plus the factor table bridging base units
/// across systems
#[derive(Debug, Clone, Default)]
pub struct UnitRegistry {
    units: Vec<UnitType>,
    factors: HashMap<(Category, System, System), f64>,
}

impl UnitRegistry {
    /// Empty registry; populate with `with_unit` / `with_factor`
    pub fn new() -> Self {
        UnitRegistry {
            units: Vec::new(),
            factors: HashMap::new(),
        }
    }

    /// Registry preloaded with the builtin unit and factor tables
    pub fn builtin() -> Self {
        let mut registry = UnitRegistry::new();
        registry.register_length_units();
        registry.register_mass_units();
        registry.register_volume_units();
        registry.register_cross_factors();
        registry
    }

    /// Register a unit, preserving registration order
    pub fn with_unit(mut self, unit: UnitType) -> Self {
        self.register(unit);
        self
    }

    /// Register a cross-system factor: the multiplier carrying a value
    /// expressed in the origin system's base unit into the destination
    /// system's base-unit terms, for one category
    pub fn with_factor(
        mut self,
        category: Category,
        origin: System,
        destination: System,
        factor: f64,
    ) -> Self {
        self.factor(category, origin, destination, factor);
        self
    }

    /// All units, in registration order
    pub fn units(&self) -> &[UnitType] {
        &self.units
    }

    /// Resolve a unit by code within one system. Codes are only unique
    /// per system, so the pair is the lookup key.
    pub fn resolve(&self, code: &str, system: System) -> Option<&UnitType> {
        self.units
            .iter()
            .find(|u| u.code == code && u.system == system)
    }

    /// All units of one category, in registration order
    pub fn by_category(&self, category: Category) -> Vec<&UnitType> {
        self.units.iter().filter(|u| u.category == category).collect()
    }

    /// The pivot unit of a (category, system) pair. A missing base unit
    /// is a configuration defect, not a user input error.
    pub fn basic_unit(
        &self,
        category: Category,
        system: System,
    ) -> Result<&UnitType, LookupError> {
        self.units
            .iter()
            .find(|u| u.base_unit && u.category == category && u.system == system)
            .ok_or(LookupError::BasicUnitNotFound { category, system })
    }

    /// Multiplier carrying a value of `unit` into the base-unit terms of
    /// `target`. The unit's own system is neutral (1.0); an unbridged
    /// pair yields `None`. Meaningful only on base units, and the
    /// conversion engine only calls it on base units.
    pub fn cross_system_factor(&self, unit: &UnitType, target: System) -> Option<f64> {
        if unit.system == target {
            return Some(1.0);
        }
        self.factor_between(unit.category, unit.system, target)
    }

    /// Raw factor table probe, independent of any unit object
    pub fn factor_between(
        &self,
        category: Category,
        origin: System,
        destination: System,
    ) -> Option<f64> {
        self.factors.get(&(category, origin, destination)).copied()
    }

    /// Iterate the factor table entries (unordered)
    pub fn factors(&self) -> impl Iterator<Item = (Category, System, System, f64)> + '_ {
        self.factors.iter().map(|(&(c, o, d), &f)| (c, o, d, f))
    }

    fn register(&mut self, unit: UnitType) {
        self.units.push(unit);
    }

    fn factor(&mut self, category: Category, origin: System, destination: System, factor: f64) {
        self.factors.insert((category, origin, destination), factor);
    }

    fn register_length_units(&mut self) {
        // International System
        self.register(UnitType::new("mm", "millimeter", Category::Length, System::International, 0.001));
        self.register(UnitType::new("cm", "centimeter", Category::Length, System::International, 0.01));
        self.register(UnitType::base("m", "meter", Category::Length, System::International));
        self.register(UnitType::new("km", "kilometer", Category::Length, System::International, 1000.0));

        // British Imperial
        self.register(UnitType::new("in", "inch", Category::Length, System::BritishImperial, 0.027778));
        self.register(UnitType::new("ft", "foot", Category::Length, System::BritishImperial, 0.333333));
        self.register(UnitType::base("yd", "yard", Category::Length, System::BritishImperial));
        self.register(UnitType::new("mi", "mile", Category::Length, System::BritishImperial, 1760.0));
    }

    fn register_mass_units(&mut self) {
        // International System
        self.register(UnitType::base("g", "gram", Category::Mass, System::International));
        self.register(UnitType::new("kg", "kilogram", Category::Mass, System::International, 1000.0));
        self.register(UnitType::new("t", "tonne", Category::Mass, System::International, 1000000.0));

        // British Imperial
        self.register(UnitType::base("oz", "ounce", Category::Mass, System::BritishImperial));
        self.register(UnitType::new("lb", "pound", Category::Mass, System::BritishImperial, 16.0));
        self.register(UnitType::new("st", "stone", Category::Mass, System::BritishImperial, 224.0));
    }

    fn register_volume_units(&mut self) {
        // International System
        self.register(UnitType::new("ml", "milliliter", Category::Volume, System::International, 0.001));
        self.register(UnitType::base("l", "liter", Category::Volume, System::International));

        // British Imperial
        self.register(UnitType::new("fl oz", "fluid ounce", Category::Volume, System::BritishImperial, 0.025));
        self.register(UnitType::new("pt", "pint", Category::Volume, System::BritishImperial, 0.5));
        self.register(UnitType::base("qt", "quart", Category::Volume, System::BritishImperial));
        self.register(UnitType::new("gal", "gallon", Category::Volume, System::BritishImperial, 4.0));
        self.register(UnitType::new("bbl", "barrel", Category::Volume, System::BritishImperial, 168.0));
    }

    fn register_cross_factors(&mut self) {
        // Length: meter <-> yard bridge
        self.factor(Category::Length, System::International, System::BritishImperial, 1.09361);
        self.factor(Category::Length, System::International, System::UsCustomary, 1.09361);
        self.factor(Category::Length, System::BritishImperial, System::International, 0.9144);

        // Mass: gram <-> ounce bridge
        self.factor(Category::Mass, System::International, System::BritishImperial, 0.035274);
        self.factor(Category::Mass, System::International, System::UsCustomary, 0.035274);
        self.factor(Category::Mass, System::BritishImperial, System::International, 28.35);

        // Volume: liter <-> quart bridge
        self.factor(Category::Volume, System::International, System::BritishImperial, 0.879877);
        self.factor(Category::Volume, System::International, System::UsCustomary, 0.879877);
        self.factor(Category::Volume, System::BritishImperial, System::International, 1.13652);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        let reg = UnitRegistry::builtin();

        assert!(reg.resolve("g", System::International).is_some());
        assert!(reg.resolve("oz", System::BritishImperial).is_some());
        assert!(reg.resolve("fl oz", System::BritishImperial).is_some());

        // Unknown code
        assert!(reg.resolve("furlong", System::International).is_none());
        // Real code under the wrong system
        assert!(reg.resolve("kg", System::BritishImperial).is_none());
    }

    #[test]
    fn test_usc_registers_no_units() {
        let reg = UnitRegistry::builtin();

        for unit in reg.units() {
            assert_ne!(unit.system, System::UsCustomary);
        }
        assert!(reg.resolve("g", System::UsCustomary).is_none());
    }

    #[test]
    fn test_registration_order_preserved() {
        let reg = UnitRegistry::builtin();

        let codes: Vec<&str> = reg.units().iter().map(|u| u.code.as_str()).collect();
        assert_eq!(codes.len(), 21);
        // Length registers first, IS before BIS within each category
        assert_eq!(codes[..4].to_vec(), ["mm", "cm", "m", "km"]);
        assert_eq!(codes[codes.len() - 1], "bbl");
    }

    #[test]
    fn test_basic_units() {
        let reg = UnitRegistry::builtin();

        assert_eq!(reg.basic_unit(Category::Mass, System::International).unwrap().code, "g");
        assert_eq!(reg.basic_unit(Category::Mass, System::BritishImperial).unwrap().code, "oz");
        assert_eq!(reg.basic_unit(Category::Length, System::International).unwrap().code, "m");
        assert_eq!(reg.basic_unit(Category::Length, System::BritishImperial).unwrap().code, "yd");
        assert_eq!(reg.basic_unit(Category::Volume, System::International).unwrap().code, "l");
        assert_eq!(reg.basic_unit(Category::Volume, System::BritishImperial).unwrap().code, "qt");
    }

    #[test]
    fn test_basic_unit_not_found() {
        let reg = UnitRegistry::builtin();

        let err = reg.basic_unit(Category::Mass, System::UsCustomary).unwrap_err();
        assert_eq!(
            err,
            LookupError::BasicUnitNotFound {
                category: Category::Mass,
                system: System::UsCustomary,
            }
        );
    }

    #[test]
    fn test_one_base_unit_per_populated_pair() {
        let reg = UnitRegistry::builtin();

        for category in Category::ALL {
            for system in System::ALL {
                let units: Vec<_> = reg
                    .units()
                    .iter()
                    .filter(|u| u.category == category && u.system == system)
                    .collect();
                if units.is_empty() {
                    continue;
                }
                let bases = units.iter().filter(|u| u.base_unit).count();
                assert_eq!(bases, 1, "{}/{} should have exactly one base unit", category, system);
            }
        }
    }

    #[test]
    fn test_coefficients_positive() {
        let reg = UnitRegistry::builtin();

        for unit in reg.units() {
            assert!(unit.value_from_base > 0.0, "{} has nonpositive coefficient", unit.code);
        }
    }

    #[test]
    fn test_by_category() {
        let reg = UnitRegistry::builtin();

        let mass = reg.by_category(Category::Mass);
        assert_eq!(mass.len(), 6);
        for unit in mass {
            assert_eq!(unit.category, Category::Mass);
        }

        assert_eq!(reg.by_category(Category::Length).len(), 8);
        assert_eq!(reg.by_category(Category::Volume).len(), 7);
    }

    #[test]
    fn test_cross_system_factor_own_system_is_neutral() {
        let reg = UnitRegistry::builtin();
        let g = reg.basic_unit(Category::Mass, System::International).unwrap();

        assert_eq!(reg.cross_system_factor(g, System::International), Some(1.0));
    }

    #[test]
    fn test_cross_system_factor_known_pairs() {
        let reg = UnitRegistry::builtin();
        let g = reg.basic_unit(Category::Mass, System::International).unwrap();
        let oz = reg.basic_unit(Category::Mass, System::BritishImperial).unwrap();

        assert_eq!(reg.cross_system_factor(g, System::BritishImperial), Some(0.035274));
        assert_eq!(reg.cross_system_factor(g, System::UsCustomary), Some(0.035274));
        assert_eq!(reg.cross_system_factor(oz, System::International), Some(28.35));
    }

    #[test]
    fn test_cross_system_factor_unbridged_pair() {
        let reg = UnitRegistry::builtin();
        let oz = reg.basic_unit(Category::Mass, System::BritishImperial).unwrap();

        // Nothing bridges BIS to USC
        assert_eq!(reg.cross_system_factor(oz, System::UsCustomary), None);
    }

    #[test]
    fn test_factor_table_probe() {
        let reg = UnitRegistry::builtin();

        assert_eq!(
            reg.factor_between(Category::Volume, System::International, System::BritishImperial),
            Some(0.879877)
        );
        assert_eq!(
            reg.factor_between(Category::Volume, System::BritishImperial, System::UsCustomary),
            None
        );
        assert_eq!(reg.factors().count(), 9);
    }

    #[test]
    fn test_custom_registry_via_builders() {
        let reg = UnitRegistry::new()
            .with_unit(UnitType::base("u", "unit", Category::Mass, System::International))
            .with_unit(UnitType::new("du", "deca-unit", Category::Mass, System::International, 10.0))
            .with_factor(Category::Mass, System::International, System::BritishImperial, 2.0);

        assert_eq!(reg.units().len(), 2);
        assert!(reg.resolve("du", System::International).is_some());
        assert_eq!(
            reg.factor_between(Category::Mass, System::International, System::BritishImperial),
            Some(2.0)
        );
    }
}
