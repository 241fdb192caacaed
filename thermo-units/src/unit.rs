//! Temperature units and their conversion parameters
//!
//! Kelvin is the canonical unit: every cross-unit operation normalizes its
//! operands to Kelvin, computes there, and re-expresses on demand. Each
//! unit maps to Kelvin through the affine relation
//! `value_in_unit = factor * value_in_kelvin + offset`.

use crate::TemperatureError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A temperature measurement unit
///
/// Closed set: supporting a new unit means adding its conversion
/// parameters, name, and abbreviation here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    Celsius,
    Kelvin,
    Fahrenheit,
}

/// Parameters converting between one unit's scale and Kelvin
///
/// `value_in_unit = factor * value_in_kelvin + offset`. Differences use
/// `factor` alone: the offset locates the scale's origin and cancels out
/// of any subtraction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitConversionParameters {
    /// Unit degrees per kelvin
    pub factor: f64,
    /// Where 0 K falls on this unit's scale
    pub offset: f64,
}

impl UnitConversionParameters {
    /// Express an absolute Kelvin value on this unit's scale
    pub fn from_kelvin(&self, kelvin: f64) -> f64 {
        self.factor * kelvin + self.offset
    }

    /// Normalize an absolute value on this unit's scale to Kelvin
    pub fn to_kelvin(&self, value: f64) -> f64 {
        (value - self.offset) / self.factor
    }

    /// Express a Kelvin magnitude in this unit (offset-free)
    pub fn delta_from_kelvin(&self, kelvin: f64) -> f64 {
        self.factor * kelvin
    }

    /// Normalize a magnitude in this unit to Kelvin (offset-free)
    pub fn delta_to_kelvin(&self, value: f64) -> f64 {
        value / self.factor
    }
}

const CELSIUS_PARAMETERS: UnitConversionParameters = UnitConversionParameters {
    factor: 1.0,
    offset: -273.15,
};

const KELVIN_PARAMETERS: UnitConversionParameters = UnitConversionParameters {
    factor: 1.0,
    offset: 0.0,
};

const FAHRENHEIT_PARAMETERS: UnitConversionParameters = UnitConversionParameters {
    factor: 9.0 / 5.0,
    offset: -459.67,
};

impl Unit {
    /// Every supported unit, in declaration order
    pub const ALL: [Unit; 3] = [Unit::Celsius, Unit::Kelvin, Unit::Fahrenheit];

    /// Conversion parameters between this unit and Kelvin
    ///
    /// Total over the closed set; there is no error case.
    pub const fn conversion_parameters(self) -> UnitConversionParameters {
        match self {
            Unit::Celsius => CELSIUS_PARAMETERS,
            Unit::Kelvin => KELVIN_PARAMETERS,
            Unit::Fahrenheit => FAHRENHEIT_PARAMETERS,
        }
    }

    /// The full unit name, e.g. "celsius"
    pub const fn name(self) -> &'static str {
        match self {
            Unit::Celsius => "celsius",
            Unit::Kelvin => "kelvin",
            Unit::Fahrenheit => "fahrenheit",
        }
    }

    /// The unit abbreviation, e.g. "C"
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Unit::Celsius => "C",
            Unit::Kelvin => "K",
            Unit::Fahrenheit => "F",
        }
    }

    /// Look up a unit by name or abbreviation
    ///
    /// Case-sensitive exact match against the six recognized tokens:
    /// "celsius"/"C", "kelvin"/"K", "fahrenheit"/"F".
    pub fn parse(text: &str) -> Result<Unit, TemperatureError> {
        match text {
            "celsius" | "C" => Ok(Unit::Celsius),
            "kelvin" | "K" => Ok(Unit::Kelvin),
            "fahrenheit" | "F" => Ok(Unit::Fahrenheit),
            _ => Err(TemperatureError::UnrecognizedUnit(text.to_string())),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl FromStr for Unit {
    type Err = TemperatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_conversion_parameter_table() {
        let celsius = Unit::Celsius.conversion_parameters();
        assert_eq!(celsius.factor, 1.0);
        assert_eq!(celsius.offset, -273.15);

        let kelvin = Unit::Kelvin.conversion_parameters();
        assert_eq!(kelvin.factor, 1.0);
        assert_eq!(kelvin.offset, 0.0);

        let fahrenheit = Unit::Fahrenheit.conversion_parameters();
        assert_eq!(fahrenheit.factor, 1.8);
        assert_eq!(fahrenheit.offset, -459.67);
    }

    #[test]
    fn test_from_kelvin_and_back() {
        let fahrenheit = Unit::Fahrenheit.conversion_parameters();
        let freezing = fahrenheit.from_kelvin(273.15);
        assert_abs_diff_eq!(freezing, 32.0, epsilon = 1e-9);
        assert_abs_diff_eq!(fahrenheit.to_kelvin(freezing), 273.15, epsilon = 1e-9);
    }

    #[test]
    fn test_delta_conversion_ignores_offset() {
        let fahrenheit = Unit::Fahrenheit.conversion_parameters();
        assert_abs_diff_eq!(fahrenheit.delta_from_kelvin(1.0), 1.8, epsilon = 1e-12);
        assert_abs_diff_eq!(fahrenheit.delta_to_kelvin(1.8), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_names_and_abbreviations() {
        assert_eq!(Unit::Celsius.name(), "celsius");
        assert_eq!(Unit::Kelvin.name(), "kelvin");
        assert_eq!(Unit::Fahrenheit.name(), "fahrenheit");
        assert_eq!(Unit::Celsius.abbreviation(), "C");
        assert_eq!(Unit::Kelvin.abbreviation(), "K");
        assert_eq!(Unit::Fahrenheit.abbreviation(), "F");
    }

    #[test]
    fn test_parse_round_trip() {
        for unit in Unit::ALL {
            assert_eq!(Unit::parse(unit.name()).unwrap(), unit);
            assert_eq!(Unit::parse(unit.abbreviation()).unwrap(), unit);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!(Unit::parse("Celsius").is_err());
        assert!(Unit::parse("c").is_err());
        assert!(Unit::parse("k").is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_token() {
        let err = Unit::parse("bogus").unwrap_err();
        assert_eq!(err, TemperatureError::UnrecognizedUnit("bogus".to_string()));
    }

    #[test]
    fn test_from_str() {
        let unit: Unit = "K".parse().unwrap();
        assert_eq!(unit, Unit::Kelvin);
    }

    #[test]
    fn test_display_uses_abbreviation() {
        assert_eq!(format!("{}", Unit::Fahrenheit), "F");
    }
}
