//! Absolute temperatures
//!
//! A [`Temperature`] is a point on the temperature scale. Its one
//! invariant: the Kelvin-normalized value is never negative. The check
//! runs exactly once, at construction; every derived value re-enters the
//! constructor, so an invalid temperature never exists.

use crate::{TemperatureDelta, TemperatureError, Unit};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Sub;

const ABSOLUTE_ZERO_AS_KELVIN: f64 = 0.0;

/// The lowest physically possible temperature, 0 K
pub const ABSOLUTE_ZERO: Temperature = Temperature {
    value: ABSOLUTE_ZERO_AS_KELVIN,
    unit: Unit::Kelvin,
};

/// An absolute point on the temperature scale, tagged with a unit
///
/// Immutable once created. Equality and ordering compare Kelvin-normalized
/// values, so temperatures in different units can be equal.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Temperature {
    value: f64,
    unit: Unit,
}

impl Temperature {
    /// Create a temperature, rejecting anything below absolute zero
    pub fn new(value: f64, unit: Unit) -> Result<Self, TemperatureError> {
        let kelvin = unit.conversion_parameters().to_kelvin(value);
        if kelvin < ABSOLUTE_ZERO_AS_KELVIN {
            return Err(TemperatureError::BelowAbsoluteZero { value, unit });
        }
        Ok(Temperature { value, unit })
    }

    /// The raw value, on this temperature's own scale
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// The unit this temperature is expressed in
    pub const fn unit(&self) -> Unit {
        self.unit
    }

    /// The point expressed on `unit`'s scale (full affine conversion)
    pub fn as_unit(&self, unit: Unit) -> f64 {
        let kelvin = self.unit.conversion_parameters().to_kelvin(self.value);
        unit.conversion_parameters().from_kelvin(kelvin)
    }

    fn as_kelvin(&self) -> f64 {
        self.as_unit(Unit::Kelvin)
    }

    /// Shift upward by `delta`
    ///
    /// Sums in Kelvin and re-enters the validating constructor, so a
    /// delta that would land below absolute zero is rejected. Commutative
    /// with [`TemperatureDelta::checked_add`].
    pub fn checked_add(&self, delta: TemperatureDelta) -> Result<Temperature, TemperatureError> {
        Temperature::new(self.as_kelvin() + delta.as_unit(Unit::Kelvin), Unit::Kelvin)
    }

    /// Shift downward by `delta`, with the same validation
    pub fn checked_sub(&self, delta: TemperatureDelta) -> Result<Temperature, TemperatureError> {
        self.checked_add(-delta)
    }

    /// The signed difference from `other` up to `self`
    ///
    /// Never fails: a difference has no lower bound. The `-` operator
    /// between two temperatures is sugar for this.
    pub fn difference(&self, other: Temperature) -> TemperatureDelta {
        TemperatureDelta::new(self.as_kelvin() - other.as_kelvin(), Unit::Kelvin)
    }
}

impl Sub for Temperature {
    type Output = TemperatureDelta;

    fn sub(self, rhs: Temperature) -> TemperatureDelta {
        self.difference(rhs)
    }
}

impl PartialEq for Temperature {
    fn eq(&self, other: &Self) -> bool {
        self.as_kelvin() == other.as_kelvin()
    }
}

impl PartialOrd for Temperature {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_kelvin().partial_cmp(&other.as_kelvin())
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.abbreviation())
    }
}

/// Deserialization funnels through [`Temperature::new`] so serialized data
/// cannot smuggle in a value below absolute zero.
impl<'de> Deserialize<'de> for Temperature {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            value: f64,
            unit: Unit,
        }

        let raw = Raw::deserialize(deserializer)?;
        Temperature::new(raw.value, raw.unit).map_err(de::Error::custom)
    }
}
