//! Temperature differences
//!
//! A [`TemperatureDelta`] is a signed magnitude separating two points on
//! the temperature scale. It has no lower bound, and converting it between
//! units uses conversion factors only; scale offsets cancel out of any
//! difference.

use crate::{Temperature, TemperatureError, Unit};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A signed difference between two temperatures, tagged with a unit
///
/// Immutable once created. Equality and ordering compare Kelvin-normalized
/// magnitudes, so deltas in different units can be equal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TemperatureDelta {
    value: f64,
    unit: Unit,
}

impl TemperatureDelta {
    /// Create a new difference. A difference has no lower bound, so this
    /// cannot fail.
    pub const fn new(value: f64, unit: Unit) -> Self {
        TemperatureDelta { value, unit }
    }

    /// The raw magnitude, in this delta's own unit
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// The unit this delta is expressed in
    pub const fn unit(&self) -> Unit {
        self.unit
    }

    /// The magnitude expressed in `unit`
    ///
    /// Offset-free: only conversion factors apply to differences.
    pub fn as_unit(&self, unit: Unit) -> f64 {
        let kelvin = self.unit.conversion_parameters().delta_to_kelvin(self.value);
        unit.conversion_parameters().delta_from_kelvin(kelvin)
    }

    fn as_kelvin(&self) -> f64 {
        self.as_unit(Unit::Kelvin)
    }

    /// Scale the magnitude by `factor`, keeping the unit
    pub fn scale(&self, factor: f64) -> Self {
        TemperatureDelta::new(self.value * factor, self.unit)
    }

    /// Divide the magnitude by `divisor`, keeping the unit
    pub fn checked_div(&self, divisor: f64) -> Result<Self, TemperatureError> {
        if divisor == 0.0 {
            return Err(TemperatureError::DivisionByZero);
        }
        Ok(TemperatureDelta::new(self.value / divisor, self.unit))
    }

    /// The dimensionless ratio of this delta to `other`
    pub fn ratio(&self, other: &TemperatureDelta) -> Result<f64, TemperatureError> {
        let divisor = other.as_kelvin();
        if divisor == 0.0 {
            return Err(TemperatureError::DivisionByZero);
        }
        Ok(self.as_kelvin() / divisor)
    }

    /// The magnitude absolute-valued, unit unchanged
    pub fn abs(&self) -> Self {
        TemperatureDelta::new(self.value.abs(), self.unit)
    }

    /// Shift a temperature upward by this delta
    ///
    /// The commutative partner of [`Temperature::checked_add`]: both
    /// orders produce identical results.
    pub fn checked_add(&self, temperature: Temperature) -> Result<Temperature, TemperatureError> {
        temperature.checked_add(*self)
    }
}

// ========== Operators ==========

impl Add for TemperatureDelta {
    type Output = TemperatureDelta;

    fn add(self, rhs: TemperatureDelta) -> TemperatureDelta {
        TemperatureDelta::new(self.as_kelvin() + rhs.as_kelvin(), Unit::Kelvin)
    }
}

impl Sub for TemperatureDelta {
    type Output = TemperatureDelta;

    fn sub(self, rhs: TemperatureDelta) -> TemperatureDelta {
        self + (-rhs)
    }
}

impl Neg for TemperatureDelta {
    type Output = TemperatureDelta;

    fn neg(self) -> TemperatureDelta {
        TemperatureDelta::new(-self.value, self.unit)
    }
}

impl Mul<f64> for TemperatureDelta {
    type Output = TemperatureDelta;

    fn mul(self, factor: f64) -> TemperatureDelta {
        self.scale(factor)
    }
}

impl Mul<TemperatureDelta> for f64 {
    type Output = TemperatureDelta;

    fn mul(self, delta: TemperatureDelta) -> TemperatureDelta {
        delta.scale(self)
    }
}

/// IEEE-754 semantics; use [`TemperatureDelta::checked_div`] to surface a
/// zero divisor as an error instead.
impl Div<f64> for TemperatureDelta {
    type Output = TemperatureDelta;

    fn div(self, divisor: f64) -> TemperatureDelta {
        TemperatureDelta::new(self.value / divisor, self.unit)
    }
}

/// IEEE-754 semantics; use [`TemperatureDelta::ratio`] to surface a
/// zero-magnitude divisor as an error instead.
impl Div<TemperatureDelta> for TemperatureDelta {
    type Output = f64;

    fn div(self, rhs: TemperatureDelta) -> f64 {
        self.as_kelvin() / rhs.as_kelvin()
    }
}

impl PartialEq for TemperatureDelta {
    fn eq(&self, other: &Self) -> bool {
        self.as_kelvin() == other.as_kelvin()
    }
}

impl PartialOrd for TemperatureDelta {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_kelvin().partial_cmp(&other.as_kelvin())
    }
}

impl fmt::Display for TemperatureDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.abbreviation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_construction_has_no_lower_bound() {
        let delta = TemperatureDelta::new(-5000.0, Unit::Celsius);
        assert_eq!(delta.value(), -5000.0);
        assert_eq!(delta.unit(), Unit::Celsius);
    }

    #[test]
    fn test_as_unit_is_offset_free() {
        let delta = TemperatureDelta::new(1.0, Unit::Celsius);
        assert_abs_diff_eq!(delta.as_unit(Unit::Fahrenheit), 1.8, epsilon = 1e-12);
        assert_abs_diff_eq!(delta.as_unit(Unit::Kelvin), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_add_normalizes_to_kelvin() {
        let a = TemperatureDelta::new(1.0, Unit::Celsius);
        let b = TemperatureDelta::new(9.0, Unit::Fahrenheit);
        let sum = a + b;
        assert_eq!(sum.unit(), Unit::Kelvin);
        assert_abs_diff_eq!(sum.value(), 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_subtract_is_add_of_negation() {
        let a = TemperatureDelta::new(3.0, Unit::Kelvin);
        let b = TemperatureDelta::new(2.0, Unit::Kelvin);
        assert_eq!(a - b, a + (-b));
        assert_abs_diff_eq!((a - b).as_unit(Unit::Kelvin), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_scaling_is_commutative() {
        let delta = TemperatureDelta::new(4.0, Unit::Fahrenheit);
        let left = 2.0 * delta;
        let right = delta * 2.0;
        assert_eq!(left, right);
        assert_eq!(left.unit(), Unit::Fahrenheit);
        assert_eq!(left.value(), 8.0);
    }

    #[test]
    fn test_scale_keeps_unit() {
        let delta = TemperatureDelta::new(4.0, Unit::Celsius).scale(0.5);
        assert_eq!(delta.value(), 2.0);
        assert_eq!(delta.unit(), Unit::Celsius);
    }

    #[test]
    fn test_checked_div() {
        let delta = TemperatureDelta::new(4.0, Unit::Kelvin);
        let halved = delta.checked_div(2.0).unwrap();
        assert_eq!(halved.value(), 2.0);
        assert_eq!(halved.unit(), Unit::Kelvin);
    }

    #[test]
    fn test_checked_div_by_zero() {
        let delta = TemperatureDelta::new(4.0, Unit::Kelvin);
        assert_eq!(delta.checked_div(0.0), Err(TemperatureError::DivisionByZero));
    }

    #[test]
    fn test_ratio() {
        let a = TemperatureDelta::new(2.0, Unit::Celsius);
        let b = TemperatureDelta::new(1.0, Unit::Celsius);
        assert_abs_diff_eq!(a.ratio(&b).unwrap(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_ratio_across_units() {
        let a = TemperatureDelta::new(1.8, Unit::Fahrenheit);
        let b = TemperatureDelta::new(1.0, Unit::Kelvin);
        assert_abs_diff_eq!(a.ratio(&b).unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_ratio_against_zero_magnitude() {
        let a = TemperatureDelta::new(2.0, Unit::Celsius);
        let zero = TemperatureDelta::new(0.0, Unit::Fahrenheit);
        assert_eq!(a.ratio(&zero), Err(TemperatureError::DivisionByZero));
    }

    #[test]
    fn test_div_operator_ratio() {
        let a = TemperatureDelta::new(2.0, Unit::Celsius);
        let b = TemperatureDelta::new(1.0, Unit::Celsius);
        assert_abs_diff_eq!(a / b, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_negate_and_abs_keep_unit() {
        let delta = TemperatureDelta::new(-2.5, Unit::Fahrenheit);
        assert_eq!((-delta).value(), 2.5);
        assert_eq!(delta.abs().value(), 2.5);
        assert_eq!(delta.abs().unit(), Unit::Fahrenheit);
    }

    #[test]
    fn test_equality_across_units() {
        let celsius = TemperatureDelta::new(1.0, Unit::Celsius);
        let fahrenheit = TemperatureDelta::new(1.8, Unit::Fahrenheit);
        let kelvin = TemperatureDelta::new(1.0, Unit::Kelvin);
        assert_eq!(celsius, fahrenheit);
        assert_eq!(celsius, kelvin);
    }

    #[test]
    fn test_ordering() {
        let small = TemperatureDelta::new(1.0, Unit::Kelvin);
        let large = TemperatureDelta::new(2.0, Unit::Celsius);
        assert!(small < large);
        assert!(large > small);
        assert!(small <= small);
        assert!(small >= small);
    }

    #[test]
    fn test_display() {
        let delta = TemperatureDelta::new(50.0, Unit::Kelvin);
        assert_eq!(format!("{}", delta), "50 K");
    }
}
