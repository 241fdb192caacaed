//! Quantity-string parsing - parse "100 C" into a value and unit
//!
//! Accepts the same shape the `Display` impls produce: a numeric value,
//! one or more spaces, then a unit name or abbreviation.

use crate::{Temperature, TemperatureDelta, TemperatureError, Unit};
use std::str::FromStr;

/// Split a quantity string into its numeric prefix and unit token
fn split_quantity(text: &str) -> Result<(f64, Unit), TemperatureError> {
    let trimmed = text.trim();

    let (number, token) = trimmed
        .split_once(char::is_whitespace)
        .ok_or_else(|| TemperatureError::InvalidQuantity(text.to_string()))?;

    let value = f64::from_str(number)
        .map_err(|_| TemperatureError::InvalidQuantity(text.to_string()))?;
    let unit = Unit::parse(token.trim_start())?;

    Ok((value, unit))
}

/// Parse an absolute temperature like "100 C" or "273.15 kelvin"
///
/// The value is validated against absolute zero exactly as in
/// [`Temperature::new`].
pub fn parse_temperature(text: &str) -> Result<Temperature, TemperatureError> {
    let (value, unit) = split_quantity(text)?;
    Temperature::new(value, unit)
}

/// Parse a temperature difference like "50 K" or "-12.5 F"
pub fn parse_delta(text: &str) -> Result<TemperatureDelta, TemperatureError> {
    let (value, unit) = split_quantity(text)?;
    Ok(TemperatureDelta::new(value, unit))
}
