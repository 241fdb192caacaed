//! Thermo Units - unit-safe temperature values
//!
//! This crate provides two immutable value types that carry an explicit
//! measurement unit:
//! - [`Temperature`]: an absolute point on the temperature scale, never
//!   below absolute zero
//! - [`TemperatureDelta`]: a signed difference between two points, with
//!   no lower bound
//!
//! The type split makes physically meaningless operations unrepresentable:
//! two absolute temperatures cannot be added, only subtracted (yielding a
//! delta), while deltas form a full signed algebra.
//!
//! All cross-unit arithmetic normalizes operands to Kelvin, computes
//! there, and tags the result as Kelvin; `as_unit` re-expresses any value
//! on another scale on demand. Supported units: Celsius, Kelvin,
//! Fahrenheit.
//!
//! Everything here is pure, synchronous computation over immutable
//! values; it is safe to share and call from any number of threads.

mod delta;
mod error;
mod parse;
mod temperature;
mod unit;

pub use delta::TemperatureDelta;
pub use error::TemperatureError;
pub use parse::{parse_delta, parse_temperature};
pub use temperature::{Temperature, ABSOLUTE_ZERO};
pub use unit::{Unit, UnitConversionParameters};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Temperature, TemperatureDelta, TemperatureError, Unit, ABSOLUTE_ZERO};
}
