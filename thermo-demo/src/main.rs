//! Walkthrough of the thermo-units API
//!
//! Temperature and TemperatureDelta act as record types: immutable once
//! created, in the spirit of `std::time::Instant` and `Duration`. This
//! program exercises the whole public surface: construction, invalid
//! construction, arithmetic, comparisons, conversion, debug strings, and
//! unit parsing.

use std::env;
use thermo_units::{parse_temperature, prelude::*};
use tracing::info;

fn run() -> Result<(), TemperatureError> {
    // Create a unit-tagged temperature
    let temp = Temperature::new(100.0, Unit::Celsius)?;
    info!("boiling point of water: {temp}");

    // A temperature below absolute zero cannot be created
    if let Err(err) = Temperature::new(-400.0, Unit::Celsius) {
        info!("rejected invalid construction: {err}");
    }

    // Create a unit-tagged temperature difference
    let dtemp = TemperatureDelta::new(50.0, Unit::Kelvin);
    info!("a difference: {dtemp}");

    // Temperature + TemperatureDelta is a new Temperature, in either order
    let shifted = temp.checked_add(dtemp)?;
    let same = dtemp.checked_add(temp)?;
    info!("{temp} warmed by {dtemp}: {shifted} (commutative: {})", shifted == same);

    // Temperature - TemperatureDelta is a new Temperature
    let cooled = temp.checked_sub(dtemp)?;
    info!("{temp} cooled by {dtemp}: {cooled}");

    // Temperature - Temperature is a TemperatureDelta
    let span = shifted - cooled;
    info!("span from {cooled} to {shifted}: {span}");

    // Deltas form a signed algebra: add, subtract, scale, negate
    let doubled = dtemp + dtemp;
    let halved = dtemp.checked_div(2.0)?;
    let inverted = -dtemp;
    info!("doubled: {doubled}, halved: {halved}, inverted: {inverted}");
    info!("scaled both ways agree: {}", 2.0 * dtemp == dtemp * 2.0);

    // Dividing two deltas gives a dimensionless ratio
    let ratio = doubled.ratio(&dtemp)?;
    info!("ratio of {doubled} to {dtemp}: {ratio}");

    // Comparisons normalize units first
    let freezing = Temperature::new(0.0, Unit::Celsius)?;
    let freezing_f = Temperature::new(32.0, Unit::Fahrenheit)?;
    info!("0 C == 32 F: {}", freezing == freezing_f);
    info!("{temp} > {freezing}: {}", temp > freezing);
    info!("{dtemp} < {doubled}: {}", dtemp < doubled);

    // When the raw value is needed, get it by unit
    info!("{temp} in fahrenheit: {}", temp.as_unit(Unit::Fahrenheit));
    info!("{dtemp} in celsius: {}", dtemp.as_unit(Unit::Celsius));

    // Unit names, abbreviations, and parsing
    info!(
        "unit {}: name {:?}, abbreviation {:?}",
        Unit::Fahrenheit,
        Unit::Fahrenheit.name(),
        Unit::Fahrenheit.abbreviation()
    );
    let parsed: Unit = "celsius".parse()?;
    info!("parsed \"celsius\" as {parsed:?}");
    if let Err(err) = Unit::parse("bogus") {
        info!("rejected unit token: {err}");
    }

    // Quantity strings round-trip through the debug format
    let reheated = parse_temperature("350 F")?;
    info!("parsed \"350 F\" back to {reheated}");

    // The floor of every scale
    info!("absolute zero: {ABSOLUTE_ZERO} = {} C", ABSOLUTE_ZERO.as_unit(Unit::Celsius));

    Ok(())
}

fn main() {
    // Default to info-level logging unless the caller says otherwise
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(err) = run() {
        tracing::error!("demo failed: {err}");
        std::process::exit(1);
    }
}
