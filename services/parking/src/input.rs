//! Parsing of operator input into core values.

use crate::error::InputError;
use crate::vehicle::{Vehicle, VehicleType};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

const CLOCK_FORMAT: &str = "%H:%M";

/// Every strategy name listed here must parse as a `StrategyKind`.
pub const STRATEGY_PROMPT: &str = "Strategy (standard/weekend/per-vehicle): ";

pub fn parse_vehicle(vehicle_type: &str, license_plate: &str) -> Result<Vehicle, InputError> {
    let vehicle_type: VehicleType = vehicle_type.parse()?;
    let plate = license_plate.trim();
    if plate.is_empty() {
        return Err(InputError::EmptyPlate);
    }
    Ok(Vehicle::new(plate, vehicle_type))
}

/// Parse `HH:MM` into a time of day.
pub fn parse_clock(raw: &str) -> Result<NaiveTime, InputError> {
    NaiveTime::parse_from_str(raw.trim(), CLOCK_FORMAT)
        .map_err(|_| InputError::InvalidTime(raw.trim().to_string()))
}

/// Anchor a clock reading on `date`. Overnight stays are left to the lot's policy.
pub fn on_date(date: NaiveDate, raw: &str) -> Result<NaiveDateTime, InputError> {
    Ok(date.and_time(parse_clock(raw)?))
}
