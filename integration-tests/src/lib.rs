//! Shared fixtures for the cross-crate test suites.

use chrono::{NaiveDate, NaiveDateTime};
use parking_service::{ParkingLot, PricingStrategy, Vehicle, VehicleType};

pub fn clock(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 1)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .expect("fixture clock must be a valid time of day")
}

pub fn vehicle(plate: &str, vehicle_type: VehicleType) -> Vehicle {
    Vehicle::new(plate, vehicle_type)
}

pub fn lot_with(capacity: u32, strategy: Box<dyn PricingStrategy>) -> ParkingLot {
    match ParkingLot::new(capacity, strategy) {
        Ok(lot) => lot,
        Err(e) => panic!("fixture lot could not be built: {}", e),
    }
}
