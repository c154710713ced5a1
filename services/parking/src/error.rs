use thiserror::Error;

/// Failures of a lot transition. None of them leave the lot modified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParkingError {
    #[error("Parking Lot is Full. Entry denied. (capacity {capacity})")]
    LotFull { capacity: u32 },
    #[error("Vehicle not found: {license_plate}")]
    NotFound { license_plate: String },
    #[error("Vehicle {license_plate} is already parked at spot {spot_id}")]
    AlreadyParked { license_plate: String, spot_id: u32 },
    #[error("Exit time for {license_plate} is earlier than its entry time")]
    ExitBeforeEntry { license_plate: String },
    #[error("A parking lot needs at least one spot")]
    InvalidCapacity,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PassError {
    #[error("Invalid pass month {0}, expected 1-12")]
    InvalidMonth(u32),
    #[error("Pass id must not be empty")]
    EmptyPassId,
}

/// Rejections produced while turning raw harness input into core values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Invalid vehicle type: {0} (expected car, bike or truck)")]
    InvalidVehicleType(String),
    #[error("Invalid strategy: {0} (expected standard, weekend or per-vehicle)")]
    InvalidStrategy(String),
    #[error("Invalid time: {0} (expected HH:MM)")]
    InvalidTime(String),
    #[error("License plate must not be empty")]
    EmptyPlate,
    #[error("Invalid overnight policy: {0} (expected reject or wrap)")]
    InvalidOvernightPolicy(String),
}
