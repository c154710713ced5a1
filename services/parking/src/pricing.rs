use crate::error::InputError;
use crate::vehicle::VehicleType;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fee policy applied when a vehicle leaves the lot.
///
/// Implementations must be pure: the same `(duration_hours, vehicle_type)`
/// always prices the same.
pub trait PricingStrategy: Send + Sync {
    fn calculate_fee(&self, duration_hours: u64, vehicle_type: VehicleType) -> Decimal;

    fn name(&self) -> &'static str;
}

/// Flat $5 per hour regardless of vehicle type.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekdayStrategy;

impl WeekdayStrategy {
    pub const HOURLY_RATE: Decimal = dec!(5);
}

impl PricingStrategy for WeekdayStrategy {
    fn calculate_fee(&self, duration_hours: u64, _vehicle_type: VehicleType) -> Decimal {
        Decimal::from(duration_hours) * Self::HOURLY_RATE
    }

    fn name(&self) -> &'static str {
        "weekday"
    }
}

/// Flat $10 per hour regardless of vehicle type.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendStrategy;

impl WeekendStrategy {
    pub const HOURLY_RATE: Decimal = dec!(10);
}

impl PricingStrategy for WeekendStrategy {
    fn calculate_fee(&self, duration_hours: u64, _vehicle_type: VehicleType) -> Decimal {
        Decimal::from(duration_hours) * Self::HOURLY_RATE
    }

    fn name(&self) -> &'static str {
        "weekend"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRates {
    pub car: Decimal,
    pub bike: Decimal,
    pub truck: Decimal,
}

impl Default for VehicleRates {
    fn default() -> Self {
        Self {
            car: dec!(5),
            bike: dec!(2),
            truck: dec!(15),
        }
    }
}

impl VehicleRates {
    pub fn rate_for(&self, vehicle_type: VehicleType) -> Decimal {
        match vehicle_type {
            VehicleType::Car => self.car,
            VehicleType::Bike => self.bike,
            VehicleType::Truck => self.truck,
        }
    }
}

/// Hourly rate chosen by vehicle type.
#[derive(Debug, Clone, Default)]
pub struct VehicleRateStrategy {
    rates: VehicleRates,
}

impl VehicleRateStrategy {
    pub fn new(rates: VehicleRates) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &VehicleRates {
        &self.rates
    }
}

impl PricingStrategy for VehicleRateStrategy {
    fn calculate_fee(&self, duration_hours: u64, vehicle_type: VehicleType) -> Decimal {
        Decimal::from(duration_hours) * self.rates.rate_for(vehicle_type)
    }

    fn name(&self) -> &'static str {
        "per-vehicle"
    }
}

/// Strategy selector as typed by an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    Standard,
    Weekend,
    PerVehicle,
}

impl StrategyKind {
    pub fn build(self, rates: &VehicleRates) -> Box<dyn PricingStrategy> {
        match self {
            StrategyKind::Standard => Box::new(WeekdayStrategy),
            StrategyKind::Weekend => Box::new(WeekendStrategy),
            StrategyKind::PerVehicle => Box::new(VehicleRateStrategy::new(rates.clone())),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StrategyKind::Standard => "standard",
            StrategyKind::Weekend => "weekend",
            StrategyKind::PerVehicle => "per-vehicle",
        };
        f.write_str(name)
    }
}

impl FromStr for StrategyKind {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(StrategyKind::Standard),
            "weekend" => Ok(StrategyKind::Weekend),
            "per-vehicle" | "per_vehicle" => Ok(StrategyKind::PerVehicle),
            _ => Err(InputError::InvalidStrategy(s.trim().to_string())),
        }
    }
}
