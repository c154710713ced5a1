pub mod config;
pub mod error;
pub mod input;
pub mod lot;
pub mod pass;
pub mod pricing;
pub mod ticket;
pub mod vehicle;


pub use config::Settings;
pub use error::{InputError, ParkingError, PassError};
pub use lot::{ExitReceipt, ExitRecord, LotStatus, OvernightPolicy, ParkReceipt, ParkingLot};
pub use pass::MonthlyPass;
pub use pricing::{
    PricingStrategy, StrategyKind, VehicleRateStrategy, VehicleRates, WeekdayStrategy,
    WeekendStrategy,
};
pub use ticket::Ticket;
pub use vehicle::{Vehicle, VehicleType};
