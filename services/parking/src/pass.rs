use crate::error::PassError;
use crate::vehicle::Vehicle;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A calendar-month pass for one plate.
///
/// Standalone policy object: the lot never consults it when pricing, a caller
/// may check it before deciding to call `park`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyPass {
    pass_id: String,
    vehicle_license: String,
    valid_month: u32,
}

impl MonthlyPass {
    pub fn new(
        pass_id: impl Into<String>,
        vehicle_license: impl Into<String>,
        valid_month: u32,
    ) -> Result<Self, PassError> {
        let pass_id = pass_id.into();
        if pass_id.trim().is_empty() {
            return Err(PassError::EmptyPassId);
        }
        if !(1..=12).contains(&valid_month) {
            return Err(PassError::InvalidMonth(valid_month));
        }
        Ok(Self {
            pass_id,
            vehicle_license: vehicle_license.into(),
            valid_month,
        })
    }

    pub fn pass_id(&self) -> &str {
        &self.pass_id
    }

    pub fn vehicle_license(&self) -> &str {
        &self.vehicle_license
    }

    pub fn valid_month(&self) -> u32 {
        self.valid_month
    }

    /// True iff the pass month equals `current_month` (1-12).
    pub fn validate(&self, current_month: u32) -> bool {
        self.valid_month == current_month
    }

    pub fn validate_on(&self, date: NaiveDate) -> bool {
        self.validate(date.month())
    }

    /// Plate match plus month check.
    pub fn covers(&self, vehicle: &Vehicle, current_month: u32) -> bool {
        self.vehicle_license == vehicle.license_plate() && self.validate(current_month)
    }
}
