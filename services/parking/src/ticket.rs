use crate::vehicle::Vehicle;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One stay of one vehicle in one spot. Only `ParkingLot` issues and closes tickets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    ticket_id: Uuid,
    vehicle: Vehicle,
    entry_time: NaiveDateTime,
    exit_time: Option<NaiveDateTime>,
    spot_id: u32,
}

impl Ticket {
    pub(crate) fn issue(vehicle: Vehicle, entry_time: NaiveDateTime, spot_id: u32) -> Self {
        Self {
            ticket_id: Uuid::new_v4(),
            vehicle,
            entry_time,
            exit_time: None,
            spot_id,
        }
    }

    pub(crate) fn close(&mut self, exit_time: NaiveDateTime) {
        self.exit_time = Some(exit_time);
    }

    pub fn ticket_id(&self) -> Uuid {
        self.ticket_id
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    pub fn entry_time(&self) -> NaiveDateTime {
        self.entry_time
    }

    pub fn exit_time(&self) -> Option<NaiveDateTime> {
        self.exit_time
    }

    pub fn spot_id(&self) -> u32 {
        self.spot_id
    }

    pub fn is_active(&self) -> bool {
        self.exit_time.is_none()
    }
}
