use crate::error::{InputError, ParkingError};
use crate::pricing::PricingStrategy;
use crate::ticket::Ticket;
use crate::vehicle::Vehicle;
use chrono::NaiveDateTime;
use parking_lot::Mutex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::logger::mask_plate;
use shared::money::{format_currency, format_hours, DEFAULT_CURRENCY_SYMBOL};
use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;
use tracing::{info, warn};
use uuid::Uuid;

const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_DAY: i64 = 86_400;

/// What to do when an exit timestamp is earlier than the entry timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OvernightPolicy {
    #[default]
    Reject,
    /// Push the exit forward by whole days until it is not before the entry.
    WrapToNextDay,
}

impl OvernightPolicy {
    /// Length of the stay in whole seconds, `None` if the policy refuses it.
    fn stay_seconds(self, entry: NaiveDateTime, exit: NaiveDateTime) -> Option<i64> {
        let seconds = (exit - entry).num_seconds();
        if seconds >= 0 {
            return Some(seconds);
        }
        match self {
            OvernightPolicy::Reject => None,
            OvernightPolicy::WrapToNextDay => Some(seconds.rem_euclid(SECONDS_PER_DAY)),
        }
    }
}

impl FromStr for OvernightPolicy {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(OvernightPolicy::Reject),
            "wrap" | "wrap-to-next-day" => Ok(OvernightPolicy::WrapToNextDay),
            _ => Err(InputError::InvalidOvernightPolicy(s.trim().to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkReceipt {
    pub ticket_id: Uuid,
    pub license_plate: String,
    pub spot_id: u32,
    pub entry_time: NaiveDateTime,
}

impl fmt::Display for ParkReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vehicle {} parked at spot {}", self.license_plate, self.spot_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExitReceipt {
    pub ticket: Ticket,
    pub duration_hours: u64,
    pub fee: Decimal,
}

impl ExitReceipt {
    pub fn duration_label(&self) -> String {
        format_hours(self.duration_hours)
    }

    pub fn fee_label(&self, currency_symbol: &str) -> String {
        format_currency(self.fee, currency_symbol)
    }

    /// Loggable view of the receipt with the plate masked.
    pub fn masked_record(&self) -> ExitRecord {
        ExitRecord {
            ticket_id: self.ticket.ticket_id(),
            license_plate: mask_plate(self.ticket.vehicle().license_plate()),
            spot_id: self.ticket.spot_id(),
            duration_hours: self.duration_hours,
            fee: self.fee,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExitRecord {
    pub ticket_id: Uuid,
    pub license_plate: String,
    pub spot_id: u32,
    pub duration_hours: u64,
    pub fee: Decimal,
}

impl fmt::Display for ExitReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Duration : {}", self.duration_label())?;
        write!(f, "Fee      : {}", self.fee_label(DEFAULT_CURRENCY_SYMBOL))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotStatus {
    pub total_spots: u32,
    pub available_spots: u32,
    pub occupied_spots: u32,
    pub strategy: String,
    pub overnight_policy: OvernightPolicy,
}

struct LotState {
    active_tickets: HashMap<String, Ticket>,
    // Spots vacated by an exit, handed out lowest first.
    released_spots: BTreeSet<u32>,
    next_unused_spot: u32,
}

impl LotState {
    fn new() -> Self {
        Self {
            active_tickets: HashMap::new(),
            released_spots: BTreeSet::new(),
            next_unused_spot: 1,
        }
    }

    fn occupied(&self) -> u32 {
        self.active_tickets.len() as u32
    }

    fn allocate_spot(&mut self) -> u32 {
        if let Some(spot_id) = self.released_spots.pop_first() {
            return spot_id;
        }
        let spot_id = self.next_unused_spot;
        self.next_unused_spot += 1;
        spot_id
    }

    fn release_spot(&mut self, spot_id: u32) {
        self.released_spots.insert(spot_id);
    }
}

/// Single-facility lot: spot allocation, the active ticket index and exit pricing.
///
/// All transitions take `&self` and run under one lock, so a lot can be
/// shared between threads behind an `Arc`. Invariant, observable before and
/// after every call: `available_spots() + active_tickets().len() == total_spots()`.
pub struct ParkingLot {
    total_spots: u32,
    pricing_strategy: Box<dyn PricingStrategy>,
    overnight_policy: OvernightPolicy,
    state: Mutex<LotState>,
}

impl ParkingLot {
    pub fn new(
        total_spots: u32,
        pricing_strategy: Box<dyn PricingStrategy>,
    ) -> Result<Self, ParkingError> {
        if total_spots == 0 {
            return Err(ParkingError::InvalidCapacity);
        }
        Ok(Self {
            total_spots,
            pricing_strategy,
            overnight_policy: OvernightPolicy::default(),
            state: Mutex::new(LotState::new()),
        })
    }

    pub fn with_overnight_policy(mut self, overnight_policy: OvernightPolicy) -> Self {
        self.overnight_policy = overnight_policy;
        self
    }

    /// Assign the lowest free spot to `vehicle` and open a ticket for it.
    pub fn park(
        &self,
        vehicle: &Vehicle,
        entry_time: NaiveDateTime,
    ) -> Result<ParkReceipt, ParkingError> {
        let mut guard = self.state.lock();
        let state = &mut *guard;
        let plate = vehicle.license_plate();

        if state.occupied() >= self.total_spots {
            warn!(
                license_plate = %mask_plate(plate),
                capacity = self.total_spots,
                "Entry denied, lot full"
            );
            return Err(ParkingError::LotFull {
                capacity: self.total_spots,
            });
        }

        if let Some(existing) = state.active_tickets.get(plate) {
            warn!(
                license_plate = %mask_plate(plate),
                spot_id = existing.spot_id(),
                "Entry denied, plate already parked"
            );
            return Err(ParkingError::AlreadyParked {
                license_plate: plate.to_string(),
                spot_id: existing.spot_id(),
            });
        }

        let spot_id = state.allocate_spot();
        let ticket = Ticket::issue(vehicle.clone(), entry_time, spot_id);
        let receipt = ParkReceipt {
            ticket_id: ticket.ticket_id(),
            license_plate: plate.to_string(),
            spot_id,
            entry_time,
        };
        state.active_tickets.insert(plate.to_string(), ticket);

        info!(
            ticket_id = %receipt.ticket_id,
            license_plate = %mask_plate(plate),
            spot_id,
            available = self.total_spots - state.occupied(),
            "Vehicle parked"
        );

        Ok(receipt)
    }

    /// Close the active ticket for `vehicle`, price the stay and free its spot.
    ///
    /// The duration is truncated to whole hours: a 59 minute stay is 0 hours.
    pub fn exit(
        &self,
        vehicle: &Vehicle,
        exit_time: NaiveDateTime,
    ) -> Result<ExitReceipt, ParkingError> {
        let mut guard = self.state.lock();
        let state = &mut *guard;
        let plate = vehicle.license_plate();

        let entry = match state.active_tickets.entry(plate.to_string()) {
            Entry::Occupied(entry) => entry,
            Entry::Vacant(_) => {
                warn!(license_plate = %mask_plate(plate), "Exit denied, no active ticket");
                return Err(ParkingError::NotFound {
                    license_plate: plate.to_string(),
                });
            }
        };

        let seconds = match self
            .overnight_policy
            .stay_seconds(entry.get().entry_time(), exit_time)
        {
            Some(seconds) => seconds,
            None => {
                warn!(
                    license_plate = %mask_plate(plate),
                    entry_time = %entry.get().entry_time(),
                    exit_time = %exit_time,
                    "Exit denied, exit precedes entry"
                );
                return Err(ParkingError::ExitBeforeEntry {
                    license_plate: plate.to_string(),
                });
            }
        };

        let duration_hours = (seconds / SECONDS_PER_HOUR) as u64;
        let fee = self
            .pricing_strategy
            .calculate_fee(duration_hours, vehicle.vehicle_type());

        let mut ticket = entry.remove();
        ticket.close(exit_time);
        state.release_spot(ticket.spot_id());

        info!(
            ticket_id = %ticket.ticket_id(),
            license_plate = %mask_plate(plate),
            spot_id = ticket.spot_id(),
            duration_hours,
            fee = %fee,
            strategy = self.pricing_strategy.name(),
            "Vehicle exited"
        );

        Ok(ExitReceipt {
            ticket,
            duration_hours,
            fee,
        })
    }

    pub fn total_spots(&self) -> u32 {
        self.total_spots
    }

    pub fn available_spots(&self) -> u32 {
        self.total_spots - self.state.lock().occupied()
    }

    pub fn occupied_spots(&self) -> u32 {
        self.state.lock().occupied()
    }

    pub fn is_full(&self) -> bool {
        self.available_spots() == 0
    }

    pub fn overnight_policy(&self) -> OvernightPolicy {
        self.overnight_policy
    }

    pub fn strategy_name(&self) -> &'static str {
        self.pricing_strategy.name()
    }

    pub fn active_ticket(&self, license_plate: &str) -> Option<Ticket> {
        self.state.lock().active_tickets.get(license_plate).cloned()
    }

    /// Active tickets ordered by spot.
    pub fn active_tickets(&self) -> Vec<Ticket> {
        let mut tickets: Vec<Ticket> = self.state.lock().active_tickets.values().cloned().collect();
        tickets.sort_by_key(|t| t.spot_id());
        tickets
    }

    pub fn status(&self) -> LotStatus {
        let occupied = self.state.lock().occupied();
        LotStatus {
            total_spots: self.total_spots,
            available_spots: self.total_spots - occupied,
            occupied_spots: occupied,
            strategy: self.pricing_strategy.name().to_string(),
            overnight_policy: self.overnight_policy,
        }
    }
}
