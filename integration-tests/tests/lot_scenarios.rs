//! End-to-end lot scenarios
//!
//! Drives the lot the way the CLI harness does: parse input, park, exit,
//! format the receipt.

use integration_tests::{clock, lot_with, vehicle};
use parking_service::input::{on_date, parse_vehicle};
use parking_service::{
    MonthlyPass, OvernightPolicy, ParkingError, StrategyKind, VehicleRates, VehicleType,
    WeekdayStrategy, WeekendStrategy,
};
use rust_decimal_macros::dec;
use shared::format_currency;

// =============================================================================
// Harness flow
// =============================================================================

#[test]
fn test_harness_standard_flow() {
    let car = parse_vehicle("car", "MH12DE1433").unwrap();
    let date = clock(0, 0).date();
    let entry = on_date(date, "08:15").unwrap();
    let exit = on_date(date, "12:14").unwrap();

    let strategy: StrategyKind = "standard".parse().unwrap();
    let lot = lot_with(300, strategy.build(&VehicleRates::default()));

    let parked = lot.park(&car, entry).unwrap();
    assert_eq!(parked.to_string(), "Vehicle MH12DE1433 parked at spot 1");

    let receipt = lot.exit(&car, exit).unwrap();
    assert_eq!(receipt.duration_label(), "3 Hours");
    assert_eq!(receipt.fee_label("$"), "$15.00");
}

#[test]
fn test_harness_weekend_overnight_flow() {
    let bike = parse_vehicle("bike", "B-77").unwrap();
    let date = clock(0, 0).date();
    let lot = lot_with(300, StrategyKind::Weekend.build(&VehicleRates::default()))
        .with_overnight_policy(OvernightPolicy::WrapToNextDay);

    lot.park(&bike, on_date(date, "22:30").unwrap()).unwrap();
    let receipt = lot.exit(&bike, on_date(date, "02:45").unwrap()).unwrap();

    assert_eq!(receipt.duration_hours, 4);
    assert_eq!(format_currency(receipt.fee, "$"), "$40.00");
}

// =============================================================================
// Capacity and lookup failures
// =============================================================================

#[test]
fn test_full_lot_denies_then_recovers() {
    let lot = lot_with(2, Box::new(WeekdayStrategy));
    let a = vehicle("A", VehicleType::Car);
    let b = vehicle("B", VehicleType::Bike);
    let c = vehicle("C", VehicleType::Truck);

    lot.park(&a, clock(9, 0)).unwrap();
    lot.park(&b, clock(9, 1)).unwrap();

    for minute in 2..10 {
        let err = lot.park(&c, clock(9, minute)).unwrap_err();
        assert_eq!(err, ParkingError::LotFull { capacity: 2 });
        assert_eq!(lot.available_spots(), 0);
        assert_eq!(lot.active_tickets().len(), 2);
    }

    let receipt = lot.exit(&a, clock(10, 0)).unwrap();
    assert_eq!(receipt.fee, dec!(5));

    let parked = lot.park(&c, clock(10, 5)).unwrap();
    assert_eq!(parked.spot_id, 1);
}

#[test]
fn test_error_messages_for_operators() {
    let lot = lot_with(1, Box::new(WeekendStrategy));
    let a = vehicle("A", VehicleType::Car);
    let b = vehicle("B", VehicleType::Car);

    lot.park(&a, clock(9, 0)).unwrap();
    let full = lot.park(&b, clock(9, 0)).unwrap_err();
    assert!(full.to_string().starts_with("Parking Lot is Full. Entry denied."));

    let missing = lot.exit(&b, clock(10, 0)).unwrap_err();
    assert!(missing.to_string().starts_with("Vehicle not found"));
}

#[test]
fn test_rejected_overnight_keeps_ticket_open() {
    let lot = lot_with(5, Box::new(WeekdayStrategy));
    let a = vehicle("LATE", VehicleType::Car);

    lot.park(&a, clock(23, 30)).unwrap();
    assert!(matches!(
        lot.exit(&a, clock(0, 30)),
        Err(ParkingError::ExitBeforeEntry { .. })
    ));

    let receipt = lot.exit(&a, clock(23, 45)).unwrap();
    assert_eq!(receipt.duration_hours, 0);
}

// =============================================================================
// Pass lookup alongside the lot
// =============================================================================

#[test]
fn test_pass_checked_before_parking() {
    let lot = lot_with(3, Box::new(WeekdayStrategy));
    let holder = vehicle("HOLDER", VehicleType::Car);
    let pass = MonthlyPass::new("PASS-6", "HOLDER", 6).unwrap();

    let month = 6;
    if pass.covers(&holder, month) {
        lot.park(&holder, clock(8, 0)).unwrap();
    }

    assert!(lot.active_ticket("HOLDER").is_some());
    let receipt = lot.exit(&holder, clock(9, 0)).unwrap();
    assert_eq!(receipt.fee, dec!(5));
}

// =============================================================================
// Fixtures
// =============================================================================

#[test]
#[should_panic(expected = "fixture clock must be a valid time of day")]
fn test_invalid_fixture_clock_fails_loudly() {
    clock(24, 0);
}
