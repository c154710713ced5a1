//! Concurrency tests
//!
//! A lot shared between threads must never oversubscribe spots or hand the
//! same spot to two active tickets.

use integration_tests::{clock, lot_with, vehicle};
use parking_lot::Mutex;
use parking_service::{ParkingError, VehicleType, WeekdayStrategy};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

#[test]
fn test_concurrent_parks_respect_capacity() {
    let lot = Arc::new(lot_with(16, Box::new(WeekdayStrategy)));
    let granted = Arc::new(Mutex::new(Vec::new()));
    let denied = Arc::new(Mutex::new(0usize));

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let lot = lot.clone();
            let granted = granted.clone();
            let denied = denied.clone();
            thread::spawn(move || {
                for i in 0..5 {
                    let v = vehicle(&format!("T{}-{}", t, i), VehicleType::Car);
                    match lot.park(&v, clock(8, 0)) {
                        Ok(receipt) => granted.lock().push(receipt.spot_id),
                        Err(ParkingError::LotFull { .. }) => *denied.lock() += 1,
                        Err(e) => panic!("unexpected error: {}", e),
                    }
                }
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }

    let granted = granted.lock();
    assert_eq!(granted.len(), 16);
    assert_eq!(*denied.lock(), 40 - 16);

    let unique: HashSet<u32> = granted.iter().copied().collect();
    assert_eq!(unique.len(), 16);
    assert!(unique.iter().all(|spot| (1..=16).contains(spot)));
    assert_eq!(lot.available_spots(), 0);
}

#[test]
fn test_concurrent_park_exit_cycles_stay_balanced() {
    let lot = Arc::new(lot_with(4, Box::new(WeekdayStrategy)));

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let lot = lot.clone();
            thread::spawn(move || {
                let v = vehicle(&format!("CYCLE-{}", t), VehicleType::Bike);
                for _ in 0..200 {
                    lot.park(&v, clock(9, 0)).unwrap();
                    let receipt = lot.exit(&v, clock(11, 0)).unwrap();
                    assert_eq!(receipt.duration_hours, 2);
                }
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(lot.available_spots(), 4);
    assert!(lot.active_tickets().is_empty());
}

#[test]
fn test_concurrent_active_spots_unique() {
    let lot = Arc::new(lot_with(6, Box::new(WeekdayStrategy)));

    let handles: Vec<_> = (0..6)
        .map(|t| {
            let lot = lot.clone();
            thread::spawn(move || {
                let v = vehicle(&format!("U-{}", t), VehicleType::Truck);
                for _ in 0..100 {
                    lot.park(&v, clock(7, 0)).unwrap();
                    let spots: Vec<u32> =
                        lot.active_tickets().iter().map(|t| t.spot_id()).collect();
                    let unique: HashSet<u32> = spots.iter().copied().collect();
                    assert_eq!(spots.len(), unique.len());
                    lot.exit(&v, clock(8, 0)).unwrap();
                }
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(lot.status().occupied_spots, 0);
}
