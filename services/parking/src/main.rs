use anyhow::Context;
use chrono::Local;
use parking_service::input::{on_date, parse_vehicle, STRATEGY_PROMPT};
use parking_service::{ParkingLot, Settings, StrategyKind};
use shared::logger::{init_logger, log_record};
use std::io::{self, BufRead, Write};

fn main() -> anyhow::Result<()> {
    let settings = Settings::load()?;
    init_logger(settings.log_format()?);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let vehicle_type = prompt(&mut lines, "Vehicle type (car/bike/truck): ")?;
    let license_plate = prompt(&mut lines, "License plate: ")?;
    let vehicle = parse_vehicle(&vehicle_type, &license_plate)?;

    let today = Local::now().date_naive();
    let entry_time = on_date(today, &prompt(&mut lines, "Entry time (HH:MM): ")?)?;
    let exit_time = on_date(today, &prompt(&mut lines, "Exit time (HH:MM): ")?)?;

    let strategy: StrategyKind = prompt(&mut lines, STRATEGY_PROMPT)?.parse()?;

    let lot = ParkingLot::new(
        settings.total_spots,
        strategy.build(&settings.pricing.vehicle_rates()),
    )?
    .with_overnight_policy(settings.overnight_policy()?);

    match lot.park(&vehicle, entry_time) {
        Ok(receipt) => println!("{}", receipt),
        Err(e) => {
            println!("Error: {}", e);
            return Ok(());
        }
    }

    match lot.exit(&vehicle, exit_time) {
        Ok(receipt) => {
            log_record("exit", &receipt.masked_record());
            println!();
            println!("Duration : {}", receipt.duration_label());
            println!("Fee      : {}", receipt.fee_label(&settings.pricing.currency_symbol));
        }
        Err(e) => println!("Error: {}", e),
    }

    Ok(())
}

fn prompt<B: BufRead>(lines: &mut io::Lines<B>, label: &str) -> anyhow::Result<String> {
    print!("{}", label);
    io::stdout().flush()?;
    let line = lines
        .next()
        .context("input closed before all answers were given")??;
    Ok(line.trim().to_string())
}
