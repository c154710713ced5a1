use crate::lot::OvernightPolicy;
use crate::pricing::VehicleRates;
use anyhow::Context;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use rust_decimal::Decimal;
use serde::Deserialize;
use shared::LogFormat;
use std::env;
use std::path::{Path, PathBuf};

pub const CONFIG_PATH_VAR: &str = "PARKING_CONFIG";
const DEFAULT_CONFIG_FILE: &str = "parking.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct PricingSettings {
    pub currency_symbol: String,
    pub car_rate: Decimal,
    pub bike_rate: Decimal,
    pub truck_rate: Decimal,
}

impl PricingSettings {
    pub fn vehicle_rates(&self) -> VehicleRates {
        VehicleRates {
            car: self.car_rate,
            bike: self.bike_rate,
            truck: self.truck_rate,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub total_spots: u32,
    pub overnight: String,
    pub log_format: String,
    pub pricing: PricingSettings,
}

impl Settings {
    /// Load `parking.toml` (or the file named by `PARKING_CONFIG`) when present,
    /// then apply `PARKING_*` environment overrides, e.g. `PARKING_TOTAL_SPOTS=50`
    /// or `PARKING_PRICING__CAR_RATE=4`.
    pub fn load() -> anyhow::Result<Self> {
        let path = env::var(CONFIG_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));

        let builder = Self::defaults()?
            .add_source(File::from(path.as_path()).required(false))
            .add_source(
                Environment::with_prefix("PARKING")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::build(builder)
    }

    /// Load from one file on top of the defaults, ignoring the environment.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let builder = Self::defaults()?.add_source(File::from(path).required(true));
        Self::build(builder)
    }

    fn defaults() -> anyhow::Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("total_spots", 300)?
            .set_default("overnight", "wrap")?
            .set_default("log_format", "pretty")?
            .set_default("pricing.currency_symbol", "$")?
            .set_default("pricing.car_rate", "5")?
            .set_default("pricing.bike_rate", "2")?
            .set_default("pricing.truck_rate", "15")?)
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> anyhow::Result<Self> {
        let settings: Settings = builder
            .build()
            .context("failed to read parking configuration")?
            .try_deserialize()
            .context("invalid parking configuration")?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.total_spots == 0 {
            anyhow::bail!("total_spots must be positive");
        }
        self.overnight_policy()?;
        self.log_format()?;
        let rates = self.pricing.vehicle_rates();
        if [rates.car, rates.bike, rates.truck]
            .iter()
            .any(|rate| rate.is_sign_negative())
        {
            anyhow::bail!("pricing rates must not be negative");
        }
        Ok(())
    }

    pub fn overnight_policy(&self) -> anyhow::Result<OvernightPolicy> {
        Ok(self.overnight.parse()?)
    }

    pub fn log_format(&self) -> anyhow::Result<LogFormat> {
        Ok(self.log_format.parse()?)
    }
}
