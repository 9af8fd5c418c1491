use crate::error::LedgerError;
use std::env;

pub const DEFAULT_ABSENCE_ALERT_DAYS: u32 = 3;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub absence_alert_days: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, LedgerError> {
        dotenv::dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:jornal.db".to_string());

        let absence_alert_days = match env::var("ABSENCE_ALERT_DAYS") {
            Ok(raw) => {
                let days: u32 = raw.parse().map_err(|_| {
                    LedgerError::Config(format!("ABSENCE_ALERT_DAYS must be a number, got '{raw}'"))
                })?;
                if days == 0 {
                    return Err(LedgerError::Config(
                        "ABSENCE_ALERT_DAYS must be at least 1".to_string(),
                    ));
                }
                days
            }
            Err(_) => DEFAULT_ABSENCE_ALERT_DAYS,
        };

        Ok(Config {
            database_url,
            absence_alert_days,
        })
    }
}
