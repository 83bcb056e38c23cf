use std::env;

use anyhow::{Context, Result};
use dotenvy::dotenv;

use crate::utils::timeparse;

/// Shift window the punctuality rules are evaluated against. Supplied by the
/// deployment, not persisted with the records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftConfig {
    /// Minute-of-day the shift starts.
    pub shift_start: u16,
    /// Minute-of-day the shift ends.
    pub shift_end: u16,
    /// Minutes after shift start during which a check-in still counts as on time.
    pub grace_minutes: u16,
}

impl Default for ShiftConfig {
    /// 09:00-17:00 with a 10 minute grace period.
    fn default() -> Self {
        Self {
            shift_start: 9 * 60,
            shift_end: 17 * 60,
            grace_minutes: 10,
        }
    }
}

impl ShiftConfig {
    /// Read `SHIFT_START` / `SHIFT_END` (HH:MM) and `GRACE_MINUTES` from the
    /// environment. Unset variables fall back to the defaults; set but
    /// malformed values are an error.
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let defaults = Self::default();
        Ok(Self {
            shift_start: env_minutes("SHIFT_START", defaults.shift_start)?,
            shift_end: env_minutes("SHIFT_END", defaults.shift_end)?,
            grace_minutes: match env::var("GRACE_MINUTES") {
                Ok(raw) => raw
                    .trim()
                    .parse()
                    .with_context(|| format!("GRACE_MINUTES must be a number of minutes, got {raw:?}"))?,
                Err(_) => defaults.grace_minutes,
            },
        })
    }

    /// Latest minute-of-day that still counts as on time.
    pub fn cutoff(&self) -> u32 {
        u32::from(self.shift_start) + u32::from(self.grace_minutes)
    }
}

fn env_minutes(key: &str, default: u16) -> Result<u16> {
    match env::var(key) {
        Ok(raw) => timeparse::parse_minutes(&raw)
            .with_context(|| format!("{key} must be an HH:MM time of day, got {raw:?}")),
        Err(_) => Ok(default),
    }
}
