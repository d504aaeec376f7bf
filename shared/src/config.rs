use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    BETTING_WINDOW_SECS, CHIP_VALUES, DEFAULT_CHIP, HISTORY_LEN, ROUND_RESET_DELAY_MS,
    SPIN_DURATION_MS, STARTING_BALANCE,
};
use crate::wheel_animation::longest_spin;

/// Table settings. Missing fields fall back to the defaults when deserialized.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TableConfig {
    pub starting_balance: u64,
    pub betting_window_secs: u64,
    pub spin_duration_ms: u64,
    pub round_reset_delay_ms: u64,
    pub default_chip: u64,
    pub chip_values: Vec<u64>,
    pub history_len: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            starting_balance: STARTING_BALANCE,
            betting_window_secs: BETTING_WINDOW_SECS,
            spin_duration_ms: SPIN_DURATION_MS,
            round_reset_delay_ms: ROUND_RESET_DELAY_MS,
            default_chip: DEFAULT_CHIP,
            chip_values: CHIP_VALUES.to_vec(),
            history_len: HISTORY_LEN,
        }
    }
}

impl TableConfig {
    pub fn betting_window(&self) -> Duration {
        Duration::from_secs(self.betting_window_secs)
    }

    pub fn spin_duration(&self) -> Duration {
        Duration::from_millis(self.spin_duration_ms)
    }

    pub fn round_reset_delay(&self) -> Duration {
        Duration::from_millis(self.round_reset_delay_ms)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.betting_window_secs == 0 {
            return Err("betting window must be at least one second".to_string());
        }
        let floor = longest_spin();
        if self.spin_duration() < floor {
            return Err(format!(
                "spin duration must be at least {} ms so the ball settles before payout",
                floor.as_millis()
            ));
        }
        if self.chip_values.is_empty() || self.chip_values.contains(&0) {
            return Err("chip values must be non-empty and positive".to_string());
        }
        if !self.chip_values.contains(&self.default_chip) {
            return Err(format!("default chip {} is not one of the chip values", self.default_chip));
        }
        if self.history_len == 0 {
            return Err("history must keep at least one number".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = TableConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.starting_balance, 10_000);
        assert_eq!(config.betting_window(), Duration::from_secs(30));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: TableConfig = serde_json::from_str(r#"{"starting_balance": 500}"#).unwrap();
        assert_eq!(config.starting_balance, 500);
        assert_eq!(config.history_len, HISTORY_LEN);
    }

    #[test]
    fn test_spin_must_outlast_the_animation() {
        let short = TableConfig {
            spin_duration_ms: 1000,
            ..TableConfig::default()
        };
        assert!(short.validate().is_err());

        let floor = longest_spin().as_millis() as u64;
        let at_floor = TableConfig {
            spin_duration_ms: floor,
            ..TableConfig::default()
        };
        assert_eq!(at_floor.validate(), Ok(()));
        let below = TableConfig {
            spin_duration_ms: floor - 1,
            ..TableConfig::default()
        };
        assert!(below.validate().is_err());
    }

    #[test]
    fn test_rejects_unknown_default_chip() {
        let config = TableConfig {
            default_chip: 7,
            ..TableConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
