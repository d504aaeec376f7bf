use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bets::BetType;

/// Why a player command was turned down. Rejections never mutate the table.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BetError {
    #[error("betting is closed for this round")]
    BettingClosed,
    #[error("the wheel is already spinning")]
    SpinInProgress,
    #[error("stake of {stake} exceeds balance of {balance}")]
    InsufficientBalance { stake: u64, balance: u64 },
    #[error("place at least one bet before spinning")]
    NoBets,
    #[error("chip value {0} is not available at this table")]
    InvalidChip(u64),
    #[error("number {0} is not on the wheel")]
    NumberOutOfRange(u8),
    #[error("numbers {numbers:?} do not form a {bet_type} bet")]
    InvalidNumbers { bet_type: BetType, numbers: Vec<u8> },
}
