pub mod bets;
pub mod config;
pub mod constants;
pub mod error;
pub mod payout;
pub mod pockets;
pub mod shared_roulette_game;
pub mod validation;
pub mod wheel_animation;

pub use bets::{Bet, BetDraft, BetLedger, BetType};
pub use config::TableConfig;
pub use error::BetError;
pub use shared_roulette_game::{GamePhase, GameState, Notice, NoticeLevel, RouletteGame};
