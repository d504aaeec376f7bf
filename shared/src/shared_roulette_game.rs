use std::time::Duration;

use log::{debug, info, warn};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::bets::{BetDraft, BetLedger, BetType};
use crate::config::TableConfig;
use crate::constants::POCKET_COUNT;
use crate::error::BetError;
use crate::payout::total_payout;
use crate::validation::validate_draft;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Betting window closed, no spin in flight.
    Idle,
    Betting,
    Spinning,
    /// Result on display until the next round opens.
    Settled,
}

/// Represents the current state of the roulette table
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GameState {
    pub balance: u64,
    pub current_bets: BetLedger,
    /// Most recent first.
    pub last_numbers: Vec<u8>,
    pub phase: GamePhase,
    pub winning_number: Option<u8>,
    /// Whole seconds left in the betting window, rounded up.
    pub betting_time_left: u64,
    pub selected_chip: u64,
}

impl GameState {
    pub fn can_bet(&self) -> bool {
        self.phase == GamePhase::Betting
    }

    pub fn is_spinning(&self) -> bool {
        self.phase == GamePhase::Spinning
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

/// Advisory messages for the player, emitted in order and never answered.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Notice {
    BetAccepted { bet_type: BetType, position: String, amount: u64 },
    Rejected(BetError),
    BetsCleared { refunded: u64 },
    SpinStarted,
    BettingClosed,
    BettingOpened,
    RoundWon { winning_number: u8, payout: u64 },
    RoundLost { winning_number: u8 },
}

impl Notice {
    pub fn level(&self) -> NoticeLevel {
        match self {
            Notice::BetAccepted { .. } | Notice::RoundWon { .. } => NoticeLevel::Success,
            Notice::BetsCleared { .. } | Notice::SpinStarted | Notice::BettingOpened => NoticeLevel::Info,
            Notice::BettingClosed => NoticeLevel::Warning,
            Notice::Rejected(_) | Notice::RoundLost { .. } => NoticeLevel::Error,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Notice::BetAccepted { position, amount, .. } => format!("Bet of ${} on {}", amount, position),
            Notice::Rejected(reason) => format!("You can't do that right now: {}", reason),
            Notice::BetsCleared { refunded } => format!("Bets cleared, ${} returned", refunded),
            Notice::SpinStarted => "No more bets, the wheel is spinning".to_string(),
            Notice::BettingClosed => "No more bets!".to_string(),
            Notice::BettingOpened => "Place your bets".to_string(),
            Notice::RoundWon { winning_number, payout } => {
                format!("You won ${}! Number: {}", payout, winning_number)
            }
            Notice::RoundLost { winning_number } => format!("You lost. Winning number: {}", winning_number),
        }
    }
}

/// Source of winning numbers.
pub trait NumberDraw {
    /// A number in `0..=36`.
    fn draw(&mut self) -> u8;
}

/// Uniform draw over the 37 pockets.
#[derive(Debug, Clone)]
pub struct RandomDraw<R = SmallRng> {
    rng: R,
}

impl RandomDraw<SmallRng> {
    pub fn from_entropy() -> Self {
        Self::new(SmallRng::from_entropy())
    }
}

impl<R: Rng> RandomDraw<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> NumberDraw for RandomDraw<R> {
    fn draw(&mut self) -> u8 {
        self.rng.gen_range(0..POCKET_COUNT)
    }
}

/// Handed back by a successful [`RouletteGame::spin`] so the wheel can start
/// animating toward the already-decided number.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct SpinTicket {
    pub round: u64,
    pub winning_number: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Deadline {
    CloseBetting,
    ResolveSpin,
    OpenRound,
}

#[derive(Debug, Clone, Copy)]
struct Timer {
    deadline: Deadline,
    remaining: Duration,
}

/// Owns the table and is the only thing that mutates it.
///
/// The game never reads a clock. The host calls [`advance`](Self::advance)
/// with elapsed time and the game fires whichever of its own deadlines fall
/// inside that span (betting countdown, spin resolution, next round).
pub struct RouletteGame<D = RandomDraw> {
    config: TableConfig,
    state: GameState,
    draw: D,
    timer: Option<Timer>,
    pending_number: Option<u8>,
    round: u64,
    notices: Vec<Notice>,
}

impl RouletteGame<RandomDraw> {
    pub fn new(config: TableConfig) -> Result<Self, String> {
        Self::with_draw(config, RandomDraw::from_entropy())
    }
}

impl Default for RouletteGame<RandomDraw> {
    fn default() -> Self {
        Self::build(TableConfig::default(), RandomDraw::from_entropy())
    }
}

impl<D: NumberDraw> RouletteGame<D> {
    /// Opens the first round. Fails when `config` does not pass
    /// [`TableConfig::validate`].
    pub fn with_draw(config: TableConfig, draw: D) -> Result<Self, String> {
        config.validate()?;
        Ok(Self::build(config, draw))
    }

    fn build(config: TableConfig, draw: D) -> Self {
        let state = GameState {
            balance: config.starting_balance,
            current_bets: BetLedger::new(),
            last_numbers: Vec::with_capacity(config.history_len),
            phase: GamePhase::Betting,
            winning_number: None,
            betting_time_left: config.betting_window_secs,
            selected_chip: config.default_chip,
        };
        let timer = Some(Timer {
            deadline: Deadline::CloseBetting,
            remaining: config.betting_window(),
        });
        Self {
            config,
            state,
            draw,
            timer,
            pending_number: None,
            round: 0,
            notices: Vec::new(),
        }
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Number of spins started so far.
    pub fn round(&self) -> u64 {
        self.round
    }

    /// Hands over everything emitted since the last call, oldest first.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn select_chip_value(&mut self, amount: u64) -> Result<(), BetError> {
        if !self.config.chip_values.contains(&amount) {
            return self.reject(BetError::InvalidChip(amount));
        }
        self.state.selected_chip = amount;
        Ok(())
    }

    /// Puts the selected chip on `draft`.
    pub fn place_bet(&mut self, draft: BetDraft) -> Result<(), BetError> {
        let stake = self.state.selected_chip;
        match self.state.phase {
            GamePhase::Spinning => return self.reject(BetError::SpinInProgress),
            GamePhase::Idle | GamePhase::Settled => return self.reject(BetError::BettingClosed),
            GamePhase::Betting => {}
        }
        if stake > self.state.balance {
            return self.reject(BetError::InsufficientBalance {
                stake,
                balance: self.state.balance,
            });
        }
        if let Err(err) = validate_draft(&draft) {
            return self.reject(err);
        }

        self.state.balance -= stake;
        info!("bet of {} on {} ({})", stake, draft.position, draft.bet_type);
        self.emit(Notice::BetAccepted {
            bet_type: draft.bet_type,
            position: draft.position.clone(),
            amount: stake,
        });
        self.state.current_bets.push(draft.with_amount(stake));
        Ok(())
    }

    /// Returns every stake of the round to the balance. Yields the refund.
    pub fn clear_bets(&mut self) -> Result<u64, BetError> {
        if self.state.is_spinning() {
            return self.reject(BetError::SpinInProgress);
        }
        if self.state.current_bets.is_empty() {
            return Ok(0);
        }

        let refunded: u64 = self.state.current_bets.take().iter().map(|bet| bet.amount).sum();
        self.state.balance += refunded;
        info!("cleared bets, refunded {}", refunded);
        self.emit(Notice::BetsCleared { refunded });

        if self.state.phase == GamePhase::Idle {
            self.schedule(Deadline::OpenRound, self.config.round_reset_delay());
        }
        Ok(refunded)
    }

    /// Closes betting and decides the outcome. Payout happens once the spin
    /// duration has elapsed.
    pub fn spin(&mut self) -> Result<SpinTicket, BetError> {
        if self.state.is_spinning() {
            return self.reject(BetError::SpinInProgress);
        }
        if self.state.current_bets.is_empty() {
            return self.reject(BetError::NoBets);
        }

        let winning_number = self.draw.draw() % POCKET_COUNT;
        self.pending_number = Some(winning_number);
        self.round += 1;
        self.state.phase = GamePhase::Spinning;
        self.state.betting_time_left = 0;
        self.schedule(Deadline::ResolveSpin, self.config.spin_duration());

        info!(
            "round {} spinning with {} bets totalling {}",
            self.round,
            self.state.current_bets.len(),
            self.state.current_bets.total_staked()
        );
        self.emit(Notice::SpinStarted);

        Ok(SpinTicket {
            round: self.round,
            winning_number,
        })
    }

    /// Feeds elapsed wall-clock time to the table's deadlines.
    ///
    /// Idle rounds with an empty table repeat identically, so whole
    /// close/reopen cycles inside a long gap are skipped without notices.
    pub fn advance(&mut self, elapsed: Duration) {
        let mut elapsed = elapsed;
        while let Some(timer) = self.timer.as_mut() {
            if timer.deadline == Deadline::OpenRound
                && self.state.phase == GamePhase::Idle
                && self.state.current_bets.is_empty()
                && elapsed > timer.remaining
            {
                let cycle = (self.config.betting_window() + self.config.round_reset_delay()).as_nanos();
                let beyond = (elapsed - timer.remaining).as_nanos();
                let skipped = beyond / cycle;
                if skipped > 0 {
                    debug!("skipping {} idle rounds", skipped);
                    elapsed = timer.remaining + Duration::from_nanos((beyond % cycle) as u64);
                }
            }
            if elapsed < timer.remaining {
                timer.remaining -= elapsed;
                break;
            }
            elapsed -= timer.remaining;
            let deadline = timer.deadline;
            self.timer = None;
            self.fire(deadline);
        }
        self.refresh_countdown();
    }

    fn fire(&mut self, deadline: Deadline) {
        debug!("deadline reached: {:?}", deadline);
        match deadline {
            Deadline::CloseBetting => self.close_betting(),
            Deadline::ResolveSpin => self.settle(),
            Deadline::OpenRound => self.open_round(),
        }
    }

    fn close_betting(&mut self) {
        self.state.phase = GamePhase::Idle;
        self.state.betting_time_left = 0;
        self.emit(Notice::BettingClosed);

        // Nothing on the table means nothing can be spun; start over.
        if self.state.current_bets.is_empty() {
            self.schedule(Deadline::OpenRound, self.config.round_reset_delay());
        }
    }

    fn settle(&mut self) {
        let Some(winning_number) = self.pending_number.take() else {
            warn!("spin resolved without a drawn number");
            self.open_round();
            return;
        };

        let bets = self.state.current_bets.take();
        let payout = total_payout(&bets, winning_number);
        self.state.balance = self.state.balance.saturating_add(payout);
        self.state.winning_number = Some(winning_number);
        self.state.last_numbers.insert(0, winning_number);
        self.state.last_numbers.truncate(self.config.history_len);
        self.state.phase = GamePhase::Settled;

        info!(
            "round {} landed on {}: {} bets paid {}, balance {}",
            self.round,
            winning_number,
            bets.len(),
            payout,
            self.state.balance
        );
        if payout > 0 {
            self.emit(Notice::RoundWon { winning_number, payout });
        } else {
            self.emit(Notice::RoundLost { winning_number });
        }

        self.schedule(Deadline::OpenRound, self.config.round_reset_delay());
    }

    fn open_round(&mut self) {
        self.state.phase = GamePhase::Betting;
        self.state.betting_time_left = self.config.betting_window_secs;
        self.schedule(Deadline::CloseBetting, self.config.betting_window());
        self.emit(Notice::BettingOpened);
    }

    fn schedule(&mut self, deadline: Deadline, after: Duration) {
        self.timer = Some(Timer {
            deadline,
            remaining: after,
        });
    }

    fn refresh_countdown(&mut self) {
        if let Some(Timer {
            deadline: Deadline::CloseBetting,
            remaining,
        }) = self.timer
        {
            self.state.betting_time_left = ((remaining.as_millis() + 999) / 1000) as u64;
        }
    }

    fn reject<T>(&mut self, err: BetError) -> Result<T, BetError> {
        warn!("rejected: {}", err);
        self.notices.push(Notice::Rejected(err.clone()));
        Err(err)
    }

    fn emit(&mut self, notice: Notice) {
        debug!("notice: {}", notice.message());
        self.notices.push(notice);
    }
}
