use crate::bets::{Bet, BetType};

/// Total returned per unit staked on a winning bet, stake included.
///
/// A straight-up win returns 36 times the stake (35 to 1 plus the chip).
pub fn multiplier(bet_type: BetType) -> u64 {
    match bet_type {
        BetType::Straight => 36,
        BetType::Split => 18,
        BetType::Street => 12,
        BetType::Corner => 9,
        BetType::Line => 6,
        BetType::Column | BetType::Dozen => 3,
        BetType::Red
        | BetType::Black
        | BetType::Odd
        | BetType::Even
        | BetType::Low
        | BetType::High => 2,
    }
}

pub fn bet_payout(bet: &Bet, winning_number: u8) -> u64 {
    if bet.covers(winning_number) {
        bet.amount.saturating_mul(multiplier(bet.bet_type))
    } else {
        0
    }
}

/// Credit owed to the player for a round.
pub fn total_payout(bets: &[Bet], winning_number: u8) -> u64 {
    bets.iter()
        .map(|bet| bet_payout(bet, winning_number))
        .fold(0u64, u64::saturating_add)
}

/// Payout minus everything staked; negative when the round lost money.
pub fn net_result(bets: &[Bet], winning_number: u8) -> i64 {
    let staked: u64 = bets.iter().map(|bet| bet.amount).sum();
    total_payout(bets, winning_number) as i64 - staked as i64
}
