use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use proptest::prelude::*;
use shared::bets::{Bet, BetDraft};
use shared::payout::{bet_payout, multiplier, net_result};
use shared::shared_roulette_game::{GamePhase, NumberDraw, RouletteGame};
use shared::validation::validate_draft;
use shared::TableConfig;

/// Draws whatever the test last put in the cell.
struct NextNumber(Rc<Cell<u8>>);

impl NumberDraw for NextNumber {
    fn draw(&mut self) -> u8 {
        self.0.get()
    }
}

#[derive(Debug, Clone)]
enum Command {
    Bet { spot: usize, chip: usize },
    Clear,
    Spin(u8),
    Wait(u64),
}

fn spots() -> Vec<BetDraft> {
    let mut spots: Vec<BetDraft> = (0..=36).map(BetDraft::straight).collect();
    spots.extend([BetDraft::split(0, 1), BetDraft::split(8, 11), BetDraft::split(35, 36)]);
    spots.extend((1..=12).map(BetDraft::street));
    spots.extend([BetDraft::corner(1), BetDraft::corner(17), BetDraft::corner(32)]);
    spots.extend((1..=11).map(BetDraft::line));
    spots.extend((1..=3).map(BetDraft::column));
    spots.extend((1..=3).map(BetDraft::dozen));
    spots.extend([
        BetDraft::red(),
        BetDraft::black(),
        BetDraft::odd(),
        BetDraft::even(),
        BetDraft::low(),
        BetDraft::high(),
    ]);
    spots
}

fn command() -> impl Strategy<Value = Command> {
    let spot_count = spots().len();
    let chip_count = TableConfig::default().chip_values.len();
    prop_oneof![
        4 => (0..spot_count, 0..chip_count).prop_map(|(spot, chip)| Command::Bet { spot, chip }),
        1 => Just(Command::Clear),
        2 => (0u8..=36).prop_map(Command::Spin),
        2 => (0u64..40_000).prop_map(Command::Wait),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

    #[test]
    fn money_is_conserved_across_rounds(commands in prop::collection::vec(command(), 1..80)) {
        let config = TableConfig::default();
        let spots = spots();
        let next = Rc::new(Cell::new(0u8));
        let mut game = RouletteGame::with_draw(config.clone(), NextNumber(Rc::clone(&next))).unwrap();

        let mut settled_net: i64 = 0;
        let mut in_flight: Option<(Vec<Bet>, u8)> = None;
        let mut last_settled: Option<u8> = None;

        for command in commands {
            match command {
                Command::Bet { spot, chip } => {
                    game.select_chip_value(config.chip_values[chip]).unwrap();
                    let _ = game.place_bet(spots[spot].clone());
                }
                Command::Clear => {
                    let _ = game.clear_bets();
                }
                Command::Spin(number) => {
                    next.set(number);
                    let bets = game.state().current_bets.bets().to_vec();
                    if let Ok(ticket) = game.spin() {
                        prop_assert_eq!(ticket.winning_number, number);
                        in_flight = Some((bets, number));
                    }
                }
                Command::Wait(ms) => {
                    game.advance(Duration::from_millis(ms));
                    if game.state().phase != GamePhase::Spinning {
                        if let Some((bets, number)) = in_flight.take() {
                            settled_net += net_result(&bets, number);
                            last_settled = Some(number);
                        }
                    }
                }
            }

            let state = game.state();
            let on_table = state.current_bets.total_staked() as i64;
            prop_assert_eq!(
                state.balance as i64 + on_table,
                config.starting_balance as i64 + settled_net
            );
            prop_assert!(state.last_numbers.len() <= config.history_len);
            prop_assert_eq!(state.last_numbers.first().copied(), last_settled);
            prop_assert_eq!(state.can_bet(), state.phase == GamePhase::Betting);
        }
    }

    #[test]
    fn clearing_restores_the_balance(picks in prop::collection::vec(0usize..100, 1..20)) {
        let spots = spots();
        let mut game = RouletteGame::with_draw(TableConfig::default(), NextNumber(Rc::new(Cell::new(0)))).unwrap();
        for pick in picks {
            game.place_bet(spots[pick % spots.len()].clone()).unwrap();
        }
        let staked = game.state().current_bets.total_staked();
        prop_assert_eq!(game.clear_bets(), Ok(staked));
        prop_assert_eq!(game.state().balance, 10_000);
        prop_assert!(game.state().current_bets.is_empty());
    }

    #[test]
    fn payout_matches_coverage(spot in 0usize..100, number in 0u8..=36, amount in 1u64..=1_000) {
        let spots = spots();
        let draft = spots[spot % spots.len()].clone();
        prop_assert!(validate_draft(&draft).is_ok());

        let bet = draft.with_amount(amount);
        let paid = bet_payout(&bet, number);
        if bet.covers(number) {
            prop_assert_eq!(paid, amount * multiplier(bet.bet_type));
        } else {
            prop_assert_eq!(paid, 0);
        }
        if number == 0 && bet.bet_type.is_even_money() {
            prop_assert_eq!(paid, 0);
        }
    }
}
