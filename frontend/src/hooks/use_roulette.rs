use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Interval;
use shared::bets::BetDraft;
use shared::shared_roulette_game::SpinTicket;
use shared::{GameState, RouletteGame, TableConfig};
use yew::prelude::*;

use super::use_notices::dispatch_notice;

/// How often wall-clock time is fed to the table.
const TICK_MS: u32 = 100;

/// Shared access to the table for the roulette page.
///
/// Commands run against the controller and then publish the new snapshot and
/// any notices it produced.
#[derive(Clone)]
pub struct RouletteHandle {
    game: Rc<RefCell<RouletteGame>>,
    snapshot: UseStateHandle<GameState>,
    ticket: UseStateHandle<Option<SpinTicket>>,
    notice_seq: Rc<Cell<u32>>,
}

impl PartialEq for RouletteHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.game, &other.game) && *self.snapshot == *other.snapshot && *self.ticket == *other.ticket
    }
}

impl RouletteHandle {
    pub fn state(&self) -> &GameState {
        &self.snapshot
    }

    /// The most recent spin, used to drive the wheel.
    pub fn ticket(&self) -> Option<SpinTicket> {
        *self.ticket
    }

    pub fn config(&self) -> TableConfig {
        self.game.borrow().config().clone()
    }

    pub fn place_bet(&self, draft: BetDraft) {
        let _ = self.game.borrow_mut().place_bet(draft);
        self.publish();
    }

    pub fn clear_bets(&self) {
        let _ = self.game.borrow_mut().clear_bets();
        self.publish();
    }

    pub fn select_chip(&self, amount: u64) {
        let _ = self.game.borrow_mut().select_chip_value(amount);
        self.publish();
    }

    pub fn spin(&self) {
        let result = self.game.borrow_mut().spin();
        if let Ok(ticket) = result {
            self.ticket.set(Some(ticket));
        }
        self.publish();
    }

    fn publish(&self) {
        publish(&self.game, &self.snapshot, &self.notice_seq);
    }
}

fn publish(game: &RefCell<RouletteGame>, snapshot: &UseStateHandle<GameState>, seq: &Cell<u32>) {
    let (state, notices) = {
        let mut game = game.borrow_mut();
        let notices = game.drain_notices();
        (game.state().clone(), notices)
    };
    for notice in &notices {
        let id = seq.get().wrapping_add(1);
        seq.set(id);
        dispatch_notice(id, notice);
    }
    snapshot.set(state);
}

#[hook]
pub fn use_roulette() -> RouletteHandle {
    let game = use_mut_ref(|| {
        RouletteGame::new(crate::config::load_table_config()).unwrap_or_else(|err| {
            log::warn!("table config rejected, using defaults: {}", err);
            RouletteGame::default()
        })
    });
    let snapshot = use_state_eq(|| game.borrow().state().clone());
    let ticket = use_state_eq(|| None::<SpinTicket>);
    let notice_seq = use_memo((), |_| Cell::new(0u32));

    // Keep the countdown and spin resolution moving.
    {
        let game = game.clone();
        let snapshot = snapshot.clone();
        let notice_seq = notice_seq.clone();
        use_effect_with((), move |_| {
            let last_tick = Cell::new(js_sys::Date::now());
            let interval = Interval::new(TICK_MS, move || {
                let now = js_sys::Date::now();
                let elapsed_ms = (now - last_tick.replace(now)).max(0.0);
                game.borrow_mut().advance(Duration::from_secs_f64(elapsed_ms / 1000.0));
                publish(&game, &snapshot, &notice_seq);
            });

            move || drop(interval)
        });
    }

    RouletteHandle {
        game,
        snapshot,
        ticket,
        notice_seq,
    }
}
