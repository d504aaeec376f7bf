mod betting_table;
mod wheel_canvas;
mod widgets;

use shared::bets::BetDraft;
use yew::prelude::*;

use crate::hooks::{use_roulette, use_wheel_animation};
use crate::styles;

use betting_table::BettingTable;
use wheel_canvas::WheelCanvas;
use widgets::{ChipSelection, History, ResultDisplay, StatusPanel};

#[function_component(RoulettePage)]
pub fn roulette_page() -> Html {
    let table = use_roulette();
    let wheel = use_wheel_animation(table.ticket());
    let chips = use_memo((), {
        let table = table.clone();
        move |_| table.config().chip_values
    });

    let on_bet = {
        let table = table.clone();
        Callback::from(move |draft: BetDraft| table.place_bet(draft))
    };
    let on_spin = {
        let table = table.clone();
        Callback::from(move |_: MouseEvent| table.spin())
    };
    let on_clear = {
        let table = table.clone();
        Callback::from(move |_: MouseEvent| table.clear_bets())
    };
    let on_chip = {
        let table = table.clone();
        Callback::from(move |amount: u64| table.select_chip(amount))
    };

    let state = table.state();

    html! {
        <div class={styles::LAYOUT}>
            <div class={styles::SIDE_PANEL}>
                <StatusPanel
                    balance={state.balance}
                    betting_time_left={state.betting_time_left}
                    can_bet={state.can_bet()}
                    is_spinning={state.is_spinning()}
                    total_staked={state.current_bets.total_staked()}
                    on_spin={on_spin}
                    on_clear={on_clear}
                />
                <ChipSelection chips={(*chips).clone()} selected={state.selected_chip} on_select={on_chip} />
                <History numbers={state.last_numbers.clone()} />
            </div>

            <div class={styles::MAIN_PANEL}>
                <div class={classes!(styles::CARD, "flex", "flex-col", "items-center", "gap-4")}>
                    <WheelCanvas
                        state={wheel}
                        is_spinning={state.is_spinning()}
                        winning_number={state.winning_number}
                    />
                    <ResultDisplay winning_number={state.winning_number} is_spinning={state.is_spinning()} />
                </div>
                <BettingTable
                    bets={state.current_bets.clone()}
                    can_bet={state.can_bet()}
                    winning_number={state.winning_number}
                    on_bet={on_bet}
                />
            </div>
        </div>
    }
}
