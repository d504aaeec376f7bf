use shared::pockets::{pocket_color, PocketColor};
use yew::prelude::*;

use crate::styles;

/// Groups thousands the way the balance is shown: 13500 -> "13,500".
pub fn format_money(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// Short chip labels: 1000 -> "1K"
pub fn chip_label(amount: u64) -> String {
    if amount >= 1000 && amount % 1000 == 0 {
        format!("{}K", amount / 1000)
    } else {
        amount.to_string()
    }
}

pub fn pocket_background(number: u8) -> &'static str {
    match pocket_color(number) {
        PocketColor::Red => styles::CELL_RED,
        PocketColor::Black => styles::CELL_BLACK,
        PocketColor::Green => styles::CELL_GREEN,
    }
}

// Table status panel
#[derive(Properties, PartialEq)]
pub struct StatusPanelProps {
    pub balance: u64,
    pub betting_time_left: u64,
    pub can_bet: bool,
    pub is_spinning: bool,
    pub total_staked: u64,
    pub on_spin: Callback<MouseEvent>,
    pub on_clear: Callback<MouseEvent>,
}

#[function_component(StatusPanel)]
pub fn status_panel(props: &StatusPanelProps) -> Html {
    let has_bets = props.total_staked > 0;
    let controls_disabled = props.is_spinning || !has_bets;

    html! {
        <div class={styles::CARD}>
            <div class="text-center space-y-4">
                <div>
                    <p class={styles::TEXT_SMALL}>{"Balance"}</p>
                    <p class={styles::TEXT_BALANCE}>{format!("${}", format_money(props.balance))}</p>
                </div>

                if props.can_bet {
                    <div>
                        <p class={styles::TEXT_SMALL}>{"Betting time"}</p>
                        <p class={styles::TEXT_COUNTDOWN}>{format!("{}s", props.betting_time_left)}</p>
                    </div>
                }

                <div class="space-y-2">
                    <SpinButton is_spinning={props.is_spinning} disabled={controls_disabled} onclick={props.on_spin.clone()} />
                    <button
                        class={styles::BUTTON_SECONDARY}
                        disabled={controls_disabled}
                        onclick={props.on_clear.clone()}
                    >
                        {"Clear bets"}
                    </button>
                </div>

                if has_bets {
                    <div>
                        <p class={styles::TEXT_SMALL}>{"Total staked"}</p>
                        <p class={styles::TEXT_STAKED}>{format!("${}", format_money(props.total_staked))}</p>
                    </div>
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub disabled: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let spin_icon_class = if props.is_spinning {
        "inline-block mr-2 animate-spin"
    } else {
        "hidden"
    };

    html! {
        <button class={styles::BUTTON_SPIN} disabled={props.disabled} onclick={props.onclick.clone()}>
            <svg class={spin_icon_class} xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                <circle cx="12" cy="12" r="10" />
                <path d="M12 6v6l4 2" />
            </svg>
            <span>{ if props.is_spinning { "SPINNING..." } else { "SPIN" } }</span>
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct ChipSelectionProps {
    pub chips: Vec<u64>,
    pub selected: u64,
    pub on_select: Callback<u64>,
}

#[function_component(ChipSelection)]
pub fn chip_selection(props: &ChipSelectionProps) -> Html {
    html! {
        <div class={styles::CARD}>
            <h3 class={classes!(styles::TEXT_H3, "mb-4")}>{"Chips"}</h3>
            <div class="grid grid-cols-3 gap-3 justify-items-center">
                { for props.chips.iter().map(|&chip| {
                    let on_select = props.on_select.clone();
                    let selected = chip == props.selected;
                    html! {
                        <button
                            key={chip}
                            class={classes!(
                                styles::CHIP,
                                chip_colors(chip),
                                selected.then_some(styles::CHIP_SELECTED)
                            )}
                            onclick={Callback::from(move |_| on_select.emit(chip))}
                        >
                            { chip_label(chip) }
                        </button>
                    }
                }) }
            </div>
        </div>
    }
}

fn chip_colors(amount: u64) -> &'static str {
    match amount {
        0..=10 => "bg-white text-gray-900 border-gray-400",
        11..=25 => "bg-red-600 text-white border-white",
        26..=50 => "bg-blue-600 text-white border-white",
        51..=100 => "bg-gray-900 text-white border-white",
        101..=500 => "bg-purple-600 text-white border-white",
        _ => "bg-yellow-500 text-gray-900 border-white",
    }
}

#[derive(Properties, PartialEq)]
pub struct HistoryProps {
    pub numbers: Vec<u8>,
}

#[function_component(History)]
pub fn history(props: &HistoryProps) -> Html {
    html! {
        <div class={styles::CARD}>
            <h3 class={classes!(styles::TEXT_H3, "mb-4")}>{"Last numbers"}</h3>
            if props.numbers.is_empty() {
                <p class={styles::TEXT_SMALL}>{"No spins yet"}</p>
            } else {
                <div class="flex flex-wrap gap-2">
                    { for props.numbers.iter().enumerate().map(|(i, &n)| html! {
                        <div
                            key={i}
                            class={classes!(styles::HISTORY_BALL, pocket_background(n), (i == 0).then_some(styles::CELL_WINNER))}
                        >
                            { n }
                        </div>
                    }) }
                </div>
            }
        </div>
    }
}

// Result display component
#[derive(Properties, PartialEq)]
pub struct ResultDisplayProps {
    pub winning_number: Option<u8>,
    pub is_spinning: bool,
}

#[function_component(ResultDisplay)]
pub fn result_display(props: &ResultDisplayProps) -> Html {
    if props.is_spinning {
        return html! {
            <p class={classes!(styles::TEXT_H3, "animate-pulse")}>{"No more bets"}</p>
        };
    }

    match props.winning_number {
        Some(n) => html! {
            <div class="flex items-center gap-3">
                <span class={styles::TEXT_SMALL}>{"Winning number"}</span>
                <span class={classes!("w-14", "h-14", "rounded-full", "flex", "items-center", "justify-center", "text-2xl", "font-bold", "text-white", pocket_background(n))}>
                    { n }
                </span>
                <span class={styles::TEXT_SMALL}>{ pocket_color(n).label() }</span>
            </div>
        },
        None => html! {},
    }
}
