use shared::bets::{BetDraft, BetLedger};
use yew::prelude::*;

use super::widgets::{chip_label, pocket_background};
use crate::styles;

/// Numbers as laid out on the felt, top row first (3, 6, ... 36).
pub fn layout_rows() -> [[u8; 12]; 3] {
    let mut rows = [[0u8; 12]; 3];
    for (r, row) in rows.iter_mut().enumerate() {
        for (c, cell) in row.iter_mut().enumerate() {
            *cell = c as u8 * 3 + (3 - r as u8);
        }
    }
    rows
}

/// Where a chip can sit on a number cell besides its middle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
    TopRight,
    BottomRight,
    TopLeft,
    BottomLeft,
}

impl Edge {
    fn class(self) -> &'static str {
        match self {
            Edge::Top => "-top-1.5 left-1/4 w-1/2 h-3",
            Edge::Right => "top-1/4 -right-1.5 w-3 h-1/2",
            Edge::Bottom => "-bottom-1.5 left-1/4 w-1/2 h-3",
            Edge::Left => "top-1/4 -left-1.5 w-3 h-1/2",
            Edge::TopRight => "-top-2 -right-2 w-4 h-4",
            Edge::BottomRight => "-bottom-2 -right-2 w-4 h-4",
            Edge::TopLeft => "-top-2 -left-2 w-4 h-4",
            Edge::BottomLeft => "-bottom-2 -left-2 w-4 h-4",
        }
    }
}

/// Inside bets reachable from the borders of `number`'s cell. Each split,
/// corner, street and line on the layout belongs to exactly one cell.
pub fn cell_spots(number: u8) -> Vec<(Edge, BetDraft)> {
    let mut spots = Vec::new();
    if number == 0 {
        return spots;
    }
    let row = (number + 2) / 3;
    let bottom_row = number % 3 == 1;

    if number % 3 != 0 {
        spots.push((Edge::Top, BetDraft::split(number, number + 1)));
    }
    if number <= 33 {
        spots.push((Edge::Right, BetDraft::split(number, number + 3)));
    }
    if number <= 3 {
        spots.push((Edge::Left, BetDraft::split(0, number)));
    }
    // Where zero meets 1/2 and 2/3, and the foot of the zero column.
    if number <= 2 {
        spots.push((Edge::TopLeft, BetDraft::trio(number)));
    }
    if number == 1 {
        spots.push((Edge::BottomLeft, BetDraft::first_four()));
    }
    if number % 3 != 0 && number <= 32 {
        spots.push((Edge::TopRight, BetDraft::corner(number)));
    }
    if bottom_row {
        spots.push((Edge::Bottom, BetDraft::street(row)));
        if row < 12 {
            spots.push((Edge::BottomRight, BetDraft::line(row)));
        }
    }
    spots
}

fn bet_class(can_bet: bool, extra: &'static str) -> Classes {
    classes!(extra, (!can_bet).then_some(styles::CELL_DISABLED))
}

fn stake_badge(stake: u64) -> Html {
    if stake == 0 {
        return html! {};
    }
    html! { <span class={styles::CHIP_BADGE}>{ chip_label(stake) }</span> }
}

fn emit_on_click(on_bet: &Callback<BetDraft>, draft: BetDraft) -> Callback<MouseEvent> {
    let on_bet = on_bet.clone();
    Callback::from(move |e: MouseEvent| {
        e.stop_propagation();
        on_bet.emit(draft.clone());
    })
}

#[derive(Properties, PartialEq)]
pub struct BettingTableProps {
    pub bets: BetLedger,
    pub can_bet: bool,
    pub winning_number: Option<u8>,
    pub on_bet: Callback<BetDraft>,
}

#[function_component(BettingTable)]
pub fn betting_table(props: &BettingTableProps) -> Html {
    let number_cell = |number: u8, style: String| {
        let draft = BetDraft::straight(number);
        let stake = props.bets.stake_at(&draft.position);
        let winner = props.winning_number == Some(number);
        html! {
            <div
                style={style}
                class={classes!(
                    styles::CELL,
                    pocket_background(number),
                    winner.then_some(styles::CELL_WINNER),
                    (!props.can_bet).then_some(styles::CELL_DISABLED)
                )}
                onclick={emit_on_click(&props.on_bet, draft)}
            >
                { number }
                { stake_badge(stake) }
                { for cell_spots(number).into_iter().map(|(edge, spot)| {
                    let stake = props.bets.stake_at(&spot.position);
                    html! {
                        <div
                            class={classes!(styles::HOTSPOT, edge.class())}
                            title={spot.position.clone()}
                            onclick={emit_on_click(&props.on_bet, spot)}
                        >
                            { stake_badge(stake) }
                        </div>
                    }
                }) }
            </div>
        }
    };

    let outside_cell = |draft: BetDraft, label: String, extra: &'static str| {
        let stake = props.bets.stake_at(&draft.position);
        html! {
            <div
                class={classes!(bet_class(props.can_bet, styles::CELL_OUTSIDE), "relative", extra)}
                onclick={emit_on_click(&props.on_bet, draft)}
            >
                { label }
                { stake_badge(stake) }
            </div>
        }
    };

    let rows = layout_rows();

    html! {
        <div class={styles::TABLE}>
            <div class={styles::TABLE_GRID}>
                { number_cell(0, "grid-row: 1 / span 3; grid-column: 1;".to_string()) }
                { for rows.iter().enumerate().flat_map(|(r, row)| {
                    row.iter().enumerate().map(move |(c, &n)| (r, c, n))
                }).map(|(r, c, n)| number_cell(n, format!("grid-row: {}; grid-column: {};", r + 1, c + 2))) }
                { for (0..3u8).map(|r| html! {
                    <div key={format!("col-{}", r)} style={format!("grid-row: {}; grid-column: 14;", r + 1)}>
                        { outside_cell(BetDraft::column(3 - r), "2 to 1".to_string(), "h-12") }
                    </div>
                }) }
            </div>

            <div class="grid grid-cols-3 gap-1 mt-1 ml-[3.25rem] mr-[4.25rem]">
                { for (1..=3u8).map(|d| {
                    let draft = BetDraft::dozen(d);
                    let label = draft.position.clone();
                    outside_cell(draft, label, "")
                }) }
            </div>

            <div class="grid grid-cols-6 gap-1 mt-1 ml-[3.25rem] mr-[4.25rem]">
                { outside_cell(BetDraft::low(), "1-18".to_string(), "") }
                { outside_cell(BetDraft::even(), "EVEN".to_string(), "") }
                { outside_cell(BetDraft::red(), "RED".to_string(), styles::CELL_RED) }
                { outside_cell(BetDraft::black(), "BLACK".to_string(), styles::CELL_BLACK) }
                { outside_cell(BetDraft::odd(), "ODD".to_string(), "") }
                { outside_cell(BetDraft::high(), "19-36".to_string(), "") }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::bets::BetType;
    use shared::validation::validate_draft;
    use std::collections::HashSet;

    #[test]
    fn test_layout_covers_every_number_once() {
        let mut seen: Vec<u8> = layout_rows().iter().flatten().copied().collect();
        assert_eq!(layout_rows()[0][0], 3);
        assert_eq!(layout_rows()[2][11], 34);
        seen.sort_unstable();
        assert_eq!(seen, (1..=36).collect::<Vec<u8>>());
    }

    #[test]
    fn test_every_inside_spot_appears_once() {
        let spots: Vec<BetDraft> = (1..=36).flat_map(|n| cell_spots(n).into_iter().map(|(_, d)| d)).collect();
        for spot in &spots {
            assert!(validate_draft(spot).is_ok(), "{:?}", spot);
        }

        let count = |bet_type: BetType| spots.iter().filter(|d| d.bet_type == bet_type).count();
        assert_eq!(count(BetType::Split), 60);
        assert_eq!(count(BetType::Corner), 23);
        assert_eq!(count(BetType::Street), 14);
        assert_eq!(count(BetType::Line), 11);

        let unique: HashSet<Vec<u8>> = spots.iter().map(|d| d.numbers.iter().copied().collect()).collect();
        assert_eq!(unique.len(), spots.len());
    }

    #[test]
    fn test_zero_spots_sit_next_to_zero() {
        let zero_spots: Vec<(u8, Edge, Vec<u8>)> = (1..=36)
            .flat_map(|n| cell_spots(n).into_iter().map(move |(edge, d)| (n, edge, d)))
            .filter(|(_, _, d)| d.numbers.contains(&0) && d.bet_type != BetType::Split)
            .map(|(n, edge, d)| (n, edge, d.numbers.into_iter().collect()))
            .collect();
        assert_eq!(
            zero_spots,
            vec![
                (1, Edge::TopLeft, vec![0, 1, 2]),
                (1, Edge::BottomLeft, vec![0, 1, 2, 3]),
                (2, Edge::TopLeft, vec![0, 2, 3]),
            ]
        );
    }
}
