use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::MAX_NUMBER;
use crate::pockets::is_red;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BetType {
    Straight,
    Split,
    Street,
    Corner,
    Line,
    Column,
    Dozen,
    Red,
    Black,
    Odd,
    Even,
    Low,
    High,
}

impl BetType {
    pub const ALL: [BetType; 13] = [
        BetType::Straight,
        BetType::Split,
        BetType::Street,
        BetType::Corner,
        BetType::Line,
        BetType::Column,
        BetType::Dozen,
        BetType::Red,
        BetType::Black,
        BetType::Odd,
        BetType::Even,
        BetType::Low,
        BetType::High,
    ];

    /// How many numbers a bet of this type covers.
    pub fn cardinality(&self) -> usize {
        match self {
            BetType::Straight => 1,
            BetType::Split => 2,
            BetType::Street => 3,
            BetType::Corner => 4,
            BetType::Line => 6,
            BetType::Column | BetType::Dozen => 12,
            BetType::Red
            | BetType::Black
            | BetType::Odd
            | BetType::Even
            | BetType::Low
            | BetType::High => 18,
        }
    }

    pub fn is_even_money(&self) -> bool {
        self.cardinality() == 18
    }

    pub fn name(&self) -> &'static str {
        match self {
            BetType::Straight => "straight",
            BetType::Split => "split",
            BetType::Street => "street",
            BetType::Corner => "corner",
            BetType::Line => "line",
            BetType::Column => "column",
            BetType::Dozen => "dozen",
            BetType::Red => "red",
            BetType::Black => "black",
            BetType::Odd => "odd",
            BetType::Even => "even",
            BetType::Low => "low",
            BetType::High => "high",
        }
    }
}

impl fmt::Display for BetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A wager on the table.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Bet {
    pub bet_type: BetType,
    pub numbers: BTreeSet<u8>,
    pub amount: u64,
    /// Label of the table spot the chip sits on.
    pub position: String,
}

impl Bet {
    pub fn covers(&self, number: u8) -> bool {
        self.numbers.contains(&number)
    }
}

/// A bet as the table layout describes it, before a chip is attached.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct BetDraft {
    pub bet_type: BetType,
    pub numbers: BTreeSet<u8>,
    pub position: String,
}

impl BetDraft {
    pub fn new(bet_type: BetType, numbers: impl IntoIterator<Item = u8>, position: impl Into<String>) -> Self {
        Self {
            bet_type,
            numbers: numbers.into_iter().collect(),
            position: position.into(),
        }
    }

    pub fn with_amount(self, amount: u64) -> Bet {
        Bet {
            bet_type: self.bet_type,
            numbers: self.numbers,
            amount,
            position: self.position,
        }
    }

    pub fn straight(number: u8) -> Self {
        Self::new(BetType::Straight, [number], number.to_string())
    }

    pub fn split(a: u8, b: u8) -> Self {
        Self::new(BetType::Split, [a, b], format!("{}/{}", a.min(b), a.max(b)))
    }

    /// Row `row` of the layout, 1 through 12.
    pub fn street(row: u8) -> Self {
        let first = row.saturating_mul(3).saturating_sub(2);
        Self::new(BetType::Street, first..first.saturating_add(3), format!("street {}", row))
    }

    /// Zero with 1 and 2 (`second == 1`) or with 2 and 3 (`second == 2`).
    pub fn trio(second: u8) -> Self {
        let numbers = [0, second, second.saturating_add(1)];
        Self::new(BetType::Street, numbers, format!("0/{}/{}", second, second.saturating_add(1)))
    }

    /// Zero, 1, 2 and 3.
    pub fn first_four() -> Self {
        Self::new(BetType::Corner, [0, 1, 2, 3], "0/1/2/3")
    }

    /// Corner whose top-left number is `first`.
    pub fn corner(first: u8) -> Self {
        let numbers = [first, first.saturating_add(1), first.saturating_add(3), first.saturating_add(4)];
        Self::new(BetType::Corner, numbers, format!("corner {}", first))
    }

    /// Rows `row` and `row + 1`, row 1 through 11.
    pub fn line(row: u8) -> Self {
        let first = row.saturating_mul(3).saturating_sub(2);
        Self::new(BetType::Line, first..first.saturating_add(6), format!("line {}-{}", row, row.saturating_add(1)))
    }

    /// Column 1 through 3, where column 1 starts with the number 1.
    pub fn column(column: u8) -> Self {
        Self::new(BetType::Column, column_numbers(column), format!("2 to 1 (col {})", column))
    }

    /// Dozen 1 through 3.
    pub fn dozen(dozen: u8) -> Self {
        let label = match dozen {
            1 => "1st 12".to_string(),
            2 => "2nd 12".to_string(),
            3 => "3rd 12".to_string(),
            other => format!("dozen {}", other),
        };
        Self::new(BetType::Dozen, dozen_numbers(dozen), label)
    }

    pub fn red() -> Self {
        Self::even_money(BetType::Red, "RED")
    }

    pub fn black() -> Self {
        Self::even_money(BetType::Black, "BLACK")
    }

    pub fn odd() -> Self {
        Self::even_money(BetType::Odd, "ODD")
    }

    pub fn even() -> Self {
        Self::even_money(BetType::Even, "EVEN")
    }

    pub fn low() -> Self {
        Self::even_money(BetType::Low, "1-18")
    }

    pub fn high() -> Self {
        Self::even_money(BetType::High, "19-36")
    }

    fn even_money(bet_type: BetType, label: &str) -> Self {
        Self::new(bet_type, even_money_numbers(bet_type).unwrap_or_default(), label)
    }
}

pub fn column_numbers(column: u8) -> BTreeSet<u8> {
    if !(1..=3).contains(&column) {
        return BTreeSet::new();
    }
    (1..=MAX_NUMBER).filter(|n| (n - 1) % 3 + 1 == column).collect()
}

pub fn dozen_numbers(dozen: u8) -> BTreeSet<u8> {
    if !(1..=3).contains(&dozen) {
        return BTreeSet::new();
    }
    let first = (dozen - 1) * 12 + 1;
    (first..first + 12).collect()
}

/// The 18 numbers behind an even-money bet; `None` for inside bets.
pub fn even_money_numbers(bet_type: BetType) -> Option<BTreeSet<u8>> {
    let filter: fn(u8) -> bool = match bet_type {
        BetType::Red => is_red,
        BetType::Black => |n| !is_red(n),
        BetType::Odd => |n| n % 2 == 1,
        BetType::Even => |n| n % 2 == 0,
        BetType::Low => |n| n <= 18,
        BetType::High => |n| n >= 19,
        _ => return None,
    };
    Some((1..=MAX_NUMBER).filter(|&n| filter(n)).collect())
}

/// Wagers for the current round, in the order they were placed.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct BetLedger {
    bets: Vec<Bet>,
}

impl BetLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, bet: Bet) {
        self.bets.push(bet);
    }

    pub fn bets(&self) -> &[Bet] {
        &self.bets
    }

    pub fn len(&self) -> usize {
        self.bets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bets.is_empty()
    }

    pub fn total_staked(&self) -> u64 {
        self.bets.iter().map(|bet| bet.amount).sum()
    }

    /// Chips sitting on a single table spot.
    pub fn stake_at(&self, position: &str) -> u64 {
        self.bets
            .iter()
            .filter(|bet| bet.position == position)
            .map(|bet| bet.amount)
            .sum()
    }

    /// Empties the ledger, handing back what was on it.
    pub fn take(&mut self) -> Vec<Bet> {
        std::mem::take(&mut self.bets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_match_cardinality() {
        let drafts = [
            BetDraft::straight(17),
            BetDraft::split(1, 2),
            BetDraft::street(4),
            BetDraft::corner(5),
            BetDraft::trio(1),
            BetDraft::first_four(),
            BetDraft::line(2),
            BetDraft::column(2),
            BetDraft::dozen(3),
            BetDraft::red(),
            BetDraft::black(),
            BetDraft::odd(),
            BetDraft::even(),
            BetDraft::low(),
            BetDraft::high(),
        ];
        for draft in drafts {
            assert_eq!(draft.numbers.len(), draft.bet_type.cardinality(), "{}", draft.bet_type);
        }
    }

    #[test]
    fn test_outside_sets() {
        assert_eq!(BetDraft::street(4).numbers, BTreeSet::from([10, 11, 12]));
        assert_eq!(BetDraft::trio(2).numbers, BTreeSet::from([0, 2, 3]));
        assert_eq!(BetDraft::first_four().position, "0/1/2/3");
        assert_eq!(BetDraft::line(11).numbers, (31..=36).collect::<BTreeSet<u8>>());
        assert!(column_numbers(1).contains(&34));
        assert!(column_numbers(3).contains(&36));
        assert!(column_numbers(0).is_empty());
        assert_eq!(dozen_numbers(2), (13..=24).collect::<BTreeSet<u8>>());
        let zero_free = [BetType::Red, BetType::Black, BetType::Odd, BetType::Even, BetType::Low, BetType::High];
        for bet_type in zero_free {
            assert!(!even_money_numbers(bet_type).unwrap().contains(&0));
        }
        assert_eq!(even_money_numbers(BetType::Straight), None);
    }

    #[test]
    fn test_ledger_take_clears() {
        let mut ledger = BetLedger::new();
        ledger.push(BetDraft::straight(3).with_amount(100));
        ledger.push(BetDraft::red().with_amount(50));
        ledger.push(BetDraft::straight(3).with_amount(25));
        assert_eq!(ledger.total_staked(), 175);
        assert_eq!(ledger.stake_at("3"), 125);
        let taken = ledger.take();
        assert_eq!(taken.len(), 3);
        assert!(ledger.is_empty());
        assert_eq!(ledger.total_staked(), 0);
    }
}
