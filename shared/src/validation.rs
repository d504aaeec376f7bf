use std::collections::BTreeSet;

use crate::bets::{column_numbers, dozen_numbers, even_money_numbers, BetDraft, BetType};
use crate::constants::MAX_NUMBER;
use crate::error::BetError;

/// Checks that a draft's numbers form a real spot on the single-zero layout.
pub fn validate_draft(draft: &BetDraft) -> Result<(), BetError> {
    validate_numbers(draft.bet_type, &draft.numbers)
}

pub fn validate_numbers(bet_type: BetType, numbers: &BTreeSet<u8>) -> Result<(), BetError> {
    if let Some(&out_of_range) = numbers.iter().find(|&&n| n > MAX_NUMBER) {
        return Err(BetError::NumberOutOfRange(out_of_range));
    }

    let sorted: Vec<u8> = numbers.iter().copied().collect();
    let valid = sorted.len() == bet_type.cardinality()
        && match bet_type {
            BetType::Straight => true,
            BetType::Split => is_split(&sorted),
            BetType::Street => is_street(&sorted),
            BetType::Corner => is_corner(&sorted),
            BetType::Line => is_line(&sorted),
            BetType::Column => (1..=3).any(|c| column_numbers(c) == *numbers),
            BetType::Dozen => (1..=3).any(|d| dozen_numbers(d) == *numbers),
            _ => even_money_numbers(bet_type).as_ref() == Some(numbers),
        };

    if valid {
        Ok(())
    } else {
        Err(BetError::InvalidNumbers {
            bet_type,
            numbers: sorted,
        })
    }
}

// Inside bets are checked on sorted input. Rows run 1-2-3, 4-5-6, ...

fn is_split(n: &[u8]) -> bool {
    match n {
        [0, b] => (1..=3).contains(b),
        [a, b] => (*b == a + 1 && a % 3 != 0) || *b == a + 3,
        _ => false,
    }
}

fn is_street(n: &[u8]) -> bool {
    match n {
        [0, 1, 2] | [0, 2, 3] => true,
        [a, b, c] => a % 3 == 1 && *b == a + 1 && *c == a + 2,
        _ => false,
    }
}

fn is_corner(n: &[u8]) -> bool {
    match n {
        [0, 1, 2, 3] => true,
        [a, b, c, d] => {
            *a >= 1 && a % 3 != 0 && *b == a + 1 && *c == a + 3 && *d == a + 4
        }
        _ => false,
    }
}

fn is_line(n: &[u8]) -> bool {
    match n.first() {
        Some(&first) if first >= 1 && first % 3 == 1 => {
            n.iter().enumerate().all(|(i, &v)| v == first + i as u8)
        }
        _ => false,
    }
}
