use serde::{Deserialize, Serialize};

use crate::constants::{EUROPEAN_WHEEL, MAX_NUMBER, POCKET_DEGREES, RED_NUMBERS};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum PocketColor {
    Red,
    Black,
    Green,
}

impl PocketColor {
    pub fn label(&self) -> &'static str {
        match self {
            PocketColor::Red => "red",
            PocketColor::Black => "black",
            PocketColor::Green => "green",
        }
    }
}

pub fn is_red(number: u8) -> bool {
    RED_NUMBERS.contains(&number)
}

pub fn pocket_color(number: u8) -> PocketColor {
    if number == 0 || number > MAX_NUMBER {
        PocketColor::Green
    } else if is_red(number) {
        PocketColor::Red
    } else {
        PocketColor::Black
    }
}

/// Position of `number` in the wheel's pocket order.
pub fn pocket_index(number: u8) -> Option<usize> {
    EUROPEAN_WHEEL.iter().position(|&n| n == number)
}

/// Angle of the pocket's centre, measured on the wheel itself (degrees).
pub fn pocket_angle(number: u8) -> Option<f64> {
    pocket_index(number).map(|index| index as f64 * POCKET_DEGREES)
}

/// Number whose pocket is under `angle`, with both measured on the wheel.
pub fn pocket_at(angle: f64) -> u8 {
    let normalized = angle.rem_euclid(360.0);
    let index = ((normalized + POCKET_DEGREES / 2.0) / POCKET_DEGREES) as usize % EUROPEAN_WHEEL.len();
    EUROPEAN_WHEEL[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel_holds_every_number_once() {
        let mut seen = [false; 37];
        for &n in EUROPEAN_WHEEL.iter() {
            assert!(!seen[n as usize]);
            seen[n as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_colors() {
        assert_eq!(pocket_color(0), PocketColor::Green);
        assert_eq!(pocket_color(32), PocketColor::Red);
        assert_eq!(pocket_color(15), PocketColor::Black);
        let reds = (1..=36).filter(|&n| pocket_color(n) == PocketColor::Red).count();
        assert_eq!(reds, 18);
    }

    #[test]
    fn test_pocket_angle_round_trips() {
        for n in 0..=36 {
            let angle = pocket_angle(n).unwrap();
            assert_eq!(pocket_at(angle), n);
            assert_eq!(pocket_at(angle + 1.5), n);
            assert_eq!(pocket_at(angle - 1.5 + 720.0), n);
        }
        assert_eq!(pocket_angle(37), None);
    }
}
