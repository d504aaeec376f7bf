// Table layout
pub const POCKET_COUNT: u8 = 37;
pub const MAX_NUMBER: u8 = 36;

/// Pocket order on a single-zero wheel, clockwise from zero.
pub const EUROPEAN_WHEEL: [u8; 37] = [
    0, 32, 15, 19, 4, 21, 2, 25, 17, 34, 6, 27, 13, 36, 11, 30, 8, 23, 10, 5, 24, 16, 33, 1, 20,
    14, 31, 9, 22, 18, 29, 7, 28, 12, 35, 3, 26,
];

pub const RED_NUMBERS: [u8; 18] = [1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36];

pub const POCKET_DEGREES: f64 = 360.0 / 37.0;

// Table defaults
pub const STARTING_BALANCE: u64 = 10_000;
pub const BETTING_WINDOW_SECS: u64 = 30;
pub const SPIN_DURATION_MS: u64 = 6000;
pub const ROUND_RESET_DELAY_MS: u64 = 3000;
pub const DEFAULT_CHIP: u64 = 100;
pub const CHIP_VALUES: [u64; 6] = [10, 25, 50, 100, 500, 1000];
pub const HISTORY_LEN: usize = 10;

// Wheel animation. Speeds are degrees per 60 Hz frame.
pub const FRAMES_PER_SECOND: f64 = 60.0;
pub const OUTER_RADIUS: f64 = 240.0;
pub const INNER_RADIUS: f64 = 165.0;

pub const WHEEL_SPEED_MIN: f64 = 3.0;
pub const WHEEL_SPEED_MAX: f64 = 5.0;
pub const WHEEL_DECELERATION: f64 = 0.15; // per second
pub const WHEEL_DEGREES_PER_UNIT: f64 = 6.0;

pub const BALL_SPEED_MIN: f64 = 25.0;
pub const BALL_SPEED_MAX: f64 = 35.0;
pub const BALL_DECELERATION: f64 = 14.0; // per second
pub const BALL_DROP_SPEED: f64 = 3.0;
pub const MIN_SPIN_SECS: f64 = 2.0;

pub const BOUNCE_SECS: f64 = 2.5;
pub const BOUNCE_INTERVAL_MIN_SECS: f64 = 0.2;
pub const BOUNCE_INTERVAL_MAX_SECS: f64 = 0.5;
pub const MAX_BOUNCE_COUNT: usize = 8;
pub const BOUNCE_KICK_DEGREES: f64 = 15.0;
pub const BOUNCE_WOBBLE_PX: f64 = 20.0;
pub const BOUNCE_WOBBLE_RATE: f64 = 8.0;
pub const SPIRAL_SPEED_START: f64 = 15.0;
pub const SPIRAL_SPEED_DECAY: f64 = 2.0; // per second
pub const SPIRAL_SPEED_MIN: f64 = 1.0;

pub const SETTLE_OFFSET_DEGREES: f64 = 4.0;
pub const SETTLE_HOLD_SECS: f64 = 1.0;
pub const MAX_STEP_SECS: f64 = 1.0 / 60.0;
