pub mod use_notices;
pub mod use_roulette;
pub mod use_wheel_animation;

pub use use_notices::*;
pub use use_roulette::*;
pub use use_wheel_animation::*;
