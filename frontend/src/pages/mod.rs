pub mod roulette;
