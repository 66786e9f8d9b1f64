//! Flappy Bird.
//!
//! The bird falls under gravity and flaps upward on each press. Pipes scroll
//! in from the right with a randomly placed gap; every pipe cleared scores a
//! point and touching a pipe, the floor or the ceiling ends the run.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
