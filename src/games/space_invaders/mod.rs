//! Space Invaders.
//!
//! The player slides along the bottom of the screen shooting upward at a
//! 5x10 formation that marches sideways and drops a row at each edge.
//! Clearing the formation brings in a fresh wave; the game ends once the
//! formation reaches the player's row.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
