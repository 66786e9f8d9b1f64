//! Engine core shared by every game: math, entities, the game contract and
//! frame pacing.

pub mod constants;
pub mod entity;
pub mod game;
pub mod game_loop;
pub mod math;

pub use constants::*;
pub use entity::{sweep_inactive, Body, Entity};
pub use game::{Game, GameState};
pub use math::{Rect, Vec2};
