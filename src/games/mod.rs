//! The games bundled with the arcade.

pub mod flappy_bird;
pub mod space_invaders;

use crate::core::game::Game;
use flappy_bird::FlappyBirdGame;
use space_invaders::SpaceInvadersGame;

/// Every game in menu order.
pub fn collection() -> Vec<Box<dyn Game>> {
    vec![
        Box::new(SpaceInvadersGame::new()),
        Box::new(FlappyBirdGame::new()),
    ]
}
