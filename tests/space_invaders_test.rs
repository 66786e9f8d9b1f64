//! Integration test: Space Invaders played through the `Game` trait
//!
//! Drives the game frame by frame the way the app loop does and checks
//! shooting, scoring and the game-over screen.

use arcade::core::entity::Entity;
use arcade::core::game::{Game, GameState};
use arcade::games::space_invaders::{SpaceInvadersGame, FIRE_COOLDOWN, POINTS_PER_INVADER};
use arcade::input::{InputState, Key, KeySet};
use arcade::ui::renderer::DisplayList;

const DT: f32 = 1.0 / 60.0;

/// Run `frames` frames with nothing pressed.
fn idle_frames(game: &mut SpaceInvadersGame, input: &mut InputState, frames: u32) {
    for _ in 0..frames {
        input.update(KeySet::EMPTY, KeySet::EMPTY);
        game.update(DT, input);
    }
}

fn tap_fire(game: &mut SpaceInvadersGame, input: &mut InputState) {
    input.update(KeySet::of(&[Key::Space]), KeySet::of(&[Key::Space]));
    game.update(DT, input);
}

#[test]
fn test_shot_from_center_destroys_one_invader() {
    let mut game = SpaceInvadersGame::new();
    let mut input = InputState::new();

    tap_fire(&mut game, &mut input);
    assert_eq!(game.bullets.len(), 1);

    // The marching formation drifts into the bullet's path
    let mut frames = 0;
    while game.score() == 0 && frames < 180 {
        idle_frames(&mut game, &mut input, 1);
        frames += 1;
    }

    assert_eq!(game.score(), POINTS_PER_INVADER);
    assert_eq!(game.invaders.len(), 49);
    assert!(game.bullets.is_empty());
    assert!(game.invaders.iter().all(|inv| inv.is_active()));
}

#[test]
fn test_rapid_fire_respects_cooldown() {
    let mut game = SpaceInvadersGame::new();
    let mut input = InputState::new();

    // Tap every other frame for 0.2s
    let frames = (FIRE_COOLDOWN / DT) as u32;
    for i in 0..frames {
        if i % 2 == 0 {
            tap_fire(&mut game, &mut input);
        } else {
            idle_frames(&mut game, &mut input, 1);
        }
    }
    assert_eq!(game.bullets.len(), 1);

    idle_frames(&mut game, &mut input, 2);
    tap_fire(&mut game, &mut input);
    assert_eq!(game.bullets.len(), 2);
}

#[test]
fn test_formation_eventually_lands() {
    let mut game = SpaceInvadersGame::new();
    let mut input = InputState::new();

    // Never shooting, the formation must reach the player's row
    let mut frames = 0;
    while game.state() == GameState::Playing && frames < 60 * 600 {
        idle_frames(&mut game, &mut input, 1);
        frames += 1;
    }
    assert_eq!(game.state(), GameState::GameOver);

    let mut list = DisplayList::new(800.0, 600.0);
    game.render(&mut list);
    assert!(list.has_text("GAME OVER"));
    assert!(list.has_text("Final Score: 0"));

    game.reset();
    assert_eq!(game.state(), GameState::Playing);
    assert_eq!(game.invaders.len(), 50);
}
