//! Integration test: Flappy Bird with a seeded RNG
//!
//! Flies the bird through real pipe spawns by steering it into each gap,
//! then lets it crash and restarts.

use arcade::core::game::{Game, GameState};
use arcade::games::flappy_bird::{FlappyBirdGame, Pipe, BIRD_START, PIPE_SPAWN_INTERVAL};
use arcade::input::{InputState, Key, KeySet};
use arcade::ui::renderer::DisplayList;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const DT: f32 = 1.0 / 60.0;

fn seeded(seed: u64) -> FlappyBirdGame<ChaCha8Rng> {
    FlappyBirdGame::with_rng(ChaCha8Rng::seed_from_u64(seed))
}

/// Hold the bird at the center of the nearest gap ahead of it.
fn steer(game: &mut FlappyBirdGame<ChaCha8Rng>) {
    let bird_x = game.bird.body.pos.x;
    let target = game
        .pipes
        .iter()
        .find(|p| p.body.pos.x + 30.0 >= bird_x - 10.0)
        .map(|p| p.gap_center_y)
        .unwrap_or(BIRD_START.y);
    game.bird.body.pos.y = target;
    game.bird.velocity_y = 0.0;
}

#[test]
fn test_same_seed_same_pipes() {
    let mut a = seeded(9);
    let mut b = seeded(9);
    for _ in 0..5 {
        a.spawn_pipe();
        b.spawn_pipe();
    }
    let gaps_a: Vec<f32> = a.pipes.iter().map(|p| p.gap_center_y).collect();
    let gaps_b: Vec<f32> = b.pipes.iter().map(|p| p.gap_center_y).collect();
    assert_eq!(gaps_a, gaps_b);
}

#[test]
fn test_threading_gaps_scores_points() {
    let mut game = seeded(1);
    let input = InputState::new();

    // Long enough for several pipes to spawn and pass the bird
    let frames = ((PIPE_SPAWN_INTERVAL * 5.0 + 6.0) / DT) as u32;
    for _ in 0..frames {
        steer(&mut game);
        game.update(DT, &input);
        assert_eq!(game.state(), GameState::Playing);
    }

    assert!(game.score() >= 4, "score was {}", game.score());
    // Scrolled-off pipes are cleaned up
    assert!(game.pipes.iter().all(|p| p.body.pos.x >= -30.0));
}

#[test]
fn test_crash_then_restart() {
    let mut game = seeded(3);
    let mut input = InputState::new();

    game.pipes.push(Pipe::new(BIRD_START.x, 500.0));
    game.update(DT, &input);
    assert_eq!(game.state(), GameState::GameOver);

    let mut list = DisplayList::new(800.0, 600.0);
    game.render(&mut list);
    assert!(list.has_text("Press Space to restart"));

    input.update(KeySet::of(&[Key::Up]), KeySet::of(&[Key::Up]));
    game.update(DT, &input);
    assert_eq!(game.state(), GameState::Playing);
    assert!(game.pipes.is_empty());
    assert_eq!(game.score(), 0);
}
