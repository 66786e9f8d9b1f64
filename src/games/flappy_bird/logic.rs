//! Flappy Bird game logic: flapping, pipe spawning, scoring and crashes.

use super::types::*;
use crate::core::entity::{sweep_inactive, Entity};
use crate::core::game::{Game, GameState};
use crate::input::InputState;
use crate::ui::renderer::Renderer;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Main game state. The RNG picks pipe gap heights and can be swapped for a
/// seeded one in tests.
#[derive(Debug, Clone)]
pub struct FlappyBirdGame<R = StdRng> {
    pub bird: Bird,
    pub pipes: Vec<Pipe>,
    pub state: GameState,
    /// Seconds since the last pipe spawned.
    pub spawn_timer: f32,
    pub score: u32,
    rng: R,
}

impl Default for FlappyBirdGame {
    fn default() -> Self {
        Self::new()
    }
}

impl FlappyBirdGame {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl<R: Rng> FlappyBirdGame<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            bird: Bird::new(),
            pipes: Vec::new(),
            state: GameState::Playing,
            spawn_timer: 0.0,
            score: 0,
            rng,
        }
    }

    /// Push a new pipe off the right edge with a random gap height.
    pub fn spawn_pipe(&mut self) {
        let gap_center = self.rng.gen_range(GAP_CENTER_MIN..=GAP_CENTER_MAX);
        self.pipes.push(Pipe::new(PIPE_SPAWN_X, gap_center));
    }

    fn update_spawner(&mut self, dt: f32) {
        self.spawn_timer += dt;
        if self.spawn_timer > PIPE_SPAWN_INTERVAL {
            self.spawn_pipe();
            self.spawn_timer = 0.0;
        }
    }

    /// Check each pipe in order: a crash ends the game immediately,
    /// otherwise a pipe the bird has cleared scores once.
    /// Returns true on a crash.
    pub fn check_pipes(&mut self) -> bool {
        let mut crashed = false;
        for pipe in self.pipes.iter_mut().filter(|p| p.is_active()) {
            if pipe.check_collision(&self.bird) {
                crashed = true;
                break;
            }
            if !pipe.scored && pipe.is_past_bird(&self.bird) {
                pipe.scored = true;
                self.score += POINTS_PER_PIPE;
            }
        }
        if crashed {
            self.crash();
        }
        crashed
    }

    fn crash(&mut self) {
        log::info!("flappy bird: crashed with score {}", self.score);
        self.state = GameState::GameOver;
    }
}

impl<R: Rng> Game for FlappyBirdGame<R> {
    fn update(&mut self, dt: f32, input: &InputState) {
        match self.state {
            GameState::Playing => {}
            GameState::GameOver => {
                if input.shoot_just_pressed() {
                    self.reset();
                }
                return;
            }
            GameState::Menu | GameState::Paused => return,
        }

        if input.shoot_just_pressed() {
            self.bird.jump();
        }
        self.bird.update(dt);

        self.update_spawner(dt);
        for pipe in &mut self.pipes {
            pipe.update(dt);
        }

        let crashed_into_pipe = self.check_pipes();
        if !crashed_into_pipe && (self.bird.is_on_ground() || self.bird.is_at_ceiling()) {
            self.crash();
        }

        sweep_inactive(&mut self.pipes);
    }

    fn render(&self, renderer: &mut dyn Renderer) {
        crate::ui::flappy_scene::render_flappy(renderer, self);
    }

    fn state(&self) -> GameState {
        self.state
    }

    fn reset(&mut self) {
        self.bird = Bird::new();
        self.pipes.clear();
        self.state = GameState::Playing;
        self.spawn_timer = 0.0;
        self.score = 0;
        log::debug!("flappy bird: reset");
    }

    fn name(&self) -> &'static str {
        "Flappy Bird"
    }

    fn score(&self) -> u32 {
        self.score
    }
}
