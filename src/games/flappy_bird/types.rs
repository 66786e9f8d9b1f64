//! Flappy Bird entities and tuning constants.

use crate::core::constants::SCREEN_HEIGHT;
use crate::core::entity::{Body, Entity};
use crate::core::math::Vec2;

// Bird
pub const BIRD_SIZE: f32 = 20.0;
pub const BIRD_START: Vec2 = Vec2::new(100.0, SCREEN_HEIGHT / 2.0);
/// Downward acceleration, units/sec².
pub const GRAVITY: f32 = -800.0;
/// Vertical velocity set (not added) by a flap.
pub const JUMP_VELOCITY: f32 = 350.0;

// Pipes
pub const PIPE_WIDTH: f32 = 60.0;
/// Full height of the opening between the two pipe halves.
pub const PIPE_GAP_SIZE: f32 = 150.0;
pub const PIPE_SPEED: f32 = 150.0;
pub const PIPE_SPAWN_X: f32 = 850.0;
/// Seconds between pipe spawns.
pub const PIPE_SPAWN_INTERVAL: f32 = 2.5;
pub const GAP_CENTER_MIN: f32 = 150.0;
pub const GAP_CENTER_MAX: f32 = 450.0;

pub const POINTS_PER_PIPE: u32 = 1;

#[derive(Debug, Clone)]
pub struct Bird {
    pub body: Body,
    /// Vertical velocity, positive = up.
    pub velocity_y: f32,
}

impl Default for Bird {
    fn default() -> Self {
        Self::new()
    }
}

impl Bird {
    pub fn new() -> Self {
        Self {
            body: Body::new(BIRD_START, Vec2::new(BIRD_SIZE, BIRD_SIZE)),
            velocity_y: 0.0,
        }
    }

    pub fn jump(&mut self) {
        self.velocity_y = JUMP_VELOCITY;
    }

    /// Resting on (or within a unit of) the floor.
    pub fn is_on_ground(&self) -> bool {
        self.body.pos.y <= self.body.half_height() + 1.0
    }

    pub fn is_at_ceiling(&self) -> bool {
        self.body.pos.y >= SCREEN_HEIGHT - self.body.half_height()
    }
}

impl Entity for Bird {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn update(&mut self, dt: f32) {
        self.velocity_y += GRAVITY * dt;
        self.body.pos.y += self.velocity_y * dt;

        let half = self.body.half_height();
        if self.body.pos.y < half {
            self.body.pos.y = half;
            self.velocity_y = 0.0;
        } else if self.body.pos.y > SCREEN_HEIGHT - half {
            self.body.pos.y = SCREEN_HEIGHT - half;
            self.velocity_y = 0.0;
        }
    }
}

/// A full-height pipe column with an opening around `gap_center_y`.
#[derive(Debug, Clone)]
pub struct Pipe {
    pub body: Body,
    pub gap_center_y: f32,
    /// Set once the bird has cleared this pipe and the point was awarded.
    pub scored: bool,
}

impl Pipe {
    pub fn new(x: f32, gap_center_y: f32) -> Self {
        Self {
            body: Body::new(
                Vec2::new(x, SCREEN_HEIGHT / 2.0),
                Vec2::new(PIPE_WIDTH, SCREEN_HEIGHT),
            ),
            gap_center_y,
            scored: false,
        }
    }

    pub fn gap_bottom(&self) -> f32 {
        self.gap_center_y - PIPE_GAP_SIZE / 2.0
    }

    pub fn gap_top(&self) -> f32 {
        self.gap_center_y + PIPE_GAP_SIZE / 2.0
    }

    /// The bird overlaps the pipe horizontally and is not entirely inside
    /// the gap.
    pub fn check_collision(&self, bird: &Bird) -> bool {
        let pipe = self.bounds();
        let b = bird.bounds();

        let overlaps_x = b.right() >= pipe.left() && b.left() <= pipe.right();
        if !overlaps_x {
            return false;
        }
        let in_gap = b.bottom() >= self.gap_bottom() && b.top() <= self.gap_top();
        !in_gap
    }

    /// The pipe's right edge is behind the bird's left edge.
    pub fn is_past_bird(&self, bird: &Bird) -> bool {
        self.bounds().right() < bird.bounds().left()
    }
}

impl Entity for Pipe {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn update(&mut self, dt: f32) {
        self.body.pos.x -= PIPE_SPEED * dt;

        if self.body.pos.x < -self.body.half_width() {
            self.body.active = false;
        }
    }
}
