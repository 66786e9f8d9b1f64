//! Space Invaders entities and tuning constants.

use crate::core::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::core::entity::{Body, Entity};
use crate::core::math::Vec2;

// Player
pub const PLAYER_SIZE: f32 = 20.0;
pub const PLAYER_Y: f32 = 50.0;
/// Horizontal speed at full axis deflection, units/sec.
pub const PLAYER_SPEED: f32 = 200.0;
/// Seconds between shots.
pub const FIRE_COOLDOWN: f32 = 0.2;

// Bullets
pub const BULLET_SIZE: Vec2 = Vec2::new(2.0, 5.0);
pub const BULLET_SPEED: f32 = 300.0;

// Invaders
pub const INVADER_SIZE: f32 = 15.0;
/// Sideways step per formation tick, also the per-second drift speed.
pub const INVADER_STEP: f32 = 20.0;
/// Seconds between formation steps.
pub const INVADER_STEP_INTERVAL: f32 = 1.0;
/// Drop applied when the formation reverses.
pub const INVADER_DROP: f32 = 10.0;
/// The formation reverses once any invader leaves `[MIN_X, MAX_X]`.
pub const FORMATION_MIN_X: f32 = 20.0;
pub const FORMATION_MAX_X: f32 = 780.0;
/// An invader at or below this height has reached the player's row.
pub const INVASION_Y: f32 = 70.0;

// Wave layout
pub const WAVE_ROWS: usize = 5;
pub const WAVE_COLUMNS: usize = 10;
pub const WAVE_LEFT: f32 = 50.0;
pub const WAVE_TOP: f32 = SCREEN_HEIGHT - 100.0;
pub const WAVE_COLUMN_SPACING: f32 = 60.0;
pub const WAVE_ROW_SPACING: f32 = 30.0;

pub const POINTS_PER_INVADER: u32 = 10;

#[derive(Debug, Clone)]
pub struct Player {
    pub body: Body,
    pub velocity: Vec2,
    /// Seconds until the next shot is allowed; never negative.
    pub fire_cooldown: f32,
}

impl Player {
    /// A player centered horizontally on a screen of `screen_width`.
    pub fn new(screen_width: f32) -> Self {
        Self {
            body: Body::new(
                Vec2::new(screen_width / 2.0, PLAYER_Y),
                Vec2::new(PLAYER_SIZE, PLAYER_SIZE),
            ),
            velocity: Vec2::ZERO,
            fire_cooldown: 0.0,
        }
    }

    pub fn can_fire(&self) -> bool {
        self.fire_cooldown <= 0.0
    }

    pub fn fired(&mut self) {
        self.fire_cooldown = FIRE_COOLDOWN;
    }

    /// Where a new bullet appears: the middle of the player's top edge.
    pub fn muzzle(&self) -> Vec2 {
        self.body.pos + Vec2::new(0.0, self.body.half_height())
    }
}

impl Entity for Player {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn update(&mut self, dt: f32) {
        self.body.pos += self.velocity * dt;

        let half = self.body.half_width();
        self.body.pos.x = self.body.pos.x.clamp(half, SCREEN_WIDTH - half);

        self.fire_cooldown = (self.fire_cooldown - dt).max(0.0);
    }
}

#[derive(Debug, Clone)]
pub struct Invader {
    pub body: Body,
    pub velocity: Vec2,
}

impl Invader {
    pub fn new(pos: Vec2) -> Self {
        Self {
            body: Body::new(pos, Vec2::new(INVADER_SIZE, INVADER_SIZE)),
            velocity: Vec2::new(INVADER_STEP, 0.0),
        }
    }
}

impl Entity for Invader {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn update(&mut self, dt: f32) {
        self.body.pos += self.velocity * dt;
    }
}

#[derive(Debug, Clone)]
pub struct Bullet {
    pub body: Body,
    pub velocity: Vec2,
    pub from_player: bool,
}

impl Bullet {
    pub fn new(pos: Vec2, velocity: Vec2, from_player: bool) -> Self {
        Self {
            body: Body::new(pos, BULLET_SIZE),
            velocity,
            from_player,
        }
    }

    pub fn player_shot(pos: Vec2) -> Self {
        Self::new(pos, Vec2::new(0.0, BULLET_SPEED), true)
    }
}

impl Entity for Bullet {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn update(&mut self, dt: f32) {
        self.body.pos += self.velocity * dt;

        if self.body.pos.y < 0.0 || self.body.pos.y > SCREEN_HEIGHT {
            self.body.active = false;
        }
    }
}

/// A fresh `WAVE_ROWS` x `WAVE_COLUMNS` formation, top row first.
pub fn create_wave() -> Vec<Invader> {
    let mut invaders = Vec::with_capacity(WAVE_ROWS * WAVE_COLUMNS);
    for row in 0..WAVE_ROWS {
        for col in 0..WAVE_COLUMNS {
            invaders.push(Invader::new(Vec2::new(
                WAVE_LEFT + col as f32 * WAVE_COLUMN_SPACING,
                WAVE_TOP - row as f32 * WAVE_ROW_SPACING,
            )));
        }
    }
    invaders
}
