//! Space Invaders game logic: player control, formation march, collisions.

use super::types::*;
use crate::core::constants::SCREEN_WIDTH;
use crate::core::entity::{sweep_inactive, Entity};
use crate::core::game::{Game, GameState};
use crate::input::InputState;
use crate::ui::renderer::Renderer;

#[derive(Debug, Clone)]
pub struct SpaceInvadersGame {
    pub player: Player,
    pub invaders: Vec<Invader>,
    pub bullets: Vec<Bullet>,
    pub state: GameState,
    /// Seconds since the formation last stepped sideways.
    pub move_timer: f32,
    /// +1 while the formation marches right, -1 while it marches left.
    pub direction: i32,
    pub score: u32,
    /// Waves spawned since the last reset, starting at 1.
    pub wave: u32,
}

impl Default for SpaceInvadersGame {
    fn default() -> Self {
        Self::new()
    }
}

impl SpaceInvadersGame {
    pub fn new() -> Self {
        Self {
            player: Player::new(SCREEN_WIDTH),
            invaders: create_wave(),
            bullets: Vec::new(),
            state: GameState::Playing,
            move_timer: 0.0,
            direction: 1,
            score: 0,
            wave: 1,
        }
    }

    pub fn active_invaders(&self) -> usize {
        self.invaders.iter().filter(|inv| inv.is_active()).count()
    }

    /// Steer and move the player, then fire if shoot was just pressed.
    fn update_player(&mut self, dt: f32, input: &InputState) {
        self.player.velocity.x = input.horizontal_axis() * PLAYER_SPEED;
        self.player.update(dt);

        if input.shoot_just_pressed() && self.player.can_fire() {
            self.bullets.push(Bullet::player_shot(self.player.muzzle()));
            self.player.fired();
        }
    }

    /// Step the whole formation once per interval, reversing and dropping it
    /// at the screen edges.
    pub fn update_formation(&mut self, dt: f32) {
        self.move_timer += dt;
        if self.move_timer <= INVADER_STEP_INTERVAL {
            return;
        }
        self.move_timer = 0.0;

        let mut hit_edge = false;
        for invader in self.invaders.iter_mut().filter(|inv| inv.is_active()) {
            invader.body.pos.x += invader.velocity.x;
            let x = invader.body.pos.x;
            if !(FORMATION_MIN_X..=FORMATION_MAX_X).contains(&x) {
                hit_edge = true;
            }
        }
        if !hit_edge {
            return;
        }

        self.direction = -self.direction;
        let mut invaded = false;
        for invader in self.invaders.iter_mut().filter(|inv| inv.is_active()) {
            invader.velocity.x = INVADER_STEP * self.direction as f32;
            invader.body.pos.y -= INVADER_DROP;
            if invader.body.pos.y <= INVASION_Y {
                invaded = true;
            }
        }

        if invaded {
            log::info!("space invaders: formation landed, final score {}", self.score);
            self.state = GameState::GameOver;
        }
    }

    /// Resolve bullet/invader hits, then bring in a new wave if the last one
    /// is gone.
    pub fn check_collisions(&mut self) {
        for bullet in self
            .bullets
            .iter_mut()
            .filter(|b| b.is_active() && b.from_player)
        {
            let hit = self
                .invaders
                .iter_mut()
                .find(|inv| inv.is_active() && bullet.collides_with(&**inv));
            if let Some(invader) = hit {
                invader.deactivate();
                bullet.deactivate();
                self.score += POINTS_PER_INVADER;
            }
        }

        if self.active_invaders() == 0 {
            self.wave += 1;
            log::debug!("space invaders: wave cleared, spawning wave {}", self.wave);
            self.invaders = create_wave();
        }
    }

    fn cleanup(&mut self) {
        sweep_inactive(&mut self.bullets);
        sweep_inactive(&mut self.invaders);
    }
}

impl Game for SpaceInvadersGame {
    fn update(&mut self, dt: f32, input: &InputState) {
        if self.state != GameState::Playing {
            return;
        }

        self.update_player(dt, input);

        for bullet in &mut self.bullets {
            bullet.update(dt);
        }
        for invader in &mut self.invaders {
            invader.update(dt);
        }

        self.update_formation(dt);
        self.check_collisions();
        self.cleanup();
    }

    fn render(&self, renderer: &mut dyn Renderer) {
        crate::ui::space_invaders_scene::render_space_invaders(renderer, self);
    }

    fn state(&self) -> GameState {
        self.state
    }

    fn reset(&mut self) {
        *self = Self::new();
        log::debug!("space invaders: reset");
    }

    fn name(&self) -> &'static str {
        "Space Invaders"
    }

    fn score(&self) -> u32 {
        self.score
    }
}
