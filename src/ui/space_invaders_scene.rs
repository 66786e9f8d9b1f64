//! Drawing for the Space Invaders game.

use crate::core::entity::Entity;
use crate::core::game::GameState;
use crate::games::space_invaders::SpaceInvadersGame;
use crate::ui::game_common::{
    render_overlay_panel, render_score_hud, PanelLine, HUD_TEXT_SCALE, TITLE_TEXT_SCALE,
};
use crate::ui::renderer::{Color, Renderer};

const BACKGROUND: Color = Color::rgb(0.0, 0.0, 0.1);
const PLAYER_COLOR: Color = Color::rgb(0.0, 1.0, 0.0);
const INVADER_COLOR: Color = Color::rgb(1.0, 0.0, 0.0);
const BULLET_COLOR: Color = Color::WHITE;
const HUD_COLOR: Color = Color::rgb(1.0, 1.0, 0.0);
const PANEL_COLOR: Color = Color::rgba(0.0, 0.0, 0.0, 0.7);

pub fn render_space_invaders(renderer: &mut dyn Renderer, game: &SpaceInvadersGame) {
    renderer.clear(BACKGROUND);

    let player = &game.player.body;
    renderer.set_color(PLAYER_COLOR);
    renderer.draw_rect(player.pos.x, player.pos.y, player.size.x, player.size.y);

    renderer.set_color(INVADER_COLOR);
    for invader in game.invaders.iter().filter(|inv| inv.is_active()) {
        let body = &invader.body;
        renderer.draw_rect(body.pos.x, body.pos.y, body.size.x, body.size.y);
    }

    renderer.set_color(BULLET_COLOR);
    for bullet in game.bullets.iter().filter(|b| b.is_active()) {
        let body = &bullet.body;
        renderer.draw_rect(body.pos.x, body.pos.y, body.size.x, body.size.y);
    }

    match game.state {
        GameState::Playing => render_score_hud(renderer, game.score, HUD_COLOR),
        GameState::GameOver => {
            let score = format!("Final Score: {}", game.score);
            render_overlay_panel(
                renderer,
                PANEL_COLOR,
                600.0,
                200.0,
                &[
                    PanelLine::new("GAME OVER", TITLE_TEXT_SCALE, INVADER_COLOR),
                    PanelLine::new(&score, HUD_TEXT_SCALE, Color::WHITE),
                    PanelLine::new("Press ESC to return to menu", 1.0, Color::WHITE),
                ],
            );
        }
        GameState::Menu | GameState::Paused => {}
    }
}
