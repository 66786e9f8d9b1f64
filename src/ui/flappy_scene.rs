//! Drawing for the Flappy Bird game.

use crate::core::entity::Entity;
use crate::core::game::GameState;
use crate::games::flappy_bird::FlappyBirdGame;
use crate::ui::game_common::{
    render_overlay_panel, render_score_hud, PanelLine, HUD_TEXT_SCALE, TITLE_TEXT_SCALE,
};
use crate::ui::renderer::{Color, Renderer};

const SKY: Color = Color::rgb(0.5, 0.8, 1.0);
const PIPE_COLOR: Color = Color::rgb(0.0, 0.8, 0.0);
const BIRD_COLOR: Color = Color::rgb(1.0, 1.0, 0.0);
const PANEL_COLOR: Color = Color::rgba(0.0, 0.0, 0.0, 0.8);
const GAME_OVER_COLOR: Color = Color::rgb(1.0, 0.3, 0.3);
const BIRD_SEGMENTS: u32 = 16;

pub fn render_flappy<R>(renderer: &mut dyn Renderer, game: &FlappyBirdGame<R>) {
    renderer.clear(SKY);
    let screen_height = renderer.height();

    renderer.set_color(PIPE_COLOR);
    for pipe in game.pipes.iter().filter(|p| p.is_active()) {
        let x = pipe.body.pos.x;
        let width = pipe.body.size.x;

        // Upper half hangs from the ceiling down to the gap
        let top = pipe.gap_top();
        let upper = screen_height - top;
        if upper > 0.0 {
            renderer.draw_rect(x, top + upper / 2.0, width, upper);
        }

        let lower = pipe.gap_bottom();
        if lower > 0.0 {
            renderer.draw_rect(x, lower / 2.0, width, lower);
        }
    }

    let bird = &game.bird.body;
    renderer.set_color(BIRD_COLOR);
    renderer.draw_circle(bird.pos.x, bird.pos.y, bird.half_width(), BIRD_SEGMENTS);

    render_score_hud(renderer, game.score, Color::WHITE);

    if game.state == GameState::GameOver {
        let score = format!("Score: {}", game.score);
        render_overlay_panel(
            renderer,
            PANEL_COLOR,
            500.0,
            200.0,
            &[
                PanelLine::new("GAME OVER", TITLE_TEXT_SCALE, GAME_OVER_COLOR),
                PanelLine::new(&score, HUD_TEXT_SCALE, Color::WHITE),
                PanelLine::new("Press Space to restart", 1.0, Color::WHITE),
                PanelLine::new("Press ESC to return to menu", 1.0, Color::WHITE),
            ],
        );
    }
}
