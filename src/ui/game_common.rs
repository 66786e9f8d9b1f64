//! Shared drawing helpers for the games.

use super::renderer::{Color, Renderer, TextAlign};

pub const HUD_TEXT_SCALE: f32 = 1.5;
pub const TITLE_TEXT_SCALE: f32 = 2.0;

/// One line of an overlay panel.
pub struct PanelLine<'a> {
    pub text: &'a str,
    pub scale: f32,
    pub color: Color,
}

impl<'a> PanelLine<'a> {
    pub fn new(text: &'a str, scale: f32, color: Color) -> Self {
        Self { text, scale, color }
    }
}

/// Vertical distance between panel lines.
const PANEL_LINE_SPACING: f32 = 40.0;

/// Draw a translucent panel centered on the screen with `lines` stacked
/// top to bottom and centered horizontally.
pub fn render_overlay_panel(
    renderer: &mut dyn Renderer,
    panel_color: Color,
    width: f32,
    height: f32,
    lines: &[PanelLine],
) {
    let cx = renderer.width() / 2.0;
    let cy = renderer.height() / 2.0;

    renderer.set_color(panel_color);
    renderer.draw_rect(cx, cy, width, height);

    // Center the block of lines on the panel
    let span = PANEL_LINE_SPACING * lines.len().saturating_sub(1) as f32;
    let mut y = cy + span / 2.0;
    for line in lines {
        renderer.draw_text(line.text, cx, y, line.scale, line.color, TextAlign::Center);
        y -= PANEL_LINE_SPACING;
    }
}

/// Score readout in the top-left corner.
pub fn render_score_hud(renderer: &mut dyn Renderer, score: u32, color: Color) {
    let y = renderer.height() - 20.0;
    renderer.draw_text(
        &format!("SCORE: {}", score),
        20.0,
        y,
        HUD_TEXT_SCALE,
        color,
        TextAlign::Left,
    );
}
