//! Drawing for the main menu.

use crate::menu::MainMenu;
use crate::ui::game_common::{HUD_TEXT_SCALE, TITLE_TEXT_SCALE};
use crate::ui::renderer::{Color, Renderer};

pub const MENU_TITLE: &str = "ARCADE COLLECTION";

const BACKGROUND: Color = Color::rgb(0.05, 0.05, 0.15);
const TITLE_COLOR: Color = Color::rgb(0.0, 1.0, 1.0);
const SELECTED_COLOR: Color = Color::rgb(1.0, 1.0, 0.0);
const ITEM_COLOR: Color = Color::rgb(0.6, 0.6, 0.6);
const HELP_COLOR: Color = Color::rgb(0.5, 0.5, 0.5);
const ITEM_SPACING: f32 = 60.0;

const HELP_LINES: [(&str, f32); 3] = [
    ("UP/DOWN or W/S to choose", 120.0),
    ("SPACE or ENTER to start", 90.0),
    ("ESC to quit", 60.0),
];

pub fn render_menu(renderer: &mut dyn Renderer, menu: &MainMenu) {
    renderer.clear(BACKGROUND);
    let cx = renderer.width() / 2.0;
    let height = renderer.height();

    renderer.draw_text_centered(MENU_TITLE, cx, height * 0.85, TITLE_TEXT_SCALE, TITLE_COLOR);

    let mut y = height * 0.6;
    for (i, item) in menu.items.iter().enumerate() {
        if i == menu.selected_index {
            renderer.draw_text_centered(
                &format!("> {} <", item),
                cx,
                y,
                HUD_TEXT_SCALE,
                SELECTED_COLOR,
            );
        } else {
            renderer.draw_text_centered(item, cx, y, 1.0, ITEM_COLOR);
        }
        y -= ITEM_SPACING;
    }

    for (text, y) in HELP_LINES {
        renderer.draw_text_centered(text, cx, y, 1.0, HELP_COLOR);
    }
}
