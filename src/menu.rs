//! Main menu: one entry per game plus Quit.

use crate::input::InputState;

/// What the player picked from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Start the game at this index of the collection.
    Play(usize),
    Quit,
}

pub const QUIT_LABEL: &str = "Quit";

#[derive(Debug, Clone)]
pub struct MainMenu {
    /// Game names in collection order, followed by the Quit entry.
    pub items: Vec<String>,
    pub selected_index: usize,
    /// Up/Down are level-triggered, so the menu remembers last frame's state
    /// to move one step per press.
    prev_up: bool,
    prev_down: bool,
}

impl MainMenu {
    pub fn new<'a>(game_names: impl IntoIterator<Item = &'a str>) -> Self {
        let mut items: Vec<String> = game_names.into_iter().map(str::to_string).collect();
        items.push(QUIT_LABEL.to_string());
        Self {
            items,
            selected_index: 0,
            prev_up: false,
            prev_down: false,
        }
    }

    pub fn navigate_up(&mut self) {
        self.selected_index = if self.selected_index == 0 {
            self.items.len() - 1
        } else {
            self.selected_index - 1
        };
    }

    pub fn navigate_down(&mut self) {
        self.selected_index = (self.selected_index + 1) % self.items.len();
    }

    /// The action for the highlighted entry.
    pub fn selected_action(&self) -> MenuAction {
        if self.selected_index + 1 == self.items.len() {
            MenuAction::Quit
        } else {
            MenuAction::Play(self.selected_index)
        }
    }

    /// Process one frame of input, returning an action when an entry is
    /// activated.
    pub fn update(&mut self, input: &InputState) -> Option<MenuAction> {
        let up = input.up_pressed();
        let down = input.down_pressed();
        if up && !self.prev_up {
            self.navigate_up();
        }
        if down && !self.prev_down {
            self.navigate_down();
        }
        self.prev_up = up;
        self.prev_down = down;

        input.confirm_just_pressed().then(|| self.selected_action())
    }

    /// Forget held navigation keys, e.g. when returning from a game.
    pub fn clear_input(&mut self) {
        self.prev_up = false;
        self.prev_down = false;
    }
}
