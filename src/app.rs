//! Top-level state machine switching between the menu and the games.

use crate::core::game::Game;
use crate::games;
use crate::input::InputState;
use crate::menu::{MainMenu, MenuAction};
use crate::ui::menu_scene::render_menu;
use crate::ui::renderer::Renderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Menu,
    InGame,
    Quitting,
}

pub struct App {
    pub state: AppState,
    games: Vec<Box<dyn Game>>,
    pub menu: MainMenu,
    /// Index of the game being played; kept after returning to the menu.
    current: Option<usize>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(games::collection())
    }
}

impl App {
    pub fn new(games: Vec<Box<dyn Game>>) -> Self {
        let menu = MainMenu::new(games.iter().map(|g| g.name()));
        Self {
            state: AppState::Menu,
            games,
            menu,
            current: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state != AppState::Quitting
    }

    pub fn current_game(&self) -> Option<&dyn Game> {
        self.current.and_then(|i| self.games.get(i)).map(|g| g.as_ref())
    }

    /// Border title for the play field.
    pub fn title(&self) -> &'static str {
        match (self.state, self.current_game()) {
            (AppState::InGame, Some(game)) => game.name(),
            _ => "Arcade",
        }
    }

    pub fn request_quit(&mut self) {
        log::info!("quit requested");
        self.state = AppState::Quitting;
    }

    fn start_game(&mut self, index: usize) {
        let Some(game) = self.games.get_mut(index) else {
            log::warn!("menu selected unknown game {}", index);
            return;
        };
        game.reset();
        log::info!("starting {}", game.name());
        self.current = Some(index);
        self.state = AppState::InGame;
    }

    pub fn update(&mut self, dt: f32, input: &InputState) {
        match self.state {
            AppState::Menu => {
                if input.escape_just_pressed() {
                    self.request_quit();
                    return;
                }
                match self.menu.update(input) {
                    Some(MenuAction::Play(index)) => self.start_game(index),
                    Some(MenuAction::Quit) => self.request_quit(),
                    None => {}
                }
            }
            AppState::InGame => {
                if input.escape_just_pressed() {
                    if let Some(game) = self.current_game() {
                        log::info!("left {} with score {}", game.name(), game.score());
                    }
                    self.menu.clear_input();
                    self.state = AppState::Menu;
                    return;
                }
                if let Some(game) = self.current.and_then(|i| self.games.get_mut(i)) {
                    game.update(dt, input);
                }
            }
            AppState::Quitting => {}
        }
    }

    pub fn render(&self, renderer: &mut dyn Renderer) {
        match self.state {
            AppState::Menu => render_menu(renderer, &self.menu),
            AppState::InGame => {
                if let Some(game) = self.current_game() {
                    game.render(renderer);
                }
            }
            AppState::Quitting => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::game::GameState;
    use crate::input::{Key, KeySet};
    use crate::ui::renderer::DisplayList;

    fn press(app: &mut App, input: &mut InputState, key: Key) {
        input.update(KeySet::of(&[key]), KeySet::of(&[key]));
        app.update(1.0 / 60.0, input);
        input.update(KeySet::EMPTY, KeySet::EMPTY);
        app.update(1.0 / 60.0, input);
    }

    #[test]
    fn test_starts_in_menu() {
        let app = App::default();
        assert_eq!(app.state, AppState::Menu);
        assert!(app.is_running());
        assert!(app.current_game().is_none());
        assert_eq!(app.title(), "Arcade");
    }

    #[test]
    fn test_escape_from_menu_quits() {
        let mut app = App::default();
        let mut input = InputState::new();
        press(&mut app, &mut input, Key::Escape);
        assert_eq!(app.state, AppState::Quitting);
        assert!(!app.is_running());
    }

    #[test]
    fn test_select_game_and_escape_back() {
        let mut app = App::default();
        let mut input = InputState::new();
        press(&mut app, &mut input, Key::Enter);
        assert_eq!(app.state, AppState::InGame);
        assert_eq!(app.title(), "Space Invaders");

        press(&mut app, &mut input, Key::Escape);
        assert_eq!(app.state, AppState::Menu);
        assert!(app.is_running());
    }

    #[test]
    fn test_quit_item() {
        let mut app = App::default();
        let mut input = InputState::new();
        press(&mut app, &mut input, Key::Up);
        assert_eq!(app.menu.selected_action(), MenuAction::Quit);
        press(&mut app, &mut input, Key::Space);
        assert_eq!(app.state, AppState::Quitting);
    }

    #[test]
    fn test_selecting_resets_game() {
        let mut app = App::default();
        let mut input = InputState::new();
        press(&mut app, &mut input, Key::Down);
        press(&mut app, &mut input, Key::Enter);
        assert_eq!(app.title(), "Flappy Bird");

        // Let the bird fall to the floor
        for _ in 0..120 {
            app.update(1.0 / 60.0, &input);
        }
        assert_eq!(app.current_game().map(|g| g.state()), Some(GameState::GameOver));

        press(&mut app, &mut input, Key::Escape);
        press(&mut app, &mut input, Key::Enter);
        assert_eq!(app.current_game().map(|g| g.state()), Some(GameState::Playing));
    }

    #[test]
    fn test_render_dispatch() {
        let mut app = App::default();
        let mut list = DisplayList::new(800.0, 600.0);
        app.render(&mut list);
        assert!(list.has_text("ARCADE COLLECTION"));

        let mut input = InputState::new();
        press(&mut app, &mut input, Key::Enter);
        app.render(&mut list);
        assert!(!list.has_text("ARCADE COLLECTION"));
        assert!(list.has_text("SCORE: 0"));
    }
}
