//! The contract every game in the collection implements.

use crate::input::InputState;
use crate::ui::renderer::Renderer;

/// Lifecycle state of a game. `Menu` and `Paused` are part of the shared
/// vocabulary but neither bundled game enters them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Menu,
    Playing,
    Paused,
    GameOver,
}

/// A playable game driven by the app's frame loop.
///
/// The menu and app layers only talk to games through this trait, so they
/// never know which game is active.
pub trait Game {
    /// Advance the game by `dt` seconds using this frame's input.
    fn update(&mut self, dt: f32, input: &InputState);

    /// Draw the current frame.
    fn render(&self, renderer: &mut dyn Renderer);

    fn state(&self) -> GameState;

    /// Discard all entities and start over.
    fn reset(&mut self);

    fn name(&self) -> &'static str;

    fn score(&self) -> u32;
}
