//! Drawing: the renderer abstraction, per-screen scenes and the terminal
//! canvas backend.

pub mod canvas;
pub mod flappy_scene;
pub mod game_common;
pub mod menu_scene;
pub mod renderer;
pub mod space_invaders_scene;
