//! Screen and frame-pacing constants shared by every game.

// Play field in world units; origin at the bottom-left, y grows upwards
pub const SCREEN_WIDTH: f32 = 800.0;
pub const SCREEN_HEIGHT: f32 = 600.0;

// Frame pacing
pub const DEFAULT_TARGET_FPS: u32 = 60;
pub const MIN_TARGET_FPS: u32 = 10;
pub const MAX_TARGET_FPS: u32 = 240;
/// Longest simulated step; larger gaps (stalls, suspends) are clamped to this.
pub const MAX_FRAME_DT: f32 = 1.0 / 30.0;

/// How long a key counts as held after its last press/repeat event on
/// terminals that never report releases. Must outlast the initial
/// key-repeat delay of common terminals.
pub const KEY_HOLD_WINDOW_MS: u64 = 550;
