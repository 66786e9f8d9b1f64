//! Keyboard input: crossterm key events in, per-frame control queries out.
//!
//! [`KeyTracker`] turns the terminal's event stream into a set of held keys,
//! and [`InputState`] keeps this frame's and the previous frame's sets so the
//! games can ask both level-triggered ("is Up held?") and edge-triggered
//! ("was shoot pressed this frame?") questions.
//!
//! Plain terminals only report key presses (auto-repeat arrives as more
//! presses). When the terminal supports the keyboard enhancement protocol the
//! tracker also gets release events and holds are exact; otherwise a key
//! counts as held for a short window after its last press.

use crate::core::constants::KEY_HOLD_WINDOW_MS;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::{Duration, Instant};

/// Keys the collection responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    A,
    D,
    W,
    S,
    Space,
    Enter,
    Escape,
}

const KEY_COUNT: usize = 11;

impl Key {
    pub const ALL: [Key; KEY_COUNT] = [
        Key::Left,
        Key::Right,
        Key::Up,
        Key::Down,
        Key::A,
        Key::D,
        Key::W,
        Key::S,
        Key::Space,
        Key::Enter,
        Key::Escape,
    ];

    fn bit(self) -> u16 {
        1 << (self as u16)
    }

    /// Map a terminal key code to a collection key.
    pub fn from_code(code: KeyCode) -> Option<Key> {
        match code {
            KeyCode::Left => Some(Key::Left),
            KeyCode::Right => Some(Key::Right),
            KeyCode::Up => Some(Key::Up),
            KeyCode::Down => Some(Key::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => Some(Key::A),
            KeyCode::Char('d') | KeyCode::Char('D') => Some(Key::D),
            KeyCode::Char('w') | KeyCode::Char('W') => Some(Key::W),
            KeyCode::Char('s') | KeyCode::Char('S') => Some(Key::S),
            KeyCode::Char(' ') => Some(Key::Space),
            KeyCode::Enter => Some(Key::Enter),
            KeyCode::Esc => Some(Key::Escape),
            _ => None,
        }
    }
}

/// A small set of [`Key`]s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeySet(u16);

impl KeySet {
    pub const EMPTY: KeySet = KeySet(0);

    pub fn of(keys: &[Key]) -> Self {
        let mut set = KeySet::EMPTY;
        for &key in keys {
            set.insert(key);
        }
        set
    }

    pub fn insert(&mut self, key: Key) {
        self.0 |= key.bit();
    }

    pub fn remove(&mut self, key: Key) {
        self.0 &= !key.bit();
    }

    pub fn contains(&self, key: Key) -> bool {
        self.0 & key.bit() != 0
    }

    pub fn contains_any(&self, keys: &[Key]) -> bool {
        keys.iter().any(|&key| self.contains(key))
    }

    pub fn union(self, other: KeySet) -> KeySet {
        KeySet(self.0 | other.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

const LEFT_KEYS: &[Key] = &[Key::Left, Key::A];
const RIGHT_KEYS: &[Key] = &[Key::Right, Key::D];
const UP_KEYS: &[Key] = &[Key::Up, Key::W];
const DOWN_KEYS: &[Key] = &[Key::Down, Key::S];
const SHOOT_KEYS: &[Key] = &[Key::Space, Key::Up, Key::Enter];
const CONFIRM_KEYS: &[Key] = &[Key::Space, Key::Enter];
const ESCAPE_KEYS: &[Key] = &[Key::Escape];

/// Control state for one frame, plus the previous frame for edge detection.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    previous: KeySet,
    current: KeySet,
    /// Keys that produced a press event since the last frame.
    fresh: KeySet,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new frame. `held` is what the tracker considers down now,
    /// `fresh` the keys pressed since the previous frame (possibly already
    /// released again).
    pub fn update(&mut self, held: KeySet, fresh: KeySet) {
        self.previous = self.current;
        self.current = held.union(fresh);
        self.fresh = fresh;
    }

    fn held(&self, keys: &[Key]) -> bool {
        self.current.contains_any(keys)
    }

    fn just_pressed(&self, keys: &[Key]) -> bool {
        self.fresh.contains_any(keys)
            || (self.current.contains_any(keys) && !self.previous.contains_any(keys))
    }

    /// -1.0 for left, 1.0 for right, 0.0 for neither or both.
    pub fn horizontal_axis(&self) -> f32 {
        let mut axis = 0.0;
        if self.held(LEFT_KEYS) {
            axis -= 1.0;
        }
        if self.held(RIGHT_KEYS) {
            axis += 1.0;
        }
        axis
    }

    pub fn shoot_pressed(&self) -> bool {
        self.held(SHOOT_KEYS)
    }

    /// True only on the frame shoot goes from released to pressed.
    pub fn shoot_just_pressed(&self) -> bool {
        self.just_pressed(SHOOT_KEYS)
    }

    /// Like shoot, but without the Up arrow so menus can navigate with it.
    pub fn confirm_just_pressed(&self) -> bool {
        self.just_pressed(CONFIRM_KEYS)
    }

    pub fn up_pressed(&self) -> bool {
        self.held(UP_KEYS)
    }

    pub fn down_pressed(&self) -> bool {
        self.held(DOWN_KEYS)
    }

    pub fn escape_pressed(&self) -> bool {
        self.held(ESCAPE_KEYS)
    }

    pub fn escape_just_pressed(&self) -> bool {
        self.just_pressed(ESCAPE_KEYS)
    }
}

/// Folds crossterm key events into held/fresh key sets.
#[derive(Debug)]
pub struct KeyTracker {
    /// Whether the terminal reports key releases.
    release_events: bool,
    hold_window: Duration,
    /// Last press/repeat time per key, indexed like [`Key::ALL`].
    held_since: [Option<Instant>; KEY_COUNT],
    fresh: KeySet,
    quit_requested: bool,
}

impl KeyTracker {
    pub fn new(release_events: bool) -> Self {
        Self {
            release_events,
            hold_window: Duration::from_millis(KEY_HOLD_WINDOW_MS),
            held_since: [None; KEY_COUNT],
            fresh: KeySet::EMPTY,
            quit_requested: false,
        }
    }

    pub fn reports_releases(&self) -> bool {
        self.release_events
    }

    /// Ctrl-C was pressed.
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn handle_key(&mut self, event: KeyEvent, now: Instant) {
        if event.kind == KeyEventKind::Press
            && event.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(event.code, KeyCode::Char('c') | KeyCode::Char('C'))
        {
            self.quit_requested = true;
            return;
        }

        let Some(key) = Key::from_code(event.code) else {
            return;
        };
        let slot = &mut self.held_since[key as usize];
        match event.kind {
            KeyEventKind::Press => {
                // Without releases, auto-repeat arrives as more presses
                let repeating = !self.release_events
                    && slot.is_some_and(|since| now.duration_since(since) <= self.hold_window);
                *slot = Some(now);
                if !repeating {
                    self.fresh.insert(key);
                }
            }
            KeyEventKind::Repeat => *slot = Some(now),
            KeyEventKind::Release => *slot = None,
        }
    }

    /// Held and fresh keys for the frame starting at `now`. Clears the fresh
    /// set, so call once per frame.
    pub fn take_frame(&mut self, now: Instant) -> (KeySet, KeySet) {
        let mut held = KeySet::EMPTY;
        for (key, slot) in Key::ALL.iter().zip(self.held_since.iter_mut()) {
            if let Some(since) = *slot {
                let expired =
                    !self.release_events && now.duration_since(since) > self.hold_window;
                if expired {
                    *slot = None;
                } else {
                    held.insert(*key);
                }
            }
        }
        let fresh = std::mem::take(&mut self.fresh);
        (held, fresh)
    }

    /// Forget every held key, e.g. after switching screens.
    pub fn clear(&mut self) {
        self.held_since = [None; KEY_COUNT];
        self.fresh = KeySet::EMPTY;
    }
}
