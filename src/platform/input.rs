//! Coalesced input
//!
//! Host callbacks write into an `InputInbox`; the frame controller drains it
//! once per frame. The pointer is last-value-wins and fire is a single flag,
//! so neither ever queues.

use glam::Vec2;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    Escape,
    Other,
}

/// Key transition as reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Press,
    Release,
    Repeat,
}

/// A raw host event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer position in window coordinates (origin top-left, Y down)
    CursorPos { x: f64, y: f64 },
    Key { key: Key, action: KeyAction },
}

/// What one frame sees after draining the inbox
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    /// Aim point in playfield coordinates (origin bottom-left, Y up)
    pub aim: Vec2,
    pub fire: bool,
    pub quit: bool,
}

/// Single-slot mailbox for pointer, fire and quit signals
#[derive(Debug, Clone)]
pub struct InputInbox {
    window_height: f64,
    aim: Vec2,
    fire_requested: bool,
    quit_requested: bool,
}

impl InputInbox {
    /// Empty inbox aiming at `initial_aim` (playfield coordinates)
    pub fn new(window_height: f64, initial_aim: Vec2) -> Self {
        Self {
            window_height,
            aim: initial_aim,
            fire_requested: false,
            quit_requested: false,
        }
    }

    /// Pointer-motion callback
    pub fn on_cursor_pos(&mut self, x: f64, y: f64) {
        self.aim = Vec2::new(x as f32, (self.window_height - y) as f32);
    }

    /// Key callback; only presses count, repeats and releases are ignored
    pub fn on_key(&mut self, key: Key, action: KeyAction) {
        if action != KeyAction::Press {
            return;
        }
        match key {
            Key::Space => self.fire_requested = true,
            Key::Escape => self.quit_requested = true,
            Key::Other => {}
        }
    }

    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::CursorPos { x, y } => self.on_cursor_pos(x, y),
            InputEvent::Key { key, action } => self.on_key(key, action),
        }
    }

    /// Take this frame's input; the fire flag is reset
    pub fn drain(&mut self) -> FrameInput {
        FrameInput {
            aim: self.aim,
            fire: std::mem::take(&mut self.fire_requested),
            quit: self.quit_requested,
        }
    }
}
