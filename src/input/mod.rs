//! Action-based input
//!
//! Maps raw keys to game actions so the world logic never touches key codes,
//! and paces held-direction movement with a repeat gate (the on-screen touch
//! buttons go through the same actions, so both channels behave identically).

mod repeat;

pub use repeat::RepeatGate;

use macroquad::prelude::*;

/// Discrete movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    /// Unit step on each axis (y grows downward)
    pub fn delta(&self) -> (f32, f32) {
        match self {
            Dir::Up => (0.0, -1.0),
            Dir::Down => (0.0, 1.0),
            Dir::Left => (-1.0, 0.0),
            Dir::Right => (1.0, 0.0),
        }
    }
}

/// The game actions the world reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Move(Dir),
    Confirm,
    Cancel,
}

/// Keyboard state polled once per frame
pub struct InputState {
    held_dirs: Vec<Dir>,
    gate: RepeatGate,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            held_dirs: Vec::new(),
            gate: RepeatGate::new(),
        }
    }

    /// Directions currently held on the keyboard (arrows or WASD)
    fn poll_held_dirs() -> Vec<Dir> {
        let mut dirs = Vec::new();
        if is_key_down(KeyCode::Up) || is_key_down(KeyCode::W) {
            dirs.push(Dir::Up);
        }
        if is_key_down(KeyCode::Down) || is_key_down(KeyCode::S) {
            dirs.push(Dir::Down);
        }
        if is_key_down(KeyCode::Left) || is_key_down(KeyCode::A) {
            dirs.push(Dir::Left);
        }
        if is_key_down(KeyCode::Right) || is_key_down(KeyCode::D) {
            dirs.push(Dir::Right);
        }
        dirs
    }

    /// Poll the keyboard and return the actions fired this frame.
    /// Held directions repeat at the gate's cadence; confirm/cancel are
    /// edge-triggered.
    pub fn poll(&mut self, dt: f32) -> Vec<Action> {
        let mut actions = Vec::new();

        let dirs = Self::poll_held_dirs();
        if dirs != self.held_dirs {
            // The held set changed: restart the repeat cadence
            self.gate.reset();
            self.held_dirs = dirs;
        }
        if self.gate.fire(!self.held_dirs.is_empty(), dt) {
            for dir in &self.held_dirs {
                actions.push(Action::Move(*dir));
            }
        }

        if is_key_pressed(KeyCode::Enter) {
            actions.push(Action::Confirm);
        }
        if is_key_pressed(KeyCode::Escape) {
            actions.push(Action::Cancel);
        }

        actions
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
