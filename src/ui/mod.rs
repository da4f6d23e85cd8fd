//! Immediate-mode UI toolkit
//!
//! Design principles (shared by every screen):
//! - Immediate mode: no retained widget state, rebuilt each frame
//! - Simple rectangle-based layout
//! - Macroquad integration for rendering

mod input;
mod rect;
mod text_input;
pub mod theme;
mod widgets;

pub use input::*;
pub use rect::*;
pub use text_input::*;
pub use widgets::*;
