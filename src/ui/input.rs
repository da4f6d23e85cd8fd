//! Input state for UI interaction

use super::Rect;

/// Mouse button state for one frame
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub left_down: bool,
    pub left_pressed: bool, // Just pressed this frame
    pub scroll: f32,        // Scroll wheel delta
}

impl MouseState {
    /// Check if mouse is inside a rect
    pub fn inside(&self, rect: &Rect) -> bool {
        rect.contains(self.x, self.y)
    }

    /// Check if mouse just clicked inside a rect
    pub fn clicked(&self, rect: &Rect) -> bool {
        self.left_pressed && rect.contains(self.x, self.y)
    }

    /// Copy with all button/scroll activity stripped, position kept.
    /// Used to blank out input for widgets behind a modal overlay.
    fn inert(&self) -> Self {
        Self {
            x: self.x,
            y: self.y,
            ..Self::default()
        }
    }
}

/// UI context passed through the frame
pub struct UiContext {
    pub mouse: MouseState,
    /// Real mouse state saved while a modal is blocking background input
    saved_mouse: Option<MouseState>,
}

impl UiContext {
    pub fn new() -> Self {
        Self {
            mouse: MouseState::default(),
            saved_mouse: None,
        }
    }

    /// Reset at start of frame (call before any UI code)
    pub fn begin_frame(&mut self, mouse: MouseState) {
        self.mouse = mouse;
        self.saved_mouse = None;
    }

    /// Block background input while an overlay is open. Widgets drawn after
    /// this call see the pointer position but no clicks or scrolling.
    pub fn begin_modal(&mut self) {
        if self.saved_mouse.is_none() {
            self.saved_mouse = Some(self.mouse);
            self.mouse = self.mouse.inert();
        }
    }

    /// Restore real input so the overlay itself can receive clicks
    pub fn end_modal(&mut self) {
        if let Some(real) = self.saved_mouse.take() {
            self.mouse = real;
        }
    }
}

impl Default for UiContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_blocks_clicks() {
        let mut ctx = UiContext::new();
        ctx.begin_frame(MouseState {
            x: 10.0,
            y: 10.0,
            left_pressed: true,
            left_down: true,
            ..Default::default()
        });

        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(ctx.mouse.clicked(&rect));

        ctx.begin_modal();
        assert!(!ctx.mouse.clicked(&rect));
        // Position survives so hover styling stays stable
        assert!(ctx.mouse.inside(&rect));

        ctx.end_modal();
        assert!(ctx.mouse.clicked(&rect));
    }
}
