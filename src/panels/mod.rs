//! Zone content panels
//!
//! Each map zone reveals one panel inside the content modal. Panels draw
//! read-only content data; the only state they own is the modal scroll
//! offset and the contact form.

mod achievements;
mod contact;
mod journey;
mod quests;
mod skills;

pub use contact::ContactForm;

use macroquad::prelude::*;

use crate::content::PortfolioContent;
use crate::ui::{theme, Rect, UiContext};
use crate::world::ZoneId;

/// Something a panel asks the app to do
#[derive(Debug, Clone, PartialEq)]
pub enum PanelAction {
    OpenUrl(String),
}

/// Mutable state shared by all panels
pub struct PanelState {
    pub scroll_y: f32,
    pub contact: ContactForm,
}

impl PanelState {
    pub fn new() -> Self {
        Self {
            scroll_y: 0.0,
            contact: ContactForm::new(),
        }
    }

    /// Reset per-visit state when a modal opens
    pub fn on_modal_open(&mut self) {
        self.scroll_y = 0.0;
        self.contact.blur();
    }
}

impl Default for PanelState {
    fn default() -> Self {
        Self::new()
    }
}

/// Draw the panel for `zone` inside `rect`, with wheel scrolling and
/// scissor clipping so content cannot bleed into the modal chrome.
pub fn draw_panel(
    zone: ZoneId,
    rect: Rect,
    content: &PortfolioContent,
    ctx: &UiContext,
    state: &mut PanelState,
) -> Option<PanelAction> {
    // Scroll with the wheel; clamped after drawing once the height is known
    if ctx.mouse.inside(&rect) {
        state.scroll_y += ctx.mouse.scroll * 3.0;
        state.scroll_y = state.scroll_y.min(0.0);
    }

    let dpi = screen_dpi_scale();
    gl_use_default_material();
    unsafe {
        get_internal_gl().quad_gl.scissor(Some((
            (rect.x * dpi) as i32,
            (rect.y * dpi) as i32,
            (rect.w * dpi) as i32,
            (rect.h * dpi) as i32,
        )));
    }

    let padding = 20.0;
    let inner = rect.pad(padding);
    let start_y = inner.y + state.scroll_y;

    let (end_y, action) = match zone {
        ZoneId::Skills => skills::draw(inner.x, start_y, inner.w, content, ctx),
        ZoneId::Projects => quests::draw(inner.x, start_y, inner.w, content, ctx),
        ZoneId::Achievements => achievements::draw(inner.x, start_y, inner.w, content),
        ZoneId::Contact => contact::draw(inner.x, start_y, inner.w, content, ctx, &mut state.contact),
        ZoneId::Experience => journey::draw_experience(inner.x, start_y, inner.w, content),
        ZoneId::Education => journey::draw_education(inner.x, start_y, inner.w, content),
    };

    unsafe {
        get_internal_gl().quad_gl.scissor(None);
    }

    // Clamp scroll to actual content height
    let content_height = end_y - start_y;
    let max_scroll = -(content_height - inner.h).max(0.0);
    state.scroll_y = state.scroll_y.max(max_scroll);

    action
}

/// Shared heading: emblem-colored title plus a dim subtitle. Returns next y.
pub(crate) fn draw_heading(x: f32, y: f32, title: &str, subtitle: &str, accent: Color) -> f32 {
    draw_text(title, x, y + 20.0, theme::FONT_SIZE_HEADING, accent);
    let mut y = y + 32.0;
    if !subtitle.is_empty() {
        draw_text(subtitle, x, y + 12.0, theme::FONT_SIZE_SMALL + 2.0, theme::TEXT_DIM);
        y += 26.0;
    }
    y + 6.0
}

/// Shared tag row: small pill badges wrapping onto new lines. Returns next y.
pub(crate) fn draw_tag_row(x: f32, y: f32, width: f32, tags: &[String], accent: Color) -> f32 {
    let mut cursor_x = x;
    let mut cursor_y = y;
    for tag in tags {
        let est_w = tag.len() as f32 * theme::FONT_SIZE_SMALL * 0.55 + 16.0;
        if cursor_x + est_w > x + width && cursor_x > x {
            cursor_x = x;
            cursor_y += 24.0;
        }
        let w = crate::ui::badge(cursor_x, cursor_y, tag, accent);
        cursor_x += w + 6.0;
    }
    cursor_y + 28.0
}
