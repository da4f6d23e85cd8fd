//! Experience and education panels
//!
//! Both render the same timeline-card shape, so they share a row helper.

use macroquad::prelude::*;

use crate::content::PortfolioContent;
use crate::ui::{draw_rounded_rect, theme, wrap_text, Rect};

use super::{draw_heading, draw_tag_row, PanelAction};

pub fn draw_experience(
    x: f32,
    y: f32,
    width: f32,
    content: &PortfolioContent,
) -> (f32, Option<PanelAction>) {
    let mut y = draw_heading(
        x,
        y,
        "Experience Galaxy",
        "Journey through professional experiences",
        theme::NEON_BLUE,
    );

    for entry in &content.experience {
        let subtitle = format!("{} | {}", entry.company, entry.period);
        y = timeline_card(
            x,
            y,
            width,
            &entry.role,
            &subtitle,
            "",
            &entry.summary,
            &entry.technologies,
            theme::NEON_BLUE,
        );
    }

    (y, None)
}

pub fn draw_education(
    x: f32,
    y: f32,
    width: f32,
    content: &PortfolioContent,
) -> (f32, Option<PanelAction>) {
    let mut y = draw_heading(
        x,
        y,
        "Learning Cosmos",
        "Discover educational journeys and knowledge",
        theme::NEON_ORANGE,
    );

    for entry in &content.education {
        let subtitle = format!("{} | {}", entry.institution, entry.period);
        y = timeline_card(
            x,
            y,
            width,
            &entry.title,
            &subtitle,
            &entry.note,
            &entry.summary,
            &entry.topics,
            theme::NEON_ORANGE,
        );
    }

    (y, None)
}

/// One timeline entry card. Returns the y below the card.
#[allow(clippy::too_many_arguments)]
fn timeline_card(
    x: f32,
    y: f32,
    width: f32,
    title: &str,
    subtitle: &str,
    note: &str,
    summary: &str,
    tags: &[String],
    accent: Color,
) -> f32 {
    let pad = 14.0;
    let inner_x = x + pad;
    let inner_w = width - pad * 2.0;

    let summary_lines = wrap_text(summary, theme::FONT_SIZE_CONTENT, inner_w);
    let note_h = if note.is_empty() { 0.0 } else { 22.0 };
    let tags_h = 28.0 * (1.0 + (tags.len() as f32 * 110.0 / inner_w).floor());
    let card_h = pad * 2.0 + 24.0 + 18.0 + note_h + summary_lines.len() as f32 * 20.0 + tags_h;

    let card = Rect::new(x, y, width, card_h);
    draw_rounded_rect(card, 8.0, theme::ROW_BG);
    draw_rectangle_lines(card.x, card.y, card.w, card.h, 1.0, theme::with_alpha(accent, 0.4));

    // Timeline dot on the card's left edge
    draw_circle(card.x, card.center_y(), 4.0, accent);

    let mut cy = y + pad;
    draw_text(title, inner_x, cy + 14.0, 18.0, accent);
    cy += 24.0;
    draw_text(subtitle, inner_x, cy + 11.0, theme::FONT_SIZE_SMALL + 2.0, theme::TEXT_COLOR);
    cy += 18.0;

    if !note.is_empty() {
        crate::ui::badge(inner_x, cy, note, accent);
        cy += note_h;
    }

    for line in &summary_lines {
        draw_text(line, inner_x, cy + 14.0, theme::FONT_SIZE_CONTENT, theme::TEXT_DIM);
        cy += 20.0;
    }

    draw_tag_row(inner_x, cy + 4.0, inner_w, tags, accent);

    card.bottom() + 12.0
}
