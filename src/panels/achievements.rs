//! Hall of fame panel

use macroquad::prelude::*;

use crate::content::PortfolioContent;
use crate::ui::{badge, draw_rounded_rect, progress_bar, theme, wrap_text, Rect};

use super::{draw_heading, PanelAction};

pub fn draw(
    x: f32,
    y: f32,
    width: f32,
    content: &PortfolioContent,
) -> (f32, Option<PanelAction>) {
    let mut y = draw_heading(
        x,
        y,
        "Hall of Fame",
        "Celebrate milestones and achievements",
        theme::ACCENT,
    );

    let total: u32 = content
        .achievements
        .iter()
        .filter(|a| a.unlocked)
        .map(|a| a.points)
        .sum();
    draw_text(
        &format!("Total points earned: {}", total),
        x,
        y + 12.0,
        theme::FONT_SIZE_SMALL + 2.0,
        theme::ACCENT,
    );
    y += 28.0;

    for achievement in &content.achievements {
        let pad = 14.0;
        let inner_x = x + pad;
        let inner_w = width - pad * 2.0;
        let desc_lines = wrap_text(&achievement.description, theme::FONT_SIZE_CONTENT, inner_w);
        let card_h = pad * 2.0 + 24.0 + desc_lines.len() as f32 * 20.0 + 24.0;

        let rarity_color = achievement.rarity.color();
        let card = Rect::new(x, y, width, card_h);
        let alpha = if achievement.unlocked { 1.0 } else { 0.55 };
        draw_rounded_rect(card, 8.0, theme::with_alpha(theme::ROW_BG, alpha));
        draw_rectangle_lines(
            card.x,
            card.y,
            card.w,
            card.h,
            1.0,
            theme::with_alpha(rarity_color, 0.6 * alpha),
        );

        let mut cy = y + pad;
        let title_color = if achievement.unlocked {
            theme::TEXT_COLOR
        } else {
            theme::TEXT_DIM
        };
        draw_text(&achievement.title, inner_x, cy + 14.0, 18.0, title_color);

        let mut badge_x = inner_x + achievement.title.len() as f32 * 18.0 * 0.55 + 16.0;
        badge_x += badge(badge_x, cy, achievement.rarity.label(), rarity_color) + 6.0;
        if achievement.unlocked {
            badge(badge_x, cy, "Unlocked", theme::SUCCESS);
        }

        let points = format!("{} pts", achievement.points);
        let dims = measure_text(&points, None, 14, 1.0);
        draw_text(
            &points,
            card.right() - dims.width - pad,
            cy + 14.0,
            14.0,
            theme::ACCENT,
        );
        cy += 24.0;

        for line in &desc_lines {
            draw_text(line, inner_x, cy + 14.0, theme::FONT_SIZE_CONTENT, theme::TEXT_DIM);
            cy += 20.0;
        }

        // Progress toward the unlock
        let bar = Rect::new(inner_x, cy + 6.0, inner_w - 70.0, 8.0);
        let fraction = achievement.progress as f32 / achievement.max_progress as f32;
        progress_bar(bar, fraction, rarity_color);
        draw_text(
            &format!("{}/{}", achievement.progress, achievement.max_progress),
            bar.right() + 10.0,
            cy + 14.0,
            theme::FONT_SIZE_SMALL,
            theme::TEXT_DIM,
        );

        y = card.bottom() + 12.0;
    }

    (y, None)
}
