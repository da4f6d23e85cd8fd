//! Quest board panel - projects presented as quests

use macroquad::prelude::*;

use crate::content::{PortfolioContent, QuestStatus};
use crate::ui::{badge, draw_rounded_rect, text_button, theme, wrap_text, Rect, UiContext};

use super::{draw_heading, draw_tag_row, PanelAction};

pub fn draw(
    x: f32,
    y: f32,
    width: f32,
    content: &PortfolioContent,
    ctx: &UiContext,
) -> (f32, Option<PanelAction>) {
    let mut action = None;
    let mut y = draw_heading(
        x,
        y,
        "Projects Factory",
        "Explore innovative projects and solutions",
        theme::SECONDARY,
    );

    for quest in &content.quests {
        let locked = quest.status == QuestStatus::Locked;
        let card_top = y;
        let pad = 14.0;
        let inner_x = x + pad;
        let inner_w = width - pad * 2.0;

        // Measure body text first so the card height is exact
        let desc_lines = wrap_text(&quest.description, theme::FONT_SIZE_CONTENT, inner_w);

        let mut cy = card_top + pad;

        // Title row with difficulty + status badges (drawn after the card bg,
        // so just advance the cursor for now)
        let title_h = 24.0;
        let desc_h = desc_lines.len() as f32 * 20.0;
        let tags_h = 28.0 * (1.0 + (quest.technologies.len() as f32 * 90.0 / inner_w).floor());
        let buttons_h = if locked { 0.0 } else { 34.0 };
        let card_h = pad * 2.0 + title_h + desc_h + tags_h + buttons_h + 8.0;

        let card = Rect::new(x, card_top, width, card_h);
        let dim = if locked { 0.45 } else { 1.0 };
        draw_rounded_rect(card, 8.0, theme::with_alpha(theme::ROW_BG, dim));
        draw_rectangle_lines(
            card.x,
            card.y,
            card.w,
            card.h,
            1.0,
            theme::with_alpha(quest.difficulty.color(), 0.5 * dim),
        );

        // Title + badges
        let title_color = if locked { theme::TEXT_DIM } else { theme::TEXT_COLOR };
        draw_text(&quest.title, inner_x, cy + 14.0, 18.0, title_color);
        let mut badge_x = inner_x + quest.title.len() as f32 * 18.0 * 0.55 + 16.0;
        badge_x += badge(badge_x, cy, quest.difficulty.label(), quest.difficulty.color()) + 6.0;
        badge(badge_x, cy, quest.status.label(), quest.status.color());

        // Reward on the right edge
        let reward = format!("+{} XP", quest.reward);
        let reward_dims = measure_text(&reward, None, 14, 1.0);
        draw_text(
            &reward,
            card.right() - reward_dims.width - pad,
            cy + 14.0,
            14.0,
            theme::ACCENT,
        );
        cy += title_h;

        // Description
        for line in &desc_lines {
            draw_text(line, inner_x, cy + 14.0, theme::FONT_SIZE_CONTENT, theme::TEXT_DIM);
            cy += 20.0;
        }
        cy += 4.0;

        // Technology tags
        cy = draw_tag_row(inner_x, cy, inner_w, &quest.technologies, quest.difficulty.color());

        // Demo / repo buttons (hidden while locked)
        if !locked {
            let mut bx = inner_x;
            if let Some(url) = &quest.demo_url {
                let rect = Rect::new(bx, cy, 110.0, 26.0);
                if text_button(ctx, rect, "Live Demo", theme::PRIMARY) {
                    action = Some(PanelAction::OpenUrl(url.clone()));
                }
                bx += 120.0;
            }
            if let Some(url) = &quest.repo_url {
                let rect = Rect::new(bx, cy, 110.0, 26.0);
                if text_button(ctx, rect, "Source", theme::SECONDARY) {
                    action = Some(PanelAction::OpenUrl(url.clone()));
                }
            }
        }

        y = card.bottom() + 12.0;
    }

    (y, action)
}
