//! Skill tree panel

use macroquad::prelude::*;

use crate::content::{PortfolioContent, SkillCategory};
use crate::ui::{badge, draw_rounded_rect, progress_bar, theme, Rect, UiContext};

use super::{draw_heading, PanelAction};

const ROW_HEIGHT: f32 = 56.0;

pub fn draw(
    x: f32,
    y: f32,
    width: f32,
    content: &PortfolioContent,
    _ctx: &UiContext,
) -> (f32, Option<PanelAction>) {
    let mut y = draw_heading(
        x,
        y,
        "Skills Arena",
        "Master technical skills and unlock abilities",
        theme::PRIMARY,
    );

    for skill in &content.skills {
        let row = Rect::new(x, y, width, ROW_HEIGHT - 8.0);
        draw_rounded_rect(row, 6.0, theme::ROW_BG);

        let accent = skill.category.color();

        // Level disc on the left
        let disc_x = row.x + 24.0;
        let disc_y = row.center_y();
        draw_circle(disc_x, disc_y, 16.0, theme::with_alpha(accent, 0.25));
        draw_circle_lines(disc_x, disc_y, 16.0, 1.5, accent);
        let level = skill.level.to_string();
        let dims = measure_text(&level, None, 16, 1.0);
        draw_text(
            &level,
            (disc_x - dims.width * 0.5).round(),
            (disc_y + dims.height * 0.5).round(),
            16.0,
            accent,
        );

        // Name, level fraction and experience bar
        let text_x = row.x + 52.0;
        draw_text(&skill.name, text_x, row.y + 20.0, theme::FONT_SIZE_CONTENT, theme::TEXT_COLOR);
        let fraction_label = format!("{}/{}", skill.level, skill.max_level);
        let frac_dims = measure_text(&fraction_label, None, 12, 1.0);
        draw_text(
            &fraction_label,
            row.right() - frac_dims.width - 70.0,
            row.y + 20.0,
            theme::FONT_SIZE_SMALL,
            theme::TEXT_DIM,
        );

        let bar = Rect::new(text_x, row.y + 28.0, row.w - 52.0 - 80.0, 8.0);
        progress_bar(bar, skill.experience as f32 / 100.0, accent);

        // EXP percentage on the right
        let exp_label = format!("{}%", skill.experience);
        draw_text(
            &exp_label,
            row.right() - 52.0,
            row.y + 32.0,
            theme::FONT_SIZE_CONTENT,
            accent,
        );

        y += ROW_HEIGHT;
    }

    // Category legend
    y += 6.0;
    let mut legend_x = x;
    for category in [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Design,
        SkillCategory::Tools,
    ] {
        let w = badge(legend_x, y, category.label(), category.color());
        legend_x += w + 8.0;
    }
    y += 34.0;

    (y, None)
}
