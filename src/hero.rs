//! Hero screen
//!
//! The introductory profile view: name, title, headline stats and the jump
//! into the explorable map. Shown once at startup; the map takes over after
//! launch.

use macroquad::prelude::*;

use crate::content::Profile;
use crate::ui::{draw_radial_glow, link_row, text_button, theme, wrap_text, Rect, UiContext};

/// User intent produced by the hero screen this frame
#[derive(Debug, Clone, PartialEq)]
pub enum HeroAction {
    StartExplore,
    OpenUrl(String),
}

/// Draw the hero screen, centered in `screen`
pub fn draw_hero(screen: Rect, profile: &Profile, ctx: &UiContext, time: f64) -> Option<HeroAction> {
    let mut action = None;

    // Floating ambient glows behind the content
    let drift = (time * 0.5).sin() as f32 * 20.0;
    draw_radial_glow(
        screen.x + screen.w * 0.15,
        screen.y + screen.h * 0.2 + drift,
        90.0,
        theme::with_alpha(theme::PRIMARY, 0.12),
        6,
    );
    draw_radial_glow(
        screen.right() - screen.w * 0.15,
        screen.bottom() - screen.h * 0.2 - drift,
        70.0,
        theme::with_alpha(theme::ACCENT, 0.1),
        6,
    );

    let content_w = (screen.w - 80.0).min(760.0);
    let cx = screen.center_x();
    let mut y = screen.y + screen.h * 0.18;

    // Badge line
    let badge_dims = measure_text(&profile.badge, None, 14, 1.0);
    draw_text(
        &profile.badge,
        (cx - badge_dims.width * 0.5).round(),
        y,
        14.0,
        theme::ACCENT,
    );
    y += 44.0;

    // Name with a soft echo behind it for a glow feel
    let name_dims = measure_text(&profile.name, None, theme::FONT_SIZE_TITLE as u16, 1.0);
    let name_x = (cx - name_dims.width * 0.5).round();
    draw_text(
        &profile.name,
        name_x + 2.0,
        y + 2.0,
        theme::FONT_SIZE_TITLE,
        theme::with_alpha(theme::SECONDARY, 0.5),
    );
    draw_text(&profile.name, name_x, y, theme::FONT_SIZE_TITLE, theme::PRIMARY);
    y += 40.0;

    let title_dims = measure_text(&profile.title, None, 22, 1.0);
    draw_text(
        &profile.title,
        (cx - title_dims.width * 0.5).round(),
        y,
        22.0,
        theme::TEXT_COLOR,
    );
    y += 36.0;

    for line in wrap_text(&profile.tagline, theme::FONT_SIZE_CONTENT, content_w) {
        let d = measure_text(&line, None, theme::FONT_SIZE_CONTENT as u16, 1.0);
        draw_text(
            &line,
            (cx - d.width * 0.5).round(),
            y,
            theme::FONT_SIZE_CONTENT,
            theme::TEXT_DIM,
        );
        y += 22.0;
    }
    y += 24.0;

    // Stat tiles
    if !profile.stats.is_empty() {
        let tile_w = content_w / profile.stats.len() as f32;
        let row_x = cx - content_w * 0.5;
        for (i, stat) in profile.stats.iter().enumerate() {
            let tile_cx = row_x + tile_w * (i as f32 + 0.5);
            let accents = [theme::PRIMARY, theme::ACCENT, theme::SECONDARY, theme::NEON_PINK];
            let accent = accents[i % accents.len()];
            let vd = measure_text(&stat.value, None, 30, 1.0);
            draw_text(&stat.value, (tile_cx - vd.width * 0.5).round(), y, 30.0, accent);
            let ld = measure_text(&stat.label, None, 12, 1.0);
            draw_text(
                &stat.label,
                (tile_cx - ld.width * 0.5).round(),
                y + 20.0,
                theme::FONT_SIZE_SMALL,
                theme::TEXT_DIM,
            );
        }
        y += 60.0;
    }

    // Launch button
    let button = Rect::new(cx - 130.0, y, 260.0, 42.0);
    if text_button(ctx, button, "Begin Cosmic Journey", theme::PRIMARY) {
        action = Some(HeroAction::StartExplore);
    }
    y += 66.0;

    // External links
    let links: Vec<(&str, &str)> = profile
        .links
        .iter()
        .map(|l| (l.label.as_str(), l.url.as_str()))
        .collect();
    if !links.is_empty() {
        let approx_w: f32 = links
            .iter()
            .map(|(label, _)| label.len() as f32 * 14.0 * 0.55 + 40.0)
            .sum();
        let start_x = (cx - approx_w * 0.5).max(screen.x + 20.0);
        if let Some(url) = link_row(ctx, start_x, y, &links, 14.0) {
            action = Some(HeroAction::OpenUrl(url.to_string()));
        }
    }

    action
}
