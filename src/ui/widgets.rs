//! Basic UI widgets
//!
//! Immediate-mode helpers shared by the hero screen, the world HUD and the
//! content panels: rounded cards, text buttons, badges, progress bars and
//! the stepped radial glow used to fake gradients.

use macroquad::prelude::*;

use super::{theme, Rect, UiContext};

/// Draw a rounded rectangle (approximated with overlapping rects + corner circles)
pub fn draw_rounded_rect(rect: Rect, r: f32, color: Color) {
    let r = r.min(rect.w * 0.5).min(rect.h * 0.5);
    draw_rectangle(rect.x + r, rect.y, rect.w - r * 2.0, rect.h, color);
    draw_rectangle(rect.x, rect.y + r, rect.w, rect.h - r * 2.0, color);
    draw_circle(rect.x + r, rect.y + r, r, color);
    draw_circle(rect.right() - r, rect.y + r, r, color);
    draw_circle(rect.x + r, rect.bottom() - r, r, color);
    draw_circle(rect.right() - r, rect.bottom() - r, r, color);
}

/// Draw a card: rounded background plus a thin border line
pub fn draw_card(rect: Rect, border: Color) {
    draw_rounded_rect(rect, 8.0, theme::CARD_BG);
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, border);
}

/// Approximate a radial gradient with stepped concentric circles.
///
/// Macroquad has no gradient primitive; a handful of translucent rings
/// reads as a soft glow at a fraction of the cost of a custom shader.
pub fn draw_radial_glow(x: f32, y: f32, radius: f32, color: Color, steps: u32) {
    let steps = steps.max(1);
    let step_alpha = color.a / steps as f32;
    for i in 0..steps {
        let t = 1.0 - i as f32 / steps as f32;
        draw_circle(x, y, radius * t, theme::with_alpha(color, step_alpha));
    }
}

/// Draw a text button, returns true if clicked
pub fn text_button(ctx: &UiContext, rect: Rect, label: &str, accent: Color) -> bool {
    let hovered = ctx.mouse.inside(&rect);

    let bg = if hovered {
        theme::with_alpha(accent, 0.35)
    } else {
        theme::with_alpha(accent, 0.15)
    };
    draw_rounded_rect(rect, 6.0, bg);
    draw_rectangle_lines(
        rect.x,
        rect.y,
        rect.w,
        rect.h,
        1.0,
        theme::with_alpha(accent, if hovered { 1.0 } else { 0.6 }),
    );

    let font_size = theme::FONT_SIZE_CONTENT;
    let dims = measure_text(label, None, font_size as u16, 1.0);
    let text_x = (rect.center_x() - dims.width * 0.5).round();
    let text_y = (rect.center_y() + dims.height * 0.5).round();
    let text_color = if hovered { WHITE } else { theme::TEXT_COLOR };
    draw_text(label, text_x, text_y, font_size, text_color);

    ctx.mouse.clicked(&rect)
}

/// Draw a small pill badge, returns the width consumed
pub fn badge(x: f32, y: f32, label: &str, accent: Color) -> f32 {
    let font_size = theme::FONT_SIZE_SMALL;
    let dims = measure_text(label, None, font_size as u16, 1.0);
    let pad = 6.0;
    let rect = Rect::new(x, y, dims.width + pad * 2.0, font_size + 6.0);
    draw_rounded_rect(rect, rect.h * 0.5, theme::with_alpha(accent, 0.2));
    draw_text(
        label,
        (x + pad).round(),
        (y + font_size + 1.0).round(),
        font_size,
        accent,
    );
    rect.w
}

/// Draw a horizontal progress bar filled to `fraction` (clamped 0-1)
pub fn progress_bar(rect: Rect, fraction: f32, accent: Color) {
    let fraction = fraction.clamp(0.0, 1.0);
    draw_rounded_rect(rect, rect.h * 0.5, theme::ROW_BG);
    if fraction > 0.0 {
        let fill = Rect::new(rect.x, rect.y, (rect.w * fraction).max(rect.h), rect.h);
        draw_rounded_rect(fill, rect.h * 0.5, accent);
    }
}

/// Draw a row of clickable external links separated by " | ".
/// Returns the URL of a clicked link, if any.
pub fn link_row<'a>(
    ctx: &UiContext,
    x: f32,
    y: f32,
    links: &[(&'a str, &'a str)],
    font_size: f32,
) -> Option<&'a str> {
    let mut cursor_x = x;
    let mut clicked = None;
    let separator = "  |  ";

    for (i, (label, url)) in links.iter().enumerate() {
        if i > 0 {
            draw_text(separator, cursor_x, y, font_size, theme::TEXT_DIM);
            cursor_x += measure_text(separator, None, font_size as u16, 1.0).width;
        }

        let dims = measure_text(label, None, font_size as u16, 1.0);
        let hit = Rect::new(cursor_x, y - dims.height, dims.width, dims.height + 4.0);
        let hovered = ctx.mouse.inside(&hit);
        let color = if hovered {
            theme::PRIMARY
        } else {
            theme::TEXT_DIM
        };
        draw_text(label, cursor_x, y, font_size, color);
        if hovered {
            draw_line(cursor_x, y + 2.0, cursor_x + dims.width, y + 2.0, 1.0, color);
        }
        if ctx.mouse.clicked(&hit) {
            clicked = Some(*url);
        }
        cursor_x += dims.width;
    }

    clicked
}

/// Wrap text to fit within a given pixel width.
///
/// Uses the same width approximation as the rest of the UI (measure_text per
/// word is noticeably slow on WASM); explicit newlines are preserved.
pub fn wrap_text(text: &str, font_size: f32, max_width: f32) -> Vec<String> {
    let char_width = font_size * 0.55;
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let words: Vec<&str> = paragraph.split_whitespace().collect();
        if words.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        for word in words {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current, word)
            };
            if candidate.len() as f32 * char_width <= max_width || current.is_empty() {
                current = candidate;
            } else {
                lines.push(current);
                current = word.to_string();
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_preserves_paragraphs() {
        let lines = wrap_text("one two\n\nthree", 16.0, 1000.0);
        assert_eq!(lines, vec!["one two", "", "three"]);
    }

    #[test]
    fn test_wrap_text_breaks_long_lines() {
        // 16px font -> ~8.8px per char; 60px fits ~6 chars per line
        let lines = wrap_text("alpha beta gamma", 16.0, 60.0);
        assert!(lines.len() >= 3);
        assert_eq!(lines[0], "alpha");
    }

    #[test]
    fn test_wrap_text_never_drops_words() {
        let text = "a handful of words that must all survive wrapping";
        let lines = wrap_text(text, 16.0, 80.0);
        let rejoined = lines.join(" ");
        for word in text.split_whitespace() {
            assert!(rejoined.contains(word), "lost word {word}");
        }
    }
}
