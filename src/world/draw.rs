//! World screen rendering: map, avatar, HUD and overlays
//!
//! Every draw function is immediate-mode and returns the action the user
//! triggered this frame (if any); the app applies it to the state machine.

use macroquad::prelude::*;

use crate::content::PortfolioContent;
use crate::input::Dir;
use crate::panels::{draw_panel, PanelAction, PanelState};
use crate::ui::{
    draw_card, draw_radial_glow, draw_rounded_rect, text_button, theme, wrap_text, Rect,
    UiContext,
};

use super::{Phase, WorldNav, Zone, ZONES};

/// Window width below which the touch controls appear
const TOUCH_BREAKPOINT: f32 = 640.0;

/// User intent produced by the world screen this frame
#[derive(Debug, Clone, PartialEq)]
pub enum WorldAction {
    Start,
    EnterZone,
    CloseModal,
    Move(Dir),
    OpenUrl(String),
}

/// Map a percent-space point to screen pixels
fn to_px(screen: &Rect, x: f32, y: f32) -> (f32, f32) {
    (
        screen.x + x / 100.0 * screen.w,
        screen.y + y / 100.0 * screen.h,
    )
}

/// Draw the map: zones, avatar and HUD. Suspended phases still render the
/// map underneath their overlay; the caller blanks pointer input for it.
pub fn draw_map(
    screen: Rect,
    nav: &WorldNav,
    ctx: &UiContext,
    time: f64,
) -> Option<WorldAction> {
    let mut action = None;
    let current = nav.current_zone();

    // Faint travel-bounds line; the avatar cannot cross it
    let world = nav.world();
    let (bx, by) = to_px(&screen, 0.0, 0.0);
    let (bw, bh) = (
        world.width / 100.0 * screen.w,
        world.height / 100.0 * screen.h,
    );
    draw_rectangle_lines(bx, by, bw, bh, 1.0, theme::with_alpha(theme::BORDER_COLOR, 0.35));

    for zone in &ZONES {
        let is_current = current.map(|z| z.id) == Some(zone.id);
        if let Some(a) = draw_zone_card(&screen, zone, is_current, ctx, time) {
            action = Some(a);
        }
    }

    draw_avatar(&screen, nav, time);
    draw_hud(&screen, nav, ctx);

    if screen.w < TOUCH_BREAKPOINT {
        if let Some(a) = draw_touch_controls(&screen, ctx) {
            action = Some(a);
        }
    }

    action
}

fn draw_zone_card(
    screen: &Rect,
    zone: &Zone,
    is_current: bool,
    ctx: &UiContext,
    time: f64,
) -> Option<WorldAction> {
    let (zx, zy) = to_px(screen, zone.rect.x, zone.rect.y);
    let zw = zone.rect.w / 100.0 * screen.w;
    let zh = zone.rect.h / 100.0 * screen.h;

    // Current zone swells slightly, centered on itself
    let (rect, border_w) = if is_current {
        let grow = 0.05;
        (
            Rect::new(
                zx - zw * grow * 0.5,
                zy - zh * grow * 0.5,
                zw * (1.0 + grow),
                zh * (1.0 + grow),
            ),
            3.0,
        )
    } else {
        (Rect::new(zx, zy, zw, zh), 1.5)
    };

    let accent = zone.accent();
    let hovered = ctx.mouse.inside(&rect);
    let bg_alpha = if is_current {
        0.28
    } else if hovered {
        0.18
    } else {
        0.12
    };
    draw_rounded_rect(rect, 10.0, theme::with_alpha(accent, bg_alpha));
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, border_w, accent);

    // Emblem disc with the zone glyph
    let disc_y = rect.y + rect.h * 0.3;
    let pulse = if is_current {
        ((time * 4.0).sin() as f32 * 0.5 + 0.5) * 4.0
    } else {
        0.0
    };
    draw_circle(rect.center_x(), disc_y, 14.0 + pulse, theme::with_alpha(accent, 0.25));
    draw_circle(rect.center_x(), disc_y, 12.0, theme::with_alpha(accent, 0.5));
    let glyph = zone.emblem.to_string();
    let dims = measure_text(&glyph, None, 16, 1.0);
    draw_text(
        &glyph,
        (rect.center_x() - dims.width * 0.5).round(),
        (disc_y + dims.height * 0.5).round(),
        16.0,
        WHITE,
    );

    // Name, centered
    let name_dims = measure_text(zone.name, None, 14, 1.0);
    draw_text(
        zone.name,
        (rect.center_x() - name_dims.width * 0.5).round(),
        rect.y + rect.h * 0.55,
        14.0,
        theme::TEXT_COLOR,
    );

    // Description only when there is room for it
    if rect.h > 90.0 {
        let lines = wrap_text(zone.description, 11.0, rect.w - 16.0);
        let mut dy = rect.y + rect.h * 0.55 + 14.0;
        for line in lines.iter().take(2) {
            let d = measure_text(line, None, 11, 1.0);
            draw_text(
                line,
                (rect.center_x() - d.width * 0.5).round(),
                dy,
                11.0,
                theme::TEXT_DIM,
            );
            dy += 13.0;
        }
    }

    if is_current {
        draw_enter_popup(&rect, zone);
    }

    // Clicking the zone you are standing in also opens it
    if is_current && ctx.mouse.clicked(&rect) {
        return Some(WorldAction::EnterZone);
    }
    None
}

/// "Press ENTER to explore" callout above the current zone
fn draw_enter_popup(zone_rect: &Rect, zone: &Zone) {
    let w = 240.0;
    let h = 54.0;
    let x = zone_rect.center_x() - w * 0.5;
    let y = (zone_rect.y - h - 12.0).max(4.0);
    let popup = Rect::new(x, y, w, h);

    draw_card(popup, zone.accent());

    let title = "Press ENTER to explore";
    let dims = measure_text(title, None, 14, 1.0);
    draw_text(
        title,
        (popup.center_x() - dims.width * 0.5).round(),
        popup.y + 20.0,
        14.0,
        zone.accent(),
    );
    let lines = wrap_text(zone.description, 11.0, w - 20.0);
    if let Some(line) = lines.first() {
        let d = measure_text(line, None, 11, 1.0);
        draw_text(
            line,
            (popup.center_x() - d.width * 0.5).round(),
            popup.y + 38.0,
            11.0,
            theme::TEXT_DIM,
        );
    }

    // Pointer triangle under the popup
    draw_triangle(
        Vec2::new(popup.center_x() - 6.0, popup.bottom()),
        Vec2::new(popup.center_x() + 6.0, popup.bottom()),
        Vec2::new(popup.center_x(), popup.bottom() + 8.0),
        zone.accent(),
    );
}

/// The explorer ship: engine glow, hull disc, pulsing ring and ping dot
fn draw_avatar(screen: &Rect, nav: &WorldNav, time: f64) {
    let (ax, ay) = nav.avatar();
    let (px, py) = to_px(screen, ax, ay);
    let size = 24.0;
    let cx = px + size * 0.5;
    let cy = py + size * 0.5;

    draw_radial_glow(cx, cy, size * 1.8, theme::with_alpha(theme::PRIMARY, 0.25), 6);

    draw_circle(cx, cy, size * 0.5, theme::with_alpha(theme::PRIMARY, 0.9));
    draw_circle(cx, cy, size * 0.32, theme::with_alpha(theme::SECONDARY, 0.9));

    let pulse = (time * 3.0).sin() as f32 * 0.5 + 0.5;
    draw_circle_lines(cx, cy, size * 0.5 + 3.0 + pulse * 3.0, 2.0, theme::with_alpha(theme::PRIMARY, 0.6));

    // Ping dot, top-right of the hull
    let ping = (time * 6.0).sin() as f32 * 0.5 + 0.5;
    draw_circle(cx + size * 0.45, cy - size * 0.45, 2.0 + ping * 2.0, theme::with_alpha(theme::ACCENT, 1.0 - ping * 0.6));
}

/// HUD: explorer status (top-left), minimap (top-right), controls (bottom-left)
fn draw_hud(screen: &Rect, nav: &WorldNav, _ctx: &UiContext) {
    let (ax, ay) = nav.avatar();

    // Status card
    let status = screen.anchor_top_left(210.0, 64.0, 12.0);
    draw_card(status, theme::BORDER_COLOR);
    draw_text("Cosmic Explorer Active", status.x + 10.0, status.y + 18.0, 13.0, theme::PRIMARY);
    draw_text(
        &format!("Position: X:{} Y:{}", ax.round() as i32, ay.round() as i32),
        status.x + 10.0,
        status.y + 36.0,
        theme::FONT_SIZE_SMALL,
        theme::TEXT_DIM,
    );
    if let Some(zone) = nav.current_zone() {
        draw_text(
            &format!("Current Sector: {}", zone.name),
            status.x + 10.0,
            status.y + 52.0,
            theme::FONT_SIZE_SMALL,
            theme::ACCENT,
        );
    }

    // Minimap
    let map_card = screen.anchor_top_right(152.0, 110.0, 12.0);
    draw_card(map_card, theme::BORDER_COLOR);
    draw_text("Cosmic Map", map_card.x + 10.0, map_card.y + 16.0, 12.0, theme::PRIMARY);
    let mini = Rect::new(map_card.x + 10.0, map_card.y + 24.0, map_card.w - 20.0, map_card.h - 34.0);
    draw_rounded_rect(mini, 4.0, theme::ROW_BG);
    for zone in &ZONES {
        let is_current = nav.current_zone().map(|z| z.id) == Some(zone.id);
        let bx = mini.x + zone.rect.x / 100.0 * mini.w;
        let by = mini.y + zone.rect.y / 100.0 * mini.h;
        let bw = (zone.rect.w * 0.6).max(6.0) / 100.0 * mini.w;
        let bh = (zone.rect.h * 0.6).max(4.0) / 100.0 * mini.h;
        let color = if is_current {
            zone.accent()
        } else {
            theme::with_alpha(theme::TEXT_DIM, 0.6)
        };
        draw_rectangle(bx, by, bw.max(3.0), bh.max(3.0), color);
    }
    let dot_x = mini.x + ax / 100.0 * mini.w;
    let dot_y = mini.y + ay / 100.0 * mini.h;
    draw_circle(dot_x, dot_y, 2.5, theme::ACCENT);

    // Controls guide
    let guide = screen.anchor_bottom_left(230.0, 58.0, 12.0);
    draw_card(guide, theme::BORDER_COLOR);
    draw_text("Navigation Guide:", guide.x + 10.0, guide.y + 16.0, 12.0, theme::PRIMARY);
    draw_text("Arrow keys or WASD to navigate", guide.x + 10.0, guide.y + 32.0, theme::FONT_SIZE_SMALL, theme::TEXT_DIM);
    draw_text("ENTER to explore - ESC to return", guide.x + 10.0, guide.y + 48.0, theme::FONT_SIZE_SMALL, theme::TEXT_DIM);
}

/// On-screen D-pad plus confirm, semantically identical to the keyboard
fn draw_touch_controls(screen: &Rect, ctx: &UiContext) -> Option<WorldAction> {
    let cell = 40.0;
    let gap = 4.0;
    let pad_size = cell * 3.0 + gap * 2.0;
    let pad = screen.anchor_bottom_right(pad_size, pad_size, 12.0);
    draw_rounded_rect(
        Rect::new(pad.x - 6.0, pad.y - 6.0, pad.w + 12.0, pad.h + 12.0),
        8.0,
        theme::with_alpha(theme::CARD_BG, 0.85),
    );

    let mut action = None;
    let buttons: [(usize, usize, &str, Option<WorldAction>); 5] = [
        (1, 0, "^", Some(WorldAction::Move(Dir::Up))),
        (0, 1, "<", Some(WorldAction::Move(Dir::Left))),
        (1, 1, "OK", Some(WorldAction::EnterZone)),
        (2, 1, ">", Some(WorldAction::Move(Dir::Right))),
        (1, 2, "v", Some(WorldAction::Move(Dir::Down))),
    ];
    for (col, row, label, act) in buttons {
        let rect = Rect::new(
            pad.x + col as f32 * (cell + gap),
            pad.y + row as f32 * (cell + gap),
            cell,
            cell,
        );
        let accent = if label == "OK" { theme::ACCENT } else { theme::PRIMARY };
        if text_button(ctx, rect, label, accent) {
            action = act.clone();
        }
    }
    action
}

/// Instructions overlay shown before exploration starts
pub fn draw_instructions(screen: Rect, ctx: &UiContext) -> Option<WorldAction> {
    draw_rectangle(screen.x, screen.y, screen.w, screen.h, theme::with_alpha(theme::BG_COLOR, 0.9));

    let card = screen.centered(440.0, 360.0);
    draw_card(card, theme::PRIMARY);

    let cx = card.center_x();
    let title = "Welcome to My Digital Universe!";
    let dims = measure_text(title, None, 22, 1.0);
    draw_text(title, (cx - dims.width * 0.5).round(), card.y + 44.0, 22.0, theme::PRIMARY);

    let body = "Navigate through space using arrow keys or WASD to explore the cosmic areas of this interactive portfolio.";
    let mut y = card.y + 70.0;
    for line in wrap_text(body, theme::FONT_SIZE_CONTENT, card.w - 60.0) {
        let d = measure_text(&line, None, theme::FONT_SIZE_CONTENT as u16, 1.0);
        draw_text(&line, (cx - d.width * 0.5).round(), y, theme::FONT_SIZE_CONTENT, theme::TEXT_DIM);
        y += 22.0;
    }

    y += 10.0;
    let keys = [
        ("W / Up", "move up"),
        ("S / Down", "move down"),
        ("A / Left", "move left"),
        ("D / Right", "move right"),
    ];
    let col_w = (card.w - 60.0) * 0.5;
    for (i, (key, what)) in keys.iter().enumerate() {
        let kx = card.x + 30.0 + (i % 2) as f32 * col_w;
        let ky = y + (i / 2) as f32 * 24.0;
        draw_text(key, kx, ky, theme::FONT_SIZE_SMALL + 1.0, theme::TEXT_COLOR);
        draw_text(what, kx + 70.0, ky, theme::FONT_SIZE_SMALL + 1.0, theme::TEXT_DIM);
    }
    y += 58.0;

    let hint = "Press ENTER to explore an area - ESC to exit and return";
    let d = measure_text(hint, None, 12, 1.0);
    draw_text(hint, (cx - d.width * 0.5).round(), y, 12.0, theme::ACCENT);
    y += 24.0;

    let button = Rect::new(cx - 110.0, y, 220.0, 36.0);
    if text_button(ctx, button, "Begin Cosmic Journey", theme::PRIMARY) {
        return Some(WorldAction::Start);
    }
    None
}

/// Content modal for the current zone. Pure function of the zone at the
/// moment of entry: movement is suspended, so it cannot change underneath.
pub fn draw_modal(
    screen: Rect,
    nav: &WorldNav,
    content: &PortfolioContent,
    ctx: &UiContext,
    panel_state: &mut PanelState,
) -> Option<WorldAction> {
    debug_assert_eq!(nav.phase, Phase::ModalOpen);
    let zone = nav.current_zone()?;

    draw_rectangle(screen.x, screen.y, screen.w, screen.h, theme::with_alpha(theme::BG_COLOR, 0.95));

    let container = screen.centered((screen.w - 40.0).min(1000.0), screen.h * 0.92);
    draw_card(container, zone.accent());

    // Header strip
    let header = container.slice_top(46.0);
    draw_circle(header.x + 26.0, header.center_y(), 12.0, theme::with_alpha(zone.accent(), 0.4));
    let glyph = zone.emblem.to_string();
    let gd = measure_text(&glyph, None, 14, 1.0);
    draw_text(
        &glyph,
        (header.x + 26.0 - gd.width * 0.5).round(),
        (header.center_y() + gd.height * 0.5).round(),
        14.0,
        WHITE,
    );
    draw_text(zone.name, header.x + 48.0, header.y + 29.0, 20.0, zone.accent());
    draw_line(
        header.x,
        header.bottom(),
        header.right(),
        header.bottom(),
        1.0,
        theme::with_alpha(zone.accent(), 0.4),
    );

    // Panel content above the footer
    let footer_h = 52.0;
    let below_header = container.remaining_after_top(header.h);
    let body = Rect::new(
        below_header.x,
        below_header.y,
        below_header.w,
        below_header.h - footer_h,
    );
    let panel_action = draw_panel(zone.id, body, content, ctx, panel_state);

    // Footer with the return button
    let button = Rect::new(
        container.center_x() - 150.0,
        container.bottom() - footer_h + 10.0,
        300.0,
        32.0,
    );
    if text_button(ctx, button, "Return to Cosmic Map (ESC)", zone.accent()) {
        return Some(WorldAction::CloseModal);
    }

    match panel_action {
        Some(PanelAction::OpenUrl(url)) => Some(WorldAction::OpenUrl(url)),
        None => None,
    }
}
