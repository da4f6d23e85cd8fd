//! STARFOLIO: a space-themed interactive portfolio
//!
//! Explore a cosmic map with the keyboard (or touch buttons) to uncover
//! skills, projects, achievements and more, over a twinkling starfield
//! with pointer-reactive particles. Runs natively and in the browser.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod background;
mod content;
mod hero;
mod input;
mod panels;
mod particles;
mod rng;
mod ui;
mod world;

use macroquad::prelude::*;

use app::{poll_mouse, App};
use content::PortfolioContent;

fn window_conf() -> Conf {
    Conf {
        window_title: format!("STARFOLIO v{}", VERSION),
        window_width: 1280,
        window_height: 720,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let content = PortfolioContent::load();
    println!("=== STARFOLIO ===");
    println!(
        "Loaded content: {} skills, {} quests, {} achievements",
        content.skills.len(),
        content.quests.len(),
        content.achievements.len()
    );

    let mut app = App::new(content, screen_width(), screen_height(), get_time());
    println!("Backdrop ready: {} stars", app.background.star_count());

    loop {
        let now = get_time();
        let dt = get_frame_time();

        // Resize regenerates the starfield and re-derives the world breakpoint
        app.handle_resize(screen_width(), screen_height());

        app.ui.begin_frame(poll_mouse());
        app.update(dt, now);
        app.draw(now);

        next_frame().await
    }
}
