//! Application state and screen management
//!
//! Two screens, both drawn over the shared space backdrop: the hero intro
//! and the explorable world. The particle overlay runs everywhere. All
//! state is transient and rebuilt on launch.

use macroquad::prelude::*;

use crate::background::Starfield;
use crate::content::PortfolioContent;
use crate::hero::{draw_hero, HeroAction};
use crate::input::InputState;
use crate::panels::PanelState;
use crate::particles::ParticleField;
use crate::rng::Rng32;
use crate::ui::{MouseState, Rect, UiContext};
use crate::world::draw::{draw_instructions, draw_map, draw_modal, WorldAction};
use crate::world::{Phase, WorldNav, WorldSize};

/// The two top-level screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Hero,
    World,
}

/// Main application state
pub struct App {
    pub screen: Screen,
    pub content: PortfolioContent,
    pub background: Starfield,
    pub particles: ParticleField,
    pub nav: WorldNav,
    pub panel_state: PanelState,
    pub ui: UiContext,
    pub input: InputState,
    surface: (f32, f32),
    pointer: (f32, f32),
}

impl App {
    pub fn new(content: PortfolioContent, width: f32, height: f32, seed: f64) -> Self {
        Self {
            screen: Screen::Hero,
            content,
            background: Starfield::new(width, height, Rng32::from_time(seed)),
            particles: ParticleField::new(Rng32::from_time(seed + 1.0)),
            nav: WorldNav::new(WorldSize::for_window_width(width)),
            panel_state: PanelState::new(),
            ui: UiContext::new(),
            input: InputState::new(),
            surface: (width, height),
            pointer: (0.0, 0.0),
        }
    }

    /// Regenerate the starfield and re-derive the world breakpoint when the
    /// window size changes
    pub fn handle_resize(&mut self, width: f32, height: f32) {
        if (width, height) != self.surface {
            self.surface = (width, height);
            self.background.resize(width, height);
            self.nav.set_world_for_width(width);
        }
    }

    /// Per-frame update: pointer effects, animation ticks, keyboard input
    pub fn update(&mut self, dt: f32, now: f64) {
        // Pointer feeds the particle overlay on every screen
        let (mx, my) = mouse_position();
        if (mx, my) != self.pointer {
            self.pointer = (mx, my);
            self.particles.pointer_moved(mx, my, now);
        }
        if is_mouse_button_pressed(MouseButton::Left) {
            self.particles.pointer_clicked(mx, my);
        }

        self.background.update();
        self.particles.update();

        let actions = self.input.poll(dt);
        match self.screen {
            Screen::Hero => {
                // Enter launches the journey from the hero screen too
                if actions.contains(&crate::input::Action::Confirm) {
                    self.enter_world();
                }
            }
            Screen::World => {
                for action in actions {
                    self.apply_nav_action(action);
                }
            }
        }
    }

    /// Draw the whole frame and apply any UI-triggered actions
    pub fn draw(&mut self, now: f64) {
        let screen = Rect::screen(self.surface.0, self.surface.1);

        self.background.draw();

        match self.screen {
            Screen::Hero => {
                let action = draw_hero(screen, &self.content.profile, &self.ui, now);
                self.particles.draw(now);
                match action {
                    Some(HeroAction::StartExplore) => self.enter_world(),
                    Some(HeroAction::OpenUrl(url)) => open_url(&url),
                    None => {}
                }
            }
            Screen::World => {
                let overlay_open = self.nav.phase != Phase::Exploring;

                // Block map input while an overlay is up; the overlay
                // restores the real mouse for itself.
                if overlay_open {
                    self.ui.begin_modal();
                }
                let map_action = draw_map(screen, &self.nav, &self.ui, now);
                self.particles.draw(now);
                if overlay_open {
                    self.ui.end_modal();
                }

                let overlay_action = match self.nav.phase {
                    Phase::Instructions => draw_instructions(screen, &self.ui),
                    Phase::ModalOpen => draw_modal(
                        screen,
                        &self.nav,
                        &self.content,
                        &self.ui,
                        &mut self.panel_state,
                    ),
                    Phase::Exploring => None,
                };

                if let Some(action) = overlay_action.or(map_action) {
                    self.apply_world_action(action);
                }
            }
        }
    }

    fn enter_world(&mut self) {
        self.screen = Screen::World;
    }

    /// Keyboard path into the state machine
    fn apply_nav_action(&mut self, action: crate::input::Action) {
        let before = self.nav.phase;
        self.nav.handle_action(action);
        self.after_phase_change(before);
    }

    /// UI path (buttons, touch pad) into the state machine
    fn apply_world_action(&mut self, action: WorldAction) {
        let before = self.nav.phase;
        match action {
            WorldAction::Start => self.nav.start(),
            WorldAction::EnterZone => self.nav.confirm(),
            WorldAction::CloseModal => self.nav.close_modal(),
            WorldAction::Move(dir) => self.nav.step(dir),
            WorldAction::OpenUrl(url) => open_url(&url),
        }
        self.after_phase_change(before);
    }

    fn after_phase_change(&mut self, before: Phase) {
        if before != Phase::ModalOpen && self.nav.phase == Phase::ModalOpen {
            self.panel_state.on_modal_open();
        }
        if before == Phase::ModalOpen && self.nav.phase != Phase::ModalOpen {
            self.panel_state.contact.blur();
        }
    }
}

/// Build this frame's mouse state from macroquad's event queries
pub fn poll_mouse() -> MouseState {
    let (x, y) = mouse_position();
    MouseState {
        x,
        y,
        left_down: is_mouse_button_down(MouseButton::Left),
        left_pressed: is_mouse_button_pressed(MouseButton::Left),
        scroll: mouse_wheel().1,
    }
}

/// Open an external link in the system browser (native only; the WASM
/// build has no shell to hand the URL to)
pub fn open_url(url: &str) {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if webbrowser::open(url).is_err() {
            eprintln!("Failed to open {}", url);
        }
    }
    #[cfg(target_arch = "wasm32")]
    {
        let _ = url;
    }
}
