//! World navigation state machine
//!
//! Pure logic: avatar movement with per-axis clamping, zone membership and
//! the modal gate. No rendering calls in here, so the whole machine is
//! exercised by the tests at the bottom.

use crate::input::{Action, Dir};

use super::zone::{zone_at, Zone, ZoneId};

/// Distance moved per directional step, percent-space
pub const MOVE_STEP: f32 = 2.0;

/// Avatar footprint in percent-space; the clamp keeps the whole footprint
/// inside the world
pub const AVATAR_FOOTPRINT: f32 = 8.0;

/// Logical world size, dependent on the viewport breakpoint
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldSize {
    pub width: f32,
    pub height: f32,
}

impl WorldSize {
    /// Breakpoint table: narrow windows get a tighter world
    pub fn for_window_width(px: f32) -> Self {
        if px < 640.0 {
            Self {
                width: 90.0,
                height: 60.0,
            }
        } else {
            Self {
                width: 100.0,
                height: 70.0,
            }
        }
    }
}

/// The navigation phases. Only `Exploring` accepts movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Instructions,
    Exploring,
    ModalOpen,
}

/// Avatar position, current zone and modal gate
pub struct WorldNav {
    pub phase: Phase,
    avatar_x: f32,
    avatar_y: f32,
    world: WorldSize,
    current_zone: Option<ZoneId>,
}

impl WorldNav {
    pub fn new(world: WorldSize) -> Self {
        let mut nav = Self {
            phase: Phase::Instructions,
            avatar_x: 2.0,
            avatar_y: 8.0,
            world,
            current_zone: None,
        };
        nav.recompute_zone();
        nav
    }

    pub fn avatar(&self) -> (f32, f32) {
        (self.avatar_x, self.avatar_y)
    }

    /// Avatar center, the point tested against zone rectangles
    pub fn avatar_center(&self) -> (f32, f32) {
        (
            self.avatar_x + AVATAR_FOOTPRINT * 0.5,
            self.avatar_y + AVATAR_FOOTPRINT * 0.5,
        )
    }

    pub fn world(&self) -> WorldSize {
        self.world
    }

    pub fn current_zone(&self) -> Option<&'static Zone> {
        let id = self.current_zone?;
        super::zone::ZONES.iter().find(|z| z.id == id)
    }

    /// Leave the instructions overlay and start exploring
    pub fn start(&mut self) {
        if self.phase == Phase::Instructions {
            self.phase = Phase::Exploring;
        }
    }

    /// Open the content modal; only possible while exploring inside a zone
    pub fn confirm(&mut self) {
        if self.phase == Phase::Exploring && self.current_zone.is_some() {
            self.phase = Phase::ModalOpen;
        }
    }

    /// Close the modal unconditionally and resume exploring
    pub fn close_modal(&mut self) {
        if self.phase == Phase::ModalOpen {
            self.phase = Phase::Exploring;
        }
    }

    /// Step the avatar; ignored outside `Exploring`
    pub fn step(&mut self, dir: Dir) {
        if self.phase != Phase::Exploring {
            return;
        }
        let (dx, dy) = dir.delta();
        self.avatar_x = (self.avatar_x + dx * MOVE_STEP)
            .clamp(0.0, self.world.width - AVATAR_FOOTPRINT);
        self.avatar_y = (self.avatar_y + dy * MOVE_STEP)
            .clamp(0.0, self.world.height - AVATAR_FOOTPRINT);
        self.recompute_zone();
    }

    /// Feed one input action through the machine
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Move(dir) => self.step(dir),
            Action::Confirm => match self.phase {
                Phase::Instructions => self.start(),
                Phase::Exploring => self.confirm(),
                Phase::ModalOpen => {}
            },
            Action::Cancel => self.close_modal(),
        }
    }

    /// Window width changed: re-derive the world size and keep the avatar
    /// inside the (possibly smaller) bounds
    pub fn set_world_for_width(&mut self, window_px: f32) {
        let world = WorldSize::for_window_width(window_px);
        if world != self.world {
            self.world = world;
            self.avatar_x = self.avatar_x.clamp(0.0, world.width - AVATAR_FOOTPRINT);
            self.avatar_y = self.avatar_y.clamp(0.0, world.height - AVATAR_FOOTPRINT);
            self.recompute_zone();
        }
    }

    fn recompute_zone(&mut self) {
        let (cx, cy) = self.avatar_center();
        self.current_zone = zone_at(cx, cy).map(|z| z.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exploring() -> WorldNav {
        let mut nav = WorldNav::new(WorldSize::for_window_width(1280.0));
        nav.start();
        nav
    }

    #[test]
    fn test_five_steps_right_from_origin_scenario() {
        let mut nav = exploring();
        assert_eq!(nav.avatar(), (2.0, 8.0));
        for _ in 0..5 {
            nav.step(Dir::Right);
        }
        assert_eq!(nav.avatar(), (12.0, 8.0));
    }

    #[test]
    fn test_clamping_on_every_axis() {
        let mut nav = exploring();
        let world = nav.world();

        for _ in 0..200 {
            nav.step(Dir::Left);
            nav.step(Dir::Up);
        }
        assert_eq!(nav.avatar(), (0.0, 0.0));

        for _ in 0..200 {
            nav.step(Dir::Right);
            nav.step(Dir::Down);
        }
        let (x, y) = nav.avatar();
        assert_eq!(x, world.width - AVATAR_FOOTPRINT);
        assert_eq!(y, world.height - AVATAR_FOOTPRINT);
    }

    #[test]
    fn test_mixed_sequences_stay_in_bounds() {
        let mut nav = exploring();
        let world = nav.world();
        let pattern = [
            Dir::Right,
            Dir::Right,
            Dir::Down,
            Dir::Left,
            Dir::Down,
            Dir::Down,
            Dir::Up,
            Dir::Right,
        ];
        for i in 0..500 {
            nav.step(pattern[i % pattern.len()]);
            let (x, y) = nav.avatar();
            assert!((0.0..=world.width - AVATAR_FOOTPRINT).contains(&x));
            assert!((0.0..=world.height - AVATAR_FOOTPRINT).contains(&y));
        }
    }

    #[test]
    fn test_movement_suspended_outside_exploring() {
        let mut nav = WorldNav::new(WorldSize::for_window_width(1280.0));
        let start = nav.avatar();

        // Instructions phase: no movement
        nav.step(Dir::Right);
        assert_eq!(nav.avatar(), start);

        nav.start();
        walk_into_skills(&mut nav);
        nav.confirm();
        assert_eq!(nav.phase, Phase::ModalOpen);

        // Modal open: no movement either
        let frozen = nav.avatar();
        nav.step(Dir::Down);
        assert_eq!(nav.avatar(), frozen);
    }

    /// Walk the avatar until its center sits inside the skills rect
    /// {x:5, y:25, w:18, h:14}
    fn walk_into_skills(nav: &mut WorldNav) {
        while nav.avatar_center().1 < 27.0 {
            nav.step(Dir::Down);
        }
        while nav.avatar_center().0 < 7.0 {
            nav.step(Dir::Right);
        }
    }

    #[test]
    fn test_skills_zone_confirm_escape_scenario() {
        let mut nav = exploring();
        walk_into_skills(&mut nav);

        let zone = nav.current_zone().expect("inside the skills zone");
        assert_eq!(zone.id, ZoneId::Skills);

        nav.confirm();
        assert_eq!(nav.phase, Phase::ModalOpen);
        assert_eq!(nav.current_zone().map(|z| z.id), Some(ZoneId::Skills));

        let pos = nav.avatar();
        nav.close_modal();
        assert_eq!(nav.phase, Phase::Exploring);
        assert_eq!(nav.avatar(), pos);
    }

    #[test]
    fn test_confirm_without_zone_is_a_noop() {
        let mut nav = exploring();
        assert!(nav.current_zone().is_none());
        nav.confirm();
        assert_eq!(nav.phase, Phase::Exploring);
    }

    #[test]
    fn test_close_modal_always_returns_to_exploring() {
        let mut nav = exploring();
        walk_into_skills(&mut nav);
        nav.confirm();
        nav.close_modal();
        assert_eq!(nav.phase, Phase::Exploring);

        // Cancel while already exploring stays put
        nav.close_modal();
        assert_eq!(nav.phase, Phase::Exploring);
    }

    #[test]
    fn test_zone_membership_tracks_movement() {
        let mut nav = exploring();
        assert!(nav.current_zone().is_none());

        walk_into_skills(&mut nav);
        assert_eq!(nav.current_zone().map(|z| z.id), Some(ZoneId::Skills));

        // Walk back up, leaving the zone
        for _ in 0..20 {
            nav.step(Dir::Up);
        }
        assert!(nav.current_zone().is_none());
    }

    #[test]
    fn test_breakpoint_shrink_reclamps_avatar() {
        let mut nav = exploring();
        for _ in 0..100 {
            nav.step(Dir::Right);
            nav.step(Dir::Down);
        }
        assert_eq!(nav.avatar(), (92.0, 62.0));

        // Shrink to the mobile world: 90x60
        nav.set_world_for_width(480.0);
        assert_eq!(nav.avatar(), (82.0, 52.0));

        // Growing back does not move the avatar
        nav.set_world_for_width(1280.0);
        assert_eq!(nav.avatar(), (82.0, 52.0));
    }

    #[test]
    fn test_handle_action_routing() {
        let mut nav = WorldNav::new(WorldSize::for_window_width(1280.0));

        // Confirm starts from instructions
        nav.handle_action(Action::Confirm);
        assert_eq!(nav.phase, Phase::Exploring);

        nav.handle_action(Action::Move(Dir::Right));
        assert_eq!(nav.avatar(), (4.0, 8.0));

        // Cancel has no effect while exploring
        nav.handle_action(Action::Cancel);
        assert_eq!(nav.phase, Phase::Exploring);
    }
}
