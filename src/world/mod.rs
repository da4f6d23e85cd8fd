//! The explorable cosmic map
//!
//! `nav` holds the pure state machine (avatar, zones, modal gate); `zone`
//! the static map layout; `draw` everything visual - zone cards, avatar,
//! HUD, instructions overlay and the content modal.

pub mod draw;
mod nav;
mod zone;

pub use nav::{Phase, WorldNav, WorldSize, AVATAR_FOOTPRINT, MOVE_STEP};
pub use zone::{zone_at, Zone, ZoneId, ZoneRect, ZONES};
