//! Zone definitions for the cosmic map
//!
//! Fixed at compile time. Coordinates live in the same percent-space as the
//! avatar. Definition order doubles as the tie-break when rectangles overlap:
//! the first zone containing the avatar's center wins.

use macroquad::prelude::Color;

use crate::ui::theme;

/// Identifies a zone and the content panel it reveals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneId {
    Skills,
    Projects,
    Achievements,
    Contact,
    Experience,
    Education,
}

/// Axis-aligned rectangle in world percent-space
#[derive(Debug, Clone, Copy)]
pub struct ZoneRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl ZoneRect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Containment test; all four edges are inclusive.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px <= self.x + self.w && py >= self.y && py <= self.y + self.h
    }
}

/// A labeled region of the map
pub struct Zone {
    pub id: ZoneId,
    pub name: &'static str,
    /// Single glyph drawn on the zone's emblem disc
    pub emblem: char,
    pub rect: ZoneRect,
    pub description: &'static str,
}

impl Zone {
    /// Accent color used for the zone card, emblem and minimap blip
    pub fn accent(&self) -> Color {
        match self.id {
            ZoneId::Skills => theme::PRIMARY,
            ZoneId::Projects => theme::SECONDARY,
            ZoneId::Achievements => theme::ACCENT,
            ZoneId::Contact => theme::NEON_PINK,
            ZoneId::Experience => theme::NEON_BLUE,
            ZoneId::Education => theme::NEON_ORANGE,
        }
    }
}

/// All map zones, in definition order
pub static ZONES: [Zone; 6] = [
    Zone {
        id: ZoneId::Skills,
        name: "Skills Arena",
        emblem: 'S',
        rect: ZoneRect::new(5.0, 25.0, 18.0, 14.0),
        description: "Master technical skills and unlock abilities",
    },
    Zone {
        id: ZoneId::Projects,
        name: "Projects Factory",
        emblem: 'P',
        rect: ZoneRect::new(28.0, 20.0, 20.0, 16.0),
        description: "Explore innovative projects and solutions",
    },
    Zone {
        id: ZoneId::Achievements,
        name: "Hall of Fame",
        emblem: 'H',
        rect: ZoneRect::new(55.0, 30.0, 17.0, 14.0),
        description: "Celebrate milestones and achievements",
    },
    Zone {
        id: ZoneId::Contact,
        name: "Communication Hub",
        emblem: 'C',
        rect: ZoneRect::new(12.0, 55.0, 19.0, 14.0),
        description: "Connect and collaborate opportunities",
    },
    Zone {
        id: ZoneId::Experience,
        name: "Experience Galaxy",
        emblem: 'X',
        rect: ZoneRect::new(38.0, 60.0, 23.0, 16.0),
        description: "Journey through professional experiences",
    },
    Zone {
        id: ZoneId::Education,
        name: "Learning Cosmos",
        emblem: 'L',
        rect: ZoneRect::new(68.0, 55.0, 19.0, 12.0),
        description: "Discover educational journeys and knowledge",
    },
];

/// First zone (in definition order) whose rectangle contains the point
pub fn zone_at(px: f32, py: f32) -> Option<&'static Zone> {
    ZONES.iter().find(|zone| zone.rect.contains(px, py))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_rect_edges_inclusive() {
        let r = ZoneRect::new(5.0, 25.0, 18.0, 14.0);
        assert!(r.contains(5.0, 25.0));
        assert!(r.contains(23.0, 39.0));
        assert!(!r.contains(23.01, 30.0));
        assert!(!r.contains(4.99, 30.0));
    }

    #[test]
    fn test_zone_at_first_match_wins() {
        // Center of the skills rect
        let zone = zone_at(14.0, 32.0).expect("inside skills");
        assert_eq!(zone.id, ZoneId::Skills);

        // Outside every zone
        assert!(zone_at(0.0, 0.0).is_none());
        assert!(zone_at(90.0, 10.0).is_none());
    }

    #[test]
    fn test_every_zone_center_resolves_to_itself() {
        for zone in &ZONES {
            let cx = zone.rect.x + zone.rect.w * 0.5;
            let cy = zone.rect.y + zone.rect.h * 0.5;
            let found = zone_at(cx, cy).expect("center inside some zone");
            assert_eq!(found.id, zone.id);
        }
    }
}
