//! Content data types
//!
//! Plain serde structs mirroring the RON document, plus the small enum-keyed
//! lookups that map category tags to a visual treatment.

use macroquad::prelude::Color;
use serde::{Deserialize, Serialize};

use crate::ui::theme;

/// Hero-screen profile block
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub tagline: String,
    /// Small badge line above the name
    pub badge: String,
    pub stats: Vec<Stat>,
    pub links: Vec<Link>,
    pub location: String,
    pub availability: String,
}

/// One headline number on the hero screen ("50+", "Projects Completed")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

/// An external link
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

/// Skill categories; each maps to an accent color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Design,
    Tools,
}

impl SkillCategory {
    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Design => "Design",
            SkillCategory::Tools => "Tools",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            SkillCategory::Frontend => theme::PRIMARY,
            SkillCategory::Backend => theme::SECONDARY,
            SkillCategory::Design => theme::ACCENT,
            SkillCategory::Tools => theme::NEON_ORANGE,
        }
    }
}

/// One entry in the skill tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
    pub max_level: u8,
    /// Mastery as a percentage, drives the bar fill
    pub experience: u8,
    pub category: SkillCategory,
}

/// Project difficulty tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Legendary,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Legendary => "Legendary",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Difficulty::Easy => theme::SUCCESS,
            Difficulty::Medium => theme::PRIMARY,
            Difficulty::Hard => theme::SECONDARY,
            Difficulty::Legendary => theme::NEON_ORANGE,
        }
    }
}

/// Project completion state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestStatus {
    Completed,
    InProgress,
    Locked,
}

impl QuestStatus {
    pub fn label(&self) -> &'static str {
        match self {
            QuestStatus::Completed => "Completed",
            QuestStatus::InProgress => "In progress",
            QuestStatus::Locked => "Locked",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            QuestStatus::Completed => theme::SUCCESS,
            QuestStatus::InProgress => theme::PRIMARY,
            QuestStatus::Locked => theme::TEXT_DIM,
        }
    }
}

/// A project, presented as a quest on the board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quest {
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub status: QuestStatus,
    /// XP reward shown on the card
    pub reward: u32,
    pub technologies: Vec<String>,
    pub demo_url: Option<String>,
    pub repo_url: Option<String>,
}

/// Achievement rarity tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub fn label(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Rarity::Common => theme::TEXT_DIM,
            Rarity::Rare => theme::NEON_BLUE,
            Rarity::Epic => theme::SECONDARY,
            Rarity::Legendary => theme::ACCENT,
        }
    }
}

/// One hall-of-fame entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    pub title: String,
    pub description: String,
    pub category: String,
    pub points: u32,
    pub rarity: Rarity,
    pub progress: u32,
    pub max_progress: u32,
    pub unlocked: bool,
}

/// A way to reach the author
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMethod {
    pub name: String,
    pub value: String,
    pub url: String,
    /// Short status line ("Active", "24/7 Available")
    pub status: String,
}

/// One professional experience entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    pub period: String,
    pub summary: String,
    pub technologies: Vec<String>,
}

/// One education/certification entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub title: String,
    pub institution: String,
    pub period: String,
    /// Highlight line ("Magna Cum Laude", "Certified Professional")
    pub note: String,
    pub summary: String,
    pub topics: Vec<String>,
}
