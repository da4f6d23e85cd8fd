//! Portfolio content loading and validation
//!
//! All static content (profile, skills, quests, achievements, contact
//! methods, experience, education) lives in a RON document. A default copy
//! is compiled in; native builds read `assets/content.ron` from disk first
//! so the data can be swapped without rebuilding. Content is read-only
//! after load.

mod types;

pub use types::*;

use serde::{Deserialize, Serialize};

/// The embedded default content document
const DEFAULT_CONTENT: &str = include_str!("../../assets/content.ron");

/// On-disk override path for native builds
#[cfg(not(target_arch = "wasm32"))]
const CONTENT_PATH: &str = "assets/content.ron";

/// Validation limits to keep a hand-edited content file from blowing up
/// the render layer
pub mod limits {
    /// Maximum entries per collection (skills, quests, ...)
    pub const MAX_ENTRIES: usize = 64;
    /// Maximum technologies listed per quest or experience entry
    pub const MAX_TAGS: usize = 16;
    /// Maximum length for any content string
    pub const MAX_STRING_LEN: usize = 512;
    /// Skill levels are on a 0-10 scale
    pub const MAX_LEVEL: u8 = 10;
}

/// Error type for content loading
#[derive(Debug)]
pub enum ContentError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    ValidationError(String),
}

impl From<std::io::Error> for ContentError {
    fn from(e: std::io::Error) -> Self {
        ContentError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ContentError {
    fn from(e: ron::error::SpannedError) -> Self {
        ContentError::ParseError(e)
    }
}

impl std::fmt::Display for ContentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentError::IoError(e) => write!(f, "IO error: {}", e),
            ContentError::ParseError(e) => write!(f, "Parse error: {}", e),
            ContentError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

/// Everything the render layer consumes, in one read-only document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortfolioContent {
    pub profile: Profile,
    pub skills: Vec<Skill>,
    pub quests: Vec<Quest>,
    pub achievements: Vec<Achievement>,
    pub contact_methods: Vec<ContactMethod>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
}

impl PortfolioContent {
    /// Parse and validate a RON document
    pub fn from_str(source: &str) -> Result<Self, ContentError> {
        let content: Self = ron::from_str(source)?;
        content.validate()?;
        Ok(content)
    }

    /// Parse the compiled-in default document
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_str(DEFAULT_CONTENT)
    }

    /// Read and validate a content file from disk
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, ContentError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_str(&source)
    }

    /// Load content for startup: disk override first (native), then the
    /// embedded default, then an empty document as a last resort.
    pub fn load() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            let path = std::path::Path::new(CONTENT_PATH);
            if path.exists() {
                match Self::load_from_path(path) {
                    Ok(content) => return content,
                    Err(e) => eprintln!("Ignoring {}: {}", CONTENT_PATH, e),
                }
            }
        }

        match Self::embedded() {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Embedded content is invalid: {}", e);
                Self::default()
            }
        }
    }

    /// Reject documents the panels cannot sensibly render
    pub fn validate(&self) -> Result<(), ContentError> {
        check_len("profile.name", &self.profile.name)?;
        check_len("profile.title", &self.profile.title)?;
        check_len("profile.tagline", &self.profile.tagline)?;
        check_count("skills", self.skills.len())?;
        check_count("quests", self.quests.len())?;
        check_count("achievements", self.achievements.len())?;
        check_count("contact_methods", self.contact_methods.len())?;
        check_count("experience", self.experience.len())?;
        check_count("education", self.education.len())?;

        for skill in &self.skills {
            check_len("skill.name", &skill.name)?;
            if skill.max_level == 0 || skill.max_level > limits::MAX_LEVEL {
                return Err(ContentError::ValidationError(format!(
                    "skill '{}': max_level {} out of range",
                    skill.name, skill.max_level
                )));
            }
            if skill.level > skill.max_level {
                return Err(ContentError::ValidationError(format!(
                    "skill '{}': level {} exceeds max_level {}",
                    skill.name, skill.level, skill.max_level
                )));
            }
            if skill.experience > 100 {
                return Err(ContentError::ValidationError(format!(
                    "skill '{}': experience {}% exceeds 100%",
                    skill.name, skill.experience
                )));
            }
        }

        for quest in &self.quests {
            check_len("quest.title", &quest.title)?;
            check_len("quest.description", &quest.description)?;
            if quest.technologies.len() > limits::MAX_TAGS {
                return Err(ContentError::ValidationError(format!(
                    "quest '{}': too many technologies",
                    quest.title
                )));
            }
        }

        for achievement in &self.achievements {
            check_len("achievement.title", &achievement.title)?;
            if achievement.max_progress == 0 || achievement.progress > achievement.max_progress {
                return Err(ContentError::ValidationError(format!(
                    "achievement '{}': progress {}/{} invalid",
                    achievement.title, achievement.progress, achievement.max_progress
                )));
            }
        }

        Ok(())
    }
}

fn check_len(what: &str, s: &str) -> Result<(), ContentError> {
    if s.len() > limits::MAX_STRING_LEN {
        return Err(ContentError::ValidationError(format!(
            "{} exceeds {} bytes",
            what,
            limits::MAX_STRING_LEN
        )));
    }
    Ok(())
}

fn check_count(what: &str, n: usize) -> Result<(), ContentError> {
    if n == 0 {
        return Err(ContentError::ValidationError(format!("{} is empty", what)));
    }
    if n > limits::MAX_ENTRIES {
        return Err(ContentError::ValidationError(format!(
            "{} has {} entries (max {})",
            what,
            n,
            limits::MAX_ENTRIES
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_embedded_content_parses() {
        let content = PortfolioContent::embedded().expect("default content must be valid");
        assert!(!content.skills.is_empty());
        assert!(!content.quests.is_empty());
        assert!(!content.profile.name.is_empty());
    }

    #[test]
    fn test_load_from_path_roundtrip() {
        let content = PortfolioContent::embedded().unwrap();
        let ron_text = ron::ser::to_string_pretty(&content, ron::ser::PrettyConfig::new())
            .expect("serialize");

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(ron_text.as_bytes()).unwrap();

        let loaded = PortfolioContent::load_from_path(file.path()).expect("reload");
        assert_eq!(loaded.skills.len(), content.skills.len());
        assert_eq!(loaded.profile.name, content.profile.name);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = PortfolioContent::load_from_path(std::path::Path::new("/no/such/file.ron"))
            .unwrap_err();
        assert!(matches!(err, ContentError::IoError(_)));
    }

    #[test]
    fn test_garbage_is_parse_error() {
        let err = PortfolioContent::from_str("not ron at all {{{").unwrap_err();
        assert!(matches!(err, ContentError::ParseError(_)));
    }

    #[test]
    fn test_validation_rejects_bad_skill_level() {
        let mut content = PortfolioContent::embedded().unwrap();
        content.skills[0].level = 11;
        content.skills[0].max_level = 10;
        let err = content.validate().unwrap_err();
        assert!(matches!(err, ContentError::ValidationError(_)));
    }

    #[test]
    fn test_validation_rejects_overlong_strings() {
        let mut content = PortfolioContent::embedded().unwrap();
        content.profile.name = "x".repeat(limits::MAX_STRING_LEN + 1);
        assert!(content.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_achievement_progress() {
        let mut content = PortfolioContent::embedded().unwrap();
        content.achievements[0].progress = 99;
        content.achievements[0].max_progress = 10;
        assert!(content.validate().is_err());
    }
}
