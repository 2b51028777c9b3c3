//! Persistence of the working profile.
//!
//! The profile is three independent keyed entries: the resume as JSON, the
//! selected template id, and the selected accent color key. Loading never
//! fails the caller: a missing or unparseable entry falls back to its default
//! and is reported only through the diagnostic log. Saves overwrite
//! unconditionally and return `Result` so the owner can choose a policy
//! (the [`Session`](crate::session::Session) logs and continues).

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::Result;
use crate::model::ResumeData;
use crate::render::{AccentColor, TemplateId};

/// Storage key for the resume JSON entry.
pub const KEY_RESUME: &str = "resume.json";
/// Storage key for the selected template id.
pub const KEY_TEMPLATE: &str = "template";
/// Storage key for the selected accent color.
pub const KEY_ACCENT: &str = "accent";

/// A loaded profile: resume content plus the two display selections.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub resume: ResumeData,
    pub template: TemplateId,
    pub accent: AccentColor,
}

impl Default for Profile {
    /// First-run state: the sample resume, Professional, blue.
    fn default() -> Self {
        Self {
            resume: ResumeData::sample(),
            template: TemplateId::Professional,
            accent: AccentColor::Blue,
        }
    }
}

/// Durable storage for one profile.
pub trait ProfileStore {
    /// Load the profile, substituting defaults for anything missing or
    /// unparseable. Never fails.
    fn load(&self) -> Profile;

    /// Persist the resume entry.
    fn save_resume(&self, resume: &ResumeData) -> Result<()>;

    /// Persist the template selection.
    fn save_template(&self, template: TemplateId) -> Result<()>;

    /// Persist the accent color selection.
    fn save_accent(&self, accent: AccentColor) -> Result<()>;
}

/// Decode a stored resume entry, falling back to the sample on parse failure.
pub(crate) fn decode_resume(raw: Option<String>) -> ResumeData {
    match raw {
        Some(json) => match serde_json::from_str(&json) {
            Ok(resume) => resume,
            Err(e) => {
                log::warn!("stored resume is unreadable, using sample: {}", e);
                ResumeData::sample()
            }
        },
        None => ResumeData::sample(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_sample() {
        let profile = Profile::default();
        assert_eq!(profile.resume, ResumeData::sample());
        assert_eq!(profile.template, TemplateId::Professional);
        assert_eq!(profile.accent, AccentColor::Blue);
    }

    #[test]
    fn test_decode_resume_fallbacks() {
        assert_eq!(decode_resume(None), ResumeData::sample());
        assert_eq!(
            decode_resume(Some("{not json".to_string())),
            ResumeData::sample()
        );
    }

    #[test]
    fn test_decode_resume_valid_json() {
        let resume = ResumeData::empty();
        let json = serde_json::to_string(&resume).unwrap();
        assert_eq!(decode_resume(Some(json)), resume);
    }
}
