//! In-memory profile store, the test double for the filesystem store.
//!
//! Holds serialized strings under the same keys the file store uses, which
//! keeps parse-failure behavior testable without touching disk.

use std::collections::HashMap;
use std::sync::Mutex;

use super::{decode_resume, Profile, ProfileStore, KEY_ACCENT, KEY_RESUME, KEY_TEMPLATE};
use crate::error::Result;
use crate::model::ResumeData;
use crate::render::{AccentColor, TemplateId};

/// Profile store backed by an in-memory map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw entry, for exercising fallback paths.
    pub fn set_raw(&self, key: &str, value: impl Into<String>) {
        self.entries
            .lock()
            .expect("store lock")
            .insert(key.to_string(), value.into());
    }

    /// Read a raw entry back.
    pub fn get_raw(&self, key: &str) -> Option<String> {
        self.entries.lock().expect("store lock").get(key).cloned()
    }
}

impl ProfileStore for MemoryStore {
    fn load(&self) -> Profile {
        let resume = decode_resume(self.get_raw(KEY_RESUME));
        let template = self
            .get_raw(KEY_TEMPLATE)
            .map(|s| TemplateId::parse(&s))
            .unwrap_or_default();
        let accent = self
            .get_raw(KEY_ACCENT)
            .map(|s| AccentColor::parse(&s))
            .unwrap_or_default();

        Profile {
            resume,
            template,
            accent,
        }
    }

    fn save_resume(&self, resume: &ResumeData) -> Result<()> {
        let json = serde_json::to_string(resume)?;
        self.set_raw(KEY_RESUME, json);
        Ok(())
    }

    fn save_template(&self, template: TemplateId) -> Result<()> {
        self.set_raw(KEY_TEMPLATE, template.key());
        Ok(())
    }

    fn save_accent(&self, accent: AccentColor) -> Result<()> {
        self.set_raw(KEY_ACCENT, accent.key());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_loads_defaults() {
        let store = MemoryStore::new();
        assert_eq!(store.load(), Profile::default());
    }

    #[test]
    fn test_round_trip() {
        let store = MemoryStore::new();
        let mut resume = ResumeData::empty();
        resume.personal.full_name = "Grace Hopper".to_string();

        store.save_resume(&resume).unwrap();
        store.save_template(TemplateId::Modern).unwrap();
        store.save_accent(AccentColor::Red).unwrap();

        let profile = store.load();
        assert_eq!(profile.resume, resume);
        assert_eq!(profile.template, TemplateId::Modern);
        assert_eq!(profile.accent, AccentColor::Red);
    }

    #[test]
    fn test_corrupt_entry_falls_back() {
        let store = MemoryStore::new();
        store.set_raw(KEY_RESUME, "[]");
        assert_eq!(store.load().resume, ResumeData::sample());
    }
}
