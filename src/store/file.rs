//! Filesystem-backed profile store.

use std::fs;
use std::path::{Path, PathBuf};

use super::{decode_resume, Profile, ProfileStore, KEY_ACCENT, KEY_RESUME, KEY_TEMPLATE};
use crate::error::Result;
use crate::model::ResumeData;
use crate::render::{AccentColor, TemplateId};

/// Profile store backed by a directory, one file per key.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`. The directory is created lazily on the
    /// first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory this store reads and writes.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Whether a resume entry exists on disk.
    pub fn is_initialized(&self) -> bool {
        self.dir.join(KEY_RESUME).exists()
    }

    fn read_key(&self, key: &str) -> Option<String> {
        let path = self.dir.join(key);
        match fs::read_to_string(&path) {
            Ok(content) => Some(content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                log::warn!("failed to read {}: {}", path.display(), e);
                None
            }
        }
    }

    fn write_key(&self, key: &str, content: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.dir.join(key), content)?;
        Ok(())
    }
}

impl ProfileStore for FileStore {
    fn load(&self) -> Profile {
        let resume = decode_resume(self.read_key(KEY_RESUME));
        let template = self
            .read_key(KEY_TEMPLATE)
            .map(|s| TemplateId::parse(&s))
            .unwrap_or_default();
        let accent = self
            .read_key(KEY_ACCENT)
            .map(|s| AccentColor::parse(&s))
            .unwrap_or_default();

        Profile {
            resume,
            template,
            accent,
        }
    }

    fn save_resume(&self, resume: &ResumeData) -> Result<()> {
        let json = serde_json::to_string_pretty(resume)?;
        self.write_key(KEY_RESUME, &json)
    }

    fn save_template(&self, template: TemplateId) -> Result<()> {
        self.write_key(KEY_TEMPLATE, template.key())
    }

    fn save_accent(&self, accent: AccentColor) -> Result<()> {
        self.write_key(KEY_ACCENT, accent.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_from_empty_directory_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        assert!(!store.is_initialized());
        assert_eq!(store.load(), Profile::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());

        let mut resume = ResumeData::sample();
        resume.personal.full_name = "Ada Lovelace".to_string();
        store.save_resume(&resume).unwrap();
        store.save_template(TemplateId::Minimal).unwrap();
        store.save_accent(AccentColor::Green).unwrap();

        let profile = store.load();
        assert_eq!(profile.resume.personal.full_name, "Ada Lovelace");
        assert_eq!(profile.template, TemplateId::Minimal);
        assert_eq!(profile.accent, AccentColor::Green);
    }

    #[test]
    fn test_corrupt_resume_falls_back_to_sample() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        std::fs::write(dir.path().join(KEY_RESUME), "{broken").unwrap();

        let profile = store.load();
        assert_eq!(profile.resume, ResumeData::sample());
    }

    #[test]
    fn test_unrecognized_selections_fall_back() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        std::fs::write(dir.path().join(KEY_TEMPLATE), "holographic").unwrap();
        std::fs::write(dir.path().join(KEY_ACCENT), "mauve").unwrap();

        let profile = store.load();
        assert_eq!(profile.template, TemplateId::Professional);
        assert_eq!(profile.accent, AccentColor::Blue);
    }
}
