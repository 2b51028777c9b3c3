//! A working session over one stored profile.
//!
//! [`Session`] owns the in-memory [`Profile`] and a [`ProfileStore`], and
//! keeps the two in step: every edit is applied to the in-memory resume and
//! then persisted. A failed save never loses the edit - the in-memory state
//! stays current and the failure is reported through the diagnostic log, so
//! a later successful save catches the store up.
//!
//! # Example
//!
//! ```
//! use cvforge::session::Session;
//! use cvforge::store::MemoryStore;
//!
//! let mut session = Session::open(MemoryStore::new());
//! let id = session.edit(|resume| resume.add_skill("Rust", 5));
//! assert!(session.resume().skills.iter().any(|s| s.id == id));
//! ```

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::export::{export_filename, ExportOptions, PdfExporter};
use crate::model::ResumeData;
use crate::render::{to_html, AccentColor, RenderOptions, TemplateId};
use crate::store::{Profile, ProfileStore};

/// An open profile bound to its backing store.
pub struct Session<S: ProfileStore> {
    store: S,
    profile: Profile,
}

impl<S: ProfileStore> Session<S> {
    /// Load the stored profile and open a session over it.
    pub fn open(store: S) -> Self {
        let profile = store.load();
        Self { store, profile }
    }

    pub fn resume(&self) -> &ResumeData {
        &self.profile.resume
    }

    pub fn template(&self) -> TemplateId {
        self.profile.template
    }

    pub fn accent(&self) -> AccentColor {
        self.profile.accent
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Apply an edit to the resume and persist the result.
    ///
    /// The closure's return value passes through, so callers can capture
    /// generated ids or removal outcomes.
    pub fn edit<T>(&mut self, f: impl FnOnce(&mut ResumeData) -> T) -> T {
        let value = f(&mut self.profile.resume);
        if let Err(e) = self.store.save_resume(&self.profile.resume) {
            log::warn!("failed to persist resume: {}", e);
        }
        value
    }

    /// Select a template and persist the choice.
    pub fn set_template(&mut self, template: TemplateId) {
        self.profile.template = template;
        if let Err(e) = self.store.save_template(template) {
            log::warn!("failed to persist template selection: {}", e);
        }
    }

    /// Select an accent color and persist the choice.
    pub fn set_accent(&mut self, accent: AccentColor) {
        self.profile.accent = accent;
        if let Err(e) = self.store.save_accent(accent) {
            log::warn!("failed to persist accent selection: {}", e);
        }
    }

    /// Discard all edits and restore the sample resume.
    pub fn reset(&mut self) {
        self.profile.resume = ResumeData::sample();
        if let Err(e) = self.store.save_resume(&self.profile.resume) {
            log::warn!("failed to persist resume: {}", e);
        }
    }

    /// Render the resume with the session's template and accent selections.
    pub fn preview_html(&self) -> Result<String> {
        let options = RenderOptions::new()
            .with_template(self.profile.template)
            .with_accent(self.profile.accent);
        to_html(&self.profile.resume, &options)
    }

    /// Export the resume as a PDF into `dir`, returning the written path.
    ///
    /// The filename is derived from the resume's full name.
    pub fn export_pdf(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let path = dir
            .as_ref()
            .join(export_filename(&self.profile.resume.personal.full_name));
        let options = ExportOptions::new().with_accent(self.profile.accent);
        PdfExporter::new(options).export_to_file(&self.profile.resume, &path)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};

    use super::*;
    use crate::error::Error;
    use crate::store::{MemoryStore, KEY_RESUME};

    /// Store whose saves can be switched to fail, for exercising the
    /// log-and-continue policy.
    #[derive(Default)]
    struct FlakyStore {
        inner: MemoryStore,
        failing: AtomicBool,
    }

    impl FlakyStore {
        fn new() -> Self {
            Self::default()
        }

        fn set_failing(&self, failing: bool) {
            self.failing.store(failing, Ordering::SeqCst);
        }

        fn check(&self) -> Result<()> {
            if self.failing.load(Ordering::SeqCst) {
                Err(Error::Storage("disk full".to_string()))
            } else {
                Ok(())
            }
        }
    }

    impl ProfileStore for FlakyStore {
        fn load(&self) -> Profile {
            self.inner.load()
        }

        fn save_resume(&self, resume: &ResumeData) -> Result<()> {
            self.check()?;
            self.inner.save_resume(resume)
        }

        fn save_template(&self, template: TemplateId) -> Result<()> {
            self.check()?;
            self.inner.save_template(template)
        }

        fn save_accent(&self, accent: AccentColor) -> Result<()> {
            self.check()?;
            self.inner.save_accent(accent)
        }
    }

    #[test]
    fn test_open_loads_defaults() {
        let session = Session::open(MemoryStore::new());
        assert_eq!(session.resume(), &ResumeData::sample());
        assert_eq!(session.template(), TemplateId::Professional);
        assert_eq!(session.accent(), AccentColor::Blue);
    }

    #[test]
    fn test_edit_persists() {
        let mut session = Session::open(MemoryStore::new());
        let id = session.edit(|resume| resume.add_skill("Rust", 5));

        let reloaded = Session::open(std::mem::replace(
            &mut session.store,
            MemoryStore::new(),
        ));
        assert!(reloaded.resume().skills.iter().any(|s| s.id == id));
    }

    #[test]
    fn test_selection_changes_persist() {
        let mut session = Session::open(MemoryStore::new());
        session.set_template(TemplateId::Creative);
        session.set_accent(AccentColor::Orange);

        let reloaded = Session::open(std::mem::take(&mut session.store));
        assert_eq!(reloaded.template(), TemplateId::Creative);
        assert_eq!(reloaded.accent(), AccentColor::Orange);
    }

    #[test]
    fn test_failed_save_keeps_edit_in_memory() {
        let mut session = Session::open(FlakyStore::new());
        session.store().set_failing(true);

        let id = session.edit(|resume| resume.add_skill("Rust", 4));

        // The edit applied in memory even though the save failed.
        assert!(session.resume().skills.iter().any(|s| s.id == id));
        assert!(session.store().inner.get_raw(KEY_RESUME).is_none());
    }

    #[test]
    fn test_next_successful_save_catches_store_up() {
        let mut session = Session::open(FlakyStore::new());
        session.store().set_failing(true);
        let first = session.edit(|resume| resume.add_skill("Rust", 4));

        session.store().set_failing(false);
        let second = session.edit(|resume| resume.add_skill("Go", 3));

        // The later save persists the full resume, earlier edit included.
        let stored = session.store().inner.load();
        assert!(stored.resume.skills.iter().any(|s| s.id == first));
        assert!(stored.resume.skills.iter().any(|s| s.id == second));
    }

    #[test]
    fn test_failed_selection_save_keeps_choice() {
        let mut session = Session::open(FlakyStore::new());
        session.store().set_failing(true);
        session.set_template(TemplateId::Sidebar);

        assert_eq!(session.template(), TemplateId::Sidebar);
        assert_eq!(session.store().inner.load().template, TemplateId::Professional);
    }

    #[test]
    fn test_reset_restores_sample() {
        let mut session = Session::open(MemoryStore::new());
        session.edit(|resume| *resume = ResumeData::empty());
        assert!(session.resume().is_empty());

        session.reset();
        assert_eq!(session.resume(), &ResumeData::sample());
    }

    #[test]
    fn test_preview_uses_selected_accent() {
        let mut session = Session::open(MemoryStore::new());
        session.set_accent(AccentColor::Purple);
        let html = session.preview_html().unwrap();
        assert!(html.contains("#8B5CF6"));
    }

    #[test]
    fn test_export_pdf_writes_named_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let session = Session::open(MemoryStore::new());
        let path = session.export_pdf(dir.path()).unwrap();

        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "John_Appleseed_Resume.pdf"
        );
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }
}
