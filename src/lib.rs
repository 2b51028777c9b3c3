//! # cvforge
//!
//! Structured resume building, rendering, and export for Rust.
//!
//! This library keeps a resume as typed data, renders it through a set of
//! print-oriented HTML templates with a selectable accent color, and exports
//! it as an A4 PDF. Profiles persist through a small pluggable store.
//!
//! ## Quick Start
//!
//! ```
//! use cvforge::render::{to_html, RenderOptions, TemplateId};
//! use cvforge::model::ResumeData;
//!
//! fn main() -> cvforge::Result<()> {
//!     let mut resume = ResumeData::sample();
//!     resume.add_skill("Rust", 5);
//!
//!     let options = RenderOptions::new().with_template(TemplateId::Modern);
//!     let html = to_html(&resume, &options)?;
//!     assert!(html.contains("Rust"));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Typed resume model**: personal info, experience, education, skills,
//!   languages, certifications
//! - **Five templates**: Professional, Creative, Minimal, Modern, Sidebar
//! - **Six accent colors** applied consistently across every template
//! - **PDF export**: A4 portrait typeset directly from the data
//! - **Pluggable persistence**: filesystem store plus an in-memory store
//!   for tests

pub mod edit;
pub mod error;
pub mod export;
pub mod model;
pub mod render;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use error::{Error, Result};
pub use export::{export_filename, ExportOptions, PdfExporter};
pub use model::{
    Certification, Education, Language, PersonalInfo, Proficiency, ResumeData, Skill,
    WorkExperience,
};
pub use render::{
    format_date, format_range, to_html, to_json, AccentColor, JsonFormat, RenderOptions,
    TemplateId, Theme,
};
pub use session::Session;
pub use store::{FileStore, MemoryStore, Profile, ProfileStore};

use std::path::Path;

/// Render a resume to a standalone HTML document.
///
/// # Example
///
/// ```
/// use cvforge::{render_html, RenderOptions, ResumeData};
///
/// let html = render_html(&ResumeData::sample(), &RenderOptions::default()).unwrap();
/// assert!(html.starts_with("<!DOCTYPE html>"));
/// ```
pub fn render_html(data: &ResumeData, options: &RenderOptions) -> Result<String> {
    render::to_html(data, options)
}

/// Export a resume to a PDF file.
///
/// # Example
///
/// ```no_run
/// use cvforge::{export_pdf, AccentColor, ResumeData};
///
/// export_pdf(&ResumeData::sample(), AccentColor::Teal, "resume.pdf").unwrap();
/// ```
pub fn export_pdf(data: &ResumeData, accent: AccentColor, path: impl AsRef<Path>) -> Result<()> {
    let options = ExportOptions::new().with_accent(accent);
    PdfExporter::new(options).export_to_file(data, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_html_standalone() {
        let html = render_html(&ResumeData::sample(), &RenderOptions::default()).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("John Appleseed"));
    }

    #[test]
    fn test_export_pdf_writes_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("out.pdf");
        export_pdf(&ResumeData::sample(), AccentColor::Green, &path).unwrap();
        assert!(std::fs::read(&path).unwrap().starts_with(b"%PDF-"));
    }
}
