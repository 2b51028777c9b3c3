//! PDF export.
//!
//! Typesets a resume directly into an A4 portrait document with 10 mm
//! margins, using the same date formatting and percent scales as the HTML
//! renderers and the selected accent color for headings and bars. The
//! document is composed fully in memory and written in a single call, so a
//! failed export never leaves a partial file behind.
//!
//! # Example
//!
//! ```no_run
//! use cvforge::export::{ExportOptions, PdfExporter};
//! use cvforge::model::ResumeData;
//!
//! let exporter = PdfExporter::new(ExportOptions::default());
//! let resume = ResumeData::sample();
//! exporter.export_to_file(&resume, "out.pdf")?;
//! # Ok::<(), cvforge::Error>(())
//! ```

mod layout;

pub use layout::{MM_TO_PT, PAGE_HEIGHT, PAGE_WIDTH};

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::model::ResumeData;
use crate::render::{contact_fields, dates, skill_percent, AccentColor};
use layout::{text_width, Composer, Rgb};

const DARK: Rgb = (0.11, 0.11, 0.12);
const BODY: Rgb = (0.29, 0.29, 0.29);
const MUTED: Rgb = (0.53, 0.53, 0.55);
const TRACK: Rgb = (0.90, 0.91, 0.92);

/// Options controlling the produced document.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Accent color for headings, rules, and bars.
    pub accent: AccentColor,
    /// Page margin in millimeters.
    pub margin_mm: f32,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            accent: AccentColor::Blue,
            margin_mm: 10.0,
        }
    }
}

impl ExportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_accent(mut self, accent: AccentColor) -> Self {
        self.accent = accent;
        self
    }

    pub fn with_margin_mm(mut self, margin_mm: f32) -> Self {
        self.margin_mm = margin_mm;
        self
    }
}

/// The download filename for a resume: whitespace runs in the name collapse
/// to underscores, with a `_Resume.pdf` suffix. An empty name degrades to
/// `Resume.pdf`.
pub fn export_filename(full_name: &str) -> String {
    let words: Vec<&str> = full_name.split_whitespace().collect();
    if words.is_empty() {
        return "Resume.pdf".to_string();
    }
    format!("{}_Resume.pdf", words.join("_"))
}

/// Renders [`ResumeData`] into a PDF document.
pub struct PdfExporter {
    options: ExportOptions,
}

impl PdfExporter {
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }

    /// Produce the document as bytes.
    pub fn export_bytes(&self, data: &ResumeData) -> Result<Vec<u8>> {
        let mut doc = self.compose(data)?;
        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)?;
        Ok(bytes)
    }

    /// Produce the document and write it to `path` in one call.
    pub fn export_to_file(&self, data: &ResumeData, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.export_bytes(data)?;
        fs::write(path, bytes)?;
        Ok(())
    }

    fn compose(&self, data: &ResumeData) -> Result<lopdf::Document> {
        let accent = self.options.accent.rgb();
        let mut page = Composer::new(self.options.margin_mm * MM_TO_PT);

        self.header(&mut page, data, accent);

        if data.has_summary() {
            self.heading(&mut page, accent, "Summary");
            page.paragraph(&data.personal.summary, 9.0, BODY, 12.5);
        }

        if !data.work_experience.is_empty() {
            self.heading(&mut page, accent, "Work Experience");
            for work in &data.work_experience {
                page.ensure_room(40.0);
                page.text_line(&work.position, 10.5, true, DARK, 15.0);
                page.text_right(
                    &dates::format_range(&work.start_date, &work.end_date, work.current),
                    8.5,
                    false,
                    MUTED,
                );
                page.text_line(
                    &join_nonempty(&[&work.company, &work.location], ", "),
                    9.0,
                    false,
                    accent,
                    12.0,
                );
                if !work.description.is_empty() {
                    page.advance(2.0);
                    page.paragraph(&work.description, 9.0, BODY, 12.5);
                }
                page.advance(6.0);
            }
        }

        if !data.education.is_empty() {
            self.heading(&mut page, accent, "Education");
            for edu in &data.education {
                page.ensure_room(32.0);
                page.text_line(
                    &join_nonempty(&[&edu.degree, &edu.field], " in "),
                    10.0,
                    true,
                    DARK,
                    14.0,
                );
                page.text_right(
                    &dates::format_range(&edu.start_date, &edu.end_date, false),
                    8.5,
                    false,
                    MUTED,
                );
                page.text_line(
                    &join_nonempty(&[&edu.institution, &edu.location], ", "),
                    9.0,
                    false,
                    accent,
                    12.0,
                );
                page.advance(6.0);
            }
        }

        if !data.skills.is_empty() {
            self.heading(&mut page, accent, "Skills");
            // Two columns of name + bar rows.
            let column = (page.content_width() - 16.0) / 2.0;
            let bar_width = 90.0;
            for pair in data.skills.chunks(2) {
                page.ensure_room(14.0);
                page.advance(13.0);
                let mut x = page.left();
                for skill in pair {
                    let label_width = column - bar_width - 8.0;
                    let label = truncate_to(&skill.name, 9.0, label_width);
                    page.text_line_at(x, &label, 9.0, false, DARK, 0.0);
                    page.bar(
                        x + label_width + 8.0,
                        bar_width,
                        skill_percent(skill.level),
                        accent,
                        TRACK,
                    );
                    x += column + 16.0;
                }
            }
            page.advance(6.0);
        }

        if !data.languages.is_empty() {
            self.heading(&mut page, accent, "Languages");
            for language in &data.languages {
                page.ensure_room(14.0);
                page.advance(13.0);
                page.text_line_at(page.left(), &language.name, 9.0, false, DARK, 0.0);
                page.text_right(&language.proficiency.to_string(), 8.5, false, MUTED);
                page.bar(
                    page.left() + 160.0,
                    140.0,
                    language.proficiency.percent(),
                    accent,
                    TRACK,
                );
            }
            page.advance(6.0);
        }

        if !data.certifications.is_empty() {
            self.heading(&mut page, accent, "Certifications");
            for cert in &data.certifications {
                page.ensure_room(28.0);
                page.text_line(&cert.name, 9.5, true, DARK, 13.5);
                let date = dates::format_date(&cert.date);
                if !date.is_empty() {
                    page.text_right(&date, 8.5, false, MUTED);
                }
                let mut detail = cert.organization.clone();
                if let Some(id) = &cert.credential_id {
                    if !id.is_empty() {
                        if !detail.is_empty() {
                            detail.push_str(" - ");
                        }
                        detail.push_str("ID: ");
                        detail.push_str(id);
                    }
                }
                if !detail.is_empty() {
                    page.text_line(&detail, 8.5, false, MUTED, 11.5);
                }
                page.advance(4.0);
            }
        }

        let title = if data.personal.full_name.is_empty() {
            "Resume".to_string()
        } else {
            format!("{} - Resume", data.personal.full_name)
        };
        page.finish(&title)
    }

    fn header(&self, page: &mut Composer, data: &ResumeData, accent: Rgb) {
        if !data.personal.full_name.is_empty() {
            page.text_line(&data.personal.full_name, 22.0, true, DARK, 26.0);
        }
        if !data.personal.title.is_empty() {
            page.text_line(&data.personal.title, 12.0, false, accent, 16.0);
        }
        let contacts: Vec<String> = contact_fields(&data.personal)
            .into_iter()
            .map(|(_, value)| value.to_string())
            .collect();
        if !contacts.is_empty() {
            page.advance(2.0);
            page.paragraph(&contacts.join("  |  "), 8.5, MUTED, 11.5);
        }
        page.advance(4.0);
    }

    fn heading(&self, page: &mut Composer, accent: Rgb, text: &str) {
        page.ensure_room(36.0);
        page.advance(8.0);
        page.text_line(text, 12.0, true, accent, 16.0);
        page.advance(2.0);
        page.rule(accent, 1.0);
        page.advance(4.0);
    }
}

/// Join the non-empty parts with a separator.
fn join_nonempty(parts: &[&str], separator: &str) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(separator)
}

/// Shorten text so it fits a width, with a trailing ellipsis when cut.
fn truncate_to(text: &str, size: f32, max_width: f32) -> String {
    if text_width(text, size) <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    for c in text.chars() {
        let mut candidate = out.clone();
        candidate.push(c);
        candidate.push_str("...");
        if text_width(&candidate, size) > max_width {
            break;
        }
        out.push(c);
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_replaces_whitespace_runs() {
        assert_eq!(export_filename("John Appleseed"), "John_Appleseed_Resume.pdf");
        assert_eq!(
            export_filename("  Jane   Q.  Public "),
            "Jane_Q._Public_Resume.pdf"
        );
    }

    #[test]
    fn test_filename_empty_name() {
        assert_eq!(export_filename(""), "Resume.pdf");
        assert_eq!(export_filename("   "), "Resume.pdf");
    }

    #[test]
    fn test_export_produces_pdf_bytes() {
        let exporter = PdfExporter::new(ExportOptions::default());
        let bytes = exporter.export_bytes(&ResumeData::sample()).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        assert!(bytes.len() > 1000);
    }

    #[test]
    fn test_export_empty_resume_still_valid() {
        let exporter = PdfExporter::new(ExportOptions::default());
        let bytes = exporter.export_bytes(&ResumeData::empty()).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn test_truncate_keeps_short_text() {
        assert_eq!(truncate_to("Rust", 9.0, 200.0), "Rust");
        let long = "An unreasonably long skill name that cannot fit";
        let cut = truncate_to(long, 9.0, 60.0);
        assert!(cut.ends_with("..."));
        assert!(cut.len() < long.len());
    }
}
