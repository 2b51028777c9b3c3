//! Rendering module: resume data to themed HTML.
//!
//! Each template is a pure mapping from `(ResumeData, Theme)` to markup.
//! Templates share the date rule, the skill and proficiency fill tables, and
//! the accent shades; they differ only in layout.

pub mod dates;
mod html;
mod json;
mod options;
mod theme;

mod creative;
mod minimal;
mod modern;
mod professional;
mod sidebar;

pub use dates::{format_date, format_range};
pub use html::{contact_fields, escape_html, initials, skill_percent};
pub use json::{to_json, JsonFormat};
pub use options::RenderOptions;
pub use theme::{AccentColor, TemplateId, Theme};

use crate::error::Result;
use crate::model::ResumeData;

/// A layout template.
///
/// Implementations are stateless and side-effect free: the same data and
/// theme always produce the same markup.
pub trait Template: Send + Sync {
    /// The identifier this template renders for.
    fn id(&self) -> TemplateId;

    /// Render the document body fragment.
    fn render_body(&self, data: &ResumeData, theme: &Theme) -> String;
}

/// Total template dispatch.
pub fn template_for(id: TemplateId) -> &'static dyn Template {
    match id {
        TemplateId::Professional => &professional::ProfessionalTemplate,
        TemplateId::Creative => &creative::CreativeTemplate,
        TemplateId::Minimal => &minimal::MinimalTemplate,
        TemplateId::Modern => &modern::ModernTemplate,
        TemplateId::Sidebar => &sidebar::SidebarTemplate,
    }
}

/// Render a resume to HTML.
pub fn to_html(data: &ResumeData, options: &RenderOptions) -> Result<String> {
    let theme = Theme::new(options.accent);
    let body = template_for(options.template).render_body(data, &theme);

    if options.standalone {
        Ok(document_shell(data, &body))
    } else {
        Ok(body)
    }
}

/// Wrap a body fragment in a print-oriented document shell.
fn document_shell(data: &ResumeData, body: &str) -> String {
    let title = if data.personal.full_name.is_empty() {
        "Resume".to_string()
    } else {
        format!("{} - Resume", escape_html(&data.personal.full_name))
    };

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n<style>\n\
         @import url('https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap');\n\
         body {{ font-family: 'Inter', system-ui, sans-serif; background: white; margin: 0; padding: 0; }}\n\
         .resume {{ width: 100%; max-width: 8.5in; margin: 0 auto; background: white; }}\n\
         @media print {{\n  body {{ -webkit-print-color-adjust: exact !important; print-color-adjust: exact !important; }}\n\
         .resume {{ max-width: none; }}\n}}\n\
         </style>\n</head>\n<body>\n<div class=\"resume\">\n{body}\n</div>\n</body>\n</html>\n"
    )
}
