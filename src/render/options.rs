//! Rendering options.

use super::{AccentColor, TemplateId};

/// Options for rendering a resume to HTML.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Which template lays out the document
    pub template: TemplateId,

    /// Accent color applied to headings, bars, and fills
    pub accent: AccentColor,

    /// Emit a complete HTML document rather than a body fragment
    pub standalone: bool,
}

impl RenderOptions {
    /// Create render options with defaults (Professional, blue, standalone).
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the template.
    pub fn with_template(mut self, template: TemplateId) -> Self {
        self.template = template;
        self
    }

    /// Select the accent color.
    pub fn with_accent(mut self, accent: AccentColor) -> Self {
        self.accent = accent;
        self
    }

    /// Emit only the body fragment, for embedding in a host page.
    pub fn fragment(mut self) -> Self {
        self.standalone = false;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            template: TemplateId::Professional,
            accent: AccentColor::Blue,
            standalone: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_builder() {
        let options = RenderOptions::new()
            .with_template(TemplateId::Sidebar)
            .with_accent(AccentColor::Green)
            .fragment();

        assert_eq!(options.template, TemplateId::Sidebar);
        assert_eq!(options.accent, AccentColor::Green);
        assert!(!options.standalone);
    }

    #[test]
    fn test_defaults() {
        let options = RenderOptions::default();
        assert_eq!(options.template, TemplateId::Professional);
        assert_eq!(options.accent, AccentColor::Blue);
        assert!(options.standalone);
    }
}
