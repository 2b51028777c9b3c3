//! Template identifiers and accent color theming.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of layout templates.
///
/// All templates accept the same data; they differ only in layout and visual
/// grouping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    /// Clean single-column layout for corporate environments
    #[default]
    Professional,
    /// Gradient sidebar with bold accents
    Creative,
    /// Centered, understated layout with letterspaced headings
    Minimal,
    /// Contemporary two-column layout with badge headings
    Modern,
    /// Solid accent sidebar with a wide main column
    Sidebar,
}

impl TemplateId {
    /// Resolve a stored identifier.
    ///
    /// Total lookup: unrecognized identifiers select Professional, never an
    /// error.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "creative" => TemplateId::Creative,
            "minimal" => TemplateId::Minimal,
            "modern" => TemplateId::Modern,
            "sidebar" => TemplateId::Sidebar,
            _ => TemplateId::Professional,
        }
    }

    /// The identifier used in persisted state.
    pub fn key(self) -> &'static str {
        match self {
            TemplateId::Professional => "professional",
            TemplateId::Creative => "creative",
            TemplateId::Minimal => "minimal",
            TemplateId::Modern => "modern",
            TemplateId::Sidebar => "sidebar",
        }
    }

    /// All templates in display order.
    pub fn all() -> [TemplateId; 5] {
        [
            TemplateId::Professional,
            TemplateId::Creative,
            TemplateId::Minimal,
            TemplateId::Modern,
            TemplateId::Sidebar,
        ]
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The closed set of accent colors, stored as plain keys and resolved through
/// a fixed name-to-hex table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentColor {
    #[default]
    Blue,
    Teal,
    Orange,
    Purple,
    Red,
    Green,
}

impl AccentColor {
    /// Resolve a stored color key. Unrecognized keys select Blue.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "teal" => AccentColor::Teal,
            "orange" => AccentColor::Orange,
            "purple" => AccentColor::Purple,
            "red" => AccentColor::Red,
            "green" => AccentColor::Green,
            _ => AccentColor::Blue,
        }
    }

    /// The key used in persisted state.
    pub fn key(self) -> &'static str {
        match self {
            AccentColor::Blue => "blue",
            AccentColor::Teal => "teal",
            AccentColor::Orange => "orange",
            AccentColor::Purple => "purple",
            AccentColor::Red => "red",
            AccentColor::Green => "green",
        }
    }

    /// The hex value applied to accent elements.
    pub fn hex(self) -> &'static str {
        match self {
            AccentColor::Blue => "#0071E3",
            AccentColor::Teal => "#14B8A6",
            AccentColor::Orange => "#F97316",
            AccentColor::Purple => "#8B5CF6",
            AccentColor::Red => "#EF4444",
            AccentColor::Green => "#22C55E",
        }
    }

    /// Normalized RGB components, for the PDF exporter.
    pub fn rgb(self) -> (f32, f32, f32) {
        let hex = &self.hex()[1..];
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0) as f32 / 255.0
        };
        (channel(0), channel(2), channel(4))
    }

    /// All colors in display order.
    pub fn all() -> [AccentColor; 6] {
        [
            AccentColor::Blue,
            AccentColor::Teal,
            AccentColor::Orange,
            AccentColor::Purple,
            AccentColor::Red,
            AccentColor::Green,
        ]
    }
}

impl fmt::Display for AccentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Accent color with the derived shades templates draw from.
#[derive(Debug, Clone, Copy, Default)]
pub struct Theme {
    pub accent: AccentColor,
}

impl Theme {
    pub fn new(accent: AccentColor) -> Self {
        Self { accent }
    }

    /// Full-strength accent hex.
    pub fn hex(&self) -> &'static str {
        self.accent.hex()
    }

    /// Accent at low alpha, used for section heading borders.
    pub fn soft(&self) -> String {
        format!("{}30", self.accent.hex())
    }

    /// Accent at medium alpha, used for secondary fill bars.
    pub fn muted(&self) -> String {
        format!("{}70", self.accent.hex())
    }

    /// Accent near full alpha, used as the gradient tail.
    pub fn deep(&self) -> String {
        format!("{}dd", self.accent.hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_parse_is_total() {
        assert_eq!(TemplateId::parse("sidebar"), TemplateId::Sidebar);
        assert_eq!(TemplateId::parse("MODERN"), TemplateId::Modern);
        assert_eq!(TemplateId::parse("brutalist"), TemplateId::Professional);
        assert_eq!(TemplateId::parse(""), TemplateId::Professional);
    }

    #[test]
    fn test_color_table() {
        assert_eq!(AccentColor::Blue.hex(), "#0071E3");
        assert_eq!(AccentColor::Teal.hex(), "#14B8A6");
        assert_eq!(AccentColor::Orange.hex(), "#F97316");
        assert_eq!(AccentColor::Purple.hex(), "#8B5CF6");
        assert_eq!(AccentColor::Red.hex(), "#EF4444");
        assert_eq!(AccentColor::Green.hex(), "#22C55E");
    }

    #[test]
    fn test_color_parse_fallback() {
        assert_eq!(AccentColor::parse("teal"), AccentColor::Teal);
        assert_eq!(AccentColor::parse("magenta"), AccentColor::Blue);
    }

    #[test]
    fn test_rgb_components() {
        let (r, g, b) = AccentColor::Red.rgb();
        assert!((r - 0xEF as f32 / 255.0).abs() < 1e-6);
        assert!((g - 0x44 as f32 / 255.0).abs() < 1e-6);
        assert!((b - 0x44 as f32 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_theme_shades() {
        let theme = Theme::new(AccentColor::Teal);
        assert_eq!(theme.soft(), "#14B8A630");
        assert_eq!(theme.muted(), "#14B8A670");
        assert_eq!(theme.deep(), "#14B8A6dd");
    }

    #[test]
    fn test_keys_round_trip() {
        for id in TemplateId::all() {
            assert_eq!(TemplateId::parse(id.key()), id);
        }
        for color in AccentColor::all() {
            assert_eq!(AccentColor::parse(color.key()), color);
        }
    }
}
