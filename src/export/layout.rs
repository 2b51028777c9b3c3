//! Low-level page composition for the PDF exporter.
//!
//! A small typesetting cursor over lopdf content streams: text lines, wrapped
//! paragraphs, rules, and fill bars, with automatic page breaks. Coordinates
//! are PDF points with the origin at the bottom-left.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use crate::error::Result;

/// A4 portrait, in points.
pub const PAGE_WIDTH: f32 = 595.28;
pub const PAGE_HEIGHT: f32 = 841.89;

/// Millimeters to points.
pub const MM_TO_PT: f32 = 72.0 / 25.4;

/// An RGB color with components in 0..=1.
pub type Rgb = (f32, f32, f32);

/// Page cursor accumulating drawing operations.
pub struct Composer {
    finished: Vec<Vec<Operation>>,
    ops: Vec<Operation>,
    margin: f32,
    y: f32,
}

impl Composer {
    pub fn new(margin: f32) -> Self {
        Self {
            finished: Vec::new(),
            ops: Vec::new(),
            margin,
            y: PAGE_HEIGHT - margin,
        }
    }

    /// Usable width between the margins.
    pub fn content_width(&self) -> f32 {
        PAGE_WIDTH - 2.0 * self.margin
    }

    pub fn left(&self) -> f32 {
        self.margin
    }

    /// Start a new page if fewer than `needed` points remain on this one.
    pub fn ensure_room(&mut self, needed: f32) {
        if self.y - needed < self.margin {
            self.break_page();
        }
    }

    /// Force a page break.
    pub fn break_page(&mut self) {
        let ops = std::mem::take(&mut self.ops);
        self.finished.push(ops);
        self.y = PAGE_HEIGHT - self.margin;
    }

    /// Move the cursor down.
    pub fn advance(&mut self, dy: f32) {
        self.y -= dy;
    }

    /// Draw one line of text at the cursor and advance by `leading`.
    pub fn text_line(&mut self, text: &str, size: f32, bold: bool, color: Rgb, leading: f32) {
        self.text_line_at(self.margin, text, size, bold, color, leading);
    }

    /// Draw one line of text at an explicit x position.
    pub fn text_line_at(
        &mut self,
        x: f32,
        text: &str,
        size: f32,
        bold: bool,
        color: Rgb,
        leading: f32,
    ) {
        self.ensure_room(leading);
        self.advance(leading);
        let font = if bold { "F2" } else { "F1" };
        let (r, g, b) = color;
        self.ops.push(Operation::new("BT", vec![]));
        self.ops
            .push(Operation::new("Tf", vec![font.into(), size.into()]));
        self.ops
            .push(Operation::new("rg", vec![r.into(), g.into(), b.into()]));
        self.ops
            .push(Operation::new("Td", vec![x.into(), self.y.into()]));
        self.ops
            .push(Operation::new("Tj", vec![Object::string_literal(pdf_text(text))]));
        self.ops.push(Operation::new("ET", vec![]));
    }

    /// Draw a right-aligned line of text on the current baseline band.
    ///
    /// Intended to follow a `text_line` call so both land on one visual row:
    /// this draws at the cursor without advancing it further.
    pub fn text_right(&mut self, text: &str, size: f32, bold: bool, color: Rgb) {
        let width = text_width(text, size);
        let x = PAGE_WIDTH - self.margin - width;
        let font = if bold { "F2" } else { "F1" };
        let (r, g, b) = color;
        self.ops.push(Operation::new("BT", vec![]));
        self.ops
            .push(Operation::new("Tf", vec![font.into(), size.into()]));
        self.ops
            .push(Operation::new("rg", vec![r.into(), g.into(), b.into()]));
        self.ops
            .push(Operation::new("Td", vec![x.into(), self.y.into()]));
        self.ops
            .push(Operation::new("Tj", vec![Object::string_literal(pdf_text(text))]));
        self.ops.push(Operation::new("ET", vec![]));
    }

    /// Draw a word-wrapped paragraph across as many lines as needed.
    pub fn paragraph(&mut self, text: &str, size: f32, color: Rgb, leading: f32) {
        let max_width = self.content_width();
        for line in wrap(text, size, max_width) {
            self.text_line(&line, size, false, color, leading);
        }
    }

    /// Draw a horizontal rule of the full content width.
    pub fn rule(&mut self, color: Rgb, thickness: f32) {
        self.ensure_room(thickness + 2.0);
        self.advance(thickness + 2.0);
        self.fill_rect(self.margin, self.y, self.content_width(), thickness, color);
    }

    /// Draw a progress bar: a light track with a partial fill.
    pub fn bar(&mut self, x: f32, width: f32, percent: u8, fill: Rgb, track: Rgb) {
        let height = 3.5;
        let filled = width * f32::from(percent.min(100)) / 100.0;
        // Center the bar on the current baseline band.
        let y = self.y + 1.0;
        self.fill_rect(x, y, width, height, track);
        self.fill_rect(x, y, filled, height, fill);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb) {
        let (r, g, b) = color;
        self.ops
            .push(Operation::new("rg", vec![r.into(), g.into(), b.into()]));
        self.ops.push(Operation::new(
            "re",
            vec![x.into(), y.into(), w.into(), h.into()],
        ));
        self.ops.push(Operation::new("f", vec![]));
    }

    /// Assemble the finished pages into a PDF document.
    pub fn finish(mut self, title: &str) -> Result<Document> {
        if !self.ops.is_empty() || self.finished.is_empty() {
            let ops = std::mem::take(&mut self.ops);
            self.finished.push(ops);
        }

        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let regular_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let bold_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica-Bold",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => regular_id,
                "F2" => bold_id,
            },
        });

        let mut kids: Vec<Object> = Vec::with_capacity(self.finished.len());
        for ops in self.finished {
            let content = Content { operations: ops };
            let stream_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => stream_id,
                "Resources" => resources_id,
                "MediaBox" => vec![
                    0.into(),
                    0.into(),
                    PAGE_WIDTH.into(),
                    PAGE_HEIGHT.into(),
                ],
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        if !title.is_empty() {
            let info_id = doc.add_object(dictionary! {
                "Title" => Object::string_literal(pdf_text(title)),
                "Producer" => Object::string_literal("cvforge"),
            });
            doc.trailer.set("Info", info_id);
        }

        doc.compress();
        Ok(doc)
    }
}

/// Approximate rendered width of a string in points.
///
/// Helvetica metrics by character class; only used for wrapping and right
/// alignment, so rough is fine.
pub fn text_width(text: &str, size: f32) -> f32 {
    let units: f32 = text
        .chars()
        .map(|c| match c {
            'i' | 'j' | 'l' | '.' | ',' | ':' | ';' | '\'' | '|' | '!' => 0.28,
            'f' | 't' | 'r' | 'I' | '(' | ')' | '[' | ']' | '-' | '/' => 0.38,
            'm' | 'w' | 'M' | 'W' | '@' => 0.89,
            ' ' => 0.28,
            'A'..='Z' | '0'..='9' => 0.67,
            _ => 0.53,
        })
        .sum();
    units * size
}

/// Word-wrap text to a maximum rendered width.
fn wrap(text: &str, size: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };
        if text_width(&candidate, size) <= max_width || current.is_empty() {
            current = candidate;
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Reduce text to what the built-in Type1 fonts can show.
fn pdf_text(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{2022}' | '\u{2013}' | '\u{2014}' => '-',
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201C}' | '\u{201D}' => '"',
            c if (c as u32) < 0x100 => c,
            _ => '?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_respects_width() {
        let text = "a bb ccc dddd eeeee ffffff ggggggg";
        let lines = wrap(text, 10.0, 80.0);
        assert!(lines.len() > 1);
        for line in &lines {
            // A single overlong word may exceed the width; these do not.
            assert!(text_width(line, 10.0) <= 80.0);
        }
    }

    #[test]
    fn test_wrap_empty_text() {
        assert!(wrap("", 10.0, 100.0).is_empty());
        assert!(wrap("   ", 10.0, 100.0).is_empty());
    }

    #[test]
    fn test_pdf_text_substitutions() {
        assert_eq!(pdf_text("a \u{2022} b"), "a - b");
        assert_eq!(pdf_text("\u{2019}quoted\u{2019}"), "'quoted'");
        assert_eq!(pdf_text("\u{4F60}\u{597D}"), "??");
    }

    #[test]
    fn test_page_break_on_overflow() {
        let mut composer = Composer::new(10.0 * MM_TO_PT);
        for _ in 0..200 {
            composer.text_line("line", 10.0, false, (0.0, 0.0, 0.0), 14.0);
        }
        let doc = composer.finish("Test").unwrap();
        let pages = doc.get_pages();
        assert!(pages.len() > 1, "expected overflow onto a second page");
    }

    #[test]
    fn test_finish_always_emits_one_page() {
        let composer = Composer::new(28.0);
        let doc = composer.finish("").unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }
}
