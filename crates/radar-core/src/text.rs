// File: crates/radar-core/src/text.rs
// Summary: Text shaper over Skia textlayout plus label word-wrap and alignment.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

/// Horizontal anchor for a label relative to its polar attachment point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

/// Vertical anchor for a label block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Center,
    Bottom,
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, bold: bool) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        if bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, bold: bool) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color, bold);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32, bold: bool) -> f32 {
        let p = self.layout(text, size, skia::Color::from_argb(0, 0, 0, 0), bold);
        // width of the longest line
        p.longest_line()
    }

    /// Line advance used when stacking wrapped label lines.
    #[inline]
    pub fn line_height(size: f32) -> f32 {
        size * 1.25
    }

    /// Draw a single line with its baseline near `y`, anchored left.
    pub fn draw_left(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color, bold: bool) {
        let mut p = self.layout(text, size, color, bold);
        // Paragraph draws from top-left; adjust baseline by glyph height approximation
        p.paint(canvas, (x, y - size * 0.8));
    }

    /// Draw a block of lines anchored at `(x, y)` with per-line horizontal
    /// alignment, as matplotlib aligns each wrapped tick-label line on its
    /// own.
    pub fn draw_lines(
        &self,
        canvas: &skia::Canvas,
        lines: &[String],
        x: f32,
        y: f32,
        size: f32,
        color: skia::Color,
        bold: bool,
        halign: HAlign,
        valign: VAlign,
    ) {
        if lines.is_empty() {
            return;
        }
        let lh = Self::line_height(size);
        let block = lh * lines.len() as f32;
        let top = match valign {
            VAlign::Top => y,
            VAlign::Center => y - block * 0.5,
            VAlign::Bottom => y - block,
        };
        for (i, line) in lines.iter().enumerate() {
            let w = self.measure_width(line, size, bold);
            let lx = match halign {
                HAlign::Left => x,
                HAlign::Center => x - w * 0.5,
                HAlign::Right => x - w,
            };
            self.draw_left(canvas, line, lx, top + lh * i as f32 + size * 0.8, size, color, bold);
        }
    }
}

/// Greedy word wrap at `width` characters per line. Words are never split:
/// a word longer than `width` gets a line of its own, whole.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
