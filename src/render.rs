//! Rendering seam
//!
//! The host surface that paints categorized ranges. A session creates one
//! style handle per category up front, applies ranges through them on every
//! pass, and releases them when it is disposed.

use std::collections::HashMap;
use std::io::Write;

use crate::document::Document;
use crate::syntax::{line_lengths, Category, Range, SyntaxHighlights};
use crate::theme::{CategoryStyle, Theme};

const ANSI_RESET: &str = "\x1b[0m";

/// A surface that can style ranges of a document
pub trait Renderer {
    /// Handle for one category's visual style
    type Style;

    /// Allocate the style handle for `category`
    fn create_style(&mut self, category: Category, style: &CategoryStyle) -> Self::Style;

    /// Replace the ranges styled with `style` in `document`.
    ///
    /// Called once per category per pass; an empty slice clears the category.
    fn apply(&mut self, document: &Document, style: &Self::Style, ranges: &[Range]);

    /// All categories of a pass have been applied
    fn flush(&mut self, _document: &Document) {}

    /// Release a style handle. Called exactly once per handle.
    fn release(&mut self, style: Self::Style);
}

/// Style handle of the [`AnsiRenderer`]
#[derive(Debug, Clone)]
pub struct AnsiStyle {
    pub category: Category,
    pub prefix: String,
}

/// Paints documents to a terminal with 24-bit ANSI colors
pub struct AnsiRenderer<W: Write> {
    out: W,
    foreground: String,
    pending: HashMap<Category, Vec<Range>>,
    prefixes: HashMap<Category, String>,
    clear_screen: bool,
}

impl<W: Write> AnsiRenderer<W> {
    pub fn new(out: W, theme: &Theme) -> Self {
        Self {
            out,
            foreground: theme.foreground.ansi_fg(),
            pending: HashMap::new(),
            prefixes: HashMap::new(),
            clear_screen: false,
        }
    }

    /// Clear the terminal before every paint
    pub fn clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Paint `text` using the ranges applied so far
    fn paint(&mut self, text: &str) -> std::io::Result<()> {
        let lengths = line_lengths(text);
        let mut syntax = SyntaxHighlights::new();
        for (category, ranges) in &self.pending {
            syntax.add_ranges(&lengths, *category, ranges);
        }
        syntax.sort();

        if self.clear_screen {
            write!(self.out, "\x1b[2J\x1b[H")?;
        }
        for (line_idx, line) in text.split('\n').enumerate() {
            if line_idx > 0 {
                writeln!(self.out)?;
            }
            let mut current: Option<Category> = None;
            let highlights = syntax.get_line(line_idx);
            for (col, ch) in line.chars().enumerate() {
                let category = highlights.and_then(|lh| lh.highlight_at(col));
                if category != current {
                    write!(self.out, "{}", ANSI_RESET)?;
                    match category.and_then(|c| self.prefixes.get(&c)) {
                        Some(prefix) => write!(self.out, "{}", prefix)?,
                        None => write!(self.out, "{}", self.foreground)?,
                    }
                    current = category;
                }
                write!(self.out, "{}", ch)?;
            }
            if current.is_some() {
                write!(self.out, "{}", ANSI_RESET)?;
            }
        }
        write!(self.out, "{}", ANSI_RESET)?;
        self.out.flush()
    }
}

impl<W: Write> Renderer for AnsiRenderer<W> {
    type Style = AnsiStyle;

    fn create_style(&mut self, category: Category, style: &CategoryStyle) -> AnsiStyle {
        let prefix = style.ansi_prefix();
        self.prefixes.insert(category, prefix.clone());
        AnsiStyle { category, prefix }
    }

    fn apply(&mut self, _document: &Document, style: &AnsiStyle, ranges: &[Range]) {
        self.pending.insert(style.category, ranges.to_vec());
    }

    fn flush(&mut self, document: &Document) {
        if let Err(e) = self.paint(&document.text) {
            tracing::warn!("Failed to paint {}: {}", document.path.display(), e);
        }
        self.pending.clear();
    }

    fn release(&mut self, style: AnsiStyle) {
        self.prefixes.remove(&style.category);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::scan;

    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(ch) = chars.next() {
            if ch == '\x1b' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                out.push(ch);
            }
        }
        out
    }

    fn paint(text: &str) -> String {
        let theme = Theme::default_dark();
        let mut renderer = AnsiRenderer::new(Vec::new(), &theme);
        let doc = Document::new("t.j2", text);
        let highlights = scan(text);
        let styles: Vec<AnsiStyle> = Category::ALL
            .iter()
            .map(|c| renderer.create_style(*c, theme.style(*c)))
            .collect();
        for style in &styles {
            renderer.apply(&doc, style, highlights.get(style.category));
        }
        renderer.flush(&doc);
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn test_paint_preserves_text() {
        let text = "<p>{{ user.name|upper }}</p>\n{% if x %}é{# c\nd #}{% endif %}";
        assert_eq!(strip_ansi(&paint(text)), text);
    }

    #[test]
    fn test_paint_uses_category_prefix() {
        let theme = Theme::default_dark();
        let out = paint("{% if x %}");
        assert!(out.contains(&theme.style(Category::Keyword).ansi_prefix()));
        assert!(out.contains(&theme.style(Category::Delimiter).ansi_prefix()));
    }
}
