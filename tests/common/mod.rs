//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use jinja_highlight::render::Renderer;
use jinja_highlight::syntax::{Category, Highlights, Range};
use jinja_highlight::theme::CategoryStyle;
use jinja_highlight::Document;

/// Style handle handed out by [`RecordingRenderer`]
#[derive(Debug, PartialEq, Eq)]
pub struct RecordedStyle {
    pub id: usize,
    pub category: Category,
}

/// One completed pass as seen by the renderer
#[derive(Debug, Clone)]
pub struct Pass {
    pub text: String,
    pub highlights: Highlights,
}

/// Renderer that records everything a session asks of it
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub created: Vec<Category>,
    pub released: Vec<usize>,
    pub passes: Vec<Pass>,
    pending: Highlights,
    next_id: usize,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_pass(&self) -> Option<&Pass> {
        self.passes.last()
    }
}

impl Renderer for RecordingRenderer {
    type Style = RecordedStyle;

    fn create_style(&mut self, category: Category, _style: &CategoryStyle) -> RecordedStyle {
        self.created.push(category);
        self.next_id += 1;
        RecordedStyle {
            id: self.next_id,
            category,
        }
    }

    fn apply(&mut self, _document: &Document, style: &RecordedStyle, ranges: &[Range]) {
        for range in ranges {
            self.pending.push(style.category, *range);
        }
    }

    fn flush(&mut self, document: &Document) {
        self.passes.push(Pass {
            text: document.text.clone(),
            highlights: std::mem::take(&mut self.pending),
        });
    }

    fn release(&mut self, style: RecordedStyle) {
        self.released.push(style.id);
    }
}

/// Source text covered by `range`, for single-line inputs
pub fn slice(text: &str, range: &Range) -> String {
    assert_eq!(range.start.line, range.end.line, "multi-line range");
    let line = text.split('\n').nth(range.start.line).unwrap_or("");
    line.chars()
        .skip(range.start.column)
        .take(range.end.column - range.start.column)
        .collect()
}

/// Texts of every token of `category`, in scan order
pub fn texts(text: &str, highlights: &Highlights, category: Category) -> Vec<String> {
    highlights
        .get(category)
        .iter()
        .map(|range| slice(text, range))
        .collect()
}
