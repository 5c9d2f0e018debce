//! Syntax highlighting data structures
//!
//! [`Highlights`] is what a tokenization pass produces: for each category,
//! the ranges to style in scan order. [`SyntaxHighlights`] is the per-line
//! projection renderers paint from.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use super::category::Category;
use super::position::Range;

/// Result of one tokenization pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Highlights {
    ranges: BTreeMap<Category, Vec<Range>>,
}

impl Highlights {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a range to `category`
    pub fn push(&mut self, category: Category, range: Range) {
        self.ranges.entry(category).or_default().push(range);
    }

    /// Ranges for `category`, or an empty slice if none
    pub fn get(&self, category: Category) -> &[Range] {
        self.ranges
            .get(&category)
            .map(|ranges| ranges.as_slice())
            .unwrap_or(&[])
    }

    /// Non-empty categories with their ranges, in category order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[Range])> {
        self.ranges
            .iter()
            .map(|(category, ranges)| (*category, ranges.as_slice()))
    }

    /// Total number of ranges across all categories
    pub fn token_count(&self) -> usize {
        self.ranges.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.token_count() == 0
    }
}

/// A single highlighted span within a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightToken {
    /// Start column (0-indexed, inclusive)
    pub start_col: usize,
    /// End column (exclusive)
    pub end_col: usize,
    pub category: Category,
}

/// Highlight information for a single line
#[derive(Debug, Clone, Default)]
pub struct LineHighlights {
    /// Tokens sorted by start_col
    pub tokens: Vec<HighlightToken>,
}

impl LineHighlights {
    /// Get the category at a given column, if any
    pub fn highlight_at(&self, col: usize) -> Option<Category> {
        for token in &self.tokens {
            if col >= token.start_col && col < token.end_col {
                return Some(token.category);
            }
            if token.start_col > col {
                break; // tokens are sorted, no need to continue
            }
        }
        None
    }
}

/// Per-line highlight state for a document
#[derive(Debug, Clone, Default)]
pub struct SyntaxHighlights {
    /// Map of line number (0-indexed) → tokens
    pub lines: HashMap<usize, LineHighlights>,
}

impl SyntaxHighlights {
    pub fn new() -> Self {
        Self::default()
    }

    /// Project document-level highlights onto the lines of `text`
    pub fn from_highlights(text: &str, highlights: &Highlights) -> Self {
        let mut syntax = Self::new();
        let line_lengths = line_lengths(text);
        for (category, ranges) in highlights.iter() {
            syntax.add_ranges(&line_lengths, category, ranges);
        }
        syntax.sort();
        syntax
    }

    /// Add `ranges` for `category`, splitting ranges that cross line breaks.
    ///
    /// `line_lengths` holds the char length of each line, without its `\n`.
    pub fn add_ranges(&mut self, line_lengths: &[usize], category: Category, ranges: &[Range]) {
        for range in ranges {
            let (start, end) = (range.start, range.end);
            for line in start.line..=end.line {
                let start_col = if line == start.line { start.column } else { 0 };
                let end_col = if line == end.line {
                    end.column
                } else {
                    line_lengths.get(line).copied().unwrap_or(0)
                };
                if end_col > start_col {
                    self.lines.entry(line).or_default().tokens.push(HighlightToken {
                        start_col,
                        end_col,
                        category,
                    });
                }
            }
        }
    }

    /// Restore the start_col ordering [`LineHighlights::highlight_at`] relies on
    pub fn sort(&mut self) {
        for line in self.lines.values_mut() {
            line.tokens.sort_by_key(|token| token.start_col);
        }
    }

    /// Get highlights for a specific line
    pub fn get_line(&self, line: usize) -> Option<&LineHighlights> {
        self.lines.get(&line)
    }

    /// Get highlight tokens for a line, or empty slice if none
    pub fn get_line_tokens(&self, line: usize) -> &[HighlightToken] {
        self.lines
            .get(&line)
            .map(|lh| lh.tokens.as_slice())
            .unwrap_or(&[])
    }
}

/// Char length of every `\n`-separated line of `text`
pub fn line_lengths(text: &str) -> Vec<usize> {
    text.split('\n').map(|line| line.chars().count()).collect()
}
