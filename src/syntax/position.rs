//! Offset to (line, column) mapping
//!
//! Offsets are byte offsets into the document text. Columns are counted in
//! chars from the start of the line, so a coordinate points at the same
//! glyph whatever the encoding of the host surface.

use serde::Serialize;

/// A zero-based (line, column) coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A span between two coordinates, start inclusive, end exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// True when `other` shares at least one character with this range
    pub fn overlaps(&self, other: &Range) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Map `offset` to its coordinate in `text`.
///
/// Offsets past the end are clamped to the end of the text.
pub fn position_of(text: &str, offset: usize) -> Position {
    advance(text, 0, Position::default(), offset)
}

/// Walk `text` from `(from, pos)` up to `offset`, counting line breaks.
fn advance(text: &str, from: usize, mut pos: Position, offset: usize) -> Position {
    let end = offset.min(text.len());
    if end <= from {
        return pos;
    }
    for (idx, ch) in text[from..].char_indices() {
        if from + idx >= end {
            break;
        }
        if ch == '\n' {
            pos.line += 1;
            pos.column = 0;
        } else {
            pos.column += 1;
        }
    }
    pos
}

/// Position lookups for one left-to-right pass over a text.
///
/// Remembers the last resolved offset so that monotonically increasing
/// lookups only walk the text once in total.
#[derive(Debug)]
pub struct PositionMapper<'a> {
    text: &'a str,
    offset: usize,
    position: Position,
}

impl<'a> PositionMapper<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            offset: 0,
            position: Position::default(),
        }
    }

    /// Coordinate of `offset`, clamped to the end of the text
    pub fn position(&mut self, offset: usize) -> Position {
        let offset = offset.min(self.text.len());
        if offset < self.offset {
            self.offset = 0;
            self.position = Position::default();
        }
        // Never resume from inside a multi-byte char
        if !self.text.is_char_boundary(self.offset) {
            self.offset = 0;
            self.position = Position::default();
        }
        self.position = advance(self.text, self.offset, self.position, offset);
        self.offset = offset;
        self.position
    }

    /// Range covering `start..end`
    pub fn range(&mut self, start: usize, end: usize) -> Range {
        let start = self.position(start);
        let end = self.position(end);
        Range::new(start, end)
    }
}
