//! Construct scanner
//!
//! Finds `{# #}`, `{{ }}` and `{% %}` constructs left to right. Each
//! construct ends at the first matching closer after its opener; a
//! construct with no closer runs to the end of the text. Same-type nesting
//! is not recognised.

use super::category::Category;
use super::classifier::classify;
use super::highlights::Highlights;
use super::position::PositionMapper;

/// The three delimiter-bracket forms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructKind {
    /// `{# ... #}`
    Comment,
    /// `{{ ... }}`
    Expression,
    /// `{% ... %}`
    Statement,
}

impl ConstructKind {
    /// Kind opened by `{` followed by `marker`
    fn from_marker(marker: u8) -> Option<Self> {
        match marker {
            b'#' => Some(Self::Comment),
            b'{' => Some(Self::Expression),
            b'%' => Some(Self::Statement),
            _ => None,
        }
    }

    pub fn opener(self) -> &'static str {
        match self {
            Self::Comment => "{#",
            Self::Expression => "{{",
            Self::Statement => "{%",
        }
    }

    pub fn closer(self) -> &'static str {
        match self {
            Self::Comment => "#}",
            Self::Expression => "}}",
            Self::Statement => "%}",
        }
    }
}

/// One construct located in the text, as byte offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Construct {
    pub kind: ConstructKind,
    /// Offset of the opener
    pub start: usize,
    /// Offset of the closer, or the end of text when unterminated
    pub close: usize,
    /// Offset just past the construct
    pub end: usize,
}

impl Construct {
    pub fn is_terminated(&self) -> bool {
        self.close < self.end
    }

    /// Interior byte range, between opener and closer
    pub fn interior(&self) -> std::ops::Range<usize> {
        self.start + 2..self.close
    }
}

/// Iterator over the constructs of a text
#[derive(Debug, Clone)]
pub struct Constructs<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Constructs<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }
}

impl Iterator for Constructs<'_> {
    type Item = Construct;

    fn next(&mut self) -> Option<Construct> {
        let bytes = self.text.as_bytes();
        let mut i = self.pos;
        while i + 1 < bytes.len() {
            if bytes[i] != b'{' {
                i += 1;
                continue;
            }
            let Some(kind) = ConstructKind::from_marker(bytes[i + 1]) else {
                i += 1;
                continue;
            };

            let body = i + 2;
            let (close, end) = match self.text[body..].find(kind.closer()) {
                Some(found) => (body + found, body + found + 2),
                None => (self.text.len(), self.text.len()),
            };
            self.pos = end;
            return Some(Construct {
                kind,
                start: i,
                close,
                end,
            });
        }
        self.pos = bytes.len();
        None
    }
}

/// Tokenize every construct in `text`
pub fn scan(text: &str) -> Highlights {
    let mut highlights = Highlights::new();
    let mut mapper = PositionMapper::new(text);

    for construct in Constructs::new(text) {
        if construct.kind == ConstructKind::Comment {
            let range = mapper.range(construct.start, construct.end);
            highlights.push(Category::Comment, range);
            continue;
        }

        let opener = mapper.range(construct.start, construct.start + 2);
        highlights.push(Category::Delimiter, opener);

        let interior = &text[construct.interior()];
        let leading = interior.len() - interior.trim_start().len();
        let trimmed = interior.trim();
        if !trimmed.is_empty() {
            classify(
                trimmed,
                construct.interior().start + leading,
                &mut mapper,
                &mut highlights,
            );
        }

        if construct.is_terminated() {
            let closer = mapper.range(construct.close, construct.end);
            highlights.push(Category::Delimiter, closer);
        }
    }

    tracing::trace!(tokens = highlights.token_count(), "scan complete");
    highlights
}
