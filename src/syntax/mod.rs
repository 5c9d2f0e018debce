//! Template tokenizer
//!
//! Locates Jinja constructs in a document and classifies their contents
//! into styling categories.
//!
//! ## Architecture
//!
//! ```text
//! text → scanner (find {# #} / {{ }} / {% %})
//!      → classifier (split interiors into tokens)
//!      → position mapper (byte offset → line, column)
//!      → Highlights (category → ranges)
//! ```
//!
//! A pass is synchronous and never fails; malformed input degrades to the
//! permissive fallbacks documented on each stage.

mod category;
mod classifier;
mod highlights;
mod position;
mod scanner;
mod vocabulary;

pub use category::{Category, CATEGORY_NAMES};
pub use classifier::classify;
pub use highlights::{line_lengths, HighlightToken, Highlights, LineHighlights, SyntaxHighlights};
pub use position::{position_of, Position, PositionMapper, Range};
pub use scanner::{scan, Construct, ConstructKind, Constructs};
pub use vocabulary::{
    identifier_category, Identifier, BOOLEANS, BUILTINS, IDENTIFIER_RULES, KEYWORDS, METHODS,
};
