//! Jinja Highlight - lexical highlighting for Jinja2 templates
//!
//! This crate locates `{{ }}`, `{% %}` and `{# #}` constructs in a document,
//! classifies their contents into styling categories, and schedules
//! re-highlighting for an editing surface with debouncing.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod document;
pub mod messages;
pub mod policy;
pub mod render;
pub mod runtime;
pub mod scheduler;
pub mod session;
pub mod syntax;
pub mod theme;
pub mod tracing;

// Re-export commonly used types
pub use config::HighlightConfig;
pub use document::{Document, DocumentKind};
pub use messages::HighlightMsg;
pub use policy::is_eligible;
pub use render::Renderer;
pub use session::HighlightSession;
pub use syntax::{scan, Category, Highlights, Position, Range};
pub use theme::Theme;
