//! Runtime module - drives sessions from the binary
//!
//! This module contains the event loops that feed host messages to a
//! [`HighlightSession`](crate::session::HighlightSession):
//! - `watch` - file-system watching with debounced re-rendering

pub mod watch;

pub use watch::watch;
