//! Message types delivered by the host surface
//!
//! Every state change of a [`HighlightSession`](crate::session::HighlightSession)
//! flows through these.

use crate::document::Document;

/// Events the host surface delivers to a session
#[derive(Debug, Clone)]
pub enum HighlightMsg {
    /// The focused document changed (`None` when nothing has focus).
    /// Highlights immediately.
    ActiveDocumentChanged(Option<Document>),
    /// The text of a visible document changed
    DocumentChanged {
        document: Document,
        /// Debounce the pass instead of running it now
        throttled: bool,
    },
    /// The host is shutting down
    Shutdown,
}
