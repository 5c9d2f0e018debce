//! Document snapshots and kind detection
//!
//! Maps file names and host content-kind labels to document kinds.

use std::path::{Path, PathBuf};

/// What kind of content a document holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DocumentKind {
    /// `.jinja`, `.j2`, `.jinja2`
    Jinja,
    /// `.txt`, or labelled plain text by the host
    PlainText,
    #[default]
    Other,
}

impl DocumentKind {
    /// Detect kind from file extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "jinja" | "j2" | "jinja2" => DocumentKind::Jinja,
            "txt" => DocumentKind::PlainText,
            _ => DocumentKind::Other,
        }
    }

    /// Detect kind from file path
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(DocumentKind::Other)
    }

    /// Kind for a host-provided content label (e.g. `"plaintext"`)
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "jinja" | "jinja2" | "j2" => DocumentKind::Jinja,
            "plaintext" | "plain" | "text" | "txt" => DocumentKind::PlainText,
            _ => DocumentKind::Other,
        }
    }
}

/// An immutable snapshot of a document, as handed over by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub path: PathBuf,
    pub kind: DocumentKind,
    pub text: String,
}

impl Document {
    /// Snapshot with the kind detected from `path`
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        let path = path.into();
        let kind = DocumentKind::from_path(&path);
        Self {
            path,
            kind,
            text: text.into(),
        }
    }

    /// Snapshot with the kind given by a host content label
    pub fn with_kind(path: impl Into<PathBuf>, label: &str, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: DocumentKind::from_label(label),
            text: text.into(),
        }
    }

    /// Same document with new text
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self {
            path: self.path.clone(),
            kind: self.kind,
            text: text.into(),
        }
    }

    /// True when both snapshots belong to the same document
    pub fn is_same_document(&self, other: &Document) -> bool {
        self.path == other.path
    }
}
