//! Highlight eligibility
//!
//! Decides whether a document is tokenized at all.

use std::path::Path;

use crate::config::HighlightConfig;
use crate::document::DocumentKind;

const JINJA_SUFFIXES: &[&str] = &[".jinja", ".j2", ".jinja2"];

/// Whether a document should be highlighted.
///
/// Jinja file names are always eligible. Plain text is eligible only while
/// both text-file switches are on. Everything else is not.
pub fn is_eligible(path: &Path, kind: DocumentKind, config: &HighlightConfig) -> bool {
    if has_jinja_suffix(path) || kind == DocumentKind::Jinja {
        return true;
    }

    let plain_text = kind == DocumentKind::PlainText
        || DocumentKind::from_path(path) == DocumentKind::PlainText;
    if plain_text {
        return config.general.enable_for_text_files && config.highlighting.enable_for_text_files;
    }

    false
}

fn has_jinja_suffix(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    let name = name.to_lowercase();
    JINJA_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(general: bool, highlighting: bool) -> HighlightConfig {
        let mut config = HighlightConfig::default();
        config.general.enable_for_text_files = general;
        config.highlighting.enable_for_text_files = highlighting;
        config
    }

    #[test]
    fn test_jinja_always_eligible() {
        for name in ["template.j2", "page.jinja", "mail.jinja2", "UPPER.J2"] {
            let path = Path::new(name);
            let kind = DocumentKind::from_path(path);
            assert!(is_eligible(path, kind, &config(false, false)), "{name}");
        }
    }

    #[test]
    fn test_text_needs_both_switches() {
        let path = Path::new("report.txt");
        let kind = DocumentKind::PlainText;
        assert!(is_eligible(path, kind, &config(true, true)));
        assert!(!is_eligible(path, kind, &config(false, true)));
        assert!(!is_eligible(path, kind, &config(true, false)));
        assert!(!is_eligible(path, kind, &config(false, false)));
    }

    #[test]
    fn test_text_by_kind_label() {
        // untitled buffer labelled as plain text by the host
        let path = Path::new("Untitled-1");
        assert!(is_eligible(path, DocumentKind::PlainText, &config(true, true)));
        assert!(!is_eligible(path, DocumentKind::Other, &config(true, true)));
    }

    #[test]
    fn test_other_documents_not_eligible() {
        let path = Path::new("index.html");
        assert!(!is_eligible(path, DocumentKind::Other, &config(true, true)));
    }

    #[test]
    fn test_defaults_enable_text() {
        let path = Path::new("notes.txt");
        assert!(is_eligible(
            path,
            DocumentKind::PlainText,
            &HighlightConfig::default()
        ));
    }
}
