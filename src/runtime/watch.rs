//! Watch mode
//!
//! Watches a template's directory and feeds content changes to a session
//! as throttled edits, so bursts of writes collapse into one re-render.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use notify::{Event, EventKind, RecursiveMode, Watcher};

use crate::config::HighlightConfig;
use crate::document::Document;
use crate::messages::HighlightMsg;
use crate::render::AnsiRenderer;
use crate::session::HighlightSession;
use crate::theme::Theme;

/// How long to block when no pass is pending
const IDLE_TICK: Duration = Duration::from_millis(500);

/// Render `path`, then re-render it on every change until the watcher dies
pub fn watch<W: Write>(path: &Path, config: HighlightConfig, theme: &Theme, out: W) -> Result<()> {
    let path = path
        .canonicalize()
        .with_context(|| format!("Failed to resolve {}", path.display()))?;
    let dir = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    let (tx, rx) = mpsc::channel::<notify::Result<Event>>();
    let mut watcher = notify::recommended_watcher(tx).context("Failed to create file watcher")?;
    // Editors often save by replacing the file, so watch the directory
    watcher
        .watch(&dir, RecursiveMode::NonRecursive)
        .with_context(|| format!("Failed to watch {}", dir.display()))?;
    tracing::info!("Watching {}", path.display());

    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let renderer = AnsiRenderer::new(out, theme).clear_screen(true);
    let mut session = HighlightSession::new(config, theme, renderer);
    session.update(
        HighlightMsg::ActiveDocumentChanged(Some(Document::new(&path, text))),
        Instant::now(),
    );

    loop {
        let timeout = session
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(IDLE_TICK);

        match rx.recv_timeout(timeout) {
            Ok(Ok(event)) if touches(&event, &path) => match std::fs::read_to_string(&path) {
                Ok(text) => {
                    let document = Document::new(&path, text);
                    session.update(
                        HighlightMsg::DocumentChanged {
                            document,
                            throttled: true,
                        },
                        Instant::now(),
                    );
                }
                Err(e) => tracing::warn!("Failed to re-read {}: {}", path.display(), e),
            },
            Ok(Ok(_)) => {}
            Ok(Err(e)) => tracing::warn!("Watch error: {}", e),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }

        session.poll(Instant::now());
    }

    session.update(HighlightMsg::Shutdown, Instant::now());
    Ok(())
}

/// True when `event` may have changed the contents of `path`
fn touches(event: &Event, path: &Path) -> bool {
    let content_change = matches!(
        event.kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Any
    );
    content_change && event.paths.iter().any(|p| same_file(p, path))
}

fn same_file(candidate: &Path, path: &Path) -> bool {
    candidate == path
        || candidate
            .file_name()
            .is_some_and(|name| Some(name) == path.file_name())
}
