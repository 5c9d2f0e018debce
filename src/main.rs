use std::io::Write;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use jinja_highlight::cli::{CliArgs, CliCommand};
use jinja_highlight::render::AnsiRenderer;
use jinja_highlight::theme::{self, Theme, ThemeSource};
use jinja_highlight::{
    is_eligible, scan, Document, HighlightConfig, HighlightMsg, HighlightSession, Highlights,
};

fn main() -> Result<()> {
    jinja_highlight::tracing::init();

    let args = CliArgs::parse();
    let config = match &args.config {
        Some(path) => HighlightConfig::load_from(path),
        None => HighlightConfig::load(),
    };

    match args.command {
        CliCommand::Tokens { path, kind } => {
            let document = read_document(&path, kind.as_deref())?;
            let highlights = if is_eligible(&document.path, document.kind, &config) {
                scan(&document.text)
            } else {
                tracing::info!("{} is not eligible for highlighting", path.display());
                Highlights::new()
            };
            let json = serde_json::to_string_pretty(&highlights)
                .context("Failed to serialize highlights")?;
            println!("{}", json);
        }
        CliCommand::Render { path, kind, theme } => {
            let document = read_document(&path, kind.as_deref())?;
            let theme = resolve_theme(theme.as_deref().unwrap_or(&config.theme));
            render_once(document, config, &theme)?;
        }
        CliCommand::Watch { path, theme } => {
            let theme = resolve_theme(theme.as_deref().unwrap_or(&config.theme));
            jinja_highlight::runtime::watch(&path, config, &theme, std::io::stdout())?;
        }
        CliCommand::Themes => {
            for info in theme::list_available_themes() {
                let source = match info.source {
                    ThemeSource::User => "user",
                    ThemeSource::Builtin => "builtin",
                };
                println!("{:<20} {:<24} ({})", info.id, info.name, source);
            }
        }
    }

    Ok(())
}

fn read_document(path: &Path, kind: Option<&str>) -> Result<Document> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(match kind {
        Some(label) => Document::with_kind(path, label, text),
        None => Document::new(path, text),
    })
}

/// Load a theme by id, falling back to the default on any error
fn resolve_theme(id: &str) -> Theme {
    theme::load_theme(id).unwrap_or_else(|e| {
        tracing::warn!("Failed to load theme '{}': {}; using default", id, e);
        Theme::default()
    })
}

/// Paint one document through a session, or print it plain if ineligible
fn render_once(document: Document, config: HighlightConfig, theme: &Theme) -> Result<()> {
    let text = document.text.clone();
    let renderer = AnsiRenderer::new(std::io::stdout(), theme);
    let mut session = HighlightSession::new(config, theme, renderer);
    session.update(
        HighlightMsg::ActiveDocumentChanged(Some(document)),
        Instant::now(),
    );
    let painted = session.passes() > 0;
    session.update(HighlightMsg::Shutdown, Instant::now());

    let mut stdout = std::io::stdout().lock();
    if !painted {
        write!(stdout, "{}", text).context("Failed to write output")?;
    }
    if !text.ends_with('\n') {
        writeln!(stdout).context("Failed to write output")?;
    }
    Ok(())
}
