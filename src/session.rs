//! Highlight session
//!
//! One session per editing surface. It owns the style handles, the snapshot
//! of the active document and the update scheduler, and turns host messages
//! into tokenization passes.

use std::time::Instant;

use crate::config::HighlightConfig;
use crate::document::Document;
use crate::messages::HighlightMsg;
use crate::policy::is_eligible;
use crate::render::Renderer;
use crate::scheduler::{SchedulerState, Trigger, UpdateScheduler};
use crate::syntax::{scan, Category};
use crate::theme::Theme;

/// Explicit context for one editing session
pub struct HighlightSession<R: Renderer> {
    config: HighlightConfig,
    renderer: R,
    /// One handle per category, created at construction
    styles: Vec<(Category, R::Style)>,
    active: Option<Document>,
    scheduler: UpdateScheduler,
    passes: u64,
}

impl<R: Renderer> HighlightSession<R> {
    /// Create a session, allocating one style handle per category
    pub fn new(config: HighlightConfig, theme: &Theme, mut renderer: R) -> Self {
        let styles = Category::ALL
            .iter()
            .map(|&category| (category, renderer.create_style(category, theme.style(category))))
            .collect();
        let scheduler = UpdateScheduler::new(config.debounce());
        Self {
            config,
            renderer,
            styles,
            active: None,
            scheduler,
            passes: 0,
        }
    }

    pub fn config(&self) -> &HighlightConfig {
        &self.config
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn active_document(&self) -> Option<&Document> {
        self.active.as_ref()
    }

    pub fn state(&self) -> SchedulerState {
        self.scheduler.state()
    }

    /// Number of tokenization passes run so far
    pub fn passes(&self) -> u64 {
        self.passes
    }

    /// When the next debounced pass is due, if one is armed
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    /// Handle a host message at time `now`
    pub fn update(&mut self, msg: HighlightMsg, now: Instant) {
        if self.scheduler.is_disposed() {
            tracing::debug!("Session disposed, ignoring {:?}", msg);
            return;
        }

        match msg {
            HighlightMsg::ActiveDocumentChanged(document) => {
                tracing::debug!(
                    "Active document changed to {:?}",
                    document.as_ref().map(|d| d.path.display().to_string())
                );
                self.active = document;
                self.trigger(false, now);
            }
            HighlightMsg::DocumentChanged {
                document,
                throttled,
            } => {
                let is_active = self
                    .active
                    .as_ref()
                    .is_some_and(|active| active.is_same_document(&document));
                if !is_active {
                    tracing::debug!(
                        "Ignoring change to inactive document {}",
                        document.path.display()
                    );
                    return;
                }
                self.active = Some(document);
                self.trigger(throttled, now);
            }
            HighlightMsg::Shutdown => self.dispose(),
        }
    }

    /// Run the debounced pass if its deadline has passed. Returns true when
    /// a pass ran.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.scheduler.poll(now) {
            return false;
        }
        self.run_pass();
        self.scheduler.finish();
        true
    }

    /// Cancel any pending pass and release every style handle. Terminal.
    pub fn dispose(&mut self) {
        if self.scheduler.is_disposed() {
            return;
        }
        self.scheduler.dispose();
        self.active = None;
        for (_, style) in self.styles.drain(..) {
            self.renderer.release(style);
        }
        tracing::debug!("Session disposed after {} passes", self.passes);
    }

    fn trigger(&mut self, throttled: bool, now: Instant) {
        match self.scheduler.trigger(throttled, now) {
            Trigger::RunNow => {
                self.run_pass();
                self.scheduler.finish();
            }
            Trigger::Armed(_) | Trigger::Ignored => {}
        }
    }

    /// Tokenize the active document and hand the ranges to the renderer
    fn run_pass(&mut self) {
        let Some(document) = self.active.as_ref() else {
            tracing::debug!("No active document, nothing to highlight");
            return;
        };

        if !is_eligible(&document.path, document.kind, &self.config) {
            tracing::debug!("{} is not eligible for highlighting", document.path.display());
            return;
        }

        let highlights = scan(&document.text);
        for (category, style) in &self.styles {
            self.renderer
                .apply(document, style, highlights.get(*category));
        }
        self.renderer.flush(document);
        self.passes += 1;

        tracing::debug!(
            "Highlighted {} ({} tokens, pass {})",
            document.path.display(),
            highlights.token_count(),
            self.passes
        );
    }
}

impl<R: Renderer> Drop for HighlightSession<R> {
    fn drop(&mut self) {
        self.dispose();
    }
}
