//! View that records every call instead of rendering.

use std::sync::Mutex;

use crate::domain::gateways::LinkView;

/// A single call made on a [`RecordingView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    LinkRendered {
        original_url: String,
        short_url: String,
    },
    LinkRemoved(String),
    LoadingShown,
    LoadingRemoved,
    ErrorRendered(String),
    ErrorCleared,
    InputCleared,
    SubmitEnabled(bool),
    MarkedCopied(String),
}

/// In-memory view for tests and headless embedding.
#[derive(Debug, Default)]
pub struct RecordingView {
    events: Mutex<Vec<ViewEvent>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the recorded calls, oldest first.
    pub fn events(&self) -> Vec<ViewEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Short URLs currently rendered, front of the list first.
    pub fn rendered_links(&self) -> Vec<String> {
        let mut links: Vec<String> = Vec::new();
        for event in self.events() {
            match event {
                ViewEvent::LinkRendered { short_url, .. } => links.insert(0, short_url),
                ViewEvent::LinkRemoved(short_url) => links.retain(|link| *link != short_url),
                _ => {}
            }
        }
        links
    }

    fn record(&self, event: ViewEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl LinkView for RecordingView {
    fn render_link(&self, original_url: &str, short_url: &str) {
        self.record(ViewEvent::LinkRendered {
            original_url: original_url.to_string(),
            short_url: short_url.to_string(),
        });
    }

    fn remove_link(&self, short_url: &str) {
        self.record(ViewEvent::LinkRemoved(short_url.to_string()));
    }

    fn render_loading_indicator(&self) {
        self.record(ViewEvent::LoadingShown);
    }

    fn remove_loading_indicator(&self) {
        self.record(ViewEvent::LoadingRemoved);
    }

    fn render_error(&self, message: &str) {
        self.record(ViewEvent::ErrorRendered(message.to_string()));
    }

    fn clear_error(&self) {
        self.record(ViewEvent::ErrorCleared);
    }

    fn clear_input(&self) {
        self.record(ViewEvent::InputCleared);
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.record(ViewEvent::SubmitEnabled(enabled));
    }

    fn mark_copied(&self, short_url: &str) {
        self.record(ViewEvent::MarkedCopied(short_url.to_string()));
    }
}
