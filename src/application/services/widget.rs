//! The shortening widget: submission workflow plus copy and delete actions.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::application::services::LinkStore;
use crate::domain::entities::ShortenedLink;
use crate::domain::gateways::{Clipboard, LinkView, ShortenerApi};
use crate::domain::repositories::KeyValueStore;
use crate::error::WorkflowError;
use tracing::{debug, info, warn};

/// Default bound on how long a submission waits for the shortening service.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Context object wiring the link store to its collaborators.
///
/// Built once at startup and shared by every UI event. Each public method
/// corresponds to one event: page load ([`Self::init`]), form submit
/// ([`Self::submit`]), copy button ([`Self::copy`]) and delete button
/// ([`Self::delete`]).
pub struct Widget<S, A, V, C>
where
    S: KeyValueStore,
    A: ShortenerApi,
    V: LinkView,
    C: Clipboard,
{
    store: LinkStore<S>,
    api: Arc<A>,
    view: Arc<V>,
    clipboard: Arc<C>,
    timeout: Duration,
    in_flight: AtomicBool,
}

impl<S, A, V, C> Widget<S, A, V, C>
where
    S: KeyValueStore,
    A: ShortenerApi,
    V: LinkView,
    C: Clipboard,
{
    /// Creates a widget with the default 10 second request timeout.
    pub fn new(store: LinkStore<S>, api: Arc<A>, view: Arc<V>, clipboard: Arc<C>) -> Self {
        Self {
            store,
            api,
            view,
            clipboard,
            timeout: DEFAULT_TIMEOUT,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn store(&self) -> &LinkStore<S> {
        &self.store
    }

    pub fn view(&self) -> &V {
        self.view.as_ref()
    }

    /// Renders every persisted link, oldest first, so the newest ends up at
    /// the front of the view.
    ///
    /// Returns the number of links rendered.
    pub fn init(&self) -> Result<usize, WorkflowError> {
        let links = self.store.list()?;

        for link in &links {
            self.view.render_link(&link.original_url, &link.short_url);
        }

        debug!(count = links.len(), "Rendered persisted links");
        Ok(links.len())
    }

    /// Runs one submission cycle for the URL typed by the user.
    ///
    /// # Flow
    ///
    /// 1. Refuse if another submission is in flight, otherwise disable submit
    /// 2. Clear the previous error and the input field
    /// 3. Show the loading indicator and race the service against the timeout
    /// 4. Remove the loading indicator
    /// 5. On success store the link and render it; on failure render the
    ///    cause-specific message
    /// 6. Re-enable submit
    ///
    /// # Errors
    ///
    /// Every failure is rendered through [`LinkView::render_error`] before it
    /// is returned, except [`WorkflowError::Busy`] which leaves the running
    /// submission's display untouched.
    pub async fn submit(&self, input: &str) -> Result<ShortenedLink, WorkflowError> {
        let Some(_submission) = InFlight::acquire(&self.in_flight, self.view.as_ref()) else {
            debug!("Submission refused, another one is in flight");
            return Err(WorkflowError::Busy);
        };

        self.view.clear_error();

        let result = self.shorten_and_store(input).await;

        if let Err(e) = &result {
            warn!(error = %e, "Submission failed");
            self.view.render_error(&e.user_message());
        }

        result
    }

    /// Copies a listed short link to the clipboard and marks it copied.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::LinkNotFound`] if the link is not stored and
    /// [`WorkflowError::Clipboard`] if the clipboard rejects the write.
    pub fn copy(&self, short_url: &str) -> Result<ShortenedLink, WorkflowError> {
        let link = self
            .store
            .find(short_url)?
            .ok_or_else(|| WorkflowError::LinkNotFound(short_url.to_string()))?;

        self.clipboard.write_text(&link.short_url)?;
        self.view.mark_copied(&link.short_url);

        debug!(short_url, "Link copied");
        Ok(link)
    }

    /// Deletes a link from the store and from the view.
    ///
    /// Returns whether a stored link matched. Deleting an unknown link is
    /// not an error.
    pub fn delete(&self, short_url: &str) -> Result<bool, WorkflowError> {
        let removed = self.store.remove(short_url)?;
        self.view.remove_link(short_url);

        info!(short_url, removed, "Link deleted");
        Ok(removed)
    }

    /// Clears every stored link.
    pub fn reset(&self) -> Result<(), WorkflowError> {
        self.store.reset()?;
        info!("All links cleared");
        Ok(())
    }

    async fn shorten_and_store(&self, input: &str) -> Result<ShortenedLink, WorkflowError> {
        let original_url = input.trim();
        self.view.clear_input();

        if original_url.is_empty() {
            return Err(WorkflowError::EmptyUrl);
        }

        let indicator = LoadingIndicator::show(self.view.as_ref());
        let outcome = self.race(original_url).await;
        drop(indicator);

        let short_url = outcome?;

        if let Some(previous) = self.store.add(original_url, &short_url)? {
            self.view.remove_link(&previous.short_url);
        }
        self.view.render_link(original_url, &short_url);

        info!(original_url, short_url = %short_url, "Link shortened");
        Ok(ShortenedLink::new(original_url, short_url))
    }

    /// Races the service call against the timeout; the loser is dropped.
    async fn race(&self, url: &str) -> Result<String, WorkflowError> {
        match tokio::time::timeout(self.timeout, self.api.shorten(url)).await {
            Ok(result) => result.map_err(WorkflowError::from),
            Err(_) => Err(WorkflowError::Timeout {
                elapsed: self.timeout,
            }),
        }
    }
}

/// Marks a submission as running; submit is disabled for its lifetime.
struct InFlight<'a, V: LinkView> {
    flag: &'a AtomicBool,
    view: &'a V,
}

impl<'a, V: LinkView> InFlight<'a, V> {
    fn acquire(flag: &'a AtomicBool, view: &'a V) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()?;
        view.set_submit_enabled(false);
        Some(Self { flag, view })
    }
}

impl<V: LinkView> Drop for InFlight<'_, V> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
        self.view.set_submit_enabled(true);
    }
}

/// Loading indicator that is removed exactly once, whichever way the
/// submission ends.
struct LoadingIndicator<'a, V: LinkView> {
    view: &'a V,
}

impl<'a, V: LinkView> LoadingIndicator<'a, V> {
    fn show(view: &'a V) -> Self {
        view.render_loading_indicator();
        Self { view }
    }
}

impl<V: LinkView> Drop for LoadingIndicator<'_, V> {
    fn drop(&mut self) {
        self.view.remove_loading_indicator();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::{MockClipboard, MockLinkView, MockShortenerApi};
    use crate::domain::repositories::MockKeyValueStore;
    use crate::error::{ClipboardError, ShortenError, StorageError};
    use crate::infrastructure::clipboard::NullClipboard;
    use crate::infrastructure::storage::MemoryStorage;
    use crate::infrastructure::view::{RecordingView, ViewEvent};
    use async_trait::async_trait;

    /// Shortener that answers after a fixed delay.
    struct DelayedShortener {
        delay: Duration,
        short_url: &'static str,
    }

    #[async_trait]
    impl ShortenerApi for DelayedShortener {
        async fn shorten(&self, _url: &str) -> Result<String, ShortenError> {
            tokio::time::sleep(self.delay).await;
            Ok(self.short_url.to_string())
        }
    }

    fn create_test_widget<A: ShortenerApi>(
        api: A,
    ) -> Widget<MemoryStorage, A, RecordingView, NullClipboard> {
        Widget::new(
            LinkStore::new(MemoryStorage::new()),
            Arc::new(api),
            Arc::new(RecordingView::new()),
            Arc::new(NullClipboard::new()),
        )
    }

    fn count(events: &[ViewEvent], wanted: &ViewEvent) -> usize {
        events.iter().filter(|event| *event == wanted).count()
    }

    #[tokio::test]
    async fn test_submit_success_stores_and_renders() {
        let mut mock_api = MockShortenerApi::new();
        mock_api
            .expect_shorten()
            .withf(|url| url == "http://example.com")
            .times(1)
            .returning(|_| Ok("http://short.ly/abc".to_string()));

        let widget = create_test_widget(mock_api);

        let link = widget.submit("http://example.com").await.unwrap();
        assert_eq!(link, ShortenedLink::new("http://example.com", "http://short.ly/abc"));

        assert_eq!(
            widget.store().list().unwrap(),
            vec![ShortenedLink::new("http://example.com", "http://short.ly/abc")]
        );

        let events = widget.view.events();
        assert_eq!(
            events,
            vec![
                ViewEvent::SubmitEnabled(false),
                ViewEvent::ErrorCleared,
                ViewEvent::InputCleared,
                ViewEvent::LoadingShown,
                ViewEvent::LoadingRemoved,
                ViewEvent::LinkRendered {
                    original_url: "http://example.com".to_string(),
                    short_url: "http://short.ly/abc".to_string(),
                },
                ViewEvent::SubmitEnabled(true),
            ]
        );
    }

    #[tokio::test]
    async fn test_submit_trims_input() {
        let mut mock_api = MockShortenerApi::new();
        mock_api
            .expect_shorten()
            .withf(|url| url == "https://rust-lang.org")
            .times(1)
            .returning(|_| Ok("https://9qr.de/r".to_string()));

        let widget = create_test_widget(mock_api);

        let link = widget.submit("  https://rust-lang.org \n").await.unwrap();
        assert_eq!(link.original_url, "https://rust-lang.org");
    }

    #[tokio::test]
    async fn test_submit_http_400_removes_indicator_once() {
        let mut mock_api = MockShortenerApi::new();
        mock_api.expect_shorten().times(1).returning(|_| {
            Err(ShortenError::HttpStatus {
                status: 400,
                detail: None,
            })
        });

        let mut mock_view = MockLinkView::new();
        mock_view
            .expect_set_submit_enabled()
            .times(2)
            .return_const(());
        mock_view.expect_clear_error().times(1).return_const(());
        mock_view.expect_clear_input().times(1).return_const(());
        mock_view
            .expect_render_loading_indicator()
            .times(1)
            .return_const(());
        mock_view
            .expect_remove_loading_indicator()
            .times(1)
            .return_const(());
        mock_view
            .expect_render_error()
            .withf(|message| message == "Please enter a valid URL!")
            .times(1)
            .return_const(());
        mock_view.expect_render_link().times(0);

        let widget = Widget::new(
            LinkStore::new(MemoryStorage::new()),
            Arc::new(mock_api),
            Arc::new(mock_view),
            Arc::new(NullClipboard::new()),
        );

        let result = widget.submit("not a url").await;

        assert!(matches!(
            result,
            Err(WorkflowError::HttpStatus { status: 400, .. })
        ));
        assert!(widget.store().list().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_times_out_before_late_success() {
        let widget = create_test_widget(DelayedShortener {
            delay: Duration::from_secs(11),
            short_url: "http://short.ly/late",
        })
        .with_timeout(Duration::from_secs(10));

        let result = widget.submit("http://example.com").await;

        match result {
            Err(WorkflowError::Timeout { elapsed }) => {
                assert_eq!(elapsed, Duration::from_secs(10));
            }
            other => panic!("expected timeout, got {other:?}"),
        }

        assert!(widget.store().list().unwrap().is_empty());

        let events = widget.view.events();
        assert_eq!(count(&events, &ViewEvent::LoadingRemoved), 1);
        assert!(events.contains(&ViewEvent::ErrorRendered(
            "The shortening service did not answer within 10 seconds.".to_string()
        )));
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_within_timeout_succeeds() {
        let widget = create_test_widget(DelayedShortener {
            delay: Duration::from_secs(9),
            short_url: "http://short.ly/slow",
        });

        let link = widget.submit("http://example.com").await.unwrap();
        assert_eq!(link.short_url, "http://short.ly/slow");
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_submit_is_refused() {
        let widget = create_test_widget(DelayedShortener {
            delay: Duration::from_secs(1),
            short_url: "http://short.ly/one",
        });

        let (first, second) = tokio::join!(
            widget.submit("http://one.example"),
            widget.submit("http://two.example")
        );

        assert!(first.is_ok());
        assert!(matches!(second, Err(WorkflowError::Busy)));
        assert_eq!(widget.store().list().unwrap().len(), 1);

        let events = widget.view.events();
        assert_eq!(count(&events, &ViewEvent::LoadingShown), 1);
        assert_eq!(events.last(), Some(&ViewEvent::SubmitEnabled(true)));

        // the flag is released once the first submission finishes
        assert!(widget.submit("http://three.example").await.is_ok());
    }

    #[tokio::test]
    async fn test_submit_empty_input_skips_request() {
        let mut mock_api = MockShortenerApi::new();
        mock_api.expect_shorten().times(0);

        let widget = create_test_widget(mock_api);

        let result = widget.submit("   ").await;
        assert!(matches!(result, Err(WorkflowError::EmptyUrl)));

        let events = widget.view.events();
        assert_eq!(count(&events, &ViewEvent::LoadingShown), 0);
        assert!(events.contains(&ViewEvent::ErrorRendered("Please add a link.".to_string())));
    }

    #[tokio::test]
    async fn test_submit_parse_and_network_errors() {
        let calls = std::sync::atomic::AtomicUsize::new(0);
        let mut mock_api = MockShortenerApi::new();
        mock_api.expect_shorten().times(2).returning(move |_| {
            if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(ShortenError::Parse("missing field `short_link`".to_string()))
            } else {
                Err(ShortenError::Network("connection refused".to_string()))
            }
        });

        let widget = create_test_widget(mock_api);

        let first = widget.submit("http://example.com").await;
        assert!(matches!(first, Err(WorkflowError::Parse(_))));

        let second = widget.submit("http://example.com").await;
        assert!(matches!(second, Err(WorkflowError::Network(_))));

        let events = widget.view.events();
        assert_eq!(count(&events, &ViewEvent::LoadingRemoved), 2);
        assert_eq!(count(&events, &ViewEvent::ErrorCleared), 2);
    }

    #[tokio::test]
    async fn test_submit_storage_failure_renders_error() {
        let mut mock_api = MockShortenerApi::new();
        mock_api
            .expect_shorten()
            .times(1)
            .returning(|_| Ok("http://short.ly/abc".to_string()));

        let mut mock_storage = MockKeyValueStore::new();
        mock_storage.expect_get().returning(|_| Ok(None));
        mock_storage
            .expect_set()
            .times(1)
            .returning(|_, _| Err(StorageError::Unavailable("quota exceeded".to_string())));

        let widget = Widget::new(
            LinkStore::new(mock_storage),
            Arc::new(mock_api),
            Arc::new(RecordingView::new()),
            Arc::new(NullClipboard::new()),
        );

        let result = widget.submit("http://example.com").await;
        assert!(matches!(result, Err(WorkflowError::Storage(_))));

        let events = widget.view.events();
        assert_eq!(count(&events, &ViewEvent::LoadingRemoved), 1);
        assert_eq!(
            count(
                &events,
                &ViewEvent::ErrorRendered(
                    "The link was shortened but could not be saved.".to_string()
                )
            ),
            1
        );
        assert!(
            !events
                .iter()
                .any(|event| matches!(event, ViewEvent::LinkRendered { .. }))
        );
        assert_eq!(events.last(), Some(&ViewEvent::SubmitEnabled(true)));
    }

    #[tokio::test]
    async fn test_resubmitting_same_short_url_replaces_rendered_entry() {
        let mut mock_api = MockShortenerApi::new();
        mock_api
            .expect_shorten()
            .times(2)
            .returning(|_| Ok("https://s.ly/1".to_string()));

        let widget = create_test_widget(mock_api);

        widget.submit("https://a.com").await.unwrap();
        widget.submit("https://a.com").await.unwrap();

        assert_eq!(widget.store().list().unwrap().len(), 1);
        assert!(
            widget
                .view
                .events()
                .contains(&ViewEvent::LinkRemoved("https://s.ly/1".to_string()))
        );
    }

    #[test]
    fn test_init_renders_persisted_links_in_order() {
        let widget = create_test_widget(MockShortenerApi::new());
        widget.store().add("https://a.com", "https://s.ly/1").unwrap();
        widget.store().add("https://b.com", "https://s.ly/2").unwrap();

        assert_eq!(widget.init().unwrap(), 2);

        assert_eq!(
            widget.view.events(),
            vec![
                ViewEvent::LinkRendered {
                    original_url: "https://a.com".to_string(),
                    short_url: "https://s.ly/1".to_string(),
                },
                ViewEvent::LinkRendered {
                    original_url: "https://b.com".to_string(),
                    short_url: "https://s.ly/2".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_delete_removes_from_store_and_view() {
        let widget = create_test_widget(MockShortenerApi::new());
        widget.store().add("https://a.com", "https://s.ly/1").unwrap();

        assert!(widget.delete("https://s.ly/1").unwrap());
        assert!(!widget.delete("https://s.ly/1").unwrap());

        assert!(widget.store().list().unwrap().is_empty());
        assert_eq!(
            count(
                &widget.view.events(),
                &ViewEvent::LinkRemoved("https://s.ly/1".to_string())
            ),
            2
        );
    }

    #[test]
    fn test_copy_writes_clipboard_and_marks_copied() {
        let mut mock_clipboard = MockClipboard::new();
        mock_clipboard
            .expect_write_text()
            .withf(|text| text == "https://s.ly/1")
            .times(1)
            .returning(|_| Ok(()));

        let widget = Widget::new(
            LinkStore::new(MemoryStorage::new()),
            Arc::new(MockShortenerApi::new()),
            Arc::new(RecordingView::new()),
            Arc::new(mock_clipboard),
        );
        widget.store().add("https://a.com", "https://s.ly/1").unwrap();

        let link = widget.copy("https://s.ly/1").unwrap();
        assert_eq!(link.original_url, "https://a.com");
        assert_eq!(
            widget.view.events(),
            vec![ViewEvent::MarkedCopied("https://s.ly/1".to_string())]
        );
    }

    #[test]
    fn test_copy_unknown_link() {
        let widget = create_test_widget(MockShortenerApi::new());

        let result = widget.copy("https://s.ly/missing");
        assert!(matches!(result, Err(WorkflowError::LinkNotFound(_))));
    }

    #[test]
    fn test_copy_clipboard_failure() {
        let mut mock_clipboard = MockClipboard::new();
        mock_clipboard
            .expect_write_text()
            .returning(|_| Err(ClipboardError::Unavailable("no display".to_string())));

        let widget = Widget::new(
            LinkStore::new(MemoryStorage::new()),
            Arc::new(MockShortenerApi::new()),
            Arc::new(RecordingView::new()),
            Arc::new(mock_clipboard),
        );
        widget.store().add("https://a.com", "https://s.ly/1").unwrap();

        let result = widget.copy("https://s.ly/1");
        assert!(matches!(result, Err(WorkflowError::Clipboard(_))));
        assert!(widget.view.events().is_empty());
    }

    #[test]
    fn test_reset_clears_store() {
        let widget = create_test_widget(MockShortenerApi::new());
        widget.store().add("https://a.com", "https://s.ly/1").unwrap();

        widget.reset().unwrap();

        assert!(widget.store().list().unwrap().is_empty());
    }
}
