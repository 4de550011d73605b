//! View collaborator consumed by the widget.

/// Presentation layer for the link list and the submission form.
///
/// The widget calls these operations and never touches presentation
/// directly. Implementations use interior mutability where they keep state.
///
/// # Implementations
///
/// - [`crate::infrastructure::view::TerminalView`] - colored terminal output
/// - [`crate::infrastructure::view::RecordingView`] - records calls in memory
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait LinkView: Send + Sync {
    /// Renders a link at the front of the list.
    fn render_link(&self, original_url: &str, short_url: &str);

    /// Removes the rendered entry for `short_url`, if any.
    fn remove_link(&self, short_url: &str);

    fn render_loading_indicator(&self);

    fn remove_loading_indicator(&self);

    /// Shows an error message next to the submission form.
    fn render_error(&self, message: &str);

    /// Removes a previously rendered error message, if any.
    fn clear_error(&self);

    /// Empties the URL input field.
    fn clear_input(&self);

    /// Enables or disables the submit control.
    fn set_submit_enabled(&self, enabled: bool);

    /// Marks the entry for `short_url` as copied.
    fn mark_copied(&self, short_url: &str);
}
