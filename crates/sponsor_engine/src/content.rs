use crate::{ContentSettings, SessionHandle};

/// The embedded renderer that displays partner pages.
///
/// Implementations report progress, page-finished and navigation callbacks
/// through the [`SessionHandle`] handed to [`ContentView::load`]. Handles of
/// superseded sessions may keep being called; they ignore everything.
pub trait ContentView: Send + Sync {
    fn apply_settings(&self, settings: &ContentSettings);

    fn load(&self, url: &str, session: SessionHandle);
}
