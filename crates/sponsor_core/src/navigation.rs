//! Per-session classification of in-page navigation.
//!
//! A page fires its "finished" signal once per frame and redirect while it
//! bootstraps, so the first such signal arms a fixed settling window. Until
//! that window elapses every navigation belongs to the initial load; after it,
//! every navigation is treated as a user click and handed off externally.

/// Outcome of a navigation attempt inside the content view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationDecision {
    /// Let the content view follow the navigation itself.
    Allow,
    /// Suppress in-view navigation and open `url` externally.
    Intercept { url: String },
}

impl NavigationDecision {
    /// True when the content view must not follow the navigation.
    pub fn suppresses_in_view(&self) -> bool {
        matches!(self, Self::Intercept { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionFlags {
    pub loaded: bool,
    pub stopped: bool,
}

/// Pure navigation rule: `(target, flags) -> decision`.
pub fn classify(url: &str, flags: SessionFlags) -> NavigationDecision {
    if flags.stopped || !flags.loaded {
        return NavigationDecision::Allow;
    }
    NavigationDecision::Intercept {
        url: url.to_string(),
    }
}

/// Flag bookkeeping for one load session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Classifier {
    flags: SessionFlags,
    deadline_armed: bool,
}

impl Classifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flags(&self) -> SessionFlags {
        self.flags
    }

    pub fn is_loaded(&self) -> bool {
        self.flags.loaded
    }

    pub fn is_stopped(&self) -> bool {
        self.flags.stopped
    }

    pub fn navigation(&self, url: &str) -> NavigationDecision {
        classify(url, self.flags)
    }

    /// Records a page-finished signal.
    ///
    /// Returns `true` exactly once per session: when the caller must arm the
    /// settling deadline.
    pub fn page_finished(&mut self) -> bool {
        if self.flags.stopped || self.flags.loaded || self.deadline_armed {
            return false;
        }
        self.deadline_armed = true;
        true
    }

    /// Settling deadline fired. Returns `true` if this flipped `loaded`.
    pub fn deadline_elapsed(&mut self) -> bool {
        if self.flags.stopped || self.flags.loaded || !self.deadline_armed {
            return false;
        }
        self.flags.loaded = true;
        true
    }

    /// Marks the session terminal. Returns `false` if it was already stopped.
    pub fn stop(&mut self) -> bool {
        if self.flags.stopped {
            return false;
        }
        self.flags.stopped = true;
        true
    }
}
