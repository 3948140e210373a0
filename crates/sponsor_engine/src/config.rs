use std::time::Duration;

/// Quiet period after the first page-finished signal before navigation
/// counts as user-initiated.
pub const DEFAULT_SETTLING_WINDOW: Duration = Duration::from_millis(2000);

/// Renderer settings applied to the content view for every session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentSettings {
    pub javascript_enabled: bool,
    pub dom_storage_enabled: bool,
    pub load_with_overview_mode: bool,
    pub use_wide_viewport: bool,
}

impl Default for ContentSettings {
    fn default() -> Self {
        Self {
            javascript_enabled: true,
            dom_storage_enabled: true,
            load_with_overview_mode: true,
            use_wide_viewport: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSettings {
    pub settling_window: Duration,
    pub content: ContentSettings,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            settling_window: DEFAULT_SETTLING_WINDOW,
            content: ContentSettings::default(),
        }
    }
}
