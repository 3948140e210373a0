#![allow(dead_code)]

use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use sponsor_engine::{ContentSettings, ContentView, HostCommand, HostSink, SessionHandle};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(sponsor_logging::initialize_for_tests);
}

/// Lets spawned tasks run; with a paused clock this only advances 1 ms.
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(1)).await;
}

#[derive(Default)]
pub struct RecordingView {
    loads: Mutex<Vec<SessionHandle>>,
    settings: Mutex<Vec<ContentSettings>>,
}

impl RecordingView {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn loaded_urls(&self) -> Vec<String> {
        self.loads
            .lock()
            .unwrap()
            .iter()
            .map(|session| session.url().to_string())
            .collect()
    }

    pub fn last_session(&self) -> Option<SessionHandle> {
        self.loads.lock().unwrap().last().cloned()
    }

    pub fn applied_settings(&self) -> Vec<ContentSettings> {
        self.settings.lock().unwrap().clone()
    }
}

impl ContentView for RecordingView {
    fn apply_settings(&self, settings: &ContentSettings) {
        self.settings.lock().unwrap().push(*settings);
    }

    fn load(&self, _url: &str, session: SessionHandle) {
        self.loads.lock().unwrap().push(session);
    }
}

#[derive(Default)]
pub struct RecordingSink {
    commands: Mutex<Vec<HostCommand>>,
}

impl RecordingSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn take(&self) -> Vec<HostCommand> {
        self.commands.lock().unwrap().drain(..).collect()
    }

    pub fn snapshot(&self) -> Vec<HostCommand> {
        self.commands.lock().unwrap().clone()
    }
}

impl HostSink for RecordingSink {
    fn emit(&self, command: HostCommand) {
        self.commands.lock().unwrap().push(command);
    }
}
