use std::sync::{Mutex, PoisonError};

use chrono::Local;
use sponsor_engine::{
    ContentSettings, ContentView, HostCommand, HostSink, ProgressCommand, SessionHandle,
};
use sponsor_logging::{sponsor_debug, sponsor_info};

/// Stand-in renderer that remembers the session it was last asked to load.
#[derive(Default)]
pub struct ConsoleContentView {
    current: Mutex<Option<SessionHandle>>,
}

impl ConsoleContentView {
    pub fn current_session(&self) -> Option<SessionHandle> {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ContentView for ConsoleContentView {
    fn apply_settings(&self, settings: &ContentSettings) {
        sponsor_debug!("content view settings {:?}", settings);
    }

    fn load(&self, url: &str, session: SessionHandle) {
        sponsor_info!("content view loading {}", url);
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = Some(session);
    }
}

/// Prints every host command with a wall-clock timestamp.
pub struct ConsoleSink;

impl HostSink for ConsoleSink {
    fn emit(&self, command: HostCommand) {
        let stamp = Local::now().format("%H:%M:%S%.3f");
        println!("{stamp} {}", describe(&command));
    }
}

fn describe(command: &HostCommand) -> String {
    match command {
        HostCommand::ShowPane(pane) => format!("pane      -> {pane:?}"),
        HostCommand::StatusIcon(icon) => format!("status    -> {icon:?}"),
        HostCommand::Progress(ProgressCommand::Indeterminate) => "progress  -> ...".to_string(),
        HostCommand::Progress(ProgressCommand::Percent(percent)) => {
            format!("progress  -> {percent}%")
        }
        HostCommand::Progress(ProgressCommand::Hidden) => "progress  -> hidden".to_string(),
        HostCommand::OpenExternal { url } => format!("external  -> {url}"),
        HostCommand::LogLine(line) => format!("log       -> {line}"),
    }
}
