use std::sync::Arc;

use sponsor_core::SessionId;
use sponsor_logging::sponsor_info;
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

use crate::{
    ContentView, EngineSettings, ExternalOpenRequest, HostCommand, HostSink, ProgressCommand,
    SessionHandle,
};

/// Owns the single live load session and wires it to the content view.
pub struct ContentLoadController {
    view: Arc<dyn ContentView>,
    sink: Arc<dyn HostSink>,
    settings: EngineSettings,
    runtime: Handle,
    external_tx: UnboundedSender<ExternalOpenRequest>,
    current: Option<SessionHandle>,
}

impl ContentLoadController {
    pub fn new(
        view: Arc<dyn ContentView>,
        sink: Arc<dyn HostSink>,
        settings: EngineSettings,
        runtime: Handle,
        external_tx: UnboundedSender<ExternalOpenRequest>,
    ) -> Self {
        Self {
            view,
            sink,
            settings,
            runtime,
            external_tx,
            current: None,
        }
    }

    pub fn current(&self) -> Option<&SessionHandle> {
        self.current.as_ref()
    }

    /// Supersedes any live session and starts loading `url`.
    pub fn start(&mut self, session_id: SessionId, url: &str) -> SessionHandle {
        self.stop();

        let session = SessionHandle::new(
            session_id,
            url,
            self.settings.settling_window,
            self.runtime.clone(),
            self.sink.clone(),
            self.external_tx.clone(),
        );
        sponsor_info!("session {} loading {}", session_id, url);
        self.sink
            .emit(HostCommand::Progress(ProgressCommand::Indeterminate));
        self.view.apply_settings(&self.settings.content);
        self.view.load(url, session.clone());
        self.current = Some(session.clone());
        session
    }

    pub fn stop(&mut self) {
        if let Some(session) = self.current.take() {
            if session.stop() {
                sponsor_info!("session {} stopped", session.id());
            }
        }
    }

    /// Stops the live session only if it is `session_id`.
    pub fn stop_session(&mut self, session_id: SessionId) {
        if self.current.as_ref().map(SessionHandle::id) == Some(session_id) {
            self.stop();
        }
    }
}
