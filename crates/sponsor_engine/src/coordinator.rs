use std::sync::Arc;

use sponsor_core::{update, ConnectivityState, CoordinatorState, EmbedPolicy, Effect, Msg};
use sponsor_logging::{sponsor_debug, sponsor_info};
use tokio::runtime::Handle;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::{
    ContentLoadController, ContentView, EngineError, EngineSettings, ExternalOpenRequest,
    HostCommand, HostSink,
};

/// Upstream streams the pipeline subscribes to.
///
/// Connectivity must be lossless and start with the current value (see
/// [`crate::StateFeed::subscribe`]). Log lines only need the latest value.
#[derive(Debug)]
pub struct CoordinatorInputs {
    pub connectivity: mpsc::UnboundedReceiver<ConnectivityState>,
    pub log_lines: watch::Receiver<String>,
}

/// Collaborators shared by every attachment of the pipeline.
#[derive(Clone)]
pub struct Coordinator {
    view: Arc<dyn ContentView>,
    sink: Arc<dyn HostSink>,
    policy: Arc<dyn EmbedPolicy>,
    settings: EngineSettings,
}

impl Coordinator {
    pub fn new(
        view: Arc<dyn ContentView>,
        sink: Arc<dyn HostSink>,
        policy: Arc<dyn EmbedPolicy>,
    ) -> Self {
        Self {
            view,
            sink,
            policy,
            settings: EngineSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: EngineSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Subscribes to `inputs` on `runtime`, starting from a fresh state.
    pub fn attach(&self, runtime: &Handle, inputs: CoordinatorInputs) -> CoordinatorHandle {
        let (external_tx, external_rx) = mpsc::unbounded_channel();
        let controller = ContentLoadController::new(
            self.view.clone(),
            self.sink.clone(),
            self.settings.clone(),
            runtime.clone(),
            external_tx,
        );
        let pipeline = Pipeline {
            state: CoordinatorState::new(),
            controller,
            sink: self.sink.clone(),
            policy: self.policy.clone(),
        };
        let cancel = CancellationToken::new();
        let task = runtime.spawn(pipeline.run(inputs, external_rx, cancel.clone()));
        sponsor_info!("coordinator attached");
        CoordinatorHandle {
            cancel,
            task: Some(task),
        }
    }
}

/// Live subscription. Dropping it cancels the pipeline without waiting.
pub struct CoordinatorHandle {
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl CoordinatorHandle {
    /// Cancels the pipeline, stops the live session and waits for the task.
    pub async fn detach(mut self) -> Result<(), EngineError> {
        self.cancel.cancel();
        if let Some(task) = self.task.take() {
            task.await
                .map_err(|err| EngineError::PipelineJoin(err.to_string()))?;
        }
        sponsor_info!("coordinator detached");
        Ok(())
    }
}

impl Drop for CoordinatorHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

struct Pipeline {
    state: CoordinatorState,
    controller: ContentLoadController,
    sink: Arc<dyn HostSink>,
    policy: Arc<dyn EmbedPolicy>,
}

impl Pipeline {
    async fn run(
        mut self,
        mut inputs: CoordinatorInputs,
        mut external_rx: mpsc::UnboundedReceiver<ExternalOpenRequest>,
        cancel: CancellationToken,
    ) {
        let initial_line = inputs.log_lines.borrow_and_update().clone();
        if !initial_line.is_empty() {
            self.sink.emit(HostCommand::LogLine(initial_line));
        }

        let mut connectivity_open = true;
        let mut log_lines_open = true;
        loop {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                next = inputs.connectivity.recv(), if connectivity_open => match next {
                    Some(connectivity) => self.dispatch(Msg::Connectivity(connectivity)),
                    None => {
                        sponsor_debug!("connectivity source closed");
                        connectivity_open = false;
                    }
                },
                changed = inputs.log_lines.changed(), if log_lines_open => {
                    if changed.is_err() {
                        log_lines_open = false;
                        continue;
                    }
                    let line = inputs.log_lines.borrow_and_update().clone();
                    self.sink.emit(HostCommand::LogLine(line));
                }
                Some(request) = external_rx.recv() => {
                    self.dispatch(Msg::ExternalOpenRequested {
                        session_id: request.session_id,
                        url: request.url,
                    });
                }
            }
        }

        self.dispatch(Msg::Detached);
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg, self.policy.as_ref());
        self.state = state;
        for effect in effects {
            self.apply(effect);
        }
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::StartLoad { session_id, url } => {
                self.controller.start(session_id, &url);
            }
            Effect::StopLoad { session_id } => self.controller.stop_session(session_id),
            Effect::ShowPane(pane) => self.sink.emit(HostCommand::ShowPane(pane)),
            Effect::SetStatusIcon(icon) => self.sink.emit(HostCommand::StatusIcon(icon)),
            Effect::OpenExternal { url } => self.sink.emit(HostCommand::OpenExternal { url }),
        }
    }
}
