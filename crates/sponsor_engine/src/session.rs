use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use sponsor_core::{Classifier, NavigationDecision, SessionFlags, SessionId};
use sponsor_logging::{sponsor_debug, sponsor_info, sponsor_trace};
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;

use crate::{ExternalOpenRequest, HostCommand, HostSink, ProgressCommand};

/// Callback endpoint for one load session.
///
/// Every callback takes the session lock before looking at the flags, so a
/// settling deadline racing with [`SessionHandle::stop`] always observes the
/// stop.
#[derive(Clone)]
pub struct SessionHandle {
    inner: Arc<SessionShared>,
}

struct SessionShared {
    id: SessionId,
    url: String,
    classifier: Mutex<Classifier>,
    deadline: CancellationToken,
    settling_window: Duration,
    runtime: Handle,
    sink: Arc<dyn HostSink>,
    external_tx: UnboundedSender<ExternalOpenRequest>,
}

impl SessionHandle {
    pub(crate) fn new(
        id: SessionId,
        url: &str,
        settling_window: Duration,
        runtime: Handle,
        sink: Arc<dyn HostSink>,
        external_tx: UnboundedSender<ExternalOpenRequest>,
    ) -> Self {
        Self {
            inner: Arc::new(SessionShared {
                id,
                url: url.to_string(),
                classifier: Mutex::new(Classifier::new()),
                deadline: CancellationToken::new(),
                settling_window,
                runtime,
                sink,
                external_tx,
            }),
        }
    }

    pub fn id(&self) -> SessionId {
        self.inner.id
    }

    pub fn url(&self) -> &str {
        &self.inner.url
    }

    pub fn flags(&self) -> SessionFlags {
        self.classifier().flags()
    }

    pub fn is_loaded(&self) -> bool {
        self.flags().loaded
    }

    pub fn is_stopped(&self) -> bool {
        self.flags().stopped
    }

    /// Raw progress from the renderer, 0..=100.
    pub fn on_progress_changed(&self, progress: u8) {
        let classifier = self.classifier();
        if classifier.is_stopped() {
            sponsor_trace!("session {} dropped late progress {}", self.id(), progress);
            return;
        }
        let command = if progress >= 100 {
            ProgressCommand::Hidden
        } else {
            ProgressCommand::Percent(progress)
        };
        self.inner.sink.emit(HostCommand::Progress(command));
    }

    pub fn on_page_finished(&self, url: &str) {
        let mut classifier = self.classifier();
        if classifier.is_stopped() {
            sponsor_trace!("session {} dropped late page-finished {}", self.id(), url);
            return;
        }
        if classifier.page_finished() {
            sponsor_debug!(
                "session {} first page-finished ({}); settling for {:?}",
                self.id(),
                url,
                self.inner.settling_window
            );
            self.arm_deadline();
        }
    }

    /// Returns `true` when the renderer must not follow the navigation itself.
    pub fn should_override_url_loading(&self, url: &str) -> bool {
        let classifier = self.classifier();
        match classifier.navigation(url) {
            NavigationDecision::Allow => false,
            NavigationDecision::Intercept { url } => {
                sponsor_info!("session {} intercepted navigation to {}", self.id(), url);
                let _ = self.inner.external_tx.send(ExternalOpenRequest {
                    session_id: self.id(),
                    url,
                });
                true
            }
        }
    }

    /// Marks the session terminal and cancels its pending deadline.
    /// Returns `false` if it was already stopped.
    pub(crate) fn stop(&self) -> bool {
        let mut classifier = self.classifier();
        if !classifier.stop() {
            return false;
        }
        self.inner.deadline.cancel();
        true
    }

    fn arm_deadline(&self) {
        let session = self.clone();
        let cancelled = self.inner.deadline.clone();
        let window = self.inner.settling_window;
        self.inner.runtime.spawn(async move {
            tokio::select! {
                _ = cancelled.cancelled() => {}
                _ = tokio::time::sleep(window) => {
                    if session.classifier().deadline_elapsed() {
                        sponsor_debug!("session {} settled; navigation now opens externally", session.id());
                    }
                }
            }
        });
    }

    fn classifier(&self) -> MutexGuard<'_, Classifier> {
        self.inner
            .classifier
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for SessionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionHandle")
            .field("id", &self.inner.id)
            .field("url", &self.inner.url)
            .field("flags", &self.flags())
            .finish()
    }
}
