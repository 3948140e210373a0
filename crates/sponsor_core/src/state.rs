use crate::view_model::CoordinatorViewModel;
use crate::{ConnectivityState, StatusIcon, VisiblePane};

pub type SessionId = u64;

/// Everything the coordinator remembers between connectivity events.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CoordinatorState {
    connectivity: ConnectivityState,
    active_session: Option<SessionId>,
    last_loaded_url: Option<String>,
    last_status_icon: Option<StatusIcon>,
    next_session_id: SessionId,
}

impl CoordinatorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn connectivity(&self) -> &ConnectivityState {
        &self.connectivity
    }

    pub fn active_session(&self) -> Option<SessionId> {
        self.active_session
    }

    pub fn last_loaded_url(&self) -> Option<&str> {
        self.last_loaded_url.as_deref()
    }

    /// Derived from the latest connectivity and whether a session is showing.
    pub fn pane(&self) -> VisiblePane {
        if self.connectivity.is_connected() && self.active_session.is_some() {
            VisiblePane::Content
        } else {
            VisiblePane::Status
        }
    }

    pub fn view(&self) -> CoordinatorViewModel {
        CoordinatorViewModel {
            pane: self.pane(),
            status_icon: self.last_status_icon,
            active_session: self.active_session,
            loaded_url: self.last_loaded_url.clone(),
        }
    }

    pub(crate) fn set_connectivity(&mut self, connectivity: ConnectivityState) {
        self.connectivity = connectivity;
    }

    /// Records `icon` and returns whether it differs from the last one emitted.
    pub(crate) fn replace_status_icon(&mut self, icon: StatusIcon) -> bool {
        self.last_status_icon.replace(icon) != Some(icon)
    }

    pub(crate) fn take_active_session(&mut self) -> Option<SessionId> {
        self.active_session.take()
    }

    pub(crate) fn forget_loaded_url(&mut self) {
        self.last_loaded_url = None;
    }

    pub(crate) fn begin_session(&mut self, url: &str) -> SessionId {
        self.next_session_id += 1;
        let session_id = self.next_session_id;
        self.active_session = Some(session_id);
        self.last_loaded_url = Some(url.to_string());
        session_id
    }
}
