use crate::{ConnectivityState, SessionId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// New value from the connectivity-state stream.
    Connectivity(ConnectivityState),
    /// A loaded session intercepted a navigation.
    ExternalOpenRequested { session_id: SessionId, url: String },
    /// Host paused or destroyed the view; release the active session.
    Detached,
}
