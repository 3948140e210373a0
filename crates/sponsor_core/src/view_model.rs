use crate::{SessionId, StatusIcon, VisiblePane};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CoordinatorViewModel {
    pub pane: VisiblePane,
    pub status_icon: Option<StatusIcon>,
    pub active_session: Option<SessionId>,
    pub loaded_url: Option<String>,
}
