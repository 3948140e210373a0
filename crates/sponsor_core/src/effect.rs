use crate::{SessionId, StatusIcon, VisiblePane};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    StartLoad { session_id: SessionId, url: String },
    StopLoad { session_id: SessionId },
    ShowPane(VisiblePane),
    SetStatusIcon(StatusIcon),
    OpenExternal { url: String },
}
