use std::sync::mpsc;

use sponsor_core::{SessionId, StatusIcon, VisiblePane};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressCommand {
    Indeterminate,
    Percent(u8),
    Hidden,
}

/// Commands the engine pushes to the hosting UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    ShowPane(VisiblePane),
    StatusIcon(StatusIcon),
    Progress(ProgressCommand),
    OpenExternal { url: String },
    LogLine(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalOpenRequest {
    pub session_id: SessionId,
    pub url: String,
}

pub trait HostSink: Send + Sync {
    fn emit(&self, command: HostCommand);
}

pub struct ChannelHostSink {
    tx: mpsc::Sender<HostCommand>,
}

impl ChannelHostSink {
    pub fn new(tx: mpsc::Sender<HostCommand>) -> Self {
        Self { tx }
    }
}

impl HostSink for ChannelHostSink {
    fn emit(&self, command: HostCommand) {
        let _ = self.tx.send(command);
    }
}
