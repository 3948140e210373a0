//! Sponsor engine: content-load sessions and the connectivity pipeline.
mod config;
mod content;
mod controller;
mod coordinator;
mod error;
mod feed;
mod session;
mod types;

pub use config::{ContentSettings, EngineSettings, DEFAULT_SETTLING_WINDOW};
pub use content::ContentView;
pub use controller::ContentLoadController;
pub use coordinator::{Coordinator, CoordinatorHandle, CoordinatorInputs};
pub use error::{build_runtime, EngineError};
pub use feed::StateFeed;
pub use session::SessionHandle;
pub use types::{ChannelHostSink, ExternalOpenRequest, HostCommand, HostSink, ProgressCommand};
