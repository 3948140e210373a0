//! Sponsor core: pure view-state coordination and navigation classification.
mod connectivity;
mod effect;
mod msg;
mod navigation;
mod policy;
mod state;
mod update;
mod view_model;

pub use connectivity::{ConnectivityState, StatusIcon, VisiblePane};
pub use effect::Effect;
pub use msg::Msg;
pub use navigation::{classify, Classifier, NavigationDecision, SessionFlags};
pub use policy::{EmbedPolicy, ExclusionPolicy};
pub use state::{CoordinatorState, SessionId};
pub use update::update;
pub use view_model::CoordinatorViewModel;
