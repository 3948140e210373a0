use sponsor_logging::{sponsor_debug, sponsor_info};

use crate::{ConnectivityState, CoordinatorState, EmbedPolicy, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
///
/// `ShowPane` is only emitted when the derived pane actually changes, so the
/// host never sees the same pane twice in a row.
pub fn update(
    mut state: CoordinatorState,
    msg: Msg,
    policy: &dyn EmbedPolicy,
) -> (CoordinatorState, Vec<Effect>) {
    let pane_before = state.pane();
    let mut effects = match msg {
        Msg::Connectivity(connectivity) => apply_connectivity(&mut state, connectivity, policy),
        Msg::ExternalOpenRequested { session_id, url } => {
            sponsor_info!("session {} handed {} to external viewer", session_id, url);
            vec![Effect::OpenExternal { url }]
        }
        Msg::Detached => {
            let mut effects = Vec::new();
            if let Some(session_id) = state.take_active_session() {
                effects.push(Effect::StopLoad { session_id });
            }
            // Fresh state derives `Status`; the host must match it.
            let fresh = CoordinatorState::new();
            if pane_before != fresh.pane() {
                effects.push(Effect::ShowPane(fresh.pane()));
            }
            return (fresh, effects);
        }
    };

    let pane_after = state.pane();
    if pane_after != pane_before {
        effects.push(Effect::ShowPane(pane_after));
    }
    (state, effects)
}

fn apply_connectivity(
    state: &mut CoordinatorState,
    connectivity: ConnectivityState,
    policy: &dyn EmbedPolicy,
) -> Vec<Effect> {
    let mut effects = Vec::new();
    let icon = connectivity.status_icon();
    if state.replace_status_icon(icon) {
        effects.push(Effect::SetStatusIcon(icon));
    }

    if !connectivity.is_connected() {
        if let Some(session_id) = state.take_active_session() {
            effects.push(Effect::StopLoad { session_id });
        }
        state.forget_loaded_url();
        state.set_connectivity(connectivity);
        return effects;
    }

    let next_url = connectivity.first_home_page().map(ToOwned::to_owned);
    state.set_connectivity(connectivity);

    let Some(url) = next_url else {
        sponsor_debug!("connected without a usable home page");
        return effects;
    };
    if state.last_loaded_url() == Some(url.as_str()) {
        return effects;
    }
    if !policy.is_eligible_for_embedded_view(&url) {
        sponsor_debug!("skipping {} (not eligible for embedded view)", url);
        return effects;
    }

    if let Some(session_id) = state.take_active_session() {
        effects.push(Effect::StopLoad { session_id });
    }
    let session_id = state.begin_session(&url);
    effects.push(Effect::StartLoad { session_id, url });
    effects
}
