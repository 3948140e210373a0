use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use log::LevelFilter;
use sponsor_core::ConnectivityState;
use sponsor_engine::{
    build_runtime, Coordinator, CoordinatorHandle, CoordinatorInputs, HostSink, StateFeed,
};
use sponsor_logging::{sponsor_info, sponsor_warn};
use tokio::runtime::Handle;
use tokio::sync::watch;

use super::console::{ConsoleContentView, ConsoleSink};
use super::scenario::{load_scenario, Scenario, ScenarioError, Step};

/// Pause after each step so the pipeline drains before the next one.
const STEP_SETTLE: Duration = Duration::from_millis(5);

pub fn run_app() -> anyhow::Result<()> {
    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .ok_or(ScenarioError::MissingPath)?;
    let scenario = load_scenario(&path)?;
    sponsor_logging::initialize(scenario.config.log_destination.into(), LevelFilter::Info);
    sponsor_info!("replaying {} steps from {:?}", scenario.steps.len(), path);

    let runtime = build_runtime()?;
    runtime.block_on(replay(scenario, Arc::new(ConsoleSink)))
}

async fn replay(scenario: Scenario, sink: Arc<dyn HostSink>) -> anyhow::Result<()> {
    let view = Arc::new(ConsoleContentView::default());
    let coordinator = Coordinator::new(view.clone(), sink, Arc::new(scenario.config.policy()))
        .with_settings(scenario.config.engine_settings());

    let connectivity = StateFeed::new(ConnectivityState::Stopped);
    let (log_tx, log_rx) = watch::channel(String::new());
    let inputs = || CoordinatorInputs {
        connectivity: connectivity.subscribe(),
        log_lines: log_rx.clone(),
    };
    let runtime = Handle::current();
    let mut attached: Option<CoordinatorHandle> = Some(coordinator.attach(&runtime, inputs()));

    for step in scenario.steps {
        match step {
            Step::Connectivity(state) => connectivity.publish(state.into()),
            Step::LogLine(line) => {
                log_tx.send_replace(line);
            }
            Step::Wait(millis) => tokio::time::sleep(Duration::from_millis(millis)).await,
            Step::PageFinished => match view.current_session() {
                Some(session) => session.on_page_finished(session.url()),
                None => sponsor_warn!("page-finished with no session loaded"),
            },
            Step::Progress(percent) => match view.current_session() {
                Some(session) => session.on_progress_changed(percent.min(100)),
                None => sponsor_warn!("progress with no session loaded"),
            },
            Step::Navigate(url) => match view.current_session() {
                Some(session) => {
                    let suppressed = session.should_override_url_loading(&url);
                    sponsor_info!(
                        "navigation to {} {}",
                        url,
                        if suppressed { "suppressed" } else { "followed in view" }
                    );
                }
                None => sponsor_warn!("navigation to {} with no session loaded", url),
            },
            Step::Detach => {
                if let Some(handle) = attached.take() {
                    handle.detach().await?;
                }
            }
            Step::Attach => {
                if attached.is_none() {
                    attached = Some(coordinator.attach(&runtime, inputs()));
                }
            }
        }
        tokio::time::sleep(STEP_SETTLE).await;
    }

    if let Some(handle) = attached.take() {
        handle.detach().await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use sponsor_core::{StatusIcon, VisiblePane};
    use sponsor_engine::{HostCommand, ProgressCommand};

    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        commands: Mutex<Vec<HostCommand>>,
    }

    impl HostSink for RecordingSink {
        fn emit(&self, command: HostCommand) {
            self.commands.lock().unwrap().push(command);
        }
    }

    async fn replay_bundled() -> Vec<HostCommand> {
        let scenario: Scenario =
            ron::from_str(include_str!("../../scenarios/sponsor_flow.ron")).unwrap();
        let sink = Arc::new(RecordingSink::default());
        replay(scenario, sink.clone()).await.unwrap();
        let commands = sink.commands.lock().unwrap().clone();
        commands
    }

    #[tokio::test(start_paused = true)]
    async fn bundled_scenario_replays_every_step_in_order() {
        let commands = replay_bundled().await;
        let offer = "https://sponsor.example/offer".to_string();

        assert_eq!(
            commands,
            vec![
                HostCommand::StatusIcon(StatusIcon::Disconnected),
                HostCommand::LogLine("Starting tunnel".to_string()),
                HostCommand::StatusIcon(StatusIcon::Connecting),
                HostCommand::StatusIcon(StatusIcon::Connected),
                HostCommand::Progress(ProgressCommand::Indeterminate),
                HostCommand::ShowPane(VisiblePane::Content),
                HostCommand::Progress(ProgressCommand::Percent(30)),
                HostCommand::Progress(ProgressCommand::Hidden),
                HostCommand::OpenExternal { url: offer },
                HostCommand::ShowPane(VisiblePane::Status),
                HostCommand::LogLine("Starting tunnel".to_string()),
                HostCommand::StatusIcon(StatusIcon::Connected),
                HostCommand::Progress(ProgressCommand::Indeterminate),
                HostCommand::ShowPane(VisiblePane::Content),
                HostCommand::StatusIcon(StatusIcon::Disconnected),
                HostCommand::ShowPane(VisiblePane::Status),
            ]
        );
    }
}
