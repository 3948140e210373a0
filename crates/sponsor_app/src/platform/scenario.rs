use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use sponsor_core::{ConnectivityState, ExclusionPolicy};
use sponsor_engine::{ContentSettings, EngineSettings, DEFAULT_SETTLING_WINDOW};
use sponsor_logging::LogDestination;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("usage: sponsor_app <scenario.ron>")]
    MissingPath,
    #[error("failed to read scenario {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse scenario {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub config: ScenarioConfig,
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub settling_window_ms: u64,
    pub exclusions: Vec<String>,
    pub javascript_enabled: bool,
    pub dom_storage_enabled: bool,
    pub load_with_overview_mode: bool,
    pub use_wide_viewport: bool,
    pub log_destination: LogTarget,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        let content = ContentSettings::default();
        Self {
            settling_window_ms: DEFAULT_SETTLING_WINDOW.as_millis() as u64,
            exclusions: Vec::new(),
            javascript_enabled: content.javascript_enabled,
            dom_storage_enabled: content.dom_storage_enabled,
            load_with_overview_mode: content.load_with_overview_mode,
            use_wide_viewport: content.use_wide_viewport,
            log_destination: LogTarget::Terminal,
        }
    }
}

impl ScenarioConfig {
    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            settling_window: Duration::from_millis(self.settling_window_ms),
            content: ContentSettings {
                javascript_enabled: self.javascript_enabled,
                dom_storage_enabled: self.dom_storage_enabled,
                load_with_overview_mode: self.load_with_overview_mode,
                use_wide_viewport: self.use_wide_viewport,
            },
        }
    }

    pub fn policy(&self) -> ExclusionPolicy {
        ExclusionPolicy::new(self.exclusions.iter().cloned())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum LogTarget {
    File,
    Terminal,
    Both,
}

impl From<LogTarget> for LogDestination {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::File => LogDestination::File,
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::Both => LogDestination::Both,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub enum TransportState {
    Stopped,
    Running {
        connected: bool,
        #[serde(default)]
        home_pages: Vec<String>,
    },
}

impl From<TransportState> for ConnectivityState {
    fn from(state: TransportState) -> Self {
        match state {
            TransportState::Stopped => ConnectivityState::Stopped,
            TransportState::Running {
                connected,
                home_pages,
            } => ConnectivityState::Running {
                connected,
                home_pages,
            },
        }
    }
}

/// One scripted host event.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub enum Step {
    Connectivity(TransportState),
    LogLine(String),
    /// Milliseconds.
    Wait(u64),
    PageFinished,
    Progress(u8),
    Navigate(String),
    Detach,
    Attach,
}

pub fn load_scenario(path: &Path) -> Result<Scenario, ScenarioError> {
    let content = fs::read_to_string(path).map_err(|source| ScenarioError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    ron::from_str(&content).map_err(|source| ScenarioError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn bundled_scenario_parses() {
        let scenario: Scenario =
            ron::from_str(include_str!("../../scenarios/sponsor_flow.ron")).unwrap();
        assert!(scenario.steps.contains(&Step::Detach));
        assert_eq!(scenario.config.settling_window_ms, 2000);
    }

    #[test]
    fn missing_config_fields_take_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"(
                config: (settling_window_ms: 25, exclusions: ["show_external"]),
                steps: [
                    Connectivity(Running(connected: true, home_pages: ["https://a"])),
                    Connectivity(Running(connected: false)),
                    Wait(10),
                ],
            )"#
        )
        .unwrap();

        let scenario = load_scenario(file.path()).unwrap();
        let settings = scenario.config.engine_settings();
        assert_eq!(settings.settling_window, Duration::from_millis(25));
        assert_eq!(settings.content, ContentSettings::default());
        assert_eq!(scenario.config.log_destination, LogTarget::Terminal);
        assert_eq!(
            ConnectivityState::from(scenario.steps[1].clone().into_transport().unwrap()),
            ConnectivityState::connecting()
        );
        assert_eq!(scenario.config.policy().exclusions(), ["show_external"]);
    }

    #[test]
    fn unreadable_and_malformed_files_are_reported() {
        let missing = load_scenario(Path::new("/definitely/not/here.ron")).unwrap_err();
        assert!(matches!(missing, ScenarioError::Io { .. }));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "(steps: [Teleport])").unwrap();
        let malformed = load_scenario(file.path()).unwrap_err();
        assert!(matches!(malformed, ScenarioError::Parse { .. }));
    }

    impl Step {
        fn into_transport(self) -> Option<TransportState> {
            match self {
                Step::Connectivity(state) => Some(state),
                _ => None,
            }
        }
    }
}
