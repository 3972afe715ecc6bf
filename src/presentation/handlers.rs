// Command handlers for the terminal front end
use crate::application::collection_session::CollectionState;
use crate::presentation::app_state::AppState;
use crate::presentation::view::{DashboardView, ElementId};
use std::ops::ControlFlow;
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  toggle          start or stop data collection
  save            save collected data on the server
  target [value]  submit a target temperature (empty clears it)
  status          refresh the system status
  refresh         fetch readings now
  download        download the saved CSV (while not collecting)
  show            print collection state and the latest reading
  help            show this help
  quit            exit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Toggle,
    Save,
    Target(String),
    Status,
    Refresh,
    Download,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("unknown command `{0}`, type `help` for a list")]
    Unknown(String),

    #[error("`{0}` takes no arguments")]
    UnexpectedArgument(&'static str),
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };

    let command = match name.to_ascii_lowercase().as_str() {
        "" => return Ok(None),
        "target" => Command::Target(rest.to_string()),
        "toggle" => no_args("toggle", rest, Command::Toggle)?,
        "save" => no_args("save", rest, Command::Save)?,
        "status" => no_args("status", rest, Command::Status)?,
        "refresh" => no_args("refresh", rest, Command::Refresh)?,
        "download" => no_args("download", rest, Command::Download)?,
        "show" => no_args("show", rest, Command::Show)?,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => return Err(CommandError::Unknown(name.to_string())),
    };

    Ok(Some(command))
}

fn no_args(name: &'static str, rest: &str, command: Command) -> Result<Command, CommandError> {
    if rest.is_empty() {
        Ok(command)
    } else {
        Err(CommandError::UnexpectedArgument(name))
    }
}

pub async fn handle_command(state: &AppState, command: Command) -> ControlFlow<()> {
    let controller = &state.controller;

    match command {
        Command::Toggle => {
            controller.toggle_collection().await;
        }
        Command::Save => controller.save_data().await,
        Command::Target(value) => {
            state.view.set_input_value(ElementId::TargetTempInput, &value);
            controller.submit_target_temperature().await;
        }
        Command::Status => controller.refresh_status().await,
        Command::Refresh => controller.fetch_readings().await,
        Command::Download => controller.download_data().await,
        Command::Show => {
            let collecting = match controller.collection_state().await {
                CollectionState::Collecting => "collecting",
                CollectionState::Idle => "idle",
            };
            let chart = controller.chart();
            match chart.latest() {
                Some(latest) => println!(
                    "{}, {} readings, latest {}°C at {}",
                    collecting,
                    chart.len(),
                    latest.temperature,
                    latest.time.to_rfc3339()
                ),
                None => println!("{}, no readings", collecting),
            }
        }
        Command::Help => println!("{}", HELP),
        Command::Quit => return ControlFlow::Break(()),
    }

    ControlFlow::Continue(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dashboard_controller::{DashboardController, DashboardSettings};
    use crate::application::thermostat_backend::{BackendError, ThermostatBackend};
    use crate::domain::reading::Reading;
    use crate::domain::status::SystemStatus;
    use crate::domain::target::{TargetTemperature, MISSING_TARGET_MESSAGE};
    use crate::presentation::memory_view::MemoryView;
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::time::Duration;

    /// Backend that is always down
    struct OfflineBackend;

    fn unavailable(endpoint: &'static str) -> BackendError {
        BackendError::Status {
            endpoint,
            status: 503,
        }
    }

    #[async_trait]
    impl ThermostatBackend for OfflineBackend {
        async fn fetch_readings(&self) -> Result<Vec<Reading>, BackendError> {
            Err(unavailable("/data"))
        }

        async fn save_data(&self) -> Result<String, BackendError> {
            Err(unavailable("/save_data"))
        }

        async fn set_target_temperature(
            &self,
            _target: &TargetTemperature,
        ) -> Result<String, BackendError> {
            Err(unavailable("/set_target_temp"))
        }

        async fn system_status(
            &self,
            _target: &TargetTemperature,
        ) -> Result<SystemStatus, BackendError> {
            Err(unavailable("/system_status"))
        }

        async fn download_data(&self) -> Result<Vec<u8>, BackendError> {
            Err(unavailable("/download"))
        }
    }

    fn offline_state() -> (AppState, Arc<MemoryView>) {
        let view = Arc::new(MemoryView::new());
        let controller = Arc::new(DashboardController::new(
            Arc::new(OfflineBackend),
            view.clone(),
            DashboardSettings {
                poll_interval: Duration::from_secs(60),
                download_path: std::env::temp_dir().join("thermo-dashboard-unused.csv"),
            },
        ));
        (AppState { controller, view: view.clone() }, view)
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command("toggle"), Ok(Some(Command::Toggle)));
        assert_eq!(parse_command("  SAVE "), Ok(Some(Command::Save)));
        assert_eq!(
            parse_command("target 21.5"),
            Ok(Some(Command::Target("21.5".to_string())))
        );
        assert_eq!(parse_command("target"), Ok(Some(Command::Target(String::new()))));
        assert_eq!(parse_command("exit"), Ok(Some(Command::Quit)));
        assert_eq!(parse_command("   "), Ok(None));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_command("heat"),
            Err(CommandError::Unknown("heat".to_string()))
        );
        assert_eq!(
            parse_command("toggle now"),
            Err(CommandError::UnexpectedArgument("toggle"))
        );
    }

    #[tokio::test]
    async fn test_target_command_fills_input_and_submits() {
        let (state, view) = offline_state();

        let flow = handle_command(&state, Command::Target("22".to_string())).await;

        assert_eq!(flow, ControlFlow::Continue(()));
        assert_eq!(view.input_value(ElementId::TargetTempInput), "22");
        assert_eq!(
            view.text(ElementId::Message).as_deref(),
            Some("An error occurred. Please try again.")
        );
    }

    #[tokio::test]
    async fn test_bare_target_warns() {
        let (state, view) = offline_state();

        handle_command(&state, Command::Target(String::new())).await;

        assert_eq!(view.alerts(), vec![MISSING_TARGET_MESSAGE.to_string()]);
    }

    #[tokio::test]
    async fn test_quit_breaks() {
        let (state, _view) = offline_state();

        assert_eq!(handle_command(&state, Command::Quit).await, ControlFlow::Break(()));
        assert_eq!(handle_command(&state, Command::Show).await, ControlFlow::Continue(()));
    }
}
