// Main entry point - Dependency injection and command loop
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::ops::ControlFlow;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_controller::DashboardController;
use crate::infrastructure::chart_renderer::ChartRenderer;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::http_backend::HttpBackend;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{handle_command, parse_command, HELP};
use crate::presentation::terminal_view::TerminalView;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = load_dashboard_config()?;
    tracing::info!("Using thermostat backend at {}", config.backend.base_url);

    // Create backend and view
    let backend = Arc::new(HttpBackend::new(&config.backend)?);
    let view = Arc::new(TerminalView::new(ChartRenderer::new(&config.chart)));

    let controller = Arc::new(DashboardController::new(
        backend,
        view.clone(),
        config.dashboard_settings(),
    ));
    let pollers = controller.initialize().await;

    let state = AppState {
        controller: controller.clone(),
        view,
    };

    println!("{}", HELP);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse_command(&line) {
                    Ok(Some(command)) => {
                        if let ControlFlow::Break(()) = handle_command(&state, command).await {
                            break;
                        }
                    }
                    Ok(None) => {}
                    Err(e) => println!("{}", e),
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted");
                break;
            }
        }
    }

    controller.shutdown().await;
    for poller in [pollers.readings, pollers.status] {
        tracing::debug!("Stopping {} poller (running: {})", poller.name(), poller.is_running());
        poller.cancel();
    }
    tracing::info!("Dashboard stopped");

    Ok(())
}
