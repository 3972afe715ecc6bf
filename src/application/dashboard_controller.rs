// Dashboard controller - Use cases behind every dashboard control
use crate::application::collection_session::{CollectionSession, CollectionState};
use crate::application::poller::{spawn_poller, PollHandle};
use crate::application::response_order::ResponseOrder;
use crate::application::thermostat_backend::ThermostatBackend;
use crate::domain::reading::{current_temperature_label, ChartSeries, NO_DATA_MESSAGE};
use crate::domain::status::{StatusColor, SystemStatus};
use crate::domain::target::{TargetTemperature, MISSING_TARGET_MESSAGE};
use crate::presentation::view::{DashboardView, ElementId};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

const START_LABEL: &str = "Start Data Collection";
const STOP_LABEL: &str = "Stop Data Collection";
const READINGS_ERROR: &str = "Error fetching temperature data.";
const STATUS_ERROR: &str = "Error fetching system status.";
const SUBMIT_ERROR: &str = "An error occurred. Please try again.";
const SAVE_ERROR: &str = "An error occurred while saving data.";
const DOWNLOAD_ERROR: &str = "An error occurred while downloading data.";
const DOWNLOAD_WHILE_COLLECTING: &str = "Stop data collection before downloading.";

#[derive(Debug, Clone)]
pub struct DashboardSettings {
    pub poll_interval: Duration,
    pub download_path: PathBuf,
}

/// Background polls started by [`DashboardController::initialize`].
#[derive(Debug)]
pub struct DashboardPollers {
    pub readings: PollHandle,
    pub status: PollHandle,
}

pub struct DashboardController {
    backend: Arc<dyn ThermostatBackend>,
    view: Arc<dyn DashboardView>,
    settings: DashboardSettings,
    session: tokio::sync::Mutex<CollectionSession>,
    chart: Mutex<ChartSeries>,
    readings_order: ResponseOrder,
    status_order: ResponseOrder,
}

impl DashboardController {
    pub fn new(
        backend: Arc<dyn ThermostatBackend>,
        view: Arc<dyn DashboardView>,
        settings: DashboardSettings,
    ) -> Self {
        Self {
            backend,
            view,
            settings,
            session: tokio::sync::Mutex::new(CollectionSession::default()),
            chart: Mutex::new(ChartSeries::default()),
            readings_order: ResponseOrder::default(),
            status_order: ResponseOrder::default(),
        }
    }

    /// Draw the empty chart and controls, load readings once and start the
    /// readings and status polls.
    pub async fn initialize(self: &Arc<Self>) -> DashboardPollers {
        tracing::info!(
            "Initializing dashboard, polling every {:?}",
            self.settings.poll_interval
        );

        self.replace_chart(ChartSeries::default());
        self.view.set_text(ElementId::ToggleDataCollection, START_LABEL);
        self.view.set_visible(ElementId::DownloadLink, false);
        self.refresh_status().await;

        self.fetch_readings().await;

        let controller = self.clone();
        let readings = spawn_poller("readings", self.settings.poll_interval, move || {
            let controller = controller.clone();
            async move { controller.fetch_readings().await }
        });

        let controller = self.clone();
        let status = spawn_poller("status", self.settings.poll_interval, move || {
            let controller = controller.clone();
            async move { controller.refresh_status().await }
        });

        DashboardPollers { readings, status }
    }

    pub fn chart(&self) -> ChartSeries {
        self.chart_guard().clone()
    }

    pub async fn collection_state(&self) -> CollectionState {
        self.session.lock().await.state()
    }

    pub async fn fetch_readings(&self) {
        let ticket = self.readings_order.issue();

        match self.backend.fetch_readings().await {
            Ok(readings) => {
                if !self.readings_order.accept(ticket) {
                    tracing::debug!("Discarding stale readings response #{}", ticket);
                    return;
                }

                let series = ChartSeries::from_readings(readings);
                tracing::debug!("Fetched {} readings", series.len());

                match series.latest() {
                    Some(latest) => self.view.set_text(
                        ElementId::CurrentTemp,
                        &current_temperature_label(latest.temperature),
                    ),
                    None => self.view.set_text(ElementId::CurrentTemp, NO_DATA_MESSAGE),
                }
                self.replace_chart(series);
            }
            Err(e) => {
                tracing::warn!("Failed to fetch readings: {}", e);
                if self.readings_order.accept(ticket) {
                    self.view.set_text(ElementId::CurrentTemp, READINGS_ERROR);
                }
            }
        }
    }

    /// Switch between collecting and idle, returns the new state.
    pub async fn toggle_collection(self: &Arc<Self>) -> CollectionState {
        let mut session = self.session.lock().await;

        if session.stop() {
            tracing::info!("Data collection stopped");
            self.view.set_text(ElementId::ToggleDataCollection, START_LABEL);
            self.view.set_visible(ElementId::DownloadLink, true);
            return session.state();
        }

        tracing::info!("Data collection started");
        self.replace_chart(ChartSeries::default());
        self.fetch_readings().await;

        let controller = self.clone();
        session.start(spawn_poller(
            "collection",
            self.settings.poll_interval,
            move || {
                let controller = controller.clone();
                async move { controller.fetch_readings().await }
            },
        ));

        self.view.set_text(ElementId::ToggleDataCollection, STOP_LABEL);
        self.view.set_visible(ElementId::DownloadLink, false);
        session.state()
    }

    pub async fn save_data(&self) {
        match self.backend.save_data().await {
            Ok(message) => {
                tracing::info!("Save requested: {}", message);
                self.view.alert(&message);
            }
            Err(e) => {
                tracing::warn!("Failed to save data: {}", e);
                self.view.alert(SAVE_ERROR);
            }
        }
    }

    pub async fn submit_target_temperature(&self) {
        let input = self.view.input_value(ElementId::TargetTempInput);
        let Some(target) = TargetTemperature::from_input(&input) else {
            self.view.alert(MISSING_TARGET_MESSAGE);
            return;
        };

        tracing::info!(
            "Submitting {} with target {}",
            ElementId::TargetTempForm,
            target.as_str()
        );

        match self.backend.set_target_temperature(&target).await {
            Ok(message) => {
                self.view.set_text(ElementId::Message, &message);
                self.refresh_status().await;
            }
            Err(e) => {
                tracing::warn!("Failed to set target temperature: {}", e);
                self.view.set_text(ElementId::Message, SUBMIT_ERROR);
            }
        }
    }

    pub async fn refresh_status(&self) {
        let input = self.view.input_value(ElementId::TargetTempInput);
        let Some(target) = TargetTemperature::from_input(&input) else {
            // Counts as the newest status so an older in-flight query can't
            // repaint a cleared setpoint
            let ticket = self.status_order.issue();
            if self.status_order.accept(ticket) {
                self.show_status(&SystemStatus::Off);
            }
            return;
        };

        let ticket = self.status_order.issue();
        match self.backend.system_status(&target).await {
            Ok(status) => {
                if !self.status_order.accept(ticket) {
                    tracing::debug!("Discarding stale status response #{}", ticket);
                    return;
                }
                tracing::debug!("System status for {}: {}", target.as_str(), status);
                self.show_status(&status);
            }
            Err(e) => {
                tracing::warn!("Failed to fetch system status: {}", e);
                if self.status_order.accept(ticket) {
                    self.view.set_text(ElementId::SystemStatus, STATUS_ERROR);
                    self.view.set_color(ElementId::SystemStatus, StatusColor::Neutral);
                }
            }
        }
    }

    /// Fetch the last saved CSV into the configured download path.
    /// Only offered while idle, like the download link.
    pub async fn download_data(&self) {
        if self.session.lock().await.is_collecting() {
            self.view.alert(DOWNLOAD_WHILE_COLLECTING);
            return;
        }

        let bytes = match self.backend.download_data().await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!("Failed to download data: {}", e);
                self.view.alert(DOWNLOAD_ERROR);
                return;
            }
        };

        let path = &self.settings.download_path;
        match tokio::fs::write(path, &bytes).await {
            Ok(()) => {
                tracing::info!("Wrote {} bytes to {}", bytes.len(), path.display());
                self.view
                    .set_text(ElementId::Message, &format!("Data saved to {}", path.display()));
            }
            Err(e) => {
                tracing::warn!("Failed to write {}: {}", path.display(), e);
                self.view.alert(DOWNLOAD_ERROR);
            }
        }
    }

    /// Stop collection if it is running
    pub async fn shutdown(&self) {
        if self.session.lock().await.stop() {
            tracing::info!("Collection poller stopped for shutdown");
        }
    }

    fn show_status(&self, status: &SystemStatus) {
        self.view.set_text(ElementId::SystemStatus, &status.label());
        self.view.set_color(ElementId::SystemStatus, status.color());
    }

    fn replace_chart(&self, series: ChartSeries) {
        self.view.draw_chart(&series);
        *self.chart_guard() = series;
    }

    fn chart_guard(&self) -> std::sync::MutexGuard<'_, ChartSeries> {
        self.chart.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
