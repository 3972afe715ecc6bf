// Backend trait for the thermostat HTTP API
use crate::domain::reading::Reading;
use crate::domain::status::SystemStatus;
use crate::domain::target::TargetTemperature;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    /// The request never got a response
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} responded with HTTP {status}")]
    Status { endpoint: &'static str, status: u16 },

    #[error("unreadable response from {endpoint}: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

#[async_trait]
pub trait ThermostatBackend: Send + Sync {
    /// Full reading history (`GET /data`)
    async fn fetch_readings(&self) -> Result<Vec<Reading>, BackendError>;

    /// Persist the collected readings server-side, returns the server message
    async fn save_data(&self) -> Result<String, BackendError>;

    /// Send a new setpoint, returns the server message
    async fn set_target_temperature(
        &self,
        target: &TargetTemperature,
    ) -> Result<String, BackendError>;

    /// Status derived by the backend for the given setpoint
    async fn system_status(&self, target: &TargetTemperature)
    -> Result<SystemStatus, BackendError>;

    /// CSV written by the last save
    async fn download_data(&self) -> Result<Vec<u8>, BackendError>;
}
