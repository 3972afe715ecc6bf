// HTTP backend implementation over the thermostat REST API
use crate::application::thermostat_backend::{BackendError, ThermostatBackend};
use crate::domain::reading::Reading;
use crate::domain::status::SystemStatus;
use crate::domain::target::{TargetTemperature, TargetValue};
use crate::infrastructure::config::BackendSettings;
use anyhow::Context;
use async_trait::async_trait;
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DATA: &str = "/data";
const SAVE_DATA: &str = "/save_data";
const SET_TARGET_TEMP: &str = "/set_target_temp";
const SYSTEM_STATUS: &str = "/system_status";
const DOWNLOAD: &str = "/download";

#[derive(Debug, Clone)]
pub struct HttpBackend {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct MessageResponse {
    message: String,
}

#[derive(Debug, Deserialize)]
struct StatusResponse {
    status: SystemStatus,
}

#[derive(Debug, Serialize)]
struct TargetTempRequest {
    target_temp: TargetValue,
}

impl HttpBackend {
    pub fn new(settings: &BackendSettings) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    fn system_status_url(&self, target: &TargetTemperature) -> String {
        format!(
            "{}?target_temp={}",
            self.url(SYSTEM_STATUS),
            urlencoding::encode(target.as_str())
        )
    }

    async fn execute(
        &self,
        endpoint: &'static str,
        request: RequestBuilder,
    ) -> Result<Response, BackendError> {
        let response = request
            .send()
            .await
            .map_err(|source| BackendError::Transport { endpoint, source })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::debug!("{} answered {}", endpoint, status);
            return Err(BackendError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }

        Ok(response)
    }

    async fn execute_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        request: RequestBuilder,
    ) -> Result<T, BackendError> {
        self.execute(endpoint, request)
            .await?
            .json::<T>()
            .await
            .map_err(|source| BackendError::Decode { endpoint, source })
    }
}

#[async_trait]
impl ThermostatBackend for HttpBackend {
    async fn fetch_readings(&self) -> Result<Vec<Reading>, BackendError> {
        let request = self.client.get(self.url(DATA));
        self.execute_json(DATA, request).await
    }

    async fn save_data(&self) -> Result<String, BackendError> {
        let request = self.client.post(self.url(SAVE_DATA));
        let response: MessageResponse = self.execute_json(SAVE_DATA, request).await?;
        Ok(response.message)
    }

    async fn set_target_temperature(
        &self,
        target: &TargetTemperature,
    ) -> Result<String, BackendError> {
        let body = TargetTempRequest {
            target_temp: target.value(),
        };
        let request = self.client.post(self.url(SET_TARGET_TEMP)).json(&body);
        let response: MessageResponse = self.execute_json(SET_TARGET_TEMP, request).await?;
        Ok(response.message)
    }

    async fn system_status(
        &self,
        target: &TargetTemperature,
    ) -> Result<SystemStatus, BackendError> {
        let request = self.client.get(self.system_status_url(target));
        let response: StatusResponse = self.execute_json(SYSTEM_STATUS, request).await?;
        Ok(response.status)
    }

    async fn download_data(&self) -> Result<Vec<u8>, BackendError> {
        let request = self.client.get(self.url(DOWNLOAD));
        let bytes = self
            .execute(DOWNLOAD, request)
            .await?
            .bytes()
            .await
            .map_err(|source| BackendError::Decode {
                endpoint: DOWNLOAD,
                source,
            })?;
        Ok(bytes.to_vec())
    }
}
