use crate::application::dashboard_controller::DashboardSettings;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub backend: BackendSettings,
    pub polling: PollingSettings,
    pub chart: ChartSettings,
    pub download: DownloadSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BackendSettings {
    pub base_url: String,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PollingSettings {
    pub interval_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChartSettings {
    pub output_path: PathBuf,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DownloadSettings {
    pub output_path: PathBuf,
}

impl DashboardConfig {
    pub fn dashboard_settings(&self) -> DashboardSettings {
        DashboardSettings {
            poll_interval: Duration::from_secs(self.polling.interval_secs),
            download_path: self.download.output_path.clone(),
        }
    }

    fn validate(self) -> anyhow::Result<Self> {
        if self.polling.interval_secs == 0 {
            anyhow::bail!("polling.interval_secs must be greater than zero");
        }
        if self.chart.width == 0 || self.chart.height == 0 {
            anyhow::bail!("chart.width and chart.height must be greater than zero");
        }
        Ok(self)
    }
}

fn builder_with_defaults() -> anyhow::Result<config::ConfigBuilder<config::builder::DefaultState>> {
    Ok(config::Config::builder()
        .set_default("backend.base_url", "http://127.0.0.1:5000")?
        .set_default("backend.request_timeout_secs", 10_i64)?
        .set_default("polling.interval_secs", 60_i64)?
        .set_default("chart.output_path", "temperature_chart.svg")?
        .set_default("chart.width", 800_i64)?
        .set_default("chart.height", 480_i64)?
        .set_default("download.output_path", "temperature_data.csv")?)
}

/// Defaults, then `config/dashboard.toml` if present, then
/// `DASHBOARD__SECTION__KEY` environment variables.
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = builder_with_defaults()?
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(config::Environment::with_prefix("DASHBOARD").separator("__"))
        .build()?;

    settings.try_deserialize::<DashboardConfig>()?.validate()
}
