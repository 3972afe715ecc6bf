// Infrastructure layer - External dependencies and adapters
pub mod chart_renderer;
pub mod config;
pub mod http_backend;
