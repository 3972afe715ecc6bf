// Application layer - Dashboard use cases and the backend seam
pub mod collection_session;
pub mod dashboard_controller;
pub mod poller;
pub mod response_order;
pub mod thermostat_backend;
