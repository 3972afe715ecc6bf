// Application state shared by the command handlers
use crate::application::dashboard_controller::DashboardController;
use crate::presentation::view::DashboardView;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<DashboardController>,
    pub view: Arc<dyn DashboardView>,
}
