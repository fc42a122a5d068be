// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;
use crate::application::series_service::SeriesService;

#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: DashboardService,
    pub series_service: SeriesService,
}
