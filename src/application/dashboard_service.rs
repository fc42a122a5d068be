// Dashboard service - composes the four derived views into one structure
use std::sync::Arc;

use crate::application::axis_service::AxisService;
use crate::application::catalog_store::CatalogStore;
use crate::application::distribution_service::DistributionService;
use crate::application::output_service;
use crate::application::series_service::SeriesService;
use crate::domain::charts::BarSeries;
use crate::domain::dashboard::{Dashboard, SystemChart};
use crate::domain::error::CatalogError;
use crate::infrastructure::config::DashboardConfig;

#[derive(Clone)]
pub struct DashboardService {
    store: Arc<CatalogStore>,
    axis: AxisService,
    distributions: DistributionService,
    series: SeriesService,
    dashboard_config: DashboardConfig,
}

impl DashboardService {
    pub fn new(store: Arc<CatalogStore>, dashboard_config: DashboardConfig) -> Self {
        Self {
            axis: AxisService::new(store.clone()),
            distributions: DistributionService::new(store.clone()),
            series: SeriesService::new(store.clone()),
            store,
            dashboard_config,
        }
    }

    /// Recompute the whole dashboard from the catalog snapshot. Pure and
    /// deterministic, so repeated calls yield identical results.
    pub fn build_dashboard(&self) -> Result<Dashboard, CatalogError> {
        let systems_by_environment = self.distributions.systems_by_environment();
        let assets_by_system = self
            .distributions
            .assets_by_system(&self.dashboard_config.pie_systems);

        // A configured chart system missing from the catalog is fatal,
        // unlike the silently skipped pie buckets.
        let hour_axis = self.axis.hourly_labels();
        let mut system_charts = Vec::new();
        for system_id in &self.dashboard_config.chart_systems {
            let system = self
                .store
                .system(system_id)
                .ok_or_else(|| CatalogError::SystemNotFound(system_id.clone()))?;
            let legend = self
                .series
                .asset_labels(system_id, &self.dashboard_config.chart_stream)?;
            let series = self
                .series
                .system_stream_series(system_id, &self.dashboard_config.chart_stream)?;
            system_charts.push(SystemChart {
                system_id: system.id.clone(),
                system_name: system.name.clone(),
                legend,
                hour_axis: hour_axis.clone(),
                series,
            });
        }

        let machine_outputs = self.machine_outputs()?;

        Ok(Dashboard::new(
            systems_by_environment,
            assets_by_system,
            system_charts,
            self.axis.daily_labels(),
            machine_outputs,
        ))
    }

    fn machine_outputs(&self) -> Result<Vec<BarSeries>, CatalogError> {
        let stream = &self.dashboard_config.output_stream;
        let mut outputs = Vec::new();
        for asset in self.store.assets() {
            if !asset.belongs_to(&self.dashboard_config.machine_system) {
                continue;
            }
            if !asset.has_stream(stream) {
                tracing::warn!(
                    "machine {} has no \"{}\" stream, dropped from the output chart",
                    asset.id,
                    stream
                );
                continue;
            }
            outputs.push(output_service::machine_output(asset, stream)?);
        }
        Ok(outputs)
    }
}
