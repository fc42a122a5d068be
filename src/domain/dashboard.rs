// Dashboard domain model
use serde::Serialize;

use super::charts::{BarSeries, DistributionSlice, LineSeries};

/// One line chart per configured system, with its own hour axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemChart {
    pub system_id: String,
    pub system_name: String,
    pub legend: Vec<String>,
    pub hour_axis: Vec<String>,
    pub series: Vec<LineSeries>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub systems_by_environment: Vec<DistributionSlice>,
    pub assets_by_system: Vec<DistributionSlice>,
    pub system_charts: Vec<SystemChart>,
    pub day_axis: Vec<String>,
    pub machine_outputs: Vec<BarSeries>,
}

impl Dashboard {
    pub fn new(
        systems_by_environment: Vec<DistributionSlice>,
        assets_by_system: Vec<DistributionSlice>,
        system_charts: Vec<SystemChart>,
        day_axis: Vec<String>,
        machine_outputs: Vec<BarSeries>,
    ) -> Self {
        Self {
            systems_by_environment,
            assets_by_system,
            system_charts,
            day_axis,
            machine_outputs,
        }
    }
}
