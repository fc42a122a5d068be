// Chart-ready output shapes consumed by the rendering layer
use serde::Serialize;

use super::catalog::DataPoint;

/// One bucket of a proportion chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionSlice {
    pub name: String,
    pub value: u64,
}

/// One line per asset. Points carry their timestamps so the rendering layer
/// can join against an axis by instant instead of by position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSeries {
    pub label: String,
    pub points: Vec<DataPoint>,
}

/// Total production for one calendar day. The day label doubles as the
/// bucket key the rendering layer aligns against the day axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyTotal {
    pub day: String,
    pub total: f64,
}

/// One bar series per producing machine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSeries {
    pub label: String,
    pub totals: Vec<DailyTotal>,
}
