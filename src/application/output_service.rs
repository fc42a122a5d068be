// Daily production totals for machine assets
use crate::application::axis_service::day_label;
use crate::domain::catalog::Asset;
use crate::domain::charts::{BarSeries, DailyTotal};
use crate::domain::error::CatalogError;

/// Sum of the asset's named stream per calendar day, in first-occurrence
/// day order. Days without readings do not appear; reconciling the buckets
/// against the day axis is the caller's job, by day label.
pub fn daily_totals(asset: &Asset, stream: &str) -> Result<Vec<DailyTotal>, CatalogError> {
    let series = asset
        .stream(stream)
        .ok_or_else(|| CatalogError::MissingStream {
            asset: asset.id.clone(),
            stream: stream.to_string(),
        })?;

    let mut totals: Vec<DailyTotal> = Vec::new();
    for point in &series.values {
        let day = day_label(&point.timestamp);
        match totals.iter_mut().find(|total| total.day == day) {
            Some(total) => total.total += point.value,
            None => totals.push(DailyTotal {
                day,
                total: point.value,
            }),
        }
    }
    Ok(totals)
}

/// Bar series for one producing machine, keyed by its label.
pub fn machine_output(asset: &Asset, stream: &str) -> Result<BarSeries, CatalogError> {
    Ok(BarSeries {
        label: asset.label.clone(),
        totals: daily_totals(asset, stream)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{DataPoint, DataSeries};
    use chrono::{TimeZone, Utc};

    fn point(day: u32, hour: u32, value: f64) -> DataPoint {
        DataPoint {
            timestamp: Utc.with_ymd_and_hms(2025, 6, day, hour, 0, 0).unwrap(),
            value,
        }
    }

    fn machine(data: Vec<DataSeries>) -> Asset {
        Asset {
            id: "m1".to_string(),
            label: "Press A".to_string(),
            system_ids: vec!["sys005".to_string()],
            data,
        }
    }

    #[test]
    fn test_readings_sum_per_calendar_day() {
        let machine = machine(vec![DataSeries {
            name: "output".to_string(),
            values: vec![point(1, 9, 3.0), point(1, 14, 4.0), point(2, 9, 5.0)],
        }]);

        let totals = daily_totals(&machine, "output").unwrap();
        assert_eq!(
            totals,
            vec![
                DailyTotal {
                    day: "1 juin 2025".to_string(),
                    total: 7.0,
                },
                DailyTotal {
                    day: "2 juin 2025".to_string(),
                    total: 5.0,
                },
            ]
        );
    }

    #[test]
    fn test_missing_stream_is_a_typed_failure() {
        let machine = machine(Vec::new());
        assert_eq!(
            daily_totals(&machine, "output"),
            Err(CatalogError::MissingStream {
                asset: "m1".to_string(),
                stream: "output".to_string(),
            })
        );
    }

    #[test]
    fn test_bar_series_keyed_by_machine_label() {
        let machine = machine(vec![DataSeries {
            name: "output".to_string(),
            values: vec![point(1, 9, 2.5)],
        }]);

        let series = machine_output(&machine, "output").unwrap();
        assert_eq!(series.label, "Press A");
        assert_eq!(series.totals.len(), 1);
        assert_eq!(series.totals[0].total, 2.5);
    }
}
