// Per-asset line series for a system subtree
use std::sync::Arc;

use crate::application::catalog_store::CatalogStore;
use crate::domain::charts::LineSeries;
use crate::domain::error::CatalogError;

#[derive(Clone)]
pub struct SeriesService {
    store: Arc<CatalogStore>,
}

impl SeriesService {
    pub fn new(store: Arc<CatalogStore>) -> Self {
        Self { store }
    }

    /// Labels of the recursive assets carrying the named stream, for the
    /// chart legend.
    pub fn asset_labels(
        &self,
        system_id: &str,
        stream: &str,
    ) -> Result<Vec<String>, CatalogError> {
        Ok(self
            .store
            .recursive_assets(system_id)?
            .into_iter()
            .filter(|asset| asset.has_stream(stream))
            .map(|asset| asset.label.clone())
            .collect())
    }

    /// One line series per recursive asset of the system that carries the
    /// named stream, keyed by asset label. Points keep the stream's own
    /// recorded order; assets without the stream are filtered out, and a
    /// subtree with no qualifying asset yields an empty set.
    pub fn system_stream_series(
        &self,
        system_id: &str,
        stream: &str,
    ) -> Result<Vec<LineSeries>, CatalogError> {
        let assets = self.store.recursive_assets(system_id)?;
        Ok(assets
            .into_iter()
            .filter_map(|asset| {
                asset.stream(stream).map(|series| LineSeries {
                    label: asset.label.clone(),
                    points: series.values.clone(),
                })
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{Asset, DataPoint, DataSeries, Environment, System};
    use chrono::{DateTime, TimeZone, Utc};

    fn ts(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, hour, 0, 0).unwrap()
    }

    fn point(hour: u32, value: f64) -> DataPoint {
        DataPoint {
            timestamp: ts(hour),
            value,
        }
    }

    fn stream(name: &str, values: Vec<DataPoint>) -> DataSeries {
        DataSeries {
            name: name.to_string(),
            values,
        }
    }

    fn asset(id: &str, system_ids: &[&str], data: Vec<DataSeries>) -> Asset {
        Asset {
            id: id.to_string(),
            label: format!("Asset {id}"),
            system_ids: system_ids.iter().map(|s| s.to_string()).collect(),
            data,
        }
    }

    fn service(assets: Vec<Asset>) -> SeriesService {
        let environments = vec![Environment {
            id: "env1".to_string(),
            name: "Site Nord".to_string(),
        }];
        let systems = vec![System {
            id: "s1".to_string(),
            name: "System s1".to_string(),
            environment_id: "env1".to_string(),
            children: vec![System {
                id: "s2".to_string(),
                name: "System s2".to_string(),
                environment_id: "env1".to_string(),
                children: Vec::new(),
            }],
        }];
        let timeframe = (0..24).map(ts).collect();
        let store = CatalogStore::new(environments, systems, assets, timeframe).unwrap();
        SeriesService::new(Arc::new(store))
    }

    #[test]
    fn test_series_cover_subtree_and_skip_other_streams() {
        let service = service(vec![
            asset(
                "a1",
                &["s1"],
                vec![stream("temperature", vec![point(0, 20.5), point(1, 21.0)])],
            ),
            asset("a2", &["s2"], vec![stream("temperature", vec![point(0, 18.0)])]),
            asset("a3", &["s2"], vec![stream("output", vec![point(0, 4.0)])]),
        ]);

        let series = service.system_stream_series("s1", "temperature").unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].label, "Asset a1");
        assert_eq!(series[0].points.len(), 2);
        assert_eq!(series[0].points[1].value, 21.0);
        assert_eq!(series[1].label, "Asset a2");

        assert_eq!(
            service.asset_labels("s1", "temperature").unwrap(),
            vec!["Asset a1".to_string(), "Asset a2".to_string()]
        );
    }

    #[test]
    fn test_unknown_system_propagates() {
        let service = service(Vec::new());
        assert_eq!(
            service.system_stream_series("ghost", "temperature"),
            Err(CatalogError::SystemNotFound("ghost".to_string()))
        );
    }

    #[test]
    fn test_no_qualifying_asset_yields_empty_set() {
        let service = service(vec![asset(
            "a1",
            &["s1"],
            vec![stream("output", vec![point(0, 1.0)])],
        )]);
        assert!(service.system_stream_series("s1", "temperature").unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_stream_names_use_first() {
        let service = service(vec![asset(
            "a1",
            &["s1"],
            vec![
                stream("temperature", vec![point(0, 20.0)]),
                stream("temperature", vec![point(0, 99.0)]),
            ],
        )]);

        let series = service.system_stream_series("s1", "temperature").unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].points[0].value, 20.0);
    }
}
