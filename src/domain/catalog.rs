// Catalog domain model - environments, systems, assets and their data streams
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The shared, chronologically sorted time axis all data streams refer to.
pub type Timeframe = Vec<DateTime<Utc>>;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Environment {
    pub id: String,
    pub name: String,
}

/// A node in the system hierarchy. Children are owned by value, so the
/// loaded representation is a forest; id uniqueness across the forest is
/// checked when the catalog store is built.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct System {
    pub id: String,
    pub name: String,
    pub environment_id: String,
    #[serde(default)]
    pub children: Vec<System>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

/// A named stream of readings observed on an asset, ascending by timestamp.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DataSeries {
    pub name: String,
    #[serde(default)]
    pub values: Vec<DataPoint>,
}

impl DataSeries {
    pub fn is_strictly_ascending(&self) -> bool {
        self.values
            .windows(2)
            .all(|pair| pair[0].timestamp < pair[1].timestamp)
    }
}

/// A monitored entity (sensor, machine). An asset may belong to several
/// systems at once.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Asset {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub system_ids: Vec<String>,
    #[serde(default)]
    pub data: Vec<DataSeries>,
}

impl Asset {
    /// First data stream with the given name, if any. When an asset carries
    /// duplicate stream names the first one wins.
    pub fn stream(&self, name: &str) -> Option<&DataSeries> {
        self.data.iter().find(|series| series.name == name)
    }

    pub fn has_stream(&self, name: &str) -> bool {
        self.stream(name).is_some()
    }

    pub fn belongs_to(&self, system_id: &str) -> bool {
        self.system_ids.iter().any(|id| id == system_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn point(hour: u32, value: f64) -> DataPoint {
        DataPoint {
            timestamp: Utc.with_ymd_and_hms(2025, 6, 1, hour, 0, 0).unwrap(),
            value,
        }
    }

    #[test]
    fn test_first_stream_wins_on_duplicate_names() {
        let asset = Asset {
            id: "a1".to_string(),
            label: "Press A".to_string(),
            system_ids: vec!["sys001".to_string()],
            data: vec![
                DataSeries {
                    name: "output".to_string(),
                    values: vec![point(9, 3.0)],
                },
                DataSeries {
                    name: "output".to_string(),
                    values: vec![point(9, 99.0)],
                },
            ],
        };

        let stream = asset.stream("output").unwrap();
        assert_eq!(stream.values[0].value, 3.0);
        assert!(asset.stream("temperature").is_none());
    }

    #[test]
    fn test_strictly_ascending_rejects_duplicates_and_disorder() {
        let sorted = DataSeries {
            name: "temperature".to_string(),
            values: vec![point(9, 1.0), point(10, 2.0)],
        };
        assert!(sorted.is_strictly_ascending());

        let duplicated = DataSeries {
            name: "temperature".to_string(),
            values: vec![point(9, 1.0), point(9, 2.0)],
        };
        assert!(!duplicated.is_strictly_ascending());

        let unsorted = DataSeries {
            name: "temperature".to_string(),
            values: vec![point(10, 1.0), point(9, 2.0)],
        };
        assert!(!unsorted.is_strictly_ascending());
    }
}
