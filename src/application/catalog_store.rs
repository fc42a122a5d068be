// In-memory catalog snapshot with read-only lookups
use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::domain::catalog::{Asset, Environment, System, Timeframe};
use crate::domain::error::CatalogError;

/// Immutable snapshot of the catalog, loaded once at start of session.
/// All derivation services read through this store and never mutate it.
#[derive(Debug)]
pub struct CatalogStore {
    environments: Vec<Environment>,
    systems: Vec<System>,
    assets: Vec<Asset>,
    timeframe: Timeframe,
}

impl CatalogStore {
    /// Build and validate a snapshot. Rejects an unsorted timeframe,
    /// hierarchies that revisit a system id, dangling environment
    /// references, unsorted streams and readings outside the shared
    /// timeframe.
    pub fn new(
        environments: Vec<Environment>,
        systems: Vec<System>,
        assets: Vec<Asset>,
        timeframe: Timeframe,
    ) -> Result<Self, CatalogError> {
        let store = Self {
            environments,
            systems,
            assets,
            timeframe,
        };
        store.validate()?;
        Ok(store)
    }

    pub fn environments(&self) -> &[Environment] {
        &self.environments
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn timeframe(&self) -> &[DateTime<Utc>] {
        &self.timeframe
    }

    /// Every system in the forest, depth-first in declaration order.
    pub fn all_systems(&self) -> Vec<&System> {
        let mut systems = Vec::new();
        let mut stack: Vec<&System> = self.systems.iter().rev().collect();
        while let Some(system) = stack.pop() {
            systems.push(system);
            for child in system.children.iter().rev() {
                stack.push(child);
            }
        }
        systems
    }

    /// Lookup anywhere in the forest. Absent ids yield None.
    pub fn system(&self, system_id: &str) -> Option<&System> {
        let mut stack: Vec<&System> = self.systems.iter().collect();
        while let Some(system) = stack.pop() {
            if system.id == system_id {
                return Some(system);
            }
            stack.extend(&system.children);
        }
        None
    }

    /// De-duplicated union of the assets owned by a system and by every
    /// descendant system, in first-discovery order. An asset shared across
    /// sibling systems appears once.
    pub fn recursive_assets(&self, system_id: &str) -> Result<Vec<&Asset>, CatalogError> {
        let root = self
            .system(system_id)
            .ok_or_else(|| CatalogError::SystemNotFound(system_id.to_string()))?;

        let mut found = Vec::new();
        let mut seen = HashSet::new();
        let mut stack = vec![root];
        while let Some(system) = stack.pop() {
            for asset in &self.assets {
                if asset.belongs_to(&system.id) && seen.insert(asset.id.as_str()) {
                    found.push(asset);
                }
            }
            for child in system.children.iter().rev() {
                stack.push(child);
            }
        }
        Ok(found)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if !self
            .timeframe
            .windows(2)
            .all(|pair| pair[0] < pair[1])
        {
            return Err(CatalogError::UnsortedTimeframe);
        }

        let environment_ids: HashSet<&str> =
            self.environments.iter().map(|e| e.id.as_str()).collect();

        let mut seen_systems = HashSet::new();
        for system in self.all_systems() {
            if !seen_systems.insert(system.id.as_str()) {
                return Err(CatalogError::DuplicateSystemId(system.id.clone()));
            }
            if !environment_ids.contains(system.environment_id.as_str()) {
                return Err(CatalogError::UnknownEnvironment {
                    system: system.id.clone(),
                    environment: system.environment_id.clone(),
                });
            }
        }

        let grid: HashSet<DateTime<Utc>> = self.timeframe.iter().copied().collect();
        for asset in &self.assets {
            let mut stream_names = HashSet::new();
            for stream in &asset.data {
                if !stream_names.insert(stream.name.as_str()) {
                    tracing::warn!(
                        "asset {} carries more than one \"{}\" stream; the first one wins",
                        asset.id,
                        stream.name
                    );
                }
                if !stream.is_strictly_ascending() {
                    return Err(CatalogError::UnsortedStream {
                        asset: asset.id.clone(),
                        stream: stream.name.clone(),
                    });
                }
                if stream.values.iter().any(|p| !grid.contains(&p.timestamp)) {
                    return Err(CatalogError::TimestampOutOfRange {
                        asset: asset.id.clone(),
                        stream: stream.name.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}
