// Catalog snapshot loading - one JSON file read at startup
use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::application::catalog_store::CatalogStore;
use crate::domain::catalog::{Asset, Environment, System, Timeframe};

#[derive(Debug, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub environments: Vec<Environment>,
    #[serde(default)]
    pub systems: Vec<System>,
    #[serde(default)]
    pub assets: Vec<Asset>,
    #[serde(default)]
    pub timeframe: Timeframe,
}

/// Read, parse and validate the catalog snapshot. Called once at startup;
/// the resulting store is immutable for the lifetime of the session.
pub fn load_catalog(path: &Path) -> anyhow::Result<CatalogStore> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file {}", path.display()))?;
    let file: CatalogFile = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse catalog file {}", path.display()))?;

    let store = CatalogStore::new(file.environments, file.systems, file.assets, file.timeframe)
        .context("catalog snapshot failed validation")?;

    tracing::info!(
        "loaded catalog: {} environments, {} systems, {} assets, {} timeframe entries",
        store.environments().len(),
        store.all_systems().len(),
        store.assets().len(),
        store.timeframe().len()
    );
    Ok(store)
}
