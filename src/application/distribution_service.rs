// Distribution counts for the proportion charts
use std::sync::Arc;

use crate::application::catalog_store::CatalogStore;
use crate::domain::charts::DistributionSlice;

#[derive(Clone)]
pub struct DistributionService {
    store: Arc<CatalogStore>,
}

impl DistributionService {
    pub fn new(store: Arc<CatalogStore>) -> Self {
        Self { store }
    }

    /// One slice per environment in catalog order. Every system in the
    /// hierarchy lands in exactly one bucket; environments with no systems
    /// keep a zero slice.
    pub fn systems_by_environment(&self) -> Vec<DistributionSlice> {
        let systems = self.store.all_systems();
        self.store
            .environments()
            .iter()
            .map(|environment| DistributionSlice {
                name: environment.name.clone(),
                value: systems
                    .iter()
                    .filter(|system| system.environment_id == environment.id)
                    .count() as u64,
            })
            .collect()
    }

    /// One slice per requested system id found in the catalog, in input
    /// order. Unknown ids are skipped. An asset linked to several of the
    /// listed systems counts once per bucket.
    pub fn assets_by_system(&self, system_ids: &[String]) -> Vec<DistributionSlice> {
        system_ids
            .iter()
            .filter_map(|id| self.store.system(id))
            .map(|system| DistributionSlice {
                name: system.name.clone(),
                value: self
                    .store
                    .assets()
                    .iter()
                    .filter(|asset| asset.belongs_to(&system.id))
                    .count() as u64,
            })
            .collect()
    }
}
