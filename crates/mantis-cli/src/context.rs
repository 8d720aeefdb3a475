use mantis_config::MantisConfig;
use mantis_hierarchy::{HierarchyStore, Snapshot};
use std::sync::Arc;

/// Shared state for command handlers.
pub struct AppContext {
    pub store: HierarchyStore,
    pub config: MantisConfig,
}

impl AppContext {
    pub fn init(config: MantisConfig) -> anyhow::Result<Self> {
        let store = HierarchyStore::from_config(&config)?;
        Ok(Self { store, config })
    }

    /// Load the hierarchy for read commands.
    pub async fn snapshot(&self) -> anyhow::Result<Arc<Snapshot>> {
        Ok(self.store.load().await?)
    }

    pub fn placeholder(&self) -> &str {
        &self.config.general.placeholder
    }
}
