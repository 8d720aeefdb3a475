//! The shared hierarchy store.
//!
//! A [`HierarchyStore`] holds the current [`Snapshot`] behind an `Arc`, so
//! queries never block on an in-flight load and a reader keeps a consistent
//! view for as long as it holds its `Arc`. Stores are independent of each
//! other; a process may keep one per view.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use mantis_config::MantisConfig;
use mantis_core::draft::EntityDraft;
use mantis_core::entities::EntityRecord;
use mantis_core::ids::EntityId;
use mantis_core::kind::EntityKind;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::client::ApiClient;
use crate::error::HierarchyError;
use crate::path::{ChainSegment, HierarchyPath, PathLabels};
use crate::snapshot::{Node, Snapshot, SnapshotParts, TreeNode};

type LoadOutcome = Result<Arc<Snapshot>, HierarchyError>;

#[derive(Debug, Default)]
struct StoreState {
    snapshot: Option<Arc<Snapshot>>,
    last_outcome: Option<LoadOutcome>,
    /// Bumped by every invalidation. A load only installs its snapshot if
    /// this is unchanged since it started fetching.
    generation: u64,
}

/// Loads, caches and queries the six-level asset hierarchy.
#[derive(Debug)]
pub struct HierarchyStore {
    client: ApiClient,
    state: RwLock<StoreState>,
    /// Held for the duration of a fetch; at most one load is in flight.
    load_gate: Mutex<()>,
    completed_loads: AtomicU64,
}

impl HierarchyStore {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            state: RwLock::new(StoreState::default()),
            load_gate: Mutex::new(()),
            completed_loads: AtomicU64::new(0),
        }
    }

    /// Build a store against the configured API.
    ///
    /// # Errors
    ///
    /// Returns [`HierarchyError::Validation`] if the API settings are invalid.
    pub fn from_config(config: &MantisConfig) -> Result<Self, HierarchyError> {
        Ok(Self::new(ApiClient::new(config.api.clone())?))
    }

    fn read_state(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Fetch all six collections and replace the snapshot.
    ///
    /// A call made while another load is running waits for it and returns
    /// its outcome instead of fetching again.
    ///
    /// # Errors
    ///
    /// Returns [`HierarchyError::Network`] if any collection fails to load.
    /// The previous snapshot, if any, is kept.
    pub async fn load(&self) -> Result<Arc<Snapshot>, HierarchyError> {
        let seen = self.completed_loads.load(Ordering::Acquire);
        let _gate = self.load_gate.lock().await;

        if self.completed_loads.load(Ordering::Acquire) != seen
            && let Some(outcome) = self.read_state().last_outcome.clone()
        {
            debug!("joined in-flight load");
            return outcome;
        }

        let outcome = loop {
            let generation = self.read_state().generation;
            let outcome = self.fetch_snapshot().await.map(Arc::new);

            let mut state = self.write_state();
            if state.generation != generation {
                // A mutation landed while we were fetching; this data may
                // predate it.
                debug!("hierarchy invalidated during load, fetching again");
                continue;
            }
            if let Ok(snapshot) = &outcome {
                state.snapshot = Some(Arc::clone(snapshot));
            }
            state.last_outcome = Some(outcome.clone());
            break outcome;
        };
        self.completed_loads.fetch_add(1, Ordering::AcqRel);

        match &outcome {
            Ok(snapshot) => {
                info!(
                    areas = snapshot.count(EntityKind::Area),
                    lines = snapshot.count(EntityKind::Line),
                    equipments = snapshot.count(EntityKind::Equipment),
                    systems = snapshot.count(EntityKind::System),
                    components = snapshot.count(EntityKind::Component),
                    spare_parts = snapshot.count(EntityKind::SparePart),
                    "hierarchy loaded"
                );
                let dangling = snapshot.dangling_references();
                if !dangling.is_empty() {
                    warn!(count = dangling.len(), "snapshot has rows with missing parents");
                }
            }
            Err(error) => warn!(%error, "hierarchy load failed"),
        }
        outcome
    }

    async fn fetch_snapshot(&self) -> Result<Snapshot, HierarchyError> {
        let c = &self.client;
        let (areas, lines, equipments, systems, components, spare_parts) = tokio::try_join!(
            c.fetch_all(EntityKind::Area),
            c.fetch_all(EntityKind::Line),
            c.fetch_all(EntityKind::Equipment),
            c.fetch_all(EntityKind::System),
            c.fetch_all(EntityKind::Component),
            c.fetch_all(EntityKind::SparePart),
        )?;
        Ok(Snapshot::from_parts(SnapshotParts {
            areas,
            lines,
            equipments,
            systems,
            components,
            spare_parts,
        }))
    }

    /// The current snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`HierarchyError::NotLoaded`] before the first successful load
    /// and after [`Self::invalidate`].
    pub fn snapshot(&self) -> Result<Arc<Snapshot>, HierarchyError> {
        self.read_state()
            .snapshot
            .clone()
            .ok_or(HierarchyError::NotLoaded)
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.read_state().snapshot.is_some()
    }

    /// Drop the snapshot. Queries fail with `NotLoaded` until the next load.
    ///
    /// A load already fetching when this is called discards its result and
    /// fetches again.
    pub fn invalidate(&self) {
        let mut state = self.write_state();
        state.snapshot = None;
        state.last_outcome = None;
        state.generation = state.generation.wrapping_add(1);
        debug!("hierarchy snapshot invalidated");
    }

    /// See [`Snapshot::children_of`].
    ///
    /// # Errors
    ///
    /// [`HierarchyError::NotLoaded`] if no snapshot is held.
    pub fn children_of(
        &self,
        kind: EntityKind,
        parent: Option<EntityId>,
    ) -> Result<Vec<Node>, HierarchyError> {
        Ok(self.snapshot()?.children_of(kind, parent))
    }

    /// See [`Snapshot::ancestor_chain`].
    ///
    /// # Errors
    ///
    /// [`HierarchyError::NotLoaded`] if no snapshot is held.
    pub fn ancestor_chain(
        &self,
        kind: EntityKind,
        id: EntityId,
    ) -> Result<Vec<ChainSegment>, HierarchyError> {
        Ok(self.snapshot()?.ancestor_chain(kind, id))
    }

    /// See [`Snapshot::select_path`].
    ///
    /// # Errors
    ///
    /// [`HierarchyError::NotLoaded`] if no snapshot is held.
    pub fn select_path(
        &self,
        kind: EntityKind,
        id: EntityId,
    ) -> Result<HierarchyPath, HierarchyError> {
        Ok(self.snapshot()?.select_path(kind, id))
    }

    /// # Errors
    ///
    /// [`HierarchyError::NotLoaded`] if no snapshot is held,
    /// [`HierarchyError::NotFound`] if `id` is unknown.
    pub fn node(&self, kind: EntityKind, id: EntityId) -> Result<Node, HierarchyError> {
        self.snapshot()?.node(kind, id)
    }

    /// # Errors
    ///
    /// [`HierarchyError::NotLoaded`] if no snapshot is held.
    pub fn tree(&self) -> Result<Vec<TreeNode>, HierarchyError> {
        Ok(self.snapshot()?.tree())
    }

    /// # Errors
    ///
    /// [`HierarchyError::NotLoaded`] if no snapshot is held.
    pub fn labels(
        &self,
        path: &HierarchyPath,
        placeholder: &str,
    ) -> Result<PathLabels, HierarchyError> {
        let snapshot = self.snapshot()?;
        Ok(path.labels(&snapshot, placeholder))
    }

    /// Create a row and invalidate the snapshot.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::create`]. The snapshot is untouched on failure.
    pub async fn create(
        &self,
        kind: EntityKind,
        draft: &EntityDraft,
    ) -> Result<EntityRecord, HierarchyError> {
        let record = self.client.create(kind, draft).await?;
        info!(%kind, id = %record.id(), "created");
        self.invalidate();
        Ok(record)
    }

    /// Update a row and invalidate the snapshot.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::update`]. The snapshot is untouched on failure.
    pub async fn update(
        &self,
        kind: EntityKind,
        id: EntityId,
        draft: &EntityDraft,
    ) -> Result<EntityRecord, HierarchyError> {
        let record = self.client.update(kind, id, draft).await?;
        info!(%kind, %id, "updated");
        self.invalidate();
        Ok(record)
    }

    /// Delete a row (the server cascades to descendants) and invalidate the
    /// snapshot.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::delete`]. The snapshot is untouched on failure.
    pub async fn delete(&self, kind: EntityKind, id: EntityId) -> Result<(), HierarchyError> {
        self.client.delete(kind, id).await?;
        info!(%kind, %id, "deleted");
        self.invalidate();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mantis_config::ApiConfig;

    fn offline_store() -> HierarchyStore {
        HierarchyStore::new(ApiClient::new(ApiConfig::default()).unwrap())
    }

    #[test]
    fn queries_before_load_are_not_loaded() {
        let store = offline_store();
        assert!(!store.is_loaded());
        assert_eq!(store.snapshot().unwrap_err(), HierarchyError::NotLoaded);
        assert_eq!(
            store.children_of(EntityKind::Area, None).unwrap_err(),
            HierarchyError::NotLoaded
        );
        assert_eq!(store.tree().unwrap_err(), HierarchyError::NotLoaded);
        assert_eq!(
            store.labels(&HierarchyPath::default(), "-").unwrap_err(),
            HierarchyError::NotLoaded
        );
    }

    #[test]
    fn invalidate_is_idempotent() {
        let store = offline_store();
        store.invalidate();
        store.invalidate();
        assert!(!store.is_loaded());
        assert_eq!(store.read_state().generation, 2);
    }
}
