//! # mantis-hierarchy
//!
//! The asset hierarchy every Mantis screen selects from:
//! `Area → Line → Equipment → System → Component → SparePart`.
//!
//! - [`ApiClient`] fetches whole collections from the REST API and sends
//!   create/update/delete requests.
//! - [`HierarchyStore`] holds the loaded [`Snapshot`], deduplicates
//!   concurrent loads and invalidates after mutations.
//! - [`Snapshot`] answers child lists, ancestor chains and selection paths
//!   purely in memory.
//! - [`Selection`] is the cascading picker state used by forms and filters.
//! - [`DeepLink`] parses `create=true&type=Equipment&id=100` style links.

mod client;
mod collation;
mod deep_link;
mod error;
mod http;
mod path;
mod selection;
mod snapshot;
mod store;

pub use client::ApiClient;
pub use collation::compare_names;
pub use deep_link::DeepLink;
pub use error::HierarchyError;
pub use path::{ChainSegment, HierarchyPath, PATH_KINDS, PathLabels};
pub use selection::{Selection, SelectionState};
pub use snapshot::{DanglingRef, Node, Snapshot, SnapshotParts, TreeNode};
pub use store::HierarchyStore;
