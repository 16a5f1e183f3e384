//! Summary statistics over a node store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::node::{Node, NodeId, NodeKind};
use crate::store::NodeStore;

/// Summary statistics for a node store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreStats {
    /// Total size of all files in bytes.
    pub total_size: u64,
    /// Total number of files.
    pub total_files: u64,
    /// Total number of folders.
    pub total_dirs: u64,
    /// Number of starred nodes.
    pub marked: u64,
    /// Largest file (id, size).
    pub largest_file: Option<(NodeId, u64)>,
    /// Most recently modified node (id, time).
    pub newest: Option<(NodeId, DateTime<Utc>)>,
}

impl StoreStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect stats for every node of a store.
    pub fn collect(store: &NodeStore) -> Self {
        let mut stats = Self::new();
        for node in store {
            stats.record(node);
        }
        stats
    }

    /// Update stats with one node.
    pub fn record(&mut self, node: &Node) {
        match node.kind {
            NodeKind::File => {
                self.total_files += 1;
                self.total_size = self.total_size.saturating_add(node.size);

                if self
                    .largest_file
                    .as_ref()
                    .is_none_or(|(_, s)| node.size > *s)
                {
                    self.largest_file = Some((node.id.clone(), node.size));
                }
            }
            NodeKind::Dir => self.total_dirs += 1,
        }

        if node.marked {
            self.marked += 1;
        }

        if self
            .newest
            .as_ref()
            .is_none_or(|(_, t)| node.last_modified > *t)
        {
            self.newest = Some((node.id.clone(), node.last_modified));
        }
    }
}
