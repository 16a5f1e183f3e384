//! Projection of the node store onto what the current view shows.
//!
//! The visible set depends on the view context:
//!
//! 1. During a search, the search results are listed flat.
//! 2. On the marked tab, every starred node is listed flat.
//! 3. Otherwise, the children of the current location are listed.
//!
//! Folder sizes are aggregated over the same source set the listing
//! came from, so a folder inside a search result only counts the files
//! that also matched the search.

use std::collections::{HashMap, HashSet};

use compact_str::CompactString;
use serde::Serialize;

use crate::context::{Tab, ViewContext};
use crate::node::{Node, NodeId, NodeKind};
use crate::store::NodeStore;

/// A node as it appears in the current view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayedNode {
    /// The node. For folders with size aggregation, `size` holds the total.
    #[serde(flatten)]
    pub node: Node,
    /// Part of the current selection.
    pub selected: bool,
    /// On the clipboard in move mode.
    #[serde(rename = "cutted")]
    pub cut: bool,
    /// Open for inline rename.
    pub editable: bool,
    /// File extension, `?` when the name has none. Folders have none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<CompactString>,
}

impl DisplayedNode {
    /// Id of the underlying node.
    pub fn id(&self) -> &NodeId {
        &self.node.id
    }
}

/// Visible nodes split into files and folders.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DisplayedNodes {
    /// Files, in source order.
    #[serde(rename = "file")]
    pub files: Vec<DisplayedNode>,
    /// Folders, in source order.
    #[serde(rename = "dir")]
    pub dirs: Vec<DisplayedNode>,
}

impl DisplayedNodes {
    /// Total number of visible nodes.
    pub fn len(&self) -> usize {
        self.files.len() + self.dirs.len()
    }

    /// Check if nothing is visible.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.dirs.is_empty()
    }

    /// Iterate over folders first, then files.
    pub fn iter(&self) -> impl Iterator<Item = &DisplayedNode> {
        self.dirs.iter().chain(self.files.iter())
    }
}

/// Compute the nodes visible for `ctx`.
///
/// With `include_folder_size`, every listed folder gets its recursive
/// size computed over the source set.
pub fn project(store: &NodeStore, ctx: &ViewContext, include_folder_size: bool) -> DisplayedNodes {
    let source = source_set(store, ctx);
    let flat = ctx.is_flat_listing();
    let location = ctx.location_or_root();
    let sizes = include_folder_size.then(|| FolderSizes::new(&source));

    let mut out = DisplayedNodes::default();
    for node in source {
        if !flat && node.parent != location {
            continue;
        }

        let mut shown = DisplayedNode {
            node: node.clone(),
            selected: ctx.is_selected(&node.id),
            cut: ctx.clipboard.is_cut(&node.id),
            editable: ctx.is_editable(&node.id),
            extension: None,
        };

        match node.kind {
            NodeKind::File => {
                shown.extension = Some(node.extension().into());
                out.files.push(shown);
            }
            NodeKind::Dir => {
                if let Some(sizes) = &sizes {
                    shown.node.size = sizes.folder_size(&node.id);
                }
                out.dirs.push(shown);
            }
        }
    }

    out
}

/// Recursive size of a folder over the whole store.
pub fn folder_size(store: &NodeStore, id: &NodeId) -> u64 {
    let nodes: Vec<&Node> = store.iter().collect();
    FolderSizes::new(&nodes).folder_size(id)
}

fn source_set<'a>(store: &'a NodeStore, ctx: &'a ViewContext) -> Vec<&'a Node> {
    if ctx.search.active {
        ctx.search
            .nodes
            .iter()
            .filter_map(|id| store.get(id))
            .collect()
    } else if ctx.active_tab == Tab::Marked {
        store.iter().filter(|n| n.marked).collect()
    } else {
        store.iter().collect()
    }
}

/// Child index over a source set for size aggregation.
struct FolderSizes<'a> {
    children: HashMap<&'a NodeId, Vec<&'a Node>>,
}

impl<'a> FolderSizes<'a> {
    fn new(nodes: &[&'a Node]) -> Self {
        let mut children: HashMap<&'a NodeId, Vec<&'a Node>> = HashMap::new();
        for &node in nodes {
            children.entry(&node.parent).or_default().push(node);
        }
        Self { children }
    }

    /// Sum of the file sizes below `id`.
    ///
    /// A folder reached twice (a parent cycle) contributes nothing the
    /// second time.
    fn folder_size(&self, id: &NodeId) -> u64 {
        let mut size = 0u64;
        let mut visited: HashSet<&NodeId> = HashSet::new();
        let mut pending: Vec<&NodeId> = vec![id];
        visited.insert(id);

        while let Some(folder) = pending.pop() {
            let Some(children) = self.children.get(folder) else {
                continue;
            };
            for child in children {
                match child.kind {
                    NodeKind::File => size = size.saturating_add(child.size),
                    NodeKind::Dir => {
                        if visited.insert(&child.id) {
                            pending.push(&child.id);
                        } else {
                            tracing::warn!(
                                target: "cirrus::view",
                                folder = %id,
                                revisited = %child.id,
                                "parent cycle while aggregating folder size"
                            );
                        }
                    }
                }
            }
        }

        size
    }
}
