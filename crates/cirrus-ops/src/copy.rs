//! Copying nodes and whole folder subtrees.
//!
//! Copies are created on the client only: every clone gets a fresh id,
//! a collision-free name at the top level, and folders bring their full
//! subtree along. The originals are left untouched.

use std::collections::{HashMap, HashSet};

use cirrus_core::{Node, NodeError, NodeId, NodeStore, Result, Tab, ViewContext};

use crate::channel::RemoteChannel;
use crate::client::{NodeClient, Outcome};
use crate::ids::fresh_id;
use crate::naming::copy_name;

/// Whether the view allows copying nodes.
pub fn copy_allowed(ctx: &ViewContext) -> bool {
    ctx.active_tab == Tab::Home
}

impl<R: RemoteChannel> NodeClient<R> {
    /// Copy nodes into `destination`.
    ///
    /// Returns the ids of the top-level copies, in request order. While a
    /// search is active the copies keep the parent of their original.
    pub async fn copy(
        &mut self,
        ctx: &ViewContext,
        nodes: &[NodeId],
        destination: &NodeId,
    ) -> Result<Outcome<Vec<NodeId>>> {
        if !copy_allowed(ctx) {
            tracing::debug!(target: "cirrus::ops", tab = %ctx.active_tab, "copy suppressed by view");
            return Ok(Outcome::Skipped);
        }

        let clones = plan_copy(&self.store, nodes, destination, ctx.search.active)?;
        let top_level: Vec<NodeId> = clones.iter().take(nodes.len()).map(|n| n.id.clone()).collect();

        tracing::info!(
            target: "cirrus::ops",
            copied = top_level.len(),
            created = clones.len(),
            %destination,
            "nodes copied"
        );
        self.store.extend(clones);

        Ok(Outcome::Applied(top_level))
    }
}

/// Build every clone a copy of `nodes` into `destination` creates.
///
/// The result lists the top-level clones first, in request order,
/// followed by the cloned descendants of each one in turn. Nothing is
/// written to the store.
pub fn plan_copy(
    store: &NodeStore,
    nodes: &[NodeId],
    destination: &NodeId,
    keep_parent: bool,
) -> Result<Vec<Node>> {
    match store.get(destination) {
        Some(dest) if dest.is_dir() => {}
        Some(_) => {
            return Err(NodeError::NotADirectory {
                id: destination.clone(),
            });
        }
        None => {
            return Err(NodeError::invalid_argument(
                "copy",
                format!("destination {destination} is not in the store"),
            ));
        }
    }

    let sources = nodes
        .iter()
        .map(|id| store.get(id).ok_or_else(|| NodeError::not_found(id)))
        .collect::<Result<Vec<_>>>()?;

    let mut tree = SubtreeCloner::new(store);
    let mut top_level = Vec::with_capacity(sources.len());
    let mut descendants = Vec::new();

    for source in sources {
        let mut clone = source.clone();
        clone.id = tree.new_id();
        clone.name = copy_name(store, &source.name, destination).into();
        if !keep_parent {
            clone.parent = destination.clone();
        }

        if source.is_dir() {
            tree.clone_children(&source.id, &clone.id, &mut descendants)?;
        }
        top_level.push(clone);
    }

    top_level.extend(descendants);
    Ok(top_level)
}

/// Clones folder contents using a child index built once per copy.
struct SubtreeCloner<'a> {
    store: &'a NodeStore,
    children: HashMap<&'a NodeId, Vec<&'a Node>>,
    issued: HashSet<NodeId>,
}

impl<'a> SubtreeCloner<'a> {
    fn new(store: &'a NodeStore) -> Self {
        let mut children: HashMap<&'a NodeId, Vec<&'a Node>> = HashMap::new();
        for node in store {
            children.entry(&node.parent).or_default().push(node);
        }
        Self {
            store,
            children,
            issued: HashSet::new(),
        }
    }

    /// An id unused by the store and by every clone planned so far.
    fn new_id(&mut self) -> NodeId {
        fresh_id(self.store, &mut self.issued)
    }

    /// Clone the subtree below `original` under the new folder id `clone_id`.
    fn clone_children(&mut self, original: &NodeId, clone_id: &NodeId, out: &mut Vec<Node>) -> Result<()> {
        let mut visited = HashSet::new();
        visited.insert(original.clone());
        self.clone_level(original, clone_id, &mut visited, out)
    }

    fn clone_level(
        &mut self,
        original: &NodeId,
        clone_id: &NodeId,
        visited: &mut HashSet<NodeId>,
        out: &mut Vec<Node>,
    ) -> Result<()> {
        let Some(children) = self.children.get(original).cloned() else {
            return Ok(());
        };

        for child in children {
            let mut clone = child.clone();
            clone.id = self.new_id();
            clone.parent = clone_id.clone();
            let new_id = clone.id.clone();
            out.push(clone);

            if child.is_dir() {
                if !visited.insert(child.id.clone()) {
                    tracing::warn!(target: "cirrus::ops", id = %child.id, "parent cycle while cloning folder");
                    return Err(NodeError::CycleDetected {
                        id: child.id.clone(),
                    });
                }
                self.clone_level(&child.id, &new_id, visited, out)?;
            }
        }

        Ok(())
    }
}
