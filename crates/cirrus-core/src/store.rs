//! Ordered, id-unique node collection.

use indexmap::IndexMap;

use crate::node::{Node, NodeId};

/// The client-side copy of the remote node list.
///
/// Keeps insertion order (the order the remote reported nodes in) and
/// holds at most one node per id.
#[derive(Debug, Clone, Default)]
pub struct NodeStore {
    nodes: IndexMap<NodeId, Node>,
}

impl NodeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a node list.
    pub fn from_nodes(nodes: impl IntoIterator<Item = Node>) -> Self {
        let mut store = Self::new();
        store.extend(nodes);
        store
    }

    /// Replace every node with a fresh list.
    pub fn replace(&mut self, nodes: impl IntoIterator<Item = Node>) {
        self.nodes.clear();
        self.extend(nodes);
    }

    /// Append a node. A node with the same id is overwritten in place.
    pub fn insert(&mut self, node: Node) {
        if let Some(previous) = self.nodes.insert(node.id.clone(), node) {
            tracing::debug!(target: "cirrus::store", id = %previous.id, "replaced node with duplicate id");
        }
    }

    /// Append several nodes in order.
    pub fn extend(&mut self, nodes: impl IntoIterator<Item = Node>) {
        for node in nodes {
            self.insert(node);
        }
    }

    /// Look up a node by id.
    pub fn get(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Look up a node by id for mutation.
    pub fn get_mut(&mut self, id: &NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    /// Check if a node id is present.
    pub fn contains(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over nodes in store order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// The tree root (the node whose parent is `root`).
    pub fn root(&self) -> Option<&Node> {
        self.iter().find(|n| n.is_root())
    }

    /// Direct children of a folder, in store order.
    pub fn children<'a>(&'a self, parent: &'a NodeId) -> impl Iterator<Item = &'a Node> + 'a {
        self.iter().filter(move |n| &n.parent == parent)
    }

    /// Apply `f` to every listed node present in the store.
    ///
    /// Unknown ids are skipped. Returns how many nodes were touched.
    pub fn update_each(&mut self, ids: &[NodeId], mut f: impl FnMut(&mut Node)) -> usize {
        let mut touched = 0;
        for id in ids {
            if let Some(node) = self.nodes.get_mut(id) {
                f(node);
                touched += 1;
            }
        }
        touched
    }

    /// Copy all nodes into a vector, in store order.
    pub fn to_vec(&self) -> Vec<Node> {
        self.nodes.values().cloned().collect()
    }
}

impl<'a> IntoIterator for &'a NodeStore {
    type Item = &'a Node;
    type IntoIter = indexmap::map::Values<'a, NodeId, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.values()
    }
}

impl FromIterator<Node> for NodeStore {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Self::from_nodes(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NodeStore {
        NodeStore::from_nodes([
            Node::new_dir("r", "root", "Home"),
            Node::new_file("a", "r", "a.txt", 1),
            Node::new_dir("d", "r", "Docs"),
            Node::new_file("b", "d", "b.txt", 2),
        ])
    }

    #[test]
    fn test_order_and_root() {
        let store = sample();
        let ids: Vec<_> = store.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["r", "a", "d", "b"]);
        assert_eq!(store.root().map(|n| n.id.as_str()), Some("r"));
    }

    #[test]
    fn test_duplicate_id_keeps_position() {
        let mut store = sample();
        store.insert(Node::new_file("a", "r", "renamed.txt", 7));
        assert_eq!(store.len(), 4);
        let first_file = store.iter().nth(1).unwrap();
        assert_eq!(first_file.name, "renamed.txt");
    }

    #[test]
    fn test_children() {
        let store = sample();
        let parent = NodeId::new("r");
        let children: Vec<_> = store.children(&parent).map(|n| n.id.as_str()).collect();
        assert_eq!(children, ["a", "d"]);
    }

    #[test]
    fn test_update_each_skips_unknown() {
        let mut store = sample();
        let touched = store.update_each(&[NodeId::new("a"), NodeId::new("missing")], |n| n.marked = true);
        assert_eq!(touched, 1);
        assert!(store.get(&"a".into()).unwrap().marked);
    }

    #[test]
    fn test_replace() {
        let mut store = sample();
        store.replace([Node::new_dir("x", "root", "Other")]);
        assert_eq!(store.len(), 1);
        assert!(!store.contains(&"a".into()));
    }
}
