//! Snapshot of the user-interface state that shapes the node view.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::node::{Node, NodeId};

/// Tab currently shown in the application shell.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Tab {
    /// Folder browser.
    #[default]
    Home,
    /// Flat listing of starred nodes.
    Marked,
    /// Command-line style browser.
    Terminal,
    /// Any tab without node listing semantics (settings, about, ...).
    Other,
}

/// Clipboard mode determines paste behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardMode {
    /// Clipboard is empty.
    #[default]
    Empty,
    /// Items were copied.
    Copy,
    /// Items were cut and will be moved on paste.
    Move,
}

/// Clipboard state, tracked by node id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Clipboard {
    /// Nodes currently in the clipboard.
    pub nodes: HashSet<NodeId>,
    /// The clipboard mode (copy or move).
    pub mode: ClipboardMode,
}

impl Clipboard {
    /// Put nodes on the clipboard for copying.
    pub fn copy(&mut self, ids: impl IntoIterator<Item = NodeId>) {
        self.nodes = ids.into_iter().collect();
        self.mode = ClipboardMode::Copy;
    }

    /// Put nodes on the clipboard for moving.
    pub fn cut(&mut self, ids: impl IntoIterator<Item = NodeId>) {
        self.nodes = ids.into_iter().collect();
        self.mode = ClipboardMode::Move;
    }

    /// Clear the clipboard.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.mode = ClipboardMode::Empty;
    }

    /// Check if the clipboard is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get the number of items in the clipboard.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if a node is waiting to be moved.
    pub fn is_cut(&self, id: &NodeId) -> bool {
        self.mode == ClipboardMode::Move && self.nodes.contains(id)
    }
}

/// Search results supplied by the search component.
///
/// Results are held by id and resolved against the store on every
/// projection, so local patches show up while the search is open.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// Whether a search is in progress.
    pub active: bool,
    /// Ids of matching nodes, in result order.
    pub nodes: Vec<NodeId>,
}

impl SearchState {
    /// Start showing a result set.
    pub fn activate(&mut self, ids: Vec<NodeId>) {
        self.active = true;
        self.nodes = ids;
    }

    /// Leave search mode.
    pub fn clear(&mut self) {
        self.active = false;
        self.nodes.clear();
    }
}

/// Receives the location chosen by a refresh.
pub trait LocationSink {
    /// The location before the refresh, if any.
    fn current_location(&self) -> Option<&NodeId>;

    /// Record the new current location.
    fn set_location(&mut self, node: &Node);
}

/// External state read by the projection and the operation guards.
#[derive(Debug, Clone, Default)]
pub struct ViewContext {
    /// Folder currently browsed; `None` before the first refresh.
    pub location: Option<NodeId>,
    /// Active tab.
    pub active_tab: Tab,
    /// Search state.
    pub search: SearchState,
    /// Selected nodes.
    pub selection: HashSet<NodeId>,
    /// Clipboard contents.
    pub clipboard: Clipboard,
    /// Node currently open for inline rename.
    pub editable: Option<NodeId>,
}

impl ViewContext {
    /// Create a context with nothing selected at the home tab.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the active tab.
    pub fn with_tab(mut self, tab: Tab) -> Self {
        self.active_tab = tab;
        self
    }

    /// Set the current location.
    pub fn with_location(mut self, id: impl Into<NodeId>) -> Self {
        self.location = Some(id.into());
        self
    }

    /// Parent id that nodes must carry to be listed in folder view.
    pub fn location_or_root(&self) -> NodeId {
        self.location.clone().unwrap_or_else(NodeId::root_parent)
    }

    /// Whether the view lists its source set without a parent filter.
    pub fn is_flat_listing(&self) -> bool {
        self.search.active || self.active_tab == Tab::Marked
    }

    /// Check if a node is selected.
    pub fn is_selected(&self, id: &NodeId) -> bool {
        self.selection.contains(id)
    }

    /// Check if a node is open for inline rename.
    pub fn is_editable(&self, id: &NodeId) -> bool {
        self.editable.as_ref() == Some(id)
    }
}

impl LocationSink for ViewContext {
    fn current_location(&self) -> Option<&NodeId> {
        self.location.as_ref()
    }

    fn set_location(&mut self, node: &Node) {
        self.location = Some(node.id.clone());
    }
}
