//! File and folder node types.

use std::borrow::Borrow;
use std::fmt;

use chrono::{DateTime, Utc};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use strum::Display;

/// Parent value carried by the tree root.
pub const ROOT_PARENT: &str = "root";

/// Extension reported for names without a dot.
pub const UNKNOWN_EXTENSION: &str = "?";

/// Opaque handle identifying a node on the remote.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub CompactString);

impl NodeId {
    /// Create a new NodeId from any string-like value.
    pub fn new(id: impl Into<CompactString>) -> Self {
        Self(id.into())
    }

    /// The sentinel used as `parent` of the tree root.
    pub fn root_parent() -> Self {
        Self(CompactString::new(ROOT_PARENT))
    }

    /// Check if this is the root sentinel.
    pub fn is_root_parent(&self) -> bool {
        self.0 == ROOT_PARENT
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

/// Type of a node. Never changes after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NodeKind {
    /// Regular file.
    File,
    /// Folder.
    Dir,
}

impl NodeKind {
    /// Check if this is a folder.
    pub fn is_dir(&self) -> bool {
        matches!(self, NodeKind::Dir)
    }

    /// Check if this is a regular file.
    pub fn is_file(&self) -> bool {
        matches!(self, NodeKind::File)
    }
}

/// A single file or folder as known by the remote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Unique handle of this node.
    pub id: NodeId,

    /// Handle of the containing folder, `"root"` for the tree root.
    pub parent: NodeId,

    /// File or folder.
    #[serde(rename = "type")]
    pub kind: NodeKind,

    /// Display name, including any extension.
    pub name: CompactString,

    /// Size in bytes. Cached aggregate for folders.
    #[serde(default)]
    pub size: u64,

    /// Starred by the user.
    #[serde(default)]
    pub marked: bool,

    /// Folder tint (e.g. `#fff`), empty when unset.
    #[serde(default)]
    pub color: CompactString,

    /// Last modification time, milliseconds since the epoch on the wire.
    #[serde(with = "chrono::serde::ts_milliseconds", default = "unix_epoch")]
    pub last_modified: DateTime<Utc>,
}

fn unix_epoch() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH
}

impl Node {
    /// Create a new file node.
    pub fn new_file(
        id: impl Into<NodeId>,
        parent: impl Into<NodeId>,
        name: impl Into<CompactString>,
        size: u64,
    ) -> Self {
        Self {
            id: id.into(),
            parent: parent.into(),
            kind: NodeKind::File,
            name: name.into(),
            size,
            marked: false,
            color: CompactString::default(),
            last_modified: Utc::now(),
        }
    }

    /// Create a new folder node.
    pub fn new_dir(
        id: impl Into<NodeId>,
        parent: impl Into<NodeId>,
        name: impl Into<CompactString>,
    ) -> Self {
        Self {
            kind: NodeKind::Dir,
            ..Self::new_file(id, parent, name, 0)
        }
    }

    /// Check if this node is a folder.
    pub fn is_dir(&self) -> bool {
        self.kind.is_dir()
    }

    /// Check if this node is a file.
    pub fn is_file(&self) -> bool {
        self.kind.is_file()
    }

    /// Check if this node is the tree root.
    pub fn is_root(&self) -> bool {
        self.parent.is_root_parent()
    }

    /// Extension after the last dot of the name, `?` if there is none.
    pub fn extension(&self) -> &str {
        match self.name.rfind('.') {
            Some(idx) => &self.name[idx + 1..],
            None => UNKNOWN_EXTENSION,
        }
    }
}
