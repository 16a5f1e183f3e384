//! Remote command types.

use cirrus_core::{Node, NodeId};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use strum::{AsRefStr, Display, EnumString};

/// Route names understood by the remote authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum Route {
    Update,
    CreateFolder,
    Move,
    Delete,
    AddMark,
    RemoveMark,
    Rename,
    ChangeColor,
}

/// A command to be issued to the remote.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteCommand {
    /// Fetch the full node list.
    Update,
    /// Create a folder under `parent`.
    CreateFolder { parent: NodeId },
    /// Move nodes into `destination`.
    Move {
        nodes: Vec<NodeId>,
        destination: NodeId,
    },
    /// Delete nodes (recursively, on the remote).
    Delete { nodes: Vec<NodeId> },
    /// Star nodes.
    AddMark { nodes: Vec<NodeId> },
    /// Unstar nodes.
    RemoveMark { nodes: Vec<NodeId> },
    /// Rename a single node.
    Rename {
        target: NodeId,
        new_name: CompactString,
    },
    /// Recolor nodes.
    ChangeColor {
        nodes: Vec<NodeId>,
        new_color: CompactString,
    },
}

impl RemoteCommand {
    /// Route this command is sent to.
    pub fn route(&self) -> Route {
        match self {
            Self::Update => Route::Update,
            Self::CreateFolder { .. } => Route::CreateFolder,
            Self::Move { .. } => Route::Move,
            Self::Delete { .. } => Route::Delete,
            Self::AddMark { .. } => Route::AddMark,
            Self::RemoveMark { .. } => Route::RemoveMark,
            Self::Rename { .. } => Route::Rename,
            Self::ChangeColor { .. } => Route::ChangeColor,
        }
    }

    /// Request body, always carrying the credential as `apikey`.
    pub fn body(&self, apikey: &str) -> Value {
        let mut body = Map::new();
        body.insert("apikey".into(), json!(apikey));

        match self {
            Self::Update => {}
            Self::CreateFolder { parent } => {
                body.insert("parent".into(), json!(parent));
            }
            Self::Move { nodes, destination } => {
                body.insert("nodes".into(), json!(nodes));
                body.insert("destination".into(), json!(destination));
            }
            Self::Delete { nodes } | Self::AddMark { nodes } | Self::RemoveMark { nodes } => {
                body.insert("nodes".into(), json!(nodes));
            }
            Self::Rename { target, new_name } => {
                body.insert("target".into(), json!(target));
                body.insert("newName".into(), json!(new_name));
            }
            Self::ChangeColor { nodes, new_color } => {
                body.insert("nodes".into(), json!(nodes));
                body.insert("newColor".into(), json!(new_color));
            }
        }

        Value::Object(body)
    }
}

/// Result of the `update` route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateResponse {
    /// Every node the user can see.
    pub nodes: Vec<Node>,
}

/// Result of the `createFolder` route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFolderResponse {
    /// The created folder.
    pub node: Node,
}
