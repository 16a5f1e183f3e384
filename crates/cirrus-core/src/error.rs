//! Error types for node operations.

use serde_json::Value;
use thiserror::Error;

use crate::node::NodeId;

/// Failure reported by the remote command channel.
///
/// Operations hand this back to the caller untouched.
#[derive(Debug, Clone, Error)]
#[error("remote command '{route}' failed: {message}")]
pub struct RemoteError {
    /// Route of the command that failed.
    pub route: String,
    /// Human-readable message.
    pub message: String,
    /// Raw error payload from the remote, if any.
    pub payload: Option<Value>,
}

impl RemoteError {
    /// Create a remote error without a payload.
    pub fn new(route: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            message: message.into(),
            payload: None,
        }
    }

    /// Attach the raw error payload.
    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }
}

/// Errors that can occur while reading or mutating the node tree.
#[derive(Debug, Error)]
pub enum NodeError {
    /// An argument had the wrong shape.
    #[error("Invalid argument for '{operation}': {message}")]
    InvalidArgument {
        operation: &'static str,
        message: String,
    },

    /// A node id is not present in the store.
    #[error("Node not found: {id}")]
    NodeNotFound { id: NodeId },

    /// A folder was required.
    #[error("Node is not a folder: {id}")]
    NotADirectory { id: NodeId },

    /// A refreshed node list had no node with parent `root`.
    #[error("Cannot examine root node")]
    MissingRoot,

    /// The parent links loop back on themselves.
    #[error("Parent cycle detected at node {id}")]
    CycleDetected { id: NodeId },

    /// The remote command failed.
    #[error(transparent)]
    Remote(#[from] RemoteError),

    /// A remote result did not have the expected shape.
    #[error("Malformed result for '{route}': {source}")]
    Decode {
        route: String,
        #[source]
        source: serde_json::Error,
    },
}

impl NodeError {
    /// Create an invalid argument error.
    pub fn invalid_argument(operation: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            operation,
            message: message.into(),
        }
    }

    /// Create a node not found error.
    pub fn not_found(id: &NodeId) -> Self {
        Self::NodeNotFound { id: id.clone() }
    }

    /// Create a decode error with route context.
    pub fn decode(route: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            route: route.into(),
            source,
        }
    }

    /// Check if this error came from the remote channel.
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }
}

/// Result type alias for node operations.
pub type Result<T> = std::result::Result<T, NodeError>;
