//! Rename operation.

use chrono::Utc;
use cirrus_core::{NodeError, NodeId, Result};

use crate::channel::RemoteChannel;
use crate::client::NodeClient;
use crate::command::RemoteCommand;

impl<R: RemoteChannel> NodeClient<R> {
    /// Rename a single node.
    ///
    /// The name is checked before anything is sent. On success the node
    /// takes the new name and its modification time becomes now.
    pub async fn rename(&mut self, target: &NodeId, new_name: &str) -> Result<()> {
        validate_name(new_name)?;
        if !self.store.contains(target) {
            return Err(NodeError::not_found(target));
        }

        self.issue(&RemoteCommand::Rename {
            target: target.clone(),
            new_name: new_name.into(),
        })
        .await?;

        let now = Utc::now();
        self.store.update_each(std::slice::from_ref(target), |n| {
            n.name = new_name.into();
            n.last_modified = now;
        });
        tracing::info!(target: "cirrus::ops", id = %target, name = new_name, "node renamed");

        Ok(())
    }
}

/// Check that a new node name is present.
///
/// Any further rules on names belong to the remote.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(NodeError::invalid_argument("rename", "name cannot be empty"));
    }

    Ok(())
}
