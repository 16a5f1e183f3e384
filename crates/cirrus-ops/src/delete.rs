//! Deleting nodes.

use cirrus_core::{LocationSink, Node, NodeId, Result};

use crate::channel::RemoteChannel;
use crate::client::NodeClient;
use crate::command::RemoteCommand;

impl<R: RemoteChannel> NodeClient<R> {
    /// Delete nodes on the remote, then resync the whole store.
    ///
    /// The remote deletes descendants too, so the store is never patched
    /// locally. The current location is kept when it survived the delete.
    pub async fn delete<S>(&mut self, sink: &mut S, nodes: &[NodeId]) -> Result<Node>
    where
        S: LocationSink + ?Sized,
    {
        self.issue(&RemoteCommand::Delete {
            nodes: nodes.to_vec(),
        })
        .await?;

        tracing::info!(target: "cirrus::ops", count = nodes.len(), "nodes deleted");
        self.update(sink, true).await
    }
}
