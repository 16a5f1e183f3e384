//! Full resync of the node store.

use cirrus_core::{LocationSink, Node, NodeError, Result};

use crate::channel::RemoteChannel;
use crate::client::NodeClient;
use crate::command::{RemoteCommand, UpdateResponse};

impl<R: RemoteChannel> NodeClient<R> {
    /// Replace the store with the remote's current node list.
    ///
    /// The new location is the previous one when `keep_location` is set
    /// and that folder still exists, otherwise the tree root. It is
    /// reported to `sink` and returned.
    pub async fn update<S>(&mut self, sink: &mut S, keep_location: bool) -> Result<Node>
    where
        S: LocationSink + ?Sized,
    {
        let UpdateResponse { nodes } = self.issue_decoded(&RemoteCommand::Update).await?;

        let root = nodes
            .iter()
            .find(|n| n.is_root())
            .cloned()
            .ok_or(NodeError::MissingRoot)?;

        let previous = if keep_location {
            sink.current_location()
                .and_then(|id| nodes.iter().find(|n| &n.id == id))
                .cloned()
        } else {
            None
        };
        let location = previous.unwrap_or(root);
        sink.set_location(&location);

        tracing::info!(
            target: "cirrus::ops",
            nodes = nodes.len(),
            location = %location.id,
            "node store refreshed"
        );
        self.store.replace(nodes);

        Ok(location)
    }
}
