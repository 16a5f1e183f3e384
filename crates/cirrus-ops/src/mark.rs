//! Starring and unstarring nodes.

use cirrus_core::{NodeId, Result};

use crate::channel::RemoteChannel;
use crate::client::NodeClient;
use crate::command::RemoteCommand;

impl<R: RemoteChannel> NodeClient<R> {
    /// Star nodes. Returns how many local nodes were patched.
    pub async fn add_mark(&mut self, nodes: &[NodeId]) -> Result<usize> {
        self.issue(&RemoteCommand::AddMark {
            nodes: nodes.to_vec(),
        })
        .await?;

        let marked = self.store.update_each(nodes, |n| n.marked = true);
        tracing::info!(target: "cirrus::ops", marked, "nodes marked");
        Ok(marked)
    }

    /// Unstar nodes on the remote.
    ///
    /// The local patch sets `marked` to `true`, exactly like
    /// [`add_mark`](Self::add_mark). Callers that need the real flag
    /// must [`update`](Self::update) afterwards.
    pub async fn remove_mark(&mut self, nodes: &[NodeId]) -> Result<usize> {
        self.issue(&RemoteCommand::RemoveMark {
            nodes: nodes.to_vec(),
        })
        .await?;

        let patched = self.store.update_each(nodes, |n| n.marked = true);
        tracing::warn!(
            target: "cirrus::ops",
            patched,
            "local store keeps unmarked nodes flagged as marked until the next update"
        );
        Ok(patched)
    }
}
