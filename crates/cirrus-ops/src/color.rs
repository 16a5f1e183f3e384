//! Folder and file colors.

use cirrus_core::{NodeId, Result};
use compact_str::CompactString;

use crate::channel::RemoteChannel;
use crate::client::NodeClient;
use crate::command::RemoteCommand;

impl<R: RemoteChannel> NodeClient<R> {
    /// Set the color of nodes. Returns how many local nodes were patched.
    pub async fn change_color(&mut self, nodes: &[NodeId], color: &str) -> Result<usize> {
        let color = CompactString::from(color);
        self.issue(&RemoteCommand::ChangeColor {
            nodes: nodes.to_vec(),
            new_color: color.clone(),
        })
        .await?;

        let recolored = self.store.update_each(nodes, |n| n.color = color.clone());
        tracing::info!(target: "cirrus::ops", recolored, %color, "nodes recolored");
        Ok(recolored)
    }
}
