//! Moving nodes between folders.

use cirrus_core::{NodeId, Result, Tab, ViewContext};

use crate::channel::RemoteChannel;
use crate::client::{NodeClient, Outcome};
use crate::command::RemoteCommand;

/// Whether the view allows moving nodes.
///
/// Moves happen only from the folder browsers, never from search results.
pub fn move_allowed(ctx: &ViewContext) -> bool {
    !ctx.search.active && matches!(ctx.active_tab, Tab::Home | Tab::Terminal)
}

impl<R: RemoteChannel> NodeClient<R> {
    /// Move nodes into `destination`.
    ///
    /// Only the `parent` of the listed nodes changes; their descendants
    /// follow implicitly. Returns how many local nodes were re-parented.
    pub async fn move_nodes(
        &mut self,
        ctx: &ViewContext,
        nodes: &[NodeId],
        destination: &NodeId,
    ) -> Result<Outcome<usize>> {
        if !move_allowed(ctx) {
            tracing::debug!(target: "cirrus::ops", tab = %ctx.active_tab, "move suppressed by view");
            return Ok(Outcome::Skipped);
        }

        self.issue(&RemoteCommand::Move {
            nodes: nodes.to_vec(),
            destination: destination.clone(),
        })
        .await?;

        let moved = self
            .store
            .update_each(nodes, |n| n.parent = destination.clone());
        tracing::info!(target: "cirrus::ops", moved, %destination, "nodes moved");

        Ok(Outcome::Applied(moved))
    }
}
