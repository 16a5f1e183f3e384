//! Folder creation.

use cirrus_core::{Node, NodeId, Result};

use crate::channel::RemoteChannel;
use crate::client::NodeClient;
use crate::command::{CreateFolderResponse, RemoteCommand};

impl<R: RemoteChannel> NodeClient<R> {
    /// Create a new folder inside `parent`.
    ///
    /// The remote picks the name and id; the returned folder is appended
    /// to the store.
    pub async fn create_folder(&mut self, parent: &NodeId) -> Result<Node> {
        let CreateFolderResponse { node } = self
            .issue_decoded(&RemoteCommand::CreateFolder {
                parent: parent.clone(),
            })
            .await?;

        tracing::info!(target: "cirrus::ops", id = %node.id, %parent, "folder created");
        self.store.insert(node.clone());
        Ok(node)
    }
}
