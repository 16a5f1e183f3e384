//! Node client: the store, the remote channel and the credential.

use cirrus_core::{ClientConfig, DisplayedNodes, NodeError, NodeStore, Result, ViewContext, project};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::channel::RemoteChannel;
use crate::command::RemoteCommand;

/// What a context-guarded operation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The operation ran and produced `T`.
    Applied(T),
    /// The view context did not allow the operation; nothing happened.
    Skipped,
}

impl<T> Outcome<T> {
    /// Check if the guard suppressed the operation.
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped)
    }

    /// The produced value, if the operation ran.
    pub fn applied(self) -> Option<T> {
        match self {
            Self::Applied(value) => Some(value),
            Self::Skipped => None,
        }
    }
}

/// Client-side owner of the node tree.
///
/// Every mutation goes through a remote command first; the local store
/// is patched only after the remote accepted it.
#[derive(Debug)]
pub struct NodeClient<R> {
    pub(crate) channel: R,
    pub(crate) config: ClientConfig,
    pub(crate) store: NodeStore,
}

impl<R: RemoteChannel> NodeClient<R> {
    /// Create a client with an empty store.
    pub fn new(channel: R, config: ClientConfig) -> Self {
        Self::with_store(channel, config, NodeStore::new())
    }

    /// Create a client around an existing store.
    pub fn with_store(channel: R, config: ClientConfig, store: NodeStore) -> Self {
        Self {
            channel,
            config,
            store,
        }
    }

    /// Read access to the node store.
    pub fn store(&self) -> &NodeStore {
        &self.store
    }

    /// The client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The remote channel.
    pub fn channel(&self) -> &R {
        &self.channel
    }

    /// Nodes visible for `ctx`, sized per the configuration.
    pub fn displayed(&self, ctx: &ViewContext) -> DisplayedNodes {
        project(&self.store, ctx, self.config.include_folder_size)
    }

    /// Take the store back, dropping the client.
    pub fn into_store(self) -> NodeStore {
        self.store
    }

    /// Issue a command and return the raw result.
    pub(crate) async fn issue(&self, command: &RemoteCommand) -> Result<Value> {
        let route = command.route();
        tracing::debug!(target: "cirrus::ops", %route, "issuing remote command");

        let result = self
            .channel
            .issue(route.as_ref(), command.body(&self.config.apikey))
            .await;

        if let Err(err) = &result {
            tracing::debug!(target: "cirrus::ops", %route, error = %err, "remote command failed");
        }
        Ok(result?)
    }

    /// Issue a command and decode its result.
    pub(crate) async fn issue_decoded<T: DeserializeOwned>(
        &self,
        command: &RemoteCommand,
    ) -> Result<T> {
        let value = self.issue(command).await?;
        serde_json::from_value(value).map_err(|e| NodeError::decode(command.route().as_ref(), e))
    }
}
