//! Remote-backed operations on the cirrus node tree.
//!
//! Every mutation is sent to the remote authority through a
//! [`RemoteChannel`] first. The local [`NodeStore`](cirrus_core::NodeStore)
//! is patched only after the remote accepted the command, and a failed
//! command is returned to the caller unchanged. Copy is the exception: it
//! is resolved on the client and never reaches the remote.

mod channel;
mod client;
mod color;
mod command;
mod copy;
mod create;
mod delete;
mod ids;
mod mark;
mod move_op;
mod naming;
mod refresh;
mod rename;

pub use channel::{BoxFuture, RemoteChannel};
pub use client::{NodeClient, Outcome};
pub use command::{CreateFolderResponse, RemoteCommand, Route, UpdateResponse};
pub use copy::{copy_allowed, plan_copy};
pub use ids::{fresh_id, random_id};
pub use move_op::move_allowed;
pub use naming::{copy_name, copy_version, ordinal, split_name, versioned_name};
pub use rename::validate_name;
