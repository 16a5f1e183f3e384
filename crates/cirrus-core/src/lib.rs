//! Core types for cirrus.
//!
//! This crate provides the client-side model of a remote file tree:
//! nodes, the ordered node store, the view context supplied by the
//! user interface, and the projection that decides which nodes the
//! current view shows.

mod config;
mod context;
mod error;
mod node;
mod stats;
mod store;
mod view;

pub use config::{ClientConfig, ClientConfigBuilder};
pub use context::{Clipboard, ClipboardMode, LocationSink, SearchState, Tab, ViewContext};
pub use error::{NodeError, RemoteError, Result};
pub use node::{Node, NodeId, NodeKind, ROOT_PARENT, UNKNOWN_EXTENSION};
pub use stats::StoreStats;
pub use store::NodeStore;
pub use view::{DisplayedNode, DisplayedNodes, folder_size, project};
