//! Identifiers for nodes created on the client.

use std::collections::HashSet;

use cirrus_core::{NodeId, NodeStore};
use uuid::Uuid;

/// A random 128-bit id rendered as 32 lowercase hex digits.
pub fn random_id() -> NodeId {
    NodeId::new(Uuid::new_v4().simple().to_string())
}

/// A random id used neither in `store` nor in `issued`.
///
/// The new id is added to `issued`, so one set can track every id
/// handed out for a batch that is not in the store yet.
pub fn fresh_id(store: &NodeStore, issued: &mut HashSet<NodeId>) -> NodeId {
    loop {
        let id = random_id();
        if !store.contains(&id) && issued.insert(id.clone()) {
            return id;
        }
    }
}
