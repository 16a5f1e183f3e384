//! The remote command channel seam.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use cirrus_core::RemoteError;
use serde_json::Value;

/// Type alias for boxed futures returned by the channel.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Issues a command to the remote authority and awaits its result.
///
/// Implementations own transport, authentication headers and error
/// decoding. A failure is reported as [`RemoteError`] and handed to the
/// caller of the operation without modification.
pub trait RemoteChannel: Send + Sync {
    /// Send `body` to `route` and resolve with the structured result.
    fn issue<'a>(&'a self, route: &'a str, body: Value) -> BoxFuture<'a, Result<Value, RemoteError>>;
}

impl<T: RemoteChannel + ?Sized> RemoteChannel for Arc<T> {
    fn issue<'a>(&'a self, route: &'a str, body: Value) -> BoxFuture<'a, Result<Value, RemoteError>> {
        (**self).issue(route, body)
    }
}

impl<T: RemoteChannel + ?Sized> RemoteChannel for &T {
    fn issue<'a>(&'a self, route: &'a str, body: Value) -> BoxFuture<'a, Result<Value, RemoteError>> {
        (**self).issue(route, body)
    }
}
