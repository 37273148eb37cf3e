//! Camera port — reachability of the webcam stream.

use std::future::Future;

/// Lightweight existence check against a stream URL.
///
/// Implementations must not download the stream body. Any failure counts as
/// unreachable, so the result is a plain `bool`.
pub trait StreamProbe: Send + Sync {
    /// Return `true` only when the stream answers with a success status.
    fn is_reachable(&self, stream_url: &str) -> impl Future<Output = bool> + Send;
}

impl<T: StreamProbe> StreamProbe for std::sync::Arc<T> {
    fn is_reachable(&self, stream_url: &str) -> impl Future<Output = bool> + Send {
        (**self).is_reachable(stream_url)
    }
}
