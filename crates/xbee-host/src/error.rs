//! Host-side error types.

use thiserror::Error;

/// Errors surfaced by the send path and connection handle.
#[derive(Error, Debug)]
pub enum HostError {
    /// Transport write failed.
    #[error("transport I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Frame construction failed before anything hit the wire.
    #[error(transparent)]
    Api(#[from] xbee_api::ApiError),

    /// The receive task is no longer running.
    #[error("connection closed")]
    Closed,
}
