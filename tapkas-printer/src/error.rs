//! Error types for the printing pipeline

use thiserror::Error;

/// Wireless link error types
///
/// All of these are non-fatal to the application: the ledger has already
/// committed before anything is printed, so the caller may simply retry.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The user dismissed the host's device picker. Treated as "not
    /// connected", not as a failure state.
    #[error("no device selected")]
    DeviceNotSelected,

    /// No service on the device exposes a writable characteristic
    #[error("no writable channel found on device")]
    NoWritableChannel,

    /// `send` without a connected or reconnectable device
    #[error("not connected")]
    NotConnected,

    /// A send is already in flight; concurrent requests are rejected, not
    /// queued
    #[error("printer link busy")]
    Busy,

    /// Host device selection failed
    #[error("device selection failed: {0}")]
    Selector(String),

    /// Channel-level write failure
    #[error("channel write failed: {0}")]
    Channel(String),

    /// A chunk write failed mid-stream; earlier chunks are already on the
    /// device and are not rolled back
    #[error("chunk write failed at offset {offset}: {reason}")]
    ChunkWrite { offset: usize, reason: String },
}

/// Print service error types
#[derive(Debug, Error)]
pub enum PrintError {
    #[error("transport: {0}")]
    Transport(#[from] TransportError),
}

/// Result type for print operations
pub type PrintResult<T> = Result<T, PrintError>;
