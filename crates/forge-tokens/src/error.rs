//! Errors at the snapshot boundary.
//!
//! Synthesis itself cannot fail. Only decoding a stored snapshot can.

use crate::snapshot::SNAPSHOT_VERSION;

/// Failure to encode or decode a [`TokenSnapshot`](crate::TokenSnapshot).
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// JSON encoding or decoding failed. Malformed scales (missing or
    /// unknown step keys) land here too.
    #[error("snapshot json: {0}")]
    Json(#[from] serde_json::Error),

    /// The record was written by an incompatible engine revision.
    #[error("unsupported snapshot version {found} (expected {})", SNAPSHOT_VERSION)]
    UnsupportedVersion {
        /// Version found in the record, 0 when absent.
        found: u64,
    },
}
