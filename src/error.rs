use thiserror::Error;

/// Everything that can go wrong talking to the tabular-storage backend.
///
/// Each request is a single best-effort attempt; a transport failure and a
/// non-success status both end up here and are rendered into the status
/// banner by the slot manager.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("request to slot store failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("slot store returned status {status}")]
    Status { status: u16 },

    #[error("no store identifier configured")]
    MissingStoreId,
}
