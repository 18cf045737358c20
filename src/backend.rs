use crate::error::StoreError;
use crate::types::Slot;
use std::future::Future;
use std::pin::Pin;

/// Boxed future so the trait stays object- and generic-friendly without an
/// async-trait dependency.
pub type StoreFuture<T> = Pin<Box<dyn Future<Output = Result<T, StoreError>> + Send>>;

/// The slot store contract: the three remote operations the owner surface
/// needs. Implementations perform one HTTP call per operation, no retries.
pub trait SlotStoreBackend: Clone + Send + Sync + 'static {
    /// Fetch every row of the store. Callers filter to Available.
    fn list_slots(&self) -> StoreFuture<Vec<Slot>>;
    /// Append one row. The response body is ignored.
    fn create_slot(&self, slot: Slot) -> StoreFuture<()>;
    /// Remove the row with the given id.
    fn delete_slot(&self, id: String) -> StoreFuture<()>;
}
