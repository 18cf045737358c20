use crate::backend::SlotStoreBackend;
use crate::banner::{BannerSnapshot, StatusBanner};
use crate::error::StoreError;
use crate::types::{Slot, SlotStatus};
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracing::{info, warn};

/// Per-operation lifecycle. One value per logical operation is the single
/// source of truth for the admin page's disabling logic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub enum OperationState {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Fetch,
    Add,
    Delete,
}

#[derive(Error, Debug)]
pub enum OperationError {
    /// The same operation is already in flight; duplicate submission rejected.
    #[error("operation already in progress")]
    Busy,
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Confirmation declined: no network call was made, nothing changed.
    Declined,
    Deleted,
}

#[derive(Debug, Default)]
struct OpStates {
    fetch: OperationState,
    add: OperationState,
    delete: OperationState,
}

impl OpStates {
    fn get_mut(&mut self, op: Operation) -> &mut OperationState {
        match op {
            Operation::Fetch => &mut self.fetch,
            Operation::Add => &mut self.add,
            Operation::Delete => &mut self.delete,
        }
    }
}

/// Everything the admin page needs to render its banners and buttons.
#[derive(Debug, Clone, Serialize)]
pub struct ManagerStatus {
    pub banner: BannerSnapshot,
    pub fetch: OperationState,
    pub add: OperationState,
    pub delete: OperationState,
}

/// The owner session core: the in-memory list of Available slots plus the
/// operations that mutate it through the slot store.
///
/// Every mutation re-fetches the list afterwards instead of patching it
/// locally, so bookings made by clients between owner actions are picked up.
#[derive(Clone)]
pub struct SlotManager<S: SlotStoreBackend> {
    store: S,
    slots: Arc<Mutex<Vec<Slot>>>,
    ops: Arc<Mutex<OpStates>>,
    banner: StatusBanner,
}

impl<S: SlotStoreBackend> SlotManager<S> {
    pub fn new(store: S, banner: StatusBanner) -> Self {
        Self {
            store,
            slots: Arc::new(Mutex::new(Vec::new())),
            ops: Arc::new(Mutex::new(OpStates::default())),
            banner,
        }
    }

    /// Current Available slots, in the order the store returned them.
    pub fn slots(&self) -> Vec<Slot> {
        self.slots.lock().unwrap().clone()
    }

    pub fn status(&self) -> ManagerStatus {
        let ops = self.ops.lock().unwrap();
        ManagerStatus {
            banner: self.banner.snapshot(),
            fetch: ops.fetch.clone(),
            add: ops.add.clone(),
            delete: ops.delete.clone(),
        }
    }

    /// Fetch the list and replace the in-memory state with the Available
    /// subset. On failure the prior list stays untouched.
    pub async fn refresh(&self) -> Result<(), OperationError> {
        self.begin(Operation::Fetch)?;
        match self.store.list_slots().await {
            Ok(all) => {
                let available: Vec<Slot> = all
                    .into_iter()
                    .filter(|slot| slot.status == SlotStatus::Available)
                    .collect();
                info!("loaded {} available slots", available.len());
                *self.slots.lock().unwrap() = available;
                self.finish(Operation::Fetch, Ok(()));
                self.banner.success("Slots loaded successfully!");
                Ok(())
            }
            Err(err) => {
                warn!("slot fetch failed: {err}");
                let message = format!("Error loading slots: {err}");
                self.banner.error(message.clone());
                self.finish(Operation::Fetch, Err(message));
                Err(err.into())
            }
        }
    }

    /// Create a fresh Available slot for the given date and time, then
    /// re-fetch.
    pub async fn add_slot(&self, date: NaiveDate, time: NaiveTime) -> Result<(), OperationError> {
        self.begin(Operation::Add)?;
        let slot = Slot::new_available(date, time);
        match self.store.create_slot(slot).await {
            Ok(()) => {
                let _ = self.refresh().await;
                self.banner
                    .success("Slot added successfully! Client page automatically updated.");
                self.finish(Operation::Add, Ok(()));
                Ok(())
            }
            Err(err) => {
                warn!("slot creation failed: {err}");
                let message = format!("Error adding slot: {err}");
                self.banner.error(message.clone());
                self.finish(Operation::Add, Err(message));
                Err(err.into())
            }
        }
    }

    /// Delete a slot the owner has confirmed. A declined confirmation
    /// abandons the operation before any network traffic.
    pub async fn delete_slot(
        &self,
        id: String,
        confirmed: bool,
    ) -> Result<DeleteOutcome, OperationError> {
        if !confirmed {
            return Ok(DeleteOutcome::Declined);
        }

        self.begin(Operation::Delete)?;
        match self.store.delete_slot(id).await {
            Ok(()) => {
                let _ = self.refresh().await;
                self.banner
                    .success("Slot deleted successfully! Client page automatically updated.");
                self.finish(Operation::Delete, Ok(()));
                Ok(DeleteOutcome::Deleted)
            }
            Err(err) => {
                warn!("slot deletion failed: {err}");
                let message = format!("Error deleting slot: {err}");
                self.banner.error(message.clone());
                // The loading state is reset on every failure path.
                self.finish(Operation::Delete, Err(message));
                Err(err.into())
            }
        }
    }

    fn begin(&self, op: Operation) -> Result<(), OperationError> {
        let mut ops = self.ops.lock().unwrap();
        let state = ops.get_mut(op);
        if *state == OperationState::Loading {
            return Err(OperationError::Busy);
        }
        *state = OperationState::Loading;
        Ok(())
    }

    fn finish(&self, op: Operation, result: Result<(), String>) {
        let mut ops = self.ops.lock().unwrap();
        *ops.get_mut(op) = match result {
            Ok(()) => OperationState::Succeeded,
            Err(reason) => OperationState::Failed(reason),
        };
    }
}
