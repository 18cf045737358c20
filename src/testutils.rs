use std::sync::{
    atomic::{AtomicBool, AtomicU64, Ordering},
    Arc, Mutex,
};
use std::time::Duration;

use chrono::{NaiveDate, NaiveTime};

use crate::backend::{SlotStoreBackend, StoreFuture};
use crate::error::StoreError;
use crate::types::{Slot, SlotStatus};

pub struct MockSlotStoreInner {
    pub success: AtomicBool,
    pub calls_to_list_slots: AtomicU64,
    pub calls_to_create_slot: AtomicU64,
    pub calls_to_delete_slot: AtomicU64,
    pub slots: Mutex<Vec<Slot>>,
    pub latency: Mutex<Duration>,
}

/// Counting in-memory stand-in for the tabular-storage backend. Rows live in
/// an ordered vector so list order is observable; `success` scripts failures.
#[derive(Clone)]
pub struct MockSlotStore(pub Arc<MockSlotStoreInner>);

impl MockSlotStore {
    pub fn new() -> Self {
        Self(Arc::new(MockSlotStoreInner {
            success: AtomicBool::new(true),
            calls_to_list_slots: AtomicU64::default(),
            calls_to_create_slot: AtomicU64::default(),
            calls_to_delete_slot: AtomicU64::default(),
            slots: Mutex::default(),
            latency: Mutex::new(Duration::ZERO),
        }))
    }

    pub fn seed_slot(&self, id: &str, date: NaiveDate, time: NaiveTime, status: SlotStatus) {
        self.0.slots.lock().unwrap().push(Slot {
            id: id.into(),
            date,
            time,
            status,
            client_name: None,
            client_email: None,
            booking_date: None,
            zoom_option: None,
        });
    }

    pub fn set_latency(&self, latency: Duration) {
        *self.0.latency.lock().unwrap() = latency;
    }

    fn result(&self) -> Result<(), StoreError> {
        match self.0.success.load(Ordering::SeqCst) {
            true => Ok(()),
            false => Err(StoreError::Status { status: 500 }),
        }
    }

    async fn simulate_latency(&self) {
        let latency = *self.0.latency.lock().unwrap();
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
    }
}

impl SlotStoreBackend for MockSlotStore {
    fn list_slots(&self) -> StoreFuture<Vec<Slot>> {
        let this = self.clone();
        Box::pin(async move {
            this.0.calls_to_list_slots.fetch_add(1, Ordering::SeqCst);
            this.simulate_latency().await;
            this.result()?;
            Ok(this.0.slots.lock().unwrap().clone())
        })
    }

    fn create_slot(&self, slot: Slot) -> StoreFuture<()> {
        let this = self.clone();
        Box::pin(async move {
            this.0.calls_to_create_slot.fetch_add(1, Ordering::SeqCst);
            this.simulate_latency().await;
            this.result()?;
            this.0.slots.lock().unwrap().push(slot);
            Ok(())
        })
    }

    fn delete_slot(&self, id: String) -> StoreFuture<()> {
        let this = self.clone();
        Box::pin(async move {
            this.0.calls_to_delete_slot.fetch_add(1, Ordering::SeqCst);
            this.simulate_latency().await;
            this.result()?;
            let mut slots = this.0.slots.lock().unwrap();
            let before = slots.len();
            slots.retain(|slot| slot.id != id);
            if slots.len() == before {
                return Err(StoreError::Status { status: 404 });
            }
            Ok(())
        })
    }
}
