use crate::backend::{SlotStoreBackend, StoreFuture};
use crate::configuration::StoreConfig;
use crate::error::StoreError;
use crate::types::Slot;
use serde::Serialize;

/// Row-creation envelope the tabular-storage API expects.
#[derive(Debug, Serialize)]
struct CreateRow {
    data: Slot,
}

/// Slot store over a spreadsheet-as-database HTTP service.
///
/// Paths follow the row-level CRUD shape of the service:
/// `GET {base}/{store}`, `POST {base}/{store}` with `{ "data": row }`,
/// `DELETE {base}/{store}/id/{row_id}`. The store identifier is read through
/// [`StoreConfig`] at call time, so an identifier entered later in the admin
/// page applies to the next request without rebuilding the client.
#[derive(Clone)]
pub struct SheetStore {
    client: reqwest::Client,
    api_base_url: String,
    store: StoreConfig,
}

impl SheetStore {
    pub fn new(api_base_url: String, store: StoreConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            store,
        }
    }

    fn store_url(&self) -> Result<String, StoreError> {
        let id = self.store.store_id().ok_or(StoreError::MissingStoreId)?;
        Ok(format!("{}/{}", self.api_base_url, id))
    }
}

fn check_status(response: &reqwest::Response) -> Result<(), StoreError> {
    let status = response.status();
    if !status.is_success() {
        return Err(StoreError::Status {
            status: status.as_u16(),
        });
    }
    Ok(())
}

impl SlotStoreBackend for SheetStore {
    fn list_slots(&self) -> StoreFuture<Vec<Slot>> {
        let client = self.client.clone();
        let url = self.store_url();
        Box::pin(async move {
            let response = client.get(url?).send().await?;
            check_status(&response)?;
            Ok(response.json::<Vec<Slot>>().await?)
        })
    }

    fn create_slot(&self, slot: Slot) -> StoreFuture<()> {
        let client = self.client.clone();
        let url = self.store_url();
        Box::pin(async move {
            let response = client.post(url?).json(&CreateRow { data: slot }).send().await?;
            check_status(&response)?;
            Ok(())
        })
    }

    fn delete_slot(&self, id: String) -> StoreFuture<()> {
        let client = self.client.clone();
        let url = self.store_url();
        Box::pin(async move {
            let response = client.delete(format!("{}/id/{}", url?, id)).send().await?;
            check_status(&response)?;
            Ok(())
        })
    }
}
