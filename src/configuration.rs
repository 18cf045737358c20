use std::path::PathBuf;
use std::sync::{Arc, RwLock};

/// Static service settings, resolved once at startup.
pub trait Configuration: Clone + Send + Sync + 'static {
    fn port(&self) -> u16;
    fn api_base_url(&self) -> String;
    fn client_base_url(&self) -> String;
    fn frontend_path(&self) -> PathBuf;
    fn initial_store_id(&self) -> Option<String>;
}

/// The one mutable configuration value: which spreadsheet-backed dataset the
/// component operates against.
///
/// There is a single interface for every source of the identifier. Callers
/// choose at composition time whether it comes from a startup constant, some
/// fetched value, or the owner typing it into the admin page; all of them end
/// up in `set_store_id`. Operations against the store are gated on the
/// identifier being present.
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    store_id: Arc<RwLock<Option<String>>>,
}

impl StoreConfig {
    pub fn new(initial: Option<String>) -> Self {
        Self {
            store_id: Arc::new(RwLock::new(initial)),
        }
    }

    pub fn store_id(&self) -> Option<String> {
        self.store_id.read().unwrap().clone()
    }

    pub fn set_store_id(&self, id: String) {
        *self.store_id.write().unwrap() = Some(id);
    }
}

/// The client-facing booking URL: base plus store identifier. Recomputed from
/// the live identifier on every call so it can never go stale.
pub fn booking_link(client_base_url: &str, store: &StoreConfig) -> Option<String> {
    store
        .store_id()
        .map(|id| format!("{}/{}", client_base_url.trim_end_matches('/'), id))
}
