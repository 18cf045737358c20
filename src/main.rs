use crate::banner::StatusBanner;
use crate::configuration::{Configuration, StoreConfig};
use crate::configuration_handler::ConfigurationHandler;
use crate::http::{start_server, AppState};
use crate::sheet_store::SheetStore;
use crate::slot_manager::SlotManager;

mod backend;
mod banner;
mod configuration;
mod configuration_handler;
mod error;
mod format;
mod http;
mod sheet_store;
mod slot_manager;
#[cfg(test)]
mod testutils;
mod types;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ConfigurationHandler::from_args();
    let store = StoreConfig::new(config.initial_store_id());
    let sheet = SheetStore::new(config.api_base_url(), store.clone());
    let manager = SlotManager::new(sheet, StatusBanner::default());

    // Mount semantics: populate the list as soon as an identifier is known.
    if store.store_id().is_some() {
        if let Err(err) = manager.refresh().await {
            tracing::warn!("initial slot fetch failed: {err}");
        }
    }

    let state = AppState {
        manager,
        store,
        config,
    };
    start_server(state).await;
}
