use crate::backend::SlotStoreBackend;
use crate::configuration::{booking_link, Configuration, StoreConfig};
use crate::format::{format_date, format_time};
use crate::slot_manager::{DeleteOutcome, ManagerStatus, OperationError, SlotManager};
use crate::types::Slot;
use axum::http::StatusCode;
use axum::response::Html;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use tokio::fs;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

#[derive(Clone)]
pub struct AppState<S: SlotStoreBackend, C: Configuration> {
    pub manager: SlotManager<S>,
    pub store: StoreConfig,
    pub config: C,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AddSlotRequest {
    date: NaiveDate,
    #[serde(with = "crate::types::hh_mm")]
    time: NaiveTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DeleteSlotRequest {
    id: String,
    /// The owner's answer to the confirmation prompt. `false` abandons the
    /// operation without touching the store.
    confirmed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SetStoreIdRequest {
    store_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct BookingLinkResponse {
    link: Option<String>,
}

/// A slot plus its human-readable date/time for the list view. The raw
/// values stay ISO date / 24-hour time.
#[derive(Debug, Clone, Serialize)]
struct SlotView {
    #[serde(flatten)]
    slot: Slot,
    display_date: String,
    display_time: String,
}

pub fn app<S: SlotStoreBackend, C: Configuration>(state: AppState<S, C>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/frontend", get(get_frontend))
        .route("/slots", get(get_slots))
        .route("/refresh", post(refresh_slots))
        .route("/add-slot", post(add_slot))
        .route("/delete-slot", post(delete_slot))
        .route("/store-id", post(set_store_id))
        .route("/booking-link", get(get_booking_link))
        .route("/status", get(get_status))
        .with_state(state)
        .layer(cors)
}

pub async fn start_server<S: SlotStoreBackend, C: Configuration>(state: AppState<S, C>) {
    let port = state.config.port();
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
        .await
        .unwrap();
    info!(
        "admin surface listening on {}",
        listener.local_addr().unwrap()
    );
    axum::serve(listener, app(state)).await.unwrap();
}

fn operation_error(err: OperationError) -> (StatusCode, String) {
    match err {
        OperationError::Busy => (StatusCode::CONFLICT, err.to_string()),
        OperationError::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
    }
}

async fn get_frontend<S: SlotStoreBackend, C: Configuration>(
    State(state): State<AppState<S, C>>,
) -> Result<Html<String>, (StatusCode, String)> {
    let path = state.config.frontend_path();
    match fs::read_to_string(&path).await {
        Ok(contents) => Ok(Html(contents)),
        Err(err) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to read admin page: {err}"),
        )),
    }
}

async fn get_slots<S: SlotStoreBackend, C: Configuration>(
    State(state): State<AppState<S, C>>,
) -> Json<Vec<SlotView>> {
    let views = state
        .manager
        .slots()
        .into_iter()
        .map(|slot| SlotView {
            display_date: format_date(slot.date),
            display_time: format_time(slot.time),
            slot,
        })
        .collect();
    Json(views)
}

async fn refresh_slots<S: SlotStoreBackend, C: Configuration>(
    State(state): State<AppState<S, C>>,
) -> (StatusCode, String) {
    match state.manager.refresh().await {
        Ok(()) => (StatusCode::OK, "Slots loaded successfully".to_string()),
        Err(err) => operation_error(err),
    }
}

async fn add_slot<S: SlotStoreBackend, C: Configuration>(
    State(state): State<AppState<S, C>>,
    Json(request): Json<AddSlotRequest>,
) -> (StatusCode, String) {
    match state.manager.add_slot(request.date, request.time).await {
        Ok(()) => (StatusCode::OK, "Slot added successfully".to_string()),
        Err(err) => operation_error(err),
    }
}

async fn delete_slot<S: SlotStoreBackend, C: Configuration>(
    State(state): State<AppState<S, C>>,
    Json(request): Json<DeleteSlotRequest>,
) -> (StatusCode, String) {
    match state.manager.delete_slot(request.id, request.confirmed).await {
        Ok(DeleteOutcome::Declined) => (StatusCode::OK, "Deletion declined".to_string()),
        Ok(DeleteOutcome::Deleted) => (StatusCode::OK, "Slot deleted successfully".to_string()),
        Err(err) => operation_error(err),
    }
}

async fn set_store_id<S: SlotStoreBackend, C: Configuration>(
    State(state): State<AppState<S, C>>,
    Json(request): Json<SetStoreIdRequest>,
) -> (StatusCode, String) {
    info!("store identifier updated");
    state.store.set_store_id(request.store_id);
    // Mount-style initial fetch; a failure lands in the banner.
    let _ = state.manager.refresh().await;
    (StatusCode::OK, "Store identifier updated".to_string())
}

async fn get_booking_link<S: SlotStoreBackend, C: Configuration>(
    State(state): State<AppState<S, C>>,
) -> Json<BookingLinkResponse> {
    Json(BookingLinkResponse {
        link: booking_link(&state.config.client_base_url(), &state.store),
    })
}

async fn get_status<S: SlotStoreBackend, C: Configuration>(
    State(state): State<AppState<S, C>>,
) -> Json<ManagerStatus> {
    Json(state.manager.status())
}
