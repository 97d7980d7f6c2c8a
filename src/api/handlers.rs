//! REST API handlers
//!
//! These handlers use the shared SyncService.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::service::{CarrierEntry, RegionLookup, Resolution, SyncService};
use crate::custom_data::ConversionPayload;
use crate::models::{CustomerProfile, OrderSnapshot, Track};
use crate::user_data::UserData;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct CarriersResponse {
    pub total: usize,
    pub carriers: Vec<CarrierEntry>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn not_found(message: String) -> ApiError {
    (StatusCode::NOT_FOUND, Json(ErrorResponse { error: message }))
}

// ============================================================================
// Query Parameters
// ============================================================================

#[derive(Deserialize)]
pub struct LimitQuery {
    pub limit: Option<usize>,
}

// ============================================================================
// Handlers
// ============================================================================

pub type AppState = Arc<SyncService>;

/// GET /api/v1/health
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

/// GET /api/v1/carriers
pub async fn get_carriers(
    State(service): State<AppState>,
    Query(params): Query<LimitQuery>,
) -> Json<CarriersResponse> {
    let carriers = service.carriers(params.limit);
    Json(CarriersResponse {
        total: carriers.len(),
        carriers,
    })
}

/// GET /api/v1/carriers/:code
pub async fn get_carrier(
    State(service): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<CarrierEntry>, ApiError> {
    service
        .carrier(&code)
        .map(Json)
        .ok_or_else(|| not_found(format!("Carrier not supported: {}", code)))
}

/// POST /api/v1/carriers/resolve
pub async fn resolve_carrier(
    State(service): State<AppState>,
    Json(track): Json<Track>,
) -> Json<Resolution> {
    Json(service.resolve(track))
}

/// POST /api/v1/carriers/resolve/batch
pub async fn resolve_carriers(
    State(service): State<AppState>,
    Json(tracks): Json<Vec<Track>>,
) -> Json<Vec<Resolution>> {
    Json(tracks.into_iter().map(|t| service.resolve(t)).collect())
}

/// GET /api/v1/regions/:id
pub async fn get_region(
    State(service): State<AppState>,
    Path(region_id): Path<String>,
) -> Json<RegionLookup> {
    Json(service.region(&region_id))
}

/// POST /api/v1/user-data/order
pub async fn order_payload(
    State(service): State<AppState>,
    Json(order): Json<OrderSnapshot>,
) -> Result<Json<ConversionPayload>, ApiError> {
    service
        .order_payload(&order)
        .map(Json)
        .ok_or_else(|| not_found("No order data".to_string()))
}

/// POST /api/v1/user-data/session
pub async fn session_user_data(
    State(service): State<AppState>,
    Json(customer): Json<CustomerProfile>,
) -> Result<Json<UserData>, ApiError> {
    service
        .session_user_data(&customer)
        .map(Json)
        .ok_or_else(|| not_found("No customer data".to_string()))
}
