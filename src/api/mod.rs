//! API module for carrier sync
//!
//! REST interface over carrier resolution, region lookups and conversion
//! payloads.

pub mod service;
pub mod handlers;

pub use service::SyncService;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn create_rest_router(service: Arc<SyncService>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/api/v1/health", get(handlers::health))
        // Carriers
        .route("/api/v1/carriers", get(handlers::get_carriers))
        .route("/api/v1/carriers/resolve", post(handlers::resolve_carrier))
        .route("/api/v1/carriers/resolve/batch", post(handlers::resolve_carriers))
        .route("/api/v1/carriers/:code", get(handlers::get_carrier))
        // Regions
        .route("/api/v1/regions/:id", get(handlers::get_region))
        // Match keys and payloads
        .route("/api/v1/user-data/order", post(handlers::order_payload))
        .route("/api/v1/user-data/session", post(handlers::session_user_data))
        // State and middleware
        .with_state(service)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> Router {
        create_rest_router(Arc::new(SyncService::default()))
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(get("/api/v1/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_list_carriers_with_limit() {
        let (status, body) = send(get("/api/v1/carriers?limit=2")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 2);
        assert_eq!(body["carriers"][0]["code"], "AUSTRALIA_POST");
    }

    #[tokio::test]
    async fn test_get_carrier() {
        let (status, body) = send(get("/api/v1/carriers/royal_mail")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "Royal Mail");

        let (status, _) = send(get("/api/v1/carriers/NOT_A_CARRIER")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_resolve_custom_title() {
        let request = post_json(
            "/api/v1/carriers/resolve",
            serde_json::json!({"carrier_code": "custom", "title": "United Parcel Service Ground"}),
        );
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["canonical_code"], "UPS");
        assert_eq!(body["api_code"], "UPS");
    }

    #[tokio::test]
    async fn test_resolve_batch() {
        let request = post_json(
            "/api/v1/carriers/resolve/batch",
            serde_json::json!([
                {"carrier_code": "SOME_UNLISTED_CODE", "title": ""},
                {"carrier_code": "custom", "title": null},
                {"carrier_code": "fedex", "title": "FedEx"}
            ]),
        );
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["canonical_code"], "SOME_UNLISTED_CODE");
        assert_eq!(body[0]["api_code"], "OTHER");
        assert_eq!(body[1]["api_code"], "OTHER");
        assert_eq!(body[2]["api_code"], "FEDEX");
    }

    #[tokio::test]
    async fn test_region_fallback() {
        let (_, body) = send(get("/api/v1/regions/12")).await;
        assert_eq!(body["code"], "CA");

        let (status, body) = send(get("/api/v1/regions/unknown")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["code"], "unknown");
    }

    #[tokio::test]
    async fn test_order_payload() {
        let request = post_json(
            "/api/v1/user-data/order",
            serde_json::json!({
                "id": "100",
                "customer_id": "9",
                "customer_email": "A@B.com",
                "items": [{"content_id": "SKU-1", "qty": 1, "final_price": 12.5}],
                "subtotal": 12.5,
                "currency": "EUR"
            }),
        );
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user_data"]["external_id"], "9");
        assert_eq!(body["user_data"]["em"], crate::user_data::hash_value("a@b.com"));
        assert_eq!(body["custom_data"]["value"], 12.5);
        assert_eq!(body["custom_data"]["currency"], "EUR");
    }

    #[tokio::test]
    async fn test_session_user_data() {
        let request = post_json(
            "/api/v1/user-data/session",
            serde_json::json!({"id": "4", "firstname": "Sam", "gender": 1}),
        );
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ge"], crate::user_data::hash_value("male"));
    }
}
