//! Cardash HTTP Server
//!
//! HTTP layer for the dashboard, built with Axum.
//!
//! # Endpoints
//!
//! - `GET /` - Dashboard page with the default chart
//! - `POST /_update` - Rebuild the chart for `{"x": ..., "y": ...}`
//!
//! # Example
//!
//! ```rust,no_run
//! use cardash::api::{serve, AppState};
//! use cardash::config::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     serve(AppState::new(), &ServerConfig::default()).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::page::UPDATE_PATH;

/// Build the router with both routes and tracing middleware
pub fn build_router(state: AppState) -> Router {
    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::page::index))
        .route(UPDATE_PATH, post(routes::update::update_chart))
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state)
}

/// Start the server
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<(), ApiError> {
    let theme = state.theme().name.clone();
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(
        "Cardash listening on http://{} (theme: {}, debug: {})",
        addr,
        theme,
        config.debug
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Cardash shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::dto::UpdateResponse;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        build_router(AppState::new())
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn update_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/_update")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_index_page() {
        let app = create_test_app();

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let page = body_string(response).await;
        assert!(page.contains("Building a dashboard is fast!"));
        assert!(page.contains("Horsepower vs. Displacement"));
        // Chart JSON sits HTML-escaped inside the srcdoc attribute.
        assert!(page.contains("&quot;x&quot;:{&quot;field&quot;:&quot;Displacement&quot;"));
        assert!(page.contains("&quot;y&quot;:{&quot;field&quot;:&quot;Cylinders&quot;"));
    }

    #[tokio::test]
    async fn test_update_chart() {
        let app = create_test_app();

        let response = app
            .oneshot(update_request(r#"{"x": "Miles_per_Gallon", "y": "Displacement"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: UpdateResponse = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body.x, "Miles_per_Gallon");
        assert_eq!(body.y, "Displacement");
        assert!(body.srcdoc.contains(r#""x":{"field":"Miles_per_Gallon""#));
        assert!(body.srcdoc.contains(r#""y":{"field":"Displacement""#));
    }

    #[tokio::test]
    async fn test_update_unknown_column() {
        let app = create_test_app();

        let response = app
            .oneshot(update_request(r#"{"x": "Weight_in_lbs", "y": "Cylinders"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["error"]["code"], "UNKNOWN_COLUMN");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("Weight_in_lbs"));
        assert!(body.get("srcdoc").is_none());
    }

    #[tokio::test]
    async fn test_update_invalid_json() {
        let app = create_test_app();

        let response = app.oneshot(update_request("not json")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_missing_field() {
        let app = create_test_app();

        let response = app
            .oneshot(update_request(r#"{"x": "Cylinders"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_update_is_deterministic() {
        let body = r#"{"x": "Cylinders", "y": "Miles_per_Gallon"}"#;

        let first = body_string(create_test_app().oneshot(update_request(body)).await.unwrap()).await;
        let second = body_string(create_test_app().oneshot(update_request(body)).await.unwrap()).await;

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let app = create_test_app();

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
