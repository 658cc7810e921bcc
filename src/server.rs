//! HTTP surface for the generation endpoint.
//!
//! A single POST route behind a permissive CORS layer; the layer answers
//! `OPTIONS` preflights itself, so no other component runs for them.

use crate::app::App;
use crate::models::{GenerateResponse, GenerationRequest};
use crate::{Error, Result};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderName, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::error!("Generate course error: {}", self);
        let status = StatusCode::from_u16(self.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(json!({ "error": self.client_message() }))).into_response()
    }
}

/// Build the router. Extracted from [`serve`] so tests can drive the app
/// against an ephemeral listener.
pub fn create_app(app: Arc<App>) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_headers([
        header::AUTHORIZATION,
        HeaderName::from_static("x-client-info"),
        HeaderName::from_static("apikey"),
        header::CONTENT_TYPE,
    ]);

    Router::new()
        .route("/generate-course", post(generate_course))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app)
}

async fn generate_course(
    State(app): State<Arc<App>>,
    body: Bytes,
) -> Result<Json<GenerateResponse>> {
    let request: GenerationRequest = serde_json::from_slice(&body)?;
    let course = app.generate_course(&request).await?;
    Ok(Json(GenerateResponse {
        success: true,
        course,
    }))
}

/// Bind and serve until the process is stopped.
pub async fn serve(app: App, addr: &str) -> Result<()> {
    let router = create_app(Arc::new(app));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Course generation service listening on {}", addr);
    axum::serve(listener, router).await?;
    Ok(())
}
