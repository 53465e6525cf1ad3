//! HTTP endpoint turning a posted video URL into a recipe.
//!
//! `POST /api/extract-recipe` with `{"url": "..."}` answers `200` with the
//! recipe, `400` with `{"error": ...}` for bad input or unsupported
//! platforms and `500` with `{"error": ...}` for every other failure.

use crate::builder::RecipeExtractor;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use log::{error, info};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

pub const EXTRACT_PATH: &str = "/api/extract-recipe";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractRequest {
    pub url: String,
}

/// Error body shared by all failure responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

pub fn router(extractor: Arc<RecipeExtractor>) -> Router {
    Router::new()
        .route(EXTRACT_PATH, post(extract_recipe))
        .layer(CorsLayer::permissive())
        .with_state(extractor)
}

async fn extract_recipe(
    State(extractor): State<Arc<RecipeExtractor>>,
    payload: Result<Json<ExtractRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            error!("Rejected request body: {}", rejection.body_text());
            return error_response(StatusCode::BAD_REQUEST, rejection.body_text());
        }
    };

    match extractor.extract(&request.url).await {
        Ok(recipe) => Json(recipe).into_response(),
        Err(e) => {
            error!("Error: {}", e);
            let status = if e.is_client_error() {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            error_response(status, e.to_string())
        }
    }
}

/// Serve the endpoint until the process is stopped.
pub async fn serve(extractor: RecipeExtractor, bind: &str) -> std::io::Result<()> {
    let listener = TcpListener::bind(bind).await?;
    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(Arc::new(extractor))).await
}
