use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::server::error::ApiError;
use crate::snip::{snip_json, snip_smart, Format};

pub fn create_router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/clean", post(clean))
        .route("/snip-json", post(snip_json_direct))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[derive(Debug, Default, Deserialize)]
pub struct CleanRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SnipJsonRequest {
    #[serde(default)]
    pub text: Option<String>,
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// `POST /clean` — run the dispatcher over the supplied text. The format
/// hint defaults to `"json"` when absent.
async fn clean(Json(req): Json<CleanRequest>) -> Result<Json<Value>, ApiError> {
    let text = require_text(req.text)?;
    let format = req
        .format
        .unwrap_or_else(|| Format::Json.as_str().to_string());

    let record = snip_smart(&text, &format).into_record();
    if record.data.is_none() {
        return Err(ApiError::Extraction {
            message: "Failed to clean the input text. See details in the result.".to_string(),
            record,
        });
    }

    Ok(Json(json!({
        "data": record.data,
        "meta": { "status": record.status, "comments": record.comments },
    })))
}

/// `POST /snip-json` — invoke the value extractor directly, bypassing the
/// dispatcher.
async fn snip_json_direct(Json(req): Json<SnipJsonRequest>) -> Result<Json<Value>, ApiError> {
    let text = require_text(req.text)?;

    let record = snip_json(&text).into_record();
    if record.data.is_none() {
        return Err(ApiError::Extraction {
            message: "snipJson returned null data.".to_string(),
            record,
        });
    }

    Ok(Json(json!({
        "data": record.data,
        "meta": { "status": record.status, "comments": record.comments },
    })))
}

fn require_text(text: Option<String>) -> Result<String, ApiError> {
    text.filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::BadRequest("The \"text\" field is required.".to_string()))
}
