use axum::{
  http::{header::CONTENT_TYPE, HeaderValue, Method},
  response::Json,
  routing::get,
  Router,
};
use serde_json::{json, Value};
use tower_http::{
  cors::{Any, CorsLayer},
  trace::TraceLayer,
};

use crate::{domains::mail::rest::mail_routes, state::SharedAppState};

pub fn create_app(state: SharedAppState, cors_allowed_origins: &[String]) -> Router {
  Router::new()
    .route("/", get(health_handler))
    .merge(mail_routes())
    .with_state(state)
    .layer(create_cors_layer(cors_allowed_origins))
    .layer(TraceLayer::new_for_http())
}

pub async fn health_handler() -> Json<Value> {
  Json(json!({ "status": "ok" }))
}

/// Any origin is allowed when no valid origin is configured.
pub fn create_cors_layer(origins: &[String]) -> CorsLayer {
  let methods = [Method::GET, Method::POST, Method::OPTIONS];
  let parsed_origins: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();

  if parsed_origins.is_empty() {
    if !origins.is_empty() {
      tracing::warn!(
        configured = ?origins,
        "No configured CORS origin is a valid header value, allowing any origin"
      );
    }
    CorsLayer::new()
      .allow_methods(methods)
      .allow_headers(Any)
      .allow_origin(Any)
  } else {
    CorsLayer::new()
      .allow_methods(methods)
      .allow_headers([CONTENT_TYPE])
      .allow_origin(parsed_origins)
  }
}
