use std::sync::Arc;

use axum::{
  body::{Body, Bytes},
  http::{Request, StatusCode},
  Router,
};
use serde::Serialize;
use tower::ServiceExt;

use crate::{app::create_app, email::MockMailTransport, state::SharedAppState};

pub fn state_with_transport(transport: MockMailTransport) -> SharedAppState {
  let sender = "Relay <relay@example.com>".parse().expect("parse sender");
  SharedAppState::new(sender, Arc::new(transport))
}

pub fn app_with_transport(transport: MockMailTransport) -> Router {
  create_app(state_with_transport(transport), &[])
}

pub async fn post_json<T: Serialize>(app: Router, uri: &str, body: &T) -> (StatusCode, Bytes) {
  let body = serde_json::to_vec(body).expect("serialize request body");
  send(app, uri, "application/json", Body::from(body)).await
}

pub async fn post_raw(app: Router, uri: &str, content_type: &str, body: &'static str) -> (StatusCode, Bytes) {
  send(app, uri, content_type, Body::from(body)).await
}

async fn send(app: Router, uri: &str, content_type: &str, body: Body) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", content_type)
    .body(body)
    .expect("build request");

  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, body)
}
