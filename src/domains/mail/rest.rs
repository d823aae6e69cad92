use axum::{
  extract::{rejection::JsonRejection, Json, State},
  response::Json as JsonResponse,
  routing::{post, Router},
};

use super::model::{SendRequest, SendResponse};
use crate::{
  state::{AppState, SharedAppState},
  AppError,
};

pub fn mail_routes() -> Router<SharedAppState> {
  Router::new().route("/send", post(send_mail_handler))
}

pub async fn send_mail_handler(
  State(state): State<SharedAppState>,
  payload: Result<Json<SendRequest>, JsonRejection>,
) -> Result<JsonResponse<SendResponse>, AppError> {
  let Json(payload) = payload?;

  state.send_mail(payload).await.map(JsonResponse).map_err(Into::into)
}

#[cfg(test)]
mod tests {
  use super::super::model::{SendRequest, SendResponse};
  use crate::{
    email::{DeliveryReceipt, MockMailTransport},
    test_support::{app_with_transport, post_json, post_raw},
  };
  use axum::http::StatusCode;

  #[tokio::test]
  async fn send_endpoint_returns_confirmation() {
    let mut transport = MockMailTransport::new();
    transport
      .expect_deliver()
      .times(1)
      .returning(|_| Ok(DeliveryReceipt::new("250 2.0.0 OK")));

    let app = app_with_transport(transport);
    let payload = SendRequest::new("a@example.com", Some("Hi"), "hello");
    let (status, body) = post_json(app, "/send", &payload).await;
    assert_eq!(status, StatusCode::OK);

    let response: SendResponse = serde_json::from_slice(&body).expect("deserialize response");
    assert!(response.message.contains("sent"));
    assert!(response.message.contains("250 2.0.0 OK"));
  }

  #[tokio::test]
  async fn send_endpoint_rejects_empty_recipient() {
    let mut transport = MockMailTransport::new();
    transport.expect_deliver().never();

    let app = app_with_transport(transport);
    let (status, body) = post_raw(app, "/send", "application/json", r#"{"to": "", "text": "hello"}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let error: serde_json::Value = serde_json::from_slice(&body).expect("deserialize error");
    assert_eq!(error["status_code"], 400);
    assert!(error["error"].as_str().unwrap().contains("to"));
  }

  #[tokio::test]
  async fn send_endpoint_rejects_unparsable_recipient() {
    let mut transport = MockMailTransport::new();
    transport.expect_deliver().never();

    let app = app_with_transport(transport);
    let payload = SendRequest::new("a..b@example.com", Some("Hi"), "hello");
    let (status, body) = post_json(app, "/send", &payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let error: serde_json::Value = serde_json::from_slice(&body).expect("deserialize error");
    assert!(error["error"].as_str().unwrap().contains("Invalid recipient address"));
  }

  #[tokio::test]
  async fn send_endpoint_transport_failure() {
    let mut transport = MockMailTransport::new();
    transport
      .expect_deliver()
      .times(1)
      .returning(|_| Err(anyhow::anyhow!("auth error")));

    let app = app_with_transport(transport);
    let payload = SendRequest::new("a@example.com", Some("Hi"), "hello");
    let (status, body) = post_json(app, "/send", &payload).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(String::from_utf8_lossy(&body).contains("auth error"));
  }

  #[tokio::test]
  async fn send_endpoint_rejects_malformed_json() {
    let mut transport = MockMailTransport::new();
    transport.expect_deliver().never();

    let app = app_with_transport(transport);
    let (status, _) = post_raw(app, "/send", "application/json", r#"{"to": "a@example.com", "#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
  }

  #[tokio::test]
  async fn send_endpoint_rejects_wrong_field_types() {
    let mut transport = MockMailTransport::new();
    transport.expect_deliver().never();

    let app = app_with_transport(transport);
    let (status, _) = post_raw(app, "/send", "application/json", r#"{"to": 42, "text": "hello"}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
  }

  #[tokio::test]
  async fn send_endpoint_rejects_missing_content_type() {
    let mut transport = MockMailTransport::new();
    transport.expect_deliver().never();

    let app = app_with_transport(transport);
    let (status, _) = post_raw(app, "/send", "text/plain", r#"{"to": "a@example.com", "text": "hello"}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
  }
}
