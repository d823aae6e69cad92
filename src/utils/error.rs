use axum::{
  extract::rejection::JsonRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde_json::json;

#[derive(Debug)]
pub struct AppError {
  pub status_code: StatusCode,
  pub message: String,
}

impl AppError {
  pub fn new(status_code: StatusCode, message: impl Into<String>) -> Self {
    Self {
      status_code,
      message: message.into(),
    }
  }

  pub fn bad_request(message: impl Into<String>) -> Self {
    Self::new(StatusCode::BAD_REQUEST, message)
  }

  pub fn internal_server_error(message: impl Into<String>) -> Self {
    Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    let body = Json(json!({
      "error": self.message,
      "status_code": self.status_code.as_u16(),
    }));

    (self.status_code, body).into_response()
  }
}

impl From<JsonRejection> for AppError {
  fn from(rejection: JsonRejection) -> Self {
    tracing::warn!("Rejected request body: {}", rejection.body_text());
    AppError::bad_request(format!("Invalid request body: {}", rejection.body_text()))
  }
}

impl From<crate::domains::mail::service::MailServiceError> for AppError {
  fn from(error: crate::domains::mail::service::MailServiceError) -> Self {
    use crate::domains::mail::service::MailServiceError;
    match error {
      MailServiceError::ValidationError(msg) => AppError::bad_request(msg),
      MailServiceError::TransportError(msg) => AppError::internal_server_error(format!("Failed to send email: {}", msg)),
    }
  }
}
