use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct SendRequest {
  #[serde(default)]
  #[validate(
    length(min = 1, message = "to is required"),
    email(message = "to must be a valid email address")
  )]
  pub to: String,
  #[serde(default)]
  pub subject: Option<String>,
  #[serde(default)]
  #[validate(length(min = 1, message = "text is required"))]
  pub text: String,
}

impl SendRequest {
  pub fn new(to: impl Into<String>, subject: Option<&str>, text: impl Into<String>) -> Self {
    Self {
      to: to.into(),
      subject: subject.map(String::from),
      text: text.into(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SendResponse {
  pub message: String,
}
