use std::fmt;

use lettre::message::Mailbox;

/// Connection settings for the SMTP relay. The sender lives in `AppConfig::sender`.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
  pub host: String,
  pub port: u16,
  pub username: String,
  pub password: String,
}

/// The message handed to a [`MailTransport`](super::MailTransport).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
  pub from: Mailbox,
  pub to: Mailbox,
  pub subject: String,
  pub text: String,
}

impl Envelope {
  pub fn new(from: Mailbox, to: Mailbox, subject: String, text: String) -> Self {
    Envelope { from, to, subject, text }
  }
}

/// Delivery response reported by the SMTP server, e.g. `250 2.0.0 OK`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
  pub response: String,
}

impl DeliveryReceipt {
  pub fn new(response: impl Into<String>) -> Self {
    DeliveryReceipt {
      response: response.into(),
    }
  }
}

impl fmt::Display for DeliveryReceipt {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.response)
  }
}

impl From<lettre::transport::smtp::response::Response> for DeliveryReceipt {
  fn from(response: lettre::transport::smtp::response::Response) -> Self {
    let lines = response.message().collect::<Vec<_>>().join(" ");
    DeliveryReceipt::new(format!("{} {}", response.code(), lines).trim_end().to_string())
  }
}
