use async_trait::async_trait;
use lettre::message::Mailbox;
use std::{error::Error, sync::Arc};
use validator::Validate;

use super::model::{SendRequest, SendResponse};
use crate::email::{Envelope, MailTransport};

#[derive(Debug)]
pub enum MailServiceError {
  ValidationError(String),
  TransportError(String),
}

impl Error for MailServiceError {}

impl std::fmt::Display for MailServiceError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      MailServiceError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
      MailServiceError::TransportError(msg) => write!(f, "Transport Error: {}", msg),
    }
  }
}

#[async_trait]
pub trait MailService: Send + Sync {
  async fn send_mail(&self, req: SendRequest) -> Result<SendResponse, MailServiceError>;
}

pub struct MailServiceImpl {
  sender: Mailbox,
  transport: Arc<dyn MailTransport>,
}

impl MailServiceImpl {
  pub fn new(sender: Mailbox, transport: Arc<dyn MailTransport>) -> Self {
    Self { sender, transport }
  }

  fn build_envelope(&self, req: SendRequest) -> Result<Envelope, MailServiceError> {
    req
      .validate()
      .map_err(|e| MailServiceError::ValidationError(format!("Validation failed: {}", e)))?;

    let to: Mailbox = req
      .to
      .parse()
      .map_err(|e| MailServiceError::ValidationError(format!("Invalid recipient address: {}", e)))?;

    Ok(Envelope::new(
      self.sender.clone(),
      to,
      req.subject.unwrap_or_default(),
      req.text,
    ))
  }
}

#[async_trait]
impl MailService for MailServiceImpl {
  async fn send_mail(&self, req: SendRequest) -> Result<SendResponse, MailServiceError> {
    let envelope = self.build_envelope(req)?;

    match self.transport.deliver(&envelope).await {
      Ok(receipt) => {
        tracing::info!(to = %envelope.to, response = %receipt, "Email sent");
        Ok(SendResponse {
          message: format!("Email sent: {}", receipt),
        })
      }
      Err(e) => {
        tracing::error!(to = %envelope.to, "Failed to send email: {:?}", e);
        Err(MailServiceError::TransportError(format!("{:#}", e)))
      }
    }
  }
}
